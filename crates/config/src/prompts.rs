//! Opening messages
//!
//! First assistant message of a conversation, keyed by service name.

use std::collections::HashMap;

/// Opening used when neither the service nor `default` has an entry
pub const FALLBACK_OPENING: &str = "Hey there! 👋 I'm excited to help you with your project. Let's get started!";

/// Built-in openings, including the `default` entry
pub fn builtin_openings() -> HashMap<String, String> {
    [
        ("Video Services", "Hey! 🎬 I'm here to help you create an amazing video. Let's figure out exactly what you need!"),
        ("Website Development", "Hi there! 🚀 Ready to build something awesome? Let's talk about your website project!"),
        ("App Development", "Hey! 📱 Ready to build your app? Let's figure out exactly what you need!"),
        ("Software Development", "Hi! 💻 Let's build some amazing software together. Tell me about your project!"),
        ("Lead Generation", "Hello! 📈 Looking to grow your leads? I'll help you put together the perfect campaign!"),
        ("Creative & Design", "Hey! 🎨 Let's create something beautiful together. Tell me about your design needs!"),
        ("SEO Optimization", "Hi! 🔍 Ready to rank higher on Google? Let's boost your visibility!"),
        ("Social Media Management", "Hey! 📱 Let's grow your social presence! Tell me about your goals."),
        ("Performance Marketing", "Hi! 🎯 Ready to run some high-converting ads? Let's get started!"),
        ("Writing & Content", "Hey! ✍️ Ready to create amazing content? Let's talk about what you need!"),
        ("Customer Support", "Hi! 🎧 Let's set up great customer support. Tell me about your needs!"),
        ("Audio Services", "Hey! 🎙️ Let's create some amazing audio together!"),
        ("default", FALLBACK_OPENING),
    ]
    .into_iter()
    .map(|(service, text)| (service.to_string(), text.to_string()))
    .collect()
}
