//! Built-in service scripts
//!
//! Data only. Order inside each list is the order questions are asked in.

use intake_agent_core::QuestionSpec;

/// `(service, questions)` pairs; `None` marks an alias entry
pub(crate) fn builtin_services() -> Vec<(&'static str, Option<Vec<QuestionSpec>>)> {
    vec![
        ("default", Some(default_questions())),
        ("Video Services", Some(video_services())),
        ("Website Development", Some(website_development())),
        ("Lead Generation", Some(lead_generation())),
        ("SEO Optimization", Some(seo_optimization())),
        ("Social Media Management", Some(social_media_management())),
        ("Performance Marketing", Some(performance_marketing())),
        ("Creative & Design", Some(creative_and_design())),
        ("Writing & Content", Some(writing_and_content())),
        ("Customer Support", Some(customer_support())),
        ("Audio Services", Some(audio_services())),
        ("App Development", None),
        ("Software Development", None),
    ]
}

fn default_questions() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new(
            "name",
            &[
                "Hey there! 👋 Before we dive in, what should I call you?",
                "Hi! I'm excited to help. What's your name?",
            ],
        )
        .with_patterns(&["name", "call you", "who are you"]),
        QuestionSpec::new(
            "company",
            &[
                "Nice to meet you, {name}! 🎉 What's your company or project called?",
                "Great to have you here, {name}! What's the name of your project?",
            ],
        )
        .with_patterns(&["company", "project name", "business", "brand"]),
        QuestionSpec::new(
            "description",
            &[
                "Awesome! Tell me a bit about what you're building. I'm curious! 🚀",
                "Sounds exciting! What exactly are you looking to create?",
            ],
        )
        .with_patterns(&["building", "describe", "tell me about", "project", "idea"]),
        QuestionSpec::new(
            "budget",
            &[
                "And what kind of budget are we working with? (Just a rough range in INR is fine!) 💰",
                "What budget do you have in mind for this? Even a ballpark helps!",
            ],
        )
        .with_patterns(&["budget", "spend", "cost", "price", "inr", "₹"])
        .with_suggestions(&["Under ₹25,000", "₹25,000 - ₹50,000", "₹50,000 - ₹1,00,000", "₹1,00,000+", "Flexible"]),
        QuestionSpec::new(
            "timeline",
            &[
                "When are you hoping to have this ready? No pressure if you're flexible! ⏰",
                "What's your ideal timeline for this project?",
            ],
        )
        .with_patterns(&["timeline", "deadline", "when", "launch", "delivery", "complete"])
        .with_suggestions(&["1-2 weeks", "1 month", "2-3 months", "Flexible"]),
    ]
}

fn video_services() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new(
            "name",
            &[
                "Hey! 🎬 Ready to create something amazing? What's your name?",
                "Hi there! Let's make some great video content. What should I call you?",
            ],
        )
        .with_patterns(&["name", "call you"]),
        QuestionSpec::new("video_type", &["Nice to meet you, {name}! What type of video are you looking for?"])
            .with_patterns(&["type", "kind", "what video"])
            .with_suggestions(&["Promotional", "Social Media", "YouTube/Vlog", "Corporate", "Explainer/Animated", "Other"]),
        QuestionSpec::new("goal", &["Great choice! What's the main goal of this video? 🎯"])
            .with_patterns(&["goal", "purpose", "objective", "why"])
            .with_suggestions(&["Brand Awareness", "Lead Generation", "Engagement", "Product Launch"]),
        QuestionSpec::new("footage", &["Do you already have footage, or do you need full production? 📹"])
            .with_patterns(&["footage", "raw", "production", "shoot"])
            .with_suggestions(&["I have footage", "Need full production", "Not sure yet"]),
        QuestionSpec::new("duration", &["How long should the final video be?"])
            .with_patterns(&["duration", "length", "how long", "seconds", "minutes"])
            .with_suggestions(&["Under 30 seconds", "30-60 seconds", "1-3 minutes", "3+ minutes"]),
        QuestionSpec::new("style", &["What style or mood are you going for? 🎨"])
            .with_patterns(&["style", "mood", "tone", "vibe", "feel"])
            .with_suggestions(&["Professional", "Fun/Energetic", "Emotional", "Cinematic", "Educational"]),
        QuestionSpec::new("platforms", &["Where will this video be shared?"])
            .with_patterns(&["platform", "where", "publish", "channel", "social"])
            .with_suggestions(&["Website", "YouTube", "Instagram", "LinkedIn", "TikTok", "Multiple"]),
        QuestionSpec::new("budget", &["What's your budget for this project? 💰"])
            .with_patterns(&["budget", "cost", "price", "spend"])
            .with_suggestions(&["Under ₹25,000", "₹25,000 - ₹60,000", "₹60,000 - ₹1,25,000", "₹1,25,000+"]),
        QuestionSpec::new("timeline", &["When do you need the final video? ⏰"])
            .with_patterns(&["timeline", "deadline", "when", "delivery"])
            .with_suggestions(&["Within 1 week", "2-4 weeks", "1-2 months", "Flexible"]),
        QuestionSpec::new(
            "notes",
            &["Any special requests or reference videos you'd like to share? (Optional, just type 'done' to skip)"],
        )
        .with_patterns(&["notes", "else", "anything", "special", "reference"])
        .with_suggestions(&["Skip this"]),
    ]
}

fn website_development() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new(
            "name",
            &[
                "Hey! 🚀 Let's build something amazing. What's your name?",
                "Hi there! Ready to create your website? What should I call you?",
            ],
        )
        .with_patterns(&["name", "call you"]),
        QuestionSpec::new("company", &["Nice to meet you, {name}! What's your company or project called?"])
            .with_patterns(&["company", "project", "business"]),
        QuestionSpec::new(
            "description",
            &[
                "Awesome! Tell me a bit about what you're building. What's the vision? 🚀",
                "Sounds exciting! What exactly are you looking to create?",
            ],
        )
        .with_patterns(&["building", "describe", "tell me", "about", "idea"]),
        QuestionSpec::new("website_type", &["What kind of website do you need? (Select all that apply) 🌐"])
            .with_patterns(&["type", "kind", "what website", "need"])
            .with_suggestions(&[
                "Landing Page",
                "Business Website",
                "Informational Website",
                "E-commerce",
                "Portfolio",
                "Web App",
                "Other",
            ])
            .multi_select(),
        QuestionSpec::new(
            "pages",
            &["Every website includes: Home, About, Contact, Privacy Policy & Terms. What additional pages do you need? (Select all that apply)"],
        )
        .with_patterns(&["pages", "sections", "features"])
        .with_suggestions(&[
            "Services",
            "Products",
            "Portfolio/Gallery",
            "Testimonials",
            "Blog",
            "FAQ",
            "Pricing",
            "Shop/Store",
            "Cart/Checkout",
            "Wishlist",
            "Order Tracking",
            "Reviews/Ratings",
            "Search",
            "Book Now",
            "Account/Login",
            "Admin Dashboard",
            "User Dashboard",
            "Analytics Dashboard",
            "Notifications",
            "Chat/Support Widget",
            "Help/Support",
            "Resources",
            "Events",
            "None",
        ])
        .multi_select(),
        QuestionSpec::new("integrations", &["What integrations do you need? (Select all that apply) 🔌"])
            .with_patterns(&["integration", "payment", "api", "third-party"])
            .with_suggestions(&[
                "Payment Gateway (Razorpay/Stripe)",
                "Email Service (Nodemailer/Resend)",
                "Delivery/Shipping Tracking",
                "None",
            ])
            .multi_select(),
        QuestionSpec::new("design", &["Do you have any designs or inspirations in mind? 🎨"])
            .with_patterns(&["design", "look", "style", "wireframe"])
            .with_suggestions(&["I have designs", "Need design help", "Have some references", "Not sure yet"]),
        QuestionSpec::new("tech", &["What technology stack would you prefer? (Select all that apply) 🛠️"])
            .with_patterns(&["tech", "platform", "wordpress", "react"])
            .with_suggestions(&[
                "WordPress",
                "Next.js",
                "React.js",
                "React.js + Node.js",
                "MERN Stack",
                "PERN Stack",
                "Shopify",
                "Shopify + Hydrogen (React)",
                "Laravel + Vue",
                "Django + React",
                "Frontend Only",
                "Backend Only",
                "No preference",
            ])
            .multi_select(),
        QuestionSpec::new("deployment", &["Where would you like the website deployed/hosted? 🚀"])
            .with_patterns(&["deploy", "hosting", "server", "cloud"])
            .with_suggestions(&[
                "Vercel",
                "Netlify",
                "AWS",
                "DigitalOcean",
                "Railway",
                "Render",
                "VPS/Custom Server",
                "Not sure yet",
            ])
            .multi_select(),
        QuestionSpec::new("domain", &["Do you have a domain name? 🌍"])
            .with_patterns(&["domain", "url", "website name"])
            .with_suggestions(&["I already have domain", "I don't have domain"]),
        QuestionSpec::new("budget", &["What's your budget for this project? 💰"])
            .with_patterns(&["budget", "cost", "price", "spend"])
            .with_suggestions(&["Under ₹20,000", "₹20,000 - ₹50,000", "₹50,000 - ₹1,00,000", "₹1,00,000+"]),
        QuestionSpec::new("timeline", &["When do you need the website ready? ⏰"])
            .with_patterns(&["timeline", "deadline", "when", "launch"])
            .with_suggestions(&["1-2 weeks", "1 month", "2-3 months", "Flexible"]),
    ]
}

fn lead_generation() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new(
            "name",
            &[
                "Hey! 📈 Ready to grow your leads? What's your name?",
                "Hi! Let's get you more customers. What should I call you?",
            ],
        )
        .with_patterns(&["name", "call you"]),
        QuestionSpec::new("business", &["Great, {name}! Tell me about your business. What do you offer?"])
            .with_patterns(&["business", "company", "do", "sell"]),
        QuestionSpec::new("target", &["Who's your ideal customer? 🎯"])
            .with_patterns(&["target", "audience", "customer", "who"]),
        QuestionSpec::new("volume", &["How many leads per month are you looking for?"])
            .with_patterns(&["volume", "many", "leads", "number"])
            .with_suggestions(&["Under 100", "100-500", "500-1000", "1000+"]),
        QuestionSpec::new("channels", &["Which channels work best for reaching your audience?"])
            .with_patterns(&["channel", "method", "how", "source"])
            .with_suggestions(&["Email", "LinkedIn", "Cold Calling", "Ads", "Mix of all"]),
        QuestionSpec::new("budget", &["What's your budget for lead generation? 💰"])
            .with_patterns(&["budget", "cost", "spend"])
            .with_suggestions(&["Under ₹25,000", "₹25,000 - ₹50,000", "₹50,000 - ₹1,00,000", "₹1,00,000+"]),
        QuestionSpec::new("timeline", &["When do you want to start the campaign? ⏰"])
            .with_patterns(&["timeline", "when", "start"])
            .with_suggestions(&["Immediately", "This week", "Next month", "Flexible"]),
    ]
}

fn seo_optimization() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new("name", &["Hey! 🔍 Ready to rank higher on Google? What's your name?"])
            .with_patterns(&["name", "call you"]),
        QuestionSpec::new("website", &["Nice to meet you, {name}! What's your website URL?"])
            .with_patterns(&["website", "url", "site"]),
        QuestionSpec::new("goals", &["What's your main goal with SEO? 🎯"])
            .with_patterns(&["goal", "achieve", "want", "need"])
            .with_suggestions(&["Rank higher", "More traffic", "More leads", "Brand visibility"]),
        QuestionSpec::new("keywords", &["Any specific keywords you want to rank for?"])
            .with_patterns(&["keyword", "search", "term", "rank for"]),
        QuestionSpec::new("competitors", &["Who are your main competitors?"])
            .with_patterns(&["competitor", "competition", "similar"]),
        QuestionSpec::new("budget", &["What's your monthly budget for SEO? 💰"])
            .with_patterns(&["budget", "cost", "spend"])
            .with_suggestions(&["Under ₹10,000/mo", "₹10,000 - ₹25,000/mo", "₹25,000 - ₹50,000/mo", "₹50,000+/mo"]),
        QuestionSpec::new("timeline", &["When would you like to start? ⏰"])
            .with_patterns(&["timeline", "when", "start"])
            .with_suggestions(&["Immediately", "This week", "Next month", "Flexible"]),
    ]
}

fn social_media_management() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new("name", &["Hey! 📱 Let's grow your social presence! What's your name?"])
            .with_patterns(&["name", "call you"]),
        QuestionSpec::new("brand", &["Nice, {name}! What's your brand or business called?"])
            .with_patterns(&["brand", "business", "company"]),
        QuestionSpec::new("platforms", &["Which platforms do you want to focus on? 📲"])
            .with_patterns(&["platform", "social", "channel"])
            .with_suggestions(&["Instagram", "Facebook", "LinkedIn", "Twitter/X", "TikTok", "All of them"]),
        QuestionSpec::new("goals", &["What's your main goal with social media?"])
            .with_patterns(&["goal", "achieve", "want"])
            .with_suggestions(&["More followers", "Engagement", "Brand awareness", "Sales/Leads"]),
        QuestionSpec::new("content", &["Do you need help with content creation too?"])
            .with_patterns(&["content", "posts", "create"])
            .with_suggestions(&["Yes, full content", "Just scheduling", "Strategy only", "All of it"]),
        QuestionSpec::new("budget", &["What's your monthly budget? 💰"])
            .with_patterns(&["budget", "cost", "spend"])
            .with_suggestions(&["Under ₹15,000/mo", "₹15,000 - ₹30,000/mo", "₹30,000 - ₹50,000/mo", "₹50,000+/mo"]),
        QuestionSpec::new("timeline", &["When do you want to kick this off? ⏰"])
            .with_patterns(&["timeline", "when", "start"])
            .with_suggestions(&["Immediately", "This week", "Next month", "Flexible"]),
    ]
}

fn performance_marketing() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new("name", &["Hey! 🎯 Ready to run some high-converting ads? What's your name?"])
            .with_patterns(&["name", "call you"]),
        QuestionSpec::new("business", &["Great, {name}! What does your business sell or offer?"])
            .with_patterns(&["business", "company", "sell", "offer"]),
        QuestionSpec::new("platforms", &["Where do you want to run ads? 📊"])
            .with_patterns(&["platform", "where", "ads"])
            .with_suggestions(&["Google Ads", "Meta (FB/IG)", "LinkedIn", "YouTube", "Multiple"]),
        QuestionSpec::new("goals", &["What's your main advertising goal?"])
            .with_patterns(&["goal", "achieve", "want", "objective"])
            .with_suggestions(&["More sales", "Lead generation", "Website traffic", "Brand awareness"]),
        QuestionSpec::new("budget", &["What's your monthly ad budget? 💰"])
            .with_patterns(&["budget", "cost", "spend", "ad spend"])
            .with_suggestions(&["Under ₹25,000/mo", "₹25,000 - ₹50,000/mo", "₹50,000 - ₹1,00,000/mo", "₹1,00,000+/mo"]),
        QuestionSpec::new("timeline", &["When do you want to launch your campaigns? ⏰"])
            .with_patterns(&["timeline", "when", "start", "launch"])
            .with_suggestions(&["Immediately", "This week", "Next month", "Flexible"]),
    ]
}

fn creative_and_design() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new("name", &["Hey! 🎨 Let's create something beautiful. What's your name?"])
            .with_patterns(&["name", "call you"]),
        QuestionSpec::new("company", &["Nice to meet you, {name}! What's your company or brand called?"])
            .with_patterns(&["company", "brand", "business"]),
        QuestionSpec::new("design_type", &["What kind of design work do you need? ✨"])
            .with_patterns(&["type", "need", "looking for", "want"])
            .with_suggestions(&["Logo", "Branding", "Social Media Graphics", "UI/UX", "Print Design", "Other"]),
        QuestionSpec::new("style", &["What style or vibe are you going for?"])
            .with_patterns(&["style", "look", "vibe", "aesthetic"])
            .with_suggestions(&["Modern/Minimal", "Bold/Colorful", "Elegant/Luxury", "Playful/Fun", "Not sure yet"]),
        QuestionSpec::new("deliverables", &["What deliverables do you need?"])
            .with_patterns(&["deliver", "files", "formats", "need"])
            .with_suggestions(&["Logo files", "Social templates", "Brand guidelines", "Print-ready files", "All of it"]),
        QuestionSpec::new("budget", &["What's your budget for this project? 💰"])
            .with_patterns(&["budget", "cost", "spend"])
            .with_suggestions(&["Under ₹10,000", "₹10,000 - ₹25,000", "₹25,000 - ₹50,000", "₹50,000+"]),
        QuestionSpec::new("timeline", &["When do you need this done? ⏰"])
            .with_patterns(&["timeline", "when", "deadline"])
            .with_suggestions(&["This week", "1-2 weeks", "1 month", "Flexible"]),
    ]
}

fn writing_and_content() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new("name", &["Hey! ✍️ Ready to create amazing content? What's your name?"])
            .with_patterns(&["name", "call you"]),
        QuestionSpec::new("company", &["Nice, {name}! What's your company or brand called?"])
            .with_patterns(&["company", "brand", "business"]),
        QuestionSpec::new("content_type", &["What type of content do you need? 📝"])
            .with_patterns(&["type", "kind", "need", "content"])
            .with_suggestions(&["Blog posts", "Website copy", "Social media", "Email campaigns", "Scripts", "Other"]),
        QuestionSpec::new("tone", &["What tone should the content have?"])
            .with_patterns(&["tone", "style", "voice", "sound"])
            .with_suggestions(&["Professional", "Friendly", "Persuasive", "Educational", "Fun/Casual"]),
        QuestionSpec::new("volume", &["How much content do you need?"])
            .with_patterns(&["volume", "how much", "many", "pieces"])
            .with_suggestions(&["1-5 pieces", "5-10 pieces", "10-20 pieces", "Ongoing monthly"]),
        QuestionSpec::new("budget", &["What's your budget for this? 💰"])
            .with_patterns(&["budget", "cost", "spend"])
            .with_suggestions(&["Under ₹5,000", "₹5,000 - ₹15,000", "₹15,000 - ₹30,000", "₹30,000+"]),
        QuestionSpec::new("timeline", &["When do you need the content? ⏰"])
            .with_patterns(&["timeline", "when", "deadline"])
            .with_suggestions(&["ASAP", "This week", "2 weeks", "Flexible"]),
    ]
}

fn customer_support() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new("name", &["Hey! 🎧 Let's set up amazing support for your customers. What's your name?"])
            .with_patterns(&["name", "call you"]),
        QuestionSpec::new("company", &["Nice to meet you, {name}! What's your company called?"])
            .with_patterns(&["company", "business", "brand"]),
        QuestionSpec::new("support_type", &["What type of support do you need? 💬"])
            .with_patterns(&["type", "kind", "need", "support"])
            .with_suggestions(&["Live chat", "Email support", "Phone support", "All channels", "Helpdesk setup"]),
        QuestionSpec::new("volume", &["How many support tickets do you handle per day?"])
            .with_patterns(&["volume", "tickets", "requests", "many"])
            .with_suggestions(&["Under 50", "50-200", "200-500", "500+"]),
        QuestionSpec::new("hours", &["What hours of coverage do you need?"])
            .with_patterns(&["hours", "availability", "24/7", "time"])
            .with_suggestions(&["Business hours", "Extended hours", "24/7", "Flexible"]),
        QuestionSpec::new("budget", &["What's your monthly budget for support? 💰"])
            .with_patterns(&["budget", "cost", "spend"])
            .with_suggestions(&["Under ₹30,000/mo", "₹30,000 - ₹60,000/mo", "₹60,000 - ₹1,00,000/mo", "₹1,00,000+/mo"]),
        QuestionSpec::new("timeline", &["When do you want to start? ⏰"])
            .with_patterns(&["timeline", "when", "start"])
            .with_suggestions(&["Immediately", "This week", "Next month", "Flexible"]),
    ]
}

fn audio_services() -> Vec<QuestionSpec> {
    vec![
        QuestionSpec::new("name", &["Hey! 🎙️ Let's create some amazing audio. What's your name?"])
            .with_patterns(&["name", "call you"]),
        QuestionSpec::new("audio_type", &["Nice, {name}! What type of audio work do you need?"])
            .with_patterns(&["type", "kind", "need", "audio"])
            .with_suggestions(&["Voiceover", "Podcast editing", "Music/Jingle", "Sound design", "Mixing/Mastering", "Other"]),
        QuestionSpec::new("purpose", &["What's this audio for? 🎵"])
            .with_patterns(&["purpose", "for", "use", "goal"])
            .with_suggestions(&["Commercial/Ad", "Podcast", "YouTube", "Corporate", "Music release", "Other"]),
        QuestionSpec::new("duration", &["How long will the final audio be?"])
            .with_patterns(&["duration", "long", "length", "minutes"])
            .with_suggestions(&["Under 1 minute", "1-5 minutes", "5-30 minutes", "30+ minutes"]),
        QuestionSpec::new("voice", &["Do you need voice talent?"])
            .with_patterns(&["voice", "talent", "speaker"])
            .with_suggestions(&["Male voice", "Female voice", "I'll provide recordings", "Not needed"]),
        QuestionSpec::new("budget", &["What's your budget for this project? 💰"])
            .with_patterns(&["budget", "cost", "spend"])
            .with_suggestions(&["Under ₹10,000", "₹10,000 - ₹25,000", "₹25,000 - ₹50,000", "₹50,000+"]),
        QuestionSpec::new("timeline", &["When do you need the final audio? ⏰"])
            .with_patterns(&["timeline", "when", "deadline"])
            .with_suggestions(&["This week", "1-2 weeks", "1 month", "Flexible"]),
    ]
}
