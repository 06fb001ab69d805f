//! Benchmarks for history rebuild and proposal rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use intake_agent_agent::{ChatMessage, ConversationFlow, IntakeFlow};

const REPLIES: [&str; 12] = [
    "Asha",
    "Loomly",
    "I need an e-commerce store for my handmade candles",
    "E-commerce",
    "Blog, FAQ",
    "Payment Gateway (Razorpay/Stripe)",
    "Have some references",
    "Next.js",
    "Vercel",
    "I already have domain",
    "₹50,000",
    "1 month",
];

fn history(flow: &IntakeFlow, service: &str, replies: &[&str]) -> Vec<ChatMessage> {
    let mut history = vec![ChatMessage::assistant(flow.opening_message(service))];
    for reply in replies {
        let state = flow.build_state(&history, service);
        if let Some(prompt) = flow.next_prompt(&state) {
            history.push(ChatMessage::assistant(prompt));
        }
        history.push(ChatMessage::user(*reply));
    }
    history
}

/// Benchmark rebuilding state from histories of growing length
fn benchmark_build_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_state");
    let flow = IntakeFlow::new();

    for turns in [1usize, 6, 12] {
        let history = history(&flow, "Website Development", &REPLIES[..turns]);
        group.bench_with_input(BenchmarkId::from_parameter(turns), &history, |b, history| {
            b.iter(|| flow.build_state(black_box(history), "Website Development"));
        });
    }

    group.finish();
}

/// Benchmark advancing by one message
fn benchmark_advance_state(c: &mut Criterion) {
    let flow = IntakeFlow::new();
    let history = history(&flow, "Website Development", &REPLIES[..2]);
    let state = flow.build_state(&history, "Website Development");

    c.bench_function("advance_state", |b| {
        b.iter(|| flow.advance_state(black_box(&state), black_box(REPLIES[2])));
    });
}

/// Benchmark rendering the proposal for a completed conversation
fn benchmark_render_proposal(c: &mut Criterion) {
    let flow = IntakeFlow::new();
    let history = history(&flow, "Website Development", &REPLIES);
    let state = flow.build_state(&history, "Website Development");

    c.bench_function("render_proposal", |b| {
        b.iter(|| flow.render_proposal(black_box(&state)));
    });
}

criterion_group!(
    benches,
    benchmark_build_state,
    benchmark_advance_state,
    benchmark_render_proposal
);
criterion_main!(benches);
