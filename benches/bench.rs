// Criterion benchmarks for Attendee Match

use attendee_match::core::{
    classify_intent, rank_attendees,
    scoring::{collect_user_profile_text, score_external_profile, score_topics},
};
use attendee_match::models::{Attendee, ExternalProfile, OnboardingAnswers, UserNetworkingProfile};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

const GOALS: &[&str] = &[
    "Finding potential investors",
    "Meeting technical co founders",
    "Exploring new job opportunities",
    "Hiring",
    "Networking casually",
    "Learning about climate tech",
];

const TOPICS: &[&str] = &[
    "AI & ML", "Startups", "Design", "Fintech", "Marketing", "Data", "Security", "SaaS",
    "Leadership", "Climate",
];

const TRAITS: &[&str] = &["Extrovert", "Introvert", "Conscientious", "Agreeable", "Calm"];

fn create_attendee(id: usize) -> Attendee {
    Attendee {
        id: id.to_string(),
        image: None,
        linked_in: ExternalProfile {
            name: format!("Attendee {}", id),
            headline: if id % 4 == 0 { "VC Partner".to_string() } else { "Engineer".to_string() },
            company: format!("Company {}", id % 17),
            past_companies: vec!["Stripe".to_string(), format!("Startup {}", id % 5)],
            universities: vec!["Stanford".to_string()],
            skills: vec!["rust".to_string(), "product".to_string(), "sales".to_string()],
            ..Default::default()
        },
        onboarding_answers: OnboardingAnswers {
            personality_traits: (0..5).map(|i| TRAITS[(id + i) % TRAITS.len()].to_string()).collect(),
            primary_goal: GOALS[id % GOALS.len()].to_string(),
            conversation_style: if id % 2 == 0 { "Deep dives" } else { "Quick intros" }.to_string(),
            favorite_topics: (0..3).map(|i| TOPICS[(id * 3 + i) % TOPICS.len()].to_string()).collect(),
        },
    }
}

fn create_user() -> UserNetworkingProfile {
    UserNetworkingProfile {
        onboarding_answers: OnboardingAnswers {
            personality_traits: TRAITS.iter().map(|t| t.to_string()).collect(),
            primary_goal: "Finding potential investors".to_string(),
            conversation_style: "Deep dives".to_string(),
            favorite_topics: vec!["AI & ML".to_string(), "Startups".to_string(), "Finance".to_string()],
        },
        linkedin: Some(json!({ "positions": [{ "company": "Stripe" }], "skills": ["rust", "go"] })),
        linkedin_profile_data_response: None,
        profile_name: Some("Jordan Lee".to_string()),
    }
}

fn bench_intent(c: &mut Criterion) {
    c.bench_function("classify_intent", |b| {
        b.iter(|| classify_intent(black_box("Exploring new job opportunities"), black_box("Senior Engineer")));
    });
}

fn bench_dimensions(c: &mut Criterion) {
    let user = create_user();
    let attendee = create_attendee(7);
    let user_text = collect_user_profile_text(&user);

    c.bench_function("score_topics", |b| {
        b.iter(|| {
            score_topics(
                black_box(&user.onboarding_answers.favorite_topics),
                black_box(&attendee.onboarding_answers.favorite_topics),
            )
        });
    });

    c.bench_function("score_external_profile", |b| {
        b.iter(|| score_external_profile(black_box(&user_text), black_box(&attendee)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let user = create_user();

    let mut group = c.benchmark_group("ranking");

    for roster_size in [10, 50, 100, 500, 1000].iter() {
        let attendees: Vec<Attendee> = (0..*roster_size).map(create_attendee).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_attendees", roster_size),
            roster_size,
            |b, _| {
                b.iter(|| rank_attendees(black_box(&user), black_box(&attendees)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_intent, bench_dimensions, bench_ranking);

criterion_main!(benches);
