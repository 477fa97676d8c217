//! Play one quiz end to end.
//!
//! Run with: `cargo run --example demo`
//!
//! Uses a small built-in cast and spellbook so it works offline. Set
//! `QUIZZARD_LIVE=1` to fetch from the public Harry Potter API instead
//! (`QUIZZARD_API_BASE_URL` overrides the endpoint). `RUST_LOG=quizzard=debug`
//! shows the engine's tracing output.
//!
//! The "player" answers correctly on even-numbered questions and picks the
//! first wrong option otherwise, so the results screen shows a mixed score.

use quizzard::{
    Character, House, HpApiClient, InMemorySource, QuizController, QuizDataSource, QuizPhase, Spell,
};
use tracing_subscriber::EnvFilter;

fn offline_source() -> InMemorySource {
    let cast = [
        ("Harry Potter",      "Gryffindor", "Daniel Radcliffe", "stag"),
        ("Hermione Granger",  "Gryffindor", "Emma Watson",      "otter"),
        ("Ron Weasley",       "Gryffindor", "Rupert Grint",     "Jack Russell terrier"),
        ("Luna Lovegood",     "Ravenclaw",  "Evanna Lynch",     "hare"),
        ("Cedric Diggory",    "Hufflepuff", "Robert Pattinson", ""),
        ("Severus Snape",     "Slytherin",  "Alan Rickman",     "doe"),
        ("Minerva McGonagall","Gryffindor", "Maggie Smith",     "tabby cat"),
        ("Draco Malfoy",      "Slytherin",  "Tom Felton",       ""),
    ];
    let characters = cast
        .iter()
        .map(|(name, house, actor, patronus)| {
            Character::new(*name).with_house(*house).with_actor(*actor).with_patronus(*patronus)
        })
        .collect();

    let book = [
        ("Lumos",        "Creates a small light at the wand's tip"),
        ("Expelliarmus", "Disarms your opponent"),
        ("Alohomora",    "Unlocks doors and other locked objects"),
        ("Accio",        "Summons an object to the caster"),
        ("Obliviate",    "Erases specific memories"),
        ("Riddikulus",   "Turns a boggart into something amusing"),
    ];
    let spells = book
        .iter()
        .enumerate()
        .map(|(i, (name, description))| Spell::new(format!("spell-{i}"), *name, *description))
        .collect();

    InMemorySource::new(characters, spells)
}

async fn play<D: QuizDataSource>(quiz: QuizController<D>) {
    let state = quiz.start().await;
    if state.has_error() {
        println!("Spell failed! Could not reach the wizarding archives.");
        return;
    }
    if state.phase() == QuizPhase::Idle {
        println!("Not enough data to build a quiz.");
        return;
    }

    while let Some(q) = quiz.state().current_question().cloned() {
        let state = quiz.state();
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!(
            "  Question {} of {}  [{}]",
            state.current_index() + 1,
            state.total_questions(),
            q.category
        );
        println!("  {}", q.prompt);
        for (label, option) in ["A", "B", "C", "D"].iter().zip(&q.options) {
            let marker = if *option == q.correct_answer { "✓" } else { " " };
            println!("   [{marker}] {label}. {option}");
        }

        let choice = if state.current_index() % 2 == 0 {
            q.correct_answer.clone()
        } else {
            q.options
                .iter()
                .find(|o| **o != q.correct_answer)
                .cloned()
                .unwrap_or_default()
        };
        let next = quiz.answer(&choice);
        println!("  → answered {choice:?}, score now {}", next.score());
        println!();
    }

    if let Some(outcome) = quiz.state().outcome() {
        println!("Final score: {outcome} ({}%): {}", outcome.percentage(), outcome.grade());
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if std::env::var("QUIZZARD_LIVE").is_ok_and(|v| v == "1") {
        let client = HpApiClient::from_env();
        match client.characters_by_house(House::Gryffindor).await {
            Ok(gryffindors) => println!("{} Gryffindors on record at {}", gryffindors.len(), client.base_url()),
            Err(err) => println!("Could not list Gryffindors: {err}"),
        }
        play(QuizController::new(client)).await;
    } else {
        play(QuizController::new(offline_source())).await;
    }
}
