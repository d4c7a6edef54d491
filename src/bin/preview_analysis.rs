//! Preview binary - analyzes a message from the command line and prints
//! the result without starting the server.
//!
//! Usage:
//!   cargo run --bin preview -- "Hey, I need the report ASAP" japanese
//!   cargo run --bin preview -- "Thank you, please take your time"
//!
//! The target language defaults to "japanese". The artificial latency is
//! skipped so the output is immediate.

use anyhow::{bail, Result};
use converse_easy::analysis::Analyzer;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(message) = args.next() else {
        bail!("usage: preview <message> [target-language]");
    };
    let target_language = args.next().unwrap_or_else(|| "japanese".to_string());

    let analyzer = Analyzer::instant();
    let result = analyzer.analyze(&message, &target_language).await?;

    println!("=== Translation ===");
    println!("{}\n", result.translated_text);

    println!("=== Cultural Nuances ===");
    if result.cultural_nuances.is_empty() {
        println!("No issues found.");
    } else {
        for nuance in &result.cultural_nuances {
            println!("[{:?}] {}", nuance.severity, nuance.phrase);
            println!("  Issue:      {}", nuance.issue);
            println!("  Suggestion: {}", nuance.suggestion);
        }
    }

    println!("\n=== Tone ===");
    let tone = &result.tone_analysis;
    println!("Overall:    {}", tone.overall);
    println!("Formality:  {}", tone.formality);
    println!("Politeness: {}/10", tone.politeness);
    println!("Urgency:    {}/10", tone.urgency);
    for suggestion in &tone.suggestions {
        println!("  - {}", suggestion);
    }

    println!("\nConfidence: {:.2}", result.confidence);

    Ok(())
}
