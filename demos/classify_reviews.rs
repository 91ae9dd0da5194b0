//! Example: classify a handful of product reviews
//!
//! Shows the normalized text next to each label, with both marking
//! strategies.
//!
//! Run:
//! ```bash
//! cargo run --example classify_reviews
//! ```

use review_sentiment::{AppConfig, MarkingStrategy, ReviewPipeline};

fn main() -> anyhow::Result<()> {
    println!("═══════════════════════════════════════════════════════════");
    println!("   Product Review Sentiment Demo");
    println!("═══════════════════════════════════════════════════════════\n");

    let reviews = [
        "I love this product!",
        "I hate this product.",
        "This is a product.",
        "This is not good.",
        "Good price, but the quality is not good.",
        "No good reason to buy it. It seems to never work.",
        "Works without breaking, never disappointed!",
    ];

    for strategy in [MarkingStrategy::FirstOccurrence, MarkingStrategy::TokenOffset] {
        let mut config = AppConfig::default();
        config.normalizer.marking = strategy;
        let pipeline = ReviewPipeline::load(&config)?;

        println!("Marking: {:?}", strategy);
        println!("──────────────────────────────────────────────");
        for review in reviews {
            let analysis = pipeline.analyze(review);
            println!(
                "  {:9} {:+.4}  {}",
                analysis.label.as_str(),
                analysis.scores.compound,
                analysis.normalized
            );
        }
        println!();
    }

    Ok(())
}
