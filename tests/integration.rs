//! Integration tests for review sentiment classification

use review_sentiment::{
    nlp::{clean_text, MarkingStrategy},
    AppConfig, DependencyLabel, ReviewPipeline, SentimentLabel,
};
use std::sync::Arc;

fn pipeline() -> ReviewPipeline {
    ReviewPipeline::load(&AppConfig::default()).expect("default models load")
}

mod classification {
    use super::*;

    #[test]
    fn test_positive_review() {
        assert_eq!(
            pipeline().classify_review("I love this product"),
            SentimentLabel::Positive
        );
    }

    #[test]
    fn test_negative_review() {
        assert_eq!(
            pipeline().classify_review("I hate this product"),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn test_neutral_review() {
        assert_eq!(
            pipeline().classify_review("This is a product"),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_empty_review_is_neutral() {
        let p = pipeline();
        assert_eq!(p.classify_review(""), SentimentLabel::Neutral);
        assert_eq!(p.classify_review("   "), SentimentLabel::Neutral);
        assert_eq!(p.classify_review("?!... ,,"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_same_input_same_label() {
        let p = pipeline();
        for review in ["I love this product", "It is not worth it", "meh"] {
            assert_eq!(p.classify_review(review), p.classify_review(review));
        }
    }

    #[test]
    fn test_arbitrary_input_yields_a_label() {
        let p = pipeline();
        let long = "great ".repeat(2000);
        let inputs = [
            "🙂🙂🙂",
            "ÇA N'EST PAS BON",
            "no no no no no",
            "without",
            "not",
            "neg_good neg_neg_bad",
            "\t\n\r",
            "1234567890",
            long.as_str(),
        ];
        for input in inputs {
            let label = p.classify_review(input);
            assert!(matches!(
                label,
                SentimentLabel::Positive | SentimentLabel::Negative | SentimentLabel::Neutral
            ));
        }
    }
}

mod negation {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        assert_eq!(pipeline().normalizer().normalize(""), "");
    }

    #[test]
    fn test_normalize_marks_negated_adjective() {
        let out = pipeline().normalizer().normalize("This is not good");
        assert!(out.contains("neg_good"), "got {out}");
    }

    #[test]
    fn test_negation_changes_score() {
        let p = pipeline();
        let plain = p.analyze("good");
        let negated = p.analyze("not good");

        assert_eq!(plain.label, SentimentLabel::Positive);
        assert_ne!(plain.scores.compound, negated.scores.compound);
        assert!(negated.scores.compound < plain.scores.compound);
    }

    #[test]
    fn test_stock_lexicon_does_not_score_marked_words() {
        let p = pipeline();
        assert!(p.marker_coverage().is_inert());

        let analysis = p.analyze("This is not good");
        assert_eq!(analysis.normalized, "this is not neg_good");
        assert_eq!(analysis.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_token_count_invariant() {
        let p = pipeline();
        for review in [
            "Not bad at all, never disappointed, no complaints without reason.",
            "It seems to never work and I do not want to buy another one",
            "good good not good",
        ] {
            let analysis = p.analyze(review);
            assert_eq!(
                analysis.normalized.split_whitespace().count(),
                clean_text(review).split_whitespace().count()
            );
            assert_eq!(analysis.tokens.len(), clean_text(review).split_whitespace().count());
        }
    }

    #[test]
    fn test_marked_tokens_follow_a_cue() {
        let analysis = pipeline().analyze("No good reason to buy, it is not reliable.");
        assert!(!analysis.marked.is_empty());
        for &idx in &analysis.marked {
            assert!(idx > 0);
            let cue = &analysis.tokens[idx - 1].text;
            assert!(["not", "never", "no", "without"].contains(&cue.as_str()));
            assert_ne!(analysis.tokens[idx].dep, DependencyLabel::Other);
        }
    }

    #[test]
    fn test_marking_strategies_differ_on_repeated_word() {
        let mut config = AppConfig::default();
        let first = ReviewPipeline::load(&config).unwrap();
        config.normalizer.marking = MarkingStrategy::TokenOffset;
        let offset = ReviewPipeline::load(&config).unwrap();

        let review = "Good price, but the quality is not good.";
        assert_eq!(
            first.normalizer().normalize(review),
            "neg_good price but the quality is not good"
        );
        assert_eq!(
            offset.normalizer().normalize(review),
            "good price but the quality is not neg_good"
        );
    }
}

mod startup {
    use super::*;

    #[test]
    fn test_custom_word_class_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.tsv");
        std::fs::write(&path, "groovy\tADJ\nis\tCOP\nnot\tNEG\n").unwrap();

        let mut config = AppConfig::default();
        config.parser.word_classes = Some(path);
        let p = ReviewPipeline::load(&config).unwrap();

        assert_eq!(p.normalizer().normalize("it is not groovy"), "it is not neg_groovy");
    }

    #[test]
    fn test_bad_model_aborts_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.tsv");
        std::fs::write(&path, "groovy\tADJECTIVE\n").unwrap();

        let mut config = AppConfig::default();
        config.parser.word_classes = Some(path);
        let err = ReviewPipeline::load(&config).unwrap_err();
        assert!(err.is_model_error());
    }
}

mod concurrency {
    use super::*;

    #[test]
    fn test_shared_pipeline_across_threads() {
        let p = Arc::new(pipeline());
        let reviews = ["I love this product", "I hate this product", "This is a product"];
        let expected: Vec<_> = reviews.iter().map(|r| p.classify_review(r)).collect();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let p = Arc::clone(&p);
                let expected = &expected;
                scope.spawn(move || {
                    for (review, want) in reviews.iter().zip(expected) {
                        assert_eq!(p.classify_review(review), *want);
                    }
                });
            }
        });
    }
}
