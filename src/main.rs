//! CLI for the review sentiment demo
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- serve --port 8080
//! cargo run -- analyze --text "This is not good"
//! cargo run -- demo
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use review_sentiment::{
    config::{load_config, AppConfig},
    web::{self, AppState},
    ReviewPipeline,
};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "review_sentiment")]
#[command(version)]
#[command(about = "Sentiment analysis for product reviews", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overrides the config file
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the review form
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Classify one review
    Analyze {
        /// Review text
        #[arg(short, long)]
        text: String,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through every pipeline step
    Demo {
        /// Review text
        #[arg(short, long, default_value = "The blender is not good, I would never buy it again!")]
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    let log_level = match config.logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(config.logging.ansi)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let pipeline = match ReviewPipeline::load(&config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            error!(error = %e, "Failed to load models");
            return Err(e).context("startup aborted");
        }
    };

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let addr = config.bind_addr()?;
            info!(%addr, "Starting web demo");
            web::serve(AppState::new(pipeline), addr).await?;
        }
        Commands::Analyze { text, json } => {
            run_analyze(&pipeline, &text, json)?;
        }
        Commands::Demo { text } => {
            run_demo(&pipeline, &text);
        }
    }

    Ok(())
}

fn run_analyze(pipeline: &ReviewPipeline, text: &str, json: bool) -> Result<()> {
    let analysis = pipeline.analyze(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("Review:     {}", analysis.review);
    println!("Normalized: {}", analysis.normalized);
    println!(
        "Scores:     neg {:.3}  neu {:.3}  pos {:.3}  compound {:+.4}",
        analysis.scores.neg, analysis.scores.neu, analysis.scores.pos, analysis.scores.compound
    );
    println!("Label:      {}", analysis.label);
    Ok(())
}

fn run_demo(pipeline: &ReviewPipeline, text: &str) {
    println!("\nReview Sentiment Pipeline Demo\n");
    println!("Input text: \"{}\"\n", text);

    let analysis = pipeline.analyze(text);

    println!("1. CLEANING");
    println!("───────────");
    println!("   {}\n", analysis.cleaned);

    println!("2. TOKENS");
    println!("─────────");
    for (i, token) in analysis.tokens.iter().enumerate() {
        let mark = if analysis.marked.contains(&i) { "  <- negated" } else { "" };
        println!(
            "   {:>2} {:15} {:6} {:6}{}",
            i,
            token.text,
            token.class.tag(),
            token.dep.code(),
            mark
        );
    }

    println!("\n3. NEGATION MARKING ({:?})", pipeline.normalizer().strategy());
    println!("──────────────────────");
    println!("   {}\n", analysis.normalized);

    println!("4. SCORES ({})", pipeline.classifier().scorer_name());
    println!("──────────");
    println!("   neg      {:.3}", analysis.scores.neg);
    println!("   neu      {:.3}", analysis.scores.neu);
    println!("   pos      {:.3}", analysis.scores.pos);
    println!("   compound {:+.4}\n", analysis.scores.compound);

    println!("5. LABEL");
    println!("────────");
    println!("   {}\n", analysis.label);

    let coverage = pipeline.marker_coverage();
    if coverage.is_inert() {
        println!("Note: the scorer has no lexicon entries for negation-marked words,");
        println!("so a marked word contributes no polarity.\n");
    }
}
