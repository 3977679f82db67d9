//! `docsift` CLI — the two-choice launcher shell.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docsift::{default_output_name, Feature, FeatureRequest, SummarizeConfig};

#[derive(Parser)]
#[command(name = "docsift")]
#[command(about = "Topic-guided PDF summarizer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a PDF around a topic and write the result as a new PDF
    Summarize {
        /// Input PDF file
        input: PathBuf,

        /// Topic to summarize around
        topic: String,

        /// Maximum number of sentences to select
        #[arg(short = 'n', long, default_value_t = 8)]
        sentences: usize,

        /// Output PDF file (defaults to "<topic>_summary.pdf")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Stop-word language code
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Title line of the rendered document
        #[arg(long, default_value = "Summary")]
        title: String,

        /// Print the selected sentences to stdout
        #[arg(long)]
        print: bool,

        /// Print the summary as JSON instead of a status line
        #[arg(long)]
        json: bool,
    },

    /// Convert handwriting in a scanned document to digital text
    Handwriting {
        /// Input document file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    // Diagnostics go to stderr; stdout carries only command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match cli.command {
        Commands::Summarize {
            input,
            topic,
            sentences,
            output,
            language,
            title,
            print,
            json,
        } => cmd_summarize(input, &topic, sentences, output, language, title, print, json),
        Commands::Handwriting { input } => cmd_handwriting(input),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_summarize(
    input: PathBuf,
    topic: &str,
    sentences: usize,
    output: Option<PathBuf>,
    language: String,
    title: String,
    print: bool,
    json: bool,
) -> Result<()> {
    let document = fs::read(&input).with_context(|| format!("cannot read {}", input.display()))?;

    let config = SummarizeConfig::new()
        .with_sentence_count(sentences)
        .with_language(language)
        .with_title(title);
    let result = Feature::Summarizer.run(FeatureRequest {
        document: &document,
        topic,
        config,
    })?;

    let path = output.unwrap_or_else(|| PathBuf::from(default_output_name(topic)));
    fs::write(&path, &result.document)
        .with_context(|| format!("cannot write {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
    } else {
        println!("Summary saved to {}", path.display());
        if print {
            for text in result.summary.texts() {
                println!("\u{2022} {text}");
            }
        }
    }

    Ok(())
}

fn cmd_handwriting(input: PathBuf) -> Result<()> {
    let document = fs::read(&input).with_context(|| format!("cannot read {}", input.display()))?;

    Feature::HandwritingConverter.run(FeatureRequest {
        document: &document,
        topic: "",
        config: SummarizeConfig::default(),
    })?;

    Ok(())
}
