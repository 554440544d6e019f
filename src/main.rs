use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fake_news_detector::logging::configure_logging;
use fake_news_detector::prompt::{EXAMPLE_ARTICLE, SMOKE_PROMPT};
use fake_news_detector::{
    Analyzer, Config, GeminiClient, GenerateError, Outcome, TextGenerator,
};

#[derive(Parser, Debug)]
#[command(name = "fake-news-detector")]
#[command(about = "Zero-shot fake news detection with Google Gemini")]
#[command(version)]
struct Cli {
    /// Enable debug logging to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess how likely an article is to be fake news
    Analyze {
        /// Article text; the built-in example article is used when omitted
        text: Option<String>,

        /// Read the article from a file, or `-` for stdin
        #[arg(short = 'f', long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// List models that support text generation
    ListModels,
    /// Send a short test prompt to check the key and connection
    Smoke,
}

fn read_article(text: Option<String>, file: Option<PathBuf>) -> Result<Option<String>> {
    if let Some(text) = text {
        return Ok(Some(text));
    }
    match file {
        Some(path) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read article from stdin")?;
            Ok(Some(buffer))
        }
        Some(path) => std::fs::read_to_string(&path)
            .map(Some)
            .with_context(|| format!("Failed to read article from {}", path.display())),
        None => Ok(None),
    }
}

fn print_failure(outcome: &Outcome) {
    println!("\n{}", outcome);
    print_hints(&outcome.hints());
}

fn print_error(error: &GenerateError) {
    println!("\nAn error occurred: {}", error);
    print_hints(&error.hints());
}

fn print_hints(hints: &[&str]) {
    for hint in hints {
        println!("{}", hint);
    }
}

async fn analyze(config: &Config, text: Option<String>, file: Option<PathBuf>) -> Result<i32> {
    let article = match read_article(text, file)? {
        Some(article) => {
            println!("Analyzing article...\n");
            article
        }
        None => {
            println!("Analyzing an example article...\n");
            EXAMPLE_ARTICLE.to_string()
        }
    };

    let analyzer = Analyzer::new(GeminiClient::new(config), config.model.clone());
    let outcome = analyzer.submit(&article).await;
    let code = match &outcome {
        Outcome::Complete(text) => {
            println!("LLM's Fake News Analysis:");
            println!("{}", text);
            0
        }
        Outcome::Warning(message) => {
            println!("{}", message);
            2
        }
        Outcome::Failed(_) => {
            print_failure(&outcome);
            1
        }
    };
    Ok(code)
}

async fn list_models(config: &Config) -> Result<i32> {
    let client = GeminiClient::new(config);
    match client.list_models().await {
        Ok(models) => {
            println!("Available Gemini Models:");
            for model in models.iter().filter(|m| m.supports_generate_content()) {
                println!("- {}", model.name);
            }
            Ok(0)
        }
        Err(e) => {
            print_error(&e);
            Ok(1)
        }
    }
}

async fn smoke(config: &Config) -> Result<i32> {
    let client = GeminiClient::new(config);
    println!("Sending prompt to LLM: '{}'", SMOKE_PROMPT);
    match client.generate(&config.model, SMOKE_PROMPT).await {
        Ok(text) => {
            println!("\nLLM's Response:");
            println!("{}", text);
            Ok(0)
        }
        Err(e) => {
            print_error(&e);
            Ok(1)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    configure_logging(cli.verbose);
    let config = Config::from_env();

    let code = match cli.command {
        Command::Analyze { text, file } => analyze(&config, text, file).await?,
        Command::ListModels => list_models(&config).await?,
        Command::Smoke => smoke(&config).await?,
    };
    process::exit(code);
}
