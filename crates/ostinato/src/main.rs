//! Ostinato CLI - infer simple types for λ-calculus terms.
//!
//! This binary provides two commands:
//! - `repl`: an interactive shell with history and highlighting
//! - `infer`: one-shot inference of a query given on the command line

mod repl;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ostinato")]
#[command(about = "λ-calculus type inference", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell
    Repl,
    /// Infer the type of a single query and print it
    Infer {
        /// A λ-term, optionally followed by `:: constraint`
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Repl => repl::start_repl()?,
        Commands::Infer { query } => match run_query(&query) {
            Ok(output) => println!("{output}"),
            Err(report) => {
                eprintln!("{report:?}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Parses a query and runs inference, rendering either the typed tree with
/// its type or the inference failure message. Parse errors come back as a
/// miette report pointing into the query.
fn run_query(src: &str) -> Result<String, miette::Report> {
    let query = ostinato_syntax::parse_query(src)
        .map_err(|err| miette::Report::new(err).with_source_code(src.to_string()))?;

    Ok(match &query.constraint {
        Some(constraint) => ostinato_infer::infer_constraint_show(&query.term, constraint),
        None => ostinato_infer::infer_then_show(&query.term),
    })
}
