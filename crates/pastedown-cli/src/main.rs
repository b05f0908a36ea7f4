//! Command-line front end for pastedown.
//!
//! Reads HTML from a file, stdin, or a fetched URL and writes Markdown
//! (or extracted readable text) to stdout or a file.

mod fetch;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Extracted text shorter than this is treated as an extraction failure.
const MIN_READABLE_CHARS: usize = 50;

#[derive(Parser)]
#[command(
    name = "pastedown",
    version,
    about = "Convert HTML to Markdown, or import the readable text of a web page"
)]
struct Cli {
    /// HTML file to read, or '-' for stdin (the default)
    #[arg(value_name = "FILE", conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Fetch the HTML document from a URL instead of reading a file
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Extract readable main-content text instead of converting to Markdown
    #[arg(long)]
    extract: bool,

    /// Emit a JSON object with the output, page title, and source URL
    #[arg(long)]
    json: bool,

    /// User-Agent header for --url fetches
    #[arg(long, value_name = "AGENT", default_value = fetch::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Permit fetching localhost and private-network addresses
    #[arg(long)]
    allow_local: bool,

    /// Enable diagnostic logging on stderr (RUST_LOG overrides the filter)
    #[arg(long)]
    verbose: bool,

    /// Generate a shell completion script on stdout and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    generate_completion: Option<Shell>,

    /// Generate a roff man page on stdout and exit
    #[arg(long)]
    generate_man: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Error reading file {path}: {source}")]
    ReadInput { path: String, source: io::Error },
    #[error("Error reading stdin: {0}")]
    ReadStdin(io::Error),
    #[error("Error writing {path}: {source}")]
    WriteOutput { path: String, source: io::Error },
    #[error("Error writing output: {0}")]
    WriteStdout(io::Error),
    #[error(transparent)]
    Fetch(#[from] fetch::FetchError),
    #[error(transparent)]
    Convert(#[from] pastedown::ConversionError),
    #[error("Could not extract readable content from this page")]
    NoReadableContent,
    #[error("Error serializing JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    markdown: &'a str,
    title: Option<&'a str>,
    source_url: Option<&'a str>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.verbose {
        init_logging();
    }

    if let Some(shell) = cli.generate_completion {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "pastedown", &mut io::stdout());
        return Ok(());
    }

    if cli.generate_man {
        let man = clap_mangen::Man::new(Cli::command());
        let mut rendered = Vec::new();
        man.render(&mut rendered).map_err(CliError::WriteStdout)?;
        io::stdout()
            .write_all(&rendered)
            .map_err(CliError::WriteStdout)?;
        return Ok(());
    }

    let (html, source_url) = read_input(cli)?;

    let body = if cli.extract {
        let extracted = pastedown::extract::readable_text(&html);
        if extracted.chars().count() < MIN_READABLE_CHARS {
            return Err(CliError::NoReadableContent);
        }
        extracted
    } else {
        pastedown::convert(&html)?
    };

    let rendered = if cli.json {
        let title = pastedown::extract::extract_title(&html);
        let payload = JsonOutput {
            markdown: &body,
            title: title.as_deref(),
            source_url: source_url.as_deref(),
        };
        let mut text = serde_json::to_string_pretty(&payload)?;
        text.push('\n');
        text
    } else if body.is_empty() {
        String::new()
    } else {
        let mut text = body;
        text.push('\n');
        text
    };

    write_output(cli, &rendered)
}

fn read_input(cli: &Cli) -> Result<(String, Option<String>), CliError> {
    if let Some(raw_url) = &cli.url {
        let page = fetch::fetch_html(raw_url, &cli.user_agent, cli.allow_local)?;
        return Ok((page.body, Some(page.final_url)));
    }

    match &cli.input {
        Some(path) if path.as_os_str() != "-" => {
            let html = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.display().to_string(),
                source,
            })?;
            Ok((html, None))
        }
        _ => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .map_err(CliError::ReadStdin)?;
            Ok((html, None))
        }
    }
}

fn write_output(cli: &Cli, rendered: &str) -> Result<(), CliError> {
    match &cli.output {
        Some(path) => fs::write(path, rendered).map_err(|source| CliError::WriteOutput {
            path: path.display().to_string(),
            source,
        }),
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(CliError::WriteStdout),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
