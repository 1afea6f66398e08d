//! Textlens CLI
//!
//! Usage:
//!   textlens --text "your text here"           # Stats for one text
//!   textlens --file notes.md --sentiment       # Stats + sentiment verdict
//!   textlens --file notes.md --export reports  # Write a .csv report
//!   textlens --interactive                     # Live editing session
//!   textlens --text "text" --json              # JSON output

use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use textlens::core::{
    report_rows, save_report, AnalysisSession, ClassifierConfig, ReportFormat, SentimentClassifier,
};
use textlens::types::{AnalysisStatus, SentimentVerdict, TextStatistics};
use textlens::{DEFAULT_DELIMITER, DEFAULT_SENTIMENT_DELAY_MS, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "textlens",
    version = VERSION,
    about = "Textlens - live text statistics and keyword sentiment",
    long_about = "Textlens computes word, character, sentence and paragraph counts,\n\
                  the most frequent and longest word, and a keyword-based sentiment\n\
                  verdict for a piece of text.\n\n\
                  Input: --text, --file, or stdin when neither is given.\n\n\
                  Interactive commands:\n  \
                  :sentiment  Classify the current document\n  \
                  :export     Write a report to --export (default ./reports)\n  \
                  :clear      Start a new document\n  \
                  quit        Exit"
)]
struct Args {
    /// Text to analyze
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Read text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Interactive mode - each line is appended to the document
    #[arg(short, long)]
    interactive: bool,

    /// Also classify sentiment
    #[arg(short, long)]
    sentiment: bool,

    /// Directory to write the delimited report into
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Report field delimiter
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Artificial sentiment latency in milliseconds
    #[arg(long, default_value_t = DEFAULT_SENTIMENT_DELAY_MS)]
    delay_ms: u64,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// JSON shape for single-shot output
#[derive(Serialize)]
struct JsonOutput<'a> {
    stats: &'a TextStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment: Option<&'a AnalysisStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let classifier = SentimentClassifier::with_config(ClassifierConfig::with_delay_ms(args.delay_ms));

    if args.interactive {
        run_interactive(&args, &classifier).await
    } else {
        let text = read_input(&args)?;
        run_single(text, &args, &classifier).await
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "textlens=debug" } else { "textlens=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Text from --text, --file, or stdin
fn read_input(args: &Args) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("cannot read stdin")?;
    Ok(text)
}

/// Run single evaluation
async fn run_single(text: String, args: &Args, classifier: &SentimentClassifier) -> Result<()> {
    let mut session = AnalysisSession::new();
    session.set_text(text);

    let sentiment = if args.sentiment {
        if !args.json {
            print_analyzing(args.no_color);
        }
        Some(analyze_sentiment(&mut session, classifier).await)
    } else {
        None
    };

    let report = match args.export {
        Some(ref dir) => Some(export(&session, args, dir)?),
        None => None,
    };

    if args.json {
        let output = JsonOutput {
            stats: session.stats(),
            sentiment: sentiment.as_ref(),
            report: report.map(|p| p.display().to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_stats(session.stats());
    if let Some(ref status) = sentiment {
        print_status(status, args.no_color);
    }
    if let Some(path) = report {
        println!("{}", format!("Report saved: {}", path.display()).cyan());
    }
    Ok(())
}

/// Run interactive editing session
async fn run_interactive(args: &Args, classifier: &SentimentClassifier) -> Result<()> {
    let mut session = AnalysisSession::new();
    let export_dir = args.export.clone().unwrap_or_else(|| PathBuf::from("./reports"));

    print_header(args.no_color);
    println!("Type text and press Enter to append it. Commands: :sentiment :export :clear quit");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(&session, args.no_color));
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim_end_matches(['\n', '\r']);
        match line.trim() {
            "quit" | "exit" => {
                println!("\nSession ended. Updates: {}", session.update_count());
                break;
            }
            ":sentiment" => {
                print_analyzing(args.no_color);
                let status = analyze_sentiment(&mut session, classifier).await;
                print_status(&status, args.no_color);
            }
            ":export" => match export(&session, args, &export_dir) {
                Ok(path) => println!("{}", format!("  Report saved: {}", path.display()).cyan()),
                Err(e) => println!("{}", format!("  Export failed: {:#}", e).red()),
            },
            ":clear" => {
                session.reset();
                println!("{}", "  Document cleared".dimmed());
            }
            _ => {
                let chunk = if session.text().is_empty() {
                    line.to_string()
                } else {
                    format!("\n{}", line)
                };
                let stats = session.push_text(&chunk);
                println!("{}", format_stats_line(stats, args.no_color));
            }
        }
    }

    Ok(())
}

/// Classify the session text, returning the resulting status
async fn analyze_sentiment(session: &mut AnalysisSession, classifier: &SentimentClassifier) -> AnalysisStatus {
    match session.run_sentiment(classifier).await {
        Ok(status) => status.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "sentiment request refused");
            session.status().clone()
        }
    }
}

fn export(session: &AnalysisSession, args: &Args, dir: &Path) -> Result<PathBuf> {
    let format = ReportFormat {
        delimiter: args.delimiter,
    };
    save_report(session.stats(), format, dir).context("export failed")
}

/// Print header
fn print_header(no_color: bool) {
    let title = format!("Textlens v{} - Interactive", VERSION);
    if no_color {
        println!("========================================");
        println!("  {}", title);
        println!("========================================");
    } else {
        println!("{}", "╔════════════════════════════════════════╗".bold());
        println!("{}", format!("║  {:<38}║", title).bold());
        println!("{}", "╚════════════════════════════════════════╝".bold());
    }
    println!();
}

/// Prompt showing the current sentiment status
fn format_prompt(session: &AnalysisSession, no_color: bool) -> String {
    let status = session.status();
    let words = session.stats().word_count;
    if no_color {
        format!("[{} | {} words] > ", status, words)
    } else {
        format!(
            "{}[{} | {} words]{} > ",
            status.color_code(),
            status,
            words,
            AnalysisStatus::color_reset()
        )
    }
}

/// One-line stats summary after each edit
fn format_stats_line(stats: &TextStatistics, no_color: bool) -> String {
    let line = format!(
        "  words={} | chars={} | no_spaces={} | sentences={} | paragraphs={}",
        stats.word_count,
        stats.char_count,
        stats.char_count_no_spaces,
        stats.sentence_count,
        stats.paragraph_count
    );
    if no_color {
        line
    } else {
        line.dimmed().to_string()
    }
}

/// Stat table, same rows and order as the exported report
fn print_stats(stats: &TextStatistics) {
    for line in format_stats_table(stats) {
        println!("{}", line);
    }
}

/// Boxed table lines; both columns sized to their widest cell
fn format_stats_table(stats: &TextStatistics) -> Vec<String> {
    let rows = report_rows(stats);
    let width = rows.iter().map(|(metric, _)| metric.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.chars().count()).max().unwrap_or(0);
    let border = "─".repeat(width + value_width + 5);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("┌{}┐", border));
    for (metric, value) in rows {
        lines.push(format!(
            "│ {:<width$} │ {:<value_width$} │",
            metric,
            value,
            width = width,
            value_width = value_width
        ));
    }
    lines.push(format!("└{}┘", border));
    lines
}

fn print_analyzing(no_color: bool) {
    if no_color {
        println!("  Analyzing sentiment...");
    } else {
        println!("{}", "  ⏳ Analyzing sentiment...".yellow());
    }
}

/// Print sentiment status
fn print_status(status: &AnalysisStatus, no_color: bool) {
    match status {
        AnalysisStatus::Completed(verdict) => print_verdict(verdict, no_color),
        AnalysisStatus::Error(reason) => {
            let msg = format!(
                "  ⚠ {} [{} / {}] - run :sentiment to retry",
                reason.description(),
                status.reason().code(),
                reason.code()
            );
            println!("{}", if no_color { msg } else { msg.red().to_string() });
        }
        AnalysisStatus::Idle => {
            let msg = format!("  Nothing to analyze yet [{}]", status.reason().code());
            println!("{}", if no_color { msg } else { msg.dimmed().to_string() });
        }
        AnalysisStatus::Analyzing => {}
    }
}

fn print_verdict(verdict: &SentimentVerdict, no_color: bool) {
    if no_color {
        println!("  {}", verdict.to_parseable_string());
    } else {
        println!("  {}", verdict.to_terminal_string());
    }
}

// =============================================================================
// TESTS
// =============================================================================
