//! unvocab CLI - vocabulary word list extraction tool
//!
//! A command-line tool for extracting (term, definition) pairs from
//! two-column CSV files and numbered vocabulary-list PDFs.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use unvocab::clean::curate::{curate_csv, AdFilter};
use unvocab::{ExtractOptions, VocabularyBatch, WordSet, WordSetBundle};

/// Vocabulary extraction from CSV and PDF word lists
#[derive(Parser)]
#[command(
    name = "unvocab",
    version,
    about = "Extract vocabulary word lists from CSV and PDF sources",
    long_about = "unvocab - vocabulary word list extraction tool.\n\n\
                  Converts two-column CSV files and numbered vocabulary-list\n\
                  PDFs into clean (term, definition) pairs.\n\n\
                  Usage:\n  \
                  unvocab <file>            Extract, auto-detecting the kind\n  \
                  unvocab <file> <output>   Extract to the given path\n  \
                  unvocab batch <dir>       Bundle a whole directory into word sets"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (for default conversion)
    input: Option<PathBuf>,

    /// Output file path (for default conversion)
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a file, auto-detecting the kind (default command)
    Convert {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Abort PDFs over this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Extract a two-column CSV file
    Csv {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Skip rows whose term starts with '#'
        #[arg(long)]
        skip_comments: bool,
    },

    /// Extract a numbered vocabulary-list PDF
    Pdf {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Abort documents over this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Aggressively clean a curated CSV (advertising text, grammar tags)
    Curate {
        /// Input CSV path
        input: PathBuf,

        /// Output path (default: rewrite the input in place)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable the built-in advertising phrase list
        #[arg(long)]
        no_ad_filter: bool,
    },

    /// Extract every PDF and CSV in a directory into a word-set bundle
    Batch {
        /// Directory holding the source files
        dir: PathBuf,

        /// Output JSON path
        #[arg(short, long, default_value = "word_sets.json")]
        output: PathBuf,

        /// Day number assigned to the first set
        #[arg(long, default_value = "1")]
        start_day: u32,
    },

    /// Show pair counts and a sample for a file
    Info {
        /// Input file path
        input: PathBuf,
    },
}

/// Output format for extracted pairs
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Two-column CSV
    Csv,
    /// JSON array of {term, definition} objects
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Handle default command (unvocab <file> [output])
    if cli.command.is_none() {
        if let Some(input) = cli.input {
            return run_convert(&input, cli.output.as_ref(), OutputFormat::Csv, None);
        } else {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            return Ok(());
        }
    }

    match cli.command.unwrap() {
        Commands::Convert {
            input,
            output,
            format,
            max_pages,
        } => run_convert(&input, output.as_ref(), format, max_pages)?,

        Commands::Csv {
            input,
            output,
            format,
            skip_comments,
        } => {
            let pb = create_spinner("Extracting CSV...");
            let mut options = ExtractOptions::default();
            if skip_comments {
                options = options.skip_comments();
            }
            let batch = unvocab::extract_csv_file(&input, &options)?;
            pb.finish_and_clear();
            write_batch(&batch, output.as_ref(), format)?;
        }

        Commands::Pdf {
            input,
            output,
            format,
            max_pages,
        } => {
            let pb = create_spinner("Extracting PDF...");
            let options = ExtractOptions::default().with_max_pages(max_pages.unwrap_or(0));
            let batch = unvocab::extract_pdf_file(&input, &options)?;
            pb.finish_and_clear();
            write_batch(&batch, output.as_ref(), format)?;
        }

        Commands::Curate {
            input,
            output,
            no_ad_filter,
        } => {
            let pb = create_spinner("Curating...");
            let data = fs::read(&input)?;
            let text = unvocab::csv::decode_text(&data)?;
            let filter = if no_ad_filter {
                AdFilter::none()
            } else {
                AdFilter::builtin()
            };
            let curated = curate_csv(&text, &filter)?;
            let rows = curated.lines().count();
            let target = output.as_ref().unwrap_or(&input);
            fs::write(target, &curated)?;
            pb.finish_and_clear();
            println!(
                "{} Curated {} rows: {}",
                "✓".green().bold(),
                rows,
                target.display()
            );
        }

        Commands::Batch {
            dir,
            output,
            start_day,
        } => run_batch(&dir, &output, start_day)?,

        Commands::Info { input } => {
            let batch = unvocab::extract_file(&input, &ExtractOptions::default())?;
            println!("{}: {}", "Source".cyan().bold(), batch.source);
            println!("{}: {}", "Pairs".cyan().bold(), batch.len());
            for pair in batch.iter().take(5) {
                println!("  {} — {}", pair.term, pair.definition);
            }
            if batch.len() > 5 {
                println!("  ... {} more", batch.len() - 5);
            }
        }
    }

    Ok(())
}

fn run_convert(
    input: &Path,
    output: Option<&PathBuf>,
    format: OutputFormat,
    max_pages: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_spinner("Extracting...");
    let options = ExtractOptions::default().with_max_pages(max_pages.unwrap_or(0));
    let batch = unvocab::extract_file(input, &options)?;
    pb.finish_and_clear();
    write_batch(&batch, output, format)
}

fn write_batch(
    batch: &VocabularyBatch,
    output: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = match format {
        OutputFormat::Csv => batch.to_csv(),
        OutputFormat::Json => batch.to_json(),
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!(
                "{} Extracted {} pairs: {}",
                "✓".green().bold(),
                batch.len(),
                path.display()
            );
        }
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
            io::stdout().write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Extracts every supported file in a directory into one word-set
/// bundle, one set per file with sequential day numbers. Files are
/// processed in parallel; per-file failures are reported and skipped.
fn run_batch(
    dir: &Path,
    output: &Path,
    start_day: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some(ext) if ext.eq_ignore_ascii_case("pdf") || ext.eq_ignore_ascii_case("csv")
            )
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(format!("no PDF or CSV files in {}", dir.display()).into());
    }

    let pb = create_spinner(&format!("Extracting {} files...", files.len()));

    let results: Vec<(PathBuf, unvocab::Result<VocabularyBatch>)> = files
        .par_iter()
        .map(|path| {
            let is_pdf = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
            let batch = if is_pdf {
                unvocab::extract_pdf_file(path, &ExtractOptions::default())
            } else {
                unvocab::extract_csv_file(path, &ExtractOptions::curated())
            };
            (path.clone(), batch)
        })
        .collect();

    pb.finish_and_clear();

    let created_at = chrono::Utc::now().to_rfc3339();
    let millis = chrono::Utc::now().timestamp_millis();
    let mut bundle = WordSetBundle::default();
    let mut day = start_day;

    for (path, result) in results {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("word-set")
            .to_string();
        match result {
            Ok(batch) => {
                let id = format!("wordset-{}-{}", name.replace(char::is_whitespace, "-"), millis);
                println!("{} {} ({} words)", "✓".green().bold(), name, batch.len());
                bundle
                    .word_sets
                    .push(WordSet::new(id, day, name, batch.pairs, created_at.clone()));
                day += 1;
            }
            Err(e) => {
                eprintln!("{} {}: {}", "skipped".yellow().bold(), path.display(), e);
            }
        }
    }

    if bundle.word_sets.is_empty() {
        return Err("no file produced any vocabulary pairs".into());
    }

    fs::write(output, serde_json::to_string_pretty(&bundle)?)?;
    println!(
        "{} Wrote {} word sets: {}",
        "✓".green().bold(),
        bundle.word_sets.len(),
        output.display()
    );
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
