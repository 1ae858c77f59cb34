//! pagedeck CLI - page image to PowerPoint deck assembler
//!
//! A command-line tool for packaging rendered page images as a PPTX deck.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use pagedeck::naming::DEFAULT_DECK_NAME;
use pagedeck::{PackageAssembler, PackageOptions};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Page images to PowerPoint deck assembler
#[derive(Parser)]
#[command(
    name = "pagedeck",
    author = "iyulab",
    version,
    about = "Assemble page images into a PowerPoint deck",
    long_about = "pagedeck - Package rendered page images as a PPTX slide deck.\n\n\
                  Each PNG becomes one 4:3 slide, scaled to fit and centered."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble page images into a deck
    Build {
        /// PNG files in slide order, or a single directory of page images
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file path (default: named after --source or the input directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the document the pages were rendered from
        #[arg(long)]
        source: Option<String>,

        /// Deck title
        #[arg(long)]
        title: Option<String>,

        /// Deck author
        #[arg(long)]
        author: Option<String>,

        /// Deflate level (1-9)
        #[arg(short, long, default_value = "6")]
        compression: i64,

        /// Read image headers on one thread
        #[arg(long)]
        sequential: bool,
    },

    /// Show how page images would be placed on slides
    Info {
        /// PNG files in slide order, or a single directory of page images
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Build {
            inputs,
            output,
            source,
            title,
            author,
            compression,
            sequential,
        } => {
            let pb = create_spinner("Collecting page images...");

            let (pages, pptx, output) = with_spinner(&pb, |pb| {
                let pages = resolve_inputs(&inputs)?;
                pb.set_message(format!("Assembling {} slides...", pages.len()));

                let mut options = PackageOptions::new()
                    .with_compression_level(compression)
                    .with_parallel(!sequential);
                if let Some(title) = title {
                    options = options.with_title(title);
                }
                if let Some(author) = author {
                    options = options.with_creator(author);
                }

                let pptx = pagedeck::assemble_files_with_options(&pages, options)?;

                let output = output.unwrap_or_else(|| default_output(source.as_deref(), &inputs));
                fs::write(&output, &pptx)?;
                Ok((pages, pptx, output))
            })?;

            println!(
                "{} Assembled {} slides: {} ({})",
                "✓".green().bold(),
                pages.len(),
                output.display(),
                format_size(pptx.len())
            );
        }

        Commands::Info { inputs, json } => {
            let pb = create_spinner("Reading image headers...");

            let (pages, plans) = with_spinner(&pb, |_| {
                let pages = resolve_inputs(&inputs)?;
                let images = pages
                    .iter()
                    .map(fs::read)
                    .collect::<io::Result<Vec<_>>>()?;
                let plans = PackageAssembler::default().plan(&images)?;
                Ok((pages, plans))
            })?;

            if json {
                let out = serde_json::to_string_pretty(&plans)?;
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", out)?;
                return Ok(());
            }

            println!("{}", "Deck Layout".cyan().bold());
            println!("{}", "─".repeat(72));
            println!(
                "{:>5}  {:<24} {:>11}  {:>19}  {:>19}",
                "Slide".bold(),
                "Image".bold(),
                "Pixels".bold(),
                "Offset (EMU)".bold(),
                "Extent (EMU)".bold()
            );
            for (plan, path) in plans.iter().zip(&pages) {
                let p = &plan.placement;
                println!(
                    "{:>5}  {:<24} {:>11}  {:>19}  {:>19}",
                    plan.identity.index(),
                    truncate(&path.file_name().unwrap_or_default().to_string_lossy(), 24),
                    plan.dimensions.to_string(),
                    format!("{}, {}", p.offset_x, p.offset_y),
                    format!("{} x {}", p.extent_width, p.extent_height)
                );
            }
            println!("{}", "─".repeat(72));
            println!("{}: {}", "Slides".bold(), plans.len());
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

/// Run `work` under a spinner, clearing it whether or not `work` succeeds.
fn with_spinner<T, F>(pb: &ProgressBar, work: F) -> Result<T, Box<dyn std::error::Error>>
where
    F: FnOnce(&ProgressBar) -> Result<T, Box<dyn std::error::Error>>,
{
    let result = work(pb);
    pb.finish_and_clear();
    result
}

/// Expand a single directory argument into its page images.
fn resolve_inputs(inputs: &[PathBuf]) -> pagedeck::Result<Vec<PathBuf>> {
    match inputs {
        [dir] if dir.is_dir() => pagedeck::collect_page_images(dir),
        _ => Ok(inputs.to_vec()),
    }
}

fn default_output(source: Option<&str>, inputs: &[PathBuf]) -> PathBuf {
    if let Some(source) = source {
        return PathBuf::from(pagedeck::deck_file_name(source));
    }
    match inputs {
        [dir] if dir.is_dir() => dir_deck_name(dir),
        _ => PathBuf::from(DEFAULT_DECK_NAME),
    }
}

fn dir_deck_name(dir: &Path) -> PathBuf {
    let name = dir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default();
    PathBuf::from(pagedeck::deck_file_name(&name))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max - 1).collect();
        format!("{}…", kept)
    }
}

fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let bytes = bytes as f64;
    if bytes >= KB * KB {
        format!("{:.1} MB", bytes / (KB * KB))
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}

fn print_version() {
    println!("{} {}", "pagedeck".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Assemble page images into PowerPoint decks");
    println!();
    println!("Input: PNG page images");
    println!("Output: PPTX (4:3, one picture per slide)");
    println!("Repository: https://github.com/iyulab/pagedeck");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_args() {
        let cli = Cli::try_parse_from([
            "pagedeck", "build", "a.png", "b.png", "-o", "deck.pptx", "--title", "Deck",
        ])
        .unwrap();
        match cli.command {
            Commands::Build {
                inputs,
                output,
                title,
                compression,
                ..
            } => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(output, Some(PathBuf::from("deck.pptx")));
                assert_eq!(title.as_deref(), Some("Deck"));
                assert_eq!(compression, 6);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_default_output() {
        let files = vec![PathBuf::from("page-1.png")];
        assert_eq!(
            default_output(Some("Report.pdf"), &files),
            PathBuf::from("Report.pptx")
        );
        assert_eq!(default_output(None, &files), PathBuf::from("presentation.pptx"));
    }

    #[test]
    fn test_spinner_cleared_on_error() {
        let pb = ProgressBar::hidden();
        let result: Result<(), _> = with_spinner(&pb, |_| {
            resolve_inputs(&[PathBuf::from("missing-page.png")])?;
            Err(pagedeck::Error::EmptyConversionResult.into())
        });
        assert!(result.is_err());
        assert!(pb.is_finished());
    }

    #[test]
    fn test_spinner_cleared_on_success() {
        let pb = ProgressBar::hidden();
        let value = with_spinner(&pb, |_| Ok(7)).unwrap();
        assert_eq!(value, 7);
        assert!(pb.is_finished());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short.png", 24), "short.png");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
