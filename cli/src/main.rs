//! repaginate CLI - overflow-driven re-pagination tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use repaginate::paginate::is_overflowing;
use repaginate::{
    Document, JsonFormat, LayoutMetrics, LayoutOracle, MonospaceOracle, PageLayout,
    PaginationOptions, PaginationReport, Paginator,
};

#[derive(Parser)]
#[command(name = "repaginate")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Re-paginate rendered print documents that overflow their pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split overflowing pages and renumber footers
    Paginate {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the pagination report as JSON to this file
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long, conflicts_with = "text")]
        compact: bool,

        /// Output a plain-text page dump instead of JSON
        #[arg(long)]
        text: bool,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Show measured page heights without changing anything
    Inspect {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Show version information
    Version,
}

/// Pagination and measurement tunables shared by all commands.
#[derive(Args)]
struct Tuning {
    /// Page height above which a page overflows (px)
    #[arg(long, env = "REPAGINATE_THRESHOLD", default_value_t = repaginate::paginate::PAGE_HEIGHT_THRESHOLD)]
    threshold: f32,

    /// Cut line measured from the page top (px)
    #[arg(long, env = "REPAGINATE_CONTENT_LIMIT", default_value_t = repaginate::paginate::CONTENT_LIMIT)]
    content_limit: f32,

    /// Minimum visible text height for splitting an insight box (px)
    #[arg(long, default_value_t = repaginate::paginate::MIN_VISIBLE_ALLOWANCE)]
    min_visible: f32,

    /// Maximum number of pages visited in one pass
    #[arg(long, default_value_t = repaginate::paginate::MAX_ITERATIONS)]
    max_iterations: usize,

    /// Tolerance for treating a block as starting its page (px)
    #[arg(long, default_value_t = repaginate::paginate::TOP_EPSILON)]
    top_epsilon: f32,

    /// Line height of the monospace layout (px)
    #[arg(long)]
    line_height: Option<f32>,

    /// Glyph advance of the monospace layout (px)
    #[arg(long)]
    glyph_advance: Option<f32>,
}

impl Tuning {
    fn options(&self) -> PaginationOptions {
        PaginationOptions::new()
            .with_page_height_threshold(self.threshold)
            .with_content_limit(self.content_limit)
            .with_min_visible_allowance(self.min_visible)
            .with_max_iterations(self.max_iterations)
            .with_top_epsilon(self.top_epsilon)
    }

    fn metrics(&self) -> LayoutMetrics {
        let mut metrics = LayoutMetrics::a4();
        if let Some(px) = self.line_height {
            metrics = metrics.with_line_height(px);
        }
        if let Some(px) = self.glyph_advance {
            metrics = metrics.with_glyph_advance(px);
        }
        metrics
    }

    fn paginator(&self) -> Paginator {
        Paginator::new()
            .with_metrics(self.metrics())
            .with_options(self.options())
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Paginate {
            input,
            output,
            report,
            compact,
            text,
            tuning,
        } => cmd_paginate(
            &input,
            output.as_deref(),
            report.as_deref(),
            compact,
            text,
            &tuning,
        ),
        Commands::Inspect { input, tuning } => cmd_inspect(&input, &tuning),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_paginate(
    input: &Path,
    output: Option<&Path>,
    report_path: Option<&Path>,
    compact: bool,
    text: bool,
    tuning: &Tuning,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Paginating {}", input.display());
    let result = tuning.paginator().paginate_file(input)?;

    let rendered = if text {
        result.to_text()
    } else if compact {
        result.to_json(JsonFormat::Compact)?
    } else {
        result.to_json(JsonFormat::Pretty)?
    };

    if let Some(path) = report_path {
        fs::write(path, result.report_json(JsonFormat::Pretty)?)?;
    }

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
        print_summary(&result.report);
    } else {
        println!("{}", rendered);
        // Keep stdout clean for piping; the summary goes to stderr.
        eprint_warnings(&result.report);
    }

    Ok(())
}

fn print_summary(report: &PaginationReport) {
    println!();
    println!("{}", "Pagination Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Pages before".bold(), report.pages_before);
    println!("{}: {}", "Pages after".bold(), report.pages_after);
    println!("{}: {}", "Steps".bold(), report.steps);
    println!("{}: {}", "Overflowing pages".bold(), report.overflowing_pages);
    println!("{}: {}", "Blocks split".bold(), report.blocks_split);
    println!("{}: {}", "Blocks moved".bold(), report.blocks_moved);
    eprint_warnings(report);
}

fn eprint_warnings(report: &PaginationReport) {
    if report.iteration_cap_hit {
        eprintln!("{}", "Iteration cap reached; output is partial".yellow().bold());
    }
    for warning in &report.warnings {
        eprintln!("{}: {}", "Warning".yellow(), warning);
    }
}

fn cmd_inspect(input: &Path, tuning: &Tuning) -> Result<(), Box<dyn std::error::Error>> {
    let options = tuning.options();
    options.validate()?;
    let doc = Document::from_path(input)?;
    let oracle = MonospaceOracle::new(tuning.metrics());

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Content pages".bold(), doc.content_page_count());

    println!();
    println!("{}", "Pages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let mut overflowing = 0;
    for (idx, page) in doc.pages.iter().enumerate() {
        let height = match oracle.page_rect(&doc, idx) {
            Ok(rect) => format!("{:>7.0}px", rect.height()),
            Err(_) => format!("{:>9}", "?"),
        };
        let kind = if page.is_cover() {
            "cover".dimmed().to_string()
        } else {
            page.layout.shape_name().to_string()
        };
        let status = if is_overflowing(&doc, idx, &oracle, &options) {
            overflowing += 1;
            "overflow".red().bold().to_string()
        } else {
            "ok".green().to_string()
        };
        let columns = page
            .tracks()
            .iter()
            .map(|t| format!("{}", page.track(*t).map_or(0, Vec::len)))
            .collect::<Vec<_>>()
            .join("/");
        let label = if matches!(page.layout, PageLayout::TwoColumn { .. }) {
            "blocks (left/right)"
        } else {
            "blocks"
        };
        println!(
            "{:>4}  {}  {:<10}  {} {}  {}",
            idx + 1,
            height,
            kind,
            columns,
            label.dimmed(),
            status
        );
    }

    println!();
    println!("{}: {}", "Overflowing pages".bold(), overflowing);

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "repaginate".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Overflow-driven re-pagination for print documents");
}
