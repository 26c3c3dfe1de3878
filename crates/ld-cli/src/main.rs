#![forbid(unsafe_code)]

//! linedraw CLI - redraw ASCII line art with Unicode box-drawing glyphs.
//!
//! # Commands
//!
//! - `render`: Treat the whole input as line art and redraw it
//! - `markdown`: Redraw only fenced code blocks tagged as ASCII art
//! - `inspect`: Show how every joint character was resolved, as JSON

use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ld_core::{FenceConfig, LineDrawConfig};
use ld_render_text::{RewriteStats, inspect, process_with_stats, render_fenced};
use serde::Serialize;
use tracing::{debug, info, warn};

/// linedraw CLI - redraw ASCII line art with Unicode box-drawing glyphs.
#[derive(Debug, Parser)]
#[command(
    name = "linedraw",
    version,
    about = "Redraw ASCII line art with Unicode box-drawing glyphs",
    long_about = "Rewrites `+ - | * ' \\ /` line art into box-drawing characters.\n\n\
        Each joint is shaped from the neighbours that reach into it; every other\n\
        character is copied through, so line count and line length never change."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (can be repeated for more detail: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file. Defaults to ./linedraw.toml when present.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Redraw the whole input as line art.
    Render {
        /// Input file path or "-" for stdin. If omitted, reads from stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Output file path. If omitted, writes to stdout.
        #[arg(short, long)]
        output: Option<String>,

        /// Print rewrite statistics as JSON to stderr
        #[arg(long)]
        json: bool,
    },

    /// Redraw fenced code blocks tagged as ASCII art in a Markdown document.
    Markdown {
        /// Input file path or "-" for stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Output file path. If omitted, writes to stdout.
        #[arg(short, long)]
        output: Option<String>,

        /// Info-string tag to match (repeatable). Overrides the configured tags.
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Print per-block statistics as JSON to stderr
        #[arg(long)]
        json: bool,
    },

    /// Report how each joint character resolves, as JSON.
    Inspect {
        /// Input file path or "-" for stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Result of the render command.
#[derive(Debug, Serialize)]
struct RenderResult {
    input_bytes: usize,
    output_bytes: usize,
    stats: RewriteStats,
    total_time_ms: f64,
}

/// Result of the markdown command.
#[derive(Debug, Serialize)]
struct MarkdownResult {
    tags: Vec<String>,
    blocks: Vec<BlockResult>,
    totals: RewriteStats,
    total_time_ms: f64,
}

#[derive(Debug, Serialize)]
struct BlockResult {
    /// 1-based line numbers of the block body, inclusive.
    first_line: usize,
    last_line: usize,
    tag: String,
    stats: RewriteStats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            input,
            output,
            json,
        } => cmd_render(&input, output.as_deref(), json),

        Command::Markdown {
            input,
            output,
            tags,
            json,
        } => cmd_markdown(&input, output.as_deref(), &config, tags, json),

        Command::Inspect { input, pretty } => cmd_inspect(&input, pretty),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<LineDrawConfig> {
    match path {
        Some(path) => {
            let config = LineDrawConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            info!("Loaded config from: {}", path.display());
            Ok(config)
        }
        None => {
            let default_path = Path::new(LineDrawConfig::FILE_NAME);
            if default_path.is_file() {
                let config = LineDrawConfig::load(default_path).with_context(|| {
                    format!("Failed to load config: {}", default_path.display())
                })?;
                info!("Loaded config from: {}", default_path.display());
                Ok(config)
            } else {
                debug!("No {} found, using defaults", LineDrawConfig::FILE_NAME);
                Ok(LineDrawConfig::default())
            }
        }
    }
}

fn load_input(input: &str) -> Result<String> {
    if input == "-" {
        if io::stdin().is_terminal() {
            warn!("Reading line art from the terminal; end input with Ctrl+D");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else if Path::new(input).exists() {
        std::fs::read_to_string(input).context(format!("Failed to read file: {input}"))
    } else {
        // Treat as inline line art
        Ok(input.to_string())
    }
}

fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).context(format!("Failed to write to: {path}"))?;
            info!("Wrote output to: {path}");
        }
        None => {
            io::stdout()
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

// =============================================================================
// Command: render
// =============================================================================

fn cmd_render(input: &str, output: Option<&str>, json_output: bool) -> Result<()> {
    let start = Instant::now();

    let source = load_input(input)?;
    let outcome = process_with_stats(&source);
    let elapsed = start.elapsed();

    debug!(
        "Rewrote {} rows: strokes={}, joints={}, isolated={}",
        outcome.stats.rows,
        outcome.stats.strokes,
        outcome.stats.joints,
        outcome.stats.isolated_joints
    );

    if outcome.stats.rewritten() == 0 && !source.is_empty() {
        warn!("Input contains no line art; output is unchanged");
    }

    if json_output {
        let result = RenderResult {
            input_bytes: source.len(),
            output_bytes: outcome.output.len(),
            stats: outcome.stats,
            total_time_ms: elapsed.as_secs_f64() * 1000.0,
        };
        let json_str = serde_json::to_string_pretty(&result)?;
        eprintln!("{json_str}");
    }

    write_output(output, &outcome.output)?;

    info!(
        "Redrew {} cells in {:.2}ms",
        outcome.stats.rewritten(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}

// =============================================================================
// Command: markdown
// =============================================================================

fn resolve_fence_config(config: &LineDrawConfig, tags: Vec<String>) -> Result<FenceConfig> {
    if tags.is_empty() {
        return Ok(config.fence.clone());
    }
    let fence = FenceConfig::with_tags(tags);
    fence.validate().context("Invalid --tag value")?;
    Ok(fence)
}

fn cmd_markdown(
    input: &str,
    output: Option<&str>,
    config: &LineDrawConfig,
    tags: Vec<String>,
    json_output: bool,
) -> Result<()> {
    let start = Instant::now();

    let fence = resolve_fence_config(config, tags)?;
    let source = load_input(input)?;
    let outcome = render_fenced(&source, &fence);
    let elapsed = start.elapsed();

    for block in &outcome.blocks {
        debug!(
            "Block at lines {}-{} ({}): strokes={}, joints={}",
            block.start_line + 1,
            block.end_line,
            block.tag,
            block.stats.strokes,
            block.stats.joints
        );
    }

    if outcome.blocks.is_empty() {
        warn!(
            "No fenced blocks tagged {} found",
            fence.tags.join(", ")
        );
    }

    if json_output {
        let result = MarkdownResult {
            totals: outcome.total_stats(),
            blocks: outcome
                .blocks
                .iter()
                .map(|block| BlockResult {
                    first_line: block.start_line + 1,
                    last_line: block.end_line,
                    tag: block.tag.clone(),
                    stats: block.stats,
                })
                .collect(),
            tags: fence.tags.clone(),
            total_time_ms: elapsed.as_secs_f64() * 1000.0,
        };
        let json_str = serde_json::to_string_pretty(&result)?;
        eprintln!("{json_str}");
    }

    write_output(output, &outcome.output)?;

    info!(
        "Redrew {} fenced blocks in {:.2}ms",
        outcome.blocks.len(),
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}

// =============================================================================
// Command: inspect
// =============================================================================

fn cmd_inspect(input: &str, pretty: bool) -> Result<()> {
    let source = load_input(input)?;
    let reports = inspect(&source);

    let output = if pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };

    println!("{output}");

    let isolated = reports.iter().filter(|report| report.isolated).count();
    if isolated > 0 {
        info!("{isolated} joint characters have no connecting neighbour");
    }

    Ok(())
}
