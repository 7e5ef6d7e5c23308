//! gray - Gray code explorer
//! Command-line interface for converting, tabulating and visualizing Gray codes

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::*;
use gray_assistant::{AssistantClient, AssistantConfig};
use gray_core::notation::parse_decimal;
use gray_core::{
    BinaryValue, Conversion, EncoderDisk, GrayCodeRow, MAX_DISK_TRACKS, bit_diff, gray_table,
    is_single_bit_transition,
};
use std::fs;
use std::path::PathBuf;

const DEFAULT_BITS: u32 = 4;
const DEFAULT_MAX_BITS: u32 = 12;

#[derive(Parser)]
#[command(name = "gray")]
#[command(author = "SIL Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "Gray code explorer", long_about = None)]
struct Cli {
    /// Largest bit width for tables and disks (requests above it are clamped)
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_BITS)]
    max_bits: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ConvertInput {
    /// Decimal value
    #[arg(short, long, value_name = "N")]
    decimal: Option<String>,

    /// Plain binary digits
    #[arg(short, long, value_name = "BITS")]
    binary: Option<String>,

    /// Gray code digits
    #[arg(short, long, value_name = "BITS")]
    gray: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between decimal, binary and Gray code
    Convert {
        #[command(flatten)]
        input: ConvertInput,
    },

    /// Print the full N-bit Gray code table
    Table {
        /// Bit width
        #[arg(short, long, default_value_t = DEFAULT_BITS)]
        bits: u32,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Report which bit differs between two decimal values
    Diff {
        #[arg(value_name = "PREV")]
        prev: String,

        #[arg(value_name = "CURR")]
        curr: String,
    },

    /// Draw the rotary encoder disk
    Disk {
        /// Bit width (number of tracks)
        #[arg(short, long, default_value_t = 5)]
        bits: u32,

        /// Also write the disk as an SVG file
        #[arg(long, value_name = "FILE")]
        svg: Option<PathBuf>,
    },

    /// Ask the search-grounded assistant a question
    Ask {
        /// Question text
        #[arg(value_name = "QUERY", required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show information about Gray codes and this tool
    Info,
}

fn main() {
    let cli = Cli::parse();
    let max_bits = cli.max_bits.clamp(1, MAX_DISK_TRACKS);

    let result = match cli.command {
        Commands::Convert { input } => convert_command(&input),
        Commands::Table { bits, json } => table_command(clamp_bits(bits, max_bits), json),
        Commands::Diff { prev, curr } => diff_command(&prev, &curr),
        Commands::Disk { bits, svg } => disk_command(clamp_bits(bits, max_bits), svg),
        Commands::Ask { query } => ask_command(&query.join(" ")),
        Commands::Info => {
            print_info();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Clamp a requested width into `[1, max_bits]`, warning when it moves.
fn clamp_bits(requested: u32, max_bits: u32) -> u32 {
    let bits = requested.clamp(1, max_bits);
    if bits != requested {
        eprintln!(
            "{} bit width {} clamped to {}",
            "warning:".yellow().bold(),
            requested,
            bits
        );
    }
    bits
}

// ============================================================================
// Commands
// ============================================================================

fn convert_command(input: &ConvertInput) -> Result<()> {
    let conversion = if let Some(d) = &input.decimal {
        Conversion::parse_decimal(d)?
    } else if let Some(b) = &input.binary {
        Conversion::from_binary(b)?
    } else if let Some(g) = &input.gray {
        Conversion::from_gray(g)?
    } else {
        bail!("one of --decimal, --binary or --gray is required");
    };

    println!("{} {}", "Decimal:".bold(), conversion.decimal.to_string().cyan());
    println!("{} {}", " Binary:".bold(), conversion.binary.green());
    println!("{} {}", "   Gray:".bold(), conversion.gray.blue().bold());
    Ok(())
}

fn table_command(bits: u32, json: bool) -> Result<()> {
    let rows = gray_table(bits)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:>8}  {:>w$}  {:>w$}  {}",
            "Index",
            "Binary",
            "Gray",
            "Bit change",
            w = (bits as usize).max(6)
        )
        .bold()
    );
    for row in &rows {
        println!("{}", format_row(row, bits));
    }
    Ok(())
}

/// One table line with the changed Gray digit highlighted
fn format_row(row: &GrayCodeRow, bits: u32) -> String {
    let width = (bits as usize).max(6);
    let highlight = row
        .changed_bit
        .map(|p| bits as usize - 1 - p.index() as usize);

    let gray: String = row
        .gray
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if Some(i) == highlight {
                c.to_string().green().bold().to_string()
            } else {
                c.to_string()
            }
        })
        .collect();
    let padding = " ".repeat(width.saturating_sub(row.gray.len()));

    let change = match row.changed_bit {
        Some(p) => p.to_string(),
        None => "-".dimmed().to_string(),
    };

    format!(
        "{:>8}  {:>width$}  {}{}  {}",
        row.decimal, row.binary, padding, gray, change
    )
}

fn diff_command(prev: &str, curr: &str) -> Result<()> {
    let prev = BinaryValue::new(parse_decimal(prev)?);
    let curr = BinaryValue::new(parse_decimal(curr)?);

    match bit_diff(prev, curr) {
        Some(position) => {
            println!("{} {}", "Lowest differing bit:".bold(), position.to_string().cyan());
            if is_single_bit_transition(prev, curr) {
                println!("  {} exactly one bit differs", "✓".green());
            } else {
                println!(
                    "  {} {} bits differ",
                    "✗".yellow(),
                    (prev.get() ^ curr.get()).count_ones()
                );
            }
        }
        None => println!("{}", "Values are equal: no bit differs".bold()),
    }
    Ok(())
}

fn disk_command(bits: u32, svg: Option<PathBuf>) -> Result<()> {
    let disk = EncoderDisk::new(bits)?;

    println!(
        "{} {}-bit disk, {} sectors",
        "Rotary encoder:".bold(),
        bits,
        disk.sectors()
    );
    for line in render_disk(&disk) {
        println!("{}", line.replace('█', &"█".blue().to_string()));
    }

    if let Some(path) = svg {
        fs::write(&path, disk.to_svg())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!(
            "{} {}",
            "   Created".green().bold(),
            path.display().to_string().cyan()
        );
    }
    Ok(())
}

/// Tracks unrolled into rows, outermost (MSB) first; `█` marks a set bit.
fn render_disk(disk: &EncoderDisk) -> Vec<String> {
    disk.tracks()
        .iter()
        .rev()
        .map(|track| {
            let cells: String = track
                .active
                .iter()
                .map(|&on| if on { '█' } else { '·' })
                .collect();
            format!("  bit {:>2} │{}│", track.bit, cells)
        })
        .collect()
}

fn ask_command(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        bail!("query is empty");
    }

    let client = AssistantClient::new(AssistantConfig::from_env())
        .context("failed to build assistant client")?;
    if !client.is_configured() {
        eprintln!(
            "{} no GEMINI_API_KEY set; the assistant will answer with its fallback message",
            "warning:".yellow().bold()
        );
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let answer = runtime.block_on(client.search(query));

    println!("{}", answer.text);
    if !answer.sources.is_empty() {
        println!();
        println!("{}", "Sources:".bold());
        for source in &answer.sources {
            println!("  • {} {}", source.title, source.url.dimmed());
        }
    }
    Ok(())
}

fn print_info() {
    println!("{}", "gray - Gray code explorer".bold());
    println!();
    println!("The reflected-binary Gray code orders 0..2^N so that neighbours differ in one bit:");
    println!("  g(n) = n XOR (n >> 1)");
    println!();
    println!("{}", "Commands:".bold());
    println!("  gray convert --decimal 5          # 5 -> binary 101, Gray 111");
    println!("  gray convert --gray 111           # decode a Gray code");
    println!("  gray table -b 4                   # 4-bit table");
    println!("  gray table -b 4 --json            # table as JSON");
    println!("  gray diff 2 3                     # lowest differing bit");
    println!("  gray disk -b 5 --svg disk.svg     # encoder disk");
    println!("  gray ask \"who invented it?\"       # search-grounded assistant");
    println!();
    println!(
        "Bit widths are clamped to 1..={} unless --max-bits says otherwise (at most {}).",
        DEFAULT_MAX_BITS, MAX_DISK_TRACKS
    );
}
