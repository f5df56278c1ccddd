//! keyscope - classify Bitcoin key material and derive every canonical representation.

use anyhow::Result;
use clap::{Parser, Subcommand};

use keyscope::classify::Classifier;
use keyscope::range::{self, GenerationMethod};
use keyscope::report::{format_analysis, format_analysis_json, format_error, format_error_json};

fn parse_generation_method(s: &str) -> Result<GenerationMethod, String> {
    GenerationMethod::from_str(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "keyscope")]
#[command(about = "Classify Bitcoin key material and derive every canonical representation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a string as key material and print everything derivable from it
    Analyze {
        /// Private key hex, WIF, or SEC1 public key hex
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the key range of a numbered puzzle wallet with a starting key
    Range {
        /// Puzzle wallet number (1-160)
        wallet_number: u32,

        /// Starting key placement (start, random, percentual)
        #[arg(long, value_parser = parse_generation_method, default_value = "random")]
        method: GenerationMethod,

        /// Position within the range (1-100, percentual method only)
        #[arg(long)]
        percentage: Option<u32>,
    },

    /// List the currently unsolved puzzle wallets
    #[cfg(feature = "puzzles")]
    Puzzles {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { input, json } => run_analyze(&input, json),
        Command::Range {
            wallet_number,
            method,
            percentage,
        } => run_range(wallet_number, method, percentage),
        #[cfg(feature = "puzzles")]
        Command::Puzzles { limit } => run_puzzles(limit),
    }
}

fn run_analyze(input: &str, json: bool) -> Result<()> {
    let classifier = Classifier::new();

    match classifier.analyze(input) {
        Ok(analysis) => {
            if json {
                println!("{}", format_analysis_json(&analysis));
            } else {
                print!("{}", format_analysis(&analysis));
            }
            Ok(())
        }
        Err(error) => {
            if json {
                println!("{}", format_error_json(&error));
            } else {
                print!("{}", format_error(&error));
            }
            std::process::exit(1);
        }
    }
}

fn run_range(wallet_number: u32, method: GenerationMethod, percentage: Option<u32>) -> Result<()> {
    let generated = range::generate(wallet_number, method, percentage)?;

    println!("Wallet Number: {}", generated.wallet_number);
    println!("Range Start:   {}", generated.range_start_hex());
    println!("Range End:     {}", generated.range_end_hex());
    println!("Total Keys:    {}", generated.total_keys());
    println!("Method:        {}", generated.method.as_str());
    if let Some(percentage) = generated.percentage {
        println!("Percentage:    {}", percentage);
    }
    println!("Initial Key:   {}", generated.initial_key_hex());
    println!("Initial Key (decimal): {}", generated.initial_key);

    Ok(())
}

#[cfg(feature = "puzzles")]
fn run_puzzles(limit: Option<usize>) -> Result<()> {
    use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
    use keyscope::puzzles;

    eprintln!("Fetching unsolved puzzles from {}...", puzzles::PUZZLE_SOURCE);
    let mut entries = puzzles::fetch_blocking()?;
    eprintln!("Done. {} unsolved puzzles.", entries.len());

    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["Bits", "Range Min", "Range Max", "Address", "BTC", "Hash160"]
                .map(|h| Cell::new(h).fg(Color::Cyan)),
        );

    for puzzle in &entries {
        table.add_row([
            &puzzle.bits,
            &puzzle.range_min,
            &puzzle.range_max,
            &puzzle.address,
            &puzzle.btc_value,
            &puzzle.hash160,
        ]);
    }

    println!("{}", table);

    Ok(())
}
