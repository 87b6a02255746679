//! Recipe Tree CLI
//!
//! Reads a search-result JSON document (id-indexed node map or rule list)
//! and prints the reconstructed tree together with its layout parameters.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use recipe_tree::{ingest, plan_with_config, LayoutConfig};

#[derive(Parser)]
#[command(name = "recipe-tree")]
#[command(about = "Reconstruct and size crafting recipe trees from search results")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Sizing profile to start from
    #[arg(short, long, value_enum, default_value_t = Profile::Detailed)]
    profile: Profile,

    /// Layout config file overriding profile constants (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit the full render plan as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Detailed,
    Compact,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match LayoutConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading layout config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => match cli.profile {
            Profile::Detailed => LayoutConfig::detailed(),
            Profile::Compact => LayoutConfig::compact(),
        },
    };

    let source_text = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let source = match ingest::from_json_str(&source_text) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let plan = plan_with_config(&source, &config);

    if cli.json {
        match serde_json::to_string_pretty(&plan) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error serializing plan: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!(
        "Canvas {:.0} x {:.0} (depth {}, leaves {})",
        plan.canvas.width, plan.canvas.height, plan.metrics.depth, plan.metrics.leaves
    );

    match &plan.tree {
        Some(tree) => {
            println!();
            print!("{}", tree);
        }
        None => println!("\nNo recipe found in input."),
    }

    if !plan.steps.is_empty() {
        println!("\nRecipe steps:");
        for rule in &plan.steps {
            println!("  {} -> {}", rule.ingredients.join(" + "), rule.result);
        }
    }

    if !plan.legend.entries.is_empty() {
        println!("\nLegend ({} rows):", plan.legend.rows);
        for entry in &plan.legend.entries {
            println!("  ({:>5.0}, {:>4.0})  {}", entry.x, entry.y, entry.name);
        }
    }

    ExitCode::SUCCESS
}
