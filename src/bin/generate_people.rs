use anyhow::Context;
use clap::Parser;
use liveliest_year::app::generator::{generate_people, to_tab_indented_json, MAX_PEOPLE, MIN_PEOPLE};
use liveliest_year::utils::validation::validate_range;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-people")]
#[command(about = "Writes a JSON list of random people born and dead between 1900 and 2000")]
struct Args {
    /// Number of people to generate
    #[arg(short = 'n', long)]
    count: usize,

    /// Output JSON file
    #[arg(short, long)]
    output: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    validate_range("count", args.count, MIN_PEOPLE, MAX_PEOPLE)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let people = generate_people(&mut rng, args.count);
    let json = to_tab_indented_json(&people)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&args.output, json)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    let written = std::fs::canonicalize(&args.output).unwrap_or_else(|_| args.output.clone());
    println!(
        "Successfully wrote list of {} random people to: {}",
        people.len(),
        written.display()
    );
    Ok(())
}
