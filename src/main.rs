mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, Format};
use sprayplan::data::{load_records, write_csv, write_csv_file};
use sprayplan::engine::{
    district_rainy_counts, monthly_counts, MonthColumn, OffsetMap, Selection, SprayPlanner,
};
use sprayplan::models::{DerivedRow, Month};
use sprayplan::Catalog;
use std::collections::BTreeSet;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let catalog = Catalog::load(cli.config.clone()).context("failed to load region catalog")?;

    match cli.command {
        Commands::Regions => {
            for name in catalog.region_names() {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Check => run_check(&catalog),
        Commands::Plan {
            region,
            crops,
            districts,
            months,
            offsets,
            default_offset,
            output,
            format,
            summary,
        } => {
            let region = catalog.region(&region)?;
            let records = load_records(&region.dataset)
                .with_context(|| format!("failed to load dataset for {}", region.name))?;

            if !(1..=12).contains(&default_offset) {
                anyhow::bail!("default offset {} out of range 1-12", default_offset);
            }

            // Every distinct crop gets the default, then explicit overrides.
            let crop_set: BTreeSet<&str> = records.iter().map(|r| r.crop.as_str()).collect();
            let mut offset_map = OffsetMap::with_default(crop_set, default_offset as u8)?;
            for arg in &offsets {
                let (crop, value) = parse_offset_arg(arg)?;
                offset_map.set(crop, value)?;
            }

            let selection = Selection {
                crops,
                districts,
                months: parse_months(&months)?,
            };

            let planner = SprayPlanner::new(region, &offset_map);
            let rows = planner.plan(&records, &selection)?;

            match (&output, format) {
                (Some(path), Format::Csv) => write_csv_file(&rows, path)?,
                (Some(path), Format::Json) => {
                    std::fs::write(path, serde_json::to_string_pretty(&rows)?)?
                }
                (Some(path), Format::Table) => std::fs::write(path, render_table(&rows))?,
                (None, Format::Csv) => write_csv(&rows, std::io::stdout().lock())?,
                (None, Format::Json) => println!("{}", serde_json::to_string_pretty(&rows)?),
                (None, Format::Table) => print!("{}", render_table(&rows)),
            }

            if summary {
                print_summary(&rows);
            }
            Ok(())
        }
    }
}

fn run_check(catalog: &Catalog) -> anyhow::Result<()> {
    let mut failures = 0;
    for region in &catalog.regions {
        match load_records(&region.dataset) {
            Ok(records) => println!("{}: OK ({} records)", region.name, records.len()),
            Err(e) => {
                failures += 1;
                println!("{}: FAILED ({})", region.name, e);
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{} region dataset(s) failed validation", failures);
    }
    Ok(())
}

/// Parse a `--offset "Crop=N"` argument.
fn parse_offset_arg(arg: &str) -> anyhow::Result<(String, i64)> {
    let (crop, value) = arg
        .split_once('=')
        .with_context(|| format!("invalid offset '{}', expected CROP=N", arg))?;
    let crop = crop.trim();
    if crop.is_empty() {
        anyhow::bail!("invalid offset '{}', crop name is empty", arg);
    }
    let value: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid offset value in '{}'", arg))?;
    Ok((crop.to_string(), value))
}

/// Month selections are operator input, so a bad label is an error here
/// rather than a silent drop.
fn parse_months(tokens: &[String]) -> anyhow::Result<Vec<Month>> {
    tokens
        .iter()
        .map(|t| {
            Month::parse_token(t).with_context(|| format!("'{}' is not a month label", t))
        })
        .collect()
}

fn render_table(rows: &[DerivedRow]) -> String {
    const HEADER: [&str; 6] = [
        "CROP",
        "DISTRICT",
        "MONTH",
        "Suggested Spray Month",
        "Rainy Season",
        "Manual Spray Month",
    ];

    let mut widths: Vec<usize> = HEADER.iter().map(|h| h.len()).collect();
    let cells = |row: &DerivedRow| -> [String; 6] {
        [
            row.crop.clone(),
            row.district.clone(),
            row.month.clone(),
            row.suggested_spray_month.clone(),
            row.rainy_season.clone(),
            row.manual_spray_month.clone(),
        ]
    };
    for row in rows {
        for (i, cell) in cells(row).iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    let mut push_line = |fields: &[String]| {
        let line = fields
            .iter()
            .enumerate()
            .map(|(i, f)| format!("{:<width$}", f, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    };
    push_line(&HEADER.map(String::from));
    for row in rows {
        push_line(&cells(row));
    }
    out
}

fn print_summary(rows: &[DerivedRow]) {
    let highlight = Month::current();
    println!();
    println!(
        "Current month: {} (next: {})",
        highlight,
        highlight.next()
    );

    println!("Sowing records per month:");
    for (month, count) in monthly_counts(rows, MonthColumn::Sowing) {
        println!("  {}: {}", month, count);
    }
    println!("Suggested sprays per month:");
    for (month, count) in monthly_counts(rows, MonthColumn::SuggestedSpray) {
        println!("  {}: {}", month, count);
    }
    println!("Rainy-window overlaps per district:");
    for (district, count) in district_rainy_counts(rows) {
        println!("  {}: {}", district, count);
    }
}
