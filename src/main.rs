use anyhow::Context;
use clap::Parser;
use payroll_merge::{cli, config, loader, pipeline};
use payroll_merge_common::{records_to_json, Diagnostics, Week};
use cli::{Cli, Commands};
use config::Config;
use pipeline::{OutputTarget, RunRequest};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .init();

    let config = Config::load().context("failed to load config")?;

    match cli.command {
        Commands::Merge { csv, template, week, output, output_dir, suffix } => {
            println!("📋 payroll-merge - merge\n");

            let week = match week {
                Some(week) => week,
                None => select_week(&config)?,
            };

            let output = match output {
                Some(path) => OutputTarget::File(path),
                None => OutputTarget::Dir {
                    dir: output_dir.unwrap_or_else(|| config.resolved_output_dir()),
                    suffix: Some(suffix.unwrap_or_else(|| config.output_suffix.clone())),
                },
            };

            let request = RunRequest {
                csv_path: csv,
                template_path: template,
                week,
                output,
            };

            println!("- CSV: {}", request.csv_path.display());
            println!("- Template: {}", request.template_path.display());
            println!("- Week: {}\n", request.week);

            let mut diagnostics = Diagnostics::new();

            println!("[1/2] Loading CSV...");
            let records = match pipeline::load(&request, &mut diagnostics) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("✘ {}", e);
                    std::process::exit(1);
                }
            };
            println!("✔ {} employees loaded", records.len());

            println!("[2/2] Merging into template...");
            let result = pipeline::merge(&request, &records, &mut diagnostics);

            let warnings = diagnostics.warnings().count();
            if warnings > 0 {
                println!("⚠ {} warning(s), see log above", warnings);
            }

            if !result.success {
                eprintln!("✘ {}", result.message);
                std::process::exit(1);
            }

            if let Some(stats) = &result.stats {
                println!("✔ Updated: {}", stats.updated);
                println!("✔ Added (flagged red): {}", stats.inserted);
                println!(
                    "  Skipped: {} ignored, {} duplicate, {} invalid",
                    stats.ignored, stats.duplicates, stats.invalid
                );
            }
            println!("\n✅ {}", result.message);
        }

        Commands::Load { csv, json } => {
            let mut diagnostics = Diagnostics::new();
            let records = match loader::load_hours(&csv, &mut diagnostics) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("✘ {}", e);
                    std::process::exit(1);
                }
            };

            if json {
                println!("{}", records_to_json(&records)?);
            } else {
                for record in &records {
                    println!("{:<32} {:>8.2}", record.name, record.hours);
                }
                println!("\n✔ {} rows", records.len());
            }
        }

        Commands::Config { set_output_dir, set_default_week, show } => {
            let mut config = config;

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ Output directory saved");
            }

            if let Some(week) = set_default_week {
                config.set_default_week(&week)?;
                println!("✔ Default week saved");
            }

            if show {
                println!("Settings:");
                println!("  Output dir: {}", config.resolved_output_dir().display());
                println!("  Suffix: {}", config.output_suffix);
                println!(
                    "  Default week: {}",
                    config.default_week.map(|w| w.label()).unwrap_or("(ask)")
                );
                println!("  File: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn select_week(config: &Config) -> anyhow::Result<String> {
    if let Some(week) = config.default_week {
        return Ok(week.label().to_string());
    }

    let labels: Vec<&str> = Week::ALL.iter().map(|w| w.label()).collect();
    let index = dialoguer::Select::new()
        .with_prompt("Payroll week")
        .items(&labels)
        .default(0)
        .interact()
        .context("week selection cancelled")?;
    Ok(labels[index].to_string())
}
