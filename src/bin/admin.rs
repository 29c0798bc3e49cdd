//! Read-only admin CLI for browsing collected training data.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use binsight::{service, LabelStore, PrimaryCategory, SettingsStore};

#[derive(Parser)]
#[command(name = "binsight-admin")]
struct Cli {
    /// Settings file to resolve the data directory from.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Data directory holding user_images/ and labels/. Ignored when
    /// --settings is given.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total and per-category counts
    Stats,
    /// List records under a category, oldest first
    List {
        primary: String,
        secondary: Option<String>,
    },
    /// Print one record as JSON
    Show { id: String },
    /// Print the category taxonomy
    Categories,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let store = match &cli.settings {
        Some(path) => {
            let settings = SettingsStore::new(path.clone())?;
            LabelStore::from_settings(&settings.storage())?
        }
        None => LabelStore::open(&cli.data_dir)?,
    };

    match cli.command {
        Commands::Stats => {
            let stats = service::get_category_statistics(&store).map_err(anyhow::Error::msg)?;
            println!("total: {}", stats.total_count);
            println!("updated: {}", stats.updated_at.to_rfc3339());
            for (category, bucket) in &stats.by_category {
                println!("{} ({}): {}", category, category.display_name(), bucket.count);
                for (secondary, count) in &bucket.subcategory_counts {
                    println!("  {secondary}: {count}");
                }
            }
        }
        Commands::List { primary, secondary } => {
            let records = match &secondary {
                Some(code) => service::get_labels_by_secondary_category(&store, &primary, code),
                None => service::get_labels_by_primary_category(&store, &primary),
            }
            .map_err(anyhow::Error::msg)?;

            if records.is_empty() {
                println!("no records");
            }
            for record in records {
                println!(
                    "{}  {}  {}",
                    record.id,
                    record.created_at.to_rfc3339(),
                    record.classification.object_name
                );
            }
        }
        Commands::Show { id } => {
            match service::get_label_details(&store, &id).map_err(anyhow::Error::msg)? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("no record with id {id}"),
            }
        }
        Commands::Categories => {
            for category in PrimaryCategory::ALL {
                println!("{} — {}", category, category.display_name());
                for secondary in category.secondaries() {
                    println!("  {} — {}", secondary.code, secondary.name);
                }
            }
        }
    }

    Ok(())
}
