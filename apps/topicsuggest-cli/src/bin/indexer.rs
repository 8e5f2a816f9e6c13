use std::{env, path::PathBuf};

use indicatif::ProgressBar;
use topicsuggest_core::config::{expand_path, Config};
use topicsuggest_text::{HeadingIndexer, ThesaurusIndexer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let args: Vec<String> = env::args().skip(1).collect();
    let mut data_dir = None;
    for arg in &args {
        if !arg.starts_with('-') { data_dir = Some(PathBuf::from(arg)); }
    }
    let data_dir = data_dir.unwrap_or_else(|| {
        let dir: String = config.get("data.dir").unwrap_or_else(|_| "./dev_data".to_string());
        expand_path(dir)
    });

    println!("Heading & Thesaurus Indexer\n===========================");
    println!("Data directory: {}", data_dir.display());

    let headings_dir = config
        .get::<String>("data.headings_dir")
        .map(expand_path)
        .unwrap_or_else(|_| data_dir.join("headings"));
    let heading_index_dir: String = config
        .get("data.headings_index_dir")
        .unwrap_or_else(|_| "./dev_data/indexes/heading".to_string());
    let indexer = HeadingIndexer::new(expand_path(&heading_index_dir))?;
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Indexing headings from {}", headings_dir.display()));
    let heading_count = indexer.index_lines(&headings_dir)?;
    spinner.finish_and_clear();
    println!("📊 Indexed {} headings into {}", heading_count, heading_index_dir);

    let thesaurus_dir = config
        .get::<String>("data.thesaurus_dir")
        .map(expand_path)
        .unwrap_or_else(|_| data_dir.join("thesaurus"));
    let thesaurus_index_dir: String = config
        .get("data.thesaurus_index_dir")
        .unwrap_or_else(|_| "./dev_data/indexes/thesaurus".to_string());
    let indexer = ThesaurusIndexer::new(expand_path(&thesaurus_index_dir))?;
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Indexing thesaurus from {}", thesaurus_dir.display()));
    let entry_count = indexer.index_entries(&thesaurus_dir)?;
    spinner.finish_and_clear();
    println!("📊 Indexed {} thesaurus entries into {}", entry_count, thesaurus_index_dir);

    println!("\n✅ Indexing completed successfully!");
    println!("\n💡 To get suggestions, use: cargo run --bin topicsuggest '<prefix>'");
    Ok(())
}
