//! Show command handler
//!
//! Lists every enclosure saved in the store.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use dinopark::config::Config;
use dinopark::presentation::factory;
use dinopark::presentation::output::{emit, enclosure_json, render_enclosure, OutputFormat};

/// Execute the show command
pub fn cmd_show(config: &Config, store: Option<&Path>, format: OutputFormat) -> Result<()> {
    let store = factory::create_store(config, store);
    let enclosures = store.load_all()?;

    if format == OutputFormat::Json {
        emit(json!({
            "event": "enclosures",
            "store": store.path().display().to_string(),
            "enclosures": enclosures.iter().map(enclosure_json).collect::<Vec<_>>(),
        }))?;
        return Ok(());
    }

    if enclosures.is_empty() {
        println!("No enclosures in {}", store.path().display());
        return Ok(());
    }

    let blocks: Vec<String> = enclosures.iter().map(render_enclosure).collect();
    print!("{}", blocks.join("\n"));
    Ok(())
}
