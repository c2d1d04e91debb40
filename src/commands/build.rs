//! Build command handler
//!
//! Runs the enclosure builder, then saves the populated enclosure so the
//! store holds its final state.

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use tracing::info;

use dinopark::config::Config;
use dinopark::domain::entities::Enclosure;
use dinopark::domain::ports::EntityManager;
use dinopark::presentation::factory;
use dinopark::presentation::output::{emit, enclosure_json, render_build_summary, OutputFormat};

/// Execute the build command
pub fn cmd_build(
    config: &Config,
    securities: usize,
    dinosaurs: usize,
    store: Option<&Path>,
    dry_run: bool,
    format: OutputFormat,
) -> Result<()> {
    let (enclosure, saved_to) = if dry_run {
        let builder = factory::create_dry_run_builder(config);
        (builder.build_enclosure(securities, dinosaurs)?, None)
    } else {
        let builder = factory::create_builder(config, store);
        let enclosure = builder.build_enclosure(securities, dinosaurs)?;
        let store = builder.entity_manager();
        save(store, &enclosure)?;
        (enclosure, Some(store.path().to_path_buf()))
    };

    match format {
        OutputFormat::Json => emit(json!({
            "event": "built",
            "dry_run": dry_run,
            "store": saved_to.as_ref().map(|p| p.display().to_string()),
            "enclosure": enclosure_json(&enclosure),
        }))?,
        OutputFormat::Text => print!("{}", render_build_summary(&enclosure, saved_to.as_deref())),
    }

    Ok(())
}

fn save<EM: EntityManager>(entity_manager: &EM, enclosure: &Enclosure) -> Result<()> {
    entity_manager.persist(enclosure)?;
    entity_manager.flush()?;
    info!(enclosure = %enclosure.id(), "populated enclosure saved");
    Ok(())
}
