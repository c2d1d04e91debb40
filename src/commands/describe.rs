use anyhow::Result;

use dinopark::domain::services::Hatchery;
use dinopark::domain::value_objects::Diet;
use dinopark::presentation::output::{dinosaur_json, emit, OutputFormat};

pub fn cmd_describe(
    genus: &str,
    carnivorous: bool,
    length: i64,
    format: OutputFormat,
) -> Result<()> {
    let dinosaur = Hatchery::new().grow(genus, Diet::from_carnivorous(carnivorous), length);

    match format {
        OutputFormat::Json => emit(dinosaur_json(&dinosaur))?,
        OutputFormat::Text => println!("{}", dinosaur.description()),
    }

    Ok(())
}
