//! Output Rendering
//!
//! Text and JSON views of enclosures. JSON output is NDJSON: one object per
//! line on stdout.

use std::io::{self, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::domain::entities::{Dinosaur, Enclosure};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes a JSON value to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

fn diet_label(enclosure: &Enclosure) -> &'static str {
    enclosure.diet().map_or("empty", |diet| diet.label())
}

pub fn dinosaur_json(dinosaur: &Dinosaur) -> Value {
    json!({
        "genus": dinosaur.genus(),
        "diet": dinosaur.diet(),
        "length": dinosaur.length(),
        "description": dinosaur.description(),
    })
}

pub fn enclosure_json(enclosure: &Enclosure) -> Value {
    json!({
        "id": enclosure.id().to_string(),
        "diet": enclosure.diet(),
        "security_active": enclosure.is_security_active(),
        "securities": enclosure
            .securities()
            .iter()
            .map(|s| json!({ "name": s.name(), "is_active": s.is_active() }))
            .collect::<Vec<_>>(),
        "dinosaurs": enclosure.dinosaurs().iter().map(dinosaur_json).collect::<Vec<_>>(),
    })
}

/// Multi-line text block describing one enclosure
pub fn render_enclosure(enclosure: &Enclosure) -> String {
    let mut out = format!(
        "Enclosure {} ({})\n",
        enclosure.id().short(),
        diet_label(enclosure)
    );

    out.push_str(&format!("  Securities ({}):\n", enclosure.securities().len()));
    for security in enclosure.securities() {
        let state = if security.is_active() { "active" } else { "inactive" };
        out.push_str(&format!("    - {} [{}]\n", security.name(), state));
    }

    out.push_str(&format!("  Dinosaurs ({}):\n", enclosure.dinosaurs().len()));
    for dinosaur in enclosure.dinosaurs() {
        out.push_str(&format!("    - {}\n", dinosaur.description()));
    }

    out
}

/// Summary printed after `build`; `store` is `None` for dry runs
pub fn render_build_summary(enclosure: &Enclosure, store: Option<&Path>) -> String {
    let mut out = render_enclosure(enclosure);
    match store {
        Some(path) => out.push_str(&format!("Saved to {}\n", path.display())),
        None => out.push_str("Dry run: nothing written\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Security;

    fn fixture() -> Enclosure {
        let mut enclosure = Enclosure::with_basic_security();
        enclosure.add_security(Security::new("Guard tower", false, enclosure.id()));
        enclosure
            .add_dinosaur(Dinosaur::new("Velociraptor", true).with_length(5))
            .unwrap();
        enclosure
    }

    fn strip_id(text: &str, enclosure: &Enclosure) -> String {
        text.replace(&enclosure.id().short(), "<id>")
    }

    #[test]
    fn json_flag_selects_format() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Text);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn text_lists_securities_and_dinosaurs() {
        let enclosure = fixture();
        let text = strip_id(&render_enclosure(&enclosure), &enclosure);

        insta::assert_snapshot!(text.trim_end(), @r"
        Enclosure <id> (carnivorous)
          Securities (2):
            - Fence [active]
            - Guard tower [inactive]
          Dinosaurs (1):
            - The Velociraptor carnivorous dinosaur is 5 meters long
        ");
    }

    #[test]
    fn empty_enclosure_has_no_diet() {
        let enclosure = Enclosure::new();
        assert!(render_enclosure(&enclosure).contains("(empty)"));
    }

    #[test]
    fn build_summary_mentions_destination() {
        let enclosure = fixture();
        assert!(render_build_summary(&enclosure, Some(Path::new("store.toml")))
            .ends_with("Saved to store.toml\n"));
        assert!(render_build_summary(&enclosure, None).ends_with("Dry run: nothing written\n"));
    }

    #[test]
    fn json_shape() {
        let enclosure = fixture();
        let value = enclosure_json(&enclosure);

        assert_eq!(value["id"], enclosure.id().to_string());
        assert_eq!(value["diet"], "carnivorous");
        assert_eq!(value["security_active"], true);
        assert_eq!(value["securities"][1]["name"], "Guard tower");
        assert_eq!(value["dinosaurs"][0]["length"], 5);
    }

    #[test]
    fn empty_enclosure_json_diet_is_null() {
        assert!(enclosure_json(&Enclosure::new())["diet"].is_null());
    }

    #[test]
    fn write_event_is_one_line() {
        let mut buf = Vec::new();
        write_event(&mut buf, &json!({"event": "built"})).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\"event\":\"built\"}\n");
    }
}
