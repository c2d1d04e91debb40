//! Dinosaur entity
//!
//! Genus and diet are fixed at construction; length is the only mutable
//! attribute and changes only through `set_length`.

use crate::domain::value_objects::Diet;

/// Genus given to dinosaurs constructed without one
pub const UNKNOWN_GENUS: &str = "Unknown";

/// A dinosaur living (or about to live) in an enclosure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dinosaur {
    genus: String,
    diet: Diet,
    /// Length in meters. Not validated; negative values are stored as given.
    length: i64,
}

impl Dinosaur {
    /// Create a new dinosaur with a length of zero
    pub fn new(genus: impl Into<String>, is_carnivorous: bool) -> Self {
        Self {
            genus: genus.into(),
            diet: Diet::from_carnivorous(is_carnivorous),
            length: 0,
        }
    }

    /// Builder: set the length
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    pub fn genus(&self) -> &str {
        &self.genus
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Overwrite the length
    pub fn set_length(&mut self, length: i64) {
        self.length = length;
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }

    pub fn is_carnivorous(&self) -> bool {
        self.diet.is_carnivorous()
    }

    /// Human-readable description, e.g.
    /// `The Tyrannosaurus carnivorous dinosaur is 12 meters long`
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Check whether every given dinosaur shares this dinosaur's diet.
    ///
    /// At least one dinosaur must be compared against, hence the separate
    /// `dinosaur` argument. Stops at the first mismatch.
    pub fn has_same_diet_as(&self, dinosaur: &Dinosaur, others: &[Dinosaur]) -> bool {
        std::iter::once(dinosaur)
            .chain(others)
            .all(|other| other.diet == self.diet)
    }
}

impl Default for Dinosaur {
    fn default() -> Self {
        Self::new(UNKNOWN_GENUS, false)
    }
}

impl std::fmt::Display for Dinosaur {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The {} {} dinosaur is {} meters long",
            self.genus, self.diet, self.length
        )
    }
}
