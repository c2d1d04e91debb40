//! Hatchery - the stock dinosaur factory

use crate::domain::entities::Dinosaur;
use crate::domain::ports::DinosaurFactory;
use crate::domain::value_objects::Diet;

pub const VELOCIRAPTOR: &str = "Velociraptor";

/// Stateless factory for preset dinosaurs
#[derive(Debug, Clone, Copy, Default)]
pub struct Hatchery;

impl Hatchery {
    pub fn new() -> Self {
        Self
    }

    /// Grow an arbitrary dinosaur at the given length
    pub fn grow(&self, genus: impl Into<String>, diet: Diet, length: i64) -> Dinosaur {
        Dinosaur::new(genus, diet.is_carnivorous()).with_length(length)
    }
}

impl DinosaurFactory for Hatchery {
    fn grow_velociraptor(&self, length: i64) -> Dinosaur {
        self.grow(VELOCIRAPTOR, Diet::Carnivorous, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_a_large_velociraptor() {
        let dino = Hatchery::new().grow_velociraptor(5);

        assert_eq!(dino.genus(), "Velociraptor");
        assert_eq!(dino.length(), 5);
        assert!(dino.is_carnivorous());
    }

    #[test]
    fn grows_a_small_velociraptor() {
        let dino = Hatchery::new().grow_velociraptor(1);
        assert_eq!(dino.length(), 1);
    }

    #[test]
    fn grow_keeps_requested_diet() {
        let dino = Hatchery::new().grow("Triceratops", Diet::Herbivorous, 9);

        assert_eq!(
            dino.description(),
            "The Triceratops non-carnivorous dinosaur is 9 meters long"
        );
    }
}
