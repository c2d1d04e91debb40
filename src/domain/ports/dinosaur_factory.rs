//! DinosaurFactory port - where new dinosaurs come from

use crate::domain::entities::Dinosaur;

pub trait DinosaurFactory {
    /// Grow a carnivorous Velociraptor of the given length
    fn grow_velociraptor(&self, length: i64) -> Dinosaur;
}

impl<T: DinosaurFactory + ?Sized> DinosaurFactory for &T {
    fn grow_velociraptor(&self, length: i64) -> Dinosaur {
        (**self).grow_velociraptor(length)
    }
}
