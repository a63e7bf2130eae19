//src/model/mod.rs
pub mod bbox;
pub mod structure;

// Re-exports for cleaner imports
pub use bbox::{BoundingBox, GRID_SPACING};
pub use structure::{Atom, Structure};
