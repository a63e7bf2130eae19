//! dockbox: docking box calculation for LeDock, AutoDock Vina and AutoDock.
//!
//! Loads a molecular structure, takes the extent of an atom selection (or
//! user-supplied center/size or bounds), pads it, and formats the resulting
//! axis-aligned box as the input blocks the three docking tools expect.

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod pocket;
pub mod report;
pub mod selection;

// Re-exports for cleaner imports
pub use error::{DockboxError, Result};
pub use model::{Atom, BoundingBox, Structure, GRID_SPACING};
pub use selection::Selection;
