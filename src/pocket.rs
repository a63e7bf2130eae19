// src/pocket.rs
//
// The command set: each operation derives one box (or a stripped structure)
// from a loaded structure and user numbers.

use log::{debug, info};
use nalgebra::{point, vector};

use crate::error::{DockboxError, Result};
use crate::model::{BoundingBox, Structure};
use crate::selection::Selection;

/// Padded bounding box of the selected atoms.
pub fn getbox(structure: &Structure, selection: &Selection, extending: f64) -> Result<BoundingBox> {
    let raw = structure
        .extent(|a| selection.matches(a))
        .ok_or_else(|| DockboxError::EmptySelection {
            selection: selection.to_string(),
        })?;
    debug!(
        "Raw extent of {}: {:?} .. {:?}",
        selection, raw.min, raw.max
    );
    Ok(raw.padded(extending))
}

/// Pocket autodetection: HETATM in the given chain, with solvent and the
/// common crystallization ions stripped first. Fails for structures with no
/// ligand.
pub fn autobox(structure: &Structure, chain: &str, extending: f64) -> Result<BoundingBox> {
    let selection = Selection::And(
        Box::new(Selection::And(
            Box::new(Selection::Hetatm),
            Box::new(Selection::Chain(chain.to_string())),
        )),
        Box::new(Selection::Not(Box::new(Selection::Or(
            Box::new(Selection::Solvent),
            Box::new(Selection::Ions),
        )))),
    );
    info!("Autodetecting pocket with selection: {}", selection);
    getbox(structure, &selection, extending)
}

/// Box around cavity residues reported in papers, restricted to one chain.
pub fn resibox(
    structure: &Structure,
    residues: &str,
    chain: &str,
    extending: f64,
) -> Result<BoundingBox> {
    let inner = Selection::parse(residues)?;
    let selection = Selection::And(
        Box::new(inner),
        Box::new(Selection::Chain(chain.to_string())),
    );
    getbox(structure, &selection, extending)
}

/// Box straight from user-supplied bounds, for visualizing or amending a
/// published box. Argument order follows the original command:
/// minX, maxX, minY, maxY, minZ, maxZ.
pub fn showbox(
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    min_z: f64,
    max_z: f64,
) -> BoundingBox {
    BoundingBox::new(point![min_x, min_y, min_z], point![max_x, max_y, max_z])
}

/// Box from Vina-style center and size numbers.
pub fn vinabox(
    center_x: f64,
    center_y: f64,
    center_z: f64,
    size_x: f64,
    size_y: f64,
    size_z: f64,
) -> BoundingBox {
    BoundingBox::from_center_size(
        point![center_x, center_y, center_z],
        vector![size_x, size_y, size_z],
    )
}

/// Copy of the structure with all HETATM records removed.
pub fn rmhet(structure: &Structure) -> Structure {
    let stripped = structure.filtered(|a| !a.hetatm);
    info!(
        "Removed {} HETATM atoms, {} remain",
        structure.atoms.len() - stripped.atoms.len(),
        stripped.atoms.len()
    );
    stripped
}
