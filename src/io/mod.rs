// src/io/mod.rs
pub mod pdb;
pub mod xyz;

use crate::error::Result;
use crate::model::Structure;

pub fn load_structure(path: &str) -> Result<Structure> {
    let p = path.to_lowercase();

    if p.ends_with(".xyz") {
        xyz::parse(path)
    } else {
        // Fallback to PDB for unknown or explicit .pdb/.ent
        pdb::parse(path)
    }
}

pub fn save_structure(path: &str, structure: &Structure) -> Result<()> {
    let p = path.to_lowercase();

    if p.ends_with(".xyz") {
        xyz::write(path, structure)
    } else {
        pdb::write(path, structure)
    }
}
