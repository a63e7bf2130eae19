// src/model/structure.rs

use nalgebra::Point3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::bbox::BoundingBox;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    pub position: [f64; 3],
    /// PDB chain identifier ("A", "B", ...). Empty when the format has none.
    pub chain: String,
    /// Residue name (resn), e.g. "HEM", "HOH".
    pub res_name: String,
    /// Residue sequence number (resi).
    pub res_seq: i32,
    /// True for HETATM records; always false for plain XYZ input.
    pub hetatm: bool,
    // We track the original index for selection reporting; derived, so it
    // is not serialized.
    #[serde(skip)]
    pub original_index: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Structure {
    pub atoms: Vec<Atom>,
    // Label of where the atoms came from (file stem or "XYZ Import").
    #[serde(skip)]
    pub source: String,
}

impl Structure {
    /// Minimal extent of the atoms satisfying `keep`. None when nothing
    /// matches. The scan is a parallel reduction; structures from cryo-EM
    /// assemblies easily reach millions of atoms.
    pub fn extent<F>(&self, keep: F) -> Option<BoundingBox>
    where
        F: Fn(&Atom) -> bool + Sync,
    {
        self.atoms
            .par_iter()
            .filter(|a| keep(a))
            .map(|a| {
                let p = Point3::from(a.position);
                (p, p)
            })
            .reduce_with(|(mut lo, mut hi), (a_lo, a_hi)| {
                for axis in 0..3 {
                    lo[axis] = lo[axis].min(a_lo[axis]);
                    hi[axis] = hi[axis].max(a_hi[axis]);
                }
                (lo, hi)
            })
            .map(|(min, max)| BoundingBox::new(min, max))
    }

    /// New structure keeping only the atoms satisfying `keep`; original
    /// indices are preserved so selections stay meaningful.
    pub fn filtered<F>(&self, keep: F) -> Structure
    where
        F: Fn(&Atom) -> bool,
    {
        Structure {
            atoms: self.atoms.iter().filter(|a| keep(a)).cloned().collect(),
            source: self.source.clone(),
        }
    }
}
