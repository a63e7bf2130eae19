// src/io/xyz.rs

use std::fs::File;
use std::io::{self, BufRead, Write};

use crate::error::{parse_f64, DockboxError, Result};
use crate::model::{Atom, Structure};

/// Reads a plain XYZ file: atom count, comment line, then one
/// `element x y z` row per atom. XYZ carries no chain/residue bookkeeping,
/// so those fields stay empty and nothing is flagged HETATM.
pub fn parse(path: &str) -> Result<Structure> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);
    let mut lines = reader.lines();

    // 1. Number of Atoms
    let n_atoms_str = lines.next().ok_or_else(|| DockboxError::Parse {
        path: path.to_string(),
        line: 1,
        message: "empty XYZ file".to_string(),
    })??;
    let _n_atoms: usize = n_atoms_str
        .trim()
        .parse()
        .map_err(|_| DockboxError::Parse {
            path: path.to_string(),
            line: 1,
            message: "invalid atom count".to_string(),
        })?;

    // 2. Comment line
    let _comment = lines.next().unwrap_or(Ok(String::new()))?;

    // 3. Atoms
    let mut atoms = Vec::new();
    for line in lines {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            continue;
        }

        let position = [
            parse_f64(parts[1])?,
            parse_f64(parts[2])?,
            parse_f64(parts[3])?,
        ];
        atoms.push(Atom {
            element: parts[0].to_string(),
            position,
            chain: String::new(),
            res_name: String::new(),
            res_seq: 0,
            hetatm: false,
            original_index: atoms.len(),
        });
    }

    Ok(Structure {
        atoms,
        source: "XYZ Import".to_string(),
    })
}

pub fn write(path: &str, structure: &Structure) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "{}", structure.atoms.len())?;
    writeln!(file, "Written by dockbox")?;
    for atom in &structure.atoms {
        writeln!(
            file,
            "{} {:.6} {:.6} {:.6}",
            atom.element, atom.position[0], atom.position[1], atom.position[2]
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_and_roundtrips() {
        let dir = std::env::temp_dir().join("dockbox-xyz-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("water.xyz");
        fs::write(&path, "3\nwater\nO 0.0 0.0 0.117\nH 0.0 0.757 -0.469\nH 0.0 -0.757 -0.469\n").unwrap();

        let s = parse(&path.to_string_lossy()).unwrap();
        assert_eq!(s.atoms.len(), 3);
        assert_eq!(s.atoms[0].element, "O");
        assert!((s.atoms[1].position[1] - 0.757).abs() < 1e-9);

        let out = dir.join("water_out.xyz");
        write(&out.to_string_lossy(), &s).unwrap();
        let again = parse(&out.to_string_lossy()).unwrap();
        assert_eq!(again.atoms.len(), 3);
    }

    #[test]
    fn bad_coordinate_is_invalid_numeric_input() {
        let dir = std::env::temp_dir().join("dockbox-xyz-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.xyz");
        fs::write(&path, "1\nbad\nC one 2.0 3.0\n").unwrap();

        let err = parse(&path.to_string_lossy()).unwrap_err();
        match err {
            DockboxError::InvalidNumericInput { value } => assert_eq!(value, "one"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
