// src/io/pdb.rs

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{parse_f64, DockboxError, Result};
use crate::model::{Atom, Structure};

/// Reads ATOM/HETATM records from a PDB file. Everything else (REMARK,
/// CONECT, ANISOU, ...) is skipped.
pub fn parse(path: &str) -> Result<Structure> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut atoms = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let record = field(&line, 0, 6);
        let hetatm = match record {
            "ATOM" => false,
            "HETATM" => true,
            _ => continue,
        };

        // Coordinate columns are mandatory; a record too short to hold them
        // is malformed.
        if line.len() < 54 {
            return Err(DockboxError::Parse {
                path: path.to_string(),
                line: line_no + 1,
                message: format!("truncated {} record", record),
            });
        }

        let name = field(&line, 12, 16);
        let res_name = field(&line, 17, 20);
        let chain = field(&line, 21, 22);
        let res_seq_str = field(&line, 22, 26);
        let res_seq: i32 =
            res_seq_str
                .parse()
                .map_err(|_| DockboxError::InvalidNumericInput {
                    value: res_seq_str.to_string(),
                })?;

        let x = parse_f64(field(&line, 30, 38))?;
        let y = parse_f64(field(&line, 38, 46))?;
        let z = parse_f64(field(&line, 46, 54))?;

        // Element columns (77-78) are absent in older files; fall back to
        // the leading letters of the atom name.
        let mut element = field(&line, 76, 78).to_string();
        if element.is_empty() {
            element = name
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .chars()
                .take_while(|c| c.is_ascii_alphabetic())
                .take(2)
                .collect();
        }

        atoms.push(Atom {
            element,
            position: [x, y, z],
            chain: chain.to_string(),
            res_name: res_name.to_string(),
            res_seq,
            hetatm,
            original_index: atoms.len(),
        });
    }

    if atoms.is_empty() {
        log::warn!("No ATOM/HETATM records found in {}", path);
    }

    let source = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Structure { atoms, source })
}

/// Writes minimal conformant ATOM/HETATM records plus END.
pub fn write(path: &str, structure: &Structure) -> Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    for (i, atom) in structure.atoms.iter().enumerate() {
        let record = if atom.hetatm { "HETATM" } else { "ATOM" };
        // One- and two-letter element symbols start at column 14.
        let name = if atom.element.len() < 4 {
            format!(" {}", atom.element)
        } else {
            atom.element.clone()
        };
        let chain = atom.chain.chars().next().unwrap_or(' ');
        writeln!(
            w,
            "{:<6}{:>5} {:<4} {:>3} {}{:>4}    {:8.3}{:8.3}{:8.3}{:6.2}{:6.2}          {:>2}",
            record,
            i + 1,
            name,
            atom.res_name,
            chain,
            atom.res_seq,
            atom.position[0],
            atom.position[1],
            atom.position[2],
            1.00,
            0.00,
            atom.element
        )?;
    }
    writeln!(w, "END")?;
    Ok(())
}

/// Trimmed, bounds-checked column slice (byte offsets; PDB is ASCII).
fn field(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = "\
HEADER    OXYGEN STORAGE                          07-MAR-84   1MBD
ATOM      1  N   VAL A   1      -4.880  17.481   7.171  1.00 34.99           N
ATOM      2  CA  VAL A   1      -3.561  17.870   7.683  1.00 35.53           C
ATOM   1000  CA  LYS A1234      12.345   1.000   2.000  1.00 20.00           C
HETATM 1224 FE   HEM A 155       2.427   9.485   1.601  1.00  9.12          FE
HETATM 1260  O   HOH A 156      10.000  20.000  30.000  1.00 20.00           O
CONECT 1224 1225
END
";

    fn write_sample(name: &str) -> String {
        let dir = std::env::temp_dir().join("dockbox-pdb-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, SAMPLE).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn parses_atom_and_hetatm_records() {
        let path = write_sample("sample.pdb");
        let s = parse(&path).unwrap();
        assert_eq!(s.atoms.len(), 5);

        let n = &s.atoms[0];
        assert_eq!(n.element, "N");
        assert_eq!(n.chain, "A");
        assert_eq!(n.res_name, "VAL");
        assert_eq!(n.res_seq, 1);
        assert!(!n.hetatm);
        assert!((n.position[0] - -4.880).abs() < 1e-9);

        // Four-digit residue numbers fill columns 23-26 with no gap before
        // the chain id.
        let lys = &s.atoms[2];
        assert_eq!(lys.res_name, "LYS");
        assert_eq!(lys.res_seq, 1234);
        assert_eq!(lys.chain, "A");
        assert!((lys.position[0] - 12.345).abs() < 1e-9);

        let fe = &s.atoms[3];
        assert_eq!(fe.element, "FE");
        assert_eq!(fe.res_name, "HEM");
        assert_eq!(fe.res_seq, 155);
        assert!(fe.hetatm);
    }

    #[test]
    fn skips_non_coordinate_records() {
        let path = write_sample("sample2.pdb");
        let s = parse(&path).unwrap();
        assert!(s.atoms.iter().all(|a| !a.element.is_empty()));
    }

    #[test]
    fn roundtrips_through_writer() {
        let path = write_sample("sample3.pdb");
        let s = parse(&path).unwrap();

        let out = std::env::temp_dir()
            .join("dockbox-pdb-tests")
            .join("out.pdb");
        let out = out.to_string_lossy().into_owned();
        write(&out, &s).unwrap();

        let again = parse(&out).unwrap();
        assert_eq!(again.atoms.len(), s.atoms.len());
        for (a, b) in s.atoms.iter().zip(again.atoms.iter()) {
            assert_eq!(a.element, b.element);
            assert_eq!(a.res_seq, b.res_seq);
            assert_eq!(a.hetatm, b.hetatm);
            for axis in 0..3 {
                assert!((a.position[axis] - b.position[axis]).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn garbage_residue_number_is_an_error() {
        let dir = std::env::temp_dir().join("dockbox-pdb-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("badresi.pdb");
        fs::write(
            &path,
            "ATOM      1  N   VAL A  XX      -4.880  17.481   7.171  1.00 34.99           N\n",
        )
        .unwrap();
        let err = parse(&path.to_string_lossy()).unwrap_err();
        match err {
            DockboxError::InvalidNumericInput { value } => assert_eq!(value, "XX"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn truncated_record_is_an_error() {
        let dir = std::env::temp_dir().join("dockbox-pdb-tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("short.pdb");
        fs::write(&path, "ATOM      1  N   VAL A   1      -4.880\n").unwrap();
        let err = parse(&path.to_string_lossy()).unwrap_err();
        assert!(matches!(err, DockboxError::Parse { line: 1, .. }));
    }
}
