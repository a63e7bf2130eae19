// Integration test for the full pipeline: load a structure, select the
// ligand, derive the padded box and check the formatted docking-tool output.

use std::fs;
use std::path::PathBuf;

use dockbox::model::GRID_SPACING;
use dockbox::selection::Selection;
use dockbox::{io, pocket, report};

// A minimal receptor: four protein atoms spanning (0,0,0)..(10,10,10) in
// chain A, a two-atom HEM ligand, a water and a sulfate ion.
const RECEPTOR: &str = "\
ATOM      1  N   VAL A   1       0.000   0.000   0.000  1.00  0.00           N
ATOM      2  CA  VAL A   1      10.000   0.000   5.000  1.00  0.00           C
ATOM      3  C   GLY A   2       0.000  10.000   2.500  1.00  0.00           C
ATOM      4  O   GLY A   2       5.000   5.000  10.000  1.00  0.00           O
HETATM    5 FE   HEM A 155       4.000   5.000   6.000  1.00  0.00          FE
HETATM    6  C1  HEM A 155       6.000   5.000   4.000  1.00  0.00           C
HETATM    7  O   HOH A 201      40.000  40.000  40.000  1.00  0.00           O
HETATM    8  S   SO4 A 301     -40.000 -40.000 -40.000  1.00  0.00           S
END
";

fn fixture(name: &str, contents: &str) -> String {
    let dir: PathBuf = std::env::temp_dir().join("dockbox-pipeline-tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn getbox_over_whole_protein_matches_worked_example() {
    let path = fixture("receptor.pdb", RECEPTOR);
    let structure = io::load_structure(&path).unwrap();

    // Protein extent is (0,0,0)..(10,10,10); padding 5 gives a 20 A cube
    // centered on (5,5,5).
    let sel = Selection::parse("!hetatm").unwrap();
    let b = pocket::getbox(&structure, &sel, 5.0).unwrap();

    assert_eq!(
        report::ledock(&b),
        "Binding pocket\n-5.0 15.0\n-5.0 15.0\n-5.0 15.0\n"
    );
    assert_eq!(
        report::vina(&b),
        "--center_x 5.0 --center_y 5.0 --center_z 5.0 --size_x 20.0 --size_y 20.0 --size_z 20.0\n"
    );
    assert_eq!(
        report::autogrid(&b),
        "npts 53 53 53\nspacing 0.375\ngridcenter 5.000 5.000 5.000\n"
    );
}

#[test]
fn autobox_finds_the_ligand_and_skips_solvent_and_ions() {
    let path = fixture("receptor2.pdb", RECEPTOR);
    let structure = io::load_structure(&path).unwrap();

    let b = pocket::autobox(&structure, "A", 5.0).unwrap();

    // HEM extent (4,5,4)..(6,5,6) padded by 5; the distant HOH and SO4
    // must not have widened it.
    assert_eq!(
        report::ledock(&b),
        "Binding pocket\n-1.0 11.0\n0.0 10.0\n-1.0 11.0\n"
    );
    let npts = b.grid_points(GRID_SPACING);
    assert_eq!(npts, [32, 27, 32]);
}

#[test]
fn resibox_matches_autobox_for_the_same_ligand() {
    let path = fixture("receptor3.pdb", RECEPTOR);
    let structure = io::load_structure(&path).unwrap();

    let auto = pocket::autobox(&structure, "A", 6.0).unwrap();
    let resi = pocket::resibox(&structure, "resn HEM", "A", 6.0).unwrap();
    assert_eq!(auto, resi);
}

#[test]
fn rmhet_roundtrip_drops_hetatm_records() {
    let path = fixture("receptor4.pdb", RECEPTOR);
    let structure = io::load_structure(&path).unwrap();
    let stripped = pocket::rmhet(&structure);

    let out = fixture("stripped.pdb", "");
    io::save_structure(&out, &stripped).unwrap();

    let again = io::load_structure(&out).unwrap();
    assert_eq!(again.atoms.len(), 4);
    assert!(again.atoms.iter().all(|a| !a.hetatm));
    // Selecting hetatm in the stripped file has no extent to offer.
    let sel = Selection::parse("hetatm").unwrap();
    assert!(pocket::getbox(&again, &sel, 5.0).is_err());
}
