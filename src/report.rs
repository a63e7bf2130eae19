// src/report.rs

use serde::Serialize;

use crate::model::{BoundingBox, GRID_SPACING};

/// LeDock binding-pocket block: literal min/max pairs per axis.
pub fn ledock(b: &BoundingBox) -> String {
    format!(
        "Binding pocket\n{:.1} {:.1}\n{:.1} {:.1}\n{:.1} {:.1}\n",
        b.min.x, b.max.x, b.min.y, b.max.y, b.min.z, b.max.z
    )
}

/// AutoDock Vina command-line flags: center and size per axis.
pub fn vina(b: &BoundingBox) -> String {
    let c = b.center();
    let s = b.size();
    format!(
        "--center_x {:.1} --center_y {:.1} --center_z {:.1} --size_x {:.1} --size_y {:.1} --size_z {:.1}\n",
        c.x, c.y, c.z, s.x, s.y, s.z
    )
}

/// AutoDock grid parameter block at the fixed 0.375 A spacing.
pub fn autogrid(b: &BoundingBox) -> String {
    let npts = b.grid_points(GRID_SPACING);
    let c = b.center();
    format!(
        "npts {} {} {}\nspacing {}\ngridcenter {:.3} {:.3} {:.3}\n",
        npts[0], npts[1], npts[2], GRID_SPACING, c.x, c.y, c.z
    )
}

/// Replayable command for amending the box by hand.
pub fn box_code(b: &BoundingBox) -> String {
    format!(
        "showbox {:.1}, {:.1}, {:.1}, {:.1}, {:.1}, {:.1}",
        b.min.x, b.max.x, b.min.y, b.max.y, b.min.z, b.max.z
    )
}

/// Raw box scalars plus derivations, for downstream tooling.
#[derive(Debug, Serialize)]
pub struct BoxJson {
    pub min: [f64; 3],
    pub max: [f64; 3],
    pub center: [f64; 3],
    pub size: [f64; 3],
    pub npts: [i64; 3],
    pub spacing: f64,
}

pub fn json(b: &BoundingBox) -> serde_json::Result<String> {
    let c = b.center();
    let s = b.size();
    serde_json::to_string_pretty(&BoxJson {
        min: [b.min.x, b.min.y, b.min.z],
        max: [b.max.x, b.max.y, b.max.z],
        center: [c.x, c.y, c.z],
        size: [s.x, s.y, s.z],
        npts: b.grid_points(GRID_SPACING),
        spacing: GRID_SPACING,
    })
}
