// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Padding applied when the user gives no extending value (Angstroms).
pub const DEFAULT_EXTENDING: f64 = 5.0;

fn default_extending() -> f64 {
  DEFAULT_EXTENDING
}

fn default_chain() -> String {
  "A".to_string()
}

fn default_banner() -> bool {
  true
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
  #[serde(default = "default_extending")]
  pub default_extending: f64,

  /// Chain searched by autobox/resibox.
  #[serde(default = "default_chain")]
  pub default_chain: String,

  /// Print the decorative banner lines around each report block.
  #[serde(default = "default_banner")]
  pub banner: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_extending: default_extending(),
      default_chain: default_chain(),
      banner: default_banner(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/dockbox/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    let path = Self::get_path();
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(&path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "example", "dockbox") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
