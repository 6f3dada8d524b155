//! Runtime configuration loaded from `assets/shelf.toml`.
//!
//! [`ShelfConfig`] is a Bevy [`Resource`] mirroring the tunables in
//! [`crate::constants`]. At startup, [`load_shelf_config`] reads
//! `assets/shelf.toml` and overwrites the defaults with any values present in
//! the file. Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<ShelfConfig>` to any system parameter list and read
//! values with `config.load_delay_secs`, `config.grid_columns`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `ShelfConfig::default()`.

use bevy::prelude::*;
use serde::Deserialize;

use crate::constants::*;

/// Runtime-tunable presentation and load configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset via `assets/shelf.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    // ── Catalog Load ─────────────────────────────────────────────────────────
    pub load_delay_secs: f32,

    // ── Browse Panel ─────────────────────────────────────────────────────────
    pub grid_columns: u32,
    pub search_max_len: usize,
    /// Starting sort, parsed through `SortOption::from_key`; unrecognized
    /// keys fall back to "popular".
    pub default_sort: String,

    // ── Suggester ────────────────────────────────────────────────────────────
    pub suggestion_pool: usize,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            // Catalog Load
            load_delay_secs: CATALOG_LOAD_SECS,
            // Browse Panel
            grid_columns: GRID_COLUMNS,
            search_max_len: SEARCH_MAX_LEN,
            default_sort: DEFAULT_SORT_KEY.to_string(),
            // Suggester
            suggestion_pool: SUGGESTION_POOL,
        }
    }
}

/// Startup system: attempt to load `assets/shelf.toml` and overwrite the
/// `ShelfConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults. TOML parse errors are printed
/// to stderr but do not abort the application. A missing file is silently
/// ignored (defaults are already in place from `init_resource`).
pub fn load_shelf_config(mut config: ResMut<ShelfConfig>) {
    let path = "assets/shelf.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<ShelfConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                println!("✓ Loaded shelf config from {path}");
            }
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_constants() {
        let config = ShelfConfig::default();
        assert_eq!(config.load_delay_secs, CATALOG_LOAD_SECS);
        assert_eq!(config.grid_columns, GRID_COLUMNS);
        assert_eq!(config.suggestion_pool, SUGGESTION_POOL);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let config: ShelfConfig = toml::from_str("load_delay_secs = 0.25").unwrap();
        assert_eq!(config.load_delay_secs, 0.25);
        assert_eq!(config.grid_columns, GRID_COLUMNS);
        assert_eq!(config.default_sort, DEFAULT_SORT_KEY);
        assert_eq!(config.suggestion_pool, SUGGESTION_POOL);
    }
}
