//! Gameshelf — a browsable arcade game catalog.
//!
//! The catalog is installed once behind a simulated load delay, then browsed
//! through four independent selection controls (category, search, sort, view
//! mode). A pure derivation pipeline turns catalog + selection into the
//! displayed list; a detail overlay and a suggestion dialog sit on top.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod dialog;
pub mod error;
pub mod pipeline;
pub mod selection;
pub mod suggester;
pub mod ui;
