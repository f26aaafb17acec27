//! gridtk - terminal table view engine.
//!
//! Modules:
//! - table: coordinate model, selection, editors, interaction and the grid renderer
//! - ui: paint commands, styles and rendering backends

pub mod table;
pub mod ui;
