//! Table view engine: coordinate model, hit-testing, selection, editing and
//! grid rendering over a pluggable [`model::TableModel`].

pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod layout;
pub mod model;
pub mod selection;
pub mod view;

pub use config::TableConfig;
pub use error::{TableError, TableResult};
pub use hit_test::GridPos;
pub use model::{Axis, CellValue, TableModel, ValueKind, VecTableModel};
pub use selection::SelectionMode;
pub use view::{EventResult, SortOrder, TableView};
