pub mod geom;
pub mod painter;
pub mod style;
pub mod theme;
