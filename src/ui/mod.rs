//! Backend-independent drawing layer.
//!
//! Widgets paint into a [`core::painter::Painter`]; a [`backend::Backend`]
//! replays the commands onto a terminal frame or a headless buffer.

pub mod backend;
pub mod core;
