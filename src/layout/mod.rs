//! Layout sizing policy
//!
//! Given the metrics of a built tree, this module derives everything the
//! renderer needs to place it without overlap: canvas dimensions, the
//! separation factor between node positions, and the icon legend grid. The
//! tree positions themselves are the renderer's job; only the sizing
//! parameters live here.

pub mod config;
pub mod legend;
pub mod separation;
pub mod sizing;

pub use config::{ConfigError, LayoutConfig, LegendConfig};
pub use legend::{LegendEntry, LegendLayout};
pub use separation::{slots, NodeSlot};
pub use sizing::CanvasSize;
