//! Map-pin layout without geocoding: concentric rings around the canvas center.

mod engine;

pub use engine::{Layout, LayoutEngine, Placement, Position};
