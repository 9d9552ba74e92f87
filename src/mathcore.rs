//! `driftengine::mathcore` module is a core that implements math functionality for engine.
//!
//! # Model
//! This engine is a menu and scrolling layer, so its math needs are deliberately plain:
//! vectors represent positions and offsets on the screen,
//! axis-aligned rectangles represent widget areas and are used for hit testing,
//! colors represent fill and text colors of widgets.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod shapes;
pub mod vectors;
