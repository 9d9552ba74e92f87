//! `driftengine::graphicscore` module is a core that provides interfaces for rendering
//! and visualization for engine.
//!
//! # Model
//! Canvases draw, texture creators create textures, textures are blitted to canvases.
//! On top of that sit the visual elements of this engine layer:
//! sprites (positioned drawable textures), the parallax scrolling engine that
//! recycles sprite panels into an infinite background, and menu widgets.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod drawing;
pub mod parallax;
pub mod sprites;
pub mod textures;
pub mod widgets;
