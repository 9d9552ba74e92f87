//! `graphicscore::ext` hidden submodule supplies helper structs that are
//! used throughout `driftengine` crate.
//!

use crate::utils::Window;

/// [`Viewport`] struct represents visible extent of the drawing area.
///
/// It is the boundary against which scrolling elements decide that they
/// have fully left the screen.
///
/// # Example
/// ```rust
/// # use driftengine::graphicscore::Viewport;
/// let viewport: Viewport = Viewport::new(1600.0, 900.0);
/// assert_eq!(viewport.width, 1600.0);
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Width of visible area.
    ///
    pub width: f32,
    /// Height of visible area.
    ///
    pub height: f32,
}
impl Viewport {
    /// Initializes [`Viewport`] from given extent.
    ///
    pub fn new(width: f32, height: f32) -> Self {
        Viewport { width, height }
    }

    /// Initializes [`Viewport`] from current size of given window.
    ///
    pub fn of_window(window: &Window) -> Self {
        let (width, height): (u32, u32) = window.size();
        Viewport {
            width: width as f32,
            height: height as f32,
        }
    }
}
