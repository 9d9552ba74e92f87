//! `utils` module defines several constructs that are essential to the
//! application powered by `driftengine`.
//!
//! This module can be thought of as a collection of abstractions over OS.
//!

use crate::DriftEngine;
use sdl2::video::{
    FullscreenType as SdlFullscreenType, Window as SdlWindow, WindowBuilder as SdlWindowBuilder,
    WindowPos as SdlWindowPos,
};
use std::fmt;

/// [`Position`] enum encapsulates possible window position settings.
///
/// Example of usage is shown in [`WindowSettings`] docs.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Position {
    /// Exact position that is given by coordinate (left top corner is `(0, 0)`).
    ///
    Exact(i32, i32),
    /// Centered position.
    ///
    Centered,
}
/// [`FullscreenType`] lists types of fullscreen that are applicable to window.
///
/// Example of usage is shown in [`WindowSettings`] docs.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FullscreenType {
    /// Fullscreen is a real fullscreen mode - OS changes video mode for your application, but
    /// tabbing to another program might switch video mode back.
    ///
    Fullscreen,
    /// Desktop fullscreen is a 'fake' fullscreen - the actual video mode would not change.
    ///
    DesktopFullscreen,
}
impl FullscreenType {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Converts `sdl2` SdlFullscreenType to [`FullscreenType`].
    ///
    /// `None` corresponds to fullscreen not being enabled.
    ///
    pub(crate) fn from_sdl_fullscreen_type(
        fullscreen_type: SdlFullscreenType,
    ) -> Option<FullscreenType> {
        match fullscreen_type {
            SdlFullscreenType::Off => None,
            SdlFullscreenType::True => Some(FullscreenType::Fullscreen),
            SdlFullscreenType::Desktop => Some(FullscreenType::DesktopFullscreen),
        }
    }
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Returns `sdl2` representation of this enum.
    ///
    pub(crate) fn to_sdl_fullscreen_type(this: Option<FullscreenType>) -> SdlFullscreenType {
        match this {
            Some(FullscreenType::Fullscreen) => SdlFullscreenType::True,
            Some(FullscreenType::DesktopFullscreen) => SdlFullscreenType::Desktop,
            None => SdlFullscreenType::Off,
        }
    }
}
/// [`WindowSettings`] struct carries data that is needed for window configuration.
///
/// If you do not want to tweak settings, just pass `..Default::default()` to fill up remaining options.
///
/// # Examples
/// ```rust
/// # use driftengine::utils::{WindowSettings, Position, FullscreenType};
/// let window: WindowSettings = WindowSettings {
///     position: Some(Position::Centered),
///     initial_fullscreen: Some(FullscreenType::Fullscreen),
///     ..WindowSettings::default()
/// };
/// ```
///
#[derive(Debug, Copy, Clone)]
pub struct WindowSettings {
    /// Initial window position.
    ///
    pub position: Option<Position>,

    /// Fullscreen mode of the window.
    ///
    pub initial_fullscreen: Option<FullscreenType>,

    /// Decides whether the window will be resizable or not.
    ///
    pub is_resizable: bool,

    /// Decides whether the window will be hidden or not.
    ///
    pub is_hidden: bool,
    /// Decides whether the window will be borderless or not.
    ///
    pub is_borderless: bool,
    /// Decides whether the window will allow high dpi or not.
    ///
    pub allow_high_dpi: bool,
}
impl WindowSettings {
    /// Applies settings to `sdl2` WindowBuilder.
    ///
    fn apply_to_builder(self, window_builder: &mut SdlWindowBuilder) -> &mut SdlWindowBuilder {
        if let Some(position) = self.position {
            let _ = match position {
                Position::Exact(x, y) => window_builder.position(x, y),
                Position::Centered => window_builder.position_centered(),
            };
        }
        if let Some(fullscreen_type) = self.initial_fullscreen {
            let _ = match fullscreen_type {
                FullscreenType::Fullscreen => window_builder.fullscreen(),
                FullscreenType::DesktopFullscreen => window_builder.fullscreen_desktop(),
            };
        }
        if self.is_resizable {
            let _ = window_builder.resizable();
        }
        if self.is_hidden {
            let _ = window_builder.hidden();
        }
        if self.is_borderless {
            let _ = window_builder.borderless();
        }
        if self.allow_high_dpi {
            let _ = window_builder.allow_highdpi();
        }
        window_builder
    }
}
impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            position: None,

            initial_fullscreen: None,

            is_resizable: true,

            is_hidden: false,
            is_borderless: false,
            allow_high_dpi: true,
        }
    }
}

impl DriftEngine {
    /// Builds window with given settings.
    ///
    /// # Example
    /// ```rust, no_run
    /// # use driftengine::{DriftEngine, utils::Window};
    /// let engine: DriftEngine = DriftEngine::init();
    /// let window: Window = engine.build_window("DRIFTENGINE", 1600, 900, Default::default());
    /// ```
    ///
    pub fn build_window(
        &self,
        title: &str,
        width: u32,
        height: u32,
        window_settings: WindowSettings,
    ) -> Window {
        Window {
            window: window_settings
                .apply_to_builder(&mut self.get_sdl_videosubsystem().window(title, width, height))
                .build()
                .expect("`driftengine` should be able to build a window (maybe incompatible symbols are given or given size is too big)"),
        }
    }
}
/// [`Window`] struct represents the shell of OS window.
///
/// This struct only allows manipulations with window properties, but it does not allow
/// direct pixel access.
/// To use window for drawing you should use corresponding rendering functions from `driftengine`.
///
/// # Example
/// ```rust, no_run
/// # use driftengine::{DriftEngine, utils::Window};
/// let engine: DriftEngine = DriftEngine::init();
/// let window: Window = engine.build_window("DRIFTENGINE", 1600, 900, Default::default());
/// ```
///
pub struct Window {
    /// Underlying `sdl2` window.
    ///
    window: SdlWindow,
}
impl Window {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Initializes [`Window`] from `sdl2` window.
    ///
    pub(crate) fn from_sdl_window(window: SdlWindow) -> Window {
        Window { window }
    }
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Destructures itself by consuming [`Window`].
    ///
    pub(crate) fn destructure(self) -> SdlWindow {
        self.window
    }

    /// Returns id of the window.
    ///
    pub fn id(&self) -> u32 {
        self.window.id()
    }

    /// Sets new title for the window.
    ///
    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title).expect(
            "`driftengine` should be able to rename title (maybe incompatible symbols are used)",
        );
    }
    /// Returns window's title.
    ///
    pub fn title(&self) -> &str {
        self.window.title()
    }

    /// Sets new position of the window.
    ///
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.window
            .set_position(SdlWindowPos::Positioned(x), SdlWindowPos::Positioned(y));
    }
    /// Returns current position of the window.
    ///
    pub fn position(&self) -> (i32, i32) {
        self.window.position()
    }

    /// Sets new size for the window.
    ///
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.window
            .set_size(width, height)
            .expect("`driftengine` should be able to resize window (maybe given size is too big)");
    }
    /// Returns current window size.
    ///
    pub fn size(&self) -> (u32, u32) {
        self.window.size()
    }

    /// Sets new fullscreen type for the window.
    ///
    /// If `None` is passed, disables current fullscreen type.
    ///
    pub fn set_fullscreen_type(&mut self, fullscreen_type: Option<FullscreenType>) {
        self.window
            .set_fullscreen(FullscreenType::to_sdl_fullscreen_type(fullscreen_type))
            .expect("`driftengine` should be able to set fullscreen type");
    }
    /// Returns current window fullscreen type.
    ///
    /// `None` corresponds to fullscreen not being enabled.
    ///
    pub fn fullscreen_type(&self) -> Option<FullscreenType> {
        FullscreenType::from_sdl_fullscreen_type(self.window.fullscreen_state())
    }
}
impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Window {id}", id = self.id()))
            .finish()
    }
}
