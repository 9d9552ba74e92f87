//! `driftengine` hidden submodule implements [`DriftEngine`] struct that handles
//! all subsystems that are needed for `driftengine` work.
//!

use crate::gamecore::inputs::EventQueue;
use log::info;
use sdl2::{init as sdl_initialization, Sdl, VideoSubsystem as SdlVideoSubsystem};
use std::fmt;

/// [`DriftEngine`] struct handles global context for `driftengine`.
///
/// This struct uses underlying handler that is local to the main thread, so
/// most of the functionality of engine is going to work only on main thread,
/// which, for example, ensures that event handling is bound to the thread where [`DriftEngine`] was
/// initialized.
///
/// [`DriftEngine`] struct initializes **ONLY** basic subsystems that are needed for work -
/// that includes video system and event system;
/// other subsystems such as images and fonts systems should be initialized manually.
///
/// # Example
/// ```rust, no_run
/// # use driftengine::{DriftEngine, utils::Window};
/// let engine: DriftEngine = DriftEngine::init();
/// let window: Window = engine.build_window("DRIFTENGINE", 1600, 900, Default::default());
/// ```
///
pub struct DriftEngine {
    /// Underlying `sdl2` context handler.
    ///
    sdl: Sdl,
    /// Underlying video subsystem.
    ///
    video: SdlVideoSubsystem,
}
impl DriftEngine {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Returns reference to underlying `VideoSubsystem` handler.
    ///
    pub(crate) fn get_sdl_videosubsystem(&self) -> &SdlVideoSubsystem {
        &self.video
    }

    /// Internally initializes global handler for `driftengine` library.
    ///
    /// This function loads and prepares all submodules for usage.
    ///
    /// # Example
    /// ```rust, no_run
    /// # use driftengine::DriftEngine;
    /// let engine: DriftEngine = DriftEngine::init();
    /// ```
    ///
    pub fn init() -> DriftEngine {
        let sdl = sdl_initialization()
            .expect("`driftengine` should be able to initialize underlying `sdl2` handler");
        let video = sdl
            .video()
            .expect("`driftengine` should be able to initialize underlying `video` handler");
        info!("engine context initialized");
        DriftEngine { sdl, video }
    }

    /// Returns event queue through which OS and input events are polled.
    ///
    /// Only one event queue can exist at a time.
    ///
    pub fn event_queue(&self) -> EventQueue {
        EventQueue::from_sdl_event_pump(
            self.sdl
                .event_pump()
                .expect("`driftengine` should be able to initialize underlying event handler"),
        )
    }
}
impl fmt::Debug for DriftEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriftEngine").finish()
    }
}
