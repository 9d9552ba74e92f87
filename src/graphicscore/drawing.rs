//! `graphicscore::drawing` submodule implements [`WindowCanvas`] - the canvas
//! that all engine drawing goes through.
//!
//! # Model
//! The canvas is the top of the following hierarchy:
//! the canvas creates texture creators,
//! texture creators create textures,
//! textures are blitted to the canvas.
//!
//! `driftengine` does not draw directly to the window, it draws to the canvas buffer.
//! To commit your work you need to call `update`.
//!

use crate::{
    graphicscore::{
        textures::{Texture, TextureCreator},
        Viewport,
    },
    mathcore::{shapes::Rect, Color},
    utils::Window,
};
use sdl2::{
    rect::{FRect as SdlFRect, Rect as SdlRect},
    render::WindowCanvas as RenderWindowCanvas,
};
use std::fmt;

/// [`WindowCanvas`] struct represents canvas that allows drawing on a [`Window`].
///
/// [`WindowCanvas`] is instantiated from [`Window`] struct by consuming it (OS shell of window is not destroyed).
/// You can destroy this to obtain your [`Window`] instance back.
///
pub struct WindowCanvas {
    /// Underlying `sdl2` canvas.
    ///
    canvas: RenderWindowCanvas,
}
impl WindowCanvas {
    /// Constructs [`WindowCanvas`] from the [`Window`] by consuming it (OS shell of window is not destroyed).
    ///
    /// # Example
    /// ```rust, no_run
    /// # use driftengine::DriftEngine;
    /// # use driftengine::utils::Window;
    /// # use driftengine::graphicscore::drawing::WindowCanvas;
    /// let engine: DriftEngine = DriftEngine::init();
    /// let window: Window = engine.build_window("driftengine", 1000, 1000, Default::default());
    /// let canvas: WindowCanvas = WindowCanvas::from_window(window, true);
    /// ```
    ///
    pub fn from_window(window: Window, vsync: bool) -> Self {
        let builder = {
            let builder = window.destructure().into_canvas();
            if vsync {
                builder.present_vsync()
            } else {
                builder
            }
        };
        WindowCanvas {
            canvas: builder
                .build()
                .expect("`driftengine` should be able to initialize canvas from the window"),
        }
    }
    /// Consumes [`WindowCanvas`] to get back [`Window`] instance from which it was created.
    ///
    pub fn into_window(self) -> Window {
        Window::from_sdl_window(self.canvas.into_window())
    }

    /// Returns visible extent of this canvas.
    ///
    pub fn viewport(&self) -> Viewport {
        let (width, height): (u32, u32) = self
            .canvas
            .output_size()
            .expect("`driftengine` should be able to query canvas size");
        Viewport::new(width as f32, height as f32)
    }

    /// Sets new drawing color to the canvas.
    ///
    /// This will affect color of graphical primitives that are drawn and
    /// clearing color (`clear` method fills entire canvas with this color).
    ///
    pub fn set_draw_color(&mut self, color: Color) {
        self.canvas.set_draw_color(color.to_rgba());
    }
    /// Returns color that is currently used for drawing.
    ///
    pub fn get_draw_color(&self) -> Color {
        let (r, g, b, a) = self.canvas.draw_color().rgba();
        Color::from_rgba(r, g, b, a)
    }

    /// Clears canvas by filling it out with current draw color.
    ///
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Draws rectangle outline on the canvas with current draw color.
    ///
    pub fn draw_rect(&mut self, rect: Rect) {
        self.canvas
            .draw_frect(Self::to_sdl_frect(rect))
            .expect("`driftengine` renderer should be able to draw a rectangle");
    }
    /// Fills rectangle on the canvas with current draw color.
    ///
    pub fn fill_rect(&mut self, rect: Rect) {
        self.canvas
            .fill_frect(Self::to_sdl_frect(rect))
            .expect("`driftengine` renderer should be able to fill a rectangle");
    }

    /// Returns canvas's texture creator.
    ///
    pub fn texture_creator(&self) -> TextureCreator {
        TextureCreator::from_sdl_texture_creator(self.canvas.texture_creator())
    }
    /// Blits texture to the canvas.
    ///
    /// `dst_area` represents area on the canvas to which texture will be blitted.
    /// If `dst_area` is `None`, texture will be stretched to fill canvas.
    ///
    /// `src_area` represents area of the texture that will be used for blitting.
    /// If `src_area` is `None`, whole texture will be used for blitting.
    ///
    pub fn blit_from_texture(
        &mut self,
        dst_area: Option<Rect>,
        texture: &Texture,
        src_area: Option<Rect>,
    ) {
        self.canvas
            .copy_f(
                texture.get_sdl_texture(),
                src_area.map(|rect| {
                    SdlRect::new(
                        rect.position.x as i32,
                        rect.position.y as i32,
                        rect.width as u32,
                        rect.height as u32,
                    )
                }),
                dst_area.map(Self::to_sdl_frect),
            )
            .expect("`driftengine` renderer should be able to perform texture blitting");
    }

    /// Updates the image on the window.
    ///
    /// `driftengine` does not draw directly to the window, it draws to the canvas buffer.
    /// To commit your work you need to call `update`.
    ///
    pub fn update(&mut self) {
        self.canvas.present();
    }

    /// Converts [`Rect`] to `sdl2` float rectangle.
    ///
    fn to_sdl_frect(rect: Rect) -> SdlFRect {
        SdlFRect::new(rect.position.x, rect.position.y, rect.width, rect.height)
    }
}
impl fmt::Debug for WindowCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowCanvas")
    }
}
