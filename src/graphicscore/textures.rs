//! `graphicscore::textures` submodule implements structs that are related to texturing.
//!
//! `Texture`s come from the `TextureCreator` and are bound by its lifetime.
//!
//! There is one constraint that can cause undefined behaviour if broken - textures should only
//! be used with the canvas whose [`TextureCreator`](TextureCreator) created them.
//! Realistically, you should only be using one window in a game, and thus you will be operating
//! with only one window canvas, which makes the constraint hold naturally.
//!

use crate::datacore::images::Image;
use sdl2::{
    image::LoadTexture,
    render::{
        Texture as RenderTexture, TextureCreator as RenderTextureCreator,
        TextureQuery as RenderTextureQuery,
    },
    video::WindowContext,
};
use std::{
    fmt,
    io::{Error, ErrorKind},
    path::Path,
};

/// [`TextureCreator`] struct handles creations of [`Texture`]s that cannot outlive their creator.
/// This struct is the only way to obtain [`Texture`] instance.
///
/// You cannot manually instantiate [`TextureCreator`], you have to get it from the window canvas
/// (`WindowCanvas::texture_creator`).
///
pub struct TextureCreator {
    /// Underlying `sdl` texture creator.
    ///
    texture_creator: RenderTextureCreator<WindowContext>,
}
impl TextureCreator {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Initializes [`TextureCreator`] from `sdl2` texture creator.
    ///
    pub(crate) fn from_sdl_texture_creator(
        texture_creator: RenderTextureCreator<WindowContext>,
    ) -> TextureCreator {
        TextureCreator { texture_creator }
    }

    /// Creates [`Texture`] from the [`Image`].
    ///
    pub fn create_texture_from_image(&self, image: &Image) -> Texture {
        Texture {
            texture: self
                .texture_creator
                .create_texture_from_surface(image.get_sdl_surface())
                .expect("Texture creation should not fail"),
        }
    }
    /// Creates [`Texture`] from the file of supported format ('.png', '.jpg' and others).
    ///
    pub fn create_texture_from_file(&self, filename: impl AsRef<Path>) -> Result<Texture, Error> {
        self.texture_creator
            .load_texture(filename)
            .map(|texture| Texture { texture })
            .map_err(|message| Error::new(ErrorKind::InvalidInput, message))
    }
}
impl fmt::Debug for TextureCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextureCreator")
    }
}

/// [`Texture`] struct is a hardware image that is used in rendering.
///
/// # Example
/// ```rust, no_run
/// # use driftengine::graphicscore::textures::{TextureCreator, Texture};
/// # use std::path::Path;
/// let texture_creator: TextureCreator = todo!("obtain the texture creator");
/// let texture: Texture = texture_creator.create_texture_from_file(Path::new("image.png"))
///     .expect("Filename should be correct");
/// ```
///
pub struct Texture<'a> {
    /// Underlying `sdl` texture.
    ///
    texture: RenderTexture<'a>,
}
impl<'a> Texture<'a> {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Returns reference to underlying `RenderTexture`.
    ///
    pub(crate) fn get_sdl_texture(&self) -> &RenderTexture<'a> {
        &self.texture
    }

    /// Returns width of texture in pixels.
    ///
    pub fn width(&self) -> u32 {
        self.texture.query().width
    }
    /// Returns height of texture in pixels.
    ///
    pub fn height(&self) -> u32 {
        self.texture.query().height
    }
    /// Returns size of texture in pixels (width and height).
    ///
    pub fn size(&self) -> (u32, u32) {
        let query: RenderTextureQuery = self.texture.query();
        (query.width, query.height)
    }
}
impl fmt::Debug for Texture<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Texture")
    }
}
