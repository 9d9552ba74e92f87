//! `graphicscore::sprites` submodule implements [`Sprite`] - a positioned, sized,
//! drawable texture.
//!
//! Sprites are the bread and butter of backgrounds: the parallax engine manages them
//! through the [`Panel`](crate::graphicscore::parallax::Panel) trait which [`Sprite`]
//! implements.
//!

use crate::{
    datacore::images::Image,
    graphicscore::{
        drawing::WindowCanvas,
        parallax::Panel,
        textures::{Texture, TextureCreator},
    },
    mathcore::{shapes::Rect, vectors::Point},
};
use std::{fmt, io::Error, path::Path};

/// [`Sprite`] struct represents a drawable rectangular visual element.
///
/// [`Sprite`] owns its texture; its size defaults to the natural size of the texture
/// and can be overridden to stretch the texture on drawing.
///
/// # Example
/// ```rust, no_run
/// # use driftengine::graphicscore::{sprites::Sprite, textures::TextureCreator};
/// # use std::path::Path;
/// let texture_creator: TextureCreator = todo!("obtain the texture creator");
/// let sprite: Sprite = Sprite::from_file(&texture_creator, Path::new("background.png"))
///     .expect("Filename should be correct");
/// ```
///
pub struct Sprite<'a> {
    /// Texture that is drawn by this sprite.
    ///
    texture: Texture<'a>,
    /// Position of top-left corner of sprite.
    ///
    position: Point,
    /// Width with which the texture is drawn.
    ///
    width: f32,
    /// Height with which the texture is drawn.
    ///
    height: f32,
}
impl<'a> Sprite<'a> {
    /// Initializes [`Sprite`] from a texture, placing it at origin with the
    /// natural size of the texture.
    ///
    pub fn from_texture(texture: Texture<'a>) -> Self {
        let (width, height): (u32, u32) = texture.size();
        Sprite {
            texture,
            position: Point::zero(),
            width: width as f32,
            height: height as f32,
        }
    }
    /// Initializes [`Sprite`] by loading a texture from the file of supported format.
    ///
    pub fn from_file(
        texture_creator: &'a TextureCreator,
        filename: impl AsRef<Path>,
    ) -> Result<Self, Error> {
        texture_creator
            .create_texture_from_file(filename)
            .map(Sprite::from_texture)
    }
    /// Initializes [`Sprite`] from a CPU-side image.
    ///
    pub fn from_image(texture_creator: &'a TextureCreator, image: &Image) -> Self {
        Sprite::from_texture(texture_creator.create_texture_from_image(image))
    }

    /// Overrides size with which the texture is drawn.
    ///
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Returns area that this sprite occupies on the canvas.
    ///
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.width, self.height)
    }
}
impl Panel for Sprite<'_> {
    fn position_x(&self) -> f32 {
        self.position.x
    }
    fn position_y(&self) -> f32 {
        self.position.y
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point { x, y };
    }

    fn width(&self) -> f32 {
        self.width
    }
    fn height(&self) -> f32 {
        self.height
    }

    fn draw(&self, canvas: &mut WindowCanvas) {
        canvas.blit_from_texture(Some(self.rect()), &self.texture, None);
    }
}
impl fmt::Debug for Sprite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("position", &self.position)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
