//! `datacore::images` submodule supplies instruments that help in work with image data.
//!
//! [`Image`] is a CPU-side bitmap: it is what font rendering produces and what image files
//! are decoded into. For actual drawing, images are converted into textures by the
//! rendering part of the engine (`graphicscore`).
//!

use crate::datacore::assets::FromFile;
use bitflags::bitflags;
use log::debug;
use sdl2::{
    image::{init as image_init, InitFlag as ImageInitFlag, LoadSurface as ImageLoadSurface, Sdl2ImageContext as ImageContext},
    surface::Surface as ImageSurface,
};
use std::{
    fmt,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
    sync::OnceLock,
};

/// [`Image`] struct handles CPU-side bitmap data.
///
/// # Example
/// ```rust, no_run
/// # use driftengine::datacore::{assets::FromFile, images::{Image, ImageFormat, ImageSystem}};
/// ImageSystem::init(ImageFormat::PNG);
/// let image: Image = Image::from_file("background.png").expect("Filename should be correct");
/// assert!(image.width() > 0);
/// ```
///
pub struct Image<'a> {
    /// Name of file from which image was initialized (empty for generated images).
    ///
    filename: PathBuf,
    /// Underlying `sdl2` surface.
    ///
    surface: ImageSurface<'a>,
}
impl<'a> Image<'a> {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Initializes [`Image`] from `sdl2` surface.
    ///
    pub(crate) fn from_sdl_surface(filename: PathBuf, surface: ImageSurface<'a>) -> Self {
        Image { filename, surface }
    }
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Returns reference to underlying `sdl2` surface.
    ///
    pub(crate) fn get_sdl_surface(&self) -> &ImageSurface<'a> {
        &self.surface
    }

    /// Returns name of file from which [`Image`] was initialized.
    ///
    pub fn filename(&self) -> &Path {
        self.filename.as_path()
    }

    /// Returns width of image.
    ///
    pub fn width(&self) -> u32 {
        self.surface.width()
    }
    /// Returns height of image.
    ///
    pub fn height(&self) -> u32 {
        self.surface.height()
    }
    /// Returns size of image.
    ///
    pub fn size(&self) -> (u32, u32) {
        self.surface.size()
    }
}
impl FromFile for Image<'_> {
    /// Loads image from file of supported format ('.png', '.jpg' and others registered
    /// on [`ImageSystem::init`]).
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error> {
        debug!("loading image from {:?}", filename.as_ref());
        Ok(Image {
            filename: filename.as_ref().to_path_buf(),
            surface: ImageSurface::from_file(&filename)
                .map_err(|message| Error::new(ErrorKind::NotFound, message))?,
        })
    }
}
impl fmt::Debug for Image<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("filename", &self.filename)
            .finish()
    }
}

bitflags!(
    /// [`ImageFormat`] bitflag struct lists image file formats that can be registered for loading.
    ///
    pub struct ImageFormat : u32 {
        /// JPG image format.
        ///
        const JPG = 1 << 0;
        /// PNG image format.
        ///
        const PNG = 1 << 1;
        /// TIF image format.
        ///
        const TIF = 1 << 2;
        /// WEBP image format.
        ///
        const WEBP = 1 << 3;
    }
);

/// [`IMAGE_CONTEXT`] global static variable handles `sdl2::image` context.
///
static IMAGE_CONTEXT: OnceLock<ImageContext> = OnceLock::new();
/// [`ImageSystem`] is a global handler for image formats metadata.
///
/// ### `ImageSystem::init` should be called before using anything else from this submodule.
///
#[derive(Copy, Clone, Debug)]
pub enum ImageSystem {}
impl ImageSystem {
    /// Initializes image system, prepares libraries for use and allows given formats to be opened.
    ///
    /// ### `ImageSystem::init` should be called before using anything else from `driftengine::datacore::images` submodule.
    ///
    pub fn init(image_format: ImageFormat) {
        if IMAGE_CONTEXT.get().is_some() {
            return;
        }
        let _ = IMAGE_CONTEXT.set(
            image_init(ImageInitFlag::from_bits_truncate(image_format.bits()))
                .expect("Image driver should be available"),
        );
    }
}
