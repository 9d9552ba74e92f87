//! `datacore::fonts` submodule supplies instruments that help in work with truetype fonts.
//!
//! Widgets that show text ([`Label`](crate::graphicscore::widgets::labels::Label) and friends)
//! do not own fonts - a [`Font`] is passed to them explicitly whenever text has to be
//! measured or rendered.
//!
//! ## Important
//! This module works **ONLY** with truetype fonts.
//!

use crate::{datacore::images::Image, mathcore::Color};
use bitflags::bitflags;
use log::debug;
use sdl2::ttf::{
    init as ttf_init, Font as TTFont, FontError as TTFontError, FontStyle as TTFontStyle,
    PartialRendering as TTFPartialRendering, Sdl2TtfContext,
};
use std::{
    fmt,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
    sync::OnceLock,
};

/// [`FontShowMode`] enum lists possible modes for showing truetype fonts.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FontShowMode {
    /// Allows showing text in a single line with given color.
    ///
    /// Text would not be anti-aliased and font will be shown on 8-bit image.
    ///
    Solid {
        /// Text is going to be colored in this color.
        ///
        color: Color,
    },
    /// Allows showing text on a background in a single line with given colors.
    ///
    /// Text would be anti-aliased and font will be shown on 8-bit image.
    ///
    Shaded {
        /// Text is going to be colored in this color.
        ///
        color: Color,
        /// Background of text is going to be colored in this color.
        ///
        background: Color,
    },
    /// Allows showing text in a single line using alpha blending to dither the font with the given color.
    ///
    /// Text would be anti-aliased and font will be shown on 32-bit image.
    ///
    Blended {
        /// Text is going to be colored in this color.
        ///
        color: Color,
    },
}
impl FontShowMode {
    /// Applies showing mode to font to obtain image.
    ///
    fn apply<'a>(self, show_object: TTFPartialRendering) -> Result<Image<'a>, Error> {
        (match self {
            FontShowMode::Solid { color } => show_object.solid(color.to_rgba()),
            FontShowMode::Shaded { color, background } => {
                show_object.shaded(color.to_rgba(), background.to_rgba())
            }
            FontShowMode::Blended { color } => show_object.blended(color.to_rgba()),
        })
        .map(|surface| Image::from_sdl_surface(PathBuf::new(), surface))
        .map_err(|error| {
            let message: String = match error {
                TTFontError::InvalidLatin1Text(_) => String::from("Invalid Latin-1 text"),
                TTFontError::SdlError(message) => message,
            };
            Error::new(ErrorKind::InvalidData, message)
        })
    }
}
bitflags!(
    /// [`FontStyle`] bitflag struct lists truetype font styles.
    ///
    pub struct FontStyle : u32 {
        /// Normal font.
        ///
        const NORMAL = 0;
        /// Bold font.
        ///
        const BOLD = 1 << 0;
        /// Italic font.
        ///
        const ITALIC = 1 << 1;
        /// Underline font.
        ///
        const UNDERLINE = 1 << 2;
        /// Strikethrough font.
        ///
        const STRIKETHROUGH = 1 << 3;
    }
);

/// [`Font`] struct handles loaded font data.
///
/// # Examples
/// ```rust, no_run
/// # use driftengine::datacore::fonts::{Font, FontShowMode, FontSystem};
/// # use driftengine::mathcore::Color;
/// # use std::path::Path;
/// FontSystem::init();
/// let font: Font = FontSystem::load_font(Path::new("font.ttf"), 14)
///     .expect("Filename should be correct");
/// font.show_text(FontShowMode::Blended { color: Color::BLACK }, "driftengine")
///     .expect("Conversion should not fail");
/// ```
///
pub struct Font {
    /// Name of a loaded font.
    ///
    filename: PathBuf,
    /// Point size of font.
    ///
    point_size: u16,
    /// Underlying sdl font.
    ///
    font: TTFont<'static, 'static>,
}
impl Font {
    /// Returns name of file from which [`Font`] was initialized.
    ///
    pub fn filename(&self) -> &Path {
        self.filename.as_path()
    }

    /// Transforms given UTF-8 text using this font and given [`FontShowMode`] into image.
    ///
    pub fn show_text(&self, mode: FontShowMode, text: &str) -> Result<Image, Error> {
        mode.apply(self.font.render(text))
    }
    /// Transforms given character using this font and given [`FontShowMode`] into image.
    ///
    pub fn show_character(&self, mode: FontShowMode, character: char) -> Result<Image, Error> {
        mode.apply(self.font.render_char(character))
    }

    /// Returns the width and height of the given UTF-8 text when rendered using this font.
    ///
    pub fn size_of_text(&self, text: &str) -> Option<(u32, u32)> {
        match self.font.size_of(text) {
            Ok(size) => Some(size),
            Err(_) => None,
        }
    }

    /// Returns this font's maximum total height.
    ///
    pub fn height(&self) -> u32 {
        self.font.height() as u32
    }
    /// Returns this font's size in points.
    ///
    pub fn point_size(&self) -> u16 {
        self.point_size
    }

    /// Sets new styling for this font.
    ///
    pub fn set_style(&mut self, style: FontStyle) {
        self.font
            .set_style(TTFontStyle::from_bits(style.bits() as i32).expect(
                "`FontStyle` constants are the same as in SDL `FontStyle` bitflags struct",
            ));
    }
    /// Returns current styling of this font.
    ///
    pub fn get_style(&self) -> FontStyle {
        FontStyle::from_bits(self.font.get_style().bits() as u32)
            .expect("`FontStyle` constants are the same as in SDL `FontStyle` bitflags struct")
    }
}
impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("filename", &self.filename)
            .finish()
    }
}

/// [`TTF_CONTEXT`] global static variable handles `sdl2::ttf` context.
///
static TTF_CONTEXT: OnceLock<Sdl2TtfContext> = OnceLock::new();
/// [`FontSystem`] is a global handler for truetype fonts metadata.
///
/// ### `FontSystem::init` should be called before using anything else from this submodule.
///
#[derive(Copy, Clone, Debug)]
pub enum FontSystem {}
impl FontSystem {
    /// Initializes truetype font system, prepares libraries for use and allows different formats to be opened.
    ///
    /// ### `FontSystem::init` should be called before using anything else from `driftengine::datacore::fonts` submodule.
    ///
    pub fn init() {
        if TTF_CONTEXT.get().is_some() {
            return;
        }
        let _ = TTF_CONTEXT.set(ttf_init().expect("Font driver should be available"));
    }

    /// Loads truetype font from path with given size in points.
    ///
    /// # Examples
    /// ```rust, no_run
    /// # use driftengine::datacore::fonts::FontSystem;
    /// # use std::path::Path;
    /// FontSystem::init();
    /// let font = FontSystem::load_font(Path::new("font.ttf"), 14)
    ///     .expect("Filename should be correct");
    /// ```
    ///
    pub fn load_font(path: impl AsRef<Path>, point_size: u16) -> Result<Font, Error> {
        debug!("loading font from {:?} at {}pt", path.as_ref(), point_size);
        Ok(Font {
            filename: path.as_ref().to_path_buf(),
            point_size,
            font: TTF_CONTEXT
                .get()
                .expect("`FontSystem::init` should be called before using anything else from `driftengine::datacore::fonts` submodule")
                .load_font(path, point_size).map_err(|message| Error::new(ErrorKind::NotFound, message))?,
        })
    }
}
