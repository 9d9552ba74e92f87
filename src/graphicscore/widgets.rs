//! `graphicscore::widgets` submodule implements menu widgets - labels, buttons,
//! button groups and text boxes.
//!
//! # Model
//! Widgets are plain state machines driven by the frame loop: the host game feeds
//! them input ([`InputEvent`](crate::gamecore::inputs::InputEvent)s and
//! [`PointerState`](crate::gamecore::inputs::PointerState) snapshots), ticks them
//! with `update(dt)` and draws them. Text-showing widgets do not own fonts -
//! a [`Font`](crate::datacore::fonts::Font) is passed in wherever text is measured
//! or rendered.
//!
//! Widget colors come from a [`Theme`] which is serializable and can be loaded
//! from a config file through [`FromFile`](crate::datacore::assets::FromFile).
//!

use crate::mathcore::Color;
use serde::{Deserialize, Serialize};

pub mod button_groups;
pub mod buttons;
pub mod labels;
pub mod textboxes;

/// [`Theme`] struct carries the color scheme that menu widgets are drawn with.
///
/// [`Theme`] is serializable, so it can be stored alongside other game assets and
/// loaded with [`FromFile`](crate::datacore::assets::FromFile).
///
/// # Example
/// ```rust
/// # use driftengine::graphicscore::widgets::Theme;
/// # use driftengine::mathcore::Color;
/// let theme: Theme = Theme {
///     background: Color::BLACK,
///     ..Theme::default()
/// };
/// assert_eq!(theme.background, Color::BLACK);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Fill color of widget background.
    ///
    pub background: Color,
    /// Color of widget text.
    ///
    pub text: Color,
    /// Fill color of background of selected widget.
    ///
    pub highlight_background: Color,
    /// Color of text of selected widget.
    ///
    pub highlight_text: Color,
}
impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::from_rgba(40, 40, 40, 255),
            text: Color::WHITE,
            highlight_background: Color::WHITE,
            highlight_text: Color::from_rgba(40, 40, 40, 255),
        }
    }
}
