//! `widgets::labels` submodule implements [`Label`] - the basic text widget that
//! all other text-showing widgets build upon.
//!

use crate::{
    datacore::fonts::{Font, FontShowMode},
    graphicscore::{drawing::WindowCanvas, parallax::Panel, sprites::Sprite},
    mathcore::{vectors::Point, Color},
};

/// [`Label`] struct represents a positioned single-line text element.
///
/// [`Label`] stores only text state; a [`Font`] is passed in explicitly whenever
/// the text is measured or rendered, so many labels can share one font.
///
/// # Example
/// ```rust
/// # use driftengine::graphicscore::widgets::labels::Label;
/// # use driftengine::mathcore::Color;
/// let mut label: Label = Label::new("Play");
/// label.set_color(Color::WHITE);
/// assert_eq!(label.text(), "Play");
/// ```
///
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Shown text.
    ///
    text: String,
    /// Color of shown text.
    ///
    color: Color,
    /// Position of top-left corner of text.
    ///
    position: Point,
}
impl Label {
    /// Initializes [`Label`] with given text at origin.
    ///
    pub fn new(text: impl Into<String>) -> Self {
        Label {
            text: text.into(),
            color: Color::WHITE,
            position: Point::zero(),
        }
    }

    /// Sets new shown text.
    ///
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
    /// Returns shown text.
    ///
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets new text color.
    ///
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
    /// Returns current text color.
    ///
    pub fn color(&self) -> Color {
        self.color
    }

    /// Places top-left corner of text at given position.
    ///
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }
    /// Returns position of top-left corner of text.
    ///
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns size the text occupies when rendered with given font.
    ///
    /// Empty text occupies nothing.
    ///
    pub fn size(&self, font: &Font) -> (f32, f32) {
        match font.size_of_text(&self.text) {
            Some((width, height)) => (width as f32, height as f32),
            None => (0.0, 0.0),
        }
    }

    /// Draws the text on the canvas with given font at the label position.
    ///
    pub fn draw(&self, canvas: &mut WindowCanvas, font: &Font) {
        self.draw_at(canvas, font, self.position);
    }
    /// Draws the text on the canvas with given font at an explicit position.
    ///
    /// Used by widgets that place their text themselves (e.g. centered in a button).
    ///
    pub fn draw_at(&self, canvas: &mut WindowCanvas, font: &Font, position: Point) {
        if self.text.is_empty() {
            return;
        }
        let image = match font.show_text(FontShowMode::Blended { color: self.color }, &self.text) {
            Ok(image) => image,
            Err(_) => return,
        };
        let texture_creator = canvas.texture_creator();
        let mut sprite = Sprite::from_image(&texture_creator, &image);
        sprite.set_position(position.x, position.y);
        sprite.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::Label;
    use crate::mathcore::{vectors::Point, Color};

    #[test]
    fn text_state() {
        let mut label: Label = Label::new("Play");
        assert_eq!(label.text(), "Play");
        assert_eq!(label.color(), Color::WHITE);
        assert_eq!(label.position(), Point::zero());

        label.set_text("Quit");
        label.set_color(Color::RED);
        label.set_position(Point { x: 5.0, y: 7.0 });
        assert_eq!(label.text(), "Quit");
        assert_eq!(label.color(), Color::RED);
        assert_eq!(label.position(), Point { x: 5.0, y: 7.0 });
    }
}
