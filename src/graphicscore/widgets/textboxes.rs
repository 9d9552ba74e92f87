//! `widgets::textboxes` submodule implements [`TextBox`] - a single-line text entry
//! widget with a character limit, a restricted-character list and a blinking cursor.
//!

use crate::{
    datacore::fonts::Font,
    gamecore::inputs::{InputEvent, Key},
    graphicscore::{drawing::WindowCanvas, widgets::labels::Label},
    mathcore::{shapes::Rect, vectors::Point, Color},
};

/// Default maximum number of characters a text box accepts.
///
const DEFAULT_TEXTBOX_MAXIMUM_CHARACTERS: usize = 30;
/// Default time in seconds between cursor blinker toggles.
///
const DEFAULT_TEXTBOX_BLINKER_TIME: f32 = 0.5;
/// Width of the cursor blinker in units.
///
const BLINKER_WIDTH: f32 = 5.0;

/// [`TextBox`] struct represents a single-line text entry widget.
///
/// Printable input fed through [`TextBox::poll_input`] is appended to the text while
/// the character limit allows it and the character is not restricted; Backspace
/// removes the last character. A cursor blinker trails the text, toggling its
/// visibility on a timer that is driven by [`TextBox::update`] and reset to visible
/// by any input.
///
/// # Example
/// ```rust
/// # use driftengine::gamecore::inputs::InputEvent;
/// # use driftengine::graphicscore::widgets::textboxes::TextBox;
/// let mut textbox: TextBox = TextBox::new();
/// textbox.poll_input(0.0, &InputEvent::TextEntered { text: String::from("hi") });
/// assert_eq!(textbox.text(), "hi");
/// ```
///
#[derive(Clone, Debug)]
pub struct TextBox {
    /// Text element that shows the entered text.
    ///
    label: Label,

    /// Maximum number of characters the text box accepts.
    ///
    max_characters: usize,
    /// Characters that the text box refuses to accept.
    ///
    restricted_characters: Vec<char>,

    /// Time in seconds between cursor blinker toggles.
    ///
    blinker_time: f32,
    /// Time in seconds accumulated since the last blinker toggle.
    ///
    blinker_elapsed: f32,
    /// Whether the cursor blinker is currently shown.
    ///
    blinker_shown: bool,
}
impl TextBox {
    /// Initializes empty [`TextBox`] at origin.
    ///
    pub fn new() -> Self {
        TextBox {
            label: Label::new(""),

            max_characters: DEFAULT_TEXTBOX_MAXIMUM_CHARACTERS,
            restricted_characters: Vec::new(),

            blinker_time: DEFAULT_TEXTBOX_BLINKER_TIME,
            blinker_elapsed: 0.0,
            blinker_shown: false,
        }
    }

    /// Processes an input event.
    ///
    /// Entered text is appended character by character while the character limit
    /// allows it, skipping restricted and control characters; pressing Backspace
    /// removes the last character. Any of those inputs resets the cursor blinker
    /// to visible.
    ///
    pub fn poll_input(&mut self, _dt: f32, event: &InputEvent) {
        match event {
            InputEvent::TextEntered { text } => {
                let mut current: String = String::from(self.label.text());
                for character in text.chars() {
                    if current.chars().count() + 1 > self.max_characters {
                        break;
                    }
                    if character.is_control() || self.is_restricted_character(character) {
                        continue;
                    }
                    current.push(character);
                }
                self.label.set_text(current);
                self.reset_blinker();
            }
            InputEvent::KeyPressed { key: Key::Backspace } => {
                let mut current: String = String::from(self.label.text());
                let _ = current.pop();
                self.label.set_text(current);
                self.reset_blinker();
            }
            _ => {}
        }
    }

    /// Sets new maximum number of characters.
    ///
    /// If `remove_extra_characters` is set, text that is over the new limit is cut off.
    ///
    pub fn set_maximum_characters(&mut self, max_characters: usize, remove_extra_characters: bool) {
        self.max_characters = max_characters;
        if remove_extra_characters {
            let truncated: String = self.label.text().chars().take(max_characters).collect();
            self.label.set_text(truncated);
        }
    }
    /// Returns maximum number of characters the text box accepts.
    ///
    pub fn maximum_characters(&self) -> usize {
        self.max_characters
    }

    /// Adds given character to the restricted list.
    ///
    /// Characters already in the list are not added twice.
    ///
    pub fn add_restricted_character(&mut self, character: char) {
        if !self.is_restricted_character(character) {
            self.restricted_characters.push(character);
        }
    }
    /// Removes given character from the restricted list.
    ///
    pub fn remove_restricted_character(&mut self, character: char) {
        self.restricted_characters
            .retain(|&restricted| restricted != character);
    }
    /// Returns the restricted character list.
    ///
    pub fn restricted_characters(&self) -> &[char] {
        &self.restricted_characters
    }
    /// Returns whether given character is restricted.
    ///
    pub fn is_restricted_character(&self, character: char) -> bool {
        self.restricted_characters.contains(&character)
    }

    /// Advances the cursor blinker timer, toggling blinker visibility every time
    /// the configured blinker time elapses.
    ///
    pub fn update(&mut self, dt: f32) {
        self.blinker_elapsed += dt;
        if self.blinker_elapsed > self.blinker_time {
            self.blinker_elapsed = 0.0;
            self.blinker_shown = !self.blinker_shown;
        }
    }

    /// Sets new time in seconds between cursor blinker toggles.
    ///
    pub fn set_blinker_time(&mut self, time: f32) {
        self.blinker_time = time;
    }
    /// Returns time in seconds between cursor blinker toggles.
    ///
    pub fn blinker_time(&self) -> f32 {
        self.blinker_time
    }
    /// Returns whether the cursor blinker is currently shown.
    ///
    pub fn is_blinker_shown(&self) -> bool {
        self.blinker_shown
    }

    /// Sets new shown text.
    ///
    /// The text is taken as is - the character limit only applies to polled input
    /// and to [`TextBox::set_maximum_characters`] truncation.
    ///
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }
    /// Returns shown text.
    ///
    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Sets new text color.
    ///
    pub fn set_color(&mut self, color: Color) {
        self.label.set_color(color);
    }
    /// Returns current text color.
    ///
    pub fn color(&self) -> Color {
        self.label.color()
    }

    /// Places top-left corner of the text box at given position.
    ///
    pub fn set_position(&mut self, position: Point) {
        self.label.set_position(position);
    }
    /// Returns position of top-left corner of the text box.
    ///
    pub fn position(&self) -> Point {
        self.label.position()
    }

    /// Draws the text and, when it is currently shown, the cursor blinker trailing it.
    ///
    pub fn draw(&self, canvas: &mut WindowCanvas, font: &Font) {
        self.label.draw(canvas, font);

        if self.blinker_shown {
            let (text_width, _): (f32, f32) = self.label.size(font);
            let position: Point = self.label.position();
            canvas.set_draw_color(self.label.color());
            canvas.fill_rect(Rect::new(
                Point {
                    x: position.x + text_width,
                    y: position.y,
                },
                BLINKER_WIDTH,
                font.height() as f32,
            ));
        }
    }

    /// Resets the blinker phase so the cursor is visible right after input.
    ///
    fn reset_blinker(&mut self) {
        self.blinker_elapsed = 0.0;
        self.blinker_shown = true;
    }
}
impl Default for TextBox {
    fn default() -> Self {
        TextBox::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TextBox;
    use crate::gamecore::inputs::{InputEvent, Key};

    fn entered(text: &str) -> InputEvent {
        InputEvent::TextEntered {
            text: String::from(text),
        }
    }

    #[test]
    fn appends_polled_text() {
        let mut textbox: TextBox = TextBox::new();
        textbox.poll_input(0.0, &entered("hi"));
        textbox.poll_input(0.0, &entered("!"));
        assert_eq!(textbox.text(), "hi!");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut textbox: TextBox = TextBox::new();
        textbox.poll_input(0.0, &entered("hi"));
        textbox.poll_input(0.0, &InputEvent::KeyPressed { key: Key::Backspace });
        assert_eq!(textbox.text(), "h");

        // backspace on empty text stays a no-op
        textbox.poll_input(0.0, &InputEvent::KeyPressed { key: Key::Backspace });
        textbox.poll_input(0.0, &InputEvent::KeyPressed { key: Key::Backspace });
        assert_eq!(textbox.text(), "");
    }

    #[test]
    fn respects_character_limit() {
        let mut textbox: TextBox = TextBox::new();
        textbox.set_maximum_characters(3, true);
        textbox.poll_input(0.0, &entered("hello"));
        assert_eq!(textbox.text(), "hel");
    }

    #[test]
    fn shrinking_limit_truncates_when_asked() {
        let mut textbox: TextBox = TextBox::new();
        textbox.set_text("hello");

        textbox.set_maximum_characters(4, false);
        assert_eq!(textbox.text(), "hello");

        textbox.set_maximum_characters(2, true);
        assert_eq!(textbox.text(), "he");
    }

    #[test]
    fn filters_restricted_and_control_characters() {
        let mut textbox: TextBox = TextBox::new();
        textbox.add_restricted_character('l');
        textbox.add_restricted_character('l');
        assert_eq!(textbox.restricted_characters(), ['l']);

        textbox.poll_input(0.0, &entered("hel\tlo"));
        assert_eq!(textbox.text(), "heo");

        textbox.remove_restricted_character('l');
        assert!(!textbox.is_restricted_character('l'));
        textbox.poll_input(0.0, &entered("l"));
        assert_eq!(textbox.text(), "heol");
    }

    #[test]
    fn blinker_toggles_on_timer_and_resets_on_input() {
        let mut textbox: TextBox = TextBox::new();
        assert!(!textbox.is_blinker_shown());

        textbox.update(0.6);
        assert!(textbox.is_blinker_shown());
        textbox.update(0.6);
        assert!(!textbox.is_blinker_shown());

        textbox.poll_input(0.0, &entered("a"));
        assert!(textbox.is_blinker_shown());

        textbox.set_blinker_time(1.0);
        textbox.update(0.6);
        assert!(textbox.is_blinker_shown());
        textbox.update(0.6);
        assert!(!textbox.is_blinker_shown());
    }
}
