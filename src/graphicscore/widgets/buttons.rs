//! `widgets::buttons` submodule implements [`Button`] - a rectangular clickable
//! widget with a centered text label.
//!

use crate::{
    datacore::fonts::Font,
    gamecore::inputs::PointerState,
    graphicscore::{drawing::WindowCanvas, widgets::Theme, widgets::labels::Label},
    mathcore::{shapes::Rect, vectors::Point, vectors::Vector2},
};

/// Default padding between button edges and its label.
///
const DEFAULT_BUTTON_PADDING: Vector2 = Vector2 { x: 16.0, y: 8.0 };

/// [`ButtonSignal`] enum lists interaction states a button can report for a frame.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonSignal {
    /// Pointer is not interacting with the button.
    ///
    Idle,
    /// Pointer hovers over the button without pressing it.
    ///
    Hovered,
    /// Pointer holds the button pressed.
    ///
    Pressed,
    /// Pointer was released over the button this frame.
    ///
    Clicked,
}

/// [`Button`] struct represents a rectangular clickable menu widget.
///
/// The button computes its [`ButtonSignal`] from [`PointerState`] snapshots that
/// the host game feeds into [`Button::update`] every frame. A click is reported on
/// the frame the pointer is released while still over the button.
///
/// # Example
/// ```rust
/// # use driftengine::gamecore::inputs::PointerState;
/// # use driftengine::graphicscore::widgets::buttons::{Button, ButtonSignal};
/// # use driftengine::mathcore::vectors::Point;
/// let mut button: Button = Button::new("Play");
/// button.set_size(100.0, 40.0);
///
/// let pointer: PointerState = PointerState {
///     position: Point { x: 50.0, y: 20.0 },
///     ..PointerState::default()
/// };
/// button.update(&pointer);
/// assert_eq!(button.signal(), ButtonSignal::Hovered);
/// ```
///
#[derive(Clone, Debug)]
pub struct Button {
    /// Area the button occupies on the canvas.
    ///
    area: Rect,
    /// Text label shown centered in the button.
    ///
    label: Label,
    /// Color scheme of the button.
    ///
    theme: Theme,
    /// Gap between button edges and label when sizing to text.
    ///
    padding: Vector2,

    /// Whether this button is the selected one in its group.
    ///
    highlighted: bool,
    /// Interaction state of the current frame.
    ///
    signal: ButtonSignal,
    /// Whether the pointer press started over the button and has not been released yet.
    ///
    holding: bool,
}
impl Button {
    /// Initializes [`Button`] with given label text at origin with zero size.
    ///
    /// Size is set either explicitly ([`Button::set_size`]) or from the label text
    /// ([`Button::fit_to_text`]).
    ///
    pub fn new(text: impl Into<String>) -> Self {
        Button {
            area: Rect::default(),
            label: Label::new(text),
            theme: Theme::default(),
            padding: DEFAULT_BUTTON_PADDING,

            highlighted: false,
            signal: ButtonSignal::Idle,
            holding: false,
        }
    }

    /// Places top-left corner of the button at given position.
    ///
    pub fn set_position(&mut self, position: Point) {
        self.area.position = position;
    }
    /// Returns position of top-left corner of the button.
    ///
    pub fn position(&self) -> Point {
        self.area.position
    }

    /// Sets new size of the button.
    ///
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.area.width = width;
        self.area.height = height;
    }
    /// Returns current size of the button.
    ///
    pub fn size(&self) -> (f32, f32) {
        (self.area.width, self.area.height)
    }
    /// Sizes the button to its label text rendered with given font, plus padding.
    ///
    pub fn fit_to_text(&mut self, font: &Font) {
        let (width, height): (f32, f32) = self.label.size(font);
        self.set_size(width + self.padding.x * 2.0, height + self.padding.y * 2.0);
    }
    /// Returns area the button occupies on the canvas.
    ///
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Sets new label text.
    ///
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }
    /// Returns label text.
    ///
    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Sets new color scheme for the button.
    ///
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
    /// Returns color scheme of the button.
    ///
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Marks the button as the selected one in its group.
    ///
    /// Selected buttons are drawn with the highlight colors of their theme.
    ///
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
    /// Returns whether the button is the selected one in its group.
    ///
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Recomputes the interaction state from given pointer snapshot.
    ///
    /// The click signal lasts exactly one frame: the one on which the pointer is
    /// released while over the button after pressing it there.
    ///
    pub fn update(&mut self, pointer: &PointerState) {
        let inside: bool = self.area.contains(pointer.position);
        self.signal = if inside {
            if pointer.left {
                self.holding = true;
                ButtonSignal::Pressed
            } else if self.holding {
                self.holding = false;
                ButtonSignal::Clicked
            } else {
                ButtonSignal::Hovered
            }
        } else {
            self.holding = false;
            ButtonSignal::Idle
        };
    }
    /// Returns interaction state of the current frame.
    ///
    pub fn signal(&self) -> ButtonSignal {
        self.signal
    }
    /// Returns whether the button was clicked this frame.
    ///
    pub fn clicked(&self) -> bool {
        self.signal == ButtonSignal::Clicked
    }

    /// Draws the button background and its centered label.
    ///
    pub fn draw(&self, canvas: &mut WindowCanvas, font: &Font) {
        let (background, text_color) = if self.highlighted {
            (self.theme.highlight_background, self.theme.highlight_text)
        } else {
            (self.theme.background, self.theme.text)
        };

        canvas.set_draw_color(background);
        canvas.fill_rect(self.area);

        let (text_width, text_height): (f32, f32) = self.label.size(font);
        let center: Point = self.area.center();
        let mut label = self.label.clone();
        label.set_color(text_color);
        label.draw_at(
            canvas,
            font,
            Point {
                x: center.x - text_width * 0.5,
                y: center.y - text_height * 0.5,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{Button, ButtonSignal};
    use crate::gamecore::inputs::PointerState;
    use crate::mathcore::vectors::Point;

    fn pointer(x: f32, y: f32, left: bool) -> PointerState {
        PointerState {
            position: Point { x, y },
            left,
            ..PointerState::default()
        }
    }

    fn sized_button() -> Button {
        let mut button: Button = Button::new("Play");
        button.set_size(100.0, 40.0);
        button
    }

    #[test]
    fn hover_and_leave() {
        let mut button = sized_button();

        button.update(&pointer(50.0, 20.0, false));
        assert_eq!(button.signal(), ButtonSignal::Hovered);

        button.update(&pointer(500.0, 20.0, false));
        assert_eq!(button.signal(), ButtonSignal::Idle);
    }

    #[test]
    fn press_release_reports_click_once() {
        let mut button = sized_button();

        button.update(&pointer(50.0, 20.0, true));
        assert_eq!(button.signal(), ButtonSignal::Pressed);
        assert!(!button.clicked());

        button.update(&pointer(50.0, 20.0, false));
        assert_eq!(button.signal(), ButtonSignal::Clicked);
        assert!(button.clicked());

        // the very next frame the click decays into a plain hover
        button.update(&pointer(50.0, 20.0, false));
        assert_eq!(button.signal(), ButtonSignal::Hovered);
    }

    #[test]
    fn dragging_off_cancels_click() {
        let mut button = sized_button();

        button.update(&pointer(50.0, 20.0, true));
        assert_eq!(button.signal(), ButtonSignal::Pressed);

        button.update(&pointer(500.0, 20.0, true));
        assert_eq!(button.signal(), ButtonSignal::Idle);

        button.update(&pointer(50.0, 20.0, false));
        assert_eq!(button.signal(), ButtonSignal::Hovered);
    }
}
