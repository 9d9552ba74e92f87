//! `widgets::button_groups` submodule implements [`ButtonGroup`] - an ordered menu
//! of buttons with shared styling, auto-layout and keyboard navigation.
//!

use crate::{
    datacore::fonts::Font,
    gamecore::inputs::{InputEvent, Key, PointerState},
    graphicscore::{
        drawing::WindowCanvas,
        widgets::buttons::{Button, ButtonSignal},
        widgets::Theme,
    },
    mathcore::vectors::Point,
};
use log::warn;

/// [`GroupOrientation`] enum lists axes along which buttons of a group are laid out.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupOrientation {
    /// Buttons are stacked top to bottom.
    ///
    Vertical,
    /// Buttons are chained left to right.
    ///
    Horizontal,
}

/// [`ButtonGroup`] struct represents an ordered menu of buttons.
///
/// The group owns its buttons, lays them out from the group position along the
/// configured orientation with the configured gap, normalizes their widths and
/// tracks the selected button. Selection moves with the keyboard
/// ([`ButtonGroup::poll_input`]) and with the pointer ([`ButtonGroup::update`]);
/// the group reports activation of the selected button through
/// [`ButtonGroup::pressed_index`].
///
/// # Example
/// ```rust
/// # use driftengine::graphicscore::widgets::button_groups::ButtonGroup;
/// # use driftengine::graphicscore::widgets::buttons::Button;
/// let mut group: ButtonGroup = ButtonGroup::new();
/// group.add_button(Button::new("Play"));
/// group.add_button(Button::new("Quit"));
/// group.move_down(true, 1);
/// assert_eq!(group.current_index(), 1);
/// ```
///
#[derive(Clone, Debug)]
pub struct ButtonGroup {
    /// Ordered buttons of the menu.
    ///
    buttons: Vec<Button>,
    /// Color scheme applied to every added button.
    ///
    theme: Theme,

    /// Index of the selected button.
    ///
    current_index: usize,
    /// Whether keyboard navigation is processed.
    ///
    keyboard_enabled: bool,
    /// Whether the selected button was activated with the keyboard and the
    /// activation has not been consumed yet.
    ///
    keyboard_pressed: bool,

    /// Smallest width a button of the group can be laid out with.
    ///
    minimum_width: f32,
    /// Axis along which the buttons are laid out.
    ///
    orientation: GroupOrientation,
    /// Gap between consecutive buttons.
    ///
    gap: f32,
    /// Position of the group (position of the first button).
    ///
    position: Point,
}
impl ButtonGroup {
    /// Initializes empty vertical [`ButtonGroup`] at origin.
    ///
    pub fn new() -> Self {
        ButtonGroup {
            buttons: Vec::new(),
            theme: Theme::default(),

            current_index: 0,
            keyboard_enabled: true,
            keyboard_pressed: false,

            minimum_width: 0.0,
            orientation: GroupOrientation::Vertical,
            gap: 10.0,
            position: Point::zero(),
        }
    }

    /// Adds a button to the end of the menu.
    ///
    /// The group theme is applied to the button and the whole menu is laid out anew.
    ///
    pub fn add_button(&mut self, mut button: Button) {
        button.set_theme(self.theme);
        self.buttons.push(button);
        self.relayout();
    }
    /// Removes button at given index.
    ///
    /// Out-of-range indices are ignored. The selection is clamped to stay in range.
    ///
    pub fn remove_button(&mut self, index: usize) {
        if index >= self.buttons.len() {
            warn!(
                "button index {} out of range of menu of {} buttons",
                index,
                self.buttons.len()
            );
            return;
        }
        let _ = self.buttons.remove(index);
        if self.current_index >= self.buttons.len() && !self.buttons.is_empty() {
            self.current_index = self.buttons.len() - 1;
        }
        self.relayout();
    }
    /// Removes the first button of the menu.
    ///
    pub fn remove_first_button(&mut self) {
        self.remove_button(0);
    }
    /// Removes the last button of the menu.
    ///
    pub fn remove_last_button(&mut self) {
        if !self.buttons.is_empty() {
            self.remove_button(self.buttons.len() - 1);
        }
    }
    /// Returns the number of buttons in the menu.
    ///
    pub fn size(&self) -> usize {
        self.buttons.len()
    }
    /// Returns the buttons of the menu.
    ///
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Sets new color scheme and applies it to every button of the menu.
    ///
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        for button in &mut self.buttons {
            button.set_theme(theme);
        }
    }
    /// Returns color scheme of the menu.
    ///
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Moves the selection towards the start of the menu.
    ///
    /// When the selection would run past the first button, it cycles to the last
    /// one if `cycle` is set and stays at the first one otherwise.
    ///
    pub fn move_up(&mut self, cycle: bool, move_amount: usize) {
        if self.buttons.is_empty() {
            return;
        }
        if self.current_index >= move_amount {
            self.current_index -= move_amount;
        } else if cycle {
            self.current_index = self.buttons.len() - 1;
        } else {
            self.current_index = 0;
        }
        self.update_buttons();
    }
    /// Moves the selection towards the end of the menu.
    ///
    /// When the selection would run past the last button, it cycles to the first
    /// one if `cycle` is set and stays at the last one otherwise.
    ///
    pub fn move_down(&mut self, cycle: bool, move_amount: usize) {
        if self.buttons.is_empty() {
            return;
        }
        let target: usize = self.current_index + move_amount;
        if target < self.buttons.len() {
            self.current_index = target;
        } else if cycle {
            self.current_index = 0;
        } else {
            self.current_index = self.buttons.len() - 1;
        }
        self.update_buttons();
    }
    /// Jumps the selection to given index.
    ///
    /// Out-of-range indices are ignored.
    ///
    pub fn jump_to_index(&mut self, index: usize) {
        if index >= self.buttons.len() {
            warn!(
                "button index {} out of range of menu of {} buttons",
                index,
                self.buttons.len()
            );
            return;
        }
        self.current_index = index;
        self.update_buttons();
    }
    /// Returns index of the selected button.
    ///
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Enables or disables keyboard navigation for the menu.
    ///
    pub fn set_keyboard_enabled(&mut self, enabled: bool) {
        self.keyboard_enabled = enabled;
    }
    /// Enables keyboard navigation for the menu.
    ///
    pub fn enable_keyboard(&mut self) {
        self.keyboard_enabled = true;
    }
    /// Disables keyboard navigation for the menu.
    ///
    pub fn disable_keyboard(&mut self) {
        self.keyboard_enabled = false;
    }
    /// Toggles keyboard navigation for the menu.
    ///
    pub fn toggle_keyboard(&mut self) {
        self.keyboard_enabled = !self.keyboard_enabled;
    }
    /// Returns whether keyboard navigation is enabled for the menu.
    ///
    pub fn is_keyboard_enabled(&self) -> bool {
        self.keyboard_enabled
    }

    /// Sets smallest width a button of the group can be laid out with.
    ///
    pub fn set_minimum_width(&mut self, width: f32) {
        self.minimum_width = width;
        self.relayout();
    }
    /// Returns smallest width a button of the group can be laid out with.
    ///
    pub fn minimum_width(&self) -> f32 {
        self.minimum_width
    }

    /// Sets new layout orientation and lays the menu out anew.
    ///
    pub fn set_orientation(&mut self, orientation: GroupOrientation) {
        self.orientation = orientation;
        self.relayout();
    }
    /// Returns layout orientation of the menu.
    ///
    pub fn orientation(&self) -> GroupOrientation {
        self.orientation
    }

    /// Sets new gap between consecutive buttons and lays the menu out anew.
    ///
    pub fn set_gap(&mut self, gap: f32) {
        self.gap = gap;
        self.relayout();
    }
    /// Returns gap between consecutive buttons.
    ///
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Places the menu (the first button) at given position and lays it out anew.
    ///
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.relayout();
    }
    /// Returns position of the menu.
    ///
    pub fn position(&self) -> Point {
        self.position
    }

    /// Processes a keyboard event: arrow keys matching the orientation move the
    /// selection (cycling at the ends), Return activates the selected button.
    ///
    /// Does nothing while keyboard navigation is disabled.
    ///
    pub fn poll_input(&mut self, _dt: f32, event: &InputEvent) {
        if !self.keyboard_enabled {
            return;
        }
        if let InputEvent::KeyPressed { key } = event {
            match (self.orientation, key) {
                (GroupOrientation::Vertical, Key::Up) | (GroupOrientation::Horizontal, Key::Left) => {
                    self.move_up(true, 1);
                }
                (GroupOrientation::Vertical, Key::Down)
                | (GroupOrientation::Horizontal, Key::Right) => {
                    self.move_down(true, 1);
                }
                (_, Key::Return) => {
                    self.keyboard_pressed = !self.buttons.is_empty();
                }
                _ => {}
            }
        }
    }

    /// Recomputes button interaction states from given pointer snapshot and moves
    /// the selection to the button the pointer interacts with.
    ///
    pub fn update(&mut self, pointer: &PointerState) {
        for (index, button) in self.buttons.iter_mut().enumerate() {
            button.update(pointer);
            if matches!(
                button.signal(),
                ButtonSignal::Hovered | ButtonSignal::Pressed | ButtonSignal::Clicked
            ) {
                self.current_index = index;
            }
        }
        self.update_buttons();
    }

    /// Returns index of the button that was activated this frame, either by a
    /// pointer click or by the Return key, consuming the keyboard activation.
    ///
    pub fn pressed_index(&mut self) -> Option<usize> {
        if self.keyboard_pressed {
            self.keyboard_pressed = false;
            return Some(self.current_index);
        }
        self.buttons.iter().position(Button::clicked)
    }

    /// Draws every button of the menu.
    ///
    pub fn draw(&self, canvas: &mut WindowCanvas, font: &Font) {
        for button in &self.buttons {
            button.draw(canvas, font);
        }
    }

    /// Lays buttons out from the group position along the orientation, normalizing
    /// widths to the widest button (but no narrower than the minimum width).
    ///
    fn relayout(&mut self) {
        if self.buttons.is_empty() {
            return;
        }
        let width: f32 = self
            .buttons
            .iter()
            .map(|button| button.size().0)
            .fold(self.minimum_width, f32::max);

        let mut cursor: Point = self.position;
        for button in &mut self.buttons {
            let height: f32 = button.size().1;
            button.set_size(width, height);
            button.set_position(cursor);
            match self.orientation {
                GroupOrientation::Vertical => cursor.y += height + self.gap,
                GroupOrientation::Horizontal => cursor.x += width + self.gap,
            }
        }
        self.update_buttons();
    }
    /// Updates buttons to show which one is selected.
    ///
    fn update_buttons(&mut self) {
        for (index, button) in self.buttons.iter_mut().enumerate() {
            button.set_highlighted(index == self.current_index);
        }
    }
}
impl Default for ButtonGroup {
    fn default() -> Self {
        ButtonGroup::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ButtonGroup, GroupOrientation};
    use crate::gamecore::inputs::{InputEvent, Key, PointerState};
    use crate::graphicscore::widgets::buttons::Button;
    use crate::mathcore::vectors::Point;

    fn sized_button(text: &str, width: f32, height: f32) -> Button {
        let mut button: Button = Button::new(text);
        button.set_size(width, height);
        button
    }

    fn menu() -> ButtonGroup {
        let mut group: ButtonGroup = ButtonGroup::new();
        group.add_button(sized_button("Play", 80.0, 30.0));
        group.add_button(sized_button("Options", 120.0, 30.0));
        group.add_button(sized_button("Quit", 60.0, 30.0));
        group
    }

    #[test]
    fn vertical_layout_normalizes_widths() {
        let group = menu();

        for button in group.buttons() {
            assert_eq!(button.size().0, 120.0);
        }
        assert_eq!(group.buttons()[0].position(), Point::zero());
        assert_eq!(group.buttons()[1].position(), Point { x: 0.0, y: 40.0 });
        assert_eq!(group.buttons()[2].position(), Point { x: 0.0, y: 80.0 });
    }

    #[test]
    fn horizontal_layout_chains_along_x() {
        let mut group = menu();
        group.set_orientation(GroupOrientation::Horizontal);
        group.set_position(Point { x: 10.0, y: 5.0 });

        assert_eq!(group.buttons()[0].position(), Point { x: 10.0, y: 5.0 });
        assert_eq!(group.buttons()[1].position(), Point { x: 140.0, y: 5.0 });
        assert_eq!(group.buttons()[2].position(), Point { x: 270.0, y: 5.0 });
    }

    #[test]
    fn minimum_width_floors_layout() {
        let mut group = menu();
        group.set_minimum_width(200.0);
        for button in group.buttons() {
            assert_eq!(button.size().0, 200.0);
        }
    }

    #[test]
    fn selection_moves_and_cycles() {
        let mut group = menu();
        assert_eq!(group.current_index(), 0);

        group.move_down(true, 1);
        assert_eq!(group.current_index(), 1);
        group.move_down(true, 2);
        assert_eq!(group.current_index(), 0);

        group.move_up(true, 1);
        assert_eq!(group.current_index(), 2);
        group.move_up(false, 5);
        assert_eq!(group.current_index(), 0);
        group.move_down(false, 5);
        assert_eq!(group.current_index(), 2);

        assert!(group.buttons()[2].is_highlighted());
        assert!(!group.buttons()[0].is_highlighted());
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut group = menu();
        group.jump_to_index(2);
        assert_eq!(group.current_index(), 2);
        group.jump_to_index(17);
        assert_eq!(group.current_index(), 2);
    }

    #[test]
    fn removal_keeps_selection_in_range() {
        let mut group = menu();
        group.jump_to_index(2);

        group.remove_last_button();
        assert_eq!(group.size(), 2);
        assert_eq!(group.current_index(), 1);

        group.remove_first_button();
        assert_eq!(group.size(), 1);
        assert_eq!(group.current_index(), 0);
    }

    #[test]
    fn keyboard_navigation_and_activation() {
        let mut group = menu();

        group.poll_input(0.0, &InputEvent::KeyPressed { key: Key::Down });
        assert_eq!(group.current_index(), 1);

        group.poll_input(0.0, &InputEvent::KeyPressed { key: Key::Return });
        assert_eq!(group.pressed_index(), Some(1));
        // the activation is consumed
        assert_eq!(group.pressed_index(), None);

        group.disable_keyboard();
        group.poll_input(0.0, &InputEvent::KeyPressed { key: Key::Down });
        assert_eq!(group.current_index(), 1);
    }

    #[test]
    fn pointer_moves_selection_and_clicks() {
        let mut group = menu();

        // hover over the second button (y in [40; 70))
        let hover: PointerState = PointerState {
            position: Point { x: 50.0, y: 50.0 },
            ..PointerState::default()
        };
        group.update(&hover);
        assert_eq!(group.current_index(), 1);
        assert_eq!(group.pressed_index(), None);

        let press: PointerState = PointerState {
            left: true,
            ..hover
        };
        group.update(&press);
        group.update(&hover);
        assert_eq!(group.pressed_index(), Some(1));
    }
}
