//! `gamecore::inputs` submodule implements engine-side representations of OS and
//! input events - keys, mouse buttons, the event queue they are polled from and
//! per-frame pointer snapshots.
//!
//! # Model
//! There is no global mutable input state: the host game polls
//! [`InputEvent`]s from the [`EventQueue`] and takes [`PointerState`] snapshots,
//! then passes both by reference into whichever widget or state needs them.
//!

use crate::mathcore::vectors::Point;
use sdl2::{
    event::{Event as SdlEvent, WindowEvent as SdlWindowEvent},
    keyboard::Keycode as SdlKeycode,
    mouse::{MouseButton as SdlMouseButton, MouseState as SdlMouseState},
    EventPump as SdlEventPump,
};
use std::fmt;

/// [`Key`] enum lists keyboard keys that the engine recognizes.
///
/// Keys that the engine has no representation for arrive as [`Key::Unknown`].
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)] // key names speak for themselves
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    Up,
    Down,
    Left,
    Right,

    Return,
    Backspace,
    Escape,
    Space,
    Tab,

    LShift,
    RShift,
    LCtrl,
    RCtrl,

    /// Any key the engine has no representation for.
    ///
    Unknown,
}
impl Key {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Converts `sdl2` Keycode to [`Key`].
    ///
    pub(crate) fn from_sdl_keycode(keycode: SdlKeycode) -> Key {
        match keycode {
            SdlKeycode::A => Key::A,
            SdlKeycode::B => Key::B,
            SdlKeycode::C => Key::C,
            SdlKeycode::D => Key::D,
            SdlKeycode::E => Key::E,
            SdlKeycode::F => Key::F,
            SdlKeycode::G => Key::G,
            SdlKeycode::H => Key::H,
            SdlKeycode::I => Key::I,
            SdlKeycode::J => Key::J,
            SdlKeycode::K => Key::K,
            SdlKeycode::L => Key::L,
            SdlKeycode::M => Key::M,
            SdlKeycode::N => Key::N,
            SdlKeycode::O => Key::O,
            SdlKeycode::P => Key::P,
            SdlKeycode::Q => Key::Q,
            SdlKeycode::R => Key::R,
            SdlKeycode::S => Key::S,
            SdlKeycode::T => Key::T,
            SdlKeycode::U => Key::U,
            SdlKeycode::V => Key::V,
            SdlKeycode::W => Key::W,
            SdlKeycode::X => Key::X,
            SdlKeycode::Y => Key::Y,
            SdlKeycode::Z => Key::Z,

            SdlKeycode::Num0 => Key::Num0,
            SdlKeycode::Num1 => Key::Num1,
            SdlKeycode::Num2 => Key::Num2,
            SdlKeycode::Num3 => Key::Num3,
            SdlKeycode::Num4 => Key::Num4,
            SdlKeycode::Num5 => Key::Num5,
            SdlKeycode::Num6 => Key::Num6,
            SdlKeycode::Num7 => Key::Num7,
            SdlKeycode::Num8 => Key::Num8,
            SdlKeycode::Num9 => Key::Num9,

            SdlKeycode::Up => Key::Up,
            SdlKeycode::Down => Key::Down,
            SdlKeycode::Left => Key::Left,
            SdlKeycode::Right => Key::Right,

            SdlKeycode::Return => Key::Return,
            SdlKeycode::Backspace => Key::Backspace,
            SdlKeycode::Escape => Key::Escape,
            SdlKeycode::Space => Key::Space,
            SdlKeycode::Tab => Key::Tab,

            SdlKeycode::LShift => Key::LShift,
            SdlKeycode::RShift => Key::RShift,
            SdlKeycode::LCtrl => Key::LCtrl,
            SdlKeycode::RCtrl => Key::RCtrl,

            _ => Key::Unknown,
        }
    }
}

/// [`MouseButton`] enum lists buttons supported by the mouse.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left mouse button.
    ///
    Left,
    /// The right mouse button.
    ///
    Right,
    /// The middle (wheel) mouse button.
    ///
    Middle,
    /// The first extra mouse button.
    ///
    XButton1,
    /// The second extra mouse button.
    ///
    XButton2,
}
impl MouseButton {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Converts `sdl2` MouseButton to [`MouseButton`].
    ///
    /// `None` corresponds to a button the engine has no representation for.
    ///
    pub(crate) fn from_sdl_mouse_button(mouse_button: SdlMouseButton) -> Option<MouseButton> {
        match mouse_button {
            SdlMouseButton::Left => Some(MouseButton::Left),
            SdlMouseButton::Right => Some(MouseButton::Right),
            SdlMouseButton::Middle => Some(MouseButton::Middle),
            SdlMouseButton::X1 => Some(MouseButton::XButton1),
            SdlMouseButton::X2 => Some(MouseButton::XButton2),
            SdlMouseButton::Unknown => None,
        }
    }
}

/// [`InputEvent`] enum lists OS and input events the engine delivers to the game.
///
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The window was requested to close.
    ///
    Closed,
    /// The window was resized.
    ///
    Resized {
        /// New width of the window.
        ///
        width: u32,
        /// New height of the window.
        ///
        height: u32,
    },

    /// Printable text was entered.
    ///
    TextEntered {
        /// Entered text in UTF-8.
        ///
        text: String,
    },
    /// A keyboard key went down.
    ///
    KeyPressed {
        /// The key that went down.
        ///
        key: Key,
    },
    /// A keyboard key went up.
    ///
    KeyReleased {
        /// The key that went up.
        ///
        key: Key,
    },

    /// The mouse pointer moved.
    ///
    MouseMoved {
        /// New pointer position in window coordinates.
        ///
        position: Point,
    },
    /// A mouse button went down.
    ///
    MouseButtonPressed {
        /// The button that went down.
        ///
        button: MouseButton,
        /// Pointer position at the moment of the press.
        ///
        position: Point,
    },
    /// A mouse button went up.
    ///
    MouseButtonReleased {
        /// The button that went up.
        ///
        button: MouseButton,
        /// Pointer position at the moment of the release.
        ///
        position: Point,
    },
    /// The mouse wheel was scrolled.
    ///
    WheelScrolled {
        /// Scrolled amount, positive away from the user.
        ///
        delta: f32,
    },
}
impl InputEvent {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Converts `sdl2` event to [`InputEvent`].
    ///
    /// `None` corresponds to an event the engine has no representation for.
    ///
    pub(crate) fn from_sdl_event(event: SdlEvent) -> Option<InputEvent> {
        match event {
            SdlEvent::Quit { .. } => Some(InputEvent::Closed),
            SdlEvent::Window {
                win_event: SdlWindowEvent::Resized(width, height),
                ..
            } => Some(InputEvent::Resized {
                width: width.unsigned_abs(),
                height: height.unsigned_abs(),
            }),

            SdlEvent::TextInput { text, .. } => Some(InputEvent::TextEntered { text }),
            SdlEvent::KeyDown {
                keycode: Some(keycode),
                ..
            } => Some(InputEvent::KeyPressed {
                key: Key::from_sdl_keycode(keycode),
            }),
            SdlEvent::KeyUp {
                keycode: Some(keycode),
                ..
            } => Some(InputEvent::KeyReleased {
                key: Key::from_sdl_keycode(keycode),
            }),

            SdlEvent::MouseMotion { x, y, .. } => Some(InputEvent::MouseMoved {
                position: Point {
                    x: x as f32,
                    y: y as f32,
                },
            }),
            SdlEvent::MouseButtonDown {
                mouse_btn, x, y, ..
            } => MouseButton::from_sdl_mouse_button(mouse_btn).map(|button| {
                InputEvent::MouseButtonPressed {
                    button,
                    position: Point {
                        x: x as f32,
                        y: y as f32,
                    },
                }
            }),
            SdlEvent::MouseButtonUp {
                mouse_btn, x, y, ..
            } => MouseButton::from_sdl_mouse_button(mouse_btn).map(|button| {
                InputEvent::MouseButtonReleased {
                    button,
                    position: Point {
                        x: x as f32,
                        y: y as f32,
                    },
                }
            }),
            SdlEvent::MouseWheel { precise_y, .. } => Some(InputEvent::WheelScrolled {
                delta: precise_y,
            }),

            _ => None,
        }
    }
}

/// [`PointerState`] struct is a per-frame snapshot of the mouse pointer.
///
/// Snapshots are plain values: they are taken from the [`EventQueue`] once per
/// frame and passed by reference into widgets, which keeps cursor state out of
/// global variables and makes widget logic testable without a live window.
///
/// # Example
/// ```rust
/// # use driftengine::gamecore::inputs::PointerState;
/// # use driftengine::mathcore::vectors::Point;
/// let pointer: PointerState = PointerState {
///     position: Point { x: 10.0, y: 20.0 },
///     left: true,
///     ..PointerState::default()
/// };
/// assert!(pointer.left);
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position in window coordinates.
    ///
    pub position: Point,
    /// Whether the left mouse button is held.
    ///
    pub left: bool,
    /// Whether the right mouse button is held.
    ///
    pub right: bool,
    /// Whether the middle mouse button is held.
    ///
    pub middle: bool,
}
impl PointerState {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Converts `sdl2` mouse state to [`PointerState`].
    ///
    pub(crate) fn from_sdl_mouse_state(mouse_state: SdlMouseState) -> PointerState {
        PointerState {
            position: Point {
                x: mouse_state.x() as f32,
                y: mouse_state.y() as f32,
            },
            left: mouse_state.left(),
            right: mouse_state.right(),
            middle: mouse_state.middle(),
        }
    }
}

/// [`EventQueue`] struct is the engine-side face of the OS event queue.
///
/// The host game loop drains it every frame:
///
/// ```rust, no_run
/// # use driftengine::DriftEngine;
/// # use driftengine::gamecore::inputs::{EventQueue, InputEvent};
/// let engine: DriftEngine = DriftEngine::init();
/// let mut events: EventQueue = engine.event_queue();
/// loop {
///     while let Some(event) = events.poll() {
///         if event == InputEvent::Closed {
///             return;
///         }
///     }
///     let pointer = events.pointer();
///     // feed `pointer` and polled events into states and widgets
/// }
/// ```
///
pub struct EventQueue {
    /// Underlying `sdl2` event pump.
    ///
    pump: SdlEventPump,
}
impl EventQueue {
    // All functions that are providing gate between `driftengine` and `sdl2` extend their API to `crate` visibility.
    /// Initializes [`EventQueue`] from `sdl2` event pump.
    ///
    pub(crate) fn from_sdl_event_pump(pump: SdlEventPump) -> EventQueue {
        EventQueue { pump }
    }

    /// Polls the next pending event the engine recognizes, or `None` when the
    /// queue is drained for this frame.
    ///
    pub fn poll(&mut self) -> Option<InputEvent> {
        while let Some(event) = self.pump.poll_event() {
            if let Some(input_event) = InputEvent::from_sdl_event(event) {
                return Some(input_event);
            }
        }
        None
    }

    /// Takes a snapshot of the current mouse pointer state.
    ///
    pub fn pointer(&self) -> PointerState {
        PointerState::from_sdl_mouse_state(self.pump.mouse_state())
    }
}
impl fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventQueue")
    }
}
