//! `graphicscore::parallax` submodule implements [`Parallax`] - the engine that
//! repositions a sequence of background panels to create an infinite-scroll illusion.
//!
//! # Model
//! Panels are laid out edge to edge (plus a configurable gap) along the scroll axis.
//! Every frame each panel is moved by `speed * dt`; a panel that has fully left the
//! visible area is recycled to the far end of the chain - panel *objects* keep their
//! slot in the sequence, only their *position* is recomputed, so the per-frame cost
//! stays O(n) with no reallocation or reordering.
//!
//! Scrolling runs in one of four cardinal directions. The direction can be changed
//! at runtime (panels snap to the new canonical layout), overridden for a single
//! one-shot nudge ([`Parallax::scroll_once`]) or suspended entirely for input-driven
//! manual scrolling ([`Parallax::set_manual_scroll`]).
//!

use crate::{
    graphicscore::{
        drawing::WindowCanvas,
        sprites::Sprite,
        textures::TextureCreator,
        Viewport,
    },
    mathcore::vectors::Vector2,
};
use log::{debug, warn};
use std::{cell::RefCell, fmt, io::Error, path::Path, rc::Rc};

/// [`Panel`] trait defines the operations the parallax engine requires from a
/// background element - position access, size access and drawing. Nothing more.
///
/// [`Sprite`] implements this trait, and so does `Rc<RefCell<P>>` for any panel type,
/// which allows a game to keep handles to panels that are attached to the engine.
///
pub trait Panel {
    /// Returns x coordinate of top-left corner of panel.
    ///
    fn position_x(&self) -> f32;
    /// Returns y coordinate of top-left corner of panel.
    ///
    fn position_y(&self) -> f32;

    /// Places top-left corner of panel at given coordinates.
    ///
    fn set_position(&mut self, x: f32, y: f32);
    /// Places top-left corner of panel at given x coordinate, keeping y.
    ///
    fn set_position_x(&mut self, x: f32) {
        let y = self.position_y();
        self.set_position(x, y);
    }
    /// Places top-left corner of panel at given y coordinate, keeping x.
    ///
    fn set_position_y(&mut self, y: f32) {
        let x = self.position_x();
        self.set_position(x, y);
    }

    /// Moves panel along x axis by given delta.
    ///
    fn move_x(&mut self, delta: f32) {
        self.set_position_x(self.position_x() + delta);
    }
    /// Moves panel along y axis by given delta.
    ///
    fn move_y(&mut self, delta: f32) {
        self.set_position_y(self.position_y() + delta);
    }

    /// Returns width of panel.
    ///
    fn width(&self) -> f32;
    /// Returns height of panel.
    ///
    fn height(&self) -> f32;

    /// Draws panel on the canvas.
    ///
    fn draw(&self, canvas: &mut WindowCanvas);
}
impl<P: Panel> Panel for Rc<RefCell<P>> {
    fn position_x(&self) -> f32 {
        self.borrow().position_x()
    }
    fn position_y(&self) -> f32 {
        self.borrow().position_y()
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.borrow_mut().set_position(x, y);
    }

    fn width(&self) -> f32 {
        self.borrow().width()
    }
    fn height(&self) -> f32 {
        self.borrow().height()
    }

    fn draw(&self, canvas: &mut WindowCanvas) {
        self.borrow().draw(canvas);
    }
}

/// [`ScrollDirection`] enum lists cardinal directions in which backgrounds can scroll.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Panels travel towards negative x.
    ///
    Left,
    /// Panels travel towards positive x.
    ///
    Right,
    /// Panels travel towards negative y.
    ///
    Up,
    /// Panels travel towards positive y.
    ///
    Down,
}
impl ScrollDirection {
    /// Returns orientation of the axis this direction scrolls along.
    ///
    /// # Example
    /// ```rust
    /// # use driftengine::graphicscore::parallax::{ScrollDirection, ScrollOrientation};
    /// assert_eq!(ScrollDirection::Left.orientation(), ScrollOrientation::Horizontal);
    /// assert_eq!(ScrollDirection::Down.orientation(), ScrollOrientation::Vertical);
    /// ```
    ///
    pub fn orientation(self) -> ScrollOrientation {
        match self {
            ScrollDirection::Left | ScrollDirection::Right => ScrollOrientation::Horizontal,
            ScrollDirection::Up | ScrollDirection::Down => ScrollOrientation::Vertical,
        }
    }
}
/// [`ScrollOrientation`] enum lists axes along which backgrounds can be grouped.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollOrientation {
    /// Panels are chained along x axis.
    ///
    Horizontal,
    /// Panels are chained along y axis.
    ///
    Vertical,
}

/// Default automatic scroll speed in units per second.
///
const DEFAULT_SCROLL_SPEED: f32 = 100.0;

/// [`Parallax`] struct manages an ordered sequence of background panels and
/// repositions them seamlessly to create an infinite-scroll illusion.
///
/// The engine owns the panels that are attached to it. To keep access to attached
/// panels, attach `Rc<RefCell<P>>` handles instead of plain panels (the
/// [`Panel`] trait is implemented for them as well).
///
/// # Example
/// ```rust
/// # use driftengine::graphicscore::{parallax::{Panel, Parallax, ScrollDirection}, Viewport, drawing::WindowCanvas};
/// struct Solid {
///     x: f32,
///     y: f32,
/// }
/// impl Panel for Solid {
///     fn position_x(&self) -> f32 { self.x }
///     fn position_y(&self) -> f32 { self.y }
///     fn set_position(&mut self, x: f32, y: f32) { self.x = x; self.y = y; }
///     fn width(&self) -> f32 { 640.0 }
///     fn height(&self) -> f32 { 480.0 }
///     fn draw(&self, _canvas: &mut WindowCanvas) {}
/// }
///
/// let mut parallax: Parallax<Solid> = Parallax::new(Viewport::new(640.0, 480.0));
/// parallax.set_backgrounds(vec![Solid { x: 0.0, y: 0.0 }, Solid { x: 0.0, y: 0.0 }]);
/// parallax.set_direction(ScrollDirection::Right);
/// parallax.update(1.0 / 60.0);
/// ```
///
pub struct Parallax<P: Panel> {
    /// Ordered sequence of managed panels.
    ///
    /// Order defines layout chaining; the sequence is never reordered at runtime.
    ///
    backgrounds: Vec<P>,
    /// Visible extent used as the exit boundary for Right/Down travel.
    ///
    viewport: Viewport,

    /// Current scroll direction.
    ///
    direction: ScrollDirection,
    /// Direction set at configuration time, restored by [`Parallax::reset`].
    ///
    original_direction: ScrollDirection,
    /// Current scroll orientation.
    ///
    orientation: ScrollOrientation,

    /// Scroll speed in units per second, never negative.
    ///
    speed: f32,
    /// Gap inserted between consecutive panels during layout.
    ///
    offset: Vector2,

    /// Whether the current motion is a one-shot that stops after the next update.
    ///
    single_scroll: bool,
}
impl<P: Panel> Parallax<P> {
    /// Initializes empty [`Parallax`] engine with given viewport.
    ///
    /// Defaults are leftward automatic scrolling at 100 units per second with no gap
    /// between panels.
    ///
    pub fn new(viewport: Viewport) -> Self {
        Parallax {
            backgrounds: Vec::new(),
            viewport,

            direction: ScrollDirection::Left,
            original_direction: ScrollDirection::Left,
            orientation: ScrollOrientation::Horizontal,

            speed: DEFAULT_SCROLL_SPEED,
            offset: Vector2::zero(),

            single_scroll: false,
        }
    }

    /// Replaces the managed sequence with given panels and hard-snaps them
    /// to the canonical layout (no animation).
    ///
    pub fn set_backgrounds(&mut self, backgrounds: Vec<P>) {
        debug!("attaching {} parallax panels", backgrounds.len());
        self.backgrounds = backgrounds;
        self.snap_layout();
    }
    /// Returns the managed panel sequence.
    ///
    pub fn backgrounds(&self) -> &[P] {
        &self.backgrounds
    }

    /// Advances every panel along the scroll axis and recycles the ones that have
    /// fully left the visible area.
    ///
    /// A panel that exits past the trailing boundary (world origin for Left/Up,
    /// viewport extent for Right/Down) is repositioned to sit immediately past the
    /// panel at the far end of the chain, with the configured gap applied. The far
    /// end is the ring predecessor in sequence order for Left/Up and the ring
    /// successor for Right/Down, mirroring the chaining order of the layout. When
    /// that neighbour has not been moved yet within this pass, the step of this
    /// frame is applied on top so the chain is seamless after the whole pass.
    ///
    /// Panel objects never change their slot in the sequence - only positions are
    /// recomputed.
    ///
    /// If the current motion was started by [`Parallax::scroll_once`], the speed is
    /// reset to zero at the end of the pass.
    ///
    pub fn update(&mut self, dt: f32) {
        let count = self.backgrounds.len();
        let step = self.speed * dt;
        for i in 0..count {
            // ring neighbour at the far end of the chain; a neighbour that comes
            // later in this pass has not been moved yet, so the step of this frame
            // is compensated on top of its current position
            let (target, compensation) = match self.direction {
                ScrollDirection::Left | ScrollDirection::Up => {
                    if i == 0 {
                        (count - 1, step)
                    } else {
                        (i - 1, 0.0)
                    }
                }
                ScrollDirection::Right | ScrollDirection::Down => {
                    if i == count - 1 {
                        (0, 0.0)
                    } else {
                        (i + 1, step)
                    }
                }
            };
            match self.direction {
                ScrollDirection::Left => {
                    self.backgrounds[i].move_x(-step);
                    if self.backgrounds[i].position_x() + self.backgrounds[i].width() < 0.0 {
                        let edge = self.backgrounds[target].position_x()
                            + self.backgrounds[target].width()
                            + self.offset.x;
                        self.backgrounds[i].set_position_x(edge - compensation);
                    }
                }
                ScrollDirection::Right => {
                    self.backgrounds[i].move_x(step);
                    if self.backgrounds[i].position_x() > self.viewport.width {
                        let edge = self.backgrounds[target].position_x()
                            - self.backgrounds[i].width()
                            - self.offset.x;
                        self.backgrounds[i].set_position_x(edge + compensation);
                    }
                }
                ScrollDirection::Up => {
                    self.backgrounds[i].move_y(-step);
                    if self.backgrounds[i].position_y() + self.backgrounds[i].height() < 0.0 {
                        let edge = self.backgrounds[target].position_y()
                            + self.backgrounds[target].height()
                            + self.offset.y;
                        self.backgrounds[i].set_position_y(edge - compensation);
                    }
                }
                ScrollDirection::Down => {
                    self.backgrounds[i].move_y(step);
                    if self.backgrounds[i].position_y() > self.viewport.height {
                        let edge = self.backgrounds[target].position_y()
                            - self.backgrounds[i].height()
                            - self.offset.y;
                        self.backgrounds[i].set_position_y(edge + compensation);
                    }
                }
            }
        }

        if self.single_scroll {
            self.speed = 0.0;
            self.single_scroll = false;
        }
    }

    /// Draws every panel in sequence order.
    ///
    pub fn draw(&self, canvas: &mut WindowCanvas) {
        for background in &self.backgrounds {
            background.draw(canvas);
        }
    }

    /// Sets new scroll speed in units per second.
    ///
    /// Negative values are clamped to zero.
    ///
    pub fn set_speed(&mut self, speed: f32) {
        if speed < 0.0 {
            warn!("negative parallax speed {} clamped to 0", speed);
            self.speed = 0.0;
        } else {
            self.speed = speed;
        }
    }
    /// Returns current scroll speed.
    ///
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Sets new steady scroll direction, derives orientation from it and
    /// hard-snaps panels to the canonical layout of that direction.
    ///
    pub fn set_direction(&mut self, direction: ScrollDirection) {
        debug!("parallax direction set to {:?}", direction);
        self.direction = direction;
        self.original_direction = direction;
        self.orientation = direction.orientation();
        self.snap_layout();
    }
    /// Returns current scroll direction.
    ///
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Overrides orientation independently of direction.
    ///
    pub fn set_orientation(&mut self, orientation: ScrollOrientation) {
        self.orientation = orientation;
    }
    /// Returns current scroll orientation.
    ///
    pub fn orientation(&self) -> ScrollOrientation {
        self.orientation
    }

    /// Switches the engine to input-driven scrolling: sets given orientation,
    /// stops automatic movement and establishes a deterministic baseline direction
    /// (Right for horizontal, Down for vertical) for subsequent manual nudges.
    ///
    pub fn set_manual_scroll(&mut self, orientation: ScrollOrientation) {
        self.orientation = orientation;
        self.speed = 0.0;
        self.direction = match orientation {
            ScrollOrientation::Horizontal => ScrollDirection::Right,
            ScrollOrientation::Vertical => ScrollDirection::Down,
        };
    }

    /// Starts a one-shot motion: panels move with given direction and speed on the
    /// next [`Parallax::update`] call only, after which the speed resets to zero.
    ///
    /// The configured steady direction is untouched; [`Parallax::reset`] returns
    /// the engine to it.
    ///
    pub fn scroll_once(&mut self, direction: ScrollDirection, speed: f32) {
        self.direction = direction;
        self.set_speed(speed);
        self.single_scroll = true;
    }

    /// Restores the steady scroll direction that was set at configuration time and
    /// hard-snaps panels to its canonical layout.
    ///
    pub fn reset(&mut self) {
        self.direction = self.original_direction;
        self.orientation = self.direction.orientation();
        self.snap_layout();
    }

    /// Sets new gap between consecutive panels and hard-snaps the layout.
    ///
    pub fn set_offset(&mut self, offset_x: f32, offset_y: f32) {
        self.offset = Vector2 {
            x: offset_x,
            y: offset_y,
        };
        self.snap_layout();
    }
    /// Returns current gap between consecutive panels.
    ///
    pub fn offset(&self) -> Vector2 {
        self.offset
    }

    /// Sets new visible extent used as the exit boundary.
    ///
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
    /// Returns visible extent used as the exit boundary.
    ///
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Recomputes every panel position to the canonical layout of the current direction.
    ///
    /// For Left/Up the sequence is chained forward: panel 0 is the anchor at the
    /// offset point and every next panel sits past its predecessor along the axis.
    /// For Right/Down the chaining is reversed: the last panel is the anchor and
    /// every preceding panel sits before its successor. The anchor panel is always
    /// the one that enters the visible area first.
    ///
    fn snap_layout(&mut self) {
        let count = self.backgrounds.len();
        if count == 0 {
            return;
        }
        match self.direction {
            ScrollDirection::Left => {
                self.backgrounds[0].set_position(self.offset.x, self.offset.y);
                for i in 1..count {
                    let edge = self.backgrounds[i - 1].position_x()
                        + self.backgrounds[i - 1].width()
                        + self.offset.x;
                    self.backgrounds[i].set_position(edge, self.offset.y);
                }
            }
            ScrollDirection::Right => {
                self.backgrounds[count - 1].set_position(self.offset.x, self.offset.y);
                for i in (0..count - 1).rev() {
                    let edge = self.backgrounds[i + 1].position_x()
                        - self.backgrounds[i].width()
                        - self.offset.x;
                    self.backgrounds[i].set_position(edge, self.offset.y);
                }
            }
            ScrollDirection::Up => {
                self.backgrounds[0].set_position(self.offset.x, self.offset.y);
                for i in 1..count {
                    let edge = self.backgrounds[i - 1].position_y()
                        + self.backgrounds[i - 1].height()
                        + self.offset.y;
                    self.backgrounds[i].set_position(self.offset.x, edge);
                }
            }
            ScrollDirection::Down => {
                self.backgrounds[count - 1].set_position(self.offset.x, self.offset.y);
                for i in (0..count - 1).rev() {
                    let edge = self.backgrounds[i + 1].position_y()
                        - self.backgrounds[i].height()
                        - self.offset.y;
                    self.backgrounds[i].set_position(self.offset.x, edge);
                }
            }
        }
    }
}
impl<'a> Parallax<Sprite<'a>> {
    /// Replaces the managed sequence with sprites constructed from given image files
    /// (the engine owns them), then hard-snaps the layout.
    ///
    /// The first file that fails to load aborts the whole attachment and leaves the
    /// previously attached panels in place.
    ///
    pub fn set_backgrounds_from_files(
        &mut self,
        texture_creator: &'a TextureCreator,
        filenames: &[impl AsRef<Path>],
    ) -> Result<(), Error> {
        let mut backgrounds: Vec<Sprite<'a>> = Vec::with_capacity(filenames.len());
        for filename in filenames {
            backgrounds.push(Sprite::from_file(texture_creator, filename)?);
        }
        self.set_backgrounds(backgrounds);
        Ok(())
    }
}
impl<P: Panel> fmt::Debug for Parallax<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parallax")
            .field("panels", &self.backgrounds.len())
            .field("direction", &self.direction)
            .field("speed", &self.speed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Panel, Parallax, ScrollDirection, ScrollOrientation};
    use crate::graphicscore::{drawing::WindowCanvas, Viewport};

    struct TestPanel {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    }
    impl TestPanel {
        fn sized(width: f32, height: f32) -> Self {
            TestPanel {
                x: 0.0,
                y: 0.0,
                width,
                height,
            }
        }
    }
    impl Panel for TestPanel {
        fn position_x(&self) -> f32 {
            self.x
        }
        fn position_y(&self) -> f32 {
            self.y
        }
        fn set_position(&mut self, x: f32, y: f32) {
            self.x = x;
            self.y = y;
        }
        fn width(&self) -> f32 {
            self.width
        }
        fn height(&self) -> f32 {
            self.height
        }
        fn draw(&self, _canvas: &mut WindowCanvas) {}
    }

    fn engine_with_panels(count: usize) -> Parallax<TestPanel> {
        let mut parallax: Parallax<TestPanel> = Parallax::new(Viewport::new(800.0, 600.0));
        parallax.set_backgrounds((0..count).map(|_| TestPanel::sized(100.0, 50.0)).collect());
        parallax
    }

    fn positions(parallax: &Parallax<TestPanel>) -> Vec<(f32, f32)> {
        parallax
            .backgrounds()
            .iter()
            .map(|panel| (panel.x, panel.y))
            .collect()
    }

    #[test]
    fn defaults() {
        let parallax: Parallax<TestPanel> = Parallax::new(Viewport::new(800.0, 600.0));
        assert_eq!(parallax.speed(), 100.0);
        assert_eq!(parallax.direction(), ScrollDirection::Left);
        assert_eq!(parallax.orientation(), ScrollOrientation::Horizontal);
        assert_eq!(parallax.offset().elements(), [0.0, 0.0]);
    }

    #[test]
    fn layout_left_chains_forward() {
        let parallax = engine_with_panels(3);
        assert_eq!(
            positions(&parallax),
            vec![(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]
        );
    }

    #[test]
    fn layout_right_chains_backward() {
        let mut parallax = engine_with_panels(3);
        parallax.set_direction(ScrollDirection::Right);
        assert_eq!(
            positions(&parallax),
            vec![(-200.0, 0.0), (-100.0, 0.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn layout_vertical_directions() {
        let mut parallax = engine_with_panels(3);

        parallax.set_direction(ScrollDirection::Up);
        assert_eq!(parallax.orientation(), ScrollOrientation::Vertical);
        assert_eq!(
            positions(&parallax),
            vec![(0.0, 0.0), (0.0, 50.0), (0.0, 100.0)]
        );

        parallax.set_direction(ScrollDirection::Down);
        assert_eq!(
            positions(&parallax),
            vec![(0.0, -100.0), (0.0, -50.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn layout_respects_offset() {
        let mut parallax = engine_with_panels(3);
        parallax.set_offset(10.0, 5.0);
        assert_eq!(
            positions(&parallax),
            vec![(10.0, 5.0), (120.0, 5.0), (230.0, 5.0)]
        );
    }

    #[test]
    fn offset_is_idempotent() {
        let mut parallax = engine_with_panels(3);
        parallax.set_offset(10.0, 5.0);
        let once = positions(&parallax);
        parallax.set_offset(10.0, 5.0);
        assert_eq!(positions(&parallax), once);
    }

    #[test]
    fn direction_change_redrives_orientation_and_snaps() {
        let mut parallax = engine_with_panels(2);
        parallax.set_direction(ScrollDirection::Left);
        assert_eq!(parallax.orientation(), ScrollOrientation::Horizontal);

        parallax.set_direction(ScrollDirection::Up);
        assert_eq!(parallax.orientation(), ScrollOrientation::Vertical);
        assert_eq!(positions(&parallax), vec![(0.0, 0.0), (0.0, 50.0)]);
    }

    #[test]
    fn speed_clamps_negative_to_zero() {
        let mut parallax = engine_with_panels(2);
        parallax.set_speed(-5.0);
        assert_eq!(parallax.speed(), 0.0);
    }

    #[test]
    fn update_moves_panels_along_direction() {
        let mut parallax = engine_with_panels(3);
        parallax.set_speed(100.0);
        parallax.update(0.5);
        assert_eq!(
            positions(&parallax),
            vec![(-50.0, 0.0), (50.0, 0.0), (150.0, 0.0)]
        );
    }

    #[test]
    fn left_scroll_recycles_panel_to_chain_end() {
        // 3 panels of 100x50 scrolling left at 100 units/s in 50-unit steps:
        // panel 0 exits after the third step and must trail panel 2, not reset to 0.
        let mut parallax = engine_with_panels(3);
        parallax.set_speed(100.0);

        parallax.update(0.5);
        parallax.update(0.5);
        parallax.update(0.5);

        let layout = positions(&parallax);
        assert_eq!(layout[1], (-50.0, 0.0));
        assert_eq!(layout[2], (50.0, 0.0));
        // recycled panel 0 sits exactly one panel width past panel 2
        assert_eq!(layout[0], (150.0, 0.0));
    }

    #[test]
    fn right_scroll_recycles_panel_to_chain_start() {
        let mut parallax = engine_with_panels(3);
        parallax.set_direction(ScrollDirection::Right);
        parallax.set_speed(100.0);

        // anchor panel 2 starts at 0 and exits once its left edge passes the
        // viewport width of 800, which happens on the 17th 50-unit step
        for _ in 0..17 {
            parallax.update(0.5);
        }

        let layout = positions(&parallax);
        assert_eq!(layout[0], (650.0, 0.0));
        assert_eq!(layout[1], (750.0, 0.0));
        // recycled panel 2 leads the chain one panel width before panel 0
        assert_eq!(layout[2], (550.0, 0.0));
    }

    #[test]
    fn wrap_applies_offset_gap() {
        let mut parallax = engine_with_panels(3);
        parallax.set_offset(10.0, 0.0);
        parallax.set_speed(100.0);

        // layout: 10, 120, 230; panel 0 exits when x + width < 0, i.e. below -100
        for _ in 0..3 {
            parallax.update(0.5);
        }
        let layout = positions(&parallax);
        // panel 0 travelled 10 - 150 = -140 < -100 and was recycled past panel 2
        // with the configured gap
        assert_eq!(layout[0].0, layout[2].0 + 100.0 + 10.0);
    }

    #[test]
    fn single_scroll_self_terminates() {
        let mut parallax = engine_with_panels(2);
        parallax.scroll_once(ScrollDirection::Right, 50.0);
        assert_eq!(parallax.speed(), 50.0);
        assert_eq!(parallax.direction(), ScrollDirection::Right);

        parallax.update(0.1);
        assert_eq!(parallax.speed(), 0.0);

        parallax.update(0.1);
        assert_eq!(parallax.speed(), 0.0);
    }

    #[test]
    fn reset_restores_configured_direction() {
        let mut parallax = engine_with_panels(2);
        parallax.set_direction(ScrollDirection::Left);
        let configured = positions(&parallax);

        parallax.scroll_once(ScrollDirection::Up, 30.0);
        parallax.update(0.5);
        assert_ne!(positions(&parallax), configured);

        parallax.reset();
        assert_eq!(parallax.direction(), ScrollDirection::Left);
        assert_eq!(parallax.orientation(), ScrollOrientation::Horizontal);
        assert_eq!(positions(&parallax), configured);
    }

    #[test]
    fn manual_scroll_stops_and_rebases_direction() {
        let mut parallax = engine_with_panels(2);
        parallax.set_manual_scroll(ScrollOrientation::Vertical);
        assert_eq!(parallax.speed(), 0.0);
        assert_eq!(parallax.direction(), ScrollDirection::Down);
        assert_eq!(parallax.orientation(), ScrollOrientation::Vertical);

        parallax.set_manual_scroll(ScrollOrientation::Horizontal);
        assert_eq!(parallax.direction(), ScrollDirection::Right);
    }

    #[test]
    fn empty_sequence_is_noop() {
        let mut parallax: Parallax<TestPanel> = Parallax::new(Viewport::new(800.0, 600.0));
        parallax.update(0.5);
        parallax.set_direction(ScrollDirection::Down);
        parallax.set_offset(3.0, 4.0);
        assert!(parallax.backgrounds().is_empty());
    }

    #[test]
    fn single_panel_self_wraps() {
        let mut parallax = engine_with_panels(1);
        parallax.set_speed(100.0);

        parallax.update(0.6);
        assert_eq!(positions(&parallax), vec![(-60.0, 0.0)]);

        // x + width = -20 < 0: the panel wraps relative to itself and re-enters
        // at the boundary instead of indexing out of bounds
        parallax.update(0.6);
        assert_eq!(positions(&parallax), vec![(-80.0, 0.0)]);
    }
}
