//! The floating action button state machine.
//!
//! [`FloatingActionButton`] owns the current pose transition, an elevation
//! animator, and two clocks on the host's shared ticker. The host feeds it
//! touch events and pose/elevation assignments; it answers with a sampled
//! [`FabFrame`] or a positioned [`FabLayout`] for the current tick. All
//! remaining work (painting, gesture recognition, text measurement) stays
//! on the host side.
//!
//! # Example
//!
//! ```
//! use vela_fab::{FabIcon, FabPose, FloatingActionButton, Size};
//! use vela_fab_core::TickerHandle;
//!
//! let ticker = TickerHandle::new();
//! let mut fab = FloatingActionButton::builder()
//!     .icon(FabIcon::new(Size::new(24.0, 24.0)))
//!     .build(&ticker)
//!     .unwrap();
//!
//! fab.set_pose(FabPose::MiniIcon).unwrap();
//! assert!(fab.is_transitioning());
//! ```

use std::fmt;
use std::time::Duration;

use vela_fab_core::{ClockId, Signal, TickerHandle};

use crate::animation::Easing;
use crate::color::Color;
use crate::elevation::ElevationAnimator;
use crate::error::{Error, Result};
use crate::frame::FabFrame;
use crate::geometry::Size;
use crate::layout::FabLayout;
use crate::pose::FabPose;
use crate::theme::FabTheme;
use crate::transition::PoseTransition;

/// How long a pose change animates.
pub const POSE_TRANSITION_DURATION: Duration = Duration::from_millis(250);

/// How long an elevation change animates.
pub const ELEVATION_TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Resting shadow depth when none is configured.
pub const DEFAULT_ELEVATION: f32 = 6.0;

/// Shadow depth while pressed when none is configured.
pub const DEFAULT_RAISED_ELEVATION: f32 = 12.0;

/// Icon content descriptor.
///
/// The engine only needs the icon's natural size; what the icon actually
/// is stays a host concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabIcon {
    /// Natural size of the icon, in logical pixels.
    pub size: Size,
}

impl FabIcon {
    /// An icon with the given natural size.
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Default for FabIcon {
    /// The standard 24 x 24 icon box.
    fn default() -> Self {
        Self {
            size: Size::new(24.0, 24.0),
        }
    }
}

/// Label content descriptor.
///
/// `size` is the measured extent of `text` in the host's font; the host
/// measures once before construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FabLabel {
    pub text: String,
    /// Measured extent of `text`, in logical pixels.
    pub size: Size,
}

impl FabLabel {
    pub fn new(text: impl Into<String>, size: Size) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }
}

/// Configuration for a [`FloatingActionButton`].
///
/// Obtained via [`FloatingActionButton::builder`]. At least one of
/// [`icon`](Self::icon) and [`label`](Self::label) must be supplied or
/// [`build`](Self::build) fails with [`Error::MissingContent`].
pub struct FabButtonBuilder {
    theme: FabTheme,
    background: Option<Color>,
    foreground: Option<Color>,
    icon: Option<FabIcon>,
    label: Option<FabLabel>,
    elevation: f32,
    raised_elevation: f32,
    raise_on_touch: bool,
    pose: FabPose,
    easing: Easing,
    on_pressed: Option<Box<dyn Fn(&()) + Send + Sync>>,
    on_touch_down: Option<Box<dyn Fn(&()) + Send + Sync>>,
    on_touch_up: Option<Box<dyn Fn(&()) + Send + Sync>>,
}

impl FabButtonBuilder {
    fn new() -> Self {
        Self {
            theme: FabTheme::default(),
            background: None,
            foreground: None,
            icon: None,
            label: None,
            elevation: DEFAULT_ELEVATION,
            raised_elevation: DEFAULT_RAISED_ELEVATION,
            raise_on_touch: true,
            pose: FabPose::Icon,
            easing: Easing::FastOutSlowIn,
            on_pressed: None,
            on_touch_down: None,
            on_touch_up: None,
        }
    }

    /// The theme supplying colors not explicitly overridden.
    pub fn theme(mut self, theme: FabTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Override the surface color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Override the content color.
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// The icon content.
    pub fn icon(mut self, icon: FabIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// The label content.
    pub fn label(mut self, label: FabLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// Resting shadow depth. Default 6.0.
    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    /// Shadow depth while pressed. Default 12.0.
    pub fn raised_elevation(mut self, elevation: f32) -> Self {
        self.raised_elevation = elevation;
        self
    }

    /// Whether touch-down raises the shadow. Default true.
    pub fn raise_on_touch(mut self, raise: bool) -> Self {
        self.raise_on_touch = raise;
        self
    }

    /// The initial pose. Default [`FabPose::Icon`].
    pub fn pose(mut self, pose: FabPose) -> Self {
        self.pose = pose;
        self
    }

    /// The easing curve for every animation on this button. Default
    /// [`Easing::FastOutSlowIn`].
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Connects `callback` to the
    /// [`pressed`](FloatingActionButton::pressed) signal at build time.
    pub fn on_pressed(mut self, callback: impl Fn(&()) + Send + Sync + 'static) -> Self {
        self.on_pressed = Some(Box::new(callback));
        self
    }

    /// Connects `callback` to the
    /// [`touch_down`](FloatingActionButton::touch_down) signal at build
    /// time.
    pub fn on_touch_down(mut self, callback: impl Fn(&()) + Send + Sync + 'static) -> Self {
        self.on_touch_down = Some(Box::new(callback));
        self
    }

    /// Connects `callback` to the
    /// [`touch_up`](FloatingActionButton::touch_up) signal at build time.
    pub fn on_touch_up(mut self, callback: impl Fn(&()) + Send + Sync + 'static) -> Self {
        self.on_touch_up = Some(Box::new(callback));
        self
    }

    /// Builds the button, registering its two clocks on `ticker`.
    ///
    /// Fails with [`Error::MissingContent`] when neither icon nor label is
    /// set, and with [`Error::UnhandledTransition`] when the initial pose
    /// is [`FabPose::Hidden`].
    pub fn build(self, ticker: &TickerHandle) -> Result<FloatingActionButton> {
        if self.icon.is_none() && self.label.is_none() {
            return Err(Error::MissingContent);
        }
        // A fresh button sits in an identity transition at its initial
        // pose; this also rejects Hidden up front.
        let transition = PoseTransition::new(self.pose, self.pose)?;

        let pose_clock = ticker.register(POSE_TRANSITION_DURATION);
        let elevation = ElevationAnimator::new(
            ticker.clone(),
            ELEVATION_TRANSITION_DURATION,
            self.elevation,
        );

        tracing::debug!(
            target: "vela_fab::button",
            pose = ?self.pose,
            elevation = self.elevation,
            "floating action button built"
        );

        let button = FloatingActionButton {
            background: self.background.unwrap_or(self.theme.accent),
            foreground: self.foreground.unwrap_or(self.theme.on_accent),
            icon: self.icon,
            label: self.label,
            easing: self.easing,
            transition,
            base_elevation: self.elevation,
            raised_elevation: self.raised_elevation,
            raise_on_touch: self.raise_on_touch,
            pressed_down: false,
            ticker: ticker.clone(),
            pose_clock,
            elevation,
            pressed: Signal::new(),
            touch_down: Signal::new(),
            touch_up: Signal::new(),
            state_changed: Signal::new(),
        };

        if let Some(callback) = self.on_pressed {
            button.pressed.connect(callback);
        }
        if let Some(callback) = self.on_touch_down {
            button.touch_down.connect(callback);
        }
        if let Some(callback) = self.on_touch_up {
            button.touch_up.connect(callback);
        }

        Ok(button)
    }
}

/// An animated floating action button.
///
/// Construct one via [`builder`](Self::builder). Mutations go through
/// [`set_pose`](Self::set_pose), [`set_elevation`](Self::set_elevation) and
/// the touch handlers; per-tick output comes from
/// [`current_frame`](Self::current_frame) or [`layout`](Self::layout).
///
/// Dropping the button releases both of its clocks from the ticker.
pub struct FloatingActionButton {
    background: Color,
    foreground: Color,
    icon: Option<FabIcon>,
    label: Option<FabLabel>,
    easing: Easing,

    /// Always valid; identity until the first pose change.
    transition: PoseTransition,
    base_elevation: f32,
    raised_elevation: f32,
    raise_on_touch: bool,
    pressed_down: bool,

    ticker: TickerHandle,
    pose_clock: ClockId,
    elevation: ElevationAnimator,

    pressed: Signal<()>,
    touch_down: Signal<()>,
    touch_up: Signal<()>,
    state_changed: Signal<()>,
}

impl FloatingActionButton {
    /// Starts configuring a new button.
    pub fn builder() -> FabButtonBuilder {
        FabButtonBuilder::new()
    }

    // ===== Pose =====

    /// The pose the button is at or heading toward.
    #[inline]
    pub fn pose(&self) -> FabPose {
        self.transition.to_pose()
    }

    /// The pose the current transition started from, or `None` if the
    /// button has never changed pose.
    pub fn previous_pose(&self) -> Option<FabPose> {
        if self.transition.is_identity() {
            None
        } else {
            Some(self.transition.from_pose())
        }
    }

    /// Starts animating toward `pose`.
    ///
    /// Setting the current pose again is a no-op. [`FabPose::Hidden`] is
    /// rejected with [`Error::UnhandledTransition`] before any state
    /// changes, so a failed call leaves the button exactly as it was.
    pub fn set_pose(&mut self, pose: FabPose) -> Result<()> {
        if pose == self.pose() {
            return Ok(());
        }
        let transition = PoseTransition::new(self.pose(), pose)?;

        tracing::trace!(
            target: "vela_fab::button",
            from = ?transition.from_pose(),
            to = ?pose,
            "pose change"
        );
        self.transition = transition;
        // The clock is owned by this button for its whole lifetime.
        let _ = self.ticker.restart(self.pose_clock);
        self.state_changed.emit(());
        Ok(())
    }

    /// Normalized progress of the pose transition. 1.0 when settled.
    pub fn pose_progress(&self) -> f32 {
        self.ticker.progress(self.pose_clock)
    }

    /// Whether a pose transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.ticker.is_running(self.pose_clock)
    }

    /// Whether anything on this button is still animating.
    pub fn is_animating(&self) -> bool {
        self.is_transitioning() || !self.elevation.is_settled()
    }

    // ===== Elevation =====

    /// The resting shadow depth.
    ///
    /// This is the committed target, available immediately after
    /// [`set_elevation`](Self::set_elevation); the rendered value catches
    /// up over [`ELEVATION_TRANSITION_DURATION`].
    #[inline]
    pub fn elevation(&self) -> f32 {
        self.base_elevation
    }

    /// Sets the resting shadow depth, animating from the currently
    /// rendered value.
    ///
    /// While a press holds the button raised, the new resting depth takes
    /// effect on release.
    pub fn set_elevation(&mut self, elevation: f32) {
        self.base_elevation = elevation;
        if !(self.pressed_down && self.raise_on_touch) {
            self.elevation.retarget(elevation, self.easing);
        }
        self.state_changed.emit(());
    }

    /// The shadow depth while pressed.
    #[inline]
    pub fn raised_elevation(&self) -> f32 {
        self.raised_elevation
    }

    /// Sets the pressed shadow depth, retargeting immediately if a press
    /// is currently holding the button raised.
    pub fn set_raised_elevation(&mut self, elevation: f32) {
        self.raised_elevation = elevation;
        if self.pressed_down && self.raise_on_touch {
            self.elevation.retarget(elevation, self.easing);
        }
        self.state_changed.emit(());
    }

    /// The shadow depth to draw this frame.
    pub fn rendered_elevation(&self) -> f32 {
        self.elevation.rendered(self.easing)
    }

    /// Whether touch-down raises the shadow.
    #[inline]
    pub fn raise_on_touch(&self) -> bool {
        self.raise_on_touch
    }

    /// Sets whether touch-down raises the shadow.
    ///
    /// Toggling during a press retargets the shadow immediately, so the
    /// held button lowers to the resting depth on disable and raises on
    /// enable.
    pub fn set_raise_on_touch(&mut self, raise: bool) {
        self.raise_on_touch = raise;
        if self.pressed_down {
            let target = if raise {
                self.raised_elevation
            } else {
                self.base_elevation
            };
            self.elevation.retarget(target, self.easing);
        }
        self.state_changed.emit(());
    }

    // ===== Touch =====

    /// Notifies the button that a touch landed on it.
    ///
    /// Raises the shadow when [`raise_on_touch`](Self::raise_on_touch) is
    /// set, then emits [`touch_down`](Self::touch_down).
    pub fn handle_touch_down(&mut self) {
        self.pressed_down = true;
        if self.raise_on_touch {
            self.elevation.retarget(self.raised_elevation, self.easing);
        }
        tracing::trace!(target: "vela_fab::button", "touch down");
        self.touch_down.emit(());
        self.state_changed.emit(());
    }

    /// Notifies the button that the touch lifted while still over it.
    ///
    /// Lowers the shadow back toward the resting depth, emits
    /// [`touch_up`](Self::touch_up), and then [`pressed`](Self::pressed)
    /// for the completed tap. Ignored without a preceding touch-down.
    pub fn handle_touch_up(&mut self) {
        if !self.pressed_down {
            return;
        }
        self.pressed_down = false;
        if self.raise_on_touch {
            self.elevation.retarget(self.base_elevation, self.easing);
        }
        tracing::trace!(target: "vela_fab::button", "touch up");
        self.touch_up.emit(());
        self.pressed.emit(());
        self.state_changed.emit(());
    }

    /// Notifies the button that the touch left it or was taken over by a
    /// scroll.
    ///
    /// Lowers the shadow like a release but does not count as a tap, so
    /// [`pressed`](Self::pressed) does not fire.
    pub fn handle_touch_cancel(&mut self) {
        if !self.pressed_down {
            return;
        }
        self.pressed_down = false;
        if self.raise_on_touch {
            self.elevation.retarget(self.base_elevation, self.easing);
        }
        tracing::trace!(target: "vela_fab::button", "touch cancel");
        self.state_changed.emit(());
    }

    /// Whether a touch is currently held on the button.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed_down
    }

    // ===== Output =====

    /// Samples the current transition at the current clock progress.
    pub fn current_frame(&self) -> FabFrame {
        self.transition.frame(self.pose_progress(), self.easing)
    }

    /// Positions the configured content under the current frame.
    pub fn layout(&self) -> FabLayout {
        FabLayout::compute(
            &self.current_frame(),
            self.icon.map(|icon| icon.size),
            self.label.as_ref().map(|label| label.size),
        )
    }

    // ===== Appearance =====

    /// The surface color.
    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.state_changed.emit(());
    }

    /// The content color.
    #[inline]
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
        self.state_changed.emit(());
    }

    #[inline]
    pub fn icon(&self) -> Option<&FabIcon> {
        self.icon.as_ref()
    }

    #[inline]
    pub fn label(&self) -> Option<&FabLabel> {
        self.label.as_ref()
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    // ===== Signals =====

    /// Emitted after a completed tap (touch-down then touch-up on the
    /// button).
    pub fn pressed(&self) -> &Signal<()> {
        &self.pressed
    }

    /// Emitted when a touch lands on the button.
    pub fn touch_down(&self) -> &Signal<()> {
        &self.touch_down
    }

    /// Emitted when a touch lifts off the button.
    pub fn touch_up(&self) -> &Signal<()> {
        &self.touch_up
    }

    /// Emitted after every discrete state change (pose, elevation, colors,
    /// touch state). Per-tick animation updates are reported through the
    /// ticker instead.
    pub fn state_changed(&self) -> &Signal<()> {
        &self.state_changed
    }
}

impl fmt::Debug for FloatingActionButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatingActionButton")
            .field("pose", &self.pose())
            .field("elevation", &self.base_elevation)
            .field("pressed", &self.pressed_down)
            .field("transitioning", &self.is_transitioning())
            .finish()
    }
}

impl Drop for FloatingActionButton {
    fn drop(&mut self) {
        // The elevation animator releases its own clock.
        let _ = self.ticker.release(self.pose_clock);
    }
}

static_assertions::assert_impl_all!(FloatingActionButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn icon_button(ticker: &TickerHandle) -> FloatingActionButton {
        FloatingActionButton::builder()
            .icon(FabIcon::default())
            .build(ticker)
            .unwrap()
    }

    #[test]
    fn test_build_requires_icon_or_label() {
        let ticker = TickerHandle::new();
        let err = FloatingActionButton::builder().build(&ticker).unwrap_err();
        assert_eq!(err, Error::MissingContent);
        assert_eq!(err.to_string(), "one of icon and label must be non-null");

        assert!(FloatingActionButton::builder()
            .icon(FabIcon::default())
            .build(&ticker)
            .is_ok());
        assert!(FloatingActionButton::builder()
            .label(FabLabel::new("Compose", Size::new(64.0, 20.0)))
            .build(&ticker)
            .is_ok());
    }

    #[test]
    fn test_build_rejects_hidden_initial_pose() {
        let ticker = TickerHandle::new();
        let err = FloatingActionButton::builder()
            .icon(FabIcon::default())
            .pose(FabPose::Hidden)
            .build(&ticker)
            .unwrap_err();
        assert_eq!(
            err,
            Error::unhandled_transition(FabPose::Hidden, FabPose::Hidden)
        );
        assert_eq!(ticker.clock_count(), 0);
    }

    #[test]
    fn test_new_button_is_settled_at_initial_pose() {
        let ticker = TickerHandle::new();
        let fab = icon_button(&ticker);

        assert_eq!(fab.pose(), FabPose::Icon);
        assert_eq!(fab.previous_pose(), None);
        assert!(!fab.is_transitioning());
        assert_eq!(fab.current_frame(), FabPose::Icon.steady_frame().unwrap());
    }

    #[test]
    fn test_set_pose_starts_transition() {
        let ticker = TickerHandle::new();
        let mut fab = icon_button(&ticker);

        fab.set_pose(FabPose::IconAndLabel).unwrap();
        assert_eq!(fab.pose(), FabPose::IconAndLabel);
        assert_eq!(fab.previous_pose(), Some(FabPose::Icon));
        assert!(fab.is_transitioning());
        assert_eq!(fab.pose_progress(), 0.0);
        // Progress 0 still renders the old pose.
        assert_eq!(fab.current_frame(), FabPose::Icon.steady_frame().unwrap());

        ticker.advance(POSE_TRANSITION_DURATION);
        assert!(!fab.is_transitioning());
        assert_eq!(
            fab.current_frame(),
            FabPose::IconAndLabel.steady_frame().unwrap()
        );
    }

    #[test]
    fn test_set_same_pose_is_a_noop() {
        let ticker = TickerHandle::new();
        let mut fab = icon_button(&ticker);
        let changes = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&changes);
        fab.state_changed().connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        fab.set_pose(FabPose::Icon).unwrap();
        assert!(!fab.is_transitioning());
        assert_eq!(fab.pose_progress(), 1.0);
        assert_eq!(changes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_pose_hidden_fails_without_mutating() {
        let ticker = TickerHandle::new();
        let mut fab = icon_button(&ticker);

        let err = fab.set_pose(FabPose::Hidden).unwrap_err();
        assert_eq!(
            err,
            Error::unhandled_transition(FabPose::Icon, FabPose::Hidden)
        );
        assert_eq!(fab.pose(), FabPose::Icon);
        assert_eq!(fab.previous_pose(), None);
        assert!(!fab.is_transitioning());
    }

    #[test]
    fn test_elevation_reads_back_immediately() {
        let ticker = TickerHandle::new();
        let mut fab = icon_button(&ticker);

        assert_eq!(fab.elevation(), DEFAULT_ELEVATION);
        fab.set_elevation(9.0);
        assert_eq!(fab.elevation(), 9.0);
        // The rendered value lags behind the committed target.
        assert_eq!(fab.rendered_elevation(), DEFAULT_ELEVATION);

        ticker.advance(ELEVATION_TRANSITION_DURATION);
        assert_eq!(fab.rendered_elevation(), 9.0);
    }

    #[test]
    fn test_touch_raises_and_lowers_elevation() {
        let ticker = TickerHandle::new();
        let mut fab = icon_button(&ticker);

        fab.handle_touch_down();
        assert!(fab.is_pressed());
        ticker.advance(ELEVATION_TRANSITION_DURATION);
        assert_eq!(fab.rendered_elevation(), DEFAULT_RAISED_ELEVATION);
        // The resting depth is untouched by the press.
        assert_eq!(fab.elevation(), DEFAULT_ELEVATION);

        fab.handle_touch_up();
        assert!(!fab.is_pressed());
        ticker.advance(ELEVATION_TRANSITION_DURATION);
        assert_eq!(fab.rendered_elevation(), DEFAULT_ELEVATION);
    }

    #[test]
    fn test_touch_without_raise_on_touch_keeps_elevation() {
        let ticker = TickerHandle::new();
        let mut fab = FloatingActionButton::builder()
            .icon(FabIcon::default())
            .raise_on_touch(false)
            .build(&ticker)
            .unwrap();

        fab.handle_touch_down();
        ticker.advance(ELEVATION_TRANSITION_DURATION);
        assert_eq!(fab.rendered_elevation(), DEFAULT_ELEVATION);
        fab.handle_touch_up();
    }

    #[test]
    fn test_tap_fires_signals_in_order() {
        let ticker = TickerHandle::new();
        let mut fab = icon_button(&ticker);
        let log = Arc::new(std::sync::Mutex::new(Vec::new()));

        let down_log = Arc::clone(&log);
        fab.touch_down()
            .connect(move |_| down_log.lock().unwrap().push("down"));
        let up_log = Arc::clone(&log);
        fab.touch_up()
            .connect(move |_| up_log.lock().unwrap().push("up"));
        let pressed_log = Arc::clone(&log);
        fab.pressed()
            .connect(move |_| pressed_log.lock().unwrap().push("pressed"));

        fab.handle_touch_down();
        fab.handle_touch_up();
        assert_eq!(*log.lock().unwrap(), vec!["down", "up", "pressed"]);
    }

    #[test]
    fn test_builder_callbacks_connect_to_signals() {
        let ticker = TickerHandle::new();
        let taps = Arc::new(AtomicU32::new(0));
        let downs = Arc::new(AtomicU32::new(0));
        let ups = Arc::new(AtomicU32::new(0));

        let tap_counter = Arc::clone(&taps);
        let down_counter = Arc::clone(&downs);
        let up_counter = Arc::clone(&ups);
        let mut fab = FloatingActionButton::builder()
            .icon(FabIcon::default())
            .on_pressed(move |_| {
                tap_counter.fetch_add(1, Ordering::SeqCst);
            })
            .on_touch_down(move |_| {
                down_counter.fetch_add(1, Ordering::SeqCst);
            })
            .on_touch_up(move |_| {
                up_counter.fetch_add(1, Ordering::SeqCst);
            })
            .build(&ticker)
            .unwrap();

        fab.handle_touch_down();
        assert_eq!(downs.load(Ordering::SeqCst), 1);
        assert_eq!(taps.load(Ordering::SeqCst), 0);

        fab.handle_touch_up();
        assert_eq!(ups.load(Ordering::SeqCst), 1);
        assert_eq!(taps.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_does_not_count_as_tap() {
        let ticker = TickerHandle::new();
        let mut fab = icon_button(&ticker);
        let taps = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&taps);
        fab.pressed().connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        fab.handle_touch_down();
        fab.handle_touch_cancel();
        assert!(!fab.is_pressed());
        assert_eq!(taps.load(Ordering::SeqCst), 0);

        // A stray up after the cancel is ignored too.
        fab.handle_touch_up();
        assert_eq!(taps.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_elevation_during_press_defers_to_release() {
        let ticker = TickerHandle::new();
        let mut fab = icon_button(&ticker);

        fab.handle_touch_down();
        ticker.advance(ELEVATION_TRANSITION_DURATION);
        fab.set_elevation(2.0);
        // Still raised while held.
        assert_eq!(fab.rendered_elevation(), DEFAULT_RAISED_ELEVATION);

        fab.handle_touch_up();
        ticker.advance(ELEVATION_TRANSITION_DURATION);
        assert_eq!(fab.rendered_elevation(), 2.0);
    }

    #[test]
    fn test_disable_raise_on_touch_during_press_lowers() {
        let ticker = TickerHandle::new();
        let mut fab = icon_button(&ticker);
        let changes = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&changes);

        fab.handle_touch_down();
        ticker.advance(ELEVATION_TRANSITION_DURATION);
        assert_eq!(fab.rendered_elevation(), DEFAULT_RAISED_ELEVATION);

        fab.state_changed().connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        fab.set_raise_on_touch(false);
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        fab.handle_touch_up();
        ticker.advance(ELEVATION_TRANSITION_DURATION);
        assert_eq!(fab.rendered_elevation(), DEFAULT_ELEVATION);
        assert!(!fab.is_animating());
    }

    #[test]
    fn test_enable_raise_on_touch_during_press_raises() {
        let ticker = TickerHandle::new();
        let mut fab = FloatingActionButton::builder()
            .icon(FabIcon::default())
            .raise_on_touch(false)
            .build(&ticker)
            .unwrap();

        fab.handle_touch_down();
        assert_eq!(fab.rendered_elevation(), DEFAULT_ELEVATION);

        fab.set_raise_on_touch(true);
        ticker.advance(ELEVATION_TRANSITION_DURATION);
        assert_eq!(fab.rendered_elevation(), DEFAULT_RAISED_ELEVATION);

        fab.handle_touch_up();
        ticker.advance(ELEVATION_TRANSITION_DURATION);
        assert_eq!(fab.rendered_elevation(), DEFAULT_ELEVATION);
        assert!(!fab.is_animating());
    }

    #[test]
    fn test_colors_resolve_from_theme_unless_overridden() {
        let ticker = TickerHandle::new();
        let themed = icon_button(&ticker);
        assert_eq!(themed.background(), FabTheme::light().accent);
        assert_eq!(themed.foreground(), FabTheme::light().on_accent);

        let overridden = FloatingActionButton::builder()
            .icon(FabIcon::default())
            .background(Color::BLACK)
            .build(&ticker)
            .unwrap();
        assert_eq!(overridden.background(), Color::BLACK);
        assert_eq!(overridden.foreground(), FabTheme::light().on_accent);
    }

    #[test]
    fn test_drop_releases_both_clocks() {
        let ticker = TickerHandle::new();
        let fab = icon_button(&ticker);
        assert_eq!(ticker.clock_count(), 2);

        drop(fab);
        assert_eq!(ticker.clock_count(), 0);
    }

    #[test]
    fn test_layout_reflects_current_frame() {
        let ticker = TickerHandle::new();
        let fab = icon_button(&ticker);
        let layout = fab.layout();
        assert_eq!(layout.size, Size::new(56.0, 56.0));
        assert_eq!(layout.icon.opacity, 1.0);
    }
}
