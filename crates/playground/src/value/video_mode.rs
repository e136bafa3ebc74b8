//! Share-semantics video mode descriptor

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::Dimensions;

/// The fields of a video mode.
///
/// This is the owned, plain-data view. It is what a [`VideoMode`] handle
/// points at and what [`VideoMode::snapshot`] hands back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoModeState {
    /// Pixel resolution of the mode
    pub dimensions: Dimensions,

    /// Whether the mode is interlaced
    pub interlaced: bool,

    /// Frames per second
    pub frame_rate: f64,

    /// Optional display name (e.g. "1080i")
    pub name: Option<String>,
}

/// A shared handle to a video mode.
///
/// Cloning the handle does not copy the mode: both handles point at the same
/// heap allocation and every mutation is visible through all of them. Use
/// [`VideoMode::duplicate`] for an independent instance.
///
/// Mutation goes through `&self`. Setters must not be called from inside an
/// [`VideoMode::update`] closure on the same instance.
#[derive(Clone, Default)]
pub struct VideoMode {
    pub(super) inner: Rc<RefCell<VideoModeState>>,
}

impl VideoMode {
    /// Create a new instance with default field values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new instance from explicit field values.
    pub fn from_state(state: VideoModeState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    /// Current resolution (a copy, since `Dimensions` is a value type)
    pub fn dimensions(&self) -> Dimensions {
        self.inner.borrow().dimensions
    }

    /// Replace the resolution
    pub fn set_dimensions(&self, dimensions: Dimensions) {
        self.inner.borrow_mut().dimensions = dimensions;
    }

    /// Whether the mode is interlaced
    pub fn interlaced(&self) -> bool {
        self.inner.borrow().interlaced
    }

    /// Set the interlaced flag
    pub fn set_interlaced(&self, interlaced: bool) {
        self.inner.borrow_mut().interlaced = interlaced;
    }

    /// Frames per second
    pub fn frame_rate(&self) -> f64 {
        self.inner.borrow().frame_rate
    }

    /// Set frames per second
    pub fn set_frame_rate(&self, frame_rate: f64) {
        self.inner.borrow_mut().frame_rate = frame_rate;
    }

    /// Display name, if any
    pub fn name(&self) -> Option<String> {
        self.inner.borrow().name.clone()
    }

    /// Set the display name
    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.borrow_mut().name = Some(name.into());
    }

    /// Clear the display name
    pub fn clear_name(&self) {
        self.inner.borrow_mut().name = None;
    }

    /// Mutate the shared state in place.
    ///
    /// Useful for reaching into the nested `Dimensions` without a
    /// read-modify-write round trip:
    ///
    /// ```
    /// use playground::VideoMode;
    ///
    /// let mode = VideoMode::new();
    /// mode.update(|state| state.dimensions.width = 1280);
    /// assert_eq!(mode.dimensions().width, 1280);
    /// ```
    pub fn update<R>(&self, f: impl FnOnce(&mut VideoModeState) -> R) -> R {
        f(&mut *self.inner.borrow_mut())
    }

    /// Owned copy of the current field values.
    pub fn snapshot(&self) -> VideoModeState {
        self.inner.borrow().clone()
    }

    /// A new, separately allocated instance with the same field values.
    ///
    /// The result compares equal by [`snapshot`](Self::snapshot) but is never
    /// identical to `self`.
    pub fn duplicate(&self) -> Self {
        Self::from_state(self.snapshot())
    }

    /// Number of live handles sharing this instance.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl fmt::Debug for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VideoMode")
            .field(&*self.inner.borrow())
            .finish()
    }
}

/// Change the frame rate of a mode passed by handle.
///
/// The caller's handle observes the change, unlike a `Dimensions` passed by
/// value to [`Dimensions::widened`].
pub fn retime(mode: &VideoMode, frame_rate: f64) {
    mode.set_frame_rate(frame_rate);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mode = VideoMode::new();
        assert_eq!(mode.dimensions(), Dimensions::default());
        assert!(!mode.interlaced());
        assert_eq!(mode.frame_rate(), 0.0);
        assert_eq!(mode.name(), None);
    }

    #[test]
    fn test_clone_shares() {
        let a = VideoMode::new();
        let b = a.clone();
        b.set_frame_rate(30.0);
        assert_eq!(a.frame_rate(), 30.0);
        assert_eq!(a.handle_count(), 2);
    }

    #[test]
    fn test_update_nested_width() {
        let mode = VideoMode::new();
        mode.update(|state| state.dimensions.width = 1280);
        assert_eq!(mode.dimensions().width, 1280);
        assert_eq!(mode.dimensions().height, 0);
    }

    #[test]
    fn test_dimensions_getter_returns_copy() {
        let mode = VideoMode::new();
        let mut dims = mode.dimensions();
        dims.width = 99;
        assert_eq!(dims.width, 99);
        assert_eq!(mode.dimensions().width, 0);
    }

    #[test]
    fn test_duplicate_is_detached() {
        let a = VideoMode::new();
        a.set_name("720p");
        let b = a.duplicate();
        b.set_frame_rate(60.0);

        assert_eq!(a.frame_rate(), 0.0);
        assert_eq!(b.name().as_deref(), Some("720p"));
        assert_eq!(a.handle_count(), 1);
    }

    #[test]
    fn test_clear_name() {
        let mode = VideoMode::new();
        mode.set_name("1080i");
        mode.clear_name();
        assert_eq!(mode.name(), None);
    }

    #[test]
    fn test_retime_through_borrow() {
        let mode = VideoMode::new();
        retime(&mode, 24.0);
        assert_eq!(mode.frame_rate(), 24.0);
    }

    #[test]
    fn test_debug_shows_fields() {
        let mode = VideoMode::new();
        mode.set_name("1080i");
        let s = format!("{:?}", mode);
        assert!(s.starts_with("VideoMode(VideoModeState {"));
        assert!(s.contains("\"1080i\""));
    }
}
