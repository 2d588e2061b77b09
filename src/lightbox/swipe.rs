// SPDX-License-Identifier: MPL-2.0
//! Swipe adapter: translates horizontal drag gestures into navigation.
//!
//! The tracker records the horizontal coordinate at gesture start and at each
//! move; on gesture end it compares the signed delta against a minimum swipe
//! distance. A drag rightward (positive delta, revealing content to the left)
//! requests the previous image; a drag leftward requests the next one. Only
//! horizontal movement is considered.

/// Minimum horizontal travel, in logical units, for a gesture to register as
/// a swipe. Deltas at or below this produce no transition.
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;

/// Swipe sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    /// Last known pointer x, tracked between gestures so mouse-button
    /// presses (which carry no position) can start a gesture.
    cursor_x: Option<f32>,
    gesture: Option<Gesture>,
    min_distance: f32,
}

#[derive(Debug, Clone, Copy)]
struct Gesture {
    start_x: f32,
    last_x: f32,
}

/// Messages for the swipe sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer moved to a horizontal position (finger move or cursor move).
    Moved(f32),
    /// Gesture began at a known horizontal position (touch press).
    Started(f32),
    /// Gesture began at the last tracked position (mouse button press).
    Pressed,
    /// Gesture ended; evaluate the accumulated delta.
    Ended,
    /// Gesture was cancelled (finger lost); discard without a transition.
    Cancelled,
}

/// Effects produced when a gesture completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Swipe right: go to the previous image.
    Previous,
    /// Swipe left: go to the next image.
    Next,
}

impl Default for State {
    fn default() -> Self {
        Self {
            cursor_x: None,
            gesture: None,
            min_distance: MIN_SWIPE_DISTANCE,
        }
    }
}

impl State {
    /// Creates a tracker with the default minimum swipe distance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the minimum swipe distance (configuration hook).
    #[must_use]
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Handle a swipe message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Moved(x) => {
                self.cursor_x = Some(x);
                if let Some(gesture) = &mut self.gesture {
                    gesture.last_x = x;
                }
                Effect::None
            }
            Message::Started(x) => {
                self.cursor_x = Some(x);
                self.gesture = Some(Gesture {
                    start_x: x,
                    last_x: x,
                });
                Effect::None
            }
            Message::Pressed => {
                if let Some(x) = self.cursor_x {
                    self.gesture = Some(Gesture {
                        start_x: x,
                        last_x: x,
                    });
                }
                Effect::None
            }
            Message::Ended => {
                let Some(gesture) = self.gesture.take() else {
                    return Effect::None;
                };

                let delta = gesture.last_x - gesture.start_x;
                if delta.abs() > self.min_distance {
                    if delta > 0.0 {
                        Effect::Previous
                    } else {
                        Effect::Next
                    }
                } else {
                    Effect::None
                }
            }
            Message::Cancelled => {
                self.gesture = None;
                Effect::None
            }
        }
    }

    /// Drops any in-progress gesture, keeping cursor tracking.
    pub fn reset(&mut self) {
        self.gesture = None;
    }

    /// Whether a gesture is currently being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.gesture.is_some()
    }
}
