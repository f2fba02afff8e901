//! Drag-to-confirm slider guarding the factory reset.
//!
//! The thumb travels from 0 to `track_width - thumb_width`. Releasing it past
//! the threshold fraction of that travel unlocks the reset; anything short
//! of that snaps it back to the start.

/// Result of releasing the slider thumb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No drag was in progress.
    Ignored,
    /// The thumb did not travel far enough and snapped back.
    SnappedBack,
    /// The thumb passed the threshold; the reset confirmation should show.
    Unlocked,
}

/// Reset slider state.
#[derive(Clone, Debug, PartialEq)]
pub struct ResetGesture {
    thumb_width: f32,
    threshold: f32,
    max_move: f32,
    start_x: f32,
    position: f32,
    dragging: bool,
    unlocked: bool,
}

impl ResetGesture {
    /// Create a slider with the given thumb width and unlock threshold.
    #[must_use]
    pub fn new(thumb_width: f32, threshold: f32) -> Self {
        Self {
            thumb_width,
            threshold,
            max_move: 0.0,
            start_x: 0.0,
            position: 0.0,
            dragging: false,
            unlocked: false,
        }
    }

    /// Start dragging at pointer `x` on a track `track_width` wide.
    pub fn begin(&mut self, x: f32, track_width: f32) {
        self.dragging = true;
        self.start_x = x;
        self.max_move = (track_width - self.thumb_width).max(0.0);
    }

    /// Move the pointer to `x`. Ignored unless a drag is in progress.
    pub fn drag(&mut self, x: f32) {
        if !self.dragging {
            return;
        }
        self.position = (x - self.start_x).clamp(0.0, self.max_move);
    }

    /// Release the thumb.
    pub fn release(&mut self) -> GestureOutcome {
        if !self.dragging {
            return GestureOutcome::Ignored;
        }
        self.dragging = false;

        if self.max_move > 0.0 && self.position > self.max_move * self.threshold {
            self.position = self.max_move;
            self.unlocked = true;
            GestureOutcome::Unlocked
        } else {
            self.reset();
            GestureOutcome::SnappedBack
        }
    }

    /// Put the thumb back at the start.
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.dragging = false;
        self.unlocked = false;
    }

    /// Thumb offset from the start of the track.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Fraction of the travel covered, 0.0..=1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.max_move > 0.0 {
            self.position / self.max_move
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> ResetGesture {
        // 350 track - 50 thumb = 300 travel, unlock past 270
        let mut g = ResetGesture::new(50.0, 0.9);
        g.begin(10.0, 350.0);
        g
    }

    #[test]
    fn test_full_drag_unlocks() {
        let mut g = slider();
        g.drag(400.0);
        assert_eq!(g.position(), 300.0);
        assert_eq!(g.release(), GestureOutcome::Unlocked);
        assert!(g.is_unlocked());
        assert_eq!(g.progress(), 1.0);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut g = slider();
        g.drag(10.0 + 260.0);
        assert_eq!(g.release(), GestureOutcome::SnappedBack);
        assert!(!g.is_unlocked());
        assert_eq!(g.position(), 0.0);
    }

    #[test]
    fn test_just_past_threshold_unlocks() {
        let mut g = slider();
        g.drag(10.0 + 275.0);
        assert_eq!(g.release(), GestureOutcome::Unlocked);
        assert_eq!(g.position(), 300.0);
    }

    #[test]
    fn test_drag_clamps_backwards() {
        let mut g = slider();
        g.drag(-50.0);
        assert_eq!(g.position(), 0.0);
    }

    #[test]
    fn test_drag_without_begin_is_ignored() {
        let mut g = ResetGesture::new(50.0, 0.9);
        g.drag(200.0);
        assert_eq!(g.position(), 0.0);
        assert_eq!(g.release(), GestureOutcome::Ignored);
    }

    #[test]
    fn test_track_narrower_than_thumb_never_unlocks() {
        let mut g = ResetGesture::new(50.0, 0.9);
        g.begin(0.0, 40.0);
        g.drag(100.0);
        assert_eq!(g.release(), GestureOutcome::SnappedBack);
    }

    #[test]
    fn test_reset() {
        let mut g = slider();
        g.drag(400.0);
        g.release();
        g.reset();
        assert!(!g.is_unlocked());
        assert_eq!(g.position(), 0.0);
        assert!(!g.is_dragging());
    }
}
