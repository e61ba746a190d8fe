//! Input mapping for the lightbox
//!
//! Turns raw keyboard keys and touch coordinates into [`LightboxCommand`]s.

use crate::core::lightbox::{Direction, LightboxCommand};

/// Minimum horizontal travel (logical px) for a touch to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 44.0;

/// Classify a finished touch by its displacement.
///
/// Swipe left (negative `dx`) advances, swipe right goes back. Gestures shorter
/// than `threshold`, zero-length, or mostly vertical are ignored.
pub fn classify_swipe(dx: f64, dy: f64, threshold: f64) -> Option<Direction> {
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }

    if dx.abs() < threshold || dx.abs() <= dy.abs() {
        return None;
    }

    if dx < 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Previous)
    }
}

/// Tracks one touch from start to end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeDetector {
    threshold: f64,
    origin: Option<(f64, f64)>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeDetector {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            origin: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
    }

    /// Finish the gesture; an end without a start yields nothing
    pub fn touch_end(&mut self, x: f64, y: f64) -> Option<LightboxCommand> {
        let (x0, y0) = self.origin.take()?;
        classify_swipe(x - x0, y - y0, self.threshold).map(LightboxCommand::Navigate)
    }

    pub fn touch_cancel(&mut self) {
        self.origin = None;
    }
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<LightboxCommand> {
    match key {
        "ArrowLeft" => Some(LightboxCommand::Navigate(Direction::Previous)),
        "ArrowRight" => Some(LightboxCommand::Navigate(Direction::Next)),
        "Escape" | "Esc" => Some(LightboxCommand::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_swipe_ignored() {
        assert_eq!(classify_swipe(20.0, 0.0, 44.0), None);
        assert_eq!(classify_swipe(-20.0, 0.0, 44.0), None);
    }

    #[test]
    fn test_swipe_left_is_next() {
        assert_eq!(classify_swipe(-60.0, 5.0, 44.0), Some(Direction::Next));
    }

    #[test]
    fn test_swipe_right_is_previous() {
        assert_eq!(classify_swipe(60.0, -5.0, 44.0), Some(Direction::Previous));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(classify_swipe(-44.0, 0.0, 44.0), Some(Direction::Next));
    }

    #[test]
    fn test_zero_and_vertical_gestures_ignored() {
        assert_eq!(classify_swipe(0.0, 0.0, 44.0), None);
        assert_eq!(classify_swipe(-60.0, 120.0, 44.0), None);
        assert_eq!(classify_swipe(50.0, 50.0, 44.0), None);
        assert_eq!(classify_swipe(f64::NAN, 0.0, 44.0), None);
    }

    #[test]
    fn test_detector_tracks_origin() {
        let mut detector = SwipeDetector::default();
        detector.touch_start(200.0, 100.0);

        assert_eq!(
            detector.touch_end(140.0, 102.0),
            Some(LightboxCommand::Navigate(Direction::Next))
        );
        // Origin consumed
        assert_eq!(detector.touch_end(0.0, 0.0), None);
    }

    #[test]
    fn test_detector_cancel_and_custom_threshold() {
        let mut detector = SwipeDetector::new(100.0);
        detector.touch_start(0.0, 0.0);
        assert_eq!(detector.touch_end(60.0, 0.0), None);

        detector.touch_start(0.0, 0.0);
        detector.touch_cancel();
        assert_eq!(detector.touch_end(300.0, 0.0), None);
        assert_eq!(detector.threshold(), 100.0);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            command_for_key("ArrowLeft"),
            Some(LightboxCommand::Navigate(Direction::Previous))
        );
        assert_eq!(
            command_for_key("ArrowRight"),
            Some(LightboxCommand::Navigate(Direction::Next))
        );
        assert_eq!(command_for_key("Escape"), Some(LightboxCommand::Close));
        assert_eq!(command_for_key("Enter"), None);
    }
}
