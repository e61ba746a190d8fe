//! Entrance transition presets
//!
//! Every section reveals its content with one of a handful of presets. A
//! preset is a CSS "from" state; revealing swaps it for the shared "to" state
//! under a CSS transition, so no animation runtime is needed in the browser.

/// Easing curves (CSS equivalents of the original motion design)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    /// Fast start, smooth deceleration
    Smooth,
    /// Slight overshoot, used for cards and badge pop-ins
    Spring,
    /// Symmetric, used for image reveals
    InOut,
}

impl Ease {
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Smooth => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
            Ease::InOut => "cubic-bezier(0.645, 0.045, 0.355, 1)",
        }
    }
}

/// Durations in milliseconds
pub mod duration {
    pub const FAST: u32 = 550;
    pub const BASE: u32 = 700;
    pub const SLOW: u32 = 900;
}

/// Default distance (px) above the viewport bottom at which reveals fire
pub const DEFAULT_TRIGGER_OFFSET: u32 = 80;

/// Role-keyed entrance presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrancePreset {
    /// Generic below-the-fold entrance
    #[default]
    FadeUp,
    /// Slide in from the left
    FadeLeft,
    /// Slide in from the right
    FadeRight,
    /// Pop-in for cards and badges
    PopUp,
    /// Slight zoom plus clip for images
    ImageReveal,
}

impl EntrancePreset {
    /// CSS declarations for the hidden ("from") state
    pub fn hidden_style(&self) -> &'static str {
        match self {
            EntrancePreset::FadeUp => "opacity: 0; transform: translate3d(0, 32px, 0);",
            EntrancePreset::FadeLeft => "opacity: 0; transform: translate3d(-40px, 0, 0);",
            EntrancePreset::FadeRight => "opacity: 0; transform: translate3d(40px, 0, 0);",
            EntrancePreset::PopUp => "opacity: 0; transform: translate3d(0, 24px, 0) scale(0.94);",
            EntrancePreset::ImageReveal => {
                "opacity: 0; transform: scale(1.05); clip-path: inset(6% 6% 6% 6% round 12px);"
            }
        }
    }

    /// CSS declarations for the revealed ("to") state
    pub fn visible_style(&self) -> &'static str {
        match self {
            EntrancePreset::ImageReveal => {
                "opacity: 1; transform: none; clip-path: inset(0% 0% 0% 0% round 12px);"
            }
            _ => "opacity: 1; transform: none;",
        }
    }

    pub fn default_ease(&self) -> Ease {
        match self {
            EntrancePreset::PopUp => Ease::Spring,
            EntrancePreset::ImageReveal => Ease::InOut,
            _ => Ease::Smooth,
        }
    }

    fn transitioned_properties(&self) -> &'static [&'static str] {
        match self {
            EntrancePreset::ImageReveal => &["opacity", "transform", "clip-path"],
            _ => &["opacity", "transform"],
        }
    }
}

/// A preset plus its timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceTransition {
    pub preset: EntrancePreset,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Extra delay per item index for staggered groups
    pub stagger_ms: u32,
    pub ease: Ease,
    pub trigger_offset: u32,
}

impl Default for EntranceTransition {
    fn default() -> Self {
        Self::new(EntrancePreset::default())
    }
}

impl EntranceTransition {
    pub fn new(preset: EntrancePreset) -> Self {
        Self {
            preset,
            duration_ms: duration::BASE,
            delay_ms: 0,
            stagger_ms: 0,
            ease: preset.default_ease(),
            trigger_offset: DEFAULT_TRIGGER_OFFSET,
        }
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn stagger(mut self, ms: u32) -> Self {
        self.stagger_ms = ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn trigger_offset(mut self, px: u32) -> Self {
        self.trigger_offset = px;
        self
    }

    /// Total delay for the `index`-th item of a staggered group
    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_ms
            .saturating_add(self.stagger_ms.saturating_mul(index as u32))
    }

    /// Inline style for an element in the given reveal state.
    ///
    /// With `reduced_motion` the element is always shown and never animated.
    pub fn style(&self, visible: bool, index: usize, reduced_motion: bool) -> String {
        if reduced_motion {
            return self.preset.visible_style().to_string();
        }

        let state = if visible {
            self.preset.visible_style()
        } else {
            self.preset.hidden_style()
        };

        let transition = self
            .preset
            .transitioned_properties()
            .iter()
            .map(|prop| {
                format!(
                    "{} {}ms {} {}ms",
                    prop,
                    self.duration_ms,
                    self.ease.css(),
                    self.delay_for(index)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("{} transition: {}; will-change: opacity, transform;", state, transition)
    }

    /// IntersectionObserver `rootMargin` for this transition's trigger offset
    pub fn root_margin(&self) -> String {
        trigger_at(self.trigger_offset)
    }
}

/// `rootMargin` that fires when the element is `offset` px above the viewport bottom
pub fn trigger_at(offset: u32) -> String {
    format!("0px 0px -{}px 0px", offset)
}

/// Cubic ease-out on `t` in `[0, 1]`
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value shown by a count-up animation after `elapsed_ms`
pub fn count_up_value(target: u32, elapsed_ms: f64, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= f64::from(duration_ms) {
        return target;
    }
    if elapsed_ms <= 0.0 || elapsed_ms.is_nan() {
        return 0;
    }

    let progress = ease_out_cubic(elapsed_ms / f64::from(duration_ms));
    ((f64::from(target) * progress).round() as u32).min(target)
}

/// Explicit motion setup performed once by the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionConfig {
    /// Global switch; disabled renders every element in its final state
    pub enabled: bool,
    /// Fraction of an element that must be visible to trigger (0-100 %)
    pub threshold_percent: u8,
    /// Play entrance transitions only the first time an element enters view
    pub once: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_percent: 10,
            once: true,
        }
    }
}

impl MotionConfig {
    pub fn threshold(&self) -> f64 {
        f64::from(self.threshold_percent.min(100)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_at_formats_root_margin() {
        assert_eq!(trigger_at(80), "0px 0px -80px 0px");
        assert_eq!(trigger_at(0), "0px 0px -0px 0px");
    }

    #[test]
    fn test_stagger_delay_accumulates() {
        let t = EntranceTransition::new(EntrancePreset::PopUp)
            .delay(100)
            .stagger(80);

        assert_eq!(t.delay_for(0), 100);
        assert_eq!(t.delay_for(3), 340);
    }

    #[test]
    fn test_hidden_and_visible_styles() {
        let t = EntranceTransition::new(EntrancePreset::FadeUp).duration(duration::FAST);

        let hidden = t.style(false, 0, false);
        assert!(hidden.starts_with("opacity: 0; transform: translate3d(0, 32px, 0);"));
        assert!(hidden.contains("opacity 550ms"));

        let visible = t.style(true, 2, false);
        assert!(visible.starts_with("opacity: 1; transform: none;"));
    }

    #[test]
    fn test_image_reveal_transitions_clip_path() {
        let t = EntranceTransition::new(EntrancePreset::ImageReveal);
        let style = t.style(false, 0, false);

        assert!(style.contains("clip-path: inset(6% 6% 6% 6% round 12px)"));
        assert!(style.contains(&format!("clip-path 700ms {}", Ease::InOut.css())));
    }

    #[test]
    fn test_reduced_motion_is_static() {
        let t = EntranceTransition::new(EntrancePreset::FadeLeft);
        let style = t.style(false, 4, true);

        assert_eq!(style, "opacity: 1; transform: none;");
        assert!(!style.contains("transition"));
    }

    #[test]
    fn test_default_ease_by_preset() {
        assert_eq!(EntrancePreset::PopUp.default_ease(), Ease::Spring);
        assert_eq!(EntrancePreset::FadeRight.default_ease(), Ease::Smooth);
        assert_eq!(
            EntranceTransition::new(EntrancePreset::ImageReveal).ease,
            Ease::InOut
        );
    }

    #[test]
    fn test_count_up_reaches_target_and_is_monotonic() {
        let mut last = 0;
        for elapsed in (0..=2000).step_by(50) {
            let value = count_up_value(100, elapsed as f64, 2000);
            assert!(value >= last);
            assert!(value <= 100);
            last = value;
        }
        assert_eq!(last, 100);
        assert_eq!(count_up_value(25, 0.0, 2000), 0);
        assert_eq!(count_up_value(25, 5000.0, 2000), 25);
        assert_eq!(count_up_value(7, 10.0, 0), 7);
    }

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_motion_config_threshold() {
        let config = MotionConfig::default();
        assert!((config.threshold() - 0.1).abs() < f64::EPSILON);

        let clamped = MotionConfig {
            threshold_percent: 250,
            ..MotionConfig::default()
        };
        assert_eq!(clamped.threshold(), 1.0);
    }
}
