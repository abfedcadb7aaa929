//! Entrance animation timing for the visible cards.
//!
//! Each card slides in from the side with a delay proportional to its index
//! in the visible slice, producing a cascade. Under reduced motion every card
//! is static: final state, zero delay, zero duration. Timing is cosmetic and
//! never decides whether a card is shown.

use crate::config::ShowcaseConfig;
use crate::motion::MotionMode;
use std::time::Duration;

/// Cubic bezier easing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing(pub [f64; 4]);

impl Easing {
    /// CSS `cubic-bezier(...)` form.
    pub fn css(&self) -> String {
        let [x1, y1, x2, y2] = self.0;
        format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }
}

/// How one element enters (and reacts to hover).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceTiming {
    pub delay: Duration,
    pub duration: Duration,
    /// Horizontal offset the element starts from
    pub offset_x_px: f64,
    /// Vertical hover translation; zero disables the hover lift
    pub hover_lift_px: f64,
    pub hover_duration: Duration,
    pub easing: Easing,
}

impl EntranceTiming {
    /// Final state only: nothing moves.
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::ZERO,
            offset_x_px: 0.0,
            hover_lift_px: 0.0,
            hover_duration: Duration::ZERO,
            easing: Easing([0.0, 0.0, 1.0, 1.0]),
        }
    }

    pub fn is_static(&self) -> bool {
        self.duration.is_zero() && self.delay.is_zero()
    }
}

/// Parts of the section that reveal on their own before the cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionPart {
    Header,
    FilterBar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSequencer {
    stagger: Duration,
    duration: Duration,
    slide_distance_px: f64,
    hover_lift_px: f64,
    hover_duration: Duration,
    easing: Easing,
    header_delay: Duration,
    filter_bar_delay: Duration,
}

impl RenderSequencer {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            stagger: config.stagger(),
            duration: config.entrance_duration(),
            slide_distance_px: config.slide_distance_px,
            hover_lift_px: config.hover_lift_px,
            hover_duration: Duration::from_millis(config.hover_duration_ms),
            easing: Easing(config.easing),
            header_delay: Duration::from_millis(config.header_reveal_delay_ms),
            filter_bar_delay: Duration::from_millis(config.filter_bar_reveal_delay_ms),
        }
    }

    /// Timing for the card at `index` of the visible slice.
    pub fn item_timing(&self, index: usize, mode: MotionMode) -> EntranceTiming {
        match mode {
            MotionMode::Reduced => EntranceTiming::immediate(),
            MotionMode::Full => {
                let steps = u32::try_from(index).unwrap_or(u32::MAX);
                self.animated(self.stagger.saturating_mul(steps))
            }
        }
    }

    pub fn section_timing(&self, part: SectionPart, mode: MotionMode) -> EntranceTiming {
        match mode {
            MotionMode::Reduced => EntranceTiming::immediate(),
            MotionMode::Full => {
                let delay = match part {
                    SectionPart::Header => self.header_delay,
                    SectionPart::FilterBar => self.filter_bar_delay,
                };
                EntranceTiming {
                    hover_lift_px: 0.0,
                    hover_duration: Duration::ZERO,
                    ..self.animated(delay)
                }
            }
        }
    }

    fn animated(&self, delay: Duration) -> EntranceTiming {
        EntranceTiming {
            delay,
            duration: self.duration,
            offset_x_px: self.slide_distance_px,
            hover_lift_px: self.hover_lift_px,
            hover_duration: self.hover_duration,
            easing: self.easing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> RenderSequencer {
        RenderSequencer::new(&ShowcaseConfig::default())
    }

    #[test]
    fn delays_cascade_by_index() {
        let s = sequencer();
        let timings: Vec<EntranceTiming> =
            (0..4).map(|index| s.item_timing(index, MotionMode::Full)).collect();
        let delays: Vec<u64> = timings.iter().map(|t| t.delay.as_millis() as u64).collect();
        assert_eq!(delays, vec![0, 30, 60, 90]);
        assert!(timings
            .iter()
            .all(|t| t.duration == Duration::from_millis(600) && t.offset_x_px == 100.0));
    }

    #[test]
    fn reduced_motion_is_static_at_every_index() {
        let s = sequencer();
        for index in [0, 1, 5, 40] {
            let timing = s.item_timing(index, MotionMode::Reduced);
            assert!(timing.is_static());
            assert_eq!(timing.offset_x_px, 0.0);
            assert_eq!(timing.hover_lift_px, 0.0);
        }
    }

    #[test]
    fn first_animated_card_is_not_static() {
        // Zero delay but a real duration still animates.
        assert!(!sequencer().item_timing(0, MotionMode::Full).is_static());
    }

    #[test]
    fn huge_index_saturates() {
        let timing = sequencer().item_timing(usize::MAX, MotionMode::Full);
        assert!(timing.delay >= Duration::from_millis(30));
    }

    #[test]
    fn section_parts_have_own_delays_and_no_hover() {
        let s = sequencer();
        let header = s.section_timing(SectionPart::Header, MotionMode::Full);
        let filter = s.section_timing(SectionPart::FilterBar, MotionMode::Full);
        assert_eq!(header.delay, Duration::ZERO);
        assert_eq!(filter.delay, Duration::from_millis(200));
        assert_eq!(filter.hover_lift_px, 0.0);
        assert!(s
            .section_timing(SectionPart::FilterBar, MotionMode::Reduced)
            .is_static());
    }

    #[test]
    fn easing_css() {
        assert_eq!(
            Easing([0.11, 0.0, 0.5, 0.0]).css(),
            "cubic-bezier(0.11, 0, 0.5, 0)"
        );
    }
}
