//! Motion preferences: reduced-motion and the low-power device heuristic.

/// Whether entrance and hover animations run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionMode {
    #[default]
    Full,
    /// Everything renders at its final state with no transition.
    Reduced,
}

/// Read-only motion signals supplied by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreferences {
    /// User asked for reduced motion (can change at runtime)
    pub reduced_motion: bool,
    /// Device judged too weak for animation (decided once at mount)
    pub low_power: bool,
}

impl MotionPreferences {
    /// Build from signals that may be unavailable. Missing signals fail open:
    /// motion enabled, not low-power.
    pub fn from_signals(reduced_motion: Option<bool>, low_power: Option<bool>) -> Self {
        Self {
            reduced_motion: reduced_motion.unwrap_or(false),
            low_power: low_power.unwrap_or(false),
        }
    }

    pub fn mode(&self) -> MotionMode {
        if self.reduced_motion || self.low_power {
            MotionMode::Reduced
        } else {
            MotionMode::Full
        }
    }

    /// Smooth scrolling only honours the user preference, not the device heuristic.
    pub fn animate_scroll(&self) -> bool {
        !self.reduced_motion
    }
}

/// Low-power heuristic: `max_cores` logical cores or fewer.
///
/// An unknown or zero core count is not low-power.
pub fn is_low_power(reported_cores: Option<u32>, max_cores: u32) -> bool {
    match reported_cores {
        Some(cores) if cores > 0 => cores <= max_cores,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_signal_reduces_motion() {
        let prefs = |reduced_motion, low_power| MotionPreferences {
            reduced_motion,
            low_power,
        };
        assert_eq!(prefs(false, false).mode(), MotionMode::Full);
        assert_eq!(prefs(true, false).mode(), MotionMode::Reduced);
        assert_eq!(prefs(false, true).mode(), MotionMode::Reduced);
        assert_eq!(prefs(true, true).mode(), MotionMode::Reduced);
    }

    #[test]
    fn missing_signals_fail_open() {
        let prefs = MotionPreferences::from_signals(None, None);
        assert_eq!(prefs.mode(), MotionMode::Full);
        assert!(prefs.animate_scroll());
    }

    #[test]
    fn low_power_device_still_scrolls_smoothly() {
        let prefs = MotionPreferences::from_signals(Some(false), Some(true));
        assert_eq!(prefs.mode(), MotionMode::Reduced);
        assert!(prefs.animate_scroll());
    }

    #[test]
    fn low_power_threshold() {
        assert!(is_low_power(Some(2), 4));
        assert!(is_low_power(Some(4), 4));
        assert!(!is_low_power(Some(8), 4));
        assert!(!is_low_power(Some(0), 4));
        assert!(!is_low_power(None, 4));
    }
}
