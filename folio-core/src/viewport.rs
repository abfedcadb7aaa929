use crate::config::ShowcaseConfig;
use crate::error::Result;

/// Display-limit tier derived from the window width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportTier {
    Narrow,
    Wide,
}

/// Tracks the current viewport tier and maps it to a display limit.
///
/// Feed it every observed width; it only reports a change when the tier
/// actually flips, so unchanged resizes cause no downstream work.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportClassifier {
    breakpoint_px: f64,
    narrow_limit: usize,
    wide_limit: usize,
    tier: ViewportTier,
}

impl ViewportClassifier {
    /// Classify `initial_width` right away so the first render uses the real tier.
    pub fn new(config: &ShowcaseConfig, initial_width: f64) -> Self {
        let mut classifier = Self {
            breakpoint_px: config.narrow_breakpoint_px,
            narrow_limit: config.narrow_display_limit.max(1),
            wide_limit: config.wide_display_limit.max(1),
            tier: ViewportTier::Wide,
        };
        classifier.tier = classifier.classify(initial_width);
        classifier
    }

    /// Tier for `width` without changing state.
    ///
    /// A width that cannot be measured (NaN, infinite, negative) is treated
    /// as wide.
    pub fn classify(&self, width: f64) -> ViewportTier {
        if width.is_finite() && width >= 0.0 && width < self.breakpoint_px {
            ViewportTier::Narrow
        } else {
            ViewportTier::Wide
        }
    }

    /// Record a new width. Returns the new tier only when it changed.
    pub fn observe(&mut self, width: f64) -> Option<ViewportTier> {
        let tier = self.classify(width);
        if tier == self.tier {
            return None;
        }
        log::debug!("Viewport tier {:?} -> {:?} at width {}", self.tier, tier, width);
        self.tier = tier;
        Some(tier)
    }

    pub fn tier(&self) -> ViewportTier {
        self.tier
    }

    pub fn is_narrow(&self) -> bool {
        self.tier == ViewportTier::Narrow
    }

    pub fn display_limit(&self) -> usize {
        match self.tier {
            ViewportTier::Narrow => self.narrow_limit,
            ViewportTier::Wide => self.wide_limit,
        }
    }
}

/// Access to the host window.
///
/// Implemented over the DOM in the UI crate and by recording fakes in tests.
pub trait ViewportPort {
    /// Current window width in CSS pixels.
    fn width(&self) -> Result<f64>;

    /// Top edge of the element with `id`, relative to the document.
    fn element_top_offset(&self, id: &str) -> Result<f64>;

    /// Scroll the window so its top sits at `offset`.
    fn scroll_to(&self, offset: f64, animated: bool) -> Result<()>;
}
