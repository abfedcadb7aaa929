//! Showcase configuration.
//!
//! Every tunable of the catalog showcase lives here: the viewport breakpoint
//! and display limits, the collapse scroll parameters, and the entrance
//! animation timing. Defaults match the portfolio's courses section.

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for a catalog showcase instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Widths strictly below this are classified as narrow.
    pub narrow_breakpoint_px: f64,
    /// Items shown before disclosure on narrow viewports.
    pub narrow_display_limit: usize,
    /// Items shown before disclosure on wide viewports.
    pub wide_display_limit: usize,
    /// Height of the fixed page header; the collapse scroll stops this far above the list.
    pub header_clearance_px: f64,
    /// Time allowed for the collapse scroll to land before items are hidden.
    pub collapse_settle_ms: u64,
    /// Per-item entrance delay increment.
    pub stagger_ms: u64,
    pub entrance_duration_ms: u64,
    /// Horizontal distance cards slide in from.
    pub slide_distance_px: f64,
    /// Vertical hover translation (negative lifts the card).
    pub hover_lift_px: f64,
    pub hover_duration_ms: u64,
    /// Cubic bezier control points `(x1, y1, x2, y2)`.
    pub easing: [f64; 4],
    pub header_reveal_delay_ms: u64,
    pub filter_bar_reveal_delay_ms: u64,
    /// Devices reporting this many logical cores or fewer count as low-power.
    pub low_power_max_cores: u32,
    /// Plural noun used in the "Show All N ..." label.
    pub item_noun: String,
    /// DOM id of the list container the collapse scroll targets.
    pub list_element_id: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 768.0,
            narrow_display_limit: 3,
            wide_display_limit: 6,
            header_clearance_px: 80.0,
            collapse_settle_ms: 300,
            stagger_ms: 30,
            entrance_duration_ms: 600,
            slide_distance_px: 100.0,
            hover_lift_px: -4.0,
            hover_duration_ms: 131,
            easing: [0.11, 0.0, 0.5, 0.0],
            header_reveal_delay_ms: 0,
            filter_bar_reveal_delay_ms: 200,
            low_power_max_cores: 4,
            item_noun: "Courses".to_string(),
            list_element_id: "courses".to_string(),
        }
    }
}

impl ShowcaseConfig {
    /// Check values that would make the showcase misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.narrow_display_limit == 0 || self.wide_display_limit == 0 {
            return Err(FolioError::InvalidConfig(
                "display limits must be greater than zero".to_string(),
            ));
        }
        if !self.narrow_breakpoint_px.is_finite() || self.narrow_breakpoint_px <= 0.0 {
            return Err(FolioError::InvalidConfig(format!(
                "breakpoint must be a positive width, got {}",
                self.narrow_breakpoint_px
            )));
        }
        let lengths = [
            ("header_clearance_px", self.header_clearance_px),
            ("slide_distance_px", self.slide_distance_px),
            ("hover_lift_px", self.hover_lift_px),
        ];
        if let Some((name, value)) = lengths.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FolioError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if self.easing.iter().any(|v| !v.is_finite()) {
            return Err(FolioError::InvalidConfig(
                "easing control points must be finite".to_string(),
            ));
        }
        if self.list_element_id.trim().is_empty() {
            return Err(FolioError::InvalidConfig(
                "list element id must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn collapse_settle_delay(&self) -> Duration {
        Duration::from_millis(self.collapse_settle_ms)
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn entrance_duration(&self) -> Duration {
        Duration::from_millis(self.entrance_duration_ms)
    }
}
