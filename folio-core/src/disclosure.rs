//! Expand/collapse state machine for the catalog list.
//!
//! Expanding is immediate. Collapsing is two-step: the controller first asks
//! the viewport to scroll back to the top of the list, moves to
//! [`DisclosurePhase::CollapsingScroll`], and only hides the extra items once
//! the caller reports that the settle delay has elapsed via
//! [`DisclosureController::settle`]. Hiding first would leave the window
//! pointing at content that no longer exists.
//!
//! The controller never owns a timer. A scheduled collapse is identified by a
//! [`CollapseTicket`]; the host runs the delay however it likes and hands the
//! ticket back. Tickets from cancelled collapses are ignored, so tests can
//! drive time by hand.

use crate::config::ShowcaseConfig;
use crate::viewport::ViewportPort;
use std::time::Duration;

/// Identifies one scheduled collapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CollapseTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosurePhase {
    Collapsed,
    Expanded,
    /// Scroll issued, items still visible until the ticket settles.
    CollapsingScroll(CollapseTicket),
}

/// What a toggle did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToggleOutcome {
    Expanded,
    /// The scroll was requested; call [`DisclosureController::settle`] with
    /// `ticket` after `delay`.
    CollapseScheduled {
        ticket: CollapseTicket,
        delay: Duration,
        scroll_target: f64,
    },
    /// The viewport could not be scrolled, so the list collapsed at once.
    CollapsedImmediately,
    /// A collapse is already in flight; it will complete on its own.
    Unchanged,
}

#[derive(Clone, Debug)]
pub struct DisclosureController {
    phase: DisclosurePhase,
    next_ticket: u64,
    header_clearance_px: f64,
    settle_delay: Duration,
    list_element_id: String,
}

impl DisclosureController {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            phase: DisclosurePhase::Collapsed,
            next_ticket: 0,
            header_clearance_px: config.header_clearance_px,
            settle_delay: config.collapse_settle_delay(),
            list_element_id: config.list_element_id.clone(),
        }
    }

    pub fn phase(&self) -> DisclosurePhase {
        self.phase
    }

    /// True while every filtered item is shown, including the scroll step of a collapse.
    pub fn is_expanded(&self) -> bool {
        !matches!(self.phase, DisclosurePhase::Collapsed)
    }

    /// The pending collapse, if any.
    pub fn pending_collapse(&self) -> Option<CollapseTicket> {
        match self.phase {
            DisclosurePhase::CollapsingScroll(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// "Show more". Returns true if the state changed.
    pub fn show_more(&mut self) -> bool {
        match self.phase {
            DisclosurePhase::Collapsed => {
                log::debug!("Disclosure expanded");
                self.phase = DisclosurePhase::Expanded;
                true
            }
            DisclosurePhase::Expanded | DisclosurePhase::CollapsingScroll(_) => false,
        }
    }

    /// "Show less": scroll to the list origin, then collapse after the settle delay.
    ///
    /// If the list position cannot be read or the scroll request fails, the
    /// list collapses immediately without animation.
    pub fn show_less(&mut self, port: &dyn ViewportPort, animate_scroll: bool) -> ToggleOutcome {
        match self.phase {
            DisclosurePhase::Collapsed | DisclosurePhase::CollapsingScroll(_) => {
                return ToggleOutcome::Unchanged;
            }
            DisclosurePhase::Expanded => {}
        }

        let scroll_target = match port.element_top_offset(&self.list_element_id) {
            Ok(top) => top - self.header_clearance_px,
            Err(e) => {
                log::warn!("Cannot locate list for collapse scroll: {}", e);
                self.phase = DisclosurePhase::Collapsed;
                return ToggleOutcome::CollapsedImmediately;
            }
        };

        if let Err(e) = port.scroll_to(scroll_target, animate_scroll) {
            log::warn!("Collapse scroll failed, collapsing without it: {}", e);
            self.phase = DisclosurePhase::Collapsed;
            return ToggleOutcome::CollapsedImmediately;
        }

        let ticket = CollapseTicket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = DisclosurePhase::CollapsingScroll(ticket);
        log::debug!(
            "Collapse scheduled: scroll to {} (animated: {}), settle in {:?}",
            scroll_target,
            animate_scroll,
            self.settle_delay
        );

        ToggleOutcome::CollapseScheduled {
            ticket,
            delay: self.settle_delay,
            scroll_target,
        }
    }

    /// The toggle button: "show more" when collapsed, "show less" otherwise.
    pub fn toggle(&mut self, port: &dyn ViewportPort, animate_scroll: bool) -> ToggleOutcome {
        match self.phase {
            DisclosurePhase::Collapsed => {
                self.show_more();
                ToggleOutcome::Expanded
            }
            _ => self.show_less(port, animate_scroll),
        }
    }

    /// Finish a scheduled collapse. Stale tickets are ignored.
    pub fn settle(&mut self, ticket: CollapseTicket) -> bool {
        if self.phase == DisclosurePhase::CollapsingScroll(ticket) {
            log::debug!("Disclosure collapsed after scroll settled");
            self.phase = DisclosurePhase::Collapsed;
            true
        } else {
            false
        }
    }

    /// Force the collapsed state without scrolling (used when the filter
    /// changes). Returns the cancelled collapse, if one was pending.
    pub fn reset(&mut self) -> Option<CollapseTicket> {
        let cancelled = self.pending_collapse();
        self.phase = DisclosurePhase::Collapsed;
        cancelled
    }
}

/// The slice of `filtered` currently on screen.
pub fn visible_slice<T>(filtered: &[T], display_limit: usize, expanded: bool) -> &[T] {
    if expanded {
        filtered
    } else {
        &filtered[..filtered.len().min(display_limit)]
    }
}

/// The "show more / show less" button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureControl {
    pub expanded: bool,
    pub label: String,
}

/// The toggle button, or `None` when everything already fits.
pub fn disclosure_control(
    filtered_len: usize,
    display_limit: usize,
    expanded: bool,
    item_noun: &str,
) -> Option<DisclosureControl> {
    if filtered_len <= display_limit {
        return None;
    }
    let label = if expanded {
        "Show Less".to_string()
    } else {
        format!("Show All {} {}", filtered_len, item_noun)
    };
    Some(DisclosureControl { expanded, label })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FolioError, Result};
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakePort {
        top: Option<f64>,
        scroll_fails: bool,
        scrolls: RefCell<Vec<(f64, bool)>>,
    }

    impl ViewportPort for FakePort {
        fn width(&self) -> Result<f64> {
            Ok(1280.0)
        }

        fn element_top_offset(&self, id: &str) -> Result<f64> {
            self.top.ok_or_else(|| FolioError::ElementNotFound(id.to_string()))
        }

        fn scroll_to(&self, offset: f64, animated: bool) -> Result<()> {
            if self.scroll_fails {
                return Err(FolioError::ViewportUnavailable("scrollTo".to_string()));
            }
            self.scrolls.borrow_mut().push((offset, animated));
            Ok(())
        }
    }

    fn port_at(top: f64) -> FakePort {
        FakePort {
            top: Some(top),
            ..FakePort::default()
        }
    }

    fn expanded() -> DisclosureController {
        let mut controller = DisclosureController::new(&ShowcaseConfig::default());
        controller.show_more();
        controller
    }

    #[test]
    fn starts_collapsed() {
        let controller = DisclosureController::new(&ShowcaseConfig::default());
        assert_eq!(controller.phase(), DisclosurePhase::Collapsed);
        assert!(!controller.is_expanded());
    }

    #[test]
    fn show_more_is_idempotent() {
        let mut controller = DisclosureController::new(&ShowcaseConfig::default());
        assert!(controller.show_more());
        assert!(!controller.show_more());
        assert_eq!(controller.phase(), DisclosurePhase::Expanded);
    }

    #[test]
    fn show_less_scrolls_before_collapsing() {
        let port = port_at(1200.0);
        let mut controller = expanded();

        let outcome = controller.show_less(&port, true);
        let ToggleOutcome::CollapseScheduled {
            ticket,
            delay,
            scroll_target,
        } = outcome
        else {
            panic!("expected a scheduled collapse, got {:?}", outcome);
        };

        assert_eq!(scroll_target, 1120.0);
        assert_eq!(delay, Duration::from_millis(300));
        assert_eq!(*port.scrolls.borrow(), vec![(1120.0, true)]);
        // Items stay visible until the scroll settles.
        assert!(controller.is_expanded());

        assert!(controller.settle(ticket));
        assert_eq!(controller.phase(), DisclosurePhase::Collapsed);
    }

    #[test]
    fn reduced_motion_jumps_without_animation() {
        let port = port_at(500.0);
        let mut controller = expanded();
        controller.show_less(&port, false);
        assert_eq!(*port.scrolls.borrow(), vec![(420.0, false)]);
    }

    #[test]
    fn missing_element_collapses_immediately() {
        let port = FakePort::default();
        let mut controller = expanded();
        assert_eq!(
            controller.show_less(&port, true),
            ToggleOutcome::CollapsedImmediately
        );
        assert!(!controller.is_expanded());
        assert!(port.scrolls.borrow().is_empty());
    }

    #[test]
    fn failed_scroll_collapses_immediately() {
        let port = FakePort {
            top: Some(900.0),
            scroll_fails: true,
            ..FakePort::default()
        };
        let mut controller = expanded();
        assert_eq!(
            controller.toggle(&port, true),
            ToggleOutcome::CollapsedImmediately
        );
        assert_eq!(controller.phase(), DisclosurePhase::Collapsed);
    }

    #[test]
    fn retoggle_during_settle_lets_collapse_finish() {
        let port = port_at(800.0);
        let mut controller = expanded();
        let ToggleOutcome::CollapseScheduled { ticket, .. } = controller.toggle(&port, true) else {
            panic!("expected a scheduled collapse");
        };

        assert_eq!(controller.toggle(&port, true), ToggleOutcome::Unchanged);
        assert!(!controller.show_more());
        assert_eq!(port.scrolls.borrow().len(), 1);

        assert!(controller.settle(ticket));
        assert!(!controller.is_expanded());
    }

    #[test]
    fn reset_cancels_pending_collapse() {
        let port = port_at(800.0);
        let mut controller = expanded();
        let ToggleOutcome::CollapseScheduled { ticket, .. } = controller.toggle(&port, true) else {
            panic!("expected a scheduled collapse");
        };

        assert_eq!(controller.reset(), Some(ticket));
        controller.show_more();

        // The stale timer firing must not collapse the new expansion.
        assert!(!controller.settle(ticket));
        assert_eq!(controller.phase(), DisclosurePhase::Expanded);
    }

    #[test]
    fn tickets_are_unique_per_collapse() {
        let port = port_at(800.0);
        let mut controller = expanded();
        let first = controller.show_less(&port, true);
        controller.reset();
        controller.show_more();
        let second = controller.show_less(&port, true);
        assert_ne!(first, second);
    }

    #[test]
    fn visible_slice_caps_when_collapsed() {
        let items: Vec<u32> = (0..9).collect();
        assert_eq!(visible_slice(&items, 6, false).len(), 6);
        assert_eq!(visible_slice(&items, 6, true).len(), 9);
        assert_eq!(visible_slice(&items[..2], 6, false).len(), 2);
        assert_eq!(visible_slice(&items[..2], 6, true).len(), 2);
    }

    #[test]
    fn control_absent_when_everything_fits() {
        assert_eq!(disclosure_control(6, 6, false, "Courses"), None);
        assert_eq!(disclosure_control(0, 3, true, "Courses"), None);
    }

    #[test]
    fn control_labels() {
        assert_eq!(
            disclosure_control(9, 6, false, "Courses").map(|c| c.label),
            Some("Show All 9 Courses".to_string())
        );
        assert_eq!(
            disclosure_control(9, 6, true, "Courses").map(|c| c.label),
            Some("Show Less".to_string())
        );
    }
}
