//! The showcase state object.
//!
//! [`Showcase`] owns everything one mounted catalog section needs: the
//! catalog, the selected category, the disclosure state machine, the viewport
//! tier and the motion preferences. Events mutate it; [`Showcase::view`]
//! derives the immutable [`ShowcaseView`] the renderer draws from.

use crate::catalog::{Catalog, CatalogItem, CategoryTag};
use crate::config::ShowcaseConfig;
use crate::disclosure::{
    disclosure_control, visible_slice, CollapseTicket, DisclosureControl, DisclosureController,
    DisclosurePhase, ToggleOutcome,
};
use crate::filter::{filter_indexed, filter_items};
use crate::motion::{MotionMode, MotionPreferences};
use crate::sequencer::{EntranceTiming, RenderSequencer, SectionPart};
use crate::viewport::{ViewportClassifier, ViewportPort, ViewportTier};

#[derive(Clone, Debug)]
pub struct Showcase {
    catalog: Catalog,
    config: ShowcaseConfig,
    selected: CategoryTag,
    disclosure: DisclosureController,
    viewport: ViewportClassifier,
    motion: MotionPreferences,
    sequencer: RenderSequencer,
}

impl Showcase {
    /// Mount a showcase. `initial_width` is classified immediately.
    pub fn new(
        catalog: Catalog,
        config: ShowcaseConfig,
        initial_width: f64,
        motion: MotionPreferences,
    ) -> Self {
        Self {
            disclosure: DisclosureController::new(&config),
            viewport: ViewportClassifier::new(&config, initial_width),
            sequencer: RenderSequencer::new(&config),
            catalog,
            config,
            selected: CategoryTag::All,
            motion,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn selected(&self) -> &CategoryTag {
        &self.selected
    }

    pub fn phase(&self) -> DisclosurePhase {
        self.disclosure.phase()
    }

    pub fn is_expanded(&self) -> bool {
        self.disclosure.is_expanded()
    }

    pub fn viewport_tier(&self) -> ViewportTier {
        self.viewport.tier()
    }

    pub fn display_limit(&self) -> usize {
        self.viewport.display_limit()
    }

    pub fn motion(&self) -> MotionPreferences {
        self.motion
    }

    /// Select a category. Selecting a different category always collapses
    /// the list, without scrolling. Returns the cancelled collapse ticket when
    /// one was pending, or `None`.
    ///
    /// Re-selecting the current category changes nothing.
    pub fn select_category(&mut self, tag: CategoryTag) -> Option<CollapseTicket> {
        if tag == self.selected {
            return None;
        }
        log::debug!("Category {} -> {}", self.selected, tag);
        self.selected = tag;
        self.disclosure.reset()
    }

    pub fn show_more(&mut self) -> bool {
        self.disclosure.show_more()
    }

    /// The toggle button was pressed.
    pub fn toggle_disclosure(&mut self, port: &dyn ViewportPort) -> ToggleOutcome {
        self.disclosure.toggle(port, self.motion.animate_scroll())
    }

    /// The collapse settle delay elapsed for `ticket`.
    pub fn settle_collapse(&mut self, ticket: CollapseTicket) -> bool {
        self.disclosure.settle(ticket)
    }

    /// Tier `width` would map to, without recording it.
    pub fn classify_width(&self, width: f64) -> ViewportTier {
        self.viewport.classify(width)
    }

    /// Record a window width. Returns the new tier if it changed.
    pub fn observe_width(&mut self, width: f64) -> Option<ViewportTier> {
        self.viewport.observe(width)
    }

    /// Returns true if the preference changed.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) -> bool {
        let changed = self.motion.reduced_motion != reduced_motion;
        self.motion.reduced_motion = reduced_motion;
        changed
    }

    /// Items matching the selected category, in catalog order.
    pub fn filtered(&self) -> Vec<&CatalogItem> {
        filter_items(self.catalog.items(), &self.selected)
    }

    /// Derive everything the renderer needs.
    pub fn view(&self) -> ShowcaseView {
        let mode = self.motion.mode();
        let filtered = filter_indexed(self.catalog.items(), &self.selected);
        let limit = self.display_limit();
        let expanded = self.is_expanded();
        let visible = visible_slice(&filtered, limit, expanded);

        let cards = visible
            .iter()
            .enumerate()
            .map(|(position, (catalog_index, item))| VisibleCard {
                key: format!("{}/{}", self.selected.label(), catalog_index),
                position,
                item: (*item).clone(),
                entrance: self.sequencer.item_timing(position, mode),
            })
            .collect();

        let categories = self
            .catalog
            .categories()
            .tags()
            .iter()
            .map(|tag| CategoryButton {
                pressed: *tag == self.selected,
                aria_label: format!("Filter {} by {}", self.config.item_noun.to_lowercase(), tag),
                tag: tag.clone(),
            })
            .collect();

        ShowcaseView {
            categories,
            cards,
            filtered_count: filtered.len(),
            control: disclosure_control(filtered.len(), limit, expanded, &self.config.item_noun),
            header: self.sequencer.section_timing(SectionPart::Header, mode),
            filter_bar: self.sequencer.section_timing(SectionPart::FilterBar, mode),
            motion: mode,
        }
    }
}

/// A category filter button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryButton {
    pub tag: CategoryTag,
    pub pressed: bool,
    pub aria_label: String,
}

/// A card on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleCard {
    /// Render key: selected category plus catalog position. Changes with the
    /// category so a re-filter re-mounts the cards and restarts the cascade.
    pub key: String,
    /// Index within the visible slice
    pub position: usize,
    pub item: CatalogItem,
    pub entrance: EntranceTiming,
}

/// Immutable render model of a showcase.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseView {
    pub categories: Vec<CategoryButton>,
    pub cards: Vec<VisibleCard>,
    pub filtered_count: usize,
    pub control: Option<DisclosureControl>,
    pub header: EntranceTiming,
    pub filter_bar: EntranceTiming,
    pub motion: MotionMode,
}
