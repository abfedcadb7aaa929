pub mod catalog;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod filter;
pub mod motion;
pub mod sequencer;
pub mod showcase;
pub mod viewport;

pub use catalog::{Catalog, CatalogItem, CatalogLoad, CategoryList, CategoryTag, WILDCARD_LABEL};
pub use config::ShowcaseConfig;
pub use disclosure::{
    disclosure_control, visible_slice, CollapseTicket, DisclosureControl, DisclosureController,
    DisclosurePhase, ToggleOutcome,
};
pub use error::{FolioError, Result};
pub use filter::{filter_indexed, filter_items};
pub use motion::{is_low_power, MotionMode, MotionPreferences};
pub use sequencer::{Easing, EntranceTiming, RenderSequencer, SectionPart};
pub use showcase::{CategoryButton, Showcase, ShowcaseView, VisibleCard};
pub use viewport::{ViewportClassifier, ViewportPort, ViewportTier};
