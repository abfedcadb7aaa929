pub mod catalog_card;
pub mod catalog_showcase;
pub mod category_filter;
pub mod disclosure_toggle;
pub mod motion_badge;
pub mod motion_style;
pub mod reveal;

pub use catalog_card::CatalogCard;
pub use catalog_showcase::CatalogShowcase;
pub use category_filter::CategoryFilter;
pub use disclosure_toggle::DisclosureToggle;
pub use motion_badge::MotionBadge;
pub use reveal::Reveal;
