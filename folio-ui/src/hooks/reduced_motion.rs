// folio-ui/src/hooks/reduced_motion.rs
use leptos::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Live `prefers-reduced-motion` preference.
///
/// Falls back to `false` (motion enabled) where `matchMedia` is unavailable.
/// The media query listener is released when the owning scope is disposed.
pub fn use_reduced_motion() -> Signal<bool> {
    leptos_use::use_media_query(REDUCED_MOTION_QUERY)
}
