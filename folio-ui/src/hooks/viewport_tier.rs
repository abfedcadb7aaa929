// folio-ui/src/hooks/viewport_tier.rs
use folio_core::Showcase;
use leptos::*;
use leptos_use::use_window_size;

/// Keep the showcase's viewport tier in sync with the window width.
///
/// The showcase signal is only written when the tier actually flips, so
/// resizes within a tier re-render nothing.
pub fn use_viewport_tier(showcase: RwSignal<Showcase>) {
    let window_size = use_window_size();

    create_effect(move |_| {
        let width = window_size.width.get();
        let flips = showcase.with_untracked(|s| s.classify_width(width) != s.viewport_tier());
        if flips {
            showcase.update(|s| {
                s.observe_width(width);
            });
        }
    });
}
