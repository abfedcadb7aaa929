// folio-ui/src/hooks/reveal.rs
use folio_core::EntranceTiming;
use leptos::html::Div;
use leptos::*;

/// Whether an element has entered the viewport at least once.
///
/// Static timings (reduced motion) start revealed so content never waits on
/// an observer.
pub fn use_reveal_once(target: NodeRef<Div>, timing: EntranceTiming) -> Signal<bool> {
    let (revealed, set_revealed) = create_signal(timing.is_static());
    let visible = leptos_use::use_element_visibility(target);

    create_effect(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });

    revealed.into()
}
