use folio_core::EntranceTiming;
use leptos::*;

use crate::components::motion_style::entrance_style;
use crate::hooks::use_reveal_once;

/// Wrapper that slides its children in the first time it scrolls into view.
#[component]
pub fn Reveal(
    /// Entrance timing; a static timing shows the children immediately
    timing: Signal<EntranceTiming>,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = create_node_ref::<html::Div>();
    let revealed = use_reveal_once(node_ref, timing.get_untracked());

    view! {
        <div
            node_ref=node_ref
            class=class
            style=move || timing.with(|t| entrance_style(t, revealed.get()))
        >
            {children()}
        </div>
    }
}
