//! Category filter buttons.

use folio_core::{CategoryButton, CategoryTag};
use leptos::*;

fn button_class(pressed: bool) -> &'static str {
    if pressed {
        "px-4 py-2 text-sm font-semibold rounded-lg transition-all duration-200 backdrop-blur-md \
         bg-[rgba(50,196,196,0.3)] border border-[rgba(50,196,196,0.6)] text-[#32C4C4]"
    } else {
        "px-4 py-2 text-sm font-semibold rounded-lg transition-all duration-200 backdrop-blur-md \
         bg-white/10 border border-white/20 text-white"
    }
}

#[component]
pub fn CategoryFilter(
    /// One button per category, wildcard first
    buttons: Signal<Vec<CategoryButton>>,
    /// Fired with the clicked category
    on_select: Callback<CategoryTag>,
) -> impl IntoView {
    view! {
        <For
            each=move || buttons.get()
            key=|button| button.tag.clone()
            children=move |button| {
                let tag = button.tag.clone();
                let label = tag.label().to_string();
                let pressed = {
                    let tag = tag.clone();
                    Signal::derive(move || {
                        buttons.with(|all| all.iter().any(|b| b.tag == tag && b.pressed))
                    })
                };

                view! {
                    <button
                        class=move || button_class(pressed.get())
                        aria-label=button.aria_label
                        aria-pressed=move || pressed.get().to_string()
                        on:click=move |_| on_select.call(tag.clone())
                    >
                        {label}
                    </button>
                }
            }
        />
    }
}
