use folio_core::DisclosureControl;
use leptos::*;

/// "Show All N ..." / "Show Less" button. Renders nothing when every item fits.
#[component]
pub fn DisclosureToggle(
    control: Signal<Option<DisclosureControl>>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    move || {
        control.get().map(|control| {
            view! {
                <div class="col-span-full flex justify-center mt-8">
                    <button
                        class="px-8 py-3 text-base font-semibold rounded-full transition-all duration-200 \
                               bg-white/10 hover:bg-white/15 border border-white/20 hover:border-white/30 \
                               text-white backdrop-blur-md shadow-lg hover:shadow-xl"
                        aria-expanded=if control.expanded { "true" } else { "false" }
                        on:click=move |_| on_toggle.call(())
                    >
                        {control.label}
                    </button>
                </div>
            }
        })
    }
}
