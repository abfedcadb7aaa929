//! A single catalog card.

use folio_core::{CatalogItem, EntranceTiming};
use leptos::*;

use crate::components::motion_style::hover_style;
use crate::components::Reveal;

#[component]
pub fn CatalogCard(
    item: CatalogItem,
    /// Live entrance timing (changes if reduced motion flips while mounted)
    entrance: Signal<EntranceTiming>,
) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(false);
    let link = item.external_url.clone().zip(item.link_label());

    view! {
        <Reveal timing=entrance>
            <div
                class="glass-card relative overflow-hidden h-full p-6 rounded-xl \
                       bg-white/10 border border-white/20 shadow-lg backdrop-blur-md"
                style=move || entrance.with(|t| hover_style(t, hovered.get()))
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
            >
                <span class="absolute inset-0 bg-gradient-to-br from-white/20 via-transparent to-transparent opacity-50 pointer-events-none"></span>

                <div class="relative z-10">
                    <h3 class="text-lg font-semibold mb-2 text-white line-clamp-2">{item.title}</h3>
                    <p class="text-gray-300 text-sm mb-2">{item.issuer}</p>
                    <p class="text-gray-400 text-xs mb-3">{item.date}</p>

                    {item.credential_id.map(|id| view! {
                        <p class="text-gray-400 text-xs mb-3 font-mono">"ID: " {id}</p>
                    })}

                    <div class="flex flex-wrap gap-2 mb-3">
                        {item
                            .categories
                            .into_iter()
                            .map(|category| view! {
                                <span class="inline-block px-3 py-1 text-xs font-medium rounded-full \
                                             bg-[rgba(50,196,196,0.2)] border border-[rgba(50,196,196,0.4)] text-[#32C4C4]">
                                    {category}
                                </span>
                            })
                            .collect_view()}
                    </div>

                    {link.map(|(url, label)| view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="block text-center mt-3 px-4 py-2 text-sm font-semibold rounded-lg \
                                   transition-all duration-200 text-white bg-white/10 hover:bg-white/15 \
                                   border border-white/20 hover:border-white/30"
                        >
                            {label}
                        </a>
                    })}
                </div>
            </div>
        </Reveal>
    }
}
