// folio-ui/src/components/catalog_showcase.rs
use folio_core::{
    Catalog, CategoryTag, EntranceTiming, MotionPreferences, Showcase, ShowcaseConfig,
    ToggleOutcome, ViewportPort,
};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

use crate::components::{CatalogCard, CategoryFilter, DisclosureToggle, Reveal};
use crate::hooks::use_viewport_tier;
use crate::viewport_port::BrowserViewport;

/// Filterable catalog grid with a "show all / show less" disclosure.
///
/// Owns one [`Showcase`] for its lifetime. Window width, reduced motion and
/// the low-power flag come in from outside and are only read.
#[component]
pub fn CatalogShowcase(
    /// Validated catalog to display
    catalog: Catalog,
    /// Section heading
    #[prop(into)]
    title: String,
    /// Live reduced-motion preference
    reduced_motion: Signal<bool>,
    /// Low-power decision taken at mount; unknown counts as capable
    #[prop(default = None)]
    low_power: Option<bool>,
    /// Tunables; defaults when omitted or invalid
    #[prop(optional)]
    config: Option<ShowcaseConfig>,
) -> impl IntoView {
    let mut config = config.unwrap_or_default();
    if let Err(e) = config.validate() {
        log::warn!("Invalid showcase config, using defaults: {}", e);
        config = ShowcaseConfig::default();
    }
    let section_id = config.list_element_id.clone();

    let port = BrowserViewport::new();
    let initial_width = port.width().unwrap_or_else(|e| {
        log::warn!("Cannot read window width, assuming wide layout: {}", e);
        f64::NAN
    });
    let motion =
        MotionPreferences::from_signals(Some(reduced_motion.get_untracked()), low_power);
    let showcase = create_rw_signal(Showcase::new(catalog, config, initial_width, motion));

    use_viewport_tier(showcase);

    // ========== Effect: reduced-motion preference changed ==========
    create_effect(move |_| {
        let reduced = reduced_motion.get();
        let changed = showcase.with_untracked(|s| s.motion().reduced_motion != reduced);
        if changed {
            showcase.update(|s| {
                s.set_reduced_motion(reduced);
            });
        }
    });

    // ========== Pending collapse timer ==========
    let pending_collapse = store_value(None::<TimeoutHandle>);
    let cancel_pending = move || {
        pending_collapse.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    };
    on_cleanup(cancel_pending);

    let view_model = create_memo(move |_| showcase.with(|s| s.view()));

    let on_select = Callback::new(move |tag: CategoryTag| {
        let cancelled = showcase.try_update(|s| s.select_category(tag)).flatten();
        if cancelled.is_some() {
            cancel_pending();
        }
    });

    let on_toggle = Callback::new(move |_: ()| {
        let outcome = showcase.try_update(|s| s.toggle_disclosure(&port));
        let Some(ToggleOutcome::CollapseScheduled { ticket, delay, .. }) = outcome else {
            return;
        };

        // Hide the extra items only once the scroll has had time to land.
        let settle = move || {
            pending_collapse.set_value(None);
            showcase.update(|s| {
                s.settle_collapse(ticket);
            });
        };
        match set_timeout_with_handle(settle, delay) {
            Ok(handle) => pending_collapse.set_value(Some(handle)),
            Err(e) => {
                log::warn!("Cannot schedule collapse, collapsing now: {:?}", e);
                showcase.update(|s| {
                    s.settle_collapse(ticket);
                });
            }
        }
    });

    let header_timing = Signal::derive(move || view_model.with(|v| v.header));
    let filter_timing = Signal::derive(move || view_model.with(|v| v.filter_bar));
    let buttons = Signal::derive(move || view_model.with(|v| v.categories.clone()));
    let control = Signal::derive(move || view_model.with(|v| v.control.clone()));

    view! {
        <section
            id=section_id
            class="relative isolate py-16 px-4 text-gray-100 bg-white/[0.03] backdrop-blur-[5px] \
                   border-y border-white/20"
        >
            <div class="max-w-6xl mx-auto">
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    <Reveal timing=header_timing class="col-span-full mb-8">
                        <h2 class="text-3xl md:text-4xl font-bold text-white drop-shadow-md text-center">
                            {title}
                        </h2>
                    </Reveal>

                    <Reveal
                        timing=filter_timing
                        class="col-span-full mb-8 flex flex-wrap justify-center gap-3"
                    >
                        <CategoryFilter buttons=buttons on_select=on_select />
                    </Reveal>

                    <For
                        each=move || view_model.with(|v| v.cards.clone())
                        key=|card| card.key.clone()
                        children=move |card| {
                            let key = card.key.clone();
                            let entrance = Signal::derive(move || {
                                view_model.with(|v| {
                                    v.cards
                                        .iter()
                                        .find(|c| c.key == key)
                                        .map(|c| c.entrance)
                                        .unwrap_or_else(EntranceTiming::immediate)
                                })
                            });
                            view! { <CatalogCard item=card.item entrance=entrance /> }
                        }
                    />

                    <DisclosureToggle control=control on_toggle=on_toggle />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use crate::data::load_course_catalog;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn card_count(section: &Element) -> u32 {
        section
            .query_selector_all(".glass-card")
            .map(|cards| cards.length())
            .unwrap_or(0)
    }

    fn click_toggle(section: &Element) {
        let button: HtmlElement = section
            .query_selector("button[aria-expanded]")
            .unwrap()
            .expect("toggle button should be rendered")
            .unchecked_into();
        button.click();
    }

    fn mount_showcase(section_id: &str) -> (Element, Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        let config = ShowcaseConfig {
            list_element_id: section_id.to_string(),
            narrow_display_limit: 2,
            wide_display_limit: 2,
            ..ShowcaseConfig::default()
        };
        mount_to(host.clone().unchecked_into(), move || {
            view! {
                <CatalogShowcase
                    catalog=load_course_catalog().unwrap()
                    title="Courses"
                    reduced_motion=Signal::derive(|| true)
                    config=config
                />
            }
        });

        let section = document.get_element_by_id(section_id).unwrap();
        (host, section)
    }

    #[wasm_bindgen_test]
    async fn show_less_hides_items_only_after_settle_delay() {
        let (host, section) = mount_showcase("showcase-collapse-test");
        assert_eq!(card_count(&section), 2);

        click_toggle(&section);
        TimeoutFuture::new(10).await;
        assert_eq!(card_count(&section), 22);

        click_toggle(&section);
        TimeoutFuture::new(10).await;
        assert_eq!(card_count(&section), 22, "items must stay until the scroll settles");

        TimeoutFuture::new(400).await;
        assert_eq!(card_count(&section), 2);

        host.remove();
    }

    #[wasm_bindgen_test]
    async fn category_click_collapses_and_refilters() {
        let (host, section) = mount_showcase("showcase-filter-test");

        click_toggle(&section);
        TimeoutFuture::new(10).await;
        assert_eq!(card_count(&section), 22);

        let backend: HtmlElement = section
            .query_selector("button[aria-label='Filter courses by Backend']")
            .unwrap()
            .expect("Backend filter button should be rendered")
            .unchecked_into();
        backend.click();
        TimeoutFuture::new(10).await;

        assert_eq!(card_count(&section), 2);
        assert_eq!(backend.get_attribute("aria-pressed").as_deref(), Some("true"));

        host.remove();
    }
}
