use folio_core::ShowcaseConfig;
use leptos::*;

use crate::components::{CatalogShowcase, MotionBadge};
use crate::data::load_course_catalog;
use crate::hooks::{use_low_power_device, use_reduced_motion};

#[component]
pub fn App() -> impl IntoView {
    let config = ShowcaseConfig::default();

    // ========== Motion signals, read once per page ==========
    let reduced_motion = use_reduced_motion();
    let low_power = use_low_power_device(config.low_power_max_cores);

    let catalog = load_course_catalog()
        .map_err(|e| log::error!("Course catalog unavailable: {}", e))
        .ok();

    view! {
        <div class="bg-gray-900 text-white w-full">
            <main>
                {catalog.map(|catalog| view! {
                    <CatalogShowcase
                        catalog=catalog
                        title="Courses"
                        reduced_motion=reduced_motion
                        low_power=low_power.decision()
                        config=config
                    />
                })}
            </main>
            {cfg!(debug_assertions).then(|| view! {
                <MotionBadge status=low_power reduced_motion=reduced_motion />
            })}
        </div>
    }
}
