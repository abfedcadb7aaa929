//! Corner badge showing what the motion detection decided. Debug builds only.

use leptos::*;

use crate::hooks::LowPowerStatus;

fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}

#[component]
pub fn MotionBadge(status: LowPowerStatus, reduced_motion: Signal<bool>) -> impl IntoView {
    let animations_on = move || !(reduced_motion.get() || status.low_power);
    let cores = status
        .cores
        .map(|c| c.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    view! {
        <div class="fixed bottom-5 right-5 z-[9999] px-4 py-3 rounded-lg bg-black/85 text-white \
                    text-xs font-mono border-2 border-white/30 shadow-lg">
            <div class="mb-1 font-bold">"Motion"</div>
            <div>"Cores: " {cores}</div>
            <div>"Low Power: " {yes_no(status.low_power)}</div>
            <div>"Reduced Motion: " {move || yes_no(reduced_motion.get())}</div>
            <div class=move || {
                if animations_on() {
                    "mt-1 pt-1 border-t border-white/30 text-green-400"
                } else {
                    "mt-1 pt-1 border-t border-white/30 text-red-400"
                }
            }>
                "Animations: " {move || if animations_on() { "ON" } else { "OFF" }}
            </div>
        </div>
    }
}
