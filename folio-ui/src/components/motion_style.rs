//! Inline styles for entrance and hover motion.

use folio_core::EntranceTiming;

/// Style for an element entering the page.
///
/// Static timings render the final state with no transition, whatever
/// `revealed` says.
pub fn entrance_style(timing: &EntranceTiming, revealed: bool) -> String {
    if timing.is_static() {
        return "opacity: 1; transform: none; transition: none;".to_string();
    }
    if !revealed {
        return format!(
            "opacity: 0; transform: translateX({}px); transition: none;",
            timing.offset_x_px
        );
    }

    let duration = timing.duration.as_millis();
    let delay = timing.delay.as_millis();
    let easing = timing.easing.css();
    format!(
        "opacity: 1; transform: translateX(0px); \
         transition: opacity {duration}ms {easing} {delay}ms, transform {duration}ms {easing} {delay}ms;"
    )
}

/// Style for the hover lift. Empty when the lift is disabled.
pub fn hover_style(timing: &EntranceTiming, hovered: bool) -> String {
    if timing.hover_lift_px == 0.0 {
        return String::new();
    }
    let lift = if hovered { timing.hover_lift_px } else { 0.0 };
    format!(
        "transform: translateY({}px); transition: transform {}ms ease-out;",
        lift,
        timing.hover_duration.as_millis()
    )
}
