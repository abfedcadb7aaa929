mod low_power;
mod reduced_motion;
mod reveal;
mod viewport_tier;

pub use low_power::{use_low_power_device, LowPowerStatus};
pub use reduced_motion::use_reduced_motion;
pub use reveal::use_reveal_once;
pub use viewport_tier::use_viewport_tier;
