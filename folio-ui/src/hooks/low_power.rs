// folio-ui/src/hooks/low_power.rs
use folio_core::is_low_power;

use crate::viewport_port::BrowserViewport;

/// Low-power decision taken once at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowPowerStatus {
    /// Logical cores reported by the browser (None if hidden)
    pub cores: Option<u32>,
    pub low_power: bool,
}

impl LowPowerStatus {
    /// The low-power flag, or `None` when the browser hides its core count.
    pub fn decision(&self) -> Option<bool> {
        self.cores.map(|_| self.low_power)
    }
}

/// Classify the device from its reported core count.
///
/// Devices with `max_cores` cores or fewer (Raspberry Pi class boards, older
/// phones) are low-power. Unknown core counts are treated as capable.
pub fn use_low_power_device(max_cores: u32) -> LowPowerStatus {
    let cores = BrowserViewport::new().reported_cores();
    let low_power = is_low_power(cores, max_cores);

    match cores {
        Some(count) => log::info!(
            "Detected {} cores, animations {}",
            count,
            if low_power { "disabled" } else { "enabled" }
        ),
        None => log::info!("hardwareConcurrency unavailable, animations enabled"),
    }

    LowPowerStatus { cores, low_power }
}
