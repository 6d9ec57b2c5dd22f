//! Haptic feedback for menu interactions.

mod haptics;
pub mod helper_path;
mod patterns;

pub use haptics::{
    HapticFeedback, HelperLoader, LoadState, ReadyCallback, SettingsStore, VibrationPlatform,
    INTENSITY_KEY,
};
pub use patterns::{parse_intensity, scale_pulse, Pattern, Vibration, DEFAULT_INTENSITY, MAX_PULSE_MS};
