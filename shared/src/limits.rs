use serde::{Deserialize, Serialize};

pub const MAX_OPTIONS: usize = 20;
pub const MAX_OPTION_LENGTH: usize = 50;
pub const MAX_TITLE_LENGTH: usize = 50;
pub const HISTORY_MAX_ITEMS: usize = 35;

pub const MIN_SPIN_ROTATIONS: f64 = 5.0;
pub const MAX_SPIN_ROTATIONS: f64 = 10.0;
pub const MIN_SPIN_DURATION_MS: f64 = 2000.0;
pub const MAX_SPIN_DURATION_MS: f64 = 6000.0;

/// The pointer sits at the 3 o'clock position, 90 degrees clockwise from the
/// sector layout origin. Winner resolution adds this offset to the final
/// rotation, so if the pointer ever moves visually this constant must move
/// with it.
pub const POINTER_OFFSET_DEG: f64 = 90.0;

pub const DEFAULT_TITLE: &str = "Picker Wheel";

pub const EMPTY_LABEL_ERROR: &str = "Please enter a name before adding it";
pub const DUPLICATE_LABEL_ERROR: &str = "That name is already on the wheel";
pub const CAPACITY_ERROR: &str = "The wheel is full. Remove a name before adding another";
pub const INDEX_ERROR: &str = "That entry no longer exists";

/// Bounds for the option registry. Injected rather than read from the
/// constants so tests can shrink them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryLimits {
    pub max_options: usize,
    pub max_option_length: usize,
}

impl Default for RegistryLimits {
    fn default() -> Self {
        Self {
            max_options: MAX_OPTIONS,
            max_option_length: MAX_OPTION_LENGTH,
        }
    }
}

/// Bounds for the randomized spin draws. Rotations are full turns, the
/// duration is wall-clock milliseconds. Both ranges are half-open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinLimits {
    pub min_rotations: f64,
    pub max_rotations: f64,
    pub min_duration_ms: f64,
    pub max_duration_ms: f64,
}

impl Default for SpinLimits {
    fn default() -> Self {
        Self {
            min_rotations: MIN_SPIN_ROTATIONS,
            max_rotations: MAX_SPIN_ROTATIONS,
            min_duration_ms: MIN_SPIN_DURATION_MS,
            max_duration_ms: MAX_SPIN_DURATION_MS,
        }
    }
}

/// Trims and caps the wheel title for display and URL storage.
pub fn sanitize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    let capped: String = trimmed.chars().take(MAX_TITLE_LENGTH).collect();
    capped.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title_trims_and_caps() {
        assert_eq!(sanitize_title("  Friday Quiz  "), "Friday Quiz");
        let long = "x".repeat(MAX_TITLE_LENGTH + 10);
        assert_eq!(sanitize_title(&long).chars().count(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn test_sanitize_title_idempotent_after_cap() {
        let raw = format!("{} tail", "y".repeat(MAX_TITLE_LENGTH - 1));
        let once = sanitize_title(&raw);
        assert_eq!(sanitize_title(&once), once);
    }
}
