//! Field Codec Layer
//!
//! Pure, total converters between persisted domain values and their
//! UI-editable view representations (zero-based indices, percentages,
//! display strings). Every function here accepts any input in its type's
//! range and maps unrecognized values to a neutral default; none of them
//! fail or allocate surprising state.
//!
//! Enum-valued fields use the `from_repr`/`as usize` tables generated in
//! `domain::enums` and are not duplicated here.

use crate::constants::{
    CUSTOM_RESOLUTION_SCALE_INDEX, CUSTOM_RESOLUTION_SCALE_SENTINEL, MAX_ANISOTROPY_INDEX,
    VOLUME_SCALE,
};

/// Base style names, indexed by view position. Index 0 is the lossy
/// fallback for unrecognized persisted strings.
pub const BASE_STYLES: [&str; 3] = ["Auto", "Light", "Dark"];

// ==================== Resolution scale ====================

/// Domain resolution scale (-1 = custom, 1..=4 = multiplier) to view index.
pub fn resolution_scale_to_view(domain: i32) -> usize {
    if domain == CUSTOM_RESOLUTION_SCALE_SENTINEL {
        CUSTOM_RESOLUTION_SCALE_INDEX
    } else {
        (domain - 1).clamp(0, CUSTOM_RESOLUTION_SCALE_INDEX as i32 - 1) as usize
    }
}

/// View index to domain resolution scale. Index 4 (and anything above)
/// selects the custom sentinel.
pub fn resolution_scale_to_domain(index: usize) -> i32 {
    if index >= CUSTOM_RESOLUTION_SCALE_INDEX {
        CUSTOM_RESOLUTION_SCALE_SENTINEL
    } else {
        index as i32 + 1
    }
}

/// Round a custom resolution scale to one decimal place.
pub fn round_custom_scale(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

// ==================== Anisotropy ====================

/// Domain anisotropy (-1 = auto, else a power of two) to view index.
pub fn anisotropy_to_view(domain: f32) -> usize {
    if domain <= 0.0 {
        0
    } else {
        (domain.log2().round() as usize).min(MAX_ANISOTROPY_INDEX)
    }
}

/// View index to domain anisotropy. Index 0 is "auto" (-1).
pub fn anisotropy_to_domain(index: usize) -> f32 {
    if index == 0 {
        -1.0
    } else {
        2f32.powi(index.min(MAX_ANISOTROPY_INDEX) as i32)
    }
}

// ==================== Base style ====================

/// Persisted base style string to view index. Unrecognized strings decode
/// to index 0 ("Auto"); this is a deliberately lossy default.
pub fn base_style_to_view(domain: &str) -> usize {
    BASE_STYLES.iter().position(|s| *s == domain).unwrap_or(0)
}

/// View index to persisted base style string.
pub fn base_style_to_domain(index: usize) -> &'static str {
    BASE_STYLES.get(index).copied().unwrap_or(BASE_STYLES[0])
}

// ==================== Volume ====================

/// Persisted volume fraction to view percentage.
pub fn volume_to_view(domain: f32) -> f32 {
    domain * VOLUME_SCALE
}

/// View percentage to persisted volume fraction.
pub fn volume_to_domain(view: f32) -> f32 {
    view / VOLUME_SCALE
}

// ==================== Timezone display ====================

/// Format a UTC offset in seconds as `UTC±HH:MM`.
pub fn format_utc_offset(offset_seconds: i32) -> String {
    let hours = offset_seconds / 3600;
    let minutes = (offset_seconds % 3600).abs() / 60;
    format!("UTC{hours:+03}:{minutes:02}")
}

/// Timezone abbreviations that are bare offsets (start with '+' or '-')
/// carry no information next to the formatted offset, so they are blanked.
pub fn display_abbreviation(abbr: &str) -> &str {
    if abbr.starts_with('+') || abbr.starts_with('-') {
        ""
    } else {
        abbr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_scale_round_trips_every_view_index() {
        for index in 0..=4 {
            let domain = resolution_scale_to_domain(index);
            assert_eq!(resolution_scale_to_view(domain), index);
        }
    }

    #[test]
    fn resolution_scale_custom_sentinel() {
        assert_eq!(resolution_scale_to_view(-1), 4);
        assert_eq!(resolution_scale_to_domain(4), -1);
        // Past-the-end indices also select the sentinel.
        assert_eq!(resolution_scale_to_domain(9), -1);
    }

    #[test]
    fn resolution_scale_out_of_range_domain_clamps() {
        assert_eq!(resolution_scale_to_view(0), 0);
        assert_eq!(resolution_scale_to_view(99), 3);
    }

    #[test]
    fn anisotropy_round_trips_supported_domain_values() {
        for domain in [-1.0, 2.0, 4.0, 8.0, 16.0] {
            let index = anisotropy_to_view(domain);
            assert_eq!(anisotropy_to_domain(index), domain);
        }
    }

    #[test]
    fn anisotropy_auto_is_index_zero() {
        assert_eq!(anisotropy_to_view(-1.0), 0);
        assert_eq!(anisotropy_to_domain(0), -1.0);
    }

    #[test]
    fn anisotropy_clamps_oversized_values() {
        assert_eq!(anisotropy_to_view(64.0), 4);
        assert_eq!(anisotropy_to_domain(9), 16.0);
    }

    #[test]
    fn base_style_known_values() {
        assert_eq!(base_style_to_view("Auto"), 0);
        assert_eq!(base_style_to_view("Light"), 1);
        assert_eq!(base_style_to_view("Dark"), 2);
        for index in 0..BASE_STYLES.len() {
            assert_eq!(base_style_to_view(base_style_to_domain(index)), index);
        }
    }

    #[test]
    fn base_style_unknown_decodes_to_auto() {
        assert_eq!(base_style_to_view("Solarized"), 0);
        assert_eq!(base_style_to_domain(7), "Auto");
    }

    #[test]
    fn custom_scale_rounds_to_one_decimal() {
        assert_eq!(round_custom_scale(1.2499), 1.2);
        assert_eq!(round_custom_scale(1.25), 1.3);
        assert_eq!(round_custom_scale(2.0), 2.0);
    }

    #[test]
    fn volume_scales_to_percentage() {
        assert_eq!(volume_to_view(0.5), 50.0);
        assert_eq!(volume_to_domain(50.0), 0.5);
    }

    #[test]
    fn utc_offset_formatting() {
        assert_eq!(format_utc_offset(0), "UTC+00:00");
        assert_eq!(format_utc_offset(3600), "UTC+01:00");
        assert_eq!(format_utc_offset(-19800), "UTC-05:30");
        assert_eq!(format_utc_offset(34200), "UTC+09:30");
    }

    #[test]
    fn offset_like_abbreviations_are_blanked() {
        assert_eq!(display_abbreviation("+07"), "");
        assert_eq!(display_abbreviation("-0330"), "");
        assert_eq!(display_abbreviation("CET"), "CET");
    }
}
