//! Engine Constants
//!
//! Centralized constants for codec sentinels and fallback indices.

/// View index that selects the custom resolution scale
pub const CUSTOM_RESOLUTION_SCALE_INDEX: usize = 4;

/// Domain sentinel for "custom" resolution scale
pub const CUSTOM_RESOLUTION_SCALE_SENTINEL: i32 = -1;

/// Highest valid anisotropy view index (16x)
pub const MAX_ANISOTROPY_INDEX: usize = 4;

/// Graphics backend index selected when no adapters are discovered (OpenGL)
pub const FALLBACK_GRAPHICS_BACKEND_INDEX: usize = 1;

/// Label of the sentinel network interface entry (always index 0)
pub const NETWORK_DEFAULT_LABEL: &str = "Default";

/// Backing key of the sentinel network interface entry
pub const NETWORK_DEFAULT_KEY: &str = "0";

/// Scale between the persisted volume fraction and the view percentage
pub const VOLUME_SCALE: f32 = 100.0;
