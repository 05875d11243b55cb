//! Settings - Canonical Persisted Configuration
//!
//! The domain-side snapshot of every setting, grouped the way the store
//! persists them. These are canonical values; the editable view
//! representation lives in `state::SettingsViewState` and is derived
//! through the codec layer.

use serde::{Deserialize, Serialize};

use crate::domain::enums::{
    AntiAliasing, AspectRatio, AudioBackend, BackendThreading, GraphicsBackend,
    GraphicsDebugLevel, HideCursorMode, MemoryManagerMode, MultiplayerMode, Region, ScalingFilter,
    SystemLanguage,
};

/// Full persisted settings snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SettingsConfig {
    /// User interface settings
    pub ui: UiConfig,
    /// Input settings
    pub input: InputConfig,
    /// System settings
    pub system: SystemConfig,
    /// CPU settings
    pub cpu: CpuConfig,
    /// Graphics settings
    pub graphics: GraphicsConfig,
    /// Audio settings
    pub audio: AudioConfig,
    /// Network settings
    pub network: NetworkConfig,
    /// Logging settings
    pub logger: LoggerConfig,
}

/// User interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable Discord rich presence integration
    pub enable_discord_integration: bool,
    /// Check for updates on startup
    pub check_updates_on_start: bool,
    /// Ask for confirmation before exiting
    pub show_confirm_exit: bool,
    /// Restore window size and position on startup
    pub remember_window_state: bool,
    /// Cursor hiding behavior
    pub hide_cursor: HideCursorMode,
    /// Base style name ("Auto", "Light" or "Dark")
    pub base_style: String,
    /// Directories scanned for content
    pub game_dirs: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_discord_integration: false,
            check_updates_on_start: true,
            show_confirm_exit: true,
            remember_window_state: true,
            hide_cursor: HideCursorMode::default(),
            base_style: "Auto".to_string(),
            game_dirs: Vec::new(),
        }
    }
}

/// Keyboard hotkey bindings (composite field, persisted as one bundle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyBundle {
    pub toggle_vsync: String,
    pub screenshot: String,
    pub show_ui: String,
    pub pause: String,
    pub toggle_mute: String,
    pub res_scale_up: String,
    pub res_scale_down: String,
}

impl Default for HotkeyBundle {
    fn default() -> Self {
        Self {
            toggle_vsync: "Tab".to_string(),
            screenshot: "F8".to_string(),
            show_ui: "F4".to_string(),
            pause: "F5".to_string(),
            toggle_mute: "F2".to_string(),
            res_scale_up: "Unbound".to_string(),
            res_scale_down: "Unbound".to_string(),
        }
    }
}

/// Input settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Docked mode emulation
    pub enable_docked_mode: bool,
    /// Direct keyboard access
    pub enable_keyboard: bool,
    /// Direct mouse access
    pub enable_mouse: bool,
    /// Keyboard hotkey bindings
    pub hotkeys: HotkeyBundle,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            enable_docked_mode: true,
            enable_keyboard: false,
            enable_mouse: false,
            hotkeys: HotkeyBundle::default(),
        }
    }
}

/// System settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Console region
    pub region: Region,
    /// System language
    pub language: SystemLanguage,
    /// Timezone location key (e.g. "UTC", "Europe/Berlin")
    pub time_zone: String,
    /// Offset applied to the host clock, in seconds
    pub system_time_offset: i64,
    /// Verify file system integrity on access
    pub enable_fs_integrity_checks: bool,
    /// Expand emulated DRAM size
    pub expand_ram: bool,
    /// Ignore calls to missing services
    pub ignore_missing_services: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            language: SystemLanguage::default(),
            time_zone: "UTC".to_string(),
            system_time_offset: 0,
            enable_fs_integrity_checks: true,
            expand_ram: false,
            ignore_missing_services: false,
        }
    }
}

/// CPU settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// Profiled translation cache
    pub enable_ptc: bool,
    /// Memory manager mode
    pub memory_manager_mode: MemoryManagerMode,
    /// Use the platform hypervisor when available
    pub use_hypervisor: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            enable_ptc: true,
            memory_manager_mode: MemoryManagerMode::default(),
            use_hypervisor: true,
        }
    }
}

/// Graphics settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    /// Selected graphics backend
    pub backend: GraphicsBackend,
    /// Physical device id of the preferred GPU ("" = first available)
    pub preferred_gpu: String,
    /// Cache compiled shaders on disk
    pub enable_shader_cache: bool,
    /// Recompress ASTC textures
    pub enable_texture_recompression: bool,
    /// Macro high-level emulation
    pub enable_macro_hle: bool,
    /// Pass the color space through unmodified
    pub enable_color_space_passthrough: bool,
    /// Resolution scale multiplier, 1..=4, or -1 for custom
    pub res_scale: i32,
    /// Custom resolution scale, used when `res_scale` is -1
    pub res_scale_custom: f32,
    /// Max anisotropic filtering level, -1 for auto, else a power of two
    pub max_anisotropy: f32,
    /// Aspect ratio
    pub aspect_ratio: AspectRatio,
    /// Backend threading mode
    pub backend_threading: BackendThreading,
    /// Directory where translated shaders are dumped ("" = disabled)
    pub shaders_dump_path: String,
    /// Anti-aliasing effect
    pub anti_aliasing: AntiAliasing,
    /// Upscaling filter
    pub scaling_filter: ScalingFilter,
    /// Upscaling filter intensity, 0..=100
    pub scaling_filter_level: i32,
    /// Graphics API debug level
    pub debug_level: GraphicsDebugLevel,
    /// Vertical sync
    pub enable_vsync: bool,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            backend: GraphicsBackend::default(),
            preferred_gpu: String::new(),
            enable_shader_cache: true,
            enable_texture_recompression: false,
            enable_macro_hle: true,
            enable_color_space_passthrough: false,
            res_scale: 1,
            res_scale_custom: 1.0,
            max_anisotropy: -1.0,
            aspect_ratio: AspectRatio::default(),
            backend_threading: BackendThreading::default(),
            shaders_dump_path: String::new(),
            anti_aliasing: AntiAliasing::default(),
            scaling_filter: ScalingFilter::default(),
            scaling_filter_level: 80,
            debug_level: GraphicsDebugLevel::default(),
            enable_vsync: true,
        }
    }
}

/// Audio settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Selected audio backend
    pub backend: AudioBackend,
    /// Output volume as a fraction, 0.0..=1.0
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            backend: AudioBackend::default(),
            volume: 1.0,
        }
    }
}

/// Network settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Guest internet access
    pub enable_internet_access: bool,
    /// Id of the LAN interface used for multiplayer ("0" = default)
    pub lan_interface_id: String,
    /// Multiplayer mode
    pub multiplayer_mode: MultiplayerMode,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            enable_internet_access: false,
            lan_interface_id: "0".to_string(),
            multiplayer_mode: MultiplayerMode::default(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub enable_file_log: bool,
    pub enable_stub: bool,
    pub enable_info: bool,
    pub enable_warn: bool,
    pub enable_error: bool,
    pub enable_trace: bool,
    pub enable_guest: bool,
    pub enable_debug: bool,
    pub enable_fs_access_log: bool,
    /// Global file system access log mode, 0..=3
    pub fs_global_access_log_mode: i32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enable_file_log: true,
            enable_stub: false,
            enable_info: true,
            enable_warn: true,
            enable_error: true,
            enable_trace: false,
            enable_guest: true,
            enable_debug: false,
            enable_fs_access_log: false,
            fs_global_access_log_mode: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let config = SettingsConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: SettingsConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_fill_with_defaults() {
        let config: SettingsConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, SettingsConfig::default());
    }
}
