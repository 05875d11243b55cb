//! Domain - Canonical Settings Model
//!
//! Persisted-side types: the settings snapshot and its enums. View-side
//! representations are produced by the codec layer.

pub mod enums;
pub mod settings;

pub use enums::{
    AntiAliasing, AspectRatio, AudioBackend, BackendThreading, GraphicsBackend,
    GraphicsDebugLevel, HideCursorMode, MemoryManagerMode, MultiplayerMode, Region, ScalingFilter,
    SystemLanguage,
};
pub use settings::{
    AudioConfig, CpuConfig, GraphicsConfig, HotkeyBundle, InputConfig, LoggerConfig,
    NetworkConfig, SettingsConfig, SystemConfig, UiConfig,
};
