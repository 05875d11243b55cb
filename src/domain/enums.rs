//! Domain Enums
//!
//! Canonical persisted enums for every indexed setting. Each enum doubles
//! as its own bidirectional index table: the view stores `value as usize`
//! and decodes with `from_repr(index).unwrap_or_default()`, so an
//! out-of-range index always falls back to the default variant instead of
//! failing.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, FromRepr};

/// Cursor hiding behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum HideCursorMode {
    #[default]
    Never,
    OnIdle,
    Always,
}

/// Console region
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum Region {
    Japan,
    #[default]
    Usa,
    Europe,
    Australia,
    China,
    Korea,
    Taiwan,
}

/// System language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum SystemLanguage {
    Japanese,
    #[default]
    AmericanEnglish,
    French,
    German,
    Italian,
    Spanish,
    Chinese,
    Korean,
    Dutch,
    Portuguese,
    Russian,
    Taiwanese,
    BritishEnglish,
}

/// Memory manager mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum MemoryManagerMode {
    SoftwarePageTable,
    #[default]
    HostMapped,
    HostMappedUnsafe,
}

/// Graphics backend selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum GraphicsBackend {
    #[default]
    Vulkan,
    OpenGl,
}

/// Graphics backend threading mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum BackendThreading {
    #[default]
    Auto,
    Off,
    On,
}

/// Aspect ratio of the rendered output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum AspectRatio {
    Fixed4x3,
    #[default]
    Fixed16x9,
    Fixed16x10,
    Fixed21x9,
    Fixed32x9,
    Stretched,
}

/// Anti-aliasing effect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum AntiAliasing {
    #[default]
    None,
    Fxaa,
    SmaaLow,
    SmaaMedium,
    SmaaHigh,
    SmaaUltra,
}

/// Upscaling filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum ScalingFilter {
    #[default]
    Bilinear,
    Nearest,
    Fsr,
}

/// Audio output backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum AudioBackend {
    Dummy,
    OpenAl,
    SoundIo,
    #[default]
    Sdl2,
}

impl std::fmt::Display for AudioBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AudioBackend::Dummy => "Dummy",
            AudioBackend::OpenAl => "OpenAL",
            AudioBackend::SoundIo => "SoundIO",
            AudioBackend::Sdl2 => "SDL2",
        };
        write!(f, "{name}")
    }
}

/// Graphics API debug level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum GraphicsDebugLevel {
    #[default]
    None,
    Error,
    Slowdowns,
    All,
}

/// Multiplayer mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumCount, FromRepr)]
#[repr(usize)]
pub enum MultiplayerMode {
    #[default]
    Disabled,
    LdnMitm,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_index_round_trip<T>(count: usize, from_repr: impl Fn(usize) -> Option<T>)
    where
        T: Copy + PartialEq + std::fmt::Debug,
    {
        // Every declared index decodes, and decoding is the inverse of `as usize`.
        for index in 0..count {
            let value = from_repr(index);
            assert!(value.is_some(), "index {index} must decode");
        }
        assert!(from_repr(count).is_none(), "index {count} must be out of range");
    }

    #[test]
    fn enum_tables_are_exhaustive() {
        assert_index_round_trip(HideCursorMode::COUNT, HideCursorMode::from_repr);
        assert_index_round_trip(Region::COUNT, Region::from_repr);
        assert_index_round_trip(SystemLanguage::COUNT, SystemLanguage::from_repr);
        assert_index_round_trip(MemoryManagerMode::COUNT, MemoryManagerMode::from_repr);
        assert_index_round_trip(GraphicsBackend::COUNT, GraphicsBackend::from_repr);
        assert_index_round_trip(BackendThreading::COUNT, BackendThreading::from_repr);
        assert_index_round_trip(AspectRatio::COUNT, AspectRatio::from_repr);
        assert_index_round_trip(AntiAliasing::COUNT, AntiAliasing::from_repr);
        assert_index_round_trip(ScalingFilter::COUNT, ScalingFilter::from_repr);
        assert_index_round_trip(AudioBackend::COUNT, AudioBackend::from_repr);
        assert_index_round_trip(GraphicsDebugLevel::COUNT, GraphicsDebugLevel::from_repr);
        assert_index_round_trip(MultiplayerMode::COUNT, MultiplayerMode::from_repr);
    }

    #[test]
    fn out_of_range_index_falls_back_to_default() {
        assert_eq!(Region::from_repr(99).unwrap_or_default(), Region::Usa);
        assert_eq!(AudioBackend::from_repr(99).unwrap_or_default(), AudioBackend::Sdl2);
        assert_eq!(
            BackendThreading::from_repr(99).unwrap_or_default(),
            BackendThreading::Auto
        );
    }

    #[test]
    fn audio_backend_display_names() {
        assert_eq!(AudioBackend::OpenAl.to_string(), "OpenAL");
        assert_eq!(AudioBackend::Sdl2.to_string(), "SDL2");
    }
}
