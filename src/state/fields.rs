//! Field Identifiers
//!
//! One identifier per slot of the view-state aggregate. Used for change
//! notifications to observers and for the per-field "user touched"
//! tracking that protects edits from late enrichment results.

/// Identifies a single setting field in the view-state aggregate.
///
/// Derived (read-only) fields have ids too so observers hear about them
/// when a primary field they depend on changes.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FieldId {
    // ==================== User Interface ====================
    EnableDiscordIntegration,
    CheckUpdatesOnStart,
    ShowConfirmExit,
    RememberWindowState,
    HideCursorIndex,
    BaseStyleIndex,
    GameDirectories,

    // ==================== Input ====================
    EnableDockedMode,
    EnableKeyboard,
    EnableMouse,
    KeyboardHotkey,

    // ==================== System ====================
    RegionIndex,
    LanguageIndex,
    TimeZone,
    CurrentDate,
    CurrentTime,
    EnableFsIntegrityChecks,
    ExpandDramSize,
    IgnoreMissingServices,

    // ==================== CPU ====================
    EnablePptc,
    MemoryModeIndex,
    UseHypervisor,

    // ==================== Graphics ====================
    GraphicsBackendIndex,
    /// Derived: graphics backend index selects Vulkan
    VulkanSelected,
    VulkanAvailable,
    GpuOptions,
    PreferredGpuIndex,
    EnableShaderCache,
    EnableTextureRecompression,
    EnableMacroHle,
    EnableColorSpacePassthrough,
    ResolutionScaleIndex,
    CustomResolutionScale,
    /// Derived: resolution scale index selects the custom entry
    CustomResolutionScaleActive,
    MaxAnisotropyIndex,
    AspectRatioIndex,
    BackendThreadingIndex,
    ShaderDumpPath,
    AntiAliasingIndex,
    ScalingFilterIndex,
    /// Derived: scaling filter index selects FSR
    ScalingFilterActive,
    ScalingFilterLevel,
    /// Derived: display text for the scaling filter level
    ScalingFilterLevelText,
    GraphicsDebugLevelIndex,
    EnableVsync,

    // ==================== Audio ====================
    AudioBackendIndex,
    Volume,
    OpenAlAvailable,
    SoundIoAvailable,
    Sdl2Available,

    // ==================== Network ====================
    EnableInternetAccess,
    NetworkInterfaceOptions,
    NetworkInterfaceIndex,
    MultiplayerModeIndex,

    // ==================== Logging ====================
    EnableFileLog,
    EnableStubLog,
    EnableInfoLog,
    EnableWarnLog,
    EnableErrorLog,
    EnableTraceLog,
    EnableGuestLog,
    EnableDebugLog,
    EnableFsAccessLog,
    FsGlobalAccessLogMode,

    // ==================== Timezones ====================
    TimezoneOptions,
}
