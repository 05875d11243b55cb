//! Settings View-State Aggregate
//!
//! The mutable, editable snapshot of every setting in view representation
//! (indices, percentages, strings), plus the option lists populated by
//! enrichment pipelines, availability flags, the directory dirty marker
//! and per-field touched tracking.
//!
//! Derived fields are read-only and recomputed from their primary fields
//! on access; setters of a primary field notify the derived fields'
//! observers synchronously, after the mutation.

use std::collections::HashSet;

use chrono::{Local, NaiveDate, NaiveTime, TimeDelta};

use crate::codec;
use crate::constants::{
    FALLBACK_GRAPHICS_BACKEND_INDEX, NETWORK_DEFAULT_KEY, NETWORK_DEFAULT_LABEL,
};
use crate::domain::enums::ScalingFilter;
use crate::domain::{HotkeyBundle, SettingsConfig};
use crate::services::events::{
    AudioBackendSupport, GpuAdapter, NetworkInterfaceInfo, TimezoneEntry,
};
use crate::state::fields::FieldId;
use crate::state::options::OptionList;

/// Observer callback invoked after a field mutation
pub type FieldObserver = Box<dyn Fn(FieldId) + Send>;

/// Editable view-state for the whole settings set
pub struct SettingsViewState {
    // ==================== User Interface ====================
    enable_discord_integration: bool,
    check_updates_on_start: bool,
    show_confirm_exit: bool,
    remember_window_state: bool,
    hide_cursor_index: usize,
    base_style_index: usize,
    game_directories: Vec<String>,
    directory_changed: bool,

    // ==================== Input ====================
    enable_docked_mode: bool,
    enable_keyboard: bool,
    enable_mouse: bool,
    keyboard_hotkey: HotkeyBundle,

    // ==================== System ====================
    region_index: usize,
    language_index: usize,
    time_zone: String,
    valid_tz_regions: Vec<String>,
    current_date: NaiveDate,
    current_time: NaiveTime,
    enable_fs_integrity_checks: bool,
    expand_dram_size: bool,
    ignore_missing_services: bool,

    // ==================== CPU ====================
    enable_pptc: bool,
    memory_mode_index: usize,
    use_hypervisor: bool,

    // ==================== Graphics ====================
    graphics_backend_index: usize,
    vulkan_available: bool,
    gpu_options: OptionList,
    enable_shader_cache: bool,
    enable_texture_recompression: bool,
    enable_macro_hle: bool,
    enable_color_space_passthrough: bool,
    resolution_scale_index: usize,
    custom_resolution_scale: f32,
    max_anisotropy_index: usize,
    aspect_ratio_index: usize,
    backend_threading_index: usize,
    shader_dump_path: String,
    anti_aliasing_index: usize,
    scaling_filter_index: usize,
    scaling_filter_level: i32,
    graphics_debug_level_index: usize,
    enable_vsync: bool,

    // ==================== Audio ====================
    audio_backend_index: usize,
    volume: f32,
    openal_available: bool,
    soundio_available: bool,
    sdl2_available: bool,

    // ==================== Network ====================
    enable_internet_access: bool,
    network_interface_options: OptionList,
    multiplayer_mode_index: usize,

    // ==================== Logging ====================
    enable_file_log: bool,
    enable_stub_log: bool,
    enable_info_log: bool,
    enable_warn_log: bool,
    enable_error_log: bool,
    enable_trace_log: bool,
    enable_guest_log: bool,
    enable_debug_log: bool,
    enable_fs_access_log: bool,
    fs_global_access_log_mode: i32,

    // ==================== Timezones ====================
    timezone_options: OptionList,

    touched: HashSet<FieldId>,
    observers: Vec<FieldObserver>,
}

impl SettingsViewState {
    /// Create an aggregate loaded from the given snapshot
    pub fn new(config: &SettingsConfig) -> Self {
        let now = Local::now();
        let mut state = Self {
            enable_discord_integration: false,
            check_updates_on_start: false,
            show_confirm_exit: false,
            remember_window_state: false,
            hide_cursor_index: 0,
            base_style_index: 0,
            game_directories: Vec::new(),
            directory_changed: false,
            enable_docked_mode: false,
            enable_keyboard: false,
            enable_mouse: false,
            keyboard_hotkey: HotkeyBundle::default(),
            region_index: 0,
            language_index: 0,
            time_zone: String::new(),
            valid_tz_regions: Vec::new(),
            current_date: now.date_naive(),
            current_time: now.time(),
            enable_fs_integrity_checks: false,
            expand_dram_size: false,
            ignore_missing_services: false,
            enable_pptc: false,
            memory_mode_index: 0,
            use_hypervisor: false,
            graphics_backend_index: 0,
            vulkan_available: true,
            gpu_options: OptionList::new(),
            enable_shader_cache: false,
            enable_texture_recompression: false,
            enable_macro_hle: false,
            enable_color_space_passthrough: false,
            resolution_scale_index: 0,
            custom_resolution_scale: 1.0,
            max_anisotropy_index: 0,
            aspect_ratio_index: 0,
            backend_threading_index: 0,
            shader_dump_path: String::new(),
            anti_aliasing_index: 0,
            scaling_filter_index: 0,
            scaling_filter_level: 0,
            graphics_debug_level_index: 0,
            enable_vsync: false,
            audio_backend_index: 0,
            volume: 0.0,
            openal_available: false,
            soundio_available: false,
            sdl2_available: false,
            enable_internet_access: false,
            network_interface_options: OptionList::with_sentinel(
                NETWORK_DEFAULT_LABEL,
                NETWORK_DEFAULT_KEY,
            ),
            multiplayer_mode_index: 0,
            enable_file_log: false,
            enable_stub_log: false,
            enable_info_log: false,
            enable_warn_log: false,
            enable_error_log: false,
            enable_trace_log: false,
            enable_guest_log: false,
            enable_debug_log: false,
            enable_fs_access_log: false,
            fs_global_access_log_mode: 0,
            timezone_options: OptionList::new(),
            touched: HashSet::new(),
            observers: Vec::new(),
        };
        state.load_from(config);
        state
    }

    /// Register an observer notified synchronously after every field
    /// mutation, derived fields included.
    pub fn subscribe(&mut self, observer: impl Fn(FieldId) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self, field: FieldId) {
        for observer in &self.observers {
            observer(field);
        }
    }

    fn touch(&mut self, field: FieldId) {
        self.touched.insert(field);
        self.notify(field);
    }

    /// Whether the user has edited the given field since the last load
    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    /// Reset every field from the persisted snapshot.
    ///
    /// Clears the touched set and the directory dirty marker. Option
    /// lists owned by enrichment pipelines are left as they are; their
    /// selections are resolved by the pipelines themselves.
    pub fn load_from(&mut self, config: &SettingsConfig) {
        // User Interface
        self.enable_discord_integration = config.ui.enable_discord_integration;
        self.check_updates_on_start = config.ui.check_updates_on_start;
        self.show_confirm_exit = config.ui.show_confirm_exit;
        self.remember_window_state = config.ui.remember_window_state;
        self.hide_cursor_index = config.ui.hide_cursor as usize;
        self.base_style_index = codec::base_style_to_view(&config.ui.base_style);
        self.game_directories = config.ui.game_dirs.clone();
        self.directory_changed = false;

        // Input
        self.enable_docked_mode = config.input.enable_docked_mode;
        self.enable_keyboard = config.input.enable_keyboard;
        self.enable_mouse = config.input.enable_mouse;
        self.keyboard_hotkey = config.input.hotkeys.clone();

        // System
        self.region_index = config.system.region as usize;
        self.language_index = config.system.language as usize;
        self.time_zone = config.system.time_zone.clone();
        let shifted = Local::now() + TimeDelta::seconds(config.system.system_time_offset);
        self.current_date = shifted.date_naive();
        self.current_time = shifted.time();
        self.enable_fs_integrity_checks = config.system.enable_fs_integrity_checks;
        self.expand_dram_size = config.system.expand_ram;
        self.ignore_missing_services = config.system.ignore_missing_services;

        // CPU
        self.enable_pptc = config.cpu.enable_ptc;
        self.memory_mode_index = config.cpu.memory_manager_mode as usize;
        self.use_hypervisor = config.cpu.use_hypervisor;

        // Graphics. The preferred GPU selection is resolved by the GPU
        // pipeline against the completed adapter list, not here.
        self.graphics_backend_index = config.graphics.backend as usize;
        self.enable_shader_cache = config.graphics.enable_shader_cache;
        self.enable_texture_recompression = config.graphics.enable_texture_recompression;
        self.enable_macro_hle = config.graphics.enable_macro_hle;
        self.enable_color_space_passthrough = config.graphics.enable_color_space_passthrough;
        self.resolution_scale_index = codec::resolution_scale_to_view(config.graphics.res_scale);
        self.custom_resolution_scale = codec::round_custom_scale(config.graphics.res_scale_custom);
        self.max_anisotropy_index = codec::anisotropy_to_view(config.graphics.max_anisotropy);
        self.aspect_ratio_index = config.graphics.aspect_ratio as usize;
        self.backend_threading_index = config.graphics.backend_threading as usize;
        self.shader_dump_path = config.graphics.shaders_dump_path.clone();
        self.anti_aliasing_index = config.graphics.anti_aliasing as usize;
        self.scaling_filter_index = config.graphics.scaling_filter as usize;
        self.scaling_filter_level = config.graphics.scaling_filter_level;
        self.graphics_debug_level_index = config.graphics.debug_level as usize;
        self.enable_vsync = config.graphics.enable_vsync;

        // Audio
        self.audio_backend_index = config.audio.backend as usize;
        self.volume = codec::volume_to_view(config.audio.volume);

        // Network. The interface selection is resolved by the network
        // pipeline against the completed interface list.
        self.enable_internet_access = config.network.enable_internet_access;
        self.multiplayer_mode_index = config.network.multiplayer_mode as usize;

        // Logging
        self.enable_file_log = config.logger.enable_file_log;
        self.enable_stub_log = config.logger.enable_stub;
        self.enable_info_log = config.logger.enable_info;
        self.enable_warn_log = config.logger.enable_warn;
        self.enable_error_log = config.logger.enable_error;
        self.enable_trace_log = config.logger.enable_trace;
        self.enable_guest_log = config.logger.enable_guest;
        self.enable_debug_log = config.logger.enable_debug;
        self.enable_fs_access_log = config.logger.enable_fs_access_log;
        self.fs_global_access_log_mode = config.logger.fs_global_access_log_mode;

        self.touched.clear();
    }

    // ==================== Derived fields ====================

    /// Derived: the resolution scale index selects the custom entry
    pub fn custom_resolution_scale_active(&self) -> bool {
        self.resolution_scale_index == crate::constants::CUSTOM_RESOLUTION_SCALE_INDEX
    }

    /// Derived: the graphics backend index selects Vulkan
    pub fn vulkan_selected(&self) -> bool {
        self.graphics_backend_index == 0
    }

    /// Derived: the scaling filter index selects FSR
    pub fn scaling_filter_active(&self) -> bool {
        self.scaling_filter_index == ScalingFilter::Fsr as usize
    }

    /// Derived: display text for the scaling filter level
    pub fn scaling_filter_level_text(&self) -> String {
        format!("{}", self.scaling_filter_level)
    }

    // ==================== User Interface ====================

    pub fn enable_discord_integration(&self) -> bool {
        self.enable_discord_integration
    }

    pub fn set_enable_discord_integration(&mut self, value: bool) {
        self.enable_discord_integration = value;
        self.touch(FieldId::EnableDiscordIntegration);
    }

    pub fn check_updates_on_start(&self) -> bool {
        self.check_updates_on_start
    }

    pub fn set_check_updates_on_start(&mut self, value: bool) {
        self.check_updates_on_start = value;
        self.touch(FieldId::CheckUpdatesOnStart);
    }

    pub fn show_confirm_exit(&self) -> bool {
        self.show_confirm_exit
    }

    pub fn set_show_confirm_exit(&mut self, value: bool) {
        self.show_confirm_exit = value;
        self.touch(FieldId::ShowConfirmExit);
    }

    pub fn remember_window_state(&self) -> bool {
        self.remember_window_state
    }

    pub fn set_remember_window_state(&mut self, value: bool) {
        self.remember_window_state = value;
        self.touch(FieldId::RememberWindowState);
    }

    pub fn hide_cursor_index(&self) -> usize {
        self.hide_cursor_index
    }

    pub fn set_hide_cursor_index(&mut self, value: usize) {
        self.hide_cursor_index = value;
        self.touch(FieldId::HideCursorIndex);
    }

    pub fn base_style_index(&self) -> usize {
        self.base_style_index
    }

    pub fn set_base_style_index(&mut self, value: usize) {
        self.base_style_index = value;
        self.touch(FieldId::BaseStyleIndex);
    }

    pub fn game_directories(&self) -> &[String] {
        &self.game_directories
    }

    /// Whether any directory mutation happened since the last load/apply.
    /// Set by every add/remove call, even when the list content ends up
    /// unchanged; the marker tracks mutations, not differences.
    pub fn directory_changed(&self) -> bool {
        self.directory_changed
    }

    pub fn add_game_directory(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.game_directories.contains(&path) {
            self.game_directories.push(path);
        }
        self.directory_changed = true;
        self.touch(FieldId::GameDirectories);
    }

    pub fn remove_game_directory(&mut self, path: &str) {
        self.game_directories.retain(|d| d != path);
        self.directory_changed = true;
        self.touch(FieldId::GameDirectories);
    }

    pub(crate) fn clear_directory_changed(&mut self) {
        self.directory_changed = false;
    }

    // ==================== Input ====================

    pub fn enable_docked_mode(&self) -> bool {
        self.enable_docked_mode
    }

    pub fn set_enable_docked_mode(&mut self, value: bool) {
        self.enable_docked_mode = value;
        self.touch(FieldId::EnableDockedMode);
    }

    pub fn enable_keyboard(&self) -> bool {
        self.enable_keyboard
    }

    pub fn set_enable_keyboard(&mut self, value: bool) {
        self.enable_keyboard = value;
        self.touch(FieldId::EnableKeyboard);
    }

    pub fn enable_mouse(&self) -> bool {
        self.enable_mouse
    }

    pub fn set_enable_mouse(&mut self, value: bool) {
        self.enable_mouse = value;
        self.touch(FieldId::EnableMouse);
    }

    pub fn keyboard_hotkey(&self) -> &HotkeyBundle {
        &self.keyboard_hotkey
    }

    pub fn set_keyboard_hotkey(&mut self, value: HotkeyBundle) {
        self.keyboard_hotkey = value;
        self.touch(FieldId::KeyboardHotkey);
    }

    // ==================== System ====================

    pub fn region_index(&self) -> usize {
        self.region_index
    }

    pub fn set_region_index(&mut self, value: usize) {
        self.region_index = value;
        self.touch(FieldId::RegionIndex);
    }

    pub fn language_index(&self) -> usize {
        self.language_index
    }

    pub fn set_language_index(&mut self, value: usize) {
        self.language_index = value;
        self.touch(FieldId::LanguageIndex);
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    /// Set the timezone if the location is known to the timezone table.
    /// Unknown locations are ignored; before the timezone pipeline has
    /// completed no location validates.
    pub fn set_time_zone(&mut self, location: impl Into<String>) {
        let location = location.into();
        if self.valid_tz_regions.contains(&location) {
            self.timezone_options.select_key(&location);
            self.time_zone = location;
            self.touch(FieldId::TimeZone);
        }
    }

    /// Timezone locations accepted by `set_time_zone`
    pub fn valid_tz_regions(&self) -> &[String] {
        &self.valid_tz_regions
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn set_current_date(&mut self, value: NaiveDate) {
        self.current_date = value;
        self.touch(FieldId::CurrentDate);
    }

    pub fn current_time(&self) -> NaiveTime {
        self.current_time
    }

    pub fn set_current_time(&mut self, value: NaiveTime) {
        self.current_time = value;
        self.touch(FieldId::CurrentTime);
    }

    pub fn enable_fs_integrity_checks(&self) -> bool {
        self.enable_fs_integrity_checks
    }

    pub fn set_enable_fs_integrity_checks(&mut self, value: bool) {
        self.enable_fs_integrity_checks = value;
        self.touch(FieldId::EnableFsIntegrityChecks);
    }

    pub fn expand_dram_size(&self) -> bool {
        self.expand_dram_size
    }

    pub fn set_expand_dram_size(&mut self, value: bool) {
        self.expand_dram_size = value;
        self.touch(FieldId::ExpandDramSize);
    }

    pub fn ignore_missing_services(&self) -> bool {
        self.ignore_missing_services
    }

    pub fn set_ignore_missing_services(&mut self, value: bool) {
        self.ignore_missing_services = value;
        self.touch(FieldId::IgnoreMissingServices);
    }

    // ==================== CPU ====================

    pub fn enable_pptc(&self) -> bool {
        self.enable_pptc
    }

    pub fn set_enable_pptc(&mut self, value: bool) {
        self.enable_pptc = value;
        self.touch(FieldId::EnablePptc);
    }

    pub fn memory_mode_index(&self) -> usize {
        self.memory_mode_index
    }

    pub fn set_memory_mode_index(&mut self, value: usize) {
        self.memory_mode_index = value;
        self.touch(FieldId::MemoryModeIndex);
    }

    pub fn use_hypervisor(&self) -> bool {
        self.use_hypervisor
    }

    pub fn set_use_hypervisor(&mut self, value: bool) {
        self.use_hypervisor = value;
        self.touch(FieldId::UseHypervisor);
    }

    // ==================== Graphics ====================

    pub fn graphics_backend_index(&self) -> usize {
        self.graphics_backend_index
    }

    pub fn set_graphics_backend_index(&mut self, value: usize) {
        self.graphics_backend_index = value;
        self.touch(FieldId::GraphicsBackendIndex);
        self.notify(FieldId::VulkanSelected);
    }

    pub fn vulkan_available(&self) -> bool {
        self.vulkan_available
    }

    pub fn gpu_options(&self) -> &OptionList {
        &self.gpu_options
    }

    pub fn preferred_gpu_index(&self) -> usize {
        self.gpu_options.selected()
    }

    pub fn set_preferred_gpu_index(&mut self, value: usize) {
        self.gpu_options.set_selected(value);
        self.touch(FieldId::PreferredGpuIndex);
    }

    pub fn enable_shader_cache(&self) -> bool {
        self.enable_shader_cache
    }

    pub fn set_enable_shader_cache(&mut self, value: bool) {
        self.enable_shader_cache = value;
        self.touch(FieldId::EnableShaderCache);
    }

    pub fn enable_texture_recompression(&self) -> bool {
        self.enable_texture_recompression
    }

    pub fn set_enable_texture_recompression(&mut self, value: bool) {
        self.enable_texture_recompression = value;
        self.touch(FieldId::EnableTextureRecompression);
    }

    pub fn enable_macro_hle(&self) -> bool {
        self.enable_macro_hle
    }

    pub fn set_enable_macro_hle(&mut self, value: bool) {
        self.enable_macro_hle = value;
        self.touch(FieldId::EnableMacroHle);
    }

    pub fn enable_color_space_passthrough(&self) -> bool {
        self.enable_color_space_passthrough
    }

    pub fn set_enable_color_space_passthrough(&mut self, value: bool) {
        self.enable_color_space_passthrough = value;
        self.touch(FieldId::EnableColorSpacePassthrough);
    }

    pub fn resolution_scale_index(&self) -> usize {
        self.resolution_scale_index
    }

    pub fn set_resolution_scale_index(&mut self, value: usize) {
        self.resolution_scale_index = value;
        self.touch(FieldId::ResolutionScaleIndex);
        self.notify(FieldId::CustomResolutionScale);
        self.notify(FieldId::CustomResolutionScaleActive);
    }

    pub fn custom_resolution_scale(&self) -> f32 {
        self.custom_resolution_scale
    }

    pub fn set_custom_resolution_scale(&mut self, value: f32) {
        self.custom_resolution_scale = codec::round_custom_scale(value);
        self.touch(FieldId::CustomResolutionScale);
    }

    pub fn max_anisotropy_index(&self) -> usize {
        self.max_anisotropy_index
    }

    pub fn set_max_anisotropy_index(&mut self, value: usize) {
        self.max_anisotropy_index = value;
        self.touch(FieldId::MaxAnisotropyIndex);
    }

    pub fn aspect_ratio_index(&self) -> usize {
        self.aspect_ratio_index
    }

    pub fn set_aspect_ratio_index(&mut self, value: usize) {
        self.aspect_ratio_index = value;
        self.touch(FieldId::AspectRatioIndex);
    }

    pub fn backend_threading_index(&self) -> usize {
        self.backend_threading_index
    }

    /// Raw field write. `SettingsSession::set_backend_threading_index`
    /// additionally warns when the mode disagrees with the persisted one.
    pub fn set_backend_threading_index(&mut self, value: usize) {
        self.backend_threading_index = value;
        self.touch(FieldId::BackendThreadingIndex);
    }

    pub fn shader_dump_path(&self) -> &str {
        &self.shader_dump_path
    }

    pub fn set_shader_dump_path(&mut self, value: impl Into<String>) {
        self.shader_dump_path = value.into();
        self.touch(FieldId::ShaderDumpPath);
    }

    pub fn anti_aliasing_index(&self) -> usize {
        self.anti_aliasing_index
    }

    pub fn set_anti_aliasing_index(&mut self, value: usize) {
        self.anti_aliasing_index = value;
        self.touch(FieldId::AntiAliasingIndex);
    }

    pub fn scaling_filter_index(&self) -> usize {
        self.scaling_filter_index
    }

    pub fn set_scaling_filter_index(&mut self, value: usize) {
        self.scaling_filter_index = value;
        self.touch(FieldId::ScalingFilterIndex);
        self.notify(FieldId::ScalingFilterActive);
    }

    pub fn scaling_filter_level(&self) -> i32 {
        self.scaling_filter_level
    }

    pub fn set_scaling_filter_level(&mut self, value: i32) {
        self.scaling_filter_level = value;
        self.touch(FieldId::ScalingFilterLevel);
        self.notify(FieldId::ScalingFilterLevelText);
    }

    pub fn graphics_debug_level_index(&self) -> usize {
        self.graphics_debug_level_index
    }

    pub fn set_graphics_debug_level_index(&mut self, value: usize) {
        self.graphics_debug_level_index = value;
        self.touch(FieldId::GraphicsDebugLevelIndex);
    }

    pub fn enable_vsync(&self) -> bool {
        self.enable_vsync
    }

    pub fn set_enable_vsync(&mut self, value: bool) {
        self.enable_vsync = value;
        self.touch(FieldId::EnableVsync);
    }

    // ==================== Audio ====================

    pub fn audio_backend_index(&self) -> usize {
        self.audio_backend_index
    }

    pub fn set_audio_backend_index(&mut self, value: usize) {
        self.audio_backend_index = value;
        self.touch(FieldId::AudioBackendIndex);
    }

    /// Volume as a percentage, 0.0..=100.0
    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, value: f32) {
        self.volume = value;
        self.touch(FieldId::Volume);
    }

    pub fn openal_available(&self) -> bool {
        self.openal_available
    }

    pub fn soundio_available(&self) -> bool {
        self.soundio_available
    }

    pub fn sdl2_available(&self) -> bool {
        self.sdl2_available
    }

    // ==================== Network ====================

    pub fn enable_internet_access(&self) -> bool {
        self.enable_internet_access
    }

    pub fn set_enable_internet_access(&mut self, value: bool) {
        self.enable_internet_access = value;
        self.touch(FieldId::EnableInternetAccess);
    }

    pub fn network_interface_options(&self) -> &OptionList {
        &self.network_interface_options
    }

    pub fn network_interface_index(&self) -> usize {
        self.network_interface_options.selected()
    }

    pub fn set_network_interface_index(&mut self, value: usize) {
        self.network_interface_options.set_selected(value);
        self.touch(FieldId::NetworkInterfaceIndex);
    }

    pub fn multiplayer_mode_index(&self) -> usize {
        self.multiplayer_mode_index
    }

    pub fn set_multiplayer_mode_index(&mut self, value: usize) {
        self.multiplayer_mode_index = value;
        self.touch(FieldId::MultiplayerModeIndex);
    }

    // ==================== Logging ====================

    pub fn enable_file_log(&self) -> bool {
        self.enable_file_log
    }

    pub fn set_enable_file_log(&mut self, value: bool) {
        self.enable_file_log = value;
        self.touch(FieldId::EnableFileLog);
    }

    pub fn enable_stub_log(&self) -> bool {
        self.enable_stub_log
    }

    pub fn set_enable_stub_log(&mut self, value: bool) {
        self.enable_stub_log = value;
        self.touch(FieldId::EnableStubLog);
    }

    pub fn enable_info_log(&self) -> bool {
        self.enable_info_log
    }

    pub fn set_enable_info_log(&mut self, value: bool) {
        self.enable_info_log = value;
        self.touch(FieldId::EnableInfoLog);
    }

    pub fn enable_warn_log(&self) -> bool {
        self.enable_warn_log
    }

    pub fn set_enable_warn_log(&mut self, value: bool) {
        self.enable_warn_log = value;
        self.touch(FieldId::EnableWarnLog);
    }

    pub fn enable_error_log(&self) -> bool {
        self.enable_error_log
    }

    pub fn set_enable_error_log(&mut self, value: bool) {
        self.enable_error_log = value;
        self.touch(FieldId::EnableErrorLog);
    }

    pub fn enable_trace_log(&self) -> bool {
        self.enable_trace_log
    }

    pub fn set_enable_trace_log(&mut self, value: bool) {
        self.enable_trace_log = value;
        self.touch(FieldId::EnableTraceLog);
    }

    pub fn enable_guest_log(&self) -> bool {
        self.enable_guest_log
    }

    pub fn set_enable_guest_log(&mut self, value: bool) {
        self.enable_guest_log = value;
        self.touch(FieldId::EnableGuestLog);
    }

    pub fn enable_debug_log(&self) -> bool {
        self.enable_debug_log
    }

    pub fn set_enable_debug_log(&mut self, value: bool) {
        self.enable_debug_log = value;
        self.touch(FieldId::EnableDebugLog);
    }

    pub fn enable_fs_access_log(&self) -> bool {
        self.enable_fs_access_log
    }

    pub fn set_enable_fs_access_log(&mut self, value: bool) {
        self.enable_fs_access_log = value;
        self.touch(FieldId::EnableFsAccessLog);
    }

    pub fn fs_global_access_log_mode(&self) -> i32 {
        self.fs_global_access_log_mode
    }

    pub fn set_fs_global_access_log_mode(&mut self, value: i32) {
        self.fs_global_access_log_mode = value;
        self.touch(FieldId::FsGlobalAccessLogMode);
    }

    // ==================== Timezones ====================

    pub fn timezone_options(&self) -> &OptionList {
        &self.timezone_options
    }

    // ==================== Enrichment appliers ====================
    //
    // Called by the session while draining the enrichment channel; these
    // never run concurrently with user edits. Selection resolution is
    // skipped when the user already touched the field.

    pub(crate) fn apply_gpu_adapters(&mut self, adapters: Vec<GpuAdapter>, persisted_gpu: &str) {
        // A selection the user already made wins over the persisted value
        // and must be re-resolved after the list is rebuilt.
        let user_key = self
            .is_touched(FieldId::PreferredGpuIndex)
            .then(|| self.gpu_options.selected_key().map(str::to_string))
            .flatten();
        self.gpu_options.clear();

        if adapters.is_empty() {
            self.vulkan_available = false;
            if !self.is_touched(FieldId::GraphicsBackendIndex) {
                self.graphics_backend_index = FALLBACK_GRAPHICS_BACKEND_INDEX;
                self.notify(FieldId::GraphicsBackendIndex);
                self.notify(FieldId::VulkanSelected);
            }
            self.notify(FieldId::VulkanAvailable);
        } else {
            for adapter in adapters {
                let label = if adapter.is_discrete {
                    format!("{} (dGPU)", adapter.name)
                } else {
                    adapter.name
                };
                self.gpu_options.push(label, adapter.id);
            }
            self.gpu_options
                .select_key(user_key.as_deref().unwrap_or(persisted_gpu));
        }

        self.notify(FieldId::GpuOptions);
        self.notify(FieldId::PreferredGpuIndex);
    }

    pub(crate) fn apply_network_interfaces(
        &mut self,
        interfaces: Vec<NetworkInterfaceInfo>,
        persisted_interface: &str,
    ) {
        let user_key = self
            .is_touched(FieldId::NetworkInterfaceIndex)
            .then(|| {
                self.network_interface_options
                    .selected_key()
                    .map(str::to_string)
            })
            .flatten();
        self.network_interface_options.clear();
        self.network_interface_options
            .push(NETWORK_DEFAULT_LABEL, NETWORK_DEFAULT_KEY);
        for interface in interfaces {
            self.network_interface_options
                .push(interface.name, interface.id);
        }

        self.network_interface_options
            .select_key(user_key.as_deref().unwrap_or(persisted_interface));

        self.notify(FieldId::NetworkInterfaceOptions);
        self.notify(FieldId::NetworkInterfaceIndex);
    }

    pub(crate) fn apply_timezones(&mut self, entries: Vec<TimezoneEntry>, persisted_zone: &str) {
        self.timezone_options.clear();
        self.valid_tz_regions.clear();
        for entry in entries {
            let offset = codec::format_utc_offset(entry.utc_offset_seconds);
            let abbr = codec::display_abbreviation(&entry.abbreviation);
            let label = format!("{offset} {} {abbr}", entry.location);
            self.timezone_options
                .push(label.trim_end().to_string(), entry.location.clone());
            self.valid_tz_regions.push(entry.location);
        }

        if self.is_touched(FieldId::TimeZone) {
            let current = self.time_zone.clone();
            self.timezone_options.select_key(&current);
        } else {
            self.timezone_options.select_key(persisted_zone);
        }

        self.notify(FieldId::TimezoneOptions);
        self.notify(FieldId::TimeZone);
    }

    pub(crate) fn apply_audio_support(&mut self, support: AudioBackendSupport) {
        self.openal_available = support.openal;
        self.soundio_available = support.soundio;
        self.sdl2_available = support.sdl2;
        self.notify(FieldId::OpenAlAvailable);
        self.notify(FieldId::SoundIoAvailable);
        self.notify(FieldId::Sdl2Available);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::Mutex;

    fn state() -> SettingsViewState {
        SettingsViewState::new(&SettingsConfig::default())
    }

    fn adapters() -> Vec<GpuAdapter> {
        vec![
            GpuAdapter {
                id: "gpu-0".into(),
                name: "Integrated".into(),
                is_discrete: false,
            },
            GpuAdapter {
                id: "gpu-1".into(),
                name: "Discrete".into(),
                is_discrete: true,
            },
        ]
    }

    #[test]
    fn derived_fields_follow_primaries() {
        let mut state = state();
        assert!(!state.custom_resolution_scale_active());

        state.set_resolution_scale_index(4);
        assert!(state.custom_resolution_scale_active());

        state.set_graphics_backend_index(1);
        assert!(!state.vulkan_selected());

        state.set_scaling_filter_index(ScalingFilter::Fsr as usize);
        assert!(state.scaling_filter_active());
        state.set_scaling_filter_level(42);
        assert_eq!(state.scaling_filter_level_text(), "42");
    }

    #[test]
    fn primary_setter_notifies_derived_observers() {
        let mut state = state();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        state.subscribe(move |field| sink.lock().expect("lock").push(field));

        state.set_resolution_scale_index(4);

        let seen = seen.lock().expect("lock");
        assert!(seen.contains(&FieldId::ResolutionScaleIndex));
        assert!(seen.contains(&FieldId::CustomResolutionScale));
        assert!(seen.contains(&FieldId::CustomResolutionScaleActive));
    }

    #[test]
    fn custom_scale_rounds_on_write() {
        let mut state = state();
        state.set_custom_resolution_scale(1.2499);
        assert_eq!(state.custom_resolution_scale(), 1.2);
    }

    #[test]
    fn directory_mutations_always_mark_dirty() {
        let mut state = state();
        assert!(!state.directory_changed());

        state.add_game_directory("/games/a");
        assert!(state.directory_changed());
        assert_eq!(state.game_directories(), ["/games/a"]);

        // Removing a path that is not in the list still marks dirty.
        let mut state = SettingsViewState::new(&SettingsConfig::default());
        state.remove_game_directory("/nope");
        assert!(state.directory_changed());
    }

    #[test]
    fn load_clears_touched_and_dirty() {
        let mut state = state();
        state.set_enable_vsync(false);
        state.add_game_directory("/games/a");
        assert!(state.is_touched(FieldId::EnableVsync));

        state.load_from(&SettingsConfig::default());
        assert!(!state.is_touched(FieldId::EnableVsync));
        assert!(!state.directory_changed());
        assert!(state.enable_vsync());
    }

    #[test]
    fn gpu_enrichment_resolves_persisted_selection() {
        let mut state = state();
        state.apply_gpu_adapters(adapters(), "gpu-1");

        assert!(state.vulkan_available());
        assert_eq!(state.gpu_options().len(), 2);
        assert_eq!(state.gpu_options().entries()[1].label, "Discrete (dGPU)");
        assert_eq!(state.preferred_gpu_index(), 1);
    }

    #[test]
    fn gpu_enrichment_empty_degrades_to_fallback_backend() {
        let mut state = state();
        state.apply_gpu_adapters(Vec::new(), "gpu-1");

        assert!(!state.vulkan_available());
        assert_eq!(
            state.graphics_backend_index(),
            FALLBACK_GRAPHICS_BACKEND_INDEX
        );
        assert!(!state.vulkan_selected());
    }

    #[test]
    fn touched_selection_survives_late_enrichment() {
        let mut state = state();
        state.apply_gpu_adapters(adapters(), "");
        state.set_preferred_gpu_index(1);

        // A second (late) resolution against the persisted value must not
        // override the user's pick.
        state.apply_gpu_adapters(adapters(), "gpu-0");
        assert_eq!(state.preferred_gpu_index(), 1);
    }

    #[test]
    fn touched_network_selection_survives_reenrichment() {
        let mut state = state();
        let interfaces = vec![
            NetworkInterfaceInfo {
                name: "eth0".into(),
                id: "if-1".into(),
            },
            NetworkInterfaceInfo {
                name: "wlan0".into(),
                id: "if-2".into(),
            },
        ];
        state.apply_network_interfaces(interfaces.clone(), "if-1");
        state.set_network_interface_index(2);

        // Repopulation resolves the user's key again, not the persisted one.
        state.apply_network_interfaces(interfaces, "if-1");
        assert_eq!(state.network_interface_index(), 2);
        assert_eq!(
            state.network_interface_options().selected_key(),
            Some("if-2")
        );
    }

    #[test]
    fn repeated_timezone_enrichment_does_not_duplicate() {
        let mut state = state();
        let entries = vec![TimezoneEntry {
            utc_offset_seconds: 0,
            location: "UTC".into(),
            abbreviation: "UTC".into(),
        }];
        state.apply_timezones(entries.clone(), "UTC");
        state.apply_timezones(entries, "UTC");

        assert_eq!(state.timezone_options().len(), 1);
        assert_eq!(state.valid_tz_regions().len(), 1);
    }

    #[test]
    fn network_enrichment_keeps_sentinel_at_zero() {
        let mut state = state();
        state.apply_network_interfaces(
            vec![NetworkInterfaceInfo {
                name: "eth0".into(),
                id: "if-1".into(),
            }],
            "if-1",
        );

        let options = state.network_interface_options();
        assert_eq!(options.entries()[0].key, NETWORK_DEFAULT_KEY);
        assert_eq!(state.network_interface_index(), 1);
    }

    #[test]
    fn network_enrichment_unknown_interface_falls_back_to_default() {
        let mut state = state();
        state.apply_network_interfaces(Vec::new(), "if-gone");
        assert_eq!(state.network_interface_index(), 0);
    }

    #[test]
    fn timezone_edits_validate_against_enriched_regions() {
        let mut state = state();
        // Before enrichment nothing validates.
        state.set_time_zone("Europe/Berlin");
        assert_eq!(state.time_zone(), "UTC");

        state.apply_timezones(
            vec![
                TimezoneEntry {
                    utc_offset_seconds: 0,
                    location: "UTC".into(),
                    abbreviation: "UTC".into(),
                },
                TimezoneEntry {
                    utc_offset_seconds: 3600,
                    location: "Europe/Berlin".into(),
                    abbreviation: "CET".into(),
                },
            ],
            "UTC",
        );

        state.set_time_zone("Europe/Berlin");
        assert_eq!(state.time_zone(), "Europe/Berlin");
        assert_eq!(state.timezone_options().selected(), 1);

        state.set_time_zone("Mars/Olympus");
        assert_eq!(state.time_zone(), "Europe/Berlin");
    }

    #[test]
    fn audio_support_sets_availability_flags() {
        let mut state = state();
        state.apply_audio_support(AudioBackendSupport {
            openal: true,
            soundio: false,
            sdl2: true,
        });
        assert!(state.openal_available());
        assert!(!state.soundio_available());
        assert!(state.sdl2_available());
    }
}
