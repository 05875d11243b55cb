//! Settings Session - Transaction Controller
//!
//! Owns one view-state aggregate and the injected store handle, and
//! drives the load / apply / ok / cancel / restore-defaults protocol.
//! Edits are provisional: nothing reaches the store until `apply`, and
//! `cancel` reloads the store so concurrent readers see no residue of a
//! discarded edit.
//!
//! Enrichment results arrive over a channel and are applied only by
//! `pump_events` on the control context, so aggregate writes are always
//! serialized. Events produced for an older session id are dropped.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};

use crate::codec;
use crate::constants::NETWORK_DEFAULT_KEY;
use crate::domain::enums::{
    AntiAliasing, AspectRatio, AudioBackend, BackendThreading, GraphicsBackend,
    GraphicsDebugLevel, HideCursorMode, MemoryManagerMode, MultiplayerMode, Region, ScalingFilter,
    SystemLanguage,
};
use crate::error::Result;
use crate::services::capabilities::{GraphicsDriver, NotificationSink};
use crate::services::events::{EnrichmentEvent, SessionId};
use crate::services::pipelines::{self, EnrichmentSources, PersistedSelections};
use crate::state::view_state::SettingsViewState;
use crate::store::ConfigStore;

/// Transaction phase of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No unapplied edits
    Clean,
    /// At least one field was handed out for mutation
    Editing,
    /// An apply is writing through to the store
    Applying,
}

/// Lifecycle events emitted by the session for its host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The aggregate was (re)loaded from the store
    Loaded,
    /// An apply completed and the store was persisted
    Saved,
    /// ok/cancel finished; the host should close the editing surface
    CloseRequested,
}

/// One editing session over the persisted settings
pub struct SettingsSession {
    id: SessionId,
    phase: SessionPhase,
    view: SettingsViewState,
    store: Box<dyn ConfigStore>,
    sink: Arc<dyn NotificationSink>,
    driver: Arc<dyn GraphicsDriver>,
    enrichment_tx: Sender<EnrichmentEvent>,
    enrichment_rx: Receiver<EnrichmentEvent>,
    session_tx: Sender<SessionEvent>,
    session_rx: Receiver<SessionEvent>,
}

impl SettingsSession {
    /// Create a session over the given store. The aggregate is loaded
    /// immediately; enrichment starts separately via `start_enrichment`.
    pub fn new(
        store: Box<dyn ConfigStore>,
        sink: Arc<dyn NotificationSink>,
        driver: Arc<dyn GraphicsDriver>,
    ) -> Self {
        let (enrichment_tx, enrichment_rx) = crossbeam_channel::unbounded();
        let (session_tx, session_rx) = crossbeam_channel::unbounded();
        let view = SettingsViewState::new(store.config());

        Self {
            id: SessionId::new(),
            phase: SessionPhase::Clean,
            view,
            store,
            sink,
            driver,
            enrichment_tx,
            enrichment_rx,
            session_tx,
            session_rx,
        }
    }

    /// Identity of this session; enrichment events for any other id are
    /// dropped by `pump_events`.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Current transaction phase
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Read access to the aggregate
    pub fn view(&self) -> &SettingsViewState {
        &self.view
    }

    /// Mutable access to the aggregate for user edits. Transitions the
    /// session into the editing phase.
    pub fn view_mut(&mut self) -> &mut SettingsViewState {
        if self.phase == SessionPhase::Clean {
            self.phase = SessionPhase::Editing;
        }
        &mut self.view
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &dyn ConfigStore {
        self.store.as_ref()
    }

    /// Lifecycle event receiver for the host
    pub fn events(&self) -> Receiver<SessionEvent> {
        self.session_rx.clone()
    }

    /// Sender half of the enrichment channel, for externally spawned
    /// pipelines.
    pub fn enrichment_sender(&self) -> Sender<EnrichmentEvent> {
        self.enrichment_tx.clone()
    }

    /// Spawn the enrichment pipelines for this session. Persisted
    /// selections are captured now; the pipelines resolve against them
    /// when their enumeration completes.
    pub fn start_enrichment(&self, sources: &EnrichmentSources) {
        let config = self.store.config();
        let persisted = PersistedSelections {
            preferred_gpu: config.graphics.preferred_gpu.clone(),
            lan_interface_id: config.network.lan_interface_id.clone(),
            time_zone: config.system.time_zone.clone(),
        };
        pipelines::spawn_all(sources, self.id, persisted, self.enrichment_tx.clone());
    }

    /// Drain the enrichment channel, applying every event that belongs to
    /// this session. Returns the number of events applied.
    pub fn pump_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.enrichment_rx.try_recv() {
            if event.session() != self.id {
                tracing::debug!(
                    "Dropping enrichment event for superseded session {}",
                    event.session()
                );
                continue;
            }
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    fn apply_event(&mut self, event: EnrichmentEvent) {
        match event {
            EnrichmentEvent::GpuAdapters {
                adapters,
                persisted_gpu,
                ..
            } => self.view.apply_gpu_adapters(adapters, &persisted_gpu),
            EnrichmentEvent::NetworkInterfaces {
                interfaces,
                persisted_interface,
                ..
            } => self
                .view
                .apply_network_interfaces(interfaces, &persisted_interface),
            EnrichmentEvent::Timezones {
                entries,
                persisted_zone,
                ..
            } => self.view.apply_timezones(entries, &persisted_zone),
            EnrichmentEvent::AudioBackends { support, .. } => {
                self.view.apply_audio_support(support)
            }
        }
    }

    /// Set the backend threading mode, warning the user when the chosen
    /// mode disagrees with the persisted one (the active driver state
    /// only changes on apply).
    ///
    /// This is the entry point for threading edits; writing through
    /// `view_mut()` skips the persisted-value comparison and emits no
    /// warning.
    pub fn set_backend_threading_index(&mut self, index: usize) {
        let persisted = self.store.config().graphics.backend_threading as usize;
        if index != persisted {
            self.sink
                .info("Changing the backend threading mode takes effect after applying settings");
        }
        self.view_mut().set_backend_threading_index(index);
    }

    /// Reset the aggregate from the store
    pub fn load(&mut self) {
        self.view.load_from(self.store.config());
        self.phase = SessionPhase::Clean;
        let _ = self.session_tx.send(SessionEvent::Loaded);
    }

    /// Write every field through the codecs into the store and persist.
    pub fn apply(&mut self) -> Result<()> {
        self.phase = SessionPhase::Applying;

        let previous_audio = self.store.config().audio.backend;
        let previous_threading = self.store.config().graphics.backend_threading;

        let view = &self.view;
        let new_audio = AudioBackend::from_repr(view.audio_backend_index()).unwrap_or_default();
        let new_threading =
            BackendThreading::from_repr(view.backend_threading_index()).unwrap_or_default();

        let config = self.store.config_mut();

        // User Interface
        config.ui.enable_discord_integration = view.enable_discord_integration();
        config.ui.check_updates_on_start = view.check_updates_on_start();
        config.ui.show_confirm_exit = view.show_confirm_exit();
        config.ui.remember_window_state = view.remember_window_state();
        config.ui.hide_cursor =
            HideCursorMode::from_repr(view.hide_cursor_index()).unwrap_or_default();
        config.ui.base_style = codec::base_style_to_domain(view.base_style_index()).to_string();
        if view.directory_changed() {
            config.ui.game_dirs = view.game_directories().to_vec();
        }

        // Input
        config.input.enable_docked_mode = view.enable_docked_mode();
        config.input.enable_keyboard = view.enable_keyboard();
        config.input.enable_mouse = view.enable_mouse();
        config.input.hotkeys = view.keyboard_hotkey().clone();

        // System
        config.system.region = Region::from_repr(view.region_index()).unwrap_or_default();
        config.system.language =
            SystemLanguage::from_repr(view.language_index()).unwrap_or_default();
        if view.valid_tz_regions().iter().any(|r| r == view.time_zone()) {
            config.system.time_zone = view.time_zone().to_string();
        }
        config.system.system_time_offset =
            compute_time_offset(view.current_date(), view.current_time());
        config.system.enable_fs_integrity_checks = view.enable_fs_integrity_checks();
        config.system.expand_ram = view.expand_dram_size();
        config.system.ignore_missing_services = view.ignore_missing_services();

        // CPU
        config.cpu.enable_ptc = view.enable_pptc();
        config.cpu.memory_manager_mode =
            MemoryManagerMode::from_repr(view.memory_mode_index()).unwrap_or_default();
        config.cpu.use_hypervisor = view.use_hypervisor();

        // Graphics
        config.graphics.backend =
            GraphicsBackend::from_repr(view.graphics_backend_index()).unwrap_or_default();
        config.graphics.preferred_gpu = view
            .gpu_options()
            .selected_key()
            .unwrap_or_default()
            .to_string();
        config.graphics.enable_shader_cache = view.enable_shader_cache();
        config.graphics.enable_texture_recompression = view.enable_texture_recompression();
        config.graphics.enable_macro_hle = view.enable_macro_hle();
        config.graphics.enable_color_space_passthrough = view.enable_color_space_passthrough();
        config.graphics.res_scale =
            codec::resolution_scale_to_domain(view.resolution_scale_index());
        config.graphics.res_scale_custom = view.custom_resolution_scale();
        config.graphics.max_anisotropy = codec::anisotropy_to_domain(view.max_anisotropy_index());
        config.graphics.aspect_ratio =
            AspectRatio::from_repr(view.aspect_ratio_index()).unwrap_or_default();
        config.graphics.backend_threading = new_threading;
        config.graphics.shaders_dump_path = view.shader_dump_path().to_string();
        config.graphics.anti_aliasing =
            AntiAliasing::from_repr(view.anti_aliasing_index()).unwrap_or_default();
        config.graphics.scaling_filter =
            ScalingFilter::from_repr(view.scaling_filter_index()).unwrap_or_default();
        config.graphics.scaling_filter_level = view.scaling_filter_level();
        config.graphics.debug_level =
            GraphicsDebugLevel::from_repr(view.graphics_debug_level_index()).unwrap_or_default();
        config.graphics.enable_vsync = view.enable_vsync();

        // Audio
        config.audio.backend = new_audio;
        config.audio.volume = codec::volume_to_domain(view.volume());

        // Network
        config.network.enable_internet_access = view.enable_internet_access();
        config.network.lan_interface_id = view
            .network_interface_options()
            .selected_key()
            .unwrap_or(NETWORK_DEFAULT_KEY)
            .to_string();
        config.network.multiplayer_mode =
            MultiplayerMode::from_repr(view.multiplayer_mode_index()).unwrap_or_default();

        // Logging
        config.logger.enable_file_log = view.enable_file_log();
        config.logger.enable_stub = view.enable_stub_log();
        config.logger.enable_info = view.enable_info_log();
        config.logger.enable_warn = view.enable_warn_log();
        config.logger.enable_error = view.enable_error_log();
        config.logger.enable_trace = view.enable_trace_log();
        config.logger.enable_guest = view.enable_guest_log();
        config.logger.enable_debug = view.enable_debug_log();
        config.logger.enable_fs_access_log = view.enable_fs_access_log();
        config.logger.fs_global_access_log_mode = view.fs_global_access_log_mode();

        // Side effects, exactly once per apply that changes the value.
        if new_threading != previous_threading {
            self.driver
                .set_threading(new_threading == BackendThreading::Off);
        }
        if new_audio != previous_audio {
            tracing::info!("Audio backend changed to {new_audio}");
            self.sink
                .info(&format!("Audio backend changed to {new_audio}"));
        }

        // A failed persist leaves the edits in place and the session
        // editable, so the host can surface the error and retry.
        if let Err(error) = self.store.persist() {
            self.phase = SessionPhase::Editing;
            return Err(error);
        }
        self.view.clear_directory_changed();
        self.phase = SessionPhase::Clean;
        let _ = self.session_tx.send(SessionEvent::Saved);
        Ok(())
    }

    /// Apply and request the host to close the editing surface
    pub fn ok(&mut self) -> Result<()> {
        self.apply()?;
        let _ = self.session_tx.send(SessionEvent::CloseRequested);
        Ok(())
    }

    /// Discard edits: reload the store from its last persisted values and
    /// request close. The aggregate is not rewritten; a host reopening the
    /// settings creates a fresh session.
    pub fn cancel(&mut self) -> Result<()> {
        self.store.reload()?;
        self.phase = SessionPhase::Clean;
        let _ = self.session_tx.send(SessionEvent::CloseRequested);
        Ok(())
    }

    /// Reset the store to built-in defaults and reload the aggregate.
    /// Option lists populated by enrichment are left untouched.
    pub fn restore_defaults(&mut self) {
        self.store.reset_to_defaults();
        self.load();
    }
}

/// Offset between the edited date/time and the host clock, in seconds.
fn compute_time_offset(date: chrono::NaiveDate, time: chrono::NaiveTime) -> i64 {
    let now = chrono::Local::now();
    let target = match date.and_time(time).and_local_timezone(chrono::Local) {
        chrono::LocalResult::Single(t) => t,
        chrono::LocalResult::Ambiguous(t, _) => t,
        chrono::LocalResult::None => now,
    };
    target.timestamp() - now.timestamp()
}
