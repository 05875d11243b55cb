//! Enrichment Events
//!
//! Events emitted by enrichment pipelines to be consumed by the session.
//! Each event is tagged with the id of the session that spawned the
//! pipeline so a late delivery against a newer session is dropped.

use uuid::Uuid;

/// Identity of one view-state session. Enrichment events carry the id of
/// the session they were produced for; a mismatch makes the event a no-op.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a fresh session id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A physical graphics adapter reported by the hardware enumerator
#[derive(Clone, Debug)]
pub struct GpuAdapter {
    /// Stable device id, persisted as the preferred-GPU key
    pub id: String,
    /// Human-readable adapter name
    pub name: String,
    /// Whether this is a discrete GPU
    pub is_discrete: bool,
}

/// An OS network interface
#[derive(Clone, Debug)]
pub struct NetworkInterfaceInfo {
    /// Interface display name
    pub name: String,
    /// Stable interface id, persisted as the LAN-interface key
    pub id: String,
}

/// One entry of the bundled timezone table
#[derive(Clone, Debug)]
pub struct TimezoneEntry {
    /// Offset from UTC in seconds
    pub utc_offset_seconds: i32,
    /// Location key (e.g. "Europe/Berlin"), persisted as the timezone value
    pub location: String,
    /// Zone abbreviation (may be a bare offset like "+07")
    pub abbreviation: String,
}

/// Availability of the probeable audio backends
#[derive(Clone, Copy, Debug, Default)]
pub struct AudioBackendSupport {
    pub openal: bool,
    pub soundio: bool,
    pub sdl2: bool,
}

/// Events emitted by the enrichment pipelines
///
/// Persisted values captured at pipeline start ride along with the
/// discovery result, so selection resolution never reads the store from a
/// background task.
#[derive(Clone, Debug)]
pub enum EnrichmentEvent {
    /// Graphics adapter enumeration finished
    GpuAdapters {
        session: SessionId,
        adapters: Vec<GpuAdapter>,
        /// Preferred GPU id persisted when the pipeline started
        persisted_gpu: String,
    },

    /// Network interface enumeration finished
    NetworkInterfaces {
        session: SessionId,
        interfaces: Vec<NetworkInterfaceInfo>,
        /// LAN interface id persisted when the pipeline started
        persisted_interface: String,
    },

    /// Timezone table fully consumed
    Timezones {
        session: SessionId,
        entries: Vec<TimezoneEntry>,
        /// Timezone location persisted when the pipeline started
        persisted_zone: String,
    },

    /// Audio backend probing finished
    AudioBackends {
        session: SessionId,
        support: AudioBackendSupport,
    },
}

impl EnrichmentEvent {
    /// Session the event was produced for
    pub fn session(&self) -> SessionId {
        match self {
            EnrichmentEvent::GpuAdapters { session, .. }
            | EnrichmentEvent::NetworkInterfaces { session, .. }
            | EnrichmentEvent::Timezones { session, .. }
            | EnrichmentEvent::AudioBackends { session, .. } => *session,
        }
    }
}
