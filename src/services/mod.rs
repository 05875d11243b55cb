//! Services - Enrichment Pipelines and Capability Surfaces
//!
//! Background discovery of runtime option sets (graphics adapters,
//! network interfaces, timezones, audio backends) plus the narrow traits
//! the engine consumes from the hosting application.

pub mod capabilities;
pub mod events;
pub mod pipelines;
pub mod runtime;

pub use capabilities::{
    AudioBackendProber, BundledTimezoneSource, GraphicsDriver, HardwareEnumerator,
    NetworkEnumerator, NotificationSink, NullGraphicsDriver, TimezoneSource,
    TracingNotificationSink,
};
pub use events::{
    AudioBackendSupport, EnrichmentEvent, GpuAdapter, NetworkInterfaceInfo, SessionId,
    TimezoneEntry,
};
pub use pipelines::{EnrichmentSources, PersistedSelections};
