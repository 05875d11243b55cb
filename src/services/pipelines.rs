//! Enrichment Pipelines
//!
//! Single-shot background tasks that discover runtime option sets and
//! report them to the session over the enrichment channel. Each pipeline
//! captures the persisted selection it needs before it starts, performs
//! the (possibly slow) enumeration off the control context, and sends one
//! batch event; the session applies results serially in `pump_events`.
//!
//! Pipelines are independent of each other and make no ordering promises
//! between themselves. A pipeline outliving its session is harmless: the
//! session id carried by the event no longer matches and the event is
//! dropped.

use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::services::capabilities::{
    AudioBackendProber, HardwareEnumerator, NetworkEnumerator, TimezoneSource,
};
use crate::services::events::{EnrichmentEvent, SessionId};

/// Capability handles the pipelines enumerate through
#[derive(Clone)]
pub struct EnrichmentSources {
    pub hardware: Arc<dyn HardwareEnumerator>,
    pub network: Arc<dyn NetworkEnumerator>,
    pub timezones: Arc<dyn TimezoneSource>,
    pub audio: Arc<dyn AudioBackendProber>,
}

/// Persisted selections captured at pipeline start. Resolution against the
/// completed option lists uses these values, not a later store read.
#[derive(Clone, Debug, Default)]
pub struct PersistedSelections {
    pub preferred_gpu: String,
    pub lan_interface_id: String,
    pub time_zone: String,
}

/// Enumerate graphics adapters and build the result event.
pub fn discover_gpus(
    enumerator: &dyn HardwareEnumerator,
    session: SessionId,
    persisted_gpu: String,
) -> EnrichmentEvent {
    let adapters = enumerator.list_adapters();
    if adapters.is_empty() {
        tracing::warn!("No graphics adapters found, Vulkan backend unavailable");
    } else {
        tracing::debug!("Discovered {} graphics adapter(s)", adapters.len());
    }
    EnrichmentEvent::GpuAdapters {
        session,
        adapters,
        persisted_gpu,
    }
}

/// Enumerate OS network interfaces and build the result event.
pub fn discover_network_interfaces(
    enumerator: &dyn NetworkEnumerator,
    session: SessionId,
    persisted_interface: String,
) -> EnrichmentEvent {
    let interfaces = enumerator.list_interfaces();
    tracing::debug!("Discovered {} network interface(s)", interfaces.len());
    EnrichmentEvent::NetworkInterfaces {
        session,
        interfaces,
        persisted_interface,
    }
}

/// Drain the timezone table and build the result event.
pub fn collect_timezones(
    source: &dyn TimezoneSource,
    session: SessionId,
    persisted_zone: String,
) -> EnrichmentEvent {
    let entries: Vec<_> = source.list_entries().collect();
    tracing::debug!("Collected {} timezone entries", entries.len());
    EnrichmentEvent::Timezones {
        session,
        entries,
        persisted_zone,
    }
}

/// Probe audio backend availability and build the result event.
pub fn probe_audio_backends(prober: &dyn AudioBackendProber, session: SessionId) -> EnrichmentEvent {
    let support = prober.probe();
    EnrichmentEvent::AudioBackends { session, support }
}

/// Spawn all four pipelines onto the shared runtime.
///
/// Sends are best-effort: if the session (and its receiver) is gone by
/// the time a pipeline finishes, the result is simply dropped.
pub fn spawn_all(
    sources: &EnrichmentSources,
    session: SessionId,
    persisted: PersistedSelections,
    tx: Sender<EnrichmentEvent>,
) {
    let hardware = sources.hardware.clone();
    let gpu_tx = tx.clone();
    let persisted_gpu = persisted.preferred_gpu;
    crate::services::runtime::spawn_pipeline("gpu-adapters", async move {
        let _ = gpu_tx.send(discover_gpus(hardware.as_ref(), session, persisted_gpu));
    });

    let network = sources.network.clone();
    let net_tx = tx.clone();
    let persisted_interface = persisted.lan_interface_id;
    crate::services::runtime::spawn_pipeline("network-interfaces", async move {
        let _ = net_tx.send(discover_network_interfaces(
            network.as_ref(),
            session,
            persisted_interface,
        ));
    });

    let timezones = sources.timezones.clone();
    let tz_tx = tx.clone();
    let persisted_zone = persisted.time_zone;
    crate::services::runtime::spawn_pipeline("timezones", async move {
        let _ = tz_tx.send(collect_timezones(timezones.as_ref(), session, persisted_zone));
    });

    let audio = sources.audio.clone();
    crate::services::runtime::spawn_pipeline("audio-backends", async move {
        let _ = tx.send(probe_audio_backends(audio.as_ref(), session));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::events::{AudioBackendSupport, GpuAdapter, NetworkInterfaceInfo, TimezoneEntry};

    struct FakeHardware(Vec<GpuAdapter>);

    impl HardwareEnumerator for FakeHardware {
        fn list_adapters(&self) -> Vec<GpuAdapter> {
            self.0.clone()
        }
    }

    struct FakeNetwork;

    impl NetworkEnumerator for FakeNetwork {
        fn list_interfaces(&self) -> Vec<NetworkInterfaceInfo> {
            vec![NetworkInterfaceInfo {
                name: "eth0".into(),
                id: "if-1".into(),
            }]
        }
    }

    struct FakeTimezones;

    impl TimezoneSource for FakeTimezones {
        fn list_entries(&self) -> Box<dyn Iterator<Item = TimezoneEntry> + Send + '_> {
            Box::new(std::iter::once(TimezoneEntry {
                utc_offset_seconds: 0,
                location: "UTC".into(),
                abbreviation: "UTC".into(),
            }))
        }
    }

    struct FakeAudio;

    impl AudioBackendProber for FakeAudio {
        fn probe(&self) -> AudioBackendSupport {
            AudioBackendSupport {
                openal: false,
                soundio: true,
                sdl2: true,
            }
        }
    }

    #[test]
    fn gpu_pipeline_carries_captured_selection() {
        let hardware = FakeHardware(vec![GpuAdapter {
            id: "gpu-1".into(),
            name: "Test GPU".into(),
            is_discrete: true,
        }]);
        let session = SessionId::new();

        let event = discover_gpus(&hardware, session, "gpu-1".into());
        match event {
            EnrichmentEvent::GpuAdapters {
                session: s,
                adapters,
                persisted_gpu,
            } => {
                assert_eq!(s, session);
                assert_eq!(adapters.len(), 1);
                assert_eq!(persisted_gpu, "gpu-1");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn spawn_all_delivers_four_events() {
        let sources = EnrichmentSources {
            hardware: Arc::new(FakeHardware(Vec::new())),
            network: Arc::new(FakeNetwork),
            timezones: Arc::new(FakeTimezones),
            audio: Arc::new(FakeAudio),
        };
        let (tx, rx) = crossbeam_channel::unbounded();

        spawn_all(&sources, SessionId::new(), PersistedSelections::default(), tx);

        let mut received = 0;
        while received < 4 {
            rx.recv_timeout(std::time::Duration::from_secs(5))
                .expect("pipeline event");
            received += 1;
        }
    }
}
