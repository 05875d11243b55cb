//! Capability Interfaces
//!
//! Narrow traits for everything the engine consumes from the outside:
//! hardware and OS enumerators, the bundled timezone table, user-facing
//! notifications and the graphics driver toggle. The hosting application
//! provides real implementations; the engine only depends on these
//! surfaces.

use crate::services::events::{AudioBackendSupport, GpuAdapter, NetworkInterfaceInfo, TimezoneEntry};

/// Enumerates physical graphics adapters. May be slow and may return an
/// empty list when no supported adapter is present.
pub trait HardwareEnumerator: Send + Sync {
    fn list_adapters(&self) -> Vec<GpuAdapter>;
}

/// Enumerates OS network interfaces.
pub trait NetworkEnumerator: Send + Sync {
    fn list_interfaces(&self) -> Vec<NetworkInterfaceInfo>;
}

/// Produces the timezone table as an incrementally consumable sequence.
pub trait TimezoneSource: Send + Sync {
    fn list_entries(&self) -> Box<dyn Iterator<Item = TimezoneEntry> + Send + '_>;
}

/// Probes which audio backends are usable on this host.
pub trait AudioBackendProber: Send + Sync {
    fn probe(&self) -> AudioBackendSupport;
}

/// Sink for user-facing informational messages (backend switches,
/// threading-mode warnings).
pub trait NotificationSink: Send + Sync {
    fn info(&self, message: &str);
}

/// Fire-and-forget control over the graphics driver threading switch.
pub trait GraphicsDriver: Send + Sync {
    fn set_threading(&self, enabled: bool);
}

/// Notification sink that forwards to the tracing log
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Graphics driver handle for hosts without a toggleable driver
pub struct NullGraphicsDriver;

impl GraphicsDriver for NullGraphicsDriver {
    fn set_threading(&self, _enabled: bool) {}
}

/// Bundled timezone table, (offset seconds, location, abbreviation).
/// A small built-in set; hosts with a full tzdb supply their own source.
const BUNDLED_TIMEZONES: &[(i32, &str, &str)] = &[
    (0, "UTC", "UTC"),
    (-36000, "Pacific/Honolulu", "HST"),
    (-28800, "America/Anchorage", "AKDT"),
    (-25200, "America/Los_Angeles", "PDT"),
    (-21600, "America/Denver", "MDT"),
    (-18000, "America/Chicago", "CDT"),
    (-14400, "America/New_York", "EDT"),
    (-10800, "America/Sao_Paulo", "-03"),
    (0, "Europe/London", "GMT"),
    (3600, "Europe/Berlin", "CET"),
    (3600, "Europe/Paris", "CET"),
    (7200, "Europe/Helsinki", "EET"),
    (10800, "Europe/Moscow", "MSK"),
    (12600, "Asia/Tehran", "+0330"),
    (14400, "Asia/Dubai", "+04"),
    (19800, "Asia/Kolkata", "IST"),
    (25200, "Asia/Bangkok", "+07"),
    (28800, "Asia/Shanghai", "CST"),
    (28800, "Asia/Singapore", "+08"),
    (32400, "Asia/Tokyo", "JST"),
    (34200, "Australia/Adelaide", "ACST"),
    (36000, "Australia/Sydney", "AEST"),
    (43200, "Pacific/Auckland", "NZST"),
];

/// Timezone source backed by the bundled table
pub struct BundledTimezoneSource;

impl TimezoneSource for BundledTimezoneSource {
    fn list_entries(&self) -> Box<dyn Iterator<Item = TimezoneEntry> + Send + '_> {
        Box::new(
            BUNDLED_TIMEZONES
                .iter()
                .map(|(offset, location, abbr)| TimezoneEntry {
                    utc_offset_seconds: *offset,
                    location: (*location).to_string(),
                    abbreviation: (*abbr).to_string(),
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_contains_utc() {
        let entries: Vec<_> = BundledTimezoneSource.list_entries().collect();
        assert!(!entries.is_empty());
        assert!(entries.iter().any(|e| e.location == "UTC"));
    }

    #[test]
    fn bundled_table_offsets_are_whole_minutes() {
        for entry in BundledTimezoneSource.list_entries() {
            assert_eq!(entry.utc_offset_seconds % 60, 0, "{}", entry.location);
        }
    }
}
