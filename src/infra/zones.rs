//! Zone-configuration lookup backed by an in-memory table.

use std::collections::HashMap;

use crate::application::ports::ZoneConfigSource;
use crate::domain::ZoneConfig;

/// Zone-config source with per-zone overrides over a fleet-wide default.
///
/// Hosts usually deserialize the override table straight out of their own
/// config file; a bare [`ZoneConfig`] works as a source too when every zone
/// behaves the same.
#[derive(Debug, Clone, Default)]
pub struct StaticZoneConfigs {
    default: ZoneConfig,
    overrides: HashMap<String, ZoneConfig>,
}

impl StaticZoneConfigs {
    #[must_use]
    pub fn new(default: ZoneConfig) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Pin `zone` to `config` instead of the fleet default.
    #[must_use]
    pub fn with_zone(mut self, zone: &str, config: ZoneConfig) -> Self {
        self.overrides.insert(zone.to_owned(), config);
        self
    }
}

impl ZoneConfigSource for StaticZoneConfigs {
    fn zone_config(&self, zone: &str) -> ZoneConfig {
        self.overrides.get(zone).copied().unwrap_or(self.default)
    }
}
