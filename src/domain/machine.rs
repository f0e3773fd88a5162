//! Caller-owned machine state.

/// A provisioned (or formerly provisioned) machine tracked by the host tool.
///
/// `id` is `None` either because the machine was never provisioned or
/// because a resolution confirmed the remote server is gone. The second
/// transition happens through [`mark_destroyed`](Self::mark_destroyed) and is
/// one-way: no API restores an id on an existing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedMachine {
    id: Option<String>,
    zone: String,
}

impl TrackedMachine {
    /// A machine known to the compute API as `id` in `zone`.
    #[must_use]
    pub fn new(id: &str, zone: &str) -> Self {
        Self {
            id: Some(id.to_owned()),
            zone: zone.to_owned(),
        }
    }

    /// A machine in `zone` that was never provisioned.
    #[must_use]
    pub fn unprovisioned(zone: &str) -> Self {
        Self {
            id: None,
            zone: zone.to_owned(),
        }
    }

    /// Instance id, if the machine is believed to exist remotely.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Zone the machine lives in.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Record that the remote server backing this machine no longer exists.
    pub fn mark_destroyed(&mut self) {
        self.id = None;
    }
}
