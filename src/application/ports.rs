//! Port trait definitions for the application layer.
//!
//! Ports are the contracts the surrounding tool must fulfill for resolution
//! to run. This file imports only from `crate::domain` — never from
//! `crate::infra`.

use anyhow::Result;

use crate::domain::{
    AccessTokenBundle, IdentityClaims, LoginProfile, ServerRecord, TrackedMachine, ZoneConfig,
};

// ── Machine capability ────────────────────────────────────────────────────────

/// Caller-owned machine state the resolver may read and, in exactly one
/// case, mutate.
///
/// `mark_destroyed` is the only write: it records that the remote server
/// backing the machine is gone. Handing the resolver this capability rather
/// than a raw field keeps the side effect explicit at the call site.
pub trait MachineRef {
    /// Instance id, or `None` when the machine was never provisioned or is
    /// known destroyed.
    fn id(&self) -> Option<&str>;
    /// Zone the machine lives in.
    fn zone(&self) -> &str;
    /// Record that the remote server no longer exists. One-way.
    fn mark_destroyed(&mut self);
}

impl MachineRef for TrackedMachine {
    fn id(&self) -> Option<&str> {
        TrackedMachine::id(self)
    }
    fn zone(&self) -> &str {
        TrackedMachine::zone(self)
    }
    fn mark_destroyed(&mut self) {
        TrackedMachine::mark_destroyed(self);
    }
}

// ── Compute lookup ────────────────────────────────────────────────────────────

/// Resolves a machine id + zone to a live server record.
#[allow(async_fn_in_trait)]
pub trait ComputeLookup {
    /// Fetch the server for `id` in `zone`, or `None` when the compute API
    /// no longer knows it.
    async fn get_server(&self, id: &str, zone: &str) -> Result<Option<ServerRecord>>;
}

// ── Zone configuration ────────────────────────────────────────────────────────

/// Supplies per-zone resolution settings.
///
/// Sync trait — implementations hold already-loaded configuration; loading
/// it from wherever the host keeps config happens before resolution.
pub trait ZoneConfigSource {
    /// Settings for `zone`. Unknown zones yield the source's default.
    fn zone_config(&self, zone: &str) -> ZoneConfig;
}

/// A bare config is a source that answers the same settings for every zone.
impl ZoneConfigSource for ZoneConfig {
    fn zone_config(&self, _zone: &str) -> ZoneConfig {
        *self
    }
}

impl<T: ZoneConfigSource> ZoneConfigSource for &T {
    fn zone_config(&self, zone: &str) -> ZoneConfig {
        (**self).zone_config(zone)
    }
}

// ── Identity ──────────────────────────────────────────────────────────────────

/// Supplies the ambient application-default credentials.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    /// Credential material produced by discovery.
    type Credentials: Credentials;
    /// Discover the application-default credentials of the environment.
    async fn application_default(&self) -> Result<Self::Credentials>;
}

impl<T: IdentityProvider> IdentityProvider for &T {
    type Credentials = T::Credentials;
    async fn application_default(&self) -> Result<Self::Credentials> {
        (**self).application_default().await
    }
}

/// Credentials able to exchange themselves for an access-token bundle.
#[allow(async_fn_in_trait)]
pub trait Credentials {
    /// Fetch an access-token bundle that may carry an identity token.
    async fn fetch_access_token(&self) -> Result<AccessTokenBundle>;
}

// ── Token decoding ────────────────────────────────────────────────────────────

/// Decodes identity-token payloads.
///
/// `decode_unverified` deliberately skips signature verification: the token
/// arrives through a credential chain the host already trusts, and the
/// resolver holds no issuer keys. Hosts that do hold them can implement this
/// trait with a verifying decoder instead.
pub trait TokenDecoder {
    /// Decode the claims payload of `token` without verifying its signature.
    fn decode_unverified(&self, token: &str) -> Result<IdentityClaims>;
}

impl<T: TokenDecoder> TokenDecoder for &T {
    fn decode_unverified(&self, token: &str) -> Result<IdentityClaims> {
        (**self).decode_unverified(token)
    }
}

// ── OS Login directory ────────────────────────────────────────────────────────

/// Maps an authenticated identity to its POSIX login profile.
#[allow(async_fn_in_trait)]
pub trait OsLoginDirectory {
    /// Fetch the login profile for a `users/{email}` resource name.
    async fn login_profile(&self, name: &str) -> Result<LoginProfile>;
}

impl<T: OsLoginDirectory> OsLoginDirectory for &T {
    async fn login_profile(&self, name: &str) -> Result<LoginProfile> {
        (**self).login_profile(name).await
    }
}
