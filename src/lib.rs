//! SSH connection-info resolution for cloud VM instances.
//!
//! Given a machine reference (instance id + zone), gangway decides whether
//! the remote server still exists, picks the address to dial (public or
//! private, per zone configuration), and optionally resolves a per-identity
//! POSIX username through the OS Login directory. The compute, identity, and
//! directory services are consumed through the traits in
//! [`application::ports`]; opening the SSH session itself is the caller's
//! business.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod domain;
pub mod infra;

pub use application::ports::{
    ComputeLookup, Credentials, IdentityProvider, MachineRef, OsLoginDirectory, TokenDecoder,
    ZoneConfigSource,
};
pub use application::services::ssh_info::{DEFAULT_CALL_TIMEOUT, SshInfoResolver};
pub use domain::{
    AccessTokenBundle, AddressFamily, IdentityClaims, LoginProfile, PosixAccount, ResolveError,
    SSH_PORT, ServerRecord, SshInfo, TrackedMachine, ZoneConfig, user_resource_name,
};
pub use infra::{StaticZoneConfigs, UnverifiedJwtDecoder};
