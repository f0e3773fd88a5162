//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` — never on `crate::infra`.

pub mod ports;
pub mod services;

pub use ports::{
    ComputeLookup, Credentials, IdentityProvider, MachineRef, OsLoginDirectory, TokenDecoder,
    ZoneConfigSource,
};
pub use services::ssh_info::{DEFAULT_CALL_TIMEOUT, SshInfoResolver};
