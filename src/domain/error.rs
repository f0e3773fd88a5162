//! Typed resolution errors.
//!
//! This module has zero imports from `crate::application`, `crate::infra`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via the `?`
//! operator; callers that need to branch on a kind use
//! `err.downcast_ref::<ResolveError>()`.

use std::time::Duration;

use thiserror::Error;

use crate::domain::server::AddressFamily;

/// Errors surfaced while resolving SSH connection info for a machine.
///
/// The two non-error outcomes — machine never provisioned, server confirmed
/// gone — are not represented here; the resolver reports both as "no info".
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The server exists but reported no address of the selected family.
    #[error("server '{id}' in zone '{zone}' has no {family} IP address")]
    IpAddressUnavailable {
        id: String,
        zone: String,
        family: AddressFamily,
    },

    /// The caller's identity could not be established from the token chain.
    #[error("could not resolve caller identity: {0}")]
    IdentityResolutionFailed(String),

    /// The OS Login profile exists but carries no POSIX accounts.
    #[error("OS Login profile for '{email}' contains no POSIX accounts")]
    NoPosixAccount { email: String },

    /// A collaborator call exceeded the per-call timeout.
    #[error("{operation} did not complete within {timeout:?}")]
    CollaboratorTimeout {
        operation: &'static str,
        timeout: Duration,
    },
}
