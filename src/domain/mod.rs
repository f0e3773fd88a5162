//! Domain layer — pure types and errors.
//!
//! This module has zero imports from `crate::application`, `crate::infra`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`. All functions are
//! synchronous and take data in, returning data out.

pub mod error;
pub mod identity;
pub mod machine;
pub mod server;
pub mod ssh;
pub mod zone;

pub use error::ResolveError;
pub use identity::{
    AccessTokenBundle, IdentityClaims, LoginProfile, PosixAccount, user_resource_name,
};
pub use machine::TrackedMachine;
pub use server::{AddressFamily, ServerRecord};
pub use ssh::{SSH_PORT, SshInfo};
pub use zone::ZoneConfig;
