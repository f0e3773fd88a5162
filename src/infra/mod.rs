//! Infrastructure layer — adapters implementing the application ports.
//!
//! Layer rules:
//! - May import from `crate::domain` and `crate::application`.
//! - Third-party bindings (token codecs, config tables) live here, behind
//!   the port traits; nothing above this layer names a vendor library.

pub mod token;
pub mod zones;

pub use token::UnverifiedJwtDecoder;
pub use zones::StaticZoneConfigs;
