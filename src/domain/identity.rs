//! Identity tokens, claims, and OS Login profile types.

use serde::Deserialize;

/// Access-token bundle returned by a credential exchange.
///
/// Mirrors the token-endpoint response shape; only the identity token
/// matters to resolution, so everything else is dropped by providers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessTokenBundle {
    /// JWT carrying identity claims about the caller, when present.
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Claims decoded from an identity token payload.
///
/// Absent `email` is representable so that a token without the claim is
/// data, not a decoder error; the resolver decides what to do about it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityClaims {
    /// Email identity of the caller, when the token carries one.
    #[serde(default)]
    pub email: Option<String>,
}

/// One POSIX account entry of an OS Login profile.
#[derive(Debug, Clone, Deserialize)]
pub struct PosixAccount {
    pub username: String,
}

/// Login profile returned by the OS Login directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginProfile {
    pub posix_accounts: Vec<PosixAccount>,
}

/// OS Login resource name for an email identity: `users/{email}`.
#[must_use]
pub fn user_resource_name(email: &str) -> String {
    format!("users/{email}")
}
