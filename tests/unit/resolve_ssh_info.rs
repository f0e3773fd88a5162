//! End-to-end resolution scenarios through the public API.
//!
//! The resolver is wired with stub collaborators plus the real token
//! decoder, so the OS Login scenarios decode genuinely minted JWTs.

#![allow(clippy::expect_used)]

use std::time::Duration;

use gangway::{
    AddressFamily, ResolveError, SSH_PORT, SshInfoResolver, StaticZoneConfigs, TrackedMachine,
    UnverifiedJwtDecoder, ZoneConfig,
};

use crate::stubs::{
    ComputeAbsent, ComputeFound, ComputeRecorder, ComputeUnreachable, DirectoryRecorder,
    DirectoryUnavailable, IdentityUnavailable, SlowDirectory, TokenIdentity, login_profile,
    mint_id_token, server,
};

fn os_login_zone() -> ZoneConfig {
    ZoneConfig {
        use_private_ip: false,
        use_os_login: true,
    }
}

// ============================================================================
// Address resolution
// ============================================================================

#[tokio::test]
async fn resolves_public_address_with_port_22() {
    let resolver = SshInfoResolver::new(
        ZoneConfig::default(),
        IdentityUnavailable,
        DirectoryUnavailable,
        UnverifiedJwtDecoder,
    );
    let compute = ComputeFound(server(&["1.2.3.4"], &["10.0.0.5"]));
    let mut machine = TrackedMachine::new("i-123", "us-central1-f");

    let info = resolver
        .resolve(&compute, &mut machine)
        .await
        .expect("resolve")
        .expect("info");

    assert_eq!(info.host, "1.2.3.4");
    assert_eq!(info.port, SSH_PORT);
    assert_eq!(info.username, None);
}

#[tokio::test]
async fn resolves_private_address_when_zone_prefers_it() {
    let cfg = ZoneConfig {
        use_private_ip: true,
        use_os_login: false,
    };
    let resolver = SshInfoResolver::new(
        cfg,
        IdentityUnavailable,
        DirectoryUnavailable,
        UnverifiedJwtDecoder,
    );
    let compute = ComputeFound(server(&["1.2.3.4"], &["10.0.0.5"]));
    let mut machine = TrackedMachine::new("i-123", "us-central1-f");

    let info = resolver
        .resolve(&compute, &mut machine)
        .await
        .expect("resolve")
        .expect("info");

    assert_eq!(info.host, "10.0.0.5");
}

#[tokio::test]
async fn zone_overrides_are_fetched_per_resolution() {
    let zones = StaticZoneConfigs::new(ZoneConfig::default()).with_zone(
        "eu-west1-b",
        ZoneConfig {
            use_private_ip: true,
            use_os_login: false,
        },
    );
    let resolver = SshInfoResolver::new(
        zones,
        IdentityUnavailable,
        DirectoryUnavailable,
        UnverifiedJwtDecoder,
    );
    let compute = ComputeFound(server(&["1.2.3.4"], &["10.0.0.5"]));

    let mut in_default_zone = TrackedMachine::new("i-1", "us-central1-f");
    let info = resolver
        .resolve(&compute, &mut in_default_zone)
        .await
        .expect("resolve")
        .expect("info");
    assert_eq!(info.host, "1.2.3.4");

    let mut in_override_zone = TrackedMachine::new("i-2", "eu-west1-b");
    let info = resolver
        .resolve(&compute, &mut in_override_zone)
        .await
        .expect("resolve")
        .expect("info");
    assert_eq!(info.host, "10.0.0.5");
}

#[tokio::test]
async fn missing_public_address_is_a_typed_error() {
    let resolver = SshInfoResolver::new(
        ZoneConfig::default(),
        IdentityUnavailable,
        DirectoryUnavailable,
        UnverifiedJwtDecoder,
    );
    let compute = ComputeFound(server(&[], &["10.0.0.5"]));
    let mut machine = TrackedMachine::new("i-123", "us-central1-f");

    let err = resolver
        .resolve(&compute, &mut machine)
        .await
        .expect_err("expected Err");

    match err.downcast_ref::<ResolveError>() {
        Some(ResolveError::IpAddressUnavailable { id, zone, family }) => {
            assert_eq!(id, "i-123");
            assert_eq!(zone, "us-central1-f");
            assert_eq!(*family, AddressFamily::Public);
        }
        other => panic!("expected IpAddressUnavailable, got: {other:?}"),
    }
}

// ============================================================================
// Destroyed detection
// ============================================================================

#[tokio::test]
async fn absent_server_clears_id_and_later_resolutions_short_circuit() {
    let resolver = SshInfoResolver::new(
        ZoneConfig::default(),
        IdentityUnavailable,
        DirectoryUnavailable,
        UnverifiedJwtDecoder,
    );
    let mut machine = TrackedMachine::new("i-123", "us-central1-f");

    let info = resolver
        .resolve(&ComputeAbsent, &mut machine)
        .await
        .expect("resolve");
    assert_eq!(info, None);
    assert_eq!(machine.id(), None);

    // The destroyed machine now short-circuits before any compute call.
    let info = resolver
        .resolve(&ComputeUnreachable, &mut machine)
        .await
        .expect("resolve");
    assert_eq!(info, None);
}

#[tokio::test]
async fn compute_is_called_once_with_id_and_zone() {
    let resolver = SshInfoResolver::new(
        ZoneConfig::default(),
        IdentityUnavailable,
        DirectoryUnavailable,
        UnverifiedJwtDecoder,
    );
    let compute = ComputeRecorder::returning(server(&["1.2.3.4"], &[]));
    let mut machine = TrackedMachine::new("i-123", "us-central1-f");

    resolver
        .resolve(&compute, &mut machine)
        .await
        .expect("resolve");

    let calls = compute.calls.lock().expect("calls lock");
    assert_eq!(
        calls.as_slice(),
        [("i-123".to_owned(), "us-central1-f".to_owned())]
    );
}

// ============================================================================
// OS Login
// ============================================================================

#[tokio::test]
async fn os_login_username_comes_through_a_real_token_decode() {
    let directory = DirectoryRecorder::returning(login_profile(&["abuser", "backup"]));
    let resolver = SshInfoResolver::new(
        os_login_zone(),
        TokenIdentity(Some(mint_id_token("a@b.com"))),
        &directory,
        UnverifiedJwtDecoder,
    );
    let compute = ComputeFound(server(&["1.2.3.4"], &[]));
    let mut machine = TrackedMachine::new("i-123", "us-central1-f");

    let info = resolver
        .resolve(&compute, &mut machine)
        .await
        .expect("resolve")
        .expect("info");

    assert_eq!(info.host, "1.2.3.4");
    assert_eq!(info.username.as_deref(), Some("abuser"));
    let requests = directory.requests.lock().expect("requests lock");
    assert_eq!(requests.as_slice(), ["users/a@b.com".to_owned()]);
}

#[tokio::test]
async fn empty_login_profile_is_a_typed_error() {
    let directory = DirectoryRecorder::returning(login_profile(&[]));
    let resolver = SshInfoResolver::new(
        os_login_zone(),
        TokenIdentity(Some(mint_id_token("a@b.com"))),
        &directory,
        UnverifiedJwtDecoder,
    );
    let compute = ComputeFound(server(&["1.2.3.4"], &[]));
    let mut machine = TrackedMachine::new("i-123", "us-central1-f");

    let err = resolver
        .resolve(&compute, &mut machine)
        .await
        .expect_err("expected Err");

    match err.downcast_ref::<ResolveError>() {
        Some(ResolveError::NoPosixAccount { email }) => assert_eq!(email, "a@b.com"),
        other => panic!("expected NoPosixAccount, got: {other:?}"),
    }
}

#[tokio::test]
async fn identity_discovery_failure_carries_context() {
    let resolver = SshInfoResolver::new(
        os_login_zone(),
        IdentityUnavailable,
        DirectoryUnavailable,
        UnverifiedJwtDecoder,
    );
    let compute = ComputeFound(server(&["1.2.3.4"], &[]));
    let mut machine = TrackedMachine::new("i-123", "us-central1-f");

    let err = resolver
        .resolve(&compute, &mut machine)
        .await
        .expect_err("expected Err");

    let chain = format!("{err:#}");
    assert!(
        chain.contains("obtaining application-default credentials"),
        "missing context: {chain}"
    );
    assert!(
        chain.contains("metadata service refused the connection"),
        "missing collaborator error: {chain}"
    );
}

#[tokio::test(start_paused = true)]
async fn slow_directory_lookup_times_out() {
    let resolver = SshInfoResolver::new(
        os_login_zone(),
        TokenIdentity(Some(mint_id_token("a@b.com"))),
        SlowDirectory,
        UnverifiedJwtDecoder,
    )
    .with_call_timeout(Duration::from_millis(50));
    let compute = ComputeFound(server(&["1.2.3.4"], &[]));
    let mut machine = TrackedMachine::new("i-123", "us-central1-f");

    let err = resolver
        .resolve(&compute, &mut machine)
        .await
        .expect_err("expected Err");

    match err.downcast_ref::<ResolveError>() {
        Some(ResolveError::CollaboratorTimeout { operation, timeout }) => {
            assert_eq!(*operation, "login profile lookup");
            assert_eq!(*timeout, Duration::from_millis(50));
        }
        other => panic!("expected CollaboratorTimeout, got: {other:?}"),
    }
}
