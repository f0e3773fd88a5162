//! SSH connection-info resolution.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{
    ComputeLookup, Credentials, IdentityProvider, MachineRef, OsLoginDirectory, TokenDecoder,
    ZoneConfigSource,
};
use crate::domain::{ResolveError, SshInfo, user_resource_name};

/// Per-collaborator-call timeout applied unless the host overrides it.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolves the SSH connection descriptor for one machine per call.
///
/// Owns the zone-config source, identity provider, OS Login directory, and
/// token decoder; the compute lookup and the machine are per-call arguments.
/// All collaborator traits are implemented for shared references, so hosts
/// can lend long-lived services instead of moving them in.
pub struct SshInfoResolver<Z, I, O, D> {
    zones: Z,
    identity: I,
    oslogin: O,
    decoder: D,
    call_timeout: Duration,
}

impl<Z, I, O, D> SshInfoResolver<Z, I, O, D>
where
    Z: ZoneConfigSource,
    I: IdentityProvider,
    O: OsLoginDirectory,
    D: TokenDecoder,
{
    pub fn new(zones: Z, identity: I, oslogin: O, decoder: D) -> Self {
        Self {
            zones,
            identity,
            oslogin,
            decoder,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Override the per-collaborator-call timeout.
    #[must_use]
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Resolve the SSH connection descriptor for `machine`.
    ///
    /// `Ok(None)` means "no info": the machine was never provisioned, or the
    /// compute API no longer knows its server — in which case the machine is
    /// marked destroyed first, the only mutation this method performs.
    ///
    /// Resolution is one sequential chain of collaborator calls, each
    /// bounded by the configured timeout, with no retries. Dropping the
    /// returned future cancels resolution at the current await point.
    ///
    /// # Errors
    ///
    /// Fails with a [`ResolveError`] kind (downcastable from the returned
    /// `anyhow::Error`) when the selected address list is empty, the
    /// caller's identity cannot be established, the login profile carries no
    /// POSIX account, or a collaborator call times out. Other collaborator
    /// failures propagate wrapped with resolution context.
    pub async fn resolve(
        &self,
        compute: &impl ComputeLookup,
        machine: &mut impl MachineRef,
    ) -> Result<Option<SshInfo>> {
        let Some(id) = machine.id().map(str::to_owned) else {
            return Ok(None);
        };
        let zone = machine.zone().to_owned();

        let server = self
            .bounded("server lookup", compute.get_server(&id, &zone))
            .await
            .with_context(|| format!("looking up server '{id}' in zone '{zone}'"))?;

        let Some(server) = server else {
            tracing::info!(
                zone = %zone,
                id = %id,
                "server not found remotely, assuming the machine was destroyed"
            );
            machine.mark_destroyed();
            return Ok(None);
        };

        let zone_cfg = self.zones.zone_config(&zone);
        let family = zone_cfg.address_family();

        let Some(host) = server.first_address(family) else {
            return Err(ResolveError::IpAddressUnavailable { id, zone, family }.into());
        };
        let mut info = SshInfo::new(host);

        if !zone_cfg.use_os_login {
            return Ok(Some(info));
        }

        info.username = Some(self.os_login_username().await?);
        Ok(Some(info))
    }

    /// Resolve the caller's POSIX username through the OS Login directory.
    async fn os_login_username(&self) -> Result<String> {
        let credentials = self
            .bounded("credential discovery", self.identity.application_default())
            .await
            .context("obtaining application-default credentials")?;

        let bundle = self
            .bounded("token exchange", credentials.fetch_access_token())
            .await
            .context("fetching access token")?;

        let id_token = bundle.id_token.ok_or_else(|| {
            ResolveError::IdentityResolutionFailed(
                "access token bundle carries no identity token".to_owned(),
            )
        })?;

        // Payload-only decode; the trust boundary is documented on TokenDecoder.
        let claims = self.decoder.decode_unverified(&id_token).map_err(|err| {
            ResolveError::IdentityResolutionFailed(format!(
                "identity token did not decode: {err:#}"
            ))
        })?;

        let email = claims.email.ok_or_else(|| {
            ResolveError::IdentityResolutionFailed(
                "identity token carries no email claim".to_owned(),
            )
        })?;

        tracing::debug!(email = %email, "resolving OS Login profile");
        let profile = self
            .bounded(
                "login profile lookup",
                self.oslogin.login_profile(&user_resource_name(&email)),
            )
            .await
            .with_context(|| format!("fetching OS Login profile for '{email}'"))?;

        let Some(account) = profile.posix_accounts.first() else {
            return Err(ResolveError::NoPosixAccount { email }.into());
        };
        Ok(account.username.clone())
    }

    /// Bound a collaborator call by the configured timeout.
    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ResolveError::CollaboratorTimeout {
                operation,
                timeout: self.call_timeout,
            }
            .into()),
        }
    }
}
