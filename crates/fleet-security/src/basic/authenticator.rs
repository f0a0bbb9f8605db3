//! Credential verification for HTTP Basic authentication.

use crate::{PasswordHasher, PasswordHasherInterface};
use fleet_config::SecurityConfig;
use fleet_core::{FleetError, FleetResult, Interface};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Interface for checking a username/password pair.
pub trait CredentialsVerifier: Interface + Send + Sync {
    /// Returns true if the pair matches the configured principal.
    fn verify(&self, username: &str, password: &str) -> FleetResult<bool>;

    /// Realm advertised in `WWW-Authenticate` challenges.
    fn realm(&self) -> &str;
}

/// Verifies credentials against a single configured principal.
#[derive(Component)]
#[shaku(interface = CredentialsVerifier)]
pub struct BasicAuthenticator {
    #[shaku(inject)]
    hasher: Arc<dyn PasswordHasherInterface>,
    username: String,
    password_hash: String,
    realm: String,
}

/// Component parameters resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// Accepted username.
    pub username: String,
    /// Argon2 PHC string of the accepted password.
    pub password_hash: String,
    /// Challenge realm.
    pub realm: String,
}

impl BasicCredentials {
    /// Resolves credentials from configuration.
    ///
    /// A configured `password_hash` is used as is; otherwise the plain
    /// `password` is hashed with `hasher`.
    pub fn from_config(
        config: &SecurityConfig,
        hasher: &dyn PasswordHasherInterface,
    ) -> FleetResult<Self> {
        let password_hash = match (config.password_hash.as_deref(), config.password.as_deref()) {
            (Some(hash), _) if !hash.is_empty() => {
                PasswordHasher::parse_hash(hash)?;
                hash.to_string()
            }
            (_, Some(password)) if !password.is_empty() => {
                info!("Hashing configured plain-text password");
                hasher.hash(password)?
            }
            _ => {
                return Err(FleetError::Configuration(
                    "No password configured for basic authentication".to_string(),
                ))
            }
        };

        Ok(Self {
            username: config.username.clone(),
            password_hash,
            realm: config.realm.clone(),
        })
    }
}

impl BasicAuthenticator {
    /// Creates an authenticator for the given credentials.
    #[must_use]
    pub fn new(hasher: Arc<dyn PasswordHasherInterface>, credentials: BasicCredentials) -> Self {
        Self {
            hasher,
            username: credentials.username,
            password_hash: credentials.password_hash,
            realm: credentials.realm,
        }
    }

    /// Builds the shaku parameters for this component.
    #[must_use]
    pub fn parameters(credentials: BasicCredentials) -> BasicAuthenticatorParameters {
        BasicAuthenticatorParameters {
            username: credentials.username,
            password_hash: credentials.password_hash,
            realm: credentials.realm,
        }
    }
}

impl CredentialsVerifier for BasicAuthenticator {
    fn verify(&self, username: &str, password: &str) -> FleetResult<bool> {
        // Password is checked even for an unknown user so timing does not reveal usernames.
        let username_matches = username == self.username;
        let password_matches = self.hasher.verify(password, &self.password_hash)?;

        if !(username_matches && password_matches) {
            debug!("Rejected credentials for user: {}", username);
        }
        Ok(username_matches && password_matches)
    }

    fn realm(&self) -> &str {
        &self.realm
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("realm", &self.realm)
            .finish_non_exhaustive()
    }
}
