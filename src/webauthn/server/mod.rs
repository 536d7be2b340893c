//! Relying party side verification of `navigator.credentials.create()` and `.get()` responses.

use crate::webauthn::{
    crypto::sha256,
    error::Error,
    proto::web_message::{CollectedClientData, TokenBindingStatus},
};
use std::{fmt, sync::Arc};
use tracing::debug;

pub mod authentication;
pub mod registration;

#[cfg(test)]
pub mod fixtures;

pub use authentication::*;
pub use registration::*;

/// The challenge a response must carry.
///
/// `Predicate` receives the base64url challenge found in the client data, for schemes that embed
/// state in the challenge instead of comparing it to a stored value.
#[derive(Clone)]
pub enum ExpectedChallenge {
    Literal(String),
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl ExpectedChallenge {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        ExpectedChallenge::Predicate(Arc::new(f))
    }

    fn verify(&self, actual: &str) -> Result<(), Error> {
        match self {
            ExpectedChallenge::Literal(expected) if expected == actual => Ok(()),
            ExpectedChallenge::Literal(expected) => Err(Error::ChallengeMismatch {
                expected: expected.clone(),
                actual: actual.to_owned(),
            }),
            ExpectedChallenge::Predicate(f) if f(actual) => Ok(()),
            ExpectedChallenge::Predicate(_) => Err(Error::ChallengeVerifierFailed {
                actual: actual.to_owned(),
            }),
        }
    }
}

impl fmt::Debug for ExpectedChallenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedChallenge::Literal(challenge) => f.debug_tuple("Literal").field(challenge).finish(),
            ExpectedChallenge::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for ExpectedChallenge {
    fn from(challenge: &str) -> Self {
        ExpectedChallenge::Literal(challenge.to_owned())
    }
}

impl From<String> for ExpectedChallenge {
    fn from(challenge: String) -> Self {
        ExpectedChallenge::Literal(challenge)
    }
}

/// A single accepted value or a list of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected<T> {
    One(T),
    Any(Vec<T>),
}

impl<T> Expected<T> {
    pub fn values(&self) -> &[T] {
        match self {
            Expected::One(value) => std::slice::from_ref(value),
            Expected::Any(values) => values.as_slice(),
        }
    }
}

impl From<&str> for Expected<String> {
    fn from(value: &str) -> Self {
        Expected::One(value.to_owned())
    }
}

impl From<String> for Expected<String> {
    fn from(value: String) -> Self {
        Expected::One(value)
    }
}

impl From<Vec<String>> for Expected<String> {
    fn from(values: Vec<String>) -> Self {
        Expected::Any(values)
    }
}

impl From<Vec<&str>> for Expected<String> {
    fn from(values: Vec<&str>) -> Self {
        Expected::Any(values.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Expected<String> {
    fn from(values: &[&str]) -> Self {
        Expected::Any(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

fn check_credential_id(id: &str, raw_id: &str) -> Result<(), Error> {
    if id.is_empty() || id != raw_id {
        return Err(Error::CredentialIdMismatch {
            id: id.to_owned(),
            raw_id: raw_id.to_owned(),
        });
    }
    Ok(())
}

fn check_credential_type(credential_type: &str) -> Result<(), Error> {
    use crate::webauthn::proto::constants::WEBAUTHN_PUBLIC_KEY_CREDENTIAL_TYPE;

    if credential_type != WEBAUTHN_PUBLIC_KEY_CREDENTIAL_TYPE {
        return Err(Error::UnexpectedCredentialType {
            expected: WEBAUTHN_PUBLIC_KEY_CREDENTIAL_TYPE.to_owned(),
            actual: credential_type.to_owned(),
        });
    }
    Ok(())
}

/// Type, challenge, origin and token binding checks shared by both ceremonies.
fn check_client_data(
    client_data: &CollectedClientData,
    expected_type: &str,
    expected_challenge: &ExpectedChallenge,
    expected_origin: &Expected<String>,
) -> Result<(), Error> {
    if client_data.request_type != expected_type {
        return Err(Error::UnexpectedType {
            expected: expected_type.to_owned(),
            actual: client_data.request_type.clone(),
        });
    }

    expected_challenge.verify(&client_data.challenge)?;

    if !expected_origin.values().iter().any(|origin| *origin == client_data.origin) {
        return Err(Error::UnexpectedOrigin {
            expected: expected_origin.values().to_vec(),
            actual: client_data.origin.clone(),
        });
    }

    if let Some(token_binding) = &client_data.token_binding {
        let status = token_binding.status()?;
        debug!(?status, "client data token binding");
        if status == TokenBindingStatus::Present && token_binding.id.is_none() {
            return Err(Error::InvalidTokenBinding("present without id".to_owned()));
        }
    }

    Ok(())
}

/// Returns the RP ID whose SHA-256 equals `rp_id_hash`.
fn match_rp_id(rp_id_hash: &[u8], expected_rp_id: &Expected<String>) -> Result<String, Error> {
    let rp_id = expected_rp_id
        .values()
        .iter()
        .find(|rp_id| sha256(rp_id.as_bytes()) == rp_id_hash)
        .ok_or_else(|| Error::UnexpectedRpIdHash {
            expected: expected_rp_id.values().to_vec(),
            actual: hex::encode(rp_id_hash),
        })?;

    debug!(rp_id = %rp_id, "matched rp id hash");
    Ok(rp_id.clone())
}
