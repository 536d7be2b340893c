//! Attestation statement verification, one module per `fmt`.

use crate::webauthn::{
    crypto::public_key_from_spki,
    error::{Error, TrustError},
    proto::{
        constants::{
            WEBAUTHN_FORMAT_ANDROID_KEY, WEBAUTHN_FORMAT_ANDROID_SAFETYNET, WEBAUTHN_FORMAT_APPLE, WEBAUTHN_FORMAT_FIDO_U2F,
            WEBAUTHN_FORMAT_NONE, WEBAUTHN_FORMAT_PACKED, WEBAUTHN_FORMAT_TPM,
        },
        cose::PublicKeyMaterial,
        raw_message::{AttestedCredentialData, AuthenticatorData},
    },
    trust::AttestationTrustStore,
};
use serde::de::DeserializeOwned;
use serde_cbor::Value;
use serde_derive::*;
use std::{collections::BTreeMap, fmt, str::FromStr};
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;
use x509_parser::{certificate::X509Certificate, prelude::FromDer};

pub mod android_safetynet;
pub mod apple;
pub mod fido_u2f;
pub mod none;
pub mod packed;
pub mod tpm;

/// Attestation statement formats known to this crate.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttestationFormat {
    #[serde(rename = "fido-u2f")]
    FidoU2f,
    #[serde(rename = "packed")]
    Packed,
    #[serde(rename = "android-safetynet")]
    AndroidSafetyNet,
    #[serde(rename = "android-key")]
    AndroidKey,
    #[serde(rename = "tpm")]
    Tpm,
    #[serde(rename = "apple")]
    Apple,
    #[serde(rename = "none")]
    None,
}

impl AttestationFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttestationFormat::FidoU2f => WEBAUTHN_FORMAT_FIDO_U2F,
            AttestationFormat::Packed => WEBAUTHN_FORMAT_PACKED,
            AttestationFormat::AndroidSafetyNet => WEBAUTHN_FORMAT_ANDROID_SAFETYNET,
            AttestationFormat::AndroidKey => WEBAUTHN_FORMAT_ANDROID_KEY,
            AttestationFormat::Tpm => WEBAUTHN_FORMAT_TPM,
            AttestationFormat::Apple => WEBAUTHN_FORMAT_APPLE,
            AttestationFormat::None => WEBAUTHN_FORMAT_NONE,
        }
    }
}

impl FromStr for AttestationFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            WEBAUTHN_FORMAT_FIDO_U2F => Ok(AttestationFormat::FidoU2f),
            WEBAUTHN_FORMAT_PACKED => Ok(AttestationFormat::Packed),
            WEBAUTHN_FORMAT_ANDROID_SAFETYNET => Ok(AttestationFormat::AndroidSafetyNet),
            WEBAUTHN_FORMAT_ANDROID_KEY => Ok(AttestationFormat::AndroidKey),
            WEBAUTHN_FORMAT_TPM => Ok(AttestationFormat::Tpm),
            WEBAUTHN_FORMAT_APPLE => Ok(AttestationFormat::Apple),
            WEBAUTHN_FORMAT_NONE => Ok(AttestationFormat::None),
            other => Err(Error::UnsupportedAttestationFormat(other.to_owned())),
        }
    }
}

impl fmt::Display for AttestationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a format verifier needs, borrowed from the registration being checked.
pub struct AttestationContext<'a> {
    pub att_stmt: &'a BTreeMap<String, Value>,
    pub auth_data: &'a AuthenticatorData,
    pub raw_auth_data: &'a [u8],
    pub client_data_hash: &'a [u8],
    pub trust: &'a AttestationTrustStore,
    pub now: OffsetDateTime,
    pub safetynet_require_cts_profile_match: bool,
}

impl AttestationContext<'_> {
    pub fn credential(&self) -> Result<&AttestedCredentialData, Error> {
        self.auth_data
            .attested_credential_data
            .as_ref()
            .ok_or(Error::MissingCredentialData)
    }

    /// `authData || clientDataHash`, the payload most formats sign.
    pub fn signed_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.raw_auth_data.len() + self.client_data_hash.len());
        data.extend_from_slice(self.raw_auth_data);
        data.extend_from_slice(self.client_data_hash);
        data
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorInfo {
    pub fmt: AttestationFormat,
    pub counter: u32,
    /// COSE encoded, as found in the authenticator data.
    #[serde(with = "serde_bytes")]
    pub credential_public_key: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub credential_id: Vec<u8>,
    pub aaguid: Uuid,
}

/// Outcome of a format verifier. `authenticator_info` is only filled when `verified` is true.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttestationResult {
    pub verified: bool,
    pub authenticator_info: Option<AuthenticatorInfo>,
}

impl AttestationResult {
    fn new(fmt: AttestationFormat, verified: bool, ctx: &AttestationContext) -> Self {
        let authenticator_info = match (verified, &ctx.auth_data.attested_credential_data) {
            (true, Some(credential)) => Some(AuthenticatorInfo {
                fmt,
                counter: ctx.auth_data.sign_count,
                credential_public_key: credential.credential_public_key_bytes.clone(),
                credential_id: credential.credential_id.clone(),
                aaguid: credential.aaguid(),
            }),
            _ => None,
        };

        AttestationResult {
            verified,
            authenticator_info,
        }
    }
}

/// Runs the verifier for `fmt`.
///
/// A statement that does not verify cryptographically yields `verified == false`. Structural and
/// trust failures are errors.
pub fn verify_attestation(fmt: AttestationFormat, ctx: &AttestationContext) -> Result<AttestationResult, Error> {
    debug!(fmt = %fmt, "verifying attestation statement");

    let verified = match fmt {
        AttestationFormat::FidoU2f => fido_u2f::verify(ctx)?,
        AttestationFormat::Packed => packed::verify(ctx)?,
        AttestationFormat::AndroidSafetyNet => android_safetynet::verify(ctx)?,
        AttestationFormat::Tpm => tpm::verify(ctx)?,
        AttestationFormat::Apple => apple::verify(ctx)?,
        AttestationFormat::None => none::verify(ctx)?,
        AttestationFormat::AndroidKey => return Err(Error::UnsupportedAttestationFormat(fmt.as_str().to_owned())),
    };

    if !verified {
        debug!(fmt = %fmt, "attestation signature did not verify");
    }

    Ok(AttestationResult::new(fmt, verified, ctx))
}

/// Decodes `attStmt` into the typed statement of a format.
pub(crate) fn parse_statement<T: DeserializeOwned>(att_stmt: &BTreeMap<String, Value>, fmt: AttestationFormat) -> Result<T, Error> {
    let map = att_stmt
        .iter()
        .map(|(k, v)| (Value::Text(k.clone()), v.clone()))
        .collect::<BTreeMap<_, _>>();
    serde_cbor::value::from_value(Value::Map(map))
        .map_err(|e| Error::InvalidAttestationStatement(format!("{} attStmt: {}", fmt, e)))
}

pub(crate) fn leaf_certificate(x5c: &[Vec<u8>]) -> Result<&[u8], Error> {
    x5c.first()
        .map(Vec::as_slice)
        .ok_or_else(|| TrustError::CertificateMissing.into())
}

pub(crate) fn certificate_public_key(der: &[u8]) -> Result<PublicKeyMaterial, Error> {
    let (_, cert) = X509Certificate::from_der(der)?;
    public_key_from_spki(cert.public_key())
}
