use crate::{
    base64::decode_lenient,
    webauthn::{
        attestation::{verify_attestation, AttestationContext, AttestationFormat},
        crypto::sha256,
        error::Error,
        proto::{
            constants::WEBAUTHN_REQUEST_TYPE_CREATE,
            raw_message::{classify_backup_flags, AttestationObject, AuthenticatorExtensionResults, CredentialDeviceType, Message},
            web_message::{CollectedClientData, RegistrationCredential},
        },
        server::{check_client_data, check_credential_id, check_credential_type, match_rp_id, Expected, ExpectedChallenge},
        trust::AttestationTrustStore,
    },
};
use serde_derive::*;
use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

/// COSE algorithms accepted for new credentials unless the relying party narrows the list.
pub const DEFAULT_SUPPORTED_ALGORITHMS: [i64; 10] = [-8, -7, -36, -37, -38, -39, -257, -258, -259, -65535];

/// What a relying party stores after a successful registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInfo {
    pub fmt: AttestationFormat,
    pub counter: u32,
    pub aaguid: Uuid,
    #[serde(rename = "credentialID", with = "serde_bytes")]
    pub credential_id: Vec<u8>,
    /// COSE encoded credential public key.
    #[serde(with = "serde_bytes")]
    pub credential_public_key: Vec<u8>,
    pub credential_type: String,
    #[serde(with = "serde_bytes")]
    pub attestation_object: Vec<u8>,
    pub user_verified: bool,
    pub credential_device_type: CredentialDeviceType,
    pub credential_backed_up: bool,
    pub origin: String,
    #[serde(rename = "rpID")]
    pub rp_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_extension_results: Option<AuthenticatorExtensionResults>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VerifiedRegistration {
    pub verified: bool,
    /// Only present when `verified` is true.
    pub registration_info: Option<RegistrationInfo>,
}

/// Verifies the response to a credential creation request.
///
/// ```ignore
/// let result = CredentialCreationVerifier::new(credential, challenge, "https://example.com", "example.com")
///     .require_user_verification(false)
///     .verify()?;
/// ```
#[derive(Clone, Debug)]
pub struct CredentialCreationVerifier {
    credential: RegistrationCredential,
    expected_challenge: ExpectedChallenge,
    expected_origin: Expected<String>,
    expected_rp_id: Expected<String>,
    require_user_verification: bool,
    supported_algorithms: Vec<i64>,
    trust_store: AttestationTrustStore,
    current_time: Option<OffsetDateTime>,
    safetynet_require_cts_profile_match: bool,
}

impl CredentialCreationVerifier {
    pub fn new(
        credential: RegistrationCredential,
        expected_challenge: impl Into<ExpectedChallenge>,
        expected_origin: impl Into<Expected<String>>,
        expected_rp_id: impl Into<Expected<String>>,
    ) -> Self {
        CredentialCreationVerifier {
            credential,
            expected_challenge: expected_challenge.into(),
            expected_origin: expected_origin.into(),
            expected_rp_id: expected_rp_id.into(),
            require_user_verification: true,
            supported_algorithms: DEFAULT_SUPPORTED_ALGORITHMS.to_vec(),
            trust_store: AttestationTrustStore::default(),
            current_time: None,
            safetynet_require_cts_profile_match: true,
        }
    }

    pub fn require_user_verification(mut self, require: bool) -> Self {
        self.require_user_verification = require;
        self
    }

    pub fn supported_algorithms(mut self, algorithms: Vec<i64>) -> Self {
        self.supported_algorithms = algorithms;
        self
    }

    pub fn trust_store(mut self, trust_store: AttestationTrustStore) -> Self {
        self.trust_store = trust_store;
        self
    }

    /// Time used for certificate validity and SafetyNet timestamps. Defaults to now.
    pub fn current_time(mut self, now: OffsetDateTime) -> Self {
        self.current_time = Some(now);
        self
    }

    pub fn safetynet_require_cts_profile_match(mut self, require: bool) -> Self {
        self.safetynet_require_cts_profile_match = require;
        self
    }

    pub fn verify(&self) -> Result<VerifiedRegistration, Error> {
        let credential = &self.credential;
        check_credential_id(&credential.id, &credential.raw_id)?;
        check_credential_type(&credential.credential_type)?;

        let raw_client_data =
            decode_lenient(&credential.response.client_data_json).map_err(|e| Error::InvalidClientDataJson(e.to_string()))?;
        let client_data = CollectedClientData::from_slice(&raw_client_data)?;
        check_client_data(
            &client_data,
            WEBAUTHN_REQUEST_TYPE_CREATE,
            &self.expected_challenge,
            &self.expected_origin,
        )?;

        let raw_attestation_object = decode_lenient(&credential.response.attestation_object)?;
        let attestation_object = AttestationObject::from_bytes(&raw_attestation_object)?;
        let auth_data = &attestation_object.auth_data;

        let rp_id = match_rp_id(&auth_data.rp_id_hash, &self.expected_rp_id)?;

        if !auth_data.flags.user_present() {
            return Err(Error::UserNotPresent);
        }

        if self.require_user_verification && !auth_data.flags.user_verified() {
            return Err(Error::UserNotVerified);
        }

        let attested = auth_data
            .attested_credential_data
            .as_ref()
            .ok_or(Error::MissingCredentialData)?;

        let alg = i64::from(attested.credential_public_key.alg);
        if !self.supported_algorithms.contains(&alg) {
            return Err(Error::UnsupportedCoseAlgorithm(format!(
                "credential algorithm {} is not one of {:?}",
                alg, self.supported_algorithms
            )));
        }

        let (credential_device_type, credential_backed_up) = classify_backup_flags(auth_data.flags)?;

        let fmt = attestation_object.fmt.parse::<AttestationFormat>()?;
        let client_data_hash = sha256(&raw_client_data);
        let ctx = AttestationContext {
            att_stmt: &attestation_object.att_stmt,
            auth_data,
            raw_auth_data: &attestation_object.raw_auth_data,
            client_data_hash: &client_data_hash,
            trust: &self.trust_store,
            now: self.current_time.unwrap_or_else(OffsetDateTime::now_utc),
            safetynet_require_cts_profile_match: self.safetynet_require_cts_profile_match,
        };

        let result = verify_attestation(fmt, &ctx)?;
        debug!(fmt = %fmt, verified = result.verified, "registration verified");

        let registration_info = result.authenticator_info.map(|info| RegistrationInfo {
            fmt: info.fmt,
            counter: info.counter,
            aaguid: info.aaguid,
            credential_id: info.credential_id,
            credential_public_key: info.credential_public_key,
            credential_type: credential.credential_type.clone(),
            attestation_object: raw_attestation_object.clone(),
            user_verified: auth_data.flags.user_verified(),
            credential_device_type,
            credential_backed_up,
            origin: client_data.origin.clone(),
            rp_id,
            authenticator_extension_results: auth_data.extensions.clone(),
        });

        Ok(VerifiedRegistration {
            verified: result.verified,
            registration_info,
        })
    }
}
