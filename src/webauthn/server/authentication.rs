use crate::{
    base64::decode_lenient,
    webauthn::{
        crypto::{sha256, verify_signature},
        error::Error,
        proto::{
            constants::WEBAUTHN_REQUEST_TYPE_GET,
            cose::CredentialPublicKey,
            raw_message::{classify_backup_flags, AuthenticatorData, AuthenticatorExtensionResults, CredentialDeviceType},
            web_message::{AuthenticationCredential, AuthenticatorTransport, CollectedClientData, UserVerificationRequirement},
        },
        server::{check_client_data, check_credential_id, check_credential_type, match_rp_id, Expected, ExpectedChallenge},
    },
};
use serde_derive::*;
use tracing::{debug, warn};

/// A credential as the relying party persisted it at registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredAuthenticator {
    #[serde(rename = "credentialID", with = "serde_bytes")]
    pub credential_id: Vec<u8>,
    /// COSE encoded, as returned in the registration info.
    #[serde(with = "serde_bytes")]
    pub credential_public_key: Vec<u8>,
    pub counter: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transports: Vec<AuthenticatorTransport>,
}

/// FIDO conformance rules that replace the default user presence and verification checks.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedFidoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<UserVerificationRequirement>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationInfo {
    #[serde(rename = "credentialID", with = "serde_bytes")]
    pub credential_id: Vec<u8>,
    /// Counter the caller should store on its authenticator record.
    pub new_counter: u32,
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
pub struct VerifiedAuthentication {
    pub verified: bool,
    pub authentication_info: AuthenticationInfo,
}

/// Verifies the response to a credential request against a stored authenticator.
#[derive(Clone, Debug)]
pub struct CredentialRequestVerifier {
    credential: AuthenticationCredential,
    expected_challenge: ExpectedChallenge,
    expected_origin: Expected<String>,
    expected_rp_id: Expected<String>,
    authenticator: StoredAuthenticator,
    require_user_verification: bool,
    advanced_fido_config: Option<AdvancedFidoConfig>,
}

impl CredentialRequestVerifier {
    pub fn new(
        credential: AuthenticationCredential,
        expected_challenge: impl Into<ExpectedChallenge>,
        expected_origin: impl Into<Expected<String>>,
        expected_rp_id: impl Into<Expected<String>>,
        authenticator: StoredAuthenticator,
    ) -> Self {
        CredentialRequestVerifier {
            credential,
            expected_challenge: expected_challenge.into(),
            expected_origin: expected_origin.into(),
            expected_rp_id: expected_rp_id.into(),
            authenticator,
            require_user_verification: true,
            advanced_fido_config: None,
        }
    }

    pub fn require_user_verification(mut self, require: bool) -> Self {
        self.require_user_verification = require;
        self
    }

    pub fn advanced_fido_config(mut self, config: AdvancedFidoConfig) -> Self {
        self.advanced_fido_config = Some(config);
        self
    }

    pub fn verify(&self) -> Result<VerifiedAuthentication, Error> {
        let credential = &self.credential;
        check_credential_id(&credential.id, &credential.raw_id)?;
        check_credential_type(&credential.credential_type)?;

        let raw_client_data =
            decode_lenient(&credential.response.client_data_json).map_err(|e| Error::InvalidClientDataJson(e.to_string()))?;
        let client_data = CollectedClientData::from_slice(&raw_client_data)?;
        check_client_data(
            &client_data,
            WEBAUTHN_REQUEST_TYPE_GET,
            &self.expected_challenge,
            &self.expected_origin,
        )?;

        let raw_auth_data = decode_lenient(&credential.response.authenticator_data)
            .map_err(|e| Error::MalformedAuthData(format!("authenticatorData is not base64url: {}", e)))?;
        let signature = decode_lenient(&credential.response.signature)?;
        let auth_data = AuthenticatorData::from_slice(&raw_auth_data)?;

        let rp_id = match_rp_id(&auth_data.rp_id_hash, &self.expected_rp_id)?;

        self.check_user_flags(&auth_data)?;
        self.check_counter(auth_data.sign_count)?;

        let public_key = CredentialPublicKey::from_cose_bytes(&self.authenticator.credential_public_key)?;
        let mut signed_data = raw_auth_data.clone();
        signed_data.extend_from_slice(&sha256(&raw_client_data));
        let verified = verify_signature(public_key.alg, &public_key.key, &signed_data, &signature)?;
        debug!(verified, counter = auth_data.sign_count, "assertion verified");

        let (credential_device_type, credential_backed_up) = classify_backup_flags(auth_data.flags)?;

        Ok(VerifiedAuthentication {
            verified,
            authentication_info: AuthenticationInfo {
                credential_id: self.authenticator.credential_id.clone(),
                new_counter: auth_data.sign_count,
                user_verified: auth_data.flags.user_verified(),
                credential_device_type,
                credential_backed_up,
                origin: client_data.origin,
                rp_id,
                authenticator_extension_results: auth_data.extensions,
            },
        })
    }

    fn check_user_flags(&self, auth_data: &AuthenticatorData) -> Result<(), Error> {
        let flags = auth_data.flags;

        match self.advanced_fido_config.as_ref().and_then(|c| c.user_verification.as_ref()) {
            Some(UserVerificationRequirement::Required) => {
                if !flags.user_verified() {
                    return Err(Error::UserNotVerified);
                }
            }
            Some(UserVerificationRequirement::Preferred) | Some(UserVerificationRequirement::Discouraged) => {}
            None => {
                if !flags.user_present() {
                    return Err(Error::UserNotPresent);
                }
                if self.require_user_verification && !flags.user_verified() {
                    return Err(Error::UserNotVerified);
                }
            }
        }

        Ok(())
    }

    /// Counters that both stay at zero are not tracked by the authenticator.
    fn check_counter(&self, received: u32) -> Result<(), Error> {
        let stored = self.authenticator.counter;
        if (received > 0 || stored > 0) && received <= stored {
            warn!(stored, received, "signature counter did not increase, the authenticator may be cloned");
            return Err(Error::CounterRollback { stored, received });
        }
        Ok(())
    }
}
