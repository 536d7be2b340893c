use crate::{base64::decode_lenient, webauthn::error::Error};
use serde_derive::*;

/// JSON form of a credential returned by `navigator.credentials.create()` or `.get()`.
///
/// Every byte field is base64url, decoding happens inside the verifiers.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredential<R> {
    pub id: String,
    pub raw_id: String,
    pub response: R,
    #[serde(rename = "type")]
    pub credential_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<AuthenticatorAttachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extension_results: Option<serde_json::Value>,
}

pub type RegistrationCredential = PublicKeyCredential<AuthenticatorAttestationResponse>;
pub type AuthenticationCredential = PublicKeyCredential<AuthenticatorAssertionResponse>;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorAttestationResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub attestation_object: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transports: Vec<AuthenticatorTransport>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorAssertionResponse {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    pub authenticator_data: String,
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_handle: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub enum AuthenticatorTransport {
    #[serde(rename = "usb")]
    Usb,
    #[serde(rename = "nfc")]
    Nfc,
    #[serde(rename = "ble")]
    BluetoothLE,
    #[serde(rename = "smart-card")]
    SmartCard,
    #[serde(rename = "hybrid")]
    Hybrid,
    #[serde(rename = "internal")]
    Internal,
    #[serde(rename = "cable")]
    Cable,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticatorAttachment {
    Platform,
    #[serde(rename = "cross-platform")]
    CrossPlatform,
}

#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum UserVerificationRequirement {
    Required,
    Preferred,
    Discouraged,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CollectedClientData {
    #[serde(rename = "type")]
    pub request_type: String,
    pub challenge: String,
    pub origin: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cross_origin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_binding: Option<TokenBinding>,
}

impl CollectedClientData {
    /// Decodes the raw `clientDataJSON` bytes. Any failure yields [`Error::InvalidClientDataJson`].
    pub fn from_slice(raw: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(raw).map_err(|e| Error::InvalidClientDataJson(e.to_string()))
    }

    /// Decodes the base64url `clientDataJSON` field of a credential response.
    pub fn from_base64url(encoded: &str) -> Result<Self, Error> {
        let raw = decode_lenient(encoded).map_err(|e| Error::InvalidClientDataJson(e.to_string()))?;
        Self::from_slice(&raw)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TokenBinding {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenBindingStatus {
    Present,
    Supported,
    NotSupported,
}

impl TokenBinding {
    pub fn status(&self) -> Result<TokenBindingStatus, Error> {
        match self.status.as_str() {
            "present" => Ok(TokenBindingStatus::Present),
            "supported" => Ok(TokenBindingStatus::Supported),
            "not-supported" => Ok(TokenBindingStatus::NotSupported),
            other => Err(Error::InvalidTokenBinding(other.to_owned())),
        }
    }
}

#[test]
fn test_client_data_from_base64url() {
    let client_data = CollectedClientData::from_base64url(
        "eyJjaGFsbGVuZ2UiOiItUmk1TlpUeko4YjZtdlczVFZTY0xvdEVvQUxmZ0JhMkJuNFlTYUlPYkhjIiwib3JpZ2luIjoiaHR0cHM6Ly93ZWJhdXRobi5pbyIsInR5cGUiOiJ3ZWJhdXRobi5jcmVhdGUifQ",
    )
    .unwrap();
    assert_eq!(client_data.request_type, "webauthn.create");
    assert_eq!(client_data.challenge, "-Ri5NZTzJ8b6mvW3TVScLotEoALfgBa2Bn4YSaIObHc");
    assert_eq!(client_data.origin, "https://webauthn.io");
    assert!(!client_data.cross_origin);
    assert!(client_data.token_binding.is_none());
}

#[test]
fn test_client_data_rejects_garbage() {
    assert!(matches!(
        CollectedClientData::from_base64url("!!!"),
        Err(Error::InvalidClientDataJson(_))
    ));
    // base64url of `{"type":"webauthn.get"}` without challenge and origin
    assert!(matches!(
        CollectedClientData::from_base64url("eyJ0eXBlIjoid2ViYXV0aG4uZ2V0In0"),
        Err(Error::InvalidClientDataJson(_))
    ));
}

#[test]
fn test_token_binding_status() {
    let raw = br#"{"type":"webauthn.get","challenge":"abc","origin":"https://example.com","tokenBinding":{"status":"present","id":"aWQ"}}"#;
    let client_data = CollectedClientData::from_slice(raw).unwrap();
    let token_binding = client_data.token_binding.unwrap();
    assert_eq!(token_binding.status().unwrap(), TokenBindingStatus::Present);

    let unknown = TokenBinding {
        status: "bogus".to_owned(),
        id: None,
    };
    assert!(matches!(unknown.status(), Err(Error::InvalidTokenBinding(_))));
}

#[test]
fn test_credential_json_shape() {
    let json = r#"{
        "id": "abc",
        "rawId": "abc",
        "type": "public-key",
        "response": {
            "clientDataJSON": "e30",
            "authenticatorData": "AAAA",
            "signature": "AAAA"
        },
        "clientExtensionResults": {}
    }"#;
    let credential: AuthenticationCredential = serde_json::from_str(json).unwrap();
    assert_eq!(credential.credential_type, "public-key");
    assert!(credential.response.user_handle.is_none());
    assert!(credential.authenticator_attachment.is_none());
}
