use crate::{
    base64::decode_lenient,
    webauthn::{
        error::Error,
        proto::{
            codec::{decode_cbor_item, into_text_keyed},
            constants::{
                WEBAUTHN_ATTESTED_CREDENTIAL_DATA_FLAG, WEBAUTHN_AUTH_DATA_MIN_LENGTH, WEBAUTHN_BACKUP_ELIGIBLE_FLAG,
                WEBAUTHN_BACKUP_STATE_FLAG, WEBAUTHN_EXTENSION_DATA_FLAG, WEBAUTHN_USER_PRESENT_FLAG, WEBAUTHN_USER_VERIFIED_FLAG,
            },
            cose::CredentialPublicKey,
            reader::ByteReader,
        },
    },
};
use serde_cbor::Value;
use serde_derive::*;
use std::collections::BTreeMap;
use tracing::trace;
use uuid::Uuid;

/// Decoded authenticator extension outputs, keyed by extension identifier.
pub type AuthenticatorExtensionResults = BTreeMap<String, Value>;

pub trait Message {
    fn from_bytes(raw_values: &[u8]) -> Result<Self, Error>
    where
        Self: Sized;

    fn from_base64url(string: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let raw_values = decode_lenient(string)?;
        Self::from_bytes(raw_values.as_slice())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AuthenticatorFlags(pub u8);

impl AuthenticatorFlags {
    pub fn user_present(&self) -> bool {
        self.0 & WEBAUTHN_USER_PRESENT_FLAG != 0
    }

    pub fn user_verified(&self) -> bool {
        self.0 & WEBAUTHN_USER_VERIFIED_FLAG != 0
    }

    pub fn backup_eligible(&self) -> bool {
        self.0 & WEBAUTHN_BACKUP_ELIGIBLE_FLAG != 0
    }

    pub fn backup_state(&self) -> bool {
        self.0 & WEBAUTHN_BACKUP_STATE_FLAG != 0
    }

    pub fn attested_credential_data(&self) -> bool {
        self.0 & WEBAUTHN_ATTESTED_CREDENTIAL_DATA_FLAG != 0
    }

    pub fn extension_data(&self) -> bool {
        self.0 & WEBAUTHN_EXTENSION_DATA_FLAG != 0
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialDeviceType {
    #[serde(rename = "singleDevice")]
    SingleDevice,
    #[serde(rename = "multiDevice")]
    MultiDevice,
}

/// Maps the BE/BS flag pair to the device type and backed up state.
pub fn classify_backup_flags(flags: AuthenticatorFlags) -> Result<(CredentialDeviceType, bool), Error> {
    match (flags.backup_eligible(), flags.backup_state()) {
        (false, false) => Ok((CredentialDeviceType::SingleDevice, false)),
        (true, false) => Ok((CredentialDeviceType::MultiDevice, false)),
        (true, true) => Ok((CredentialDeviceType::MultiDevice, true)),
        (false, true) => Err(Error::InvalidBackupFlags),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttestedCredentialData {
    pub aaguid: [u8; 16],
    pub credential_id: Vec<u8>,
    pub credential_public_key: CredentialPublicKey,
    /// COSE encoding exactly as it appeared in the authenticator data.
    pub credential_public_key_bytes: Vec<u8>,
}

impl AttestedCredentialData {
    pub fn aaguid(&self) -> Uuid {
        Uuid::from_bytes(self.aaguid)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatorData {
    pub rp_id_hash: [u8; 32],
    pub flags: AuthenticatorFlags,
    pub sign_count: u32,
    pub attested_credential_data: Option<AttestedCredentialData>,
    pub extensions: Option<AuthenticatorExtensionResults>,
}

impl AuthenticatorData {
    pub fn from_slice(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() < WEBAUTHN_AUTH_DATA_MIN_LENGTH {
            return Err(Error::MalformedAuthData(format!(
                "expected at least {} bytes, got {}",
                WEBAUTHN_AUTH_DATA_MIN_LENGTH,
                buf.len()
            )));
        }

        let malformed = |e: Error| Error::MalformedAuthData(e.to_string());
        let mut reader = ByteReader::new(buf);

        let rp_id_hash = reader.read_array::<32>().map_err(malformed)?;
        let flags = AuthenticatorFlags(reader.read_u8().map_err(malformed)?);
        let sign_count = reader.read_u32().map_err(malformed)?;

        let attested_credential_data = if flags.attested_credential_data() {
            let aaguid = reader.read_array::<16>().map_err(malformed)?;
            let credential_id = reader.read_sized_u16().map_err(malformed)?.to_vec();

            let (value, consumed) = decode_cbor_item(reader.peek_remaining()).map_err(malformed)?;
            let credential_public_key_bytes = reader.read_bytes(consumed).map_err(malformed)?.to_vec();
            let credential_public_key = CredentialPublicKey::from_cose_value(&value)?;

            Some(AttestedCredentialData {
                aaguid,
                credential_id,
                credential_public_key,
                credential_public_key_bytes,
            })
        } else {
            None
        };

        let extensions = if flags.extension_data() {
            let (value, consumed) = decode_cbor_item(reader.peek_remaining()).map_err(malformed)?;
            reader.skip(consumed).map_err(malformed)?;
            Some(into_text_keyed(value, "extension data").map_err(malformed)?)
        } else {
            None
        };

        if !reader.is_empty() {
            return Err(Error::MalformedAuthData(format!(
                "{} unexpected trailing bytes at offset {}",
                reader.remaining(),
                reader.position()
            )));
        }

        trace!(flags = flags.0, sign_count, "decoded authenticator data");

        Ok(AuthenticatorData {
            rp_id_hash,
            flags,
            sign_count,
            attested_credential_data,
            extensions,
        })
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, Error> {
        let mut vec = Vec::with_capacity(WEBAUTHN_AUTH_DATA_MIN_LENGTH);
        vec.extend_from_slice(&self.rp_id_hash);
        vec.push(self.flags.0);
        vec.extend_from_slice(&self.sign_count.to_be_bytes());

        if let Some(data) = &self.attested_credential_data {
            vec.extend_from_slice(&data.aaguid);
            let len = u16::try_from(data.credential_id.len())
                .map_err(|_| Error::Other("credential id does not fit in 16 bits".to_owned()))?;
            vec.extend_from_slice(&len.to_be_bytes());
            vec.extend_from_slice(&data.credential_id);
            vec.extend_from_slice(&data.credential_public_key_bytes);
        }

        if let Some(extensions) = &self.extensions {
            vec.extend_from_slice(&serde_cbor::to_vec(extensions)?);
        }

        Ok(vec)
    }
}

impl Message for AuthenticatorData {
    fn from_bytes(raw_values: &[u8]) -> Result<Self, Error> {
        Self::from_slice(raw_values)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
struct RawAttestationObject {
    #[serde(with = "serde_bytes")]
    auth_data: Vec<u8>,
    fmt: String,
    att_stmt: Value,
}

#[derive(Clone, Debug)]
pub struct AttestationObject {
    pub fmt: String,
    pub att_stmt: BTreeMap<String, Value>,
    pub raw_auth_data: Vec<u8>,
    pub auth_data: AuthenticatorData,
}

impl Message for AttestationObject {
    fn from_bytes(raw_values: &[u8]) -> Result<Self, Error> {
        let value = serde_cbor::from_slice::<RawAttestationObject>(raw_values)?;
        let auth_data = AuthenticatorData::from_slice(&value.auth_data)?;
        let att_stmt = into_text_keyed(value.att_stmt, "attStmt")?;

        Ok(AttestationObject {
            fmt: value.fmt,
            att_stmt,
            raw_auth_data: value.auth_data,
            auth_data,
        })
    }
}
