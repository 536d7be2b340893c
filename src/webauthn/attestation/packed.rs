use crate::webauthn::{
    attestation::{certificate_public_key, parse_statement, AttestationContext, AttestationFormat},
    crypto::verify_signature,
    error::{Error, TrustError},
    proto::{constants::PACKED_ATTESTATION_OU, cose::CoseAlgorithmIdentifier, raw_message::AttestedCredentialData},
    trust::{validate_certificate_path, CertificateInfo},
};
use serde_bytes::ByteBuf;
use serde_derive::*;
use tracing::debug;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawPackedStatement {
    alg: i64,
    sig: ByteBuf,
    #[serde(default)]
    x5c: Option<Vec<ByteBuf>>,
    #[serde(default)]
    ecdaa_key_id: Option<ByteBuf>,
}

/// The three shapes a packed statement can take.
#[derive(Debug, Clone, PartialEq)]
pub enum PackedStatement {
    Full {
        alg: CoseAlgorithmIdentifier,
        sig: Vec<u8>,
        x5c: Vec<Vec<u8>>,
    },
    SelfAttestation {
        alg: CoseAlgorithmIdentifier,
        sig: Vec<u8>,
    },
    Ecdaa {
        key_id: Vec<u8>,
    },
}

impl TryFrom<RawPackedStatement> for PackedStatement {
    type Error = Error;

    fn try_from(raw: RawPackedStatement) -> Result<Self, Self::Error> {
        match (raw.x5c, raw.ecdaa_key_id) {
            (Some(_), Some(_)) => Err(Error::InvalidAttestationStatement(
                "packed attStmt carries both x5c and ecdaaKeyId".to_owned(),
            )),
            (None, Some(key_id)) => Ok(PackedStatement::Ecdaa { key_id: key_id.into_vec() }),
            (Some(x5c), None) if !x5c.is_empty() => Ok(PackedStatement::Full {
                alg: CoseAlgorithmIdentifier::try_from(raw.alg)?,
                sig: raw.sig.into_vec(),
                x5c: x5c.into_iter().map(ByteBuf::into_vec).collect(),
            }),
            _ => Ok(PackedStatement::SelfAttestation {
                alg: CoseAlgorithmIdentifier::try_from(raw.alg)?,
                sig: raw.sig.into_vec(),
            }),
        }
    }
}

pub fn verify(ctx: &AttestationContext) -> Result<bool, Error> {
    let raw: RawPackedStatement = parse_statement(ctx.att_stmt, AttestationFormat::Packed)?;
    let credential = ctx.credential()?;

    match PackedStatement::try_from(raw)? {
        PackedStatement::Full { alg, sig, x5c } => {
            debug!("packed full attestation");
            check_attestation_certificate(&CertificateInfo::from_der(&x5c[0])?, credential)?;
            validate_certificate_path(
                &x5c,
                ctx.trust.roots(AttestationFormat::Packed),
                ctx.trust.revocation(),
                ctx.now,
            )?;

            let certificate_key = certificate_public_key(&x5c[0])?;
            verify_signature(alg, &certificate_key, &ctx.signed_data(), &sig)
        }
        PackedStatement::SelfAttestation { alg, sig } => {
            debug!("packed self attestation");
            let credential_key = &credential.credential_public_key;
            if alg != credential_key.alg {
                return Err(Error::InvalidAttestationStatement(format!(
                    "self attestation alg {} does not match credential alg {}",
                    i64::from(alg),
                    i64::from(credential_key.alg)
                )));
            }

            verify_signature(alg, &credential_key.key, &ctx.signed_data(), &sig)
        }
        PackedStatement::Ecdaa { .. } => Err(Error::NotImplemented("ECDAA packed attestation".to_owned())),
    }
}

/// Packed attestation certificate requirements (WebAuthn §8.2.1).
fn check_attestation_certificate(info: &CertificateInfo, credential: &AttestedCredentialData) -> Result<(), Error> {
    if info.version != 3 {
        return Err(TrustError::CertificateVersionInvalid(info.version).into());
    }

    let subject = |key: &str| info.subject.get(key).map(String::as_str).unwrap_or_default();
    if subject("OU") != PACKED_ATTESTATION_OU {
        return Err(TrustError::CertificateSubjectInvalid(format!("OU must be \"{}\"", PACKED_ATTESTATION_OU)).into());
    }
    if subject("CN").is_empty() {
        return Err(TrustError::CertificateSubjectInvalid("CN is missing".to_owned()).into());
    }
    if subject("O").is_empty() {
        return Err(TrustError::CertificateSubjectInvalid("O is missing".to_owned()).into());
    }
    if subject("C").chars().count() != 2 {
        return Err(TrustError::CertificateSubjectInvalid(format!("C \"{}\" is not a country code", subject("C"))).into());
    }

    if info.basic_constraints_ca == Some(true) {
        return Err(TrustError::CertificateIsCa.into());
    }

    if let Some(aaguid) = &info.fido_aaguid {
        if aaguid.as_slice() != credential.aaguid.as_slice() {
            return Err(TrustError::AaguidMismatch.into());
        }
    }

    Ok(())
}
