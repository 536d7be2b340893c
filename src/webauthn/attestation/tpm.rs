use crate::webauthn::{
    attestation::{certificate_public_key, parse_statement, AttestationContext, AttestationFormat},
    crypto::{digest_for, strip_leading_zeros, verify_signature},
    error::{Error, TpmError, TrustError},
    proto::{
        constants::{TCG_KP_AIK_CERTIFICATE, TPM_GENERATED_VALUE, TPM_ST_ATTEST_CERTIFY},
        cose::{CoseAlgorithmIdentifier, CredentialPublicKey, PublicKeyMaterial},
        raw_message::AttestedCredentialData,
        tpm::{CertInfo, PublicArea, PublicParameters, PublicUnique, TpmVendor},
    },
    trust::{validate_certificate_path, CertificateInfo},
};
use serde_bytes::ByteBuf;
use serde_derive::*;
use tracing::{debug, trace};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TpmStatement {
    ver: String,
    alg: i64,
    #[serde(default)]
    x5c: Option<Vec<ByteBuf>>,
    #[serde(default)]
    ecdaa_key_id: Option<ByteBuf>,
    sig: ByteBuf,
    cert_info: ByteBuf,
    pub_area: ByteBuf,
}

pub fn verify(ctx: &AttestationContext) -> Result<bool, Error> {
    let credential = ctx.credential()?;
    let stmt: TpmStatement = parse_statement(ctx.att_stmt, AttestationFormat::Tpm)?;

    if stmt.ver != "2.0" {
        return Err(TpmError::AttestationVersionNotSupported.into());
    }

    let alg = CoseAlgorithmIdentifier::try_from(stmt.alg).map_err(|_| TpmError::AlgorithmNotSupported(stmt.alg))?;

    if stmt.ecdaa_key_id.is_some() {
        return Err(Error::NotImplemented("ECDAA TPM attestation".to_owned()));
    }

    let x5c = stmt
        .x5c
        .filter(|x5c| !x5c.is_empty())
        .ok_or(TpmError::CertificateMissing)?
        .into_iter()
        .map(ByteBuf::into_vec)
        .collect::<Vec<_>>();

    let pub_area = PublicArea::from_slice(&stmt.pub_area)?;
    trace!(?pub_area, "tpm pubArea");
    verify_public_area(&pub_area, &credential.credential_public_key)?;

    let cert_info = CertInfo::from_slice(&stmt.cert_info)?;
    trace!(?cert_info, "tpm certInfo");
    verify_cert_info(&cert_info, &stmt.pub_area, &digest_for(alg, &ctx.signed_data()))?;

    verify_aik_certificate(&CertificateInfo::from_der(&x5c[0])?, credential)?;
    validate_certificate_path(&x5c, ctx.trust.roots(AttestationFormat::Tpm), ctx.trust.revocation(), ctx.now)?;

    let aik_key = certificate_public_key(&x5c[0])?;
    verify_signature(alg, &aik_key, &stmt.cert_info, &stmt.sig)
}

/// The key the TPM certified must be the credential public key.
fn verify_public_area(pub_area: &PublicArea, credential_key: &CredentialPublicKey) -> Result<(), Error> {
    let alg = i64::from(credential_key.alg);

    match (&pub_area.parameters, &pub_area.unique, &credential_key.key) {
        (PublicParameters::Rsa { exponent, .. }, PublicUnique::Rsa(modulus), PublicKeyMaterial::Rsa { n, e }) => {
            let exponent = if *exponent == 0 { 65537u32 } else { *exponent }.to_be_bytes();
            if strip_leading_zeros(modulus) != strip_leading_zeros(n) || strip_leading_zeros(&exponent) != strip_leading_zeros(e) {
                return Err(TpmError::PublicKeyParametersMismatch(alg).into());
            }
        }
        (PublicParameters::Ecc { curve_id, .. }, PublicUnique::Ecc { x, y }, PublicKeyMaterial::Ec2 { curve, x: cx, y: cy }) => {
            if !curve_id.matches(*curve) {
                return Err(TpmError::PublicKeyParametersMismatch(alg).into());
            }
            if x != cx || y != cy {
                return Err(TpmError::PublicKeyCoordinatesMismatch.into());
            }
        }
        _ => return Err(TpmError::PubAreaMismatch.into()),
    }

    Ok(())
}

fn verify_cert_info(cert_info: &CertInfo, raw_pub_area: &[u8], att_to_be_signed: &[u8]) -> Result<(), Error> {
    if cert_info.magic != TPM_GENERATED_VALUE {
        return Err(TpmError::MagicInvalid.into());
    }

    if cert_info.attestation_type != TPM_ST_ATTEST_CERTIFY {
        return Err(TpmError::AttestationTypeInvalid.into());
    }

    if cert_info.extra_data != att_to_be_signed {
        return Err(TpmError::AttToBeSignedMismatch.into());
    }

    let name_alg = cert_info.attested_name_alg()?;
    let digest = name_alg
        .digest(raw_pub_area)
        .ok_or_else(|| TpmError::PubAreaHashUnknown(u16::from(name_alg)))?;

    let mut expected_name = u16::from(name_alg).to_be_bytes().to_vec();
    expected_name.extend_from_slice(&digest);
    if cert_info.attested_name != expected_name {
        return Err(TpmError::AttestedNamePubAreaMismatch.into());
    }

    Ok(())
}

/// AIK certificate requirements (WebAuthn §8.3.1).
fn verify_aik_certificate(info: &CertificateInfo, credential: &AttestedCredentialData) -> Result<(), Error> {
    if info.version != 3 {
        return Err(TpmError::CertificateVersionInvalid.into());
    }

    if !info.subject.is_empty() {
        return Err(TpmError::CertificateSubjectInvalid.into());
    }

    let tpm = info.tpm.as_ref().ok_or_else(|| {
        TpmError::CertificateExtensionRequirementNotMet("Subject Alternative Name".to_owned())
    })?;
    if !tpm.critical {
        return Err(TpmError::CertificateExtensionNotCritical.into());
    }
    let vendor = TpmVendor::from_attribute(&tpm.manufacturer)?;
    debug!(?vendor, model = %tpm.model, version = %tpm.version, "tpm attestation identity");

    if !info.extended_key_usage.contains(&TCG_KP_AIK_CERTIFICATE.to_id_string()) {
        return Err(TpmError::CertificateRequirementNotMet("Extended Key Usage".to_owned()).into());
    }

    if info.basic_constraints_ca == Some(true) {
        return Err(TpmError::CertificateRequirementNotMet("Basic Constraints".to_owned()).into());
    }

    if let Some(aaguid) = &info.fido_aaguid {
        if aaguid.as_slice() != credential.aaguid.as_slice() {
            return Err(TrustError::AaguidMismatch.into());
        }
    }

    Ok(())
}
