use crate::{
    base64::{decode_lenient, Engine, BASE64},
    webauthn::{
        attestation::{certificate_public_key, leaf_certificate, parse_statement, AttestationContext, AttestationFormat},
        crypto::{sha256, verify_signature},
        error::{Error, TrustError},
        proto::{
            constants::{SAFETYNET_CLOCK_SKEW_MS, SAFETYNET_HOSTNAME},
            cose::CoseAlgorithmIdentifier,
        },
        trust::{validate_certificate_path, CertificateInfo},
    },
};
use serde_bytes::ByteBuf;
use serde_derive::*;
use time::OffsetDateTime;
use tracing::{debug, warn};
use webpki::{EndEntityCert, SignatureAlgorithm, Time, TlsServerTrustAnchors, TrustAnchor};

static SAFETYNET_SIGNATURE_ALGORITHMS: &[&SignatureAlgorithm] = &[
    &webpki::RSA_PKCS1_2048_8192_SHA256,
    &webpki::RSA_PKCS1_2048_8192_SHA384,
    &webpki::RSA_PKCS1_2048_8192_SHA512,
    &webpki::RSA_PKCS1_3072_8192_SHA384,
    &webpki::ECDSA_P256_SHA256,
    &webpki::ECDSA_P256_SHA384,
    &webpki::ECDSA_P384_SHA256,
    &webpki::ECDSA_P384_SHA384,
];

#[derive(Deserialize, Debug)]
struct SafetyNetStatement {
    ver: String,
    response: ByteBuf,
}

#[derive(Deserialize, Debug)]
struct JwsHeader {
    alg: String,
    x5c: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SafetyNetPayload {
    pub nonce: String,
    pub timestamp_ms: i64,
    #[serde(default)]
    pub apk_package_name: Option<String>,
    #[serde(default)]
    pub cts_profile_match: bool,
    #[serde(default)]
    pub basic_integrity: bool,
}

/// Splits a compact JWS into its decoded header, payload, signature and the signed `header.payload` bytes.
fn split_jws(response: &[u8]) -> Result<(JwsHeader, SafetyNetPayload, Vec<u8>, Vec<u8>), Error> {
    let jws = std::str::from_utf8(response)
        .map_err(|_| Error::InvalidAttestationStatement("SafetyNet response is not UTF-8".to_owned()))?;

    let parts = jws.split('.').collect::<Vec<_>>();
    let (header, payload, signature) = match parts.as_slice() {
        [header, payload, signature] => (*header, *payload, *signature),
        _ => {
            return Err(Error::InvalidAttestationStatement(
                "SafetyNet response is not a compact JWS".to_owned(),
            ))
        }
    };

    let decoded_header = serde_json::from_slice(&decode_lenient(header)?)
        .map_err(|e| Error::InvalidAttestationStatement(format!("SafetyNet JWS header: {}", e)))?;
    let decoded_payload = serde_json::from_slice(&decode_lenient(payload)?)
        .map_err(|e| Error::InvalidAttestationStatement(format!("SafetyNet JWS payload: {}", e)))?;
    let signature = decode_lenient(signature)?;
    let signed = format!("{}.{}", header, payload).into_bytes();

    Ok((decoded_header, decoded_payload, signature, signed))
}

fn jws_algorithm(alg: &str) -> Result<CoseAlgorithmIdentifier, Error> {
    match alg {
        "RS256" => Ok(CoseAlgorithmIdentifier::RS256),
        "RS384" => Ok(CoseAlgorithmIdentifier::RS384),
        "RS512" => Ok(CoseAlgorithmIdentifier::RS512),
        "PS256" => Ok(CoseAlgorithmIdentifier::PS256),
        "PS384" => Ok(CoseAlgorithmIdentifier::PS384),
        "PS512" => Ok(CoseAlgorithmIdentifier::PS512),
        other => Err(Error::UnsupportedCoseAlgorithm(format!("SafetyNet JWS alg {}", other))),
    }
}

/// Chains the JWS certificates to a configured root as a TLS server certificate would be.
fn verify_tls_chain(x5c: &[Vec<u8>], roots: &[Vec<u8>], now: OffsetDateTime) -> Result<(), Error> {
    let anchors = roots
        .iter()
        .map(|der| TrustAnchor::try_from_cert_der(der))
        .collect::<Result<Vec<_>, _>>()?;
    let intermediates = x5c.iter().skip(1).map(Vec::as_slice).collect::<Vec<_>>();
    let leaf = EndEntityCert::try_from(leaf_certificate(x5c)?)?;
    let time = Time::from_seconds_since_unix_epoch(now.unix_timestamp().max(0) as u64);

    leaf.verify_is_valid_tls_server_cert(
        SAFETYNET_SIGNATURE_ALGORITHMS,
        &TlsServerTrustAnchors(&anchors),
        &intermediates,
        time,
    )?;

    Ok(())
}

pub fn verify(ctx: &AttestationContext) -> Result<bool, Error> {
    let stmt: SafetyNetStatement = parse_statement(ctx.att_stmt, AttestationFormat::AndroidSafetyNet)?;
    debug!(ver = %stmt.ver, "android-safetynet attestation");

    let (header, payload, signature, signed) = split_jws(&stmt.response)?;

    let nonce = decode_lenient(&payload.nonce)?;
    if nonce != sha256(&ctx.signed_data()) {
        return Err(TrustError::NonceMismatch.into());
    }

    let now_ms = (ctx.now.unix_timestamp_nanos() / 1_000_000) as i64;
    if payload.timestamp_ms > now_ms + SAFETYNET_CLOCK_SKEW_MS {
        return Err(TrustError::TimestampInFuture(payload.timestamp_ms).into());
    }

    if ctx.safetynet_require_cts_profile_match && !payload.cts_profile_match {
        return Err(TrustError::CtsProfileMismatch.into());
    }

    let x5c = header
        .x5c
        .iter()
        .map(|cert| BASE64.decode(cert))
        .collect::<Result<Vec<_>, _>>()?;
    let leaf = leaf_certificate(&x5c)?;

    let leaf_info = CertificateInfo::from_der(leaf)?;
    let common_name = leaf_info.subject.get("CN").cloned().unwrap_or_default();
    if common_name != SAFETYNET_HOSTNAME {
        return Err(TrustError::HostnameMismatch(common_name).into());
    }

    let roots = ctx.trust.roots(AttestationFormat::AndroidSafetyNet);
    if roots.is_empty() {
        warn!("no SafetyNet root configured, refusing the attestation");
        return Err(TrustError::UntrustedRoot.into());
    }

    validate_certificate_path(&x5c, roots, ctx.trust.revocation(), ctx.now)?;
    verify_tls_chain(&x5c, roots, ctx.now)?;

    let alg = jws_algorithm(&header.alg)?;
    let certificate_key = certificate_public_key(leaf)?;
    verify_signature(alg, &certificate_key, &signed, &signature)
}
