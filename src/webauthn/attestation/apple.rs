use crate::webauthn::{
    attestation::{leaf_certificate, parse_statement, AttestationContext, AttestationFormat},
    crypto::{public_key_from_spki, sha256},
    error::{Error, TrustError},
    proto::{
        codec::{unwrap_der_path, DER_TAG_CONTEXT_1, DER_TAG_OCTET_STRING, DER_TAG_SEQUENCE},
        constants::APPLE_NONCE_EXTENSION,
    },
    trust::validate_certificate_path,
};
use serde_bytes::ByteBuf;
use serde_derive::*;
use x509_parser::{certificate::X509Certificate, prelude::FromDer};

#[derive(Deserialize, Debug)]
struct AppleStatement {
    x5c: Vec<ByteBuf>,
}

/// Apple anonymous attestation. There is no signature: the nonce extension of the leaf binds the
/// certificate to this registration and the leaf key must be the credential key.
pub fn verify(ctx: &AttestationContext) -> Result<bool, Error> {
    let credential = ctx.credential()?;
    let stmt: AppleStatement = parse_statement(ctx.att_stmt, AttestationFormat::Apple)?;
    let x5c = stmt.x5c.into_iter().map(ByteBuf::into_vec).collect::<Vec<_>>();
    let (_, leaf) = X509Certificate::from_der(leaf_certificate(&x5c)?)?;

    let extension = leaf
        .extensions()
        .iter()
        .find(|ext| ext.oid == *APPLE_NONCE_EXTENSION)
        .ok_or_else(|| Error::InvalidAttestationStatement("apple certificate has no nonce extension".to_owned()))?;

    // SEQUENCE { [1] { OCTET STRING nonce } }
    let nonce = unwrap_der_path(extension.value, &[DER_TAG_SEQUENCE, DER_TAG_CONTEXT_1, DER_TAG_OCTET_STRING])?;
    if nonce != sha256(&ctx.signed_data()).as_slice() {
        return Err(TrustError::NonceMismatch.into());
    }

    if public_key_from_spki(leaf.public_key())? != credential.credential_public_key.key {
        return Err(TrustError::PublicKeyMismatch.into());
    }

    validate_certificate_path(
        &x5c,
        ctx.trust.roots(AttestationFormat::Apple),
        ctx.trust.revocation(),
        ctx.now,
    )?;

    Ok(true)
}
