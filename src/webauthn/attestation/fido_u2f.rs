use crate::webauthn::{
    attestation::{certificate_public_key, leaf_certificate, parse_statement, AttestationContext, AttestationFormat},
    crypto::verify_signature,
    error::Error,
    proto::cose::{CoseAlgorithmIdentifier, EllipticCurve, PublicKeyMaterial},
    trust::validate_certificate_path,
};
use serde_bytes::ByteBuf;
use serde_derive::*;

#[derive(Deserialize, Debug)]
struct FidoU2fStatement {
    sig: ByteBuf,
    x5c: Vec<ByteBuf>,
}

/// Legacy U2F attestation: ES256 over `0x00 || rpIdHash || clientDataHash || credentialId || publicKeyU2F`.
pub fn verify(ctx: &AttestationContext) -> Result<bool, Error> {
    let credential = ctx.credential()?;
    let stmt: FidoU2fStatement = parse_statement(ctx.att_stmt, AttestationFormat::FidoU2f)?;
    let x5c = stmt.x5c.into_iter().map(ByteBuf::into_vec).collect::<Vec<_>>();
    let leaf = leaf_certificate(&x5c)?;

    let public_key_u2f = match &credential.credential_public_key.key {
        key @ PublicKeyMaterial::Ec2 {
            curve: EllipticCurve::P256,
            ..
        } => key.uncompressed_point(),
        _ => None,
    }
    .ok_or_else(|| Error::UnsupportedCoseAlgorithm("fido-u2f requires a P-256 credential key".to_owned()))?;

    validate_certificate_path(
        &x5c,
        ctx.trust.roots(AttestationFormat::FidoU2f),
        ctx.trust.revocation(),
        ctx.now,
    )?;

    let mut verification_data = Vec::with_capacity(1 + 32 + ctx.client_data_hash.len() + credential.credential_id.len() + 65);
    verification_data.push(0x00);
    verification_data.extend_from_slice(&ctx.auth_data.rp_id_hash);
    verification_data.extend_from_slice(ctx.client_data_hash);
    verification_data.extend_from_slice(&credential.credential_id);
    verification_data.extend_from_slice(&public_key_u2f);

    let certificate_key = certificate_public_key(leaf)?;
    verify_signature(CoseAlgorithmIdentifier::ES256, &certificate_key, &verification_data, &stmt.sig)
}
