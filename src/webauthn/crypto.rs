use crate::webauthn::{
    error::Error,
    proto::{
        constants::OID_ED25519,
        cose::{CoseAlgorithmIdentifier, EllipticCurve, PublicKeyMaterial},
    },
};
use ed25519_dalek::Verifier as _;
use p521::ecdsa::signature::Verifier as _;
use ring::signature::{self, RsaParameters, RsaPublicKeyComponents, UnparsedPublicKey, VerificationAlgorithm};
use rsa::{BigUint, Pkcs1v15Sign, RsaPublicKey};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::debug;
use x509_parser::{prelude::SubjectPublicKeyInfo, public_key::PublicKey};

pub fn sha256(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}

/// Hashes `data` with the digest paired with `alg`.
pub fn digest_for(alg: CoseAlgorithmIdentifier, data: &[u8]) -> Vec<u8> {
    use CoseAlgorithmIdentifier::*;
    match alg {
        ES256 | PS256 | RS256 => Sha256::digest(data).to_vec(),
        ES384 | PS384 | RS384 => Sha384::digest(data).to_vec(),
        ES512 | PS512 | RS512 | EdDSA => Sha512::digest(data).to_vec(),
        RS1 => Sha1::digest(data).to_vec(),
    }
}

/// Verifies `signature` over `message`.
///
/// `Ok(false)` means the inputs were well formed but the signature does not verify. Keys that cannot
/// be used with `alg` are an error.
pub fn verify_signature(
    alg: CoseAlgorithmIdentifier,
    key: &PublicKeyMaterial,
    message: &[u8],
    signature: &[u8],
) -> Result<bool, Error> {
    use CoseAlgorithmIdentifier::*;

    let verified = match (alg, key) {
        (ES256, PublicKeyMaterial::Ec2 { curve: EllipticCurve::P256, .. }) => {
            verify_ring(&signature::ECDSA_P256_SHA256_ASN1, &uncompressed(key)?, message, signature)
        }
        (ES384, PublicKeyMaterial::Ec2 { curve: EllipticCurve::P384, .. }) => {
            verify_ring(&signature::ECDSA_P384_SHA384_ASN1, &uncompressed(key)?, message, signature)
        }
        (ES512, PublicKeyMaterial::Ec2 { curve: EllipticCurve::P521, .. }) => verify_p521(&uncompressed(key)?, message, signature)?,
        (EdDSA, PublicKeyMaterial::Okp { curve: EllipticCurve::Ed25519, x }) => verify_ed25519(x, message, signature)?,
        (RS256, PublicKeyMaterial::Rsa { n, e }) => verify_rsa(&signature::RSA_PKCS1_2048_8192_SHA256, n, e, message, signature),
        (RS384, PublicKeyMaterial::Rsa { n, e }) => verify_rsa(&signature::RSA_PKCS1_2048_8192_SHA384, n, e, message, signature),
        (RS512, PublicKeyMaterial::Rsa { n, e }) => verify_rsa(&signature::RSA_PKCS1_2048_8192_SHA512, n, e, message, signature),
        (PS256, PublicKeyMaterial::Rsa { n, e }) => verify_rsa(&signature::RSA_PSS_2048_8192_SHA256, n, e, message, signature),
        (PS384, PublicKeyMaterial::Rsa { n, e }) => verify_rsa(&signature::RSA_PSS_2048_8192_SHA384, n, e, message, signature),
        (PS512, PublicKeyMaterial::Rsa { n, e }) => verify_rsa(&signature::RSA_PSS_2048_8192_SHA512, n, e, message, signature),
        (RS1, PublicKeyMaterial::Rsa { n, e }) => verify_rs1(n, e, message, signature)?,
        (alg, key) => {
            return Err(Error::UnsupportedCoseAlgorithm(format!(
                "alg {} cannot verify with a {:?} key",
                i64::from(alg),
                key.key_type()
            )))
        }
    };

    if !verified {
        debug!(alg = i64::from(alg), "signature did not verify");
    }

    Ok(verified)
}

/// Extracts the key of an X.509 `SubjectPublicKeyInfo` in the same shape as a decoded COSE key.
pub fn public_key_from_spki(spki: &SubjectPublicKeyInfo) -> Result<PublicKeyMaterial, Error> {
    if spki.algorithm.algorithm == *OID_ED25519 {
        return Ok(PublicKeyMaterial::Okp {
            curve: EllipticCurve::Ed25519,
            x: spki.subject_public_key.data.to_vec(),
        });
    }

    match spki.parsed()? {
        PublicKey::EC(point) => {
            let data = point.data();
            let curve = match data.len() {
                65 => EllipticCurve::P256,
                97 => EllipticCurve::P384,
                133 => EllipticCurve::P521,
                len => return Err(Error::UnsupportedCoseAlgorithm(format!("EC point of {} bytes", len))),
            };
            if data.first() != Some(&0x04) {
                return Err(Error::UnsupportedCoseAlgorithm("compressed EC point".to_owned()));
            }
            let len = curve.coordinate_len();
            Ok(PublicKeyMaterial::Ec2 {
                curve,
                x: data[1..1 + len].to_vec(),
                y: data[1 + len..].to_vec(),
            })
        }
        PublicKey::RSA(rsa) => Ok(PublicKeyMaterial::Rsa {
            n: strip_leading_zeros(rsa.modulus).to_vec(),
            e: strip_leading_zeros(rsa.exponent).to_vec(),
        }),
        _ => Err(Error::UnsupportedCoseAlgorithm(format!(
            "certificate key algorithm {}",
            spki.algorithm.algorithm.to_id_string()
        ))),
    }
}

fn uncompressed(key: &PublicKeyMaterial) -> Result<Vec<u8>, Error> {
    key.uncompressed_point()
        .ok_or_else(|| Error::InvalidCoseKey("expected an EC2 key".to_owned()))
}

pub(crate) fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

fn verify_ring(alg: &'static dyn VerificationAlgorithm, public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
    UnparsedPublicKey::new(alg, public_key).verify(message, signature).is_ok()
}

fn verify_rsa(params: &'static RsaParameters, n: &[u8], e: &[u8], message: &[u8], signature: &[u8]) -> bool {
    let components = RsaPublicKeyComponents {
        n: strip_leading_zeros(n),
        e: strip_leading_zeros(e),
    };
    components.verify(params, message, signature).is_ok()
}

fn verify_p521(point: &[u8], message: &[u8], signature: &[u8]) -> Result<bool, Error> {
    let key = p521::ecdsa::VerifyingKey::from_sec1_bytes(point)
        .map_err(|_| Error::InvalidCoseKey("P-521 point is not on the curve".to_owned()))?;
    let signature = match p521::ecdsa::Signature::from_der(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };
    Ok(key.verify(message, &signature).is_ok())
}

fn verify_ed25519(x: &[u8], message: &[u8], signature: &[u8]) -> Result<bool, Error> {
    let bytes: [u8; 32] = x
        .try_into()
        .map_err(|_| Error::InvalidCoseKey("Ed25519 keys must be 32 bytes".to_owned()))?;
    let key = ed25519_dalek::VerifyingKey::from_bytes(&bytes)
        .map_err(|_| Error::InvalidCoseKey("Ed25519 point is invalid".to_owned()))?;
    let signature = match ed25519_dalek::Signature::from_slice(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };
    Ok(key.verify(message, &signature).is_ok())
}

fn verify_rs1(n: &[u8], e: &[u8], message: &[u8], signature: &[u8]) -> Result<bool, Error> {
    let public_key = RsaPublicKey::new(BigUint::from_bytes_be(n), BigUint::from_bytes_be(e))
        .map_err(|e| Error::InvalidCoseKey(format!("RSA key is invalid: {}", e)))?;
    let hashed = Sha1::digest(message);
    Ok(public_key
        .verify(Pkcs1v15Sign::new::<Sha1>(), hashed.as_slice(), signature)
        .is_ok())
}
