use crate::webauthn::{
    error::Error,
    proto::{
        codec::{as_map, decode_cbor_exact, int_entry, value_as_bytes, value_as_i64, CborMap},
        constants::{
            COSE_KEY_LABEL_ALG, COSE_KEY_LABEL_CRV_OR_N, COSE_KEY_LABEL_KTY, COSE_KEY_LABEL_X_OR_E, COSE_KEY_LABEL_Y,
            ECDAA_CURVE_ED25519, ECDSA_CURVE_P256, ECDSA_CURVE_P384, ECDSA_CURVE_P521, ECDSA_Y_PREFIX_UNCOMPRESSED,
            RSA_DEFAULT_EXPONENT, WEBAUTH_PUBLIC_KEY_TYPE_EC2, WEBAUTH_PUBLIC_KEY_TYPE_OKP, WEBAUTH_PUBLIC_KEY_TYPE_RSA,
        },
    },
};
use serde_cbor::Value;
use std::collections::BTreeMap;

/// COSE algorithms this crate can verify. Anything else is rejected while decoding the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoseAlgorithmIdentifier {
    ES256,
    ES384,
    ES512,
    EdDSA,
    PS256,
    PS384,
    PS512,
    RS256,
    RS384,
    RS512,
    RS1,
}

impl CoseAlgorithmIdentifier {
    pub fn key_type(&self) -> KeyType {
        use CoseAlgorithmIdentifier::*;
        match self {
            ES256 | ES384 | ES512 => KeyType::Ec2,
            EdDSA => KeyType::Okp,
            PS256 | PS384 | PS512 | RS256 | RS384 | RS512 | RS1 => KeyType::Rsa,
        }
    }

    /// Curve the algorithm is bound to, if any.
    pub fn curve(&self) -> Option<EllipticCurve> {
        match self {
            CoseAlgorithmIdentifier::ES256 => Some(EllipticCurve::P256),
            CoseAlgorithmIdentifier::ES384 => Some(EllipticCurve::P384),
            CoseAlgorithmIdentifier::ES512 => Some(EllipticCurve::P521),
            CoseAlgorithmIdentifier::EdDSA => Some(EllipticCurve::Ed25519),
            _ => None,
        }
    }
}

impl TryFrom<i64> for CoseAlgorithmIdentifier {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -7 => Ok(CoseAlgorithmIdentifier::ES256),
            -35 => Ok(CoseAlgorithmIdentifier::ES384),
            -36 => Ok(CoseAlgorithmIdentifier::ES512),
            -8 => Ok(CoseAlgorithmIdentifier::EdDSA),
            -37 => Ok(CoseAlgorithmIdentifier::PS256),
            -38 => Ok(CoseAlgorithmIdentifier::PS384),
            -39 => Ok(CoseAlgorithmIdentifier::PS512),
            -257 => Ok(CoseAlgorithmIdentifier::RS256),
            -258 => Ok(CoseAlgorithmIdentifier::RS384),
            -259 => Ok(CoseAlgorithmIdentifier::RS512),
            -65535 => Ok(CoseAlgorithmIdentifier::RS1),
            _ => Err(Error::UnsupportedCoseAlgorithm(format!("alg {}", value))),
        }
    }
}

impl From<CoseAlgorithmIdentifier> for i64 {
    fn from(alg: CoseAlgorithmIdentifier) -> Self {
        match alg {
            CoseAlgorithmIdentifier::ES256 => -7,
            CoseAlgorithmIdentifier::ES384 => -35,
            CoseAlgorithmIdentifier::ES512 => -36,
            CoseAlgorithmIdentifier::EdDSA => -8,
            CoseAlgorithmIdentifier::PS256 => -37,
            CoseAlgorithmIdentifier::PS384 => -38,
            CoseAlgorithmIdentifier::PS512 => -39,
            CoseAlgorithmIdentifier::RS256 => -257,
            CoseAlgorithmIdentifier::RS384 => -258,
            CoseAlgorithmIdentifier::RS512 => -259,
            CoseAlgorithmIdentifier::RS1 => -65535,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Okp,
    Ec2,
    Rsa,
}

impl TryFrom<i64> for KeyType {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            WEBAUTH_PUBLIC_KEY_TYPE_OKP => Ok(KeyType::Okp),
            WEBAUTH_PUBLIC_KEY_TYPE_EC2 => Ok(KeyType::Ec2),
            WEBAUTH_PUBLIC_KEY_TYPE_RSA => Ok(KeyType::Rsa),
            _ => Err(Error::UnsupportedCoseAlgorithm(format!("kty {}", value))),
        }
    }
}

impl From<KeyType> for i64 {
    fn from(kty: KeyType) -> Self {
        match kty {
            KeyType::Okp => WEBAUTH_PUBLIC_KEY_TYPE_OKP,
            KeyType::Ec2 => WEBAUTH_PUBLIC_KEY_TYPE_EC2,
            KeyType::Rsa => WEBAUTH_PUBLIC_KEY_TYPE_RSA,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EllipticCurve {
    P256,
    P384,
    P521,
    Ed25519,
}

impl EllipticCurve {
    /// Length in bytes of one coordinate (or of the whole key for Ed25519).
    pub fn coordinate_len(&self) -> usize {
        match self {
            EllipticCurve::P256 => 32,
            EllipticCurve::P384 => 48,
            EllipticCurve::P521 => 66,
            EllipticCurve::Ed25519 => 32,
        }
    }
}

impl TryFrom<i64> for EllipticCurve {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            ECDSA_CURVE_P256 => Ok(EllipticCurve::P256),
            ECDSA_CURVE_P384 => Ok(EllipticCurve::P384),
            ECDSA_CURVE_P521 => Ok(EllipticCurve::P521),
            ECDAA_CURVE_ED25519 => Ok(EllipticCurve::Ed25519),
            _ => Err(Error::UnsupportedCoseAlgorithm(format!("crv {}", value))),
        }
    }
}

impl From<EllipticCurve> for i64 {
    fn from(crv: EllipticCurve) -> Self {
        match crv {
            EllipticCurve::P256 => ECDSA_CURVE_P256,
            EllipticCurve::P384 => ECDSA_CURVE_P384,
            EllipticCurve::P521 => ECDSA_CURVE_P521,
            EllipticCurve::Ed25519 => ECDAA_CURVE_ED25519,
        }
    }
}

/// Verification ready key material, owned independently of the CBOR it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyMaterial {
    Ec2 { curve: EllipticCurve, x: Vec<u8>, y: Vec<u8> },
    Okp { curve: EllipticCurve, x: Vec<u8> },
    Rsa { n: Vec<u8>, e: Vec<u8> },
}

impl PublicKeyMaterial {
    pub fn key_type(&self) -> KeyType {
        match self {
            PublicKeyMaterial::Ec2 { .. } => KeyType::Ec2,
            PublicKeyMaterial::Okp { .. } => KeyType::Okp,
            PublicKeyMaterial::Rsa { .. } => KeyType::Rsa,
        }
    }

    /// `0x04 || x || y` for EC2 keys.
    pub fn uncompressed_point(&self) -> Option<Vec<u8>> {
        match self {
            PublicKeyMaterial::Ec2 { x, y, .. } => {
                let mut point = Vec::with_capacity(1 + x.len() + y.len());
                point.push(ECDSA_Y_PREFIX_UNCOMPRESSED);
                point.extend_from_slice(x);
                point.extend_from_slice(y);
                Some(point)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPublicKey {
    pub alg: CoseAlgorithmIdentifier,
    pub key: PublicKeyMaterial,
}

impl CredentialPublicKey {
    pub fn from_cose_bytes(buf: &[u8]) -> Result<Self, Error> {
        let value = decode_cbor_exact(buf).map_err(|e| Error::InvalidCoseKey(e.to_string()))?;
        Self::from_cose_value(&value)
    }

    pub fn from_cose_value(value: &Value) -> Result<Self, Error> {
        let map = as_map(value, "COSE key").map_err(|e| Error::InvalidCoseKey(e.to_string()))?;

        let kty = KeyType::try_from(required_int(map, COSE_KEY_LABEL_KTY, "kty")?)?;
        let alg = CoseAlgorithmIdentifier::try_from(required_int(map, COSE_KEY_LABEL_ALG, "alg")?)?;

        if alg.key_type() != kty {
            return Err(Error::UnsupportedCoseAlgorithm(format!(
                "alg {} cannot be used with kty {}",
                i64::from(alg),
                i64::from(kty)
            )));
        }

        let key = match kty {
            KeyType::Ec2 => {
                let curve = EllipticCurve::try_from(required_int(map, COSE_KEY_LABEL_CRV_OR_N, "crv")?)?;
                check_curve(alg, curve)?;
                let x = required_bytes(map, COSE_KEY_LABEL_X_OR_E, "x")?;
                let y = match int_entry(map, COSE_KEY_LABEL_Y) {
                    Some(Value::Bytes(y)) => y.as_slice(),
                    Some(Value::Bool(_)) => return Err(Error::InvalidCoseKey("compressed EC2 points are not supported".to_owned())),
                    _ => return Err(Error::InvalidCoseKey("missing y coordinate".to_owned())),
                };
                if x.len() != curve.coordinate_len() || y.len() != curve.coordinate_len() {
                    return Err(Error::InvalidCoseKey(format!(
                        "coordinates for {:?} must be {} bytes",
                        curve,
                        curve.coordinate_len()
                    )));
                }
                PublicKeyMaterial::Ec2 {
                    curve,
                    x: x.to_vec(),
                    y: y.to_vec(),
                }
            }
            KeyType::Okp => {
                let curve = EllipticCurve::try_from(required_int(map, COSE_KEY_LABEL_CRV_OR_N, "crv")?)?;
                check_curve(alg, curve)?;
                let x = required_bytes(map, COSE_KEY_LABEL_X_OR_E, "x")?;
                if x.len() != curve.coordinate_len() {
                    return Err(Error::InvalidCoseKey("Ed25519 keys must be 32 bytes".to_owned()));
                }
                PublicKeyMaterial::Okp { curve, x: x.to_vec() }
            }
            KeyType::Rsa => {
                let n = required_bytes(map, COSE_KEY_LABEL_CRV_OR_N, "n")?;
                let e = match int_entry(map, COSE_KEY_LABEL_X_OR_E) {
                    Some(value) => value_as_bytes(value)
                        .ok_or_else(|| Error::InvalidCoseKey("e is not a byte string".to_owned()))?
                        .to_vec(),
                    None => RSA_DEFAULT_EXPONENT.to_vec(),
                };
                PublicKeyMaterial::Rsa { n: n.to_vec(), e }
            }
        };

        Ok(CredentialPublicKey { alg, key })
    }

    pub fn to_cose_value(&self) -> Value {
        let mut map = BTreeMap::new();
        map.insert(int(COSE_KEY_LABEL_KTY), int(self.key.key_type().into()));
        map.insert(int(COSE_KEY_LABEL_ALG), int(self.alg.into()));
        match &self.key {
            PublicKeyMaterial::Ec2 { curve, x, y } => {
                map.insert(int(COSE_KEY_LABEL_CRV_OR_N), int((*curve).into()));
                map.insert(int(COSE_KEY_LABEL_X_OR_E), Value::Bytes(x.clone()));
                map.insert(int(COSE_KEY_LABEL_Y), Value::Bytes(y.clone()));
            }
            PublicKeyMaterial::Okp { curve, x } => {
                map.insert(int(COSE_KEY_LABEL_CRV_OR_N), int((*curve).into()));
                map.insert(int(COSE_KEY_LABEL_X_OR_E), Value::Bytes(x.clone()));
            }
            PublicKeyMaterial::Rsa { n, e } => {
                map.insert(int(COSE_KEY_LABEL_CRV_OR_N), Value::Bytes(n.clone()));
                map.insert(int(COSE_KEY_LABEL_X_OR_E), Value::Bytes(e.clone()));
            }
        }
        Value::Map(map)
    }

    pub fn to_cose_bytes(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_cbor::to_vec(&self.to_cose_value())?)
    }
}

fn int(value: i64) -> Value {
    Value::Integer(value as i128)
}

fn required_int(map: &CborMap, label: i64, name: &str) -> Result<i64, Error> {
    int_entry(map, label)
        .and_then(value_as_i64)
        .ok_or_else(|| Error::InvalidCoseKey(format!("missing or invalid {}", name)))
}

fn required_bytes<'a>(map: &'a CborMap, label: i64, name: &str) -> Result<&'a [u8], Error> {
    int_entry(map, label)
        .and_then(value_as_bytes)
        .ok_or_else(|| Error::InvalidCoseKey(format!("missing or invalid {}", name)))
}

fn check_curve(alg: CoseAlgorithmIdentifier, curve: EllipticCurve) -> Result<(), Error> {
    if alg.curve() != Some(curve) {
        return Err(Error::UnsupportedCoseAlgorithm(format!(
            "alg {} cannot be used with crv {}",
            i64::from(alg),
            i64::from(curve)
        )));
    }
    Ok(())
}
