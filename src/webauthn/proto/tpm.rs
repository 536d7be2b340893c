use crate::webauthn::{
    error::{Error, TpmError},
    proto::{cose::EllipticCurve, reader::ByteReader},
};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use x509_parser::nom::{
    bytes::complete::{tag, take},
    IResult,
};

/// TPM_ALG_ID values that show up in `pubArea` and `certInfo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TpmAlgId {
    Rsa,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Null,
    RsaSsa,
    RsaPss,
    Ecdsa,
    Ecc,
    Other(u16),
}

impl TpmAlgId {
    pub fn from_u16(alg_id: u16) -> TpmAlgId {
        match alg_id {
            0x0001 => TpmAlgId::Rsa,
            0x0004 => TpmAlgId::Sha1,
            0x000B => TpmAlgId::Sha256,
            0x000C => TpmAlgId::Sha384,
            0x000D => TpmAlgId::Sha512,
            0x0010 => TpmAlgId::Null,
            0x0014 => TpmAlgId::RsaSsa,
            0x0016 => TpmAlgId::RsaPss,
            0x0018 => TpmAlgId::Ecdsa,
            0x0023 => TpmAlgId::Ecc,
            other => TpmAlgId::Other(other),
        }
    }

    /// Hashes `data` when this id names a digest algorithm.
    pub fn digest(&self, data: &[u8]) -> Option<Vec<u8>> {
        match self {
            TpmAlgId::Sha1 => Some(Sha1::digest(data).to_vec()),
            TpmAlgId::Sha256 => Some(Sha256::digest(data).to_vec()),
            TpmAlgId::Sha384 => Some(Sha384::digest(data).to_vec()),
            TpmAlgId::Sha512 => Some(Sha512::digest(data).to_vec()),
            _ => None,
        }
    }
}

impl From<TpmAlgId> for u16 {
    fn from(alg_id: TpmAlgId) -> Self {
        match alg_id {
            TpmAlgId::Rsa => 0x0001,
            TpmAlgId::Sha1 => 0x0004,
            TpmAlgId::Sha256 => 0x000B,
            TpmAlgId::Sha384 => 0x000C,
            TpmAlgId::Sha512 => 0x000D,
            TpmAlgId::Null => 0x0010,
            TpmAlgId::RsaSsa => 0x0014,
            TpmAlgId::RsaPss => 0x0016,
            TpmAlgId::Ecdsa => 0x0018,
            TpmAlgId::Ecc => 0x0023,
            TpmAlgId::Other(other) => other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TpmEccCurve {
    NistP192,
    NistP224,
    NistP256,
    NistP384,
    NistP521,
    Other(u16),
}

impl TpmEccCurve {
    pub fn from_u16(ecc: u16) -> TpmEccCurve {
        match ecc {
            0x0001 => TpmEccCurve::NistP192,
            0x0002 => TpmEccCurve::NistP224,
            0x0003 => TpmEccCurve::NistP256,
            0x0004 => TpmEccCurve::NistP384,
            0x0005 => TpmEccCurve::NistP521,
            other => TpmEccCurve::Other(other),
        }
    }

    pub fn matches(&self, curve: EllipticCurve) -> bool {
        matches!(
            (self, curve),
            (TpmEccCurve::NistP256, EllipticCurve::P256)
                | (TpmEccCurve::NistP384, EllipticCurve::P384)
                | (TpmEccCurve::NistP521, EllipticCurve::P521)
        )
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectAttributes {
    pub fixed_tpm: bool,
    pub st_clear: bool,
    pub fixed_parent: bool,
    pub sensitive_data_origin: bool,
    pub user_with_auth: bool,
    pub admin_with_policy: bool,
    pub no_da: bool,
    pub encrypted_duplication: bool,
    pub restricted: bool,
    pub decrypt: bool,
    pub sign_or_encrypt: bool,
}

impl ObjectAttributes {
    pub fn from_u32(o: u32) -> ObjectAttributes {
        ObjectAttributes {
            fixed_tpm: (o & 1 << 1) != 0,
            st_clear: (o & 1 << 2) != 0,
            fixed_parent: (o & 1 << 4) != 0,
            sensitive_data_origin: (o & 1 << 5) != 0,
            user_with_auth: (o & 1 << 6) != 0,
            admin_with_policy: (o & 1 << 7) != 0,
            no_da: (o & 1 << 10) != 0,
            encrypted_duplication: (o & 1 << 11) != 0,
            restricted: (o & 1 << 16) != 0,
            decrypt: (o & 1 << 17) != 0,
            sign_or_encrypt: (o & 1 << 18) != 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicParameters {
    Rsa {
        symmetric: TpmAlgId,
        scheme: TpmAlgId,
        key_bits: u16,
        /// Zero means the default exponent 65537.
        exponent: u32,
    },
    Ecc {
        symmetric: TpmAlgId,
        scheme: TpmAlgId,
        curve_id: TpmEccCurve,
        kdf: TpmAlgId,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicUnique {
    Rsa(Vec<u8>),
    Ecc { x: Vec<u8>, y: Vec<u8> },
}

/// TPMT_PUBLIC, the public area of the key the TPM certified.
#[derive(Clone, Debug)]
pub struct PublicArea {
    pub alg_type: TpmAlgId,
    pub name_alg: TpmAlgId,
    pub object_attributes: ObjectAttributes,
    pub auth_policy: Vec<u8>,
    pub parameters: PublicParameters,
    pub unique: PublicUnique,
}

impl PublicArea {
    pub fn from_slice(buf: &[u8]) -> Result<PublicArea, Error> {
        let mut reader = ByteReader::new(buf);
        let alg_type = TpmAlgId::from_u16(reader.read_u16()?);
        let name_alg = TpmAlgId::from_u16(reader.read_u16()?);
        let object_attributes = ObjectAttributes::from_u32(reader.read_u32()?);
        let auth_policy = reader.read_sized_u16()?.to_vec();

        let (parameters, unique) = match alg_type {
            TpmAlgId::Rsa => {
                let parameters = PublicParameters::Rsa {
                    symmetric: TpmAlgId::from_u16(reader.read_u16()?),
                    scheme: TpmAlgId::from_u16(reader.read_u16()?),
                    key_bits: reader.read_u16()?,
                    exponent: reader.read_u32()?,
                };
                (parameters, PublicUnique::Rsa(reader.read_sized_u16()?.to_vec()))
            }
            TpmAlgId::Ecc => {
                let parameters = PublicParameters::Ecc {
                    symmetric: TpmAlgId::from_u16(reader.read_u16()?),
                    scheme: TpmAlgId::from_u16(reader.read_u16()?),
                    curve_id: TpmEccCurve::from_u16(reader.read_u16()?),
                    kdf: TpmAlgId::from_u16(reader.read_u16()?),
                };
                let x = reader.read_sized_u16()?.to_vec();
                let y = reader.read_sized_u16()?.to_vec();
                (parameters, PublicUnique::Ecc { x, y })
            }
            other => return Err(Error::TpmError(TpmError::AlgorithmNotSupported(u16::from(other) as i64))),
        };

        if !reader.is_empty() {
            return Err(Error::InvalidAttestationStatement(format!(
                "{} trailing bytes after pubArea",
                reader.remaining()
            )));
        }

        Ok(PublicArea {
            alg_type,
            name_alg,
            object_attributes,
            auth_policy,
            parameters,
            unique,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockInfo {
    pub clock: u64,
    pub reset_count: u32,
    pub restart_count: u32,
    pub safe: bool,
}

/// TPMS_ATTEST as produced by TPM2_Certify.
#[derive(Clone, Debug)]
pub struct CertInfo {
    pub magic: u32,
    pub attestation_type: u16,
    pub qualified_signer: Vec<u8>,
    pub extra_data: Vec<u8>,
    pub clock_info: ClockInfo,
    pub firmware_version: u64,
    /// TPM2B_NAME of the certified object: `nameAlg || digest`.
    pub attested_name: Vec<u8>,
    pub attested_qualified_name: Vec<u8>,
}

impl CertInfo {
    pub fn from_slice(buf: &[u8]) -> Result<CertInfo, Error> {
        let mut reader = ByteReader::new(buf);
        let magic = reader.read_u32()?;
        let attestation_type = reader.read_u16()?;
        let qualified_signer = reader.read_sized_u16()?.to_vec();
        let extra_data = reader.read_sized_u16()?.to_vec();
        let clock_info = ClockInfo {
            clock: reader.read_u64()?,
            reset_count: reader.read_u32()?,
            restart_count: reader.read_u32()?,
            safe: reader.read_u8()? & 1 != 0,
        };
        let firmware_version = reader.read_u64()?;
        let attested_name = reader.read_sized_u16()?.to_vec();
        let attested_qualified_name = reader.read_sized_u16()?.to_vec();

        Ok(CertInfo {
            magic,
            attestation_type,
            qualified_signer,
            extra_data,
            clock_info,
            firmware_version,
            attested_name,
            attested_qualified_name,
        })
    }

    /// Algorithm prefix of the attested name.
    pub fn attested_name_alg(&self) -> Result<TpmAlgId, Error> {
        let mut reader = ByteReader::new(&self.attested_name);
        Ok(TpmAlgId::from_u16(reader.read_u16()?))
    }
}

/// Strips the `id:` prefix of a TPM manufacturer attribute and returns the 8 hex digits.
pub fn parse_vendor_attribute(b: &[u8]) -> IResult<&[u8], &[u8]> {
    let (b, _) = tag("id:")(b)?;
    take(8usize)(b)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TpmVendor {
    Amd,
    Atmel,
    Broadcom,
    Cisco,
    FlysliceTechnologies,
    FuzhouRockchip,
    Google,
    Hpe,
    Huawei,
    Ibm,
    Infineon,
    Intel,
    Lenovo,
    Microsoft,
    NationalSemiconductor,
    Nationz,
    NuvotonTechnology,
    Qualcomm,
    Samsung,
    Sinosun,
    Smsc,
    StMicroelectronics,
    TexasInstruments,
    Winbond,
}

impl TpmVendor {
    /// Looks a vendor up by the hex form of its TPM capability id, case insensitive.
    pub fn from_hex_id(id: &[u8]) -> Result<Self, Error> {
        let upper = id.to_ascii_uppercase();
        match upper.as_slice() {
            b"414D4400" => Ok(TpmVendor::Amd),
            b"41544D4C" => Ok(TpmVendor::Atmel),
            b"4252434D" => Ok(TpmVendor::Broadcom),
            b"4353434F" => Ok(TpmVendor::Cisco),
            b"464C5953" => Ok(TpmVendor::FlysliceTechnologies),
            b"524F4343" => Ok(TpmVendor::FuzhouRockchip),
            b"474F4F47" => Ok(TpmVendor::Google),
            b"48504500" => Ok(TpmVendor::Hpe),
            b"48495349" => Ok(TpmVendor::Huawei),
            b"49424D00" => Ok(TpmVendor::Ibm),
            b"49465800" => Ok(TpmVendor::Infineon),
            b"494E5443" => Ok(TpmVendor::Intel),
            b"4C454E00" => Ok(TpmVendor::Lenovo),
            b"4D534654" => Ok(TpmVendor::Microsoft),
            b"4E534D20" => Ok(TpmVendor::NationalSemiconductor),
            b"4E545A00" => Ok(TpmVendor::Nationz),
            b"4E544300" => Ok(TpmVendor::NuvotonTechnology),
            b"51434F4D" => Ok(TpmVendor::Qualcomm),
            b"534D534E" => Ok(TpmVendor::Samsung),
            b"534E5300" => Ok(TpmVendor::Sinosun),
            b"534D5343" => Ok(TpmVendor::Smsc),
            b"53544D20" => Ok(TpmVendor::StMicroelectronics),
            b"54584E00" => Ok(TpmVendor::TexasInstruments),
            b"57454300" => Ok(TpmVendor::Winbond),
            _ => Err(Error::TpmError(TpmError::TpmVendorNotFound)),
        }
    }

    /// Parses a full `id:XXXXXXXX` manufacturer attribute.
    pub fn from_attribute(attribute: &str) -> Result<Self, Error> {
        let (_, id) = parse_vendor_attribute(attribute.as_bytes()).map_err(|_| Error::TpmError(TpmError::TpmVendorNotFound))?;
        Self::from_hex_id(id)
    }
}
