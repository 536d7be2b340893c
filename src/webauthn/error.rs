use base64::DecodeError;
use ring::error::Unspecified;
use serde_cbor::Error as CborError;
use serde_json::Error as JsonError;
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter},
    io::Error as IoError,
};
use webpki::Error as WebPkiError;
use x509_parser::{error::X509Error, nom::Err as NomErr};

/// Coarse classification of every failure a verification call can raise.
///
/// A bad signature is not part of this list: it is reported as `verified == false` on an `Ok` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    ProtocolMismatch,
    UnsupportedFormat,
    TrustViolation,
    ReplayDetected,
    Internal,
}

#[derive(Debug)]
pub enum Error {
    IoError(IoError),
    Base64Error(DecodeError),
    CborError(CborError),
    JsonError(JsonError),
    WebPkiError(WebPkiError),
    RingError(Unspecified),
    X509Error(X509Error),
    UnexpectedEnd {
        offset: usize,
        wanted: usize,
        remaining: usize,
    },
    MalformedAuthData(String),
    InvalidClientDataJson(String),
    InvalidCoseKey(String),
    InvalidAttestationStatement(String),
    MissingCredentialData,
    CredentialIdMismatch {
        id: String,
        raw_id: String,
    },
    UnexpectedCredentialType {
        expected: String,
        actual: String,
    },
    UnexpectedType {
        expected: String,
        actual: String,
    },
    ChallengeMismatch {
        expected: String,
        actual: String,
    },
    ChallengeVerifierFailed {
        actual: String,
    },
    UnexpectedOrigin {
        expected: Vec<String>,
        actual: String,
    },
    UnexpectedRpIdHash {
        expected: Vec<String>,
        actual: String,
    },
    InvalidTokenBinding(String),
    UserNotPresent,
    UserNotVerified,
    InvalidBackupFlags,
    CounterRollback {
        stored: u32,
        received: u32,
    },
    UnsupportedAttestationFormat(String),
    UnsupportedCoseAlgorithm(String),
    NotImplemented(String),
    TrustError(TrustError),
    TpmError(TpmError),
    Other(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            IoError(_)
            | Base64Error(_)
            | CborError(_)
            | JsonError(_)
            | X509Error(_)
            | UnexpectedEnd { .. }
            | MalformedAuthData(_)
            | InvalidClientDataJson(_)
            | InvalidCoseKey(_)
            | InvalidAttestationStatement(_)
            | MissingCredentialData => ErrorKind::MalformedInput,
            CredentialIdMismatch { .. }
            | UnexpectedCredentialType { .. }
            | UnexpectedType { .. }
            | ChallengeMismatch { .. }
            | ChallengeVerifierFailed { .. }
            | UnexpectedOrigin { .. }
            | UnexpectedRpIdHash { .. }
            | InvalidTokenBinding(_)
            | UserNotPresent
            | UserNotVerified
            | InvalidBackupFlags => ErrorKind::ProtocolMismatch,
            UnsupportedAttestationFormat(_) | UnsupportedCoseAlgorithm(_) | NotImplemented(_) => ErrorKind::UnsupportedFormat,
            WebPkiError(_) | TrustError(_) | TpmError(_) => ErrorKind::TrustViolation,
            CounterRollback { .. } => ErrorKind::ReplayDetected,
            RingError(_) | Other(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TrustError {
    CertificateMissing,
    CertificateVersionInvalid(u32),
    CertificateSubjectInvalid(String),
    CertificateIsCa,
    CertificateNotYetValid(String),
    CertificateExpired(String),
    CertificateRevoked(String),
    CertificateChainBroken(usize),
    UntrustedRoot,
    AaguidMismatch,
    NonceMismatch,
    PublicKeyMismatch,
    CtsProfileMismatch,
    TimestampInFuture(i64),
    HostnameMismatch(String),
}

impl Display for TrustError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        use TrustError::*;
        match self {
            CertificateMissing => write!(f, "Attestation statement has no certificate"),
            CertificateVersionInvalid(v) => write!(f, "Certificate version must be 3, found {}", v),
            CertificateSubjectInvalid(s) => write!(f, "Certificate subject is invalid: {}", s),
            CertificateIsCa => write!(f, "Attestation certificate must not be a CA"),
            CertificateNotYetValid(s) => write!(f, "Certificate {} is not yet valid", s),
            CertificateExpired(s) => write!(f, "Certificate {} has expired", s),
            CertificateRevoked(serial) => write!(f, "Certificate with serial {} is revoked", serial),
            CertificateChainBroken(index) => write!(f, "Certificate at position {} is not signed by its successor", index),
            UntrustedRoot => write!(f, "Certificate chain does not end at a trusted root"),
            AaguidMismatch => write!(f, "Certificate AAGUID does not match authenticator data"),
            NonceMismatch => write!(f, "Attestation nonce does not match authenticator and client data"),
            PublicKeyMismatch => write!(f, "Certificate public key does not match the credential public key"),
            CtsProfileMismatch => write!(f, "SafetyNet response does not match the CTS profile"),
            TimestampInFuture(ms) => write!(f, "SafetyNet timestamp {} is in the future", ms),
            HostnameMismatch(cn) => write!(f, "SafetyNet certificate was issued to {} instead of attest.android.com", cn),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TpmError {
    AlgorithmNotSupported(i64),
    AttestationVersionNotSupported,
    CertificateMissing,
    MagicInvalid,
    AttestationTypeInvalid,
    PubAreaHashUnknown(u16),
    AttestedNamePubAreaMismatch,
    AttToBeSignedMismatch,
    PublicKeyParametersMismatch(i64),
    PublicKeyCoordinatesMismatch,
    PubAreaMismatch,
    CertificateParsing,
    CertificateVersionInvalid,
    CertificateSubjectInvalid,
    CertificateExtensionNotCritical,
    CertificateExtensionRequirementNotMet(String),
    CertificateRequirementNotMet(String),
    TpmVendorNotFound,
}

impl Display for TpmError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        use TpmError::*;
        match self {
            AlgorithmNotSupported(alg) => write!(f, "Algorithm {} is not supported for TPM attestation", alg),
            AttestationVersionNotSupported => write!(f, "TPM attestation version must be 2.0"),
            CertificateMissing => write!(f, "TPM attestation requires an AIK certificate"),
            MagicInvalid => write!(f, "certInfo magic is not TPM_GENERATED_VALUE"),
            AttestationTypeInvalid => write!(f, "certInfo type is not TPM_ST_ATTEST_CERTIFY"),
            PubAreaHashUnknown(alg) => write!(f, "pubArea name algorithm {:#06x} is not supported", alg),
            AttestedNamePubAreaMismatch => write!(f, "Attested name does not match pubArea"),
            AttToBeSignedMismatch => write!(f, "certInfo extraData does not match authenticator and client data"),
            PublicKeyParametersMismatch(alg) => write!(f, "pubArea parameters do not match credential public key ({})", alg),
            PublicKeyCoordinatesMismatch => write!(f, "pubArea unique field does not match credential public key"),
            PubAreaMismatch => write!(f, "pubArea type does not match credential public key"),
            CertificateParsing => write!(f, "AIK certificate could not be parsed"),
            CertificateVersionInvalid => write!(f, "AIK certificate version must be 3"),
            CertificateSubjectInvalid => write!(f, "AIK certificate subject must be empty"),
            CertificateExtensionNotCritical => write!(f, "AIK certificate subject alternative name must be critical"),
            CertificateExtensionRequirementNotMet(ext) => write!(f, "AIK certificate extension requirement not met: {}", ext),
            CertificateRequirementNotMet(req) => write!(f, "AIK certificate requirement not met: {}", req),
            TpmVendorNotFound => write!(f, "TPM manufacturer is unknown"),
        }
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::IoError(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Base64Error(e)
    }
}

impl From<CborError> for Error {
    fn from(e: CborError) -> Self {
        Error::CborError(e)
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Self {
        Error::JsonError(e)
    }
}

impl From<WebPkiError> for Error {
    fn from(e: WebPkiError) -> Self {
        Error::WebPkiError(e)
    }
}

impl From<Unspecified> for Error {
    fn from(e: Unspecified) -> Self {
        Error::RingError(e)
    }
}

impl From<X509Error> for Error {
    fn from(e: X509Error) -> Self {
        Error::X509Error(e)
    }
}

impl From<NomErr<X509Error>> for Error {
    fn from(e: NomErr<X509Error>) -> Self {
        match e {
            NomErr::Error(e) | NomErr::Failure(e) => Error::X509Error(e),
            NomErr::Incomplete(_) => Error::X509Error(X509Error::InvalidCertificate),
        }
    }
}

impl From<TrustError> for Error {
    fn from(e: TrustError) -> Self {
        Error::TrustError(e)
    }
}

impl From<TpmError> for Error {
    fn from(e: TpmError) -> Self {
        Error::TpmError(e)
    }
}

impl StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        use Error::*;
        match self {
            IoError(io_e) => io_e.fmt(f),
            Base64Error(e) => e.fmt(f),
            CborError(cb_e) => cb_e.fmt(f),
            JsonError(js_e) => js_e.fmt(f),
            WebPkiError(wp_e) => write!(f, "{:?}", wp_e),
            RingError(r_e) => r_e.fmt(f),
            X509Error(x_e) => x_e.fmt(f),
            UnexpectedEnd { offset, wanted, remaining } => write!(
                f,
                "Unexpected end of buffer at offset {}: wanted {} bytes, {} remaining",
                offset, wanted, remaining
            ),
            MalformedAuthData(s) => write!(f, "Malformed authenticator data: {}", s),
            InvalidClientDataJson(s) => write!(f, "Invalid clientDataJSON: {}", s),
            InvalidCoseKey(s) => write!(f, "Invalid COSE key: {}", s),
            InvalidAttestationStatement(s) => write!(f, "Invalid attestation statement: {}", s),
            MissingCredentialData => write!(f, "Authenticator data does not contain attested credential data"),
            CredentialIdMismatch { id, raw_id } => write!(f, "Credential id {} does not match raw id {}", id, raw_id),
            UnexpectedCredentialType { expected, actual } => {
                write!(f, "Unexpected credential type {}, expected {}", actual, expected)
            }
            UnexpectedType { expected, actual } => write!(f, "Unexpected client data type {}, expected {}", actual, expected),
            ChallengeMismatch { expected, actual } => write!(f, "Unexpected challenge {}, expected {}", actual, expected),
            ChallengeVerifierFailed { actual } => write!(f, "Custom challenge verifier rejected challenge {}", actual),
            UnexpectedOrigin { expected, actual } => {
                write!(f, "Unexpected origin {}, expected one of [{}]", actual, expected.join(", "))
            }
            UnexpectedRpIdHash { expected, actual } => write!(
                f,
                "Unexpected RP ID hash {}, expected the hash of one of [{}]",
                actual,
                expected.join(", ")
            ),
            InvalidTokenBinding(s) => write!(f, "Unexpected token binding status {}", s),
            UserNotPresent => write!(f, "User was not present"),
            UserNotVerified => write!(f, "User verification was required but user was not verified"),
            InvalidBackupFlags => write!(f, "Single-device credential indicated that it was backed up"),
            CounterRollback { stored, received } => write!(
                f,
                "Response counter {} was not greater than stored counter {}",
                received, stored
            ),
            UnsupportedAttestationFormat(fmt) => write!(f, "Unsupported attestation format {}", fmt),
            UnsupportedCoseAlgorithm(s) => write!(f, "Unsupported COSE algorithm: {}", s),
            NotImplemented(s) => write!(f, "{} is not implemented", s),
            TrustError(t_e) => t_e.fmt(f),
            TpmError(t_e) => t_e.fmt(f),
            Other(s) => write!(f, "{}", s),
        }
    }
}

#[test]
fn test_error_kinds() {
    assert_eq!(Error::MalformedAuthData("short".to_owned()).kind(), ErrorKind::MalformedInput);
    assert_eq!(
        Error::CounterRollback { stored: 144, received: 144 }.kind(),
        ErrorKind::ReplayDetected
    );
    assert_eq!(Error::TrustError(TrustError::UntrustedRoot).kind(), ErrorKind::TrustViolation);
    assert_eq!(Error::NotImplemented("ECDAA".to_owned()).kind(), ErrorKind::UnsupportedFormat);

    let origin = Error::UnexpectedOrigin {
        expected: vec!["https://example.com".to_owned()],
        actual: "https://evil.com".to_owned(),
    };
    assert_eq!(origin.kind(), ErrorKind::ProtocolMismatch);
    let message = origin.to_string();
    assert!(message.contains("https://example.com"));
    assert!(message.contains("https://evil.com"));
}
