//! X.509 helpers shared by every certificate-bearing attestation format.
//!
//! [`validate_certificate_path`] checks validity windows, revocation and the issuer chain of an `x5c`
//! array. Revocation goes through an explicit [`RevocationCache`] that callers build once and share.

use crate::webauthn::{
    attestation::AttestationFormat,
    crypto::strip_leading_zeros,
    error::{Error, TrustError},
    proto::{
        codec::{unwrap_der_path, DER_TAG_OCTET_STRING},
        constants::{FIDO_GEN_CE_AAGUID, GLOBALSIGN_ROOT_R2, TCG_AT_TPM_MANUFACTURER, TCG_AT_TPM_MODEL, TCG_AT_TPM_VERSION},
    },
};
use parking_lot::RwLock;
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fmt,
    sync::Arc,
};
use time::OffsetDateTime;
use tracing::{debug, trace, warn};
use x509_parser::{
    certificate::X509Certificate,
    extensions::{DistributionPointName, GeneralName, ParsedExtension},
    objects::{oid2abbrev, oid_registry},
    pem::Pem,
    prelude::{FromDer, X509Name},
    revocation_list::CertificateRevocationList,
};

/// TPM identity carried in the subject alternative name of an AIK certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TpmSubjectAltName {
    pub manufacturer: String,
    pub model: String,
    pub version: String,
    pub critical: bool,
}

/// The parts of a certificate that attestation verifiers look at.
#[derive(Debug, Clone)]
pub struct CertificateInfo {
    /// 1 based, so an X.509 v3 certificate reports 3.
    pub version: u32,
    pub serial: Vec<u8>,
    pub subject: BTreeMap<String, String>,
    pub issuer: BTreeMap<String, String>,
    pub not_before: OffsetDateTime,
    pub not_after: OffsetDateTime,
    /// `None` when the certificate has no basic constraints extension.
    pub basic_constraints_ca: Option<bool>,
    pub extended_key_usage: Vec<String>,
    pub authority_key_identifier: Option<Vec<u8>>,
    pub crl_distribution_points: Vec<String>,
    pub fido_aaguid: Option<Vec<u8>>,
    pub tpm: Option<TpmSubjectAltName>,
}

impl CertificateInfo {
    pub fn from_der(der: &[u8]) -> Result<Self, Error> {
        let (_, cert) = X509Certificate::from_der(der)?;
        Self::from_certificate(&cert)
    }

    pub fn from_certificate(cert: &X509Certificate) -> Result<Self, Error> {
        let basic_constraints_ca = cert.basic_constraints()?.map(|bc| bc.value.ca);

        let mut extended_key_usage = Vec::new();
        if let Some(eku) = cert.extended_key_usage()? {
            let known = [
                (eku.value.server_auth, "1.3.6.1.5.5.7.3.1"),
                (eku.value.client_auth, "1.3.6.1.5.5.7.3.2"),
                (eku.value.code_signing, "1.3.6.1.5.5.7.3.3"),
                (eku.value.email_protection, "1.3.6.1.5.5.7.3.4"),
                (eku.value.time_stamping, "1.3.6.1.5.5.7.3.8"),
                (eku.value.ocsp_signing, "1.3.6.1.5.5.7.3.9"),
            ];
            extended_key_usage.extend(known.iter().filter(|(set, _)| *set).map(|(_, oid)| oid.to_string()));
            extended_key_usage.extend(eku.value.other.iter().map(|oid| oid.to_id_string()));
        }

        let tpm = match cert.subject_alternative_name()? {
            Some(san) => san.value.general_names.iter().find_map(|name| match name {
                GeneralName::DirectoryName(dir) => tpm_identity(dir, san.critical),
                _ => None,
            }),
            None => None,
        };

        let mut authority_key_identifier = None;
        let mut crl_distribution_points = Vec::new();
        let mut fido_aaguid = None;
        for ext in cert.extensions() {
            match ext.parsed_extension() {
                ParsedExtension::AuthorityKeyIdentifier(aki) => {
                    authority_key_identifier = aki.key_identifier.as_ref().map(|id| id.0.to_vec());
                }
                ParsedExtension::CRLDistributionPoints(points) => {
                    for point in points.points.iter() {
                        if let Some(DistributionPointName::FullName(names)) = &point.distribution_point {
                            crl_distribution_points.extend(names.iter().filter_map(|name| match name {
                                GeneralName::URI(uri) => Some(uri.to_string()),
                                _ => None,
                            }));
                        }
                    }
                }
                _ if ext.oid == *FIDO_GEN_CE_AAGUID => {
                    fido_aaguid = Some(unwrap_der_path(ext.value, &[DER_TAG_OCTET_STRING])?.to_vec());
                }
                _ => {}
            }
        }

        Ok(CertificateInfo {
            version: cert.version().0 + 1,
            serial: cert.raw_serial().to_vec(),
            subject: name_map(cert.subject()),
            issuer: name_map(cert.issuer()),
            not_before: cert.validity().not_before.to_datetime(),
            not_after: cert.validity().not_after.to_datetime(),
            basic_constraints_ca,
            extended_key_usage,
            authority_key_identifier,
            crl_distribution_points,
            fido_aaguid,
            tpm,
        })
    }

    pub fn serial_hex(&self) -> String {
        hex::encode(&self.serial)
    }
}

fn name_map(name: &X509Name) -> BTreeMap<String, String> {
    name.iter_attributes()
        .filter_map(|attr| {
            let value = attr.as_str().ok()?;
            let key = oid2abbrev(attr.attr_type(), oid_registry())
                .map(str::to_owned)
                .unwrap_or_else(|_| attr.attr_type().to_id_string());
            Some((key, value.to_owned()))
        })
        .collect()
}

fn tpm_identity(dir: &X509Name, critical: bool) -> Option<TpmSubjectAltName> {
    let mut manufacturer = None;
    let mut model = None;
    let mut version = None;
    for attr in dir.iter_attributes() {
        let value = attr.as_str().ok().map(str::to_owned);
        match attr.attr_type().as_bytes() {
            TCG_AT_TPM_MANUFACTURER => manufacturer = value,
            TCG_AT_TPM_MODEL => model = value,
            TCG_AT_TPM_VERSION => version = value,
            _ => {}
        }
    }

    Some(TpmSubjectAltName {
        manufacturer: manufacturer?,
        model: model?,
        version: version?,
        critical,
    })
}

/// Fails unless `now` falls strictly between `notBefore` and `notAfter`.
pub fn check_validity(info: &CertificateInfo, now: OffsetDateTime) -> Result<(), Error> {
    if now <= info.not_before {
        return Err(TrustError::CertificateNotYetValid(info.not_before.to_string()).into());
    }
    if now >= info.not_after {
        return Err(TrustError::CertificateExpired(info.not_after.to_string()).into());
    }
    Ok(())
}

/// Downloads a DER encoded CRL. Callers put their timeout policy here.
pub trait CrlFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, Error>;
}

#[derive(Debug)]
struct CachedCrl {
    revoked_serials: HashSet<Vec<u8>>,
    next_update: OffsetDateTime,
}

/// Revoked serial numbers keyed by the issuing authority key identifier.
///
/// Entries live until the CRL `nextUpdate`. Lookups that cannot reach a CRL treat the certificate as
/// not revoked.
pub struct RevocationCache {
    fetcher: Box<dyn CrlFetcher>,
    entries: RwLock<HashMap<Vec<u8>, Arc<CachedCrl>>>,
}

impl RevocationCache {
    pub fn new<F: CrlFetcher + 'static>(fetcher: F) -> Self {
        RevocationCache {
            fetcher: Box::new(fetcher),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn is_revoked(&self, info: &CertificateInfo, now: OffsetDateTime) -> bool {
        let serial = strip_leading_zeros(&info.serial);

        if let Some(aki) = &info.authority_key_identifier {
            if let Some(cached) = self.entries.read().get(aki).cloned() {
                if now < cached.next_update {
                    trace!(aki = %hex::encode(aki), "crl cache hit");
                    return cached.revoked_serials.contains(serial);
                }
            }
        }

        let url = match info.crl_distribution_points.first() {
            Some(url) => url,
            None => return false,
        };

        let crl = match self.fetcher.fetch(url).and_then(|der| parse_crl(&der)) {
            Ok(crl) => crl,
            Err(e) => {
                warn!(url = %url, error = %e, "could not load CRL, treating certificate as not revoked");
                return false;
            }
        };

        let revoked = crl.revoked_serials.contains(serial);
        if let (Some(aki), Some(next_update)) = (&info.authority_key_identifier, crl.next_update) {
            let entry = CachedCrl {
                revoked_serials: crl.revoked_serials,
                next_update,
            };
            self.entries.write().insert(aki.clone(), Arc::new(entry));
        }

        revoked
    }

    pub fn invalidate(&self, authority_key_identifier: &[u8]) {
        self.entries.write().remove(authority_key_identifier);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for RevocationCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevocationCache").field("entries", &self.len()).finish()
    }
}

struct ParsedCrl {
    revoked_serials: HashSet<Vec<u8>>,
    next_update: Option<OffsetDateTime>,
}

fn parse_crl(der: &[u8]) -> Result<ParsedCrl, Error> {
    let (_, crl) = CertificateRevocationList::from_der(der)?;
    let revoked_serials = crl
        .iter_revoked_certificates()
        .map(|revoked| strip_leading_zeros(revoked.raw_serial()).to_vec())
        .collect();
    Ok(ParsedCrl {
        revoked_serials,
        next_update: crl.next_update().map(|t| t.to_datetime()),
    })
}

/// Checks an `x5c` chain, leaf first.
///
/// Every certificate must be valid at `now`, not revoked, and issued and signed by the next one.
/// With `roots` non empty, the last certificate must be one of them or be signed by one of them.
/// Roots are trust anchors and their own validity dates are not checked.
/// Without roots only the chain itself is checked.
pub fn validate_certificate_path(
    chain: &[Vec<u8>],
    roots: &[Vec<u8>],
    revocation: Option<&RevocationCache>,
    now: OffsetDateTime,
) -> Result<(), Error> {
    if chain.is_empty() {
        return Err(TrustError::CertificateMissing.into());
    }

    let certs = chain
        .iter()
        .map(|der| X509Certificate::from_der(der).map(|(_, cert)| cert))
        .collect::<Result<Vec<_>, _>>()?;

    for (i, cert) in certs.iter().enumerate() {
        let info = CertificateInfo::from_certificate(cert)?;
        check_validity(&info, now)?;

        if let Some(cache) = revocation {
            if cache.is_revoked(&info, now) {
                return Err(TrustError::CertificateRevoked(info.serial_hex()).into());
            }
        }

        if let Some(issuer) = certs.get(i + 1) {
            if cert.issuer().as_raw() != issuer.subject().as_raw() || cert.verify_signature(Some(issuer.public_key())).is_err() {
                return Err(TrustError::CertificateChainBroken(i).into());
            }
        }
    }

    if roots.is_empty() {
        debug!("no attestation roots configured, skipping anchor check");
        return Ok(());
    }

    let (last_der, last) = match (chain.last(), certs.last()) {
        (Some(der), Some(cert)) => (der, cert),
        _ => return Err(TrustError::CertificateMissing.into()),
    };

    for root_der in roots {
        if root_der == last_der {
            return Ok(());
        }

        let root = match X509Certificate::from_der(root_der) {
            Ok((_, root)) => root,
            Err(e) => {
                warn!(error = %e, "skipping unparsable attestation root");
                continue;
            }
        };

        if last.issuer().as_raw() == root.subject().as_raw() && last.verify_signature(Some(root.public_key())).is_ok() {
            return Ok(());
        }
    }

    Err(TrustError::UntrustedRoot.into())
}

/// Root certificates per attestation format plus the revocation cache used during path validation.
///
/// `android-safetynet` starts pinned to GlobalSign Root R2. Use `clear_roots` then `add_root` to rotate it.
#[derive(Clone, Debug)]
pub struct AttestationTrustStore {
    roots: HashMap<AttestationFormat, Vec<Vec<u8>>>,
    revocation: Option<Arc<RevocationCache>>,
}

impl Default for AttestationTrustStore {
    fn default() -> Self {
        let mut roots = HashMap::new();
        roots.insert(AttestationFormat::AndroidSafetyNet, vec![GLOBALSIGN_ROOT_R2.to_vec()]);
        AttestationTrustStore { roots, revocation: None }
    }
}

impl AttestationTrustStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_roots(mut self, format: AttestationFormat) -> Self {
        self.roots.remove(&format);
        self
    }

    pub fn add_root(mut self, format: AttestationFormat, der: Vec<u8>) -> Self {
        self.roots.entry(format).or_default().push(der);
        self
    }

    /// Adds every certificate of a PEM bundle.
    pub fn add_pem_roots(mut self, format: AttestationFormat, pem: &[u8]) -> Result<Self, Error> {
        for pem in Pem::iter_from_buffer(pem) {
            let pem = pem.map_err(|e| Error::Other(format!("invalid PEM root: {}", e)))?;
            self.roots.entry(format).or_default().push(pem.contents);
        }
        Ok(self)
    }

    pub fn revocation_cache(mut self, cache: Arc<RevocationCache>) -> Self {
        self.revocation = Some(cache);
        self
    }

    pub fn roots(&self, format: AttestationFormat) -> &[Vec<u8>] {
        self.roots.get(&format).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn revocation(&self) -> Option<&RevocationCache> {
        self.revocation.as_deref()
    }
}

/// Fetches CRLs over HTTP with a blocking `reqwest` client.
#[cfg(feature = "crl-fetch")]
pub struct HttpCrlFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "crl-fetch")]
impl HttpCrlFetcher {
    pub fn new(timeout: std::time::Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Other(e.to_string()))?;
        Ok(HttpCrlFetcher { client })
    }
}

#[cfg(feature = "crl-fetch")]
impl CrlFetcher for HttpCrlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Other(format!("CRL fetch from {} failed: {}", url, e)))?;
        let body = response.bytes().map_err(|e| Error::Other(e.to_string()))?;
        Ok(body.to_vec())
    }
}
