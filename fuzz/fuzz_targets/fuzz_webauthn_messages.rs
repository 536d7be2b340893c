#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate webauthn_verifier;

use webauthn_verifier::webauthn::proto::{
    cose::CredentialPublicKey,
    raw_message::*,
    tpm::{CertInfo, PublicArea},
    web_message::CollectedClientData,
};

fuzz_target!(|data: &[u8]| {
    let _ = AttestationObject::from_bytes(data);
    let _ = AuthenticatorData::from_slice(data);
    let _ = CredentialPublicKey::from_cose_bytes(data);
    let _ = PublicArea::from_slice(data);
    let _ = CertInfo::from_slice(data);
    let _ = CollectedClientData::from_slice(data);
});
