//#![deny(warnings)]

//! # webauthn-verifier
//!
//! Relying party verification of WebAuthn registration and authentication responses.

pub mod base64;
pub mod webauthn;
