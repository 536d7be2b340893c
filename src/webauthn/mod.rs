pub mod attestation;
pub mod crypto;
pub mod error;
pub mod proto;
pub mod server;
pub mod trust;
