pub mod codec;
pub mod constants;
pub mod cose;
pub mod raw_message;
pub mod reader;
pub mod tpm;
pub mod web_message;
