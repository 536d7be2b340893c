pub use base64::Engine;
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    DecodeError,
};

const CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(true)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const CONFIG_NO_PAD: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

pub const BASE64: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, CONFIG);
pub const BASE64_URLSAFE_NOPAD: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, CONFIG_NO_PAD);

/// Decodes a browser supplied field.
///
/// Browsers and client libraries disagree on the alphabet, so this accepts base64url first and falls back to standard
/// base64. Padding is optional in both cases.
pub fn decode_lenient(input: &str) -> Result<Vec<u8>, DecodeError> {
    let input = input.trim();
    BASE64_URLSAFE_NOPAD.decode(input).or_else(|e| BASE64.decode(input).map_err(|_| e))
}

#[test]
fn test_decode_lenient() {
    assert_eq!(decode_lenient("-_8").unwrap(), vec![0xfb, 0xff]);
    assert_eq!(decode_lenient("+/8=").unwrap(), vec![0xfb, 0xff]);
    assert_eq!(decode_lenient("AQID").unwrap(), vec![1, 2, 3]);
    assert!(decode_lenient("not base64!").is_err());
}
