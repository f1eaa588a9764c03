//! Base64 with `-`/`_` in place of `+`/`/` and no `=` padding.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::Result;

/// Padding is dropped on encode and accepted either way on decode. Trailing
/// bits are not required to be zero, matching browser `atob`.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn encode(bytes: &[u8]) -> String {
    ENGINE.encode(bytes)
}

pub fn decode(blob: &str) -> Result<Vec<u8>> {
    Ok(ENGINE.decode(blob)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_safe_alphabet() {
        // 0xFB 0xFF encodes to "+/8=" in the standard alphabet
        assert_eq!(encode(&[0xFB, 0xFF]), "-_8");
        assert_eq!(decode("-_8").unwrap(), vec![0xFB, 0xFF]);
    }

    #[test]
    fn test_padding_is_optional() {
        assert_eq!(encode(&[6, 0, 60]), "BgA8");
        assert_eq!(encode(&[6]), "Bg");
        assert_eq!(decode("Bg").unwrap(), vec![6]);
        assert_eq!(decode("Bg==").unwrap(), vec![6]);
    }

    #[test]
    fn test_rejects_standard_alphabet() {
        assert!(decode("+/8").is_err());
    }
}
