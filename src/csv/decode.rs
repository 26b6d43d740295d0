//! Decoding uploaded file bytes into text.

use crate::error::{Error, Result};
use chardetng::EncodingDetector;

/// Decodes raw file bytes into text.
///
/// UTF-8 (with or without BOM) is taken as-is. Anything else goes through
/// encoding detection before decoding; Korean spreadsheet exports are
/// frequently CP949/EUC-KR. Input the detected encoding cannot decode
/// fails with [`Error::UnreadableInput`].
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(Error::UnreadableInput(format!(
            "input is not valid text (tried UTF-8 and {})",
            encoding.name()
        )));
    }
    Ok(text.into_owned())
}
