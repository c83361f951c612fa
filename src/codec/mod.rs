//! Payload encoding utilities

use crate::types::DiffdError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Decode a submitted payload from base64 text into raw bytes
///
/// Payloads cross the boundary as standard base64 with padding. A decode
/// failure is a caller error, surfaced as [`DiffdError::Decode`] with the
/// underlying cause.
///
/// # Arguments
/// * `encoded` - The payload text as received at the boundary
///
/// # Returns
/// * `Ok(Vec<u8>)` - The decoded blob
/// * `Err(DiffdError)` - Decode error when the text is not valid base64
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>, DiffdError> {
    Ok(STANDARD.decode(encoded)?)
}

/// Encode raw bytes into the payload text form
pub fn encode_payload(raw: &[u8]) -> String {
    STANDARD.encode(raw)
}
