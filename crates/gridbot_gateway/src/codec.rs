//! JSON codec helpers.
//!
//! Thin wrappers around `serde_json`. All gateway payloads are JSON so that
//! browser and script clients can talk to the server directly.

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Encode a value to JSON bytes.
///
/// # Errors
///
/// Returns [`GatewayError::Encode`] if serialisation fails.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, GatewayError> {
    serde_json::to_vec(value).map_err(GatewayError::Encode)
}

/// Decode a value from JSON bytes.
///
/// An empty payload is treated as `{}`, so requests whose fields all have
/// defaults can be sent without a body.
///
/// # Errors
///
/// Returns [`GatewayError::Decode`] if deserialisation fails.
pub fn decode<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, GatewayError> {
    let bytes = if bytes.is_empty() { b"{}".as_slice() } else { bytes };
    serde_json::from_slice(bytes).map_err(GatewayError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Probe {
        #[serde(default)]
        command: String,
    }

    #[test]
    fn test_decode_request() {
        let probe: Probe = decode(br#"{"command":"forward"}"#).unwrap();
        assert_eq!(probe.command, "forward");
    }

    #[test]
    fn test_decode_empty_payload_uses_defaults() {
        let probe: Probe = decode(b"").unwrap();
        assert_eq!(probe.command, "");
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result: Result<Probe, _> = decode(b"{not json");
        let err = result.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
        assert!(err.to_string().starts_with("invalid request"));
    }

    #[test]
    fn test_encode() {
        let bytes = encode(&Probe {
            command: "left".into(),
        })
        .unwrap();
        assert_eq!(bytes, br#"{"command":"left"}"#);
    }
}
