//! Protobuf encode/decode helpers shared by the client crates.

use bytes::Bytes;
use prost::Message;

use crate::Error;

/// Maximum accepted size of a single encoded message (4 MB).
pub const MAX_MESSAGE_SIZE: usize = 4 * 1024 * 1024;

/// Encode a message into a freshly allocated buffer.
pub fn encode<M: Message>(message: &M) -> Bytes {
    Bytes::from(message.encode_to_vec())
}

/// Decode a message, rejecting payloads larger than [`MAX_MESSAGE_SIZE`].
pub fn decode<M: Message + Default>(payload: &[u8]) -> Result<M, Error> {
    if payload.len() > MAX_MESSAGE_SIZE {
        return Err(Error::Decode(format!(
            "payload size {} exceeds maximum {}",
            payload.len(),
            MAX_MESSAGE_SIZE
        )));
    }
    Ok(M::decode(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{row_filter::Filter, RowFilter, TimestampRange};

    #[test]
    fn test_encode_matches_prost() {
        let filter = RowFilter::from(Filter::ApplyLabelTransformer("label".into()));
        assert_eq!(encode(&filter).as_ref(), filter.encode_to_vec().as_slice());
    }

    #[test]
    fn test_decode_roundtrip() {
        let range = TimestampRange {
            start_timestamp_micros: Some(30_871_000),
            end_timestamp_micros: Some(12_939_371_000),
        };
        let decoded: TimestampRange = decode(&encode(&range)).unwrap();
        assert_eq!(decoded, range);
    }

    #[test]
    fn test_decode_garbage() {
        let result: Result<RowFilter, _> = decode(&[0xFF, 0xFF, 0xFF]);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_too_large() {
        let payload = vec![0u8; MAX_MESSAGE_SIZE + 1];
        let result: Result<RowFilter, _> = decode(&payload);
        assert!(matches!(result, Err(Error::Decode(_))));
    }
}
