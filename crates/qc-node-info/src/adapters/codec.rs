//! JSON descriptor codec.
//!
//! Wire format: a single JSON object with the camelCase descriptor field
//! names, at most [`MAX_NODE_INFO_SIZE`] bytes.

use crate::domain::{PeerDescriptor, MAX_NODE_INFO_SIZE};
use crate::ports::{CodecError, DescriptorCodec};

/// JSON codec enforcing the descriptor size ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDescriptorCodec;

impl JsonDescriptorCodec {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorCodec for JsonDescriptorCodec {
    fn encode(&self, descriptor: &PeerDescriptor) -> Result<Vec<u8>, CodecError> {
        let bytes =
            serde_json::to_vec(descriptor).map_err(|e| CodecError::Encode(e.to_string()))?;
        ensure_within_limit(bytes.len())?;
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<PeerDescriptor, CodecError> {
        // Size first: never parse an oversized payload
        ensure_within_limit(bytes.len())?;
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

fn ensure_within_limit(size: usize) -> Result<(), CodecError> {
    if size > MAX_NODE_INFO_SIZE {
        return Err(CodecError::TooLarge {
            size,
            max: MAX_NODE_INFO_SIZE,
        });
    }
    Ok(())
}
