use bitcoin::{
    constants::MAX_SCRIPT_ELEMENT_SIZE,
    opcodes::{
        Class, ClassifyContext, Opcode,
        all::{OP_PUSHDATA4, OP_RETURN},
    },
};

use crate::error::ConfigError;
use crate::push::carrier_script_len;

/// Default maximum payload length, matching the standard relay policy for
/// `OP_RETURN` outputs (83 script bytes).
pub const DEFAULT_MAX_PAYLOAD_LEN: usize = 80;

/// Default marker opcode.
pub const DEFAULT_MARKER: Opcode = OP_RETURN;

/// Policy constants for data-carrier scripts.
///
/// Both the marker and the payload ceiling are owned by the network's relay
/// rules, so they are carried here rather than baked into the codec.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarrierConfig {
    marker: Opcode,
    max_payload_len: usize,
}

impl CarrierConfig {
    /// Constructs a new instance, checking that the marker can't be confused
    /// with a data push and that the maximum fits in one script element.
    pub fn new(marker: Opcode, max_payload_len: usize) -> Result<Self, ConfigError> {
        if is_push_opcode(marker) {
            return Err(ConfigError::InvalidMarker(marker.to_u8()));
        }

        if max_payload_len > MAX_SCRIPT_ELEMENT_SIZE {
            return Err(ConfigError::MaxPayloadTooLarge(max_payload_len));
        }

        Ok(Self {
            marker,
            max_payload_len,
        })
    }

    /// Constructs an `OP_RETURN` config whose largest script is at most
    /// `script_len_limit` bytes, for policies stated as a whole-script size.
    ///
    /// Fails if even the empty payload's script doesn't fit.
    pub fn from_script_size_limit(script_len_limit: usize) -> Result<Self, ConfigError> {
        let max_payload_len = (0..=MAX_SCRIPT_ELEMENT_SIZE)
            .rev()
            .find(|len| carrier_script_len(*len) <= script_len_limit)
            .ok_or(ConfigError::ScriptLimitTooSmall(script_len_limit))?;

        Ok(Self {
            marker: DEFAULT_MARKER,
            max_payload_len,
        })
    }

    /// Gets the marker opcode.
    pub fn marker(&self) -> Opcode {
        self.marker
    }

    /// Gets the maximum payload length.
    pub fn max_payload_len(&self) -> usize {
        self.max_payload_len
    }

    /// Gets the length of the largest script this config accepts.
    pub fn max_script_len(&self) -> usize {
        carrier_script_len(self.max_payload_len)
    }
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            max_payload_len: DEFAULT_MAX_PAYLOAD_LEN,
        }
    }
}

/// Returns whether the opcode pushes data (including small integers) onto the
/// stack.
pub(crate) fn is_push_opcode(op: Opcode) -> bool {
    op.to_u8() <= OP_PUSHDATA4.to_u8()
        || matches!(op.classify(ClassifyContext::Legacy), Class::PushNum(_))
}
