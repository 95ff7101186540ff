//! The validated data-carrier script type.
//!
//! A data-carrier script is exactly two elements:
//!
//! ```text
//! [0]      marker opcode (OP_RETURN unless configured otherwise)
//! [1..]    one push of the payload with the shortest length prefix
//! ```

use std::fmt;
use std::str;

use bitcoin::{
    Script, ScriptBuf,
    constants::MAX_SCRIPT_ELEMENT_SIZE,
    opcodes::Opcode,
    script::Instruction,
};

use crate::config::is_push_opcode;
use crate::error::{DataCarrierError, DataCarrierResult, PushDefect};
use crate::push::minimal_header_len;

/// A script carrying a single payload behind a marker opcode.
///
/// Values of this type are always canonical: the marker is not a push opcode,
/// the payload is pushed with a minimal header, and nothing follows it.
/// Checks that depend on a [`CarrierConfig`](crate::CarrierConfig), such as
/// which marker or how large a payload, are left to the codec.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataCarrierScript {
    script: ScriptBuf,
    payload_offset: usize,
}

impl DataCarrierScript {
    /// Wraps a script the caller has just built in canonical form.
    pub(crate) fn from_parts_unchecked(script: ScriptBuf, payload_offset: usize) -> Self {
        Self {
            script,
            payload_offset,
        }
    }

    /// Gets the marker opcode.
    pub fn marker(&self) -> Opcode {
        Opcode::from(self.script.as_bytes()[0])
    }

    /// Gets the carried payload.
    pub fn payload(&self) -> &[u8] {
        &self.script.as_bytes()[self.payload_offset..]
    }

    /// Gets the length of the carried payload.
    pub fn payload_len(&self) -> usize {
        self.script.len() - self.payload_offset
    }

    /// Returns the underlying script.
    pub fn as_script(&self) -> &Script {
        &self.script
    }

    /// Returns the raw script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.script.as_bytes()
    }

    /// Converts into the underlying script buffer.
    pub fn into_script_buf(self) -> ScriptBuf {
        self.script
    }

    /// Lower-case hex of the script bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.script.as_bytes())
    }
}

impl TryFrom<ScriptBuf> for DataCarrierScript {
    type Error = DataCarrierError;

    fn try_from(script: ScriptBuf) -> Result<Self, Self::Error> {
        let (_, payload) = split_carrier(&script, None)?;
        let payload_offset = script.len() - payload.len();
        Ok(Self {
            script,
            payload_offset,
        })
    }
}

impl TryFrom<Vec<u8>> for DataCarrierScript {
    type Error = DataCarrierError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(ScriptBuf::from_bytes(bytes))
    }
}

impl From<DataCarrierScript> for ScriptBuf {
    fn from(script: DataCarrierScript) -> Self {
        script.script
    }
}

impl AsRef<Script> for DataCarrierScript {
    fn as_ref(&self) -> &Script {
        &self.script
    }
}

impl AsRef<[u8]> for DataCarrierScript {
    fn as_ref(&self) -> &[u8] {
        self.script.as_bytes()
    }
}

impl fmt::Display for DataCarrierScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl str::FromStr for DataCarrierScript {
    type Err = DataCarrierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::try_from(bytes)
    }
}

/// Splits a script into its marker and payload, checking the canonical
/// structure.
///
/// If `marker` is given, the script's marker must match it.  Otherwise any
/// non-push opcode is accepted.
pub(crate) fn split_carrier(
    script: &Script,
    marker: Option<Opcode>,
) -> DataCarrierResult<(Opcode, &[u8])> {
    let mut instrs = script.instructions();
    let found = match instrs.next() {
        Some(Ok(Instruction::Op(op))) if !is_push_opcode(op) => op,
        _ => return Err(DataCarrierError::NotDataCarrier),
    };

    if marker.is_some_and(|m| m != found) {
        return Err(DataCarrierError::NotDataCarrier);
    }

    let payload = match instrs.next() {
        Some(Ok(Instruction::PushBytes(d))) => d.as_bytes(),
        Some(Err(_)) => return Err(DataCarrierError::MalformedPush(PushDefect::Truncated)),
        _ => return Err(DataCarrierError::NotDataCarrier),
    };

    if instrs.next().is_some() {
        return Err(DataCarrierError::NotDataCarrier);
    }

    // The push runs to the end of the script, so whatever sits between the
    // marker and the payload is its header.
    let len = payload.len();
    let header_len = script.len() - 1 - len;
    if header_len != minimal_header_len(len) {
        return Err(DataCarrierError::MalformedPush(PushDefect::NonMinimal {
            len,
            header_len,
        }));
    }

    if len > MAX_SCRIPT_ELEMENT_SIZE {
        return Err(DataCarrierError::PayloadTooLarge {
            len,
            max: MAX_SCRIPT_ELEMENT_SIZE,
        });
    }

    Ok((found, payload))
}
