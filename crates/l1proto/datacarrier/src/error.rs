use bitcoin::script::PushBytesError;
use thiserror::Error;

/// Errors for encoding and decoding data-carrier scripts.
#[derive(Debug, Error)]
pub enum DataCarrierError {
    /// The payload exceeds the configured maximum.
    #[error("payload of {len} bytes exceeds {max} bytes limit")]
    PayloadTooLarge {
        /// Length of the rejected payload.
        len: usize,
        /// Maximum allowed by the config in effect.
        max: usize,
    },

    /// The script is not a marker followed by exactly one push.
    #[error("script is not a data-carrier script")]
    NotDataCarrier,

    /// The push after the marker is truncated or not minimally encoded.
    #[error("malformed data push: {0}")]
    MalformedPush(PushDefect),

    /// The script text was not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Error while converting data to `PushBytesBuf`, typically due to invalid length.
    #[error("pushbytes: {0}")]
    PushBytes(#[from] PushBytesError),
}

/// Why a data push was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum PushDefect {
    /// The push used a longer length prefix than its length requires.
    #[error("{len} byte push uses a {header_len} byte header")]
    NonMinimal {
        /// Length of the pushed data.
        len: usize,
        /// Length of the header that was actually used.
        header_len: usize,
    },

    /// The declared length runs past the end of the script.
    #[error("declared length exceeds the script")]
    Truncated,
}

/// Errors for constructing a [`CarrierConfig`](crate::CarrierConfig).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The marker would be read as a data push.
    #[error("marker opcode {0:#04x} is a push opcode")]
    InvalidMarker(u8),

    /// The maximum payload is above what a single push may carry.
    #[error("max payload of {0} bytes exceeds the script element size")]
    MaxPayloadTooLarge(usize),

    /// No data-carrier script fits in the given script size limit.
    #[error("script size limit of {0} bytes is below the smallest data-carrier script")]
    ScriptLimitTooSmall(usize),
}

/// Wrapper result type.
pub type DataCarrierResult<T> = Result<T, DataCarrierError>;
