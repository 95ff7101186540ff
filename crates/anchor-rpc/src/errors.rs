use thiserror::Error;

/// The request object was not valid.
pub const RPC_INVALID_REQUEST: i64 = -32600;
/// Method not found.
pub const RPC_METHOD_NOT_FOUND: i64 = -32601;
/// Internal error.
pub const RPC_INTERNAL_ERROR: i64 = -32603;

/// Catch-all, used for usage errors.
pub const RPC_MISC_ERROR: i64 = -1;
/// Unexpected type was passed as a parameter.
pub const RPC_TYPE_ERROR: i64 = -3;
/// Invalid, missing or duplicate parameter.
pub const RPC_INVALID_PARAMETER: i64 = -8;

/// Errors returned to callers of a command.
#[derive(Debug, Error)]
pub enum RpcError {
    /// A hex parameter was malformed.
    #[error("{param} must be hexadecimal string (not '{value}')")]
    InvalidInputEncoding {
        /// Parameter name.
        param: &'static str,
        /// Offending value, as given.
        value: String,
    },

    /// A payload parameter decoded to more bytes than policy allows.
    #[error("{param} is {len} bytes, exceeds maximum of {max} bytes")]
    PayloadTooLarge {
        /// Parameter name.
        param: &'static str,
        /// Decoded length.
        len: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// A required parameter was not passed.
    #[error("missing required argument {0}")]
    MissingParam(&'static str),

    /// A named parameter that the command doesn't take.
    #[error("unknown named parameter {0}")]
    UnknownParam(String),

    /// A parameter had the wrong JSON type.
    #[error("JSON value of type {found} for {param} is not of expected type {expected}")]
    InvalidType {
        /// Parameter name.
        param: &'static str,
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type that was passed.
        found: &'static str,
    },

    /// Wrong number of arguments, carries the command's help text.
    #[error("{0}")]
    Usage(String),

    /// No command is registered under the name.
    #[error("method not found: {0}")]
    MethodNotFound(String),

    /// The request envelope was malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A failure that input validation should have ruled out.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RpcError {
    /// Returns the JSON-RPC error code reported for this error.
    pub fn code(&self) -> i64 {
        match self {
            Self::InvalidInputEncoding { .. }
            | Self::PayloadTooLarge { .. }
            | Self::MissingParam(_)
            | Self::UnknownParam(_) => RPC_INVALID_PARAMETER,
            Self::InvalidType { .. } => RPC_TYPE_ERROR,
            Self::Usage(_) => RPC_MISC_ERROR,
            Self::MethodNotFound(_) => RPC_METHOD_NOT_FOUND,
            Self::InvalidRequest(_) => RPC_INVALID_REQUEST,
            Self::Internal(_) => RPC_INTERNAL_ERROR,
        }
    }
}

/// Errors while assembling a [`CommandRegistry`](crate::CommandRegistry).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two commands were registered under the same name.
    #[error("command {0} registered twice")]
    DuplicateCommand(&'static str),
}

/// Wrapper result type.
pub type RpcResult<T> = Result<T, RpcError>;
