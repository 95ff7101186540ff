//! This crate contains the types and logic for carrying opaque payloads in
//! unspendable data-carrier scripts, i.e. `OP_RETURN <payload>` outputs.
//!
//! # Examples
//!
//! ```
//! use strata_l1_datacarrier::DataCarrierCodec;
//!
//! let codec = DataCarrierCodec::default();
//! let script = codec.encode(&[0xde, 0xad, 0xbe, 0xef]).unwrap();
//! assert_eq!(script.to_hex(), "6a04deadbeef");
//! assert_eq!(codec.decode(script.as_script()).unwrap(), &[0xde, 0xad, 0xbe, 0xef]);
//! ```

#[cfg(feature = "arbitrary")]
mod arbitrary;
#[cfg(feature = "borsh")]
mod borsh;
mod codec;
mod config;
mod error;
mod push;
mod script;
#[cfg(feature = "serde")]
mod serde;

// Only exercised by the serde tests.
#[cfg(all(test, not(feature = "serde")))]
use {bincode as _, serde_json as _};

pub use codec::DataCarrierCodec;
pub use config::{CarrierConfig, DEFAULT_MARKER, DEFAULT_MAX_PAYLOAD_LEN};
pub use error::{ConfigError, DataCarrierError, DataCarrierResult, PushDefect};
pub use script::DataCarrierScript;
