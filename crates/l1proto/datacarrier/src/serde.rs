use std::str::FromStr;

use bitcoin::opcodes::Opcode;
use serde::de;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MARKER, DEFAULT_MAX_PAYLOAD_LEN};
use crate::{CarrierConfig, DataCarrierScript};

impl Serialize for DataCarrierScript {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&self.to_hex())
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for DataCarrierScript {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = DataCarrierScript;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "a hex-encoded data-carrier script")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<DataCarrierScript, E> {
                    DataCarrierScript::from_str(v).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            struct BytesVisitor;

            impl<'de> de::Visitor<'de> for BytesVisitor {
                type Value = DataCarrierScript;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "data-carrier script bytes")
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<DataCarrierScript, E> {
                    DataCarrierScript::try_from(v.to_vec()).map_err(E::custom)
                }

                fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<DataCarrierScript, E> {
                    DataCarrierScript::try_from(v).map_err(E::custom)
                }
            }

            d.deserialize_byte_buf(BytesVisitor)
        }
    }
}

/// Wire form of [`CarrierConfig`], with the marker as its opcode byte.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCarrierConfig {
    #[serde(default = "default_marker")]
    marker: u8,

    #[serde(default = "default_max_payload_len")]
    max_payload_len: usize,
}

fn default_marker() -> u8 {
    DEFAULT_MARKER.to_u8()
}

fn default_max_payload_len() -> usize {
    DEFAULT_MAX_PAYLOAD_LEN
}

impl Serialize for CarrierConfig {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        RawCarrierConfig {
            marker: self.marker().to_u8(),
            max_payload_len: self.max_payload_len(),
        }
        .serialize(s)
    }
}

impl<'de> Deserialize<'de> for CarrierConfig {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = RawCarrierConfig::deserialize(d)?;
        CarrierConfig::new(Opcode::from(raw.marker), raw.max_payload_len).map_err(de::Error::custom)
    }
}
