//! Encoding and decoding payloads as data-carrier scripts.

use bitcoin::{Script, ScriptBuf, Transaction, script::PushBytesBuf};

use crate::config::CarrierConfig;
use crate::error::{DataCarrierError, DataCarrierResult};
use crate::script::{DataCarrierScript, split_carrier};

/// Codec between payloads and data-carrier scripts under a [`CarrierConfig`].
#[derive(Clone, Debug, Default)]
pub struct DataCarrierCodec {
    config: CarrierConfig,
}

impl DataCarrierCodec {
    /// Constructs a new instance.
    pub fn new(config: CarrierConfig) -> Self {
        Self { config }
    }

    /// Gets the config this codec enforces.
    pub fn config(&self) -> &CarrierConfig {
        &self.config
    }

    /// Builds the script `<marker> <payload>`, pushing the payload with the
    /// shortest length prefix.
    pub fn encode(&self, payload: &[u8]) -> DataCarrierResult<DataCarrierScript> {
        self.check_payload_len(payload.len())?;

        let pushbytes = PushBytesBuf::try_from(payload.to_vec())?;
        let script = ScriptBuf::builder()
            .push_opcode(self.config.marker())
            .push_slice(pushbytes)
            .into_script();

        let payload_offset = script.len() - payload.len();
        Ok(DataCarrierScript::from_parts_unchecked(
            script,
            payload_offset,
        ))
    }

    /// Extracts the payload from a data-carrier script.
    ///
    /// Returns [`DataCarrierError::NotDataCarrier`] if the script doesn't
    /// start with the configured marker followed by exactly one push, and
    /// [`DataCarrierError::MalformedPush`] if that push is truncated or not
    /// minimally encoded.
    pub fn decode<'s>(&self, script: &'s Script) -> DataCarrierResult<&'s [u8]> {
        let (_, payload) = split_carrier(script, Some(self.config.marker()))?;
        self.check_payload_len(payload.len())?;
        Ok(payload)
    }

    /// Checks if the script is a canonical data-carrier script under this
    /// codec's config, i.e. if [`Self::decode`] would accept it.
    pub fn validate_canonical(&self, script: &Script) -> bool {
        self.decode(script).is_ok()
    }

    /// Validates an owned script and wraps it.
    pub fn parse(&self, script: ScriptBuf) -> DataCarrierResult<DataCarrierScript> {
        self.decode(&script)?;
        DataCarrierScript::try_from(script)
    }

    /// Finds the first output of a transaction that is a data-carrier script,
    /// returning its index and payload.
    pub fn find_in_tx<'t>(&self, tx: &'t Transaction) -> Option<(usize, &'t [u8])> {
        tx.output
            .iter()
            .enumerate()
            .find_map(|(vout, out)| Some((vout, self.decode(&out.script_pubkey).ok()?)))
    }

    fn check_payload_len(&self, len: usize) -> DataCarrierResult<()> {
        let max = self.config.max_payload_len();
        if len > max {
            return Err(DataCarrierError::PayloadTooLarge { len, max });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bitcoin::{
        Amount, TxOut, absolute,
        opcodes::all::{OP_DUP, OP_NOP, OP_PUSHDATA1, OP_RETURN},
        transaction::Version,
    };
    use proptest::prelude::*;

    use super::*;
    use crate::config::DEFAULT_MAX_PAYLOAD_LEN;
    use crate::error::PushDefect;

    fn script_from_hex(s: &str) -> ScriptBuf {
        ScriptBuf::from_bytes(hex::decode(s).unwrap())
    }

    fn tx_with_outputs(scripts: Vec<ScriptBuf>) -> Transaction {
        Transaction {
            version: Version::TWO,
            lock_time: absolute::LockTime::ZERO,
            input: Vec::new(),
            output: scripts
                .into_iter()
                .map(|script_pubkey| TxOut {
                    value: Amount::ZERO,
                    script_pubkey,
                })
                .collect(),
        }
    }

    #[test]
    fn test_encode_deadbeef() {
        let codec = DataCarrierCodec::default();
        let script = codec.encode(&[0xde, 0xad, 0xbe, 0xef]).unwrap();
        assert_eq!(script.to_hex(), "6a04deadbeef");
        assert!(script.as_script().is_op_return());
    }

    #[test]
    fn test_encode_empty() {
        let codec = DataCarrierCodec::default();
        let script = codec.encode(&[]).unwrap();
        assert_eq!(script.as_bytes(), &[OP_RETURN.to_u8(), 0x00]);
        assert_eq!(codec.decode(script.as_script()).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_encode_single_byte_keeps_length_prefix() {
        let codec = DataCarrierCodec::default();
        for b in [0x00, 0x01, 0x10, 0x81, 0xff] {
            let script = codec.encode(&[b]).unwrap();
            assert_eq!(script.as_bytes(), &[OP_RETURN.to_u8(), 0x01, b]);
            assert_eq!(codec.decode(script.as_script()).unwrap(), &[b]);
        }
    }

    #[test]
    fn test_encode_max_size() {
        let codec = DataCarrierCodec::default();

        let payload = vec![0xaa; DEFAULT_MAX_PAYLOAD_LEN];
        let script = codec.encode(&payload).unwrap();
        let bytes = script.as_bytes();
        assert_eq!(bytes.len(), 83);
        assert_eq!(bytes[1], OP_PUSHDATA1.to_u8());
        assert_eq!(bytes[2] as usize, DEFAULT_MAX_PAYLOAD_LEN);
        assert_eq!(script.payload(), payload.as_slice());

        let oversized = vec![0xaa; DEFAULT_MAX_PAYLOAD_LEN + 1];
        match codec.encode(&oversized).unwrap_err() {
            DataCarrierError::PayloadTooLarge { len, max } => {
                assert_eq!(len, DEFAULT_MAX_PAYLOAD_LEN + 1);
                assert_eq!(max, DEFAULT_MAX_PAYLOAD_LEN);
            }
            e => panic!("test: expected PayloadTooLarge (got {e:?})"),
        }
    }

    #[test]
    fn test_header_switches_at_76() {
        let codec = DataCarrierCodec::new(CarrierConfig::new(OP_RETURN, 300).unwrap());

        let script = codec.encode(&[0x01; 75]).unwrap();
        assert_eq!(&script.as_bytes()[..2], &[0x6a, 75]);

        let script = codec.encode(&[0x01; 76]).unwrap();
        assert_eq!(&script.as_bytes()[..3], &[0x6a, 0x4c, 76]);

        let script = codec.encode(&[0x01; 256]).unwrap();
        assert_eq!(&script.as_bytes()[..4], &[0x6a, 0x4d, 0x00, 0x01]);
        assert_eq!(codec.decode(script.as_script()).unwrap(), &[0x01; 256]);
    }

    #[test]
    fn test_encode_deterministic() {
        let codec = DataCarrierCodec::default();
        let payload = b"some game state hash";
        let a = codec.encode(payload).unwrap();
        let b = codec.encode(payload).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_custom_marker() {
        let codec = DataCarrierCodec::new(CarrierConfig::new(OP_NOP, 8).unwrap());
        let script = codec.encode(&[0x01, 0x02]).unwrap();
        assert_eq!(script.to_hex(), "61020102");
        assert_eq!(script.marker(), OP_NOP);
        assert_eq!(codec.decode(script.as_script()).unwrap(), &[0x01, 0x02]);

        // The default codec expects OP_RETURN.
        let res = DataCarrierCodec::default().decode(script.as_script());
        assert!(matches!(res, Err(DataCarrierError::NotDataCarrier)));
    }

    #[test]
    fn test_decode_wrong_marker() {
        let codec = DataCarrierCodec::default();
        let script = ScriptBuf::builder()
            .push_opcode(OP_DUP) // not OP_RETURN
            .push_slice(PushBytesBuf::from(&[0xde, 0xad, 0xbe, 0xef]))
            .into_script();

        assert!(matches!(
            codec.decode(&script),
            Err(DataCarrierError::NotDataCarrier)
        ));
        assert!(!codec.validate_canonical(&script));
    }

    #[test]
    fn test_wrong_marker_wins_over_bad_push() {
        let codec = DataCarrierCodec::default();
        let script = script_from_hex("764c04deadbeef");
        assert!(matches!(
            codec.decode(&script),
            Err(DataCarrierError::NotDataCarrier)
        ));
    }

    #[test]
    fn test_decode_trailing_elements() {
        let codec = DataCarrierCodec::default();
        let script = ScriptBuf::builder()
            .push_opcode(OP_RETURN)
            .push_slice(PushBytesBuf::from(&[0x01, 0x02]))
            .push_slice(PushBytesBuf::from(&[0x03]))
            .into_script();

        assert!(matches!(
            codec.decode(&script),
            Err(DataCarrierError::NotDataCarrier)
        ));
    }

    #[test]
    fn test_decode_non_minimal_push() {
        let codec = DataCarrierCodec::default();
        let script = script_from_hex("6a4c04deadbeef");
        assert!(matches!(
            codec.decode(&script),
            Err(DataCarrierError::MalformedPush(PushDefect::NonMinimal { len: 4, header_len: 2 }))
        ));
        assert!(!codec.validate_canonical(&script));
    }

    #[test]
    fn test_decode_truncated_push() {
        let codec = DataCarrierCodec::default();
        let script = script_from_hex("6a08deadbeef");
        assert!(matches!(
            codec.decode(&script),
            Err(DataCarrierError::MalformedPush(PushDefect::Truncated))
        ));
    }

    #[test]
    fn test_decode_over_config_limit() {
        let wide = DataCarrierCodec::new(CarrierConfig::new(OP_RETURN, 200).unwrap());
        let script = wide.encode(&[0x07; 100]).unwrap();

        let narrow = DataCarrierCodec::default();
        assert!(matches!(
            narrow.decode(script.as_script()),
            Err(DataCarrierError::PayloadTooLarge { len: 100, max: 80 })
        ));
    }

    #[test]
    fn test_parse() {
        let codec = DataCarrierCodec::default();
        let script = codec.parse(script_from_hex("6a03abcdef")).unwrap();
        assert_eq!(script.payload(), &[0xab, 0xcd, 0xef]);

        assert!(codec.parse(script_from_hex("6a4c03abcdef")).is_err());
    }

    #[test]
    fn test_find_in_tx() {
        let codec = DataCarrierCodec::default();
        let carrier = codec.encode(b"hash").unwrap().into_script_buf();
        let tx = tx_with_outputs(vec![
            script_from_hex("76a914000000000000000000000000000000000000000088ac"),
            script_from_hex("6a4c04deadbeef"),
            carrier,
        ]);

        let (vout, payload) = codec.find_in_tx(&tx).unwrap();
        assert_eq!(vout, 2);
        assert_eq!(payload, b"hash");

        let tx = tx_with_outputs(vec![script_from_hex("6a")]);
        assert!(codec.find_in_tx(&tx).is_none());
    }

    proptest! {
        #[test]
        fn proptest_roundtrip(payload in prop::collection::vec(any::<u8>(), 0..=DEFAULT_MAX_PAYLOAD_LEN)) {
            let codec = DataCarrierCodec::default();
            let script = codec.encode(&payload).unwrap();
            prop_assert!(codec.validate_canonical(script.as_script()));
            prop_assert_eq!(codec.decode(script.as_script()).unwrap(), payload.as_slice());
            prop_assert_eq!(script.payload(), payload.as_slice());
        }

        #[test]
        fn proptest_roundtrip_wide(payload in prop::collection::vec(any::<u8>(), 0..=520usize)) {
            let codec = DataCarrierCodec::new(CarrierConfig::new(OP_RETURN, 520).unwrap());
            let script = codec.encode(&payload).unwrap();
            prop_assert_eq!(codec.decode(script.as_script()).unwrap(), payload.as_slice());

            let reparsed = DataCarrierScript::try_from(script.as_bytes().to_vec()).unwrap();
            prop_assert_eq!(reparsed, script);
        }
    }
}
