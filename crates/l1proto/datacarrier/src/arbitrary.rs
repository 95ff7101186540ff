use arbitrary::{Arbitrary, Unstructured};

use crate::{DEFAULT_MAX_PAYLOAD_LEN, DataCarrierCodec, DataCarrierScript};

impl<'a> Arbitrary<'a> for DataCarrierScript {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=DEFAULT_MAX_PAYLOAD_LEN)?;
        let payload = u.bytes(len)?;
        DataCarrierCodec::default()
            .encode(payload)
            .map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arbitrary_is_canonical() {
        let raw: Vec<u8> = (0..=255).cycle().take(4096).collect();
        let mut u = Unstructured::new(&raw);
        let codec = DataCarrierCodec::default();

        for _ in 0..16 {
            let Ok(script) = DataCarrierScript::arbitrary(&mut u) else {
                break;
            };
            assert!(codec.validate_canonical(script.as_script()));
        }
    }
}
