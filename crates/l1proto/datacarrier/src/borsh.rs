use std::io;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::DataCarrierScript;

impl BorshSerialize for DataCarrierScript {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        BorshSerialize::serialize(self.as_bytes(), writer)
    }
}

impl BorshDeserialize for DataCarrierScript {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let bytes = Vec::<u8>::deserialize_reader(reader)?;
        DataCarrierScript::try_from(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
