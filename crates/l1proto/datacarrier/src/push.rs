//! Length prefixes of script data pushes.

use bitcoin::opcodes::all::OP_PUSHDATA1;

/// Length of the shortest header that can push `len` bytes.
///
/// ```text
/// 0..=75        <len>
/// 76..=255      OP_PUSHDATA1 <u8>
/// 256..=65535   OP_PUSHDATA2 <u16 le>
/// larger        OP_PUSHDATA4 <u32 le>
/// ```
pub(crate) fn minimal_header_len(len: usize) -> usize {
    if len < OP_PUSHDATA1.to_u8() as usize {
        1
    } else if len <= 0xff {
        2
    } else if len <= 0xffff {
        3
    } else {
        5
    }
}

/// Length of a carrier script with a one-byte marker and a `len` byte payload.
pub(crate) fn carrier_script_len(len: usize) -> usize {
    1 + minimal_header_len(len) + len
}
