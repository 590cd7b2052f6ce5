//! CRC-16/CCITT-FALSE, the checksum closing every EMV payload.
//!
//! Parameters: polynomial `0x1021`, initial register `0xFFFF`, no input or
//! output reflection, no final XOR. CRC-16/XMODEM shares the polynomial but
//! starts from `0x0000`; its checksums are rejected by PIX readers.

/// Generator polynomial (x^16 + x^12 + x^5 + 1).
pub const POLYNOMIAL: u16 = 0x1021;

/// Initial register value.
pub const INITIAL: u16 = 0xFFFF;

/// Compute the CRC-16/CCITT-FALSE of `data`.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut crc = INITIAL;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Render a checksum as the 4 uppercase hex digits used in tag 63.
pub fn crc16_hex(crc: u16) -> String {
    hex::encode_upper(crc.to_be_bytes())
}
