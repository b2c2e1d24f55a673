//! CRC-16/CCITT-FALSE
//!
//! The checksum EMVCo QR payloads carry in their final field: polynomial
//! 0x1021, initial register 0xFFFF, MSB-first, no final XOR. Computed over
//! the payload one byte at a time.

/// Compute the CRC-16/CCITT-FALSE of a payload string
pub fn crc16_ccitt_false(payload: &str) -> u16 {
    let mut reg: u16 = 0xFFFF;
    for &byte in payload.as_bytes() {
        reg ^= (byte as u16) << 8;
        for _ in 0..8 {
            if reg & 0x8000 != 0 {
                reg = (reg << 1) ^ 0x1021;
            } else {
                reg <<= 1;
            }
        }
    }
    reg
}

/// Render a CRC as the 4 uppercase hex digits the payload ends with
pub fn checksum_hex(payload: &str) -> String {
    format!("{:04X}", crc16_ccitt_false(payload))
}
