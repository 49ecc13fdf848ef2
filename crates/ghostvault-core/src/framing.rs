//! Terminated bitstream framing of the message payload.
//!
//! The payload bytes are followed by the literal terminator `###END###` and
//! emitted one bit at a time, most significant bit first per byte. The
//! terminator bytes are reserved: a literal `###END###` inside the payload
//! itself would end the recovery early. Encrypted payloads make such a
//! collision effectively improbable, this is an accepted limitation.

/// End of message marker inside the carrier.
pub const TERMINATOR: &[u8] = b"###END###";

/// Decoded prefixes shorter than this without a terminator are treated as
/// carrier noise rather than a hidden message. A heuristic floor, not a
/// cryptographic guarantee.
const NOISE_FLOOR: usize = 10;

/// Iterator over the bits of a byte stream, most significant bit first.
pub struct BitIterator<I> {
    bytes: I,
    byte: u8,
    remaining: u8,
}

impl<I> BitIterator<I> {
    pub fn new(bytes: I) -> Self {
        BitIterator {
            bytes,
            byte: 0,
            remaining: 0,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Iterator<Item = u8>,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            self.byte = self.bytes.next()?;
            self.remaining = 8;
        }
        self.remaining -= 1;
        Some((self.byte >> self.remaining) & 1 == 1)
    }
}

/// Serialize a payload into its framed bitstream: payload bytes, then the
/// terminator, 8 bits per byte MSB first. Yields exactly
/// [`framed_bit_len`]`(payload.len())` bits.
pub fn frame_bits(payload: &[u8]) -> impl Iterator<Item = bool> + '_ {
    BitIterator::new(payload.iter().chain(TERMINATOR).copied())
}

/// Bit length of a framed payload.
pub fn framed_bit_len(payload_len: usize) -> usize {
    (payload_len + TERMINATOR.len()) * 8
}

/// Reassemble the payload from a bitstream, scanning for the terminator.
///
/// Bits are regrouped into bytes MSB first. Recovery stops as soon as the
/// accumulated buffer ends with the terminator, which is stripped from the
/// result. When the bits run out without a terminator the whole buffer is
/// returned as a best effort, unless fewer than [`NOISE_FLOOR`] bytes were
/// decoded - then there is no hidden message.
pub fn recover_payload<I>(bits: I) -> Option<Vec<u8>>
where
    I: Iterator<Item = bool>,
{
    let mut buffer: Vec<u8> = Vec::new();
    let mut byte = 0u8;
    let mut filled = 0u8;

    for bit in bits {
        byte = (byte << 1) | u8::from(bit);
        filled += 1;
        if filled < 8 {
            continue;
        }
        buffer.push(byte);
        byte = 0;
        filled = 0;

        if buffer.ends_with(TERMINATOR) {
            buffer.truncate(buffer.len() - TERMINATOR.len());
            return Some(buffer);
        }
    }

    if buffer.len() < NOISE_FLOOR {
        None
    } else {
        Some(buffer)
    }
}

/// Decode payload bytes as UTF-8 text, skipping invalid sequences instead of
/// aborting. Keeps the scan robust against stray low-bit noise beyond the
/// intended payload.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut text = String::new();
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                text.push_str(&String::from_utf8_lossy(&rest[..valid_up_to]));
                let skip = e.error_len().unwrap_or(rest.len() - valid_up_to);
                rest = &rest[valid_up_to + skip..];
            }
        }
    }
    text
}
