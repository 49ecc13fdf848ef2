//! Carrier capacity checks, done before any sample is mutated.

use crate::error::GhostError;
use crate::framing::framed_bit_len;
use crate::media::Media;
use crate::result::Result;

/// Capacity of a carrier in bits: one bit per sample slot. For images that is
/// `width * height * channels`, for audio the flat sample count.
pub fn capacity(media: &Media) -> usize {
    media.sample_count()
}

/// `true` when the framed payload (message plus terminator) fits.
pub fn fits(media: &Media, payload_len: usize) -> bool {
    framed_bit_len(payload_len) <= capacity(media)
}

/// Validates capacity up front; embedding with insufficient capacity is a
/// programming error this guard exists to prevent.
pub fn ensure_fits(media: &Media, payload_len: usize) -> Result<()> {
    let required = framed_bit_len(payload_len);
    let available = capacity(media);
    if required > available {
        return Err(GhostError::CapacityExceeded {
            required,
            available,
        });
    }
    Ok(())
}
