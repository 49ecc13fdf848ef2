//! The LSB carrier codec: one framed bit per carrier sample.

use crate::media::{HideBit, Media};

pub struct LsbCodec;

impl LsbCodec {
    /// Writes each bit into the least significant bit of the sample at the
    /// same index. Samples beyond the bitstream stay untouched, the carrier
    /// length never changes.
    ///
    /// Capacity must be validated by the caller up front (see
    /// [`crate::capacity::ensure_fits`]); the codec does not re-check.
    pub fn embed<I>(media: &mut Media, bits: I)
    where
        I: Iterator<Item = bool>,
    {
        for (sample, bit) in media.samples_mut().zip(bits) {
            sample.hide_bit(bit);
        }
    }

    /// The least significant bit of every sample, carrier order preserved,
    /// one bit per sample over the full carrier length. Finding where the
    /// payload ends is the framer's job.
    pub fn read(media: &Media) -> impl Iterator<Item = bool> + '_ {
        media.samples().map(|s| s.lsb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framing::{frame_bits, recover_payload};
    use crate::media::FlatImage;
    use hound::{SampleFormat, WavSpec};
    use image::ColorType;

    fn image_media(len: usize) -> Media {
        Media::from_image(FlatImage {
            width: len as u32,
            height: 1,
            color: ColorType::L8,
            bytes: (0..len).map(|i| (i % 256) as u8).collect(),
        })
    }

    fn audio_media(len: usize) -> Media {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        Media::from_audio((spec, (0..len).map(|i| (i as i16) - 600).collect()))
    }

    #[test]
    fn should_round_trip_a_payload_through_an_image() {
        let mut media = image_media(512);
        LsbCodec::embed(&mut media, frame_bits(b"hello"));
        let recovered = recover_payload(LsbCodec::read(&media)).unwrap();
        assert_eq!(recovered, b"hello");
    }

    #[test]
    fn should_round_trip_a_payload_through_audio() {
        let mut media = audio_media(512);
        LsbCodec::embed(&mut media, frame_bits(b"hello"));
        let recovered = recover_payload(LsbCodec::read(&media)).unwrap();
        assert_eq!(recovered, b"hello");
    }

    #[test]
    fn should_only_touch_the_least_significant_bits() {
        let mut media = image_media(512);
        let before: Vec<u8> = match &media {
            Media::Image(img) => img.bytes.clone(),
            _ => unreachable!(),
        };
        LsbCodec::embed(&mut media, frame_bits(b"hello"));
        let after = match &media {
            Media::Image(img) => &img.bytes,
            _ => unreachable!(),
        };
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(b & 0xFE, a & 0xFE, "upper 7 bits must be unchanged");
        }
    }

    #[test]
    fn should_leave_samples_beyond_the_bitstream_untouched() {
        let mut media = image_media(512);
        let before: Vec<u8> = match &media {
            Media::Image(img) => img.bytes.clone(),
            _ => unreachable!(),
        };
        let framed_bits = crate::framing::framed_bit_len(5);
        LsbCodec::embed(&mut media, frame_bits(b"hello"));
        let after = match &media {
            Media::Image(img) => &img.bytes,
            _ => unreachable!(),
        };
        assert_eq!(&before[framed_bits..], &after[framed_bits..]);
    }

    #[test]
    fn should_introduce_at_most_one_unit_of_noise_per_audio_sample() {
        let mut media = audio_media(512);
        let before: Vec<i16> = match &media {
            Media::Audio((_, samples)) => samples.clone(),
            _ => unreachable!(),
        };
        LsbCodec::embed(&mut media, frame_bits(b"noise"));
        let after = match &media {
            Media::Audio((_, samples)) => samples,
            _ => unreachable!(),
        };
        for (b, a) in before.iter().zip(after.iter()) {
            assert!((i32::from(*b) - i32::from(*a)).abs() <= 1);
            assert_eq!(*b < 0, *a < 0, "sign must be preserved");
        }
    }

    #[test]
    fn should_extract_identically_on_repeated_reads() {
        let mut media = image_media(512);
        LsbCodec::embed(&mut media, frame_bits(b"idempotent"));
        let first = recover_payload(LsbCodec::read(&media));
        let second = recover_payload(LsbCodec::read(&media));
        assert_eq!(first, second);
    }
}
