use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use hound::{WavReader, WavSpec, WavWriter};
use image::codecs::png::PngEncoder;
use image::{ColorType, DynamicImage, ImageEncoder};
use log::error;

use crate::error::GhostError;
use crate::media::{Persist, Sample, SampleMut};
use crate::result::Result;

pub type WavAudio = (WavSpec, Vec<i16>);

/// A loaded image as the flat sample sequence the codec operates on:
/// row-major, channel-interleaved bytes, `width * height * channels` long.
#[derive(Debug, Clone)]
pub struct FlatImage {
    pub width: u32,
    pub height: u32,
    pub color: ColorType,
    pub bytes: Vec<u8>,
}

impl FlatImage {
    /// Flattens a decoded image. 8-bit layouts keep their channel count as
    /// loaded, anything fancier is normalized to RGBA8.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let (color, bytes) = match img {
            DynamicImage::ImageLuma8(b) => (ColorType::L8, b.into_raw()),
            DynamicImage::ImageLumaA8(b) => (ColorType::La8, b.into_raw()),
            DynamicImage::ImageRgb8(b) => (ColorType::Rgb8, b.into_raw()),
            DynamicImage::ImageRgba8(b) => (ColorType::Rgba8, b.into_raw()),
            other => (ColorType::Rgba8, other.to_rgba8().into_raw()),
        };
        Self {
            width,
            height,
            color,
            bytes,
        }
    }
}

/// a media container for steganography
#[derive(Debug)]
pub enum Media {
    Image(FlatImage),
    Audio(WavAudio),
}

impl Media {
    pub fn from_image(img: FlatImage) -> Self {
        Self::Image(img)
    }

    pub fn from_audio(audio: WavAudio) -> Self {
        Self::Audio(audio)
    }

    /// Loads a carrier from disk, gated by file extension: `.png`, `.jpg` and
    /// `.jpeg` are decoded as images, `.wav` as 16-bit PCM audio.
    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(GhostError::UnsupportedMedia);
        };
        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => Ok(Self::Image(FlatImage::from_dynamic(
                image::open(f).map_err(|_e| GhostError::InvalidImageMedia)?,
            ))),
            "wav" => {
                let mut reader = WavReader::open(f).map_err(|_e| GhostError::InvalidAudioMedia)?;
                let spec = reader.spec();
                let samples = reader
                    .samples::<i16>()
                    .collect::<std::result::Result<Vec<i16>, _>>()
                    .map_err(|_e| GhostError::InvalidAudioMedia)?;

                Ok(Self::Audio((spec, samples)))
            }
            _ => Err(GhostError::UnsupportedMedia),
        }
    }

    /// Number of one-bit sample slots the carrier exposes. Multi-channel
    /// audio counts the flat sample list, the same as mono.
    pub fn sample_count(&self) -> usize {
        match self {
            Media::Image(img) => img.bytes.len(),
            Media::Audio((_spec, samples)) => samples.len(),
        }
    }

    /// All samples in carrier order.
    pub fn samples(&self) -> Box<dyn Iterator<Item = Sample> + '_> {
        match self {
            Media::Image(img) => Box::new(img.bytes.iter().copied().map(Sample::ImageChannel)),
            Media::Audio((_spec, samples)) => {
                Box::new(samples.iter().copied().map(Sample::AudioSample))
            }
        }
    }

    /// All samples in carrier order, mutable.
    pub fn samples_mut(&mut self) -> Box<dyn Iterator<Item = SampleMut<'_>> + '_> {
        match self {
            Media::Image(img) => Box::new(img.bytes.iter_mut().map(SampleMut::ImageChannel)),
            Media::Audio((_spec, samples)) => {
                Box::new(samples.iter_mut().map(SampleMut::AudioSample))
            }
        }
    }

    /// Writes the carrier to `writer`. Images always go out as PNG: the
    /// output format must be lossless or the embedded bits would not survive.
    pub fn save_to_writer<W: std::io::Write + std::io::Seek>(&mut self, mut writer: W) -> Result<()> {
        match self {
            Media::Image(img) => PngEncoder::new(&mut writer)
                .write_image(&img.bytes, img.width, img.height, img.color)
                .map_err(|e| {
                    error!("Error saving image: {e}");
                    GhostError::ImageEncodingError
                }),
            Media::Audio((spec, samples)) => {
                let mut wav_writer =
                    WavWriter::new(writer, *spec).map_err(|_| GhostError::AudioCreationError)?;
                for s in samples.iter() {
                    wav_writer
                        .write_sample(*s)
                        .map_err(|_| GhostError::AudioEncodingError)?;
                }
                wav_writer
                    .finalize()
                    .map_err(|_| GhostError::AudioEncodingError)?;

                Ok(())
            }
        }
    }
}

impl Persist for Media {
    /// Writes the carrier to `file`. The extension is not honored for
    /// images: they always come out as PNG, so a `.jpg` target name ends up
    /// holding PNG bytes that [`Media::from_file`] will refuse to load.
    /// Use a `.png` output name.
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            GhostError::WriteError { source: e }
        })?;
        self.save_to_writer(BufWriter::new(f))
    }
}
