/// wrap the low level sample types that carry one hidden bit each
#[derive(Debug, Eq, PartialEq)]
pub enum Sample {
    ImageChannel(u8),
    AudioSample(i16),
}

impl Sample {
    /// the least significant bit of the sample
    pub fn lsb(&self) -> bool {
        match self {
            Sample::ImageChannel(c) => c & 1 == 1,
            Sample::AudioSample(s) => s & 1 == 1,
        }
    }
}

impl From<u8> for Sample {
    fn from(value: u8) -> Self {
        Sample::ImageChannel(value)
    }
}

impl From<i16> for Sample {
    fn from(value: i16) -> Self {
        Sample::AudioSample(value)
    }
}

/// mutable sample for storing one hidden bit
#[derive(Debug, Eq, PartialEq)]
pub enum SampleMut<'a> {
    ImageChannel(&'a mut u8),
    AudioSample(&'a mut i16),
}

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for SampleMut<'_> {
    /// replaces the least significant bit, all higher order bits (and the
    /// sign of audio samples) stay untouched
    fn hide_bit(self, bit: bool) {
        match self {
            SampleMut::ImageChannel(c) => {
                *c = (*c & !1) | u8::from(bit);
            }
            SampleMut::AudioSample(s) => {
                *s = (*s & !1) | i16::from(bit);
            }
        }
    }
}
