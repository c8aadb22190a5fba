use crate::utils::error::Result;
use rodio::source::UniformSourceIterator;
use rodio::{Decoder, Source};
use std::io::{Read, Seek};

/// Decodes a compressed sound into interleaved 16-bit samples with a fixed channel count.
///
/// The sample rate is the source's own; sources with another channel count are up- or
/// down-mixed to `channels`.
pub struct SoundDecoder<R>
where
    R: Read + Seek + Send + Sync + 'static,
{
    samples: UniformSourceIterator<Decoder<R>, i16>,
    sample_rate: u32,
    channels: u16,
}

impl<R> SoundDecoder<R>
where
    R: Read + Seek + Send + Sync + 'static,
{
    pub fn new(reader: R, channels: u16) -> Result<Self> {
        let decoder = Decoder::new(reader)?;
        let sample_rate = decoder.sample_rate();
        tracing::debug!(
            "Decoder opened: {} Hz, {} channel(s)",
            sample_rate,
            decoder.channels()
        );

        Ok(Self {
            samples: UniformSourceIterator::new(decoder, channels, sample_rate),
            sample_rate,
            channels,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Fills `buf` with the next samples. Returns 0 at end of stream.
    pub fn read(&mut self, buf: &mut [i16]) -> usize {
        let mut filled = 0;
        for slot in buf.iter_mut() {
            match self.samples.next() {
                Some(sample) => {
                    *slot = sample;
                    filled += 1;
                }
                None => break,
            }
        }
        filled
    }
}
