//! Turns a sequence of character codes into one rendered buffer.

use std::collections::HashMap;
use std::io::Write;

use crate::{
    io::{write_pcm, PcmError, PcmStats},
    note::Letter,
    util::sample_count,
    voice::{render_tone, HarmonicOscillator, ToneOpts, Waveform},
};

/// Settings for rendering text to audio.
#[derive(Clone, Copy, Debug)]
pub struct RenderOpts {
    pub sample_rate: u32,
    /// Length of each letter's tone in seconds.
    pub tone_duration: f64,
    /// Length of the gap rendered for every other character, in seconds.
    pub silence_duration: f64,
    pub overtones: usize,
    pub tone_gain: f64,
    /// Gain applied to the whole buffer before encoding, in dB.
    pub output_gain: f64,
    pub wave: Waveform,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            tone_duration: 0.1,
            silence_duration: 0.2,
            overtones: 10,
            tone_gain: 83.0,
            output_gain: 85.0,
            wave: Waveform::Sawtooth,
        }
    }
}

impl RenderOpts {
    pub fn tone_opts(&self) -> ToneOpts {
        ToneOpts {
            wave: self.wave,
            duration: self.tone_duration,
            overtones: self.overtones,
            gain: self.tone_gain,
            sample_rate: self.sample_rate,
        }
    }

    /// Number of samples rendered for a letter.
    pub fn tone_samples(&self) -> usize {
        sample_count(self.tone_duration, self.sample_rate)
    }

    /// Number of samples rendered for any other character.
    pub fn silence_samples(&self) -> usize {
        sample_count(self.silence_duration, self.sample_rate)
    }

    /// Length of the buffer `codes` render to, or `None` if it could not be allocated.
    pub fn total_samples(&self, codes: &[u8]) -> Option<usize> {
        let (tone, silence) = (self.tone_samples(), self.silence_samples());
        let total = codes.iter().try_fold(0usize, |total, &code| match Letter::from_code(code) {
            Some(_) => total.checked_add(tone),
            None => total.checked_add(silence),
        })?;
        (total <= MAX_SAMPLES).then_some(total)
    }
}

/// Largest sample buffer a `Vec<f64>` can hold.
const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Renders each code in order: letters become enveloped tones, everything else silence.
///
/// Segments are butted together with no overlap. Repeated letters reuse the tone
/// rendered for their first occurrence.
pub fn render_codes(codes: &[u8], opts: &RenderOpts) -> Vec<f64> {
    let oscillator = HarmonicOscillator::new(opts.tone_opts());
    let silence = opts.silence_samples();
    let mut tones: HashMap<Letter, Vec<f64>> = HashMap::new();

    let mut result = Vec::with_capacity(opts.total_samples(codes).unwrap_or(0));

    for &code in codes {
        match Letter::from_code(code) {
            Some(letter) => {
                let tone = tones
                    .entry(letter)
                    .or_insert_with(|| render_tone(&oscillator, letter.frequency()));
                result.extend_from_slice(tone);
            }
            None => result.resize(result.len() + silence, 0.0),
        }
    }

    tracing::debug!(
        codes = codes.len(),
        letters = tones.len(),
        samples = result.len(),
        "rendered text"
    );
    result
}

/// Renders `codes` and encodes the result as 16-bit PCM into `sink`.
pub fn render_to_pcm(codes: &[u8], opts: &RenderOpts, sink: impl Write) -> Result<PcmStats, PcmError> {
    let data = render_codes(codes, opts);
    write_pcm(data, opts.output_gain, sink)
}
