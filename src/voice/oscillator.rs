use std::f64::consts::TAU;

use crate::{audio::operations::scale_to_gain, util::sample_count};

/// The harmonic series an oscillator sums.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Waveform {
    /// Every harmonic `n` at amplitude `1/n`.
    #[default]
    Sawtooth,
    /// Odd harmonics `2n - 1` at amplitude `1/(2n - 1)`.
    Square,
}

impl Waveform {
    /// Harmonic number of the `partial`th partial, counting from 1.
    pub fn harmonic(self, partial: usize) -> f64 {
        match self {
            Waveform::Sawtooth => partial as f64,
            Waveform::Square => 2.0 * partial as f64 - 1.0,
        }
    }

    /// Largest number of partials, up to `requested`, whose highest harmonic of
    /// `fundamental` stays strictly below `nyquist`.
    pub fn safe_partials(self, fundamental: f64, nyquist: f64, requested: usize) -> usize {
        if !(fundamental > 0.0 && fundamental.is_finite() && nyquist > 0.0) {
            return 0;
        }
        let top = |partials: usize| self.harmonic(partials) * fundamental;

        let mut partials = requested;
        if partials > 0 && top(partials) >= nyquist {
            let ratio = nyquist / fundamental;
            let limit = match self {
                Waveform::Sawtooth => ratio.floor(),
                Waveform::Square => ((ratio + 1.0) / 2.0).floor(),
            };
            partials = (limit as usize).min(requested);
            // The closed-form limit lands exactly on Nyquist when it divides evenly.
            while partials > 0 && top(partials) >= nyquist {
                partials -= 1;
            }
        }
        partials
    }
}

/// Parameters shared by every tone an oscillator renders.
#[derive(Clone, Copy, Debug)]
pub struct ToneOpts {
    pub wave: Waveform,
    /// Tone length in seconds.
    pub duration: f64,
    /// Requested number of partials, before Nyquist limiting.
    pub overtones: usize,
    pub gain: f64,
    pub sample_rate: u32,
}

/// An additive oscillator that renders band-limited tones from sine partials.
#[derive(Clone, Copy, Debug)]
pub struct HarmonicOscillator {
    opts: ToneOpts,
}

impl HarmonicOscillator {
    pub fn new(opts: ToneOpts) -> Self {
        Self { opts }
    }

    pub fn nyquist(&self) -> f64 {
        self.opts.sample_rate as f64 / 2.0
    }

    /// Number of partials that will actually be summed for `fundamental`.
    pub fn partials(&self, fundamental: f64) -> usize {
        self.opts
            .wave
            .safe_partials(fundamental, self.nyquist(), self.opts.overtones)
    }

    /// Renders one tone at `fundamental` Hz, already scaled to the configured gain.
    ///
    /// A fundamental at or above Nyquist (or otherwise unplayable) renders silence
    /// of the configured length.
    pub fn generate(&self, fundamental: f64) -> Vec<f64> {
        let ToneOpts {
            wave,
            duration,
            gain,
            sample_rate,
            ..
        } = self.opts;

        let partials = self.partials(fundamental);
        if partials < self.opts.overtones {
            tracing::debug!(
                fundamental,
                requested = self.opts.overtones,
                partials,
                "limited partials below nyquist"
            );
        }

        let mut data = vec![0.0; sample_count(duration, sample_rate)];
        let sample_rate = sample_rate as f64;
        for partial in 1..=partials {
            let harmonic = wave.harmonic(partial);
            let freq = harmonic * fundamental;
            let amp = 1.0 / harmonic;
            let phase_inc = (TAU * freq) / sample_rate;

            let mut phase = 0.0_f64;
            for sample in data.iter_mut() {
                *sample += amp * phase.sin();
                phase += phase_inc;
                if phase >= TAU {
                    phase -= TAU;
                }
            }
        }

        scale_to_gain(&mut data, gain);
        data
    }
}
