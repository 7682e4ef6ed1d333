pub use self::envelope::TriangleEnvelope;
pub use self::oscillator::{HarmonicOscillator, ToneOpts, Waveform};

mod envelope;
pub mod oscillator;

/// Renders one enveloped tone at `fundamental` Hz.
pub fn render_tone(oscillator: &HarmonicOscillator, fundamental: f64) -> Vec<f64> {
    let mut tone = oscillator.generate(fundamental);
    TriangleEnvelope::apply(&mut tone);
    tone
}
