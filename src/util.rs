/// Frequency of the lowest step of the scale, in Hz.
pub const BASE_FREQUENCY: f64 = 110.0;

/// Number of equal steps the octave is divided into.
pub const STEPS_PER_OCTAVE: u8 = 26;

/// Converts a relative gain in dB to the corresponding voltage ratio/scaling factor.
pub fn scale_from_gain(gain: f64) -> f64 {
    10.0_f64.powf(gain / 20.0)
}

/// Converts a step of the 26-EDO scale to a frequency in Hz.
pub fn hz_from_step(step: u8) -> f64 {
    BASE_FREQUENCY * 2.0_f64.powf(step as f64 / STEPS_PER_OCTAVE as f64)
}

/// Number of samples needed to hold `duration` seconds of audio.
///
/// Negative or non-finite durations produce an empty buffer.
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    let samples = (duration * sample_rate as f64).round();
    if samples.is_finite() && samples > 0.0 {
        samples as usize
    } else {
        0
    }
}
