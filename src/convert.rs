/// Full-scale value a sample of 1.0 maps to.
pub const PCM16_FULL_SCALE: f64 = 32767.0;

/// Upper-cases ASCII letters; every other byte passes through unchanged.
pub fn normalize_code(byte: u8) -> u8 {
    byte.to_ascii_uppercase()
}

/// Converts a sample to a 16-bit PCM value, truncating towards zero.
///
/// Samples outside the representable range saturate at `i16::MIN`/`i16::MAX`
/// rather than wrapping; use [`fits_pcm16`] to detect them.
pub fn pcm16_from_sample(sample: f64) -> i16 {
    (sample * PCM16_FULL_SCALE) as i16
}

/// Returns `true` if the sample converts to 16-bit PCM without saturating.
pub fn fits_pcm16(sample: f64) -> bool {
    let value = (sample * PCM16_FULL_SCALE).trunc();
    value >= i16::MIN as f64 && value <= i16::MAX as f64
}
