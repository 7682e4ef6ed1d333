//! Property-based tests for the synthesis pipeline.

use edo26::{
    audio::operations::scale_to_gain,
    note::Letter,
    render_codes,
    voice::{HarmonicOscillator, ToneOpts, TriangleEnvelope},
    RenderOpts, Waveform,
};
use proptest::prelude::*;

fn waveform(square: bool) -> Waveform {
    if square {
        Waveform::Square
    } else {
        Waveform::Sawtooth
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every letter lands on its step of the 26-EDO scale within one octave above 110 Hz.
    #[test]
    fn letters_follow_pitch_table(code in b'A'..=b'Z') {
        let letter = Letter::from_code(code).unwrap();
        let expected = 110.0 * 2f64.powf((code as f64 - 65.0) / 26.0);
        prop_assert!((letter.frequency() - expected).abs() < 1e-9);
        prop_assert!(letter.frequency() >= 110.0 && letter.frequency() < 220.0);
    }

    /// No partial reaches Nyquist, and the count never exceeds what was asked for.
    #[test]
    fn partials_stay_below_nyquist(
        fundamental in 1.0f64..40000.0,
        sample_rate in 1000u32..192000,
        requested in 0usize..2000,
        square in any::<bool>(),
    ) {
        let wave = waveform(square);
        let nyquist = sample_rate as f64 / 2.0;
        let partials = wave.safe_partials(fundamental, nyquist, requested);
        prop_assert!(partials <= requested);
        if partials > 0 {
            prop_assert!(wave.harmonic(partials) * fundamental < nyquist);
        }
    }

    /// Asking for more overtones than fit below Nyquist renders the same tone.
    #[test]
    fn excess_overtones_do_not_change_output(
        fundamental in 50.0f64..4000.0,
        extra in 1usize..200,
        square in any::<bool>(),
    ) {
        let opts = ToneOpts {
            wave: waveform(square),
            duration: 0.01,
            overtones: 1000,
            gain: 0.0,
            sample_rate: 8000,
        };
        let safe = HarmonicOscillator::new(opts).partials(fundamental);
        let exact = HarmonicOscillator::new(ToneOpts { overtones: safe, ..opts });
        let greedy = HarmonicOscillator::new(ToneOpts { overtones: safe + extra, ..opts });
        prop_assert_eq!(exact.generate(fundamental), greedy.generate(fundamental));
    }

    /// Gains in dB add when scaling passes are chained.
    #[test]
    fn scaling_composes(
        samples in prop::collection::vec(-1.0f64..1.0, 0..64),
        first in -60.0f64..60.0,
        second in -60.0f64..60.0,
    ) {
        let mut twice = samples.clone();
        scale_to_gain(&mut twice, first);
        scale_to_gain(&mut twice, second);
        let mut once = samples;
        scale_to_gain(&mut once, first + second);
        // Anchoring on the minimum makes the rounding error track the largest
        // intermediate level rather than each sample's own magnitude.
        let bound = 10f64.powf((first.abs() + second.abs()) / 20.0);
        for (a, b) in twice.iter().zip(&once) {
            prop_assert!((a - b).abs() <= 1e-12 * (1.0 + bound), "{} vs {}", a, b);
        }
    }

    /// A constant buffer is shaped to silence at both ends and full level mid-way.
    #[test]
    fn envelope_peaks_mid_way(length in 2usize..5000, level in 0.1f64..2.0) {
        let mut tone = vec![level; length];
        TriangleEnvelope::apply(&mut tone);
        prop_assert_eq!(tone[0], 0.0);
        prop_assert!(tone[length - 1] <= 2.0 * level / length as f64 + 1e-12);
        prop_assert!((tone[length / 2] - level).abs() <= 2.0 * level / length as f64 + 1e-12);
        prop_assert!(tone.iter().all(|&s| s >= 0.0 && s <= level));
    }

    /// Segment lengths depend only on whether each code is a letter.
    #[test]
    fn segments_have_fixed_lengths(codes in prop::collection::vec(any::<u8>(), 0..8)) {
        let opts = RenderOpts { sample_rate: 4000, ..RenderOpts::default() };
        let letters = codes.iter().filter(|c| c.is_ascii_uppercase()).count();
        let others = codes.len() - letters;
        let data = render_codes(&codes, &opts);
        prop_assert_eq!(data.len(), letters * 400 + others * 800);
    }
}
