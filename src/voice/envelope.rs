/// A symmetric attack/decay envelope spanning a fixed number of samples.
///
/// The amplitude rises linearly from 0 to 1 over the first half and falls back
/// towards 0 over the second half.
#[derive(Clone, Copy, Debug)]
pub struct TriangleEnvelope {
    /// Total length of the envelope in samples.
    length: usize,
    /// Index of the next sample.
    index: usize,
}

impl TriangleEnvelope {
    pub fn new(length: usize) -> Self {
        Self { length, index: 0 }
    }

    /// Returns `true` once every sample of the envelope has been produced.
    pub fn finished(&self) -> bool {
        self.index >= self.length
    }

    /// Produces the amplitude for the next sample, or 0 once finished.
    pub fn process(&mut self) -> f64 {
        if self.finished() {
            return 0.0;
        }
        let t = self.index as f64 / self.length as f64;
        self.index += 1;
        if t < 0.5 {
            2.0 * t
        } else {
            2.0 * (1.0 - t)
        }
    }

    /// Shapes a whole tone in place with an envelope matching its length.
    pub fn apply(tone: &mut [f64]) {
        let mut envelope = Self::new(tone.len());
        for sample in tone.iter_mut() {
            *sample *= envelope.process();
        }
    }
}
