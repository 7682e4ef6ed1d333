use crate::util::hz_from_step;

/// An upper-case ASCII letter, which sounds as one step of the 26-EDO scale.
///
/// `A` is the lowest step (110 Hz) and `Z` the highest, just under an octave above.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Returns the letter for a character code, or `None` for anything outside `A`..=`Z`.
    pub fn from_code(code: u8) -> Option<Self> {
        code.is_ascii_uppercase().then_some(Self(code))
    }

    /// Position of the letter within the scale, from 0 (`A`) to 25 (`Z`).
    pub fn step(&self) -> u8 {
        self.0 - b'A'
    }

    pub fn frequency(&self) -> f64 {
        hz_from_step(self.step())
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

impl std::fmt::Debug for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2} Hz)", self.0 as char, self.frequency())
    }
}
