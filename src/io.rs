use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    audio::operations::scale_to_gain,
    convert::{fits_pcm16, normalize_code, pcm16_from_sample},
};

/// Reads a text stream into character codes, upper-casing ASCII letters.
///
/// On a read error the codes converted so far are returned inside the error,
/// so the caller can decide whether to keep them.
pub fn read_codes(reader: impl Read) -> Result<Vec<u8>, InputError> {
    let mut codes = Vec::new();
    for byte in BufReader::new(reader).bytes() {
        match byte {
            Ok(byte) => codes.push(normalize_code(byte)),
            Err(source) => return Err(InputError::Read { partial: codes, source }),
        }
    }
    Ok(codes)
}

/// Opens a text file and reads it with [`read_codes`].
pub fn read_codes_from_path(path: impl AsRef<Path>) -> Result<Vec<u8>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Unavailable {
        path: path.to_owned(),
        source,
    })?;
    let codes = read_codes(file)?;
    tracing::debug!(path = %path.display(), codes = codes.len(), "read text");
    Ok(codes)
}

/// Counts reported after encoding a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PcmStats {
    /// Number of samples written.
    pub samples: usize,
    /// Number of samples that exceeded the 16-bit range and were saturated.
    pub clipped: usize,
}

impl PcmStats {
    /// Size of the encoded output in bytes.
    pub fn bytes(&self) -> usize {
        self.samples * std::mem::size_of::<i16>()
    }
}

/// Scales `data` by `gain` dB and writes it as headerless 16-bit little-endian mono PCM.
///
/// Encoding stops at the first write failure; whatever reached the sink stays there.
pub fn write_pcm(mut data: Vec<f64>, gain: f64, mut sink: impl Write) -> Result<PcmStats, PcmError> {
    scale_to_gain(&mut data, gain);

    let mut stats = PcmStats::default();
    for (index, &sample) in data.iter().enumerate() {
        if !fits_pcm16(sample) {
            stats.clipped += 1;
        }
        let value = pcm16_from_sample(sample);
        sink.write_all(&value.to_le_bytes())
            .map_err(|source| PcmError::Write { index, source })?;
        stats.samples += 1;
    }
    sink.flush().map_err(|source| PcmError::Write {
        index: data.len(),
        source,
    })?;

    if stats.clipped > 0 {
        tracing::warn!(
            clipped = stats.clipped,
            samples = stats.samples,
            gain,
            "samples exceeded the 16-bit range and were saturated"
        );
    }
    Ok(stats)
}

/// Creates (or truncates) the file at `path` and encodes `data` into it with [`write_pcm`].
pub fn write_pcm_file(data: Vec<f64>, gain: f64, path: impl AsRef<Path>) -> Result<PcmStats, PcmError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| PcmError::Unavailable {
        path: path.to_owned(),
        source,
    })?;
    let stats = write_pcm(data, gain, BufWriter::new(file))?;
    tracing::debug!(path = %path.display(), bytes = stats.bytes(), "wrote pcm");
    Ok(stats)
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to open text file {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read text after {} characters: {source}", .partial.len())]
    Read {
        /// Codes converted before the failure.
        partial: Vec<u8>,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum PcmError {
    #[error("Failed to open PCM file {} for writing: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write PCM sample {index}: {source}")]
    Write {
        /// Index of the sample being written when the sink failed.
        index: usize,
        #[source]
        source: std::io::Error,
    },
}
