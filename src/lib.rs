pub mod audio;
pub mod convert;
pub mod engine;
pub mod io;
pub mod note;
pub mod util;
pub mod voice;

pub use engine::{render_codes, render_to_pcm, RenderOpts};
pub use io::{read_codes, read_codes_from_path, write_pcm, write_pcm_file, InputError, PcmError, PcmStats};
pub use voice::Waveform;
