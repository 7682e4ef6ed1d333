use anyhow::Context;
use clap::{Parser, ValueEnum};
use edo26::{read_codes_from_path, render_codes, write_pcm_file, InputError, RenderOpts, Waveform};
use std::{path::PathBuf, time::Duration};
use tracing_subscriber::EnvFilter;

const EPIGRAPH: [&str; 8] = [
    "",
    "I set myself many more constraints:",
    "I placed the sounds as you do letters,",
    "one after the other, so as to create",
    "forms and sequences",
    "",
    "- Bernard Parmegiani: Sound Thinking",
    "",
];

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum CliWaveform {
    #[default]
    Sawtooth,
    Square,
}

impl From<CliWaveform> for Waveform {
    fn from(w: CliWaveform) -> Self {
        match w {
            CliWaveform::Sawtooth => Waveform::Sawtooth,
            CliWaveform::Square => Waveform::Square,
        }
    }
}

/// Plays text as a 26-tone-per-octave melody, written out as raw 16-bit PCM.
#[derive(Parser)]
#[command(name = "edo26", version, about, long_about = None)]
struct Cli {
    /// Text file to read
    #[arg(value_name = "INPUT", default_value = "README.txt")]
    input: PathBuf,

    /// Output PCM file (mono, 16-bit signed little-endian, no header)
    #[arg(short, long, default_value = "26EDO.pcm")]
    output: PathBuf,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    sample_rate: u32,

    /// Gain applied to the whole recording before encoding, in dB
    #[arg(long, default_value_t = 85.0, allow_negative_numbers = true)]
    gain: f64,

    /// Gain applied to each tone, in dB
    #[arg(long, default_value_t = 83.0, allow_negative_numbers = true)]
    tone_gain: f64,

    /// Number of partials per tone, limited to those below Nyquist
    #[arg(long, default_value_t = 10)]
    overtones: usize,

    /// Tone length in seconds
    #[arg(long, default_value_t = 0.1)]
    tone_duration: f64,

    /// Silence length for non-letters in seconds
    #[arg(long, default_value_t = 0.2)]
    silence_duration: f64,

    /// Tone waveform
    #[arg(long, value_enum, default_value_t)]
    wave: CliWaveform,

    /// Fail if the input cannot be fully read, instead of rendering what was read
    #[arg(long)]
    strict: bool,

    /// Print the epigraph once the file is written
    #[arg(long)]
    epigraph: bool,
}

impl Cli {
    fn render_opts(&self) -> RenderOpts {
        RenderOpts {
            sample_rate: self.sample_rate,
            tone_duration: self.tone_duration,
            silence_duration: self.silence_duration,
            overtones: self.overtones,
            tone_gain: self.tone_gain,
            output_gain: self.gain,
            wave: self.wave.into(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = cli.render_opts();

    let codes = match read_codes_from_path(&cli.input) {
        Ok(codes) => codes,
        Err(err) if cli.strict => return Err(err).context("reading input"),
        Err(InputError::Read { partial, source }) => {
            tracing::error!(error = %source, kept = partial.len(), "input read failed, rendering partial text");
            partial
        }
        Err(err) => {
            tracing::error!(error = %err, "input unavailable, rendering nothing");
            Vec::new()
        }
    };
    tracing::info!(input = %cli.input.display(), codes = codes.len(), "read text");

    if opts.total_samples(&codes).is_none() {
        anyhow::bail!(
            "{} characters at --tone-duration {} / --silence-duration {} s do not fit in one buffer",
            codes.len(),
            opts.tone_duration,
            opts.silence_duration
        );
    }

    let data = render_codes(&codes, &opts);
    let stats = write_pcm_file(data, opts.output_gain, &cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    tracing::info!(
        output = %cli.output.display(),
        samples = stats.samples,
        bytes = stats.bytes(),
        clipped = stats.clipped,
        sample_rate = opts.sample_rate,
        "wrote pcm"
    );

    if cli.epigraph {
        for line in EPIGRAPH {
            println!("{line}");
            std::thread::sleep(Duration::from_millis(600));
        }
    }

    Ok(())
}
