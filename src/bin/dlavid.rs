use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Render a DLA coordinate file into an MP4 of the structure growing.
#[derive(Parser, Debug)]
#[command(name = "dlavid", version)]
struct Cli {
    /// Input coordinate file, one `x, y` pair per line.
    filename: PathBuf,

    /// Video frame rate.
    #[arg(short, long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Canvas width and height in pixels.
    #[arg(short, long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Integer upscale factor per frame; values <= 1 keep native resolution.
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    rescale: i64,

    /// Coordinates consumed per emitted frame.
    #[arg(short = 'k', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    skip: u32,

    /// Directory receiving `videoN.mp4`.
    #[arg(short, long, default_value = "videos")]
    output_dir: PathBuf,

    /// Encoder executable.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: OsString,

    /// Video codec passed to the encoder.
    #[arg(long, default_value = "mpeg4")]
    codec: String,

    /// Log level used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let rescale = frame_scale(cli.rescale)?;
    let cfg = dlavid::RenderConfig {
        size: cli.size,
        fps: cli.fps,
        rescale,
        skip: cli.skip,
        output_dir: cli.output_dir,
        encoder: dlavid::FfmpegOpts {
            program: cli.ffmpeg,
            codec: cli.codec,
            overwrite: true,
        },
        frames_parent: None,
    };

    if !dlavid::is_encoder_available(&cfg.encoder.program) {
        tracing::warn!(
            program = %cfg.encoder.program.to_string_lossy(),
            "encoder did not answer -version; encoding will likely fail"
        );
    }

    let out = dlavid::render_to_video(&cli.filename, &cfg)?;

    eprintln!(
        "wrote {} ({} frames, {:.2}s)",
        out.path.display(),
        out.stats.frames,
        out.stats.duration_secs()
    );
    Ok(())
}

/// Map the `--rescale` flag onto an upscale factor, with `<= 1` meaning native size.
fn frame_scale(rescale: i64) -> anyhow::Result<u32> {
    u32::try_from(rescale.max(1)).with_context(|| format!("rescale {rescale} is too large"))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
