use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lyrical_elements_core::{
    tokenize::renderable, AppConfig, AudioTrack, Codec, DisplayToken, ExportFormat,
    ExportProgress, ExportSession, Lyrics, PlaybackClock, Quality, RasterEncoder, Recorder,
    RecordingSettings, ResolutionTier, TileRenderer,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> lyrical_elements_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize { text, json, all } => run_tokenize(&text, json, all),
        Commands::LineAt { lyrics, time_ms } => run_line_at(&lyrics, time_ms),
        Commands::Export(args) => run_export(args).await,
    }
}

fn run_tokenize(text: &str, json: bool, all: bool) -> lyrical_elements_core::Result<()> {
    let tokens = lyrical_elements_core::tokenize(text);
    let shown: Vec<&DisplayToken> = if all {
        tokens.iter().collect()
    } else {
        renderable(&tokens).collect()
    };
    tracing::debug!(total = tokens.len(), shown = shown.len(), "tokenized line");

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else {
        let symbols: Vec<&str> = shown.iter().map(|token| token.display_symbol()).collect();
        println!("{}", symbols.join(" "));
    }
    Ok(())
}

fn run_line_at(path: &PathBuf, time_ms: u64) -> lyrical_elements_core::Result<()> {
    let lyrics = Lyrics::from_path(path)?;
    match lyrics.line_at(time_ms as f64) {
        Some(line) => println!("{}", line.text),
        None => tracing::info!(time_ms, "no lyric line is active"),
    }
    Ok(())
}

async fn run_export(args: ExportArgs) -> lyrical_elements_core::Result<()> {
    let config = match &args.config {
        Some(path) => AppConfig::from_path(path)?,
        None => AppConfig::default(),
    };

    let mut request = config.export.to_request();
    if let Some(format) = args.format {
        request.format = format;
    }
    if let Some(resolution) = args.resolution {
        request.resolution = resolution;
    }
    if let Some(quality) = args.quality {
        request.quality = quality;
    }
    if let Some(codec) = args.codec {
        request.codec = codec;
    }
    if let Some(fps) = args.fps {
        request.frame_rate = fps;
    }
    if let Some(duration) = args.duration {
        request.duration_secs = duration;
    }
    if let Some(filename) = &args.filename {
        request.filename = filename.clone();
    }

    let lyrics = Lyrics::from_path(&args.lyrics)?;
    tracing::info!(
        path = ?args.lyrics,
        lines = lyrics.lines.len(),
        "loaded lyrics"
    );

    let mut renderer = TileRenderer::new(lyrics.clone(), config.render.clone());
    let mut encoder = RasterEncoder;
    let mut playback = PlaybackClock::at(args.at_ms as f64);
    let recorder = Recorder::new(RecordingSettings::from(&config.capture));

    let session = ExportSession {
        capturer: &mut renderer,
        encoder: &mut encoder,
        playback: &mut playback,
        lyrics: Some(&lyrics),
        audio: args.audio.clone().map(AudioTrack::new),
    };

    let artifact = recorder
        .export(&request, session, |progress: ExportProgress| {
            tracing::info!("{progress}");
        })
        .await?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&artifact.file_name));
    artifact.save(&output)?;
    tracing::info!(?output, bytes = artifact.bytes.len(), "wrote artifact");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Render lyrics as periodic-table tiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tiles a lyric line turns into.
    Tokenize {
        text: String,
        /// Emit tokens as JSON.
        #[arg(long)]
        json: bool,
        /// Keep characters that have no tile.
        #[arg(long)]
        all: bool,
    },
    /// Print the lyric line active at a playback position.
    LineAt {
        /// Lyrics JSON file.
        #[arg(short, long)]
        lyrics: PathBuf,
        #[arg(short, long)]
        time_ms: u64,
    },
    /// Render lyrics and export them as an image or animation.
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
struct ExportArgs {
    /// Lyrics JSON file.
    #[arg(short, long)]
    lyrics: PathBuf,
    /// Optional JSON config overriding the built-in defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    format: Option<ExportFormat>,
    #[arg(short, long)]
    resolution: Option<ResolutionTier>,
    #[arg(long)]
    quality: Option<Quality>,
    #[arg(long)]
    codec: Option<Codec>,
    #[arg(long)]
    fps: Option<u32>,
    /// Timeline length in seconds.
    #[arg(short, long)]
    duration: Option<u32>,
    /// Playback position for still captures.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,
    /// Audio file to attach to video exports.
    #[arg(long)]
    audio: Option<PathBuf>,
    /// Base name for the artifact (extension is added).
    #[arg(long)]
    filename: Option<String>,
    /// Where to write the artifact. Defaults to `<filename>.<ext>`.
    #[arg(short, long)]
    output: Option<PathBuf>,
}
