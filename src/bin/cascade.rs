use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use cascade::{
    ChainConfig, DEFAULT_BASE_RES, DEFAULT_TRACK_RES, Gradient, RenderSettings, ResolutionEdit,
    Rgb8, TrackChain,
};

#[derive(Parser, Debug)]
#[command(name = "cascade", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chain as JSON.
    Snapshot(ChainArgs),
    /// Draw the chain as a PNG.
    Render(RenderArgs),
    /// Climb resolutions from a base and come back, then print the palette of the last track.
    Sweep(SweepArgs),
}

#[derive(Parser, Debug)]
struct ChainArgs {
    /// Chain config JSON.
    #[arg(long, conflicts_with_all = ["base", "tracks", "new_tracks", "start", "end"])]
    config: Option<PathBuf>,

    /// Base track resolution.
    #[arg(long)]
    base: Option<usize>,

    /// Append a track at this resolution (repeatable).
    #[arg(long = "track")]
    tracks: Vec<usize>,

    /// Append this many tracks at the default resolution.
    #[arg(long)]
    new_tracks: Option<usize>,

    /// Change a track resolution after building, as TRACK:RES (repeatable).
    #[arg(long = "edit")]
    edits: Vec<ResolutionEdit>,

    /// Gradient start color (hex or name).
    #[arg(long)]
    start: Option<Rgb8>,

    /// Gradient end color (hex or name).
    #[arg(long)]
    end: Option<Rgb8>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    chain: ChainArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Strip width in pixels.
    #[arg(long, default_value_t = RenderSettings::default().width)]
    width: u32,

    /// Height of each track strip in pixels.
    #[arg(long, default_value_t = RenderSettings::default().track_height)]
    track_height: u32,

    /// Space between strips in pixels.
    #[arg(long, default_value_t = RenderSettings::default().gap)]
    gap: u32,

    /// Do not outline cells.
    #[arg(long)]
    no_outline: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Base track resolution, also the resolution of the final track.
    #[arg(long, default_value_t = 23)]
    base: usize,

    /// Resolution increment between intermediate tracks.
    #[arg(long, default_value_t = 4)]
    step: usize,

    /// Intermediate resolutions stay below this bound.
    #[arg(long, default_value_t = 100)]
    max: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Snapshot(args) => cmd_snapshot(args),
        Command::Render(args) => cmd_render(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

impl ChainArgs {
    fn to_config(&self) -> anyhow::Result<ChainConfig> {
        let mut cfg = match &self.config {
            Some(path) => ChainConfig::from_path(path)?,
            None => {
                let defaults = Gradient::default();
                let mut cfg = ChainConfig::new(self.base.unwrap_or(DEFAULT_BASE_RES));
                cfg.gradient = Gradient::new(
                    self.start.unwrap_or(defaults.start),
                    self.end.unwrap_or(defaults.end),
                );
                cfg.tracks = self.tracks.clone();
                let extra = self.new_tracks.unwrap_or(0);
                cfg.tracks.extend(std::iter::repeat_n(DEFAULT_TRACK_RES, extra));
                cfg
            }
        };
        cfg.edits.extend(self.edits.iter().copied());
        Ok(cfg)
    }

    fn build(&self) -> anyhow::Result<TrackChain> {
        let cfg = self.to_config()?;
        Ok(cfg.build()?)
    }
}

fn cmd_snapshot(args: ChainArgs) -> anyhow::Result<()> {
    let chain = args.build()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &chain.snapshot()).context("write snapshot JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let chain = args.chain.build()?;

    let defaults = RenderSettings::default();
    let settings = RenderSettings {
        width: args.width,
        track_height: args.track_height,
        gap: args.gap,
        outline: if args.no_outline {
            None
        } else {
            defaults.outline
        },
        ..defaults
    };
    let raster = cascade::render_snapshot(&chain.snapshot(), &settings)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &raster.data,
        raster.width,
        raster.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.step > 0, "--step must be > 0");

    let mut resolutions: Vec<usize> = (args.base.saturating_add(args.step)..args.max)
        .step_by(args.step)
        .collect();
    resolutions.push(args.base);

    let chain = TrackChain::from_resolutions(Gradient::default(), args.base, &resolutions)?;
    let last = chain.tracks().last().context("chain has no tracks")?;
    let indices = cascade::palette_indices(last.values());
    tracing::info!(
        tracks = chain.track_count(),
        distinct = cascade::distinct_count(last.values()),
        blanks = last.blank_count(),
        "sweep done"
    );

    println!("{}", serde_json::to_string(&indices)?);
    Ok(())
}
