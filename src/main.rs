//! Split Bullets headless runner
//!
//! Drives a session with a fixed frame time and no window, building each
//! frame's draw data and mixing cues as a real backend would, then reports
//! pool statistics.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use split_bullets::audio::AudioManager;
use split_bullets::consts::MAX_FRAME_DT;
use split_bullets::platform::{Assets, SoundId, TextureId};
use split_bullets::renderer::Frame;
use split_bullets::{FrameInput, GameConfig, GamePhase, Session};

#[derive(Parser)]
#[command(name = "split-bullets")]
#[command(version, about = "Run the bullet judgment loop headless", long_about = None)]
struct Cli {
    /// JSON config file (defaults are used for missing keys)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated seconds to run
    #[arg(short, long, default_value_t = 10.0)]
    seconds: f32,

    /// Simulated frames per second
    #[arg(long, default_value_t = 144)]
    fps: u32,

    /// Start on the title screen and press start on the first frame
    #[arg(long)]
    menu: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    log::info!("Split Bullets (headless) v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    config.start_in_menu |= cli.menu;
    anyhow::ensure!(cli.fps > 0, "--fps must be positive");
    anyhow::ensure!(cli.seconds >= 0.0, "--seconds must not be negative");

    // The backend would load these from disk; headless runs only need ids
    let assets = Assets::new(TextureId(1), SoundId(1));
    let mut audio = AudioManager::new(&config.audio);
    let mut session = Session::new(config, assets);
    let mut frame = Frame::new();

    let dt = (1.0 / cli.fps as f32).min(MAX_FRAME_DT);
    let total_frames = (cli.seconds * cli.fps as f32).round() as u64;
    let mut cues = 0usize;
    let mut vertex_bytes = 0usize;

    for frame_index in 0..total_frames {
        let input = FrameInput {
            start: frame_index == 0,
            pause: false,
        };
        let outcome = session.tick(input, dt, &mut audio);
        if outcome.report.judged > 0 {
            log::debug!(
                "Frame {frame_index}: {} judged, {} hits",
                outcome.report.judged,
                session.hits()
            );
        }

        frame.begin();
        session.draw(&mut frame);
        vertex_bytes = vertex_bytes.max(frame.vertex_bytes().len());
        cues += audio.drain().count();

        if (frame_index + 1) % cli.fps as u64 == 0 {
            log::info!(
                "t={}s hits={} {}",
                (frame_index + 1) / cli.fps as u64,
                session.hits(),
                session.pool().stats()
            );
        }

        if session.phase() == GamePhase::GameOver {
            log::info!("Run complete after {} frames", frame_index + 1);
            break;
        }
    }

    session.pool().log_stats();
    log::info!(
        "Spawned {} bullets, {} hits, {} cues mixed, peak vertex buffer {} bytes",
        session.spawned_total(),
        session.hits(),
        cues,
        vertex_bytes
    );
    Ok(())
}
