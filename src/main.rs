//! Tilt Ball entry point
//!
//! Headless runner: feeds a synthetic tilt stream into a session and logs
//! the ball's trajectory.
//!
//! Usage: `tilt-ball [settings.json] [--seed N] [--samples N]`

use std::process::ExitCode;

use tilt_ball::{BallSession, Settings, TiltScript};

/// Default number of samples to simulate
const DEFAULT_SAMPLES: usize = 600;
/// Log one position line every N samples
const REPORT_EVERY: usize = 30;

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    settings_path: Option<String>,
    seed: Option<u64>,
    samples: Option<usize>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a value")?;
                    parsed.seed = Some(value.parse().map_err(|e| format!("bad seed {value:?}: {e}"))?);
                }
                "--samples" => {
                    let value = args.next().ok_or("--samples needs a value")?;
                    parsed.samples =
                        Some(value.parse().map_err(|e| format!("bad sample count {value:?}: {e}"))?);
                }
                flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
                path => parsed.settings_path = Some(path.to_string()),
            }
        }
        Ok(parsed)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Tilt Ball (headless) starting...");

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let settings = match &args.settings_path {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let mut session = BallSession::new(settings.sensor);
    if let Err(e) = session.init_field(settings.field_width, settings.field_height, settings.ball_size) {
        log::error!("Invalid field settings: {e}");
        return ExitCode::FAILURE;
    }

    let seed = args.seed.unwrap_or(0);
    let samples = args.samples.unwrap_or(DEFAULT_SAMPLES);
    log::info!("Running {} samples at {} Hz, seed {}", samples, settings.sample_rate_hz, seed);

    let mut contacts = 0usize;
    for (i, sample) in TiltScript::new(seed, settings.sample_rate_hz).take(samples).enumerate() {
        let Some(pos) = session.on_sensor_sample(&sample) else {
            continue;
        };

        for contact in session.last_contacts().iter() {
            contacts += 1;
            if settings.log_contacts {
                log::info!("Contact: {} wall at t={:.3}s", contact.edge.as_str(), sample.timestamp_ns as f64 * 1e-9);
            }
        }

        if i % REPORT_EVERY == 0 {
            log::info!("t={:.2}s position=({:.1}, {:.1})", sample.timestamp_ns as f64 * 1e-9, pos.x, pos.y);
        }
    }

    if let Some(ball) = session.ball() {
        let snapshot = ball.snapshot();
        log::info!(
            "Finished: position=({:.1}, {:.1}) velocity=({:.1}, {:.1}), {} wall contacts",
            snapshot.pos.x,
            snapshot.pos.y,
            snapshot.vel.x,
            snapshot.vel.y,
            contacts
        );
    }

    ExitCode::SUCCESS
}
