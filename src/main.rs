//! Tilt Maze entry point
//!
//! On the web the library's `WebMaze` is driven from JS. Natively this runs a
//! headless session with a seeded random hand on the joystick and logs how it
//! ends.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::env;

    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use tilt_maze::consts::FRAME_MS;
    use tilt_maze::platform::Driver;
    use tilt_maze::sim::{Session, TickOutcome};
    use tilt_maze::{MazeLayout, Tuning};

    /// Frames between joystick moves
    const HAND_PERIOD: u64 = 30;

    /// Runtime knobs for the demo (not physics tuning)
    struct DemoConfig {
        seed: u64,
        frames: u64,
        hard_mode: bool,
        layout_path: Option<String>,
    }

    impl DemoConfig {
        fn from_env() -> Self {
            Self {
                seed: env::var("TILT_MAZE_SEED")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(42),
                frames: env::var("TILT_MAZE_FRAMES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3600),
                hard_mode: env::var("TILT_MAZE_HARD")
                    .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
                layout_path: env::args().nth(1),
            }
        }
    }

    fn load_layout(path: Option<&str>) -> Result<MazeLayout, Box<dyn std::error::Error>> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                log::info!("Loading layout from {path}");
                Ok(MazeLayout::from_json(&json)?)
            }
            None => Ok(MazeLayout::default()),
        }
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let config = DemoConfig::from_env();
        let layout = load_layout(config.layout_path.as_deref())?;
        let session = Session::new(layout, Tuning::default())?;

        let mut driver = Driver::new(session);
        if config.hard_mode {
            driver.key("h");
        }

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let origin = Vec2::ZERO;
        driver.pointer_down(origin);
        log::info!(
            "Running {} frames with seed {} (hard mode: {})",
            config.frames,
            config.seed,
            driver.session.hard_mode
        );

        for frame in 0..config.frames {
            if frame % HAND_PERIOD == 0 {
                let pointer = Vec2::new(rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0));
                driver.pointer_move(origin + pointer);
            }

            let snapshot = driver.frame(frame as f64 * FRAME_MS);
            match snapshot.outcome {
                TickOutcome::Won => {
                    log::info!("Won on frame {frame}");
                    return Ok(());
                }
                TickOutcome::Lost { hazard } => {
                    log::info!("Lost to hazard {hazard} on frame {frame}");
                    return Ok(());
                }
                TickOutcome::Continue | TickOutcome::Inactive => {}
            }
        }

        for particle in &driver.session.particles {
            log::info!(
                "{} at ({:.1}, {:.1})",
                particle.name,
                particle.pos.x,
                particle.pos.y
            );
        }
        log::info!("Stopped after {} frames without a result", config.frames);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tilt Maze (native, headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}
