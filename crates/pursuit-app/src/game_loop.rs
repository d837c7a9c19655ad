//! Game loop thread.
//!
//! The engine lives inside the thread. Commands arrive over `mpsc`; each
//! iteration drains them, fires a due AI move, publishes the snapshot and
//! sleeps for the poll interval.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use pursuit_core::constants::LOOP_POLL_INTERVAL_MS;
use pursuit_sim::{EngineConfig, MatchEngine};

use crate::error::AppError;
use crate::state::{GameLoopCommand, Published};

pub const POLL_INTERVAL: Duration = Duration::from_millis(LOOP_POLL_INTERVAL_MS);

/// Spawn the loop thread. Returns the command sender and the join handle.
pub fn spawn_game_loop(
    config: EngineConfig,
    published: Arc<Mutex<Published>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("pursuit-game-loop".into())
        .spawn(move || run_game_loop(config, cmd_rx, &published))?;

    Ok((cmd_tx, handle))
}

fn run_game_loop(
    config: EngineConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    published: &Mutex<Published>,
) {
    info!(seed = config.seed, "game loop started");
    let mut engine = MatchEngine::new(config);

    loop {
        let now = Instant::now();
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Match(cmd)) => {
                    debug!(?cmd, "command received");
                    engine.submit_at(cmd, now);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shut down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    warn!("command channel disconnected, stopping game loop");
                    return;
                }
            }
        }

        engine.poll(Instant::now());
        publish(&mut engine, published);
        std::thread::sleep(POLL_INTERVAL);
    }
}

fn publish(engine: &mut MatchEngine, published: &Mutex<Published>) {
    let events = engine.drain_events();
    match published.lock() {
        Ok(mut out) => {
            out.snapshot = Some(engine.snapshot());
            out.events.extend(events);
        }
        Err(_) => warn!("published state poisoned, snapshot dropped"),
    }
}
