//! Synchronous facade over the game loop.

use pursuit_core::commands::MatchCommand;
use pursuit_core::events::MatchEvent;
use pursuit_core::state::MatchSnapshot;
use pursuit_sim::EngineConfig;
use tracing::{info, warn};

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand, Published};

/// Spawn the game loop unless one is already running.
pub fn start_session(state: &AppState, config: EngineConfig) -> Result<(), AppError> {
    let mut tx_lock = state.command_tx.lock()?;
    if tx_lock.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    *state.published.lock()? = Published::default();
    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.published.clone())?;
    *tx_lock = Some(cmd_tx);
    *state.loop_thread.lock()? = Some(handle);
    info!("session started");
    Ok(())
}

/// Forward a command to the running match.
pub fn send_command(state: &AppState, command: MatchCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock()?;
    let tx = tx_lock.as_ref().ok_or(AppError::NotStarted)?;
    tx.send(GameLoopCommand::Match(command))
        .map_err(|_| AppError::Disconnected)
}

/// Latest published snapshot. `None` until the loop completes one iteration.
pub fn get_snapshot(state: &AppState) -> Result<Option<MatchSnapshot>, AppError> {
    Ok(state.published.lock()?.snapshot.clone())
}

/// Take the events published since the last call.
pub fn drain_events(state: &AppState) -> Result<Vec<MatchEvent>, AppError> {
    Ok(std::mem::take(&mut state.published.lock()?.events))
}

/// Stop the loop and wait for the thread to exit.
pub fn shutdown_session(state: &AppState) -> Result<(), AppError> {
    let tx = state.command_tx.lock()?.take().ok_or(AppError::NotStarted)?;
    // The loop may already have exited; joining below covers both cases.
    let _ = tx.send(GameLoopCommand::Shutdown);

    if let Some(handle) = state.loop_thread.lock()?.take() {
        if handle.join().is_err() {
            warn!("game loop thread panicked");
        }
    }
    info!("session stopped");
    Ok(())
}
