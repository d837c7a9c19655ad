//! State shared between callers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use pursuit_core::commands::MatchCommand;
use pursuit_core::events::MatchEvent;
use pursuit_core::state::MatchSnapshot;

/// Messages to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command forwarded to the match engine.
    Match(MatchCommand),
    /// Stop the loop.
    Shutdown,
}

/// Output the loop publishes after every iteration.
#[derive(Debug, Default)]
pub struct Published {
    pub snapshot: Option<MatchSnapshot>,
    /// Events not yet collected by `session::drain_events`.
    pub events: Vec<MatchEvent>,
}

/// Session handle. `Sender` is not `Sync`, hence the mutex around it.
pub struct AppState {
    /// `None` until `session::start_session`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub published: Arc<Mutex<Published>>,
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            published: Arc::new(Mutex::new(Published::default())),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
