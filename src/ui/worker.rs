//! Bridge between the synchronous UI loop and the async service layer.
//!
//! The UI pushes [`UiCommand`]s through a bounded channel; the worker runs
//! them on the tokio runtime and reports completions back through the
//! event channel so the next frame redraws from fresh snapshots.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc;

use crate::api::{CatalogService, Credentials};
use crate::catalog::{CatalogController, FetchOptions};
use crate::notify::Notifier;
use crate::session::Session;
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 32;

/// What the UI can ask the async layer to do.
#[derive(Debug, PartialEq)]
pub enum UiCommand {
    Fetch(FetchOptions),
    Login(Credentials),
    Logout,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Spawn the command worker onto the current tokio runtime.
///
/// Fetches and logins each run as their own task: a reset dispatched while
/// an append is still in flight must start immediately for the stale fetch
/// to be superseded rather than queued behind.
pub fn spawn_worker<S, N>(
    controller: CatalogController<S, N>,
    session: Session,
    events: Sender<AppEvent>,
) -> UiCommandSender
where
    S: CatalogService,
    N: Notifier,
{
    let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);

    tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::Fetch(options) => {
                    let controller = controller.clone();
                    let events = events.clone();
                    tokio::spawn(async move {
                        controller.fetch(options).await;
                        let _ = events.send(AppEvent::CatalogChanged);
                    });
                }
                UiCommand::Login(credentials) => {
                    let session = session.clone();
                    let events = events.clone();
                    tokio::spawn(async move {
                        session.login(credentials).await;
                        let _ = events.send(AppEvent::SessionChanged);
                    });
                }
                UiCommand::Logout => {
                    session.logout();
                    let _ = events.send(AppEvent::SessionChanged);
                }
            }
        }
        tracing::debug!("ui command channel closed, worker exiting");
    });

    tx
}
