use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{info, warn};

use super::store::{BookStore, LoadError};
use crate::catalog::{Book, ReadingStats};

/// Requests the screens issue against the simulated backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataCommand {
    /// Load the browsing catalog. Tagged so overlapping loads can be told
    /// apart; only the newest generation's reply is applied.
    LoadCatalog { generation: u64 },
    LoadDashboard,
    SubmitLogin { email: String },
    SubmitRegistration { email: String },
}

/// Replies flowing back into the UI event loop.
#[derive(Debug)]
pub enum DataEvent {
    Catalog {
        generation: u64,
        result: Result<Vec<Book>, LoadError>,
    },
    Dashboard {
        featured: Vec<Book>,
        stats: ReadingStats,
    },
    LoginAccepted {
        email: String,
    },
    RegistrationAccepted,
}

/// Artificial round-trip latency per request kind, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Delays {
    pub catalog_ms: u64,
    pub dashboard_ms: u64,
    pub login_ms: u64,
    pub register_ms: u64,
}

const COMMAND_BUFFER: usize = 16;

/// Spawn the worker task servicing [`DataCommand`]s, replying through
/// `reply` after the configured delay. Commands are handled in arrival
/// order, one at a time, like the single mock backend they emulate.
pub fn spawn_worker<F>(
    handle: &Handle,
    store: BookStore,
    delays: Delays,
    reply: F,
) -> mpsc::Sender<DataCommand>
where
    F: Fn(DataEvent) + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel::<DataCommand>(COMMAND_BUFFER);

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            let event = service(&store, delays, command).await;
            reply(event);
        }
        info!("data worker shutting down: command channel closed");
    });

    tx
}

async fn service(store: &BookStore, delays: Delays, command: DataCommand) -> DataEvent {
    match command {
        DataCommand::LoadCatalog { generation } => {
            sleep(Duration::from_millis(delays.catalog_ms)).await;
            let result = store.catalog();
            match &result {
                Ok(books) => info!(generation, count = books.len(), "catalog loaded"),
                Err(err) => warn!(generation, error = %err, "catalog load failed"),
            }
            DataEvent::Catalog { generation, result }
        }
        DataCommand::LoadDashboard => {
            sleep(Duration::from_millis(delays.dashboard_ms)).await;
            let featured = store.featured();
            let stats = store.stats();
            info!(featured = featured.len(), "dashboard loaded");
            DataEvent::Dashboard { featured, stats }
        }
        DataCommand::SubmitLogin { email } => {
            sleep(Duration::from_millis(delays.login_ms)).await;
            // The mock backend accepts any validated credentials.
            info!("login accepted");
            DataEvent::LoginAccepted { email }
        }
        DataCommand::SubmitRegistration { email: _ } => {
            sleep(Duration::from_millis(delays.register_ms)).await;
            info!("registration accepted");
            DataEvent::RegistrationAccepted
        }
    }
}
