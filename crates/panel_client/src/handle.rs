use std::sync::{mpsc, Arc};
use std::thread;

use panel_logging::panel_debug;

use crate::fetch::{ClientSettings, Fetcher, ReqwestFetcher};
use crate::{ClientEvent, RequestId};

enum ClientCommand {
    Get { request_id: RequestId, path: String },
}

/// Command side of the client runtime.
///
/// The runtime is a dedicated thread owning a tokio runtime; every command
/// is spawned as its own task, so overlapping requests proceed independently
/// and settle in arrival order. The handle is cheap to clone; settle events
/// arrive on the receiver returned by [`ClientHandle::start`].
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    /// Starts the runtime and returns the handle plus the settle-event side.
    pub fn start(settings: ClientSettings) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    /// Enqueues a GET for `path`; the outcome arrives as a [`ClientEvent`].
    pub fn get(&self, request_id: RequestId, path: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Get {
            request_id,
            path: path.into(),
        });
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Get { request_id, path } => {
            panel_debug!("GET {} request_id={}", path, request_id);
            let result = fetcher.fetch_json(&path).await;
            let _ = event_tx.send(ClientEvent::Settled { request_id, result });
        }
    }
}
