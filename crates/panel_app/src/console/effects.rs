use std::sync::mpsc;
use std::thread;

use panel_client::{ClientEvent, ClientHandle, ClientSettings};
use panel_core::{Effect, Msg};
use panel_logging::{panel_info, panel_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    /// Starts the client runtime and the pump that feeds settles back into
    /// the main loop.
    pub fn new(settings: ClientSettings, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (client, client_events) = ClientHandle::start(settings);
        spawn_event_pump(client_events, event_tx);
        Self { client }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJson { request_id, path } => {
                    panel_info!("FetchJson request_id={} path={}", request_id, path);
                    self.client.get(request_id, path);
                }
            }
        }
    }
}

fn spawn_event_pump(client_events: mpsc::Receiver<ClientEvent>, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Ok(event) = client_events.recv() {
            match event {
                ClientEvent::Settled { request_id, result } => {
                    let outcome = result.map_err(|failure| {
                        panel_warn!("request {} failed: {}", request_id, failure);
                        failure.to_string()
                    });
                    let msg = Msg::RequestSettled {
                        request_id,
                        outcome,
                    };
                    if event_tx.send(AppEvent::Core(msg)).is_err() {
                        break;
                    }
                }
            }
        }
    });
}
