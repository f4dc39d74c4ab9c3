use axum::{
    extract::{Query, State, WebSocketUpgrade, ws::{Message, WebSocket}},
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

use hostelhub_store::StoreEvent;

use crate::state::AppState;

/// Collection names clients may watch.
const COLLECTIONS: [&str; 9] = [
    "students",
    "rooms",
    "complaints",
    "leave_applications",
    "notifications",
    "staff",
    "fee_records",
    "health_records",
    "food_feedback",
];

#[derive(Debug, Deserialize)]
pub struct WsParams {
    /// Watch one collection; omit to watch them all.
    pub collection: Option<String>,
}

pub async fn ws_upgrade(
    State(state): State<AppState>,
    Query(params): Query<WsParams>,
    ws: WebSocketUpgrade,
) -> Response {
    let names: Vec<&'static str> = match params.collection.as_deref() {
        Some(name) => match COLLECTIONS.iter().find(|c| **c == name) {
            Some(c) => vec![c],
            None => {
                return Response::builder()
                    .status(400)
                    .body("Unknown collection".into())
                    .unwrap();
            }
        },
        None => COLLECTIONS.to_vec(),
    };

    ws.on_upgrade(move |socket| handle_socket(socket, state, names))
}

/// Streams store change events to the client until it disconnects. The
/// client re-fetches the projections it renders whenever an event lands.
async fn handle_socket(socket: WebSocket, state: AppState, names: Vec<&'static str>) {
    info!(collections = names.len(), "WebSocket connected");

    let (event_tx, mut event_rx) = mpsc::channel::<StoreEvent>(64);
    let mut forwarders = Vec::new();
    for name in names {
        let mut events = state.store.subscribe(name);
        let event_tx = event_tx.clone();
        forwarders.push(tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        if event_tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(name, skipped, "WebSocket subscriber lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }));
    }
    drop(event_tx);

    let (mut sender, mut receiver) = socket.split();

    loop {
        tokio::select! {
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                let Ok(text) = serde_json::to_string(&event) else { continue };
                if sender.send(Message::text(text)).await.is_err() {
                    break;
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Ping(data))) => {
                        let _ = sender.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    for task in forwarders {
        task.abort();
    }
    info!("WebSocket disconnected");
}
