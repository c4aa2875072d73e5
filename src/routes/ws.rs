//! WebSocket upgrade + message loop. Each connection drives its own `SimulatorFlow`;
//! every client message gets exactly one JSON reply.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug, warn};
use uuid::Uuid;

use crate::error::FlowError;
use crate::flow::SimulatorFlow;
use crate::logic::{get_hint_text, list_scenarios};
use crate::protocol::{scenario_out, verdict_out, ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "client_simulator", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state), fields(conn = %Uuid::new_v4()))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "client_simulator", "WebSocket connected");
  let mut flow = SimulatorFlow::new(state.catalog);
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "client_simulator", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &mut flow, &state).await
          }
          Err(e) => ServerWsMessage::Error { code: "InvalidMessage".into(), message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "code": "Internal", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "client_simulator", error = %e, "WS send error");
          break;
        }
      }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "client_simulator", "WebSocket disconnected");
}

pub(crate) async fn handle_client_ws(
  msg: ClientWsMessage,
  flow: &mut SimulatorFlow<'_>,
  state: &AppState,
) -> ServerWsMessage {
  let result = match msg {
    ClientWsMessage::Ping => Ok(ServerWsMessage::Pong),

    ClientWsMessage::ListScenarios => Ok(ServerWsMessage::Scenarios { scenarios: list_scenarios(state) }),

    ClientWsMessage::SelectScenario { scenario_id } => flow
      .select(&scenario_id)
      .map(|s| ServerWsMessage::Scenario { scenario: scenario_out(s) }),

    ClientWsMessage::BeginAnswer => flow
      .begin_answer()
      .map(|scenario_id| ServerWsMessage::Answering { scenario_id }),

    ClientWsMessage::SubmitChoice { choice_key } => flow.submit(&choice_key).map(|v| {
      let verdict = verdict_out(&v);
      info!(target: "simulator", %choice_key, score = verdict.score, category = verdict.category.as_str(), "WS choice evaluated");
      ServerWsMessage::Verdict { verdict }
    }),

    ClientWsMessage::Retry => flow.retry().map(|scenario_id| ServerWsMessage::Answering { scenario_id }),

    ClientWsMessage::BackToSelection => {
      flow.back_to_selection();
      Ok(ServerWsMessage::Selecting)
    }

    ClientWsMessage::Hint { question } => Ok(ServerWsMessage::Hint { text: get_hint_text(state, &question).await }),
  };

  result.unwrap_or_else(|e: FlowError| {
    warn!(target: "simulator", code = e.code(), state = flow.state().name(), error = %e, "WS action rejected");
    ServerWsMessage::Error { code: e.code().into(), message: e.to_string() }
  })
}
