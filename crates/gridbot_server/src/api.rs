//! NATS API handler: subscribes to subjects and drives the simulator.
//!
//! Subjects (all under configurable prefix, default "gridbot"):
//!
//!   Request/Reply:
//!     {prefix}.status     : structured status snapshot
//!     {prefix}.command    : run a command line, e.g. {"command": "forward"}
//!     {prefix}.diagonal   : {"direction": "ne"}
//!     {prefix}.turn       : {"direction": "north"}
//!     {prefix}.obstacles  : {"action": "clear" | "reset" | "toggle", "x", "y"}
//!     {prefix}.report     : text status report
//!     {prefix}.grid       : rendered grid
//!
//!   Publish (broadcast):
//!     {prefix}.events.state: status after every successful change
//!
//! Requests are handled one at a time from a single subscription, so the
//! simulator never sees two commands in flight.
use anyhow::Result;
use async_nats::Client;
use gridbot_gateway::subjects::{self, COMMAND, DIAGONAL, GRID, OBSTACLES, REPORT, STATUS, TURN};
use gridbot_gateway::{
    ApiResponse, Command, CommandRequest, DirectionRequest, GatewayError, ObstacleRequest,
    Session, StatusEvent, decode, encode,
};
use tracing::{debug, error, info, warn};

/// What a request produced: the reply and, for state changes, an event.
#[derive(Debug)]
pub struct Handled {
    pub response: ApiResponse,
    pub event: Option<StatusEvent>,
}

impl Handled {
    fn reply(response: ApiResponse) -> Self {
        Self {
            response,
            event: None,
        }
    }
}

/// Transport-free request routing over an owned [`Session`].
pub struct Handler {
    session: Session,
    prefix: String,
}

impl Handler {
    pub fn new(session: Session, prefix: String) -> Self {
        Self { session, prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn handle(&mut self, op: &str, payload: &[u8]) -> Handled {
        match op {
            STATUS => match serde_json::to_value(self.session.status()) {
                Ok(data) => Handled::reply(ApiResponse::data(data)),
                Err(e) => Handled::reply(ApiResponse::error(e.to_string())),
            },
            COMMAND => self.run(
                decode::<CommandRequest>(payload).and_then(|req| req.command.parse::<Command>()),
            ),
            DIAGONAL => self.run(decode(payload).map(DirectionRequest::into_diagonal)),
            TURN => self.run(decode(payload).map(DirectionRequest::into_face)),
            OBSTACLES => self.run(decode(payload).and_then(ObstacleRequest::into_command)),
            REPORT => Handled::reply(ApiResponse::ok(self.session.simulator().status_report())),
            GRID => Handled::reply(ApiResponse::ok(self.session.simulator().render_grid())),
            _ => {
                warn!(op = %op, "unknown operation");
                Handled::reply(ApiResponse::error(format!("unknown operation: {op}")))
            }
        }
    }

    fn run(&mut self, command: Result<Command, GatewayError>) -> Handled {
        let command = match command {
            Ok(c) => c,
            Err(e) => {
                debug!(%e, "rejected request");
                return Handled::reply(ApiResponse::from(&e));
            }
        };

        let mutating = command.is_mutating();
        match self.session.execute(command) {
            Ok(message) => {
                let status = self.session.status();
                let response = ApiResponse::ok(message.clone()).with_status(&status);
                let event = mutating.then(|| StatusEvent {
                    instance_id: self.session.instance_id(),
                    message,
                    status,
                });
                Handled { response, event }
            }
            Err(e) => {
                debug!(%e, "command failed");
                Handled::reply(ApiResponse::from(&e).with_status(&self.session.status()))
            }
        }
    }
}

pub struct Api {
    handler: Handler,
    client: Client,
}

impl Api {
    pub fn new(handler: Handler, client: Client) -> Self {
        Self { handler, client }
    }

    pub async fn run(&mut self) -> Result<()> {
        use futures_util::StreamExt;

        let prefix = self.handler.prefix().to_string();
        let subject = subjects::wildcard(&prefix);
        info!(subject = %subject, "subscribing to API subjects");
        let mut sub = self.client.subscribe(subject).await?;

        info!("gridbot server ready, listening for requests");

        while let Some(msg) = sub.next().await {
            let Some(op) = subjects::operation(&prefix, msg.subject.as_str()) else {
                continue;
            };
            // Our own broadcasts come back through the wildcard.
            if op.starts_with("events.") {
                continue;
            }

            debug!(op = %op, "received request");
            let handled = self.handler.handle(op, &msg.payload);

            if let Some(reply_to) = msg.reply {
                if let Err(e) = self
                    .client
                    .publish(reply_to, handled.response.to_bytes().into())
                    .await
                {
                    error!(%e, "failed to publish reply");
                }
            }

            if let Some(event) = handled.event {
                match encode(&event) {
                    Ok(bytes) => {
                        let subject = subjects::state_event(&prefix);
                        if let Err(e) = self.client.publish(subject, bytes.into()).await {
                            error!(%e, "failed to publish state event");
                        }
                    }
                    Err(e) => error!(%e, "failed to encode state event"),
                }
            }
        }

        Ok(())
    }
}
