//! Gateway session
//!
//! One WebSocket connection to the chat platform: identify, heartbeat,
//! receive command events, send replies. Events are processed in order on a
//! single task; each command runs to completion before the next event is
//! read. Heartbeat round-trips feed the shared latency tracker that `ping`
//! reports from.

use crate::events::{ClientFrame, GatewayEvent};
use apibot_chat::{BotContext, Dispatcher};
use apibot_core::{Error, LatencyTracker, Result};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

/// Heartbeat cadence used until the welcome frame supplies one.
const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

pub struct GatewaySession {
    url: String,
    token: String,
    dispatcher: Arc<Dispatcher>,
    context: BotContext,
    latency: LatencyTracker,
}

impl GatewaySession {
    pub fn new(
        url: impl Into<String>,
        token: impl Into<String>,
        dispatcher: Arc<Dispatcher>,
        context: BotContext,
        latency: LatencyTracker,
    ) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            dispatcher,
            context,
            latency,
        }
    }

    /// Run the session until the connection closes or fails.
    pub async fn run(&self) -> Result<()> {
        info!(url = %self.url, "Connecting to gateway");

        let (ws, _) = connect_async(self.url.as_str())
            .await
            .map_err(|e| Error::gateway(format!("connect failed: {e}")))?;
        let (mut sink, mut stream) = ws.split();

        let identify = ClientFrame::Identify {
            token: self.token.clone(),
        };
        send_frame(&mut sink, &identify).await?;

        let mut interval = tokio::time::interval(DEFAULT_HEARTBEAT_INTERVAL);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut next_nonce: u64 = 0;
        let mut pending_heartbeat: Option<(u64, Instant)> = None;

        loop {
            tokio::select! {
                frame = stream.next() => {
                    let Some(frame) = frame else {
                        info!("Gateway closed the connection");
                        return Ok(());
                    };
                    match frame {
                        Ok(Message::Text(text)) => {
                            self.handle_text(&text, &mut sink, &mut interval, &mut pending_heartbeat)
                                .await?;
                        }
                        Ok(Message::Ping(data)) => {
                            sink.send(Message::Pong(data))
                                .await
                                .map_err(|e| Error::gateway(e.to_string()))?;
                        }
                        Ok(Message::Close(_)) => {
                            info!("Gateway sent close");
                            return Ok(());
                        }
                        Ok(_) => {} // Ignore binary, pong, etc.
                        Err(e) => {
                            return Err(Error::gateway(format!("read failed: {e}")));
                        }
                    }
                }
                _ = interval.tick() => {
                    next_nonce += 1;
                    pending_heartbeat = Some((next_nonce, Instant::now()));
                    send_frame(&mut sink, &ClientFrame::Heartbeat { nonce: next_nonce }).await?;
                }
            }
        }
    }

    async fn handle_text<S>(
        &self,
        text: &str,
        sink: &mut S,
        interval: &mut tokio::time::Interval,
        pending_heartbeat: &mut Option<(u64, Instant)>,
    ) -> Result<()>
    where
        S: SinkExt<Message> + Unpin,
        S::Error: std::fmt::Display,
    {
        let event = match serde_json::from_str::<GatewayEvent>(text) {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "Ignoring unrecognized gateway frame");
                return Ok(());
            }
        };

        match event {
            GatewayEvent::Welcome {
                session_id,
                heartbeat_interval_ms,
            } => {
                info!(session_id = %session_id, "Gateway session established");
                if heartbeat_interval_ms > 0 {
                    *interval =
                        tokio::time::interval(Duration::from_millis(heartbeat_interval_ms));
                    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
                    // The first tick of a fresh interval fires immediately,
                    // which doubles as the initial latency measurement.
                }
            }
            GatewayEvent::HeartbeatAck { nonce } => {
                if let Some((expected, sent_at)) = pending_heartbeat.take() {
                    if expected == nonce {
                        let millis = sent_at.elapsed().as_millis() as u64;
                        self.latency.record(millis);
                        debug!(millis, "Heartbeat round-trip");
                    } else {
                        warn!(expected, nonce, "Heartbeat ack nonce mismatch");
                    }
                }
            }
            GatewayEvent::Command { invocation } => {
                let channel = invocation.channel.clone();
                let reply = self.dispatcher.dispatch(&self.context, &invocation).await;
                let frame = ClientFrame::Reply { channel, reply };
                sink.send(Message::Text(
                    serde_json::to_string(&frame).map_err(Error::from)?,
                ))
                .await
                .map_err(|e| Error::gateway(format!("send failed: {e}")))?;
            }
        }
        Ok(())
    }
}

async fn send_frame<S>(sink: &mut S, frame: &ClientFrame) -> Result<()>
where
    S: SinkExt<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    let text = serde_json::to_string(frame).map_err(Error::from)?;
    sink.send(Message::Text(text))
        .await
        .map_err(|e| Error::gateway(format!("send failed: {e}")))
}
