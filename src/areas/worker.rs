use crate::artifacts::diff::line_diff::{DiffResult, diff_lines};
use crate::artifacts::diff::message::{DiffRequest, DiffResponse};
use std::any::Any;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

pub type Engine = dyn Fn(&str, &str) -> DiffResult + Send + Sync;

/// Both ends of the diff computation channel, as seen by the orchestrator.
pub struct WorkerChannel {
    pub requests: UnboundedSender<DiffRequest>,
    pub responses: UnboundedReceiver<DiffResponse>,
}

impl WorkerChannel {
    /// A channel with no worker behind it; the caller plays the worker.
    pub fn detached() -> (Self, UnboundedReceiver<DiffRequest>, UnboundedSender<DiffResponse>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = unbounded_channel();

        (
            Self {
                requests: request_tx,
                responses: response_rx,
            },
            request_rx,
            response_tx,
        )
    }
}

/// Runs diff computations off the control task.
///
/// Every request gets its own blocking task, so unrelated pairs never queue
/// behind each other. A panicking engine is answered with an error response.
pub struct DiffWorker;

impl DiffWorker {
    pub fn spawn() -> WorkerChannel {
        Self::spawn_with(Arc::new(diff_lines))
    }

    pub fn spawn_with(engine: Arc<Engine>) -> WorkerChannel {
        let (channel, mut requests, responses) = WorkerChannel::detached();

        tokio::spawn(async move {
            while let Some(request) = requests.recv().await {
                let engine = engine.clone();
                let responses = responses.clone();

                tokio::spawn(async move {
                    let DiffRequest {
                        request_id,
                        text1,
                        text2,
                    } = request;

                    let outcome = tokio::task::spawn_blocking(move || engine(&*text1, &*text2))
                        .await
                        .map_err(|err| {
                            if err.is_panic() {
                                panic_message(err.into_panic())
                            } else {
                                err.to_string()
                            }
                        });

                    if responses
                        .send(DiffResponse::new(request_id, outcome))
                        .is_err()
                    {
                        log::debug!("dropping response {request_id}: orchestrator is gone");
                    }
                });
            }
        });

        channel
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    payload
        .downcast_ref::<&'static str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "diff engine panicked".to_string())
}
