use crate::areas::slots::DocumentSlots;
use crate::areas::worker::{DiffWorker, WorkerChannel};
use crate::artifacts::diff::error::DiffError;
use crate::artifacts::diff::line_diff::DiffResult;
use crate::artifacts::diff::message::{DiffRequest, DiffResponse, RequestId};
use crate::artifacts::diff::pair::{PairId, Slot};
use derive_new::new;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairState {
    #[default]
    Idle,
    Computing,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    Ready(DiffResult),
    Failed(DiffError),
    /// The pair stopped being eligible; whatever was shown for it goes away.
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PairEvent {
    pub pair: PairId,
    pub outcome: PairOutcome,
}

/// Inputs captured when a request was sent, used to spot stale results.
#[derive(Debug, new)]
struct InFlight {
    pair: PairId,
    text1: Arc<str>,
    text2: Arc<str>,
}

/// Owns the document slots and keeps one diff per eligible pair up to date.
///
/// Every content change re-sends all eligible pairs to the worker. Results come
/// back tagged with their request id and are only accepted when they answer the
/// latest request for their pair and the captured inputs still equal the slot
/// contents. Superseded computations are left to finish and their results
/// dropped on arrival.
pub struct Orchestrator {
    slots: DocumentSlots,
    states: BTreeMap<PairId, PairState>,
    in_flight: HashMap<RequestId, InFlight>,
    latest: BTreeMap<PairId, RequestId>,
    next_request: u64,
    channel: WorkerChannel,
    events: VecDeque<PairEvent>,
}

impl Orchestrator {
    pub fn new(channel: WorkerChannel) -> Self {
        Self {
            slots: DocumentSlots::default(),
            states: PairId::ALL
                .into_iter()
                .map(|pair| (pair, PairState::Idle))
                .collect(),
            in_flight: HashMap::new(),
            latest: BTreeMap::new(),
            next_request: 0,
            channel,
            events: VecDeque::new(),
        }
    }

    /// Starts a [`DiffWorker`] on the current tokio runtime and wires it up.
    pub fn spawn() -> Self {
        Self::new(DiffWorker::spawn())
    }

    pub fn get_content(&self, slot: Slot) -> &str {
        self.slots.content(slot)
    }

    pub fn label(&self, slot: Slot) -> Option<&str> {
        self.slots.get(slot).label()
    }

    pub fn set_label(&mut self, slot: Slot, label: impl Into<String>) {
        self.slots.set_label(slot, Some(label.into()));
    }

    pub fn set_content(&mut self, slot: Slot, content: impl Into<Arc<str>>) {
        self.slots.set_content(slot, content.into());
        self.refresh();
    }

    pub fn clear(&mut self, slot: Slot) {
        self.slots.set_label(slot, None);
        self.set_content(slot, "");
    }

    pub fn eligible_pairs(&self) -> Vec<PairId> {
        self.slots.eligible_pairs()
    }

    pub fn pair_state(&self, pair: PairId) -> PairState {
        self.states.get(&pair).copied().unwrap_or_default()
    }

    pub fn has_outstanding(&self) -> bool {
        !self.in_flight.is_empty() || !self.events.is_empty()
    }

    /// Next accepted event, or `None` once nothing is queued or in flight.
    ///
    /// Stale results and responses for unknown request ids are swallowed here.
    pub async fn next_event(&mut self) -> Option<PairEvent> {
        loop {
            if let Some(event) = self.events.pop_front() {
                return Some(event);
            }
            if self.in_flight.is_empty() {
                return None;
            }

            match self.channel.responses.recv().await {
                Some(response) => {
                    if let Some(event) = self.accept(response) {
                        return Some(event);
                    }
                }
                None => self.fail_in_flight(),
            }
        }
    }

    /// Collects events until every outstanding computation has been answered.
    pub async fn settle(&mut self) -> Vec<PairEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.next_event().await {
            events.push(event);
        }
        events
    }

    fn refresh(&mut self) {
        for pair in PairId::ALL {
            if self.slots.is_eligible(pair) {
                self.dispatch(pair);
            } else if self.pair_state(pair) != PairState::Idle {
                log::debug!("{pair} is no longer eligible");
                self.latest.remove(&pair);
                self.states.insert(pair, PairState::Idle);
                self.events
                    .push_back(PairEvent::new(pair, PairOutcome::Cleared));
            }
        }
    }

    fn dispatch(&mut self, pair: PairId) {
        let (old, new) = pair.slots();
        let text1 = self.slots.content(old).clone();
        let text2 = self.slots.content(new).clone();

        let request_id = RequestId::new(self.next_request);
        self.next_request += 1;

        self.latest.insert(pair, request_id);

        let request = DiffRequest::new(request_id, text1.clone(), text2.clone());
        if self.channel.requests.send(request).is_err() {
            log::warn!("cannot compute {pair}: diff worker is gone");
            self.states.insert(pair, PairState::Failed);
            self.events.push_back(PairEvent::new(
                pair,
                PairOutcome::Failed(DiffError::WorkerUnavailable),
            ));
            return;
        }

        log::debug!("dispatched {request_id} for {pair}");
        self.in_flight
            .insert(request_id, InFlight::new(pair, text1, text2));
        self.states.insert(pair, PairState::Computing);
    }

    fn accept(&mut self, response: DiffResponse) -> Option<PairEvent> {
        let Some(request) = self.in_flight.remove(&response.request_id) else {
            log::debug!("ignoring response for unknown {}", response.request_id);
            return None;
        };

        if !self.is_current(response.request_id, &request) {
            log::debug!(
                "discarding stale result {} for {}",
                response.request_id,
                request.pair
            );
            return None;
        }

        let outcome = match response.outcome {
            Ok(result) => {
                self.states.insert(request.pair, PairState::Ready);
                PairOutcome::Ready(result)
            }
            Err(message) => {
                log::warn!("diff for {} failed: {}", request.pair, message);
                self.states.insert(request.pair, PairState::Failed);
                PairOutcome::Failed(DiffError::EngineFailure(message))
            }
        };

        Some(PairEvent::new(request.pair, outcome))
    }

    /// Whether `request_id` is the newest request for its pair and its inputs
    /// still equal the slot contents.
    fn is_current(&self, request_id: RequestId, request: &InFlight) -> bool {
        self.latest.get(&request.pair) == Some(&request_id)
            && self
                .slots
                .matches(request.pair, &request.text1, &request.text2)
    }

    fn fail_in_flight(&mut self) {
        log::warn!("diff worker stopped with requests outstanding");

        let mut requests = self.in_flight.drain().collect::<Vec<_>>();
        requests.sort_by_key(|(request_id, _)| *request_id);

        let failed = requests
            .into_iter()
            .filter(|(request_id, request)| self.is_current(*request_id, request))
            .map(|(_, request)| request.pair)
            .collect::<Vec<_>>();

        for pair in failed {
            self.states.insert(pair, PairState::Failed);
            self.events.push_back(PairEvent::new(
                pair,
                PairOutcome::Failed(DiffError::WorkerUnavailable),
            ));
        }
    }
}
