//! Runtime that owns a state value and runs the effects of its reducer.
//!
//! Intents are applied one at a time through [`Store::send`]. `Send`
//! effects are drained before `send` returns; `Task` and `Ordered`
//! effects are spawned onto a [`JoinSet`] and their results are applied
//! only when the caller asks for them with [`Store::next_response`] or
//! [`Store::settle`]. A pending task never blocks later intents.
//!
//! Plain tasks run independently and are applied as they complete.
//! Ordered tasks form one lane per key: a task starts after the previous
//! task of its lane finished, and lane results are applied in spawn order
//! even if the runtime yields them out of order.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::task::JoinSet;

use crate::ui::mvi::{Effect, EffectFuture, Reducer};

const RECEIVED_CAPACITY: usize = 256;

/// Position of an ordered task inside its lane.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Ticket {
    key: String,
    seq: u64,
}

struct Finished<I> {
    ticket: Option<Ticket>,
    intent: I,
}

struct Lane<I> {
    next_seq: u64,
    last_done: Option<oneshot::Receiver<()>>,
    /// Spawned and not yet applied or abandoned.
    outstanding: BTreeSet<u64>,
    /// Finished early, waiting for an older task of the lane.
    ready: BTreeMap<u64, I>,
}

impl<I> Lane<I> {
    fn new() -> Self {
        Self {
            next_seq: 0,
            last_done: None,
            outstanding: BTreeSet::new(),
            ready: BTreeMap::new(),
        }
    }

    /// Pop results that are next in spawn order.
    fn drain_ready(&mut self, out: &mut Vec<I>) {
        while let Some(&oldest) = self.outstanding.first() {
            let Some(intent) = self.ready.remove(&oldest) else {
                break;
            };
            self.outstanding.remove(&oldest);
            out.push(intent);
        }
    }
}

/// Reports the ticket of an ordered task that ended without a result.
struct AbandonGuard {
    ticket: Option<Ticket>,
    sink: Arc<Mutex<Vec<Ticket>>>,
}

impl Drop for AbandonGuard {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.sink.lock().push(ticket);
        }
    }
}

pub struct Store<R: Reducer> {
    state: R::State,
    env: R::Env,
    tasks: JoinSet<Finished<R::Intent>>,
    lanes: HashMap<String, Lane<R::Intent>>,
    abandoned: Arc<Mutex<Vec<Ticket>>>,
    received: VecDeque<R::Intent>,
}

impl<R> Store<R>
where
    R: Reducer,
    R::Intent: Clone,
{
    pub fn new(initial: R::State, env: R::Env) -> Self {
        Self {
            state: initial,
            env,
            tasks: JoinSet::new(),
            lanes: HashMap::new(),
            abandoned: Arc::new(Mutex::new(Vec::new())),
            received: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn env(&self) -> &R::Env {
        &self.env
    }

    /// Number of effect tasks still running.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Apply `intent` and any `Send` effects it triggers.
    ///
    /// Must be called inside a Tokio runtime when the reducer can return
    /// `Task` or `Ordered` effects.
    pub fn send(&mut self, intent: R::Intent) {
        let mut queue = VecDeque::from([intent]);
        while let Some(intent) = queue.pop_front() {
            match self.apply(intent) {
                Effect::None => {}
                Effect::Send(next) => {
                    self.record(next.clone());
                    queue.push_back(next);
                }
                Effect::Task(future) => self.spawn(future),
                Effect::Ordered(key, future) => self.spawn_ordered(key, future),
            }
        }
    }

    /// Wait for the next effect result and apply it. An ordered result
    /// that overtook an older task of its lane is held back until that
    /// task is done.
    ///
    /// Returns `false` once nothing is in flight.
    pub async fn next_response(&mut self) -> bool {
        self.next_batch().await > 0
    }

    /// Apply responses until no effect task is left. Returns how many
    /// responses were applied.
    pub async fn settle(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.next_batch().await {
                0 => return applied,
                n => applied += n,
            }
        }
    }

    /// Join tasks until at least one response can be applied, apply all
    /// that are ready, and return how many. Zero means idle.
    async fn next_batch(&mut self) -> usize {
        while let Some(joined) = self.tasks.join_next().await {
            let ready = match joined {
                Ok(Finished { ticket: None, intent }) => vec![intent],
                Ok(Finished {
                    ticket: Some(ticket),
                    intent,
                }) => self.resolve(ticket, Some(intent)),
                Err(err) => {
                    tracing::warn!(error = %err, "effect task did not complete");
                    let abandoned: Vec<Ticket> = self.abandoned.lock().drain(..).collect();
                    abandoned
                        .into_iter()
                        .flat_map(|ticket| self.resolve(ticket, None))
                        .collect()
                }
            };
            if !ready.is_empty() {
                let count = ready.len();
                for intent in ready {
                    self.record(intent.clone());
                    self.send(intent);
                }
                return count;
            }
        }
        0
    }

    /// Intents produced by effects, oldest first.
    pub fn received(&self) -> impl Iterator<Item = &R::Intent> {
        self.received.iter()
    }

    pub fn take_received(&mut self) -> Vec<R::Intent> {
        self.received.drain(..).collect()
    }

    fn apply(&mut self, intent: R::Intent) -> Effect<R::Intent> {
        tracing::trace!(?intent, "dispatch");
        let (next, effect) = R::reduce(self.state.clone(), intent, &self.env);
        if next != self.state {
            tracing::trace!(state = ?next, "state changed");
        }
        self.state = next;
        effect
    }

    fn spawn(&mut self, future: EffectFuture<R::Intent>) {
        self.tasks.spawn(async move {
            Finished {
                ticket: None,
                intent: future.await,
            }
        });
    }

    fn spawn_ordered(&mut self, key: String, future: EffectFuture<R::Intent>) {
        let lane = self.lanes.entry(key.clone()).or_insert_with(Lane::new);
        let ticket = Ticket {
            key,
            seq: lane.next_seq,
        };
        lane.next_seq += 1;
        lane.outstanding.insert(ticket.seq);
        let previous = lane.last_done.take();
        let (done, done_rx) = oneshot::channel();
        lane.last_done = Some(done_rx);

        let mut guard = AbandonGuard {
            ticket: Some(ticket.clone()),
            sink: Arc::clone(&self.abandoned),
        };
        self.tasks.spawn(async move {
            if let Some(previous) = previous {
                // Err means the previous task was aborted or panicked.
                let _ = previous.await;
            }
            let intent = future.await;
            guard.ticket = None;
            let _ = done.send(());
            Finished {
                ticket: Some(ticket),
                intent,
            }
        });
    }

    /// Mark `ticket` finished (with its intent) or abandoned, and return
    /// whatever its lane can now apply.
    fn resolve(&mut self, ticket: Ticket, intent: Option<R::Intent>) -> Vec<R::Intent> {
        let mut ready = Vec::new();
        let Some(lane) = self.lanes.get_mut(&ticket.key) else {
            return ready;
        };
        match intent {
            Some(intent) => {
                lane.ready.insert(ticket.seq, intent);
            }
            None => {
                lane.outstanding.remove(&ticket.seq);
            }
        }
        lane.drain_ready(&mut ready);
        if lane.outstanding.is_empty() {
            self.lanes.remove(&ticket.key);
        }
        ready
    }

    fn record(&mut self, intent: R::Intent) {
        if self.received.len() == RECEIVED_CAPACITY {
            self.received.pop_front();
        }
        self.received.push_back(intent);
    }
}
