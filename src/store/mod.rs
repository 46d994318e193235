//! Single-writer state store.
//!
//! Every mutation goes through [`TimelineStore::dispatch`], which applies
//! the pure [`reduce`] function, keeps the result as the current snapshot,
//! appends it to a bounded replay history and pushes it to live
//! subscribers. Late subscribers first receive the retained history. Each
//! subscriber's pending queue is bounded like the history, so a reader
//! that falls behind loses its oldest snapshots first.

mod action;
mod reducer;
mod replay;
mod state;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::DEFAULT_BAND_PADDING;
use crate::error::{TimelineError, TimelineResult};

pub use action::TimelineAction;
pub use reducer::reduce;
pub use replay::ReplayBuffer;
pub use state::TimelineState;

/// Number of past snapshots replayed to a new subscriber.
pub const DEFAULT_REPLAY_BUFFER_SIZE: usize = 100;

/// Store tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_replay_buffer_size")]
    pub replay_buffer_size: usize,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            replay_buffer_size: DEFAULT_REPLAY_BUFFER_SIZE,
            band_padding: DEFAULT_BAND_PADDING,
        }
    }
}

impl StoreConfig {
    pub fn validate(self) -> TimelineResult<Self> {
        if self.replay_buffer_size == 0 {
            return Err(TimelineError::InvalidConfig(
                "replay buffer size must be > 0".to_owned(),
            ));
        }
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(TimelineError::InvalidConfig(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_replay_buffer_size() -> usize {
    DEFAULT_REPLAY_BUFFER_SIZE
}

fn default_band_padding() -> f64 {
    DEFAULT_BAND_PADDING
}

type PendingSnapshots = RefCell<ReplayBuffer<Arc<TimelineState>>>;

/// Receiving end of the snapshot stream.
///
/// Yields the replayed history first, then every later snapshot in
/// dispatch order. At most `replay_buffer_size` snapshots are kept
/// pending; older ones are evicted. Dropping it unsubscribes.
#[derive(Debug)]
pub struct StateSubscription {
    pending: Rc<PendingSnapshots>,
}

impl StateSubscription {
    /// Next pending snapshot, if any; never blocks.
    #[must_use]
    pub fn try_next(&self) -> Option<Arc<TimelineState>> {
        self.pending.borrow_mut().pop_oldest()
    }

    /// All pending snapshots, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Arc<TimelineState>> {
        self.pending.borrow_mut().take_all()
    }

    /// Newest pending snapshot, discarding the older ones.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<TimelineState>> {
        self.pending.borrow_mut().take_all().pop()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }
}

/// Owner of the current timeline state.
#[derive(Debug)]
pub struct TimelineStore {
    config: StoreConfig,
    state: Arc<TimelineState>,
    history: ReplayBuffer<Arc<TimelineState>>,
    subscribers: Vec<Weak<PendingSnapshots>>,
    version: u64,
}

impl TimelineStore {
    pub fn new(config: StoreConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let state = Arc::new(TimelineState::initial(config.band_padding));
        let mut history = ReplayBuffer::new(config.replay_buffer_size);
        history.push(Arc::clone(&state));
        Ok(Self {
            config,
            state,
            history,
            subscribers: Vec::new(),
            version: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<TimelineState> {
        Arc::clone(&self.state)
    }

    /// Number of actions applied so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies `action` and publishes the resulting snapshot.
    pub fn dispatch(&mut self, action: TimelineAction) {
        if action.is_high_frequency() {
            trace!(action = action.kind(), "dispatch");
        } else {
            debug!(action = action.kind(), "dispatch");
        }

        let next = Arc::new(reduce(&self.state, &action, &self.config));
        self.state = Arc::clone(&next);
        self.version = self.version.saturating_add(1);
        self.history.push(Arc::clone(&next));
        self.subscribers
            .retain(|subscriber| match subscriber.upgrade() {
                Some(pending) => {
                    pending.borrow_mut().push(Arc::clone(&next));
                    true
                }
                None => false,
            });
    }

    /// Parses and dispatches an action in its JSON form.
    ///
    /// Returns `Ok(false)` without touching the state when the action type
    /// is not one this store knows. A known type with a malformed payload is
    /// an error.
    pub fn dispatch_json(&mut self, input: &str) -> TimelineResult<bool> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse action json: {e}"))
        })?;

        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned();
        if !TimelineAction::is_known_kind(&kind) {
            warn!(kind = %kind, "ignoring unknown action type");
            return Ok(false);
        }

        let action: TimelineAction = serde_json::from_value(value).map_err(|e| {
            TimelineError::InvalidData(format!("invalid `{kind}` action payload: {e}"))
        })?;
        self.dispatch(action);
        Ok(true)
    }

    /// Opens a stream preloaded with the retained history.
    pub fn subscribe(&mut self) -> StateSubscription {
        let pending = Rc::new(RefCell::new(self.history.clone()));
        self.subscribers.push(Rc::downgrade(&pending));
        StateSubscription { pending }
    }

    /// Retained snapshots, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Arc<TimelineState>> + '_ {
        self.history.iter()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
