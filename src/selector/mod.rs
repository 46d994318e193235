//! Memoized derivations from state snapshots.
//!
//! A [`Memo`] recomputes only when the outputs of its input selectors
//! change, so geometry is not rebuilt for unrelated state updates. Cached
//! results live in a [`SelectorCache`] owned by the caller.

mod cache;
mod input_eq;
mod memo;
mod timeline;

pub use cache::{SelectorCache, SelectorCacheStats, SelectorId};
pub use input_eq::InputEq;
pub use memo::{FieldSelector, Memo, Selector, SelectorInputs, SharedSelector};
pub use timeline::{TIME_TICK_TARGET_SPACING_PX, TimelineSelectors, time_tick_target_count};
