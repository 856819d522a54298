//! Conversation filtering.
//!
//! The message log is one flat stream over all pairs, in arrival order. A
//! conversation view is always rebuilt from the full log: filter to the
//! pair, then sort by timestamp. Rebuilding instead of merging keeps a
//! refresh idempotent no matter how often it runs.

use crate::models::{Handle, Message};

/// Messages exchanged between `a` and `b`, both directions, oldest first.
///
/// The sort is stable, so messages with equal timestamps keep their log
/// order and the rendered view does not reshuffle between refreshes.
/// Handles that appear nowhere in the log simply select nothing.
pub fn thread(log: &[Message], a: &Handle, b: &Handle) -> Vec<Message> {
    let mut selected: Vec<Message> = log.iter().filter(|m| m.is_between(a, b)).cloned().collect();
    selected.sort_by(|x, y| x.timestamp.cmp(&y.timestamp));
    selected
}
