//! Deferred UI effects with view-lifetime cancellation.
//!
//! The scheduler runs on a logical clock advanced by [`EffectScheduler::advance`],
//! so a host event loop feeds it wall-clock time and tests feed it exact
//! durations. Every task is stamped with the view lifetime current when it was
//! scheduled; [`EffectScheduler::end_view`] invalidates that token and drops
//! the tasks holding it.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

/// A cosmetic side effect applied after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Effect {
    /// Move input focus to the price field.
    FocusPriceInput,
    /// Remove the highlight from the result display.
    ClearGlow,
}

/// Identifies one lifetime of a view. Changes whenever a view is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
struct ViewToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledEffect {
    effect: Effect,
    due: Duration,
    token: ViewToken,
}

#[derive(Debug, Default)]
pub struct EffectScheduler {
    now: Duration,
    token: ViewToken,
    pending: Vec<ScheduledEffect>,
}

impl EffectScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `effect` to fire `delay` from now, bound to the current view.
    ///
    /// At most one task per effect is pending: scheduling again restarts the
    /// timer.
    pub fn schedule(&mut self, effect: Effect, delay: Duration) {
        self.pending.retain(|task| task.effect != effect);
        let due = self.now.saturating_add(delay);
        trace!(?effect, ?delay, token = self.token.0, "Scheduled deferred effect");
        self.pending.push(ScheduledEffect {
            effect,
            due,
            token: self.token,
        });
    }

    /// Cancels every pending task of the current view and starts a new view
    /// lifetime.
    pub fn end_view(&mut self) {
        let ended = self.token;
        let before = self.pending.len();
        self.pending.retain(|task| task.token != ended);
        self.token = ViewToken(ended.0.wrapping_add(1));
        trace!(cancelled = before - self.pending.len(), token = ended.0, "View ended");
    }

    /// Advances the clock and returns the effects that came due, in due order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Effect> {
        self.now = self.now.saturating_add(elapsed);

        let now = self.now;
        let token = self.token;
        let mut due: Vec<ScheduledEffect> = Vec::new();
        self.pending.retain(|task| {
            if task.due <= now {
                if task.token == token {
                    due.push(task.clone());
                }
                false
            } else {
                true
            }
        });

        due.sort_by_key(|task| task.due);
        due.into_iter().map(|task| task.effect).collect()
    }

    /// Time left until the next pending task, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|task| task.due.saturating_sub(self.now))
            .min()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
