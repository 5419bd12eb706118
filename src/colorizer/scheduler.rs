//! Debounced, cancellable scheduling of incremental updates for one document.
//!
//! A newer edit arriving while an update is pending cancels the pending
//! update's token and is merged with it, so no edit is ever lost. Cancellation
//! only prevents an update from starting; a running scan always completes.
//! An update skipped because of cancellation is handed back with
//! [`UpdateScheduler::carry`] and folded into the next update.

use std::time::Instant;

use tokio_util::sync::CancellationToken;

use super::debouncer::Debouncer;
use crate::document::LineEdit;

/// An update waiting for its debounce period to pass
#[derive(Debug, Clone)]
pub struct PendingUpdate {
    /// Covering edit of everything that changed since the last update
    pub edit: LineEdit,
    /// Token for cancelling this update before it starts
    pub cancel_token: CancellationToken,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateScheduler {
    debouncer: Debouncer,
    pending: Option<PendingUpdate>,
    /// Edit of a skipped update, not yet applied to the document
    carried: Option<LineEdit>,
}

impl UpdateScheduler {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            debouncer: Debouncer::new(delay_ms),
            pending: None,
            carried: None,
        }
    }

    /// Queue `edit`, superseding any update that has not started yet.
    pub fn schedule_at(&mut self, edit: LineEdit, now: Instant) {
        let edit = match self.pending.take() {
            Some(stale) => {
                stale.cancel_token.cancel();
                log::debug!("Superseding pending update {:?} with {:?}", stale.edit, edit);
                stale.edit.merge(edit)
            }
            None => match self.carried.take() {
                Some(carried) => carried.merge(edit),
                None => edit,
            },
        };

        self.pending = Some(PendingUpdate {
            edit,
            cancel_token: CancellationToken::new(),
        });
        self.debouncer.schedule_at(now);
    }

    /// Take the pending update once its debounce period has elapsed.
    pub fn take_ready_at(&mut self, now: Instant) -> Option<PendingUpdate> {
        if !self.debouncer.is_ready_at(now) {
            return None;
        }
        self.take_pending()
    }

    /// Take the pending update regardless of the debounce period.
    ///
    /// A carried edit with nothing pending comes back as a fresh update.
    pub fn take_pending(&mut self) -> Option<PendingUpdate> {
        self.debouncer.mark_complete();
        self.pending.take().or_else(|| {
            self.carried.take().map(|edit| PendingUpdate {
                edit,
                cancel_token: CancellationToken::new(),
            })
        })
    }

    /// Keep the edit of an update that was skipped so a later update covers it.
    pub fn carry(&mut self, edit: LineEdit) {
        match self.pending.as_mut() {
            Some(pending) => pending.edit = edit.merge(pending.edit),
            None => {
                let edit = match self.carried.take() {
                    Some(carried) => carried.merge(edit),
                    None => edit,
                };
                self.carried = Some(edit);
            }
        }
    }

    /// Token of the pending update, for cancelling it from outside.
    pub fn pending_token(&self) -> Option<CancellationToken> {
        self.pending.as_ref().map(|p| p.cancel_token.clone())
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a skipped edit still waits to be applied.
    pub fn has_carried(&self) -> bool {
        self.carried.is_some()
    }

    /// Drop the pending update and any carried edit, for when the document
    /// is closed or parsed from scratch.
    pub fn cancel(&mut self) {
        if let Some(stale) = self.pending.take() {
            stale.cancel_token.cancel();
        }
        self.carried = None;
        self.debouncer.cancel();
    }
}
