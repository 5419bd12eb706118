//! Event-driven manager of every open document.
//!
//! The host editor feeds [`DocumentEvent`]s one at a time and queries color
//! ranges back. Text changes go through a per-document [`UpdateScheduler`]
//! so a burst of edits is applied as one incremental update once the
//! configured time-out has passed. With a time-out of zero edits apply
//! immediately.

mod debouncer;
mod events;
mod scheduler;

pub use debouncer::Debouncer;
pub use events::{DocumentEvent, DocumentId, TextSource};
pub use scheduler::{PendingUpdate, UpdateScheduler};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio_util::sync::CancellationToken;

use crate::config::Settings;
use crate::document::{ColorRanges, DocumentState, LineEdit};

pub struct Colorizer {
    settings: Arc<Settings>,
    documents: HashMap<DocumentId, DocumentState>,
    schedulers: HashMap<DocumentId, UpdateScheduler>,
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Colorizer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            documents: HashMap::new(),
            schedulers: HashMap::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn handle_event(&mut self, event: DocumentEvent, source: &dyn TextSource) {
        self.handle_event_at(event, source, Instant::now());
    }

    /// Process one event as if it arrived at `now`.
    pub fn handle_event_at(&mut self, event: DocumentEvent, source: &dyn TextSource, now: Instant) {
        match event {
            DocumentEvent::Opened(id) => self.open(id, source),
            DocumentEvent::Closed(id) => self.close(&id),
            DocumentEvent::Changed { id, edit } => self.change(id, edit, source, now),
            DocumentEvent::VisibilityChanged(visible) => {
                for id in visible {
                    if !self.documents.contains_key(&id) {
                        self.open(id, source);
                    }
                }
            }
            DocumentEvent::ConfigurationChanged(settings) => {
                log::debug!("Configuration changed, re-parsing {} documents", self.documents.len());
                self.settings = Arc::new(settings);
                self.schedulers.clear();
                self.reset(None, source);
            }
        }
    }

    /// Run every pending update whose debounce period has elapsed.
    ///
    /// Returns the number of updates applied.
    pub fn poll_at(&mut self, now: Instant, source: &dyn TextSource) -> usize {
        let ready: Vec<(DocumentId, PendingUpdate)> = self
            .schedulers
            .iter_mut()
            .filter_map(|(id, scheduler)| scheduler.take_ready_at(now).map(|u| (id.clone(), u)))
            .collect();

        ready
            .into_iter()
            .filter(|(id, update)| self.run_update(id, update, source))
            .count()
    }

    /// Run every pending or carried update now, ignoring the debounce period.
    pub fn flush(&mut self, source: &dyn TextSource) -> usize {
        let pending: Vec<(DocumentId, PendingUpdate)> = self
            .schedulers
            .iter_mut()
            .filter_map(|(id, scheduler)| scheduler.take_pending().map(|u| (id.clone(), u)))
            .collect();

        pending
            .into_iter()
            .filter(|(id, update)| self.run_update(id, update, source))
            .count()
    }

    /// Force a full re-parse of one document, or of all when `id` is `None`.
    pub fn reset(&mut self, id: Option<&str>, source: &dyn TextSource) {
        let ids: Vec<DocumentId> = match id {
            Some(id) => vec![id.to_string()],
            None => self.documents.keys().cloned().collect(),
        };

        for id in ids {
            if let Some(scheduler) = self.schedulers.get_mut(&id) {
                scheduler.cancel();
            }
            self.open(id, source);
        }
    }

    /// Whole-document color ranges; empty for unknown documents.
    pub fn color_ranges(&self, id: &str) -> ColorRanges {
        self.documents
            .get(id)
            .map(DocumentState::color_ranges)
            .unwrap_or_default()
    }

    /// Color ranges of one line; empty for unknown documents or lines.
    pub fn line_color_ranges(&self, id: &str, line: usize) -> ColorRanges {
        self.documents
            .get(id)
            .map(|document| document.line_color_ranges(line))
            .unwrap_or_default()
    }

    pub fn document(&self, id: &str) -> Option<&DocumentState> {
        self.documents.get(id)
    }

    /// Whether edits of `id` are waiting to be applied, scheduled or carried.
    pub fn has_pending(&self, id: &str) -> bool {
        self.schedulers
            .get(id)
            .is_some_and(|scheduler| scheduler.has_pending() || scheduler.has_carried())
    }

    /// Token of the update pending for `id`; cancelling it stops that update from starting.
    pub fn pending_token(&self, id: &str) -> Option<CancellationToken> {
        self.schedulers.get(id).and_then(UpdateScheduler::pending_token)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    fn open(&mut self, id: DocumentId, source: &dyn TextSource) {
        match source.document_lines(&id) {
            Some(lines) => {
                let state = match self.documents.remove(&id) {
                    Some(mut state) => {
                        state.set_settings(Arc::clone(&self.settings), &lines);
                        state
                    }
                    None => DocumentState::parse(&lines, Arc::clone(&self.settings)),
                };
                self.documents.insert(id, state);
            }
            None => {
                log::warn!("No text available for document {}, dropping it", id);
                self.close(&id);
            }
        }
    }

    fn close(&mut self, id: &str) {
        if let Some(mut scheduler) = self.schedulers.remove(id) {
            scheduler.cancel();
        }
        if self.documents.remove(id).is_some() {
            log::debug!("Closed document {}", id);
        }
    }

    fn change(&mut self, id: DocumentId, edit: LineEdit, source: &dyn TextSource, now: Instant) {
        if !self.documents.contains_key(&id) {
            log::debug!("Change for unknown document {}, parsing it in full", id);
            self.open(id, source);
            return;
        }

        let time_out = self.settings.time_out;
        let scheduler = self
            .schedulers
            .entry(id.clone())
            .or_insert_with(|| UpdateScheduler::new(time_out));
        scheduler.schedule_at(edit, now);

        if time_out == 0
            && let Some(update) = scheduler.take_pending()
        {
            self.run_update(&id, &update, source);
        }
    }

    /// Apply `update` unless it was cancelled before it could start.
    ///
    /// A skipped update's edit stays with the scheduler, so the next update
    /// of the document re-scans its lines too.
    fn run_update(&mut self, id: &str, update: &PendingUpdate, source: &dyn TextSource) -> bool {
        if update.cancel_token.is_cancelled() {
            log::debug!("Skipping cancelled update for {}, carrying {:?}", id, update.edit);
            if let Some(scheduler) = self.schedulers.get_mut(id) {
                scheduler.carry(update.edit);
            }
            return false;
        }

        let Some(lines) = source.document_lines(id) else {
            log::warn!("No text available for document {}, dropping it", id);
            self.close(id);
            return false;
        };

        match self.documents.get_mut(id) {
            Some(document) => {
                document.apply_edit(update.edit, &lines);
                true
            }
            None => false,
        }
    }
}
