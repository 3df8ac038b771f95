use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, PanelView};
use crate::Panel;

/// Correlation id allocated per trigger firing.
pub type RequestId = u64;

/// Placeholder text a region shows while its request is in flight.
pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    skill: String,
    regions: BTreeMap<Panel, String>,
    pending: BTreeMap<RequestId, Panel>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query: self.query.clone(),
            skill: self.skill.clone(),
            panels: Panel::ALL
                .iter()
                .map(|&panel| PanelView {
                    panel,
                    content: self.regions.get(&panel).cloned().unwrap_or_default(),
                })
                .collect(),
            pending_requests: self.pending.len(),
            dirty: self.dirty,
        }
    }

    /// Current text of a panel's region; empty until first written.
    pub fn region(&self, panel: Panel) -> &str {
        self.regions.get(&panel).map(String::as_str).unwrap_or("")
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn skill(&self) -> &str {
        &self.skill
    }

    pub(crate) fn set_query(&mut self, text: String) {
        self.query = text;
        self.mark_dirty();
    }

    pub(crate) fn set_skill(&mut self, text: String) {
        self.skill = text;
        self.mark_dirty();
    }

    /// Replaces `panel`'s region with the loading placeholder and registers
    /// a new pending request for it, returning the allocated id.
    pub(crate) fn begin_request(&mut self, panel: Panel) -> RequestId {
        self.regions.insert(panel, LOADING_TEXT.to_string());
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending.insert(request_id, panel);
        self.mark_dirty();
        request_id
    }

    /// Writes the final text for a pending request's region.
    ///
    /// A settle for an id that was never issued (or already settled) changes
    /// nothing and returns false.
    pub(crate) fn settle_request(&mut self, request_id: RequestId, text: String) -> bool {
        let Some(panel) = self.pending.remove(&request_id) else {
            return false;
        };
        self.regions.insert(panel, text);
        self.mark_dirty();
        true
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
