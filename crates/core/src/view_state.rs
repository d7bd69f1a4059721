//! Selection state for the viewer.
//!
//! Keeps (episode, model, transcript visibility) consistent with the catalog
//! and with each other. Derived values are recomputed explicitly after every
//! mutating call; nothing here can fail; unknown ids simply resolve to
//! "nothing to show".

use serde::Serialize;

use crate::catalog::{Catalog, Episode};
use crate::summary::Summary;

/// The session's current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Key of the catalog, or empty.
    pub episode_id: String,
    /// Key of the selected episode's summaries, or empty.
    pub model: String,
    pub transcript_visible: bool,
}

/// Read-only projection of the controller's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentView<'a> {
    pub episode: Option<&'a Episode>,
    pub models: Vec<&'a str>,
    pub model: &'a str,
    pub summary: Option<&'a Summary>,
    pub transcript: &'a str,
    pub transcript_visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ViewStateController {
    catalog: Catalog,
    state: ViewState,
}

impl ViewStateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut controller = Self::new();
        controller.load_catalog(catalog);
        controller
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Store the catalog. Selects the first episode when nothing is selected
    /// yet; an empty catalog leaves the selection empty.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        if self.state.episode_id.is_empty() {
            if let Some(first) = self.catalog.first() {
                self.state.episode_id = first.id.clone();
                self.state.transcript_visible = false;
            }
        }
        self.reconcile_model();
    }

    /// Select an episode. Unknown ids are stored as-is and simply yield no
    /// models.
    pub fn select_episode(&mut self, id: &str) {
        if !self.catalog.contains(id) {
            tracing::debug!(episode_id = id, "selected episode is not in the catalog");
        }
        self.state.episode_id = id.to_string();
        self.reconcile_model();
        self.state.transcript_visible = false;
    }

    /// Select a model. Not validated against the current episode; the picker
    /// only offers valid names.
    pub fn select_model(&mut self, name: &str) {
        self.state.model = name.to_string();
        self.state.transcript_visible = false;
    }

    pub fn toggle_transcript(&mut self) {
        self.state.transcript_visible = !self.state.transcript_visible;
    }

    pub fn current_view(&self) -> CurrentView<'_> {
        let episode = self.current_episode();
        let summary = episode.and_then(|e| e.summary(&self.state.model));
        CurrentView {
            episode,
            models: episode.map(Episode::model_names).unwrap_or_default(),
            model: &self.state.model,
            summary,
            transcript: episode.map(|e| e.transcript.as_str()).unwrap_or_default(),
            transcript_visible: self.state.transcript_visible,
        }
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.catalog.get(&self.state.episode_id)
    }

    /// Catalog position of the selected episode.
    pub fn selected_index(&self) -> Option<usize> {
        self.catalog.position(&self.state.episode_id)
    }

    pub fn select_next_episode(&mut self) {
        self.step_episode(1);
    }

    pub fn select_prev_episode(&mut self) {
        self.step_episode(-1);
    }

    /// Select the `index`-th model of the current episode, if it exists.
    pub fn select_model_index(&mut self, index: usize) {
        let Some(name) = self
            .current_episode()
            .and_then(|e| e.summaries.get(index))
            .map(|s| s.model.clone())
        else {
            return;
        };
        self.select_model(&name);
    }

    /// Move to the next (or previous) model, wrapping around.
    pub fn cycle_model(&mut self, forward: bool) {
        let Some(episode) = self.current_episode() else {
            return;
        };
        let count = episode.summaries.len();
        if count == 0 {
            return;
        }
        let current = episode
            .summaries
            .iter()
            .position(|s| s.model == self.state.model);
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
            (None, _) => 0,
        };
        self.select_model_index(next);
    }

    fn step_episode(&mut self, delta: isize) {
        if self.catalog.is_empty() {
            return;
        }
        let last = self.catalog.len() - 1;
        let target = match self.selected_index() {
            Some(i) => i.saturating_add_signed(delta).min(last),
            None => 0,
        };
        if self.selected_index() == Some(target) {
            return;
        }
        if let Some(id) = self.catalog.get_index(target).map(|e| e.id.clone()) {
            self.select_episode(&id);
        }
    }

    /// Default-model policy: keep the current model if the episode offers it,
    /// else its first model, else nothing.
    fn reconcile_model(&mut self) {
        let replacement = match self.current_episode() {
            Some(episode) if episode.has_model(&self.state.model) => return,
            Some(episode) => episode
                .summaries
                .first()
                .map(|s| s.model.clone())
                .unwrap_or_default(),
            None => String::new(),
        };
        self.state.model = replacement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Summary;

    fn catalog() -> Catalog {
        let mut ep1 = Episode::new("ep1");
        ep1.upsert_summary("GPT-3.5", Summary::PlainText("a".into()));
        ep1.upsert_summary("Llama3-8B", Summary::PlainText("b".into()));
        let mut ep2 = Episode::new("ep2");
        ep2.upsert_summary("Llama3-8B", Summary::PlainText("c".into()));
        ep2.upsert_summary("Mistral", Summary::PlainText("d".into()));
        let ep3 = Episode::new("ep3");
        [ep1, ep2, ep3].into_iter().collect()
    }

    #[test]
    fn episode_change_keeps_model_when_available() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.select_model("Llama3-8B");
        c.select_episode("ep2");
        assert_eq!(c.state().model, "Llama3-8B");
    }

    #[test]
    fn episode_change_falls_back_to_first_model() {
        let mut c = ViewStateController::with_catalog(catalog());
        assert_eq!(c.state().model, "GPT-3.5");
        c.select_episode("ep2");
        assert_eq!(c.state().model, "Llama3-8B");
    }

    #[test]
    fn episode_without_models_clears_model() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.select_episode("ep3");
        let view = c.current_view();
        assert_eq!(view.model, "");
        assert!(view.models.is_empty());
        assert!(view.summary.is_none());
    }

    #[test]
    fn unknown_episode_degrades_to_empty_view() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.select_episode("does-not-exist");
        let view = c.current_view();
        assert!(view.episode.is_none());
        assert!(view.models.is_empty());
        assert_eq!(view.model, "");
        assert_eq!(view.transcript, "");
        assert_eq!(c.selected_index(), None);
    }

    #[test]
    fn unvalidated_model_yields_no_summary() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.select_model("GPT-4o");
        let view = c.current_view();
        assert_eq!(view.model, "GPT-4o");
        assert!(view.summary.is_none());
        assert!(view.episode.is_some());
    }

    #[test]
    fn stepping_clamps_at_both_ends() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.select_prev_episode();
        assert_eq!(c.state().episode_id, "ep1");
        c.select_next_episode();
        c.select_next_episode();
        c.select_next_episode();
        assert_eq!(c.state().episode_id, "ep3");
    }

    #[test]
    fn stepping_at_the_end_does_not_hide_an_open_transcript() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.toggle_transcript();
        c.select_prev_episode();
        assert!(c.state().transcript_visible);
    }

    #[test]
    fn stepping_from_unknown_id_goes_to_first() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.select_episode("ghost");
        c.select_next_episode();
        assert_eq!(c.state().episode_id, "ep1");
    }

    #[test]
    fn cycle_model_wraps() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.cycle_model(true);
        assert_eq!(c.state().model, "Llama3-8B");
        c.cycle_model(true);
        assert_eq!(c.state().model, "GPT-3.5");
        c.cycle_model(false);
        assert_eq!(c.state().model, "Llama3-8B");
    }

    #[test]
    fn model_index_out_of_range_is_ignored() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.toggle_transcript();
        c.select_model_index(5);
        assert_eq!(c.state().model, "GPT-3.5");
        assert!(c.state().transcript_visible);
    }

    #[test]
    fn reloading_keeps_selection_but_repairs_model() {
        let mut c = ViewStateController::with_catalog(catalog());
        c.select_episode("ep2");
        c.select_model("Mistral");

        let mut ep2 = Episode::new("ep2");
        ep2.upsert_summary("GPT-3.5", Summary::PlainText("x".into()));
        c.load_catalog([Episode::new("ep1"), ep2].into_iter().collect());

        assert_eq!(c.state().episode_id, "ep2");
        assert_eq!(c.state().model, "GPT-3.5");
    }
}
