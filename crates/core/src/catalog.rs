use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::summary::Summary;

/// One podcast recording and the artifacts generated for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Episode {
    /// Unique catalog key.
    pub id: String,
    pub title: String,
    pub host: String,
    /// Display string, e.g. "2024-12-23".
    pub date: String,
    /// Display string, e.g. "3h 26m".
    pub duration: String,
    /// Ordered, de-duplicated.
    pub tags: Vec<String>,
    /// Summaries keyed by model name, in insertion order.
    #[serde(serialize_with = "serialize_model_summaries")]
    pub summaries: Vec<ModelSummary>,
    pub transcript: String,
}

/// A summary together with the name of the model that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub model: String,
    pub summary: Summary,
}

impl Episode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Model names in insertion order. This is the left-to-right order of the
    /// model picker.
    pub fn model_names(&self) -> Vec<&str> {
        self.summaries.iter().map(|s| s.model.as_str()).collect()
    }

    pub fn summary(&self, model: &str) -> Option<&Summary> {
        self.summaries
            .iter()
            .find(|s| s.model == model)
            .map(|s| &s.summary)
    }

    pub fn has_model(&self, model: &str) -> bool {
        self.summaries.iter().any(|s| s.model == model)
    }

    /// Insert or replace the summary for `model`. A replaced entry keeps its
    /// position.
    pub fn upsert_summary(&mut self, model: impl Into<String>, summary: Summary) {
        let model = model.into();
        match self.summaries.iter_mut().find(|s| s.model == model) {
            Some(existing) => existing.summary = summary,
            None => self.summaries.push(ModelSummary { model, summary }),
        }
    }
}

fn serialize_model_summaries<S: Serializer>(
    summaries: &[ModelSummary],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(summaries.len()))?;
    for entry in summaries {
        map.serialize_entry(&entry.model, &entry.summary)?;
    }
    map.end()
}

/// The complete, ordered collection of episodes.
///
/// Built once at startup; iteration order is insertion order and the first
/// entry is the default selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    episodes: Vec<Episode>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an episode keyed by its id. Replacing an existing id keeps the
    /// original position and returns the previous record.
    pub fn insert(&mut self, episode: Episode) -> Option<Episode> {
        match self.index.get(&episode.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.episodes[pos], episode)),
            None => {
                self.index.insert(episode.id.clone(), self.episodes.len());
                self.episodes.push(episode);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Episode> {
        self.index.get(id).map(|&pos| &self.episodes[pos])
    }

    pub fn get_index(&self, pos: usize) -> Option<&Episode> {
        self.episodes.get(pos)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn first(&self) -> Option<&Episode> {
        self.episodes.first()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.episodes.iter().map(|e| e.id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Episode> {
        self.episodes.iter()
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

impl FromIterator<Episode> for Catalog {
    fn from_iter<I: IntoIterator<Item = Episode>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for episode in iter {
            catalog.insert(episode);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Episode;
    type IntoIter = std::slice::Iter<'a, Episode>;

    fn into_iter(self) -> Self::IntoIter {
        self.episodes.iter()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.episodes.len()))?;
        for episode in &self.episodes {
            map.serialize_entry(&episode.id, episode)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str, title: &str) -> Episode {
        Episode {
            title: title.to_string(),
            ..Episode::new(id)
        }
    }

    #[test]
    fn preserves_insertion_order() {
        let catalog: Catalog = ["zeta", "alpha", "mid"]
            .into_iter()
            .map(|id| episode(id, id))
            .collect();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(catalog.first().map(|e| e.id.as_str()), Some("zeta"));
        assert_eq!(catalog.position("mid"), Some(2));
    }

    #[test]
    fn replacing_keeps_position() {
        let mut catalog = Catalog::new();
        catalog.insert(episode("a", "first"));
        catalog.insert(episode("b", "second"));
        let previous = catalog.insert(episode("a", "replacement"));

        assert_eq!(previous.map(|e| e.title), Some("first".to_string()));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get_index(0).map(|e| e.title.as_str()), Some("replacement"));
    }

    #[test]
    fn model_names_follow_insertion_order() {
        let mut ep = Episode::new("ep1");
        ep.upsert_summary("Llama3-8B", Summary::PlainText("b".into()));
        ep.upsert_summary("GPT-3.5", Summary::PlainText("a".into()));
        ep.upsert_summary("Llama3-8B", Summary::PlainText("c".into()));

        assert_eq!(ep.model_names(), vec!["Llama3-8B", "GPT-3.5"]);
        assert_eq!(ep.summary("Llama3-8B"), Some(&Summary::PlainText("c".into())));
        assert!(ep.summary("GPT-4o").is_none());
    }

    #[test]
    fn serializes_as_ordered_maps() {
        let mut ep = Episode::new("ep1");
        ep.upsert_summary("z", Summary::PlainText("1".into()));
        ep.upsert_summary("a", Summary::PlainText("2".into()));
        let catalog: Catalog = [ep].into_iter().collect();

        let json = serde_json::to_string(&catalog).expect("serialize");
        let z = json.find("\"z\"").expect("z key");
        let a = json.find("\"a\"").expect("a key");
        assert!(z < a, "model order lost: {json}");
    }
}
