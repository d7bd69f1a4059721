//! Pure transform from raw pipeline outputs into a [`Catalog`].
//!
//! Inputs are whatever the summary pipeline wrote: one JSON record per
//! (episode, model) pair plus the raw transcript text. Nothing here touches
//! the filesystem; see [`crate::load`] for that.

use serde_json::Value;

use crate::catalog::{Catalog, Episode};
use crate::summary::{Summary, string_list};

/// Everything known about one episode before assembly.
#[derive(Debug, Clone, Default)]
pub struct EpisodeSource {
    /// Explicit catalog key. When absent the key comes from the records'
    /// `episode_id` fields.
    pub id: Option<String>,
    pub title: String,
    pub host: String,
    pub date: String,
    pub duration: String,
    /// Explicit tags. When absent, tags are the union of record keywords.
    pub tags: Option<Vec<String>>,
    pub variants: Vec<SummaryVariant>,
    pub transcript: String,
}

/// One model's raw summary record.
#[derive(Debug, Clone)]
pub struct SummaryVariant {
    pub model: String,
    pub record: Value,
}

impl SummaryVariant {
    pub fn new(model: impl Into<String>, record: Value) -> Self {
        Self {
            model: model.into(),
            record,
        }
    }
}

/// The `episode_id` carried by a summary record, if any.
pub fn record_episode_id(record: &Value) -> Option<&str> {
    record
        .get("episode_id")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

/// Ordered, de-duplicated union of the records' keywords.
pub fn merged_keywords<'a>(records: impl IntoIterator<Item = &'a Value>) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for record in records {
        for keyword in string_list(record.get("keywords")) {
            if !tags.contains(&keyword) {
                tags.push(keyword);
            }
        }
    }
    tags
}

impl EpisodeSource {
    /// Catalog key: the explicit id, else the first record that names one.
    pub fn resolve_id(&self) -> Option<String> {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| {
                self.variants
                    .iter()
                    .find_map(|variant| record_episode_id(&variant.record))
            })
            .map(str::to_string)
    }

    /// Build the episode record, or `None` if it cannot be identified.
    pub fn into_episode(self) -> Option<Episode> {
        let id = self.resolve_id()?;
        let tags = match self.tags {
            Some(explicit) => dedup(explicit),
            None => merged_keywords(self.variants.iter().map(|v| &v.record)),
        };

        let mut episode = Episode {
            title: if self.title.trim().is_empty() {
                id.clone()
            } else {
                self.title
            },
            host: self.host,
            date: self.date,
            duration: self.duration,
            tags,
            transcript: self.transcript,
            ..Episode::new(id)
        };
        for variant in self.variants {
            episode.upsert_summary(variant.model, Summary::from_value(&variant.record));
        }
        Some(episode)
    }
}

/// Assemble a catalog. Episodes that cannot be identified are skipped and a
/// later episode with an already-used id replaces the earlier one in place.
pub fn assemble(sources: impl IntoIterator<Item = EpisodeSource>) -> Catalog {
    let mut catalog = Catalog::new();
    for source in sources {
        let title = source.title.clone();
        let Some(episode) = source.into_episode() else {
            tracing::warn!(title = %title, "skipping episode without an episode_id");
            continue;
        };
        let id = episode.id.clone();
        if catalog.insert(episode).is_some() {
            tracing::warn!(episode_id = %id, "duplicate episode id, keeping the later entry");
        }
    }
    tracing::debug!(episodes = catalog.len(), "catalog assembled");
    catalog
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !item.trim().is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn source(title: &str, records: Vec<(&str, Value)>) -> EpisodeSource {
        EpisodeSource {
            title: title.to_string(),
            host: "Lex Fridman".to_string(),
            variants: records
                .into_iter()
                .map(|(model, record)| SummaryVariant::new(model, record))
                .collect(),
            ..EpisodeSource::default()
        }
    }

    #[test]
    fn id_comes_from_first_record_that_has_one() {
        let src = source(
            "Annie Jacobsen",
            vec![
                ("GPT-3.5", json!({ "abstract": "a" })),
                ("Llama3-8B", json!({ "episode_id": "annie", "abstract": "b" })),
                ("Llama3-8B (Fine-tuned)", json!({ "episode_id": "other" })),
            ],
        );
        assert_eq!(src.resolve_id().as_deref(), Some("annie"));
    }

    #[test]
    fn explicit_id_wins() {
        let mut src = source("x", vec![("m", json!({ "episode_id": "from-record" }))]);
        src.id = Some("override".to_string());
        assert_eq!(src.resolve_id().as_deref(), Some("override"));
    }

    #[test]
    fn unidentifiable_episode_is_dropped_without_failing_others() {
        let catalog = assemble(vec![
            source("kept", vec![("GPT-3.5", json!({ "episode_id": "ep1" }))]),
            source(
                "dropped",
                vec![
                    ("GPT-3.5", json!({ "abstract": "no id" })),
                    ("Llama3-8B", json!({ "episode_id": "   " })),
                ],
            ),
            source("also kept", vec![("GPT-3.5", json!({ "episode_id": "ep2" }))]),
        ]);
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["ep1", "ep2"]);
    }

    #[test]
    fn tags_are_ordered_union_of_keywords() {
        let episode = source(
            "t",
            vec![
                ("a", json!({ "episode_id": "ep", "keywords": ["aliens", "SETI"] })),
                ("b", json!({ "episode_id": "ep", "keywords": ["SETI", "physics", ""] })),
                ("c", json!({ "episode_id": "ep" })),
            ],
        )
        .into_episode()
        .expect("episode");
        assert_eq!(episode.tags, vec!["aliens", "SETI", "physics"]);
    }

    #[test]
    fn explicit_tags_are_deduplicated() {
        let mut src = source("t", vec![("a", json!({ "episode_id": "ep", "keywords": ["k"] }))]);
        src.tags = Some(vec!["x".into(), "y".into(), "x".into()]);
        let episode = src.into_episode().expect("episode");
        assert_eq!(episode.tags, vec!["x", "y"]);
    }

    #[test]
    fn models_keep_variant_order_and_title_defaults_to_id() {
        let episode = source(
            "",
            vec![
                ("GPT-3.5", json!({ "episode_id": "ep", "abstract": "hi" })),
                ("Llama3-8B", json!("plain text summary")),
            ],
        )
        .into_episode()
        .expect("episode");
        assert_eq!(episode.title, "ep");
        assert_eq!(episode.model_names(), vec!["GPT-3.5", "Llama3-8B"]);
        assert!(matches!(
            episode.summary("Llama3-8B"),
            Some(Summary::PlainText(text)) if text == "plain text summary"
        ));
    }

    #[test]
    fn duplicate_ids_replace_in_place() {
        let catalog = assemble(vec![
            source("first", vec![("m", json!({ "episode_id": "a" }))]),
            source("second", vec![("m", json!({ "episode_id": "b" }))]),
            source("third", vec![("m", json!({ "episode_id": "a" }))]),
        ]);
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(catalog.get("a").map(|e| e.title.as_str()), Some("third"));
    }
}
