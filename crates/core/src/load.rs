//! Reading catalog assets from disk.
//!
//! Two layouts are accepted:
//!
//! - a TOML manifest listing each episode's metadata, transcript file and
//!   per-model summary files (paths relative to the manifest);
//! - a combined `podcasts.json` document keyed by episode id, as written by
//!   the summary pipeline's merge step.

use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::assemble::{EpisodeSource, SummaryVariant, assemble};
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::ordered::OrderedMap;
use crate::summary::string_list;

/// Top-level manifest (`catalog.toml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "episode")]
    pub episodes: Vec<ManifestEpisode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestEpisode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Transcript text file.
    #[serde(default)]
    pub transcript: Option<PathBuf>,
    #[serde(default, rename = "summary")]
    pub summaries: Vec<ManifestSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestSummary {
    pub model: String,
    /// JSON summary record written by the pipeline.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Inline plain-text summary, used when there is no file.
    #[serde(default)]
    pub text: Option<String>,
}

/// Entry of the combined `podcasts.json` document. Every field is kept as
/// raw JSON so one malformed value cannot reject the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
struct CombinedEntry {
    #[serde(default)]
    title: Value,
    #[serde(default)]
    host: Value,
    #[serde(default)]
    date: Value,
    #[serde(default)]
    duration: Value,
    #[serde(default)]
    tags: Value,
    #[serde(default)]
    summaries: CombinedSummaries,
    #[serde(default)]
    transcript: Value,
}

/// Model map in document order; anything that is not an object is empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CombinedSummaries {
    Models(OrderedMap<Value>),
    Malformed(Value),
}

impl Default for CombinedSummaries {
    fn default() -> Self {
        Self::Models(OrderedMap::default())
    }
}

/// A combined entry, or whatever non-object value stood in its place.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CombinedValue {
    Entry(CombinedEntry),
    Malformed(Value),
}

/// Load a catalog from a manifest (`.toml`) or combined document (`.json`).
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let catalog = if is_json(path) {
        let raw = read(path)?;
        parse_combined(&raw).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        let manifest = read_manifest(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        assemble(
            manifest
                .episodes
                .into_iter()
                .map(|episode| manifest_source(episode, base)),
        )
    };
    tracing::info!(path = %path.display(), episodes = catalog.len(), "catalog loaded");
    Ok(catalog)
}

pub fn read_manifest(path: &Path) -> Result<Manifest, CatalogError> {
    let raw = read(path)?;
    toml::from_str(&raw).map_err(|source| CatalogError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a combined `podcasts.json` document. Key order is preserved and
/// malformed fields are treated as empty.
pub fn parse_combined(raw: &str) -> Result<Catalog, serde_json::Error> {
    let entries: OrderedMap<CombinedValue> = serde_json::from_str(raw)?;
    Ok(assemble(
        entries
            .into_inner()
            .into_iter()
            .map(|(id, value)| combined_source(id, value)),
    ))
}

fn combined_source(id: String, value: CombinedValue) -> EpisodeSource {
    let entry = match value {
        CombinedValue::Entry(entry) => entry,
        CombinedValue::Malformed(other) => {
            tracing::warn!(episode_id = %id, value = %other, "episode entry is not an object");
            CombinedEntry::default()
        }
    };
    let variants = match entry.summaries {
        CombinedSummaries::Models(models) => models
            .into_inner()
            .into_iter()
            .map(|(model, record)| SummaryVariant::new(model, record))
            .collect(),
        CombinedSummaries::Malformed(other) => {
            if !other.is_null() {
                tracing::warn!(episode_id = %id, "ignoring summaries that are not an object");
            }
            Vec::new()
        }
    };

    EpisodeSource {
        id: Some(id),
        title: text(&entry.title),
        host: text(&entry.host),
        date: text(&entry.date),
        duration: text(&entry.duration),
        tags: (!entry.tags.is_null()).then(|| string_list(Some(&entry.tags))),
        variants,
        transcript: text(&entry.transcript),
    }
}

fn text(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

fn manifest_source(episode: ManifestEpisode, base: &Path) -> EpisodeSource {
    let variants = episode
        .summaries
        .into_iter()
        .filter_map(|summary| summary_variant(summary, base))
        .collect();
    let transcript = episode
        .transcript
        .map(|file| read_transcript(&base.join(file)))
        .unwrap_or_default();

    EpisodeSource {
        id: episode.id,
        title: episode.title,
        host: episode.host,
        date: episode.date,
        duration: episode.duration,
        tags: episode.tags,
        variants,
        transcript,
    }
}

fn summary_variant(summary: ManifestSummary, base: &Path) -> Option<SummaryVariant> {
    let record = match (summary.file, summary.text) {
        (Some(file), _) => {
            let path = base.join(file);
            match read_summary_record(&path) {
                Some(record) => record,
                None => return None,
            }
        }
        (None, Some(text)) => Value::String(text),
        (None, None) => {
            tracing::warn!(model = %summary.model, "summary entry has neither file nor text");
            return None;
        }
    };
    Some(SummaryVariant::new(summary.model, record))
}

fn read_summary_record(path: &Path) -> Option<Value> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable summary");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping malformed summary");
            None
        }
    }
}

fn read_transcript(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "transcript unavailable");
            String::new()
        }
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
