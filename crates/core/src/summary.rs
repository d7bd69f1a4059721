use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Default number of keywords shown for a structured summary.
pub const DEFAULT_KEYWORD_LIMIT: usize = 7;

/// Generated description of an episode, as produced by one model.
///
/// Summary assets come in two shapes: a bare string (older pipeline output)
/// or a JSON object with abstract/outline/quotes/Q&A/keywords sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Summary {
    PlainText(String),
    Structured(StructuredSummary),
}

/// Sectioned summary record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuredSummary {
    /// Markdown text.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub outline: Vec<String>,
    pub quotes: Vec<Snippet>,
    pub q_and_a: Vec<QaItem>,
    pub keywords: Vec<String>,
}

/// A short piece of transcript text, optionally anchored to a timestamp.
///
/// Used both for pull quotes and for Q&A evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QaItem {
    pub question: String,
    /// Markdown text.
    pub answer: String,
    pub evidence: Vec<Snippet>,
}

impl Summary {
    /// Build a summary from an arbitrary JSON value.
    ///
    /// Never fails: strings become plain text, objects become structured
    /// records with every missing or malformed section treated as empty, and
    /// anything else becomes an empty plain-text summary.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::PlainText(text.clone()),
            Value::Object(_) => Self::Structured(StructuredSummary::from_value(value)),
            _ => Self::PlainText(String::new()),
        }
    }

    /// Abstract for structured summaries, the whole text for plain ones.
    pub fn abstract_text(&self) -> &str {
        match self {
            Self::PlainText(text) => text,
            Self::Structured(s) => &s.abstract_text,
        }
    }

    pub fn structured(&self) -> Option<&StructuredSummary> {
        match self {
            Self::PlainText(_) => None,
            Self::Structured(s) => Some(s),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    pub fn keywords(&self) -> &[String] {
        match self {
            Self::PlainText(_) => &[],
            Self::Structured(s) => &s.keywords,
        }
    }

    /// True when there is nothing at all to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::PlainText(text) => text.trim().is_empty(),
            Self::Structured(s) => {
                s.abstract_text.trim().is_empty()
                    && s.outline.is_empty()
                    && s.quotes.is_empty()
                    && s.q_and_a.is_empty()
                    && s.keywords.is_empty()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Summary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl StructuredSummary {
    pub fn from_value(value: &Value) -> Self {
        let abstract_text = value
            .get("abstract")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let quotes = match value.get("quotes") {
            Some(Value::Array(items)) => items.iter().filter_map(Snippet::from_value).collect(),
            _ => Vec::new(),
        };
        let q_and_a = match value.get("q_and_a") {
            Some(Value::Array(items)) => items.iter().filter_map(QaItem::from_value).collect(),
            _ => Vec::new(),
        };

        Self {
            abstract_text,
            outline: string_list(value.get("outline")),
            quotes,
            q_and_a,
            keywords: string_list(value.get("keywords")),
        }
    }

    /// Keywords for display: blanks dropped, duplicates removed (first
    /// occurrence wins), capped at `limit`.
    pub fn display_keywords(&self, limit: usize) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for keyword in &self.keywords {
            let keyword = keyword.trim();
            if keyword.is_empty() || out.contains(&keyword) {
                continue;
            }
            if out.len() == limit {
                break;
            }
            out.push(keyword);
        }
        out
    }
}

impl Snippet {
    pub fn new(text: impl Into<String>, timestamp: Option<&str>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.map(str::to_string),
        }
    }

    /// Accepts either a bare string or `{text, timestamp}`. Snippets without
    /// text are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let (text, timestamp) = match value {
            Value::String(text) => (text.as_str(), None),
            Value::Object(map) => (
                map.get("text").and_then(Value::as_str).unwrap_or_default(),
                map.get("timestamp").and_then(scalar_string),
            ),
            _ => return None,
        };
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            timestamp,
        })
    }
}

impl QaItem {
    /// `None` for non-objects and for items with neither a question nor an
    /// answer, whatever evidence they carry.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let question = map
            .get("question")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let answer = map.get("answer").and_then(Value::as_str).unwrap_or_default();
        if question.trim().is_empty() && answer.trim().is_empty() {
            return None;
        }

        // Evidence is sometimes a single snippet rather than a list.
        let evidence = match map.get("evidence") {
            Some(Value::Array(items)) => items.iter().filter_map(Snippet::from_value).collect(),
            Some(single) => Snippet::from_value(single).into_iter().collect(),
            None => Vec::new(),
        };

        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            evidence,
        })
    }
}

/// Coerce a JSON value into a list of non-blank strings.
///
/// A list keeps its scalar entries; a single scalar becomes a one-element
/// list; anything else is empty.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(scalar_string)
            .filter(|s| !s.trim().is_empty())
            .collect(),
        Some(other) => scalar_string(other)
            .filter(|s| !s.trim().is_empty())
            .into_iter()
            .collect(),
        None => Vec::new(),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
