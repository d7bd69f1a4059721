use crate::{Catalog, Episode, StructuredSummary, Summary};

/// Structured summary with only an abstract.
pub fn abstract_only(text: &str) -> Summary {
    Summary::Structured(StructuredSummary {
        abstract_text: text.to_string(),
        ..StructuredSummary::default()
    })
}

/// Episode with the given `(model, summary)` pairs, in order.
pub fn episode(id: &str, title: &str, summaries: Vec<(&str, Summary)>) -> Episode {
    let mut episode = Episode {
        title: title.to_string(),
        host: "Lex Fridman".to_string(),
        ..Episode::new(id)
    };
    for (model, summary) in summaries {
        episode.upsert_summary(model, summary);
    }
    episode
}

/// The single-episode catalog used across viewer tests: "ep1" with GPT-3.5
/// ("hi") and Llama3-8B ("yo") summaries and a short transcript.
pub fn two_model_catalog() -> Catalog {
    let mut ep1 = episode(
        "ep1",
        "A",
        vec![
            ("GPT-3.5", abstract_only("hi")),
            ("Llama3-8B", abstract_only("yo")),
        ],
    );
    ep1.transcript = "full text".to_string();
    [ep1].into_iter().collect()
}
