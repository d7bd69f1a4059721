use anyhow::Result;
use podview_core::{Catalog, Episode};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct EpisodeRow<'a> {
    id: &'a str,
    title: &'a str,
    host: &'a str,
    date: &'a str,
    duration: &'a str,
    tags: &'a [String],
    models: Vec<&'a str>,
}

impl<'a> From<&'a Episode> for EpisodeRow<'a> {
    fn from(episode: &'a Episode) -> Self {
        Self {
            id: &episode.id,
            title: &episode.title,
            host: &episode.host,
            date: &episode.date,
            duration: &episode.duration,
            tags: &episode.tags,
            models: episode.model_names(),
        }
    }
}

pub fn run_list(catalog: &Catalog, json: bool) -> Result<()> {
    print!("{}", render_list(catalog, json)?);
    Ok(())
}

fn render_list(catalog: &Catalog, json: bool) -> Result<String> {
    if json {
        let rows: Vec<EpisodeRow> = catalog.iter().map(EpisodeRow::from).collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?));
    }
    if catalog.is_empty() {
        return Ok("No podcasts available yet.\n".to_string());
    }

    let id_width = catalog.ids().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for episode in catalog {
        let models = episode.model_names().join(",");
        out.push_str(&format!(
            "{:<id_width$}  {}  {}  {}  [{}]\n",
            episode.id, episode.title, episode.host, episode.duration, models
        ));
    }
    Ok(out)
}
