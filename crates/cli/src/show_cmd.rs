use anyhow::{Result, bail};
use podview_core::{Catalog, ViewStateController};
use podview_tui::export::{PlainExportOptions, render_plain};

#[derive(Debug, Clone)]
pub struct ShowArgs {
    pub id: String,
    pub model: Option<String>,
    pub transcript: bool,
    pub json: bool,
    pub width: usize,
    pub keyword_limit: usize,
}

pub fn run_show(catalog: Catalog, args: &ShowArgs) -> Result<()> {
    print!("{}", render_show(catalog, args)?);
    Ok(())
}

/// Drive the same controller the TUI uses, then print its view.
fn render_show(catalog: Catalog, args: &ShowArgs) -> Result<String> {
    if !catalog.contains(&args.id) {
        bail!("episode '{}' not found", args.id);
    }
    let mut controller = ViewStateController::with_catalog(catalog);
    controller.select_episode(&args.id);
    if let Some(model) = args.model.as_deref() {
        if !controller.current_view().models.contains(&model) {
            tracing::warn!(episode = %args.id, model, "episode has no summary from this model");
        }
        controller.select_model(model);
    }
    if args.transcript {
        controller.toggle_transcript();
    }

    let view = controller.current_view();
    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&view)?));
    }
    Ok(render_plain(
        &view,
        &PlainExportOptions {
            keyword_limit: args.keyword_limit,
            include_transcript: args.transcript,
            width: args.width,
        },
    ))
}
