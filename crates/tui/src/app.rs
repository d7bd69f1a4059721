use crossterm::event::KeyCode;
use podview_core::{Catalog, CurrentView, ViewStateController};
use podview_runtime_config::DisplaySettings;
use ratatui::widgets::ListState;

/// Which panel the scroll keys move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollFocus {
    Summary,
    Transcript,
}

pub struct App {
    pub controller: ViewStateController,
    pub display: DisplaySettings,
    pub list_state: ListState,
    pub focus: ScrollFocus,
    pub summary_scroll: u16,
    pub transcript_scroll: u16,
    /// Upper scroll bounds from the last render.
    pub summary_max_scroll: u16,
    pub transcript_max_scroll: u16,
    pub show_help: bool,
}

impl App {
    pub fn new(catalog: Catalog, display: DisplaySettings) -> Self {
        let mut app = Self {
            controller: ViewStateController::new(),
            display,
            list_state: ListState::default(),
            focus: ScrollFocus::Summary,
            summary_scroll: 0,
            transcript_scroll: 0,
            summary_max_scroll: 0,
            transcript_max_scroll: 0,
            show_help: false,
        };
        app.controller.load_catalog(catalog);
        app.sync_list_selection();
        app
    }

    pub fn view(&self) -> CurrentView<'_> {
        self.controller.current_view()
    }

    pub fn catalog(&self) -> &Catalog {
        self.controller.catalog()
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        // Help overlay: any key closes it, `q` still quits.
        if self.show_help {
            self.show_help = false;
            return matches!(key, KeyCode::Char('q'));
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('?') => self.show_help = true,

            KeyCode::Char('j') | KeyCode::Down => {
                self.controller.select_next_episode();
                self.after_selection();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.controller.select_prev_episode();
                self.after_selection();
            }
            KeyCode::Char('g') => self.select_edge_episode(false),
            KeyCode::Char('G') => self.select_edge_episode(true),

            KeyCode::Char('l') | KeyCode::Right => {
                self.controller.cycle_model(true);
                self.after_selection();
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.controller.cycle_model(false);
                self.after_selection();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as u8 - b'1') as usize;
                self.controller.select_model_index(index);
                self.after_selection();
            }

            KeyCode::Char('t') | KeyCode::Enter => {
                self.controller.toggle_transcript();
                self.transcript_scroll = 0;
                self.focus = if self.controller.state().transcript_visible {
                    ScrollFocus::Transcript
                } else {
                    ScrollFocus::Summary
                };
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    ScrollFocus::Summary if self.controller.state().transcript_visible => {
                        ScrollFocus::Transcript
                    }
                    _ => ScrollFocus::Summary,
                };
            }

            KeyCode::Char('J') | KeyCode::PageDown => self.scroll(10),
            KeyCode::Char('K') | KeyCode::PageUp => self.scroll(-10),
            KeyCode::Char('d') => self.scroll(1),
            KeyCode::Char('u') => self.scroll(-1),
            KeyCode::Home => self.scroll(i32::MIN),
            KeyCode::End => self.scroll(i32::MAX),
            _ => {}
        }
        false
    }

    fn select_edge_episode(&mut self, last: bool) {
        let catalog = self.controller.catalog();
        let target = if last {
            catalog.len().checked_sub(1).and_then(|i| catalog.get_index(i))
        } else {
            catalog.first()
        };
        let Some(id) = target.map(|e| e.id.clone()) else {
            return;
        };
        if self.controller.state().episode_id != id {
            self.controller.select_episode(&id);
            self.after_selection();
        }
    }

    /// A selection change hides the transcript; put the panels back at the top.
    fn after_selection(&mut self) {
        if !self.controller.state().transcript_visible {
            self.summary_scroll = 0;
            self.transcript_scroll = 0;
            self.focus = ScrollFocus::Summary;
        }
        self.sync_list_selection();
    }

    fn scroll(&mut self, delta: i32) {
        let (offset, max) = match self.focus {
            ScrollFocus::Summary => (&mut self.summary_scroll, self.summary_max_scroll),
            ScrollFocus::Transcript => (&mut self.transcript_scroll, self.transcript_max_scroll),
        };
        let next = (*offset as i64 + delta as i64).clamp(0, max as i64);
        *offset = next as u16;
    }

    pub fn sync_list_selection(&mut self) {
        self.list_state.select(self.controller.selected_index());
    }
}
