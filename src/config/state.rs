// src/config/state.rs
use super::options::AppOptions;
use crate::query::{MatchMode, ViewKind};

/// Widget-level state of the desktop shell. Filter values here are fed
/// into `query::Filter` on every frame.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    pub search_term: String,
    pub selected_topics: Vec<String>,
    pub match_mode: MatchMode,
    /// None = "All"
    pub category: Option<String>,
    /// None = "All"
    pub tag: Option<String>,
    pub view: ViewKind,

    /// Id of the entry shown in the detail pane
    pub selected_id: Option<String>,

    /// Deck import text box
    pub import_path_text: String,

    /// Brokerage tab
    pub picked_brokerage: Option<String>,
    pub compare_funnel_pilot: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 760,
            current_page_index: 0,
            search_term: s!(),
            selected_topics: Vec::new(),
            match_mode: MatchMode::Any,
            category: None,
            tag: None,
            view: ViewKind::All,
            selected_id: None,
            import_path_text: s!(),
            picked_brokerage: None,
            compare_funnel_pilot: false,
        }
    }
}

impl GuiState {
    /// Drop every filter back to its "no filtering" value.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.selected_topics.clear();
        self.match_mode = MatchMode::Any;
        self.category = None;
        self.tag = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
