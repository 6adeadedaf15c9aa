// src/gui/app.rs
use std::error::Error;
use std::path::Path;

use eframe::egui;

use crate::{
    capability::{CommandSpeaker, Speaker},
    config::{
        options::PageKind,
        state::AppState,
    },
    data::ResultView,
    dataset::Entry,
    query::Filter,
    session::Session,
    store::{self, BrokerageSet, Dataset, DatasetCache},
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Pocket Objections",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // one user, one session
    pub session: Session,

    // parsed files by path; survives reloads
    pub cache: DatasetCache,

    // loaded data (None + message when loading failed)
    pub dataset: Option<Dataset>,
    pub load_error: Option<String>,
    pub brokerage: Option<BrokerageSet>,
    pub brokerage_error: Option<String>,

    // positions into dataset.entries for the current view + filters
    pub row_ix: Vec<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // dataset file picked by hand (text box)
    pub dataset_path_text: String,

    pub status: String,
    pub speaker: Box<dyn Speaker>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            session: Session::new(),
            cache: DatasetCache::new(),
            dataset: None,
            load_error: None,
            brokerage: None,
            brokerage_error: None,
            row_ix: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            dataset_path_text: s!(),
            status: s!("Idle"),
            speaker: Box::new(CommandSpeaker::default()),
        };
        app.reload();
        app.reload_brokerage();
        logf!("Init: page={:?}", app.current_page_kind());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn entries(&self) -> &[Entry] {
        self.dataset.as_ref().map(|d| d.entries.as_slice()).unwrap_or(&[])
    }

    /// Filter values from the widget state.
    pub fn filter(&self) -> Filter {
        let g = &self.state.gui;
        Filter {
            term: g.search_term.clone(),
            topics: g.selected_topics.clone(),
            match_mode: g.match_mode,
            category: g.category.clone(),
            tag: g.tag.clone(),
        }
    }

    pub fn view(&self) -> ResultView<'_> {
        ResultView::from_indices(self.entries(), self.row_ix.clone())
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        let id = self.state.gui.selected_id.as_deref()?;
        self.dataset.as_ref()?.find(id)
    }

    /// Show an entry in the detail pane; counts as one view when it changes.
    pub fn select(&mut self, id: &str) {
        if self.state.gui.selected_id.as_deref() == Some(id) {
            return;
        }
        self.speaker.stop();
        self.state.gui.selected_id = Some(s!(id));
        self.session.record_view(id);
    }

    /* ---------- data ---------- */

    /// Recompute the visible rows. Keeps the selection if it is still in
    /// view, otherwise moves it to the first result.
    pub fn rebuild_view(&mut self) {
        let filter = self.filter();
        let row_ix = ResultView::build(self.entries(), &self.session, self.state.gui.view, &filter).row_ix;
        self.row_ix = row_ix;

        let first = {
            let view = self.view();
            let keep = self
                .state
                .gui
                .selected_id
                .as_deref()
                .is_some_and(|id| view.position_of(id).is_some());
            if keep { None } else { view.get(0).map(|e| e.id.clone()) }
        };
        match first {
            Some(id) => self.select(&id),
            None if self.row_ix.is_empty() => self.state.gui.selected_id = None,
            None => {}
        }
        logd!("View: {:?} -> {} rows", self.state.gui.view, self.row_ix.len());
    }

    fn apply_loaded(&mut self, res: crate::error::Result<Dataset>, candidates: &[String]) {
        match res {
            Ok(ds) => {
                let msg = format!("Loaded {} ({} entries)", ds.source_name(), ds.entries.len());
                self.dataset = Some(ds);
                self.load_error = None;
                self.status(msg);
            }
            Err(e) => {
                loge!("Load: {}", e);
                let msg = e.user_message(candidates);
                self.dataset = None;
                self.load_error = Some(msg.clone());
                self.status(msg);
            }
        }
        self.state.gui.selected_id = None;
        self.prune_filters();
        self.rebuild_view();
    }

    /// Resolve from the candidate list and load.
    pub fn reload(&mut self) {
        let load = self.state.options.load.clone();
        let res = store::load_objections(&mut self.cache, &load);
        self.apply_loaded(res, &load.candidates);
    }

    /// Load a file picked by hand. The cache entry is dropped first so a
    /// re-upload under the same name is always re-read.
    pub fn load_path(&mut self, path: &Path) {
        self.cache.invalidate(path);
        let res = store::load_from_path(&mut self.cache, path, self.state.options.load.dedupe);
        self.apply_loaded(res, &[]);
    }

    /// Re-clean the current source (dedupe toggle). Parsing comes from cache.
    pub fn reclean(&mut self) {
        let Some(path) = self.dataset.as_ref().map(|d| d.source.clone()) else {
            return self.reload();
        };
        let res = store::load_from_path(&mut self.cache, &path, self.state.options.load.dedupe);
        self.apply_loaded(res, &[]);
    }

    pub fn reload_brokerage(&mut self) {
        let load = self.state.options.load.clone();
        match store::load_brokerage(&mut self.cache, &load) {
            Ok(set) => {
                if self.state.gui.picked_brokerage.as_deref().is_none_or(|p| set.sheet.find(p).is_none()) {
                    self.state.gui.picked_brokerage = set.sheet.brokerages().into_iter().next();
                }
                self.brokerage = Some(set);
                self.brokerage_error = None;
            }
            Err(e) => {
                logd!("Brokerage: {}", e);
                self.brokerage = None;
                self.brokerage_error = Some(e.user_message(&load.brokerage_candidates));
            }
        }
    }

    /// Drop filter values the new dataset does not offer.
    fn prune_filters(&mut self) {
        let (cats, tags, topics) = match &self.dataset {
            Some(d) => (&d.categories, &d.tags, &d.topics),
            None => return self.state.gui.clear_filters(),
        };
        let g = &mut self.state.gui;
        if g.category.as_ref().is_some_and(|c| !cats.contains(c)) {
            g.category = None;
        }
        if g.tag.as_ref().is_some_and(|t| !tags.iter().any(|x| x.eq_ignore_ascii_case(t))) {
            g.tag = None;
        }
        g.selected_topics.retain(|t| topics.contains(t));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let page = self.current_page();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::SidePanel::left("side")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().id_salt("side_scroll").show(ui, |ui| {
                    page.draw_side(ui, self);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);
            ui.separator();
            self.current_page().draw_main(ui, self);
        });
    }
}
