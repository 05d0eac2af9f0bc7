// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{self, Receiver, Sender},
    thread::{self, JoinHandle},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    page::HostPage,
    render,
    runner::{self, Augmented},
    scrape,
    specs::store_page,
    store::FilePrefs,
    toggle::{self, ToggleEvent},
};

use super::components::{features_list, status_bar, url_bar};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::load();
    eframe::run_native(
        "Steam Feature Flags",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(state)))
        }),
    )?;
    Ok(())
}

/// Results coming back from worker threads, tagged with the load they belong to.
enum Msg {
    Host { load: u64, result: Result<HostPage, String> },
    WikiBody { load: u64, game_id: String, body: String },
}

pub struct App {
    pub state: AppState,
    pub prefs: FilePrefs,

    // current page load
    pub host: Option<HostPage>,
    pub augmented: Option<Augmented>,

    pub status: String,
    pub running: bool,

    load_seq: u64,
    wiki_request: Option<JoinHandle<()>>,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let prefs = FilePrefs::open(&state.options.prefs_path);
        let (tx, rx) = mpsc::channel();

        logf!("Init: prefs={}, icons={:?}", prefs.path().display(), state.options.icons);

        Self {
            state,
            prefs,
            host: None,
            augmented: None,
            status: s!("Idle"),
            running: false,
            load_seq: 0,
            wiki_request: None,
            tx,
            rx,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Navigate to the URL in the address bar. Results of earlier loads are
    /// dropped when they arrive.
    pub fn load(&mut self, ctx: &egui::Context) {
        let url = self.state.gui.url_text.trim().to_string();
        self.load_seq += 1;
        self.host = None;
        self.augmented = None;
        self.wiki_request = None;

        if !store_page::is_store_app_url(&url) {
            logd!("Load: {} is not a store app page", url);
            self.running = false;
            self.status("Not a store app page");
            return;
        }

        logf!("Load: #{} {}", self.load_seq, url);
        self.running = true;
        self.status(format!("Loading {url}…"));

        let load = self.load_seq;
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let result = store_page::load(&url).map_err(|e| e.to_string());
            let _ = tx.send(Msg::Host { load, result });
            ctx.request_repaint();
        });
    }

    fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                Msg::Host { load, .. } | Msg::WikiBody { load, .. } if load != self.load_seq => {
                    logd!("Load: dropping result of stale load #{load}");
                }
                Msg::Host { result: Ok(host), .. } => self.on_host(host, ctx),
                Msg::Host { result: Err(e), .. } => {
                    loge!("Load: store page failed: {e}");
                    self.running = false;
                    self.status("Store page unavailable");
                }
                Msg::WikiBody { game_id, body, .. } => self.on_wiki_body(&game_id, &body),
            }
        }

        // A failed wiki request never calls back; stop waiting once its thread is gone.
        if self.wiki_request.as_ref().is_some_and(|h| h.is_finished()) {
            self.wiki_request = None;
            if self.running && self.augmented.is_none() {
                self.running = false;
                self.status("Ready");
            }
        }
    }

    /// The store page is up; this is where the augmentation starts.
    fn on_host(&mut self, host: HostPage, ctx: &egui::Context) {
        let game_id = host.game_id.clone();
        self.host = Some(host);

        let Some(game_id) = game_id else {
            self.running = false;
            self.status("Ready");
            return;
        };

        self.status(format!("Looking up app {game_id} on PCGamingWiki…"));

        let load = self.load_seq;
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let id = game_id.clone();
        self.wiki_request = Some(scrape::fetch_then(&game_id, move |body| {
            let _ = tx.send(Msg::WikiBody { load, game_id: id, body });
            ctx.request_repaint();
        }));
    }

    fn on_wiki_body(&mut self, game_id: &str, body: &str) {
        self.running = false;
        if let Some(host) = self.host.as_ref() {
            self.augmented = runner::on_wiki_body(host, game_id, body, &self.prefs, &self.state.options.icons);
        }
        self.status("Ready");
    }

    pub fn apply_toggle(&mut self, event: ToggleEvent) {
        if let Some(aug) = self.augmented.as_mut() {
            toggle::handle(&mut aug.list, event, &mut self.prefs);
        }
    }

    /// Markup for the current page, rendered with the current preferences.
    pub fn copy_html(&mut self, ctx: &egui::Context) {
        let (Some(host), Some(aug)) = (self.host.as_ref(), self.augmented.as_ref()) else { return };
        let plan = render::render(host.features.as_deref(), &aug.records, &self.prefs, &self.state.options.icons);
        if let Some(plan) = plan {
            ctx.copy_text(plan.to_html());
            self.status("Copied injected HTML");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll(ctx);

        egui::TopBottomPanel::top("url_bar").show(ctx, |ui| {
            url_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                features_list::draw(ui, self);
            });
        });
    }
}
