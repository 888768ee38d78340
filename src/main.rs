#![warn(clippy::all)]

//! Dive Log Dashboard - a web-based dive log visualization tool.
//!
//! This application fetches dive records and summary statistics from a
//! dive log backend API, renders dives as markers on a stylized world map,
//! lists them in a side panel, and shows a detail modal on selection.

mod api;
mod geo;
mod state;
mod ui;

use eframe::egui;
use web_time::Instant;

use api::{
    ApiClient, DiveDetailChannel, DiveDetailResult, DiveListChannel, DiveListResult, StatsChannel,
    StatsResult,
};
use state::{AppState, RevealAnimator};

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser)]
#[command(name = "divelog-dashboard", about = "Dive log visualization dashboard")]
struct Args {
    /// Base URL of the dive log backend API
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    api_url: String,
}

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser as _;

    env_logger::init();
    let args = Args::parse();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Dive Log Dashboard",
        native_options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, args.api_url)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let window = web_sys::window().expect("No window");
        let document = window.document().expect("No document");

        // The dashboard talks to the backend that served the page.
        let base_url = window.location().origin().expect("No window origin");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, base_url)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct DashboardApp {
    /// Application state containing all sub-states
    state: AppState,

    /// REST client for the dive log backend
    client: ApiClient,

    /// Channel for the dive list fetch
    dive_list_channel: DiveListChannel,

    /// Channel for single-dive detail fetches
    detail_channel: DiveDetailChannel,

    /// Channel for the stats fetch
    stats_channel: StatsChannel,

    /// Reveal animation state machine
    reveal: RevealAnimator,
}

impl DashboardApp {
    /// Creates a new DashboardApp instance and kicks off the initial loads.
    pub fn new(cc: &eframe::CreationContext<'_>, base_url: String) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let client = ApiClient::new(base_url);
        log::info!("Using backend at {}", client.base_url());

        let dive_list_channel = DiveListChannel::new();
        let stats_channel = StatsChannel::new();

        dive_list_channel.fetch(cc.egui_ctx.clone(), client.clone());
        stats_channel.fetch(cc.egui_ctx.clone(), client.clone());

        Self {
            state: AppState::new(),
            client,
            dive_list_channel,
            detail_channel: DiveDetailChannel::new(),
            stats_channel,
            reveal: RevealAnimator::new(),
        }
    }

    /// Re-fetches the dive list and stats, replacing the store wholesale.
    fn start_reload(&mut self, ctx: &egui::Context) {
        if self.dive_list_channel.is_loading() {
            return;
        }
        log::info!("Reloading dive data");
        self.reveal.cancel();
        self.state.status_message = "Loading dives...".to_string();
        self.dive_list_channel
            .fetch(ctx.clone(), self.client.clone());
        if !self.stats_channel.is_loading() {
            self.stats_channel.fetch(ctx.clone(), self.client.clone());
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Check for a completed dive list fetch
        if let Some(result) = self.dive_list_channel.try_recv() {
            match result {
                DiveListResult::Success(dives) => {
                    log::info!("Loaded {} dive(s)", dives.len());
                    self.state.status_message = format!("{} dives loaded", dives.len());
                    self.state.dive_store.replace_all(dives);
                    self.reveal.start(self.state.dive_store.len(), now);
                }
                DiveListResult::Error(msg) => {
                    log::error!("Dive list load failed: {}", msg);
                    self.state.status_message = "Failed to load dives".to_string();
                    self.state.viz.error = Some(format!(
                        "Failed to load dive data. Please check the server connection.\n\n{}",
                        msg
                    ));
                }
            }
        }

        // Check for a completed detail fetch
        if let Some(result) = self.detail_channel.try_recv() {
            match result {
                DiveDetailResult::Success(dive) => {
                    self.state.status_message = format!("Dive #{}", dive.dive_number);
                    self.state.viz.open_detail(*dive);
                }
                DiveDetailResult::Error(msg) => {
                    log::error!("Dive detail load failed: {}", msg);
                    self.state.viz.error =
                        Some(format!("Failed to load dive details.\n\n{}", msg));
                }
            }
        }

        // Check for a completed stats fetch; failure degrades silently
        // and the counters stay at zero.
        if let Some(result) = self.stats_channel.try_recv() {
            match result {
                StatsResult::Success(stats) => self.state.counters.start(stats, now),
                StatsResult::Error(msg) => log::warn!("Stats load failed: {}", msg),
            }
        }

        // Detail fetch requested by a marker or list click
        if let Some(dive_id) = self.state.viz.pending_detail.take() {
            if !self.detail_channel.is_loading() {
                self.state.status_message = self
                    .state
                    .dive_store
                    .get_by_id(dive_id)
                    .map(|d| format!("Loading dive #{}...", d.dive_number))
                    .unwrap_or_else(|| "Loading dive details...".to_string());
                self.detail_channel
                    .fetch(ctx.clone(), self.client.clone(), dive_id);
            }
        }

        if self.state.reload_requested {
            self.state.reload_requested = false;
            self.start_reload(ctx);
        }

        // Advance the reveal animation and schedule the next repaint
        self.state.reveal_frame = self.reveal.tick(now, self.state.dive_store.as_slice());
        if self.state.reveal_frame.active {
            if let Some(delay) = self.reveal.next_deadline(now) {
                ctx.request_repaint_after(delay);
            }
        }
        if self.state.counters.is_animating(now) {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }

        // Render UI panels in the correct order for egui layout
        // Side and top panels must be rendered before CentralPanel
        ui::render_top_bar(ctx, &mut self.state, now);
        ui::render_side_panel(ctx, &mut self.state);
        ui::render_map_canvas(ctx, &mut self.state);
        ui::render_detail_modal(ctx, &mut self.state);
        ui::render_error_modal(ctx, &mut self.state);
    }
}
