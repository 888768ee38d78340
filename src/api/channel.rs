//! Channel-based fetch pipeline for the backend API.
//!
//! Fetches run off the UI thread but egui's update() is synchronous. Each
//! channel spawns the request and passes its result back through an mpsc
//! pair polled every frame, requesting a repaint on completion.

use std::cell::Cell;
use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::egui;

use super::client::ApiClient;
use super::types::{DiveDetailResult, DiveListResult, StatsResult};

/// Channel for fetching the full dive list.
pub struct DiveListChannel {
    sender: Sender<DiveListResult>,
    receiver: Receiver<DiveListResult>,
    loading: Cell<bool>,
}

impl Default for DiveListChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl DiveListChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            loading: Cell::new(false),
        }
    }

    /// Spawns a dive list fetch.
    pub fn fetch(&self, ctx: egui::Context, client: ApiClient) {
        let sender = self.sender.clone();
        self.loading.set(true);

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = match client.fetch_dives() {
                Ok(dives) => DiveListResult::Success(dives),
                Err(e) => DiveListResult::Error(e),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = match client.fetch_dives().await {
                Ok(dives) => DiveListResult::Success(dives),
                Err(e) => DiveListResult::Error(e),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed fetch.
    pub fn try_recv(&self) -> Option<DiveListResult> {
        let result = self.receiver.try_recv().ok();
        if result.is_some() {
            self.loading.set(false);
        }
        result
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }
}

/// Channel for fetching a single dive's full record.
pub struct DiveDetailChannel {
    sender: Sender<DiveDetailResult>,
    receiver: Receiver<DiveDetailResult>,
    /// Id of the in-flight request, if any.
    pending: Cell<Option<i64>>,
}

impl Default for DiveDetailChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl DiveDetailChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            pending: Cell::new(None),
        }
    }

    /// Spawns a detail fetch for the given dive id.
    pub fn fetch(&self, ctx: egui::Context, client: ApiClient, dive_id: i64) {
        let sender = self.sender.clone();
        self.pending.set(Some(dive_id));

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = match client.fetch_dive(dive_id) {
                Ok(dive) => DiveDetailResult::Success(Box::new(dive)),
                Err(e) => DiveDetailResult::Error(e),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = match client.fetch_dive(dive_id).await {
                Ok(dive) => DiveDetailResult::Success(Box::new(dive)),
                Err(e) => DiveDetailResult::Error(e),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed fetch.
    pub fn try_recv(&self) -> Option<DiveDetailResult> {
        let result = self.receiver.try_recv().ok();
        if result.is_some() {
            self.pending.set(None);
        }
        result
    }

    pub fn is_loading(&self) -> bool {
        self.pending.get().is_some()
    }
}

/// Channel for fetching summary statistics.
pub struct StatsChannel {
    sender: Sender<StatsResult>,
    receiver: Receiver<StatsResult>,
    loading: Cell<bool>,
}

impl Default for StatsChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            loading: Cell::new(false),
        }
    }

    /// Spawns a stats fetch.
    pub fn fetch(&self, ctx: egui::Context, client: ApiClient) {
        let sender = self.sender.clone();
        self.loading.set(true);

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = match client.fetch_stats() {
                Ok(stats) => StatsResult::Success(stats),
                Err(e) => StatsResult::Error(e),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = match client.fetch_stats().await {
                Ok(stats) => StatsResult::Success(stats),
                Err(e) => StatsResult::Error(e),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed fetch.
    pub fn try_recv(&self) -> Option<StatsResult> {
        let result = self.receiver.try_recv().ok();
        if result.is_some() {
            self.loading.set(false);
        }
        result
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }
}
