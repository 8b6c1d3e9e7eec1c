//! wasm-bindgen surface for the host page

use wasm_bindgen::prelude::*;

use crate::highscores::LocalStorageStore;
use crate::settings::Settings;
use crate::sim::GameSession;

/// A game session driven from JavaScript.
///
/// The page forwards raw events and calls `frame` from `requestAnimationFrame`,
/// then draws from `snapshot_json`.
#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WebGame {
    /// Build a session sized to the viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width_px: u32, height_px: u32) -> Result<WebGame, JsError> {
        let seed = js_sys::Date::now() as u64;
        let settings = Settings::from_viewport(width_px, height_px).with_seed(seed);
        let session = GameSession::new(settings, Box::new(LocalStorageStore))?;
        Ok(Self { session })
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    pub fn frame(&mut self, timestamp_ms: f64) {
        self.session.frame(timestamp_ms);
    }

    /// Returns true if the page should `preventDefault` the event
    pub fn key_down(&mut self, key: &str) -> bool {
        self.session.input_mut().key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.session.input_mut().key_up(key)
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.session.input_mut().touch_start(x, y);
    }

    pub fn touch_move(&mut self, x: f32, y: f32) {
        self.session.input_mut().touch_move(x, y);
    }

    pub fn touch_end(&mut self) {
        self.session.input_mut().touch_end();
    }

    /// Virtual bullet-time button
    pub fn set_hold(&mut self, active: bool) {
        self.session.set_hold(active);
    }

    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.session.snapshot())?)
    }

    /// Events since the last call, as a JSON array
    pub fn drain_events_json(&mut self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.session.drain_events())?)
    }
}
