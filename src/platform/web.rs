//! Browser bindings
//!
//! JS owns the DOM and the animation-frame loop; it forwards pointer/key
//! events here and redraws from the JSON snapshot returned by `frame`.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use super::Driver;
use crate::sim::Session;
use crate::{MazeLayout, Tuning};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Tilt Maze starting...");
}

/// A maze session driven from JS
#[wasm_bindgen]
pub struct WebMaze {
    driver: Driver,
}

#[wasm_bindgen]
impl WebMaze {
    /// Stock maze, or a layout/tuning pair given as JSON
    #[wasm_bindgen(constructor)]
    pub fn new(layout_json: Option<String>, tuning_json: Option<String>) -> Result<WebMaze, JsValue> {
        let layout = match layout_json {
            Some(json) => MazeLayout::from_json(&json),
            None => Ok(MazeLayout::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json),
            None => Ok(Tuning::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let session = Session::new(layout, tuning).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebMaze {
            driver: Driver::new(session),
        })
    }

    /// Returns true if this press started the session
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.driver.pointer_down(Vec2::new(x, y))
    }

    /// Returns `[dx, dy]` for the joystick head, or an empty array when ignored
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Vec<f32> {
        self.driver
            .pointer_move(Vec2::new(x, y))
            .map(|offset| vec![offset.x, offset.y])
            .unwrap_or_default()
    }

    pub fn key(&mut self, key: &str) -> bool {
        self.driver.key(key)
    }

    pub fn reset(&mut self) {
        self.driver.reset();
    }

    /// Tick for one animation frame; returns the snapshot as JSON
    pub fn frame(&mut self, timestamp: f64) -> Result<String, JsValue> {
        let snapshot = self.driver.frame(timestamp);
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Static wall geometry as JSON, for drawing the board once
    pub fn walls(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.driver.session.walls)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Hazards currently in play as JSON
    pub fn hazards(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.driver.session.hazards)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
