//! JS-facing classes.

use wasm_bindgen::prelude::*;

use crate::core::{console, MenuError};
use crate::domain::{SceneConfig, Viewport};
use crate::simulation::haptics::{HapticFeedback, Pattern, Vibration};
use crate::simulation::MenuScene;

use super::web::{BrowserHaptics, BrowserVibration, LocalStorageSettings, ScriptTagLoader};

/// Falling-pieces background without any DOM wiring.
///
/// The host calls `frame` from its own animation loop and renders
/// `sprites_json` however it likes.
#[wasm_bindgen]
pub struct MenuBackground {
    scene: MenuScene,
}

#[wasm_bindgen]
impl MenuBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> MenuBackground {
        Self {
            scene: MenuScene::new(Viewport::new(width, height), SceneConfig::default()),
        }
    }

    /// Build with a JSON `SceneConfig`; missing fields keep their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: f32, height: f32, json: &str) -> Result<MenuBackground, JsValue> {
        let config = SceneConfig::from_json(json).map_err(MenuError::Config)?;
        Ok(Self {
            scene: MenuScene::new(Viewport::new(width, height), config),
        })
    }

    pub fn start(&mut self, now_ms: f64) {
        self.scene.start(now_ms);
    }

    pub fn frame(&mut self, now_ms: f64) {
        self.scene.frame(now_ms);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.scene.resize(Viewport::new(width, height));
    }

    /// Spawn one piece now, at `x` or at a random position.
    pub fn spawn(&mut self, x: Option<f32>) -> bool {
        self.scene.spawn(x)
    }

    /// Current outlines as JSON, one entry per piece.
    #[wasm_bindgen(js_name = spritesJson)]
    pub fn sprites_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.scene.sprites())
            .map_err(|e| JsValue::from_str(&format!("sprite serialization failed: {e}")))
    }

    #[wasm_bindgen(getter, js_name = pieceCount)]
    pub fn piece_count(&self) -> usize {
        self.scene.piece_count()
    }

    #[wasm_bindgen(getter, js_name = frameCount)]
    pub fn frame_count(&self) -> u64 {
        self.scene.frame_count()
    }

    pub fn clear(&mut self) {
        self.scene.clear();
    }
}

/// Haptic feedback backed by `navigator.vibrate` and `localStorage`.
#[wasm_bindgen]
pub struct Haptics {
    inner: BrowserHaptics,
}

#[wasm_bindgen]
impl Haptics {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Haptics, JsValue> {
        let window = web_sys::window().ok_or(MenuError::Dom("no window".to_string()))?;
        Ok(Self {
            inner: HapticFeedback::new(
                BrowserVibration::new(),
                LocalStorageSettings::new(),
                ScriptTagLoader::for_page(&window),
            ),
        })
    }

    /// Vibrate a named pattern (`button`, `gameOver`, ...). Unknown names are ignored.
    pub fn vibrate(&self, pattern: &str) -> bool {
        Pattern::from_name(pattern).is_some_and(|p| self.inner.vibrate_pattern(p))
    }

    #[wasm_bindgen(js_name = vibrateMs)]
    pub fn vibrate_ms(&self, ms: u32) -> bool {
        self.inner.vibrate(&Vibration::Pulse(ms))
    }

    #[wasm_bindgen(js_name = vibrateSequence)]
    pub fn vibrate_sequence(&self, sequence: Vec<u32>) -> bool {
        self.inner.vibrate(&Vibration::Sequence(sequence))
    }

    #[wasm_bindgen(getter)]
    pub fn intensity(&self) -> u32 {
        self.inner.intensity()
    }

    /// Call `callback` once the vibration helper is usable or known missing.
    #[wasm_bindgen(js_name = ensureAvailable)]
    pub fn ensure_available(&self, now_ms: f64, callback: js_sys::Function) {
        self.inner.ensure_available(now_ms, move |_: &BrowserHaptics| {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                console::debug(&format!("ensureAvailable callback threw: {e:?}"));
            }
        });
    }

    /// Drive pending helper loads. Call once per animation frame.
    #[wasm_bindgen(js_name = fireDue)]
    pub fn fire_due(&self, now_ms: f64) {
        self.inner.fire_due(now_ms);
    }
}
