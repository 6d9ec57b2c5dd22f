//! Browser implementations of the haptics collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement, Navigator, Storage, Window};

use crate::core::console;
use crate::simulation::haptics::helper_path::{base_path, helper_script_path};
use crate::simulation::haptics::{HelperLoader, SettingsStore, Vibration, VibrationPlatform};

/// Global the helper script defines once it has run
const HELPER_GLOBAL: &str = "VibrationManager";

fn has_property(target: &JsValue, key: &str) -> bool {
    target
        .dyn_ref::<js_sys::Object>()
        .is_some_and(|obj| js_sys::Reflect::has(obj, &JsValue::from_str(key)).unwrap_or(false))
}

/// `navigator.vibrate`
pub struct BrowserVibration {
    navigator: Option<Navigator>,
}

impl BrowserVibration {
    pub fn new() -> Self {
        Self {
            navigator: web_sys::window().map(|w| w.navigator()),
        }
    }
}

impl Default for BrowserVibration {
    fn default() -> Self {
        Self::new()
    }
}

impl VibrationPlatform for BrowserVibration {
    fn is_supported(&self) -> bool {
        self.navigator
            .as_ref()
            .is_some_and(|nav| has_property(nav.as_ref(), "vibrate"))
    }

    fn vibrate(&self, vibration: &Vibration) -> Result<(), String> {
        let nav = self.navigator.as_ref().ok_or("no navigator")?;
        let accepted = match vibration {
            Vibration::Pulse(ms) => nav.vibrate_with_duration(*ms),
            Vibration::Sequence(seq) => {
                let pattern: js_sys::Array = seq.iter().map(|&ms| JsValue::from(ms)).collect();
                nav.vibrate_with_pattern(&pattern)
            }
        };
        if accepted {
            Ok(())
        } else {
            Err("vibration request rejected".to_string())
        }
    }
}

/// `localStorage`; behaves as empty when storage is blocked.
pub struct LocalStorageSettings {
    storage: Option<Storage>,
}

impl LocalStorageSettings {
    pub fn new() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl Default for LocalStorageSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for LocalStorageSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }
}

type Outcome = Rc<RefCell<Option<Result<(), String>>>>;

/// Loads the helper through a `<script>` tag appended to `<head>`.
pub struct ScriptTagLoader {
    document: Option<Document>,
    src: String,
    outcome: Outcome,
}

impl ScriptTagLoader {
    /// Resolve the helper path for the page currently shown in `window`.
    pub fn for_page(window: &Window) -> Self {
        let document = window.document();
        let page_path = window.location().pathname().unwrap_or_default();
        let srcs: Vec<String> = document
            .as_ref()
            .map(|doc| {
                let scripts = doc.scripts();
                (0..scripts.length())
                    .filter_map(|i| scripts.item(i))
                    .filter_map(|el| el.dyn_into::<HtmlScriptElement>().ok())
                    .map(|s| s.src())
                    .collect()
            })
            .unwrap_or_default();
        let base = base_path(srcs.iter().map(String::as_str), &page_path);

        Self {
            document,
            src: helper_script_path(&base),
            outcome: Rc::new(RefCell::new(None)),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }
}

impl HelperLoader for ScriptTagLoader {
    fn is_loaded(&self) -> bool {
        has_property(&js_sys::global(), HELPER_GLOBAL)
    }

    fn load_in_flight(&self) -> bool {
        let Some(doc) = self.document.as_ref() else {
            return false;
        };
        let selector = format!("script[src=\"{}\"]", self.src);
        matches!(doc.query_selector(&selector), Ok(Some(_)))
    }

    fn begin_load(&mut self) -> Result<(), String> {
        let doc = self.document.as_ref().ok_or("no document")?;
        let head = doc.head().ok_or("no <head>")?;
        let script = doc
            .create_element("script")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| "created element is not a <script>".to_string())?;
        script.set_src(&self.src);

        let ok_slot = self.outcome.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            *ok_slot.borrow_mut() = Some(Ok(()));
        });
        let err_slot = self.outcome.clone();
        let src = self.src.clone();
        let onerror = Closure::<dyn FnMut()>::new(move || {
            *err_slot.borrow_mut() = Some(Err(src.clone()));
        });
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();

        head.append_child(&script).map_err(|e| format!("{e:?}"))?;
        console::debug(&format!("Loading vibration helper from {}", self.src));
        Ok(())
    }

    fn take_outcome(&mut self) -> Option<Result<(), String>> {
        self.outcome.borrow_mut().take()
    }
}
