//! Menu page wiring: background scene, title, buttons and page chrome.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlAnchorElement, HtmlElement, Window};

use super::canvas::CanvasRenderer;
use super::platform::{BrowserVibration, LocalStorageSettings, ScriptTagLoader};
use crate::core::{console, MenuError};
use crate::domain::{SceneConfig, Viewport};
use crate::simulation::haptics::{HapticFeedback, Pattern};
use crate::simulation::title::{explode_title, TITLE_TEXT};
use crate::simulation::MenuScene;

pub const PHYSICS_CONTAINER_ID: &str = "physics-container";
pub const MENU_CONTAINER_ID: &str = "menu-container";
pub const TITLE_ID: &str = "title";
pub const SERVICE_WORKER_PATH: &str = "/service-worker.js";

/// Lets the click vibration start before the page unloads
pub const NAVIGATE_DELAY_MS: i32 = 100;

const MENU_BUTTONS: &str = "#menu-container a, #menu-container button";

const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub type BrowserHaptics = HapticFeedback<BrowserVibration, LocalStorageSettings, ScriptTagLoader>;

struct Background {
    scene: MenuScene,
    renderer: CanvasRenderer,
}

/// Case-insensitive check for the usual phone and tablet user agents.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|marker| ua.contains(marker))
}

/// Where a click on a menu control should navigate once the vibration
/// had time to start. Only anchors with a non-empty href navigate;
/// everything else keeps its default action.
pub fn navigation_target(anchor_href: Option<String>) -> Option<String> {
    anchor_href.filter(|href| !href.is_empty())
}

/// Start the menu page. Call once the page has loaded.
#[wasm_bindgen(js_name = startMenu)]
pub fn start_menu() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(MenuError::Dom("no window".to_string()))?;
    let document = window
        .document()
        .ok_or(MenuError::Dom("no document".to_string()))?;

    let Some(container) = document.get_element_by_id(PHYSICS_CONTAINER_ID) else {
        let err = MenuError::ContainerMissing(PHYSICS_CONTAINER_ID);
        if let Some(menu) = document.get_element_by_id(MENU_CONTAINER_ID) {
            menu.set_inner_html(&format!("<h1 style=\"color:red\">{err}</h1>"));
        }
        console::error(&err.to_string());
        return Err(err.into());
    };

    let viewport = window_viewport(&window);
    let renderer = CanvasRenderer::attach(&document, &container, viewport)?;
    let mut scene = MenuScene::new(viewport, SceneConfig::default());
    scene.start(now_ms(&window));

    let background = Rc::new(RefCell::new(Background { scene, renderer }));
    let haptics = Rc::new(HapticFeedback::new(
        BrowserVibration::new(),
        LocalStorageSettings::new(),
        ScriptTagLoader::for_page(&window),
    ));

    wire_menu_buttons(&window, &document, &haptics)?;
    explode_title_into(&document)?;
    listen_for_resize(&window, &background)?;
    start_frame_loop(&window, background, haptics);
    register_service_worker(&window);

    if is_mobile(&window) && !is_standalone(&window) {
        lock_scrolling(&document)?;
    }

    console::info("Menu started");
    Ok(())
}

fn window_viewport(window: &Window) -> Viewport {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

fn wire_menu_buttons(
    window: &Window,
    document: &Document,
    haptics: &Rc<BrowserHaptics>,
) -> Result<(), MenuError> {
    let buttons = document.query_selector_all(MENU_BUTTONS)?;
    for i in 0..buttons.length() {
        let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        let win = window.clone();
        let haptics = haptics.clone();
        let href = navigation_target(button.dyn_ref::<HtmlAnchorElement>().map(|a| a.href()));
        let onclick = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            haptics.ensure_available(now_ms(&win), |h: &BrowserHaptics| {
                h.vibrate_pattern(Pattern::Menu);
            });

            if let Some(href) = href.clone() {
                event.prevent_default();
                let location = win.location();
                let navigate = Closure::once_into_js(move || {
                    if let Err(e) = location.set_href(&href) {
                        console::error(&format!("Navigation failed: {e:?}"));
                    }
                });
                let scheduled = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    navigate.unchecked_ref(),
                    NAVIGATE_DELAY_MS,
                );
                if scheduled.is_err() {
                    console::error("Could not schedule navigation");
                }
            }
        });
        button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}

fn explode_title_into(document: &Document) -> Result<(), MenuError> {
    let Some(title) = document.get_element_by_id(TITLE_ID) else {
        console::debug("No title element, skipping letter animation");
        return Ok(());
    };
    for letter in explode_title(TITLE_TEXT) {
        let span = document
            .create_element("span")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MenuError::Dom("created element is not a <span>".to_string()))?;
        span.set_text_content(Some(&letter.text));
        span.style()
            .set_property("animation-delay", &letter.css_delay())?;
        title.append_child(&span)?;
    }
    Ok(())
}

fn listen_for_resize(window: &Window, background: &Rc<RefCell<Background>>) -> Result<(), MenuError> {
    let win = window.clone();
    let background = background.clone();
    let onresize = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let viewport = window_viewport(&win);
        let mut bg = background.borrow_mut();
        bg.scene.resize(viewport);
        bg.renderer.resize(viewport);
    });
    window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
    onresize.forget();
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop(
    window: &Window,
    background: Rc<RefCell<Background>>,
    haptics: Rc<BrowserHaptics>,
) {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let win = window.clone();
    *g.borrow_mut() = Some(Closure::new(move |now: f64| {
        {
            let mut bg = background.borrow_mut();
            bg.scene.frame(now);
            let sprites = bg.scene.sprites();
            if let Err(e) = bg.renderer.draw(&sprites) {
                console::error(&format!("Draw failed: {e}"));
            }
        }
        haptics.fire_due(now);

        if let Some(cb) = f.borrow().as_ref() {
            request_frame(&win, cb);
        };
    }));
    if let Some(cb) = g.borrow().as_ref() {
        request_frame(window, cb);
    };
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut(f64)>) {
    if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        console::error(&format!("requestAnimationFrame failed, animation stopped: {e:?}"));
    }
}

fn register_service_worker(window: &Window) {
    let navigator = window.navigator();
    let supported =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        return;
    }
    let on_error = Closure::<dyn FnMut(JsValue)>::new(|err: JsValue| {
        console::error(&format!("SW error {err:?}"));
    });
    // Rejections land in `on_error`; the chained promise itself is not needed
    let _chained = navigator
        .service_worker()
        .register(SERVICE_WORKER_PATH)
        .catch(&on_error);
    on_error.forget();
}

fn is_mobile(window: &Window) -> bool {
    window
        .navigator()
        .user_agent()
        .is_ok_and(|ua| is_mobile_user_agent(&ua))
}

/// Installed to the home screen (iOS flag or display-mode media query).
fn is_standalone(window: &Window) -> bool {
    let ios = js_sys::Reflect::get(window.navigator().as_ref(), &JsValue::from_str("standalone"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    ios || matches!(
        window.match_media("(display-mode: standalone)"),
        Ok(Some(query)) if query.matches()
    )
}

fn lock_scrolling(document: &Document) -> Result<(), MenuError> {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        root.style().set_property("overflow", "hidden")?;
    }
    if let Some(body) = document.body() {
        let style = body.style();
        style.set_property("overflow", "hidden")?;
        style.set_property("touch-action", "none")?;
    }
    Ok(())
}
