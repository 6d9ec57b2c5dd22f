#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use glow_flow_menu::api::wasm::MenuBackground;
use glow_flow_menu::api::web::is_mobile_user_agent;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn background_spawns_and_serializes_sprites() {
    let mut bg = MenuBackground::new(800.0, 600.0);
    assert!(bg.spawn(Some(400.0)));
    bg.frame(0.0);
    assert_eq!(bg.piece_count(), 1);

    let json = bg.sprites_json().unwrap();
    assert!(json.contains("\"fill\""));
    assert!(json.contains("\"lineWidth\":3.0"));
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    assert!(MenuBackground::with_config(800.0, 600.0, "not json").is_err());
}

#[wasm_bindgen_test]
fn headless_browser_is_not_mobile() {
    let ua = web_sys::window().unwrap().navigator().user_agent().unwrap();
    assert!(!is_mobile_user_agent(&ua));
}
