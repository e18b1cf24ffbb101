// Browser-only tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use snake_web::storage::{HIGH_SCORE_KEY, HighScore, HighScoreStore, LocalStorageStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear(key: &str) {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    const KEY: &str = "snakeHighScoreTest";
    clear(KEY);
    let mut store = LocalStorageStore::open_with_key(KEY).unwrap();
    assert_eq!(store.load(), 0);
    store.save(120);
    assert_eq!(LocalStorageStore::open_with_key(KEY).unwrap().load(), 120);
    clear(KEY);
}

#[wasm_bindgen_test]
fn high_score_uses_the_shared_key() {
    clear(HIGH_SCORE_KEY);
    let mut hs = HighScore::load(LocalStorageStore::open().unwrap());
    assert!(hs.observe(30));
    assert!(!hs.observe(20));
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    assert_eq!(storage.get_item(HIGH_SCORE_KEY).unwrap().as_deref(), Some("30"));
    clear(HIGH_SCORE_KEY);
}

#[wasm_bindgen_test]
fn mounts_on_a_bare_page() {
    snake_web::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("game-canvas").is_some());
    let button = doc.get_element_by_id("start-btn").unwrap();
    assert_eq!(button.text_content().as_deref(), Some("Start Game"));
    // a second call is a no-op
    snake_web::start_game().unwrap();
}
