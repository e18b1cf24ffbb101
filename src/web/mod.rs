//! Browser adapter.
//!
//! Mounts the game on `#game-canvas` (created when the page has none), wires
//! arrow keys and the start/reset buttons, and drives ticks from
//! `setInterval`. The session lives in a thread-local so event closures and
//! the timer callback can reach it; every callback is a short, complete borrow.
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, window};

use crate::config::GameConfig;
use crate::input::Command;
use crate::session::Session;
use crate::storage::{HighScoreStore, LocalStorageStore, MemoryStore};

mod render;
mod timer;

pub use render::{View, button_label};
pub use timer::IntervalTimer;

const CANVAS_ID: &str = "game-canvas";
const DEFAULT_CANVAS_PX: u32 = 400;

type BrowserSession = Session<Box<dyn HighScoreStore>, IntervalTimer>;

struct App {
    session: BrowserSession,
    view: View,
}

impl App {
    fn refresh(&self) {
        if let Some(state) = self.session.state() {
            if let Err(err) = self.view.render(state) {
                warn!("render failed: {err:?}");
            }
        }
        let score = self.session.state().map_or(0, |s| s.score());
        self.view
            .update_hud(score, self.session.high_score(), self.session.phase());
    }
}

thread_local! {
    static APP: std::cell::RefCell<Option<App>> = const { std::cell::RefCell::new(None) };
}

#[wasm_bindgen]
pub fn mount_game() -> Result<(), JsValue> {
    if APP.with(|app| app.borrow().is_some()) {
        warn!("snake is already mounted");
        return Ok(());
    }

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = mount_canvas(&doc)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    let config = read_config(&canvas).fit_canvas(canvas.width(), canvas.height());

    let store: Box<dyn HighScoreStore> = match LocalStorageStore::open() {
        Some(store) => Box::new(store),
        None => {
            warn!("localStorage unavailable; high score will not persist");
            Box::new(MemoryStore::default())
        }
    };
    let timer = IntervalTimer::new(win.clone(), on_tick);
    let mut session = Session::new(config, store, timer);
    session.initialize()?;
    info!(
        "snake mounted on a {}x{} grid",
        config.grid_width, config.grid_height
    );

    let start_button = hud_element(&doc, "start-btn", "button", "")?;
    let view = View::new(
        canvas,
        ctx,
        config.cell_px,
        hud_element(&doc, "score", "div", "Score")?,
        hud_element(&doc, "high-score", "div", "High Score")?,
        start_button.clone(),
    );
    let reset_button = hud_element(&doc, "reset-btn", "button", "")?;
    reset_button.set_text_content(Some("Reset"));

    let app = App { session, view };
    app.refresh();
    APP.with(|cell| cell.replace(Some(app)));

    // Keyboard: arrows/WASD turn, space toggles, r resets
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let Some(cmd) = Command::from_key(&evt.key()) else {
                return;
            };
            // keep arrows and space from scrolling the page
            evt.prevent_default();
            dispatch(cmd);
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    for (el, cmd) in [
        (start_button, Command::Toggle),
        (reset_button, Command::Reset),
    ] {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch(cmd);
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn dispatch(cmd: Command) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            app.session.handle(cmd);
            app.refresh();
        }
    });
}

fn on_tick() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            match app.session.tick() {
                Ok(report) if report.new_high_score => {
                    info!("new high score {}", app.session.high_score());
                }
                Ok(_) => {}
                Err(err) => warn!("tick skipped: {err}"),
            }
            app.refresh();
        }
    });
}

fn mount_canvas(doc: &Document) -> Result<HtmlCanvasElement, JsValue> {
    if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        return Ok(el.dyn_into()?);
    }
    let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    c.set_id(CANVAS_ID);
    c.set_width(DEFAULT_CANVAS_PX);
    c.set_height(DEFAULT_CANVAS_PX);
    c.set_attribute("style", "display:block; margin:24px auto; border:2px solid #444; background:#222;")
        .ok();
    body(doc)?.append_child(&c)?;
    Ok(c)
}

/// Existing element by id, or a new one appended to `<body>`.
fn hud_element(doc: &Document, id: &str, tag: &str, label: &str) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let row = doc.create_element("div")?;
    row.set_attribute("style", "text-align:center; font-family:Arial, sans-serif; color:#ddd; margin:4px;")
        .ok();
    if !label.is_empty() {
        row.set_text_content(Some(&format!("{label}: ")));
    }
    let el = doc.create_element(tag)?;
    el.set_id(id);
    row.append_child(&el)?;
    body(doc)?.append_child(&row)?;
    Ok(el)
}

fn body(doc: &Document) -> Result<web_sys::HtmlElement, JsValue> {
    doc.body().ok_or_else(|| JsValue::from_str("no body"))
}

#[cfg(feature = "serde_json")]
fn read_config(canvas: &HtmlCanvasElement) -> GameConfig {
    match canvas.get_attribute("data-config") {
        Some(raw) => GameConfig::from_json(&raw).unwrap_or_else(|err| {
            warn!("ignoring data-config: {err}");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    }
}

#[cfg(not(feature = "serde_json"))]
fn read_config(_canvas: &HtmlCanvasElement) -> GameConfig {
    GameConfig::default()
}
