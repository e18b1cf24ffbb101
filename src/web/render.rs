// Canvas drawing and the DOM score/button text.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::game::{Cell, GameState, Phase};

const BACKGROUND: &str = "#222";
const HEAD: &str = "#4CAF50";
const BODY: &str = "#8BC34A";
const FOOD: &str = "#FF5722";
const SHADE: &str = "rgba(0, 0, 0, 0.75)";

pub struct View {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    cell_px: f64,
    score: Element,
    high_score: Element,
    start_button: Element,
}

impl View {
    pub fn new(
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        cell_px: u32,
        score: Element,
        high_score: Element,
        start_button: Element,
    ) -> Self {
        Self {
            canvas,
            ctx,
            cell_px: cell_px as f64,
            score,
            high_score,
            start_button,
        }
    }

    /// Full frame for `state`, plus the end-of-game banner when it is over.
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        self.draw_board(state)?;
        if state.phase() == Phase::GameOver {
            let cleared = state.snake().len() == state.grid().area();
            self.draw_banner(if cleared { "You Win!" } else { "Game Over!" }, state.score())?;
        }
        Ok(())
    }

    fn draw_board(&self, state: &GameState) -> Result<(), JsValue> {
        let (w, h) = self.size();
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_stroke_style_str(BACKGROUND);
        for (i, seg) in state.snake().iter().enumerate() {
            self.ctx.set_fill_style_str(if i == 0 { HEAD } else { BODY });
            let (x, y) = self.origin(*seg);
            self.ctx.fill_rect(x, y, self.cell_px, self.cell_px);
            // border keeps neighbouring segments distinct
            self.ctx.stroke_rect(x, y, self.cell_px, self.cell_px);
        }

        let (fx, fy) = self.origin(state.food());
        let r = self.cell_px / 2.0;
        self.ctx.set_fill_style_str(FOOD);
        self.ctx.begin_path();
        self.ctx.arc(fx + r, fy + r, r, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn draw_banner(&self, title: &str, score: u32) -> Result<(), JsValue> {
        let (w, h) = self.size();
        self.ctx.set_fill_style_str(SHADE);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str("white");
        self.ctx.set_text_align("center");
        self.ctx.set_font("30px Arial");
        self.ctx.fill_text(title, w / 2.0, h / 2.0 - 15.0)?;
        self.ctx.set_font("20px Arial");
        self.ctx.fill_text(&format!("Score: {score}"), w / 2.0, h / 2.0 + 20.0)?;
        Ok(())
    }

    /// Score, best score and the start button label.
    pub fn update_hud(&self, score: u32, high_score: u32, phase: Option<Phase>) {
        self.score.set_text_content(Some(&score.to_string()));
        self.high_score.set_text_content(Some(&high_score.to_string()));
        self.start_button.set_text_content(Some(button_label(phase)));
    }

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn origin(&self, cell: Cell) -> (f64, f64) {
        (cell.x as f64 * self.cell_px, cell.y as f64 * self.cell_px)
    }
}

pub fn button_label(phase: Option<Phase>) -> &'static str {
    match phase {
        Some(Phase::Running) => "Pause Game",
        Some(Phase::Paused) => "Resume Game",
        _ => "Start Game",
    }
}
