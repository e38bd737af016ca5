//! GameView: maps a `core::SessionState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, Tier, MAX_PUSH};

const MAX_CELL_W: u16 = 4;

const FLOOR_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal renderer for a warehouse session.
pub struct GameView {
    /// Board cell width in terminal columns, 1..=4. The glyph goes in the first column.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render `state` into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &SessionState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let n = state.board().size() as u16;
        let (w, h) = (n * self.cell_w + 2, n + 2);
        // The extra row below the frame carries the door label.
        let frame = Frame {
            x: viewport.width.saturating_sub(w + PANEL_W) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h + 1) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        let floor = CellStyle::plain(Rgb::new(90, 90, 100), FLOOR_BG);
        fb.fill_rect(frame.x + 1, frame.y + 1, n * self.cell_w, n, ' ', floor);
        fb.draw_box(
            frame.x,
            frame.y,
            frame.w,
            frame.h,
            CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG),
        );
        self.draw_door(fb, frame, state.operator().door_col as u16);

        let op = state.operator();
        for (row, cells) in state.board().rows().enumerate() {
            for (col, &tier) in cells.iter().enumerate() {
                let is_target = (row as i8, col as i8) == op.target();
                self.draw_tile(fb, frame, col as u16, row as u16, tier, is_target);
            }
        }
        self.draw_operator(fb, frame, op.col as u16, op.row as u16, op.direction);

        self.draw_side_panel(fb, state, viewport, frame);

        if !state.is_playing() {
            self.draw_overlay_text(fb, frame, "SOLVED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &SessionState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, frame: Frame, col: u16, row: u16) -> (u16, u16) {
        (frame.x + 1 + col * self.cell_w, frame.y + 1 + row)
    }

    /// Put `glyph` in the first column of a board cell and blank the rest.
    fn put_glyph(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        col: u16,
        row: u16,
        glyph: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(frame, col, row);
        fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
        fb.put_char(px, py, glyph, style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        col: u16,
        row: u16,
        tier: Tier,
        is_target: bool,
    ) {
        if tier == 0 {
            let style = CellStyle::plain(Rgb::new(90, 90, 100), FLOOR_BG).dim();
            self.put_glyph(fb, frame, col, row, '·', style);
            return;
        }

        let style = if is_target {
            CellStyle::plain(Rgb::new(20, 20, 20), Rgb::new(240, 200, 60)).bold()
        } else {
            CellStyle::plain(Rgb::new(235, 235, 235), tier_color(tier))
        };
        let glyph = char::from_digit(tier as u32, 10).unwrap_or('?');
        self.put_glyph(fb, frame, col, row, glyph, style);
    }

    fn draw_operator(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        col: u16,
        row: u16,
        facing: Direction,
    ) {
        let style = CellStyle::plain(Rgb::new(120, 230, 140), FLOOR_BG).bold();
        self.put_glyph(fb, frame, col, row, facing_arrow(facing), style);
    }

    fn draw_door(&self, fb: &mut FrameBuffer, frame: Frame, door_col: u16) {
        let style = CellStyle::plain(Rgb::new(240, 200, 60), PANEL_BG).bold();
        let (px, _) = self.cell_origin(frame, door_col, 0);
        let bottom = frame.y + frame.h - 1;
        fb.fill_rect(px, bottom, self.cell_w, 1, '═', style);
        fb.put_str(px, bottom + 1, "DOOR", style.dim());
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &SessionState,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SEED", label);
        fb.put_str(panel_x, y + 1, state.seed(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, state.score(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "PUSH", label);
        match state.chain_ahead() {
            Some(chain) => {
                let weight: u32 = chain.iter().map(|&t| t as u32).sum();
                fb.put_u32(panel_x, y + 1, weight, value);
                fb.put_char(panel_x + 2, y + 1, '/', value);
                fb.put_u32(panel_x + 3, y + 1, MAX_PUSH, value);
            }
            None => fb.put_str(panel_x, y + 1, "blocked", value),
        }
        y = y.saturating_add(3);

        for line in HELP_LINES {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Width reserved right of the board for the side panel when centering.
const PANEL_W: u16 = 18;

const HELP_LINES: [&str; 5] = [
    "arrows turn/move",
    "space  demolish",
    "r      restart",
    "n      new seed",
    "q      quit",
];

fn tier_color(tier: Tier) -> Rgb {
    match tier {
        1 => Rgb::new(150, 110, 60),
        2 => Rgb::new(120, 80, 40),
        _ => Rgb::new(90, 55, 25),
    }
}

fn facing_arrow(direction: Direction) -> char {
    match direction {
        Direction::North => '▲',
        Direction::East => '▶',
        Direction::South => '▼',
        Direction::West => '◀',
    }
}
