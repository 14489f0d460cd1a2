//! GameView: maps a [`GameSnapshot`] plus session overlays into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::engine::{Completion, Overlay};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::leaderboard::LeaderboardEntry;
use crate::types::{format_time, LEADERBOARD_CAPACITY, MAX_DISKS, TOWER_COUNT};

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

/// Everything outside the board that the host tracks for display.
#[derive(Debug, Clone, Copy)]
pub struct HudView<'a> {
    pub timer_label: &'a str,
    pub overlay: Overlay,
    /// `Some` while the leaderboard panel is open
    pub leaderboard: Option<&'a [LeaderboardEntry]>,
    /// Text typed so far at the name prompt
    pub name_input: &'a str,
}

impl<'a> HudView<'a> {
    pub fn new(timer_label: &'a str) -> Self {
        Self {
            timer_label,
            overlay: Overlay::None,
            leaderboard: None,
            name_input: "",
        }
    }
}

const TOWER_W: u16 = 2 * MAX_DISKS as u16 + 3;
const TOWER_GAP: u16 = 2;
const BOARD_W: u16 = TOWER_COUNT as u16 * TOWER_W + (TOWER_COUNT as u16 - 1) * TOWER_GAP;
/// Pole rows: one above the tallest possible stack
const POLE_H: u16 = MAX_DISKS as u16 + 1;
const FRAME_W: u16 = BOARD_W + 4;
/// Tall enough for a full leaderboard: border, title, header, entries, border
const FRAME_H: u16 = LEADERBOARD_CAPACITY as u16 + 4;
/// Title, gap, frame, gap, status, help
const LAYOUT_H: u16 = FRAME_H + 5;

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const MUTED: CellStyle = CellStyle::fg(Rgb::new(130, 130, 140));
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const POLE: CellStyle = CellStyle::fg(Rgb::new(150, 110, 70));
const ACCENT: CellStyle = CellStyle::fg(Rgb::new(255, 215, 90)).bold();

/// A lightweight terminal renderer for the puzzle.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Smallest viewport that fits the full layout.
    pub fn min_viewport() -> Viewport {
        Viewport::new(FRAME_W, LAYOUT_H)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::blank(CellStyle::default().on(BACKGROUND)));

        let min = Self::min_viewport();
        if viewport.width < min.width || viewport.height < min.height {
            let msg = format!("Terminal too small: need {}x{}", min.width, min.height);
            fb.put_str(0, 0, &msg, TEXT);
            return;
        }

        let x0 = (viewport.width - FRAME_W) / 2;
        let y0 = match self.anchor_y {
            AnchorY::Center => (viewport.height - LAYOUT_H) / 2,
            AnchorY::Top => 0,
        };

        fb.put_str_centered(x0, FRAME_W, y0, "TOWERS OF HANOI", ACCENT);

        let frame_y = y0 + 2;
        fb.draw_box(x0, frame_y, FRAME_W, FRAME_H, BORDER);

        match hud.leaderboard {
            Some(entries) => self.draw_leaderboard(fb, x0, frame_y, entries),
            None => {
                for tower in 0..TOWER_COUNT {
                    self.draw_tower(fb, snap, tower, x0, frame_y);
                }
            }
        }

        self.draw_status(fb, snap, hud, x0, frame_y + FRAME_H + 1);

        match hud.overlay {
            Overlay::None => {}
            Overlay::Victory(c) => self.draw_victory(fb, snap, c, x0, frame_y),
            Overlay::ScoreEntry(c) => self.draw_score_entry(fb, c, hud.name_input, x0, frame_y),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_tower(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, tower: usize, x0: u16, frame_y: u16) {
        let left = x0 + 2 + tower as u16 * (TOWER_W + TOWER_GAP);
        let center = left + TOWER_W / 2;
        // Base sits above the label row and bottom border.
        let base_y = frame_y + FRAME_H - 3;
        let top = base_y - POLE_H;

        for y in top..base_y {
            fb.put_char(center, y, '│', POLE);
        }
        for x in left..left + TOWER_W {
            fb.put_char(x, base_y, '▀', POLE);
        }

        let disks = &snap.towers[tower];
        for (level, &size) in disks.iter().enumerate() {
            let y = base_y - 1 - level as u16;
            let half = size as u16;
            let is_top = level + 1 == disks.len();
            let selected = is_top && snap.selected == Some(size);
            let style = if selected {
                CellStyle::fg(disk_color(size)).bold().reverse()
            } else {
                CellStyle::fg(disk_color(size))
            };
            let ch = if selected { '▓' } else { '█' };
            fb.fill_rect(center - half, y, 2 * half + 1, 1, ch, style);
        }

        let holds_selection = snap
            .selected
            .is_some_and(|size| disks.last() == Some(&size));
        let label = format!("[{}]", tower + 1);
        let style = if holds_selection { ACCENT } else { MUTED };
        fb.put_str_centered(left, TOWER_W, base_y + 1, &label, style);
    }

    fn draw_leaderboard(&self, fb: &mut FrameBuffer, x0: u16, frame_y: u16, entries: &[LeaderboardEntry]) {
        let inner_x = x0 + 2;
        let inner_w = FRAME_W - 4;
        let mut y = frame_y + 1;
        let title = format!("LEADERBOARD ({} disks)", MAX_DISKS);
        fb.put_str_centered(inner_x, inner_w, y, &title, ACCENT);
        y += 1;

        if entries.is_empty() {
            fb.put_str_centered(inner_x, inner_w, y + 1, "No scores yet", MUTED);
            return;
        }

        fb.put_str(inner_x, y, " #  NAME                  TIME   MOVES  DATE", MUTED);
        y += 1;
        let last_row = frame_y + FRAME_H - 1;
        for (rank, entry) in entries.iter().enumerate() {
            if y >= last_row {
                break;
            }
            let line = format!(
                "{:>2}. {:<20} {:>6} {:>6}  {}",
                rank + 1,
                truncate(&entry.name, 20),
                format_time(entry.time_ms),
                entry.moves,
                entry.date.format("%Y-%m-%d"),
            );
            fb.put_str(inner_x, y, &line, TEXT);
            y += 1;
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &HudView<'_>, x0: u16, y: u16) {
        let status = format!(
            "Moves {}/{}   Time {}   Disks {}",
            snap.num_moves, snap.target_moves, hud.timer_label, snap.num_disks
        );
        fb.put_str_centered(x0, FRAME_W, y, &status, TEXT);

        let help = if snap.can_undo {
            "1-3 select  u undo  r reset  +/- disks  l scores  q quit"
        } else {
            "1-3 select  r reset  +/- disks  l scores  q quit"
        };
        fb.put_str_centered(x0, FRAME_W, y + 1, help, MUTED);
    }

    fn draw_victory(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, c: Completion, x0: u16, frame_y: u16) {
        let (bx, by, bw) = self.dialog(fb, x0, frame_y);
        let headline = if c.is_max_level() {
            "MAX LEVEL COMPLETE!"
        } else {
            "SOLVED!"
        };
        fb.put_str_centered(bx, bw, by + 1, headline, ACCENT);
        let summary = format!(
            "Time {}   Moves {} (best {})",
            format_time(c.time_ms),
            c.moves,
            snap.target_moves
        );
        fb.put_str_centered(bx, bw, by + 2, &summary, TEXT);
        let prompt = if c.num_disks < MAX_DISKS {
            "[N] next level   [Enter] replay"
        } else {
            "[Enter] replay"
        };
        fb.put_str_centered(bx, bw, by + 4, prompt, MUTED);
    }

    fn draw_score_entry(&self, fb: &mut FrameBuffer, c: Completion, name: &str, x0: u16, frame_y: u16) {
        let (bx, by, bw) = self.dialog(fb, x0, frame_y);
        fb.put_str_centered(bx, bw, by + 1, "NEW HIGH SCORE!", ACCENT);
        let summary = format!("Time {}   Moves {}", format_time(c.time_ms), c.moves);
        fb.put_str_centered(bx, bw, by + 2, &summary, TEXT);
        let field = format!("Name: {}_", name);
        fb.put_str(bx + 3, by + 3, &field, TEXT.bold());
        fb.put_str_centered(bx, bw, by + 4, "[Enter] save   [Esc] skip", MUTED);
    }

    /// Clear and outline the dialog area; returns its left, top and width.
    fn dialog(&self, fb: &mut FrameBuffer, x0: u16, frame_y: u16) -> (u16, u16, u16) {
        const W: u16 = 40;
        const H: u16 = 6;
        let bx = x0 + (FRAME_W - W) / 2;
        let by = frame_y + (FRAME_H - H) / 2;
        fb.fill_rect(bx, by, W, H, ' ', CellStyle::default().on(BACKGROUND));
        fb.draw_box(bx, by, W, H, ACCENT);
        (bx, by, W)
    }
}

fn disk_color(size: u8) -> Rgb {
    match size {
        1 => Rgb::new(220, 80, 80),
        2 => Rgb::new(255, 165, 0),
        3 => Rgb::new(240, 220, 80),
        4 => Rgb::new(100, 220, 120),
        5 => Rgb::new(80, 220, 220),
        6 => Rgb::new(80, 120, 220),
        _ => Rgb::new(200, 120, 220),
    }
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
