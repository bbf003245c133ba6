//! Crossterm renderer for the 4x4 board.
//!
//! Draws each tile as a colored block (the classic value-to-color ramp)
//! in the alternate screen, with a game-over banner below the board.
//! Render errors are logged, never propagated: presentation failures must
//! not disturb game state.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use slide16_core::{Grid, Render, SIZE};
use tracing::error;

/// Cell width in terminal columns; values up to 6 digits fit.
const CELL_WIDTH: usize = 7;
/// Rows used per board cell (a padding row keeps tiles roughly square).
const CELL_HEIGHT: u16 = 2;
/// Terminal row where the board starts.
const BOARD_TOP: u16 = 2;
/// Terminal row of the game-over banner.
const BANNER_ROW: u16 = BOARD_TOP + SIZE as u16 * CELL_HEIGHT + 1;

/// Raw-mode alternate-screen renderer. Restores the terminal on drop.
pub struct TerminalView {
    out: Stdout,
}

impl TerminalView {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self { out })
    }

    /// Background color for a tile value.
    fn tile_bg(value: u32) -> Color {
        match value {
            0 => Color::Rgb {
                r: 0xcd,
                g: 0xc1,
                b: 0xb4,
            },
            2 => Color::Rgb {
                r: 0xee,
                g: 0xe4,
                b: 0xda,
            },
            4 => Color::Rgb {
                r: 0xed,
                g: 0xe0,
                b: 0xc8,
            },
            8 => Color::Rgb {
                r: 0xf2,
                g: 0xb1,
                b: 0x79,
            },
            16 => Color::Rgb {
                r: 0xf5,
                g: 0x95,
                b: 0x63,
            },
            32 => Color::Rgb {
                r: 0xf6,
                g: 0x7c,
                b: 0x5f,
            },
            64 => Color::Rgb {
                r: 0xf6,
                g: 0x5e,
                b: 0x3b,
            },
            128 => Color::Rgb {
                r: 0xed,
                g: 0xcf,
                b: 0x72,
            },
            256 => Color::Rgb {
                r: 0xed,
                g: 0xcc,
                b: 0x61,
            },
            512 => Color::Rgb {
                r: 0xed,
                g: 0xc8,
                b: 0x50,
            },
            1024 => Color::Rgb {
                r: 0xed,
                g: 0xc5,
                b: 0x3f,
            },
            2048 => Color::Rgb {
                r: 0xed,
                g: 0xc2,
                b: 0x2e,
            },
            _ => Color::Rgb {
                r: 0x3c,
                g: 0x3a,
                b: 0x32,
            },
        }
    }

    /// Text color: dark on the light 2/4 tiles, light everywhere else.
    fn tile_fg(value: u32) -> Color {
        if value <= 4 {
            Color::Rgb {
                r: 0x77,
                g: 0x6e,
                b: 0x65,
            }
        } else {
            Color::Rgb {
                r: 0xf9,
                g: 0xf6,
                b: 0xf2,
            }
        }
    }

    fn draw_board(&mut self, grid: &Grid) -> io::Result<()> {
        let values = grid.values();

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            self.out,
            Print("slide16 - arrows/wasd move, r restarts, q quits")
        )?;

        for (row, line) in values.iter().enumerate() {
            let top = BOARD_TOP + row as u16 * CELL_HEIGHT;
            for pad in 0..CELL_HEIGHT {
                queue!(self.out, MoveTo(0, top + pad))?;
                for &value in line {
                    let label = if pad == 0 && value != 0 {
                        format!("{value:^width$}", width = CELL_WIDTH)
                    } else {
                        " ".repeat(CELL_WIDTH)
                    };
                    queue!(
                        self.out,
                        SetBackgroundColor(Self::tile_bg(value)),
                        SetForegroundColor(Self::tile_fg(value)),
                        Print(label),
                        ResetColor,
                        Print(" ")
                    )?;
                }
            }
        }

        self.out.flush()
    }

    fn draw_banner(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, BANNER_ROW),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.out.flush()
    }
}

impl Render for TerminalView {
    fn render(&mut self, grid: &Grid) {
        if let Err(err) = self.draw_board(grid) {
            error!(%err, "failed to draw board");
        }
    }

    fn render_game_over(&mut self) {
        if let Err(err) = self.draw_banner("Game over! Press r to restart or q to quit.") {
            error!(%err, "failed to draw game-over banner");
        }
    }

    fn hide_game_over(&mut self) {
        if let Err(err) = self.draw_banner("") {
            error!(%err, "failed to clear game-over banner");
        }
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
