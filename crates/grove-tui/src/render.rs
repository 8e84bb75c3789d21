use crate::app::{App, Outcome};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use grove_core::Tile;
use std::io;

/// Characters per cell (two columns so cells look square).
const CELL_WIDTH: u16 = 2;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;

    // Board plus border, centered when the terminal has room.
    let board_width = app.width() as u16 * CELL_WIDTH + 2;
    let board_height = app.height() as u16 + 2;
    let start_x = term_width.saturating_sub(board_width) / 2;
    let start_y = term_height.saturating_sub(board_height + 4) / 2;

    render_board(stdout, app, start_x, start_y)?;
    render_status(stdout, app, start_x, start_y + board_height + 1)?;
    render_controls(stdout, app, start_x, start_y + board_height + 3)?;

    execute!(stdout, Show)?;
    Ok(())
}

fn render_board(stdout: &mut io::Stdout, app: &App, start_x: u16, start_y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let inner_width = app.width() as u16 * CELL_WIDTH;

    execute!(
        stdout,
        MoveTo(start_x, start_y),
        SetForegroundColor(theme.border),
        Print(format!("┌{}┐", "─".repeat(inner_width as usize)))
    )?;

    for y in 0..app.height() {
        execute!(
            stdout,
            MoveTo(start_x, start_y + 1 + y as u16),
            SetForegroundColor(theme.border),
            Print("│")
        )?;
        for x in 0..app.width() {
            let tile = app.board.as_ref().and_then(|board| board.get(x, y));
            let (color, glyph) = match tile {
                Some(Tile::Tree) => (theme.tree, "██"),
                Some(Tile::Grass) => (theme.grass, "██"),
                None => (theme.unset, "··"),
            };
            execute!(stdout, SetForegroundColor(color), Print(glyph))?;
        }
        execute!(stdout, SetForegroundColor(theme.border), Print("│"))?;
    }

    execute!(
        stdout,
        MoveTo(start_x, start_y + 1 + app.height() as u16),
        SetForegroundColor(theme.border),
        Print(format!("└{}┘", "─".repeat(inner_width as usize)))
    )?;

    Ok(())
}

fn render_status(stdout: &mut io::Stdout, app: &App, start_x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let (attempts, status, color) = match app.outcome {
        Outcome::Solved { attempts } => (attempts, "Success", theme.success),
        Outcome::OutOfAttempts { attempts } => (attempts, "Failed", theme.error),
    };

    execute!(
        stdout,
        MoveTo(start_x, y),
        SetForegroundColor(theme.info),
        Print(format!("Attempt: {attempts}")),
        MoveTo(start_x, y + 1),
        SetForegroundColor(theme.info),
        Print("Status: "),
        SetForegroundColor(color),
        Print(status)
    )?;

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, start_x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    execute!(
        stdout,
        MoveTo(start_x, y),
        SetForegroundColor(theme.key),
        Print("r"),
        SetForegroundColor(theme.info),
        Print(" randomize   "),
        SetForegroundColor(theme.key),
        Print("q"),
        SetForegroundColor(theme.info),
        Print(" quit")
    )?;

    Ok(())
}
