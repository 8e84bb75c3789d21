mod app;
mod render;
mod theme;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Terminal front end for the grove tile puzzle generator.
#[derive(Parser)]
#[command(name = "grove", version, about)]
struct Args {
    /// Board width in cells (positive even number)
    #[arg(long, default_value_t = 6)]
    width: usize,

    /// Board height in cells (positive even number)
    #[arg(long, default_value_t = 8)]
    height: usize,

    /// Seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum fill attempts per board
    #[arg(long, default_value_t = 1000)]
    max_attempts: usize,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Reject bad dimensions before touching the terminal.
    let mut app = match App::new(args.width, args.height, args.seed, args.max_attempts) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    result
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        if let Event::Key(key) = event::read()? {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }

            match app.handle_key(key) {
                AppAction::Continue => {}
                AppAction::Quit => break,
            }
        }
    }

    Ok(())
}
