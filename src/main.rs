use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::stdout,
    time::{Duration, Instant},
};

use gridfall::constants::FRAME_POLL;
use gridfall::game::Game;
use gridfall::input::{map_key, Command};
use gridfall::ui::ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();
    let mut last_frame = Instant::now();

    // Game loop: drain input, apply commands, maybe tick, render.
    'frames: loop {
        if event::poll(FRAME_POLL)? {
            while event::poll(Duration::ZERO)? {
                if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                    if kind == KeyEventKind::Release {
                        continue;
                    }
                    if let KeyCode::Char('r') | KeyCode::Char('R') = code {
                        game.reset();
                        continue;
                    }
                    match map_key(code) {
                        Some(Command::Quit) => break 'frames,
                        Some(command) => game.handle_command(command),
                        None => {}
                    }
                }
            }
        }

        let now = Instant::now();
        game.advance(now.duration_since(last_frame));
        last_frame = now;

        terminal.draw(|f| ui(f, &game))?;
    }

    // Cleanup
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
