use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
};
use rivulet_dashboard::{
    DashboardApp, DashboardCli, DashboardState, SnapshotCatalog, standard_pages,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> Result<()> {
    let cli = DashboardCli::parse();

    // Diagnostics go to stderr so the alternate screen stays intact.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let catalog = SnapshotCatalog::new(&cli.snapshot);
    let mut state = DashboardState::new(standard_pages(&catalog));
    if let Some(page) = cli.page {
        state.activate(page);
    }

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let result = run(&mut terminal, &mut state);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, state: &mut DashboardState) -> Result<()> {
    loop {
        terminal.draw(|frame| frame.render_stateful_widget(&DashboardApp {}, frame.area(), state))?;

        // Tick rather than block, so settled fetches land and toasts
        // expire without user input.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            // it's important to check that the event is a key press event as
            // crossterm also emits key release and repeat events on Windows.
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if handle_key_event(state, key_event) {
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn handle_key_event(state: &mut DashboardState, key_event: KeyEvent) -> bool {
    if state.detail.is_open() {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('c') => state.close_detail(),
            KeyCode::Up => state.detail.select_previous(),
            KeyCode::Down => state.detail_next(),
            KeyCode::Enter => state.detail_toggle(),
            _ => (),
        }
        return false;
    }

    match key_event.code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => state.next_page(),
        KeyCode::BackTab => state.previous_page(),
        KeyCode::Up => state.active_pane_mut().select_previous(),
        KeyCode::Down => state.active_pane_mut().select_next(),
        KeyCode::Enter => state.open_detail(),
        KeyCode::Char('r') => state.reload(),
        KeyCode::Char('d') => state.notifications.dismiss(),
        _ => (),
    }

    false
}
