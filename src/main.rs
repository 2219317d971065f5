use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tracing::info;

use todos_tui::app::App;
use todos_tui::logging;
use todos_tui::terminal::{setup_panic_hook, TerminalManager};
use todos_tui::ui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Some(path) = logging::init()? {
        info!(path = %path.display(), "logging enabled");
    }

    // Install the panic hook before touching the terminal so a panic during
    // setup still restores it.
    setup_panic_hook();

    let mut manager = TerminalManager::new()?;

    // Page mount side effect: window title, set once before the first frame.
    ui::page::set_terminal_title(&mut std::io::stdout())?;

    let mut app = App::new();
    let size = manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(manager.terminal(), &mut app).await;

    // Terminal state is restored by the manager's guard on drop.
    result
}

/// Main event loop: redraw when dirty, then wait for the next event.
async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
{
    let mut events = EventStream::new();

    while !app.should_quit {
        if app.needs_redraw() {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.mark_rendered();
        }

        let Some(event) = events.next().await else {
            break;
        };
        match event? {
            Event::Key(key) => app.handle_key(key),
            Event::Paste(text) => app.handle_paste(&text),
            Event::Resize(width, height) => app.update_terminal_dimensions(width, height),
            _ => {}
        }
    }

    Ok(())
}
