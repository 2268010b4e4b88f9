use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sticky_core::AppConfig;
use sticky_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    haptics,
    input::{handle_key_event, handle_mouse_event},
    scroll::UiConfigExt,
    theme::Theme,
    ui,
};

type Backend = CrosstermBackend<io::Stdout>;

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    let backend = haptics::select_backend(config.haptics.mode);
    tracing::info!(
        "Starting sticky transition (haptics: {}, threshold: {})",
        backend,
        config.interaction.threshold
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Sticky"))?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(config.clone(), Theme::default(), backend);
    let result = main_loop(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("Exiting after {} swaps", app.toggle.toggle_count());
    result
}

fn main_loop(terminal: &mut Terminal<Backend>, app: &mut App, config: &AppConfig) -> Result<()> {
    let event_handler = EventHandler::new(
        config.ui.tick_duration(),
        config.ui.animation_tick_duration(),
    );

    // Checked at the end of each iteration to pick the next tick rate
    let mut needs_fast_update = false;

    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    app.clear_status();
                    let action = handle_key_event(key);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    if let Some(input) = handle_mouse_event(mouse) {
                        app.handle_pointer(input, now);
                    }
                }
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_animation();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
