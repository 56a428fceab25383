pub mod app;
pub mod books;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod notice;
pub mod register;
pub mod render;
pub mod terminal_guard;
pub mod theme;
pub mod views;

use std::io;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::info;

use crate::config::Config;
use crate::data::{spawn_worker, BookStore};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;

/// Run the interface until the user quits.
///
/// The main loop stays synchronous: draw, then drain one event. The tokio
/// handle only hosts the simulated backend worker, whose replies come back
/// through the same event channel as key presses.
pub fn run(handle: &Handle, config: &Config, store: BookStore) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let reply = events.sender();
    let commands = spawn_worker(handle, store, config.data.delays(), move |event| {
        let _ = reply.send(AppEvent::Data(event));
    });

    let mut app = App::new();
    app.attach_worker(commands);
    info!("interface ready");

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => input::handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Data(event)) => app.on_data(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
