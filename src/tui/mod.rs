//! TUI (Text User Interface) for chatting with the weather agent.

mod app;
mod constants;
mod draw;
mod handlers;
mod send_result;
mod shortcuts;
mod text;

pub use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use tokio::runtime::Runtime;

use crate::core::agent::AgentClient;
use crate::core::bell::Bell;
use crate::core::config::Config;
use crate::core::connectivity::{self, Connectivity};
use crate::core::message::DeliveryStatus;

use draw::draw;
use handlers::{HandleResult, PendingSend};

/// Spawn a connectivity probe in the background. Returns a receiver for the
/// probe verdict.
fn spawn_probe(client: &Arc<AgentClient>, rt: &Arc<Runtime>) -> mpsc::Receiver<Connectivity> {
    let (tx, rx) = mpsc::channel();
    let client = Arc::clone(client);
    let rt_clone = Arc::clone(rt);
    thread::spawn(move || {
        let verdict = rt_clone.block_on(connectivity::probe(client.http(), client.endpoint()));
        let _ = tx.send(verdict);
    });
    rx
}

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for async agent calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let client = Arc::new(AgentClient::new(config.as_ref()));
    let bell = Bell::new(config.bell);
    let mut app = App::new(config.show_timestamps);
    if config.light_theme {
        app.theme = constants::Theme::Light;
    }
    let mut pending_send: Option<PendingSend> = None;

    // Mouse wheel scrolls the history.
    execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;

    // First probe up front; then one every PROBE_INTERVAL.
    let mut pending_probe = Some(spawn_probe(&client, &rt));

    loop {
        if let Some(ref probe_rx) = pending_probe
            && let Ok(verdict) = probe_rx.try_recv()
        {
            app.connectivity = verdict;
            app.last_probe_at = Some(Instant::now());
            if verdict.is_online() && app.error.as_deref() == Some(constants::OFFLINE_BANNER) {
                app.error = None;
            }
            pending_probe = None;
        }

        if pending_probe.is_none()
            && app
                .last_probe_at
                .is_some_and(|t| t.elapsed() >= connectivity::PROBE_INTERVAL)
        {
            pending_probe = Some(spawn_probe(&client, &rt));
        }

        if let Some(ref send) = pending_send {
            if send.accepted_rx.try_recv().is_ok() {
                app.set_status(send.user_id, DeliveryStatus::Sent);
            }
            if let Ok(result) = send.result_rx.try_recv() {
                let (user_id, agent_id) = (send.user_id, send.agent_id);
                app.is_sending = false;
                send_result::apply(&mut app, user_id, agent_id, result, &bell);
                pending_send = None;
            }
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? {
            match event::read()? {
                Event::Mouse(mouse) => {
                    let _ = handlers::handle_mouse(mouse, &mut app);
                }
                Event::Key(key) => {
                    let result = handlers::handle_key(
                        key,
                        handlers::HandleKeyContext {
                            app: &mut app,
                            client: &client,
                            pending_send: &mut pending_send,
                            rt: &rt,
                            bell: &bell,
                        },
                    );
                    if result == HandleResult::Break {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
