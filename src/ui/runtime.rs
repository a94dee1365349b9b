use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::funnel;
use crate::provider::ContentProvider;
use crate::share::{share_link, ClipboardSink, CommandShare, NativeShare, ShareError};
use crate::ui::app::{App, ProviderRequest};
use crate::ui::events::{AppEvent, EventHandler, ProviderOutcome};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Main UI loop: draw, wait for an event, dispatch, fire whatever
/// provider call the new state asks for. Provider calls run on a tokio
/// runtime and post back through the event channel, so the loop itself
/// never blocks on the network.
pub fn run(config: &Config, provider: Arc<dyn ContentProvider>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);
    let mut native_share = CommandShare::detect();
    let mut clipboard: Option<ClipboardHandler> = None;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let event = match events.next(tick_rate) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        match event {
            AppEvent::Key(key) => match handle_key(&mut app, key) {
                InputAction::None => {}
                InputAction::Intent(intent) => {
                    if let Some(request) = app.dispatch(intent) {
                        spawn_provider_call(
                            &runtime,
                            Arc::clone(&provider),
                            request,
                            events.sender(),
                        );
                    }
                }
                InputAction::Share => {
                    share(&mut app, &mut native_share, &mut clipboard, &config.funnel.quiz_url)
                }
                InputAction::Unlock => {
                    if let Err(err) = funnel::open_sales_page(&config.funnel.sales_url) {
                        tracing::warn!(error = %err, "failed to open sales page");
                    }
                }
            },
            AppEvent::Tick => app.on_tick(),
            // ratatui recomputes the layout on the next draw.
            AppEvent::Resize(_, _) => {}
            AppEvent::Provider(outcome) => {
                if let Some(request) = app.dispatch(outcome.into_intent()) {
                    spawn_provider_call(&runtime, Arc::clone(&provider), request, events.sender());
                }
            }
        }
    }

    drop(guard);
    Ok(())
}

fn spawn_provider_call(
    runtime: &tokio::runtime::Runtime,
    provider: Arc<dyn ContentProvider>,
    request: ProviderRequest,
    tx: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        let outcome = match request {
            ProviderRequest::Generate => match provider.generate_questions().await {
                Ok(questions) => ProviderOutcome::QuestionsReady(questions),
                Err(err) => {
                    tracing::warn!(error = %err, "question generation failed");
                    ProviderOutcome::QuestionsFailed(err)
                }
            },
            ProviderRequest::Analyze { score, total } => {
                match provider.analyze_performance(score, total).await {
                    Ok(result) => ProviderOutcome::AnalysisReady(result),
                    Err(err) => {
                        tracing::warn!(error = %err, "performance analysis failed");
                        ProviderOutcome::AnalysisFailed(err)
                    }
                }
            }
        };
        // Receiver gone means the loop already exited.
        let _ = tx.send(AppEvent::Provider(outcome));
    });
}

fn share(
    app: &mut App,
    native: &mut Option<CommandShare>,
    clipboard: &mut Option<ClipboardHandler>,
    url: &str,
) {
    // The clipboard handler is built on first fallback and reused; a
    // host with only a native share target never needs one.
    let result = share_link(
        native.as_mut().map(|target| target as &mut dyn NativeShare),
        move || match clipboard {
            Some(handler) => Ok(handler as &mut dyn ClipboardSink),
            None => {
                let handler = ClipboardHandler::new()
                    .map_err(|err| ShareError::Clipboard(err.to_string()))?;
                Ok(clipboard.insert(handler) as &mut dyn ClipboardSink)
            }
        },
        url,
    );

    match result {
        Ok(outcome) => app.note_share(outcome),
        Err(err) => tracing::warn!(error = %err, "share failed"),
    }
}
