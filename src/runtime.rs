use crate::app::App;
use crate::cli::Cli;
use crate::clock::Clock;
use crate::config::{load_settings, project_paths, remember_theme};
use crate::event::{Effect, Msg};
use crate::storage::Store;
use crate::{input, logging, view};
use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout, Write};
use std::panic;
use tokio::sync::mpsc;

type Term = Terminal<CrosstermBackend<Stdout>>;

const QUEUE_DEPTH: usize = 64;

pub async fn run(cli: Cli) -> Result<()> {
    let paths = cli.resolve_paths(project_paths()?);
    if let Err(e) = logging::init(&paths.log_path) {
        eprintln!("logging disabled: {e:#}");
    }

    let stored = load_settings(&paths.settings_path);
    let mut settings = stored.clone();
    cli.apply(&mut settings);

    let store = Store::new(&paths.save_path);
    let pet = store
        .load()
        .with_context(|| format!("error loading saved data from {}", store.path().display()))?;
    tracing::info!(name = %pet.name, path = %store.path().display(), "pet loaded");

    let mut app = App::new(pet, &settings);

    let (tx, mut rx) = mpsc::channel::<Msg>(QUEUE_DEPTH);
    let clock = Clock::new(tx.clone());
    clock.start(&settings.timings);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    if let Ok((w, h)) = terminal::size() {
        app.update(Msg::Resize(w, h));
    }
    input::spawn_reader(tx);

    let result = event_loop(&mut terminal, &mut app, &mut rx, &clock, &store).await;
    restore_terminal(&mut terminal)?;

    if let Err(e) = remember_theme(&paths.settings_path, stored, app.theme_dark()) {
        tracing::warn!(error = %e, "could not write settings");
    }
    tracing::info!("bye");
    result
}

/// Takes one message at a time, applies it, runs its effects, redraws.
async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut mpsc::Receiver<Msg>,
    clock: &Clock,
    store: &Store,
) -> Result<()> {
    terminal.draw(|f| view::draw(f, app))?;

    while let Some(msg) = rx.recv().await {
        let mut quit = false;
        for effect in app.update(msg) {
            match effect {
                Effect::Schedule { after, msg } => clock.schedule(after, msg),
                Effect::Save => save_best_effort(store, app),
                Effect::Quit => quit = true,
            }
        }
        if quit {
            break;
        }
        terminal.draw(|f| view::draw(f, app))?;
    }
    Ok(())
}

fn save_best_effort(store: &Store, app: &App) {
    match store.save(app.pet()) {
        Ok(()) => tracing::info!(path = %store.path().display(), "pet saved"),
        Err(e) => tracing::warn!(error = %e, "save failed, carrying on unsaved"),
    }
}

fn setup_terminal() -> Result<Term> {
    terminal::enable_raw_mode()?;
    open_terminal().inspect_err(|_| {
        let _ = leave_screen(&mut io::stdout());
        let _ = terminal::disable_raw_mode();
    })
}

fn open_terminal() -> Result<Term> {
    let mut out = io::stdout();
    enter_screen(&mut out)?;
    let mut term = Terminal::new(CrosstermBackend::new(out))?;
    term.clear()?;
    Ok(term)
}

fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, DisableLineWrap, cursor::Hide)
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, cursor::Show, EnableLineWrap, LeaveAlternateScreen)
}

fn restore_terminal(term: &mut Term) -> Result<()> {
    leave_screen(term.backend_mut())?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn install_panic_hook() {
    let original = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
        original(info);
    }));
}
