use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use panel_client::ClientSettings;
use panel_core::{update, AppState, AppViewModel, Msg};
use panel_logging::panel_info;
use url::Url;

use super::effects::EffectRunner;
use super::input::{self, Command};
use super::logging::{self, LogDestination};
use super::render;

const ORIGIN_ENV: &str = "PANEL_ORIGIN";
const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

/// Everything the main loop reacts to: console lines and core messages.
pub(super) enum AppEvent {
    Line(String),
    Core(Msg),
}

pub fn run() -> ExitCode {
    logging::initialize(LogDestination::File);

    let origin = match resolve_origin() {
        Ok(origin) => origin,
        Err(message) => {
            eprintln!("panel_app: {message}");
            return ExitCode::FAILURE;
        }
    };
    panel_info!("console starting, origin={}", origin);
    println!("panel console, origin {origin}");
    println!("{}", input::HELP_TEXT);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(ClientSettings { origin }, event_tx.clone());
    spawn_stdin_reader(event_tx);

    let mut state = AppState::new();
    print_frame(&state.view());

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Line(line) => match input::parse(&line) {
                Command::Quit => break,
                Command::Help => println!("{}", input::HELP_TEXT),
                Command::Show => print_frame(&state.view()),
                Command::Empty => {}
                Command::Unknown(text) => println!("unknown command: {text} (try `help`)"),
                Command::Fire(panel) => dispatch(&mut state, Msg::PanelClicked(panel), &runner),
                Command::SetQuery(text) => dispatch(&mut state, Msg::QueryEdited(text), &runner),
                Command::SetSkill(text) => dispatch(&mut state, Msg::SkillEdited(text), &runner),
            },
            AppEvent::Core(msg) => dispatch(&mut state, msg, &runner),
        }
    }

    panel_info!("console exiting");
    ExitCode::SUCCESS
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (mut next, effects) = update(std::mem::take(state), msg);
    runner.enqueue(effects);

    let view = next.view();
    let was_dirty = next.consume_dirty();
    *state = next;
    if was_dirty {
        print_frame(&view);
    }
}

fn print_frame(view: &AppViewModel) {
    print!("{}", render::frame(view));
    let _ = io::stdout().flush();
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        // Closed stdin quits the loop like an explicit command.
        let _ = event_tx.send(AppEvent::Line("quit".to_string()));
    });
}

fn resolve_origin() -> Result<Url, String> {
    let value = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(ORIGIN_ENV).ok())
        .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
    Url::parse(&value).map_err(|err| format!("invalid origin {value:?}: {err}"))
}
