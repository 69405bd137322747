use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::time::Duration;

use emoji_picker::app::theme::theme_from_settings;
use emoji_picker::app::{Effect, PickerScreen, PickerState, Store};
use emoji_picker::picker::FormSubmission;
use emoji_picker::settings;
use emoji_picker::tui::crossterm::into_input_event;
use emoji_picker::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use emoji_picker::ui::backend::terminal::RatatuiTerminal;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Time the loop gets to exit cleanly after SIGINT/SIGTERM.
const SIGNAL_GRACE: Duration = Duration::from_secs(1);

const USAGE: &str = "\
usage: emoji-picker [--settings <path>]

Click an emoji to select it, press Enter to submit, q or Esc to quit.
On submit the form fields are printed as JSON.";

enum Exit {
    Submitted(FormSubmission),
    Quit,
    Signal(TerminationSignal),
}

struct Args {
    settings: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, String> {
    let mut settings = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--settings" => match args.next() {
                Some(path) => settings = Some(PathBuf::from(path)),
                None => return Err("--settings needs a path".to_string()),
            },
            other => return Err(format!("unexpected argument: {other}")),
        }
    }
    Ok(Some(Args { settings }))
}

/// Process status for how the session ended. Returned from `main` rather
/// than passed to `process::exit` so the log writer is flushed on the way out.
fn exit_status(exit: &Exit) -> u8 {
    match exit {
        Exit::Submitted(_) | Exit::Quit => 0,
        Exit::Signal(signal) => signal.exit_code(),
    }
}

fn main() -> io::Result<ExitCode> {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(msg) => {
            eprintln!("emoji-picker: {msg}\n\n{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };

    let _logging = logging::init();

    let settings = settings::load_or_default(args.settings.as_deref());
    let mut store = Store::new(PickerState::from_settings(&settings));
    let mut screen = PickerScreen::new(theme_from_settings(&settings.theme));

    let exit = {
        let guard = TerminalGuard::new()?;
        let (signal_tx, signal_rx) = mpsc::channel();

        #[cfg(unix)]
        emoji_picker::tui::terminal_guard::install_termination_signals(
            guard.restorer(),
            signal_tx,
            SIGNAL_GRACE,
        )?;
        #[cfg(not(unix))]
        drop(signal_tx);

        let exit = run(&mut screen, &mut store, &signal_rx);
        drop(guard);
        exit?
    };

    match &exit {
        Exit::Submitted(submission) => println!("{}", submission.to_json()),
        Exit::Quit => tracing::info!("quit without submitting"),
        Exit::Signal(signal) => tracing::info!(?signal, "terminated by signal"),
    }
    Ok(ExitCode::from(exit_status(&exit)))
}

fn run(
    screen: &mut PickerScreen,
    store: &mut Store,
    signals: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<Exit> {
    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut dirty = true;

    loop {
        if let Ok(signal) = signals.try_recv() {
            return Ok(Exit::Signal(signal));
        }

        if dirty {
            terminal.draw(|backend, area| screen.render(backend, area, store.state()))?;
            dirty = false;
        }

        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }

        let event = into_input_event(crossterm::event::read()?);
        let outcome = screen.handle_input(&event, store);
        dirty |= outcome.needs_redraw;

        for effect in outcome.effects {
            match effect {
                Effect::Submit(submission) => return Ok(Exit::Submitted(submission)),
                Effect::Quit => return Ok(Exit::Quit),
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/main.rs"]
mod tests;
