//! First-run greeting flow
//!
//! The only sequential flow in the app: `ask -> welcome -> done`. The
//! `ask` phase is entered only when no name is stored; a non-empty
//! submitted name moves to `welcome`, which dissolves into `done` after a
//! fixed delay (shorter when the reduced-motion preference is set). The
//! state machine is plain data so the transitions are testable; `run`
//! drives it against stdin and the settings file.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::config::{FlowPaths, Settings};
use crate::error::FlowResult;

const WELCOME_DELAY: Duration = Duration::from_millis(2400);
const WELCOME_DELAY_REDUCED: Duration = Duration::from_millis(400);

/// Phase of the greeting flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Asking for a name; entered only when none is stored
    Ask,
    /// Showing the welcome message
    Welcome,
    /// Terminal; the main app takes over
    Done,
}

/// The greeting state machine
#[derive(Debug)]
pub struct Greeting {
    phase: Phase,
    name: Option<String>,
    reduced_motion: bool,
}

impl Greeting {
    /// Start the flow; skips straight to `Welcome` when a name is stored
    pub fn new(stored_name: Option<String>, reduced_motion: bool) -> Self {
        let phase = if stored_name.is_some() {
            Phase::Welcome
        } else {
            Phase::Ask
        };
        Self {
            phase,
            name: stored_name,
            reduced_motion,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Submit a name while asking
    ///
    /// A blank submission is ignored and the flow stays in `Ask`; a
    /// non-empty name moves to `Welcome`. Returns whether the submission
    /// was accepted.
    pub fn submit_name(&mut self, input: &str) -> bool {
        if self.phase != Phase::Ask {
            return false;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.name = Some(trimmed.to_string());
        self.phase = Phase::Welcome;
        true
    }

    /// How long the welcome message is shown
    pub fn welcome_delay(&self) -> Duration {
        if self.reduced_motion {
            WELCOME_DELAY_REDUCED
        } else {
            WELCOME_DELAY
        }
    }

    /// The timed `Welcome -> Done` transition
    pub fn finish(&mut self) {
        if self.phase == Phase::Welcome {
            self.phase = Phase::Done;
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

/// Run the greeting against a terminal, persisting a newly submitted name
///
/// On EOF without a name the flow exits without storing anything, so
/// piped invocations never hang.
pub fn run(paths: &FlowPaths, settings: &mut Settings) -> FlowResult<()> {
    let mut greeting = Greeting::new(
        settings.user_name().map(|n| n.to_string()),
        settings.reduced_motion,
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while greeting.phase() == Phase::Ask {
        print!("What should we call you? ");
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok(line)) => {
                if greeting.submit_name(&line) {
                    // submit_name trims, so unwrap of the name is safe here
                    settings.set_user_name(greeting.name().unwrap_or_default());
                    settings.save(paths)?;
                }
            }
            _ => return Ok(()),
        }
    }

    if let Some(name) = greeting.name() {
        println!("Welcome, {}", name);
    }
    std::thread::sleep(greeting.welcome_delay());
    greeting.finish();

    Ok(())
}
