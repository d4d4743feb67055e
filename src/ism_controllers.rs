// Controllers for the IoT Signal Monitor
use crate::ism_config::AppConfig;
use crate::ism_models::{HttpSignalSource, ISMModels, SignalRecord, SignalSource};
use crate::ism_state::{DisplayEvent, DisplayState};
use crate::ism_views::ISMViews;
use anyhow::Context;
use std::any::Any;
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

pub struct ISMControllers;

impl ISMControllers {
    /// Interactive terminal loop
    pub fn run(config: &AppConfig) -> anyhow::Result<()> {
        let source = config
            .build_source()
            .context("Failed to set up the signal source")?;

        Self::show_welcome_screen(&source);

        println!("\n🔄 Loading IoT signal data...");
        let state = Self::refresh(DisplayState::default(), &source);
        ISMViews::show_dashboard(&state);

        let lines = Self::spawn_line_reader(io::BufReader::new(io::stdin()));
        Self::run_menu(state, &source, &lines, config.refresh_interval);

        Ok(())
    }

    /// Menu loop over an input line channel. Ends on "0" or when input closes.
    pub fn run_menu(
        mut state: DisplayState,
        source: &dyn SignalSource,
        lines: &Receiver<String>,
        refresh_interval: Duration,
    ) -> DisplayState {
        loop {
            ISMViews::show_menu();

            let Some(choice) = Self::read_input(lines) else {
                println!();
                ISMViews::goodbye_message();
                break;
            };

            match choice.trim() {
                "1" => {
                    println!("\n🔄 Refreshing...");
                    state = Self::refresh(state, source);
                    ISMViews::show_dashboard(&state);
                }
                "2" => {
                    state = Self::handle_duration_update(state, lines);
                    Self::pause(lines);
                }
                "3" => {
                    state = Self::handle_watch_mode(state, source, lines, refresh_interval);
                }
                "4" => {
                    ISMViews::show_dashboard(&state);
                }
                "0" => {
                    ISMViews::goodbye_message();
                    break;
                }
                "" => {
                    // Just pressed Enter, show menu again
                }
                _ => {
                    println!("\n✗ Invalid option '{}'. Please select 0-4.", choice.trim());
                }
            }
        }

        state
    }

    /// Feed lines from `reader` into a channel; the channel closes at end of input.
    pub fn spawn_line_reader<R: BufRead + Send + 'static>(reader: R) -> Receiver<String> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log::warn!("Error reading input: {}", e);
                        break;
                    }
                }
            }
        });
        rx
    }

    /// Fetch once, print, exit.
    pub fn run_once(config: &AppConfig, as_json: bool) -> anyhow::Result<()> {
        let source = config
            .build_source()
            .context("Failed to set up the signal source")?;

        let state = Self::refresh(DisplayState::default(), &source);

        if as_json {
            let json = serde_json::to_string_pretty(&state.visible_records())
                .context("Failed to serialize signal records")?;
            println!("{}", json);
        } else {
            ISMViews::show_dashboard(&state);
        }

        Ok(())
    }

    /// One load cycle: `FetchRequested`, then success or failure.
    ///
    /// Network trouble is already absorbed by `fetch_or_default`; only a
    /// panic inside the load ends up as `FetchFailed`, which keeps the
    /// previous records.
    pub fn refresh(state: DisplayState, source: &dyn SignalSource) -> DisplayState {
        let state = state.apply(DisplayEvent::FetchRequested);

        match Self::load_records(source) {
            Ok(records) => state.apply(DisplayEvent::FetchSucceeded(records)),
            Err(message) => {
                log::error!("Refresh failed unexpectedly: {}", message);
                state.apply(DisplayEvent::FetchFailed(message))
            }
        }
    }

    /// `fetch_or_default` with panics turned into an error message.
    pub fn load_records(source: &dyn SignalSource) -> Result<Vec<SignalRecord>, String> {
        panic::catch_unwind(AssertUnwindSafe(|| ISMModels::fetch_or_default(source)))
            .map_err(|payload| Self::panic_message(&*payload))
    }

    pub fn panic_message(payload: &(dyn Any + Send)) -> String {
        if let Some(message) = payload.downcast_ref::<&str>() {
            message.to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "An unknown error occurred".to_string()
        }
    }

    /// Show welcome screen
    fn show_welcome_screen(source: &HttpSignalSource) {
        println!("\n{}", "═".repeat(70));
        println!("  ╔═══════════════════════════════════════════════════════════╗");
        println!("  ║                 📶 IOT SIGNAL MONITOR                     ║");
        println!("  ║           East · West · North · South sensors             ║");
        println!("  ╚═══════════════════════════════════════════════════════════╝");
        println!("{}", "═".repeat(70));
        println!("\n  📡 Features:");
        println!("     • Live signal color, status and duration per direction");
        println!("     • Bulk update of all durations");
        println!("     • Auto-refreshing watch mode");
        println!("\n  🌐 Data source:");
        println!("     {}", source.url());
        println!("\n{}", "═".repeat(70));
    }

    fn handle_duration_update(state: DisplayState, lines: &Receiver<String>) -> DisplayState {
        ISMViews::show_duration_prompt();
        let Some(input) = Self::read_input(lines) else {
            return state;
        };

        match state.submit_duration_input(&input) {
            Ok(next) => {
                ISMViews::show_duration_updated(input.trim());
                ISMViews::show_dashboard(&next);
                next
            }
            Err(e) => {
                ISMViews::show_validation_error(&e);
                state
            }
        }
    }

    /// Refresh every `interval` until a line arrives or input closes.
    fn handle_watch_mode(
        mut state: DisplayState,
        source: &dyn SignalSource,
        lines: &Receiver<String>,
        interval: Duration,
    ) -> DisplayState {
        ISMViews::show_watch_banner(interval);

        let mut refresh_count = 0;

        loop {
            refresh_count += 1;

            if refresh_count > 1 {
                ISMViews::show_loading("Refreshing data");
                state = Self::refresh(state, source);
                ISMViews::clear_loading();
            }

            Self::clear_screen();
            ISMViews::show_refresh_header(refresh_count);
            ISMViews::show_dashboard(&state);
            ISMViews::show_next_refresh(interval);

            match lines.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(_) | Err(RecvTimeoutError::Disconnected) => {
                    println!("\n👋 Exiting auto-refresh mode...");
                    return state;
                }
            }
        }
    }

    /// Simple pause - wait for Enter key
    fn pause(lines: &Receiver<String>) {
        print!("\n📌 Press Enter to continue...");
        let _ = io::stdout().flush();
        let _ = Self::read_input(lines);
    }

    /// Next input line, `None` once input is closed
    fn read_input(lines: &Receiver<String>) -> Option<String> {
        lines.recv().ok()
    }

    fn clear_screen() {
        print!("\x1B[2J\x1B[1;1H");
        let _ = io::stdout().flush();
    }
}
