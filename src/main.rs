mod ism_config;
mod ism_controllers;
mod ism_gui;
mod ism_models;
mod ism_state;
mod ism_views;

use anyhow::Result;
use clap::Parser;
use ism_config::{AppConfig, DEFAULT_API_URL, DEFAULT_REFRESH_SECS, DEFAULT_RELAY_URL};
use ism_controllers::ISMControllers;

/// IoT Signal Monitor - live signal, status and duration for the four direction sensors
#[derive(Parser, Debug)]
#[command(name = "ism")]
#[command(version, long_about = None)]
struct Args {
    /// Signal API endpoint
    #[arg(long, env = "ISM_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Relay proxy base URL; the API URL is passed as its `url` query parameter
    #[arg(long, env = "ISM_PROXY_URL", value_name = "URL")]
    proxy: Option<String>,

    /// Route requests through the public relay proxy (overrides --proxy / ISM_PROXY_URL)
    #[arg(long)]
    relay: bool,

    /// HTTP request timeout in seconds (client default when unset)
    #[arg(long, env = "ISM_TIMEOUT_SECS", value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Auto-refresh interval in seconds
    #[arg(long, env = "ISM_REFRESH_SECS", value_name = "SECS", default_value_t = DEFAULT_REFRESH_SECS)]
    refresh_secs: u64,

    /// Run the interactive terminal dashboard instead of the window
    #[arg(long, conflicts_with = "once")]
    terminal: bool,

    /// Fetch once, print the signals and exit
    #[arg(long)]
    once: bool,

    /// With --once, print JSON instead of cards
    #[arg(long, requires = "once")]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn to_config(&self) -> AppConfig {
        let proxy = if self.relay {
            Some(DEFAULT_RELAY_URL.to_string())
        } else {
            self.proxy.clone()
        };

        AppConfig::default()
            .with_api_url(self.api_url.clone())
            .with_proxy(proxy)
            .with_timeout_secs(self.timeout_secs)
            .with_refresh_secs(self.refresh_secs)
    }
}

fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let gui = !args.terminal && !args.once;
    init_logging(args.verbose, args.quiet, gui);

    // Panics caught around a refresh also pass through here
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("{}", panic_report(panic_info));
    }));

    let config = args.to_config();
    log::info!("IoT Signal Monitor v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("{:?}", config);

    if args.once {
        ISMControllers::run_once(&config, args.json)
    } else if args.terminal {
        ISMControllers::run(&config)
    } else {
        ism_gui::run_gui(&config)
    }
}

fn panic_report(details: &dyn std::fmt::Display) -> String {
    format!(
        "\n{line}\n⚠️  UNEXPECTED ERROR\n{line}\n{details}\n\n💡 If the dashboard is still open, the last known signal data is kept; try refreshing.\n{line}",
        line = "═".repeat(70),
        details = details
    )
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set
fn init_logging(verbose: u8, quiet: bool, gui: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match (verbose, gui) {
            (0, true) => LevelFilter::Warn,
            (0, false) => LevelFilter::Info,
            (1, _) => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
