use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use taskdeck::AuthBackendKind;
use taskdeck::core::config::{self, CliOverrides, TaskdeckConfig};
use taskdeck::tui;

#[derive(Parser)]
#[command(name = "taskdeck", about = "Terminal todo board with sign-in")]
struct Args {
    /// Auth backend to use (overrides config and TASKDECK_BACKEND)
    #[arg(short, long, value_enum)]
    backend: Option<AuthBackendKind>,

    /// Base URL of the auth API (overrides config and TASKDECK_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Start with an empty todo list instead of the sample todos
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (TaskdeckConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        backend: args.backend,
        api_url: args.api_url,
        no_seed: args.no_seed,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to taskdeck.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("taskdeck.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "Taskdeck starting up (backend: {}, api: {})",
        resolved.backend.as_str(),
        resolved.api_base_url
    );

    tui::run(resolved)
}
