// src/main.rs - Desktop entry point and maintenance commands

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use order_dashboard::api::ApiClient;
use order_dashboard::config::{AppConfig, ConfigManager};
use order_dashboard::error::{Error, Result};
use order_dashboard::platform::create_providers;
use order_dashboard::{logging, ui};

#[derive(Parser)]
#[command(
    name = "order-dashboard",
    version = order_dashboard::VERSION,
    about = "Admin dashboard for orders, payments and inventory",
    long_about = None
)]
struct Cli {
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard window
    Run,
    /// Query the backend health endpoint
    Health,
    /// Validate configuration
    ValidateConfig {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    fn log_override(&self) -> Option<&'static str> {
        if self.debug {
            Some("debug")
        } else if self.verbose {
            Some("info")
        } else {
            None
        }
    }
}

fn main() {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<i32> {
    let runtime = runtime()?;

    match &cli.command {
        Some(Commands::ValidateConfig { config }) => {
            let path = config.clone().or_else(|| cli.config.clone());
            runtime.block_on(validate_config(path))
        }
        Some(Commands::Health) => {
            let config = runtime.block_on(load_config(cli.config.clone()))?;
            let _guard = logging::init(&config.logging, cli.log_override())?;
            runtime.block_on(check_health(&config))
        }
        Some(Commands::Run) | None => {
            let config = runtime.block_on(load_config(cli.config.clone()))?;
            // The desktop renderer starts its own runtime
            drop(runtime);

            let _guard = logging::init(&config.logging, cli.log_override())?;
            run_desktop(config);
            Ok(0)
        }
    }
}

fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::platform("native", "runtime", e.to_string()))
}

async fn load_config(path: Option<PathBuf>) -> Result<AppConfig> {
    let mut manager = match path {
        Some(path) => ConfigManager::with_config_file(path)?,
        None => ConfigManager::new(),
    };
    manager.load().await?;
    manager.get_config().await
}

fn run_desktop(config: AppConfig) {
    use dioxus::desktop::tao::dpi::LogicalSize;
    use dioxus::desktop::{Config, WindowBuilder};

    tracing::info!(
        version = order_dashboard::VERSION,
        environment = %config.app.environment,
        api = %config.api.base_url,
        "Starting Order Dashboard"
    );

    let window = WindowBuilder::new()
        .with_title(config.app.name.clone())
        .with_resizable(true)
        .with_inner_size(LogicalSize::new(1200.0, 800.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(ui::App);
}

async fn check_health(config: &AppConfig) -> Result<i32> {
    let providers = create_providers()?;
    let client = ApiClient::new(&config.api, providers.network);

    println!("Order Dashboard Health");
    println!("======================");
    println!("Backend: {}", client.root_url(&config.api.health_path));

    match client.health().await {
        Ok(report) => {
            let icon = if report.is_up() { "✅" } else { "❌" };
            println!("Overall status: {} {}", icon, report.status);
            if let Some(timestamp) = &report.timestamp {
                println!("Reported at: {}", timestamp);
            }
            if let Some(error) = &report.error {
                println!("Error: {}", error);
            }

            let components = report.component_statuses();
            if !components.is_empty() {
                println!();
                println!("Components:");
                for (name, status) in components {
                    let icon = if status.eq_ignore_ascii_case("UP") { "✅" } else { "⚠️" };
                    println!("  {} {}: {}", icon, name, status);
                }
            }

            Ok(if report.is_up() { 0 } else { 2 })
        }
        Err(e) => {
            println!("Overall status: ❌ unreachable ({}: {})", e.code(), e.message());
            Ok(2)
        }
    }
}

async fn validate_config(path: Option<PathBuf>) -> Result<i32> {
    let mut manager = match &path {
        Some(path) => {
            println!("Validating configuration file: {}", path.display());
            ConfigManager::with_config_file(path)?
        }
        None => {
            println!("Validating default configuration");
            ConfigManager::new()
        }
    };
    manager.load().await?;

    let config = manager.get_config().await?;
    let errors = config.validate();
    if errors.is_empty() {
        println!("✅ Configuration is valid");
        Ok(0)
    } else {
        println!("❌ Configuration has {} problem(s):", errors.len());
        for error in errors {
            println!("  - {}", error);
        }
        Ok(1)
    }
}
