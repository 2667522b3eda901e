use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kargo::config::ConfigStore;
use kargo::model::CliConfig;
use kargo::promote::CallContext;
use kargo::remote::RemoteClient;

use crate::Commands;

#[derive(Parser)]
#[command(name = "kargo")]
#[command(about = "Kargo command line client", long_about = None)]
pub(crate) struct Cli {
    /// Path to the CLI config file
    #[arg(long, global = true, env = "KARGO_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// API server address (overrides the configured one)
    #[arg(long, global = true, value_name = "URL")]
    server: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    insecure_skip_tls_verify: bool,

    /// Seconds to wait for the API server (0 waits indefinitely)
    #[arg(long, global = true, default_value_t = 30, value_name = "SECONDS")]
    request_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

/// Settings taken from global flags, shared by every command handler.
pub(crate) struct Globals {
    pub(crate) store: ConfigStore,
    pub(crate) server: Option<String>,
    pub(crate) insecure_skip_tls_verify: bool,
    pub(crate) request_timeout: Option<Duration>,
}

impl Globals {
    pub(crate) fn call_context(&self) -> CallContext {
        match self.request_timeout {
            Some(timeout) => CallContext::with_timeout(timeout),
            None => CallContext::background(),
        }
    }
}

pub(crate) fn init_logging() {
    let filter = EnvFilter::try_from_env("KARGO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let globals = Globals {
        store: ConfigStore::resolve(cli.config)?,
        server: cli.server,
        insecure_skip_tls_verify: cli.insecure_skip_tls_verify,
        request_timeout: (cli.request_timeout > 0)
            .then(|| Duration::from_secs(cli.request_timeout)),
    };
    tracing::debug!(config = %globals.store.path().display(), "resolved cli config path");

    crate::cli_exec::handle_command(&globals, cli.command)
}

/// Builds the API client from the stored config plus any flag overrides.
pub(crate) fn require_client(globals: &Globals, cfg: &CliConfig) -> Result<RemoteClient> {
    let mut cfg = cfg.clone();
    if let Some(server) = &globals.server {
        cfg.api_address = server.clone();
    }
    if globals.insecure_skip_tls_verify {
        cfg.insecure_skip_tls_verify = true;
    }
    RemoteClient::from_config(&cfg)
}
