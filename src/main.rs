use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use update_checker::UpdateChecker;
use update_checker::config::{self, HostEnvironment, UpdaterConfig};
use update_checker::store::SqliteStore;
use update_checker::updater::gate::PendingUpdates;
use update_checker::updater::info::COMPONENT_INFORMATION;

#[derive(Parser)]
#[command(name = "update-checker")]
#[command(version, about = "Update check engine for self-hosted components")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct EndpointArgs {
    /// Component identifier
    #[arg(long)]
    slug: String,

    /// Currently installed version
    #[arg(long)]
    installed: String,

    /// Metadata endpoint URL
    #[arg(long)]
    endpoint: String,

    /// License token, sent as a query parameter
    #[arg(long)]
    license: Option<String>,

    /// Bypass the one-day response cache
    #[arg(long)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a newer, compatible version is available
    Check {
        #[command(flatten)]
        endpoint: EndpointArgs,

        /// Version of the host application the component runs in
        #[arg(long)]
        host_version: String,

        /// Version of the language runtime the component runs on
        #[arg(long)]
        runtime_version: String,
    },
    /// Print the component information the host's UI would display
    Info {
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
}

fn build_checker(
    args: &EndpointArgs,
    env: HostEnvironment,
) -> anyhow::Result<UpdateChecker> {
    let mut config = UpdaterConfig::new(&args.slug, &args.installed, &args.endpoint)
        .with_cache_enabled(!args.no_cache);
    if let Some(license) = &args.license {
        config = config.with_license(license);
    }

    std::fs::create_dir_all(config::data_dir())?;
    let store = Arc::new(SqliteStore::new(&config::db_path())?);

    Ok(UpdateChecker::new(config, env, store))
}

async fn run_check(
    args: EndpointArgs,
    host_version: String,
    runtime_version: String,
) -> anyhow::Result<()> {
    let checker = build_checker(&args, HostEnvironment::new(host_version, runtime_version))?;

    // The CLI is its own host, so its bookkeeping is a single entry
    let mut pending = PendingUpdates::default();
    pending.checked.insert(
        format!("{slug}/{slug}.php", slug = args.slug),
        args.installed.clone(),
    );

    match checker.check_for_update(&mut pending).await {
        Some(descriptor) => println!("{}", serde_json::to_string_pretty(&descriptor)?),
        None => println!("{} {} is up to date", args.slug, args.installed),
    }

    Ok(())
}

async fn run_info(args: EndpointArgs) -> anyhow::Result<()> {
    // Host/runtime versions play no role in the information projection
    let checker = build_checker(&args, HostEnvironment::new("0", "0"))?;

    match checker.describe(COMPONENT_INFORMATION, &args.slug).await {
        Some(info) => println!("{}", serde_json::to_string_pretty(&info)?),
        None => println!("no metadata available for {}", args.slug),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Command::Check {
            endpoint,
            host_version,
            runtime_version,
        } => runtime.block_on(run_check(endpoint, host_version, runtime_version)),
        Command::Info { endpoint } => runtime.block_on(run_info(endpoint)),
    }
}
