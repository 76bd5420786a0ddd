//! Command-line interface for the redis-discovery binary.
//!
//! The CLI selects the enabled discovery sources, concatenates their targets
//! and prints them as JSON for the exporter.

use std::{io, path::PathBuf, process};

use clap::{ArgAction, Parser};
use redis_discovery::{
    CfEnv, Error, Target, TargetSet, cloud_foundry_redis_bindings, discover_azure_redis_from_env,
    load_redis_args, load_redis_file,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line interface for discovering Redis exporter targets.
#[derive(Debug, Parser,)]
#[command(name = "redis-discovery", version, about = "Discover Redis exporter targets")]
struct Cli
{
    /// Addresses of the Redis instances, joined by the separator.
    #[arg(long = "redis.addr", env = "REDIS_ADDR", default_value = "")]
    addr: String,

    /// Passwords of the Redis instances, joined by the separator.
    #[arg(long = "redis.password", env = "REDIS_PASSWORD", default_value = "", hide_env_values = true)]
    password: String,

    /// Aliases of the Redis instances, joined by the separator.
    #[arg(long = "redis.alias", env = "REDIS_ALIAS", default_value = "")]
    alias: String,

    /// Separator used to split addr, password and alias.
    #[arg(long = "separator", env = "REDIS_EXPORTER_SEPARATOR", default_value = ",")]
    separator: String,

    /// Comma-separated file of `address[,password[,alias]]` rows.
    #[arg(long = "redis.file", env = "REDIS_FILE", value_name = "PATH")]
    file: Option<PathBuf,>,

    /// Append Redis services bound through Cloud Foundry.
    #[arg(long = "use-cf-bindings", env = "REDIS_EXPORTER_USE_CF_BINDINGS", action = ArgAction::SetTrue)]
    use_cf_bindings: bool,

    /// Append Azure Cache for Redis instances of the subscription.
    #[arg(long = "use-azure-redis", env = "REDIS_EXPORTER_USE_AZURE_REDIS", action = ArgAction::SetTrue)]
    use_azure_redis: bool,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,

    /// Log filter directive.
    #[arg(long = "log-level", env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

/// Document printed on stdout.
#[derive(Debug, Serialize,)]
struct TargetsDocument
{
    targets: Vec<Target,>,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    let cli = Cli::parse();
    init_tracing(&cli.log_level,);

    if let Err(error,) = run(cli,).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing(directive: &str,)
{
    let filter = EnvFilter::try_new(directive,).unwrap_or_else(|_| EnvFilter::new("info",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Discovers targets from every enabled source and prints them.
///
/// # Errors
///
/// Propagates fatal discovery errors and serialization failures.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let targets = discover(&cli,).await?;
    info!("discovered {} targets", targets.len());

    let document = TargetsDocument {
        targets: targets.to_targets(),
    };
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_targets_document(&mut handle, &document, cli.pretty,)
}

async fn discover(cli: &Cli,) -> Result<TargetSet, Error,>
{
    if cli.separator.is_empty() {
        return Err(Error::validation("--separator must not be empty",),);
    }

    let mut targets = match cli.file.as_deref() {
        Some(path,) => load_redis_file(path,)?,
        None => load_redis_args(&cli.addr, &cli.password, &cli.alias, &cli.separator,),
    };

    if cli.use_cf_bindings {
        targets.extend(cloud_foundry_redis_bindings(&CfEnv,).targets,);
    }

    if cli.use_azure_redis {
        targets.extend(discover_azure_redis_from_env().await?.targets,);
    }

    Ok(targets,)
}

fn write_targets_document<W: io::Write,>(
    writer: &mut W,
    document: &TargetsDocument,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, document,)?;
    } else {
        serde_json::to_writer(writer, document,)?;
    }

    Ok((),)
}
