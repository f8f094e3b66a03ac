//! parse-mongo-url CLI Entry Point
//!
//! Prints shell assignments describing a MongoDB URL, for use as
//! `eval "$(parse-mongo-url "$DATABASE_URL")"` in deployment scripts.
//!
//! Only the rendered options go to stdout. Logs and diagnostics go to stderr.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mongo_url_opts::config::{MONGO_CA_FILE_ENV, MONGO_VERSION_ENV};
use mongo_url_opts::output::{render_json_error, OutputFormat};
use mongo_url_opts::{
    render_json, render_shell, resolve, ConnectionUrl, MongoUrlError, ResolvedOptions,
    ResolverConfig, ServerVersion, DEFAULT_CA_FILE,
};

/// Parse a MongoDB URL into shell variables and mongo shell options
#[derive(Parser)]
#[command(name = "parse-mongo-url")]
#[command(version)]
struct Cli {
    /// The MongoDB URL string to parse
    mongo_url: String,

    /// Use SSL options instead of TLS options
    #[arg(long)]
    ssl_opts: bool,

    /// Target MongoDB server version (MAJOR.MINOR.PATCH)
    #[arg(long, env = MONGO_VERSION_ENV)]
    mongo_version: Option<String>,

    /// CA bundle passed to --tlsCAFile / --sslCAFile
    #[arg(long, env = MONGO_CA_FILE_ENV, default_value = DEFAULT_CA_FILE)]
    ca_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Shell)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = ResolverConfig::new().with_ca_file(&cli.ca_file).with_ssl_naming(cli.ssl_opts);

    let result = resolve_cli(&cli, &config);

    if let Err(err) = emit(cli.format, &result) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(err.exit_code() as u8),
    }
}

/// URL problems (syntax, missing host) win over version problems
fn resolve_cli(cli: &Cli, config: &ResolverConfig) -> Result<ResolvedOptions, MongoUrlError> {
    let conn = ConnectionUrl::parse(&cli.mongo_url)?;
    conn.require_host()?;

    let version = cli
        .mongo_version
        .as_deref()
        .ok_or_else(|| MongoUrlError::missing_version(MONGO_VERSION_ENV))?;
    resolve(&conn, ServerVersion::parse(version)?, config)
}

fn emit(format: OutputFormat, result: &Result<ResolvedOptions, MongoUrlError>) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match (format, result) {
        (OutputFormat::Shell, Ok(opts)) => out.write_all(render_shell(opts).as_bytes())?,
        (OutputFormat::Json, Ok(opts)) => writeln!(out, "{}", render_json(opts)?)?,
        (OutputFormat::Shell, Err(err)) => {
            log::debug!("resolution failed with {}", err.error_code());
            eprintln!("{err}");
        }
        (OutputFormat::Json, Err(err)) => writeln!(out, "{}", render_json_error(err)?)?,
    }

    out.flush()?;
    Ok(())
}
