use crate::{
    commands::{Commands, TableArgs},
    env::{DATABASE_URL_KEY, EnvManager, VENDOR_KEY},
    error::CliError,
};
use clap::Parser;
use connectors::sql::{
    base::report::CapabilityProbe,
    mysql::{adapter::MySqlAdapter, probe::MySqlCapabilityProbe},
};
use model::{
    core::vendor::Vendor,
    schema::catalog::TableCatalog,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "platform-probe",
    version = "0.1.0",
    about = "MySQL/MariaDB capability resolver"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            vendor,
            server_version,
        } => {
            let vendor = parse_vendor(&vendor);
            println!("{}", normalize(&vendor, &server_version));
        }
        Commands::Resolve {
            vendor,
            server_version,
            table,
            report,
        } => {
            let vendor = parse_vendor(&vendor);
            let probe = build_probe(&table)?;
            let capabilities = probe.resolve(&vendor, server_version.as_deref());
            output::emit_report(&capabilities, &report).await?;
        }
        Commands::Inspect {
            conn_str,
            env_file,
            vendor,
            table,
            report,
        } => {
            let mut env = EnvManager::new();
            if let Some(path) = env_file {
                env.load_from_file(path)?;
            }

            let conn_str = conn_str
                .or_else(|| env.get(DATABASE_URL_KEY).map(str::to_string))
                .ok_or(CliError::MissingConnection(DATABASE_URL_KEY))?;
            let probe = build_probe(&table)?;

            let adapter = MySqlAdapter::connect(&conn_str).await?;
            let vendor = vendor
                .as_deref()
                .or_else(|| env.get(VENDOR_KEY))
                .map(parse_vendor)
                .unwrap_or_else(|| adapter.vendor());
            info!("Inspecting {} server", vendor);

            let capabilities = probe.detect(&adapter, &vendor);
            adapter
                .disconnect()
                .await
                .map_err(|e| CliError::Adapter(e.into()))?;

            output::emit_report(&capabilities, &report).await?;
        }
    }

    Ok(())
}

fn parse_vendor(name: &str) -> Vendor {
    let vendor = match name.parse::<Vendor>() {
        Ok(vendor) => vendor,
        Err(never) => match never {},
    };
    if !vendor.is_mysql_family() {
        warn!(
            "Vendor '{}' is not MySQL or MariaDB, capabilities fall back to defaults",
            vendor
        );
    }
    vendor
}

fn normalize(vendor: &Vendor, raw: &str) -> String {
    let parsed = match vendor {
        Vendor::MariaDb => version_syntax::try_parse_mariadb_version(raw),
        Vendor::MySql => version_syntax::try_parse_oracle_mysql_version(raw),
        Vendor::Other(_) => return "indeterminate".to_string(),
    };

    match parsed {
        Ok(version) => version.to_string(),
        Err(err) => {
            warn!("{}", err.format_error());
            "indeterminate".to_string()
        }
    }
}

fn build_probe(table: &TableArgs) -> Result<MySqlCapabilityProbe, CliError> {
    let Some(path) = &table.catalog else {
        if table.indexed.is_empty() {
            return Ok(MySqlCapabilityProbe::audit_table());
        }
        return Ok(MySqlCapabilityProbe::new(
            TableCatalog::audit_table(),
            table.indexed.clone(),
        ));
    };

    let catalog = TableCatalog::from_file(path)?;
    let indexed = if table.indexed.is_empty() {
        catalog.names().into_iter().map(str::to_string).collect()
    } else {
        table.indexed.clone()
    };
    info!("Loaded {} columns from catalog {}", catalog.len(), path);

    Ok(MySqlCapabilityProbe::new(catalog, indexed))
}
