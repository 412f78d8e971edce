//! CLI entry point for moki — a Moki device-management API client.
//!
//! Reads connection settings from the environment (`MOKI_API_URL`,
//! `MOKI_TENANT_ID`, `MOKI_API_KEY`), dispatches one API operation per
//! subcommand, and prints the JSON result to stdout.
//!
//! Exit codes:
//! - 0: success
//! - 1: runtime error (configuration, identifier, API, or network failure)
//! - 2: argument validation error (clap handles this automatically)

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use moki_api::actions::{get_action, perform_action};
use moki_api::client::MokiClient;
use moki_api::config::MokiConfig;
use moki_api::managed_apps::{device_managed_apps, tenant_managed_apps};
use moki_api::profiles::{device_profiles, ios_profiles};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all iOS profiles defined for the tenant.
    Profiles,

    /// List the profiles installed on a device (UDID or serial number).
    DeviceProfiles {
        /// Device UDID, bare serial number, or `sn-!-` token.
        device_id: String,
    },

    /// List the managed apps installed on a device (UDID or serial number).
    DeviceApps {
        /// Device UDID, bare serial number, or `sn-!-` token.
        device_id: String,
    },

    /// List the managed apps defined for the tenant.
    TenantApps,

    /// Read the status of a previously submitted device action.
    Action {
        /// Device UDID, bare serial number, or `sn-!-` token.
        device_id: String,
        /// UUID of the action to look up.
        action_id: String,
    },

    /// Submit a new action to a device.
    PerformAction {
        /// Device UDID, bare serial number, or `sn-!-` token.
        device_id: String,
        /// JSON object to send as the action payload,
        /// e.g. '{"type":"restart"}'.
        #[arg(long)]
        body: String,
    },
}

/// Pretty-prints any serializable API result to stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(client: &MokiClient, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Profiles => print_json(&ios_profiles(client).await?)?,
        Command::DeviceProfiles { device_id } => {
            print_json(&device_profiles(client, &device_id).await?)?
        }
        Command::DeviceApps { device_id } => {
            print_json(&device_managed_apps(client, &device_id).await?)?
        }
        Command::TenantApps => print_json(&tenant_managed_apps(client).await?)?,
        Command::Action {
            device_id,
            action_id,
        } => print_json(&get_action(client, &device_id, &action_id).await?)?,
        Command::PerformAction { device_id, body } => {
            // Parse up front so a malformed payload fails before any request.
            let payload: serde_json::Value = serde_json::from_str(&body)?;
            print_json(&perform_action(client, &device_id, &payload).await?)?
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    let config = match MokiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let client = MokiClient::new(config);

    match run(&client, args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
