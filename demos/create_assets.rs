//! Creates one asset per name given on the command line.
//!
//! ```text
//! SNIPEIT_SERVER=https://develop.snipeitapp.com SNIPEIT_TOKEN=... \
//!     cargo run --example create_assets -- --status-id 2 --model-id 24 pc1 pc2
//! ```

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use snipeit::{resources::assets::NewAsset, ClientConfig, SnipeClient};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const PARAMETER_CONFIG: &str = "config";
const PARAMETER_STATUS_ID: &str = "status-id";
const PARAMETER_MODEL_ID: &str = "model-id";
const PARAMETER_NAMES: &str = "names";

fn command() -> Command {
    Command::new("create_assets")
        .about("Create assets in Snipe-IT")
        .arg(
            Arg::new(PARAMETER_CONFIG)
                .long(PARAMETER_CONFIG)
                .num_args(1)
                .required(false)
                .help("YAML file with server and token; the environment is used otherwise")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(PARAMETER_STATUS_ID)
                .long(PARAMETER_STATUS_ID)
                .num_args(1)
                .required(true)
                .help("Status label ID for the new assets")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(PARAMETER_MODEL_ID)
                .long(PARAMETER_MODEL_ID)
                .num_args(1)
                .required(true)
                .help("Model ID for the new assets")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(PARAMETER_NAMES)
                .action(ArgAction::Append)
                .required(true)
                .help("Asset names"),
        )
}

fn load_configuration(path: Option<&PathBuf>) -> Result<ClientConfig, snipeit::ConfigurationError> {
    match path {
        Some(path) => ClientConfig::load_from_file(path.clone()),
        None => ClientConfig::from_env().or_else(|e| {
            debug!("No usable environment ({}), trying the default file", e);
            ClientConfig::load_default()
        }),
    }
}

fn main() -> snipeit::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = command().get_matches();
    let configuration = load_configuration(matches.get_one::<PathBuf>(PARAMETER_CONFIG))?;
    let status_id = matches
        .get_one::<u64>(PARAMETER_STATUS_ID)
        .copied()
        .unwrap_or_default();
    let model_id = matches
        .get_one::<u64>(PARAMETER_MODEL_ID)
        .copied()
        .unwrap_or_default();

    let client = SnipeClient::new(configuration)?;
    for name in matches.get_many::<String>(PARAMETER_NAMES).into_iter().flatten() {
        let created = client.create_asset(&NewAsset {
            status_id,
            model_id,
            name: Some(name.clone()),
            ..Default::default()
        })?;
        if created.get("status").and_then(|s| s.as_str()) == Some("error") {
            warn!("Server refused asset {}", name);
        }
        println!("{}", serde_json::to_string_pretty(&created)?);
    }

    Ok(())
}
