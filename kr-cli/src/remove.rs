use std::env;

use kr_core::prelude::*;
use kr_core::reaper::{self, ReaperConfig};

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        short,
        long,
        long_help = "namespace whose operator resources should be torn down",
        default_value = env::var(NAMESPACE_ENV_VAR).unwrap_or_else(|_| DEFAULT_NAMESPACE.into()),
    )]
    pub namespace: String,

    #[arg(
        long,
        long_help = "operator to remove (matched against the kudo.dev/operator label)",
        default_value = DEFAULT_OPERATOR_NAME,
    )]
    pub operator_name: String,
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    let config = ReaperConfig {
        namespace: args.namespace.clone(),
        operator_name: args.operator_name.clone(),
    };

    println!("removing operator {} from namespace {}...", config.operator_name, config.namespace);
    let report = reaper::run_teardown(client, &config).await?;

    println!("done: {} resources deleted, {} failed", report.deleted, report.failed);
    Ok(())
}
