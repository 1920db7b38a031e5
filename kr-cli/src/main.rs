#![cfg_attr(coverage, feature(coverage_attribute))]
mod completions;
mod remove;

use clap::{
    crate_version,
    CommandFactory,
    Parser,
    Subcommand,
};
use kr_core::logging;
use kr_core::prelude::*;

#[derive(Parser)]
#[command(
    about = "command-line app for tearing down KUDO-managed operators",
    version,
    propagate_version = true
)]
struct KrCommandRoot {
    #[command(subcommand)]
    subcommand: KrSubcommand,

    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

#[derive(Subcommand)]
enum KrSubcommand {
    #[command(about = "generate shell completions for krctl")]
    Completions(completions::Args),

    #[command(
        about = "delete an operator's instances, plan executions, operator versions, and the operator itself",
        visible_aliases = &["rm", "teardown"],
    )]
    Remove(remove::Args),

    #[command(about = "kudo-reaper version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = KrCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    // Only the remove subcommand talks to the cluster, so the kube client is
    // constructed inside the match; completions and version keep working on
    // machines with no kubeconfig at all.
    match &args.subcommand {
        KrSubcommand::Completions(args) => completions::cmd(args, KrCommandRoot::command()),
        KrSubcommand::Remove(args) => {
            let client = kube::Client::try_default().await?;
            remove::cmd(args, client).await
        },
        KrSubcommand::Version => {
            println!("krctl {}", crate_version!());
            Ok(())
        },
    }
}
