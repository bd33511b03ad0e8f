use anyhow::Error;
use clap::Parser;
use context::Context;
use dotenv::dotenv;
use types::*;

mod commands;
mod context;
mod spec;
mod types;
mod utils;
mod validations;

fn main() -> Result<(), Error> {
    dotenv().ok();
    pretty_env_logger::init();

    let cli = Cli::parse();
    let ctx = Context::init(cli.delegate.clone());
    commands::execute_cmd(&ctx, &cli.command)?;

    Ok(())
}
