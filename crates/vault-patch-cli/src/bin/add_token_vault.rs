use anyhow::Result;
use clap::Parser;
use vault_patch_cli::{run, Args};
use vault_patch_core::scripts::token_vault;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(&args, &token_vault::patch_set())?;
    Ok(())
}
