use anyhow::Result;
use clap::Parser;
use vault_patch_cli::{run, Args};
use vault_patch_core::scripts::fix_accounts;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(&args, &fix_accounts::patch_set())?;
    Ok(())
}
