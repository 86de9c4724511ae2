use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use vault_patch_core::scripts::DEFAULT_TARGET;
use vault_patch_core::{run_patch_set, PatchSet, RunOptions, RunOutcome};

/// Arguments shared by both patch binaries. With none given, the target is
/// the transaction builder under the current directory and missing patterns
/// are skipped silently.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = DEFAULT_TARGET, help = "File to patch in place")]
    pub file: PathBuf,

    #[arg(long, help = "Apply patches in memory and report, without writing")]
    pub dry_run: bool,

    #[arg(long, help = "Fail instead of skipping patches whose search text is missing")]
    pub strict: bool,
}

impl Args {
    pub fn options(&self) -> RunOptions {
        RunOptions {
            dry_run: self.dry_run,
            strict: self.strict,
        }
    }
}

pub fn run(args: &Args, set: &PatchSet) -> Result<RunOutcome> {
    run_patch_set(&args.file, set, args.options())
}
