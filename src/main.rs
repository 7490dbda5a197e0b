use clap::Parser;
use rule_merge::config::{self, RulePaths};
use rule_merge::{MergeArgs, MergeError, merge};
use std::io::Write;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn run(cli: &MergeArgs) -> Result<RulePaths, MergeError> {
    let args = config::load(cli)?;
    let paths = RulePaths::resolve(&args, config::install_root)?;
    merge(&paths.target, &paths.merge)?;
    Ok(paths)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let paths = run(&MergeArgs::parse())?;
    writeln!(
        std::io::stdout().lock(),
        "Merged rules have been written to {}",
        paths.target.display()
    )?;
    Ok(())
}
