mod core;
mod episodes;
mod error;
mod methods;
mod report;
mod stats;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let scr = core::Scraper::parse();
    let _log_handle = log4rs::init_config(core::build_log_config(&scr)?)?;
    log::debug!("{:?}", scr);

    core::run(&scr)?;
    Ok(())
}
