use crate::core::Scraper;
use crate::episodes::{collect_logs, parse_episode, read_log, split_episodes, Diagnostic, Parsed, ParsedEpisode};
use crate::error::Result;
use crate::methods::enumerate_keys;
use crate::report::write_report;
use crate::stats::aggregate_all;
use std::path::PathBuf;
use std::time::Instant;

/// Per-file and timing chatter, kept below the default console level.
const PROGRESS: log::Level = log::Level::Debug;

/// Parsed episodes of every input, in input order, plus what was skipped.
#[derive(Debug, Default)]
pub struct Scrape {
    pub episodes: Vec<ParsedEpisode>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn scrape(files: &[PathBuf]) -> Result<Scrape> {
    let mut out = Scrape::default();
    for path in collect_logs(files)? {
        let contents = read_log(&path)?;
        let raw = split_episodes(&contents);
        log::log!(PROGRESS, "{}: {} episodes", path.display(), raw.len());
        for ep in &raw {
            match parse_episode(ep)? {
                Parsed::Episode(parsed) => out.episodes.push(parsed),
                Parsed::NoResult(Some(diag)) => {
                    log::log!(diag.level, "{diag}");
                    out.diagnostics.push(diag);
                }
                Parsed::NoResult(None) => log::trace!("episode without descriptors skipped"),
            }
        }
    }
    Ok(out)
}

pub fn run(scr: &Scraper) -> anyhow::Result<()> {
    let start = Instant::now();
    let Scrape {
        episodes,
        diagnostics,
    } = scrape(&scr.files)?;
    log::log!(
        PROGRESS,
        "parsed {} episodes, skipped {}, parse time: {:5.2?}",
        episodes.len(),
        diagnostics.len(),
        start.elapsed()
    );

    let keys = enumerate_keys(&scr.samples, &scr.methods);
    let aggregates = aggregate_all(&episodes, &keys, scr.allow_missing)?;

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &aggregates, scr.decimals)?;
    Ok(())
}
