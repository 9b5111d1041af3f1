use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::RawEpisode;
use crate::error::{Error, Result};
use crate::methods::{classify, AggregationKey, Descriptors, Method};

static REPLAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--> replay:[ \t]+(.+)").unwrap());
static MEMORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--> memory buffer:[ \t]+(.+)").unwrap());
static CONTEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Context .+: ").unwrap());

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedEpisode {
    pub method: Method,
    pub samples: u32,
    /// Accuracy in [0, 1], one per context in log order.
    pub accuracies: Vec<f64>,
}

impl ParsedEpisode {
    pub fn key(&self) -> AggregationKey {
        AggregationKey::new(self.method, self.samples)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// No context accuracy lines, the run probably died.
    Interrupted,
    /// Descriptors present but no dialect rule matched.
    Unrecognised,
}

/// A skipped episode, kept so callers can report it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: log::Level,
    pub reason: Reason,
    pub descriptors: Descriptors,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let replay = self.descriptors.replay.as_deref().unwrap_or("None");
        let memory = self.descriptors.memory.as_deref().unwrap_or("None");
        match self.reason {
            Reason::Interrupted => write!(
                f,
                "No results found for {replay} - {memory}, interrupted? Continuing"
            ),
            Reason::Unrecognised => write!(f, "Not recognised: {replay}, {memory}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Parsed {
    Episode(ParsedEpisode),
    NoResult(Option<Diagnostic>),
}

fn descriptor(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|caps| caps[1].trim_end().to_string())
}

fn context_accuracies(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for line in text.lines() {
        let Some(m) = CONTEXT.find(line) else {
            continue;
        };
        let acc = line[m.end()..].trim();
        if acc.is_empty() {
            continue;
        }
        let value = acc.parse::<f64>().map_err(|_| Error::Accuracy {
            value: acc.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

pub fn parse_episode(episode: &RawEpisode) -> Result<Parsed> {
    let text = episode.text();
    let descriptors = Descriptors {
        replay: descriptor(&REPLAY, text),
        memory: descriptor(&MEMORY, text),
    };

    let accuracies = context_accuracies(text)?;
    if accuracies.is_empty() {
        return Ok(Parsed::NoResult(Some(Diagnostic {
            level: log::Level::Warn,
            reason: Reason::Interrupted,
            descriptors,
        })));
    }
    if descriptors.is_empty() {
        return Ok(Parsed::NoResult(None));
    }

    match classify(&descriptors)? {
        Some((method, samples)) => Ok(Parsed::Episode(ParsedEpisode {
            method,
            samples,
            accuracies,
        })),
        None => Ok(Parsed::NoResult(Some(Diagnostic {
            level: log::Level::Warn,
            reason: Reason::Unrecognised,
            descriptors,
        }))),
    }
}
