use regex::Regex;
use std::sync::LazyLock;

use super::Method;
use crate::error::{Error, Result};

static RANDOM_BUFFER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^b([0-9]+)random").unwrap());
static HERDING_BUFFER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.*b([0-9]+)herding").unwrap());

/// The `--> replay:` and `--> memory buffer:` values of one episode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Descriptors {
    pub replay: Option<String>,
    pub memory: Option<String>,
}

impl Descriptors {
    pub fn is_empty(&self) -> bool {
        self.replay.is_none() && self.memory.is_none()
    }

    fn replay_contains(&self, needle: &str) -> bool {
        self.replay.as_deref().is_some_and(|r| r.contains(needle))
    }
}

struct Rule {
    method: Method,
    matches: fn(&Descriptors) -> bool,
    buffer: &'static LazyLock<Regex>,
}

static RULES: [Rule; 4] = [
    Rule {
        method: Method::Er,
        matches: |d| d.replay.as_deref() == Some("buffer"),
        buffer: &RANDOM_BUFFER,
    },
    Rule {
        method: Method::AGem,
        matches: |d| d.replay_contains("A-GEM"),
        buffer: &RANDOM_BUFFER,
    },
    Rule {
        method: Method::Cfa,
        matches: |d| d.replay_contains("CFA"),
        buffer: &RANDOM_BUFFER,
    },
    Rule {
        method: Method::ICarl,
        matches: |d| d.replay.is_none() && d.memory.is_some(),
        buffer: &HERDING_BUFFER,
    },
];

impl Rule {
    fn samples(&self, memory: Option<&str>) -> Result<u32> {
        memory
            .and_then(|m| self.buffer.captures(m))
            .and_then(|caps| caps[1].parse().ok())
            .ok_or_else(|| Error::SampleCount {
                method: self.method,
                memory: memory.map(str::to_string),
            })
    }
}

/// First matching rule decides the method. `Ok(None)` when no rule applies.
pub fn classify(desc: &Descriptors) -> Result<Option<(Method, u32)>> {
    match RULES.iter().find(|rule| (rule.matches)(desc)) {
        Some(rule) => {
            let samples = rule.samples(desc.memory.as_deref())?;
            Ok(Some((rule.method, samples)))
        }
        None => Ok(None),
    }
}
