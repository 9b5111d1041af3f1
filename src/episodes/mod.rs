mod parse;
mod reader;
pub use parse::{parse_episode, Diagnostic, Parsed, ParsedEpisode, Reason};
pub use reader::{collect_logs, read_log};

/// Every run of the training script starts with this line.
pub const EPISODE_MARKER: &str = "PARAMETER STAMP *";

/// One run's slice of a log, marker included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEpisode {
    text: String,
}

impl RawEpisode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Cuts `text` at every marker occurrence. Anything before the first marker is dropped.
pub fn split_episodes(text: &str) -> Vec<RawEpisode> {
    let starts: Vec<usize> = text.match_indices(EPISODE_MARKER).map(|(i, _)| i).collect();
    starts
        .iter()
        .enumerate()
        .map(|(k, &start)| {
            let end = starts.get(k + 1).copied().unwrap_or(text.len());
            RawEpisode::new(&text[start..end])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_marker_no_episodes() {
        assert!(split_episodes("Context 1: 0.5\nContext 2: 0.4\n").is_empty());
        assert!(split_episodes("").is_empty());
    }

    #[test]
    fn one_episode_per_marker() {
        let text = "warmup noise\n\
                    PARAMETER STAMP * first\nContext 1: 0.1\n\
                    PARAMETER STAMP * second\nContext 1: 0.2\n\
                    PARAMETER STAMP * third\n";
        let episodes = split_episodes(text);
        assert_eq!(episodes.len(), 3);
        for ep in &episodes {
            assert!(ep.text().starts_with(EPISODE_MARKER));
            assert_eq!(ep.text().matches(EPISODE_MARKER).count(), 1);
        }
        assert_eq!(episodes[0].text(), "PARAMETER STAMP * first\nContext 1: 0.1\n");
        assert_eq!(episodes[2].text(), "PARAMETER STAMP * third\n");
    }

    #[test]
    fn preamble_is_discarded() {
        let episodes = split_episodes("setup\nmore setup\nPARAMETER STAMP * x\n");
        assert_eq!(episodes.len(), 1);
        assert!(!episodes[0].text().contains("setup"));
    }
}
