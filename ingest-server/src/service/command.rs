//! Command classification
//!
//! Turns the free text of a slash command into an explicit [`Command`].
//! Classification is stateless: each request is judged only on its own text
//! and the current pipeline list.

/// What the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No text; ask whether this is a new or existing pipeline
    Empty,
    /// Caller wants to create a new pipeline
    New,
    /// Caller wants to see the existing pipelines
    Existing,
    /// Caller picked a pipeline to upload to
    Select(PipelineSelector),
}

/// How the caller referred to a pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineSelector {
    /// 1-based position in the sorted pipeline list, known to be in range
    Position(usize),
    /// Literal pipeline name, which may not exist yet
    Name(String),
}

impl Command {
    /// Classify command text against the current sorted pipeline list
    pub fn classify(text: &str, pipelines: &[String]) -> Self {
        let text = text.trim();

        if text.is_empty() {
            return Command::Empty;
        }
        if text.eq_ignore_ascii_case("new") {
            return Command::New;
        }
        if text.eq_ignore_ascii_case("existing") {
            return Command::Existing;
        }

        Command::Select(PipelineSelector::parse(text, pipelines.len()))
    }
}

impl PipelineSelector {
    fn parse(text: &str, count: usize) -> Self {
        let position = text
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| text.parse::<usize>().ok())
            .flatten()
            .filter(|n| (1..=count).contains(n));

        match position {
            Some(n) => PipelineSelector::Position(n),
            None => PipelineSelector::Name(text.to_string()),
        }
    }

    /// Resolve to a pipeline name using the list it was classified against
    pub fn resolve<'a>(&'a self, pipelines: &'a [String]) -> &'a str {
        match self {
            PipelineSelector::Position(n) => n
                .checked_sub(1)
                .and_then(|i| pipelines.get(i))
                .map(String::as_str)
                .unwrap_or_default(),
            PipelineSelector::Name(name) => name,
        }
    }
}
