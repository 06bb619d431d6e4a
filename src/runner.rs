use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::logger::Logger;
use crate::parser::{parse_line, ParseError};
use crate::result::MatchResult;
use crate::scorer::calculate_points;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Input file {path:?} could not be read: {source}")]
    FileError { path: PathBuf, source: io::Error },
    #[error("Line {line_number} ({line:?}) could not be parsed: {source}")]
    Parse {
        line_number: usize,
        line: String,
        source: ParseError,
    },
}

/// What the loader does with a line that does not parse.
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Strictness {
    /// Warn and skip the line.
    #[default]
    Lenient,
    /// Abort on the first bad line.
    Strict,
}

/// Parses every non-empty line of `text`, in order.
pub fn load_results<L: Logger>(
    text: &str,
    strictness: Strictness,
    logger: &L,
) -> Result<Vec<MatchResult>, RunnerError> {
    let mut results = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(result) => results.push(result),
            Err(source) => {
                let e = RunnerError::Parse {
                    line_number: index + 1,
                    line: line.to_owned(),
                    source,
                };
                match strictness {
                    Strictness::Strict => return Err(e),
                    Strictness::Lenient => logger.warn(format!("Skipping line: {}", e)),
                }
            }
        }
    }
    Ok(results)
}

#[async_trait]
pub trait Runner {
    async fn run(&mut self) -> Result<u32, RunnerError>;
}

pub struct FilePointsRunner<L: Logger> {
    input_file: PathBuf,
    team: String,
    strictness: Strictness,
    logger: L,
}

impl<L: Logger + Default> FilePointsRunner<L> {
    pub fn new(input_file: &str, team: &str, strictness: Strictness) -> Self {
        Self {
            input_file: PathBuf::from(input_file),
            team: team.to_owned(),
            strictness,
            logger: L::default(),
        }
    }
}

#[async_trait]
impl<L: Logger + Send + Sync> Runner for FilePointsRunner<L> {
    async fn run(&mut self) -> Result<u32, RunnerError> {
        let text = tokio::fs::read_to_string(&self.input_file)
            .await
            .map_err(|source| RunnerError::FileError {
                path: self.input_file.clone(),
                source,
            })?;
        let results = load_results(&text, self.strictness, &self.logger)?;
        Ok(calculate_points(&results, &self.team))
    }
}
