use std::num::ParseIntError;
use thiserror::Error;

use crate::result::{Goals, MatchResult};

const TEAM_SEPARATOR: &str = " - ";

#[derive(Error, PartialEq, Debug)]
pub enum ParseError {
    #[error("Line has no \" - \" separator between host and away team")]
    MissingSeparator,
    #[error("Team name is empty")]
    EmptyTeam,
    #[error("Line has no score after the away team")]
    MissingScore,
    #[error("Score {0:?} is not of the form <host>:<away>")]
    MalformedScore(String),
    #[error("Goal count {value:?} is not a non-negative integer: {source}")]
    InvalidGoals {
        value: String,
        source: ParseIntError,
    },
}

/// Parses a line of the shape `<host> - <away> <hostGoals>:<awayGoals>`.
///
/// The host name ends at the first `" - "`. The score is the last
/// space-separated token, so both team names may contain spaces. Trailing
/// whitespace is ignored.
pub fn parse_line(line: &str) -> Result<MatchResult, ParseError> {
    let (host, rest) = line
        .trim_end()
        .split_once(TEAM_SEPARATOR)
        .ok_or(ParseError::MissingSeparator)?;
    if host.is_empty() {
        return Err(ParseError::EmptyTeam);
    }
    let (away, score) = rest.rsplit_once(' ').ok_or(ParseError::MissingScore)?;
    if away.is_empty() {
        return Err(ParseError::EmptyTeam);
    }
    Ok(MatchResult {
        host: host.to_owned(),
        away: away.to_owned(),
        goals: parse_score(score)?,
    })
}

fn parse_score(score: &str) -> Result<Goals, ParseError> {
    let (host, away) = score
        .split_once(':')
        .ok_or_else(|| ParseError::MalformedScore(score.to_owned()))?;
    Ok(Goals {
        host: parse_goals(host)?,
        away: parse_goals(away)?,
    })
}

fn parse_goals(value: &str) -> Result<u32, ParseError> {
    value.trim().parse().map_err(|source| ParseError::InvalidGoals {
        value: value.to_owned(),
        source,
    })
}
