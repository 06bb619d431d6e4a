#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Goals {
    pub host: u32,
    pub away: u32,
}

/// A single finished match, as read from one line of the stats file.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MatchResult {
    pub host: String,
    pub away: String,
    pub goals: Goals,
}

impl MatchResult {
    pub fn new(host: &str, away: &str, host_goals: u32, away_goals: u32) -> Self {
        Self {
            host: host.to_owned(),
            away: away.to_owned(),
            goals: Goals {
                host: host_goals,
                away: away_goals,
            },
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.host == team || self.away == team
    }
}
