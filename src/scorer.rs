use std::cmp::Ordering;

use crate::result::MatchResult;

/// How a single match ended from the point of view of one team.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
    NotInvolved,
}

impl Outcome {
    pub fn of(team: &str, result: &MatchResult) -> Self {
        if !result.involves(team) {
            return Outcome::NotInvolved;
        }
        let (scored, conceded) = if result.host == team {
            (result.goals.host, result.goals.away)
        } else {
            (result.goals.away, result.goals.host)
        };
        match scored.cmp(&conceded) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss | Outcome::NotInvolved => 0,
        }
    }
}

pub fn result_points(team: &str, result: &MatchResult) -> u32 {
    Outcome::of(team, result).points()
}

pub fn calculate_points(results: &[MatchResult], team: &str) -> u32 {
    results
        .iter()
        .fold(0, |total, result| total + result_points(team, result))
}

#[cfg(test)]
mod test {
    use super::*;

    fn season() -> Vec<MatchResult> {
        vec![
            MatchResult::new("Real Madrid", "Barcelona", 2, 1),
            MatchResult::new("Barcelona", "Real Madrid", 0, 0),
            MatchResult::new("Real Madrid", "Sevilla", 1, 3),
        ]
    }

    mod result_points_test {
        use super::*;

        #[test]
        fn host_win_scores_three() {
            let result = MatchResult::new("Real Madrid", "Barcelona", 2, 1);
            assert_eq!(result_points("Real Madrid", &result), 3);
            assert_eq!(result_points("Barcelona", &result), 0);
        }

        #[test]
        fn swapped_roles_score_three_for_new_winner() {
            let result = MatchResult::new("Barcelona", "Real Madrid", 1, 2);
            assert_eq!(result_points("Real Madrid", &result), 3);
            assert_eq!(result_points("Barcelona", &result), 0);
        }

        #[test]
        fn draw_scores_one_on_either_side() {
            for goals in 0..5 {
                let result = MatchResult::new("Real Madrid", "Barcelona", goals, goals);
                assert_eq!(result_points("Real Madrid", &result), 1);
                assert_eq!(result_points("Barcelona", &result), 1);
            }
        }

        #[test]
        fn non_participant_scores_nothing() {
            for (host_goals, away_goals) in [(0, 0), (2, 1), (1, 2)].iter() {
                let result = MatchResult::new("Real Madrid", "Barcelona", *host_goals, *away_goals);
                assert_eq!(Outcome::of("Sevilla", &result), Outcome::NotInvolved);
                assert_eq!(result_points("Sevilla", &result), 0);
            }
        }

        #[test]
        fn team_names_compare_exactly() {
            let result = MatchResult::new("Real Madrid B", "Barcelona", 0, 0);
            assert_eq!(result_points("Real Madrid", &result), 0);
            assert_eq!(result_points("real madrid b", &result), 0);
        }
    }

    mod calculate_points_test {
        use super::*;

        #[test]
        fn sums_win_draw_and_loss() {
            let results = season();
            assert_eq!(calculate_points(&results, "Real Madrid"), 4);
            assert_eq!(calculate_points(&results, "Barcelona"), 1);
            assert_eq!(calculate_points(&results, "Sevilla"), 3);
        }

        #[test]
        fn unknown_team_scores_zero() {
            assert_eq!(calculate_points(&season(), "Valencia"), 0);
            assert_eq!(calculate_points(&[], "Valencia"), 0);
        }

        #[test]
        fn total_is_bounded_by_three_per_match() {
            let results = season();
            for team in ["Real Madrid", "Barcelona", "Sevilla", "Valencia"].iter() {
                assert!(calculate_points(&results, team) <= 3 * results.len() as u32);
            }
        }

        #[test]
        fn order_does_not_change_total() {
            let mut results = season();
            let expected = calculate_points(&results, "Real Madrid");
            results.reverse();
            assert_eq!(calculate_points(&results, "Real Madrid"), expected);
            results.rotate_left(1);
            assert_eq!(calculate_points(&results, "Real Madrid"), expected);
        }
    }
}
