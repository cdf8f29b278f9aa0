use crate::club::Team;
use crate::league::{Division, DivisionMarkers};
use crate::r#match::MatchResult;
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

pub const POINTS_FOR_WIN: u16 = 3;
pub const POINTS_FOR_DRAW: u16 = 1;
pub const FORM_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

/// One ranked row of a standings table.
#[derive(Debug, Clone, Serialize)]
pub struct TeamStanding {
    pub team_id: u32,
    pub team: String,
    pub rank: u16,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: u16,
    /// Last results, most recent last.
    pub form: Vec<FormResult>,
}

impl TeamStanding {
    fn zeroed(team_id: u32, team: String) -> Self {
        TeamStanding {
            team_id,
            team,
            rank: 0,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: Vec::new(),
        }
    }

    fn record(&mut self, scored: u8, conceded: u8) {
        self.played += 1;
        self.goals_for += scored as i32;
        self.goals_against += conceded as i32;
        self.goal_difference = self.goals_for - self.goals_against;

        let outcome = if scored > conceded {
            self.won += 1;
            self.points += POINTS_FOR_WIN;
            FormResult::Win
        } else if scored == conceded {
            self.drawn += 1;
            self.points += POINTS_FOR_DRAW;
            FormResult::Draw
        } else {
            self.lost += 1;
            FormResult::Loss
        };

        self.form.push(outcome);
        if self.form.len() > FORM_LENGTH {
            self.form.remove(0);
        }
    }
}

/// Ranked standings for one set of teams. With no finished results every
/// row stays zeroed and the order is plain insertion order, which callers
/// must not present as a meaningful ranking.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct StandingsTable {
    pub rows: Vec<TeamStanding>,
}

impl StandingsTable {
    /// Folds finished match results into ranked rows. Results must be in
    /// chronological order so the form strip reads oldest to newest.
    pub fn from_results(teams: &[&Team], results: &[MatchResult]) -> Self {
        let mut rows: Vec<TeamStanding> = teams
            .iter()
            .map(|t| TeamStanding::zeroed(t.id, t.name.clone()))
            .collect();

        let index: HashMap<u32, usize> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.team_id, i))
            .collect();

        for result in results {
            if let Some(&i) = index.get(&result.home_team_id) {
                rows[i].record(result.home_goals, result.away_goals);
            }
            if let Some(&i) = index.get(&result.away_team_id) {
                rows[i].record(result.away_goals, result.home_goals);
            }
        }

        let mut table = StandingsTable { rows };
        table.sort_and_rank();
        table
    }

    /// Points desc, goal difference desc, goals scored desc. The sort is
    /// stable, so ties beyond that keep insertion order. Ranks are dense
    /// 1-based positions, reassigned after every sort.
    fn sort_and_rank(&mut self) {
        self.rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.goal_difference.cmp(&a.goal_difference))
                .then(b.goals_for.cmp(&a.goals_for))
        });

        for (position, row) in self.rows.iter_mut().enumerate() {
            row.rank = (position + 1) as u16;
        }
    }
}

/// Standings for one division bucket; ranks restart at 1 per division.
#[derive(Debug, Clone, Serialize)]
pub struct DivisionStandings {
    pub division_id: u32,
    pub division: String,
    pub rows: StandingsTable,
}

/// What a standings view renders: a single table, or one per division.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StandingsView {
    Flat(StandingsTable),
    Divisions(Vec<DivisionStandings>),
}

impl StandingsView {
    /// Division grouping is advisory display grouping only: buckets come
    /// from the explicit team-to-division relation, falling back to the
    /// name-marker migration for unmigrated teams. A result counts toward
    /// the bucket of the teams it involves.
    pub fn build(
        show_divisions: bool,
        divisions: &[Division],
        teams: &[&Team],
        results: &[MatchResult],
    ) -> StandingsView {
        if !show_divisions || divisions.len() < 2 {
            return StandingsView::Flat(StandingsTable::from_results(teams, results));
        }

        let buckets: HashMap<u32, Vec<&Team>> = teams
            .iter()
            .filter_map(|team| {
                DivisionMarkers::resolve(team, divisions).map(|division_id| (division_id, *team))
            })
            .into_group_map();

        let grouped = divisions
            .iter()
            .map(|division| {
                let members = buckets.get(&division.id).cloned().unwrap_or_default();
                DivisionStandings {
                    division_id: division.id,
                    division: division.name.clone(),
                    rows: StandingsTable::from_results(&members, results),
                }
            })
            .collect();

        StandingsView::Divisions(grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: u32, name: &str) -> Team {
        Team::new(id, 1, String::from(name))
    }

    fn result(home: u32, away: u32, home_goals: u8, away_goals: u8, matchday: u16) -> MatchResult {
        MatchResult {
            home_team_id: home,
            away_team_id: away,
            home_goals,
            away_goals,
            matchday,
        }
    }

    #[test]
    fn test_points_and_counters() {
        let teams = [team(1, "A"), team(2, "B"), team(3, "C")];
        let refs: Vec<&Team> = teams.iter().collect();
        let results = [
            result(1, 2, 2, 0, 1), // A beats B
            result(2, 3, 1, 1, 2), // B draws C
            result(3, 1, 0, 3, 3), // A beats C away
        ];

        let table = StandingsTable::from_results(&refs, &results);

        let top = &table.rows[0];
        assert_eq!(top.team_id, 1);
        assert_eq!(top.rank, 1);
        assert_eq!(top.played, 2);
        assert_eq!(top.won, 2);
        assert_eq!(top.points, 6);
        assert_eq!(top.goals_for, 5);
        assert_eq!(top.goals_against, 0);
        assert_eq!(top.goal_difference, 5);

        let second = &table.rows[1];
        assert_eq!(second.team_id, 2);
        assert_eq!(second.points, 1);
    }

    #[test]
    fn test_tie_breaks_goal_difference_then_goals_for() {
        let teams = [team(1, "A"), team(2, "B"), team(3, "C"), team(4, "D")];
        let refs: Vec<&Team> = teams.iter().collect();
        // A and B both win once (3 pts). A wins 3-0 (gd +3), B wins 1-0 (gd +1).
        // C and D both lose; C concedes less but scores more than D on equal gd.
        let results = [result(1, 3, 3, 0, 1), result(2, 4, 1, 0, 1)];

        let table = StandingsTable::from_results(&refs, &results);

        assert_eq!(table.rows[0].team_id, 1);
        assert_eq!(table.rows[1].team_id, 2);

        // equal points and gd: goals-for decides
        let teams2 = [team(1, "A"), team(2, "B")];
        let refs2: Vec<&Team> = teams2.iter().collect();
        let results2 = [result(1, 2, 3, 3, 1)];
        let table2 = StandingsTable::from_results(&refs2, &results2);
        // 3-3 draw: identical records, insertion order preserved
        assert_eq!(table2.rows[0].team_id, 1);
        assert_eq!(table2.rows[1].team_id, 2);
    }

    #[test]
    fn test_degenerate_no_results_keeps_insertion_order() {
        let teams = [team(7, "G"), team(3, "C"), team(5, "E")];
        let refs: Vec<&Team> = teams.iter().collect();

        let table = StandingsTable::from_results(&refs, &[]);

        let ids: Vec<u32> = table.rows.iter().map(|r| r.team_id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
        assert!(table.rows.iter().all(|r| r.played == 0 && r.points == 0));
        assert_eq!(table.rows[0].rank, 1);
        assert_eq!(table.rows[2].rank, 3);
    }

    #[test]
    fn test_form_keeps_last_five_most_recent_last() {
        let teams = [team(1, "A"), team(2, "B")];
        let refs: Vec<&Team> = teams.iter().collect();
        let mut results = Vec::new();
        // six meetings: A wins four, then draws, then loses
        for matchday in 1..=4 {
            results.push(result(1, 2, 1, 0, matchday));
        }
        results.push(result(1, 2, 0, 0, 5));
        results.push(result(2, 1, 2, 0, 6));

        let table = StandingsTable::from_results(&refs, &results);
        let row_a = table.rows.iter().find(|r| r.team_id == 1).unwrap();

        assert_eq!(
            row_a.form,
            vec![
                FormResult::Win,
                FormResult::Win,
                FormResult::Win,
                FormResult::Draw,
                FormResult::Loss,
            ]
        );
    }

    #[test]
    fn test_division_bucketing_with_fallback_and_per_bucket_ranks() {
        let divisions = vec![
            Division::new(1, 1, String::from("Primera Fuerza")),
            Division::new(2, 1, String::from("Segunda Fuerza")),
        ];
        let teams = [
            team(1, "Club X 1ra Fuerza"),
            team(2, "Club Y"), // no marker -> primary
            team(3, "Club Z 2da Fuerza"),
        ];
        let refs: Vec<&Team> = teams.iter().collect();
        let results = [result(2, 1, 2, 0, 1)];

        let view = StandingsView::build(true, &divisions, &refs, &results);

        let StandingsView::Divisions(buckets) = view else {
            panic!("expected division buckets");
        };
        assert_eq!(buckets.len(), 2);

        let primera = &buckets[0];
        assert_eq!(primera.division, "Primera Fuerza");
        assert_eq!(primera.rows.rows.len(), 2);
        assert_eq!(primera.rows.rows[0].team_id, 2);
        assert_eq!(primera.rows.rows[0].rank, 1);

        let segunda = &buckets[1];
        assert_eq!(segunda.rows.rows.len(), 1);
        assert_eq!(segunda.rows.rows[0].rank, 1);
    }

    #[test]
    fn test_flat_view_when_divisions_disabled() {
        let divisions = vec![
            Division::new(1, 1, String::from("Primera Fuerza")),
            Division::new(2, 1, String::from("Segunda Fuerza")),
        ];
        let teams = [team(1, "Club X 1ra Fuerza"), team(2, "Club Z 2da Fuerza")];
        let refs: Vec<&Team> = teams.iter().collect();

        let view = StandingsView::build(false, &divisions, &refs, &[]);

        assert!(matches!(view, StandingsView::Flat(_)));
    }
}
