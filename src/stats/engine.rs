use super::perspective::{SetGames, SubjectView};
use super::types::{OpponentRating, RatingGap, StatisticsReport};
use crate::domain::MAX_SETS;

/// Derives every report metric from one subject's match views.
/// Never fails: empty subsets resolve to `None`, empty denominators to `0.0` where documented.
pub fn compute_statistics(views: &[SubjectView]) -> StatisticsReport {
    let wins: Vec<&SubjectView> = views.iter().filter(|v| v.won).collect();
    let losses: Vec<&SubjectView> = views.iter().filter(|v| !v.won).collect();

    // 1. Turning points after the first set
    let (comebacks, comeback_rate) =
        conditional_wins(views, |first| first.subject < first.opponent);
    let (conversion_count, conversion_rate) =
        conditional_wins(views, |first| first.subject > first.opponent);

    // 2. Set and game shares
    let tally = SetTally::from_views(views);
    let (games_won, games_lost) = count_games(views);

    // 3. Rating-relative performance
    let upset_rows: Vec<&SubjectView> = views
        .iter()
        .filter(|v| v.opponent_rating < v.subject_rating)
        .collect();
    let favoured_rows: Vec<&SubjectView> = views
        .iter()
        .filter(|v| v.opponent_rating >= v.subject_rating)
        .collect();

    let three_set_won = count(&wins, |v| v.went_three_sets);
    let three_set_lost = count(&losses, |v| v.went_three_sets);
    let [set1_win_pct, set2_win_pct, set3_win_pct] = tally.win_pct_by_index();

    StatisticsReport {
        matches_won: wins.len() as u32,
        matches_lost: losses.len() as u32,
        three_set_won,
        three_set_lost,
        longest_win_streak: longest_win_streak(views),
        tiebreaks_won: count_sets(views, |s| s.is(7, 6)),
        tiebreaks_lost: count_sets(views, |s| s.is(6, 7)),
        comebacks,
        comeback_rate,
        conversion_count,
        conversion_rate,

        set_win_pct: ratio(tally.total_won(), tally.total_played()).unwrap_or(0.0),
        game_win_pct: ratio(games_won, games_won + games_lost).unwrap_or(0.0),
        upset_win_pct: win_rate(&upset_rows),
        favoured_win_pct: win_rate(&favoured_rows),
        straight_vs_three_ratio: (wins.len() as u32 - three_set_won, three_set_won),
        close_set_won: count_sets(views, |s| s.is(7, 5)),
        close_set_lost: count_sets(views, |s| s.is(5, 7)),
        bagels_won: count_sets(views, |s| s.is(6, 0)),
        bread_won: count_sets(views, |s| s.is(6, 1)),
        bagels_lost: count_sets(views, |s| s.is(0, 6)),
        bread_lost: count_sets(views, |s| s.is(1, 6)),
        set1_win_pct,
        set2_win_pct,
        set3_win_pct,

        best_beaten: first_extreme(&wins, |v| v.opponent_rating, |a, b| a < b)
            .map(opponent_rating),
        worst_lost_to: first_extreme(&losses, |v| v.opponent_rating, |a, b| a > b)
            .map(opponent_rating),
        avg_rating_beaten: mean_opponent_rating(&wins),
        avg_rating_lost_to: mean_opponent_rating(&losses),
        biggest_upset_win: largest_gap(&wins, |v| v.subject_rating - v.opponent_rating),
        biggest_bad_beat_loss: largest_gap(&losses, |v| v.opponent_rating - v.subject_rating),
    }
}

/// Played and won set counts per set slot
struct SetTally {
    played: [u32; MAX_SETS],
    won: [u32; MAX_SETS],
}

impl SetTally {
    fn from_views(views: &[SubjectView]) -> Self {
        let mut tally = Self {
            played: [0; MAX_SETS],
            won: [0; MAX_SETS],
        };

        for view in views {
            for (idx, set) in view.sets.iter().enumerate() {
                if let Some(set) = set {
                    tally.played[idx] += 1;
                    if set.subject_won() {
                        tally.won[idx] += 1;
                    }
                }
            }
        }

        tally
    }

    fn total_played(&self) -> u32 {
        self.played.iter().sum()
    }

    fn total_won(&self) -> u32 {
        self.won.iter().sum()
    }

    fn win_pct_by_index(&self) -> [Option<f64>; MAX_SETS] {
        std::array::from_fn(|idx| ratio(self.won[idx], self.played[idx]))
    }
}

/// Longest run of wins in date order; same-day matches keep their input order
pub fn longest_win_streak(views: &[SubjectView]) -> u32 {
    let mut ordered: Vec<&SubjectView> = views.iter().collect();
    ordered.sort_by_key(|v| v.match_date);

    let mut longest = 0;
    let mut current = 0;
    for view in ordered {
        current = if view.won { current + 1 } else { 0 };
        longest = longest.max(current);
    }
    longest
}

/// Among matches whose first set satisfies `first_set`, how many were won and at what rate
fn conditional_wins(views: &[SubjectView], first_set: impl Fn(&SetGames) -> bool) -> (u32, f64) {
    let eligible: Vec<&SubjectView> = views
        .iter()
        .filter(|v| v.set(0).is_some_and(|s| first_set(&s)))
        .collect();
    let won = count(&eligible, |v| v.won);

    (won, ratio(won, eligible.len() as u32).unwrap_or(0.0))
}

fn count_sets(views: &[SubjectView], predicate: impl Fn(&SetGames) -> bool) -> u32 {
    views
        .iter()
        .flat_map(SubjectView::played_sets)
        .filter(|s| predicate(s))
        .count() as u32
}

fn count_games(views: &[SubjectView]) -> (u32, u32) {
    views
        .iter()
        .flat_map(SubjectView::played_sets)
        .fold((0, 0), |(won, lost), s| {
            (won + u32::from(s.subject), lost + u32::from(s.opponent))
        })
}

fn count(rows: &[&SubjectView], predicate: impl Fn(&SubjectView) -> bool) -> u32 {
    rows.iter().filter(|v| predicate(v)).count() as u32
}

fn win_rate(rows: &[&SubjectView]) -> Option<f64> {
    ratio(count(rows, |v| v.won), rows.len() as u32)
}

fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(f64::from(numerator) / f64::from(denominator))
    }
}

fn mean_opponent_rating(rows: &[&SubjectView]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let total: f64 = rows.iter().map(|v| v.opponent_rating).sum();
    Some(total / rows.len() as f64)
}

/// First row whose key beats every other under `better`; ties keep the earliest row
fn first_extreme<'a>(
    rows: &[&'a SubjectView],
    key: impl Fn(&SubjectView) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Option<&'a SubjectView> {
    rows.iter().copied().fold(None, |best, view| match best {
        Some(current) if !better(key(view), key(current)) => Some(current),
        _ => Some(view),
    })
}

/// Row with the largest strictly positive rating difference
fn largest_gap(rows: &[&SubjectView], diff: impl Fn(&SubjectView) -> f64) -> Option<RatingGap> {
    let positive: Vec<&SubjectView> = rows.iter().copied().filter(|v| diff(v) > 0.0).collect();

    first_extreme(&positive, &diff, |a, b| a > b).map(|v| RatingGap {
        opponent: v.opponent_id.clone(),
        rating_diff: diff(v),
    })
}

fn opponent_rating(view: &SubjectView) -> OpponentRating {
    OpponentRating {
        opponent: view.opponent_id.clone(),
        rating: view.opponent_rating,
    }
}
