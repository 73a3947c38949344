use crate::stats::{OpponentRating, RatingGap, StatisticsReport};

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_ENTRY: &str = "None";

/// One labelled value of a rendered report
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub key: &'static str,
    pub value: String,
    /// False when the metric was undefined for the selection
    pub available: bool,
}

impl StatLine {
    fn new(key: &'static str, value: String) -> Self {
        Self { key, value, available: true }
    }

    fn optional(key: &'static str, value: Option<String>, missing: &str) -> Self {
        match value {
            Some(value) => Self::new(key, value),
            None => Self { key, value: missing.to_string(), available: false },
        }
    }
}

pub fn report_title(subject: &str) -> String {
    format!("=== Statistics for {subject} ===")
}

/// Display lines for every metric; `None` metrics render as "N/A"/"None", never as a number
pub fn stat_lines(match_count: usize, stats: &StatisticsReport) -> Vec<StatLine> {
    let mut lines = vec![
        StatLine::new("Matches played", match_count.to_string()),
        StatLine::new("Won/Lost", won_lost(stats.matches_won, stats.matches_lost)),
        StatLine::new("3-set W/L", won_lost(stats.three_set_won, stats.three_set_lost)),
        StatLine::new("Longest streak", stats.longest_win_streak.to_string()),
        StatLine::new("Tiebreak W/L", won_lost(stats.tiebreaks_won, stats.tiebreaks_lost)),
        StatLine::new(
            "Comebacks",
            format!("{} ({})", stats.comebacks, percent(stats.comeback_rate)),
        ),
        StatLine::new(
            "Conversions",
            format!("{} ({})", stats.conversion_count, percent(stats.conversion_rate)),
        ),
        StatLine::new("Set-win %", percent(stats.set_win_pct)),
        StatLine::new("Game-win %", percent(stats.game_win_pct)),
        StatLine::optional("Upset win %", stats.upset_win_pct.map(percent), NOT_AVAILABLE),
        StatLine::optional("Favoured win %", stats.favoured_win_pct.map(percent), NOT_AVAILABLE),
        StatLine::new(
            "Straight/3-set wins",
            format!("{}/{}", stats.straight_vs_three_ratio.0, stats.straight_vs_three_ratio.1),
        ),
        StatLine::new(
            "Close sets (7-5/5-7) W/L",
            won_lost(stats.close_set_won, stats.close_set_lost),
        ),
        StatLine::new("Bagels W/L (6-0)", won_lost(stats.bagels_won, stats.bagels_lost)),
        StatLine::new("Breadsticks W/L (6-1)", won_lost(stats.bread_won, stats.bread_lost)),
        StatLine::optional("Best beaten", stats.best_beaten.as_ref().map(opponent), NO_ENTRY),
        StatLine::optional("Worst lost to", stats.worst_lost_to.as_ref().map(opponent), NO_ENTRY),
        StatLine::optional(
            "Avg rating beaten",
            stats.avg_rating_beaten.map(|r| format!("{r:.2}")),
            NOT_AVAILABLE,
        ),
        StatLine::optional(
            "Avg rating lost to",
            stats.avg_rating_lost_to.map(|r| format!("{r:.2}")),
            NOT_AVAILABLE,
        ),
    ];

    let set_keys = ["Set 1 win %", "Set 2 win %", "Set 3 win %"];
    for (key, pct) in set_keys.into_iter().zip(stats.set_win_pct_by_index()) {
        lines.push(StatLine::optional(key, pct.map(percent), NOT_AVAILABLE));
    }

    lines.push(StatLine::optional(
        "Biggest upset win",
        stats.biggest_upset_win.as_ref().map(gap),
        NO_ENTRY,
    ));
    lines.push(StatLine::optional(
        "Worst upset loss",
        stats.biggest_bad_beat_loss.as_ref().map(gap),
        NO_ENTRY,
    ));

    lines
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// "w/l (w%)", zero share when nothing was played
fn won_lost(won: u32, lost: u32) -> String {
    let total = won + lost;
    let share = if total > 0 { f64::from(won) / f64::from(total) } else { 0.0 };
    format!("{won}/{lost} ({})", percent(share))
}

fn opponent(o: &OpponentRating) -> String {
    format!("{} (rating {:.2})", o.opponent, o.rating)
}

fn gap(g: &RatingGap) -> String {
    format!("vs {}, {:.2} difference", g.opponent, g.rating_diff)
}
