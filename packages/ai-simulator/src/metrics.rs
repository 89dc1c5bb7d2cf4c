//! Metrics collection and output for simulation results.

use bisca::evaluation::{QualityBand, StatsSummary};
use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::{MetricsLevel, SeatSpec};

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub switches: Vec<SwitchMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub players: usize,
    pub seats: Vec<String>,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<i16>,
    pub team_scores: [i16; 2],
    /// Absent on a tie.
    pub winning_team: Option<u8>,
    pub avg_round_quality: f64,
    pub degraded_rounds: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u16,
    pub winner: u8,
    pub winning_team: u8,
    pub winning_card: Option<String>,
    pub points: u16,
    pub quality: f64,
    pub band: QualityBand,
    pub ratings: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub total_score: i16,
    pub rounds_won: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwitchMetrics {
    pub round_no: u16,
    pub seat: u8,
    pub to: String,
}

/// Build metrics from a match result.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    seats: &[SeatSpec],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
    level: &MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds: Vec<RoundMetrics> = result
        .evaluations
        .iter()
        .map(|e| RoundMetrics {
            round_no: e.round_no,
            winner: e.winning_player_id,
            winning_team: e.winning_team,
            winning_card: e.winning_card.map(|c| c.to_string()),
            points: e.points_earned,
            quality: e.overall_round_quality,
            band: e.quality_band,
            ratings: e.move_ratings.iter().map(|r| r.rating).collect(),
        })
        .collect();

    let player_metrics = seats
        .iter()
        .enumerate()
        .map(|(seat, spec)| PlayerMetrics {
            seat: seat as u8,
            ai_type: spec.to_string(),
            total_score: result.final_scores.get(seat).copied().unwrap_or(0),
            rounds_won: rounds.iter().filter(|r| usize::from(r.winner) == seat).count() as u32,
            stats: result.stats.get(seat).copied().flatten(),
        })
        .collect();

    let avg_round_quality = if rounds.is_empty() {
        0.0
    } else {
        rounds.iter().map(|r| r.quality).sum::<f64>() / rounds.len() as f64
    };
    let degraded_rounds = result.evaluations.iter().filter(|e| e.is_degraded()).count() as u32;

    let detailed = *level == MetricsLevel::Detailed;
    let switches = if detailed {
        result
            .switches
            .iter()
            .map(|s| SwitchMetrics {
                round_no: s.round_no,
                seat: s.seat,
                to: s.to.to_string(),
            })
            .collect()
    } else {
        Vec::new()
    };

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfig {
            players: seats.len(),
            seats: seats.iter().map(ToString::to_string).collect(),
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            team_scores: result.team_scores,
            winning_team: result.winning_team(),
            avg_round_quality,
            degraded_rounds,
            duration_ms,
        },
        rounds: if detailed { rounds } else { Vec::new() },
        player_metrics,
        switches,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub players: usize,
    /// Empty on a tie.
    pub winning_team: Option<u8>,
    pub team0_score: i16,
    pub team1_score: i16,
    pub avg_round_quality: f64,
    pub switches: usize,
    /// Seat specs joined with `|`, seat 0 first.
    pub seats: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            players: metrics.config.players,
            winning_team: metrics.result.winning_team,
            team0_score: metrics.result.team_scores[0],
            team1_score: metrics.result.team_scores[1],
            avg_round_quality: metrics.result.avg_round_quality,
            switches: metrics.switches.len(),
            seats: metrics.config.seats.join("|"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::Simulator;

    fn metrics(level: MetricsLevel) -> GameMetrics {
        let specs: Vec<SeatSpec> = ["analytical:adaptive", "random", "greedy:hard", "random"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let mut ais = Simulator::seats(&specs, 21, 1).unwrap();
        let result = Simulator::new(4, 21, 1)
            .unwrap()
            .simulate_game(&mut ais)
            .unwrap();
        build_game_metrics(1, 21, &specs, 1, &result, 1.0, &level)
    }

    #[test]
    fn detailed_metrics_cover_every_round() {
        let m = metrics(MetricsLevel::Detailed);
        assert_eq!(m.rounds.len(), 9);
        assert_eq!(m.player_metrics.len(), 4);
        let won: u32 = m.player_metrics.iter().map(|p| p.rounds_won).sum();
        assert_eq!(won, 9);
        assert!(m.rounds.iter().all(|r| r.ratings.len() == 4));
        assert_eq!(
            m.result.team_scores[0] + m.result.team_scores[1],
            m.result.final_scores.iter().sum::<i16>()
        );
    }

    #[test]
    fn basic_metrics_omit_rounds() {
        let m = metrics(MetricsLevel::Basic);
        assert!(m.rounds.is_empty());
        assert!(m.switches.is_empty());
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("rounds").is_none());
        assert_eq!(json["config"]["seats"][1], "random");
    }

    #[test]
    fn csv_row_joins_seats() {
        let m = metrics(MetricsLevel::Basic);
        let row = CsvSummaryRow::from(&m);
        assert_eq!(row.players, 4);
        assert_eq!(row.seats, "analytical:adaptive|random|greedy:hard|random");
    }
}
