//! The AI decision engine.
//!
//! Leading: every card in hand is scored with a shared base heuristic
//! (exposed points, capture risk, trump cost), contextual bonuses (late
//! game, stake), the top-trump timing rule, and the active personality's
//! adjustment; the best score is played.
//!
//! Responding: only legal cards are scored. A card that takes the round is
//! worth the table plus its own points, less a capped discount for
//! spending a top trump cheaply. When the engine is winning more rounds
//! than its difficulty targets, it may deliberately concede with a
//! pointless card.
//!
//! Randomness (jitter, concession rolls, the Unpredictable personality,
//! trait perturbation) all flows through the one injected RNG.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::ai::config::AiConfig;
use crate::ai::deception::{self, capture_discount, lead_discount};
use crate::ai::difficulty::Difficulty;
use crate::ai::memory::{Observation, OpponentMemory, Tendency};
use crate::ai::pattern_store::{PatternStore, StakeBucket};
use crate::ai::personality::{CandidateView, Personality};
use crate::ai::profile::OpponentProfile;
use crate::ai::recent_actions::{ActionContext, Role};
use crate::ai::risk::{capture_risk, unseen_cards};
use crate::ai::trait_def::{AiError, AiPlayer};
use crate::ai::trait_evolution::{MoveCategory, Traits};
use crate::domain::cards_logic::{card_points, legal_response_indices};
use crate::domain::rules::{team_of, total_rounds_for};
use crate::domain::state::{GameState, RoundRecord, Seat, TeamId};
use crate::domain::tricks::{resolve_round, team_representative};
use crate::domain::{Card, PlayerId, Rank, Suit};
use crate::evaluation::{PlayerMove, RoundEvaluator, StatsSummary};

const ENGINE_NAME: &str = "Engine";

pub const EARLY_PHASE: f64 = 0.33;
pub const LATE_PHASE: f64 = 0.66;
const TOP_TRUMP_EARLY_PENALTY: f64 = 8.0;
const TOP_TRUMP_LATE_BONUS: f64 = 4.0;
const TRUMP_LEAD_COST: f64 = 2.0;
const SAFE_LEAD_BONUS: f64 = 1.5;
const RISK_WEIGHT: f64 = 0.5;
const STAKE_BONUS: f64 = 0.3;
const WIN_BASE: f64 = 10.0;
const PARTNER_BASE: f64 = 5.0;
const LOSS_WEIGHT: f64 = 1.5;
const WASTED_TRUMP: f64 = 2.0;
const OVER_COMMIT_CAP: f64 = 6.0;
const FEW_TRUMPS: usize = 2;
const SMALL_TABLE: u16 = 5;
const CONCESSION_BONUS: f64 = 15.0;
const CONCESSION_WIN_PENALTY: f64 = 10.0;
const MIN_ROUNDS_FOR_CONCESSION: usize = 2;
/// Opponent predictability above which Adaptive counters its tendency.
pub const PREDICTABILITY_THRESHOLD: f64 = 0.7;
const LARGE_DEFICIT: i16 = -20;
const DEFICIT: i16 = -10;
const COMFORTABLE_LEAD: i16 = 10;
const STALE_ROUNDS: u16 = 4;

/// The engine's most recent choice.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub seat: Seat,
    pub round_no: u16,
    pub hand_index: usize,
    pub card: Card,
    pub score: f64,
    pub role: Role,
    pub category: MoveCategory,
    pub personality: Personality,
    /// The uniform-random no-legal-move fallback was taken.
    pub random_fallback: bool,
    /// The engine chose to concede toward its target win rate.
    pub conceded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchReason {
    /// The opponent is predictable; play against its dominant tendency.
    CounterTendency(Tendency),
    LargeDeficit,
    Deficit,
    ComfortableLead,
    CloseGame,
    /// Same personality held too long in a close game.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalitySwitch {
    pub round_no: u16,
    pub from: Personality,
    pub to: Personality,
    pub reason: SwitchReason,
}

/// Personality an Adaptive engine should play next.
pub fn select_personality(
    current: Personality,
    rounds_held: u16,
    differential: i16,
    progress: f64,
    predictability: f64,
    dominant: Option<Tendency>,
) -> (Personality, SwitchReason) {
    if predictability > PREDICTABILITY_THRESHOLD {
        if let Some(tendency) = dominant {
            let counter = match tendency {
                Tendency::PlaysAggressively => Personality::TrapSetter,
                Tendency::AvoidsRisk => Personality::Aggressive,
                Tendency::SavesTrumps => Personality::Greedy,
            };
            return (counter, SwitchReason::CounterTendency(tendency));
        }
    }
    if differential <= LARGE_DEFICIT {
        let p = if progress >= LATE_PHASE {
            Personality::Aggressive
        } else {
            Personality::TrapSetter
        };
        return (p, SwitchReason::LargeDeficit);
    }
    if differential <= DEFICIT {
        return (Personality::Greedy, SwitchReason::Deficit);
    }
    if differential >= COMFORTABLE_LEAD {
        return (Personality::Cautious, SwitchReason::ComfortableLead);
    }
    if rounds_held >= STALE_ROUNDS {
        let p = if current == Personality::Unpredictable {
            Personality::Analytical
        } else {
            Personality::Unpredictable
        };
        return (p, SwitchReason::Stale);
    }
    if current == Personality::Unpredictable {
        return (current, SwitchReason::CloseGame);
    }
    (Personality::Analytical, SwitchReason::CloseGame)
}

/// Discount against spending a top trump when trumps are short or the table is cheap.
pub fn over_commit_discount(card: Card, trump: Suit, trumps_in_hand: usize, table_value: u16) -> f64 {
    if card.suit != trump || !card.is_high_value() {
        return 0.0;
    }
    let mut discount: f64 = 0.0;
    if trumps_in_hand <= FEW_TRUMPS {
        discount += 3.0;
    }
    if table_value < SMALL_TABLE {
        discount += 4.0;
    }
    discount.min(OVER_COMMIT_CAP)
}

/// Play currently holding the round, seat and card.
fn winning_play(table: &[(Seat, Card)], trump: Suit, players: usize) -> Option<(Seat, Card)> {
    let plays: Vec<(TeamId, Card)> = table
        .iter()
        .map(|&(seat, card)| (team_of(seat, players), card))
        .collect();
    match resolve_round(&plays, trump) {
        Ok(outcome) => table.get(outcome.winning_index).copied(),
        Err(_) => {
            let cards: Vec<Card> = table.iter().map(|&(_, c)| c).collect();
            let led = cards.first()?.suit;
            team_representative(&cards, led, trump).and_then(|i| table.get(i).copied())
        }
    }
}

/// First index with the highest score.
fn best_of(scored: &[(usize, f64)]) -> Option<(usize, f64)> {
    scored.iter().copied().fold(None, |best, cur| match best {
        Some(b) if b.1 >= cur.1 => Some(b),
        _ => Some(cur),
    })
}

struct Binding {
    seat: Seat,
    state: GameState,
    processed_rounds: usize,
    /// Rates every completed round for `get_stats`.
    evaluator: RoundEvaluator,
}

/// Everything a single decision reads, gathered up front.
struct TurnView {
    seat: Seat,
    players: usize,
    round_no: u16,
    hand: Vec<Card>,
    trump: Suit,
    progress: f64,
    stake: u16,
    unseen: Vec<Card>,
    voids: Vec<Suit>,
    differential: i16,
    rounds_played: usize,
    rounds_won: usize,
}

impl TurnView {
    fn trumps_in_hand(&self) -> usize {
        self.hand.iter().filter(|c| c.suit == self.trump).count()
    }
}

/// Heuristic engine bound to one seat.
pub struct AiEngine<R: RngCore = StdRng> {
    base_personality: Personality,
    personality: Personality,
    difficulty: Difficulty,
    rng: R,
    memory: OpponentMemory,
    patterns: PatternStore,
    binding: Option<Binding>,
    last_decision: Option<Decision>,
    rounds_in_personality: u16,
    switches: Vec<PersonalitySwitch>,
}

impl AiEngine<StdRng> {
    pub const NAME: &'static str = ENGINE_NAME;
    pub const VERSION: &'static str = "1.0.0";

    /// Create an engine seeded from `seed`, or from OS entropy when absent.
    pub fn new(personality: Personality, difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(personality, difficulty, rng)
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(config.personality(), config.difficulty(), config.seed())
            .with_decay_factor(config.decay_factor())
    }
}

impl<R: RngCore> AiEngine<R> {
    pub fn with_rng(personality: Personality, difficulty: Difficulty, rng: R) -> Self {
        Self {
            base_personality: personality,
            personality,
            difficulty,
            rng,
            memory: OpponentMemory::default(),
            patterns: PatternStore::new(),
            binding: None,
            last_decision: None,
            rounds_in_personality: 0,
            switches: Vec::new(),
        }
    }

    pub fn with_decay_factor(mut self, decay_factor: f64) -> Self {
        self.memory = OpponentMemory::new(decay_factor);
        self
    }

    /// Hand a persisted cross-match store to the engine.
    pub fn with_pattern_store(mut self, store: PatternStore) -> Self {
        self.patterns = store;
        self
    }

    /// Move the cross-match store out, leaving an empty one behind.
    pub fn take_pattern_store(&mut self) -> PatternStore {
        std::mem::take(&mut self.patterns)
    }

    pub fn pattern_store(&self) -> &PatternStore {
        &self.patterns
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn memory(&self) -> &OpponentMemory {
        &self.memory
    }

    pub fn seat(&self) -> Option<Seat> {
        self.binding.as_ref().map(|b| b.seat)
    }

    pub fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }

    pub fn switches(&self) -> &[PersonalitySwitch] {
        &self.switches
    }

    /// Fold the finished match into the opponent's long-term profile.
    pub fn finish_match(&self, profile: &mut OpponentProfile) -> Result<(), AiError> {
        let binding = self.binding.as_ref().ok_or(AiError::EngineNotInitialized)?;
        let state = &binding.state;
        let differential = state.score_differential(binding.seat);
        let own = state.team_score(state.team_of(binding.seat));
        profile.record_match(&self.memory, own - differential, differential < 0);
        Ok(())
    }

    fn turn_view(&self, table: &[(Seat, Card)]) -> Result<TurnView, AiError> {
        let binding = self.binding.as_ref().ok_or(AiError::EngineNotInitialized)?;
        let state = &binding.state;
        let seat = binding.seat;
        let hand = state.hand(seat)?.to_vec();
        if hand.is_empty() {
            return Err(AiError::EmptyHand { seat });
        }
        let players = state.player_count();
        let my_team = team_of(seat, players);
        let unseen = unseen_cards(
            hand.iter()
                .copied()
                .chain(state.cards_played())
                .chain(table.iter().map(|&(_, c)| c)),
        );
        let rounds_won = state
            .round_history
            .iter()
            .filter(|r| r.winner.map(|w| team_of(w, players)) == Some(my_team))
            .count();
        Ok(TurnView {
            seat,
            players,
            round_no: state.current_round,
            hand,
            trump: state.trump,
            progress: state.round_progress(),
            stake: state.round_stake,
            unseen,
            voids: self.memory.voids().collect(),
            differential: state.score_differential(seat),
            rounds_played: state.round_history.len(),
            rounds_won,
        })
    }

    /// Cards held by opponents who have not yet played this round.
    fn opponent_cards_to_come(&self, view: &TurnView, table: &[(Seat, Card)]) -> usize {
        let Some(binding) = self.binding.as_ref() else {
            return 0;
        };
        let my_team = team_of(view.seat, view.players);
        binding
            .state
            .players
            .iter()
            .enumerate()
            .map(|(s, p)| (s as Seat, p))
            .filter(|(s, _)| *s != view.seat && team_of(*s, view.players) != my_team)
            .filter(|(s, _)| !table.iter().any(|(played, _)| played == s))
            .map(|(_, p)| p.hand.len())
            .sum()
    }

    fn jitter(&mut self) -> f64 {
        let r = self.difficulty.profile().randomness;
        if r > 0.0 {
            self.rng.random_range(-r..r)
        } else {
            0.0
        }
    }

    fn trait_bias(&self, card: Card, is_trump: bool, risk: f64, stake: u16) -> f64 {
        let t = self.memory.traits().traits();
        let mut bias = Traits::centered(t.aggressiveness) * f64::from(card.points()) * 0.2;
        bias -= Traits::centered(t.risk_aversion) * risk * 2.0;
        if card.points() == 0 && !is_trump && StakeBucket::of(stake) != StakeBucket::Low {
            bias += Traits::centered(t.deception_tendency) * 2.0;
        }
        bias
    }

    fn score_lead(&mut self, view: &TurnView, card: Card, opponents_held: usize) -> f64 {
        let profile = self.difficulty.profile();
        let is_trump = card.suit == view.trump;
        let points = f64::from(card.points());
        let stake = f64::from(view.stake);
        let risk = capture_risk(card, view.trump, &view.unseen, &view.voids, opponents_held);

        let mut score = points * (1.0 - risk) * 0.5 - points * risk;
        if is_trump {
            score -= TRUMP_LEAD_COST;
        } else if card.points() == 0 {
            score += SAFE_LEAD_BONUS;
        }
        score -= profile.risk_aversion * risk * (points + stake * 0.5) * RISK_WEIGHT;

        if view.progress >= LATE_PHASE {
            score += points * (1.0 - risk) * 0.3;
        }
        if view.stake >= SMALL_TABLE && risk < 0.3 {
            score += STAKE_BONUS * stake;
        }
        if is_trump && matches!(card.rank, Rank::Ace | Rank::Seven) {
            if view.progress < EARLY_PHASE {
                score -= TOP_TRUMP_EARLY_PENALTY;
            } else if view.progress >= LATE_PHASE {
                score += TOP_TRUMP_LATE_BONUS;
            }
        }

        let candidate = CandidateView {
            card,
            role: Role::Leader,
            is_trump,
            wins_now: false,
            table_value: view.stake,
            capture_risk: risk,
            progress: view.progress,
            trumps_in_hand: view.trumps_in_hand(),
        };
        score += self.personality.adjust(&candidate, &mut self.rng);

        if self.difficulty.is_top_tier() {
            score -= lead_discount(&self.patterns, card, view.differential);
            score += self.trait_bias(card, is_trump, risk, view.stake);
        }
        score + self.jitter()
    }

    fn should_concede(&mut self, view: &TurnView, cheap_loser_available: bool) -> bool {
        if !cheap_loser_available || view.rounds_played < MIN_ROUNDS_FOR_CONCESSION {
            return false;
        }
        let target = self.difficulty.profile().target_win_rate;
        let rate = view.rounds_won as f64 / view.rounds_played as f64;
        if rate <= target {
            return false;
        }
        let p = ((rate - target) * 2.0).clamp(0.0, 1.0);
        self.rng.random_bool(p)
    }

    fn decide_lead(&mut self) -> Result<usize, AiError> {
        let view = self.turn_view(&[])?;
        let opponents_held = self.opponent_cards_to_come(&view, &[]);

        let mut scored = Vec::with_capacity(view.hand.len());
        for (i, &card) in view.hand.iter().enumerate() {
            scored.push((i, self.score_lead(&view, card, opponents_held)));
        }
        let (index, score) = best_of(&scored).ok_or(AiError::EmptyHand { seat: view.seat })?;
        let card = view.hand[index];
        let category = if card.is_high_value() || card.suit == view.trump {
            MoveCategory::Aggressive
        } else if card.points() == 0 {
            MoveCategory::Bluff
        } else {
            MoveCategory::Defensive
        };
        self.record_decision(&view, index, card, score, Role::Leader, category, false, false);
        Ok(index)
    }

    fn decide_response(&mut self, table: &[(Seat, Card)]) -> Result<usize, AiError> {
        let Some(&(_, lead)) = table.first() else {
            return self.decide_lead();
        };
        let view = self.turn_view(table)?;
        let legal = legal_response_indices(&view.hand, lead.suit);

        if legal.is_empty() {
            let index = self.rng.random_range(0..view.hand.len());
            let card = view.hand[index];
            warn!(seat = view.seat, card = %card, "no legal response; playing a random card");
            self.record_decision(&view, index, card, 0.0, Role::Responder, MoveCategory::Defensive, true, false);
            return Ok(index);
        }

        let profile = self.difficulty.profile();
        let my_team = team_of(view.seat, view.players);
        let table_cards: Vec<Card> = table.iter().map(|&(_, c)| c).collect();
        let table_value = card_points(&table_cards) + view.stake;
        let partner_winning = winning_play(table, view.trump, view.players)
            .is_some_and(|(s, _)| team_of(s, view.players) == my_team);
        let opponents_after = self.opponent_cards_to_come(&view, table);
        let trumps_in_hand = view.trumps_in_hand();

        let mut extended = table.to_vec();
        let wins: Vec<bool> = legal
            .iter()
            .map(|&i| {
                extended.push((view.seat, view.hand[i]));
                let won = winning_play(&extended, view.trump, view.players)
                    .is_some_and(|(s, _)| s == view.seat);
                extended.pop();
                won
            })
            .collect();
        let cheap_loser = legal
            .iter()
            .zip(&wins)
            .any(|(&i, &w)| !w && view.hand[i].points() == 0);
        let concede = self.should_concede(&view, cheap_loser);

        let mut scored = Vec::with_capacity(legal.len());
        for (&i, &wins_now) in legal.iter().zip(&wins) {
            let card = view.hand[i];
            let is_trump = card.suit == view.trump;
            let points = f64::from(card.points());
            let risk_after = if wins_now && opponents_after > 0 {
                capture_risk(card, view.trump, &view.unseen, &view.voids, opponents_after)
            } else {
                0.0
            };

            let mut score = if wins_now {
                WIN_BASE + f64::from(table_value) + points
                    - over_commit_discount(card, view.trump, trumps_in_hand, table_value)
                    - profile.risk_aversion * risk_after * (f64::from(table_value) + points) * RISK_WEIGHT
            } else if partner_winning {
                PARTNER_BASE + points - if is_trump { WASTED_TRUMP } else { 0.0 }
            } else {
                -(points * LOSS_WEIGHT) - if is_trump { WASTED_TRUMP } else { 0.0 }
            };

            if concede {
                if !wins_now && card.points() == 0 {
                    score += CONCESSION_BONUS;
                } else if wins_now {
                    score -= CONCESSION_WIN_PENALTY;
                }
            }

            let candidate = CandidateView {
                card,
                role: Role::Responder,
                is_trump,
                wins_now,
                table_value,
                capture_risk: risk_after,
                progress: view.progress,
                trumps_in_hand,
            };
            score += self.personality.adjust(&candidate, &mut self.rng);

            if self.difficulty.is_top_tier() && wins_now {
                score -= capture_discount(&self.patterns, lead, -view.differential, card.points());
            }
            score += self.jitter();
            scored.push((i, score));
        }

        let (index, score) = best_of(&scored).ok_or(AiError::EmptyHand { seat: view.seat })?;
        let won = legal
            .iter()
            .position(|&i| i == index)
            .and_then(|p| wins.get(p).copied())
            .unwrap_or(false);
        let category = if won {
            MoveCategory::Aggressive
        } else {
            MoveCategory::Defensive
        };
        self.record_decision(&view, index, view.hand[index], score, Role::Responder, category, false, concede);
        Ok(index)
    }

    #[allow(clippy::too_many_arguments)]
    fn record_decision(
        &mut self,
        view: &TurnView,
        hand_index: usize,
        card: Card,
        score: f64,
        role: Role,
        category: MoveCategory,
        random_fallback: bool,
        conceded: bool,
    ) {
        debug!(
            seat = view.seat,
            card = %card,
            score,
            role = ?role,
            personality = %self.personality,
            conceded,
            "engine decision"
        );
        self.last_decision = Some(Decision {
            seat: view.seat,
            round_no: view.round_no,
            hand_index,
            card,
            score,
            role,
            category,
            personality: self.personality,
            random_fallback,
            conceded,
        });
    }

    fn observe_round(&mut self, record: &RoundRecord, state: &GameState, seat: Seat) {
        let players = state.player_count();
        let my_team = team_of(seat, players);
        let Some(lead) = record.leader_card() else {
            return;
        };
        let winner_team = record.winner.map(|w| team_of(w, players));
        let cards: Vec<Card> = record.plays.iter().map(|&(_, c)| c).collect();
        let round_value = card_points(&cards) + record.stake_at_time;
        let opponent_differential = -state.score_differential(seat);

        for &(s, card) in &record.plays {
            let team = team_of(s, players);
            if team == my_team {
                continue;
            }
            let role = if s == record.leader_seat {
                Role::Leader
            } else {
                Role::Responder
            };
            let obs = Observation {
                card,
                context: ActionContext {
                    role,
                    round_no: record.round_no,
                    stake: round_value - u16::from(card.points()),
                    is_trump: card.suit == state.trump,
                    followed_suit: (role == Role::Responder).then_some(card.suit == lead.suit),
                    score_differential: opponent_differential,
                },
                led_suit: lead.suit,
                lead_points: lead.points(),
                trump: state.trump,
                won_round: winner_team == Some(team),
            };
            self.memory.observe(&obs, &mut self.patterns);
        }

        let own_category = self
            .last_decision
            .as_ref()
            .filter(|d| d.round_no == record.round_no && d.seat == seat)
            .map(|d| d.category);
        if let Some(category) = own_category {
            let opponent_trumped = record
                .plays
                .iter()
                .any(|&(s, c)| team_of(s, players) != my_team && c.suit == state.trump);
            let won = winner_team == Some(my_team);
            let success = won || (category == MoveCategory::Bluff && opponent_trumped);
            if category == MoveCategory::Bluff {
                self.memory.deception_mut().record(success);
            }
            if self.difficulty.is_top_tier() {
                self.memory.traits_mut().record_outcome(category, success);
            }
        }
    }
}

impl<R: RngCore + Send> AiPlayer for AiEngine<R> {
    fn name(&self) -> &'static str {
        ENGINE_NAME
    }

    fn initialize(&mut self, state: &GameState, seat: Seat) -> Result<(), AiError> {
        let hand = state.hand(seat).map_err(|_| AiError::InvalidSeat(seat))?;
        total_rounds_for(state.player_count())?;
        let evaluator = RoundEvaluator::for_game(state)?;
        let mut memory = OpponentMemory::new(self.memory.decay_factor());
        memory.set_starting_hand(hand);
        self.memory = memory;
        self.personality = self.base_personality;
        self.rounds_in_personality = 0;
        self.switches.clear();
        self.last_decision = None;
        self.binding = Some(Binding {
            seat,
            state: state.clone(),
            processed_rounds: state.round_history.len(),
            evaluator,
        });
        debug!(seat, personality = %self.personality, difficulty = %self.difficulty, "engine initialized");
        Ok(())
    }

    fn choose_leading_card(&mut self) -> Result<usize, AiError> {
        self.decide_lead()
    }

    fn choose_responding_card(&mut self, lead: Card) -> Result<usize, AiError> {
        let binding = self.binding.as_ref().ok_or(AiError::EngineNotInitialized)?;
        let players = binding.state.player_count().max(1);
        let leader = ((binding.seat as usize + players - 1) % players) as Seat;
        self.decide_response(&[(leader, lead)])
    }

    fn choose_responding_card_on_table(&mut self, table: &[(Seat, Card)]) -> Result<usize, AiError> {
        self.decide_response(table)
    }

    fn update_memory(&mut self, state: &GameState) -> Result<(), AiError> {
        let binding = self.binding.as_mut().ok_or(AiError::EngineNotInitialized)?;
        let seat = binding.seat;
        if state.require_seat(seat).is_err() {
            return Err(AiError::InvalidSeat(seat));
        }
        let start = binding.processed_rounds.min(state.round_history.len());
        let players = state.player_count();
        for record in &state.round_history[start..] {
            let moves: Vec<PlayerMove> = record
                .plays
                .iter()
                .map(|&(s, card)| PlayerMove::new(s, card, team_of(s, players)))
                .collect();
            binding.evaluator.set_round(record.round_no);
            if let Err(err) = binding.evaluator.try_evaluate_round(&moves, record.stake_at_time) {
                debug!(seat, round_no = record.round_no, error = %err, "round left unrated");
            }
        }
        binding.processed_rounds = state.round_history.len();
        binding.state = state.clone();

        for record in &state.round_history[start..] {
            self.observe_round(record, state, seat);
        }
        if self.difficulty.is_top_tier()
            && deception::counter_predictability(&mut self.memory, &mut self.rng)
        {
            debug!(seat, "opponent highly patterned; traits perturbed");
        }
        Ok(())
    }

    fn get_stats(&self, player_id: PlayerId) -> Option<StatsSummary> {
        self.binding.as_ref()?.evaluator.get_stats(player_id)
    }

    fn adapt_personality(&mut self) -> Option<Personality> {
        if !self.difficulty.is_adaptive() {
            return None;
        }
        let binding = self.binding.as_ref()?;
        let state = &binding.state;
        let seat = binding.seat;
        let round_no = state.current_round;
        let (next, reason) = select_personality(
            self.personality,
            self.rounds_in_personality,
            state.score_differential(seat),
            state.round_progress(),
            self.memory.predictability(),
            self.memory.metrics().dominant(),
        );
        if next == self.personality {
            self.rounds_in_personality += 1;
            return None;
        }
        info!(seat, from = %self.personality, to = %next, reason = ?reason, "personality switch");
        self.switches.push(PersonalitySwitch {
            round_no,
            from: self.personality,
            to: next,
            reason,
        });
        self.personality = next;
        self.rounds_in_personality = 0;
        Some(next)
    }
}
