use crate::{
    choose_landlord, hand_strength, is_game_over, legal_actions_for, payoff, winner, Action, Card,
    ConfigError, Deal, Deck, Event, EventBus, GameConfig, GameRecord, Hand, PlayerId, Rank,
    RngState, Round, Turn, PLAYER_COUNT,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game is already over")]
    Finished,
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("expected {expected} policies, got {got}")]
    PolicyCount { expected: usize, got: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Landlord,
    Peasant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub role: Role,
    pub hand: Hand,
}

#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    pub seat: PlayerId,
    pub hand: &'a Hand,
    pub legal: &'a [Action],
    pub history: &'a [Turn],
    pub landlord: PlayerId,
    pub kitty: &'a [Card],
    pub played: &'a [Rank],
}

/// Picks one action per turn. Returning something outside `view.legal` is
/// tolerated: the game substitutes the first legal action.
pub trait Policy {
    fn select(&mut self, view: &PlayerView<'_>) -> Action;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Option<PlayerId>,
    pub payoff: [i32; PLAYER_COUNT],
    pub turns: u32,
}

#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    initial_hands: Vec<Hand>,
    kitty: Vec<Card>,
    landlord: PlayerId,
    round: Round,
    current: PlayerId,
    turns: u32,
    pub events: EventBus,
}

impl Game {
    /// Shuffles with the configured seed, deals, and seats the landlord by
    /// bid strength unless the config forces one.
    pub fn deal(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = RngState::from_seed(config.seed);
        let mut deck = Deck::full();
        deck.shuffle(&mut rng);
        let Deal { hands, kitty } = deck.deal();
        let landlord = config.landlord.unwrap_or_else(|| choose_landlord(&hands));
        Self::assemble(config, hands, kitty, landlord)
    }

    pub fn from_hands(
        hands: [Hand; PLAYER_COUNT],
        kitty: Vec<Card>,
        landlord: PlayerId,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if landlord >= PLAYER_COUNT {
            return Err(ConfigError::LandlordOutOfRange(landlord).into());
        }
        Self::assemble(config, hands, kitty, landlord)
    }

    fn assemble(
        config: GameConfig,
        hands: [Hand; PLAYER_COUNT],
        kitty: Vec<Card>,
        landlord: PlayerId,
    ) -> Result<Self, GameError> {
        let mut events = EventBus::default();
        events.push(Event::Dealt {
            seed: config.seed,
            hand_sizes: hands.iter().map(Hand::len).collect(),
        });
        let strength = hand_strength(&hands[landlord]);
        log::info!("landlord is player {} (strength {})", landlord, strength);
        events.push(Event::LandlordChosen {
            player: landlord,
            strength,
        });

        let players: Vec<Player> = hands
            .into_iter()
            .enumerate()
            .map(|(id, mut hand)| {
                let role = if id == landlord {
                    hand.add_cards(&kitty);
                    Role::Landlord
                } else {
                    Role::Peasant
                };
                Player { id, role, hand }
            })
            .collect();
        let initial_hands = players.iter().map(|player| player.hand.clone()).collect();

        Ok(Self {
            config,
            players,
            initial_hands,
            kitty,
            landlord,
            round: Round::default(),
            current: landlord,
            turns: 0,
            events,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn landlord(&self) -> PlayerId {
        self.landlord
    }

    pub fn kitty(&self) -> &[Card] {
        &self.kitty
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    fn hands(&self) -> Vec<Hand> {
        self.players.iter().map(|player| player.hand.clone()).collect()
    }

    pub fn is_over(&self) -> bool {
        is_game_over(&self.hands())
    }

    pub fn winner(&self) -> Option<PlayerId> {
        winner(&self.hands())
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        legal_actions_for(&self.players[self.current].hand, &self.round, self.current)
    }

    pub fn step(&mut self, policy: &mut dyn Policy) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::Finished);
        }
        let seat = self.current;
        let legal = self.legal_actions();
        let played = self.round.played_ranks();
        let chosen = policy.select(&PlayerView {
            seat,
            hand: &self.players[seat].hand,
            legal: &legal,
            history: self.round.history(),
            landlord: self.landlord,
            kitty: &self.kitty,
            played: &played,
        });

        let action = if legal.contains(&chosen) {
            chosen
        } else {
            let fallback = legal.first().cloned().unwrap_or_default();
            log::warn!(
                "player {} returned illegal action {}, using {}",
                seat,
                chosen,
                fallback
            );
            self.events.push(Event::ActionReplaced {
                player: seat,
                attempted: chosen,
                fallback: fallback.clone(),
            });
            fallback
        };

        let hand = &mut self.players[seat].hand;
        hand.remove_cards(action.ranks());
        let remaining = hand.len();
        log::debug!("turn {}: player {} -> {} ({} left)", self.turns, seat, action, remaining);
        if action.is_pass() {
            self.events.push(Event::Passed { player: seat });
        } else {
            self.events.push(Event::Played {
                player: seat,
                action: action.clone(),
                remaining,
            });
        }
        self.round.record_action(seat, action);
        self.turns += 1;
        if !self.is_over() {
            self.current = self.round.next_player(seat);
        }
        Ok(())
    }

    pub fn run(&mut self, policies: &mut [Box<dyn Policy>]) -> Result<GameOutcome, GameError> {
        if policies.len() != PLAYER_COUNT {
            return Err(GameError::PolicyCount {
                expected: PLAYER_COUNT,
                got: policies.len(),
            });
        }
        while !self.is_over() {
            if self.turns >= self.config.max_turns {
                log::warn!("reached {} turns without a winner", self.config.max_turns);
                break;
            }
            let seat = self.current;
            self.step(policies[seat].as_mut())?;
        }
        let outcome = self.outcome();
        log::info!(
            "game over after {} turns, winner {:?}, payoff {:?}",
            outcome.turns,
            outcome.winner,
            outcome.payoff
        );
        self.events.push(Event::GameOver {
            winner: outcome.winner,
            turns: outcome.turns,
        });
        Ok(outcome)
    }

    pub fn outcome(&self) -> GameOutcome {
        let winner = self.winner();
        GameOutcome {
            winner,
            payoff: winner
                .map(|seat| payoff(seat, self.landlord))
                .unwrap_or([0; PLAYER_COUNT]),
            turns: self.turns,
        }
    }

    pub fn record(&self) -> GameRecord {
        let outcome = self.outcome();
        GameRecord {
            seed: self.config.seed,
            landlord: self.landlord,
            initial_hands: self.initial_hands.iter().map(Hand::encoding).collect(),
            kitty: self.kitty.iter().map(|card| card.rank.symbol()).collect(),
            trace: self.round.history().to_vec(),
            winner: outcome.winner,
            payoff: outcome.payoff,
        }
    }
}
