//! Decision loop.
//!
//! The agent keeps the latest snapshot, watches every seat for activity and,
//! each time its timer fires, issues at most one soldier move and at most one
//! tower purchase. The timer is re-armed to play slightly faster than the
//! quickest opponent it has seen.

pub mod stats;
pub mod tuning;

use std::time::Duration;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{ActionSink, GameTime, Player, Snapshot, World};
use crate::economy::{strongest_affordable, GameConfig, Tier};
use crate::eval::{score, UserMap};
use crate::movegen::{random_soldier_move, tower_build};

pub use stats::PlayerStats;
pub use tuning::Tuning;

/// Wake-up state of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// No wake-up armed.
    Idle,
    /// A wake-up is armed; further updates leave it alone.
    Pending,
    /// Stopped for good.
    Stopped,
}

pub struct Agent<R: Rng = SmallRng> {
    config: GameConfig,
    players: Vec<Player>,
    tuning: Tuning,
    stats: Vec<PlayerStats>,
    snapshot: Option<Snapshot>,
    schedule: Schedule,
    rng: R,
}

impl Agent<SmallRng> {
    /// Creates an agent with an entropy-seeded RNG and a freshly drawn
    /// personality.
    pub fn from_entropy(config: GameConfig, players: Vec<Player>) -> Self {
        let mut rng = SmallRng::from_entropy();
        let tuning = Tuning::random(&mut rng);
        Agent::new(config, players, tuning, rng)
    }
}

impl<R: Rng> Agent<R> {
    pub fn new(config: GameConfig, players: Vec<Player>, tuning: Tuning, rng: R) -> Self {
        debug!(
            "agent for {} seats: defense {}% attack {}% exponents {:?}",
            players.len(),
            tuning.defense,
            tuning.attack,
            tuning.exponents
        );
        let stats = vec![PlayerStats::default(); players.len()];
        Agent {
            config,
            players,
            tuning,
            stats,
            snapshot: None,
            schedule: Schedule::Idle,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Activity stats, one per seat in roster order.
    pub fn stats(&self) -> &[PlayerStats] {
        &self.stats
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// The world from the last accepted snapshot.
    pub fn world(&self) -> Option<&World> {
        self.snapshot.as_ref().map(|s| &s.world)
    }

    /// Accepts a snapshot from the authority.
    ///
    /// Snapshots carrying an invalid own balance mean the agent has been
    /// eliminated; they are dropped without touching any state. Returns the
    /// delay of a newly armed wake-up, if this update armed one.
    pub fn update(&mut self, snapshot: Snapshot) -> Option<Duration> {
        if !snapshot.balance.is_valid() {
            debug!("ignoring update at {}: own balance is gone", snapshot.now);
            return None;
        }

        for (player, stats) in self.players.iter().zip(self.stats.iter_mut()) {
            let map = UserMap::build(&snapshot.world, player.id);
            if stats.observe(map, snapshot.now, self.tuning.last_move_weight) {
                debug!(
                    "{} acted at {} (avg {:.0} ms over {} moves)",
                    player.name, snapshot.now, stats.average_interaction, stats.moves
                );
            }
        }

        if snapshot.log {
            self.log_position(&snapshot);
        }

        self.snapshot = Some(snapshot);

        if self.schedule == Schedule::Idle {
            self.schedule = Schedule::Pending;
            return Some(Duration::ZERO);
        }
        None
    }

    /// Runs one decision round at authority time `now`.
    ///
    /// Returns the delay until the next round, or `None` when the agent is
    /// stopped or has not seen a valid snapshot yet.
    pub fn tick<S: ActionSink>(&mut self, now: GameTime, sink: &mut S) -> Option<Duration> {
        if self.schedule == Schedule::Stopped {
            return None;
        }
        let snapshot = self.snapshot.as_ref()?;
        let me = snapshot.me;
        let world = &snapshot.world;
        let map = UserMap::build(world, me);
        debug!("round at {}, own cells:\n{}", now, map);

        let moved = random_soldier_move(
            world,
            &map,
            &snapshot.soldiers,
            me,
            now,
            self.config.soldier_cooldown,
            &mut self.rng,
        );
        if let Some(action) = moved {
            debug!("move {:?}", action);
            sink.emit(action);
        }

        let weight = score(&map, self.tuning.exponents);
        let reserved: Vec<_> = moved.iter().map(|a| a.to()).collect();
        if let Some(action) = tower_build(
            &weight,
            &map,
            &snapshot.balance,
            now,
            &self.config,
            &reserved,
        ) {
            debug!("build {:?} (weight {:?})", action, weight);
            sink.emit(action);
        }

        let delay = self.next_delay();
        self.schedule = Schedule::Pending;
        Some(delay)
    }

    /// The `info` lines written for snapshots that ask for diagnostics: the
    /// treasury, what it buys right now, and the map as this seat sees it.
    pub fn position_report(&self, snapshot: &Snapshot) -> String {
        let now = snapshot.now;
        let income = snapshot.balance.income();
        let sign = if income < 0.0 {
            '-'
        } else if income > 0.0 {
            '+'
        } else {
            '~'
        };
        let best = |tiers: &[Tier]| {
            strongest_affordable(&snapshot.balance, now, tiers)
                .map_or('-', |t| t.object.symbol())
        };
        let weight = score(
            &UserMap::build(&snapshot.world, snapshot.me),
            self.tuning.exponents,
        );
        let farm = self.config.economy.prices.farm(weight.farming as usize);
        let view = match self.config.fog_radius() {
            Some(radius) => snapshot.world.fogged_for(snapshot.me, radius),
            None => snapshot.world.clone(),
        };
        format!(
            "balance ${:.1}    income {}${}    soldier {}  tower {}  farm ${}\n{}",
            snapshot.balance.amount(now),
            sign,
            income.abs(),
            best(&self.config.soldiers()),
            best(&self.config.towers()),
            farm,
            view
        )
    }

    fn log_position(&self, snapshot: &Snapshot) {
        for line in self.position_report(snapshot).lines() {
            info!("{}", line);
        }
    }

    /// Stops the agent. Later ticks do nothing and updates arm nothing.
    pub fn stop(&mut self) {
        self.schedule = Schedule::Stopped;
    }

    /// Delay before the next round: a bit quicker than the fastest opponent
    /// with observed activity, within the tuning's window.
    pub fn next_delay(&self) -> Duration {
        let me = self.snapshot.as_ref().map(|s| s.me);
        let fastest = self
            .players
            .iter()
            .zip(&self.stats)
            .filter(|(p, s)| Some(p.id) != me && s.has_activity())
            .map(|(_, s)| s.average_interaction)
            .fold(None, |acc: Option<f64>, avg| {
                Some(acc.map_or(avg, |a| a.min(avg)))
            });
        match fastest {
            Some(avg) => self.tuning.clamp_delay(self.tuning.faster_than_user * avg),
            None => self.tuning.timeout_min,
        }
    }
}
