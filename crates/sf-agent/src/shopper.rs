//! The shopper state machine.
//!
//! Every tick a shopper runs [`Shopper::step`]:
//!
//! ```text
//! origin = pos
//! if finished: respawn            (new list, random entrance)
//! else:        move one cell      (greedy towards target, 10% jitter)
//! bonus = interact()              (consume head item / reach checkout)
//! return (origin, BASE_HEAT + bonus)
//! ```
//!
//! Heat is attributed to the cell the shopper occupied at the *start* of the
//! tick, including any interaction bonus earned after moving.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use sf_core::{AgentId, Pos};
use sf_layout::{Cell, GridIndex, Product, Target};

use crate::generate_shopping_list;

/// Heat every shopper leaves behind each tick.
pub const BASE_HEAT: u32 = 1;

/// Extra heat for a tick in which the shopper took an item off a shelf.
pub const INTERACTION_BONUS: u32 = 5;

/// Probability of taking the best-ranked move rather than a random one.
pub const GREEDY_PROBABILITY: f64 = 0.9;

/// Spawn position used when the plan has no Entrance cell.
const FALLBACK_SPAWN: Pos = Pos::new(1, 1);

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// A shopper's heat contribution for one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Position at the start of the tick, where the heat is recorded.
    pub origin:     Pos,
    /// `BASE_HEAT`, plus `INTERACTION_BONUS` if an item was picked up.
    pub heat:       u32,
    /// `true` if the head item was consumed this tick.
    pub interacted: bool,
}

// ── AgentSnapshot ─────────────────────────────────────────────────────────────

/// Read-only copy of a shopper's state for renderers and output writers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:            AgentId,
    pub pos:           Pos,
    pub shopping_list: Vec<Product>,
    pub finished:      bool,
}

// ── Shopper ───────────────────────────────────────────────────────────────────

/// One simulated customer.
#[derive(Clone, Debug)]
pub struct Shopper {
    id:       AgentId,
    pos:      Pos,
    list:     VecDeque<Product>,
    finished: bool,
}

impl Shopper {
    /// Create a shopper at a random entrance with a freshly drawn list.
    pub fn spawn<R: Rng + ?Sized>(id: AgentId, grid: &GridIndex, rng: &mut R) -> Self {
        let pos = spawn_point(grid, rng);
        let list = generate_shopping_list(rng);
        Self { id, pos, list, finished: false }
    }

    /// Create a shopper with an explicit position and list.
    pub fn with_list<I>(id: AgentId, pos: Pos, list: I) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        Self { id, pos, list: list.into_iter().collect(), finished: false }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Remaining items; the front is the current target.
    pub fn shopping_list(&self) -> &VecDeque<Product> {
        &self.list
    }

    /// `true` once the list is empty and the shopper stood on a Checkout.
    /// Cleared by the respawn on the following tick.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// What the shopper is currently walking towards.
    pub fn target(&self) -> Target {
        self.list.front().map_or(Target::Checkout, |&p| Target::Product(p))
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            id:            self.id,
            pos:           self.pos,
            shopping_list: self.list.iter().copied().collect(),
            finished:      self.finished,
        }
    }

    // ── Tick behaviour ────────────────────────────────────────────────────

    /// Run one full tick: respawn-or-move, then interact.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &GridIndex, rng: &mut R) -> StepOutcome {
        let origin = self.pos;

        if self.finished {
            self.respawn(grid, rng);
        } else {
            self.move_step(grid, rng);
        }

        let bonus = self.interact(grid);
        StepOutcome {
            origin,
            heat: BASE_HEAT + bonus,
            interacted: bonus > 0,
        }
    }

    /// Start a new trip: fresh list, random entrance, flag cleared.
    pub fn respawn<R: Rng + ?Sized>(&mut self, grid: &GridIndex, rng: &mut R) {
        self.list = generate_shopping_list(rng);
        self.finished = false;
        self.pos = spawn_point(grid, rng);
    }

    /// Walkable Moore neighbours of the current cell, in scan order.
    pub fn valid_moves(&self, grid: &GridIndex) -> Vec<Pos> {
        self.pos.moore().filter(|&p| grid.is_walkable(p)).collect()
    }

    /// Nearest instance of `target` by Manhattan distance.
    ///
    /// Ties go to whichever instance comes first in the grid's location list.
    pub fn find_nearest(&self, target: Target, grid: &GridIndex) -> Option<Pos> {
        let mut best: Option<(Pos, u32)> = None;
        for &loc in grid.locations(target) {
            let dist = loc.manhattan(self.pos);
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((loc, dist));
            }
        }
        best.map(|(loc, _)| loc)
    }

    /// Move one cell.
    ///
    /// With a reachable target the candidates are ranked by distance to its
    /// nearest instance (stable, so scan order breaks ties); the best one is
    /// taken with probability [`GREEDY_PROBABILITY`], otherwise any candidate
    /// uniformly.  Without any instance of the target the move is uniform.
    /// No walkable neighbour means no move.
    pub fn move_step<R: Rng + ?Sized>(&mut self, grid: &GridIndex, rng: &mut R) {
        let goal = self.find_nearest(self.target(), grid);

        let mut moves = self.valid_moves(grid);
        if moves.is_empty() {
            return;
        }

        let next = match goal {
            Some(goal) => {
                moves.sort_by_key(|m| m.manhattan(goal));
                if rng.gen_bool(GREEDY_PROBABILITY) {
                    Some(moves[0])
                } else {
                    moves.choose(rng).copied()
                }
            }
            None => moves.choose(rng).copied(),
        };

        if let Some(next) = next {
            self.pos = next;
        }
    }

    /// Act on the current cell's surroundings and return the heat bonus.
    ///
    /// - Empty list: standing on a Checkout sets the finished flag.  No bonus.
    /// - Otherwise: the first Moore neighbour (scan order) shelving the head
    ///   item consumes it for [`INTERACTION_BONUS`].
    pub fn interact(&mut self, grid: &GridIndex) -> u32 {
        let Some(&wanted) = self.list.front() else {
            if grid.cell(self.pos) == Some(Cell::Checkout) {
                self.finished = true;
            }
            return 0;
        };

        let found = self
            .pos
            .moore()
            .any(|p| grid.cell(p).and_then(Cell::product) == Some(wanted));

        if found {
            self.list.pop_front();
            INTERACTION_BONUS
        } else {
            0
        }
    }
}

/// A uniformly chosen entrance, or `(1, 1)` clamped into the grid when the
/// plan has none.
pub fn spawn_point<R: Rng + ?Sized>(grid: &GridIndex, rng: &mut R) -> Pos {
    match grid.entrances().choose(rng) {
        Some(&pos) => pos,
        None => Pos::new(
            FALLBACK_SPAWN.x.min(grid.width() as i32 - 1).max(0),
            FALLBACK_SPAWN.y.min(grid.height() as i32 - 1).max(0),
        ),
    }
}
