//! Board model: 24 points plus per-player bar and off counters.

use crate::domain::state::Player;
use crate::errors::domain::DomainError;

/// Number of points on the board.
pub const POINTS: usize = 24;

/// Checkers each side plays with; conservation holds against this total.
pub const CHECKERS_PER_PLAYER: u8 = 15;

/// One board position: a stack of same-owner checkers.
///
/// Invariant: `count == 0 ⇔ owner == None`. The two mutators are the only
/// way to change a point, so the invariant cannot be broken from outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    owner: Option<Player>,
    count: u8,
}

impl Point {
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn add(&mut self, player: Player) -> Result<(), DomainError> {
        if self.is_empty() {
            self.owner = Some(player);
            self.count = 1;
            Ok(())
        } else if self.owner == Some(player) {
            self.count += 1;
            Ok(())
        } else {
            Err(DomainError::invariant(
                "cannot stack a checker on an opposing point",
            ))
        }
    }

    fn remove(&mut self, player: Player) -> Result<(), DomainError> {
        if self.owner != Some(player) || self.count == 0 {
            return Err(DomainError::invariant(
                "no checker of this player to remove from the point",
            ));
        }
        self.count -= 1;
        if self.count == 0 {
            self.owner = None;
        }
        Ok(())
    }
}

/// The aggregate of 24 points, 2 bar counters, and 2 off counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    points: [Point; POINTS],
    bar: [u8; 2],
    off: [u8; 2],
}

impl Board {
    /// Board with no checkers anywhere. Building block for reconstruction
    /// from snapshots and for test scenarios.
    pub fn empty() -> Self {
        Self {
            points: [Point::default(); POINTS],
            bar: [0; 2],
            off: [0; 2],
        }
    }

    /// Classical starting layout. For each side: 2 checkers at the 24-point,
    /// 5 at the 13-point, 3 at the 8-point, 5 at the 6-point, mirrored by
    /// movement direction.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();

        board.set_point(23, Player::White, 2);
        board.set_point(12, Player::White, 5);
        board.set_point(7, Player::White, 3);
        board.set_point(5, Player::White, 5);

        board.set_point(0, Player::Black, 2);
        board.set_point(11, Player::Black, 5);
        board.set_point(16, Player::Black, 3);
        board.set_point(18, Player::Black, 5);

        board
    }

    /// Read one point. `index` must be below [`POINTS`].
    pub fn point(&self, index: usize) -> &Point {
        &self.points[index]
    }

    pub fn bar(&self, player: Player) -> u8 {
        self.bar[player.index()]
    }

    pub fn off(&self, player: Player) -> u8 {
        self.off[player.index()]
    }

    /// Overwrite one point's stack. Reconstruction/setup only; game moves go
    /// through `apply_move`.
    pub fn set_point(&mut self, index: usize, player: Player, count: u8) {
        self.points[index] = if count == 0 {
            Point::default()
        } else {
            Point {
                owner: Some(player),
                count,
            }
        };
    }

    /// Overwrite a bar counter. Reconstruction/setup only.
    pub fn set_bar(&mut self, player: Player, count: u8) {
        self.bar[player.index()] = count;
    }

    /// Overwrite an off counter. Reconstruction/setup only.
    pub fn set_off(&mut self, player: Player, count: u8) {
        self.off[player.index()] = count;
    }

    pub(crate) fn add_checker(&mut self, index: usize, player: Player) -> Result<(), DomainError> {
        self.points[index].add(player)
    }

    pub(crate) fn remove_checker(
        &mut self,
        index: usize,
        player: Player,
    ) -> Result<(), DomainError> {
        self.points[index].remove(player)
    }

    pub(crate) fn push_to_bar(&mut self, player: Player) {
        self.bar[player.index()] += 1;
    }

    pub(crate) fn pop_from_bar(&mut self, player: Player) -> Result<(), DomainError> {
        let slot = &mut self.bar[player.index()];
        if *slot == 0 {
            return Err(DomainError::invariant("bar is empty for this player"));
        }
        *slot -= 1;
        Ok(())
    }

    pub(crate) fn bear_off(&mut self, player: Player) {
        self.off[player.index()] += 1;
    }

    /// Total checkers a player has anywhere: owned point stacks + bar + off.
    pub fn checker_total(&self, player: Player) -> u32 {
        let on_points: u32 = self
            .points
            .iter()
            .filter(|point| point.owner() == Some(player))
            .map(|point| u32::from(point.count()))
            .sum();
        on_points + u32::from(self.bar(player)) + u32::from(self.off(player))
    }

    /// Conservation law for a full game: both sides account for exactly
    /// [`CHECKERS_PER_PLAYER`] checkers.
    pub fn is_conserved(&self) -> bool {
        self.checker_total(Player::White) == u32::from(CHECKERS_PER_PLAYER)
            && self.checker_total(Player::Black) == u32::from(CHECKERS_PER_PLAYER)
    }
}
