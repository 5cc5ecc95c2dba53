use crate::error::SpawnError;
use crate::geometry::{Cell, Grid};
use crate::snake::Snake;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Live targets kept on the field for each kind.
pub const TARGETS_PER_KIND: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Primary,
    Secondary,
}

impl TargetKind {
    pub const ALL: [TargetKind; 2] = [TargetKind::Primary, TargetKind::Secondary];

    /// Position in the level's target image list.
    pub fn index(self) -> usize {
        match self {
            TargetKind::Primary => 0,
            TargetKind::Secondary => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub cell: Cell,
    pub kind: TargetKind,
}

/// Picks a uniformly random interior cell that is not in `occupied`.
pub fn spawn_one<R: Rng + ?Sized>(grid: &Grid, occupied: &HashSet<Cell>, rng: &mut R) -> Result<Cell, SpawnError> {
    let capacity = grid.interior_capacity();
    let taken = occupied.iter().filter(|cell| grid.is_interior(**cell)).count();
    if taken >= capacity {
        return Err(SpawnError::Saturated { occupied: taken, capacity });
    }

    loop {
        let cell = Cell::new(rng.random_range(1..grid.columns() - 1), rng.random_range(1..grid.rows() - 1));
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
    }
}

/// The collectible targets of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetSet {
    targets: Vec<Target>,
}

impl TargetSet {
    /// Places `TARGETS_PER_KIND` targets of every kind on distinct free cells.
    pub fn spawn_initial<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Result<Self, SpawnError> {
        let mut set = TargetSet::default();
        for kind in TargetKind::ALL {
            for _ in 0..TARGETS_PER_KIND {
                let cell = spawn_one(grid, &set.occupied(snake), rng)?;
                set.targets.push(Target { cell, kind });
            }
        }
        Ok(set)
    }

    pub fn from_targets(targets: Vec<Target>) -> Self {
        Self { targets }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    pub fn count_of(&self, kind: TargetKind) -> usize {
        self.targets.iter().filter(|t| t.kind == kind).count()
    }

    /// Indices of every target sitting on `head`.
    pub fn collect_at(&self, head: Cell) -> Vec<usize> {
        self.targets
            .iter()
            .enumerate()
            .filter(|(_, target)| target.cell == head)
            .map(|(i, _)| i)
            .collect()
    }

    /// Moves each collected target to a fresh free cell, keeping its kind.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        indices: &[usize],
        grid: &Grid,
        snake: &Snake,
        rng: &mut R,
    ) -> Result<(), SpawnError> {
        for &index in indices {
            let cell = spawn_one(grid, &self.occupied(snake), rng)?;
            if let Some(target) = self.targets.get_mut(index) {
                debug!(kind = ?target.kind, from = ?target.cell, to = ?cell, "respawned target");
                target.cell = cell;
            }
        }
        Ok(())
    }

    fn occupied(&self, snake: &Snake) -> HashSet<Cell> {
        snake.positions().chain(self.targets.iter().map(|t| t.cell)).collect()
    }
}
