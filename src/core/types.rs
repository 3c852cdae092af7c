//! Core data types for WalkSim.

use serde::{Deserialize, Serialize};

/// A position on the 3D integer lattice.
///
/// Immutable once recorded in a walk; all arithmetic stays in integers and
/// only distance queries convert to floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LatticePoint {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl LatticePoint {
    /// The lattice origin (0, 0, 0).
    pub const ORIGIN: LatticePoint = LatticePoint { x: 0, y: 0, z: 0 };

    /// Create a new lattice point.
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// The neighboring point one unit move away in the given direction.
    #[inline]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.unit();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Euclidean distance to another lattice point.
    pub fn distance(self, other: Self) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        let dz = (self.z - other.z) as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Check whether this point is the origin.
    #[inline]
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }
}

/// One of the six axis-aligned unit moves on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    XUp,
    YUp,
    ZUp,
    XDown,
    YDown,
    ZDown,
}

impl Direction {
    /// All six moves, indexable by a uniform draw in `0..6`.
    pub const ALL: [Direction; 6] = [
        Direction::XUp,
        Direction::YUp,
        Direction::ZUp,
        Direction::XDown,
        Direction::YDown,
        Direction::ZDown,
    ];

    /// The unit move vector for this direction.
    #[inline]
    pub fn unit(self) -> (i64, i64, i64) {
        match self {
            Direction::XUp => (1, 0, 0),
            Direction::YUp => (0, 1, 0),
            Direction::ZUp => (0, 0, 1),
            Direction::XDown => (-1, 0, 0),
            Direction::YDown => (0, -1, 0),
            Direction::ZDown => (0, 0, -1),
        }
    }

    /// The reverse move.
    pub fn opposite(self) -> Self {
        match self {
            Direction::XUp => Direction::XDown,
            Direction::YUp => Direction::YDown,
            Direction::ZUp => Direction::ZDown,
            Direction::XDown => Direction::XUp,
            Direction::YDown => Direction::YUp,
            Direction::ZDown => Direction::ZUp,
        }
    }

    /// Create a direction from a uniform index.
    pub fn from_index(value: usize) -> Option<Self> {
        Self::ALL.get(value).copied()
    }
}

/// Symmetric bounding box constraining a walk, closed on both ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub min: LatticePoint,
    pub max: LatticePoint,
}

impl Default for Bounds {
    fn default() -> Self {
        // Matches the visualizer's initial limits of +/-200 per axis.
        Self {
            min: LatticePoint::new(-200, -200, -200),
            max: LatticePoint::new(200, 200, 200),
        }
    }
}

impl Bounds {
    /// Create a bounding box from explicit corners.
    pub fn new(min: LatticePoint, max: LatticePoint) -> Self {
        Self { min, max }
    }

    /// Create a box centered on the origin from per-axis extents, half the
    /// extent on each side.
    pub fn symmetric(x_size: i64, y_size: i64, z_size: i64) -> Self {
        let half = LatticePoint::new(x_size / 2, y_size / 2, z_size / 2);
        Self {
            min: LatticePoint::new(-half.x, -half.y, -half.z),
            max: half,
        }
    }

    /// Check a point componentwise against `[min, max]` inclusive.
    #[inline]
    pub fn contains(&self, point: LatticePoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// Walk configuration cloned into each Monte Carlo trial.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Bounding box applied when `bounds_enabled` is set.
    pub bounds: Bounds,
    /// Whether the bounding box constrains steps.
    pub bounds_enabled: bool,
    /// Whether self-intersecting cycles are erased as they form.
    pub loop_erased: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            bounds_enabled: false,
            loop_erased: false,
        }
    }
}

/// One row of the distance/loop experiment table.
///
/// The loop columns are populated only when the row was produced in
/// loop-erased mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulationRow {
    /// Step budget the row was computed at.
    pub steps: usize,
    /// Mean final distance from the origin over all trials.
    pub mean_distance: f64,
    /// Mean largest erased loop size (edges) over all trials.
    pub mean_largest_loop: Option<f64>,
    /// Mean number of erased loops over all trials.
    pub mean_erased_loops: Option<f64>,
}

/// One row of the return-probability experiment table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReturnRow {
    /// Step budget the row was computed at.
    pub steps: usize,
    /// Fraction of trials that revisited the origin within the budget.
    pub probability: f64,
}
