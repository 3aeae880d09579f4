// src/editor/generator.rs

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Grid;
use crate::map::{ObjectTag, TerrainTag};

/// Upper bound for every radius, length, jitter and count knob. Keeps the
/// signed offset arithmetic in range and the passes cheap.
pub const MAX_EXTENT: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid generator config: {0}")]
pub struct InvalidConfig(pub String);

/// Inclusive `[min, max]` range sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(self.min..=self.max)
    }
}

/// Knobs of the five generation passes. The defaults are tuned for a 20x20
/// map and produce one to three lakes, one or two ridges and a few woods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub water_bodies: CountRange,
    pub water_radius: CountRange,
    pub water_probability: f64,

    pub mountain_ranges: CountRange,
    pub mountain_length: CountRange,
    /// Maximum perpendicular offset of a ridge cell from its start line.
    pub mountain_jitter: usize,
    /// Chance a ridge cell is mountain rather than stone.
    pub mountain_probability: f64,

    pub forests: CountRange,
    pub forest_radius: CountRange,
    pub forest_probability: f64,

    pub beach_probability: f64,

    pub objects: CountRange,
    /// Forest: tree, otherwise enemy.
    pub tree_probability: f64,
    /// Mountain and stone: rock, otherwise castle.
    pub rock_probability: f64,
    /// Sand: chest, otherwise flag.
    pub chest_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            water_bodies: CountRange::new(1, 3),
            water_radius: CountRange::new(3, 6),
            water_probability: 0.7,
            mountain_ranges: CountRange::new(1, 2),
            mountain_length: CountRange::new(5, 12),
            mountain_jitter: 1,
            mountain_probability: 0.7,
            forests: CountRange::new(2, 5),
            forest_radius: CountRange::new(2, 4),
            forest_probability: 0.6,
            beach_probability: 0.5,
            objects: CountRange::new(10, 24),
            tree_probability: 0.5,
            rock_probability: 0.6,
            chest_probability: 0.3,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        let ranges = [
            ("water_bodies", self.water_bodies),
            ("water_radius", self.water_radius),
            ("mountain_ranges", self.mountain_ranges),
            ("mountain_length", self.mountain_length),
            ("forests", self.forests),
            ("forest_radius", self.forest_radius),
            ("objects", self.objects),
        ];
        for (name, range) in ranges {
            if range.min > range.max {
                return Err(InvalidConfig(format!(
                    "{name}: min {} is greater than max {}",
                    range.min, range.max
                )));
            }
            if range.max > MAX_EXTENT {
                return Err(InvalidConfig(format!(
                    "{name}: max {} exceeds {MAX_EXTENT}",
                    range.max
                )));
            }
        }
        if self.mountain_jitter > MAX_EXTENT {
            return Err(InvalidConfig(format!(
                "mountain_jitter: {} exceeds {MAX_EXTENT}",
                self.mountain_jitter
            )));
        }

        let probabilities = [
            ("water_probability", self.water_probability),
            ("mountain_probability", self.mountain_probability),
            ("forest_probability", self.forest_probability),
            ("beach_probability", self.beach_probability),
            ("tree_probability", self.tree_probability),
            ("rock_probability", self.rock_probability),
            ("chest_probability", self.chest_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(InvalidConfig(format!("{name}: {p} is not within [0, 1]")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterBody {
    pub center: (usize, usize),
    pub radius: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountainRange {
    pub start: (usize, usize),
    pub axis: Axis,
    pub length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forest {
    pub center: (usize, usize),
    pub radius: usize,
}

/// What a generation run laid down.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub water_bodies: Vec<WaterBody>,
    pub mountain_ranges: Vec<MountainRange>,
    pub forests: Vec<Forest>,
    /// Draws made by the object scatter pass, including skipped ones.
    pub object_draws: usize,
    pub objects_placed: usize,
    pub spawn: Option<(usize, usize)>,
}

/// Builds a complete map from a random source in five passes: water, mountains,
/// forests, beaches, objects. A final scan guarantees a player spawn when a
/// free grass cell exists.
#[derive(Debug, Clone, Default)]
pub struct MapGenerator {
    config: GeneratorConfig,
}

impl MapGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, InvalidConfig> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generates an `n` x `n` grid. The result only depends on `n` and the
    /// state of `rng`.
    pub fn generate<R: Rng>(&self, n: usize, rng: &mut R) -> Grid {
        self.generate_with_report(n, rng).0
    }

    pub fn generate_with_report<R: Rng>(&self, n: usize, rng: &mut R) -> (Grid, GenerationReport) {
        let mut grid = Grid::new(n);
        let mut report = GenerationReport::default();
        if n == 0 {
            return (grid, report);
        }

        report.water_bodies = self.place_water(&mut grid, rng);
        report.mountain_ranges = self.place_mountains(&mut grid, rng);
        report.forests = self.place_forests(&mut grid, rng);
        let sand = self.place_beaches(&mut grid, rng);
        debug!("Beach pass converted {} cells to sand", sand);
        let (draws, placed) = self.scatter_objects(&mut grid, rng);
        report.object_draws = draws;
        report.objects_placed = placed;
        report.spawn = place_spawn(&mut grid);

        (grid, report)
    }

    fn random_cell<R: Rng>(grid: &Grid, rng: &mut R) -> (usize, usize) {
        let n = grid.size();
        (rng.random_range(0..n), rng.random_range(0..n))
    }

    fn place_water<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> Vec<WaterBody> {
        let count = self.config.water_bodies.sample(rng);
        let mut bodies = Vec::with_capacity(count);
        for _ in 0..count {
            let center = Self::random_cell(grid, rng);
            let radius = self.config.water_radius.sample(rng);
            let r = radius as i64;
            for dr in -r..=r {
                for dc in -r..=r {
                    let (row, col) = (center.0 as i64 + dr, center.1 as i64 + dc);
                    if !grid.in_bounds_signed(row, col) {
                        continue;
                    }
                    // Disc test on integer offsets; same as sqrt(d) <= r.
                    if dr * dr + dc * dc <= r * r && rng.random_bool(self.config.water_probability) {
                        if let Some(cell) = grid.get_mut(row as usize, col as usize) {
                            cell.terrain = TerrainTag::Water;
                        }
                    }
                }
            }
            debug!("Water body at {:?}, radius {}", center, radius);
            bodies.push(WaterBody { center, radius });
        }
        bodies
    }

    fn place_mountains<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> Vec<MountainRange> {
        let count = self.config.mountain_ranges.sample(rng);
        let jitter = self.config.mountain_jitter as i64;
        let mut ranges = Vec::with_capacity(count);
        for _ in 0..count {
            let start = Self::random_cell(grid, rng);
            let length = self.config.mountain_length.sample(rng);
            let axis = if rng.random_bool(0.5) {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            for step in 0..length as i64 {
                let offset = rng.random_range(-jitter..=jitter);
                let (row, col) = match axis {
                    Axis::Horizontal => (start.0 as i64 + offset, start.1 as i64 + step),
                    Axis::Vertical => (start.0 as i64 + step, start.1 as i64 + offset),
                };
                if !grid.in_bounds_signed(row, col) {
                    continue;
                }
                if let Some(cell) = grid.get_mut(row as usize, col as usize) {
                    if cell.terrain == TerrainTag::Water {
                        continue;
                    }
                    cell.terrain = if rng.random_bool(self.config.mountain_probability) {
                        TerrainTag::Mountain
                    } else {
                        TerrainTag::Stone
                    };
                }
            }
            debug!("Mountain range from {:?}, {:?}, length {}", start, axis, length);
            ranges.push(MountainRange { start, axis, length });
        }
        ranges
    }

    fn place_forests<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> Vec<Forest> {
        let count = self.config.forests.sample(rng);
        let mut forests = Vec::with_capacity(count);
        for _ in 0..count {
            let center = Self::random_cell(grid, rng);
            let radius = self.config.forest_radius.sample(rng);
            let r = radius as i64;
            // Full square, no distance filter.
            for dr in -r..=r {
                for dc in -r..=r {
                    let (row, col) = (center.0 as i64 + dr, center.1 as i64 + dc);
                    if !grid.in_bounds_signed(row, col) {
                        continue;
                    }
                    if let Some(cell) = grid.get_mut(row as usize, col as usize) {
                        if cell.terrain == TerrainTag::Grass
                            && rng.random_bool(self.config.forest_probability)
                        {
                            cell.terrain = TerrainTag::Forest;
                        }
                    }
                }
            }
            debug!("Forest at {:?}, radius {}", center, radius);
            forests.push(Forest { center, radius });
        }
        forests
    }

    /// Returns the number of cells turned to sand.
    fn place_beaches<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> usize {
        let n = grid.size();
        let mut converted = 0;
        for row in 0..n {
            for col in 0..n {
                if grid.get(row, col).map(|c| c.terrain) != Some(TerrainTag::Grass) {
                    continue;
                }
                let near_water = grid
                    .neighbors(row, col)
                    .any(|(r, c)| grid.get(r, c).map(|other| other.terrain) == Some(TerrainTag::Water));
                if near_water && rng.random_bool(self.config.beach_probability) {
                    if let Some(cell) = grid.get_mut(row, col) {
                        cell.terrain = TerrainTag::Sand;
                        converted += 1;
                    }
                }
            }
        }
        converted
    }

    /// Returns `(draws, placed)`. Draws landing on water or an occupied cell
    /// are dropped, not retried.
    fn scatter_objects<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> (usize, usize) {
        let draws = self.config.objects.sample(rng);
        let mut placed = 0;
        for _ in 0..draws {
            let (row, col) = Self::random_cell(grid, rng);
            let Some(cell) = grid.get_mut(row, col) else {
                continue;
            };
            if cell.terrain == TerrainTag::Water || cell.object.is_some() {
                continue;
            }
            if let Some(object) = self.pick_object(cell.terrain, rng) {
                cell.object = Some(object);
                placed += 1;
            }
        }
        debug!("Object scatter placed {} of {} draws", placed, draws);
        (draws, placed)
    }

    fn pick_object<R: Rng>(&self, terrain: TerrainTag, rng: &mut R) -> Option<ObjectTag> {
        match terrain {
            TerrainTag::Forest => Some(if rng.random_bool(self.config.tree_probability) {
                ObjectTag::Tree
            } else {
                ObjectTag::Enemy
            }),
            TerrainTag::Mountain | TerrainTag::Stone => {
                Some(if rng.random_bool(self.config.rock_probability) {
                    ObjectTag::Rock
                } else {
                    ObjectTag::Castle
                })
            }
            TerrainTag::Grass => ObjectTag::all().choose(rng).copied(),
            TerrainTag::Sand => Some(if rng.random_bool(self.config.chest_probability) {
                ObjectTag::Chest
            } else {
                ObjectTag::Flag
            }),
            TerrainTag::Water => None,
        }
    }
}

/// Puts a player on the first free grass cell in row-major order. Leaves the
/// grid alone when there is none.
fn place_spawn(grid: &mut Grid) -> Option<(usize, usize)> {
    let (row, col, _) = grid
        .cells()
        .find(|(_, _, c)| c.terrain == TerrainTag::Grass && c.object.is_none())?;
    if let Some(cell) = grid.get_mut(row, col) {
        cell.object = Some(ObjectTag::Player);
    }
    Some((row, col))
}

/// Generates an `n` x `n` map with the default configuration.
pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Grid {
    MapGenerator::default().generate(n, rng)
}
