use crate::{DimensionError, Grid, Tile};
use std::cmp::Ordering;
use std::fmt;

/// Configuration for solution generation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Maximum fill attempts before giving up.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { max_attempts: 1000 }
    }
}

/// A successfully generated board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The filled grid; every cell holds a tile.
    pub grid: Grid,
    /// Number of fill attempts consumed, starting at 1.
    pub attempts: usize,
}

/// Reason generation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested dimensions cannot host a balanced board.
    Dimensions(DimensionError),
    /// Every allowed attempt produced an unbalanced board.
    AttemptsExhausted {
        /// Number of attempts consumed before giving up.
        attempts: usize,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Dimensions(e) => e.fmt(f),
            GenerateError::AttemptsExhausted { attempts } => {
                write!(f, "no balanced board found within {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Dimensions(e) => Some(e),
            GenerateError::AttemptsExhausted { .. } => None,
        }
    }
}

impl From<DimensionError> for GenerateError {
    fn from(e: DimensionError) -> Self {
        GenerateError::Dimensions(e)
    }
}

/// Balanced-board generator.
///
/// Fills the grid cell by cell in row-major order. Each cell is decided by
/// the first applicable rule: break a run of two to the left, break a run of
/// two above, honor a row or column that already used up one kind's half,
/// then fall back to the under-represented kind (random on a tie or a
/// conflict between the two axes). The pass is greedy and never revisits a
/// cell, so the balance rule can still end up violated; the finished board is
/// checked and the whole fill is retried on a fresh grid until it passes or
/// [`GeneratorConfig::max_attempts`] runs out.
pub struct Generator {
    config: GeneratorConfig,
    rng: SeedRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with the default configuration and an OS-seeded
    /// random source.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SeedRng::from_entropy(),
        }
    }

    /// Create a generator with a custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SeedRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SeedRng::with_seed(seed),
        }
    }

    /// Create a seeded generator with a custom configuration.
    pub fn with_config_and_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SeedRng::with_seed(seed),
        }
    }

    /// Generate a balanced board of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Dimensions`] before any fill attempt when a
    /// dimension is zero or odd, and [`GenerateError::AttemptsExhausted`]
    /// when no fill attempt within the configured budget passed the balance
    /// check.
    pub fn generate(&mut self, width: usize, height: usize) -> Result<Solution, GenerateError> {
        let mut grid = Grid::new(width, height)?;
        let mut attempts = 0;
        while attempts < self.config.max_attempts {
            attempts += 1;
            self.fill(&mut grid);
            if is_balanced(&grid) {
                return Ok(Solution { grid, attempts });
            }
            grid.reset_all();
        }
        Err(GenerateError::AttemptsExhausted { attempts })
    }

    /// One full fill pass over the grid, top row first, left to right.
    fn fill(&mut self, grid: &mut Grid) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let tile = self.choose(grid, x, y);
                grid.set(x, y, tile);
            }
        }
    }

    /// Decide the tile for `(x, y)` from already-placed cells only.
    fn choose(&mut self, grid: &Grid, x: usize, y: usize) -> Tile {
        // A pair of identical tiles to the left or above forces the opposite
        // kind; anything else would complete a run of three.
        if let Some(pair) = run_to_left(grid, x, y) {
            return pair.opposite();
        }
        if let Some(pair) = run_above(grid, x, y) {
            return pair.opposite();
        }

        let row = row_prefix(grid, x, y);
        let column = column_prefix(grid, x, y);

        // A kind that already filled its half of the row or column rules
        // itself out.
        if let Some(forced) = row.and_then(|counts| counts.forced(grid.width() / 2)) {
            return forced;
        }
        if let Some(forced) = column.and_then(|counts| counts.forced(grid.height() / 2)) {
            return forced;
        }

        let row_pref = row.and_then(AxisCounts::preferred);
        let column_pref = column.and_then(AxisCounts::preferred);
        match (row_pref, column_pref) {
            (Some(tile), None) | (None, Some(tile)) => tile,
            (Some(a), Some(b)) if a == b => a,
            // No preference either way, or the axes disagree.
            _ => self.rng.coin_flip(),
        }
    }
}

/// Prefix tile counts along one axis.
#[derive(Debug, Clone, Copy)]
struct AxisCounts {
    trees: usize,
    grass: usize,
}

impl AxisCounts {
    /// Tile to place once the other kind has used up its half of the axis.
    fn forced(self, half: usize) -> Option<Tile> {
        if self.trees >= half {
            Some(Tile::Grass)
        } else if self.grass >= half {
            Some(Tile::Tree)
        } else {
            None
        }
    }

    /// Under-represented kind, if the counts differ.
    fn preferred(self) -> Option<Tile> {
        match self.trees.cmp(&self.grass) {
            Ordering::Less => Some(Tile::Tree),
            Ordering::Greater => Some(Tile::Grass),
            Ordering::Equal => None,
        }
    }
}

/// Kind shared by the two cells immediately left of `(x, y)`, if both are
/// set and equal.
fn run_to_left(grid: &Grid, x: usize, y: usize) -> Option<Tile> {
    if x < 2 {
        return None;
    }
    let near = grid.get(x - 1, y)?;
    let far = grid.get(x - 2, y)?;
    (near == far).then_some(near)
}

/// Kind shared by the two cells immediately above `(x, y)`, if both are set
/// and equal.
fn run_above(grid: &Grid, x: usize, y: usize) -> Option<Tile> {
    if y < 2 {
        return None;
    }
    let near = grid.get(x, y - 1)?;
    let far = grid.get(x, y - 2)?;
    (near == far).then_some(near)
}

/// Counts over the filled cells strictly left of `(x, y)` in its row, or
/// `None` if any of them is still unset.
fn row_prefix(grid: &Grid, x: usize, y: usize) -> Option<AxisCounts> {
    prefix_counts((0..x).map(|i| grid.get(i, y)))
}

/// Counts over the filled cells strictly above `(x, y)` in its column, or
/// `None` if any of them is still unset.
fn column_prefix(grid: &Grid, x: usize, y: usize) -> Option<AxisCounts> {
    prefix_counts((0..y).map(|j| grid.get(x, j)))
}

fn prefix_counts(cells: impl Iterator<Item = Option<Tile>>) -> Option<AxisCounts> {
    let mut counts = AxisCounts { trees: 0, grass: 0 };
    for cell in cells {
        match cell? {
            Tile::Tree => counts.trees += 1,
            Tile::Grass => counts.grass += 1,
        }
    }
    Some(counts)
}

/// Check the balance rule over the whole board: every row holds exactly
/// `width / 2` of each kind and every column `height / 2`.
///
/// The no-triple rule is not re-checked here. The fill rules break every
/// potential run of three, so only balance violations can survive a pass.
fn is_balanced(grid: &Grid) -> bool {
    let half_width = grid.width() / 2;
    for y in 0..grid.height() {
        match row_prefix(grid, grid.width(), y) {
            Some(counts) => {
                if counts.trees != half_width || counts.grass != half_width {
                    return false;
                }
            }
            None => return false,
        }
    }

    let half_height = grid.height() / 2;
    for x in 0..grid.width() {
        match column_prefix(grid, x, grid.height()) {
            Some(counts) => {
                if counts.trees != half_height || counts.grass != half_height {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}

/// Splitmix64 PRNG, seeded from the OS by default so boards differ between
/// runs, pinnable with an explicit seed for reproducible output.
struct SeedRng {
    state: u64,
}

impl SeedRng {
    fn from_entropy() -> Self {
        // getrandom keeps this working on WASM targets via the js feature.
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn coin_flip(&mut self) -> Tile {
        if self.next_u64() & 1 == 0 {
            Tile::Tree
        } else {
            Tile::Grass
        }
    }
}
