use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::grid::FlatGrid;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::rules;
use crate::CellValue;
use crate::Coord;

/// Age increment applied to each surviving cell per generation.
pub const DEFAULT_AGE_STEP: CellValue = 10;

/// A running simulation: one grid plus the state that drives it forward.
///
/// One [`step`](World::step) is one generation: a life pass over the whole
/// grid, then (when aging is on) an age pass, each reading the previous
/// fully-formed generation through [`Grid::transform`].
pub struct World<G = FlatGrid> {
    /// The cell field. Exposed for the rendering/editing layer's query
    /// surface (`read`, `bounds`).
    pub grid: G,

    generation: u64,
    paused: bool,
    aging: bool,
    age_step: CellValue,
}

impl World<FlatGrid> {
    /// An all-dead world of the given dimensions, running, with aging on.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_grid(FlatGrid::new(width, height))
    }
}

impl<G: Grid> World<G> {
    /// Wrap an existing grid backing.
    pub fn with_grid(grid: G) -> Self {
        Self {
            grid,
            generation: 0,
            paused: false,
            aging: true,
            age_step: DEFAULT_AGE_STEP,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn aging(&self) -> bool {
        self.aging
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
    }

    pub fn toggle_aging(&mut self) {
        self.aging = !self.aging;
        debug!(aging = self.aging, "aging toggled");
    }

    /// Apply a per-cell initializer once across the whole grid.
    pub fn seed_with<F>(&mut self, mut f: F)
    where
        F: FnMut(Coord, Coord) -> CellValue,
    {
        self.grid.transform(|_, x, y| f(x, y));
    }

    /// Randomize the grid: each cell is dead with probability 1/2, otherwise
    /// uniform in `0..=255`. The generator is seeded explicitly so the same
    /// seed always produces the same world.
    pub fn randomize(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        self.seed_with(|_, _| if rng.r#gen::<bool>() { 0 } else { rng.r#gen() });
    }

    /// Advance one generation, unless paused.
    ///
    /// The life pass and the age pass are each a single infallible
    /// buffer-and-swap over the grid, so a step either completes entirely or
    /// (when paused) does nothing at all.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }

        self.grid.transform(|g, x, y| rules::life(g, x, y));

        if self.aging {
            let step = self.age_step;
            self.grid.transform(|g, x, y| rules::age(g, x, y, step));
        }

        self.generation += 1;
    }

    /// Advance `n` generations.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Interactive edit: flip the cell at `(x, y)` between dead and alive,
    /// returning its new value.
    ///
    /// An out-of-bounds coordinate (a mis-mapped mouse click, say) is
    /// reported to the caller, who decides whether to surface or drop it.
    pub fn toggle(&mut self, x: Coord, y: Coord) -> Result<CellValue, GridError> {
        let v = if self.grid.read(x, y)? == 0 { 1 } else { 0 };
        self.grid.write(x, y, v)?;

        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_dead_and_running() {
        let world = World::new(10, 10);

        assert_eq!(world.generation(), 0);
        assert!(!world.is_paused());
        assert_eq!(world.grid.read(5, 5), Ok(0));
    }

    #[test]
    fn empty_world_is_a_fixed_point() {
        let mut world = World::new(8, 8);

        world.step();

        assert_eq!(world.generation(), 1);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(world.grid.read(x, y), Ok(0));
            }
        }
    }

    #[test]
    fn paused_world_does_not_move() {
        let mut world = World::new(5, 5);
        world.grid.write(2, 2, 1).unwrap();

        world.toggle_pause();
        world.step();

        assert_eq!(world.generation(), 0);
        assert_eq!(world.grid.read(2, 2), Ok(1));
    }

    #[test]
    fn toggle_flips_between_dead_and_alive() {
        let mut world = World::new(5, 5);

        assert_eq!(world.toggle(2, 2), Ok(1));
        assert_eq!(world.toggle(2, 2), Ok(0));
    }

    #[test]
    fn toggle_reports_out_of_bounds() {
        let mut world = World::new(5, 5);

        assert_eq!(
            world.toggle(17, -3),
            Err(GridError::OutOfBounds { x: 17, y: -3 })
        );
    }

    #[test]
    fn same_seed_same_world() {
        let mut a = World::new(16, 16);
        let mut b = World::new(16, 16);

        a.randomize(1234);
        b.randomize(1234);

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(a.grid.read(x, y), b.grid.read(x, y));
            }
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = World::new(16, 16);
        let mut b = World::new(16, 16);

        a.randomize(1);
        b.randomize(2);

        let same = (0..16)
            .flat_map(|y| (0..16).map(move |x| (x, y)))
            .all(|(x, y)| a.grid.read(x, y) == b.grid.read(x, y));

        assert!(!same);
    }
}
