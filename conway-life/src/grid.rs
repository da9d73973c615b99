use crate::error::GridError;
use log::{debug, info, trace};
use std::fmt;
use world_grid::{GridCell, GridSize, Loc, Neighborhood, Random, WorldGrid};

const SEED_OFFSETS: [i32; 3] = [0, 1, -1];
const WIDE_SEED_OFFSETS: [i32; 5] = [-2, 2, -3, 3, -4];
const WIDE_SEED_MIN_CELLS: u32 = 15;

/// Game of Life on a finite grid whose size follows the viewport. Cells
/// past the edges count as dead.
#[derive(Clone, Debug)]
pub struct LifeGrid {
    cell_size: u32,
    grid: WorldGrid<LifeCell>,
}

impl LifeGrid {
    pub fn new(cell_size: u32) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        Ok(Self {
            cell_size,
            grid: WorldGrid::new(GridSize::default()),
        })
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn cols(&self) -> u32 {
        self.grid.size().width
    }

    pub fn rows(&self) -> u32 {
        self.grid.size().height
    }

    /// Pixel width covered by whole cells.
    pub fn width(&self) -> u32 {
        self.cell_size * self.cols()
    }

    pub fn height(&self) -> u32 {
        self.cell_size * self.rows()
    }

    pub fn num_cells(&self) -> usize {
        self.grid.num_cells()
    }

    pub fn population(&self) -> usize {
        self.grid.cells_iter().filter(|cell| cell.alive).count()
    }

    /// Alive flags in row-major order.
    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = bool> + Clone + '_ {
        self.grid.cells_iter().map(|cell| cell.alive)
    }

    /// Fits as many whole cells as possible into the pixel size and kills
    /// every cell. Non-positive sizes give an empty grid.
    pub fn resize(&mut self, width: i32, height: i32) {
        let size = GridSize::new(self.cells_along(width), self.cells_along(height));
        self.grid.resize(size);
        info!(
            "Grid resized to {} cells across, {} cells high",
            size.width, size.height
        );
    }

    fn cells_along(&self, pixels: i32) -> u32 {
        pixels.max(0) as u32 / self.cell_size
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn index(&self, x: u32, y: u32) -> Option<usize> {
        Loc::new(y, x).grid_index(self.grid.size())
    }

    pub fn coords(&self, index: usize) -> Option<(u32, u32)> {
        Loc::from_grid_index(index, self.grid.size()).map(|loc| (loc.col, loc.row))
    }

    /// Replaces the grid contents with a horizontal line through the center:
    /// three cells, or eight once the grid is more than 15 cells both ways.
    /// Cells that would land outside the grid are dropped.
    pub fn setup(&mut self) {
        self.clear();

        let center = Loc::new(self.rows().div_ceil(2), self.cols().div_ceil(2));
        let wide = self.cols() > WIDE_SEED_MIN_CELLS && self.rows() > WIDE_SEED_MIN_CELLS;
        let mut offsets = SEED_OFFSETS.to_vec();
        if wide {
            offsets.extend_from_slice(&WIDE_SEED_OFFSETS);
        }

        let size = self.grid.size();
        for col_offset in offsets {
            match center.offset(0, col_offset) {
                Some(loc) if loc.grid_index(size).is_some() => self.grid.cells[loc].alive = true,
                _ => trace!("Seed cell at column offset {col_offset} is off the grid"),
            }
        }
        debug!("Seeded {} cells", self.population());
    }

    /// Sets each cell alive with the given probability, leaving live cells
    /// alive.
    pub fn add_random_life(
        &mut self,
        rand: &mut Random,
        probability: f64,
    ) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GridError::InvalidProbability(probability));
        }
        for cell in self.grid.cells.cells_iter_mut() {
            if rand.next_bool(probability) {
                cell.alive = true;
            }
        }
        Ok(())
    }

    pub fn live_neighbors(&self, index: usize) -> Result<usize, GridError> {
        let loc = Loc::from_grid_index(index, self.grid.size()).ok_or(GridError::InvalidIndex {
            index,
            len: self.num_cells(),
        })?;
        let neighborhood = Neighborhood::new(&self.grid.cells, loc);
        Ok(LifeCell::num_live_neighbors(&neighborhood))
    }

    pub fn update(&mut self) {
        self.grid.update();
        trace!("Generation updated, population {}", self.population());
    }

    pub fn is_alive(&self, x: i64, y: i64) -> Result<bool, GridError> {
        let loc = self.loc(x, y)?;
        Ok(self.grid.cells[loc].alive)
    }

    pub fn set_alive(&mut self, x: i64, y: i64, alive: bool) -> Result<(), GridError> {
        let loc = self.loc(x, y)?;
        self.grid.cells[loc].alive = alive;
        Ok(())
    }

    /// Flips one cell. Out-of-range coordinates are rejected and leave the
    /// grid untouched.
    pub fn touch_ended(&mut self, x: i64, y: i64) -> Result<(), GridError> {
        let loc = self.loc(x, y)?;
        let cell = &mut self.grid.cells[loc];
        cell.alive = !cell.alive;
        debug!("Toggled cell ({x}, {y}) to {}", if cell.alive { "alive" } else { "dead" });
        Ok(())
    }

    fn loc(&self, x: i64, y: i64) -> Result<Loc, GridError> {
        let invalid = || GridError::InvalidCoordinate {
            x,
            y,
            cols: self.cols(),
            rows: self.rows(),
        };
        let col = u32::try_from(x).map_err(|_| invalid())?;
        let row = u32::try_from(y).map_err(|_| invalid())?;
        let loc = Loc::new(row, col);
        match loc.grid_index(self.grid.size()) {
            Some(_) => Ok(loc),
            None => Err(invalid()),
        }
    }
}

impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grid.size().is_empty() {
            return Ok(());
        }
        let cells: Vec<bool> = self.cells_iter().collect();
        for row in cells.chunks(self.cols() as usize) {
            let line: String = row
                .iter()
                .map(|&alive| if alive { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LifeCell {
    pub alive: bool,
}

impl LifeCell {
    fn num_live_neighbors(neighborhood: &Neighborhood<LifeCell>) -> usize {
        let mut result = 0;
        neighborhood.for_neighbor_cells(|neighbor| {
            if neighbor.alive {
                result += 1;
            }
        });
        result
    }
}

impl GridCell for LifeCell {
    fn update(&self, neighborhood: &Neighborhood<LifeCell>, next_cell: &mut LifeCell) {
        let neighbors = Self::num_live_neighbors(neighborhood);
        next_cell.alive = if self.alive {
            (2..=3).contains(&neighbors)
        } else {
            neighbors == 3
        };
    }
}
