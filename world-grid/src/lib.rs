#![deny(clippy::all)]
#![forbid(unsafe_code)]

use arrayvec::ArrayVec;
use rand::SeedableRng;
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::fmt::Debug;
use std::mem;
use std::ops::{Index, IndexMut};

/// Double-buffered grid. `update` computes every next cell from the current
/// generation only, then swaps the buffers.
#[derive(Clone, Debug, Default)]
pub struct WorldGrid<C>
where
    C: GridCell,
{
    pub cells: WorldGridCells<C>,
    next_cells: WorldGridCells<C>,
}

impl<C> WorldGrid<C>
where
    C: Debug + GridCell,
{
    pub fn new(size: GridSize) -> Self {
        Self {
            cells: WorldGridCells::new(size),
            next_cells: WorldGridCells::new(size),
        }
    }

    pub fn size(&self) -> GridSize {
        self.cells.size()
    }

    pub fn num_cells(&self) -> usize {
        self.cells.num_cells()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.cells_iter()
    }

    /// Reallocates both buffers. Every cell comes back as `C::default()`.
    pub fn resize(&mut self, size: GridSize) {
        self.cells = WorldGridCells::new(size);
        self.next_cells = WorldGridCells::new(size);
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn update(&mut self) {
        self.next_cells.copy_from(&self.cells);
        self.update_cells();
        mem::swap(&mut self.next_cells, &mut self.cells);
    }

    fn update_cells(&mut self) {
        let size = self.size();
        for row in 0..size.height {
            for col in 0..size.width {
                self.update_cell(Loc::new(row, col));
            }
        }
    }

    fn update_cell(&mut self, loc: Loc) {
        let cell = &self.cells[loc];
        let neighborhood = Neighborhood::new(&self.cells, loc);
        let next_cell = &mut self.next_cells[loc];
        cell.update(&neighborhood, next_cell);
    }
}

#[derive(Clone, Debug, Default)]
pub struct WorldGridCells<C>
where
    C: GridCell,
{
    cells: Vec<C>,
    size: GridSize,
}

impl<C> WorldGridCells<C>
where
    C: GridCell,
{
    /// A zero width or height gives an empty store; lookups on it all miss.
    pub fn new(size: GridSize) -> Self {
        Self {
            cells: vec![C::default(); size.num_cells()],
            size,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &C> + Clone {
        self.cells.iter()
    }

    pub fn cells_iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut C> {
        self.cells.iter_mut()
    }

    pub fn cell(&self, loc: Loc) -> Option<&C> {
        loc.grid_index(self.size).map(|index| &self.cells[index])
    }

    pub fn cell_mut(&mut self, loc: Loc) -> Option<&mut C> {
        loc.grid_index(self.size)
            .map(|index| &mut self.cells[index])
    }

    pub fn cell_at_index(&self, index: usize) -> Option<&C> {
        self.cells.get(index)
    }

    pub fn clear(&mut self) {
        self.cells.fill(C::default());
    }

    pub fn copy_from(&mut self, source: &Self) {
        self.cells.copy_from_slice(&source.cells);
    }
}

impl<C> Index<Loc> for WorldGridCells<C>
where
    C: GridCell,
{
    type Output = C;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl<C> IndexMut<Loc> for WorldGridCells<C>
where
    C: GridCell,
{
    fn index_mut(&mut self, loc: Loc) -> &mut Self::Output {
        self.cell_mut(loc)
            .unwrap_or_else(|| panic!("Index_mut indices {}, {} out of bounds", loc.row, loc.col))
    }
}

pub trait GridCell
where
    Self: Copy + Default,
{
    fn update(&self, neighborhood: &Neighborhood<Self>, next_cell: &mut Self);
}

/// The Moore neighborhood of one cell. Edges do not wrap: neighbors that
/// would fall outside the grid are simply absent.
pub struct Neighborhood<'a, C>
where
    C: GridCell,
{
    cells: &'a WorldGridCells<C>,
    center: Loc,
}

impl<'a, C> Neighborhood<'a, C>
where
    C: GridCell,
{
    const OFFSETS: [(i32, i32); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    pub fn new(cells: &'a WorldGridCells<C>, center: Loc) -> Self {
        Self { cells, center }
    }

    pub fn center(&self) -> Loc {
        self.center
    }

    pub fn neighbor_locs(&self) -> ArrayVec<Loc, 8> {
        Self::OFFSETS
            .iter()
            .filter_map(|&(row_offset, col_offset)| self.center.offset(row_offset, col_offset))
            .filter(|loc| loc.grid_index(self.cells.size()).is_some())
            .collect()
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(&C),
    {
        for loc in self.neighbor_locs() {
            f(&self.cells[loc]);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Inverse of `grid_index`.
    pub fn from_grid_index(index: usize, size: GridSize) -> Option<Self> {
        if index >= size.num_cells() {
            return None;
        }
        let width = size.width as usize;
        Some(Self::new((index / width) as u32, (index % width) as u32))
    }

    pub fn grid_index(&self, size: GridSize) -> Option<usize> {
        if self.row < size.height && self.col < size.width {
            Some(self.row as usize * size.width as usize + self.col as usize)
        } else {
            None
        }
    }

    /// `None` when the offset would go below zero or overflow.
    pub fn offset(&self, row_offset: i32, col_offset: i32) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add_signed(row_offset)?,
            self.col.checked_add_signed(col_offset)?,
        ))
    }
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn next_bool(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct CountingCell {
        alive: bool,
        neighbors: usize,
    }

    impl GridCell for CountingCell {
        fn update(&self, neighborhood: &Neighborhood<Self>, next_cell: &mut Self) {
            let mut count = 0;
            neighborhood.for_neighbor_cells(|neighbor| {
                if neighbor.alive {
                    count += 1;
                }
            });
            next_cell.neighbors = count;
        }
    }

    fn full_grid(width: u32, height: u32) -> WorldGrid<CountingCell> {
        let mut grid: WorldGrid<CountingCell> = WorldGrid::new(GridSize::new(width, height));
        for cell in grid.cells.cells_iter_mut() {
            cell.alive = true;
        }
        grid
    }

    #[test]
    fn neighborhood_does_not_wrap() {
        let mut grid = full_grid(4, 3);
        grid.update();

        assert_eq!(grid.cells[Loc::new(0, 0)].neighbors, 3);
        assert_eq!(grid.cells[Loc::new(0, 1)].neighbors, 5);
        assert_eq!(grid.cells[Loc::new(1, 1)].neighbors, 8);
        assert_eq!(grid.cells[Loc::new(2, 3)].neighbors, 3);
    }

    #[test]
    fn neighbor_locs_skip_out_of_bounds() {
        let cells = WorldGridCells::<CountingCell>::new(GridSize::new(3, 3));
        assert_eq!(Neighborhood::new(&cells, Loc::new(0, 0)).neighbor_locs().len(), 3);
        assert_eq!(Neighborhood::new(&cells, Loc::new(1, 1)).neighbor_locs().len(), 8);
        assert_eq!(Neighborhood::new(&cells, Loc::new(2, 1)).neighbor_locs().len(), 5);
    }

    #[test]
    fn update_reads_only_current_generation() {
        let mut grid = full_grid(3, 1);
        grid.update();
        let counts: Vec<usize> = grid.cells_iter().map(|cell| cell.neighbors).collect();
        assert_eq!(counts, vec![1, 2, 1]);
    }

    #[test]
    fn resize_clears_cells() {
        let mut grid = full_grid(3, 3);
        grid.resize(GridSize::new(5, 2));
        assert_eq!(grid.num_cells(), 10);
        assert!(grid.cells_iter().all(|cell| !cell.alive));
    }

    #[test]
    fn empty_grid_updates_without_cells() {
        let mut grid = WorldGrid::<CountingCell>::new(GridSize::new(0, 7));
        grid.update();
        assert_eq!(grid.num_cells(), 0);
        assert!(grid.cells.cell(Loc::new(0, 0)).is_none());
    }

    #[test]
    fn grid_index_round_trips_through_loc() {
        let size = GridSize::new(7, 4);
        let loc = Loc::new(2, 5);
        let index = loc.grid_index(size).unwrap();
        assert_eq!(index, 19);
        assert_eq!(Loc::from_grid_index(index, size), Some(loc));
        assert_eq!(Loc::from_grid_index(28, size), None);
        assert_eq!(Loc::new(4, 0).grid_index(size), None);
    }

    #[test]
    fn offset_rejects_negative_coordinates() {
        assert_eq!(Loc::new(0, 3).offset(-1, 0), None);
        assert_eq!(Loc::new(2, 3).offset(-1, 1), Some(Loc::new(1, 4)));
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut a = Random::from_seed(7);
        let mut b = Random::from_seed(7);
        let draws_a: Vec<bool> = (0..32).map(|_| a.next_bool(0.5)).collect();
        let draws_b: Vec<bool> = (0..32).map(|_| b.next_bool(0.5)).collect();
        assert_eq!(draws_a, draws_b);
    }
}
