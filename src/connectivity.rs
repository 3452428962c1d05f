/// Query surface over a scanned grid
use indexmap::IndexSet;

use crate::error::GridError;
use crate::union_find::DisjointSet;

/// A fully constructed connectivity decomposition of one grid.
///
/// Created by [`GridConnectivityBuilder::build`] and immutable
/// afterward, except that representative lookups compress paths inside
/// the forest. Compression never changes which cells are equivalent,
/// only how fast the next lookup runs, which is why query methods take
/// `&mut self`.
///
/// [`GridConnectivityBuilder::build`]: crate::scan::GridConnectivityBuilder::build
#[derive(Debug)]
pub struct ConnectivityModel {
    forest: DisjointSet,
    width: usize,
    height: usize,
    entry: (usize, usize),
    exit: (usize, usize),
}

impl ConnectivityModel {
    pub(crate) fn new(
        forest: DisjointSet,
        width: usize,
        height: usize,
        entry: (usize, usize),
        exit: (usize, usize),
    ) -> Self {
        ConnectivityModel {
            forest,
            width,
            height,
            entry,
            exit,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Coordinates of the first marker sighted during the scan
    pub fn entry(&self) -> (usize, usize) {
        self.entry
    }

    /// Coordinates of the second marker sighted during the scan
    pub fn exit(&self) -> (usize, usize) {
        self.exit
    }

    /// Row-major cell identifier for (x, y)
    pub fn cell_id(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::IndexOutOfRange {
                index: y.saturating_mul(self.width).saturating_add(x),
                len: self.width * self.height,
            })
        }
    }

    /// Number of maximal connected regions in the grid
    pub fn num_components(&self) -> usize {
        self.forest.num_sets()
    }

    /// Whether two cells belong to the same region
    pub fn are_connected(
        &mut self,
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    ) -> Result<bool, GridError> {
        let a = self.cell_id(x1, y1)?;
        let b = self.cell_id(x2, y2)?;
        self.forest.connected(a, b)
    }

    /// Whether the entry and exit markers lie in the same region.
    ///
    /// Total: the builder already fails with `MissingMarker` when
    /// fewer than two markers exist, so both ids are always valid here.
    pub fn has_solution(&mut self) -> bool {
        let entry_id = self.entry.1 * self.width + self.entry.0;
        let exit_id = self.exit.1 * self.width + self.exit.0;
        self.forest.find_root(entry_id) == self.forest.find_root(exit_id)
    }

    /// Stable representative of the region containing (x, y).
    ///
    /// Repeated calls for the same cell return the same value as long
    /// as no further unions happen. No guarantee on magnitude or
    /// ordering; consumers wanting dense ids should de-duplicate, or
    /// use [`component_labels`](Self::component_labels).
    pub fn component_id_of(&mut self, x: usize, y: usize) -> Result<usize, GridError> {
        let id = self.cell_id(x, y)?;
        Ok(self.forest.find_root(id))
    }

    /// Manually merge the regions containing the two cells.
    ///
    /// Returns true if two distinct regions were merged. Intended for
    /// neighbor cells, but any pair is accepted.
    pub fn connect(
        &mut self,
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    ) -> Result<bool, GridError> {
        let a = self.cell_id(x1, y1)?;
        let b = self.cell_id(x2, y2)?;
        self.forest.union(a, b)
    }

    /// Dense per-cell region labels in row-major order.
    ///
    /// Labels are in `[0, num_components())`, assigned in first-seen
    /// raster order, so label 0 is always the region of (0, 0).
    pub fn component_labels(&mut self) -> Vec<usize> {
        let mut seen: IndexSet<usize> = IndexSet::with_capacity(self.forest.num_sets());
        let mut labels = Vec::with_capacity(self.width * self.height);
        for id in 0..self.width * self.height {
            let root = self.forest.find_root(id);
            let (label, _) = seen.insert_full(root);
            labels.push(label);
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_2x2_uniform() -> ConnectivityModel {
        let mut forest = DisjointSet::new(4);
        forest.union(0, 1).unwrap();
        forest.union(0, 2).unwrap();
        forest.union(2, 3).unwrap();
        ConnectivityModel::new(forest, 2, 2, (0, 0), (1, 1))
    }

    #[test]
    fn test_queries_on_uniform_grid() {
        let mut model = model_2x2_uniform();
        assert_eq!(model.num_components(), 1);
        assert!(model.are_connected(0, 0, 1, 1).unwrap());
        assert!(model.has_solution());
        assert_eq!(model.component_labels(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_cell_id_bounds() {
        let model = model_2x2_uniform();
        assert_eq!(model.cell_id(1, 1).unwrap(), 3);
        assert!(matches!(
            model.cell_id(2, 0),
            Err(GridError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            model.cell_id(0, 2),
            Err(GridError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_connect_merges_regions() {
        let mut forest = DisjointSet::new(4);
        forest.union(0, 1).unwrap();
        let mut model = ConnectivityModel::new(forest, 2, 2, (0, 0), (1, 1));
        assert_eq!(model.num_components(), 3);
        assert!(model.connect(0, 0, 0, 1).unwrap());
        assert_eq!(model.num_components(), 2);
        // already merged: no-op
        assert!(!model.connect(1, 0, 0, 1).unwrap());
    }
}
