/// Single-pass raster scan that builds the connectivity forest
use log::{debug, trace};

use crate::connectivity::ConnectivityModel;
use crate::error::GridError;
use crate::grid::PixelSource;
use crate::union_find::DisjointSet;

/// Entry/exit discovery state during the raster pass.
///
/// Raster order decides the roles: the first marker sighted is the
/// entry, the second the exit. Any later sighting replaces the exit.
#[derive(Default)]
struct MarkerTracker {
    entry: Option<(usize, usize)>,
    exit: Option<(usize, usize)>,
}

impl MarkerTracker {
    fn sight(&mut self, x: usize, y: usize) {
        if self.entry.is_none() {
            trace!("entry marker at ({x}, {y})");
            self.entry = Some((x, y));
        } else {
            trace!("exit marker at ({x}, {y})");
            self.exit = Some((x, y));
        }
    }

    fn require_both(self) -> Result<((usize, usize), (usize, usize)), GridError> {
        match (self.entry, self.exit) {
            (Some(entry), Some(exit)) => Ok((entry, exit)),
            (entry, _) => Err(GridError::MissingMarker {
                found: entry.is_some() as usize,
            }),
        }
    }
}

/// Builds a [`ConnectivityModel`] from a pixel source in one raster
/// pass, row-major, top-to-bottom, left-to-right.
///
/// Each cell is unioned only with its right and down neighbor when
/// their classifications match. Because the scan is row-major, any
/// same-state union with an up or left neighbor was already performed
/// when that earlier cell was processed, so the 2wh - w - h attempts
/// cover full undirected 4-connectivity.
pub struct GridConnectivityBuilder;

impl GridConnectivityBuilder {
    pub fn build<S: PixelSource>(source: &mut S) -> Result<ConnectivityModel, GridError> {
        let width = source.width();
        let height = source.height();
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }

        let mut forest = DisjointSet::new(width * height);
        let mut markers = MarkerTracker::default();

        // (0,0) has no up/left predecessor in the scan to discover it,
        // so a marker there must be normalized before the main pass.
        if source.is_marker(0, 0) {
            source.clear_marker(0, 0);
            markers.sight(0, 0);
        }

        for y in 0..height {
            for x in 0..width {
                let cell = y * width + x;

                if y + 1 < height {
                    if source.is_marker(x, y + 1) {
                        source.clear_marker(x, y + 1);
                        markers.sight(x, y + 1);
                    }
                    if source.classification(x, y) == source.classification(x, y + 1) {
                        forest.union(cell, cell + width)?;
                    }
                }

                if x + 1 < width {
                    if source.is_marker(x + 1, y) {
                        source.clear_marker(x + 1, y);
                        markers.sight(x + 1, y);
                    }
                    if source.classification(x, y) == source.classification(x + 1, y) {
                        forest.union(cell, cell + 1)?;
                    }
                }
            }
        }

        let (entry, exit) = markers.require_both()?;
        debug!(
            "scanned {width}x{height} grid: {} components, entry {:?}, exit {:?}",
            forest.num_sets(),
            entry,
            exit
        );
        Ok(ConnectivityModel::new(forest, width, height, entry, exit))
    }
}
