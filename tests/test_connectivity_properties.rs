/// Property-based tests for the union-find forest and the raster scan
///
/// The scan's right/down-only union rule is checked against a plain
/// BFS flood fill over full 4-connectivity on random grids.
use gridsweep::{Classification, GridBuffer, GridConnectivityBuilder, PixelSource};
use proptest::prelude::*;

/// Reference decomposition: BFS flood fill over 4-neighbors
fn flood_fill_components(grid: &GridBuffer) -> Vec<usize> {
    let (w, h) = (grid.width(), grid.height());
    let mut label = vec![usize::MAX; w * h];
    let mut next = 0;

    for start in 0..w * h {
        if label[start] != usize::MAX {
            continue;
        }
        label[start] = next;
        let mut queue = std::collections::VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            let (x, y) = (id % w, id / w);
            let class = grid.classification(x, y);
            let mut visit = |nx: usize, ny: usize| {
                let nid = ny * w + nx;
                if label[nid] == usize::MAX && grid.classification(nx, ny) == class {
                    label[nid] = next;
                    queue.push_back(nid);
                }
            };
            if x > 0 {
                visit(x - 1, y);
            }
            if x + 1 < w {
                visit(x + 1, y);
            }
            if y > 0 {
                visit(x, y - 1);
            }
            if y + 1 < h {
                visit(x, y + 1);
            }
        }
        next += 1;
    }
    label
}

/// Random grid with two markers dropped on distinct cells
fn arb_grid() -> impl Strategy<Value = GridBuffer> {
    (2usize..12, 2usize..12, any::<u64>()).prop_map(|(w, h, seed)| {
        let mut grid = GridBuffer::new(w, h);
        // Cheap deterministic bit stream, one bit per cell
        let mut state = seed | 1;
        let mut bit = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state & 1 == 1
        };
        for y in 0..h {
            for x in 0..w {
                if bit() {
                    grid.set_classification(x, y, Classification::Foreground)
                        .unwrap();
                }
            }
        }
        grid.set_marker(0, 0).unwrap();
        grid.set_marker(w - 1, h - 1).unwrap();
        grid
    })
}

#[test]
fn prop_scan_matches_flood_fill() {
    proptest!(|(grid in arb_grid())| {
        // The scan normalizes markers; hand the reference the same view
        let mut reference = grid.clone();
        reference.clear_marker(0, 0);
        reference.clear_marker(reference.width() - 1, reference.height() - 1);
        let expected = flood_fill_components(&reference);
        let expected_count = expected.iter().max().map_or(0, |m| m + 1);

        let mut scanned = grid.clone();
        let mut model = GridConnectivityBuilder::build(&mut scanned).unwrap();

        prop_assert_eq!(model.num_components(), expected_count,
            "component count diverged from flood fill");
        // Dense first-seen labels must agree exactly: both sides assign
        // label 0 to the region of (0,0), 1 to the next new region, ...
        prop_assert_eq!(model.component_labels(), expected,
            "per-cell labels diverged from flood fill");
    });
}

#[test]
fn prop_has_solution_matches_flood_fill() {
    proptest!(|(grid in arb_grid())| {
        let (w, h) = (grid.width(), grid.height());
        let mut reference = grid.clone();
        reference.clear_marker(0, 0);
        reference.clear_marker(w - 1, h - 1);
        let labels = flood_fill_components(&reference);

        let mut scanned = grid.clone();
        let mut model = GridConnectivityBuilder::build(&mut scanned).unwrap();

        prop_assert_eq!(model.has_solution(), labels[0] == labels[w * h - 1]);
    });
}

#[test]
fn prop_find_idempotent_and_connectivity_monotone() {
    proptest!(|(n in 1usize..256, pairs in prop::collection::vec((0usize..256, 0usize..256), 0..64))| {
        let mut ds = gridsweep::DisjointSet::new(n);
        let mut merged = 0;
        for (x, y) in pairs {
            let (x, y) = (x % n, y % n);
            if ds.union(x, y).unwrap() {
                merged += 1;
            }
            // Once connected, always connected
            prop_assert!(ds.connected(x, y).unwrap());
            // Representative lookup is idempotent
            let root = ds.find(x).unwrap();
            prop_assert_eq!(ds.find(root).unwrap(), root);
        }
        prop_assert_eq!(ds.num_sets(), n - merged);
    });
}

#[test]
fn prop_component_id_stable_across_queries() {
    proptest!(|(grid in arb_grid())| {
        let mut scanned = grid.clone();
        let mut model = GridConnectivityBuilder::build(&mut scanned).unwrap();
        let (w, h) = (model.width(), model.height());

        let first: Vec<usize> = (0..w * h)
            .map(|id| model.component_id_of(id % w, id / w).unwrap())
            .collect();
        // Re-query in reverse; compression must not change representatives
        for id in (0..w * h).rev() {
            prop_assert_eq!(model.component_id_of(id % w, id / w).unwrap(), first[id]);
        }
    });
}
