//! External contour extraction
//!
//! Two passes: BFS connected-component labeling (8-connectivity), then
//! Moore-neighbor boundary tracing around the outside of each component.
//! Only external boundaries are traced; holes inside a region are ignored.

use std::collections::VecDeque;

use dermafeat_core::Grid;

use super::shape::Contour;

/// Neighbor offsets in clockwise order starting from west.
const NEIGHBORS: [(isize, isize); 8] = [
    (0, -1),  // W
    (-1, -1), // NW
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
];

/// Find the external contour of every 8-connected foreground region.
///
/// Regions are returned in row-major discovery order, which makes tie
/// handling downstream (e.g. max-area selection) deterministic.
pub fn find_contours(grid: &Grid<u8>) -> Vec<Contour> {
    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let (labels, seeds) = label_components(grid);

    seeds
        .iter()
        .enumerate()
        .map(|(idx, &seed)| trace_boundary(&labels, seed, (idx + 1) as u32))
        .collect()
}

/// Label 8-connected foreground components.
///
/// Returns the label grid (0 = background) and, per label, the first
/// cell of the component in row-major scan order. That cell is always an
/// outer boundary cell, which seeds the tracer.
fn label_components(grid: &Grid<u8>) -> (Grid<u32>, Vec<(usize, usize)>) {
    let (rows, cols) = grid.shape();
    let mut labels: Grid<u32> = Grid::new(rows, cols);
    let mut seeds = Vec::new();
    let mut queue = VecDeque::new();

    for row in 0..rows {
        for col in 0..cols {
            if unsafe { grid.get_unchecked(row, col) } == 0
                || unsafe { labels.get_unchecked(row, col) } != 0
            {
                continue;
            }

            seeds.push((row, col));
            let label = seeds.len() as u32;

            unsafe { labels.set_unchecked(row, col, label) };
            queue.push_back((row, col));

            while let Some((r, c)) = queue.pop_front() {
                for &(dr, dc) in &NEIGHBORS {
                    let nr = r as isize + dr;
                    let nc = c as isize + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    if unsafe { grid.get_unchecked(nr, nc) } != 0
                        && unsafe { labels.get_unchecked(nr, nc) } == 0
                    {
                        unsafe { labels.set_unchecked(nr, nc, label) };
                        queue.push_back((nr, nc));
                    }
                }
            }
        }
    }

    (labels, seeds)
}

/// Moore-neighbor tracing of one component's outer boundary.
///
/// Walks clockwise around the component starting from its row-major first
/// cell, resuming the neighbor scan after the backtrack cell each step.
/// Terminates when the (position, backtrack) state repeats, which also
/// covers 1-px-wide spurs that are legitimately walked twice.
fn trace_boundary(labels: &Grid<u32>, start: (usize, usize), label: u32) -> Contour {
    let (rows, cols) = labels.shape();

    let is_fg = |r: isize, c: isize| -> bool {
        r >= 0
            && c >= 0
            && r < rows as isize
            && c < cols as isize
            && unsafe { labels.get_unchecked(r as usize, c as usize) } == label
    };

    let mut points = vec![start];
    let mut pos = (start.0 as isize, start.1 as isize);
    // The scan entered `start` moving east, so the cell to its west is
    // guaranteed background and serves as the initial backtrack.
    let mut backtrack_idx = 0usize; // index of W in NEIGHBORS

    let mut seen_states = std::collections::HashSet::new();
    let step_limit = 4 * rows * cols + 4;

    for _ in 0..step_limit {
        if !seen_states.insert((pos, backtrack_idx)) {
            break;
        }

        let mut moved = false;
        for k in 1..=8 {
            let i = (backtrack_idx + k) % 8;
            let (dr, dc) = NEIGHBORS[i];
            let nr = pos.0 + dr;
            let nc = pos.1 + dc;
            if is_fg(nr, nc) {
                // Backtrack for the next step: the cell we examined just
                // before finding this one, relative to the new position.
                let (pr, pc) = NEIGHBORS[(backtrack_idx + k - 1) % 8];
                let prev = (pos.0 + pr, pos.1 + pc);
                pos = (nr, nc);
                backtrack_idx = neighbor_index((prev.0 - nr, prev.1 - nc));
                moved = true;
                break;
            }
        }

        if !moved {
            // Isolated single cell
            break;
        }

        if (pos.0 as usize, pos.1 as usize) == start && points.len() > 1 {
            break;
        }
        points.push((pos.0 as usize, pos.1 as usize));
    }

    Contour::new(points)
}

fn neighbor_index(offset: (isize, isize)) -> usize {
    NEIGHBORS
        .iter()
        .position(|&o| o == offset)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&[u8]]) -> Grid<u8> {
        let h = rows.len();
        let w = rows[0].len();
        Grid::from_fn(h, w, |r, c| rows[r][c])
    }

    #[test]
    fn test_single_square_contour() {
        let grid = Grid::from_fn(12, 12, |r, c| {
            if (2..9).contains(&r) && (3..10).contains(&c) {
                255u8
            } else {
                0
            }
        });
        let contours = find_contours(&grid);
        assert_eq!(contours.len(), 1);

        let contour = &contours[0];
        let bb = contour.bounding_box().unwrap();
        assert_eq!((bb.row, bb.col, bb.height, bb.width), (2, 3, 7, 7));
        // 7x7 block: boundary polygon spans 6x6 cells of extent
        assert!((contour.area() - 36.0).abs() < 1e-9);
        assert!((contour.perimeter() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_components_in_scan_order() {
        let grid = grid_from_rows(&[
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 1, 1, 0, 0, 0, 0],
            &[0, 1, 1, 0, 0, 1, 0],
            &[0, 0, 0, 0, 1, 1, 0],
            &[0, 0, 0, 0, 0, 0, 0],
        ]);
        let contours = find_contours(&grid);
        assert_eq!(contours.len(), 2);
        // First discovered component first
        assert_eq!(contours[0].points()[0], (1, 1));
        assert_eq!(contours[1].points()[0], (2, 5));
    }

    #[test]
    fn test_diagonal_cells_are_one_component() {
        let grid = grid_from_rows(&[
            &[1, 0, 0],
            &[0, 1, 0],
            &[0, 0, 1],
        ]);
        let contours = find_contours(&grid);
        assert_eq!(contours.len(), 1);
    }

    #[test]
    fn test_isolated_pixel() {
        let mut grid: Grid<u8> = Grid::new(5, 5);
        grid.set(2, 2, 255).unwrap();
        let contours = find_contours(&grid);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points(), &[(2, 2)]);
        assert_eq!(contours[0].area(), 0.0);
    }

    #[test]
    fn test_hole_is_not_traced() {
        // Ring: outer boundary only (external retrieval)
        let grid = Grid::from_fn(12, 12, |r, c| {
            let inside = (2..10).contains(&r) && (2..10).contains(&c);
            let hole = (4..8).contains(&r) && (4..8).contains(&c);
            if inside && !hole {
                255u8
            } else {
                0
            }
        });
        let contours = find_contours(&grid);
        assert_eq!(contours.len(), 1);
        let bb = contours[0].bounding_box().unwrap();
        assert_eq!((bb.height, bb.width), (8, 8));
    }

    #[test]
    fn test_thin_line_walked_both_ways() {
        let grid = grid_from_rows(&[
            &[0, 0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0, 0],
        ]);
        let contours = find_contours(&grid);
        assert_eq!(contours.len(), 1);
        // Out and back along a 4-cell line: 3 + 3 segments
        assert!((contours[0].perimeter() - 6.0).abs() < 1e-9);
        assert_eq!(contours[0].area(), 0.0);
    }

    #[test]
    fn test_empty_grid() {
        let grid: Grid<u8> = Grid::new(0, 0);
        assert!(find_contours(&grid).is_empty());
        let grid: Grid<u8> = Grid::new(8, 8);
        assert!(find_contours(&grid).is_empty());
    }
}
