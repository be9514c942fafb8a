//! Triangle index generation.
//!
//! Vertices are row-major with `w` vertices per row. The cell whose top-left
//! vertex is `n` becomes triangles `(n, n+w+1, n+1)` and `(n, n+w, n+w+1)`.

/// Prebuilt indices for a 4x4-vertex (3x3-cell) grid.
///
/// Rows are emitted top to bottom, so the first 18 or 36 entries are also
/// the indices of 3x1 and 3x2 cell grids.
#[rustfmt::skip]
pub const G3X3_INDICES: [u16; 54] = [
    0, 5, 1, 0, 4, 5,
    1, 6, 2, 1, 5, 6,
    2, 7, 3, 2, 6, 7,

    4, 9, 5, 4, 8, 9,
    5, 10, 6, 5, 9, 10,
    6, 11, 7, 6, 10, 11,

    8, 13, 9, 8, 12, 13,
    9, 14, 10, 9, 13, 14,
    10, 15, 11, 10, 14, 15,
];

/// Whether the prebuilt table covers this division shape.
pub fn uses_static_table(num_x_divs: usize, num_y_divs: usize) -> bool {
    num_x_divs == 2 && num_y_divs <= 2
}

/// Write indices for an `x_cells` by `y_cells` grid. Returns the number of
/// indices written.
///
/// Vertex numbers must fit in `u16`; callers bound the grid beforehand.
pub fn fill_indices(indices: &mut [u16], x_cells: usize, y_cells: usize) -> usize {
    let w = x_cells + 1;
    let cells = (0..y_cells).flat_map(|row| (0..x_cells).map(move |col| row * w + col));
    let mut written = 0;
    for (tri, n) in indices.chunks_exact_mut(6).zip(cells) {
        let [a, b, c, d] = [n, n + 1, n + w, n + w + 1].map(|i| i as u16);
        tri.copy_from_slice(&[a, d, b, a, c, d]);
        written += 6;
    }
    written
}
