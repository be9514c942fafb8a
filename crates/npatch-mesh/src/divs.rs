//! Division normalization and stretch-factor computation.
//!
//! An axis with `n` divisions splits into `n + 1` segments that alternate
//! fixed / stretch, starting with a fixed segment at 0. Fixed segments draw
//! at 1:1; stretch segments share whatever destination space is left.

/// Strip leading `0` divisions and trailing divisions equal to `extent`.
///
/// Those entries bound zero-width edge segments and only inflate the mesh.
/// The result is a subslice of `divs`.
pub fn trim_y_divs(divs: &[i32], extent: i32) -> &[i32] {
    let zeros = divs.iter().take_while(|&&d| d == 0).count();
    let divs = &divs[zeros..];
    let full = divs.iter().rev().take_while(|&&d| d == extent).count();
    &divs[..divs.len() - full]
}

/// Number of stretch segments produced by `num_divs` divisions.
pub fn stretch_count(num_divs: usize) -> usize {
    num_divs.div_ceil(2)
}

/// Total source length of the paired stretch segments
/// `[divs[i-1], divs[i])` for odd `i`.
pub fn stretch_size(divs: &[i32]) -> i64 {
    divs.chunks_exact(2)
        .map(|pair| i64::from(pair[1]) - i64::from(pair[0]))
        .sum()
}

/// Destination length given to each stretch segment.
///
/// `None` when the axis has no stretch segments. The result is negative when
/// the destination cannot even hold the fixed content.
pub fn stretch_factor(divs: &[i32], extent: u32, dest_extent: f32) -> Option<f32> {
    let count = stretch_count(divs.len());
    if count == 0 {
        return None;
    }
    let fixed = i64::from(extent) - stretch_size(divs);
    Some((dest_extent - fixed as f32) / count as f32)
}
