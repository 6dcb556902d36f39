use crate::raster::region::Region;

/// Fuse horizontally adjacent regions whose gap is at most `gap_threshold` pixels.
///
/// Regions are swept left to right by `min_x`; the gap to the running accumulator is
/// `next.min_x - current.max_x`. Fused regions keep the id of the left-most member.
/// The output is never longer than the input and its regions do not overlap in X.
#[tracing::instrument(skip(regions), fields(input = regions.len()))]
pub fn merge(regions: &[Region], gap_threshold: u32) -> Vec<Region> {
    let mut sorted = regions.to_vec();
    sorted.sort_by_key(|r| (r.min_x, r.min_y, r.id));

    let mut out: Vec<Region> = Vec::with_capacity(sorted.len());
    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return out;
    };

    for next in iter {
        let gap = i64::from(next.min_x) - i64::from(current.max_x);
        if gap <= i64::from(gap_threshold) {
            current = current.union(&next);
        } else {
            out.push(current);
            current = next;
        }
    }
    out.push(current);

    tracing::debug!(output = out.len(), "merge complete");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/merge.rs"]
mod tests;
