use crate::raster::mask::PixelMask;
use crate::raster::region::Region;

/// Result of a labelling pass: every pixel's region id plus the regions themselves.
#[derive(Clone, Debug)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<Option<u32>>,
    regions: Vec<Region>,
}

impl LabelMap {
    /// Region id of the component covering `(x, y)`, or `None` for transparent pixels.
    pub fn label_at(&self, x: u32, y: u32) -> Option<u32> {
        self.labels[y as usize * self.width as usize + x as usize]
    }

    /// Regions in discovery order; `regions()[i].id == i`.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Drop the per-pixel labels and keep the regions.
    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    /// Mask width the labels were computed for.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height the labels were computed for.
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Extract maximal 4-connected components of pixels with `alpha >= alpha_threshold`.
///
/// An all-transparent mask yields no regions.
pub fn segment(mask: &PixelMask, alpha_threshold: u8) -> Vec<Region> {
    label(mask, alpha_threshold).into_regions()
}

/// Label every pixel with the id of its 4-connected component.
///
/// Pixels are scanned in raster order; each unvisited opaque pixel seeds an iterative flood fill
/// driven by an explicit stack, so deep components cannot exhaust the call stack.
#[tracing::instrument(skip(mask), fields(width = mask.width(), height = mask.height()))]
pub fn label(mask: &PixelMask, alpha_threshold: u8) -> LabelMap {
    let width = mask.width();
    let height = mask.height();
    let alpha = mask.alpha();

    let mut visited = vec![false; alpha.len()];
    let mut labels: Vec<Option<u32>> = vec![None; alpha.len()];
    let mut regions: Vec<Region> = Vec::new();
    let mut stack: Vec<(u32, u32)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let idx = mask.index(x, y);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            if alpha[idx] < alpha_threshold {
                continue;
            }

            let id = regions.len() as u32;
            let mut bounds = Region::point(id, x, y);
            labels[idx] = Some(id);
            stack.push((x, y));

            while let Some((cx, cy)) = stack.pop() {
                bounds.include(cx, cy);

                let neighbors = [
                    (cx.checked_sub(1), Some(cy)),
                    (cx.checked_add(1).filter(|&nx| nx < width), Some(cy)),
                    (Some(cx), cy.checked_sub(1)),
                    (Some(cx), cy.checked_add(1).filter(|&ny| ny < height)),
                ];
                for (nx, ny) in neighbors {
                    let (Some(nx), Some(ny)) = (nx, ny) else {
                        continue;
                    };
                    let nidx = mask.index(nx, ny);
                    if visited[nidx] {
                        continue;
                    }
                    if alpha[nidx] < alpha_threshold {
                        // Left unvisited: the raster scan marks it when it gets there.
                        continue;
                    }
                    visited[nidx] = true;
                    labels[nidx] = Some(id);
                    stack.push((nx, ny));
                }
            }

            regions.push(bounds);
        }
    }

    tracing::debug!(regions = regions.len(), "segmentation complete");

    LabelMap {
        width,
        height,
        labels,
        regions,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/segment.rs"]
mod tests;
