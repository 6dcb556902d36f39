use super::*;

/// Build a mask from ASCII rows, top row first. `#` is opaque, anything else transparent.
fn mask_from_rows(rows: &[&str]) -> PixelMask {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let mut alpha = Vec::new();
    for row in rows.iter().rev() {
        for c in row.chars() {
            alpha.push(if c == '#' { 255 } else { 0 });
        }
    }
    PixelMask::new(width, height, alpha).unwrap()
}

#[test]
fn fully_transparent_mask_yields_no_regions() {
    let mask = PixelMask::new(8, 8, vec![0; 64]).unwrap();
    assert!(segment(&mask, 1).is_empty());
}

#[test]
fn fully_opaque_mask_yields_one_region() {
    let mask = PixelMask::new(5, 3, vec![255; 15]).unwrap();
    let regions = segment(&mask, 1);
    assert_eq!(
        regions,
        vec![Region {
            id: 0,
            min_x: 0,
            min_y: 0,
            max_x: 4,
            max_y: 2,
        }]
    );
}

#[test]
fn diagonal_pixels_are_separate_components() {
    let mask = mask_from_rows(&["#.", ".#"]);
    assert_eq!(segment(&mask, 1).len(), 2);
}

#[test]
fn u_shape_is_one_component_with_enclosing_bounds() {
    let mask = mask_from_rows(&[
        "#...#", //
        "#...#", //
        "#####", //
    ]);
    let regions = segment(&mask, 1);
    assert_eq!(regions.len(), 1);
    assert_eq!((regions[0].min_x, regions[0].max_x), (0, 4));
    assert_eq!((regions[0].min_y, regions[0].max_y), (0, 2));
}

#[test]
fn threshold_excludes_faint_pixels() {
    let mask = PixelMask::new(3, 1, vec![255, 10, 255]).unwrap();
    assert_eq!(segment(&mask, 1).len(), 1);
    assert_eq!(segment(&mask, 11).len(), 2);
}

#[test]
fn labels_partition_opaque_pixels() {
    let mask = mask_from_rows(&[
        "##..#..##", //
        ".#..#...#", //
        "....#.#..", //
        "##.......", //
    ]);
    let threshold = 1;
    let map = label(&mask, threshold);

    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let opaque = mask.alpha_at(x, y) >= threshold;
            match map.label_at(x, y) {
                Some(id) => {
                    assert!(opaque, "transparent pixel ({x},{y}) got a label");
                    let region = map.regions()[id as usize];
                    assert_eq!(region.id, id);
                    assert!(region.contains(x, y));
                }
                None => assert!(!opaque, "opaque pixel ({x},{y}) has no label"),
            }
        }
    }

    // Components: top-left L, vertical bar, top-right L, lone pixel, bottom-left bar.
    assert_eq!(map.regions().len(), 5);
}

#[test]
fn large_single_component_does_not_recurse() {
    let width = 1024;
    let height = 1024;
    let mask = PixelMask::new(width, height, vec![255; (width * height) as usize]).unwrap();
    let regions = segment(&mask, 1);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].width(), width);
    assert_eq!(regions[0].height(), height);
}
