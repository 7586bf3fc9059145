//! Structural properties of each stage, checked over seeded random inputs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use word_regions::detector::connected_components::filter_components;
use word_regions::detector::grouping::{assign_lines, merge_line};
use word_regions::utils::binarization::{
    binarize_parallel, binarize_two_pass, binarize_with_threshold, mask_to_raster,
    render_binarized,
};
use word_regions::{BinaryMask, BoundingBox, Raster, binarize, group_words, label_components};

const SEEDS: [u64; 6] = [1, 7, 42, 1234, 98765, 31337];

fn random_mask(rng: &mut StdRng, width: usize, height: usize, density: f64) -> BinaryMask {
    BinaryMask::from_fn(width, height, |_, _| rng.gen_bool(density))
}

/// Random blobs of ink on a white page, so components reach noise-filter size
fn random_page(rng: &mut StdRng, width: usize, height: usize) -> Raster {
    let mut page = Raster::filled(width, height, 3, 255).unwrap();
    for _ in 0..rng.gen_range(5..40) {
        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        let w = rng.gen_range(1..20);
        let h = rng.gen_range(1..20);
        let shade = rng.gen_range(0..=255u8);
        page.fill_rect(x, y, x + w, y + h, &[shade, rng.r#gen(), rng.r#gen()]);
    }
    page
}

fn random_boxes(rng: &mut StdRng, count: usize) -> Vec<BoundingBox> {
    (0..count)
        .map(|_| {
            let x0 = rng.gen_range(0..500);
            let y0 = rng.gen_range(0..300);
            BoundingBox::new(
                x0,
                y0,
                x0 + rng.gen_range(0..40),
                y0 + rng.gen_range(0..30),
            )
        })
        .collect()
}

#[test]
fn test_labeling_partitions_foreground() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        for density in [0.1, 0.45, 0.6, 0.9] {
            let mask = random_mask(&mut rng, 37, 23, density);
            let labeling = label_components(&mask);

            let mut counts = vec![0usize; labeling.components.len()];
            for y in 0..mask.height() {
                for x in 0..mask.width() {
                    let l = labeling.label_at(x, y);
                    // Exactly the foreground cells carry a label
                    assert_eq!(l != 0, mask.get(x, y), "seed {seed} cell ({x}, {y})");
                    if l == 0 {
                        continue;
                    }
                    counts[l - 1] += 1;
                    assert!(labeling.components[l - 1].bbox.contains(x, y));

                    // 4-neighbors that are foreground share the label
                    if x + 1 < mask.width() && mask.get(x + 1, y) {
                        assert_eq!(labeling.label_at(x + 1, y), l);
                    }
                    if y + 1 < mask.height() && mask.get(x, y + 1) {
                        assert_eq!(labeling.label_at(x, y + 1), l);
                    }
                }
            }

            for (c, count) in labeling.components.iter().zip(counts) {
                assert_eq!(c.pixel_count, count);
                assert!(c.pixel_count > 0);
            }
            let total: usize = labeling.components.iter().map(|c| c.pixel_count).sum();
            assert_eq!(total, mask.foreground_count());
        }
    }
}

#[test]
fn test_component_boxes_are_tight_and_ordered() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mask = random_mask(&mut rng, 41, 29, 0.55);
        let labeling = label_components(&mask);

        let mut last_seed = None;
        for (i, c) in labeling.components.iter().enumerate() {
            let label = i + 1;
            let b = c.bbox;
            assert!(b.x0 <= b.x1 && b.y0 <= b.y1);
            assert!(mask.get(c.seed.0, c.seed.1));

            // Every edge of the box touches the component
            let on = |x: usize, y: usize| labeling.label_at(x, y) == label;
            assert!((b.x0..=b.x1).any(|x| on(x, b.y0)));
            assert!((b.x0..=b.x1).any(|x| on(x, b.y1)));
            assert!((b.y0..=b.y1).any(|y| on(b.x0, y)));
            assert!((b.y0..=b.y1).any(|y| on(b.x1, y)));

            // Seeds appear in row-major order, and the seed is the component's
            // first pixel in that order
            let key = (c.seed.1, c.seed.0);
            if let Some(prev) = last_seed {
                assert!(key > prev);
            }
            last_seed = Some(key);
            assert_eq!(b.y0, c.seed.1);
            assert!((b.x0..c.seed.0).all(|x| !on(x, b.y0)));
        }
    }
}

#[test]
fn test_noise_filter_never_keeps_small_components() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mask = random_mask(&mut rng, 60, 40, 0.5);
        let labeling = label_components(&mask);
        for (min_w, min_h) in [(0, 0), (5, 5), (3, 8)] {
            let kept = filter_components(&labeling.components, min_w, min_h);
            assert!(kept.iter().all(|b| b.width() > min_w && b.height() > min_h));
            let expected = labeling
                .components
                .iter()
                .filter(|c| c.bbox.width() > min_w && c.bbox.height() > min_h)
                .count();
            assert_eq!(kept.len(), expected);
        }
    }
}

#[test]
fn test_isolated_pixels_never_survive() {
    let mask = BinaryMask::from_fn(30, 30, |x, y| x % 2 == 0 && y % 2 == 0);
    let labeling = label_components(&mask);
    assert_eq!(labeling.components.len(), 15 * 15);
    assert!(labeling.filtered_boxes(5, 5).is_empty());
    assert!(labeling.filtered_boxes(0, 0).is_empty());
}

#[test]
fn test_binarizer_variants_agree_and_are_idempotent() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let data: Vec<u8> = (0..33 * 17 * 4).map(|_| rng.r#gen()).collect();
        let raster = Raster::new(33, 17, 4, data).unwrap();

        for threshold in [0u8, 64, 127, 128, 200, 255] {
            let reference = binarize_two_pass(&raster, threshold);
            assert_eq!(binarize_with_threshold(&raster, threshold), reference);
            assert_eq!(binarize_parallel(&raster, threshold), reference);

            let rendered = render_binarized(&raster, threshold);
            assert_eq!(binarize_with_threshold(&rendered, threshold), reference);
            // Alpha passes through untouched
            for (src, out) in raster
                .as_bytes()
                .chunks_exact(4)
                .zip(rendered.as_bytes().chunks_exact(4))
            {
                assert_eq!(src[3], out[3]);
            }
        }

        // A 0/255 image re-binarizes to the same mask
        let mask = binarize(&raster);
        assert_eq!(binarize(&mask_to_raster(&mask)), mask);
    }
}

#[test]
fn test_words_are_unions_of_contiguous_sorted_members() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let boxes = random_boxes(&mut rng, 60);
        for (h, v) in [(0, 0), (30, 20), (70, 40), (200, 100)] {
            let words = group_words(&boxes, h, v);

            // Every component lands in exactly one word
            let mut seen = vec![false; boxes.len()];
            for word in &words {
                let union = word
                    .members
                    .iter()
                    .map(|&i| boxes[i])
                    .reduce(|a, b| a.union(&b))
                    .unwrap();
                assert_eq!(word.bbox, union);

                for pair in word.members.windows(2) {
                    assert!(boxes[pair[0]].x0 <= boxes[pair[1]].x0);
                }
                for &i in &word.members {
                    assert!(!seen[i]);
                    seen[i] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }
}

#[test]
fn test_words_split_each_line_into_contiguous_runs() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let boxes = random_boxes(&mut rng, 60);
        for (h, v) in [(0, 0), (30, 20), (70, 40), (200, 100)] {
            for line in assign_lines(&boxes, v) {
                let mut sorted = line.members.clone();
                sorted.sort_by_key(|&i| boxes[i].x0);

                let words = merge_line(&boxes, &line, h);
                let joined: Vec<usize> = words
                    .iter()
                    .flat_map(|w| w.members.iter().copied())
                    .collect();
                assert_eq!(joined, sorted, "seed {seed} h {h} v {v}");

                for pair in words.windows(2) {
                    let (prev, next) = (&pair[0], &pair[1]);
                    let gap = next.bbox.x0 as i64 - prev.bbox.x1 as i64;
                    assert!(gap > h as i64, "seed {seed}: gap {gap} merged at h {h}");
                }
            }
        }
    }
}

#[test]
fn test_full_pipeline_deterministic_and_valid() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let page = random_page(&mut rng, 160, 120);

        let first = word_regions::detect_words(&page);
        assert_eq!(word_regions::detect_words(&page), first);

        let mask = binarize(&page);
        for b in &first {
            assert!(b.x0 <= b.x1 && b.y0 <= b.y1);
            assert!(b.x1 < page.width() && b.y1 < page.height());
            let has_ink = (b.y0..=b.y1).any(|y| (b.x0..=b.x1).any(|x| mask.get(x, y)));
            assert!(has_ink, "seed {seed}: {b} encloses no foreground");
        }
    }
}
