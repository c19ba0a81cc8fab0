//! Median-cut palette quantization.
//!
//! Builds a reduced palette by repeatedly splitting the largest bucket of
//! colours along its widest channel, then maps colours to their nearest
//! palette entry.

use std::collections::HashSet;

use crate::types::{Colour, Image, Palette};

/// Build a palette of at most `target` colours.
///
/// The input is reduced to its distinct colours (first-seen order) before
/// splitting, so the palette has exactly `min(target, distinct)` entries.
/// Splitting works over an explicit worklist:
///
/// 1. pick the bucket with the most colours (first one on ties),
/// 2. find its widest channel (ties prefer red, then green),
/// 3. stable-sort by that channel and split at `len / 2`,
/// 4. replace the bucket with the two halves, appended at the end.
///
/// Each bucket's palette colour is its truncated per-channel mean.
pub fn build_palette(colours: &[Colour], target: usize) -> Palette {
    if target == 0 {
        return Palette::default();
    }

    let mut buckets: Vec<Vec<Colour>> = vec![distinct(colours)];
    if buckets[0].is_empty() {
        return Palette::default();
    }

    while buckets.len() < target {
        let Some(largest) = largest_bucket(&buckets) else {
            break;
        };
        if buckets[largest].len() < 2 {
            break;
        }

        let mut bucket = buckets.remove(largest);
        let channel = widest_channel(&bucket);
        bucket.sort_by_key(|c| c.channel(channel));

        let right = bucket.split_off(bucket.len() / 2);
        buckets.push(bucket);
        buckets.push(right);
    }

    Palette::new(buckets.iter().map(|b| mean_colour(b)).collect())
}

/// Build a palette from every pixel of an image.
pub fn palette_for_image(image: &Image, target: usize) -> Palette {
    build_palette(image.pixels(), target)
}

/// Replace every pixel with its nearest palette entry.
pub fn apply_palette(image: &Image, palette: &Palette) -> Image {
    let pixels = image
        .pixels()
        .iter()
        .map(|&c| palette.nearest_colour(c))
        .collect();
    Image::from_pixels(image.width(), image.height(), pixels).unwrap_or_default()
}

/// Quantize an image to a palette of at most `target` colours built from
/// its own pixels.
pub fn quantize(image: &Image, target: usize) -> Image {
    let palette = palette_for_image(image, target);
    apply_palette(image, &palette)
}

/// Distinct colours in first-seen order.
fn distinct(colours: &[Colour]) -> Vec<Colour> {
    let mut seen = HashSet::with_capacity(colours.len().min(4096));
    colours.iter().copied().filter(|c| seen.insert(*c)).collect()
}

/// Index of the bucket with the most colours; the first one wins ties.
fn largest_bucket(buckets: &[Vec<Colour>]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (i, bucket) in buckets.iter().enumerate() {
        match best {
            Some((_, len)) if bucket.len() <= len => {}
            _ => best = Some((i, bucket.len())),
        }
    }
    best.map(|(i, _)| i)
}

/// Channel (0 = red, 1 = green, 2 = blue) with the largest value range.
fn widest_channel(colours: &[Colour]) -> usize {
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];

    for c in colours {
        for channel in 0..3 {
            let v = c.channel(channel);
            min[channel] = min[channel].min(v);
            max[channel] = max[channel].max(v);
        }
    }

    let mut widest = 0;
    let mut widest_range = 0;
    for channel in 0..3 {
        let range = max[channel].saturating_sub(min[channel]);
        if channel == 0 || range > widest_range {
            widest = channel;
            widest_range = range;
        }
    }
    widest
}

/// Truncated per-channel mean; black for an empty bucket.
fn mean_colour(colours: &[Colour]) -> Colour {
    if colours.is_empty() {
        return Colour::BLACK;
    }
    let n = colours.len() as u64;
    let (r, g, b) = colours.iter().fold((0u64, 0u64, 0u64), |(r, g, b), c| {
        (r + c.r as u64, g + c.g as u64, b + c.b as u64)
    });
    Colour::rgb((r / n) as u8, (g / n) as u8, (b / n) as u8)
}
