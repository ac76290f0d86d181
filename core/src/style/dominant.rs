use std::collections::HashMap;

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::constants::{SAMPLE_MAX_SIDE, SAMPLE_MIN_ALPHA};
use crate::style::Color;

/// Per-channel bits dropped when bucketing (8 levels per channel)
const QUANT_SHIFT: u8 = 5;

#[derive(Default)]
struct Bucket {
    count: u64,
    sum: [u64; 3],
}

impl Bucket {
    fn add(&mut self, r: u8, g: u8, b: u8) {
        self.count += 1;
        self.sum[0] += r as u64;
        self.sum[1] += g as u64;
        self.sum[2] += b as u64;
    }

    fn mean(&self) -> Color {
        let avg = |s: u64| ((s + self.count / 2) / self.count) as u8;
        Color::rgb(avg(self.sum[0]), avg(self.sum[1]), avg(self.sum[2]))
    }
}

/// Most frequent quantized colour of `image`, averaged over its bucket.
///
/// Transparent pixels are skipped. Buckets with equal counts resolve to the one
/// first met in row-major scan order of the downsampled image. Returns `None`
/// when no pixel is opaque enough to count.
pub fn dominant_color(image: &DynamicImage) -> Option<Color> {
    let sample = downsample(image);

    let mut index: HashMap<u16, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for px in sample.pixels() {
        let [r, g, b, a] = px.0;
        if a < SAMPLE_MIN_ALPHA {
            continue;
        }
        let key = ((r >> QUANT_SHIFT) as u16) << 6 | ((g >> QUANT_SHIFT) as u16) << 3 | (b >> QUANT_SHIFT) as u16;
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(Bucket::default());
            buckets.len() - 1
        });
        buckets[slot].add(r, g, b);
    }

    let mut best: Option<&Bucket> = None;
    for bucket in &buckets {
        if best.map_or(true, |cur| bucket.count > cur.count) {
            best = Some(bucket);
        }
    }
    best.map(Bucket::mean)
}

// Nearest-neighbour keeps sampled colours exact, so results don't depend on filter maths.
fn downsample(image: &DynamicImage) -> RgbaImage {
    if image.width().max(image.height()) > SAMPLE_MAX_SIDE {
        image
            .resize(SAMPLE_MAX_SIDE, SAMPLE_MAX_SIDE, FilterType::Nearest)
            .to_rgba8()
    } else {
        image.to_rgba8()
    }
}
