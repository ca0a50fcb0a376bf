//! Proximity-line collection and color batching.
//!
//! Every unordered particle pair closer than the line range produces one
//! segment. Segments are bucketed by their quantized color so each color
//! becomes a single batched draw call; the BTreeMap keeps bucket order
//! deterministic across runs.

use std::collections::BTreeMap;

use particle_field_core::{LineStyle, Segment};

use crate::state::ParticleState;

/// Collects segments for all pairs with squared distance < `max_range²`,
/// bucketed by 8-bit-quantized color.
///
/// Pair scanning starts at `j = i + 1`, so each unordered pair appears at
/// most once and no particle pairs with itself.
pub(crate) fn collect_links(
    particles: &[ParticleState],
    max_range: f64,
    style: &LineStyle,
) -> BTreeMap<[u8; 3], Vec<Segment>> {
    let mut buckets: BTreeMap<[u8; 3], Vec<Segment>> = BTreeMap::new();
    let max_sq = max_range * max_range;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let dx = b.x - a.x;
            let dy = b.y - a.y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq >= max_sq {
                continue;
            }
            let color = match style {
                LineStyle::Solid(c) => *c,
                LineStyle::DistanceFade(palette) => {
                    palette.sample(1.0 - dist_sq.sqrt() / max_range)
                }
            };
            buckets
                .entry(color.to_bytes())
                .or_default()
                .push(Segment::new(a.x, a.y, b.x, b.y));
        }
    }
    buckets
}
