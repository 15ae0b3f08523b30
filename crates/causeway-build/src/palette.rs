//! Weighted surface palettes and per-column surface selection.

use std::collections::BTreeMap;
use std::fmt;

use causeway_core::{Block, Direction, Point2};

use crate::noise::{choose, column_hash, gradient_noise};

/// Blocks that share one slice of the noise range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    /// Upper bound (inclusive) of the slice.
    pub threshold: f64,
    pub blocks: Vec<Block>,
}

/// A cumulative palette: bucket thresholds ascend in `(0, 1]` and the last
/// one is `1.0`, so every noise value in `[0, 1]` falls in exactly one
/// bucket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Bucket>", into = "Vec<Bucket>"))]
pub struct WeightedPalette {
    buckets: Vec<Bucket>,
}

impl WeightedPalette {
    /// Build a palette from `(threshold, blocks)` pairs.
    pub fn new(buckets: Vec<(f64, Vec<Block>)>) -> Result<Self, PaletteError> {
        Self::try_from(
            buckets
                .into_iter()
                .map(|(threshold, blocks)| Bucket { threshold, blocks })
                .collect::<Vec<_>>(),
        )
    }

    /// Packed mud and dirt path, half and half.
    pub fn main_path() -> Self {
        Self {
            buckets: vec![
                Bucket {
                    threshold: 0.5,
                    blocks: vec![Block::new("minecraft:packed_mud")],
                },
                Bucket {
                    threshold: 1.0,
                    blocks: vec![Block::new("minecraft:dirt_path")],
                },
            ],
        }
    }

    /// Coarse and rooted dirt, half and half.
    pub fn border_path() -> Self {
        Self {
            buckets: vec![
                Bucket {
                    threshold: 0.5,
                    blocks: vec![Block::new("minecraft:coarse_dirt")],
                },
                Bucket {
                    threshold: 1.0,
                    blocks: vec![Block::new("minecraft:rooted_dirt")],
                },
            ],
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Blocks of the bucket that `value` falls in: the first threshold at
    /// or above it.
    pub fn bucket_for(&self, value: f64) -> Option<&[Block]> {
        let mut prev = f64::NEG_INFINITY;
        for bucket in &self.buckets {
            if value > prev && value <= bucket.threshold {
                return Some(&bucket.blocks);
            }
            prev = bucket.threshold;
        }
        None
    }

    /// Block for column `p` given its noise `value`; ties within a bucket
    /// are broken by a hash of the column.
    pub fn pick(&self, p: Point2, value: f64) -> Option<&Block> {
        choose(column_hash(p), self.bucket_for(value)?)
    }
}

impl TryFrom<Vec<Bucket>> for WeightedPalette {
    type Error = PaletteError;

    fn try_from(buckets: Vec<Bucket>) -> Result<Self, PaletteError> {
        let Some(last) = buckets.last() else {
            return Err(PaletteError::Empty);
        };
        if last.threshold < 1.0 {
            return Err(PaletteError::NotSaturating(last.threshold));
        }
        let mut prev = 0.0;
        for bucket in &buckets {
            if !(bucket.threshold > 0.0 && bucket.threshold <= 1.0) {
                return Err(PaletteError::ThresholdOutOfRange(bucket.threshold));
            }
            if bucket.threshold <= prev {
                return Err(PaletteError::Unsorted {
                    prev,
                    next: bucket.threshold,
                });
            }
            if bucket.blocks.is_empty() {
                return Err(PaletteError::EmptyBucket(bucket.threshold));
            }
            prev = bucket.threshold;
        }
        Ok(Self { buckets })
    }
}

impl From<WeightedPalette> for Vec<Bucket> {
    fn from(palette: WeightedPalette) -> Self {
        palette.buckets
    }
}

/// Errors that can occur when building a palette.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// No buckets at all.
    Empty,
    /// A threshold outside `(0, 1]`.
    ThresholdOutOfRange(f64),
    /// Thresholds must strictly ascend.
    Unsorted { prev: f64, next: f64 },
    /// The last threshold is below `1.0`.
    NotSaturating(f64),
    /// A bucket without blocks.
    EmptyBucket(f64),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette has no buckets"),
            Self::ThresholdOutOfRange(t) => write!(f, "palette threshold {t} is outside (0, 1]"),
            Self::Unsorted { prev, next } => {
                write!(f, "palette threshold {next} does not follow {prev}")
            }
            Self::NotSaturating(t) => write!(f, "last palette threshold {t} is below 1"),
            Self::EmptyBucket(t) => write!(f, "palette bucket {t} has no blocks"),
        }
    }
}

impl std::error::Error for PaletteError {}

/// The chosen surface of a footprint column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface {
    pub block: Block,
    /// Uphill direction when the column sits mid-slope, a candidate for
    /// stairs.
    pub rise: Option<Direction>,
}

/// Choose the surface of column `p` of a footprint layer.
///
/// Returns `None` when `p` is not part of `elevations`.
pub fn select(
    p: Point2,
    elevations: &BTreeMap<Point2, i32>,
    palette: &WeightedPalette,
    noise_scale: f64,
) -> Option<Surface> {
    if !elevations.contains_key(&p) {
        return None;
    }
    let block = palette.pick(p, gradient_noise(p, noise_scale))?.clone();
    Some(Surface {
        block,
        rise: rise_direction(p, elevations),
    })
}

/// The cardinal direction in which the layer climbs one unit ahead of `p`
/// and drops one unit behind it.
pub fn rise_direction(p: Point2, elevations: &BTreeMap<Point2, i32>) -> Option<Direction> {
    let y = *elevations.get(&p)?;
    Direction::CARDINAL.into_iter().find(|d| {
        let ahead = elevations.get(&(p + d.offset()));
        let behind = elevations.get(&(p - d.offset()));
        ahead == Some(&(y + 1)) && behind == Some(&(y - 1))
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn palette_round_trip() {
        let palette = WeightedPalette::border_path();
        let json = serde_json::to_string(&palette).unwrap();
        let back: WeightedPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(palette, back);
    }

    #[test]
    fn invalid_palette_is_rejected() {
        let json = r#"[{"threshold":0.5,"blocks":["minecraft:stone"]}]"#;
        assert!(serde_json::from_str::<WeightedPalette>(json).is_err());
    }
}
