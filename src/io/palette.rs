//! Stride colors
//!
//! Strides take the qualitative Set2, Dark2 and Set3 colors in turn; once
//! those run out, hues step around the color wheel by the golden angle so
//! neighbouring strides stay distinguishable.

use std::collections::BTreeMap;

use crate::algorithm::scheduler::Schedule;
use crate::io::configuration::BUILT_COLOR;
use crate::spatial::brick::StrideId;

const QUALITATIVE: [[u8; 3]; 28] = [
    // Set2
    [0x66, 0xc2, 0xa5],
    [0xfc, 0x8d, 0x62],
    [0x8d, 0xa0, 0xcb],
    [0xe7, 0x8a, 0xc3],
    [0xa6, 0xd8, 0x54],
    [0xff, 0xd9, 0x2f],
    [0xe5, 0xc4, 0x94],
    [0xb3, 0xb3, 0xb3],
    // Dark2
    [0x1b, 0x9e, 0x77],
    [0xd9, 0x5f, 0x02],
    [0x75, 0x70, 0xb3],
    [0xe7, 0x29, 0x8a],
    [0x66, 0xa6, 0x1e],
    [0xe6, 0xab, 0x02],
    [0xa6, 0x76, 0x1d],
    [0x66, 0x66, 0x66],
    // Set3
    [0x8d, 0xd3, 0xc7],
    [0xff, 0xff, 0xb3],
    [0xbe, 0xba, 0xda],
    [0xfb, 0x80, 0x72],
    [0x80, 0xb1, 0xd3],
    [0xfd, 0xb4, 0x62],
    [0xb3, 0xde, 0x69],
    [0xfc, 0xcd, 0xe5],
    [0xd9, 0xd9, 0xd9],
    [0xbc, 0x80, 0xbd],
    [0xcc, 0xeb, 0xc5],
    [0xff, 0xed, 0x6f],
];

const GOLDEN_ANGLE_DEGREES: f64 = 137.507_764;
const GENERATED_SATURATION: f64 = 0.65;
const GENERATED_VALUE: f64 = 0.85;

/// Color of the `index`-th stride
pub fn stride_color(index: usize) -> [u8; 4] {
    if let Some(&[r, g, b]) = QUALITATIVE.get(index) {
        return [r, g, b, 0xff];
    }
    let step = (index - QUALITATIVE.len()) as f64;
    let hue = (step * GOLDEN_ANGLE_DEGREES).rem_euclid(360.0);
    let [r, g, b] = hsv_to_rgb(hue, GENERATED_SATURATION, GENERATED_VALUE);
    [r, g, b, 0xff]
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [u8; 3] {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    let channel = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [channel(r), channel(g), channel(b)]
}

/// Fill color for every stride of a schedule
///
/// Strides are numbered row by row. A schedule with a single stride is drawn
/// in the plain built color.
#[derive(Debug, Clone, Default)]
pub struct StridePalette {
    colors: BTreeMap<StrideId, [u8; 4]>,
}

impl StridePalette {
    /// Assign colors to the strides of `schedule`
    pub fn for_schedule(schedule: &Schedule) -> Self {
        let ids: Vec<StrideId> = schedule.stride_ids().into_iter().collect();
        let colors = if ids.len() == 1 {
            ids.into_iter().map(|id| (id, BUILT_COLOR)).collect()
        } else {
            ids.into_iter()
                .enumerate()
                .map(|(index, id)| (id, stride_color(index)))
                .collect()
        };
        Self { colors }
    }

    /// Color of a stride, if it belongs to the schedule
    pub fn color(&self, stride: StrideId) -> Option<[u8; 4]> {
        self.colors.get(&stride).copied()
    }

    /// Number of strides with a color
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no strides
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
