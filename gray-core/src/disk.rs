//! Rotary encoder disk
//!
//! A disk with `2^N` angular sectors and `N` concentric tracks. Sector `s`
//! carries the Gray code of `s`; track `t` is filled where bit `t` of that
//! code is set. Track 0 (LSB) is the innermost ring. Because neighbouring
//! codes differ in one bit, exactly one track toggles at every sector
//! boundary, including the wrap from the last sector back to the first.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{GrayError, GrayResult};
use crate::sequence::validate_width;
use crate::types::{BinaryValue, BitPosition, CodeWord, GrayValue};

/// Largest track count a disk is built for
pub const MAX_DISK_TRACKS: u32 = 16;

const SVG_SIZE: f64 = 600.0;
const SVG_MARGIN: f64 = 20.0;
const INNER_RADIUS: f64 = 50.0;
const TRACK_FILL: &str = "#1e293b";
const TRACK_STROKE: &str = "#334155";
const ACTIVE_FILL: &str = "#3b82f6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderDisk {
    bits: u32,
}

/// Fill state of one track around the whole disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskTrack {
    pub bit: u32,
    /// One entry per sector, in angular order
    pub active: Vec<bool>,
}

impl EncoderDisk {
    pub fn new(bits: u32) -> GrayResult<Self> {
        validate_width(bits)?;
        if bits > MAX_DISK_TRACKS {
            return Err(GrayError::InvalidWidth {
                bits,
                reason: "disk supports at most 16 tracks",
            });
        }
        Ok(Self { bits })
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn sectors(&self) -> u64 {
        1u64 << self.bits
    }

    fn check_sector(&self, sector: u64) -> GrayResult<()> {
        if sector >= self.sectors() {
            return Err(GrayError::SectorOutOfRange {
                sector,
                sectors: self.sectors(),
            });
        }
        Ok(())
    }

    /// Gray code written on a sector
    pub fn sector_pattern(&self, sector: u64) -> GrayResult<GrayValue> {
        self.check_sector(sector)?;
        Ok(BinaryValue::new(sector).to_gray())
    }

    pub fn track_active(&self, sector: u64, track: u32) -> GrayResult<bool> {
        if track >= self.bits {
            return Err(GrayError::TrackOutOfRange {
                track,
                tracks: self.bits,
            });
        }
        Ok(self.sector_pattern(sector)?.bit(track))
    }

    /// Track that toggles between `sector` and the next one clockwise.
    pub fn boundary_track(&self, sector: u64) -> GrayResult<BitPosition> {
        let here = self.sector_pattern(sector)?;
        let next = BinaryValue::new((sector + 1) % self.sectors()).to_gray();
        Ok(BitPosition::new((here.get() ^ next.get()).trailing_zeros()))
    }

    /// All tracks, innermost first
    pub fn tracks(&self) -> Vec<DiskTrack> {
        (0..self.bits)
            .map(|bit| DiskTrack {
                bit,
                active: (0..self.sectors())
                    .map(|s| BinaryValue::new(s).to_gray().bit(bit))
                    .collect(),
            })
            .collect()
    }

    /// Render the disk as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let center = SVG_SIZE / 2.0;
        let radius = SVG_SIZE / 2.0 - SVG_MARGIN;
        let track_width = (radius - INNER_RADIUS) / self.bits as f64;
        let sectors = self.sectors();
        let sector_angle = 2.0 * PI / sectors as f64;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n",
            size = SVG_SIZE
        ));
        svg.push_str(&format!(
            "<g transform=\"translate({},{})\">\n",
            center, center
        ));

        for bit in 0..self.bits {
            let r_inner = INNER_RADIUS + bit as f64 * track_width;
            let r_outer = r_inner + track_width;

            svg.push_str(&format!(
                "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" fill-rule=\"evenodd\"/>\n",
                ring_path(r_inner, r_outer),
                TRACK_FILL,
                TRACK_STROKE
            ));

            for sector in 0..sectors {
                if !BinaryValue::new(sector).to_gray().bit(bit) {
                    continue;
                }
                let start = sector as f64 * sector_angle;
                svg.push_str(&format!(
                    "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1px\"/>\n",
                    sector_path(r_inner, r_outer, start, start + sector_angle),
                    ACTIVE_FILL,
                    TRACK_FILL
                ));
            }
        }

        svg.push_str(&format!(
            "<text text-anchor=\"middle\" dy=\"0.35em\" fill=\"white\" font-size=\"12px\" font-family=\"sans-serif\">{}-Bit Gray Code</text>\n",
            self.bits
        ));
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

/// Point on a circle; angle 0 is twelve o'clock, increasing clockwise.
fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

fn ring_path(r_inner: f64, r_outer: f64) -> String {
    format!(
        "M0,{o1:.3}A{ro:.3},{ro:.3} 0 1 1 0,{o2:.3}A{ro:.3},{ro:.3} 0 1 1 0,{o1:.3}\
         M0,{i1:.3}A{ri:.3},{ri:.3} 0 1 0 0,{i2:.3}A{ri:.3},{ri:.3} 0 1 0 0,{i1:.3}Z",
        o1 = -r_outer,
        o2 = r_outer,
        ro = r_outer,
        i1 = -r_inner,
        i2 = r_inner,
        ri = r_inner,
    )
}

fn sector_path(r_inner: f64, r_outer: f64, start: f64, end: f64) -> String {
    let large_arc = if end - start > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(r_outer, start);
    let (ox1, oy1) = polar(r_outer, end);
    let (ix1, iy1) = polar(r_inner, end);
    let (ix0, iy0) = polar(r_inner, start);
    format!(
        "M{ox0:.3},{oy0:.3}A{r_outer:.3},{r_outer:.3} 0 {large_arc} 1 {ox1:.3},{oy1:.3}\
         L{ix1:.3},{iy1:.3}A{r_inner:.3},{r_inner:.3} 0 {large_arc} 0 {ix0:.3},{iy0:.3}Z"
    )
}
