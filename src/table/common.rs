//! `Coverage` — the set of glyphs a lookup subtable applies to, with a
//! stable index per member.
//!
//! Specification: <https://docs.microsoft.com/en-us/typography/opentype/spec/chapter2#coverage-table>.
//!
//! Re-architected from the source's polymorphic `CoverageTable` class
//! hierarchy into a tagged variant per format, so an unknown format is a
//! single `_ => Err(..)` arm instead of a missing virtual-dispatch case.

use crate::error::GsubError;
use crate::util::{Buffer, ReadBuffer};

#[derive(Debug)]
pub enum Coverage {
    Format1 { glyphs: Vec<u16> },
    Format2 { ranges: Vec<RangeRecord> },
}

impl Coverage {
    /// The coverage index of `gid`, or `None` if `gid` is not covered.
    pub fn index_of(&self, gid: u16) -> Option<u16> {
        match self {
            Coverage::Format1 { glyphs } => glyphs
                .binary_search(&gid)
                .ok()
                .map(|pos| pos as u16),
            Coverage::Format2 { ranges } => ranges.iter().find_map(|range| range.index_of(gid)),
        }
    }
}

impl ReadBuffer for Coverage {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        let format: u16 = buffer.get()?;
        match format {
            1 => {
                let glyph_count: u16 = buffer.get()?;
                Ok(Coverage::Format1 {
                    glyphs: buffer.get_vec(glyph_count)?,
                })
            }
            2 => {
                let range_count: u16 = buffer.get()?;
                Ok(Coverage::Format2 {
                    ranges: buffer.get_vec(range_count)?,
                })
            }
            other => Err(GsubError::CorruptTable(format!(
                "unknown coverage format: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RangeRecord {
    pub start_glyph_id: u16,
    pub end_glyph_id: u16,
    pub start_coverage_index: u16,
}

impl RangeRecord {
    fn index_of(&self, gid: u16) -> Option<u16> {
        if gid < self.start_glyph_id || gid > self.end_glyph_id {
            return None;
        }
        Some(self.start_coverage_index + (gid - self.start_glyph_id))
    }
}

impl ReadBuffer for RangeRecord {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(Self {
            start_glyph_id: buffer.get()?,
            end_glyph_id: buffer.get()?,
            start_coverage_index: buffer.get()?,
        })
    }
}
