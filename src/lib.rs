//! `gsub-engine` parses an OpenType `GSUB` (Glyph Substitution) table and
//! evaluates its single-substitution (lookup type 1) subtables against
//! individual glyphs.
//!
//! This crate does not parse a font's table directory, `cmap`, or any other
//! table: the caller locates the `GSUB` table's offset and supplies a
//! [`GlyphMap`] (and, for [`GeneralLookup`], a [`ScriptClassifier`]) of its
//! own. See `src/bin/inspect.rs` for a minimal sfnt-aware caller.

mod error;
mod facade;
mod script;
mod table;
mod types;
mod util;

pub use error::GsubError;
pub use facade::{GeneralLookup, GlyphMap, ScriptClassifier, VerticalLookup};
pub use script::UnicodeScript;
pub use table::common::{Coverage, RangeRecord};
pub use table::gsub::{
    Feature, FeatureRecord, LangSys, Lookup, Script, ScriptRecord, SingleSubst, Table_GSUB,
};
pub use types::{Gid, Tag};
pub use util::{Buffer, ReadBuffer};
