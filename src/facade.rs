//! The two shaping-time entry points a renderer drives: [`GeneralLookup`]
//! for ordinary text runs, [`VerticalLookup`] for glyphs laid out on a
//! vertical baseline. Both sit between a `cmap`-like collaborator and a
//! parsed [`Table_GSUB`](crate::table::gsub::Table_GSUB), and neither parses
//! anything itself.

use std::collections::HashSet;

use crate::error::GsubError;
use crate::script::UnicodeScript;
use crate::table::gsub::Table_GSUB;
use crate::types::{Gid, Tag};

/// A codepoint-to-glyph map, supplied by the caller (typically backed by a
/// font's `cmap` table, which this crate does not itself parse).
pub trait GlyphMap {
    /// The glyph id for `codepoint`, or [`Gid::UNMAPPED`] if there is none.
    fn glyph_for(&self, codepoint: u32) -> Gid;

    /// Every codepoint that maps to `gid` under this map.
    fn chars_for(&self, gid: u16) -> Vec<u32>;
}

/// Classifies a codepoint's Unicode `Script` property, supplied by the
/// caller.
pub trait ScriptClassifier {
    fn script_of(&self, codepoint: u32) -> UnicodeScript;
}

/// Shapes glyphs for ordinary (non-vertical) text: the script comes from
/// `classifier`, and the caller controls which OpenType features are live
/// via `enabled_features`.
pub struct GeneralLookup<'a, M, S> {
    gsub: &'a Table_GSUB,
    cmap: &'a M,
    classifier: &'a S,
    enabled_features: Option<HashSet<Tag>>,
}

impl<'a, M: GlyphMap, S: ScriptClassifier> GeneralLookup<'a, M, S> {
    pub fn new(
        gsub: &'a Table_GSUB,
        cmap: &'a M,
        classifier: &'a S,
        enabled_features: Option<HashSet<Tag>>,
    ) -> Self {
        Self {
            gsub,
            cmap,
            classifier,
            enabled_features,
        }
    }

    /// Maps `codepoint` to its final (post-substitution) glyph id.
    pub fn glyph_for(&self, codepoint: u32) -> Gid {
        let gid = self.cmap.glyph_for(codepoint);
        let script = self.classifier.script_of(codepoint);
        self.gsub
            .substitute(gid, script, self.enabled_features.as_ref())
    }

    /// Recovers the codepoints that produced `gid`, by first undoing any
    /// substitution and then asking the glyph map.
    pub fn chars_for(&self, gid: u16) -> Result<Vec<u32>, GsubError> {
        let original = self.gsub.unsubstitute(gid)?;
        Ok(self.cmap.chars_for(original))
    }
}

/// Shapes glyphs for vertical text layout.
///
/// Always evaluates against the hard-coded script `"latn"` with every
/// feature enabled — see the open question recorded in `DESIGN.md`. A
/// future revision may accept a script the same way [`GeneralLookup`] does;
/// until then this mirrors the behavior this crate's teacher shipped for
/// its own vertical-metrics facade.
pub struct VerticalLookup<'a, M> {
    gsub: &'a Table_GSUB,
    cmap: &'a M,
}

impl<'a, M: GlyphMap> VerticalLookup<'a, M> {
    pub fn new(gsub: &'a Table_GSUB, cmap: &'a M) -> Self {
        Self { gsub, cmap }
    }

    pub fn glyph_for(&self, codepoint: u32) -> Gid {
        let gid = self.cmap.glyph_for(codepoint);
        self.gsub.substitute(gid, UnicodeScript::Latin, None)
    }

    pub fn chars_for(&self, gid: u16) -> Result<Vec<u32>, GsubError> {
        let original = self.gsub.unsubstitute(gid)?;
        Ok(self.cmap.chars_for(original))
    }
}
