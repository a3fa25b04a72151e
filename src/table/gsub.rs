//! ## `GSUB` &mdash; Glyph Substitution Table
//!
//! Specification: <https://docs.microsoft.com/en-us/typography/opentype/spec/gsub>.
//!
//! The Glyph Substitution (`GSUB`) table provides data for substitution of
//! glyphs for appropriate rendering of scripts, such as cursively-connecting
//! forms in Arabic script, or for advanced typographic effects, such as
//! ligatures. This module parses the table directory (scripts, languages,
//! features, lookups) and the one subtable format it evaluates — single
//! substitution (lookup type 1) — and walks it on behalf of a shaping call.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use read_buffer_derive::ReadBuffer;

use crate::error::GsubError;
use crate::script::{candidate_tags, UnicodeScript, INHERITED_SENTINEL};
use crate::table::common::Coverage;
use crate::types::{Gid, Tag};
use crate::util::{Buffer, ReadBuffer};

const LOOKUP_TYPE_SINGLE_SUBST: u16 = 1;
const LOOKUP_FLAG_USE_MARK_FILTERING_SET: u16 = 0x0010;
const NO_REQUIRED_FEATURE: u16 = 0xFFFF;

#[allow(non_camel_case_types)]
#[derive(Debug)]
pub struct Table_GSUB {
    _version: String,
    pub script_list: Vec<ScriptRecord>,
    pub feature_list: Vec<FeatureRecord>,
    pub lookup_list: Vec<Lookup>,
    supported_scripts: HashSet<Tag>,
    forward_cache: Mutex<HashMap<u16, u16>>,
    reverse_cache: Mutex<HashMap<u16, u16>>,
    last_used_script: Mutex<Option<Tag>>,
}

impl Table_GSUB {
    /// Parses a `GSUB` table whose first byte sits at `gsub_start` in
    /// `buffer`. The caller is responsible for locating that offset (e.g.
    /// from the font's table directory) — this crate does not parse a font
    /// container itself.
    pub fn parse(buffer: &mut Buffer, gsub_start: usize) -> Result<Self, GsubError> {
        buffer.set_offset(gsub_start);
        let major_version: u16 = buffer.get()?;
        let minor_version: u16 = buffer.get()?;
        let _version = format!("{major_version}.{minor_version}");
        let script_list_offset: u16 = buffer.get()?;
        let feature_list_offset: u16 = buffer.get()?;
        let lookup_list_offset: u16 = buffer.get()?;
        // Feature variations are read past and discarded; see DESIGN.md.
        let _feature_variations_offset: Option<u32> = if minor_version == 1 {
            Some(buffer.get()?)
        } else {
            None
        };

        let script_list_start = gsub_start + script_list_offset as usize;
        buffer.set_offset(script_list_start);
        let num_scripts: u16 = buffer.get()?;
        let mut script_list: Vec<ScriptRecord> = buffer.get_vec(num_scripts)?;
        for rec in script_list.iter_mut() {
            buffer.set_offset_from(script_list_start, rec.script_offset);
            rec.script = buffer.get()?;
        }

        let feature_list_start = gsub_start + feature_list_offset as usize;
        buffer.set_offset(feature_list_start);
        let num_features: u16 = buffer.get()?;
        let mut feature_list: Vec<FeatureRecord> = buffer.get_vec(num_features)?;
        for rec in feature_list.iter_mut() {
            buffer.set_offset_from(feature_list_start, rec.feature_offset);
            rec.feature = buffer.get()?;
        }

        let lookup_list_start = gsub_start + lookup_list_offset as usize;
        buffer.set_offset(lookup_list_start);
        let num_lookups: u16 = buffer.get()?;
        let lookup_offsets: Vec<u16> = buffer.get_vec(num_lookups)?;
        let lookup_list = lookup_offsets
            .iter()
            .map(|&offset| {
                buffer.set_offset_from(lookup_list_start, offset);
                buffer.get()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let supported_scripts = script_list.iter().map(|rec| rec.script_tag).collect();

        Ok(Self {
            _version,
            script_list,
            feature_list,
            lookup_list,
            supported_scripts,
            forward_cache: Mutex::new(HashMap::new()),
            reverse_cache: Mutex::new(HashMap::new()),
            last_used_script: Mutex::new(None),
        })
    }

    /// Resolves `gid` against `script`, substituting it through the first
    /// single-substitution (type 1) lookup reachable from the enabled
    /// features of every matching language system.
    ///
    /// `enabled_features = None` means every feature is enabled.
    pub fn substitute(
        &self,
        gid: Gid,
        script: UnicodeScript,
        enabled_features: Option<&HashSet<Tag>>,
    ) -> Gid {
        if gid.is_unmapped() {
            return Gid::UNMAPPED;
        }
        let Some(gid_u16) = gid.as_u16() else {
            return gid;
        };

        if let Some(&cached) = self.forward_cache.lock().unwrap().get(&gid_u16) {
            return Gid::from(cached);
        }

        let script_tag = self.resolve_script_tag(script);
        let lang_systems = self.gather_lang_systems(script_tag);
        if lang_systems.is_empty() {
            return gid;
        }

        let feature_indices = self.build_feature_indices(&lang_systems, enabled_features);
        let lookup_indices = self.flatten_lookup_indices(&feature_indices);

        for lookup_index in lookup_indices {
            let Some(lookup) = self.lookup_list.get(lookup_index as usize) else {
                continue;
            };
            if lookup.lookup_type != LOOKUP_TYPE_SINGLE_SUBST {
                continue;
            }
            let result = do_lookup(lookup, gid_u16);
            // Only a genuine coverage hit is remembered — see the caching
            // invariant in DESIGN.md (scenario 5: an uncovered glyph must
            // not poison the reverse cache).
            if result != gid_u16 {
                self.forward_cache.lock().unwrap().insert(gid_u16, result);
                self.reverse_cache.lock().unwrap().insert(result, gid_u16);
            }
            return Gid::from(result);
        }

        gid
    }

    /// Recovers the glyph id that produced `gid` through a prior
    /// [`substitute`](Self::substitute) call.
    ///
    /// No speculative inversion is attempted: the reverse table reflects
    /// only substitutions that actually happened.
    pub fn unsubstitute(&self, gid: u16) -> Result<u16, GsubError> {
        self.reverse_cache
            .lock()
            .unwrap()
            .get(&gid)
            .copied()
            .ok_or(GsubError::UnknownReverseMapping(gid))
    }

    /// Resolves `script` to the OpenType script tag this table would use for
    /// it, updating the last-used-script hint the same way `substitute`
    /// does. Exposed publicly so a caller can inspect script resolution
    /// without performing a substitution (see `src/bin/inspect.rs`).
    pub fn resolve_script_tag(&self, script: UnicodeScript) -> Tag {
        let candidates = candidate_tags(script);
        let dflt = Tag::from("DFLT");
        let defers_to_hint = candidates.len() == 1
            && (candidates[0] == INHERITED_SENTINEL
                || (candidates[0] == "DFLT" && !self.supported_scripts.contains(&dflt)));
        if defers_to_hint {
            return self.hint_or_fallback();
        }
        for &candidate in candidates {
            let tag = Tag::from(candidate);
            if self.supported_scripts.contains(&tag) {
                *self.last_used_script.lock().unwrap() = Some(tag);
                return tag;
            }
        }
        // None of the candidates is declared: return the newest without
        // updating the hint.
        Tag::from(candidates[0])
    }

    fn hint_or_fallback(&self) -> Tag {
        let mut hint = self.last_used_script.lock().unwrap();
        if let Some(tag) = *hint {
            return tag;
        }
        let fallback = self
            .script_list
            .first()
            .map(|rec| rec.script_tag)
            .unwrap_or_else(|| Tag::from("DFLT"));
        *hint = Some(fallback);
        fallback
    }

    fn gather_lang_systems(&self, script_tag: Tag) -> Vec<&LangSys> {
        let mut lang_systems = Vec::new();
        for rec in &self.script_list {
            if rec.script_tag != script_tag {
                continue;
            }
            if let Some(default_lang_sys) = &rec.script.default_lang_sys {
                lang_systems.push(default_lang_sys);
            }
            for (_, lang_sys) in &rec.script.lang_sys {
                lang_systems.push(lang_sys);
            }
        }
        lang_systems
    }

    fn build_feature_indices(
        &self,
        lang_systems: &[&LangSys],
        enabled_features: Option<&HashSet<Tag>>,
    ) -> Vec<u16> {
        let mut indices = Vec::new();
        for lang_sys in lang_systems {
            if lang_sys.required_feature_index != NO_REQUIRED_FEATURE {
                indices.push(lang_sys.required_feature_index);
            }
            for &feature_index in &lang_sys.feature_indices {
                let Some(feature_rec) = self.feature_list.get(feature_index as usize) else {
                    continue;
                };
                let is_enabled = match enabled_features {
                    None => true,
                    Some(set) => set.contains(&feature_rec.feature_tag),
                };
                if is_enabled {
                    indices.push(feature_index);
                }
            }
        }
        indices
    }

    fn flatten_lookup_indices(&self, feature_indices: &[u16]) -> Vec<u16> {
        let mut lookup_indices = Vec::new();
        for &feature_index in feature_indices {
            if let Some(feature_rec) = self.feature_list.get(feature_index as usize) {
                lookup_indices.extend_from_slice(&feature_rec.feature.lookup_list_indices);
            }
        }
        lookup_indices
    }
}

fn do_lookup(lookup: &Lookup, gid: u16) -> u16 {
    for subtable in &lookup.subtables {
        if let Some(result) = subtable.apply(gid) {
            return result;
        }
    }
    gid
}

#[derive(Debug, Default)]
pub struct ScriptRecord {
    pub script_tag: Tag,
    pub script: Script,
    script_offset: u16,
}

impl ReadBuffer for ScriptRecord {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(Self {
            script_tag: buffer.get()?,
            script_offset: buffer.get()?,
            ..Default::default()
        })
    }
}

#[derive(Debug, Default)]
pub struct Script {
    pub default_lang_sys: Option<LangSys>,
    pub lang_sys: Vec<(Tag, LangSys)>,
}

impl ReadBuffer for Script {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        let script_start = buffer.offset();
        let default_lang_sys_offset: u16 = buffer.get()?;
        let lang_sys_count: u16 = buffer.get()?;
        let lang_sys_records: Vec<LangSysRecord> = buffer.get_vec(lang_sys_count)?;
        let default_lang_sys = buffer.get_or_none(script_start, default_lang_sys_offset)?;
        let lang_sys = lang_sys_records
            .iter()
            .map(|rec| -> Result<(Tag, LangSys), GsubError> {
                buffer.set_offset_from(script_start, rec.lang_sys_offset);
                Ok((rec.lang_sys_tag, buffer.get()?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            default_lang_sys,
            lang_sys,
        })
    }
}

#[derive(ReadBuffer)]
struct LangSysRecord {
    lang_sys_tag: Tag,
    lang_sys_offset: u16,
}

#[derive(Debug, Default)]
pub struct LangSys {
    pub required_feature_index: u16,
    pub feature_indices: Vec<u16>,
}

impl ReadBuffer for LangSys {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        buffer.skip::<u16>(1)?; // lookupOrderOffset = NULL
        let required_feature_index = buffer.get()?;
        let feature_index_count: u16 = buffer.get()?;
        let feature_indices = buffer.get_vec(feature_index_count)?;
        Ok(Self {
            required_feature_index,
            feature_indices,
        })
    }
}

#[derive(Debug, Default)]
pub struct FeatureRecord {
    pub feature_tag: Tag,
    pub feature: Feature,
    feature_offset: u16,
}

impl ReadBuffer for FeatureRecord {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(Self {
            feature_tag: buffer.get()?,
            feature_offset: buffer.get()?,
            ..Default::default()
        })
    }
}

#[derive(Debug, Default)]
pub struct Feature {
    pub feature_params_offset: u16,
    pub lookup_list_indices: Vec<u16>,
}

impl ReadBuffer for Feature {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        let feature_params_offset = buffer.get()?;
        let lookup_index_count: u16 = buffer.get()?;
        let lookup_list_indices = buffer.get_vec(lookup_index_count)?;
        Ok(Self {
            feature_params_offset,
            lookup_list_indices,
        })
    }
}

#[derive(Debug, Default)]
pub struct Lookup {
    pub lookup_type: u16,
    pub lookup_flag: u16,
    pub mark_filtering_set: Option<u16>,
    pub subtables: Vec<SingleSubst>,
}

impl ReadBuffer for Lookup {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        let lookup_start = buffer.offset();
        let lookup_type: u16 = buffer.get()?;
        let lookup_flag: u16 = buffer.get()?;
        let subtable_count: u16 = buffer.get()?;
        let subtable_offsets: Vec<u16> = buffer.get_vec(subtable_count)?;
        let mark_filtering_set = if lookup_flag & LOOKUP_FLAG_USE_MARK_FILTERING_SET != 0 {
            Some(buffer.get()?)
        } else {
            None
        };

        let subtables = if lookup_type == LOOKUP_TYPE_SINGLE_SUBST {
            subtable_offsets
                .iter()
                .map(|&offset| {
                    buffer.set_offset_from(lookup_start, offset);
                    buffer.get()
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            log::debug!("lookup type {lookup_type} is not single substitution; leaving it inert");
            Vec::new()
        };

        Ok(Self {
            lookup_type,
            lookup_flag,
            mark_filtering_set,
            subtables,
        })
    }
}

/// A single-substitution (lookup type 1) subtable: either a uniform delta
/// applied to every covered glyph (format 1) or a dense replacement array
/// parallel to the coverage index (format 2).
#[derive(Debug)]
pub enum SingleSubst {
    Format1 { coverage: Coverage, delta: i16 },
    Format2 { coverage: Coverage, substitutes: Vec<u16> },
}

impl SingleSubst {
    fn apply(&self, gid: u16) -> Option<u16> {
        match self {
            SingleSubst::Format1 { coverage, delta } => {
                coverage.index_of(gid)?;
                Some(gid.wrapping_add(*delta as u16))
            }
            SingleSubst::Format2 {
                coverage,
                substitutes,
            } => {
                let index = coverage.index_of(gid)?;
                substitutes.get(index as usize).copied()
            }
        }
    }
}

impl ReadBuffer for SingleSubst {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        let subtable_start = buffer.offset();
        let format: u16 = buffer.get()?;
        match format {
            1 => {
                let coverage_offset: u16 = buffer.get()?;
                let delta: i16 = buffer.get()?;
                buffer.set_offset_from(subtable_start, coverage_offset);
                let coverage = buffer.get()?;
                Ok(SingleSubst::Format1 { coverage, delta })
            }
            2 => {
                let coverage_offset: u16 = buffer.get()?;
                let glyph_count: u16 = buffer.get()?;
                let substitutes = buffer.get_vec(glyph_count)?;
                buffer.set_offset_from(subtable_start, coverage_offset);
                let coverage = buffer.get()?;
                Ok(SingleSubst::Format2 {
                    coverage,
                    substitutes,
                })
            }
            other => Err(GsubError::CorruptTable(format!(
                "unknown single substitution format: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the minimal font fixture from `spec.md` §8 scenario 1: one
    /// `latn` script, one `DFLT` langsys, feature `liga` referencing a
    /// format-1 single-subst lookup with `delta = +5` covering GID 10.
    fn minimal_liga_font() -> Vec<u8> {
        let mut bytes = Vec::new();

        // Header (10 bytes): major, minor, scriptListOffset,
        // featureListOffset, lookupListOffset.
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        let header_len = 10;
        bytes.extend_from_slice(&0u16.to_be_bytes()); // scriptListOffset, patched below
        bytes.extend_from_slice(&0u16.to_be_bytes()); // featureListOffset, patched below
        bytes.extend_from_slice(&0u16.to_be_bytes()); // lookupListOffset, patched below
        assert_eq!(bytes.len(), header_len);

        let script_list_offset = bytes.len();
        // ScriptList: count=1, ScriptRecord("latn", offset to Script table).
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(b"latn");
        let script_record_offset_pos = bytes.len();
        bytes.extend_from_slice(&0u16.to_be_bytes()); // patched below

        let script_table_offset = bytes.len() - script_list_offset;
        bytes[script_record_offset_pos..script_record_offset_pos + 2]
            .copy_from_slice(&(script_table_offset as u16).to_be_bytes());

        // Script table: defaultLangSysOffset, langSysCount=0.
        let script_table_start = bytes.len();
        let default_lang_sys_offset_pos = bytes.len();
        bytes.extend_from_slice(&0u16.to_be_bytes()); // patched below
        bytes.extend_from_slice(&0u16.to_be_bytes()); // langSysCount = 0

        let lang_sys_offset = bytes.len() - script_table_start;
        bytes[default_lang_sys_offset_pos..default_lang_sys_offset_pos + 2]
            .copy_from_slice(&(lang_sys_offset as u16).to_be_bytes());

        // LangSys table: lookupOrder=NULL, requiredFeatureIndex=0xFFFF,
        // featureIndexCount=1, featureIndices=[0].
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&0xFFFFu16.to_be_bytes());
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());

        let feature_list_offset = bytes.len();
        // FeatureList: count=1, FeatureRecord("liga", offset).
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(b"liga");
        let feature_record_offset_pos = bytes.len();
        bytes.extend_from_slice(&0u16.to_be_bytes()); // patched below

        let feature_table_offset = bytes.len() - feature_list_offset;
        bytes[feature_record_offset_pos..feature_record_offset_pos + 2]
            .copy_from_slice(&(feature_table_offset as u16).to_be_bytes());

        // Feature table: featureParams=NULL, lookupIndexCount=1, [0].
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());

        let lookup_list_offset = bytes.len();
        // LookupList: count=1, offset to Lookup table.
        bytes.extend_from_slice(&1u16.to_be_bytes());
        let lookup_offset_pos = bytes.len();
        bytes.extend_from_slice(&0u16.to_be_bytes()); // patched below

        let lookup_table_offset = bytes.len() - lookup_list_offset;
        bytes[lookup_offset_pos..lookup_offset_pos + 2]
            .copy_from_slice(&(lookup_table_offset as u16).to_be_bytes());

        // Lookup table: lookupType=1, lookupFlag=0, subTableCount=1, [offset].
        let lookup_table_start = bytes.len();
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&1u16.to_be_bytes());
        let subtable_offset_pos = bytes.len();
        bytes.extend_from_slice(&0u16.to_be_bytes()); // patched below

        let subtable_offset = bytes.len() - lookup_table_start;
        bytes[subtable_offset_pos..subtable_offset_pos + 2]
            .copy_from_slice(&(subtable_offset as u16).to_be_bytes());

        // SingleSubstFormat1: substFormat=1, coverageOffset, deltaGlyphID=5.
        let subtable_start = bytes.len();
        bytes.extend_from_slice(&1u16.to_be_bytes());
        let coverage_offset_pos = bytes.len();
        bytes.extend_from_slice(&0u16.to_be_bytes()); // patched below
        bytes.extend_from_slice(&5i16.to_be_bytes());

        let coverage_offset = bytes.len() - subtable_start;
        bytes[coverage_offset_pos..coverage_offset_pos + 2]
            .copy_from_slice(&(coverage_offset as u16).to_be_bytes());

        // CoverageFormat1: format=1, glyphCount=1, glyphArray=[10].
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&10u16.to_be_bytes());

        bytes[4..6].copy_from_slice(&(script_list_offset as u16).to_be_bytes());
        bytes[6..8].copy_from_slice(&(feature_list_offset as u16).to_be_bytes());
        bytes[8..10].copy_from_slice(&(lookup_list_offset as u16).to_be_bytes());

        bytes
    }

    fn parse_minimal_liga_font() -> Table_GSUB {
        let data = minimal_liga_font();
        let mut buffer = Buffer::new(&data);
        Table_GSUB::parse(&mut buffer, 0).expect("minimal fixture should parse")
    }

    #[test]
    fn scenario_1_whitelisted_feature_substitutes_and_round_trips() {
        let gsub = parse_minimal_liga_font();
        let mut enabled = HashSet::new();
        enabled.insert(Tag::from("liga"));
        let result = gsub.substitute(Gid::new(10), UnicodeScript::Latin, Some(&enabled));
        assert_eq!(result, Gid::new(15));
        assert_eq!(gsub.unsubstitute(15).unwrap(), 10);
    }

    #[test]
    fn scenario_2_null_whitelist_means_every_feature_enabled() {
        let gsub = parse_minimal_liga_font();
        let result = gsub.substitute(Gid::new(10), UnicodeScript::Latin, None);
        assert_eq!(result, Gid::new(15));
    }

    #[test]
    fn scenario_3_empty_whitelist_skips_the_feature() {
        let gsub = parse_minimal_liga_font();
        let empty = HashSet::new();
        let result = gsub.substitute(Gid::new(10), UnicodeScript::Latin, Some(&empty));
        assert_eq!(result, Gid::new(10));
    }

    #[test]
    fn scenario_4_resolver_falls_back_and_forward_cache_pins_the_result() {
        let gsub = parse_minimal_liga_font();
        let mut enabled = HashSet::new();
        enabled.insert(Tag::from("liga"));
        let first = gsub.substitute(Gid::new(10), UnicodeScript::Common, Some(&enabled));
        assert_eq!(first, Gid::new(15));

        let empty = HashSet::new();
        let second = gsub.substitute(Gid::new(10), UnicodeScript::Inherited, Some(&empty));
        assert_eq!(second, Gid::new(15));
    }

    #[test]
    fn scenario_5_uncovered_glyph_is_unchanged_and_not_reverse_mapped() {
        let gsub = parse_minimal_liga_font();
        let mut enabled = HashSet::new();
        enabled.insert(Tag::from("liga"));
        let result = gsub.substitute(Gid::new(99), UnicodeScript::Latin, Some(&enabled));
        assert_eq!(result, Gid::new(99));
        assert!(matches!(
            gsub.unsubstitute(99),
            Err(GsubError::UnknownReverseMapping(99))
        ));
    }

    #[test]
    fn sentinel_gid_is_preserved() {
        let gsub = parse_minimal_liga_font();
        let result = gsub.substitute(Gid::UNMAPPED, UnicodeScript::Latin, None);
        assert!(result.is_unmapped());
    }

    #[test]
    fn format2_coverage_range_scenario_6() {
        let coverage = Coverage::Format2 {
            ranges: vec![crate::table::common::RangeRecord {
                start_glyph_id: 20,
                end_glyph_id: 24,
                start_coverage_index: 0,
            }],
        };
        let subtable = SingleSubst::Format2 {
            coverage,
            substitutes: vec![100, 101, 102, 103, 104],
        };
        assert_eq!(subtable.apply(22), Some(102));
        assert_eq!(subtable.apply(24), Some(104));
        assert_eq!(subtable.apply(25), None);
    }

    #[test]
    fn bounds_safety_skips_out_of_range_feature_and_lookup_indices() {
        let mut gsub = parse_minimal_liga_font();
        // Corrupt the single langsys's feature index to point past the end
        // of featureList; evaluation must skip it, not panic.
        gsub.script_list[0].script.default_lang_sys.as_mut().unwrap().feature_indices = vec![99];
        let mut enabled = HashSet::new();
        enabled.insert(Tag::from("liga"));
        let result = gsub.substitute(Gid::new(10), UnicodeScript::Latin, Some(&enabled));
        assert_eq!(result, Gid::new(10));
    }
}
