//! Unicode script tagging and the static `UnicodeScript → OpenType script
//! tag` table the script resolver (`Table_GSUB::resolve_script_tag`) walks.
//!
//! The table is data, not behavior — expressed as a `match` returning a
//! `&'static [&'static str]` rather than a struct, the same shape small
//! fixed lookup tables take elsewhere in this crate's teacher (e.g.
//! `Font::_get_flavor`'s signature-to-flavor match).

/// The Unicode `Script` property, restricted to `COMMON`/`INHERITED`/
/// `UNKNOWN` plus the writing systems this crate's script-tag table knows
/// about.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnicodeScript {
    Common,
    Inherited,
    Unknown,
    Latin,
    Cyrillic,
    Greek,
    Armenian,
    Hebrew,
    Arabic,
    Syriac,
    Thaana,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
    Thai,
    Lao,
    Tibetan,
    Myanmar,
    Georgian,
    Hangul,
    Ethiopic,
    Cherokee,
    CanadianAboriginal,
    Ogham,
    Runic,
    Khmer,
    Mongolian,
    Hiragana,
    Katakana,
    Han,
    Bopomofo,
    Yi,
    OldItalic,
    Gothic,
    Deseret,
}

/// Sentinel returned as the sole entry of a candidate list for scripts that
/// should always defer to the last-used-script hint rather than naming a
/// real OpenType script tag (`spec.md` §4.2 rule 2).
pub(crate) const INHERITED_SENTINEL: &str = "<inherited>";

/// Candidate OpenType script tags for `script`, newest revision first.
///
/// A script absent from this table — there is none, since `Common` and
/// `Unknown` both fall through to the same `["DFLT"]` row `spec.md` §9
/// describes as the catch-all — would fall back to `["DFLT"]` too.
pub(crate) fn candidate_tags(script: UnicodeScript) -> &'static [&'static str] {
    use UnicodeScript::*;
    match script {
        Common | Unknown => &["DFLT"],
        Inherited => &[INHERITED_SENTINEL],
        Latin => &["latn"],
        Cyrillic => &["cyrl"],
        Greek => &["grek"],
        Armenian => &["armn"],
        Hebrew => &["hebr"],
        Arabic => &["arab"],
        Syriac => &["syrc"],
        Thaana => &["thaa"],
        // 2012-revision two-letter-suffix tags first, per `spec.md` §4.2's
        // Bengali `["bng2", "beng"]` example.
        Devanagari => &["dev2", "deva"],
        Bengali => &["bng2", "beng"],
        Gurmukhi => &["gur2", "guru"],
        Gujarati => &["gjr2", "gujr"],
        Oriya => &["ory2", "orya"],
        Tamil => &["tml2", "taml"],
        Telugu => &["tel2", "telu"],
        Kannada => &["knd2", "knda"],
        Malayalam => &["mlm2", "mlym"],
        Sinhala => &["sinh"],
        Thai => &["thai"],
        Lao => &["lao "],
        Tibetan => &["tibt"],
        Myanmar => &["mym2", "mymr"],
        Georgian => &["geor"],
        Hangul => &["hang"],
        Ethiopic => &["ethi"],
        Cherokee => &["cher"],
        CanadianAboriginal => &["cans"],
        Ogham => &["ogam"],
        Runic => &["runr"],
        Khmer => &["khmr"],
        Mongolian => &["mong"],
        // Per `spec.md` §9: intentional per OpenType, but `"hira"` is not
        // represented by any font this crate has seen.
        Hiragana | Katakana => &["kana"],
        Han => &["hani"],
        Bopomofo => &["bopo"],
        Yi => &["yi  "],
        OldItalic => &["ital"],
        Gothic => &["goth"],
        Deseret => &["dsrt"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_falls_back_to_dflt() {
        assert_eq!(candidate_tags(UnicodeScript::Common), &["DFLT"]);
        assert_eq!(candidate_tags(UnicodeScript::Unknown), &["DFLT"]);
    }

    #[test]
    fn inherited_is_the_sentinel() {
        assert_eq!(candidate_tags(UnicodeScript::Inherited), &[INHERITED_SENTINEL]);
    }

    #[test]
    fn newest_revision_tag_comes_first() {
        assert_eq!(candidate_tags(UnicodeScript::Bengali), &["bng2", "beng"]);
    }

    #[test]
    fn hiragana_and_katakana_share_kana() {
        assert_eq!(candidate_tags(UnicodeScript::Hiragana), &["kana"]);
        assert_eq!(candidate_tags(UnicodeScript::Katakana), &["kana"]);
    }
}
