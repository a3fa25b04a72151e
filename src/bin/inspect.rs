//! Locates a `GSUB` table inside a font file's sfnt table directory, parses
//! it, and prints a summary of its scripts, features, and lookups.
//!
//! This binary is the only place in the crate that reads an sfnt table
//! directory — the library itself takes a `GSUB` offset as a parameter and
//! never looks for one.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gsub_engine::{Buffer, GsubError, ReadBuffer, Table_GSUB, Tag, UnicodeScript};

/// Parse and summarize a font's GSUB table.
#[derive(Parser)]
struct Cli {
    /// Path to an OpenType (.otf/.ttf) font file.
    font_path: PathBuf,

    /// Unicode script name (e.g. "Latin", "Bengali", "Common") to resolve
    /// against this font's declared scripts, printed alongside the summary.
    #[clap(long)]
    script: Option<String>,
}

/// Maps a CLI-supplied script name to a `UnicodeScript`, case-insensitively.
/// Only the names `spec.md` §4.2 enumerates are accepted.
fn parse_script(name: &str) -> Result<UnicodeScript, GsubError> {
    use UnicodeScript::*;
    Ok(match name.to_ascii_lowercase().as_str() {
        "common" => Common,
        "inherited" => Inherited,
        "unknown" => Unknown,
        "latin" => Latin,
        "cyrillic" => Cyrillic,
        "greek" => Greek,
        "armenian" => Armenian,
        "hebrew" => Hebrew,
        "arabic" => Arabic,
        "syriac" => Syriac,
        "thaana" => Thaana,
        "devanagari" => Devanagari,
        "bengali" => Bengali,
        "gurmukhi" => Gurmukhi,
        "gujarati" => Gujarati,
        "oriya" => Oriya,
        "tamil" => Tamil,
        "telugu" => Telugu,
        "kannada" => Kannada,
        "malayalam" => Malayalam,
        "sinhala" => Sinhala,
        "thai" => Thai,
        "lao" => Lao,
        "tibetan" => Tibetan,
        "myanmar" => Myanmar,
        "georgian" => Georgian,
        "hangul" => Hangul,
        "ethiopic" => Ethiopic,
        "cherokee" => Cherokee,
        "canadianaboriginal" => CanadianAboriginal,
        "ogham" => Ogham,
        "runic" => Runic,
        "khmer" => Khmer,
        "mongolian" => Mongolian,
        "hiragana" => Hiragana,
        "katakana" => Katakana,
        "han" => Han,
        "bopomofo" => Bopomofo,
        "yi" => Yi,
        "olditalic" => OldItalic,
        "gothic" => Gothic,
        "deseret" => Deseret,
        other => {
            return Err(GsubError::CorruptTable(format!(
                "unknown script name: {other}"
            )))
        }
    })
}

fn find_gsub_offset(buffer: &mut Buffer) -> Result<usize, GsubError> {
    buffer.set_offset(0);
    let _sfnt_version: u32 = buffer.get()?;
    let num_tables: u16 = buffer.get()?;
    buffer.skip::<u16>(3)?; // searchRange, entrySelector, rangeShift

    for _ in 0..num_tables {
        let tag: Tag = buffer.get()?;
        let _checksum: u32 = buffer.get()?;
        let offset: u32 = buffer.get()?;
        let _length: u32 = buffer.get()?;
        if tag == Tag::from("GSUB") {
            return Ok(offset as usize);
        }
    }

    Err(GsubError::CorruptTable(
        "no GSUB table in this font".to_string(),
    ))
}

fn inspect(cli: &Cli) -> Result<(), GsubError> {
    let data = fs::read(&cli.font_path).map_err(|err| {
        GsubError::CorruptTable(format!("could not read {:?}: {err}", cli.font_path))
    })?;
    let mut buffer = Buffer::new(&data);
    let gsub_start = find_gsub_offset(&mut buffer)?;
    let gsub = Table_GSUB::parse(&mut buffer, gsub_start)?;

    println!("scripts:  {}", gsub.script_list.len());
    for rec in &gsub.script_list {
        println!("  {}", rec.script_tag);
    }

    println!("features: {}", gsub.feature_list.len());
    for rec in &gsub.feature_list {
        println!("  {}", rec.feature_tag);
    }

    let single_subst_count = gsub
        .lookup_list
        .iter()
        .filter(|lookup| lookup.lookup_type == 1)
        .count();
    println!(
        "lookups:  {} (of which single-substitution: {single_subst_count})",
        gsub.lookup_list.len()
    );

    if let Some(name) = &cli.script {
        let script = parse_script(name)?;
        let tag = gsub.resolve_script_tag(script);
        println!("resolved script tag for {name}: {tag}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match inspect(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
