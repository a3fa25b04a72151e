//! The handful of OpenType data types this crate's tables are built from.
//!
//! See: <https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types>.

use crate::error::GsubError;
use crate::util::{Buffer, ReadBuffer};
use std::convert::TryInto;
use std::fmt;
use std::str;

/// Array of four `u8`s (length = 32 bits) used to identify a script,
/// language system, or feature.
///
/// **Note:** In Rust, `char` is a *Unicode scalar value* with a size of 4
/// bytes rather than 1, so it can't be used here.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Tag([u8; 4]);

impl Tag {
    /// Construct a tag from a `u8` array `bytes` with exactly 4 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gsub_engine::Tag;
    /// let tag = Tag::new(b"liga");
    /// ```
    pub const fn new(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }

    /// Construct a tag from a string `s`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gsub_engine::Tag;
    /// let tag = Tag::from("liga");
    /// assert_eq!(tag, Tag::new(b"liga"));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the length of `s` is not 4.
    ///
    /// ```should_panic
    /// # use gsub_engine::Tag;
    /// let tag_cff = Tag::from("CFF"); // should use "CFF "
    /// ```
    pub fn from(s: &str) -> Self {
        let bytes = s.as_bytes().try_into().unwrap();
        Tag::new(bytes)
    }

    /// Return the underlying `u8` array of the tag.
    pub const fn bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Convert the tag to a string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gsub_engine::Tag;
    /// let tag = Tag::new(b"vert");
    /// assert_eq!(tag.to_str(), "vert");
    /// ```
    pub fn to_str(&self) -> &str {
        str::from_utf8(&self.0).unwrap()
    }
}

impl ReadBuffer for Tag {
    fn read(buffer: &mut Buffer) -> Result<Self, GsubError> {
        Ok(Self([
            buffer.get()?,
            buffer.get()?,
            buffer.get()?,
            buffer.get()?,
        ]))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.to_str())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// A glyph identifier, or the `-1` sentinel a `cmap` collaborator returns
/// for a codepoint it has no glyph for.
///
/// Modeled as a newtype rather than a bare `i32` so that "this is a glyph id,
/// possibly unmapped" reads the same way `Tag` reads "this is a 4-byte tag,
/// not an arbitrary `u32`".
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gid(i32);

impl Gid {
    pub const UNMAPPED: Gid = Gid(-1);

    pub const fn new(id: u16) -> Self {
        Gid(id as i32)
    }

    pub fn is_unmapped(self) -> bool {
        self == Self::UNMAPPED
    }

    /// The glyph id as a `u16`, or `None` if this is the unmapped sentinel.
    pub fn as_u16(self) -> Option<u16> {
        if self.is_unmapped() {
            None
        } else {
            u16::try_from(self.0).ok()
        }
    }
}

impl From<u16> for Gid {
    fn from(id: u16) -> Self {
        Gid::new(id)
    }
}

impl fmt::Debug for Gid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_unmapped() {
            write!(f, "Gid(unmapped)")
        } else {
            write!(f, "Gid({})", self.0)
        }
    }
}
