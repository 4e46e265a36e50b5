//! Declared types, visibility and raw modifier bits.

use serde::{Deserialize, Serialize};

/// Raw modifier bitmask values, matching PHP's reflection modifier constants.
///
/// Property specs carry the full bitmask through unchanged so the original
/// declaration's flag set survives the round trip.
pub mod flags {
    /// `public`
    pub const IS_PUBLIC: u32 = 1;
    /// `protected`
    pub const IS_PROTECTED: u32 = 2;
    /// `private`
    pub const IS_PRIVATE: u32 = 4;
    /// `static`
    pub const IS_STATIC: u32 = 16;
    /// `final`
    pub const IS_FINAL: u32 = 32;
    /// `abstract`
    pub const IS_ABSTRACT: u32 = 64;
    /// `readonly`
    pub const IS_READONLY: u32 = 128;

    /// Derive the visibility keyword from a modifier bitmask.
    ///
    /// The three visibility bits are checked in priority order; at most one is
    /// ever set by construction. The empty string is the never-expected
    /// fallback.
    pub fn visibility_keyword(bits: u32) -> &'static str {
        if bits & IS_PUBLIC != 0 {
            return "public";
        }
        if bits & IS_PROTECTED != 0 {
            return "protected";
        }
        if bits & IS_PRIVATE != 0 {
            return "private";
        }
        ""
    }
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    /// `public`
    #[default]
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
}

impl Visibility {
    /// The PHP keyword for this visibility.
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }

    /// Derive visibility from a raw modifier bitmask, checking the three
    /// mutually exclusive bits in priority order.
    pub fn from_flags(bits: u32) -> Option<Self> {
        if bits & flags::IS_PUBLIC != 0 {
            return Some(Visibility::Public);
        }
        if bits & flags::IS_PROTECTED != 0 {
            return Some(Visibility::Protected);
        }
        if bits & flags::IS_PRIVATE != 0 {
            return Some(Visibility::Private);
        }
        None
    }

    /// The modifier bit for this visibility.
    pub fn to_flag(self) -> u32 {
        match self {
            Visibility::Public => flags::IS_PUBLIC,
            Visibility::Protected => flags::IS_PROTECTED,
            Visibility::Private => flags::IS_PRIVATE,
        }
    }
}

/// A declared type, carried as written in the source (`int`, `?int`,
/// `A|B`, `\Foo\Bar`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeHint {
    raw: String,
}

impl TypeHint {
    /// Wrap a declared type string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into().trim().to_string(),
        }
    }

    /// The type exactly as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the declared type accepts `null`.
    ///
    /// True for `?`-prefixed types, unions containing `null`, and `mixed`.
    pub fn allows_null(&self) -> bool {
        if self.raw.starts_with('?') {
            return true;
        }
        if self.raw.eq_ignore_ascii_case("mixed") || self.raw.eq_ignore_ascii_case("null") {
            return true;
        }
        self.raw
            .split('|')
            .any(|part| part.trim().eq_ignore_ascii_case("null"))
    }

    /// The single named type, when this hint is neither nullable, a union nor
    /// an intersection.
    pub fn single_name(&self) -> Option<&str> {
        if self.raw.starts_with('?') || self.raw.contains('|') || self.raw.contains('&') {
            return None;
        }
        Some(self.raw.as_str())
    }
}
