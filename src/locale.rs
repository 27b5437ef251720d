//! Locale-aware string comparison
//!
//! Without a locale strings compare by code point, optionally after full
//! Unicode case folding. With a locale the comparison is delegated to the
//! ICU collator for that BCP-47 tag.

use crate::config::LocaleTag;
use crate::error::{SortError, SortResult};
use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

enum Collation {
    /// Raw code point order
    Ordinal,
    /// Code point order of the case-folded strings
    Folded,
    /// Unicode collation for a specific locale
    Collator(Box<Collator>),
}

/// Two-string ordering primitive for a fixed locale, case and direction
pub struct LocaleComparer {
    collation: Collation,
    reverse: bool,
}

impl LocaleComparer {
    /// Build a comparer, creating a collator when a real locale is given
    pub fn new(locale: &LocaleTag, case_insensitive: bool, reverse: bool) -> SortResult<Self> {
        let collation = match locale {
            LocaleTag::Undetermined if case_insensitive => Collation::Folded,
            LocaleTag::Undetermined => Collation::Ordinal,
            LocaleTag::Tag(tag) => Collation::Collator(Box::new(collator_for_locale(
                tag,
                case_insensitive,
            )?)),
        };
        Ok(Self { collation, reverse })
    }

    /// Code point comparer, the default when no locale is requested
    pub fn ordinal() -> Self {
        Self {
            collation: Collation::Ordinal,
            reverse: false,
        }
    }

    /// Three-way comparison, ignoring the direction
    pub fn cmp(&self, a: &str, b: &str) -> Ordering {
        // Fast path for identical strings
        if a == b {
            return Ordering::Equal;
        }

        match &self.collation {
            Collation::Ordinal => a.cmp(b),
            Collation::Folded => {
                caseless::default_case_fold_str(a).cmp(&caseless::default_case_fold_str(b))
            }
            Collation::Collator(collator) => collator.compare(a, b),
        }
    }

    /// Strict less-than in the configured direction; ties are never less
    pub fn less(&self, a: &str, b: &str) -> bool {
        let ord = self.cmp(a, b);
        if self.reverse {
            ord == Ordering::Greater
        } else {
            ord == Ordering::Less
        }
    }
}

impl fmt::Debug for LocaleComparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let collation = match self.collation {
            Collation::Ordinal => "ordinal",
            Collation::Folded => "folded",
            Collation::Collator(_) => "collator",
        };
        f.debug_struct("LocaleComparer")
            .field("collation", &collation)
            .field("reverse", &self.reverse)
            .finish()
    }
}

fn collator_for_locale(tag: &str, case_insensitive: bool) -> SortResult<Collator> {
    debug!(locale = tag, case_insensitive, "creating collator");
    let locale: Locale = tag
        .parse()
        .map_err(|e| SortError::invalid_locale(tag, e))?;

    let mut options = CollatorOptions::new();
    if case_insensitive {
        // Secondary strength ignores case differences but keeps accents.
        options.strength = Some(Strength::Secondary);
    }

    Collator::try_new(&locale.into(), options).map_err(|e| SortError::invalid_locale(tag, e))
}
