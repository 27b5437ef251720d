//! Registry of sort approaches and the comparators they build
//!
//! An [`Approach`] is a named strategy with a factory. The factory binds a
//! comparer to one line collection and hands back a [`LineComparator`] over
//! indices into that collection, plus an [`ErrorHandle`] sharing the
//! comparator's error latch.

use crate::comparer::{
    Comparer, DatetimeTextComparer, IpComparer, LineRef, NetworkComparer, NumberedTextComparer,
    PathComparer, TextComparer,
};
use crate::config::SortParams;
use crate::error::{SortError, SortResult};
use crate::locale::LocaleComparer;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

/// Builds the ascending comparer for one approach
pub type ComparerFactory = fn(&SortParams) -> SortResult<Box<dyn Comparer>>;

/// A named sort strategy
pub struct Approach {
    pub name: &'static str,
    pub description: &'static str,
    pub supports_locale: bool,
    pub supports_path_flavor: bool,
    factory: ComparerFactory,
}

impl fmt::Debug for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Approach")
            .field("name", &self.name)
            .field("supports_locale", &self.supports_locale)
            .field("supports_path_flavor", &self.supports_path_flavor)
            .finish_non_exhaustive()
    }
}

/// All available approaches, in presentation order
pub static APPROACHES: [Approach; 6] = [
    Approach {
        name: "text",
        description: "Sort the file as text according to the specified locale.",
        supports_locale: true,
        supports_path_flavor: false,
        factory: text_comparer,
    },
    Approach {
        name: "numbered-text",
        description: "Sort the file assuming that each line starts with a numeric prefix, \
                      then fall back to sorting by text according to the specified locale.",
        supports_locale: true,
        supports_path_flavor: false,
        factory: numbered_text_comparer,
    },
    Approach {
        name: "datetime-text",
        description: "Sort the file assuming that each line starts with a date or datetime \
                      prefix, then fall back to sorting by text according to the specified locale.",
        supports_locale: true,
        supports_path_flavor: false,
        factory: datetime_text_comparer,
    },
    Approach {
        name: "path",
        description: "Sort the file assuming that each line is a path, sorted so that deeper \
                      paths come after shorter ones.",
        supports_locale: true,
        supports_path_flavor: true,
        factory: path_comparer,
    },
    Approach {
        name: "ip",
        description: "Sort the file assuming that each line is an IP address.",
        supports_locale: false,
        supports_path_flavor: false,
        factory: ip_comparer,
    },
    Approach {
        name: "network",
        description: "Sort the file assuming that each line is a network in CIDR form.",
        supports_locale: false,
        supports_path_flavor: false,
        factory: network_comparer,
    },
];

/// Look up an approach by name
pub fn find(name: &str) -> SortResult<&'static Approach> {
    APPROACHES
        .iter()
        .find(|approach| approach.name == name)
        .ok_or_else(|| SortError::unknown_approach(name))
}

/// Names of all approaches, in presentation order
pub fn names() -> Vec<&'static str> {
    APPROACHES.iter().map(|approach| approach.name).collect()
}

fn text_collation(params: &SortParams) -> SortResult<LocaleComparer> {
    LocaleComparer::new(&params.locale, params.case_insensitive, false)
}

fn text_comparer(params: &SortParams) -> SortResult<Box<dyn Comparer>> {
    Ok(Box::new(TextComparer::new(text_collation(params)?)))
}

fn numbered_text_comparer(params: &SortParams) -> SortResult<Box<dyn Comparer>> {
    Ok(Box::new(NumberedTextComparer::new(text_collation(params)?)))
}

fn datetime_text_comparer(params: &SortParams) -> SortResult<Box<dyn Comparer>> {
    Ok(Box::new(DatetimeTextComparer::new(text_collation(params)?)))
}

fn path_comparer(params: &SortParams) -> SortResult<Box<dyn Comparer>> {
    Ok(Box::new(PathComparer::new(
        text_collation(params)?,
        params.path_flavor,
    )))
}

fn ip_comparer(_params: &SortParams) -> SortResult<Box<dyn Comparer>> {
    Ok(Box::new(IpComparer))
}

fn network_comparer(_params: &SortParams) -> SortResult<Box<dyn Comparer>> {
    Ok(Box::new(NetworkComparer))
}

/// Anything that can be sorted as a line of text
pub trait Sortable {
    fn text(&self) -> &str;

    /// 1-based position reported in errors
    fn line_number(&self, index: usize) -> usize {
        index + 1
    }
}

impl Sortable for String {
    fn text(&self) -> &str {
        self
    }
}

impl Sortable for &str {
    fn text(&self) -> &str {
        self
    }
}

/// Single-assignment cell holding the first comparison error of a sort
#[derive(Debug, Clone, Default)]
pub struct ErrorLatch {
    slot: Rc<RefCell<Option<SortError>>>,
}

impl ErrorLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `err` unless an error is already latched
    pub fn record(&self, err: SortError) {
        let mut slot = self.slot.borrow_mut();
        if slot.is_none() {
            warn!(error = %err, "comparison failed, remaining comparisons are skipped");
            *slot = Some(err);
        }
    }

    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

/// Caller's view of a comparator's error latch
#[derive(Debug)]
pub struct ErrorHandle {
    latch: ErrorLatch,
}

impl ErrorHandle {
    pub fn is_set(&self) -> bool {
        self.latch.is_set()
    }

    /// Take the latched error, if any
    pub fn take(self) -> Option<SortError> {
        let err = self.latch.slot.borrow_mut().take();
        err
    }

    /// `Err` with the latched error, `Ok` if every comparison succeeded
    pub fn into_result(self) -> SortResult<()> {
        match self.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Comparator over indices into one line collection
pub struct LineComparator<'a, L> {
    lines: &'a [L],
    comparer: Box<dyn Comparer>,
    reverse: bool,
    latch: ErrorLatch,
}

impl<'a, L: Sortable> LineComparator<'a, L> {
    fn line(&self, index: usize) -> LineRef<'a> {
        let lines: &'a [L] = self.lines;
        let line = &lines[index];
        LineRef::new(line.line_number(index), line.text())
    }

    /// Three-way comparison in the configured direction, without latching
    pub fn compare(&self, i: usize, j: usize) -> SortResult<Ordering> {
        let ord = self.comparer.compare(self.line(i), self.line(j))?;
        Ok(if self.reverse { ord.reverse() } else { ord })
    }

    /// Strict less-than in the configured direction
    ///
    /// The first error is latched and every later call returns `false`.
    pub fn less(&self, i: usize, j: usize) -> bool {
        if self.latch.is_set() {
            return false;
        }
        match self.compare(i, j) {
            Ok(ord) => ord == Ordering::Less,
            Err(err) => {
                self.latch.record(err);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Approach {
    /// Build a comparator bound to `lines` and the handle to its error latch
    pub fn make_comparator<'a, L: Sortable>(
        &self,
        lines: &'a [L],
        params: &SortParams,
    ) -> SortResult<(LineComparator<'a, L>, ErrorHandle)> {
        let comparer = (self.factory)(params)?;
        let latch = ErrorLatch::new();
        let comparator = LineComparator {
            lines,
            comparer,
            reverse: params.reverse,
            latch: latch.clone(),
        };
        Ok((comparator, ErrorHandle { latch }))
    }
}
