//! Sort drivers and the file-level sort operation
//!
//! Two drivers share one merge sort. [`sort_latched`] drives it with the
//! boolean, error-latching comparator and inspects the latch afterwards;
//! [`sort_fail_fast`] drives it with the three-way comparison and stops at the
//! first error. Both discard the reordered lines when a comparison failed.

use crate::approach::{self, Approach, Sortable};
use crate::config::{OutputMode, SortConfig, SortParams};
use crate::error::{SortError, SortResult};
use crate::input::{self, InputLines};
use crate::output;
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::convert::Infallible;
use std::io;
use tracing::debug;

/// Runs below this length are insertion sorted before merging
const INSERTION_RUN: usize = 16;

/// Stable bottom-up merge sort of `order` by a fallible strict less-than
fn merge_sort_by<E, F>(order: &mut Vec<usize>, mut less: F) -> Result<(), E>
where
    F: FnMut(usize, usize) -> Result<bool, E>,
{
    let len = order.len();
    if len < 2 {
        return Ok(());
    }

    for start in (0..len).step_by(INSERTION_RUN) {
        let end = (start + INSERTION_RUN).min(len);
        for i in start + 1..end {
            let mut j = i;
            while j > start && less(order[j], order[j - 1])? {
                order.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    let mut buffer = vec![0usize; len];
    let mut width = INSERTION_RUN;
    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);
            for slot in &mut buffer[start..end] {
                // Taking from the right only when strictly less keeps the sort stable.
                let take_right =
                    left >= mid || (right < end && less(order[right], order[left])?);
                if take_right {
                    *slot = order[right];
                    right += 1;
                } else {
                    *slot = order[left];
                    left += 1;
                }
            }
        }
        std::mem::swap(order, &mut buffer);
        width *= 2;
    }

    Ok(())
}

/// Reorder `lines` so that position `k` holds the line at `order[k]`
fn apply_permutation<L>(lines: Vec<L>, order: &[usize]) -> Vec<L> {
    let mut slots: Vec<Option<L>> = lines.into_iter().map(Some).collect();
    order.iter().filter_map(|&i| slots[i].take()).collect()
}

/// Sort with the latching comparator, then check the latch
pub fn sort_latched<L: Sortable>(
    lines: Vec<L>,
    approach: &Approach,
    params: &SortParams,
) -> SortResult<Vec<L>> {
    let order = {
        let (comparator, errors) = approach.make_comparator(&lines, params)?;
        let mut order: Vec<usize> = (0..comparator.len()).collect();
        merge_sort_by(&mut order, |i, j| Ok::<_, Infallible>(comparator.less(i, j)))
            .unwrap_or_else(|never| match never {});
        errors.into_result()?;
        order
    };
    Ok(apply_permutation(lines, &order))
}

/// Sort with three-way comparisons, returning the first error immediately
pub fn sort_fail_fast<L: Sortable>(
    lines: Vec<L>,
    approach: &Approach,
    params: &SortParams,
) -> SortResult<Vec<L>> {
    let order = {
        let (comparator, _errors) = approach.make_comparator(&lines, params)?;
        let mut order: Vec<usize> = (0..comparator.len()).collect();
        merge_sort_by(&mut order, |i, j| {
            Ok::<_, SortError>(comparator.compare(i, j)? == Ordering::Less)
        })?;
        order
    };
    Ok(apply_permutation(lines, &order))
}

/// Verify that `lines` are in order and, with `unique`, free of duplicates
pub fn check_sorted<L: Sortable>(
    lines: &[L],
    approach: &Approach,
    params: &SortParams,
    unique: bool,
) -> SortResult<()> {
    let (comparator, _errors) = approach.make_comparator(lines, params)?;
    for (i, j) in (0..lines.len()).tuple_windows() {
        if comparator.compare(i, j)? == Ordering::Greater {
            return Err(SortError::not_sorted(lines[i].text(), lines[j].text()));
        }
    }

    if unique {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, line) in lines.iter().enumerate() {
            let number = line.line_number(index);
            if let Some(&first) = seen.get(line.text()) {
                return Err(SortError::not_unique(first, number, line.text()));
            }
            seen.insert(line.text(), number);
        }
    }

    Ok(())
}

/// Keep the first of each run of identical lines
pub fn dedup_lines<L: Sortable>(lines: &mut Vec<L>) {
    lines.dedup_by(|next, kept| next.text() == kept.text());
}

/// File-level sort operation driven by a [`SortConfig`]
pub struct CoreSort {
    config: SortConfig,
}

impl CoreSort {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> SortResult<()> {
        let approach = approach::find(&self.config.approach)?;
        let input = input::read_lines(
            &self.config.input_file,
            self.config.comment_prefix.as_deref(),
        )?;
        debug!(
            approach = approach.name,
            locale = %self.config.params.locale,
            flavor = %self.config.params.path_flavor,
            lines = input.lines.len(),
            file = %self.config.input_file.display(),
            "sorting"
        );

        if self.config.is_check() {
            if input.has_empty_lines {
                return Err(SortError::UnexpectedEmptyLines);
            }
            return check_sorted(&input.lines, approach, &self.config.params, self.config.unique);
        }

        self.sort_and_write(input, approach)
    }

    fn sort_and_write(&self, input: InputLines, approach: &Approach) -> SortResult<()> {
        let InputLines {
            lines,
            trailing_comment,
            has_empty_lines,
            line_ending,
        } = input;

        let original_order: Vec<usize> = lines.iter().map(|l| l.line_number).collect();
        let mut sorted = sort_fail_fast(lines, approach, &self.config.params)?;
        if self.config.unique {
            dedup_lines(&mut sorted);
        }

        let unchanged = !has_empty_lines
            && sorted
                .iter()
                .map(|l| l.line_number)
                .eq(original_order.iter().copied());

        let write = |out: &mut dyn io::Write| {
            output::write_lines(&sorted, trailing_comment.as_ref(), line_ending, out)
        };

        match self.config.output {
            OutputMode::Stdout => {
                let stdout = io::stdout();
                write(&mut stdout.lock())?;
            }
            _ if unchanged => {
                debug!("file is already sorted");
            }
            OutputMode::Backup => {
                output::write_backup(&self.config.input_file)?;
                output::replace_file(&self.config.input_file, |file| write(file))?;
            }
            OutputMode::InPlace => {
                output::replace_file(&self.config.input_file, |file| write(file))?;
            }
            OutputMode::Check => {
                return Err(SortError::internal("check mode reached the writer"));
            }
        }

        debug!(lines = sorted.len(), output = ?self.config.output, "sort finished");
        Ok(())
    }
}
