use crate::bisect::bisect;
use crate::cleanup::cleanup_merge;
use crate::half_match::half_match;
use crate::line_mode::line_mode;
use crate::ops::{Diff, Op};
use crate::utf8::{split_pre_and_suffix, text_smaller_than};
use tracing::{debug, trace};

/// Byte size above which `compute` prefers line-granularity preprocessing.
const LINE_MODE_MIN_BYTES: usize = 100;

/// Computes the edit script that turns `source` into `dest`.
///
/// The result is canonical: no empty operations, no adjacent operations of
/// the same kind, and `source_text` / `destination_text` reproduce the
/// inputs exactly.
pub fn diff(source: &str, dest: &str) -> Vec<Diff> {
	debug!(source_len = source.len(), dest_len = dest.len(), "diff");
	diff_main(source, dest, true)
}

pub(crate) fn diff_main(source: &str, dest: &str, check_lines: bool) -> Vec<Diff> {
	if source == dest {
		if source.is_empty() {
			return Vec::new();
		}
		return vec![Diff::equal(source)];
	}

	let (prefix, middle1, middle2, suffix) = split_pre_and_suffix(source, dest);

	let mut diffs = compute(middle1, middle2, check_lines);
	if !prefix.is_empty() {
		diffs.insert(0, Diff::equal(prefix));
	}
	if !suffix.is_empty() {
		diffs.push(Diff::equal(suffix));
	}
	cleanup_merge(&mut diffs);
	diffs
}

/// Diffs two middles that share no prefix or suffix, picking the cheapest
/// applicable strategy.
fn compute(source: &str, dest: &str, check_lines: bool) -> Vec<Diff> {
	if source.is_empty() {
		trace!("compute: insert-all");
		return vec![Diff::insert(dest)];
	}
	if dest.is_empty() {
		trace!("compute: delete-all");
		return vec![Diff::delete(source)];
	}

	let source_longer = source.len() > dest.len();
	let (long, short) = if source_longer { (source, dest) } else { (dest, source) };
	// The longer side's surplus is deleted when the source is longer,
	// inserted otherwise.
	let op = if source_longer { Op::Delete } else { Op::Insert };

	if let Some(start) = long.find(short) {
		trace!("compute: containment");
		return vec![
			Diff::new(op, &long[..start]),
			Diff::equal(short),
			Diff::new(op, &long[start + short.len()..]),
		];
	}

	if text_smaller_than(short, 2) {
		// A single codepoint that is not contained in the other side cannot
		// anchor any equality.
		trace!("compute: single-codepoint");
		return vec![Diff::delete(source), Diff::insert(dest)];
	}

	if let Some(hm) = half_match(source, dest) {
		trace!("compute: half-match");
		let mut diffs = diff_main(hm.source_pre, hm.dest_pre, false);
		diffs.push(Diff::equal(hm.common));
		diffs.extend(diff_main(hm.source_post, hm.dest_post, false));
		return diffs;
	}

	if check_lines || source.len() > LINE_MODE_MIN_BYTES || dest.len() > LINE_MODE_MIN_BYTES {
		trace!("compute: line-mode");
		return line_mode(source, dest);
	}

	trace!("compute: bisect");
	let a: Vec<char> = source.chars().collect();
	let b: Vec<char> = dest.chars().collect();
	bisect(&a, &b)
}
