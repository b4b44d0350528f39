use crate::matcher::{MATCH_MAXBITS, unique_match};
use crate::ops::{Diff, Op};
use crate::utf8::{cp_slice, text_size};
use crate::{Error, Result};

/// Codepoints of context carried on each side of a patch.
pub const PATCH_MARGIN: usize = 4;
/// Target upper bound on the source span a patch covers, in codepoints.
/// Context growth stays inside it; only oversized single edits exceed it.
pub const PATCH_MAX_PATCH_LEN: usize = 32;

/// A contiguous group of edits plus surrounding context.
///
/// Starts and lengths are codepoint counts; `source_*` addresses the source
/// text and `dest_*` the destination text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
	pub source_start: usize,
	pub dest_start: usize,
	pub source_length: usize,
	pub dest_length: usize,
	pub diffs: Vec<Diff>,
}

/// Groups an edit script over `source` into patch records, flanked by up to
/// [`PATCH_MARGIN`] codepoints of context (more when the context alone does
/// not pin a unique spot in `source`).
///
/// Closing a patch at a large interior equality and opening the next one is
/// not implemented; such scripts error with
/// [`Error::PatchSplitUnsupported`].
pub fn make_patch(script: &[Diff], source: &str) -> Result<Vec<Patch>> {
	let mut patches = Vec::new();
	if script.iter().all(|d| d.is_equal()) {
		// No edits, no patch.
		return Ok(patches);
	}

	let mut patch = Patch::default();
	let mut char_count1 = 0usize;
	let mut char_count2 = 0usize;
	let last = script.len() - 1;

	for (i, d) in script.iter().enumerate() {
		let size = text_size(&d.text);
		if patch.diffs.is_empty() && d.is_edit() {
			patch.source_start = char_count1;
			patch.dest_start = char_count2;
		}

		match d.op {
			Op::Insert => {
				patch.diffs.push(d.clone());
				patch.dest_length += size;
			}
			Op::Delete => {
				patch.diffs.push(d.clone());
				patch.source_length += size;
			}
			Op::Equal => {
				if size <= 2 * PATCH_MARGIN && !patch.diffs.is_empty() && i != last {
					// Small equality: keep it as interior context.
					patch.diffs.push(d.clone());
					patch.source_length += size;
					patch.dest_length += size;
				}
				if size >= 2 * PATCH_MARGIN && !patch.diffs.is_empty() {
					return Err(Error::patch_split_unsupported(size));
				}
			}
		}

		if d.op != Op::Insert {
			char_count1 += size;
		}
		if d.op != Op::Delete {
			char_count2 += size;
		}
	}

	if !patch.diffs.is_empty() {
		add_context(&mut patch, source)?;
		patches.push(patch);
	}
	Ok(patches)
}

// region:    --- Support

/// Widens `patch` with equal context from `source` until the covered pattern
/// pins a unique spot, then adds the standard margin on both sides.
fn add_context(patch: &mut Patch, source: &str) -> Result<()> {
	if source.is_empty() {
		return Ok(());
	}
	let source_size = text_size(source);
	let mut pattern = cp_slice(source, patch.source_start, patch.source_start + patch.source_length);
	let mut padding = 0usize;

	while !unique_match(pattern, source)? && text_size(pattern) < MATCH_MAXBITS - 2 * PATCH_MARGIN {
		padding += PATCH_MARGIN;
		pattern = cp_slice(
			source,
			patch.source_start.saturating_sub(padding),
			(patch.source_start + patch.source_length + padding).min(source_size),
		);
	}
	padding += PATCH_MARGIN;

	let prefix_start = patch.source_start.saturating_sub(padding);
	let prefix = cp_slice(source, prefix_start, patch.source_start);
	if !prefix.is_empty() {
		patch.diffs.insert(0, Diff::equal(prefix));
	}
	let suffix_end = (patch.source_start + patch.source_length + padding).min(source_size);
	let suffix = cp_slice(source, patch.source_start + patch.source_length, suffix_end);
	if !suffix.is_empty() {
		patch.diffs.push(Diff::equal(suffix));
	}

	let prefix_size = text_size(prefix);
	let suffix_size = text_size(suffix);
	patch.source_start -= prefix_size;
	patch.dest_start -= prefix_size;
	patch.source_length += prefix_size + suffix_size;
	patch.dest_length += prefix_size + suffix_size;
	Ok(())
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
