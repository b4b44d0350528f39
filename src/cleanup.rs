use crate::ops::{Diff, Op};
use crate::utf8::{common_prefix, common_suffix, text_size};

/// Default cost of an edit operation for [`cleanup_efficiency`].
pub const DEFAULT_EDIT_COST: usize = 4;

/// Canonicalizes an edit script in place.
///
/// Drops empty operations, fuses runs of the same kind, orders each run as
/// one delete then one insert, factors affixes shared by a delete/insert pair
/// into the neighboring equalities, and slides edits across an equality that
/// is a prefix or suffix of the edit text. Idempotent, and the concatenated
/// source/destination texts are preserved.
pub fn cleanup_merge(diffs: &mut Vec<Diff>) {
	diffs.push(Diff::equal("")); // sentinel
	let mut pointer = 0usize;
	let mut del_count = 0usize;
	let mut ins_count = 0usize;
	let mut del_text = String::new();
	let mut ins_text = String::new();

	while pointer < diffs.len() {
		if pointer < diffs.len() - 1 && diffs[pointer].text.is_empty() {
			diffs.remove(pointer);
			continue;
		}

		match diffs[pointer].op {
			Op::Insert => {
				ins_count += 1;
				ins_text.push_str(&diffs[pointer].text);
				pointer += 1;
			}
			Op::Delete => {
				del_count += 1;
				del_text.push_str(&diffs[pointer].text);
				pointer += 1;
			}
			Op::Equal => {
				let has_del = !del_text.is_empty();
				let has_ins = !ins_text.is_empty();
				if has_del || has_ins {
					// Affixes shared by the paired edits move into the
					// surrounding equalities, but only inside a real
					// equality sandwich: never across the script edges.
					let prev_eq = pointer as isize - ins_count as isize - del_count as isize - 1;
					let at_sentinel = pointer == diffs.len() - 1 && diffs[pointer].text.is_empty();
					if has_del && has_ins && prev_eq >= 0 && !at_sentinel {
						let prefix_len = common_prefix(&ins_text, &del_text).len();
						if prefix_len > 0 {
							let prefix = ins_text[..prefix_len].to_string();
							diffs[prev_eq as usize].text.push_str(&prefix);
							ins_text.drain(..prefix_len);
							del_text.drain(..prefix_len);
						}
						let suffix_len = common_suffix(&ins_text, &del_text).len();
						if suffix_len > 0 {
							let suffix = ins_text.split_off(ins_text.len() - suffix_len);
							del_text.truncate(del_text.len() - suffix_len);
							diffs[pointer].text.insert_str(0, &suffix);
						}
					}

					// Rebuild the run as at most one delete then one insert.
					let count = del_count + ins_count;
					let start = pointer - count;
					let mut merged: Vec<Diff> = Vec::with_capacity(2);
					if !del_text.is_empty() {
						merged.push(Diff::delete(del_text.as_str()));
					}
					if !ins_text.is_empty() {
						merged.push(Diff::insert(ins_text.as_str()));
					}
					let added = merged.len();
					diffs.splice(start..start + count, merged);
					pointer = start + added;
				}

				if pointer != 0 && diffs[pointer - 1].op == Op::Equal {
					// Fuse with the previous equality.
					let text = std::mem::take(&mut diffs[pointer].text);
					diffs[pointer - 1].text.push_str(&text);
					diffs.remove(pointer);
				} else {
					pointer += 1;
				}

				del_count = 0;
				ins_count = 0;
				del_text.clear();
				ins_text.clear();
			}
		}
	}

	if diffs.last().is_some_and(|d| d.text.is_empty()) {
		diffs.pop(); // drop the sentinel
	}

	// Second pass: slide single edits over an adjacent equality when the
	// equality is a suffix (slide left) or prefix (slide right) of the edit.
	// A slide can reunite same-kind neighbors, hence the re-run.
	let mut changes = false;
	let mut pointer = 1usize;
	while pointer + 1 < diffs.len() {
		if diffs[pointer - 1].is_equal() && diffs[pointer + 1].is_equal() {
			let prev = diffs[pointer - 1].text.clone();
			let next = diffs[pointer + 1].text.clone();
			if diffs[pointer].text.ends_with(&prev) {
				let keep = diffs[pointer].text.len() - prev.len();
				diffs[pointer].text = format!("{prev}{}", &diffs[pointer].text[..keep]);
				diffs[pointer + 1].text = format!("{prev}{next}");
				diffs.remove(pointer - 1);
				changes = true;
			} else if diffs[pointer].text.starts_with(&next) {
				diffs[pointer - 1].text.push_str(&next);
				let rest = diffs[pointer].text[next.len()..].to_string();
				diffs[pointer].text = format!("{rest}{next}");
				diffs.remove(pointer + 1);
				changes = true;
			}
		}
		pointer += 1;
	}
	if changes {
		cleanup_merge(diffs);
	}
}

/// Semantic cleanup.
///
/// TODO: port the semantic pass (fold equalities shorter than the surrounding
/// edits, then split on the overlap heuristic). Until then the script passes
/// through untouched.
pub fn cleanup_semantic(_diffs: &mut Vec<Diff>) {}

/// Dissolves equalities that cost more to keep than to respell as edits.
///
/// An equality shorter than `edit_cost` codepoints pinned between edits, or
/// shorter than `edit_cost / 2 + 1` with edits on both sides and a second
/// edit before it, is replaced by a delete/insert pair that fuses with its
/// neighbors in the closing merge pass.
pub fn cleanup_efficiency(diffs: &mut Vec<Diff>, edit_cost: usize) {
	let mut changes = false;
	let mut pointer = 0usize;
	while pointer < diffs.len() {
		if diffs[pointer].is_equal() && pointer > 0 && pointer + 1 < diffs.len() {
			let prev_edit = diffs[pointer - 1].is_edit();
			let prev2_edit = pointer >= 2 && diffs[pointer - 2].is_edit();
			let next_edit = diffs[pointer + 1].is_edit();
			let size = text_size(&diffs[pointer].text);
			let split = (prev_edit && next_edit && size < edit_cost)
				|| (prev2_edit && prev_edit && next_edit && size < edit_cost / 2 + 1);
			if split {
				let text = std::mem::take(&mut diffs[pointer].text);
				diffs.splice(pointer..pointer + 1, [Diff::delete(text.as_str()), Diff::insert(text)]);
				changes = true;
				pointer += 2;
				continue;
			}
		}
		pointer += 1;
	}
	if changes {
		cleanup_merge(diffs);
	}
}

/// [`cleanup_efficiency`] with [`DEFAULT_EDIT_COST`].
pub fn cleanup_efficiency_default(diffs: &mut Vec<Diff>) {
	cleanup_efficiency(diffs, DEFAULT_EDIT_COST);
}

// region:    --- Tests


// endregion: --- Tests
