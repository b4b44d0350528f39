use std::collections::HashMap;

use crate::cleanup::cleanup_merge;
use crate::diff::diff_main;
use crate::ops::{Diff, Op};

/// Diffs at line granularity first, then re-diffs the delete/insert residues
/// at codepoint granularity.
pub fn diff_linemode(source: &str, dest: &str) -> Vec<Diff> {
	line_mode(source, dest)
}

pub(crate) fn line_mode(source: &str, dest: &str) -> Vec<Diff> {
	let (encoded1, encoded2, lines) = lines_to_chars(source, dest);
	let mut diffs = diff_main(&encoded1, &encoded2, false);
	chars_to_lines(&mut diffs, &lines);
	cleanup_merge(&mut diffs);
	rediff_residues(diffs)
}

// region:    --- Support

/// Vocabulary cap that keeps every id one `char`. Past it, the remainder of
/// a text is swallowed as a single line; both inputs can add one such
/// remainder, and the last id still encodes as `char::MAX`.
const MAX_LINES: usize = 0x10FFFF - 0x801;

/// Replaces every distinct line of both inputs with a single synthetic
/// codepoint. The vocabulary is shared across the two inputs.
fn lines_to_chars<'a>(source: &'a str, dest: &'a str) -> (String, String, Vec<&'a str>) {
	let mut lines: Vec<&str> = Vec::new();
	let mut ids: HashMap<&str, usize> = HashMap::new();
	let encoded1 = encode_lines(source, &mut lines, &mut ids);
	let encoded2 = encode_lines(dest, &mut lines, &mut ids);
	(encoded1, encoded2, lines)
}

fn encode_lines<'a>(text: &'a str, lines: &mut Vec<&'a str>, ids: &mut HashMap<&'a str, usize>) -> String {
	let mut encoded = String::new();
	let mut start = 0usize;
	while start < text.len() {
		let end = if lines.len() < MAX_LINES {
			text[start..].find('\n').map(|i| start + i + 1).unwrap_or(text.len())
		} else {
			text.len()
		};
		let line = &text[start..end];
		let id = *ids.entry(line).or_insert_with(|| {
			lines.push(line);
			lines.len() - 1
		});
		encoded.push(id_to_char(id));
		start = end;
	}
	encoded
}

fn chars_to_lines(diffs: &mut [Diff], lines: &[&str]) {
	for d in diffs.iter_mut() {
		let mut text = String::new();
		for c in d.text.chars() {
			text.push_str(lines[char_to_id(c)]);
		}
		d.text = text;
	}
}

/// Line ids are dense from 0 but skip the surrogate gap, which a `char`
/// cannot represent.
fn id_to_char(id: usize) -> char {
	let cp = if id >= 0xD800 { id + 0x800 } else { id };
	char::from_u32(cp as u32).expect("line id beyond codepoint space")
}

fn char_to_id(c: char) -> usize {
	let cp = c as usize;
	if cp >= 0xE000 { cp - 0x800 } else { cp }
}

/// Re-diffs each delete/insert pair that sits between equalities at codepoint
/// granularity. Pending edits at end-of-input pass through untouched.
fn rediff_residues(diffs: Vec<Diff>) -> Vec<Diff> {
	let mut out: Vec<Diff> = Vec::new();
	let mut pending: Vec<Diff> = Vec::new();
	let mut del_text = String::new();
	let mut ins_text = String::new();

	for d in diffs {
		match d.op {
			Op::Delete => {
				del_text.push_str(&d.text);
				pending.push(d);
			}
			Op::Insert => {
				ins_text.push_str(&d.text);
				pending.push(d);
			}
			Op::Equal => {
				if !del_text.is_empty() && !ins_text.is_empty() {
					out.extend(diff_main(&del_text, &ins_text, false));
					pending.clear();
				} else {
					out.append(&mut pending);
				}
				del_text.clear();
				ins_text.clear();
				out.push(d);
			}
		}
	}
	out.append(&mut pending);
	out
}

// endregion: --- Support

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_linemode_simple() {
		let script = diff_linemode("hello\nworld\n", "hello\nmaas\n");
		assert_eq!(
			script,
			vec![Diff::equal("hello\n"), Diff::delete("world\n"), Diff::insert("maas\n")]
		);
	}

	#[test]
	fn test_linemode_rediffs_interior_residue() {
		let script = diff_linemode("one\ntwo\ntail\n", "one\ntwin\ntail\n");
		// The two/twin pair sits before the "tail" equality, so it gets
		// re-diffed at codepoint granularity.
		assert_eq!(crate::ops::source_text(&script), "one\ntwo\ntail\n");
		assert_eq!(crate::ops::destination_text(&script), "one\ntwin\ntail\n");
		assert!(script.iter().any(|d| d.is_equal() && d.text.contains("tw")));
	}

	#[test]
	fn test_lines_to_chars_shared_vocabulary() {
		let (encoded1, encoded2, lines) = lines_to_chars("a\nb\na\n", "b\na\nc\n");
		assert_eq!(lines, vec!["a\n", "b\n", "c\n"]);
		assert_eq!(encoded1, "\u{0}\u{1}\u{0}");
		assert_eq!(encoded2, "\u{1}\u{0}\u{2}");
	}

	#[test]
	fn test_lines_to_chars_no_trailing_newline() {
		let (encoded1, _encoded2, lines) = lines_to_chars("a\nb", "");
		assert_eq!(lines, vec!["a\n", "b"]);
		assert_eq!(encoded1, "\u{0}\u{1}");
	}

	#[test]
	fn test_id_char_roundtrip_over_surrogate_gap() {
		for id in [0usize, 1, 127, 0xD7FF, 0xD800, 0xFFFF, MAX_LINES] {
			assert_eq!(char_to_id(id_to_char(id)), id);
		}
	}
}

// endregion: --- Tests
