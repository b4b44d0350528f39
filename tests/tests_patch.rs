//! Integration tests for patch assembly, unique matching, and the
//! efficiency cleanup.

use assertables::assert_contains;
use cdiffx::{
	Diff, Error, Op, PATCH_MARGIN, cleanup_efficiency, cleanup_efficiency_default, diff, make_patch, unique_match,
};

type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

#[test]
fn test_unique_match_outcomes() -> Result<()> {
	// -- Exec & Check
	assert!(unique_match("a", "abc")?);
	assert!(!unique_match("ab", "abab")?);

	let err = unique_match("zebra", "abab").err().ok_or("Should have failed")?;
	assert_contains!(err.to_string(), "zebra");

	Ok(())
}

#[test]
fn test_make_patch_single_replacement() -> Result<()> {
	// -- Setup & Fixtures
	let source = "The cat.";
	let script = diff(source, "The hat.");

	// -- Exec
	let patches = make_patch(&script, source)?;

	// -- Check
	assert_eq!(patches.len(), 1);
	let patch = &patches[0];
	assert_eq!(
		patch.diffs,
		vec![Diff::equal("The "), Diff::delete("c"), Diff::insert("h"), Diff::equal("at.")]
	);
	assert_eq!(patch.source_start, 0);
	assert_eq!(patch.dest_start, 0);
	assert_eq!(patch.source_length, 8);
	assert_eq!(patch.dest_length, 8);

	Ok(())
}

#[test]
fn test_make_patch_grows_context_to_unique() -> Result<()> {
	// -- Setup & Fixtures
	// The deleted "1" occurs twice in the source, so the margin-sized pattern
	// is ambiguous and the context widens until it pins a unique spot.
	let source = "abc1abc2abc1abc";
	let dest = "abc1abc2abcXabc";
	let script = diff(source, dest);

	// -- Exec
	let patches = make_patch(&script, source)?;

	// -- Check
	assert_eq!(patches.len(), 1);
	let patch = &patches[0];
	assert!(patch.source_length > 2 * PATCH_MARGIN + 1);
	assert!(patch.diffs.iter().any(|d| d.op == Op::Insert && d.text == "X"));

	Ok(())
}

#[test]
fn test_make_patch_split_not_implemented() -> Result<()> {
	// -- Setup & Fixtures
	// Two edit islands separated by a long equality would need a second
	// patch record.
	let source = "one shared middle body two";
	let dest = "ONE shared middle body TWO";
	let script = diff(source, dest);

	// -- Exec
	let res = make_patch(&script, source);

	// -- Check
	let err = res.err().ok_or("Should have failed")?;
	assert!(matches!(err, Error::PatchSplitUnsupported { .. }));

	Ok(())
}

#[test]
fn test_cleanup_efficiency_custom_cost() -> Result<()> {
	// -- Setup & Fixtures
	let mut diffs = vec![
		Diff::delete("ab"),
		Diff::insert("12"),
		Diff::equal("wxyz"),
		Diff::delete("cd"),
		Diff::insert("34"),
	];

	// -- Exec: a four-codepoint equality survives the default cost but
	// dissolves under a higher one.
	cleanup_efficiency_default(&mut diffs);
	let kept = diffs.clone();
	cleanup_efficiency(&mut diffs, 5);

	// -- Check
	assert_eq!(
		kept,
		vec![
			Diff::delete("ab"),
			Diff::insert("12"),
			Diff::equal("wxyz"),
			Diff::delete("cd"),
			Diff::insert("34"),
		]
	);
	assert_eq!(diffs, vec![Diff::delete("abwxyzcd"), Diff::insert("12wxyz34")]);

	Ok(())
}

#[test]
fn test_cleanup_efficiency_idempotent() -> Result<()> {
	// -- Setup & Fixtures
	let mut diffs = vec![
		Diff::delete("ab"),
		Diff::insert("12"),
		Diff::equal("xyz"),
		Diff::delete("cd"),
		Diff::insert("34"),
	];

	// -- Exec
	cleanup_efficiency_default(&mut diffs);
	let once = diffs.clone();
	cleanup_efficiency_default(&mut diffs);

	// -- Check
	assert_eq!(diffs, once);

	Ok(())
}
