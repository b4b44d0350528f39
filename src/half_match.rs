use crate::utf8::{common_prefix, common_suffix, floor_char_boundary};

/// A successful divide-and-conquer split:
/// `source == source_pre ++ common ++ source_post` and
/// `dest == dest_pre ++ common ++ dest_post`, with `common` spanning at least
/// half of the longer input (in bytes).
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct HalfMatch<'a> {
	pub source_pre: &'a str,
	pub source_post: &'a str,
	pub dest_pre: &'a str,
	pub dest_post: &'a str,
	pub common: &'a str,
}

/// Looks for a substring shared by both inputs that is at least half as long
/// as the longer one. Heuristic: only two seed positions are probed, so a
/// qualifying substring can be missed; a hit is always valid.
pub(crate) fn half_match<'a>(source: &'a str, dest: &'a str) -> Option<HalfMatch<'a>> {
	let swapped = source.len() < dest.len();
	let (long, short) = if swapped { (dest, source) } else { (source, dest) };
	if long.len() < 4 || short.len() * 2 < long.len() {
		return None;
	}

	// Probe a seed at one quarter and one half into the longer input.
	let hm1 = half_match_at(long, short, long.len().div_ceil(4));
	let hm2 = half_match_at(long, short, long.len().div_ceil(2));
	let best = match (hm1, hm2) {
		(None, None) => return None,
		(Some(hm), None) => hm,
		(None, Some(hm)) => hm,
		// A tie goes to the half-position candidate.
		(Some(a), Some(b)) => {
			if a.common.len() > b.common.len() {
				a
			} else {
				b
			}
		}
	};

	Some(if swapped {
		HalfMatch {
			source_pre: best.short_pre,
			source_post: best.short_post,
			dest_pre: best.long_pre,
			dest_post: best.long_post,
			common: best.common,
		}
	} else {
		HalfMatch {
			source_pre: best.long_pre,
			source_post: best.long_post,
			dest_pre: best.short_pre,
			dest_post: best.short_post,
			common: best.common,
		}
	})
}

// region:    --- Support

struct Candidate<'a> {
	long_pre: &'a str,
	long_post: &'a str,
	short_pre: &'a str,
	short_post: &'a str,
	common: &'a str,
}

/// Probes one seed taken from `long` around byte position `at` and grows the
/// best occurrence in `short` outward.
fn half_match_at<'a>(long: &'a str, short: &'a str, at: usize) -> Option<Candidate<'a>> {
	// Both seed edges snap down to codepoint boundaries.
	let seed_start = floor_char_boundary(long, at);
	let seed_end = floor_char_boundary(long, at + long.len() / 4);
	if seed_end <= seed_start {
		return None;
	}
	let seed = &long[seed_start..seed_end];

	// Overlapping occurrences matter, so advance by one codepoint past each
	// match start instead of past the whole match.
	let mut best: Option<Candidate<'a>> = None;
	let mut from = 0;
	while let Some(found) = short[from..].find(seed) {
		let hit = from + found;
		let suffix_len = common_suffix(&long[..seed_start], &short[..hit]).len();
		let prefix_len = common_prefix(&long[seed_start + seed.len()..], &short[hit + seed.len()..]).len();
		let common_len = suffix_len + seed.len() + prefix_len;
		if best.as_ref().is_none_or(|b| b.common.len() < common_len) {
			best = Some(Candidate {
				common: &short[hit - suffix_len..hit + seed.len() + prefix_len],
				long_pre: &long[..seed_start - suffix_len],
				long_post: &long[seed_start + seed.len() + prefix_len..],
				short_pre: &short[..hit - suffix_len],
				short_post: &short[hit + seed.len() + prefix_len..],
			});
		}
		match short[hit..].chars().next() {
			Some(c) => from = hit + c.len_utf8(),
			None => break,
		}
	}

	best.filter(|b| b.common.len() * 2 >= long.len())
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
