use crate::{Error, Result};

/// Bit width available to a bitap-style fuzzy locator. Also caps how far
/// patch context may grow around an ambiguous pattern.
pub const MATCH_MAXBITS: usize = 31;

/// True when `pattern` occurs in `text` exactly once (byte-wise search).
///
/// A pattern that never occurs at all is a caller bug and errors out.
pub fn unique_match(pattern: &str, text: &str) -> Result<bool> {
	let mut hits = text.match_indices(pattern);
	if hits.next().is_none() {
		return Err(Error::pattern_not_found(pattern));
	}
	Ok(hits.next().is_none())
}

// region:    --- Tests


// endregion: --- Tests
