use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	#[display("{_0}")]
	#[from(String, &String, &str)]
	Custom(String),

	// -- Match
	#[display("Pattern '{pattern}' not found in text")]
	PatternNotFound { pattern: String },

	// -- Patch
	#[display("Closing a patch on an equality of {equal_size} codepoints is not implemented")]
	PatchSplitUnsupported { equal_size: usize },
}

// region:    --- Custom

impl Error {
	pub fn pattern_not_found(pattern: impl Into<String>) -> Self {
		Self::PatternNotFound { pattern: pattern.into() }
	}

	pub fn patch_split_unsupported(equal_size: usize) -> Self {
		Self::PatchSplitUnsupported { equal_size }
	}
}

// endregion: --- Custom

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
