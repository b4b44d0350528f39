// region:    --- Modules

mod bisect;
mod cleanup;
mod diff;
mod error;
mod half_match;
mod line_mode;
mod matcher;
mod ops;
mod patch;
mod utf8;

pub use bisect::*;
pub use cleanup::*;
pub use diff::*;
pub use error::*;
pub use line_mode::*;
pub use matcher::*;
pub use ops::*;
pub use patch::*;
pub use utf8::*;

// endregion: --- Modules
