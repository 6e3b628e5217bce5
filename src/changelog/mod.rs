//! Changelog rendering, repeat-suppression and writing.

pub mod format;
pub mod parser;
pub mod writer;

pub use format::CHANGELOG_HEADER;
pub use parser::{PriorChangelog, read_changelog};
pub use writer::{RenderedChangelog, generate_summary, render_changelog, write_changelog};
