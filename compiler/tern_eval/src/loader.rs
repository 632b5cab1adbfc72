//! Source resolution for `load`.

use tern_ir::{Program, StringInterner};

/// Turns a `load` path into a parsed program.
///
/// The interpreter owns caching and module naming; implementations only
/// read and parse. Errors are rendered messages.
pub trait SourceLoader {
    fn load(&self, path: &str, interner: &StringInterner) -> Result<Program, String>;
}
