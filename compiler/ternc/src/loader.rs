//! Filesystem module loading.

use std::io;
use std::path::{Path, PathBuf};

use tern_eval::SourceLoader;
use tern_ir::{Program, StringInterner};
use tracing::debug;

/// Resolves `load(path)` against a base directory: the running script's
/// directory, or the working directory for the REPL.
#[derive(Clone, Debug)]
pub struct FileLoader {
    base: PathBuf,
}

impl FileLoader {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        FileLoader { base: base.into() }
    }

    pub fn for_script(script: &Path) -> Self {
        let base = script
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        FileLoader::new(base)
    }
}

impl SourceLoader for FileLoader {
    fn load(&self, path: &str, interner: &StringInterner) -> Result<Program, String> {
        let full = self.base.join(path);
        let source = std::fs::read_to_string(&full)
            .map_err(|e| io_message(&full.display().to_string(), &e))?;
        debug!(path = %full.display(), bytes = source.len(), "read module source");
        tern_parse::parse_source(&source, interner)
            .into_result()
            .map_err(|errors| {
                errors
                    .iter()
                    .map(|error| format!("{} at {}", error.message, error.span))
                    .collect::<Vec<_>>()
                    .join("; ")
            })
    }
}

/// Readable message for a failed read of `path`.
pub(crate) fn io_message(path: &str, error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}
