//! The document buffer and its read/write lifecycle.
//!
//! A [`Document`] moves through three informal states:
//!
//! ```text
//! ┌─────────┐  read/write with    ┌────────┐   set_contents   ┌───────┐
//! │ Unbound │────────────────────>│ Bound  │─────────────────>│ Dirty │
//! │no folder│   resolved folder   │clean   │                  │       │
//! └─────────┘                     └────────┘<─────────────────└───────┘
//!                                             successful write
//! ```
//!
//! There is no terminal state beyond dropping the value: ownership makes
//! use-after-destroy and double-destroy unrepresentable.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path};

use crate::error::DocumentError;
use crate::naming;

/// Maximum rendered length, in bytes, accepted for a working-directory
/// fallback path. Longer paths fail resolution rather than being truncated.
pub const WORKING_DIR_CAP: usize = 512;

/// A single open text file: identity, contents, and dirty flag.
///
/// The buffer exclusively owns all three text fields; nothing else may
/// reference or outlive them. There is no internal synchronization - wrap
/// the value in a lock if it must be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name, never empty. Auto-generated for untitled documents.
    file_name: String,

    /// Folder the document was last read from or written to, always ending
    /// with the platform separator. `None` until a read or write succeeds.
    file_folder: Option<String>,

    /// Current text. May be empty, never absent.
    contents: String,

    /// True when the in-memory contents diverge from the last-known
    /// persisted state.
    modified: bool,
}

impl Document {
    /// Creates a fresh untitled document.
    ///
    /// The name is `Untitle<N>.txt` with a process-wide counter (see
    /// [`crate::naming`] semantics: monotonic, never reset). Contents are
    /// empty and no folder is associated.
    ///
    /// A fresh document is considered **modified**: its contents exist
    /// nowhere on disk yet, so "save" must be offered to the user.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: naming::next_untitled_name(),
            file_folder: None,
            contents: String::new(),
            modified: true,
        }
    }

    /// Creates an untitled document holding `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut doc = Self::new();
        doc.set_contents(text);
        doc
    }

    /// Creates a document by reading the file at `path`.
    ///
    /// On success the document takes its identity from the path: the
    /// basename becomes the file name and the dirname (with a trailing
    /// separator appended) becomes the folder. The in-memory state then
    /// exactly matches storage, so the dirty flag is cleared.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::Io`] if the file cannot be read as UTF-8 text
    /// - [`DocumentError::InvalidFilePath`] if `path` has no basename
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let mut doc = Self::new();
        doc.read_contents_from_file(path)?;

        let Some(name) = path.file_name() else {
            return Err(DocumentError::InvalidFilePath {
                reason: format!("no file name in '{}'", path.display()),
            });
        };
        doc.file_name = name.to_string_lossy().into_owned();
        doc.file_folder = Some(match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => folder_with_separator(parent),
            // Bare relative name: bind to the current directory marker
            _ => format!(".{MAIN_SEPARATOR}"),
        });
        doc.modified = false;

        tracing::debug!(path = %path.display(), "created document from file");
        Ok(doc)
    }

    /// File name of the document, never empty.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Folder last read from or written to, with trailing separator.
    /// `None` while the document is unbound.
    #[must_use]
    pub fn file_folder(&self) -> Option<&str> {
        self.file_folder.as_deref()
    }

    /// Current text, for display by the shell.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// True when in-memory contents diverge from the last persisted state.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Replaces the contents with a copy of `text` and marks the document
    /// modified.
    ///
    /// The flag is set unconditionally - replacing the text of an unbound
    /// document dirties it just the same as editing a bound one.
    pub fn set_contents(&mut self, text: &str) {
        self.contents.clear();
        self.contents.push_str(text);
        self.modified = true;
    }

    /// Byte length of the contents.
    ///
    /// This is a byte count, not a character count; use
    /// [`Document::char_count`] when codepoints matter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True if the contents are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Codepoint count of the contents.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.contents.chars().count()
    }

    /// Reads the file at `path` into the buffer, replacing the contents.
    ///
    /// Identity and the dirty flag are left alone - this is the low-level
    /// half of [`Document::read`], which is what "open" actions should use.
    /// On failure the contents are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] if the file cannot be read or is not
    /// valid UTF-8.
    pub fn read_contents_from_file(&mut self, path: &Path) -> Result<(), DocumentError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), bytes = text.len(), "read contents");
                self.contents = text;
                Ok(())
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read contents");
                Err(err.into())
            },
        }
    }

    /// Reads `folder + file_name` into the buffer and binds the document.
    ///
    /// Folder resolution order: the explicit `folder` argument, else the
    /// stored folder, else the process working directory. On success the
    /// dirty flag is cleared and the resolved folder is stored; on failure
    /// both are untouched.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::InvalidFilePath`] if the file name is empty or no
    ///   folder could be resolved
    /// - [`DocumentError::Io`] if reading fails
    pub fn read(&mut self, folder: Option<&Path>) -> Result<(), DocumentError> {
        if self.file_name.is_empty() {
            return Err(DocumentError::InvalidFilePath { reason: "empty file name".to_string() });
        }

        let folder = self.resolve_folder(folder)?;
        let path = format!("{folder}{}", self.file_name);
        self.read_contents_from_file(Path::new(&path))?;

        self.modified = false;
        self.file_folder = Some(folder);
        Ok(())
    }

    /// Writes the contents verbatim to `path`.
    ///
    /// Identity and the dirty flag are left alone - this is the low-level
    /// half of [`Document::write`], which is what "save" actions should use.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] if writing fails.
    pub fn write_contents_to_file(&self, path: &Path) -> Result<(), DocumentError> {
        match fs::write(path, self.contents.as_bytes()) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), bytes = self.contents.len(), "wrote contents");
                Ok(())
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to write contents");
                Err(err.into())
            },
        }
    }

    /// Writes the contents to `folder + file_name` and binds the document.
    ///
    /// Same folder resolution order as [`Document::read`]. On success the
    /// dirty flag is cleared and the resolved folder is stored; on failure
    /// both are untouched.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::InvalidFilePath`] if the file name is empty or no
    ///   folder could be resolved
    /// - [`DocumentError::Io`] if writing fails
    pub fn write(&mut self, folder: Option<&Path>) -> Result<(), DocumentError> {
        if self.file_name.is_empty() {
            return Err(DocumentError::InvalidFilePath { reason: "empty file name".to_string() });
        }

        let folder = self.resolve_folder(folder)?;
        let path = format!("{folder}{}", self.file_name);
        self.write_contents_to_file(Path::new(&path))?;

        self.modified = false;
        self.file_folder = Some(folder);
        Ok(())
    }

    /// Renders a read-only diagnostic report of the document state.
    ///
    /// Reports identity, size in bytes and codepoints, and the dirty flag.
    /// Never mutates anything; also emitted at debug level for the log.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "file_name: '{}'", self.file_name);
        let _ = writeln!(report, "file_folder: {}", match &self.file_folder {
            Some(folder) => format!("'{folder}'"),
            None => "none".to_string(),
        });
        let _ = writeln!(report, "contents: {} bytes, {} chars", self.len(), self.char_count());
        let _ = writeln!(report, "modified: {}", self.modified);

        tracing::debug!(report = %report, "document dump");
        report
    }

    /// Resolves the folder for a read or write, in order: explicit argument,
    /// stored folder, working directory. The result always ends with the
    /// platform separator.
    fn resolve_folder(&self, folder: Option<&Path>) -> Result<String, DocumentError> {
        if let Some(folder) = folder {
            return Ok(folder_with_separator(folder));
        }
        if let Some(folder) = &self.file_folder {
            return Ok(folder.clone());
        }

        let cwd = env::current_dir().map_err(|err| DocumentError::InvalidFilePath {
            reason: format!("working directory unavailable: {err}"),
        })?;
        let rendered = folder_with_separator(&cwd);
        if rendered.len() > WORKING_DIR_CAP {
            tracing::warn!(
                len = rendered.len(),
                cap = WORKING_DIR_CAP,
                "working directory path exceeds size cap"
            );
            return Err(DocumentError::InvalidFilePath {
                reason: format!("working directory path exceeds {WORKING_DIR_CAP} bytes"),
            });
        }

        tracing::debug!(folder = %rendered, "using working directory");
        Ok(rendered)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a folder path with a trailing platform separator, appending one
/// only when missing.
fn folder_with_separator(folder: &Path) -> String {
    let mut rendered = folder.to_string_lossy().into_owned();
    if !rendered.ends_with(MAIN_SEPARATOR) {
        rendered.push(MAIN_SEPARATOR);
    }
    rendered
}
