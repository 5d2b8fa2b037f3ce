//! Render surfaces
//!
//! A [`Surface`] collects the SVG documents produced by histogram plot
//! calls. Most callers draw on the process-wide current surface, which is
//! created on first use and lives for the rest of the process with no
//! explicit teardown; an explicit surface handle can be passed instead.

use lazy_static::lazy_static;
use rangehist_core::{Error, Result};
use std::path::Path;
use std::sync::Mutex;

/// A target surface holding rendered SVG documents
#[derive(Debug, Default)]
pub struct Surface {
    documents: Vec<String>,
}

impl Surface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rendered SVG document
    pub fn push_document(&mut self, svg: String) {
        self.documents.push(svg);
    }

    /// All documents rendered onto this surface, oldest first
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// The most recently rendered document
    pub fn last_document(&self) -> Option<&str> {
        self.documents.last().map(String::as_str)
    }

    /// Number of documents on this surface
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if nothing has been rendered yet
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Drop all rendered documents
    pub fn clear(&mut self) {
        self.documents.clear();
    }

    /// Write the most recent document to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let svg = self.last_document().ok_or_else(|| {
            Error::InvalidInput("surface has no rendered document".to_string())
        })?;
        std::fs::write(path, svg)?;
        Ok(())
    }
}

lazy_static! {
    static ref CURRENT_SURFACE: Mutex<Surface> = Mutex::new(Surface::new());
}

/// Run `f` with exclusive access to the process-wide current surface
///
/// The surface is created on first use and is never torn down; `clear` it
/// to reclaim memory in long-lived processes.
pub fn with_current_surface<R>(f: impl FnOnce(&mut Surface) -> R) -> R {
    let mut guard = CURRENT_SURFACE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_collects_documents() {
        let mut surface = Surface::new();
        assert!(surface.is_empty());

        surface.push_document("<svg>a</svg>".to_string());
        surface.push_document("<svg>b</svg>".to_string());
        assert_eq!(surface.len(), 2);
        assert_eq!(surface.last_document(), Some("<svg>b</svg>"));

        surface.clear();
        assert!(surface.is_empty());
        assert_eq!(surface.last_document(), None);
    }

    #[test]
    fn test_save_without_document_fails() {
        let surface = Surface::new();
        assert!(surface.save("/tmp/never-written.svg").is_err());
    }

    #[test]
    fn test_current_surface_persists() {
        // Other tests may push onto the shared surface concurrently, so only
        // assert that our own document sticks.
        let marker = "<svg>surface-persistence-marker</svg>";
        with_current_surface(|s| s.push_document(marker.to_string()));
        let seen = with_current_surface(|s| s.documents().iter().any(|d| d == marker));
        assert!(seen);
    }
}
