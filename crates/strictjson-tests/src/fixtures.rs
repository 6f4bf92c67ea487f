//! Test fixture utilities for creating JSON files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding JSON files under test.
pub struct JsonFixture {
    pub root: TempDir,
}

impl JsonFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a file relative to the fixture root and return its path.
    pub fn add_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// A path inside the fixture that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }
}

impl Default for JsonFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample documents shared across tests.
pub mod samples {
    /// A site settings file as a front-end would load it: strict JSON with
    /// URLs in string values.
    pub const SETTINGS: &str = r#"{
  "title": "Developer Portfolio",
  "favicon": "https://example.com/favicon.ico",
  "links": {
    "github": "https://github.com/example",
    "blog": "http://blog.example.com/posts"
  },
  "pages": [
    { "path": "/", "name": "Home" },
    { "path": "/about", "name": "About" }
  ]
}
"#;

    /// The same settings with the mistakes people typically make by hand.
    pub const SETTINGS_WITH_MISTAKES: &str = r#"{
  // site title
  "title": "Developer Portfolio",
  /* icon shown
     in the browser tab */
  "favicon": "https://example.com/favicon.ico",
  "pages": [
    { "path": "/", "name": "Home" },
    { "path": "/about", "name": "About" },
  ],
}
"#;

    /// Strict JSON whose string values contain comment and comma look-alikes.
    pub const LOOKALIKES_IN_STRINGS: &str = r#"{
  "regex": "^//.*$",
  "quote": "she said \"// not a comment\"",
  "glob": "src/**/*.rs",
  "csv": "a,]"
}
"#;
}
