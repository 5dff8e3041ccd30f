#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Fill color the tool targets.
pub const TARGET_FILL: &str = "#EFECE1";

/// Rectangle the tool substitutes for a removed texture.
pub const RECT: &str = r##"<rect width="1024" height="1024" fill="#EFECE1"/>"##;

/// Creates an `assert_cmd` Command for the grunge-strip binary.
pub fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("grunge-strip"))
}

/// Temp working directory holding SVG fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        fs::write(self.dir.path().join(relative_path), content).expect("Failed to write file");
    }

    /// Reads a file from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Byte length of a file in the temp directory.
    pub fn file_len(&self, relative_path: &str) -> u64 {
        fs::metadata(self.dir.path().join(relative_path))
            .expect("Failed to stat file")
            .len()
    }

    /// Logo document whose texture path segment is `texture_len` bytes.
    pub fn logo_with_texture(texture_len: usize) -> String {
        Self::logo_with_texture_fill(TARGET_FILL, texture_len)
    }

    /// Same, with an explicit fill color for the texture path.
    pub fn logo_with_texture_fill(fill: &str, texture_len: usize) -> String {
        let head = format!(r##" fill="{fill}" d=""##);
        let tail = r##""/>"##;
        let pad = texture_len.saturating_sub(head.len() + tail.len());
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1024 1024"><path{head}{}{tail}<path fill="#1A1A1A" d="M10 10L20 20Z"/></svg>"##,
            "z".repeat(pad)
        )
    }
}
