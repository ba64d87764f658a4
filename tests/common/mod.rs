#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the doc-guard binary.
#[macro_export]
macro_rules! doc_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("doc-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic doc-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".doc-guard.toml", content);
    }

    /// Creates a C# file whose documentation satisfies every rule.
    pub fn create_documented_cs_file(&self, relative_path: &str) {
        self.create_file(
            relative_path,
            "/// <summary>\n\
             /// Computes the square of a number.\n\
             /// </summary>\n\
             /// <param name=\"x\"> The number to square. </param>\n\
             /// <returns> The square of x. </returns>\n\
             public int Square(int x)\n",
        );
    }

    /// Creates a C# file with an undocumented method.
    pub fn create_undocumented_cs_file(&self, relative_path: &str) {
        self.create_file(relative_path, "public void Foo()\n");
    }
}
