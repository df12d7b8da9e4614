//! Test262 conformance harness scaffolding for the Rotor engine.
//!
//! The harness will drive the ECMAScript Test262 suite against Rotor once
//! the evaluator is functional. What exists today is the validated plumbing
//! around it: case metadata, async filtering, and a [`Runner`] that checks
//! the on-disk layout before discovery and execution are wired up.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while configuring or driving the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("test262 root directory cannot be empty")]
    EmptyRoot,
    #[error("stat test262 root: {0}")]
    RootStat(std::io::Error),
    #[error("test262 root {0:?} is not a directory")]
    RootNotDir(PathBuf),
    #[error("create output directory: {0}")]
    CreateOutDir(std::io::Error),
    #[error("{0} not implemented yet")]
    NotImplemented(&'static str),
}

/// A single Test262 test file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCase {
    pub path: String,
    pub description: String,
    pub flags: Vec<String>,
}

/// Aggregated outcome of a test run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

const ASYNC_KEYWORDS: &[&str] = &["async", "await", "async-functions"];

/// Returns true when a test case should be excluded because it targets
/// async/await semantics that are intentionally unsupported.
pub fn is_async_related(case: &TestCase) -> bool {
    let lower_path = case.path.to_lowercase();
    if ASYNC_KEYWORDS.iter().any(|kw| lower_path.contains(kw)) {
        return true;
    }

    case.flags
        .iter()
        .any(|flag| flag.to_lowercase().contains("async"))
}

/// Removes async-related cases, preserving the order of the rest.
pub fn filter_async(cases: Vec<TestCase>) -> Vec<TestCase> {
    if cases.is_empty() {
        return cases;
    }

    cases
        .into_iter()
        .filter(|case| !is_async_related(case))
        .collect()
}

/// Coordinates discovery and execution of Test262 compliance tests.
#[derive(Debug)]
pub struct Runner {
    /// Path to the cloned test262 repository.
    pub root_dir: PathBuf,
    /// Where harness artifacts such as filtered lists and reports land.
    pub out_dir: PathBuf,
    /// Whether async/await tests are excluded.
    pub skip_async: bool,
}

impl Runner {
    /// Validates the file system layout and returns a configured runner.
    ///
    /// `out_dir` defaults to `<root>/../out` and is created if missing.
    pub fn new(root_dir: &Path, out_dir: Option<&Path>) -> Result<Runner, HarnessError> {
        if root_dir.as_os_str().is_empty() {
            return Err(HarnessError::EmptyRoot);
        }
        let meta = fs::metadata(root_dir).map_err(HarnessError::RootStat)?;
        if !meta.is_dir() {
            return Err(HarnessError::RootNotDir(root_dir.to_path_buf()));
        }

        let out_dir = match out_dir {
            Some(dir) => dir.to_path_buf(),
            None => root_dir.join("..").join("out"),
        };
        fs::create_dir_all(&out_dir).map_err(HarnessError::CreateOutDir)?;

        Ok(Runner {
            root_dir: root_dir.to_path_buf(),
            out_dir,
            skip_async: true,
        })
    }

    /// Walks the test262 repository and returns metadata for each test file.
    pub fn discover(&self) -> Result<Vec<TestCase>, HarnessError> {
        Err(HarnessError::NotImplemented("test discovery"))
    }

    /// Executes the provided test cases and returns a summarized report.
    pub fn run(&self, cases: &[TestCase]) -> Result<Report, HarnessError> {
        if cases.is_empty() {
            return Ok(Report::default());
        }
        Err(HarnessError::NotImplemented("test execution"))
    }
}
