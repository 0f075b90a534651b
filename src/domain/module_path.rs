use std::fmt;

/// Leading segment that marks a command-line entrypoint package.
const COMMAND_SEGMENT: &str = "cmd";

/// Package name forced for command-line entrypoint packages, regardless of
/// their directory name.
const ENTRYPOINT_PACKAGE_NAME: &str = "main";

/// A dotted identifier path naming the module to scaffold.
///
/// `cmd.myservice.worker` splits into `["cmd", "myservice", "worker"]`.
/// Parsing is deliberately permissive: the input is split strictly on `.`,
/// empty segments are preserved, and no shape is rejected. Degenerate input
/// flows through as empty role values instead of aborting a scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath {
    segments: Vec<String>,
}

impl ModulePath {
    /// Split a dotted path into its segments.
    ///
    /// Never fails. The empty string parses to a single empty segment, so a
    /// parsed path always has at least one segment.
    pub fn parse(raw: &str) -> Self {
        Self { segments: raw.split('.').map(str::to_string).collect() }
    }

    /// All segments, in order. Always at least one.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The package segment: second-to-last when the path has two or more
    /// segments, otherwise the sole segment.
    ///
    /// For exactly two segments this coincides with the directory parent;
    /// that overlap is part of the naming convention.
    pub fn package(&self) -> &str {
        match self.segments.len() {
            0 | 1 => self.segments.first().map(String::as_str).unwrap_or(""),
            n => &self.segments[n - 2],
        }
    }

    /// The module segment: always the last.
    pub fn module(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// The project segment. Same value as the module segment.
    pub fn project(&self) -> &str {
        self.module()
    }

    /// Package name used inside generated code: `main` for `cmd.`-prefixed
    /// paths with at least two segments, otherwise the package segment.
    pub fn package_name(&self) -> &str {
        if self.segments.len() >= 2 && self.segments[0] == COMMAND_SEGMENT {
            ENTRYPOINT_PACKAGE_NAME
        } else {
            self.package()
        }
    }

    /// Project name. Same value as the project segment.
    pub fn project_name(&self) -> &str {
        self.project()
    }

    /// Directory that will contain the module: `.` for a single-segment
    /// path, otherwise every segment except the last, slash-joined.
    pub fn package_dir(&self) -> String {
        match self.segments.len() {
            0 | 1 => ".".to_string(),
            n => self.segments[..n - 1].join("/"),
        }
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
