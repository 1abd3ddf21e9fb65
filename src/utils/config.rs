//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Character that starts a comment line in text input
pub const COMMENT_CHAR: char = '#';

/// Input path that means "read from stdin"
pub const STDIN_PATH: &str = "-";
