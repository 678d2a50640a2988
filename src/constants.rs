//! Module for shared constants used across the codebase

pub mod export {
    /// Base name of saved files (extension added from the format hint)
    pub const DEFAULT_EXPORT_NAME: &str = "santext-export";

    /// Media type declared for every saved file
    pub const MIME_TYPE: &str = "text/plain";

    /// Suffix appended to an existing file while it is being replaced
    pub const BACKUP_EXT: &str = "bak";
}

pub mod layout {
    /// One indentation level for JSON and markup beautifying
    pub const INDENT: &str = "  ";
}

pub mod messages {
    /// Failure reason used when the underlying error carries no message
    pub const OPERATION_FAILED: &str = "Operation failed";
}

pub mod config {
    /// Name of the main configuration file
    pub const DEFAULT_CONF_FILE: &str = "santext.toml";

    /// Default output directory for saved files
    pub const DEFAULT_OUTPUT_DIR: &str = ".";
}
