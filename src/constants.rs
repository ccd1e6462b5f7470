//! Application constants for the case indexer
//!
//! File patterns, output layout, filename markers and configuration
//! defaults used throughout the crate.

// =============================================================================
// Input Files
// =============================================================================

/// Suffix an input file must carry to be indexed (matched case-insensitively)
pub const PDF_EXTENSION: &str = ".pdf";

// =============================================================================
// Output Workbook
// =============================================================================

/// Default name of the workbook written into the input directory
pub const DEFAULT_OUTPUT_FILENAME: &str = "client_data.xlsx";

/// Required suffix for the output file name
pub const OUTPUT_EXTENSION: &str = ".xlsx";

/// Worksheet name for the generated table
pub const WORKSHEET_NAME: &str = "Sheet1";

/// Column headers, in output order
pub const COLUMN_HEADERS: [&str; 4] = [
    "Reference Number",
    "Client Name",
    "Lender",
    "Original Filename",
];

/// Last data row index an xlsx worksheet can hold (header occupies row 0)
pub const MAX_WORKSHEET_ROWS: usize = 1_048_575;

// =============================================================================
// Filename Markers
// =============================================================================

/// Field markers used by the tagged naming convention
pub mod markers {
    /// Prefix introducing the reference number
    pub const REFERENCE: &str = "Ref:";

    /// Prefix introducing the client name
    pub const CLIENT_NAME: &str = "Client Name:";

    /// Separator between fields when no client marker is present
    pub const DOUBLE_SPACE: &str = "  ";
}

// =============================================================================
// Configuration
// =============================================================================

/// Lender written for every row of a tagged-convention batch
pub const DEFAULT_TAGGED_LENDER: &str = "Advantage Finance";

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "case-indexer";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment overrides applied after the config file
pub mod env_vars {
    pub const CONVENTION: &str = "CASE_INDEXER_CONVENTION";
    pub const LENDER: &str = "CASE_INDEXER_LENDER";
    pub const OUTPUT: &str = "CASE_INDEXER_OUTPUT";
}

/// Log filter target used when `RUST_LOG` is unset
pub const LOG_TARGET: &str = "case_indexer";
