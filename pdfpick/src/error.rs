//! Error types for pdfpick.
//!
//! Only failures that abort an operation live here. Per-item problems such as
//! a malformed range token or a page past the end of a document are not errors;
//! they are reported as [`Diagnostic`](crate::selection::Diagnostic)s and the
//! offending item is skipped.
//!
//! # Error Categories
//!
//! - **Usage Errors**: Missing or contradictory inputs
//! - **Source Errors**: A source document cannot be found, opened or parsed
//! - **Write Errors**: The output document cannot be created or written

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfpick operations.
pub type Result<T> = std::result::Result<T, PdfPickError>;

/// Main error type for pdfpick operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfPickError {
    /// Required inputs are missing or contradict each other.
    #[error("{message}")]
    Usage {
        /// What the caller has to supply.
        message: String,
    },

    /// The scan directory contained no PDF documents.
    #[error("No PDF files found in {}", .dir.display())]
    NoSourceDocuments {
        /// Directory that was scanned.
        dir: PathBuf,
    },

    /// The scan directory could not be read.
    #[error("Failed to scan directory: {}\n  Reason: {reason}", .path.display())]
    ScanFailed {
        /// Directory that was scanned.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// A source index does not address any discovered document.
    #[error("File index {index} is out of range (0-{})", .count.saturating_sub(1))]
    SourceIndexOutOfRange {
        /// Requested index.
        index: i64,
        /// Number of discovered documents.
        count: usize,
    },

    /// Input file was not found.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Failed to load PDF file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// Output file already exists and overwrite is not allowed.
    #[error(
        "Output file already exists: {}\n  \
         Use --force to overwrite or choose a different output path",
        .path.display()
    )]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// User cancelled the operation.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for PdfPickError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<anyhow::Error> for PdfPickError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfPickError {
    /// Create a Usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: PathBuf) -> Self {
        Self::OutputExists { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Check if an interactive session can carry on after this error.
    ///
    /// Source-level failures only spoil the document that raised them, so the
    /// user may pick another one.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::FailedToLoadPdf { .. } | Self::EncryptedPdf { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 1,
            Self::InvalidConfig { .. } => 1,
            Self::SourceIndexOutOfRange { .. } => 1,
            Self::NoSourceDocuments { .. } => 2,
            Self::ScanFailed { .. } => 2,
            Self::FileNotFound { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io { .. } => 5,
            Self::Cancelled => 130, // Standard exit code for SIGINT
            Self::Other { .. } => 1,
        }
    }
}
