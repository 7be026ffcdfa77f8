//! Report and archive writers for coverage results.
//!
//! Pure serializers: they consume a [`midsun_territory::Territory`] and a
//! [`midsun_solver::CoverageResult`] and have no influence on solver
//! behavior.

pub mod archive;
pub mod error;
pub mod markdown;

pub use archive::{
    VerdictRecord, WitnessArchive, WitnessRecord, archive_witness, read_witness_archive,
};
pub use error::ReportError;
pub use markdown::{render_markdown_report, write_report};
