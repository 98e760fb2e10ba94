pub mod aggregate;

pub use aggregate::{CrimeReport, ReportError, ReportField, ReportId, ReportReceipt};
