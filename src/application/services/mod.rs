//! Pipeline stage services for the application layer.

pub mod analysis_service;
pub mod collector_service;
pub mod report_service;

pub use analysis_service::AnalysisService;
pub use collector_service::CollectorService;
pub use report_service::ReportService;
