//! Application layer services implementing the pipeline stages.
//!
//! This layer orchestrates domain operations by coordinating capability
//! calls, per-record skip policies, and aggregation. Services consume the
//! capability traits and provide a clean API for the binary.
//!
//! # Available Services
//!
//! - [`services::collector_service::CollectorService`] - Scroll-driven review collection
//! - [`services::analysis_service::AnalysisService`] - Date normalization, tokenization, scoring
//! - [`services::report_service::ReportService`] - Textual report assembly

pub mod services;
