#![recursion_limit = "256"]

pub mod analyzer;
pub mod app;
pub mod components;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod intake;
pub mod logging;
pub mod pages;
pub mod presenter;
pub mod session;

pub use analyzer::MockAnalyzer;
pub use config::AppConfig;
pub use diagnosis::{DiagnosisRecord, PlantInfo, Severity, CATALOG};
pub use error::MediPlantError;
pub use session::{AnalysisPhase, RequestId, Session};
