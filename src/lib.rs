//! SageMaker Models - Plain model types for the SageMaker API
//!
//! Provides the request, response and descriptive shapes the service speaks:
//! - Model structs with optional fields and fluent `with_*` setters
//! - Value equality and hashing across all shapes
//! - Exact PascalCase wire names via serde
//! - Known string values for service-defined enumerations
//! - Advisory constraint checks that never block a payload
//!
//! Setters store what they are given. The service, not this crate, decides
//! what is acceptable.
//!
//! # Example
//!
//! ```rust
//! use sagemaker_models::models::enums::TrainingJobStatus;
//! use sagemaker_models::models::TrainingJobSummary;
//!
//! let summary = TrainingJobSummary::default()
//!     .with_training_job_name("mnist-2024-01-01")
//!     .with_training_job_status(TrainingJobStatus::Completed);
//!
//! assert_eq!(summary.training_job_status.as_deref(), Some("Completed"));
//! assert!(summary.to_string().starts_with("{TrainingJobName: mnist-2024-01-01"));
//! ```

pub mod error;
pub mod models;
pub mod validation;

pub use error::ModelError;

// Re-export models
pub use models::enums::*;
pub use models::{
    CreateNotebookInstanceInput, CreateTrainingJobInput, CreateTransformJobInput,
    DescribeNotebookInstanceOutput, ProcessingJob, TrainingJob, TrainingJobSummary,
};

// Re-export validation types
pub use validation::{
    ConstraintFinding, ConstraintReport, check_create_notebook_instance,
    check_create_training_job,
};
