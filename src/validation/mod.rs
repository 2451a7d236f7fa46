//! Advisory preflight checks against documented service constraints
//!
//! The model layer deliberately enforces nothing when fields are set: the
//! service is the authority on lengths, patterns and ranges, and a payload
//! this crate considers odd may still be accepted remotely. These checks
//! exist for callers who want to hear about likely rejections before paying
//! for a round trip. A finding is a hint, never an error.

mod constraints;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CreateNotebookInstanceInput, CreateTrainingJobInput, Tag};

use constraints::{
    ENTITY_NAME, IAM_ROLE_ARN, NAME_LENGTH, NOTEBOOK_VOLUME_SIZE_RANGE, ROLE_ARN_LENGTH,
    TAG_KEY_LENGTH, TAG_VALUE_MAX_LENGTH,
};

/// One advisory observation about a field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintFinding {
    /// Wire name of the field, e.g. `TrainingJobName`.
    pub field: String,
    pub message: String,
}

/// All findings for one request shape.
#[derive(Debug, Default, Serialize, Deserialize)]
#[must_use = "findings should be inspected; the service will reject what they describe"]
pub struct ConstraintReport {
    pub findings: Vec<ConstraintFinding>,
}

impl ConstraintReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    fn note(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        debug!(field, %message, "constraint finding");
        self.findings.push(ConstraintFinding {
            field: field.to_string(),
            message,
        });
    }

    fn check_name(&mut self, field: &str, value: &Option<String>) {
        if let Some(name) = value {
            let (min, max) = NAME_LENGTH;
            if name.len() < min || name.len() > max {
                self.note(
                    field,
                    format!("length {} outside {}-{}", name.len(), min, max),
                );
            } else if !ENTITY_NAME.is_match(name) {
                self.note(field, "does not match ^[a-zA-Z0-9](-*[a-zA-Z0-9])*");
            }
        }
    }

    fn check_role_arn(&mut self, field: &str, value: &Option<String>) {
        if let Some(arn) = value {
            let (min, max) = ROLE_ARN_LENGTH;
            if arn.len() < min || arn.len() > max {
                self.note(
                    field,
                    format!("length {} outside {}-{}", arn.len(), min, max),
                );
            } else if !IAM_ROLE_ARN.is_match(arn) {
                self.note(field, "not an IAM role ARN");
            }
        }
    }

    fn check_tags(&mut self, tags: &Option<Vec<Tag>>) {
        if let Some(tags) = tags {
            if tags.len() > 50 {
                self.note("Tags", format!("{} tags exceeds the limit of 50", tags.len()));
            }
            for tag in tags {
                if let Some(key) = &tag.key {
                    let (min, max) = TAG_KEY_LENGTH;
                    if key.len() < min || key.len() > max {
                        self.note(
                            "Tags",
                            format!("tag key length {} outside {}-{}", key.len(), min, max),
                        );
                    }
                }
                if let Some(value) = &tag.value {
                    if value.len() > TAG_VALUE_MAX_LENGTH {
                        self.note(
                            "Tags",
                            format!(
                                "tag value length {} exceeds {}",
                                value.len(),
                                TAG_VALUE_MAX_LENGTH
                            ),
                        );
                    }
                }
            }
        }
    }
}

/// Checks a training job request against the documented constraints.
///
/// # Example
///
/// ```rust
/// use sagemaker_models::models::CreateTrainingJobInput;
/// use sagemaker_models::validation::check_create_training_job;
///
/// let input = CreateTrainingJobInput::default().with_training_job_name("-bad-name-");
/// let report = check_create_training_job(&input);
/// assert!(!report.is_clean());
/// ```
pub fn check_create_training_job(input: &CreateTrainingJobInput) -> ConstraintReport {
    let mut report = ConstraintReport::default();
    report.check_name("TrainingJobName", &input.training_job_name);
    report.check_role_arn("RoleArn", &input.role_arn);
    report.check_tags(&input.tags);
    if let Some(parameters) = &input.hyper_parameters {
        if parameters.len() > 100 {
            report.note(
                "HyperParameters",
                format!("{} entries exceeds the limit of 100", parameters.len()),
            );
        }
    }
    if let Some(condition) = &input.stopping_condition {
        if let Some(runtime) = condition.max_runtime_in_seconds {
            if runtime < 1 {
                report.note("StoppingCondition", "MaxRuntimeInSeconds must be at least 1");
            }
        }
        if let (Some(wait), Some(runtime)) = (
            condition.max_wait_time_in_seconds,
            condition.max_runtime_in_seconds,
        ) {
            if wait < runtime {
                report.note(
                    "StoppingCondition",
                    "MaxWaitTimeInSeconds must be at least MaxRuntimeInSeconds",
                );
            }
        }
    }
    if let Some(channels) = &input.input_data_config {
        if channels.len() > 20 {
            report.note(
                "InputDataConfig",
                format!("{} channels exceeds the limit of 20", channels.len()),
            );
        }
    }
    report
}

/// Checks a notebook instance request against the documented constraints.
pub fn check_create_notebook_instance(input: &CreateNotebookInstanceInput) -> ConstraintReport {
    let mut report = ConstraintReport::default();
    report.check_name("NotebookInstanceName", &input.notebook_instance_name);
    report.check_role_arn("RoleArn", &input.role_arn);
    report.check_tags(&input.tags);
    if let Some(size) = input.volume_size_in_gb {
        let (min, max) = NOTEBOOK_VOLUME_SIZE_RANGE;
        if size < min || size > max {
            report.note("VolumeSizeInGB", format!("{size} outside {min}-{max}"));
        }
    }
    if let Some(repositories) = &input.additional_code_repositories {
        if repositories.len() > 3 {
            report.note(
                "AdditionalCodeRepositories",
                format!("{} repositories exceeds the limit of 3", repositories.len()),
            );
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StoppingCondition, Tag};

    #[test]
    fn test_clean_training_job_input() {
        let input = CreateTrainingJobInput::default()
            .with_training_job_name("mnist-2024-01-01")
            .with_role_arn("arn:aws:iam::123456789012:role/SageMakerRole");
        let report = check_create_training_job(&input);
        assert!(report.is_clean());
    }

    #[test]
    fn test_name_pattern_finding() {
        let input = CreateTrainingJobInput::default().with_training_job_name("bad_name");
        let report = check_create_training_job(&input);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].field, "TrainingJobName");
    }

    #[test]
    fn test_name_length_finding() {
        let input = CreateTrainingJobInput::default().with_training_job_name("x".repeat(64));
        let report = check_create_training_job(&input);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_role_arn_finding() {
        let input =
            CreateTrainingJobInput::default().with_role_arn("arn:aws:s3:::bucket/not-a-role-at-all");
        let report = check_create_training_job(&input);
        assert_eq!(report.findings[0].field, "RoleArn");
    }

    #[test]
    fn test_absent_fields_produce_no_findings() {
        let report = check_create_training_job(&CreateTrainingJobInput::default());
        assert!(report.is_clean());
    }

    #[test]
    fn test_stopping_condition_wait_below_runtime() {
        let input = CreateTrainingJobInput::default().with_stopping_condition(
            StoppingCondition::default()
                .with_max_runtime_in_seconds(3600)
                .with_max_wait_time_in_seconds(60),
        );
        let report = check_create_training_job(&input);
        assert_eq!(report.findings[0].field, "StoppingCondition");
    }

    #[test]
    fn test_tag_value_too_long() {
        let input = CreateTrainingJobInput::default()
            .with_tags([Tag::default().with_key("team").with_value("v".repeat(300))]);
        let report = check_create_training_job(&input);
        assert_eq!(report.findings[0].field, "Tags");
    }

    #[test]
    fn test_notebook_volume_size_out_of_range() {
        let input = CreateNotebookInstanceInput::default()
            .with_notebook_instance_name("workbench")
            .with_volume_size_in_gb(4);
        let report = check_create_notebook_instance(&input);
        assert_eq!(report.findings[0].field, "VolumeSizeInGB");
    }
}
