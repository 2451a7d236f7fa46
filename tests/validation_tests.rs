//! Tests for the advisory constraint checks through the public API.

use sagemaker_models::models::{CreateNotebookInstanceInput, CreateTrainingJobInput};
use sagemaker_models::validation::{check_create_notebook_instance, check_create_training_job};

#[test]
fn test_findings_never_block_the_payload() {
    // A payload the checks dislike still serializes untouched.
    let input = CreateTrainingJobInput::default().with_training_job_name("_not_a_valid_name_");
    let report = check_create_training_job(&input);
    assert!(!report.is_clean());

    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["TrainingJobName"], "_not_a_valid_name_");
}

#[test]
fn test_well_formed_notebook_request_is_clean() {
    let input = CreateNotebookInstanceInput::default()
        .with_notebook_instance_name("workbench-01")
        .with_instance_type("ml.t3.medium")
        .with_role_arn("arn:aws:iam::123456789012:role/SageMakerRole")
        .with_volume_size_in_gb(20);
    let report = check_create_notebook_instance(&input);
    assert!(report.is_clean());
}

#[test]
fn test_multiple_findings_are_collected() {
    let input = CreateNotebookInstanceInput::default()
        .with_notebook_instance_name("bad name")
        .with_role_arn("not-an-arn-but-long-enough-to-pass-length")
        .with_volume_size_in_gb(1);
    let report = check_create_notebook_instance(&input);

    let fields: Vec<&str> = report
        .findings
        .iter()
        .map(|finding| finding.field.as_str())
        .collect();
    assert_eq!(fields, ["NotebookInstanceName", "RoleArn", "VolumeSizeInGB"]);
}

#[test]
fn test_empty_request_yields_no_findings() {
    assert!(check_create_training_job(&CreateTrainingJobInput::default()).is_clean());
    assert!(check_create_notebook_instance(&CreateNotebookInstanceInput::default()).is_clean());
}
