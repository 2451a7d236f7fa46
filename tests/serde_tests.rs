//! Tests for wire fidelity: exact PascalCase keys, absent-field omission,
//! epoch-second timestamps and round-trips through JSON.

use chrono::DateTime;
use serde_json::json;

use sagemaker_models::models::enums::TrainingJobStatus;
use sagemaker_models::models::{
    AlgorithmSpecification, Channel, CreateTrainingJobInput, CreateTransformJobInput, DataSource,
    HyperParameterTuningJobObjective, OutputDataConfig, ResourceConfig, S3DataSource,
    StoppingCondition, Tag, TrainingJob, TrainingJobSummary,
};

#[test]
fn test_keys_are_pascal_case() {
    let input = CreateTrainingJobInput::default()
        .with_training_job_name("mnist")
        .with_role_arn("arn:aws:iam::123456789012:role/SageMakerRole")
        .with_hyper_parameters([("epochs", "10")]);
    let value = serde_json::to_value(&input).unwrap();

    assert_eq!(value["TrainingJobName"], "mnist");
    assert_eq!(
        value["RoleArn"],
        "arn:aws:iam::123456789012:role/SageMakerRole"
    );
    assert_eq!(value["HyperParameters"]["epochs"], "10");
}

#[test]
fn test_absent_fields_are_not_serialized() {
    let input = CreateTrainingJobInput::default().with_training_job_name("mnist");
    let value = serde_json::to_value(&input).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 1);
    assert!(object.contains_key("TrainingJobName"));
    assert!(!object.contains_key("RoleArn"));
    assert!(!object.contains_key("HyperParameters"));
}

#[test]
fn test_acronym_keys_keep_their_documented_spelling() {
    let config = ResourceConfig::default().with_volume_size_in_gb(50);
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["VolumeSizeInGB"], 50);

    let input = CreateTransformJobInput::default().with_max_payload_in_mb(6);
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["MaxPayloadInMB"], 6);

    let job = TrainingJob::default()
        .with_auto_ml_job_arn("arn:aws:sagemaker:us-east-1:123456789012:automl-job/a");
    let value = serde_json::to_value(&job).unwrap();
    assert!(value.as_object().unwrap().contains_key("AutoMLJobArn"));

    let objective = HyperParameterTuningJobObjective::default()
        .with_objective_type("Maximize")
        .with_metric_name("validation:accuracy");
    let value = serde_json::to_value(&objective).unwrap();
    assert_eq!(value["Type"], "Maximize");
    assert_eq!(value["MetricName"], "validation:accuracy");
}

#[test]
fn test_timestamps_serialize_as_epoch_seconds() {
    let creation = DateTime::from_timestamp(1_577_836_800, 0).unwrap();
    let summary = TrainingJobSummary::default()
        .with_training_job_name("mnist")
        .with_creation_time(creation);
    let value = serde_json::to_value(&summary).unwrap();

    assert_eq!(value["CreationTime"], 1_577_836_800);
    assert!(!value.as_object().unwrap().contains_key("TrainingEndTime"));
}

#[test]
fn test_timestamps_deserialize_from_epoch_seconds() {
    let summary: TrainingJobSummary = serde_json::from_value(json!({
        "TrainingJobName": "mnist",
        "CreationTime": 1_577_836_800,
        "TrainingJobStatus": "Completed",
    }))
    .unwrap();

    assert_eq!(
        summary.creation_time,
        Some(DateTime::from_timestamp(1_577_836_800, 0).unwrap())
    );
    assert!(summary.training_end_time.is_none());
    assert_eq!(summary.training_job_status.as_deref(), Some("Completed"));
}

#[test]
fn test_unknown_enum_values_survive_deserialization() {
    let summary: TrainingJobSummary = serde_json::from_value(json!({
        "TrainingJobStatus": "Archived",
    }))
    .unwrap();
    assert_eq!(summary.training_job_status.as_deref(), Some("Archived"));
}

#[test]
fn test_create_training_job_input_round_trip() {
    let input = CreateTrainingJobInput::default()
        .with_training_job_name("mnist-2024-01-01")
        .with_role_arn("arn:aws:iam::123456789012:role/SageMakerRole")
        .with_hyper_parameters([("epochs", "10"), ("lr", "0.01")])
        .with_algorithm_specification(
            AlgorithmSpecification::default()
                .with_training_image("123.dkr.ecr.us-east-1.amazonaws.com/kmeans:1")
                .with_training_input_mode("File"),
        )
        .with_input_data_config([Channel::default()
            .with_channel_name("train")
            .with_data_source(DataSource::default().with_s3_data_source(
                S3DataSource::default()
                    .with_s3_data_type("S3Prefix")
                    .with_s3_uri("s3://bucket/train/"),
            ))])
        .with_output_data_config(
            OutputDataConfig::default().with_s3_output_path("s3://bucket/output/"),
        )
        .with_resource_config(
            ResourceConfig::default()
                .with_instance_type("ml.m5.xlarge")
                .with_instance_count(1)
                .with_volume_size_in_gb(50),
        )
        .with_stopping_condition(StoppingCondition::default().with_max_runtime_in_seconds(86400))
        .with_tags([Tag::default().with_key("team").with_value("research")]);

    let text = serde_json::to_string(&input).unwrap();
    let back: CreateTrainingJobInput = serde_json::from_str(&text).unwrap();
    assert_eq!(input, back);
}

#[test]
fn test_nested_keys_are_pascal_case() {
    let input = CreateTrainingJobInput::default().with_input_data_config([Channel::default()
        .with_channel_name("train")
        .with_data_source(
            DataSource::default()
                .with_s3_data_source(S3DataSource::default().with_s3_uri("s3://bucket/train/")),
        )]);
    let value = serde_json::to_value(&input).unwrap();

    assert_eq!(value["InputDataConfig"][0]["ChannelName"], "train");
    assert_eq!(
        value["InputDataConfig"][0]["DataSource"]["S3DataSource"]["S3Uri"],
        "s3://bucket/train/"
    );
}

#[test]
fn test_describe_response_deserializes() {
    let job: TrainingJob = serde_json::from_value(json!({
        "TrainingJobName": "mnist-2024-01-01",
        "TrainingJobArn": "arn:aws:sagemaker:us-east-1:123456789012:training-job/mnist-2024-01-01",
        "TrainingJobStatus": "InProgress",
        "SecondaryStatus": "Training",
        "HyperParameters": {"epochs": "10"},
        "ResourceConfig": {
            "InstanceType": "ml.m5.xlarge",
            "InstanceCount": 1,
            "VolumeSizeInGB": 50
        },
        "CreationTime": 1_577_836_800,
        "EnableManagedSpotTraining": false
    }))
    .unwrap();

    assert_eq!(
        job.training_job_status.as_deref(),
        Some(TrainingJobStatus::InProgress.as_str())
    );
    assert_eq!(
        job.resource_config.as_ref().unwrap().volume_size_in_gb,
        Some(50)
    );
    assert_eq!(job.enable_managed_spot_training, Some(false));
    assert!(job.model_artifacts.is_none());
}
