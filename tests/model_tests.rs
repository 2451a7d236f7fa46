//! Tests for the model value contract: equality, hashing, display,
//! collection ownership and the map conveniences.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use sagemaker_models::ModelError;
use sagemaker_models::models::enums::{SecondaryStatus, TrainingJobStatus};
use sagemaker_models::models::{
    AppSpecification, Channel, CreateTrainingJobInput, CreateTransformJobInput, DataSource,
    ProcessingJob, S3DataSource, Tag, TrainingJob, TrainingJobSummary, VpcConfig,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_equality_is_reflexive_and_symmetric() {
    let a = TrainingJob::default()
        .with_training_job_name("mnist")
        .with_role_arn("arn:aws:iam::123456789012:role/SageMakerRole")
        .with_hyper_parameters([("epochs", "10"), ("lr", "0.01")]);
    let b = a.clone();

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
}

#[test]
fn test_equality_compares_field_values() {
    let a = TrainingJob::default().with_training_job_name("mnist");
    let b = TrainingJob::default().with_training_job_name("mnist");
    let c = TrainingJob::default().with_training_job_name("cifar");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, TrainingJob::default());
}

#[test]
fn test_map_equality_ignores_insertion_order() {
    let a = TrainingJob::default().with_hyper_parameters([("epochs", "10"), ("lr", "0.01")]);
    let b = TrainingJob::default().with_hyper_parameters([("lr", "0.01"), ("epochs", "10")]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_equal_values_hash_alike() {
    let a = CreateTrainingJobInput::default()
        .with_training_job_name("mnist")
        .with_tags([Tag::default().with_key("team").with_value("research")]);
    let b = a.clone();

    assert_eq!(hash_of(&a), hash_of(&b));

    let c = b.with_training_job_name("cifar");
    assert_ne!(hash_of(&a), hash_of(&c));
}

#[test]
fn test_display_omits_absent_fields() {
    let summary = TrainingJobSummary::default().with_training_job_name("mnist");
    assert_eq!(summary.to_string(), "{TrainingJobName: mnist}");
}

#[test]
fn test_display_follows_declared_field_order() {
    let summary = TrainingJobSummary::default()
        .with_training_job_status(TrainingJobStatus::InProgress)
        .with_training_job_name("mnist")
        .with_training_job_arn("arn:aws:sagemaker:us-east-1:123456789012:training-job/mnist");
    assert_eq!(
        summary.to_string(),
        "{TrainingJobName: mnist, \
         TrainingJobArn: arn:aws:sagemaker:us-east-1:123456789012:training-job/mnist, \
         TrainingJobStatus: InProgress}"
    );
}

#[test]
fn test_display_of_empty_model_is_braces() {
    assert_eq!(TrainingJobSummary::default().to_string(), "{}");
}

#[test]
fn test_display_renders_lists_and_maps() {
    let spec = AppSpecification::default()
        .with_image_uri("123.dkr.ecr.us-east-1.amazonaws.com/proc:latest")
        .with_container_entrypoint(["python3", "run.py"]);
    assert_eq!(
        spec.to_string(),
        "{ImageUri: 123.dkr.ecr.us-east-1.amazonaws.com/proc:latest, \
         ContainerEntrypoint: [python3, run.py]}"
    );

    let job = TrainingJob::default().with_hyper_parameters([("epochs", "10"), ("lr", "0.01")]);
    assert_eq!(job.to_string(), "{HyperParameters: {epochs=10, lr=0.01}}");
}

#[test]
fn test_collection_setters_take_owned_copies() {
    let mut subnets = vec!["subnet-1".to_string(), "subnet-2".to_string()];
    let config = VpcConfig::default().with_subnets(subnets.clone());

    subnets.push("subnet-3".to_string());
    subnets[0] = "subnet-mutated".to_string();

    assert_eq!(
        config.subnets,
        Some(vec!["subnet-1".to_string(), "subnet-2".to_string()])
    );
}

#[test]
fn test_plural_setter_replaces_previous_contents() {
    let job = TrainingJob::default()
        .with_tags([Tag::default().with_key("old")])
        .with_tags([Tag::default().with_key("new")]);
    let tags = job.tags.unwrap();
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].key.as_deref(), Some("new"));
}

#[test]
fn test_singular_setter_appends() {
    let job = TrainingJob::default()
        .with_input_channel(Channel::default().with_channel_name("train"))
        .with_input_channel(Channel::default().with_channel_name("validation"));
    let channels = job.input_data_config.unwrap();
    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].channel_name.as_deref(), Some("train"));
    assert_eq!(channels[1].channel_name.as_deref(), Some("validation"));
}

#[test]
fn test_add_hyper_parameter_initializes_absent_map() {
    let job = TrainingJob::default()
        .add_hyper_parameter("epochs", "10")
        .unwrap();
    let parameters = job.hyper_parameters.as_ref().unwrap();
    assert_eq!(parameters.get("epochs").map(String::as_str), Some("10"));
}

#[test]
fn test_add_hyper_parameter_rejects_duplicate_key() {
    let job = TrainingJob::default()
        .add_hyper_parameter("epochs", "10")
        .unwrap();
    let err = job.clone().add_hyper_parameter("epochs", "20").unwrap_err();
    assert_eq!(
        err,
        ModelError::DuplicateKey {
            field: "HyperParameters",
            key: "epochs".to_string(),
        }
    );
    // The original still holds the first value.
    assert_eq!(
        job.hyper_parameters.unwrap().get("epochs").map(String::as_str),
        Some("10")
    );
}

#[test]
fn test_clear_hyper_parameters_sets_map_absent() {
    let job = TrainingJob::default()
        .with_hyper_parameters([("epochs", "10")])
        .clear_hyper_parameters();
    assert!(job.hyper_parameters.is_none());
    assert_eq!(job, TrainingJob::default());
}

#[test]
fn test_transform_environment_conveniences() {
    let input = CreateTransformJobInput::default()
        .add_environment_entry("MODE", "batch")
        .unwrap();
    assert!(
        input
            .clone()
            .add_environment_entry("MODE", "stream")
            .is_err()
    );
    assert!(input.clear_environment_entries().environment.is_none());
}

#[test]
fn test_enum_and_string_setters_store_the_same_value() {
    let via_enum =
        TrainingJobSummary::default().with_training_job_status(TrainingJobStatus::Completed);
    let via_string = TrainingJobSummary::default().with_training_job_status("Completed");
    assert_eq!(via_enum, via_string);
    assert_eq!(via_enum.training_job_status.as_deref(), Some("Completed"));
}

#[test]
fn test_unknown_status_string_is_stored_verbatim() {
    let summary = TrainingJobSummary::default().with_training_job_status("Archived");
    assert_eq!(summary.training_job_status.as_deref(), Some("Archived"));
}

#[test]
fn test_training_job_summary_lifecycle() {
    let summary = TrainingJobSummary::default()
        .with_training_job_name("mnist-2024-01-01")
        .with_training_job_status(TrainingJobStatus::Completed);

    let rendered = summary.to_string();
    assert!(rendered.contains("TrainingJobStatus: Completed"));
    assert!(!rendered.contains("TrainingEndTime"));
}

#[test]
fn test_training_job_secondary_status() {
    let job = TrainingJob::default()
        .with_training_job_status(TrainingJobStatus::InProgress)
        .with_secondary_status(SecondaryStatus::Training);
    assert_eq!(job.secondary_status.as_deref(), Some("Training"));
}

#[test]
fn test_processing_job_environment_add_then_clear() {
    let job = ProcessingJob::default()
        .with_processing_job_name("analytics")
        .add_environment_entry("A", "1")
        .unwrap();
    assert_eq!(
        job.environment
            .as_ref()
            .and_then(|environment| environment.get("A"))
            .map(String::as_str),
        Some("1")
    );

    let job = job.clear_environment_entries();
    assert!(job.environment.is_none());
    assert_eq!(job.processing_job_name.as_deref(), Some("analytics"));
}

#[test]
fn test_nested_models_compare_by_value() {
    let source = || {
        DataSource::default().with_s3_data_source(
            S3DataSource::default()
                .with_s3_data_type("S3Prefix")
                .with_s3_uri("s3://bucket/train/"),
        )
    };
    assert_eq!(source(), source());

    let other = DataSource::default()
        .with_s3_data_source(S3DataSource::default().with_s3_uri("s3://bucket/test/"));
    assert_ne!(source(), other);
}
