//! Processing job resource and its nested shapes

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::common::{string_map, ExperimentConfig, Tag, VpcConfig};
use super::display::FieldWriter;

/// A processing job resource as the service describes it.
///
/// # Example
///
/// ```rust
/// use sagemaker_models::models::ProcessingJob;
///
/// let job = ProcessingJob::default()
///     .with_processing_job_name("feature-build")
///     .add_environment_entry("MODE", "batch")
///     .unwrap();
/// assert!(job.to_string().contains("MODE=batch"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_inputs: Option<Vec<ProcessingInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_output_config: Option<ProcessingOutputConfig>,
    /// Job name, length 1-63, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_resources: Option<ProcessingResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<ProcessingStoppingCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_specification: Option<AppSpecification>,
    /// Environment variables for the processing container, at most 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_config: Option<NetworkConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_job_arn: Option<String>,
    /// `InProgress`, `Completed`, `Failed`, `Stopping` or `Stopped`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_job_status: Option<String>,
    /// Message the container wrote to `/opt/ml/output/message` on exit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_end_time: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_start_time: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    /// Set when a monitoring schedule launched this job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_schedule_arn: Option<String>,
    #[serde(rename = "AutoMLJobArn", skip_serializing_if = "Option::is_none")]
    pub auto_ml_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ProcessingJob {
    /// Replaces the input list with an owned copy.
    pub fn with_processing_inputs(
        mut self,
        inputs: impl IntoIterator<Item = ProcessingInput>,
    ) -> Self {
        self.processing_inputs = Some(inputs.into_iter().collect());
        self
    }

    /// Appends one input, initializing the list when absent.
    pub fn with_processing_input(mut self, input: ProcessingInput) -> Self {
        self.processing_inputs
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    pub fn with_processing_output_config(mut self, config: ProcessingOutputConfig) -> Self {
        self.processing_output_config = Some(config);
        self
    }

    pub fn with_processing_job_name(mut self, name: impl Into<String>) -> Self {
        self.processing_job_name = Some(name.into());
        self
    }

    pub fn with_processing_resources(mut self, resources: ProcessingResources) -> Self {
        self.processing_resources = Some(resources);
        self
    }

    pub fn with_stopping_condition(mut self, condition: ProcessingStoppingCondition) -> Self {
        self.stopping_condition = Some(condition);
        self
    }

    pub fn with_app_specification(mut self, spec: AppSpecification) -> Self {
        self.app_specification = Some(spec);
        self
    }

    /// Replaces the environment map with an owned copy of `entries`.
    pub fn with_environment<K, V, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.environment = Some(string_map::replace(entries));
        self
    }

    /// Adds one environment variable, initializing the map when absent.
    ///
    /// # Errors
    ///
    /// [`ModelError::DuplicateKey`] when `key` is already present; the
    /// stored value is left unchanged.
    pub fn add_environment_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        string_map::add(&mut self.environment, "Environment", key.into(), value.into())?;
        Ok(self)
    }

    /// Sets the environment map back to absent, not merely empty.
    pub fn clear_environment_entries(mut self) -> Self {
        self.environment = None;
        self
    }

    pub fn with_network_config(mut self, config: NetworkConfig) -> Self {
        self.network_config = Some(config);
        self
    }

    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    pub fn with_experiment_config(mut self, config: ExperimentConfig) -> Self {
        self.experiment_config = Some(config);
        self
    }

    pub fn with_processing_job_arn(mut self, arn: impl Into<String>) -> Self {
        self.processing_job_arn = Some(arn.into());
        self
    }

    pub fn with_processing_job_status(mut self, status: impl Into<String>) -> Self {
        self.processing_job_status = Some(status.into());
        self
    }

    pub fn with_exit_message(mut self, message: impl Into<String>) -> Self {
        self.exit_message = Some(message.into());
        self
    }

    pub fn with_failure_reason(mut self, reason: impl Into<String>) -> Self {
        self.failure_reason = Some(reason.into());
        self
    }

    pub fn with_processing_end_time(mut self, time: DateTime<Utc>) -> Self {
        self.processing_end_time = Some(time);
        self
    }

    pub fn with_processing_start_time(mut self, time: DateTime<Utc>) -> Self {
        self.processing_start_time = Some(time);
        self
    }

    pub fn with_last_modified_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_modified_time = Some(time);
        self
    }

    pub fn with_creation_time(mut self, time: DateTime<Utc>) -> Self {
        self.creation_time = Some(time);
        self
    }

    pub fn with_monitoring_schedule_arn(mut self, arn: impl Into<String>) -> Self {
        self.monitoring_schedule_arn = Some(arn.into());
        self
    }

    pub fn with_auto_ml_job_arn(mut self, arn: impl Into<String>) -> Self {
        self.auto_ml_job_arn = Some(arn.into());
        self
    }

    pub fn with_training_job_arn(mut self, arn: impl Into<String>) -> Self {
        self.training_job_arn = Some(arn.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }
}

impl fmt::Display for ProcessingJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.list("ProcessingInputs", &self.processing_inputs)?;
        w.field("ProcessingOutputConfig", &self.processing_output_config)?;
        w.field("ProcessingJobName", &self.processing_job_name)?;
        w.field("ProcessingResources", &self.processing_resources)?;
        w.field("StoppingCondition", &self.stopping_condition)?;
        w.field("AppSpecification", &self.app_specification)?;
        w.map("Environment", &self.environment)?;
        w.field("NetworkConfig", &self.network_config)?;
        w.field("RoleArn", &self.role_arn)?;
        w.field("ExperimentConfig", &self.experiment_config)?;
        w.field("ProcessingJobArn", &self.processing_job_arn)?;
        w.field("ProcessingJobStatus", &self.processing_job_status)?;
        w.field("ExitMessage", &self.exit_message)?;
        w.field("FailureReason", &self.failure_reason)?;
        w.field("ProcessingEndTime", &self.processing_end_time)?;
        w.field("ProcessingStartTime", &self.processing_start_time)?;
        w.field("LastModifiedTime", &self.last_modified_time)?;
        w.field("CreationTime", &self.creation_time)?;
        w.field("MonitoringScheduleArn", &self.monitoring_schedule_arn)?;
        w.field("AutoMLJobArn", &self.auto_ml_job_arn)?;
        w.field("TrainingJobArn", &self.training_job_arn)?;
        w.list("Tags", &self.tags)?;
        w.finish()
    }
}

/// One named input delivered to the processing container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_input: Option<ProcessingS3Input>,
}

impl ProcessingInput {
    pub fn with_input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = Some(name.into());
        self
    }

    pub fn with_s3_input(mut self, input: ProcessingS3Input) -> Self {
        self.s3_input = Some(input);
        self
    }
}

impl fmt::Display for ProcessingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("InputName", &self.input_name)?;
        w.field("S3Input", &self.s3_input)?;
        w.finish()
    }
}

/// S3 source mounted into the processing container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingS3Input {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    /// Path under `/opt/ml/processing/` the data is mounted at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    /// `ManifestFile` or `S3Prefix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_type: Option<String>,
    /// `Pipe` or `File`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_input_mode: Option<String>,
    /// `FullyReplicated` or `ShardedByS3Key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_distribution_type: Option<String>,
    /// `None` or `Gzip`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_compression_type: Option<String>,
}

impl ProcessingS3Input {
    pub fn with_s3_uri(mut self, uri: impl Into<String>) -> Self {
        self.s3_uri = Some(uri.into());
        self
    }

    pub fn with_local_path(mut self, path: impl Into<String>) -> Self {
        self.local_path = Some(path.into());
        self
    }

    pub fn with_s3_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.s3_data_type = Some(data_type.into());
        self
    }

    pub fn with_s3_input_mode(mut self, mode: impl Into<String>) -> Self {
        self.s3_input_mode = Some(mode.into());
        self
    }

    pub fn with_s3_data_distribution_type(mut self, distribution: impl Into<String>) -> Self {
        self.s3_data_distribution_type = Some(distribution.into());
        self
    }

    pub fn with_s3_compression_type(mut self, compression: impl Into<String>) -> Self {
        self.s3_compression_type = Some(compression.into());
        self
    }
}

impl fmt::Display for ProcessingS3Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("S3Uri", &self.s3_uri)?;
        w.field("LocalPath", &self.local_path)?;
        w.field("S3DataType", &self.s3_data_type)?;
        w.field("S3InputMode", &self.s3_input_mode)?;
        w.field("S3DataDistributionType", &self.s3_data_distribution_type)?;
        w.field("S3CompressionType", &self.s3_compression_type)?;
        w.finish()
    }
}

/// All outputs of a processing job plus their shared KMS key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<ProcessingOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

impl ProcessingOutputConfig {
    pub fn with_outputs(mut self, outputs: impl IntoIterator<Item = ProcessingOutput>) -> Self {
        self.outputs = Some(outputs.into_iter().collect());
        self
    }

    pub fn with_output(mut self, output: ProcessingOutput) -> Self {
        self.outputs.get_or_insert_with(Vec::new).push(output);
        self
    }

    pub fn with_kms_key_id(mut self, id: impl Into<String>) -> Self {
        self.kms_key_id = Some(id.into());
        self
    }
}

impl fmt::Display for ProcessingOutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.list("Outputs", &self.outputs)?;
        w.field("KmsKeyId", &self.kms_key_id)?;
        w.finish()
    }
}

/// One named output uploaded from the processing container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output: Option<ProcessingS3Output>,
}

impl ProcessingOutput {
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    pub fn with_s3_output(mut self, output: ProcessingS3Output) -> Self {
        self.s3_output = Some(output);
        self
    }
}

impl fmt::Display for ProcessingOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("OutputName", &self.output_name)?;
        w.field("S3Output", &self.s3_output)?;
        w.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingS3Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    /// `Continuous` or `EndOfJob`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_upload_mode: Option<String>,
}

impl ProcessingS3Output {
    pub fn with_s3_uri(mut self, uri: impl Into<String>) -> Self {
        self.s3_uri = Some(uri.into());
        self
    }

    pub fn with_local_path(mut self, path: impl Into<String>) -> Self {
        self.local_path = Some(path.into());
        self
    }

    pub fn with_s3_upload_mode(mut self, mode: impl Into<String>) -> Self {
        self.s3_upload_mode = Some(mode.into());
        self
    }
}

impl fmt::Display for ProcessingS3Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("S3Uri", &self.s3_uri)?;
        w.field("LocalPath", &self.local_path)?;
        w.field("S3UploadMode", &self.s3_upload_mode)?;
        w.finish()
    }
}

/// Cluster the processing job runs on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_config: Option<ProcessingClusterConfig>,
}

impl ProcessingResources {
    pub fn with_cluster_config(mut self, config: ProcessingClusterConfig) -> Self {
        self.cluster_config = Some(config);
        self
    }
}

impl fmt::Display for ProcessingResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("ClusterConfig", &self.cluster_config)?;
        w.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingClusterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
}

impl ProcessingClusterConfig {
    pub fn with_instance_count(mut self, count: i32) -> Self {
        self.instance_count = Some(count);
        self
    }

    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn with_volume_size_in_gb(mut self, size: i32) -> Self {
        self.volume_size_in_gb = Some(size);
        self
    }

    pub fn with_volume_kms_key_id(mut self, id: impl Into<String>) -> Self {
        self.volume_kms_key_id = Some(id.into());
        self
    }
}

impl fmt::Display for ProcessingClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("InstanceCount", &self.instance_count)?;
        w.field("InstanceType", &self.instance_type)?;
        w.field("VolumeSizeInGB", &self.volume_size_in_gb)?;
        w.field("VolumeKmsKeyId", &self.volume_kms_key_id)?;
        w.finish()
    }
}

/// Processing jobs only bound total runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessingStoppingCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_runtime_in_seconds: Option<i32>,
}

impl ProcessingStoppingCondition {
    pub fn with_max_runtime_in_seconds(mut self, seconds: i32) -> Self {
        self.max_runtime_in_seconds = Some(seconds);
        self
    }
}

impl fmt::Display for ProcessingStoppingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("MaxRuntimeInSeconds", &self.max_runtime_in_seconds)?;
        w.finish()
    }
}

/// Container image and entrypoint for the processing job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// Entrypoint override, at most 100 elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_entrypoint: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_arguments: Option<Vec<String>>,
}

impl AppSpecification {
    pub fn with_image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    /// Replaces the entrypoint with an owned copy of `entrypoint`.
    pub fn with_container_entrypoint<I, S>(mut self, entrypoint: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.container_entrypoint = Some(entrypoint.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one entrypoint element, initializing the list when absent.
    pub fn with_container_entrypoint_element(mut self, element: impl Into<String>) -> Self {
        self.container_entrypoint
            .get_or_insert_with(Vec::new)
            .push(element.into());
        self
    }

    /// Replaces the argument list with an owned copy of `arguments`.
    pub fn with_container_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.container_arguments = Some(arguments.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one argument, initializing the list when absent.
    pub fn with_container_argument(mut self, argument: impl Into<String>) -> Self {
        self.container_arguments
            .get_or_insert_with(Vec::new)
            .push(argument.into());
        self
    }
}

impl fmt::Display for AppSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("ImageUri", &self.image_uri)?;
        w.list("ContainerEntrypoint", &self.container_entrypoint)?;
        w.list("ContainerArguments", &self.container_arguments)?;
        w.finish()
    }
}

/// Network isolation and VPC placement for a processing job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NetworkConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
}

impl NetworkConfig {
    pub fn with_enable_inter_container_traffic_encryption(mut self, enable: bool) -> Self {
        self.enable_inter_container_traffic_encryption = Some(enable);
        self
    }

    pub fn with_enable_network_isolation(mut self, enable: bool) -> Self {
        self.enable_network_isolation = Some(enable);
        self
    }

    pub fn with_vpc_config(mut self, config: VpcConfig) -> Self {
        self.vpc_config = Some(config);
        self
    }
}

impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field(
            "EnableInterContainerTrafficEncryption",
            &self.enable_inter_container_traffic_encryption,
        )?;
        w.field("EnableNetworkIsolation", &self.enable_network_isolation)?;
        w.field("VpcConfig", &self.vpc_config)?;
        w.finish()
    }
}
