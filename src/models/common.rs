//! Shapes shared by several API operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::display::FieldWriter;

/// Key/value metadata attached to a service resource.
///
/// Key length 1-128, value length 0-256; both limits are enforced by the
/// service, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Key", &self.key)?;
        w.field("Value", &self.value)?;
        w.finish()
    }
}

/// VPC placement for jobs and hosted models.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VpcConfig {
    /// Security group IDs, at most five.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    /// Subnet IDs, at most sixteen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<String>>,
}

impl VpcConfig {
    /// Replaces the security group list with an owned copy of `ids`.
    pub fn with_security_group_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.security_group_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one security group ID, initializing the list when absent.
    pub fn with_security_group_id(mut self, id: impl Into<String>) -> Self {
        self.security_group_ids
            .get_or_insert_with(Vec::new)
            .push(id.into());
        self
    }

    /// Replaces the subnet list with an owned copy of `subnets`.
    pub fn with_subnets<I, S>(mut self, subnets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subnets = Some(subnets.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one subnet ID, initializing the list when absent.
    pub fn with_subnet(mut self, subnet: impl Into<String>) -> Self {
        self.subnets.get_or_insert_with(Vec::new).push(subnet.into());
        self
    }
}

impl fmt::Display for VpcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.list("SecurityGroupIds", &self.security_group_ids)?;
        w.list("Subnets", &self.subnets)?;
        w.finish()
    }
}

/// Where job artifacts land and how they are encrypted at rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutputDataConfig {
    /// KMS key for the output objects. Length 0-2048.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// S3 prefix the artifacts are written under. Length 0-1024.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
}

impl OutputDataConfig {
    pub fn with_kms_key_id(mut self, id: impl Into<String>) -> Self {
        self.kms_key_id = Some(id.into());
        self
    }

    pub fn with_s3_output_path(mut self, path: impl Into<String>) -> Self {
        self.s3_output_path = Some(path.into());
        self
    }
}

impl fmt::Display for OutputDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("KmsKeyId", &self.kms_key_id)?;
        w.field("S3OutputPath", &self.s3_output_path)?;
        w.finish()
    }
}

/// ML compute allocated to a training job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceConfig {
    /// ML instance type, e.g. `ml.m5.xlarge`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Number of instances, at least 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    /// Size of the attached EBS volume in gigabytes, at least 1.
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
}

impl ResourceConfig {
    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn with_instance_count(mut self, count: i32) -> Self {
        self.instance_count = Some(count);
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

impl fmt::Display for ResourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("InstanceType", &self.instance_type)?;
        w.field("InstanceCount", &self.instance_count)?;
        w.field("VolumeSizeInGB", &self.volume_size_in_gb)?;
        w.field("VolumeKmsKeyId", &self.volume_kms_key_id)?;
        w.finish()
    }
}

/// Limits on how long a job may run (or wait for spot capacity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StoppingCondition {
    /// Maximum run time in seconds, at least 1. Defaults to one day on the
    /// service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_runtime_in_seconds: Option<i32>,
    /// Maximum time to wait for managed spot capacity, in seconds. Must be
    /// larger than `max_runtime_in_seconds` when both are set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wait_time_in_seconds: Option<i32>,
}

impl StoppingCondition {
    pub fn with_max_runtime_in_seconds(mut self, seconds: i32) -> Self {
        self.max_runtime_in_seconds = Some(seconds);
        self
    }

    pub fn with_max_wait_time_in_seconds(mut self, seconds: i32) -> Self {
        self.max_wait_time_in_seconds = Some(seconds);
        self
    }
}

impl fmt::Display for StoppingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("MaxRuntimeInSeconds", &self.max_runtime_in_seconds)?;
        w.field("MaxWaitTimeInSeconds", &self.max_wait_time_in_seconds)?;
        w.finish()
    }
}

/// S3 location checkpoint data is synchronized with during training.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckpointConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    /// Container-local checkpoint directory, `/opt/ml/checkpoints/` by
    /// default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
}

impl CheckpointConfig {
    pub fn with_s3_uri(mut self, uri: impl Into<String>) -> Self {
        self.s3_uri = Some(uri.into());
        self
    }

    pub fn with_local_path(mut self, path: impl Into<String>) -> Self {
        self.local_path = Some(path.into());
        self
    }
}

impl fmt::Display for CheckpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("S3Uri", &self.s3_uri)?;
        w.field("LocalPath", &self.local_path)?;
        w.finish()
    }
}

/// Location of the model artifacts a training job produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModelArtifacts {
    /// S3 path of the `model.tar.gz` artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_model_artifacts: Option<String>,
}

impl ModelArtifacts {
    pub fn with_s3_model_artifacts(mut self, uri: impl Into<String>) -> Self {
        self.s3_model_artifacts = Some(uri.into());
        self
    }
}

impl fmt::Display for ModelArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("S3ModelArtifacts", &self.s3_model_artifacts)?;
        w.finish()
    }
}

/// Associates a job with an experiment, trial and display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExperimentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_component_display_name: Option<String>,
}

impl ExperimentConfig {
    pub fn with_experiment_name(mut self, name: impl Into<String>) -> Self {
        self.experiment_name = Some(name.into());
        self
    }

    pub fn with_trial_name(mut self, name: impl Into<String>) -> Self {
        self.trial_name = Some(name.into());
        self
    }

    pub fn with_trial_component_display_name(mut self, name: impl Into<String>) -> Self {
        self.trial_component_display_name = Some(name.into());
        self
    }
}

impl fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("ExperimentName", &self.experiment_name)?;
        w.field("TrialName", &self.trial_name)?;
        w.field("TrialComponentDisplayName", &self.trial_component_display_name)?;
        w.finish()
    }
}

/// Name and extraction regex for a metric the algorithm emits to stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricDefinition {
    /// Metric name, length 1-255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Regular expression that pulls the metric value out of the logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

impl MetricDefinition {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_regex(mut self, regex: impl Into<String>) -> Self {
        self.regex = Some(regex.into());
        self
    }
}

impl fmt::Display for MetricDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Name", &self.name)?;
        w.field("Regex", &self.regex)?;
        w.finish()
    }
}

/// Collects string map replace/add/clear plumbing used by several models.
///
/// `add` errors on a key that is already present instead of silently
/// overwriting it; `replace` takes an owned copy of whatever iterator the
/// caller hands over.
pub(crate) mod string_map {
    use std::collections::BTreeMap;

    use crate::error::ModelError;

    pub(crate) fn replace<K, V, I>(entries: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect()
    }

    pub(crate) fn add(
        map: &mut Option<BTreeMap<String, String>>,
        field: &'static str,
        key: String,
        value: String,
    ) -> Result<(), ModelError> {
        let entries = map.get_or_insert_with(BTreeMap::new);
        if entries.contains_key(&key) {
            return Err(ModelError::DuplicateKey { field, key });
        }
        entries.insert(key, value);
        Ok(())
    }
}
