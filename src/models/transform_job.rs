//! Batch transform job shapes

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::common::{string_map, ExperimentConfig, Tag};
use super::display::FieldWriter;

/// Request shape for starting a batch transform job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTransformJobInput {
    /// Job name, unique per region and account. Length 1-63.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_job_name: Option<String>,
    /// Name of the model to run the transform with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Parallel requests per instance; 0 lets the service pick.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_transforms: Option<i32>,
    /// Maximum size of a single request payload, in megabytes.
    #[serde(rename = "MaxPayloadInMB", skip_serializing_if = "Option::is_none")]
    pub max_payload_in_mb: Option<i32>,
    /// `MultiRecord` or `SingleRecord`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_strategy: Option<String>,
    /// Environment variables for the transform container, at most 16.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_input: Option<TransformInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_output: Option<TransformOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_resources: Option<TransformResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_processing: Option<DataProcessing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
}

impl CreateTransformJobInput {
    pub fn with_transform_job_name(mut self, name: impl Into<String>) -> Self {
        self.transform_job_name = Some(name.into());
        self
    }

    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = Some(name.into());
        self
    }

    pub fn with_max_concurrent_transforms(mut self, count: i32) -> Self {
        self.max_concurrent_transforms = Some(count);
        self
    }

    pub fn with_max_payload_in_mb(mut self, megabytes: i32) -> Self {
        self.max_payload_in_mb = Some(megabytes);
        self
    }

    pub fn with_batch_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.batch_strategy = Some(strategy.into());
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

    /// Adds one environment variable; errors on a duplicate key.
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

    pub fn with_transform_input(mut self, input: TransformInput) -> Self {
        self.transform_input = Some(input);
        self
    }

    pub fn with_transform_output(mut self, output: TransformOutput) -> Self {
        self.transform_output = Some(output);
        self
    }

    pub fn with_transform_resources(mut self, resources: TransformResources) -> Self {
        self.transform_resources = Some(resources);
        self
    }

    pub fn with_data_processing(mut self, processing: DataProcessing) -> Self {
        self.data_processing = Some(processing);
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

    pub fn with_experiment_config(mut self, config: ExperimentConfig) -> Self {
        self.experiment_config = Some(config);
        self
    }
}

impl fmt::Display for CreateTransformJobInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("TransformJobName", &self.transform_job_name)?;
        w.field("ModelName", &self.model_name)?;
        w.field("MaxConcurrentTransforms", &self.max_concurrent_transforms)?;
        w.field("MaxPayloadInMB", &self.max_payload_in_mb)?;
        w.field("BatchStrategy", &self.batch_strategy)?;
        w.map("Environment", &self.environment)?;
        w.field("TransformInput", &self.transform_input)?;
        w.field("TransformOutput", &self.transform_output)?;
        w.field("TransformResources", &self.transform_resources)?;
        w.field("DataProcessing", &self.data_processing)?;
        w.list("Tags", &self.tags)?;
        w.field("ExperimentConfig", &self.experiment_config)?;
        w.finish()
    }
}

/// Input dataset description for a transform job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<TransformDataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// `None` or `Gzip`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<String>,
    /// `None`, `Line`, `RecordIO` or `TFRecord`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_type: Option<String>,
}

impl TransformInput {
    pub fn with_data_source(mut self, source: TransformDataSource) -> Self {
        self.data_source = Some(source);
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_compression_type(mut self, compression: impl Into<String>) -> Self {
        self.compression_type = Some(compression.into());
        self
    }

    pub fn with_split_type(mut self, split: impl Into<String>) -> Self {
        self.split_type = Some(split.into());
        self
    }
}

impl fmt::Display for TransformInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("DataSource", &self.data_source)?;
        w.field("ContentType", &self.content_type)?;
        w.field("CompressionType", &self.compression_type)?;
        w.field("SplitType", &self.split_type)?;
        w.finish()
    }
}

/// Transform jobs only read from S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_source: Option<TransformS3DataSource>,
}

impl TransformDataSource {
    pub fn with_s3_data_source(mut self, source: TransformS3DataSource) -> Self {
        self.s3_data_source = Some(source);
        self
    }
}

impl fmt::Display for TransformDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("S3DataSource", &self.s3_data_source)?;
        w.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformS3DataSource {
    /// `ManifestFile` or `S3Prefix`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
}

impl TransformS3DataSource {
    pub fn with_s3_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.s3_data_type = Some(data_type.into());
        self
    }

    pub fn with_s3_uri(mut self, uri: impl Into<String>) -> Self {
        self.s3_uri = Some(uri.into());
        self
    }
}

impl fmt::Display for TransformS3DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("S3DataType", &self.s3_data_type)?;
        w.field("S3Uri", &self.s3_uri)?;
        w.finish()
    }
}

/// Where transform results are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
    /// MIME type the results are stored with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    /// `None` or `Line`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assemble_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

impl TransformOutput {
    pub fn with_s3_output_path(mut self, path: impl Into<String>) -> Self {
        self.s3_output_path = Some(path.into());
        self
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn with_assemble_with(mut self, assembly: impl Into<String>) -> Self {
        self.assemble_with = Some(assembly.into());
        self
    }

    pub fn with_kms_key_id(mut self, id: impl Into<String>) -> Self {
        self.kms_key_id = Some(id.into());
        self
    }
}

impl fmt::Display for TransformOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("S3OutputPath", &self.s3_output_path)?;
        w.field("Accept", &self.accept)?;
        w.field("AssembleWith", &self.assemble_with)?;
        w.field("KmsKeyId", &self.kms_key_id)?;
        w.finish()
    }
}

/// ML compute allocated to a transform job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransformResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_kms_key_id: Option<String>,
}

impl TransformResources {
    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn with_instance_count(mut self, count: i32) -> Self {
        self.instance_count = Some(count);
        self
    }

    pub fn with_volume_kms_key_id(mut self, id: impl Into<String>) -> Self {
        self.volume_kms_key_id = Some(id.into());
        self
    }
}

impl fmt::Display for TransformResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("InstanceType", &self.instance_type)?;
        w.field("InstanceCount", &self.instance_count)?;
        w.field("VolumeKmsKeyId", &self.volume_kms_key_id)?;
        w.finish()
    }
}

/// JSONPath filters joining transform input records with their results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataProcessing {
    /// JSONPath applied to the input before it is sent to the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_filter: Option<String>,
    /// JSONPath applied to the joined record before it is written out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_filter: Option<String>,
    /// `Input` or `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_source: Option<String>,
}

impl DataProcessing {
    pub fn with_input_filter(mut self, filter: impl Into<String>) -> Self {
        self.input_filter = Some(filter.into());
        self
    }

    pub fn with_output_filter(mut self, filter: impl Into<String>) -> Self {
        self.output_filter = Some(filter.into());
        self
    }

    pub fn with_join_source(mut self, source: impl Into<String>) -> Self {
        self.join_source = Some(source.into());
        self
    }
}

impl fmt::Display for DataProcessing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("InputFilter", &self.input_filter)?;
        w.field("OutputFilter", &self.output_filter)?;
        w.field("JoinSource", &self.join_source)?;
        w.finish()
    }
}
