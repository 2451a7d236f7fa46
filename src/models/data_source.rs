//! Training input channels and the data sources behind them

use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::MetricDefinition;
use super::display::FieldWriter;

/// The algorithm container a training job runs and how metrics are pulled
/// from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AlgorithmSpecification {
    /// ECR registry path of the training image. Length 0-255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_image: Option<String>,
    /// Name of an algorithm resource to use instead of a raw image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    /// `Pipe` or `File`; see [`crate::models::enums::TrainingInputMode`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_input_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_definitions: Option<Vec<MetricDefinition>>,
    /// Publish algorithm metrics as time-series data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sage_maker_metrics_time_series: Option<bool>,
}

impl AlgorithmSpecification {
    pub fn with_training_image(mut self, image: impl Into<String>) -> Self {
        self.training_image = Some(image.into());
        self
    }

    pub fn with_algorithm_name(mut self, name: impl Into<String>) -> Self {
        self.algorithm_name = Some(name.into());
        self
    }

    pub fn with_training_input_mode(mut self, mode: impl Into<String>) -> Self {
        self.training_input_mode = Some(mode.into());
        self
    }

    /// Replaces the metric definition list with an owned copy.
    pub fn with_metric_definitions(
        mut self,
        definitions: impl IntoIterator<Item = MetricDefinition>,
    ) -> Self {
        self.metric_definitions = Some(definitions.into_iter().collect());
        self
    }

    /// Appends one metric definition, initializing the list when absent.
    pub fn with_metric_definition(mut self, definition: MetricDefinition) -> Self {
        self.metric_definitions
            .get_or_insert_with(Vec::new)
            .push(definition);
        self
    }

    pub fn with_enable_sage_maker_metrics_time_series(mut self, enable: bool) -> Self {
        self.enable_sage_maker_metrics_time_series = Some(enable);
        self
    }
}

impl fmt::Display for AlgorithmSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("TrainingImage", &self.training_image)?;
        w.field("AlgorithmName", &self.algorithm_name)?;
        w.field("TrainingInputMode", &self.training_input_mode)?;
        w.list("MetricDefinitions", &self.metric_definitions)?;
        w.field(
            "EnableSageMakerMetricsTimeSeries",
            &self.enable_sage_maker_metrics_time_series,
        )?;
        w.finish()
    }
}

/// One named input channel of a training job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Channel {
    /// Channel name, length 1-64, pattern `[A-Za-z0-9\.\-_]+`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<DataSource>,
    /// MIME type of the channel data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// `None` or `Gzip`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<String>,
    /// `None` or `RecordIO`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_wrapper_type: Option<String>,
    /// Per-channel override of the algorithm-level input mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_config: Option<ShuffleConfig>,
}

impl Channel {
    pub fn with_channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = Some(name.into());
        self
    }

    pub fn with_data_source(mut self, source: DataSource) -> Self {
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

    pub fn with_record_wrapper_type(mut self, wrapper: impl Into<String>) -> Self {
        self.record_wrapper_type = Some(wrapper.into());
        self
    }

    pub fn with_input_mode(mut self, mode: impl Into<String>) -> Self {
        self.input_mode = Some(mode.into());
        self
    }

    pub fn with_shuffle_config(mut self, config: ShuffleConfig) -> Self {
        self.shuffle_config = Some(config);
        self
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("ChannelName", &self.channel_name)?;
        w.field("DataSource", &self.data_source)?;
        w.field("ContentType", &self.content_type)?;
        w.field("CompressionType", &self.compression_type)?;
        w.field("RecordWrapperType", &self.record_wrapper_type)?;
        w.field("InputMode", &self.input_mode)?;
        w.field("ShuffleConfig", &self.shuffle_config)?;
        w.finish()
    }
}

/// Union-style holder: exactly one of the nested sources is set in practice,
/// though nothing here enforces that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_source: Option<S3DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_data_source: Option<FileSystemDataSource>,
}

impl DataSource {
    pub fn with_s3_data_source(mut self, source: S3DataSource) -> Self {
        self.s3_data_source = Some(source);
        self
    }

    pub fn with_file_system_data_source(mut self, source: FileSystemDataSource) -> Self {
        self.file_system_data_source = Some(source);
        self
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("S3DataSource", &self.s3_data_source)?;
        w.field("FileSystemDataSource", &self.file_system_data_source)?;
        w.finish()
    }
}

/// S3 location feeding a training channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct S3DataSource {
    /// `ManifestFile`, `S3Prefix` or `AugmentedManifestFile`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_type: Option<String>,
    /// URI of the prefix or manifest, length 0-1024, pattern `^(https|s3)://.*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_uri: Option<String>,
    /// `FullyReplicated` or `ShardedByS3Key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_data_distribution_type: Option<String>,
    /// Attribute names pulled from an augmented manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_names: Option<Vec<String>>,
}

impl S3DataSource {
    pub fn with_s3_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.s3_data_type = Some(data_type.into());
        self
    }

    pub fn with_s3_uri(mut self, uri: impl Into<String>) -> Self {
        self.s3_uri = Some(uri.into());
        self
    }

    pub fn with_s3_data_distribution_type(mut self, distribution: impl Into<String>) -> Self {
        self.s3_data_distribution_type = Some(distribution.into());
        self
    }

    /// Replaces the attribute name list with an owned copy of `names`.
    pub fn with_attribute_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one attribute name, initializing the list when absent.
    pub fn with_attribute_name(mut self, name: impl Into<String>) -> Self {
        self.attribute_names
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }
}

impl fmt::Display for S3DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("S3DataType", &self.s3_data_type)?;
        w.field("S3Uri", &self.s3_uri)?;
        w.field("S3DataDistributionType", &self.s3_data_distribution_type)?;
        w.list("AttributeNames", &self.attribute_names)?;
        w.finish()
    }
}

/// EFS or FSx for Lustre location feeding a training channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileSystemDataSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_id: Option<String>,
    /// `rw` or `ro`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_access_mode: Option<String>,
    /// `EFS` or `FSxLustre`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_type: Option<String>,
    /// Mount path inside the file system. Length 0-4096.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<String>,
}

impl FileSystemDataSource {
    pub fn with_file_system_id(mut self, id: impl Into<String>) -> Self {
        self.file_system_id = Some(id.into());
        self
    }

    pub fn with_file_system_access_mode(mut self, mode: impl Into<String>) -> Self {
        self.file_system_access_mode = Some(mode.into());
        self
    }

    pub fn with_file_system_type(mut self, file_system_type: impl Into<String>) -> Self {
        self.file_system_type = Some(file_system_type.into());
        self
    }

    pub fn with_directory_path(mut self, path: impl Into<String>) -> Self {
        self.directory_path = Some(path.into());
        self
    }
}

impl fmt::Display for FileSystemDataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("FileSystemId", &self.file_system_id)?;
        w.field("FileSystemAccessMode", &self.file_system_access_mode)?;
        w.field("FileSystemType", &self.file_system_type)?;
        w.field("DirectoryPath", &self.directory_path)?;
        w.finish()
    }
}

/// Seed controlling the per-epoch shuffle of `ShardedByS3Key` channels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShuffleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

impl ShuffleConfig {
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl fmt::Display for ShuffleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Seed", &self.seed)?;
        w.finish()
    }
}
