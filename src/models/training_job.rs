//! Training job request, resource and summary shapes

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::common::{
    string_map, CheckpointConfig, ExperimentConfig, ModelArtifacts, OutputDataConfig,
    ResourceConfig, StoppingCondition, Tag, VpcConfig,
};
use super::data_source::{AlgorithmSpecification, Channel};
use super::display::FieldWriter;

/// A training job resource as the service describes it.
///
/// Every field is optional; a freshly constructed value has nothing set.
/// The service populates the describe-side fields (ARNs, statuses,
/// transitions, timings), while the create-side fields mirror
/// [`CreateTrainingJobInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrainingJob {
    /// Job name, length 1-63, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_arn: Option<String>,
    /// ARN of the tuning job that launched this job, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuning_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeling_job_arn: Option<String>,
    #[serde(rename = "AutoMLJobArn", skip_serializing_if = "Option::is_none")]
    pub auto_ml_job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_artifacts: Option<ModelArtifacts>,
    /// `InProgress`, `Completed`, `Failed`, `Stopping` or `Stopped`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_status: Option<String>,
    /// Fine-grained progress state; see
    /// [`crate::models::enums::SecondaryStatus`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_status: Option<String>,
    /// Populated when the status is `Failed`. Length 0-1024.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_specification: Option<AlgorithmSpecification>,
    /// IAM role the job runs as, length 20-2048.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// Input channels, at most twenty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_config: Option<ResourceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<StoppingCondition>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_start_time: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_end_time: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,
    /// History of secondary status changes, oldest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_status_transitions: Option<Vec<SecondaryStatusTransition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_managed_spot_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_config: Option<CheckpointConfig>,
    /// Billable training time is this minus any spot interruption time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_time_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_time_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_hook_config: Option<DebugHookConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_rule_configurations: Option<Vec<DebugRuleConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tensor_board_output_config: Option<TensorBoardOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_rule_evaluation_statuses: Option<Vec<DebugRuleEvaluationStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl TrainingJob {
    pub fn with_training_job_name(mut self, name: impl Into<String>) -> Self {
        self.training_job_name = Some(name.into());
        self
    }

    pub fn with_training_job_arn(mut self, arn: impl Into<String>) -> Self {
        self.training_job_arn = Some(arn.into());
        self
    }

    pub fn with_tuning_job_arn(mut self, arn: impl Into<String>) -> Self {
        self.tuning_job_arn = Some(arn.into());
        self
    }

    pub fn with_labeling_job_arn(mut self, arn: impl Into<String>) -> Self {
        self.labeling_job_arn = Some(arn.into());
        self
    }

    pub fn with_auto_ml_job_arn(mut self, arn: impl Into<String>) -> Self {
        self.auto_ml_job_arn = Some(arn.into());
        self
    }

    pub fn with_model_artifacts(mut self, artifacts: ModelArtifacts) -> Self {
        self.model_artifacts = Some(artifacts);
        self
    }

    /// Accepts the status as a string or as
    /// [`crate::models::enums::TrainingJobStatus`].
    pub fn with_training_job_status(mut self, status: impl Into<String>) -> Self {
        self.training_job_status = Some(status.into());
        self
    }

    pub fn with_secondary_status(mut self, status: impl Into<String>) -> Self {
        self.secondary_status = Some(status.into());
        self
    }

    pub fn with_failure_reason(mut self, reason: impl Into<String>) -> Self {
        self.failure_reason = Some(reason.into());
        self
    }

    /// Replaces the hyperparameter map with an owned copy of `entries`.
    pub fn with_hyper_parameters<K, V, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.hyper_parameters = Some(string_map::replace(entries));
        self
    }

    /// Adds one hyperparameter, initializing the map when absent.
    ///
    /// # Errors
    ///
    /// [`ModelError::DuplicateKey`] when `key` is already present; the
    /// stored value is left unchanged.
    pub fn add_hyper_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        string_map::add(
            &mut self.hyper_parameters,
            "HyperParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    /// Sets the hyperparameter map back to absent, not merely empty.
    pub fn clear_hyper_parameters(mut self) -> Self {
        self.hyper_parameters = None;
        self
    }

    pub fn with_algorithm_specification(mut self, spec: AlgorithmSpecification) -> Self {
        self.algorithm_specification = Some(spec);
        self
    }

    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    /// Replaces the channel list with an owned copy.
    pub fn with_input_data_config(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        self.input_data_config = Some(channels.into_iter().collect());
        self
    }

    /// Appends one channel, initializing the list when absent.
    pub fn with_input_channel(mut self, channel: Channel) -> Self {
        self.input_data_config
            .get_or_insert_with(Vec::new)
            .push(channel);
        self
    }

    pub fn with_output_data_config(mut self, config: OutputDataConfig) -> Self {
        self.output_data_config = Some(config);
        self
    }

    pub fn with_resource_config(mut self, config: ResourceConfig) -> Self {
        self.resource_config = Some(config);
        self
    }

    pub fn with_vpc_config(mut self, config: VpcConfig) -> Self {
        self.vpc_config = Some(config);
        self
    }

    pub fn with_stopping_condition(mut self, condition: StoppingCondition) -> Self {
        self.stopping_condition = Some(condition);
        self
    }

    pub fn with_creation_time(mut self, time: DateTime<Utc>) -> Self {
        self.creation_time = Some(time);
        self
    }

    pub fn with_training_start_time(mut self, time: DateTime<Utc>) -> Self {
        self.training_start_time = Some(time);
        self
    }

    pub fn with_training_end_time(mut self, time: DateTime<Utc>) -> Self {
        self.training_end_time = Some(time);
        self
    }

    pub fn with_last_modified_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_modified_time = Some(time);
        self
    }

    /// Replaces the transition history with an owned copy.
    pub fn with_secondary_status_transitions(
        mut self,
        transitions: impl IntoIterator<Item = SecondaryStatusTransition>,
    ) -> Self {
        self.secondary_status_transitions = Some(transitions.into_iter().collect());
        self
    }

    /// Appends one transition, initializing the list when absent.
    pub fn with_secondary_status_transition(
        mut self,
        transition: SecondaryStatusTransition,
    ) -> Self {
        self.secondary_status_transitions
            .get_or_insert_with(Vec::new)
            .push(transition);
        self
    }

    pub fn with_enable_network_isolation(mut self, enable: bool) -> Self {
        self.enable_network_isolation = Some(enable);
        self
    }

    pub fn with_enable_inter_container_traffic_encryption(mut self, enable: bool) -> Self {
        self.enable_inter_container_traffic_encryption = Some(enable);
        self
    }

    pub fn with_enable_managed_spot_training(mut self, enable: bool) -> Self {
        self.enable_managed_spot_training = Some(enable);
        self
    }

    pub fn with_checkpoint_config(mut self, config: CheckpointConfig) -> Self {
        self.checkpoint_config = Some(config);
        self
    }

    pub fn with_training_time_in_seconds(mut self, seconds: i32) -> Self {
        self.training_time_in_seconds = Some(seconds);
        self
    }

    pub fn with_billable_time_in_seconds(mut self, seconds: i32) -> Self {
        self.billable_time_in_seconds = Some(seconds);
        self
    }

    pub fn with_debug_hook_config(mut self, config: DebugHookConfig) -> Self {
        self.debug_hook_config = Some(config);
        self
    }

    pub fn with_experiment_config(mut self, config: ExperimentConfig) -> Self {
        self.experiment_config = Some(config);
        self
    }

    pub fn with_debug_rule_configurations(
        mut self,
        configurations: impl IntoIterator<Item = DebugRuleConfiguration>,
    ) -> Self {
        self.debug_rule_configurations = Some(configurations.into_iter().collect());
        self
    }

    pub fn with_debug_rule_configuration(mut self, configuration: DebugRuleConfiguration) -> Self {
        self.debug_rule_configurations
            .get_or_insert_with(Vec::new)
            .push(configuration);
        self
    }

    pub fn with_tensor_board_output_config(mut self, config: TensorBoardOutputConfig) -> Self {
        self.tensor_board_output_config = Some(config);
        self
    }

    pub fn with_debug_rule_evaluation_statuses(
        mut self,
        statuses: impl IntoIterator<Item = DebugRuleEvaluationStatus>,
    ) -> Self {
        self.debug_rule_evaluation_statuses = Some(statuses.into_iter().collect());
        self
    }

    pub fn with_debug_rule_evaluation_status(mut self, status: DebugRuleEvaluationStatus) -> Self {
        self.debug_rule_evaluation_statuses
            .get_or_insert_with(Vec::new)
            .push(status);
        self
    }

    /// Replaces the tag list with an owned copy.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Appends one tag, initializing the list when absent.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }
}

impl fmt::Display for TrainingJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("TrainingJobName", &self.training_job_name)?;
        w.field("TrainingJobArn", &self.training_job_arn)?;
        w.field("TuningJobArn", &self.tuning_job_arn)?;
        w.field("LabelingJobArn", &self.labeling_job_arn)?;
        w.field("AutoMLJobArn", &self.auto_ml_job_arn)?;
        w.field("ModelArtifacts", &self.model_artifacts)?;
        w.field("TrainingJobStatus", &self.training_job_status)?;
        w.field("SecondaryStatus", &self.secondary_status)?;
        w.field("FailureReason", &self.failure_reason)?;
        w.map("HyperParameters", &self.hyper_parameters)?;
        w.field("AlgorithmSpecification", &self.algorithm_specification)?;
        w.field("RoleArn", &self.role_arn)?;
        w.list("InputDataConfig", &self.input_data_config)?;
        w.field("OutputDataConfig", &self.output_data_config)?;
        w.field("ResourceConfig", &self.resource_config)?;
        w.field("VpcConfig", &self.vpc_config)?;
        w.field("StoppingCondition", &self.stopping_condition)?;
        w.field("CreationTime", &self.creation_time)?;
        w.field("TrainingStartTime", &self.training_start_time)?;
        w.field("TrainingEndTime", &self.training_end_time)?;
        w.field("LastModifiedTime", &self.last_modified_time)?;
        w.list("SecondaryStatusTransitions", &self.secondary_status_transitions)?;
        w.field("EnableNetworkIsolation", &self.enable_network_isolation)?;
        w.field(
            "EnableInterContainerTrafficEncryption",
            &self.enable_inter_container_traffic_encryption,
        )?;
        w.field("EnableManagedSpotTraining", &self.enable_managed_spot_training)?;
        w.field("CheckpointConfig", &self.checkpoint_config)?;
        w.field("TrainingTimeInSeconds", &self.training_time_in_seconds)?;
        w.field("BillableTimeInSeconds", &self.billable_time_in_seconds)?;
        w.field("DebugHookConfig", &self.debug_hook_config)?;
        w.field("ExperimentConfig", &self.experiment_config)?;
        w.list("DebugRuleConfigurations", &self.debug_rule_configurations)?;
        w.field("TensorBoardOutputConfig", &self.tensor_board_output_config)?;
        w.list(
            "DebugRuleEvaluationStatuses",
            &self.debug_rule_evaluation_statuses,
        )?;
        w.list("Tags", &self.tags)?;
        w.finish()
    }
}

/// Request shape for creating a training job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTrainingJobInput {
    /// Job name, unique per region and account. Length 1-63.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
    /// Algorithm hyperparameters, at most 100 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_specification: Option<AlgorithmSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_config: Option<ResourceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<StoppingCondition>,
    /// At most fifty tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_managed_spot_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_config: Option<CheckpointConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_hook_config: Option<DebugHookConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_rule_configurations: Option<Vec<DebugRuleConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tensor_board_output_config: Option<TensorBoardOutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment_config: Option<ExperimentConfig>,
}

impl CreateTrainingJobInput {
    pub fn with_training_job_name(mut self, name: impl Into<String>) -> Self {
        self.training_job_name = Some(name.into());
        self
    }

    pub fn with_hyper_parameters<K, V, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.hyper_parameters = Some(string_map::replace(entries));
        self
    }

    /// Adds one hyperparameter; errors on a duplicate key.
    pub fn add_hyper_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        string_map::add(
            &mut self.hyper_parameters,
            "HyperParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_hyper_parameters(mut self) -> Self {
        self.hyper_parameters = None;
        self
    }

    pub fn with_algorithm_specification(mut self, spec: AlgorithmSpecification) -> Self {
        self.algorithm_specification = Some(spec);
        self
    }

    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    pub fn with_input_data_config(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        self.input_data_config = Some(channels.into_iter().collect());
        self
    }

    pub fn with_input_channel(mut self, channel: Channel) -> Self {
        self.input_data_config
            .get_or_insert_with(Vec::new)
            .push(channel);
        self
    }

    pub fn with_output_data_config(mut self, config: OutputDataConfig) -> Self {
        self.output_data_config = Some(config);
        self
    }

    pub fn with_resource_config(mut self, config: ResourceConfig) -> Self {
        self.resource_config = Some(config);
        self
    }

    pub fn with_vpc_config(mut self, config: VpcConfig) -> Self {
        self.vpc_config = Some(config);
        self
    }

    pub fn with_stopping_condition(mut self, condition: StoppingCondition) -> Self {
        self.stopping_condition = Some(condition);
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

    pub fn with_enable_network_isolation(mut self, enable: bool) -> Self {
        self.enable_network_isolation = Some(enable);
        self
    }

    pub fn with_enable_inter_container_traffic_encryption(mut self, enable: bool) -> Self {
        self.enable_inter_container_traffic_encryption = Some(enable);
        self
    }

    pub fn with_enable_managed_spot_training(mut self, enable: bool) -> Self {
        self.enable_managed_spot_training = Some(enable);
        self
    }

    pub fn with_checkpoint_config(mut self, config: CheckpointConfig) -> Self {
        self.checkpoint_config = Some(config);
        self
    }

    pub fn with_debug_hook_config(mut self, config: DebugHookConfig) -> Self {
        self.debug_hook_config = Some(config);
        self
    }

    pub fn with_debug_rule_configurations(
        mut self,
        configurations: impl IntoIterator<Item = DebugRuleConfiguration>,
    ) -> Self {
        self.debug_rule_configurations = Some(configurations.into_iter().collect());
        self
    }

    pub fn with_debug_rule_configuration(mut self, configuration: DebugRuleConfiguration) -> Self {
        self.debug_rule_configurations
            .get_or_insert_with(Vec::new)
            .push(configuration);
        self
    }

    pub fn with_tensor_board_output_config(mut self, config: TensorBoardOutputConfig) -> Self {
        self.tensor_board_output_config = Some(config);
        self
    }

    pub fn with_experiment_config(mut self, config: ExperimentConfig) -> Self {
        self.experiment_config = Some(config);
        self
    }
}

impl fmt::Display for CreateTrainingJobInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("TrainingJobName", &self.training_job_name)?;
        w.map("HyperParameters", &self.hyper_parameters)?;
        w.field("AlgorithmSpecification", &self.algorithm_specification)?;
        w.field("RoleArn", &self.role_arn)?;
        w.list("InputDataConfig", &self.input_data_config)?;
        w.field("OutputDataConfig", &self.output_data_config)?;
        w.field("ResourceConfig", &self.resource_config)?;
        w.field("VpcConfig", &self.vpc_config)?;
        w.field("StoppingCondition", &self.stopping_condition)?;
        w.list("Tags", &self.tags)?;
        w.field("EnableNetworkIsolation", &self.enable_network_isolation)?;
        w.field(
            "EnableInterContainerTrafficEncryption",
            &self.enable_inter_container_traffic_encryption,
        )?;
        w.field("EnableManagedSpotTraining", &self.enable_managed_spot_training)?;
        w.field("CheckpointConfig", &self.checkpoint_config)?;
        w.field("DebugHookConfig", &self.debug_hook_config)?;
        w.list("DebugRuleConfigurations", &self.debug_rule_configurations)?;
        w.field("TensorBoardOutputConfig", &self.tensor_board_output_config)?;
        w.field("ExperimentConfig", &self.experiment_config)?;
        w.finish()
    }
}

/// Condensed training job listing entry.
///
/// # Example
///
/// ```rust
/// use sagemaker_models::models::enums::TrainingJobStatus;
/// use sagemaker_models::models::TrainingJobSummary;
///
/// let summary = TrainingJobSummary::default()
///     .with_training_job_name("job-1")
///     .with_training_job_status(TrainingJobStatus::Completed);
/// assert_eq!(summary.training_job_status.as_deref(), Some("Completed"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TrainingJobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_arn: Option<String>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    /// Set once the job reaches a terminal status.
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub training_end_time: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_job_status: Option<String>,
}

impl TrainingJobSummary {
    pub fn with_training_job_name(mut self, name: impl Into<String>) -> Self {
        self.training_job_name = Some(name.into());
        self
    }

    pub fn with_training_job_arn(mut self, arn: impl Into<String>) -> Self {
        self.training_job_arn = Some(arn.into());
        self
    }

    pub fn with_creation_time(mut self, time: DateTime<Utc>) -> Self {
        self.creation_time = Some(time);
        self
    }

    pub fn with_training_end_time(mut self, time: DateTime<Utc>) -> Self {
        self.training_end_time = Some(time);
        self
    }

    pub fn with_last_modified_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_modified_time = Some(time);
        self
    }

    pub fn with_training_job_status(mut self, status: impl Into<String>) -> Self {
        self.training_job_status = Some(status.into());
        self
    }
}

impl fmt::Display for TrainingJobSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("TrainingJobName", &self.training_job_name)?;
        w.field("TrainingJobArn", &self.training_job_arn)?;
        w.field("CreationTime", &self.creation_time)?;
        w.field("TrainingEndTime", &self.training_end_time)?;
        w.field("LastModifiedTime", &self.last_modified_time)?;
        w.field("TrainingJobStatus", &self.training_job_status)?;
        w.finish()
    }
}

/// One entry in a training job's secondary status history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecondaryStatusTransition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<DateTime<Utc>>,
    /// Absent while the job is still in this state.
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    /// Human-readable detail, e.g. `Downloading the training image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

impl SecondaryStatusTransition {
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_start_time(mut self, time: DateTime<Utc>) -> Self {
        self.start_time = Some(time);
        self
    }

    pub fn with_end_time(mut self, time: DateTime<Utc>) -> Self {
        self.end_time = Some(time);
        self
    }

    pub fn with_status_message(mut self, message: impl Into<String>) -> Self {
        self.status_message = Some(message.into());
        self
    }
}

impl fmt::Display for SecondaryStatusTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Status", &self.status)?;
        w.field("StartTime", &self.start_time)?;
        w.field("EndTime", &self.end_time)?;
        w.field("StatusMessage", &self.status_message)?;
        w.finish()
    }
}

/// Debugger tensor collection settings for a training job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DebugHookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_configurations: Option<Vec<CollectionConfiguration>>,
}

impl DebugHookConfig {
    pub fn with_local_path(mut self, path: impl Into<String>) -> Self {
        self.local_path = Some(path.into());
        self
    }

    pub fn with_s3_output_path(mut self, path: impl Into<String>) -> Self {
        self.s3_output_path = Some(path.into());
        self
    }

    pub fn with_hook_parameters<K, V, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.hook_parameters = Some(string_map::replace(entries));
        self
    }

    /// Adds one hook parameter; errors on a duplicate key.
    pub fn add_hook_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        string_map::add(
            &mut self.hook_parameters,
            "HookParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_hook_parameters(mut self) -> Self {
        self.hook_parameters = None;
        self
    }

    pub fn with_collection_configurations(
        mut self,
        configurations: impl IntoIterator<Item = CollectionConfiguration>,
    ) -> Self {
        self.collection_configurations = Some(configurations.into_iter().collect());
        self
    }

    pub fn with_collection_configuration(
        mut self,
        configuration: CollectionConfiguration,
    ) -> Self {
        self.collection_configurations
            .get_or_insert_with(Vec::new)
            .push(configuration);
        self
    }
}

impl fmt::Display for DebugHookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("LocalPath", &self.local_path)?;
        w.field("S3OutputPath", &self.s3_output_path)?;
        w.map("HookParameters", &self.hook_parameters)?;
        w.list("CollectionConfigurations", &self.collection_configurations)?;
        w.finish()
    }
}

/// One named tensor collection captured by the debug hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CollectionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_parameters: Option<BTreeMap<String, String>>,
}

impl CollectionConfiguration {
    pub fn with_collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection_name = Some(name.into());
        self
    }

    pub fn with_collection_parameters<K, V, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.collection_parameters = Some(string_map::replace(entries));
        self
    }

    /// Adds one collection parameter; errors on a duplicate key.
    pub fn add_collection_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        string_map::add(
            &mut self.collection_parameters,
            "CollectionParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_collection_parameters(mut self) -> Self {
        self.collection_parameters = None;
        self
    }
}

impl fmt::Display for CollectionConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("CollectionName", &self.collection_name)?;
        w.map("CollectionParameters", &self.collection_parameters)?;
        w.finish()
    }
}

/// A debugger rule to evaluate against the captured tensors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DebugRuleConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_evaluator_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_parameters: Option<BTreeMap<String, String>>,
}

impl DebugRuleConfiguration {
    pub fn with_rule_configuration_name(mut self, name: impl Into<String>) -> Self {
        self.rule_configuration_name = Some(name.into());
        self
    }

    pub fn with_local_path(mut self, path: impl Into<String>) -> Self {
        self.local_path = Some(path.into());
        self
    }

    pub fn with_s3_output_path(mut self, path: impl Into<String>) -> Self {
        self.s3_output_path = Some(path.into());
        self
    }

    pub fn with_rule_evaluator_image(mut self, image: impl Into<String>) -> Self {
        self.rule_evaluator_image = Some(image.into());
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

    pub fn with_rule_parameters<K, V, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.rule_parameters = Some(string_map::replace(entries));
        self
    }

    /// Adds one rule parameter; errors on a duplicate key.
    pub fn add_rule_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        string_map::add(
            &mut self.rule_parameters,
            "RuleParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_rule_parameters(mut self) -> Self {
        self.rule_parameters = None;
        self
    }
}

impl fmt::Display for DebugRuleConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("RuleConfigurationName", &self.rule_configuration_name)?;
        w.field("LocalPath", &self.local_path)?;
        w.field("S3OutputPath", &self.s3_output_path)?;
        w.field("RuleEvaluatorImage", &self.rule_evaluator_image)?;
        w.field("InstanceType", &self.instance_type)?;
        w.field("VolumeSizeInGB", &self.volume_size_in_gb)?;
        w.map("RuleParameters", &self.rule_parameters)?;
        w.finish()
    }
}

/// Progress of one debugger rule evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DebugRuleEvaluationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_evaluation_job_arn: Option<String>,
    /// `InProgress`, `NoIssuesFound`, `IssuesFound`, `Error`, `Stopping` or
    /// `Stopped`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_evaluation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_time: Option<DateTime<Utc>>,
}

impl DebugRuleEvaluationStatus {
    pub fn with_rule_configuration_name(mut self, name: impl Into<String>) -> Self {
        self.rule_configuration_name = Some(name.into());
        self
    }

    pub fn with_rule_evaluation_job_arn(mut self, arn: impl Into<String>) -> Self {
        self.rule_evaluation_job_arn = Some(arn.into());
        self
    }

    pub fn with_rule_evaluation_status(mut self, status: impl Into<String>) -> Self {
        self.rule_evaluation_status = Some(status.into());
        self
    }

    pub fn with_status_details(mut self, details: impl Into<String>) -> Self {
        self.status_details = Some(details.into());
        self
    }

    pub fn with_last_modified_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_modified_time = Some(time);
        self
    }
}

impl fmt::Display for DebugRuleEvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("RuleConfigurationName", &self.rule_configuration_name)?;
        w.field("RuleEvaluationJobArn", &self.rule_evaluation_job_arn)?;
        w.field("RuleEvaluationStatus", &self.rule_evaluation_status)?;
        w.field("StatusDetails", &self.status_details)?;
        w.field("LastModifiedTime", &self.last_modified_time)?;
        w.finish()
    }
}

/// S3 destination for TensorBoard event files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TensorBoardOutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<String>,
}

impl TensorBoardOutputConfig {
    pub fn with_local_path(mut self, path: impl Into<String>) -> Self {
        self.local_path = Some(path.into());
        self
    }

    pub fn with_s3_output_path(mut self, path: impl Into<String>) -> Self {
        self.s3_output_path = Some(path.into());
        self
    }
}

impl fmt::Display for TensorBoardOutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("LocalPath", &self.local_path)?;
        w.field("S3OutputPath", &self.s3_output_path)?;
        w.finish()
    }
}
