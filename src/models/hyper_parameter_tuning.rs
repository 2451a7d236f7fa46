//! Hyperparameter tuning job definition shapes

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::common::{
    string_map, CheckpointConfig, MetricDefinition, OutputDataConfig, ResourceConfig,
    StoppingCondition, VpcConfig,
};
use super::data_source::Channel;
use super::display::FieldWriter;

/// The training job template a hyperparameter tuning job launches trials
/// from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterTrainingJobDefinition {
    /// Definition name, unique within the tuning job. Length 1-64.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuning_objective: Option<HyperParameterTuningJobObjective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyper_parameter_ranges: Option<ParameterRanges>,
    /// Hyperparameters that stay fixed across all trials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_hyper_parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_specification: Option<HyperParameterAlgorithmSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data_config: Option<Vec<Channel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_config: Option<VpcConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_data_config: Option<OutputDataConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_config: Option<ResourceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopping_condition: Option<StoppingCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_network_isolation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_inter_container_traffic_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_managed_spot_training: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_config: Option<CheckpointConfig>,
}

impl HyperParameterTrainingJobDefinition {
    pub fn with_definition_name(mut self, name: impl Into<String>) -> Self {
        self.definition_name = Some(name.into());
        self
    }

    pub fn with_tuning_objective(mut self, objective: HyperParameterTuningJobObjective) -> Self {
        self.tuning_objective = Some(objective);
        self
    }

    pub fn with_hyper_parameter_ranges(mut self, ranges: ParameterRanges) -> Self {
        self.hyper_parameter_ranges = Some(ranges);
        self
    }

    /// Replaces the static hyperparameter map with an owned copy.
    pub fn with_static_hyper_parameters<K, V, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.static_hyper_parameters = Some(string_map::replace(entries));
        self
    }

    /// Adds one static hyperparameter; errors on a duplicate key.
    pub fn add_static_hyper_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        string_map::add(
            &mut self.static_hyper_parameters,
            "StaticHyperParameters",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    pub fn clear_static_hyper_parameters(mut self) -> Self {
        self.static_hyper_parameters = None;
        self
    }

    pub fn with_algorithm_specification(
        mut self,
        spec: HyperParameterAlgorithmSpecification,
    ) -> Self {
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

    pub fn with_vpc_config(mut self, config: VpcConfig) -> Self {
        self.vpc_config = Some(config);
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

    pub fn with_stopping_condition(mut self, condition: StoppingCondition) -> Self {
        self.stopping_condition = Some(condition);
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
}

impl fmt::Display for HyperParameterTrainingJobDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("DefinitionName", &self.definition_name)?;
        w.field("TuningObjective", &self.tuning_objective)?;
        w.field("HyperParameterRanges", &self.hyper_parameter_ranges)?;
        w.map("StaticHyperParameters", &self.static_hyper_parameters)?;
        w.field("AlgorithmSpecification", &self.algorithm_specification)?;
        w.field("RoleArn", &self.role_arn)?;
        w.list("InputDataConfig", &self.input_data_config)?;
        w.field("VpcConfig", &self.vpc_config)?;
        w.field("OutputDataConfig", &self.output_data_config)?;
        w.field("ResourceConfig", &self.resource_config)?;
        w.field("StoppingCondition", &self.stopping_condition)?;
        w.field("EnableNetworkIsolation", &self.enable_network_isolation)?;
        w.field(
            "EnableInterContainerTrafficEncryption",
            &self.enable_inter_container_traffic_encryption,
        )?;
        w.field("EnableManagedSpotTraining", &self.enable_managed_spot_training)?;
        w.field("CheckpointConfig", &self.checkpoint_config)?;
        w.finish()
    }
}

/// Algorithm settings shared by all trials of a tuning job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterAlgorithmSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_input_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_definitions: Option<Vec<MetricDefinition>>,
}

impl HyperParameterAlgorithmSpecification {
    pub fn with_training_image(mut self, image: impl Into<String>) -> Self {
        self.training_image = Some(image.into());
        self
    }

    pub fn with_training_input_mode(mut self, mode: impl Into<String>) -> Self {
        self.training_input_mode = Some(mode.into());
        self
    }

    pub fn with_algorithm_name(mut self, name: impl Into<String>) -> Self {
        self.algorithm_name = Some(name.into());
        self
    }

    pub fn with_metric_definitions(
        mut self,
        definitions: impl IntoIterator<Item = MetricDefinition>,
    ) -> Self {
        self.metric_definitions = Some(definitions.into_iter().collect());
        self
    }

    pub fn with_metric_definition(mut self, definition: MetricDefinition) -> Self {
        self.metric_definitions
            .get_or_insert_with(Vec::new)
            .push(definition);
        self
    }
}

impl fmt::Display for HyperParameterAlgorithmSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("TrainingImage", &self.training_image)?;
        w.field("TrainingInputMode", &self.training_input_mode)?;
        w.field("AlgorithmName", &self.algorithm_name)?;
        w.list("MetricDefinitions", &self.metric_definitions)?;
        w.finish()
    }
}

/// The metric a tuning job maximizes or minimizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HyperParameterTuningJobObjective {
    /// `Maximize` or `Minimize`.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub objective_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
}

impl HyperParameterTuningJobObjective {
    pub fn with_objective_type(mut self, objective_type: impl Into<String>) -> Self {
        self.objective_type = Some(objective_type.into());
        self
    }

    pub fn with_metric_name(mut self, name: impl Into<String>) -> Self {
        self.metric_name = Some(name.into());
        self
    }
}

impl fmt::Display for HyperParameterTuningJobObjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Type", &self.objective_type)?;
        w.field("MetricName", &self.metric_name)?;
        w.finish()
    }
}

/// The searchable ranges of a tuning job, at most twenty parameters across
/// the three kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ParameterRanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_parameter_ranges: Option<Vec<IntegerParameterRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous_parameter_ranges: Option<Vec<ContinuousParameterRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorical_parameter_ranges: Option<Vec<CategoricalParameterRange>>,
}

impl ParameterRanges {
    pub fn with_integer_parameter_ranges(
        mut self,
        ranges: impl IntoIterator<Item = IntegerParameterRange>,
    ) -> Self {
        self.integer_parameter_ranges = Some(ranges.into_iter().collect());
        self
    }

    pub fn with_integer_parameter_range(mut self, range: IntegerParameterRange) -> Self {
        self.integer_parameter_ranges
            .get_or_insert_with(Vec::new)
            .push(range);
        self
    }

    pub fn with_continuous_parameter_ranges(
        mut self,
        ranges: impl IntoIterator<Item = ContinuousParameterRange>,
    ) -> Self {
        self.continuous_parameter_ranges = Some(ranges.into_iter().collect());
        self
    }

    pub fn with_continuous_parameter_range(mut self, range: ContinuousParameterRange) -> Self {
        self.continuous_parameter_ranges
            .get_or_insert_with(Vec::new)
            .push(range);
        self
    }

    pub fn with_categorical_parameter_ranges(
        mut self,
        ranges: impl IntoIterator<Item = CategoricalParameterRange>,
    ) -> Self {
        self.categorical_parameter_ranges = Some(ranges.into_iter().collect());
        self
    }

    pub fn with_categorical_parameter_range(mut self, range: CategoricalParameterRange) -> Self {
        self.categorical_parameter_ranges
            .get_or_insert_with(Vec::new)
            .push(range);
        self
    }
}

impl fmt::Display for ParameterRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.list("IntegerParameterRanges", &self.integer_parameter_ranges)?;
        w.list("ContinuousParameterRanges", &self.continuous_parameter_ranges)?;
        w.list("CategoricalParameterRanges", &self.categorical_parameter_ranges)?;
        w.finish()
    }
}

/// Integer range searched by a tuning job. Bounds travel as strings on the
/// wire, as the service defines them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IntegerParameterRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    /// `Auto`, `Linear`, `Logarithmic` or `ReverseLogarithmic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_type: Option<String>,
}

impl IntegerParameterRange {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_min_value(mut self, value: impl Into<String>) -> Self {
        self.min_value = Some(value.into());
        self
    }

    pub fn with_max_value(mut self, value: impl Into<String>) -> Self {
        self.max_value = Some(value.into());
        self
    }

    pub fn with_scaling_type(mut self, scaling: impl Into<String>) -> Self {
        self.scaling_type = Some(scaling.into());
        self
    }
}

impl fmt::Display for IntegerParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Name", &self.name)?;
        w.field("MinValue", &self.min_value)?;
        w.field("MaxValue", &self.max_value)?;
        w.field("ScalingType", &self.scaling_type)?;
        w.finish()
    }
}

/// Continuous range searched by a tuning job; bounds are decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContinuousParameterRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_type: Option<String>,
}

impl ContinuousParameterRange {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_min_value(mut self, value: impl Into<String>) -> Self {
        self.min_value = Some(value.into());
        self
    }

    pub fn with_max_value(mut self, value: impl Into<String>) -> Self {
        self.max_value = Some(value.into());
        self
    }

    pub fn with_scaling_type(mut self, scaling: impl Into<String>) -> Self {
        self.scaling_type = Some(scaling.into());
        self
    }
}

impl fmt::Display for ContinuousParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Name", &self.name)?;
        w.field("MinValue", &self.min_value)?;
        w.field("MaxValue", &self.max_value)?;
        w.field("ScalingType", &self.scaling_type)?;
        w.finish()
    }
}

/// Discrete set of values searched by a tuning job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CategoricalParameterRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Candidate values, 1-20 entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl CategoricalParameterRange {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.get_or_insert_with(Vec::new).push(value.into());
        self
    }
}

impl fmt::Display for CategoricalParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Name", &self.name)?;
        w.list("Values", &self.values)?;
        w.finish()
    }
}
