//! Model objects for the SageMaker API
//!
//! Every type here is a plain value holder mirroring one request or
//! response shape. All fields are optional, setters never validate, and
//! the wire names are the exact PascalCase keys the service uses.

pub mod common;
pub mod data_source;
mod display;
pub mod enums;
pub mod human_task;
pub mod hyper_parameter_tuning;
pub mod notebook_instance;
pub mod processing_job;
pub mod training_job;
pub mod transform_job;

pub use common::{
    CheckpointConfig, ExperimentConfig, MetricDefinition, ModelArtifacts, OutputDataConfig,
    ResourceConfig, StoppingCondition, Tag, VpcConfig,
};
pub use data_source::{
    AlgorithmSpecification, Channel, DataSource, FileSystemDataSource, S3DataSource,
    ShuffleConfig,
};
pub use enums::*;
pub use human_task::{
    AnnotationConsolidationConfig, HumanLoopConfig, HumanTaskConfig, PublicWorkforceTaskPrice,
    UiConfig, Usd,
};
pub use hyper_parameter_tuning::{
    CategoricalParameterRange, ContinuousParameterRange, HyperParameterAlgorithmSpecification,
    HyperParameterTrainingJobDefinition, HyperParameterTuningJobObjective, IntegerParameterRange,
    ParameterRanges,
};
pub use notebook_instance::{
    CreateNotebookInstanceInput, DescribeNotebookInstanceOutput, UpdateNotebookInstanceInput,
};
pub use processing_job::{
    AppSpecification, NetworkConfig, ProcessingClusterConfig, ProcessingInput, ProcessingJob,
    ProcessingOutput, ProcessingOutputConfig, ProcessingResources, ProcessingS3Input,
    ProcessingS3Output, ProcessingStoppingCondition,
};
pub use training_job::{
    CollectionConfiguration, CreateTrainingJobInput, DebugHookConfig, DebugRuleConfiguration,
    DebugRuleEvaluationStatus, SecondaryStatusTransition, TensorBoardOutputConfig, TrainingJob,
    TrainingJobSummary,
};
pub use transform_job::{
    CreateTransformJobInput, DataProcessing, TransformDataSource, TransformInput,
    TransformOutput, TransformResources, TransformS3DataSource,
};
