//! Human labeling and human review task shapes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::display::FieldWriter;

/// Configuration of the human work for a labeling job: who labels, with
/// which UI, under which time and price limits, and how answers are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HumanTaskConfig {
    /// ARN of the work team performing the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workteam_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_config: Option<UiConfig>,
    /// Lambda run on each data object before it is shown to workers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_human_task_lambda_arn: Option<String>,
    /// Search keywords, at most five, each 1-30 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_keywords: Option<Vec<String>>,
    /// Task title shown in the worker portal, length 1-128.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
    /// Distinct workers asked to label each object, 1-9.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_human_workers_per_data_object: Option<i32>,
    /// Seconds a worker has to finish one task, 30-28800.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_time_limit_in_seconds: Option<i32>,
    /// Seconds a task stays available to workers, 1-864000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_availability_lifetime_in_seconds: Option<i32>,
    /// Maximum objects labeled concurrently, 1-1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_task_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_consolidation_config: Option<AnnotationConsolidationConfig>,
    /// Price per task when the public workforce is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_workforce_task_price: Option<PublicWorkforceTaskPrice>,
}

impl HumanTaskConfig {
    pub fn with_workteam_arn(mut self, arn: impl Into<String>) -> Self {
        self.workteam_arn = Some(arn.into());
        self
    }

    pub fn with_ui_config(mut self, config: UiConfig) -> Self {
        self.ui_config = Some(config);
        self
    }

    pub fn with_pre_human_task_lambda_arn(mut self, arn: impl Into<String>) -> Self {
        self.pre_human_task_lambda_arn = Some(arn.into());
        self
    }

    /// Replaces the keyword list with an owned copy of `keywords`.
    pub fn with_task_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.task_keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one keyword, initializing the list when absent.
    pub fn with_task_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.task_keywords
            .get_or_insert_with(Vec::new)
            .push(keyword.into());
        self
    }

    pub fn with_task_title(mut self, title: impl Into<String>) -> Self {
        self.task_title = Some(title.into());
        self
    }

    pub fn with_task_description(mut self, description: impl Into<String>) -> Self {
        self.task_description = Some(description.into());
        self
    }

    pub fn with_number_of_human_workers_per_data_object(mut self, count: i32) -> Self {
        self.number_of_human_workers_per_data_object = Some(count);
        self
    }

    pub fn with_task_time_limit_in_seconds(mut self, seconds: i32) -> Self {
        self.task_time_limit_in_seconds = Some(seconds);
        self
    }

    pub fn with_task_availability_lifetime_in_seconds(mut self, seconds: i32) -> Self {
        self.task_availability_lifetime_in_seconds = Some(seconds);
        self
    }

    pub fn with_max_concurrent_task_count(mut self, count: i32) -> Self {
        self.max_concurrent_task_count = Some(count);
        self
    }

    pub fn with_annotation_consolidation_config(
        mut self,
        config: AnnotationConsolidationConfig,
    ) -> Self {
        self.annotation_consolidation_config = Some(config);
        self
    }

    pub fn with_public_workforce_task_price(mut self, price: PublicWorkforceTaskPrice) -> Self {
        self.public_workforce_task_price = Some(price);
        self
    }
}

impl fmt::Display for HumanTaskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("WorkteamArn", &self.workteam_arn)?;
        w.field("UiConfig", &self.ui_config)?;
        w.field("PreHumanTaskLambdaArn", &self.pre_human_task_lambda_arn)?;
        w.list("TaskKeywords", &self.task_keywords)?;
        w.field("TaskTitle", &self.task_title)?;
        w.field("TaskDescription", &self.task_description)?;
        w.field(
            "NumberOfHumanWorkersPerDataObject",
            &self.number_of_human_workers_per_data_object,
        )?;
        w.field("TaskTimeLimitInSeconds", &self.task_time_limit_in_seconds)?;
        w.field(
            "TaskAvailabilityLifetimeInSeconds",
            &self.task_availability_lifetime_in_seconds,
        )?;
        w.field("MaxConcurrentTaskCount", &self.max_concurrent_task_count)?;
        w.field(
            "AnnotationConsolidationConfig",
            &self.annotation_consolidation_config,
        )?;
        w.field("PublicWorkforceTaskPrice", &self.public_workforce_task_price)?;
        w.finish()
    }
}

/// Human review loop settings for an augmented-AI flow definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HumanLoopConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workteam_arn: Option<String>,
    /// ARN of the worker task template UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_task_ui_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_description: Option<String>,
    /// Workers asked to review each item, 1-3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_availability_lifetime_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_time_limit_in_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_workforce_task_price: Option<PublicWorkforceTaskPrice>,
}

impl HumanLoopConfig {
    pub fn with_workteam_arn(mut self, arn: impl Into<String>) -> Self {
        self.workteam_arn = Some(arn.into());
        self
    }

    pub fn with_human_task_ui_arn(mut self, arn: impl Into<String>) -> Self {
        self.human_task_ui_arn = Some(arn.into());
        self
    }

    pub fn with_task_title(mut self, title: impl Into<String>) -> Self {
        self.task_title = Some(title.into());
        self
    }

    pub fn with_task_description(mut self, description: impl Into<String>) -> Self {
        self.task_description = Some(description.into());
        self
    }

    pub fn with_task_count(mut self, count: i32) -> Self {
        self.task_count = Some(count);
        self
    }

    pub fn with_task_availability_lifetime_in_seconds(mut self, seconds: i32) -> Self {
        self.task_availability_lifetime_in_seconds = Some(seconds);
        self
    }

    pub fn with_task_time_limit_in_seconds(mut self, seconds: i32) -> Self {
        self.task_time_limit_in_seconds = Some(seconds);
        self
    }

    pub fn with_task_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.task_keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_task_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.task_keywords
            .get_or_insert_with(Vec::new)
            .push(keyword.into());
        self
    }

    pub fn with_public_workforce_task_price(mut self, price: PublicWorkforceTaskPrice) -> Self {
        self.public_workforce_task_price = Some(price);
        self
    }
}

impl fmt::Display for HumanLoopConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("WorkteamArn", &self.workteam_arn)?;
        w.field("HumanTaskUiArn", &self.human_task_ui_arn)?;
        w.field("TaskTitle", &self.task_title)?;
        w.field("TaskDescription", &self.task_description)?;
        w.field("TaskCount", &self.task_count)?;
        w.field(
            "TaskAvailabilityLifetimeInSeconds",
            &self.task_availability_lifetime_in_seconds,
        )?;
        w.field("TaskTimeLimitInSeconds", &self.task_time_limit_in_seconds)?;
        w.list("TaskKeywords", &self.task_keywords)?;
        w.field("PublicWorkforceTaskPrice", &self.public_workforce_task_price)?;
        w.finish()
    }
}

/// Worker UI template location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UiConfig {
    /// S3 URI of the Liquid template workers see.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_template_s3_uri: Option<String>,
}

impl UiConfig {
    pub fn with_ui_template_s3_uri(mut self, uri: impl Into<String>) -> Self {
        self.ui_template_s3_uri = Some(uri.into());
        self
    }
}

impl fmt::Display for UiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("UiTemplateS3Uri", &self.ui_template_s3_uri)?;
        w.finish()
    }
}

/// Lambda that merges the answers of multiple workers into one label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AnnotationConsolidationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_consolidation_lambda_arn: Option<String>,
}

impl AnnotationConsolidationConfig {
    pub fn with_annotation_consolidation_lambda_arn(mut self, arn: impl Into<String>) -> Self {
        self.annotation_consolidation_lambda_arn = Some(arn.into());
        self
    }
}

impl fmt::Display for AnnotationConsolidationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field(
            "AnnotationConsolidationLambdaArn",
            &self.annotation_consolidation_lambda_arn,
        )?;
        w.finish()
    }
}

/// Price paid per task to public workforce workers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PublicWorkforceTaskPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in_usd: Option<Usd>,
}

impl PublicWorkforceTaskPrice {
    pub fn with_amount_in_usd(mut self, amount: Usd) -> Self {
        self.amount_in_usd = Some(amount);
        self
    }
}

impl fmt::Display for PublicWorkforceTaskPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("AmountInUsd", &self.amount_in_usd)?;
        w.finish()
    }
}

/// Dollar amount split into whole dollars, cents and tenth fractions of a
/// cent so no floating point is involved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Usd {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dollars: Option<i32>,
    /// 0-99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cents: Option<i32>,
    /// 0-9.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenth_fractions_of_a_cent: Option<i32>,
}

impl Usd {
    pub fn with_dollars(mut self, dollars: i32) -> Self {
        self.dollars = Some(dollars);
        self
    }

    pub fn with_cents(mut self, cents: i32) -> Self {
        self.cents = Some(cents);
        self
    }

    pub fn with_tenth_fractions_of_a_cent(mut self, fractions: i32) -> Self {
        self.tenth_fractions_of_a_cent = Some(fractions);
        self
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Dollars", &self.dollars)?;
        w.field("Cents", &self.cents)?;
        w.field("TenthFractionsOfACent", &self.tenth_fractions_of_a_cent)?;
        w.finish()
    }
}
