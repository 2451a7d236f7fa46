//! Notebook instance request and response shapes

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Tag;
use super::display::FieldWriter;

/// Response shape for describing a notebook instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeNotebookInstanceOutput {
    /// ARN of the instance. Length 0-256.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_arn: Option<String>,
    /// Instance name, length 0-63, pattern `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
    /// `Pending`, `InService`, `Stopping`, `Stopped`, `Failed`, `Deleting`
    /// or `Updating`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_status: Option<String>,
    /// Populated when the status is `Failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    /// URL used to connect to the Jupyter server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// ML compute instance type, e.g. `ml.t3.medium`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// ENI the service created in the customer subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_interface_id: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_lifecycle_config_name: Option<String>,
    /// `Enabled` or `Disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_internet_access: Option<String>,
    /// Attached EBS volume size, 5-16384 GB.
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    /// Elastic Inference accelerator types attached to the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator_types: Option<Vec<String>>,
    /// Default Git repository, a CodeCommit URL or repository resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,
    /// Up to three additional Git repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_code_repositories: Option<Vec<String>>,
    /// `Enabled` or `Disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_access: Option<String>,
}

impl DescribeNotebookInstanceOutput {
    pub fn with_notebook_instance_arn(mut self, arn: impl Into<String>) -> Self {
        self.notebook_instance_arn = Some(arn.into());
        self
    }

    pub fn with_notebook_instance_name(mut self, name: impl Into<String>) -> Self {
        self.notebook_instance_name = Some(name.into());
        self
    }

    pub fn with_notebook_instance_status(mut self, status: impl Into<String>) -> Self {
        self.notebook_instance_status = Some(status.into());
        self
    }

    pub fn with_failure_reason(mut self, reason: impl Into<String>) -> Self {
        self.failure_reason = Some(reason.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn with_subnet_id(mut self, id: impl Into<String>) -> Self {
        self.subnet_id = Some(id.into());
        self
    }

    /// Replaces the security group list with an owned copy of `groups`.
    pub fn with_security_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.security_groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one security group, initializing the list when absent.
    pub fn with_security_group(mut self, group: impl Into<String>) -> Self {
        self.security_groups
            .get_or_insert_with(Vec::new)
            .push(group.into());
        self
    }

    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    pub fn with_kms_key_id(mut self, id: impl Into<String>) -> Self {
        self.kms_key_id = Some(id.into());
        self
    }

    pub fn with_network_interface_id(mut self, id: impl Into<String>) -> Self {
        self.network_interface_id = Some(id.into());
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

    pub fn with_notebook_instance_lifecycle_config_name(
        mut self,
        name: impl Into<String>,
    ) -> Self {
        self.notebook_instance_lifecycle_config_name = Some(name.into());
        self
    }

    pub fn with_direct_internet_access(mut self, access: impl Into<String>) -> Self {
        self.direct_internet_access = Some(access.into());
        self
    }

    pub fn with_volume_size_in_gb(mut self, size: i32) -> Self {
        self.volume_size_in_gb = Some(size);
        self
    }

    pub fn with_accelerator_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accelerator_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_accelerator_type(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator_types
            .get_or_insert_with(Vec::new)
            .push(accelerator.into());
        self
    }

    pub fn with_default_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.default_code_repository = Some(repository.into());
        self
    }

    pub fn with_additional_code_repositories<I, S>(mut self, repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_code_repositories =
            Some(repositories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_additional_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.additional_code_repositories
            .get_or_insert_with(Vec::new)
            .push(repository.into());
        self
    }

    pub fn with_root_access(mut self, access: impl Into<String>) -> Self {
        self.root_access = Some(access.into());
        self
    }
}

impl fmt::Display for DescribeNotebookInstanceOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("NotebookInstanceArn", &self.notebook_instance_arn)?;
        w.field("NotebookInstanceName", &self.notebook_instance_name)?;
        w.field("NotebookInstanceStatus", &self.notebook_instance_status)?;
        w.field("FailureReason", &self.failure_reason)?;
        w.field("Url", &self.url)?;
        w.field("InstanceType", &self.instance_type)?;
        w.field("SubnetId", &self.subnet_id)?;
        w.list("SecurityGroups", &self.security_groups)?;
        w.field("RoleArn", &self.role_arn)?;
        w.field("KmsKeyId", &self.kms_key_id)?;
        w.field("NetworkInterfaceId", &self.network_interface_id)?;
        w.field("LastModifiedTime", &self.last_modified_time)?;
        w.field("CreationTime", &self.creation_time)?;
        w.field(
            "NotebookInstanceLifecycleConfigName",
            &self.notebook_instance_lifecycle_config_name,
        )?;
        w.field("DirectInternetAccess", &self.direct_internet_access)?;
        w.field("VolumeSizeInGB", &self.volume_size_in_gb)?;
        w.list("AcceleratorTypes", &self.accelerator_types)?;
        w.field("DefaultCodeRepository", &self.default_code_repository)?;
        w.list(
            "AdditionalCodeRepositories",
            &self.additional_code_repositories,
        )?;
        w.field("RootAccess", &self.root_access)?;
        w.finish()
    }
}

/// Request shape for creating a notebook instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateNotebookInstanceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<String>>,
    /// IAM role the instance assumes to call other services.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_name: Option<String>,
    /// `Enabled` (default) or `Disabled`. When disabled the instance only
    /// reaches the network through the VPC interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_internet_access: Option<String>,
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_code_repositories: Option<Vec<String>>,
    /// `Enabled` (default) or `Disabled`. Lifecycle configurations keep
    /// root access regardless.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_access: Option<String>,
}

impl CreateNotebookInstanceInput {
    pub fn with_notebook_instance_name(mut self, name: impl Into<String>) -> Self {
        self.notebook_instance_name = Some(name.into());
        self
    }

    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn with_subnet_id(mut self, id: impl Into<String>) -> Self {
        self.subnet_id = Some(id.into());
        self
    }

    pub fn with_security_group_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.security_group_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_security_group_id(mut self, id: impl Into<String>) -> Self {
        self.security_group_ids
            .get_or_insert_with(Vec::new)
            .push(id.into());
        self
    }

    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    pub fn with_kms_key_id(mut self, id: impl Into<String>) -> Self {
        self.kms_key_id = Some(id.into());
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

    pub fn with_lifecycle_config_name(mut self, name: impl Into<String>) -> Self {
        self.lifecycle_config_name = Some(name.into());
        self
    }

    pub fn with_direct_internet_access(mut self, access: impl Into<String>) -> Self {
        self.direct_internet_access = Some(access.into());
        self
    }

    pub fn with_volume_size_in_gb(mut self, size: i32) -> Self {
        self.volume_size_in_gb = Some(size);
        self
    }

    pub fn with_accelerator_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accelerator_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_accelerator_type(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator_types
            .get_or_insert_with(Vec::new)
            .push(accelerator.into());
        self
    }

    pub fn with_default_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.default_code_repository = Some(repository.into());
        self
    }

    pub fn with_additional_code_repositories<I, S>(mut self, repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_code_repositories =
            Some(repositories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_additional_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.additional_code_repositories
            .get_or_insert_with(Vec::new)
            .push(repository.into());
        self
    }

    pub fn with_root_access(mut self, access: impl Into<String>) -> Self {
        self.root_access = Some(access.into());
        self
    }
}

impl fmt::Display for CreateNotebookInstanceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("NotebookInstanceName", &self.notebook_instance_name)?;
        w.field("InstanceType", &self.instance_type)?;
        w.field("SubnetId", &self.subnet_id)?;
        w.list("SecurityGroupIds", &self.security_group_ids)?;
        w.field("RoleArn", &self.role_arn)?;
        w.field("KmsKeyId", &self.kms_key_id)?;
        w.list("Tags", &self.tags)?;
        w.field("LifecycleConfigName", &self.lifecycle_config_name)?;
        w.field("DirectInternetAccess", &self.direct_internet_access)?;
        w.field("VolumeSizeInGB", &self.volume_size_in_gb)?;
        w.list("AcceleratorTypes", &self.accelerator_types)?;
        w.field("DefaultCodeRepository", &self.default_code_repository)?;
        w.list(
            "AdditionalCodeRepositories",
            &self.additional_code_repositories,
        )?;
        w.field("RootAccess", &self.root_access)?;
        w.finish()
    }
}

/// Request shape for updating a notebook instance.
///
/// The `disassociate_*` toggles exist because absence means "leave as is":
/// clearing a setting needs an explicit flag rather than an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateNotebookInstanceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_instance_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_name: Option<String>,
    /// Remove the currently attached lifecycle configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_lifecycle_config: Option<bool>,
    /// Volume can only grow; the service rejects a smaller size.
    #[serde(rename = "VolumeSizeInGB", skip_serializing_if = "Option::is_none")]
    pub volume_size_in_gb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_code_repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_code_repositories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accelerator_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_accelerator_types: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_default_code_repository: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disassociate_additional_code_repositories: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_access: Option<String>,
}

impl UpdateNotebookInstanceInput {
    pub fn with_notebook_instance_name(mut self, name: impl Into<String>) -> Self {
        self.notebook_instance_name = Some(name.into());
        self
    }

    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    pub fn with_lifecycle_config_name(mut self, name: impl Into<String>) -> Self {
        self.lifecycle_config_name = Some(name.into());
        self
    }

    pub fn with_disassociate_lifecycle_config(mut self, disassociate: bool) -> Self {
        self.disassociate_lifecycle_config = Some(disassociate);
        self
    }

    pub fn with_volume_size_in_gb(mut self, size: i32) -> Self {
        self.volume_size_in_gb = Some(size);
        self
    }

    pub fn with_default_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.default_code_repository = Some(repository.into());
        self
    }

    pub fn with_additional_code_repositories<I, S>(mut self, repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_code_repositories =
            Some(repositories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_additional_code_repository(mut self, repository: impl Into<String>) -> Self {
        self.additional_code_repositories
            .get_or_insert_with(Vec::new)
            .push(repository.into());
        self
    }

    pub fn with_accelerator_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accelerator_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_accelerator_type(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator_types
            .get_or_insert_with(Vec::new)
            .push(accelerator.into());
        self
    }

    pub fn with_disassociate_accelerator_types(mut self, disassociate: bool) -> Self {
        self.disassociate_accelerator_types = Some(disassociate);
        self
    }

    pub fn with_disassociate_default_code_repository(mut self, disassociate: bool) -> Self {
        self.disassociate_default_code_repository = Some(disassociate);
        self
    }

    pub fn with_disassociate_additional_code_repositories(mut self, disassociate: bool) -> Self {
        self.disassociate_additional_code_repositories = Some(disassociate);
        self
    }

    pub fn with_root_access(mut self, access: impl Into<String>) -> Self {
        self.root_access = Some(access.into());
        self
    }
}

impl fmt::Display for UpdateNotebookInstanceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("NotebookInstanceName", &self.notebook_instance_name)?;
        w.field("InstanceType", &self.instance_type)?;
        w.field("RoleArn", &self.role_arn)?;
        w.field("LifecycleConfigName", &self.lifecycle_config_name)?;
        w.field(
            "DisassociateLifecycleConfig",
            &self.disassociate_lifecycle_config,
        )?;
        w.field("VolumeSizeInGB", &self.volume_size_in_gb)?;
        w.field("DefaultCodeRepository", &self.default_code_repository)?;
        w.list(
            "AdditionalCodeRepositories",
            &self.additional_code_repositories,
        )?;
        w.list("AcceleratorTypes", &self.accelerator_types)?;
        w.field(
            "DisassociateAcceleratorTypes",
            &self.disassociate_accelerator_types,
        )?;
        w.field(
            "DisassociateDefaultCodeRepository",
            &self.disassociate_default_code_repository,
        )?;
        w.field(
            "DisassociateAdditionalCodeRepositories",
            &self.disassociate_additional_code_repositories,
        )?;
        w.field("RootAccess", &self.root_access)?;
        w.finish()
    }
}
