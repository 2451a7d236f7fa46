//! Service enumerations
//!
//! The service transports every enumerated field as a plain string, and the
//! models store them that way (`Option<String>`) so that values added by the
//! service after this crate was generated still round-trip untouched. The
//! types here are convenience constants: each knows its canonical wire
//! literal and converts into `String`, so any string-typed setter accepts
//! them directly.

use std::fmt;

macro_rules! service_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $literal:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Canonical wire literal for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }

            /// Values the service documented when this crate was generated.
            /// The service may recognize more; string storage keeps those
            /// usable.
            pub fn values() -> &'static [$name] {
                &[$(Self::$variant),+]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }
    };
}

service_enum! {
    /// Terminal and in-flight states of a training job.
    TrainingJobStatus {
        InProgress => "InProgress",
        Completed => "Completed",
        Failed => "Failed",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
}

service_enum! {
    /// Fine-grained progress states reported while a training job runs.
    SecondaryStatus {
        Starting => "Starting",
        LaunchingMlInstances => "LaunchingMLInstances",
        PreparingTrainingStack => "PreparingTrainingStack",
        Downloading => "Downloading",
        DownloadingTrainingImage => "DownloadingTrainingImage",
        Training => "Training",
        Uploading => "Uploading",
        Stopping => "Stopping",
        Stopped => "Stopped",
        MaxRuntimeExceeded => "MaxRuntimeExceeded",
        Completed => "Completed",
        Failed => "Failed",
        Interrupted => "Interrupted",
        MaxWaitTimeExceeded => "MaxWaitTimeExceeded",
    }
}

service_enum! {
    ProcessingJobStatus {
        InProgress => "InProgress",
        Completed => "Completed",
        Failed => "Failed",
        Stopping => "Stopping",
        Stopped => "Stopped",
    }
}

service_enum! {
    NotebookInstanceStatus {
        Pending => "Pending",
        InService => "InService",
        Stopping => "Stopping",
        Stopped => "Stopped",
        Failed => "Failed",
        Deleting => "Deleting",
        Updating => "Updating",
    }
}

service_enum! {
    /// How training data is made available to the algorithm container.
    TrainingInputMode {
        Pipe => "Pipe",
        File => "File",
    }
}

service_enum! {
    CompressionType {
        None => "None",
        Gzip => "Gzip",
    }
}

service_enum! {
    RecordWrapper {
        None => "None",
        RecordIo => "RecordIO",
    }
}

service_enum! {
    S3DataType {
        ManifestFile => "ManifestFile",
        S3Prefix => "S3Prefix",
        AugmentedManifestFile => "AugmentedManifestFile",
    }
}

service_enum! {
    S3DataDistribution {
        FullyReplicated => "FullyReplicated",
        ShardedByS3Key => "ShardedByS3Key",
    }
}

service_enum! {
    BatchStrategy {
        MultiRecord => "MultiRecord",
        SingleRecord => "SingleRecord",
    }
}

service_enum! {
    SplitType {
        None => "None",
        Line => "Line",
        RecordIo => "RecordIO",
        TfRecord => "TFRecord",
    }
}

service_enum! {
    AssemblyType {
        None => "None",
        Line => "Line",
    }
}

service_enum! {
    JoinSource {
        Input => "Input",
        None => "None",
    }
}

service_enum! {
    /// Whether a notebook instance can reach the internet directly.
    DirectInternetAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

service_enum! {
    /// Whether notebook users get root access on the instance.
    RootAccess {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

service_enum! {
    FileSystemAccessMode {
        Rw => "rw",
        Ro => "ro",
    }
}

service_enum! {
    FileSystemType {
        Efs => "EFS",
        FsxLustre => "FSxLustre",
    }
}

service_enum! {
    ProcessingS3UploadMode {
        Continuous => "Continuous",
        EndOfJob => "EndOfJob",
    }
}

service_enum! {
    /// Direction a hyperparameter tuning objective is optimized in.
    ObjectiveType {
        Maximize => "Maximize",
        Minimize => "Minimize",
    }
}

service_enum! {
    HyperParameterScalingType {
        Auto => "Auto",
        Linear => "Linear",
        Logarithmic => "Logarithmic",
        ReverseLogarithmic => "ReverseLogarithmic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_round_trip() {
        assert_eq!(TrainingJobStatus::InProgress.as_str(), "InProgress");
        assert_eq!(
            SecondaryStatus::LaunchingMlInstances.to_string(),
            "LaunchingMLInstances"
        );
        assert_eq!(String::from(RootAccess::Disabled), "Disabled");
        assert_eq!(RecordWrapper::RecordIo.as_str(), "RecordIO");
    }

    #[test]
    fn values_list_is_complete() {
        assert_eq!(TrainingJobStatus::values().len(), 5);
        assert_eq!(SecondaryStatus::values().len(), 14);
        assert!(NotebookInstanceStatus::values().contains(&NotebookInstanceStatus::InService));
    }
}
