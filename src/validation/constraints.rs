//! Documented field constraints as matchable patterns
//!
//! These mirror the constraints the service documents for its fields. They
//! are only consulted by the advisory checks in [`crate::validation`];
//! nothing in the model layer enforces them.

use once_cell::sync::Lazy;
use regex::Regex;

/// Job, instance and definition names: `^[a-zA-Z0-9](-*[a-zA-Z0-9])*`.
pub(crate) static ENTITY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9](-*[a-zA-Z0-9])*$").expect("entity name pattern"));

/// IAM role ARNs accepted by the service.
pub(crate) static IAM_ROLE_ARN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^arn:aws[a-z\-]*:iam::\d{12}:role/?[a-zA-Z_0-9+=,.@\-_/]+$")
        .expect("role arn pattern")
});

/// Length range for job and instance names.
pub(crate) const NAME_LENGTH: (usize, usize) = (1, 63);

/// Length range for IAM role ARNs.
pub(crate) const ROLE_ARN_LENGTH: (usize, usize) = (20, 2048);

/// Length range for tag keys.
pub(crate) const TAG_KEY_LENGTH: (usize, usize) = (1, 128);

/// Maximum length for tag values.
pub(crate) const TAG_VALUE_MAX_LENGTH: usize = 256;

/// Attached EBS volume size range for notebook instances, in gigabytes.
pub(crate) const NOTEBOOK_VOLUME_SIZE_RANGE: (i32, i32) = (5, 16384);
