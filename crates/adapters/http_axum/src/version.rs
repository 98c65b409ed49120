//! API version and device kind resolution from the request path.

use std::str::FromStr;

use vhome_domain::device::DeviceKind;

use crate::error::ApiError;

/// API versions served by this adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V0_1,
}

impl ApiVersion {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V0_1 => "v0.1",
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v0.1" => Ok(Self::V0_1),
            other => {
                tracing::warn!(version = other, "rejected unknown API version");
                Err(ApiError::UnknownVersion(other.to_string()))
            }
        }
    }
}

/// Check the version then the kind segment of a device path.
///
/// # Errors
///
/// Returns [`ApiError::UnknownVersion`] or [`ApiError::UnknownKind`].
pub fn resolve(version: &str, kind: &str) -> Result<DeviceKind, ApiError> {
    version.parse::<ApiVersion>()?;
    Ok(kind.parse::<DeviceKind>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_current_version() {
        assert_eq!("v0.1".parse::<ApiVersion>().unwrap(), ApiVersion::V0_1);
    }

    #[test]
    fn should_reject_other_versions() {
        for version in ["v0.2", "v1", "", "V0.1"] {
            assert!(matches!(
                version.parse::<ApiVersion>(),
                Err(ApiError::UnknownVersion(_))
            ));
        }
    }

    #[test]
    fn should_check_version_before_kind() {
        assert!(matches!(
            resolve("v2", "toaster"),
            Err(ApiError::UnknownVersion(_))
        ));
        assert!(matches!(
            resolve("v0.1", "toaster"),
            Err(ApiError::UnknownKind(_))
        ));
        assert_eq!(resolve("v0.1", "door").unwrap(), DeviceKind::Door);
    }
}
