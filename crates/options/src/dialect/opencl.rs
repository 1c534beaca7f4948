//! OpenCL language versions.
//!
//! Versions are stored as integers: OpenCL C uses `major * 100 + minor * 10`
//! (200 is 2.0), C++ for OpenCL uses 100 for 1.0 and the year times 100
//! from 2021 on (202100 is 2021).

use std::fmt;

use crate::common::{OptionsError, Result};

use super::set::DialectOptionSet;

/// C++ for OpenCL 1.0.
const OPENCL_CPP_1_0: u32 = 100;

/// C++ for OpenCL 2021.
const OPENCL_CPP_2021: u32 = 202_100;

/// A language version with an optional minor component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpenClVersion {
    /// Major version, or the year for year-numbered releases.
    pub major: u32,
    /// Minor version; absent for year-numbered releases.
    pub minor: Option<u32>,
}

impl fmt::Display for OpenClVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minor {
            Some(minor) => write!(f, "{}.{minor}", self.major),
            None => write!(f, "{}", self.major),
        }
    }
}

impl DialectOptionSet {
    /// Returns the OpenCL C or C++ for OpenCL version as a tuple.
    pub fn opencl_version_tuple(&self) -> OpenClVersion {
        let version = if self.opencl_cplusplus() {
            self.opencl_cplusplus_version()
        } else {
            self.opencl_version()
        };
        if self.opencl_cplusplus() && version != OPENCL_CPP_1_0 {
            OpenClVersion {
                major: version / 100,
                minor: None,
            }
        } else {
            OpenClVersion {
                major: version / 100,
                minor: Some((version % 100) / 10),
            }
        }
    }

    /// Returns the OpenCL C version the kernel language is compatible with.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::UnknownOpenClCppVersion` for a C++ for OpenCL
    /// version other than 1.0 or 2021.
    pub fn opencl_compatible_version(&self) -> Result<u32> {
        if !self.opencl_cplusplus() {
            return Ok(self.opencl_version());
        }
        match self.opencl_cplusplus_version() {
            OPENCL_CPP_1_0 => Ok(200),
            OPENCL_CPP_2021 => Ok(300),
            other => Err(OptionsError::UnknownOpenClCppVersion(other)),
        }
    }

    /// Returns the language name and version, e.g. `OpenCL C version 3.0`.
    pub fn opencl_version_string(&self) -> String {
        let language = if self.opencl_cplusplus() {
            "C++ for OpenCL"
        } else {
            "OpenCL C"
        };
        format!("{language} version {}", self.opencl_version_tuple())
    }
}
