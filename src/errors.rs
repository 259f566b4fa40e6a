/*
  Copyright 2026 The screw-fk Authors

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
*/
use thiserror::Error;

/// The reason of the failure of the forward kinematics
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid se(3) generator: {reason}")]
    InvalidGeneratorError { reason: String },
    #[error("kinematic computation failed at joint {joint_index}: {source}")]
    KinematicComputationError {
        joint_index: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("size mismatch input = {input}, required = {required}")]
    SizeMismatchError { input: usize, required: usize },
}

impl Error {
    pub(crate) fn invalid_generator(reason: impl Into<String>) -> Self {
        Error::InvalidGeneratorError {
            reason: reason.into(),
        }
    }

    /// Index of the joint which failed, if this error came from a chain
    pub fn joint_index(&self) -> Option<usize> {
        match self {
            Error::KinematicComputationError { joint_index, .. } => Some(*joint_index),
            _ => None,
        }
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        let err = Error::invalid_generator("bottom row is not zero");
        assert_eq!(
            err.to_string(),
            "invalid se(3) generator: bottom row is not zero"
        );
        let err = Error::SizeMismatchError {
            input: 2,
            required: 3,
        };
        assert!(err.to_string().contains("required = 3"));
    }

    #[test]
    fn test_source_of_chain_error() {
        let err = Error::KinematicComputationError {
            joint_index: 4,
            source: Box::new(Error::invalid_generator("non-finite entry")),
        };
        assert_eq!(err.joint_index(), Some(4));
        assert!(err.to_string().starts_with("kinematic computation failed at joint 4"));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("non-finite entry"));
        assert_eq!(Error::invalid_generator("x").joint_index(), None);
    }
}
