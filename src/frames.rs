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
//! Result of forward kinematics
use crate::errors::Error;
use crate::transform::Se3Transform;
use nalgebra::{RealField, Vector3};
use std::ops::Deref;

/// Absolute link frames, from the base (identity) to the end of the chain
///
/// The length is always the number of joints plus one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<Se3Transform<T>>",
        into = "Vec<Se3Transform<T>>",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct FrameSequence<T: RealField> {
    frames: Vec<Se3Transform<T>>,
}

impl<T> FrameSequence<T>
where
    T: RealField + Copy,
{
    pub(crate) fn with_capacity(dof: usize) -> Self {
        let mut frames = Vec::with_capacity(dof + 1);
        frames.push(Se3Transform::identity());
        Self { frames }
    }
    pub(crate) fn push(&mut self, frame: Se3Transform<T>) {
        self.frames.push(frame);
    }
    /// The frame of the base, it is always the identity
    pub fn base(&self) -> &Se3Transform<T> {
        &self.frames[0]
    }
    /// The frame of the last link
    pub fn end_effector(&self) -> &Se3Transform<T> {
        &self.frames[self.frames.len() - 1]
    }
    /// Translation part of every frame
    pub fn positions(&self) -> Vec<Vector3<T>> {
        self.frames.iter().map(|f| f.translation()).collect()
    }
    pub fn into_vec(self) -> Vec<Se3Transform<T>> {
        self.into()
    }
}

impl<T: RealField> From<FrameSequence<T>> for Vec<Se3Transform<T>> {
    fn from(frames: FrameSequence<T>) -> Self {
        frames.frames
    }
}

/// It fails if `frames` is empty, a sequence always has the base frame
impl<T: RealField> TryFrom<Vec<Se3Transform<T>>> for FrameSequence<T> {
    type Error = Error;

    fn try_from(frames: Vec<Se3Transform<T>>) -> Result<Self, Self::Error> {
        if frames.is_empty() {
            return Err(Error::SizeMismatchError {
                input: 0,
                required: 1,
            });
        }
        Ok(Self { frames })
    }
}

impl<T: RealField> Deref for FrameSequence<T> {
    type Target = [Se3Transform<T>];

    fn deref(&self) -> &Self::Target {
        &self.frames
    }
}

impl<'a, T: RealField> IntoIterator for &'a FrameSequence<T> {
    type Item = &'a Se3Transform<T>;
    type IntoIter = std::slice::Iter<'a, Se3Transform<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl<T: RealField> IntoIterator for FrameSequence<T> {
    type Item = Se3Transform<T>;
    type IntoIter = std::vec::IntoIter<Se3Transform<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

#[test]
fn test_empty_sequence() {
    let frames = FrameSequence::<f64>::with_capacity(0);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames.base(), frames.end_effector());
    assert_eq!(frames.positions(), vec![Vector3::zeros()]);
    assert!(FrameSequence::<f64>::try_from(Vec::new()).is_err());
    let frames = FrameSequence::try_from(frames.into_vec()).unwrap();
    assert_eq!(frames[0], Se3Transform::identity());
}
