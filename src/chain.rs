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
use crate::errors::*;
use crate::exponential::exponential_map;
use crate::frames::FrameSequence;
use crate::screw::ScrewAxis;
use crate::transform::Se3Transform;
use nalgebra::{RealField, Vector3};
use simba::scalar::SupersetOf;
use std::fmt::{self, Display};
use tracing::{debug, trace, warn};

/// Calculate the absolute frames of the serial chain `axes` (product of exponentials)
///
/// The first frame is the identity, and the `i + 1`-th frame is the
/// `i`-th frame multiplied by the exponential of the `i`-th screw axis from the right.
/// If one of the axes can not be exponentiated it returns
/// `Error::KinematicComputationError` with the index of the joint and no frames.
///
/// # Examples
///
/// ```
/// use screw_fk::*;
///
/// let axes = vec![
///     ScrewAxis::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 3.0)),
///     ScrewAxis::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, -2.0, 0.0)),
/// ];
/// let frames = compute_frames(&axes).unwrap();
/// assert_eq!(frames.len(), 3);
/// assert_eq!(frames[1].translation(), Vector3::new(0.0, 0.0, 3.0));
/// assert_eq!(frames[2].translation(), Vector3::new(0.0, -2.0, 3.0));
/// ```
pub fn compute_frames<T>(axes: &[ScrewAxis<T>]) -> Result<FrameSequence<T>>
where
    T: RealField + Copy,
{
    debug!(joints = axes.len(), "compute frames");
    let mut frames = FrameSequence::with_capacity(axes.len());
    let mut current = Se3Transform::identity();
    for (joint_index, axis) in axes.iter().enumerate() {
        let relative = exponential_map(&axis.generator()).map_err(|err| {
            warn!(joint_index, "failed to exponentiate screw axis: {err}");
            Error::KinematicComputationError {
                joint_index,
                source: Box::new(err),
            }
        })?;
        current = current * relative;
        trace!(joint_index, "composed frame");
        frames.push(current);
    }
    Ok(frames)
}

/// Serial kinematic chain described by one screw axis per joint
///
/// # Examples
///
/// ```
/// use screw_fk::*;
///
/// let chain = ScrewChainBuilder::new()
///     .axis(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 0.0))
///     .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0))
///     .finalize();
/// assert_eq!(chain.dof(), 2);
///
/// // Magnitudes of the axes are the joint motions
/// let frames = chain.compute_frames().unwrap();
/// assert_eq!(frames.len(), 3);
///
/// // Or scale the axes by joint positions
/// let frames = chain.compute_frames_at(&[std::f64::consts::FRAC_PI_2, 0.5]).unwrap();
/// let end = frames.end_effector().translation();
/// assert!((end - Vector3::new(0.0, 0.5, 0.0)).norm() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrewChain<T: RealField> {
    axes: Vec<ScrewAxis<T>>,
}

impl<T> ScrewChain<T>
where
    T: RealField + Copy,
{
    pub fn new(axes: Vec<ScrewAxis<T>>) -> Self {
        Self { axes }
    }
    /// Iterate the screw axes from the base to the end
    pub fn iter(&self) -> impl Iterator<Item = &ScrewAxis<T>> {
        self.axes.iter()
    }
    /// The number of joints
    pub fn dof(&self) -> usize {
        self.axes.len()
    }
    pub fn axes(&self) -> &[ScrewAxis<T>] {
        &self.axes
    }
    /// Convert the scalar type of all axes
    pub fn cast<U>(&self) -> ScrewChain<U>
    where
        U: RealField + Copy + SupersetOf<T>,
    {
        ScrewChain::new(self.axes.iter().map(|axis| axis.cast::<U>()).collect())
    }
    /// Calculate the frames with the axes as they are
    pub fn compute_frames(&self) -> Result<FrameSequence<T>> {
        compute_frames(&self.axes)
    }
    /// Calculate the frames after scaling each axis by the joint position
    ///
    /// The length of `positions` must be equal with `dof()`.
    pub fn compute_frames_at(&self, positions: &[T]) -> Result<FrameSequence<T>> {
        if positions.len() != self.dof() {
            return Err(Error::SizeMismatchError {
                input: positions.len(),
                required: self.dof(),
            });
        }
        let scaled = self
            .axes
            .iter()
            .zip(positions.iter())
            .map(|(axis, position)| axis.scaled(*position))
            .collect::<Vec<_>>();
        compute_frames(&scaled)
    }
    /// Calculate the frames for many joint configurations (e.g. animation frames)
    ///
    /// Each configuration is calculated independently. The first error stops the batch.
    pub fn compute_frames_batch<P>(&self, configurations: &[P]) -> Result<Vec<FrameSequence<T>>>
    where
        P: AsRef<[T]>,
    {
        configurations
            .iter()
            .map(|positions| self.compute_frames_at(positions.as_ref()))
            .collect()
    }
    /// The frame of the end of the chain
    pub fn end_transform(&self) -> Result<Se3Transform<T>> {
        Ok(*self.compute_frames()?.end_effector())
    }
}

impl<T> From<Vec<ScrewAxis<T>>> for ScrewChain<T>
where
    T: RealField + Copy,
{
    fn from(axes: Vec<ScrewAxis<T>>) -> Self {
        Self::new(axes)
    }
}

impl<T> Display for ScrewChain<T>
where
    T: RealField + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (level, axis) in self.axes.iter().enumerate() {
            writeln!(f, "{}{}: {}", "    ".repeat(level), level, axis)?;
        }
        Ok(())
    }
}

/// Build `ScrewChain`
#[derive(Debug, Clone, Default)]
pub struct ScrewChainBuilder<T: RealField> {
    axes: Vec<ScrewAxis<T>>,
}

impl<T> ScrewChainBuilder<T>
where
    T: RealField + Copy,
{
    pub fn new() -> Self {
        Self { axes: Vec::new() }
    }
    /// Append a joint with angular component `w` and linear component `q`
    pub fn axis(self, w: Vector3<T>, q: Vector3<T>) -> Self {
        self.screw(ScrewAxis::new(w, q))
    }
    pub fn screw(mut self, axis: ScrewAxis<T>) -> Self {
        self.axes.push(axis);
        self
    }
    pub fn finalize(self) -> ScrewChain<T> {
        ScrewChain::new(self.axes)
    }
}
