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
//! # Forward kinematics with the product of exponentials, using [nalgebra](http://nalgebra.org).
//!
//! Each joint of a serial chain is a `ScrewAxis` (angular and linear component).
//! `screw-fk` has below functionalities
//!
//! 1. Build the se(3) generator of a screw axis (`build_generator`)
//! 1. Closed form exponential map from se(3) to SE(3) (`exponential_map`)
//! 1. Compose the exponentials along the chain into absolute link frames (`compute_frames`)
//!
//! See `ScrewChain` as the top level interface.
//!
//! # Examples
//!
//! ```
//! use screw_fk::*;
//!
//! let chain = ScrewChainBuilder::new()
//!     .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 3.0))
//!     .axis(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, -2.0, 0.0))
//!     .finalize();
//! let frames = chain.compute_frames().unwrap();
//! assert_eq!(frames.len(), 3);
//! assert_eq!(frames.end_effector().translation(), Vector3::new(0.0, -2.0, 3.0));
//! ```
mod chain;
mod errors;
mod exponential;
mod frames;
pub mod math;
mod screw;
mod transform;

pub use self::chain::*;
pub use self::errors::*;
pub use self::exponential::*;
pub use self::frames::*;
pub use self::screw::*;
pub use self::transform::*;

// re-export from nalgebra
pub use nalgebra::{
    Isometry3, Matrix3, Matrix4, RealField, Translation3, UnitQuaternion, Vector3,
};
pub use simba::scalar::{SubsetOf, SupersetOf};
