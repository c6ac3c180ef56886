// This code is part of Qiskit.
//
// (C) Copyright IBM 2026
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at https://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.

//! Matplotlib-style drawing of quantum circuits.
//!
//! A [PlotDrawer] records wires, gate boxes, controls, targets, swaps and measurement meters
//! on a grid of layers and wires, then renders them through `plotters`.

mod drawer;
mod error;
mod render;
mod shapes;
mod style;

pub use drawer::{BoxOptions, PlotDrawer};
pub use error::DrawError;
pub use shapes::{PlacedShape, Point, Shape, TextRotation};
pub use style::DrawerStyle;
