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

//! Text representations of quantum circuit elements.
//!
//! The [RepresentationResolver] turns operators, observables and measurements into the short
//! strings shown in circuit diagrams, and the [TextDrawer] lays those strings out on wires.

pub mod charset;
pub mod error;
pub mod format;
pub mod grid;
pub mod matrix_cache;
pub mod operators;
pub mod resolver;
pub mod text_drawer;

pub use charset::CharSet;
pub use error::ResolveError;
pub use format::{format_poly_term, format_repr, single_parameter_representation};
pub use grid::Grid;
pub use matrix_cache::{index_of_array_or_append, MatrixCache};
pub use operators::{
    Element, MeasurementProcess, Observable, Operator, Param, ReturnType, Tensor, Wires,
};
pub use resolver::RepresentationResolver;
pub use text_drawer::TextDrawer;
