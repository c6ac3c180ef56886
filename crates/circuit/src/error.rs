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

use thiserror::Error;

/// Errors raised while resolving the representation of a circuit element.
///
/// Unknown operator names and unknown return types are not errors; they fall back to the raw
/// name and to `tag[representation]` respectively.  These variants cover operators whose data
/// does not have the shape their canonical name requires.
#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("operator '{operator}' has no parameter at index {index}")]
    MissingParameter { operator: String, index: usize },
    #[error("operator '{operator}' expected {expected} at parameter index {index}")]
    UnexpectedParameter {
        operator: String,
        index: usize,
        expected: &'static str,
    },
    #[error("wire {wire} is not one of the wires of operator '{operator}'")]
    WireNotFound { operator: String, wire: usize },
    #[error("operator '{operator}' has coefficients of unsupported rank {rank}")]
    UnsupportedRank { operator: String, rank: usize },
    #[error("circuit element at position {0} does not act on any wire")]
    EmptyElement(usize),
}
