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

use ndarray::ArrayD;
use num_complex::Complex64;

/// Return the index of the first element of `target_list` equal to `target_element`.  If no
/// element is equal, `target_element` is appended and the new last index is returned.
pub fn index_of_array_or_append<T: PartialEq + Clone>(
    target_element: &T,
    target_list: &mut Vec<T>,
) -> usize {
    if let Some(idx) = target_list.iter().position(|target| target == target_element) {
        return idx;
    }
    target_list.push(target_element.clone());
    target_list.len() - 1
}

/// An append-only list of matrices used to give every distinct matrix of a drawing a short
/// numeric label.
///
/// Matrices are compared by value: two arrays are the same entry when their shapes and all of
/// their elements are equal.  The cache lives as long as the resolver that owns it and is
/// never cleared, so labels stay stable for the whole drawing.
#[derive(Clone, Debug, Default)]
pub struct MatrixCache {
    matrices: Vec<ArrayD<Complex64>>,
}

impl MatrixCache {
    pub fn new() -> Self {
        MatrixCache {
            matrices: Vec::new(),
        }
    }

    /// The label index of `matrix`, inserting it if it has not been seen before.
    pub fn index_of_or_append(&mut self, matrix: &ArrayD<Complex64>) -> usize {
        let before = self.matrices.len();
        let idx = index_of_array_or_append(matrix, &mut self.matrices);
        if self.matrices.len() > before {
            tracing::debug!(index = idx, shape = ?matrix.shape(), "cached new matrix");
        }
        idx
    }

    /// The matrix stored at `index`.
    pub fn get(&self, index: usize) -> Option<&ArrayD<Complex64>> {
        self.matrices.get(index)
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }
}
