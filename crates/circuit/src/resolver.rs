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

use std::sync::LazyLock;

use hashbrown::HashMap;
use itertools::Itertools;
use ndarray::{ArrayView1, ArrayView2, Ix1, Ix2};
use num_complex::Complex64;

use crate::charset::CharSet;
use crate::error::ResolveError;
use crate::format::{
    format_general, format_poly_term, format_repr, single_parameter_representation,
    SIGNIFICANT_DIGITS,
};
use crate::matrix_cache::MatrixCache;
use crate::operators::{Element, Observable, Operator, Param, ReturnType, Tensor};

/// Short symbols drawn on the wires an operator acts on (other than its control wires).
static RESOLUTION_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("PauliX", "X"),
        ("CNOT", "X"),
        ("Toffoli", "X"),
        ("CSWAP", "SWAP"),
        ("PauliY", "Y"),
        ("PauliZ", "Z"),
        ("CZ", "Z"),
        ("Identity", "I"),
        ("Hadamard", "H"),
        ("MultiRZ", "RZ"),
        ("CRX", "RX"),
        ("CRY", "RY"),
        ("CRZ", "RZ"),
        ("CRot", "Rot"),
        ("PhaseShift", "Rϕ"),
        ("Beamsplitter", "BS"),
        ("Squeezing", "S"),
        ("TwoModeSqueezing", "S"),
        ("Displacement", "D"),
        ("NumberOperator", "n"),
        ("Rotation", "R"),
        ("ControlledAddition", "X"),
        ("ControlledPhase", "Z"),
        ("ThermalState", "Thermal"),
        ("GaussianState", "Gaussian"),
        ("QuadraticPhase", "P"),
        ("CubicPhase", "V"),
        ("X", "x"),
        ("P", "p"),
    ]
    .into_iter()
    .collect()
});

/// Positions, within an operator's wires, of the wires that act as controls.
const CONTROL_WIRES: [(&str, &[usize]); 10] = [
    ("CNOT", &[0]),
    ("Toffoli", &[0, 1]),
    ("CSWAP", &[0]),
    ("CRX", &[0]),
    ("CRY", &[0]),
    ("CRZ", &[0]),
    ("CRot", &[0]),
    ("CZ", &[0]),
    ("ControlledAddition", &[0]),
    ("ControlledPhase", &[0]),
];

static CONTROL_WIRE_TABLE: LazyLock<HashMap<&'static str, &'static [usize]>> =
    LazyLock::new(|| CONTROL_WIRES.into_iter().collect());

/// Operators whose data consists only of matrices, each shown as an `M` label.
const MATRIX_ARGUMENT_OPERATORS: [&str; 5] = [
    "GaussianState",
    "FockDensityMatrix",
    "FockStateVector",
    "QubitStateVector",
    "Interferometer",
];

/// The display symbol of an operator's canonical name, or the name itself when it has no
/// shorter form.
pub fn resolve_symbol(name: &str) -> &str {
    RESOLUTION_TABLE.get(name).copied().unwrap_or(name)
}

/// The positions of the control wires declared for a canonical name.
pub fn control_wire_positions(name: &str) -> Option<&'static [usize]> {
    CONTROL_WIRE_TABLE.get(name).copied()
}

/// Whether `wire` is one of the declared control wires of `op`.  Positions beyond the end of
/// the operator's wires are ignored.
pub fn is_control_wire(op: &Operator, wire: usize) -> bool {
    control_wire_positions(op.name()).is_some_and(|positions| {
        positions
            .iter()
            .filter_map(|pos| op.wires().get(*pos))
            .any(|control| control == wire)
    })
}

/// Resolves the string representation of circuit elements.
///
/// Matrix-valued operators are shown by a label such as `U0` or `H1`.  The resolver keeps one
/// cache per label family, so it should be created once per drawing and reused for every cell
/// of that drawing.
#[derive(Clone, Debug)]
pub struct RepresentationResolver {
    charset: CharSet,
    matrix_cache: MatrixCache,
    unitary_matrix_cache: MatrixCache,
    hermitian_matrix_cache: MatrixCache,
}

impl Default for RepresentationResolver {
    fn default() -> Self {
        Self::new(CharSet::UNICODE)
    }
}

impl RepresentationResolver {
    pub fn new(charset: CharSet) -> Self {
        RepresentationResolver {
            charset,
            matrix_cache: MatrixCache::new(),
            unitary_matrix_cache: MatrixCache::new(),
            hermitian_matrix_cache: MatrixCache::new(),
        }
    }

    pub fn charset(&self) -> &CharSet {
        &self.charset
    }

    /// Matrices of state preparations and interferometers (`M` labels).
    pub fn matrix_cache(&self) -> &MatrixCache {
        &self.matrix_cache
    }

    /// Matrices of (controlled) qubit unitaries (`U` labels).
    pub fn unitary_matrix_cache(&self) -> &MatrixCache {
        &self.unitary_matrix_cache
    }

    /// Matrices of Hermitian observables (`H` labels).
    pub fn hermitian_matrix_cache(&self) -> &MatrixCache {
        &self.hermitian_matrix_cache
    }

    /// Return the string representation of a grid cell, which is empty for an empty cell.
    pub fn element_representation(
        &mut self,
        element: Option<&Element>,
        wire: usize,
    ) -> Result<String, ResolveError> {
        match element {
            None => Ok(String::new()),
            Some(Element::Text(text)) => Ok(text.clone()),
            Some(element) if element.return_type().is_some() => {
                self.output_representation(element, wire)
            }
            Some(element) => self.operator_representation(element, wire),
        }
    }

    /// Return the string representation of a circuit output, wrapping the observable according
    /// to the return type of the measurement.  Elements that are not measured are represented
    /// as plain operators.
    pub fn output_representation(
        &mut self,
        element: &Element,
        wire: usize,
    ) -> Result<String, ResolveError> {
        let Some(return_type) = element.return_type().cloned() else {
            return self.operator_representation(element, wire);
        };
        let out = match return_type {
            ReturnType::Expectation => {
                let representation = self.operator_representation(element, wire)?;
                format!(
                    "{}{}{}",
                    self.charset.langle, representation, self.charset.rangle
                )
            }
            ReturnType::Variance => {
                format!("Var[{}]", self.operator_representation(element, wire)?)
            }
            ReturnType::Sample => {
                format!("Sample[{}]", self.operator_representation(element, wire)?)
            }
            ReturnType::Probability => "Probs".to_owned(),
            ReturnType::State => "State".to_owned(),
            ReturnType::Custom(tag) => {
                format!("{}[{}]", tag, self.operator_representation(element, wire)?)
            }
        };
        Ok(out)
    }

    /// Return the string representation of an element on `wire`, ignoring any return type.
    pub fn operator_representation(
        &mut self,
        element: &Element,
        wire: usize,
    ) -> Result<String, ResolveError> {
        match element {
            Element::Text(text) => Ok(text.clone()),
            Element::Operator(op) => self.op_representation(op, wire),
            Element::Tensor(tensor) => self.tensor_representation(tensor, wire),
            // A measurement without observable is a raw measurement in the computational basis.
            Element::Measurement(mp) => match mp.obs() {
                Some(Observable::Operator(op)) => self.op_representation(op, wire),
                Some(Observable::Tensor(tensor)) => self.tensor_representation(tensor, wire),
                None => Ok("basis".to_owned()),
            },
        }
    }

    fn tensor_representation(
        &mut self,
        tensor: &Tensor,
        wire: usize,
    ) -> Result<String, ResolveError> {
        let separator = format!(" {} ", self.charset.otimes);
        let constituents = tensor
            .obs()
            .iter()
            .map(|ob| self.op_representation(ob, wire))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(constituents.join(&separator))
    }

    /// Return the string representation of a single operator on `wire`.
    pub fn op_representation(&mut self, op: &Operator, wire: usize) -> Result<String, ResolveError> {
        let base_name = op.name();
        let name = resolve_symbol(base_name);

        if base_name == "MultiControlledX" {
            if op.control_wires().contains(wire) {
                return Ok(self.charset.control.to_owned());
            }
            return Ok(self.with_inverse(op, "X".to_owned()));
        }

        // Control wires never carry the inverse marker.
        if is_control_wire(op, wire) {
            return Ok(self.charset.control.to_owned());
        }

        let representation = if op.num_params() == 0 {
            name.to_owned()
        } else {
            match base_name {
                "PauliRot" => {
                    let theta = single_parameter_representation(param(op, 0)?);
                    let pauli_word = match param(op, 1)? {
                        Param::Str(word) => word,
                        other => return Err(unexpected(op, 1, other, "a Pauli word")),
                    };
                    let position = wire_position(op, wire)?;
                    let pauli = pauli_word.chars().nth(position).ok_or_else(|| {
                        ResolveError::UnexpectedParameter {
                            operator: op.name().to_owned(),
                            index: 1,
                            expected: "a Pauli word covering every wire",
                        }
                    })?;
                    format!("R{}({})", pauli, theta)
                }
                "QubitUnitary" => {
                    let idx = self
                        .unitary_matrix_cache
                        .index_of_or_append(&matrix(op, 0)?);
                    format!("U{}", idx)
                }
                "ControlledQubitUnitary" => {
                    if op.control_wires().contains(wire) {
                        return Ok(self.charset.control.to_owned());
                    }
                    let idx = self
                        .unitary_matrix_cache
                        .index_of_or_append(&matrix(op, 0)?);
                    format!("U{}", idx)
                }
                "Hermitian" => {
                    let idx = self
                        .hermitian_matrix_cache
                        .index_of_or_append(&matrix(op, 0)?);
                    format!("H{}", idx)
                }
                "QuadOperator" => {
                    let phi = single_parameter_representation(param(op, 0)?);
                    format!("cos({0})x+sin({0})p", phi)
                }
                "FockStateProjector" => {
                    let n_str = match param(op, 0)? {
                        Param::Ints(values) => values.iter().join(","),
                        other => return Err(unexpected(op, 0, other, "a list of integers")),
                    };
                    format!(
                        "{pipe}{n}{crossed}{n}{pipe}",
                        pipe = self.charset.pipe,
                        crossed = self.charset.crossed_lines,
                        n = n_str
                    )
                }
                "PolyXP" => self.polyxp_representation(op)?,
                "FockState" => format!(
                    "{}{}{}",
                    self.charset.pipe,
                    plain_scalar(op, 0)?,
                    self.charset.rangle
                ),
                "BasisState" | "FockStateVector" => {
                    let position = wire_position(op, wire)?;
                    format!(
                        "{}{}{}",
                        self.charset.pipe,
                        entry_at(op, 0, position)?,
                        self.charset.rangle
                    )
                }
                _ if MATRIX_ARGUMENT_OPERATORS.contains(&base_name) => {
                    format!("{}{}", name, self.matrix_arguments(op)?)
                }
                _ => format!(
                    "{}({})",
                    name,
                    op.data().iter().map(single_parameter_representation).join(", ")
                ),
            }
        };

        Ok(self.with_inverse(op, representation))
    }

    fn with_inverse(&self, op: &Operator, mut representation: String) -> String {
        if op.inverse() {
            representation.push_str(&self.charset.to_superscript("-1"));
        }
        representation
    }

    /// Format every data entry of `op` as a matrix label, e.g. `(M0,M1)`.
    fn matrix_arguments(&mut self, op: &Operator) -> Result<String, ResolveError> {
        let mut labels = Vec::with_capacity(op.num_params());
        for index in 0..op.num_params() {
            let idx = self.matrix_cache.index_of_or_append(&matrix(op, index)?);
            labels.push(format!("M{}", idx));
        }
        Ok(format!("({})", labels.join(",")))
    }

    fn polyxp_representation(&self, op: &Operator) -> Result<String, ResolveError> {
        let coefficients = match param(op, 0)? {
            Param::Real(array) => array,
            other => return Err(unexpected(op, 0, other, "a real coefficient array")),
        };
        let invalid_shape = || ResolveError::UnexpectedParameter {
            operator: op.name().to_owned(),
            index: 0,
            expected: "coefficients over an odd number of modes",
        };
        match coefficients.ndim() {
            1 => {
                let vector = coefficients
                    .view()
                    .into_dimensionality::<Ix1>()
                    .map_err(|_| invalid_shape())?;
                if vector.len() % 2 == 0 {
                    return Err(invalid_shape());
                }
                Ok(self.polyxp_order1_representation(vector))
            }
            2 => {
                let matrix = coefficients
                    .view()
                    .into_dimensionality::<Ix2>()
                    .map_err(|_| invalid_shape())?;
                let (rows, cols) = matrix.dim();
                if rows != cols || rows % 2 == 0 {
                    return Err(invalid_shape());
                }
                Ok(self.polyxp_order2_representation(matrix))
            }
            rank => Err(ResolveError::UnsupportedRank {
                operator: op.name().to_owned(),
                rank,
            }),
        }
    }

    /// Format a first-order polynomial of `x` and `p` operators given as the coefficient vector
    /// `[c, x₀, p₀, x₁, p₁, ...]`.
    pub fn polyxp_order1_representation(&self, coefficients: ArrayView1<f64>) -> String {
        let mut poly_str = String::new();

        if coefficients[0] != 0.0 {
            poly_str.push_str(&format_general(coefficients[0], SIGNIFICANT_DIGITS, false));
        }

        for idx in 0..coefficients.len() / 2 {
            let x = 2 * idx + 1;
            let p = 2 * idx + 2;
            let sub = self.charset.to_subscript(idx);
            poly_str.push_str(&format_poly_term(coefficients[x], &format!("x{}", sub)));
            poly_str.push_str(&format_poly_term(coefficients[p], &format!("p{}", sub)));
        }

        poly_str
    }

    /// Format a second-order polynomial of `x` and `p` operators given as a square coefficient
    /// matrix over the basis `[1, x₀, p₀, x₁, p₁, ...]`.
    pub fn polyxp_order2_representation(&self, coefficients: ArrayView2<f64>) -> String {
        let c = coefficients;
        let modes = c.nrows() / 2;
        let sub = |idx: usize| self.charset.to_subscript(idx);
        let mut poly_str = format_repr(c[[0, 0]]);

        for idx in 0..modes {
            let x = 2 * idx + 1;
            let p = 2 * idx + 2;
            poly_str.push_str(&format_poly_term(
                c[[0, x]] + c[[x, 0]],
                &format!("x{}", sub(idx)),
            ));
            poly_str.push_str(&format_poly_term(
                c[[0, p]] + c[[p, 0]],
                &format!("p{}", sub(idx)),
            ));
        }

        let squared = self.charset.to_superscript(2);
        for idx1 in 0..modes {
            for idx2 in idx1..modes {
                let x1 = 2 * idx1 + 1;
                let p1 = 2 * idx1 + 2;
                let x2 = 2 * idx2 + 1;
                let p2 = 2 * idx2 + 2;

                if idx1 == idx2 {
                    poly_str.push_str(&format_poly_term(
                        c[[x1, x1]],
                        &format!("x{}{}", sub(idx1), squared),
                    ));
                    poly_str.push_str(&format_poly_term(
                        c[[p1, p1]],
                        &format!("p{}{}", sub(idx1), squared),
                    ));
                    poly_str.push_str(&format_poly_term(
                        c[[x1, p1]] + c[[p1, x1]],
                        &format!("x{}p{}", sub(idx1), sub(idx1)),
                    ));
                } else {
                    poly_str.push_str(&format_poly_term(
                        c[[x1, x2]] + c[[x2, x1]],
                        &format!("x{}x{}", sub(idx1), sub(idx2)),
                    ));
                    poly_str.push_str(&format_poly_term(
                        c[[p1, p2]] + c[[p2, p1]],
                        &format!("p{}p{}", sub(idx1), sub(idx2)),
                    ));
                    poly_str.push_str(&format_poly_term(
                        c[[x1, p2]] + c[[p2, x1]],
                        &format!("x{}p{}", sub(idx1), sub(idx2)),
                    ));
                    poly_str.push_str(&format_poly_term(
                        c[[p1, x2]] + c[[x2, p1]],
                        &format!("x{}p{}", sub(idx2), sub(idx1)),
                    ));
                }
            }
        }

        poly_str
    }
}

fn param(op: &Operator, index: usize) -> Result<&Param, ResolveError> {
    op.data()
        .get(index)
        .ok_or_else(|| ResolveError::MissingParameter {
            operator: op.name().to_owned(),
            index,
        })
}

fn unexpected(op: &Operator, index: usize, found: &Param, expected: &'static str) -> ResolveError {
    tracing::trace!(operator = op.name(), index, found = found.kind(), "unexpected parameter");
    ResolveError::UnexpectedParameter {
        operator: op.name().to_owned(),
        index,
        expected,
    }
}

fn wire_position(op: &Operator, wire: usize) -> Result<usize, ResolveError> {
    op.wires()
        .index_of(wire)
        .ok_or_else(|| ResolveError::WireNotFound {
            operator: op.name().to_owned(),
            wire,
        })
}

fn matrix(op: &Operator, index: usize) -> Result<ndarray::ArrayD<Complex64>, ResolveError> {
    let par = param(op, index)?;
    par.to_complex_array()
        .ok_or_else(|| unexpected(op, index, par, "an array"))
}

/// A scalar written the way a plain number prints, e.g. `2` or `0.5`.
fn plain_scalar(op: &Operator, index: usize) -> Result<String, ResolveError> {
    match param(op, index)? {
        Param::Int(value) => Ok(value.to_string()),
        Param::Float(value) => Ok(format_repr(*value)),
        other => Err(unexpected(op, index, other, "a number")),
    }
}

/// The entry at `position` of a one-dimensional data entry.
fn entry_at(op: &Operator, index: usize, position: usize) -> Result<String, ResolveError> {
    let par = param(op, index)?;
    let entry = match par {
        Param::Ints(values) => values.get(position).map(|v| v.to_string()),
        Param::Real(array) if array.ndim() == 1 => {
            array.iter().nth(position).map(|v| format_repr(*v))
        }
        Param::Complex(array) if array.ndim() == 1 => {
            array.iter().nth(position).map(|v| v.to_string())
        }
        _ => None,
    };
    entry.ok_or_else(|| unexpected(op, index, par, "one entry per wire"))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::operators::MeasurementProcess;
    use ndarray::array;

    #[test]
    fn symbols_come_from_the_table() {
        assert_eq!(resolve_symbol("PauliX"), "X");
        assert_eq!(resolve_symbol("CNOT"), "X");
        assert_eq!(resolve_symbol("Toffoli"), "X");
        assert_eq!(resolve_symbol("PhaseShift"), "Rϕ");
        assert_eq!(resolve_symbol("SomethingElse"), "SomethingElse");
    }

    #[test]
    fn control_positions_map_through_the_wires() {
        let toffoli = Operator::new("Toffoli", [4, 2, 7]);
        assert!(is_control_wire(&toffoli, 4));
        assert!(is_control_wire(&toffoli, 2));
        assert!(!is_control_wire(&toffoli, 7));
        assert!(!is_control_wire(&Operator::new("PauliX", [4]), 4));
        // A declared control position without a wire is skipped.
        assert!(!is_control_wire(&Operator::new("CNOT", Vec::<usize>::new()), 0));
    }

    #[test]
    fn pauli_rot_uses_the_letter_of_the_wire() {
        let mut resolver = RepresentationResolver::default();
        let op = Operator::new("PauliRot", [0, 3])
            .with_param(0.1)
            .with_param("XZ");
        assert_eq!(resolver.op_representation(&op, 0).unwrap(), "RX(0.1)");
        assert_eq!(resolver.op_representation(&op, 3).unwrap(), "RZ(0.1)");
        assert_eq!(
            resolver.op_representation(&op, 1),
            Err(ResolveError::WireNotFound {
                operator: "PauliRot".into(),
                wire: 1
            })
        );
    }

    #[test]
    fn polyxp_first_order() {
        let resolver = RepresentationResolver::default();
        let coefficients = array![1.0, 2.0, 0.0, -1.0, 0.0];
        assert_eq!(
            resolver.polyxp_order1_representation(coefficients.view()),
            "1+2x₀-x₁"
        );
        let no_constant = array![0.0, 1.0, 1.0];
        assert_eq!(
            resolver.polyxp_order1_representation(no_constant.view()),
            "x₀p₀"
        );
    }

    #[test]
    fn polyxp_second_order() {
        let resolver = RepresentationResolver::default();
        let coefficients = array![
            [0.0, 1.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.5, 0.0],
            [0.0, 0.0, 1.0, 0.0, 0.0],
            [0.0, 0.5, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0, 0.0],
        ];
        assert_eq!(
            resolver.polyxp_order2_representation(coefficients.view()),
            "0.0x₀+2x₀²p₀²x₀x₁"
        );
    }

    #[test]
    fn polyxp_second_order_constant_keeps_two_digit_exponents() {
        let resolver = RepresentationResolver::default();
        let small = array![[1e-5, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        assert_eq!(
            resolver.polyxp_order2_representation(small.view()),
            "1e-05x₀²"
        );
        let large = array![[1e16, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        assert_eq!(
            resolver.polyxp_order2_representation(large.view()),
            "1e+16x₀²"
        );
    }

    #[test]
    fn polyxp_rejects_other_ranks() {
        let mut resolver = RepresentationResolver::default();
        let op = Operator::new("PolyXP", [0])
            .with_param(ndarray::ArrayD::<f64>::zeros(ndarray::IxDyn(&[3, 3, 3])));
        assert_eq!(
            resolver.op_representation(&op, 0),
            Err(ResolveError::UnsupportedRank {
                operator: "PolyXP".into(),
                rank: 3
            })
        );
    }

    #[test]
    fn raw_measurement_is_basis() {
        let mut resolver = RepresentationResolver::default();
        let mp = MeasurementProcess::basis(ReturnType::Sample, [0, 1]);
        assert_eq!(
            resolver
                .operator_representation(&Element::from(mp.clone()), 0)
                .unwrap(),
            "basis"
        );
        assert_eq!(
            resolver.output_representation(&Element::from(mp), 1).unwrap(),
            "Sample[basis]"
        );
    }
}
