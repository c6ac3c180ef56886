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

use ndarray::{array, ArrayD};
use num_complex::Complex64;
use qdraw_circuit::{
    CharSet, Element, Grid, MeasurementProcess, Operator, Param, RepresentationResolver,
    ResolveError, ReturnType, Tensor, TextDrawer,
};

fn resolve(resolver: &mut RepresentationResolver, op: Operator, wire: usize) -> String {
    resolver
        .element_representation(Some(&Element::from(op)), wire)
        .unwrap()
}

fn unitary(entries: [[f64; 2]; 2]) -> ArrayD<Complex64> {
    ndarray::Array2::from_shape_fn((2, 2), |(i, j)| Complex64::new(entries[i][j], 0.0)).into_dyn()
}

#[test]
fn table_driven_symbols() {
    let mut resolver = RepresentationResolver::default();
    assert_eq!(resolve(&mut resolver, Operator::new("PauliX", [0]), 0), "X");
    assert_eq!(resolve(&mut resolver, Operator::new("CNOT", [0, 1]), 1), "X");
    assert_eq!(resolve(&mut resolver, Operator::new("Toffoli", [0, 1, 2]), 2), "X");
    assert_eq!(resolve(&mut resolver, Operator::new("CSWAP", [0, 1, 2]), 1), "SWAP");
    assert_eq!(resolve(&mut resolver, Operator::new("Hadamard", [3]), 3), "H");
    assert_eq!(resolve(&mut resolver, Operator::new("SWAP", [0, 1]), 0), "SWAP");
}

#[test]
fn control_wires_show_the_control_marker() {
    let mut resolver = RepresentationResolver::default();
    assert_eq!(resolve(&mut resolver, Operator::new("CNOT", [2, 0]), 2), "C");
    assert_eq!(resolve(&mut resolver, Operator::new("CNOT", [2, 0]), 0), "X");
    assert_eq!(resolve(&mut resolver, Operator::new("Toffoli", [0, 1, 2]), 1), "C");

    let crx = Operator::new("CRX", [0, 1]).with_param(0.5).inv();
    assert_eq!(resolve(&mut resolver, crx.clone(), 0), "C");
    assert_eq!(resolve(&mut resolver, crx, 1), "RX(0.5)⁻¹");
}

#[test]
fn parametrized_operators() {
    let mut resolver = RepresentationResolver::default();
    let rot = Operator::new("Rot", [0]).with_params([0.1, 0.2, 0.3]);
    assert_eq!(resolve(&mut resolver, rot, 0), "Rot(0.1, 0.2, 0.3)");

    let phase = Operator::new("PhaseShift", [0]).with_param(2.0f64 / 3.0);
    assert_eq!(resolve(&mut resolver, phase, 0), "Rϕ(0.667)");

    let symbolic = Operator::new("RY", [0]).with_param("θ");
    assert_eq!(resolve(&mut resolver, symbolic, 0), "RY(θ)");

    let quad = Operator::new("QuadOperator", [0]).with_param(1.2345);
    assert_eq!(resolve(&mut resolver, quad, 0), "cos(1.23)x+sin(1.23)p");
}

#[test]
fn matrices_are_labelled_by_value() {
    let mut resolver = RepresentationResolver::default();
    let x = unitary([[0.0, 1.0], [1.0, 0.0]]);
    let z = unitary([[1.0, 0.0], [0.0, -1.0]]);

    let u_x = Operator::new("QubitUnitary", [0]).with_param(x.clone());
    let u_z = Operator::new("QubitUnitary", [1]).with_param(z.clone());
    assert_eq!(resolve(&mut resolver, u_x.clone(), 0), "U0");
    assert_eq!(resolve(&mut resolver, u_z, 1), "U1");
    assert_eq!(resolve(&mut resolver, u_x, 0), "U0");

    let controlled = Operator::new("ControlledQubitUnitary", [0, 1, 2])
        .with_param(z.clone())
        .with_control_wires([0, 1]);
    assert_eq!(resolve(&mut resolver, controlled.clone(), 1), "C");
    assert_eq!(resolve(&mut resolver, controlled, 2), "U1");
    assert_eq!(resolver.unitary_matrix_cache().len(), 2);

    // Hermitian matrices have their own numbering, and real arrays equal complex ones.
    let real_z = array![[1.0, 0.0], [0.0, -1.0]].into_dyn();
    let herm_real = Operator::new("Hermitian", [0]).with_param(real_z);
    let herm_complex = Operator::new("Hermitian", [1]).with_param(z);
    assert_eq!(resolve(&mut resolver, herm_real, 0), "H0");
    assert_eq!(resolve(&mut resolver, herm_complex, 1), "H0");
    assert_eq!(resolver.hermitian_matrix_cache().len(), 1);
}

#[test]
fn matrix_argument_operators() {
    let mut resolver = RepresentationResolver::default();
    let means = array![0.0, 1.0].into_dyn();
    let cov = array![[1.0, 0.0], [0.0, 1.0]].into_dyn();
    let gaussian = Operator::new("GaussianState", [0])
        .with_param(cov.clone())
        .with_param(means);
    assert_eq!(resolve(&mut resolver, gaussian, 0), "Gaussian(M0,M1)");

    let interferometer = Operator::new("Interferometer", [0, 1]).with_param(cov);
    assert_eq!(resolve(&mut resolver, interferometer, 1), "Interferometer(M0)");
    assert!(resolver.unitary_matrix_cache().is_empty());
}

#[test]
fn fock_and_basis_states() {
    let mut resolver = RepresentationResolver::default();
    let projector = Operator::new("FockStateProjector", [0, 1]).with_param(vec![1i64, 0]);
    assert_eq!(resolve(&mut resolver, projector, 0), "|1,0╳1,0|");

    let fock = Operator::new("FockState", [0]).with_param(3i64);
    assert_eq!(resolve(&mut resolver, fock, 0), "|3⟩");

    let basis = Operator::new("BasisState", [4, 2]).with_param(vec![1i64, 0]);
    assert_eq!(resolve(&mut resolver, basis.clone(), 4), "|1⟩");
    assert_eq!(resolve(&mut resolver, basis, 2), "|0⟩");
}

#[test]
fn fock_state_vector_is_a_ket_not_a_matrix() {
    let mut resolver = RepresentationResolver::default();
    let state = Operator::new("FockStateVector", [0, 1]).with_param(array![0.5, 0.25].into_dyn());
    assert_eq!(resolve(&mut resolver, state.clone(), 0), "|0.5⟩");
    assert_eq!(resolve(&mut resolver, state, 1), "|0.25⟩");
    assert!(resolver.matrix_cache().is_empty());
}

#[test]
fn state_preparations_share_the_matrix_cache() {
    let mut resolver = RepresentationResolver::default();
    let amplitudes = array![
        Complex64::new(0.5f64.sqrt(), 0.0),
        Complex64::new(0.0, 0.5f64.sqrt())
    ]
    .into_dyn();
    let density = array![[1.0, 0.0], [0.0, 0.0]].into_dyn();

    let qsv = Operator::new("QubitStateVector", [0]).with_param(amplitudes.clone());
    assert_eq!(resolve(&mut resolver, qsv, 0), "QubitStateVector(M0)");

    let rho = Operator::new("FockDensityMatrix", [1]).with_param(density);
    assert_eq!(resolve(&mut resolver, rho, 1), "FockDensityMatrix(M1)");

    let again = Operator::new("QubitStateVector", [2]).with_param(amplitudes);
    assert_eq!(resolve(&mut resolver, again, 2), "QubitStateVector(M0)");
    assert_eq!(resolver.matrix_cache().len(), 2);
    assert!(resolver.unitary_matrix_cache().is_empty());
}

#[test]
fn polyxp_needs_an_odd_number_of_coefficients() {
    let mut resolver = RepresentationResolver::default();
    let shapes = [
        ArrayD::<f64>::zeros(ndarray::IxDyn(&[4])),
        ArrayD::<f64>::zeros(ndarray::IxDyn(&[4, 4])),
        ArrayD::<f64>::zeros(ndarray::IxDyn(&[3, 5])),
    ];
    for coefficients in shapes {
        let poly = Operator::new("PolyXP", [0]).with_param(coefficients);
        assert!(matches!(
            resolver.op_representation(&poly, 0),
            Err(ResolveError::UnexpectedParameter { index: 0, .. })
        ));
    }
}

#[test]
fn pauli_rotations_and_multi_controlled_x() {
    let mut resolver = RepresentationResolver::default();
    let pauli_rot = Operator::new("PauliRot", [0, 1, 2])
        .with_param(0.25)
        .with_param("XYZ");
    assert_eq!(resolve(&mut resolver, pauli_rot, 1), "RY(0.25)");

    let mcx = Operator::new("MultiControlledX", [0, 1, 2]).with_control_wires([0, 1]);
    assert_eq!(resolve(&mut resolver, mcx.clone(), 0), "C");
    assert_eq!(resolve(&mut resolver, mcx, 2), "X");
}

#[test]
fn polynomial_observables() {
    let mut resolver = RepresentationResolver::default();
    let first_order = Operator::new("PolyXP", [0, 1])
        .with_param(array![0.5, 1.0, -2.5, 0.0, 1.0].into_dyn());
    assert_eq!(resolve(&mut resolver, first_order, 0), "0.5x₀-2.5p₀p₁");

    let mut ascii = RepresentationResolver::new(CharSet::ASCII);
    let second_order = Operator::new("PolyXP", [0]).with_param(
        array![[1.5, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]].into_dyn(),
    );
    assert_eq!(resolve(&mut ascii, second_order, 0), "1.5x_0^2-p_0^2");
}

#[test]
fn inverse_operators_get_a_superscript() {
    let mut resolver = RepresentationResolver::default();
    let s_inv = Operator::new("S", [0]).inv();
    assert_eq!(resolve(&mut resolver, s_inv, 0), "S⁻¹");

    let mut ascii = RepresentationResolver::new(CharSet::ASCII);
    let rx_inv = Operator::new("RX", [0]).with_param(0.1).inv();
    assert_eq!(resolve(&mut ascii, rx_inv, 0), "RX(0.1)^-1");
}

#[test]
fn output_representations() {
    let mut resolver = RepresentationResolver::default();
    let cases = [
        (ReturnType::Expectation, "⟨Z⟩"),
        (ReturnType::Variance, "Var[Z]"),
        (ReturnType::Sample, "Sample[Z]"),
        (ReturnType::Probability, "Probs"),
        (ReturnType::State, "State"),
        (ReturnType::Custom("mid".into()), "mid[Z]"),
    ];
    for (return_type, expected) in cases {
        let obs = Operator::new("PauliZ", [0]).measured(return_type);
        assert_eq!(resolve(&mut resolver, obs, 0), expected);
    }

    let tensor = Tensor::new(vec![
        Operator::new("PauliX", [0]),
        Operator::new("Hermitian", [1]).with_param(array![[1.0, 0.0], [0.0, 1.0]].into_dyn()),
    ])
    .measured(ReturnType::Expectation);
    assert_eq!(
        resolver
            .element_representation(Some(&tensor.into()), 1)
            .unwrap(),
        "⟨X ⊗ H0⟩"
    );

    let mp = MeasurementProcess::new(ReturnType::Variance, Operator::new("NumberOperator", [2]));
    assert_eq!(
        resolver.element_representation(Some(&mp.into()), 2).unwrap(),
        "Var[n]"
    );
}

#[test]
fn empty_and_text_cells() {
    let mut resolver = RepresentationResolver::default();
    assert_eq!(resolver.element_representation(None, 0).unwrap(), "");
    assert_eq!(
        resolver
            .element_representation(Some(&Element::from("╭")), 0)
            .unwrap(),
        "╭"
    );
}

#[test]
fn malformed_operators_are_errors() {
    let mut resolver = RepresentationResolver::default();
    let missing = Operator::new("PauliRot", [0]).with_param(0.1);
    assert_eq!(
        resolver.op_representation(&missing, 0),
        Err(ResolveError::MissingParameter {
            operator: "PauliRot".into(),
            index: 1
        })
    );

    let not_a_matrix = Operator::new("QubitUnitary", [0]).with_param(Param::Float(1.0));
    assert!(matches!(
        resolver.op_representation(&not_a_matrix, 0),
        Err(ResolveError::UnexpectedParameter { index: 0, .. })
    ));
    assert!(resolver.unitary_matrix_cache().is_empty());
}

#[test]
fn text_drawing() {
    let operations = Grid::from_elements(
        [
            Element::from(Operator::new("Hadamard", [0])),
            Element::from(Operator::new("CNOT", [0, 1])),
        ],
        2,
    )
    .unwrap();
    let observables = Grid::from_elements(
        [
            Element::from(Operator::new("PauliZ", [0]).measured(ReturnType::Expectation)),
            Element::from(Operator::new("PauliZ", [1]).measured(ReturnType::Expectation)),
        ],
        2,
    )
    .unwrap();

    let mut drawer = TextDrawer::default();
    let drawing = drawer.draw(&operations, &observables).unwrap();
    assert_eq!(
        drawing,
        " 0: ──H──╭C──┤ ⟨Z⟩ \n 1: ─────╰X──┤ ⟨Z⟩ \n"
    );
}

#[test]
fn text_drawing_spanned_wires_and_labels() {
    let operations = Grid::from_elements(
        [
            Element::from(Operator::new("RX", [1]).with_param(0.1)),
            Element::from(Operator::new("CZ", [0, 2])),
        ],
        3,
    )
    .unwrap();
    let observables = Grid::from_elements(
        [Element::from(MeasurementProcess::basis(ReturnType::Sample, [2]))],
        3,
    )
    .unwrap();

    let mut drawer = TextDrawer::new(CharSet::ASCII).with_wire_labels(["a", "b", "cc"]);
    let drawing = drawer.draw(&operations, &observables).unwrap();
    let lines: Vec<&str> = drawing.lines().collect();
    assert_eq!(lines[0], "  a: -----------+C--                ");
    assert_eq!(lines[1], "  b: --RX(0.1)--|---                ");
    assert_eq!(lines[2], " cc: -----------+Z--| Sample[basis] ");
}
