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

//! The minimal operator model consumed by the representation resolver.
//!
//! Only the attributes that influence how an element is displayed are carried: the canonical
//! name, the wires, the data tuple, the inverse flag, explicit control wires and the return
//! type of measured observables.

use std::fmt;

use ndarray::ArrayD;
use num_complex::Complex64;
use smallvec::SmallVec;

/// An ordered list of wire labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wires(SmallVec<[usize; 4]>);

impl Wires {
    pub fn new() -> Self {
        Wires(SmallVec::new())
    }

    /// Position of `wire` within this list.
    pub fn index_of(&self, wire: usize) -> Option<usize> {
        self.0.iter().position(|w| *w == wire)
    }

    pub fn contains(&self, wire: usize) -> bool {
        self.0.contains(&wire)
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for Wires {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Wires(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Wires {
    fn from(wires: [usize; N]) -> Self {
        wires.into_iter().collect()
    }
}

impl From<&[usize]> for Wires {
    fn from(wires: &[usize]) -> Self {
        wires.iter().copied().collect()
    }
}

impl From<Vec<usize>> for Wires {
    fn from(wires: Vec<usize>) -> Self {
        wires.into_iter().collect()
    }
}

impl From<usize> for Wires {
    fn from(wire: usize) -> Self {
        [wire].into()
    }
}

/// A single entry of an operator's data tuple.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    Float(f64),
    Int(i64),
    Str(String),
    /// Occupation numbers or computational basis labels.
    Ints(Vec<i64>),
    Real(ArrayD<f64>),
    Complex(ArrayD<Complex64>),
}

impl Param {
    /// A short description of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Param::Float(_) => "a float",
            Param::Int(_) => "an integer",
            Param::Str(_) => "a string",
            Param::Ints(_) => "a list of integers",
            Param::Real(_) => "a real array",
            Param::Complex(_) => "a complex array",
        }
    }

    /// The array held by this parameter, promoted to complex entries.  Scalars and strings
    /// are not arrays.
    pub fn to_complex_array(&self) -> Option<ArrayD<Complex64>> {
        match self {
            Param::Real(array) => Some(array.mapv(|re| Complex64::new(re, 0.0))),
            Param::Complex(array) => Some(array.clone()),
            Param::Ints(values) => Some(
                ndarray::Array1::from_iter(values.iter().map(|v| Complex64::new(*v as f64, 0.0)))
                    .into_dyn(),
            ),
            _ => None,
        }
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Float(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Str(value.to_owned())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Str(value)
    }
}

impl From<Vec<i64>> for Param {
    fn from(value: Vec<i64>) -> Self {
        Param::Ints(value)
    }
}

impl From<ArrayD<f64>> for Param {
    fn from(value: ArrayD<f64>) -> Self {
        Param::Real(value)
    }
}

impl From<ArrayD<Complex64>> for Param {
    fn from(value: ArrayD<Complex64>) -> Self {
        Param::Complex(value)
    }
}

/// The kind of measurement performed on an observable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReturnType {
    Expectation,
    Variance,
    Sample,
    Probability,
    State,
    /// Any other measurement, identified by its tag.
    Custom(String),
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnType::Expectation => write!(f, "expval"),
            ReturnType::Variance => write!(f, "var"),
            ReturnType::Sample => write!(f, "sample"),
            ReturnType::Probability => write!(f, "probs"),
            ReturnType::State => write!(f, "state"),
            ReturnType::Custom(tag) => write!(f, "{}", tag),
        }
    }
}

/// An operation or observable acting on a set of wires.
#[derive(Clone, Debug, PartialEq)]
pub struct Operator {
    name: String,
    wires: Wires,
    data: Vec<Param>,
    inverse: bool,
    control_wires: Wires,
    return_type: Option<ReturnType>,
}

impl Operator {
    /// Create an operator from its canonical name and the wires it acts on.
    pub fn new<W: Into<Wires>>(name: impl Into<String>, wires: W) -> Self {
        Operator {
            name: name.into(),
            wires: wires.into(),
            data: Vec::new(),
            inverse: false,
            control_wires: Wires::new(),
            return_type: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<Param>) -> Self {
        self.data.push(param.into());
        self
    }

    pub fn with_params<I, P>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Param>,
    {
        self.data.extend(params.into_iter().map(Into::into));
        self
    }

    pub fn inv(mut self) -> Self {
        self.inverse = !self.inverse;
        self
    }

    pub fn with_control_wires<W: Into<Wires>>(mut self, control_wires: W) -> Self {
        self.control_wires = control_wires.into();
        self
    }

    /// Mark this operator as an observable measured with `return_type`.
    pub fn measured(mut self, return_type: ReturnType) -> Self {
        self.return_type = Some(return_type);
        self
    }

    /// The canonical name, without inverse or control decoration.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wires(&self) -> &Wires {
        &self.wires
    }

    pub fn data(&self) -> &[Param] {
        &self.data
    }

    pub fn num_params(&self) -> usize {
        self.data.len()
    }

    pub fn inverse(&self) -> bool {
        self.inverse
    }

    pub fn control_wires(&self) -> &Wires {
        &self.control_wires
    }

    pub fn return_type(&self) -> Option<&ReturnType> {
        self.return_type.as_ref()
    }
}

/// A tensor product of observables.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    obs: Vec<Operator>,
    return_type: Option<ReturnType>,
}

impl Tensor {
    pub fn new(obs: Vec<Operator>) -> Self {
        Tensor {
            obs,
            return_type: None,
        }
    }

    pub fn measured(mut self, return_type: ReturnType) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn obs(&self) -> &[Operator] {
        &self.obs
    }

    /// The union of the constituent wires, in order of first appearance.
    pub fn wires(&self) -> Wires {
        let mut wires = Wires::new();
        for wire in self.obs.iter().flat_map(|ob| ob.wires().iter()) {
            if !wires.contains(wire) {
                wires.0.push(wire);
            }
        }
        wires
    }

    pub fn return_type(&self) -> Option<&ReturnType> {
        self.return_type.as_ref()
    }
}

/// The observable a measurement is taken of.
#[derive(Clone, Debug, PartialEq)]
pub enum Observable {
    Operator(Operator),
    Tensor(Tensor),
}

impl Observable {
    pub fn wires(&self) -> Wires {
        match self {
            Observable::Operator(op) => op.wires().clone(),
            Observable::Tensor(tensor) => tensor.wires(),
        }
    }
}

impl From<Operator> for Observable {
    fn from(op: Operator) -> Self {
        Observable::Operator(op)
    }
}

impl From<Tensor> for Observable {
    fn from(tensor: Tensor) -> Self {
        Observable::Tensor(tensor)
    }
}

/// A measurement of an observable, or a raw measurement in the computational basis when no
/// observable is given.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementProcess {
    return_type: ReturnType,
    obs: Option<Observable>,
    wires: Wires,
}

impl MeasurementProcess {
    pub fn new(return_type: ReturnType, obs: impl Into<Observable>) -> Self {
        let obs = obs.into();
        MeasurementProcess {
            return_type,
            wires: obs.wires(),
            obs: Some(obs),
        }
    }

    /// A measurement in the computational basis of `wires`.
    pub fn basis<W: Into<Wires>>(return_type: ReturnType, wires: W) -> Self {
        MeasurementProcess {
            return_type,
            obs: None,
            wires: wires.into(),
        }
    }

    pub fn return_type(&self) -> &ReturnType {
        &self.return_type
    }

    pub fn obs(&self) -> Option<&Observable> {
        self.obs.as_ref()
    }

    pub fn wires(&self) -> &Wires {
        &self.wires
    }
}

/// The content of a single cell of a circuit grid.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Literal text placed in the diagram as is.
    Text(String),
    Operator(Operator),
    Tensor(Tensor),
    Measurement(MeasurementProcess),
}

impl Element {
    /// The return type of a measured element, if any.
    pub fn return_type(&self) -> Option<&ReturnType> {
        match self {
            Element::Text(_) => None,
            Element::Operator(op) => op.return_type(),
            Element::Tensor(tensor) => tensor.return_type(),
            Element::Measurement(mp) => Some(mp.return_type()),
        }
    }

    /// The wires the element acts on.  Text is not attached to any wire.
    pub fn wires(&self) -> Wires {
        match self {
            Element::Text(_) => Wires::new(),
            Element::Operator(op) => op.wires().clone(),
            Element::Tensor(tensor) => tensor.wires(),
            Element::Measurement(mp) => mp.wires().clone(),
        }
    }
}

impl From<Operator> for Element {
    fn from(op: Operator) -> Self {
        Element::Operator(op)
    }
}

impl From<Tensor> for Element {
    fn from(tensor: Tensor) -> Self {
        Element::Tensor(tensor)
    }
}

impl From<MeasurementProcess> for Element {
    fn from(mp: MeasurementProcess) -> Self {
        Element::Measurement(mp)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::Text(text.to_owned())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::Text(text)
    }
}
