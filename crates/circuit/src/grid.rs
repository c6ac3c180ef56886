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

use std::ops::Index;

use hashbrown::HashSet;
use itertools::{Itertools, MinMaxResult};

use crate::error::ResolveError;
use crate::operators::Element;

/// Calculate the range (inclusive) of wire indices covered by `element`.
pub fn element_range(element: &Element) -> Option<(usize, usize)> {
    match element.wires().iter().minmax() {
        MinMaxResult::MinMax(min, max) => Some((min, max)),
        MinMaxResult::OneElement(idx) => Some((idx, idx)),
        MinMaxResult::NoElements => None,
    }
}

/// A single column of the grid: the elements drawn side by side, with the wire range of each.
#[derive(Clone, Debug, Default)]
pub struct Layer {
    elements: Vec<(Element, (usize, usize))>,
}

impl Layer {
    pub fn elements(&self) -> impl ExactSizeIterator<Item = &Element> + '_ {
        self.elements.iter().map(|(element, _)| element)
    }

    /// The element drawn on `wire` in this layer, either because it acts on the wire or
    /// because its wire range spans it.
    pub fn element_on(&self, wire: usize) -> Option<&Element> {
        self.elements
            .iter()
            .find(|(_, (min, max))| (*min..=*max).contains(&wire))
            .map(|(element, _)| element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A logical 2D arrangement of circuit elements.
///
/// Elements are packed into layers (columns) in order; an element is placed in the current
/// layer as long as its wire range does not overlap the range of an element already there,
/// otherwise a new layer is started.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    layers: Vec<Layer>,
    num_wires: usize,
}

impl Grid {
    pub fn from_elements<I>(elements: I, num_wires: usize) -> Result<Self, ResolveError>
    where
        I: IntoIterator<Item = Element>,
    {
        let mut layers: Vec<Layer> = Vec::new();
        let mut used_wires = HashSet::<usize>::new();
        let mut num_wires = num_wires;

        for (position, element) in elements.into_iter().enumerate() {
            let (min, max) = element_range(&element).ok_or(ResolveError::EmptyElement(position))?;
            num_wires = num_wires.max(max + 1);

            // Check for range overlap
            if layers.is_empty() || (min..=max).any(|idx| used_wires.contains(&idx)) {
                layers.push(Layer::default());
                used_wires.clear();
            }
            used_wires.extend(min..=max);

            if let Some(layer) = layers.last_mut() {
                layer.elements.push((element, (min, max)));
            }
        }

        Ok(Grid { layers, num_wires })
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Index<usize> for Grid {
    type Output = Layer;

    fn index(&self, index: usize) -> &Self::Output {
        &self.layers[index]
    }
}
