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

use crate::charset::CharSet;
use crate::error::ResolveError;
use crate::grid::{element_range, Grid, Layer};
use crate::resolver::RepresentationResolver;

/// Center `s` in a field of `width` characters, filling with `pad`.  Extra padding goes to the
/// right.
fn pad_string(s: &str, pad: &str, width: usize) -> String {
    let current_width = s.chars().count();
    if current_width >= width {
        return s.to_owned();
    }
    let pad_size = width - current_width;
    let left_pad = pad_size / 2;
    let right_pad = pad_size - left_pad;
    format!("{}{}{}", pad.repeat(left_pad), s, pad.repeat(right_pad))
}

fn right_pad_string(s: &str, pad: &str, width: usize) -> String {
    let current_width = s.chars().count();
    if current_width >= width {
        return s.to_owned();
    }
    format!("{}{}", s, pad.repeat(width - current_width))
}

fn left_pad_string(s: &str, pad: &str, width: usize) -> String {
    let current_width = s.chars().count();
    if current_width >= width {
        return s.to_owned();
    }
    format!("{}{}", pad.repeat(width - current_width), s)
}

/// Draws a circuit as text, one line per wire.
///
/// Every cell is resolved through a single [RepresentationResolver], so matrix labels such as
/// `U0` are consistent across the whole drawing.
#[derive(Clone, Debug)]
pub struct TextDrawer {
    resolver: RepresentationResolver,
    wire_labels: Option<Vec<String>>,
}

impl Default for TextDrawer {
    fn default() -> Self {
        Self::new(CharSet::UNICODE)
    }
}

impl TextDrawer {
    pub fn new(charset: CharSet) -> Self {
        TextDrawer {
            resolver: RepresentationResolver::new(charset),
            wire_labels: None,
        }
    }

    /// Use `labels` instead of the wire indices at the start of each line.  Wires without a
    /// label fall back to their index.
    pub fn with_wire_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wire_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn resolver(&self) -> &RepresentationResolver {
        &self.resolver
    }

    fn charset(&self) -> CharSet {
        *self.resolver.charset()
    }

    /// Resolve the cells of one layer, with multi-wire connectors added.
    fn layer_cells(&mut self, layer: &Layer, num_wires: usize) -> Result<Vec<String>, ResolveError> {
        let charset = self.charset();
        let mut cells = Vec::with_capacity(num_wires);
        for wire in 0..num_wires {
            let Some(element) = layer.element_on(wire) else {
                cells.push(String::new());
                continue;
            };
            if !element.wires().contains(wire) {
                cells.push(charset.empty_multi_line_gate_connector.to_owned());
                continue;
            }
            let representation = self.resolver.element_representation(Some(element), wire)?;
            let connector = match element_range(element) {
                Some((min, max)) if min != max => {
                    if wire == min {
                        charset.top_multi_line_gate_connector
                    } else if wire == max {
                        charset.bottom_multi_line_gate_connector
                    } else {
                        charset.middle_multi_line_gate_connector
                    }
                }
                _ => "",
            };
            cells.push(format!("{}{}", connector, representation));
        }
        Ok(cells)
    }

    /// Draw the operations of `operations` followed by the measured outputs of `observables`.
    pub fn draw(&mut self, operations: &Grid, observables: &Grid) -> Result<String, ResolveError> {
        let charset = self.charset();
        let num_wires = operations.num_wires().max(observables.num_wires());

        let labels: Vec<String> = (0..num_wires)
            .map(|wire| {
                self.wire_labels
                    .as_ref()
                    .and_then(|labels| labels.get(wire).cloned())
                    .unwrap_or_else(|| wire.to_string())
            })
            .collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut lines: Vec<String> = labels
            .iter()
            .map(|label| {
                format!(
                    " {}: {}",
                    left_pad_string(label, " ", label_width),
                    charset.wire.repeat(2)
                )
            })
            .collect();

        for layer in operations.layers() {
            let cells = self.layer_cells(layer, num_wires)?;
            let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);
            for (line, cell) in lines.iter_mut().zip(cells) {
                line.push_str(&pad_string(&cell, charset.wire, width));
                line.push_str(&charset.wire.repeat(2));
            }
        }

        for layer in observables.layers() {
            let cells = self.layer_cells(layer, num_wires)?;
            let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);
            for (wire, (line, cell)) in lines.iter_mut().zip(cells).enumerate() {
                let measured = layer.element_on(wire).is_some();
                line.push_str(if measured { charset.measurement } else { " " });
                line.push(' ');
                line.push_str(&right_pad_string(&cell, " ", width));
                line.push(' ');
            }
        }

        tracing::trace!(
            layers = operations.num_layers(),
            outputs = observables.num_layers(),
            wires = num_wires,
            "drew circuit as text"
        );
        Ok(lines.into_iter().map(|line| line + "\n").collect())
    }
}
