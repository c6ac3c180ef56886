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

use itertools::{Itertools, MinMaxResult};

use crate::error::DrawError;
use crate::shapes::{PlacedShape, Point, Shape, TextRotation};
use crate::style::DrawerStyle;

const Z_WIRE: u32 = 1;
const Z_BODY: u32 = 2;
const Z_DETAIL: u32 = 3;
const Z_TOP: u32 = 4;

/// Options of [PlotDrawer::box_gate_with].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxOptions {
    /// Extra width added to the box, split evenly between both sides.
    pub extra_width: f64,
    /// Write the text vertically.
    pub rotate_text: bool,
}

/// Draws circuit diagrams on a grid of layers (horizontal) and wires (vertical).
///
/// Every primitive records shapes in data coordinates, where layer `i` sits at `x = i` and wire
/// `j` at `y = j`.  The axes span `[-2, n_layers + 1]` horizontally and `[-1, n_wires]`
/// vertically, with wire 0 at the top.  Nothing is rasterised until the drawing is saved or
/// rendered, see [PlotDrawer::save_png].
#[derive(Clone, Debug)]
pub struct PlotDrawer {
    n_layers: usize,
    n_wires: usize,
    style: DrawerStyle,
    figsize: (f64, f64),
    shapes: Vec<PlacedShape>,
}

impl PlotDrawer {
    pub fn new(n_layers: usize, n_wires: usize) -> Self {
        Self::with_style(n_layers, n_wires, DrawerStyle::default())
    }

    pub fn with_style(n_layers: usize, n_wires: usize, style: DrawerStyle) -> Self {
        PlotDrawer {
            n_layers,
            n_wires,
            style,
            figsize: (n_layers as f64 + 3.0, n_wires as f64 + 1.0),
            shapes: Vec::new(),
        }
    }

    /// Override the figure size, in inches.
    pub fn with_figsize(mut self, width: f64, height: f64) -> Self {
        self.figsize = (width, height);
        self
    }

    pub fn n_layers(&self) -> usize {
        self.n_layers
    }

    pub fn n_wires(&self) -> usize {
        self.n_wires
    }

    pub fn style(&self) -> &DrawerStyle {
        &self.style
    }

    pub fn figsize(&self) -> (f64, f64) {
        self.figsize
    }

    /// The horizontal and vertical data limits of the axes.  The vertical axis is inverted, so
    /// its first limit is drawn at the top.
    pub fn limits(&self) -> ((f64, f64), (f64, f64)) {
        (
            (-2.0, self.n_layers as f64 + 1.0),
            (-1.0, self.n_wires as f64),
        )
    }

    /// Every recorded shape, in the order it was drawn.
    pub fn shapes(&self) -> &[PlacedShape] {
        &self.shapes
    }

    fn push(&mut self, zorder: u32, shape: Shape) {
        tracing::trace!(zorder, ?shape, "recorded shape");
        self.shapes.push(PlacedShape { zorder, shape });
    }

    fn check_layer(&self, layer: usize) -> Result<(), DrawError> {
        if layer >= self.n_layers {
            return Err(DrawError::LayerOutOfRange {
                layer,
                n_layers: self.n_layers,
            });
        }
        Ok(())
    }

    fn check_wire(&self, wire: usize) -> Result<(), DrawError> {
        if wire >= self.n_wires {
            return Err(DrawError::WireOutOfRange {
                wire,
                n_wires: self.n_wires,
            });
        }
        Ok(())
    }

    /// Validate `wires` and return the lowest and highest of them.
    fn wire_span(&self, primitive: &'static str, wires: &[usize]) -> Result<(f64, f64), DrawError> {
        for wire in wires {
            self.check_wire(*wire)?;
        }
        match wires.iter().minmax() {
            MinMaxResult::MinMax(min, max) => Ok((*min as f64, *max as f64)),
            MinMaxResult::OneElement(wire) => Ok((*wire as f64, *wire as f64)),
            MinMaxResult::NoElements => Err(DrawError::EmptyWires(primitive)),
        }
    }

    /// Draw one horizontal line per wire across all layers.
    pub fn wires(&mut self) {
        let end = self.n_layers as f64;
        for wire in 0..self.n_wires {
            let y = wire as f64;
            self.push(
                Z_WIRE,
                Shape::Line {
                    start: (-1.0, y),
                    end: (end, y),
                },
            );
        }
    }

    /// Write a label in front of each wire, starting with wire 0.
    pub fn label<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<(), DrawError> {
        if labels.len() > self.n_wires {
            return Err(DrawError::TooManyLabels {
                labels: labels.len(),
                n_wires: self.n_wires,
            });
        }
        for (wire, label) in labels.iter().enumerate() {
            self.push(
                Z_DETAIL,
                Shape::Text {
                    position: (-1.5, wire as f64),
                    text: label.as_ref().to_owned(),
                    rotation: TextRotation::Horizontal,
                },
            );
        }
        Ok(())
    }

    /// Draw a box covering `wires` in `layer`, with `text` written in its middle.
    pub fn box_gate(&mut self, layer: usize, wires: &[usize], text: &str) -> Result<(), DrawError> {
        self.box_gate_with(layer, wires, text, BoxOptions::default())
    }

    pub fn box_gate_with(
        &mut self,
        layer: usize,
        wires: &[usize],
        text: &str,
        options: BoxOptions,
    ) -> Result<(), DrawError> {
        self.check_layer(layer)?;
        let (box_min, box_max) = self.wire_span("box_gate", wires)?;
        let box_dx = self.style.box_dx;
        let x = layer as f64;

        self.push(
            Z_BODY,
            Shape::Rectangle {
                corner: (x - box_dx - options.extra_width / 2.0, box_min - box_dx),
                width: 2.0 * box_dx + options.extra_width,
                height: box_max - box_min + 2.0 * box_dx,
            },
        );
        let rotation = if options.rotate_text {
            TextRotation::Vertical
        } else {
            TextRotation::Horizontal
        };
        self.push(
            Z_DETAIL,
            Shape::Text {
                position: (x, (box_min + box_max) / 2.0),
                text: text.to_owned(),
                rotation,
            },
        );
        Ok(())
    }

    /// Draw control dots on `wire_ctrl`, joined by a vertical line that also reaches
    /// `wire_target`.  The target itself is left for the caller to draw.
    pub fn ctrl(
        &mut self,
        layer: usize,
        wire_ctrl: &[usize],
        wire_target: &[usize],
    ) -> Result<(), DrawError> {
        self.check_layer(layer)?;
        let wires_all: Vec<usize> = wire_ctrl.iter().chain(wire_target).copied().collect();
        let (min_wire, max_wire) = self.wire_span("ctrl", &wires_all)?;
        let x = layer as f64;

        self.push(
            Z_BODY,
            Shape::Line {
                start: (x, min_wire),
                end: (x, max_wire),
            },
        );
        for wire in wire_ctrl {
            self.ctrl_circ(x, *wire as f64);
        }
        Ok(())
    }

    fn ctrl_circ(&mut self, x: f64, y: f64) {
        self.push(
            Z_DETAIL,
            Shape::Circle {
                center: (x, y),
                radius: self.style.ctrl_rad,
                filled: true,
            },
        );
    }

    /// Draw a (multi-)controlled NOT.  The last wire is the target, all others are controls.
    pub fn cnot(&mut self, layer: usize, wires: &[usize]) -> Result<(), DrawError> {
        let Some((target, controls)) = wires.split_last().filter(|_| wires.len() >= 2) else {
            return Err(DrawError::NotEnoughWires {
                primitive: "cnot",
                required: 2,
                found: wires.len(),
            });
        };
        self.ctrl(layer, controls, &[*target])?;
        self.target_x(layer, *target)
    }

    /// Draw the circled plus of a NOT target.
    pub fn target_x(&mut self, layer: usize, wire: usize) -> Result<(), DrawError> {
        self.check_layer(layer)?;
        self.check_wire(wire)?;
        let (x, y) = (layer as f64, wire as f64);
        let rad = self.style.circ_rad;

        self.push(
            Z_DETAIL,
            Shape::Circle {
                center: (x, y),
                radius: rad,
                filled: false,
            },
        );
        self.push(
            Z_TOP,
            Shape::Line {
                start: (x, y - rad),
                end: (x, y + rad),
            },
        );
        self.push(
            Z_TOP,
            Shape::Line {
                start: (x - rad, y),
                end: (x + rad, y),
            },
        );
        Ok(())
    }

    /// Draw a SWAP between two wires.
    pub fn swap(&mut self, layer: usize, wires: [usize; 2]) -> Result<(), DrawError> {
        if wires[0] == wires[1] {
            return Err(DrawError::DuplicateWires {
                primitive: "swap",
                wire: wires[0],
            });
        }
        self.check_layer(layer)?;
        let (min_wire, max_wire) = self.wire_span("swap", &wires)?;
        let x = layer as f64;

        self.push(
            Z_BODY,
            Shape::Line {
                start: (x, min_wire),
                end: (x, max_wire),
            },
        );
        for wire in wires {
            self.swap_x(layer, wire)?;
        }
        Ok(())
    }

    /// Draw the cross marking one end of a SWAP.
    pub fn swap_x(&mut self, layer: usize, wire: usize) -> Result<(), DrawError> {
        self.check_layer(layer)?;
        self.check_wire(wire)?;
        let (x, y) = (layer as f64, wire as f64);
        let dx = self.style.swap_dx;

        self.push(
            Z_BODY,
            Shape::Line {
                start: (x - dx, y - dx),
                end: (x + dx, y + dx),
            },
        );
        self.push(
            Z_BODY,
            Shape::Line {
                start: (x - dx, y + dx),
                end: (x + dx, y - dx),
            },
        );
        Ok(())
    }

    /// Draw a measurement meter: a box holding a dial and a needle.
    pub fn measure(&mut self, layer: usize, wire: usize) -> Result<(), DrawError> {
        self.check_layer(layer)?;
        self.check_wire(wire)?;
        let (x, y) = (layer as f64, wire as f64);
        let box_dx = self.style.box_dx;

        self.push(
            Z_BODY,
            Shape::Rectangle {
                corner: (x - box_dx, y - box_dx),
                width: 2.0 * box_dx,
                height: 2.0 * box_dx,
            },
        );
        self.push(
            Z_DETAIL,
            Shape::Arc {
                center: (x, y + box_dx / 8.0),
                width: 1.2 * box_dx,
                height: 1.1 * box_dx,
                theta1: 180.0,
                theta2: 0.0,
            },
        );
        self.push(
            Z_TOP,
            Shape::Arrow {
                start: (x, y + box_dx / 2.0),
                delta: (box_dx / 2.0, -box_dx),
                head_width: box_dx / 4.0,
            },
        );
        Ok(())
    }

    /// Map a point in data coordinates to pixel coordinates of the rendered figure.
    pub fn to_pixel(&self, point: Point) -> (i32, i32) {
        let ((x_min, x_max), (y_min, y_max)) = self.limits();
        let (width, height) = self.pixel_size();
        let px = (point.0 - x_min) / (x_max - x_min) * f64::from(width);
        let py = (point.1 - y_min) / (y_max - y_min) * f64::from(height);
        (px.round() as i32, py.round() as i32)
    }

    /// Convert a length along the horizontal axis to pixels.
    pub fn to_pixel_length(&self, length: f64) -> f64 {
        let ((x_min, x_max), _) = self.limits();
        length / (x_max - x_min) * f64::from(self.pixel_size().0)
    }

    /// The size of the rendered figure in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.style.dpi);
        (
            (self.figsize.0 * dpi).round().max(1.0) as u32,
            (self.figsize.1 * dpi).round().max(1.0) as u32,
        )
    }
}
