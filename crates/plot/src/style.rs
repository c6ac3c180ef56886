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

use plotters::style::{RGBColor, BLACK, WHITE};

/// Sizes and colors used by [crate::PlotDrawer].
///
/// Lengths are in data units, where neighbouring layers and neighbouring wires are one unit
/// apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerStyle {
    /// Half the side of a gate box.
    pub box_dx: f64,
    /// Radius of the circle of a CNOT target.
    pub circ_rad: f64,
    /// Radius of a control dot.
    pub ctrl_rad: f64,
    /// Half the extent of a SWAP cross.
    pub swap_dx: f64,
    /// Font size in points.
    pub font_size: f64,
    /// Pixels per inch of the rendered figure.
    pub dpi: u32,
    /// Stroke width in pixels.
    pub line_width: u32,
    pub edge_color: RGBColor,
    pub face_color: RGBColor,
    pub background: RGBColor,
}

impl Default for DrawerStyle {
    fn default() -> Self {
        DrawerStyle {
            box_dx: 0.4,
            circ_rad: 0.3,
            ctrl_rad: 0.1,
            swap_dx: 0.2,
            font_size: 14.0,
            dpi: 100,
            line_width: 1,
            edge_color: BLACK,
            face_color: WHITE,
            background: WHITE,
        }
    }
}

impl DrawerStyle {
    pub fn box_dx(mut self, box_dx: f64) -> Self {
        self.box_dx = box_dx;
        self
    }

    pub fn circ_rad(mut self, circ_rad: f64) -> Self {
        self.circ_rad = circ_rad;
        self
    }

    pub fn ctrl_rad(mut self, ctrl_rad: f64) -> Self {
        self.ctrl_rad = ctrl_rad;
        self
    }

    pub fn swap_dx(mut self, swap_dx: f64) -> Self {
        self.swap_dx = swap_dx;
        self
    }

    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn edge_color(mut self, color: RGBColor) -> Self {
        self.edge_color = color;
        self
    }

    pub fn face_color(mut self, color: RGBColor) -> Self {
        self.face_color = color;
        self
    }

    pub fn background(mut self, color: RGBColor) -> Self {
        self.background = color;
        self
    }

    /// The font size converted to pixels at this style's resolution.
    pub fn font_pixels(&self) -> f64 {
        self.font_size * f64::from(self.dpi) / 72.0
    }
}
