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

/// A point in data coordinates: `(layer, wire)`.
pub type Point = (f64, f64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextRotation {
    #[default]
    Horizontal,
    Vertical,
}

/// A primitive recorded by the drawer, in data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line {
        start: Point,
        end: Point,
    },
    /// Axis-aligned box from `corner` (the smallest layer and wire) spanning `width` layers and
    /// `height` wires.
    Rectangle {
        corner: Point,
        width: f64,
        height: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        filled: bool,
    },
    /// Part of the ellipse of the given size, drawn counterclockwise from `theta1` to `theta2`
    /// (degrees).
    Arc {
        center: Point,
        width: f64,
        height: f64,
        theta1: f64,
        theta2: f64,
    },
    Arrow {
        start: Point,
        delta: Point,
        head_width: f64,
    },
    /// Text centered on `position`.
    Text {
        position: Point,
        text: String,
        rotation: TextRotation,
    },
}

impl Shape {
    /// Sample `segments + 1` points along an arc, from `theta1` to `theta2`.
    pub fn arc_points(
        center: Point,
        width: f64,
        height: f64,
        theta1: f64,
        theta2: f64,
        segments: usize,
    ) -> Vec<Point> {
        let segments = segments.max(1);
        let mut sweep = theta2 - theta1;
        if sweep <= 0.0 {
            sweep += 360.0;
        }
        (0..=segments)
            .map(|step| {
                let theta = (theta1 + sweep * step as f64 / segments as f64).to_radians();
                (
                    center.0 + width / 2.0 * theta.cos(),
                    center.1 + height / 2.0 * theta.sin(),
                )
            })
            .collect()
    }

    /// The three corners of an arrow head: the tip, then the two back corners.  The head is
    /// drawn beyond `start + delta`, so the tip lies one head length past the end of the shaft.
    pub fn arrow_head(start: Point, delta: Point, head_width: f64) -> [Point; 3] {
        let back = (start.0 + delta.0, start.1 + delta.1);
        let length = delta.0.hypot(delta.1);
        if length == 0.0 {
            return [back, back, back];
        }
        let (ux, uy) = (delta.0 / length, delta.1 / length);
        let head_length = 1.5 * head_width;
        let tip = (back.0 + ux * head_length, back.1 + uy * head_length);
        let half = head_width / 2.0;
        [
            tip,
            (back.0 - uy * half, back.1 + ux * half),
            (back.0 + uy * half, back.1 - ux * half),
        ]
    }
}

/// A shape together with its stacking order.  Shapes with a higher `zorder` are drawn on top.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedShape {
    pub zorder: u32,
    pub shape: Shape,
}
