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

use std::path::Path;

use itertools::Itertools;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::drawer::PlotDrawer;
use crate::error::{render_error, DrawError};
use crate::shapes::{Shape, TextRotation};

const ARC_SEGMENTS: usize = 32;

impl PlotDrawer {
    /// Paint every recorded shape onto `area`, lowest `zorder` first.  Shapes sharing a `zorder`
    /// keep the order they were drawn in.
    pub fn draw_on<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), DrawError> {
        let style = self.style();
        area.fill(&style.background).map_err(render_error)?;

        let stroke = style.edge_color.stroke_width(style.line_width);
        let fill = style.face_color.filled();
        let solid = style.edge_color.filled();
        let font_px = style.font_pixels();

        for placed in self.shapes().iter().sorted_by_key(|placed| placed.zorder) {
            match &placed.shape {
                Shape::Line { start, end } => {
                    let path = vec![self.to_pixel(*start), self.to_pixel(*end)];
                    area.draw(&PathElement::new(path, stroke)).map_err(render_error)?;
                }
                Shape::Rectangle {
                    corner,
                    width,
                    height,
                } => {
                    let corners = [
                        self.to_pixel(*corner),
                        self.to_pixel((corner.0 + width, corner.1 + height)),
                    ];
                    area.draw(&Rectangle::new(corners, fill)).map_err(render_error)?;
                    area.draw(&Rectangle::new(corners, stroke)).map_err(render_error)?;
                }
                Shape::Circle {
                    center,
                    radius,
                    filled,
                } => {
                    let center = self.to_pixel(*center);
                    let radius = self.to_pixel_length(*radius);
                    if *filled {
                        area.draw(&Circle::new(center, radius, solid)).map_err(render_error)?;
                    } else {
                        area.draw(&Circle::new(center, radius, fill)).map_err(render_error)?;
                        area.draw(&Circle::new(center, radius, stroke)).map_err(render_error)?;
                    }
                }
                Shape::Arc {
                    center,
                    width,
                    height,
                    theta1,
                    theta2,
                } => {
                    let path = Shape::arc_points(*center, *width, *height, *theta1, *theta2, ARC_SEGMENTS)
                        .into_iter()
                        .map(|point| self.to_pixel(point))
                        .collect::<Vec<_>>();
                    area.draw(&PathElement::new(path, stroke)).map_err(render_error)?;
                }
                Shape::Arrow {
                    start,
                    delta,
                    head_width,
                } => {
                    let [tip, left, right] = Shape::arrow_head(*start, *delta, *head_width);
                    let shaft = vec![self.to_pixel(*start), self.to_pixel(tip)];
                    area.draw(&PathElement::new(shaft, stroke)).map_err(render_error)?;
                    let head = vec![self.to_pixel(tip), self.to_pixel(left), self.to_pixel(right)];
                    area.draw(&Polygon::new(head, solid)).map_err(render_error)?;
                }
                Shape::Text {
                    position,
                    text,
                    rotation,
                } => {
                    let mut font = ("sans-serif", font_px).into_font();
                    if *rotation == TextRotation::Vertical {
                        font = font.transform(FontTransform::Rotate270);
                    }
                    let text_style = TextStyle::from(font)
                        .pos(Pos::new(HPos::Center, VPos::Center))
                        .color(&style.edge_color);
                    area.draw(&Text::new(text.as_str(), self.to_pixel(*position), text_style))
                        .map_err(render_error)?;
                }
            }
        }
        Ok(())
    }

    /// Render the drawing into an RGB buffer of [PlotDrawer::pixel_size], row by row.
    pub fn render_rgb(&self) -> Result<Vec<u8>, DrawError> {
        let (width, height) = self.pixel_size();
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let area = BitMapBackend::with_buffer(buffer.as_mut_slice(), (width, height))
                .into_drawing_area();
            self.draw_on(&area)?;
            area.present().map_err(render_error)?;
        }
        Ok(buffer)
    }

    /// Write the drawing to `path` as a PNG image, creating missing parent directories.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), DrawError> {
        let path = path.as_ref();
        create_parent(path)?;
        let area = BitMapBackend::new(path, self.pixel_size()).into_drawing_area();
        self.draw_on(&area)?;
        area.present().map_err(render_error)?;
        tracing::debug!(path = %path.display(), "saved png");
        Ok(())
    }

    /// Write the drawing to `path` as an SVG document, creating missing parent directories.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), DrawError> {
        let path = path.as_ref();
        create_parent(path)?;
        let area = SVGBackend::new(path, self.pixel_size()).into_drawing_area();
        self.draw_on(&area)?;
        area.present().map_err(render_error)?;
        tracing::debug!(path = %path.display(), "saved svg");
        Ok(())
    }
}

fn create_parent(path: &Path) -> Result<(), DrawError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(std::fs::create_dir_all(parent)?),
        _ => Ok(()),
    }
}
