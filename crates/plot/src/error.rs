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

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("layer {layer} is outside of the {n_layers} layers of the drawing")]
    LayerOutOfRange { layer: usize, n_layers: usize },
    #[error("wire {wire} is outside of the {n_wires} wires of the drawing")]
    WireOutOfRange { wire: usize, n_wires: usize },
    #[error("{0} needs at least one wire")]
    EmptyWires(&'static str),
    #[error("{primitive} needs at least {required} wires, but got {found}")]
    NotEnoughWires {
        primitive: &'static str,
        required: usize,
        found: usize,
    },
    #[error("{primitive} got wire {wire} more than once")]
    DuplicateWires { primitive: &'static str, wire: usize },
    #[error("got {labels} labels for a drawing with {n_wires} wires")]
    TooManyLabels { labels: usize, n_wires: usize },
    #[error("rendering failed: {0}")]
    Render(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convert a backend failure into a [DrawError].  Backend error types differ per backend, so
/// only the message is kept.
pub(crate) fn render_error<E>(err: DrawingAreaErrorKind<E>) -> DrawError
where
    E: std::error::Error + Send + Sync,
{
    DrawError::Render(err.to_string())
}
