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

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use qdraw_plot::{BoxOptions, PlotDrawer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn save(drawer: &PlotDrawer, dir: &Path, name: &str) -> Result<()> {
    let path: PathBuf = dir.join(format!("{name}.png"));
    drawer
        .save_png(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote example");
    Ok(())
}

fn just_wires() -> PlotDrawer {
    let mut drawer = PlotDrawer::new(1, 2);
    drawer.wires();
    drawer
}

fn labels() -> Result<PlotDrawer> {
    let mut drawer = PlotDrawer::new(1, 2);
    drawer.wires();
    drawer.label(&["a", "b"])?;
    Ok(drawer)
}

fn box_gates() -> Result<PlotDrawer> {
    let mut drawer = PlotDrawer::new(2, 2);
    drawer.wires();
    drawer.box_gate(0, &[0], "Y")?;
    drawer.box_gate_with(
        1,
        &[0, 1],
        "CRy(0.1)",
        BoxOptions {
            rotate_text: true,
            ..BoxOptions::default()
        },
    )?;
    Ok(drawer)
}

fn ctrl() -> Result<PlotDrawer> {
    let mut drawer = PlotDrawer::new(2, 2);
    drawer.wires();
    drawer.ctrl(0, &[0], &[1])?;
    drawer.ctrl(1, &[0, 1], &[])?;
    Ok(drawer)
}

fn cnot() -> Result<PlotDrawer> {
    let mut drawer = PlotDrawer::new(2, 2);
    drawer.wires();
    drawer.cnot(0, &[0, 1])?;
    drawer.cnot(1, &[1, 0])?;
    Ok(drawer)
}

fn target_x() -> Result<PlotDrawer> {
    let mut drawer = PlotDrawer::new(1, 1);
    drawer.wires();
    drawer.target_x(0, 0)?;
    Ok(drawer)
}

fn swap() -> Result<PlotDrawer> {
    let mut drawer = PlotDrawer::new(1, 2);
    drawer.wires();
    drawer.swap(0, [0, 1])?;
    Ok(drawer)
}

fn swap_x() -> Result<PlotDrawer> {
    let mut drawer = PlotDrawer::new(1, 1);
    drawer.wires();
    drawer.swap_x(0, 0)?;
    Ok(drawer)
}

fn measure() -> Result<PlotDrawer> {
    let mut drawer = PlotDrawer::new(1, 1);
    drawer.wires();
    drawer.measure(0, 0)?;
    Ok(drawer)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_target(false))
        .init();

    let dir = Path::new("example_pics");
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    save(&just_wires(), dir, "just_wires")?;
    save(&labels()?, dir, "labels")?;
    save(&box_gates()?, dir, "box_gates")?;
    save(&ctrl()?, dir, "ctrl")?;
    save(&cnot()?, dir, "cnot")?;
    save(&target_x()?, dir, "target_x")?;
    save(&swap()?, dir, "SWAP")?;
    save(&swap_x()?, dir, "swap_x")?;
    save(&measure()?, dir, "measure")?;
    Ok(())
}
