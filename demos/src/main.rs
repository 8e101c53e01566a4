// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `kiosk_fit`: compute the map transform a kiosk would show.
//!
//! Reads a JSON floor plan, optionally selects a destination or a floor, and
//! prints the pan/zoom to apply to the map as JSON on stdout. Logs go to
//! stderr; set `RUST_LOG=debug` for the intermediate state.

mod plan;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use kurbo::Rect;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use wayfinder_view::{ClampMode, MapView};

use crate::plan::FloorPlan;

#[derive(Parser, Debug)]
#[command(name = "kiosk_fit")]
#[command(about = "Compute the map pan/zoom for a wayfinding kiosk", long_about = None)]
struct Args {
    /// Path to the floor plan JSON
    #[arg(long, value_name = "PATH")]
    plan: PathBuf,

    /// Place id to navigate to
    #[arg(short, long)]
    destination: Option<String>,

    /// Floor to display (after selecting the destination, if any)
    #[arg(short, long)]
    floor: Option<String>,

    /// Override the view width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Override the view height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Override the padding around fitted points, in floor-plan units
    #[arg(long)]
    padding: Option<f64>,

    /// Override the zoom cap
    #[arg(long)]
    max_scale: Option<f64>,

    /// Let the result leave the floor plan entirely
    #[arg(long)]
    no_clamp: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize, Debug)]
struct Output {
    floor: String,
    destination: Option<String>,
    position_x: f64,
    position_y: f64,
    scale: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let text = std::fs::read_to_string(&args.plan)
        .with_context(|| format!("failed to read {}", args.plan.display()))?;
    let mut plan = FloorPlan::from_json(&text)?;
    apply_overrides(&mut plan, &args);
    plan.validate()?;
    tracing::debug!(
        view = ?plan.view,
        padding = plan.padding,
        max_scale = plan.max_scale,
        "loaded floor plan"
    );

    let mut session = plan.session()?;
    // Single-shot run: the session clock starts and stays at zero.
    let now = 0;

    if let Some(id) = &args.destination {
        let place = plan
            .place(id)
            .ok_or_else(|| anyhow!("no place with id {id:?}"))?;
        session.select_destination(place.destination(), now)?;
        tracing::info!(place = %id, floor = %place.spot.floor, "destination selected");
    }
    if let Some(floor) = &args.floor {
        let changed = session.switch_floor(floor.clone(), now)?;
        tracing::debug!(%floor, changed, "floor switched");
    }

    let floor = session.current_floor().clone();
    let size = plan.view_size();
    let mut view = MapView::new(Rect::new(0.0, 0.0, size.width, size.height));
    if args.no_clamp {
        view.set_clamp_mode(ClampMode::None);
    }
    view.set_floor_bounds(plan.floor_bounds(&floor));

    match session.focus_transform() {
        Some(fit) => {
            view.apply_fit(fit);
            if view.transform() != fit {
                tracing::info!(?fit, applied = ?view.transform(), "fit adjusted by view clamping");
            }
        }
        None => {
            tracing::warn!(%floor, "nothing to frame on this floor, showing whole floor");
            view.fit_floor(plan.fit_params());
        }
    }

    let applied = view.transform();
    let output = Output {
        floor,
        destination: session.destination().map(|d| d.id.clone()),
        position_x: applied.position.x,
        position_y: applied.position.y,
        scale: applied.scale,
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}

fn apply_overrides(plan: &mut FloorPlan, args: &Args) {
    if let Some(width) = args.width {
        plan.view.width = width;
    }
    if let Some(height) = args.height {
        plan.view.height = height;
    }
    if let Some(padding) = args.padding {
        plan.padding = padding;
    }
    if let Some(max_scale) = args.max_scale {
        plan.max_scale = max_scale;
    }
}
