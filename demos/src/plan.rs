// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON floor-plan description for the kiosk driver.

use anyhow::{Context, Result, bail};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use wayfinder_fit::{DEFAULT_MAX_SCALE, DEFAULT_PADDING, FitParams, try_compute_fit};
use wayfinder_session::{DEFAULT_IDLE_TIMEOUT_MS, Destination, KioskSession, SessionConfig};

/// Map view size in pixels.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub(crate) struct ViewSpec {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// One floor and the extent of its floor-plan image.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub(crate) struct FloorSpec {
    pub(crate) id: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

/// A location on a floor.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub(crate) struct Spot {
    pub(crate) floor: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
}

/// A named destination.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub(crate) struct PlaceSpec {
    pub(crate) id: String,
    #[serde(flatten)]
    pub(crate) spot: Spot,
}

/// Everything the kiosk needs to know about the building it stands in.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub(crate) struct FloorPlan {
    pub(crate) view: ViewSpec,
    #[serde(default = "default_padding")]
    pub(crate) padding: f64,
    #[serde(default = "default_max_scale")]
    pub(crate) max_scale: f64,
    #[serde(default = "default_idle_timeout_ms")]
    pub(crate) idle_timeout_ms: u64,
    pub(crate) kiosk: Spot,
    pub(crate) floors: Vec<FloorSpec>,
    #[serde(default)]
    pub(crate) places: Vec<PlaceSpec>,
}

fn default_padding() -> f64 {
    DEFAULT_PADDING
}

fn default_max_scale() -> f64 {
    DEFAULT_MAX_SCALE
}

fn default_idle_timeout_ms() -> u64 {
    DEFAULT_IDLE_TIMEOUT_MS
}

impl FloorPlan {
    /// Parses a plan from JSON text.
    pub(crate) fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("malformed floor plan")
    }

    pub(crate) fn view_size(&self) -> Size {
        Size::new(self.view.width, self.view.height)
    }

    pub(crate) fn fit_params(&self) -> FitParams {
        FitParams::new(self.padding, self.max_scale)
    }

    /// Checks the settings fit computations rely on.
    ///
    /// Framing the kiosk alone is the tightest case the session produces, so
    /// if that fit is well defined every other one is too.
    pub(crate) fn validate(&self) -> Result<()> {
        let kiosk = Point::new(self.kiosk.x, self.kiosk.y);
        try_compute_fit(kiosk, kiosk, self.view_size(), self.fit_params())
            .context("floor plan settings cannot produce a fit")?;
        if self.floors.is_empty() {
            bail!("floor plan lists no floors");
        }
        Ok(())
    }

    /// Extent of a floor's plan, if the floor exists.
    pub(crate) fn floor_bounds(&self, floor: &str) -> Option<Rect> {
        self.floors
            .iter()
            .find(|f| f.id == floor)
            .map(|f| Rect::new(0.0, 0.0, f.width, f.height))
    }

    pub(crate) fn place(&self, id: &str) -> Option<&PlaceSpec> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Builds a fresh kiosk session for this plan.
    pub(crate) fn session(&self) -> Result<KioskSession<String, String>> {
        let config = SessionConfig {
            view_size: self.view_size(),
            fit: self.fit_params(),
            idle_timeout_ms: self.idle_timeout_ms,
        };
        let floors = self.floors.iter().map(|f| f.id.clone()).collect();
        let session = KioskSession::new(
            floors,
            self.kiosk.floor.clone(),
            Point::new(self.kiosk.x, self.kiosk.y),
            config,
        )
        .context("kiosk floor is not part of the plan")?;
        Ok(session)
    }
}

impl PlaceSpec {
    pub(crate) fn destination(&self) -> Destination<String, String> {
        Destination {
            id: self.id.clone(),
            floor: self.spot.floor.clone(),
            location: Point::new(self.spot.x, self.spot.y),
        }
    }
}
