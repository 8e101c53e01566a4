// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kiosk navigation session.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Size};
use wayfinder_fit::{FitParams, FitTransform, compute_fit};

use crate::idle::{DEFAULT_IDLE_TIMEOUT_MS, IdleTimer};

/// A place the visitor asked to be shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Destination<P, F> {
    /// Application identifier of the place.
    pub id: P,
    /// Floor the place is on.
    pub floor: F,
    /// Location of the place on its floor plan.
    pub location: Point,
}

/// Settings shared by every fit a session computes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Size of the map view the fits are computed for.
    pub view_size: Size,
    /// Padding and zoom cap.
    pub fit: FitParams,
    /// Idle period after which the session resets, in milliseconds.
    pub idle_timeout_ms: u64,
}

impl Default for SessionConfig {
    /// A portrait 1080×1920 kiosk screen, default fit parameters, one minute
    /// idle timeout.
    fn default() -> Self {
        Self {
            view_size: Size::new(1080.0, 1920.0),
            fit: FitParams::default(),
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
        }
    }
}

/// Something the host should react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent<F> {
    /// The visitor walked away; the session went back to its home floor with
    /// no destination. The host should reset its map view.
    Reset {
        /// The kiosk's own floor, now current.
        home_floor: F,
    },
}

/// Errors from session operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError<F> {
    /// The floor is not one of the session's floors.
    UnknownFloor(F),
}

impl<F: fmt::Debug> fmt::Display for SessionError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFloor(floor) => write!(f, "unknown floor {floor:?}"),
        }
    }
}

impl<F: fmt::Debug> core::error::Error for SessionError<F> {}

/// Navigation state of one kiosk.
///
/// `P` identifies places and `F` identifies floors; both are
/// application-defined (strings, database ids, small enums).
///
/// The session decides which locations the map should show:
/// - the kiosk's own location while its floor is displayed,
/// - the selected destination while its floor is displayed.
///
/// [`KioskSession::focus_transform`] turns that into a [`FitTransform`].
/// Every change of floor or destination increments [`KioskSession::revision`],
/// so hosts can cheaply tell whether to refit.
#[derive(Clone, Debug)]
pub struct KioskSession<P, F> {
    floors: Vec<F>,
    home_floor: F,
    kiosk_location: Point,
    current_floor: F,
    destination: Option<Destination<P, F>>,
    config: SessionConfig,
    idle: IdleTimer,
    revision: u64,
}

impl<P, F> KioskSession<P, F>
where
    P: Clone + PartialEq,
    F: Clone + PartialEq,
{
    /// Creates a session for a kiosk standing at `kiosk_location` on
    /// `home_floor`.
    ///
    /// Fails with [`SessionError::UnknownFloor`] if `home_floor` is not in
    /// `floors`.
    pub fn new(
        floors: Vec<F>,
        home_floor: F,
        kiosk_location: Point,
        config: SessionConfig,
    ) -> Result<Self, SessionError<F>> {
        if !floors.contains(&home_floor) {
            return Err(SessionError::UnknownFloor(home_floor));
        }
        Ok(Self {
            floors,
            current_floor: home_floor.clone(),
            home_floor,
            kiosk_location,
            destination: None,
            idle: IdleTimer::new(config.idle_timeout_ms),
            config,
            revision: 0,
        })
    }

    /// All floors, in the order given at construction.
    #[must_use]
    pub fn floors(&self) -> &[F] {
        &self.floors
    }

    /// The kiosk's own floor.
    #[must_use]
    pub fn home_floor(&self) -> &F {
        &self.home_floor
    }

    /// The kiosk's location on its home floor.
    #[must_use]
    pub fn kiosk_location(&self) -> Point {
        self.kiosk_location
    }

    /// The floor currently displayed.
    #[must_use]
    pub fn current_floor(&self) -> &F {
        &self.current_floor
    }

    /// The selected destination, if any.
    #[must_use]
    pub fn destination(&self) -> Option<&Destination<P, F>> {
        self.destination.as_ref()
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Updates the view size used for fitting, e.g. after a rotation.
    pub fn set_view_size(&mut self, size: Size) {
        self.config.view_size = size;
    }

    /// Monotonic change counter for floor and destination state.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The inactivity timer.
    #[must_use]
    pub fn idle(&self) -> &IdleTimer {
        &self.idle
    }

    /// Records user activity that does not change navigation state.
    pub fn record_activity(&mut self, now: u64) {
        self.idle.touch(now);
    }

    /// Displays `floor`. Returns whether the displayed floor changed.
    pub fn switch_floor(&mut self, floor: F, now: u64) -> Result<bool, SessionError<F>> {
        self.check_floor(&floor)?;
        self.idle.touch(now);
        if self.current_floor == floor {
            return Ok(false);
        }
        self.current_floor = floor;
        self.bump();
        Ok(true)
    }

    /// Selects a destination and displays its floor.
    pub fn select_destination(
        &mut self,
        destination: Destination<P, F>,
        now: u64,
    ) -> Result<(), SessionError<F>> {
        self.check_floor(&destination.floor)?;
        self.idle.touch(now);
        if self.destination.as_ref() == Some(&destination)
            && self.current_floor == destination.floor
        {
            return Ok(());
        }
        self.current_floor = destination.floor.clone();
        self.destination = Some(destination);
        self.bump();
        Ok(())
    }

    /// Drops the selected destination, keeping the displayed floor.
    pub fn clear_destination(&mut self, now: u64) {
        self.idle.touch(now);
        if self.destination.take().is_some() {
            self.bump();
        }
    }

    /// Returns to the home floor with no destination and disarms the idle
    /// timer.
    pub fn reset(&mut self) {
        self.idle.disarm();
        let changed = self.destination.take().is_some() || self.current_floor != self.home_floor;
        self.current_floor = self.home_floor.clone();
        if changed {
            self.bump();
        }
    }

    /// Checks the inactivity timer, resetting the session if it expired.
    pub fn poll_idle(&mut self, now: u64) -> Option<SessionEvent<F>> {
        if !self.idle.poll(now) {
            return None;
        }
        self.reset();
        Some(SessionEvent::Reset {
            home_floor: self.home_floor.clone(),
        })
    }

    /// The pan and zoom that frame what matters on the displayed floor.
    ///
    /// On the home floor with a destination on the same floor, both the kiosk
    /// and the destination are fitted. With only one of them on the displayed
    /// floor, that location is framed alone (the padding sets the zoom). With
    /// neither, returns `None` and the host keeps its current view.
    #[must_use]
    pub fn focus_transform(&self) -> Option<FitTransform> {
        let kiosk = (self.current_floor == self.home_floor).then_some(self.kiosk_location);
        let target = self
            .destination
            .as_ref()
            .filter(|d| d.floor == self.current_floor)
            .map(|d| d.location);
        let (a, b) = match (kiosk, target) {
            (Some(a), Some(b)) => (a, b),
            (Some(p), None) | (None, Some(p)) => (p, p),
            (None, None) => return None,
        };
        Some(compute_fit(a, b, self.config.view_size, self.config.fit))
    }

    fn check_floor(&self, floor: &F) -> Result<(), SessionError<F>> {
        if self.floors.contains(floor) {
            Ok(())
        } else {
            Err(SessionError::UnknownFloor(floor.clone()))
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
