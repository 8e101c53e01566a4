// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wayfinder Session: the navigation state of a wayfinding kiosk.
//!
//! A kiosk stands at a fixed spot on one floor of a building. Visitors pick a
//! destination, flip between floors, and then walk away. This crate models
//! that lifecycle:
//!
//! - [`KioskSession`]: displayed floor, selected destination, and which
//!   locations to frame on the map ([`KioskSession::focus_transform`]).
//! - [`IdleTimer`]: host-driven inactivity timer; when it expires the session
//!   resets to the kiosk's home floor ([`KioskSession::poll_idle`]).
//!
//! Like the rest of Wayfinder, nothing here renders, performs I/O, or reads a
//! clock. Hosts feed in timestamps (milliseconds from any monotonic source)
//! and react to the returned [`SessionEvent`]s.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use wayfinder_session::{Destination, KioskSession, SessionConfig, SessionEvent};
//!
//! let config = SessionConfig {
//!     view_size: Size::new(800.0, 600.0),
//!     ..SessionConfig::default()
//! };
//! let mut session =
//!     KioskSession::new(vec!["L1", "L2"], "L1", Point::new(0.0, 0.0), config).unwrap();
//!
//! session
//!     .select_destination(
//!         Destination { id: 42_u32, floor: "L1", location: Point::new(100.0, 200.0) },
//!         1_000,
//!     )
//!     .unwrap();
//! let fit = session.focus_transform().unwrap();
//! assert_eq!(fit.scale, 1.5);
//!
//! // A minute without touches brings the kiosk back home.
//! assert_eq!(session.poll_idle(30_000), None);
//! assert_eq!(session.poll_idle(61_000), Some(SessionEvent::Reset { home_floor: "L1" }));
//! assert!(session.destination().is_none());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod idle;
mod session;

pub use idle::{DEFAULT_IDLE_TIMEOUT_MS, IdleTimer};
pub use session::{Destination, KioskSession, SessionConfig, SessionError, SessionEvent};
