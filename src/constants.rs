//! # Constants and type definitions for smatrack
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `smatrack` library.
//!
//! ## Overview
//!
//! - Astronomical constants and unit conversions (AU ↔ km, days ↔ seconds)
//! - Degeneracy thresholds for the two-body element recovery
//! - Core type aliases documenting the unit conventions
//!
//! The orbital-element computation itself is unit-agnostic: any consistent set of
//! (length, time, mass, G) works. The aliases below document the heliocentric
//! convention used by the tests and benches (AU, days, solar masses,
//! G = [`GAUSS_GRAV_SQUARED`]).

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Gaussian gravitational constant k (used in classical orbit dynamics)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², the heliocentric gravitational parameter in AU³/day² per solar mass
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

/// Threshold under which a mass or a separation is treated as zero.
///
/// Matches the degeneracy guard of classical N-body codes: only an exactly (or
/// denormally) vanishing quantity trips it, so physically tiny but valid
/// configurations are still converted to elements.
pub const TINY: f64 = 1e-308;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type Au = f64;
/// Velocity in astronomical units per day
pub type AuPerDay = f64;
/// Duration in days
pub type Day = f64;
