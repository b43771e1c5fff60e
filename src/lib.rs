//! Utilities for converting between dates in different calendars.
//!
//! This crate converts Gregorian civil dates into the Vietnamese lunisolar
//! calendar (âm lịch), computing new moons and the sun's ecliptic longitude
//! with truncated astronomical series instead of pre-tabulated data, and
//! derives the Can-Chi (sexagenary) names for years, months and days.
//!
//! The timezone offset is an explicit parameter on every conversion, so the
//! same code serves Vietnam (`7.0`) or any other offset, and every function
//! is pure and safe to call from any thread.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use amlich::Date;
//!
//! let date = Date::from_ymd(2000, 1, 1);
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Vietnamese lunisolar calendar:
//!
//! ```
//! use amlich::{solar_to_lunar, LunarDate};
//!
//! let lunar = solar_to_lunar(1, 1, 2000, 7.0);
//!
//! assert_eq!(
//!     LunarDate { day: 25, month: 11, year: 1999, leap: false },
//!     lunar,
//! );
//! ```
//!
//! Can-Chi names and lucky hours:
//!
//! ```
//! use amlich::{lunar::fmt, Date};
//!
//! let jdn = Date::from_ymd(2024, 2, 10).jdn();
//! assert_eq!("Giáp Thìn", fmt::can_chi_year(2024));
//! assert_eq!("Giáp Thìn", fmt::can_chi_day(jdn)); // Tết 2024 opened on a Giáp Thìn day
//! ```
//!
//! # Accuracy
//!
//! The new-moon and solar-longitude series are low-precision truncations;
//! they are commonly trusted for roughly 1800–2200 and degrade gracefully
//! outside that range.

pub mod date;
pub mod lunar;

pub use date::Date;
pub use lunar::{LunarDate, LunarDateError, lunar_to_solar, month_length, solar_to_lunar};
