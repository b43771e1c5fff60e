//! Vietnamese lunisolar calendar (âm lịch).
//!
//! Months begin on the local calendar day of a new moon. The month
//! containing the winter solstice is month 11, and it anchors the numbering
//! of the whole lunar year. A year with thirteen lunations between
//! consecutive month-11 new moons inserts a leap month: the first lunation
//! after the anchor that contains no principal solar term.
//!
//! All conversions take the timezone offset in hours as an explicit
//! parameter; Vietnam uses `7.0`.

use thiserror::Error;

use crate::date::Date;

pub mod ephemeris;
pub mod fmt;

use ephemeris::{LUNATION_EPOCH, SYNODIC_MONTH};

/// A date in the Vietnamese lunisolar calendar.
///
/// `day` is in `1..=30` (the actual upper bound is the length of the
/// specific lunation, see [`month_length`]), `month` in `1..=12`. `leap`
/// marks the inserted leap month, which shares its number with the
/// preceding month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub leap: bool,
}

impl LunarDate {
    /// Converts the lunar date back to a [`Date`].
    ///
    /// See [`lunar_to_solar`].
    pub fn to_solar(&self, time_zone: f64) -> Result<Date, LunarDateError> {
        lunar_to_solar(*self, time_zone)
    }
}

/// Indicates a lunar date that does not name a real month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum LunarDateError {
    #[error("month {0} not in 1..=12")]
    MonthOutOfRange(u32),
    #[error("month {month} is not the leap month of lunar year {year}")]
    NotALeapMonth { month: u32, year: i32 },
}

/// Number of whole lunations between two new-moon days.
fn lunations_between(from: i32, to: i32) -> i32 {
    (f64::from(to - from) / SYNODIC_MONTH).round() as i32
}

/// Returns the new-moon day (as a JDN) beginning the lunar month that
/// contains the winter solstice of the solar year `year`, i.e. lunar
/// month 11.
pub fn month11_new_moon(year: i32, time_zone: f64) -> i32 {
    let off = Date::from_ymd(year, 12, 31).jdn() - LUNATION_EPOCH.floor() as i32;
    let k = (f64::from(off) / SYNODIC_MONTH).floor() as i32;
    let nm = ephemeris::new_moon_day(k, time_zone);
    // a sector at or past the winter-solstice term means this lunation
    // already belongs to month 12, so step back one
    if ephemeris::sun_longitude_sector(nm, time_zone) >= 9 {
        ephemeris::new_moon_day(k - 1, time_zone)
    } else {
        nm
    }
}

/// Finds the offset in lunations, counted from the month-11 new moon `a11`,
/// of the leap month: the first following lunation whose starting solar-term
/// sector equals the previous lunation's, i.e. that contains no principal
/// term.
///
/// Only meaningful when the lunar year starting at `a11` actually has
/// thirteen lunations. The scan is bounded at 14 steps.
fn leap_month_offset(a11: i32, time_zone: f64) -> i32 {
    let k = ((f64::from(a11) - LUNATION_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i32;
    let mut i = 1;
    let mut arc =
        ephemeris::sun_longitude_sector(ephemeris::new_moon_day(k + i, time_zone), time_zone);
    loop {
        let last = arc;
        i += 1;
        arc = ephemeris::sun_longitude_sector(ephemeris::new_moon_day(k + i, time_zone), time_zone);
        if arc == last || i == 14 {
            break;
        }
    }
    i - 1
}

/// Converts a civil date to the corresponding Vietnamese lunar date.
///
/// `time_zone` is the offset in hours ahead of UTC used to assign
/// astronomical instants to calendar days; use `7.0` for Vietnam.
///
/// # Example
///
/// ```
/// use amlich::{solar_to_lunar, LunarDate};
///
/// let tet = solar_to_lunar(10, 2, 2024, 7.0);
/// assert_eq!(
///     LunarDate { day: 1, month: 1, year: 2024, leap: false },
///     tet,
/// );
/// ```
pub fn solar_to_lunar(day: i32, month: i32, year: i32, time_zone: f64) -> LunarDate {
    let jd = Date::from_ymd(year, month, day).jdn();
    // the estimate can overshoot by one lunation; one step back is enough
    let k = ((f64::from(jd) - LUNATION_EPOCH) / SYNODIC_MONTH).floor() as i32;
    let mut month_start = ephemeris::new_moon_day(k + 1, time_zone);
    if month_start > jd {
        month_start = ephemeris::new_moon_day(k, time_zone);
    }
    let lunar_day = (jd - month_start + 1) as u32;

    // a11/b11: month-11 new moons of the lunar year containing this
    // lunation and of the following one
    let mut a11 = month11_new_moon(year, time_zone);
    let b11;
    let mut lunar_year;
    if a11 >= month_start {
        lunar_year = year;
        b11 = a11;
        a11 = month11_new_moon(year - 1, time_zone);
    } else {
        lunar_year = year + 1;
        b11 = month11_new_moon(year + 1, time_zone);
    }

    let diff = lunations_between(a11, month_start);
    let mut lunar_month = diff + 11;
    let mut leap = false;
    if lunations_between(a11, b11) == 13 {
        let leap_off = leap_month_offset(a11, time_zone);
        if diff >= leap_off {
            lunar_month = diff + 10;
            if diff == leap_off {
                leap = true;
            }
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    // months 11 and 12 can fall in January of the next solar year but still
    // belong to the previous lunar year's numbering
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }
    LunarDate {
        day: lunar_day,
        month: lunar_month as u32,
        year: lunar_year,
        leap,
    }
}

/// Converts a Vietnamese lunar date to the civil [`Date`] its first hour
/// falls on.
///
/// The day number is not validated against the month's length; a day past
/// the end of the month lands in the following month, consistent with the
/// crate not validating civil input either.
///
/// # Example
///
/// ```
/// use amlich::{lunar_to_solar, LunarDate};
///
/// let tet = LunarDate { day: 1, month: 1, year: 2024, leap: false };
/// let date = lunar_to_solar(tet, 7.0).unwrap();
/// assert_eq!("2024-02-10", date.iso());
/// ```
pub fn lunar_to_solar(lunar: LunarDate, time_zone: f64) -> Result<Date, LunarDateError> {
    if !(1..=12).contains(&lunar.month) {
        return Err(LunarDateError::MonthOutOfRange(lunar.month));
    }
    // months 1..=10 belong to the lunar year anchored at the previous solar
    // year's month-11 new moon
    let (a11, b11) = if lunar.month >= 11 {
        (
            month11_new_moon(lunar.year, time_zone),
            month11_new_moon(lunar.year + 1, time_zone),
        )
    } else {
        (
            month11_new_moon(lunar.year - 1, time_zone),
            month11_new_moon(lunar.year, time_zone),
        )
    };
    let k = ((f64::from(a11) - LUNATION_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i32;
    let mut off = lunar.month as i32 - 11;
    if off < 0 {
        off += 12;
    }
    if lunations_between(a11, b11) == 13 {
        let leap_off = leap_month_offset(a11, time_zone);
        let leap_month = (leap_off + 9) % 12 + 1;
        if lunar.leap && lunar.month as i32 != leap_month {
            return Err(LunarDateError::NotALeapMonth {
                month: lunar.month,
                year: lunar.year,
            });
        }
        if lunar.leap || off >= leap_off {
            off += 1;
        }
    } else if lunar.leap {
        return Err(LunarDateError::NotALeapMonth {
            month: lunar.month,
            year: lunar.year,
        });
    }
    let month_start = ephemeris::new_moon_day(k + off, time_zone);
    Ok(Date::from_jdn(month_start + lunar.day as i32 - 1))
}

/// Returns the number of days (29 or 30) in the given lunar month.
pub fn month_length(
    month: u32,
    year: i32,
    leap: bool,
    time_zone: f64,
) -> Result<u32, LunarDateError> {
    let start = lunar_to_solar(
        LunarDate {
            day: 1,
            month,
            year,
            leap,
        },
        time_zone,
    )?;
    let k = ((f64::from(start.jdn()) - LUNATION_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i32;
    let next = ephemeris::new_moon_day(k + 1, time_zone);
    Ok((next - start.jdn()) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TZ: f64 = 7.0;

    #[test]
    fn month11_anchors() {
        for (year, (y, m, d)) in [
            (1999, (1999, 12, 8)),
            (2000, (2000, 11, 26)),
            (2023, (2023, 12, 13)),
            (2024, (2024, 12, 1)),
        ] {
            assert_eq!(
                Date::from_ymd(y, m, d).jdn(),
                month11_new_moon(year, TZ),
                "month 11 of {year}"
            );
        }
    }

    #[test]
    fn tet_dates() {
        // lunar new year, per published calendars
        for ((d, m, y), lunar_year) in [
            ((25, 1, 2020), 2020),
            ((12, 2, 2021), 2021),
            ((1, 2, 2022), 2022),
            ((22, 1, 2023), 2023),
            ((10, 2, 2024), 2024),
            ((29, 1, 2025), 2025),
        ] {
            assert_eq!(
                LunarDate {
                    day: 1,
                    month: 1,
                    year: lunar_year,
                    leap: false
                },
                solar_to_lunar(d, m, y, TZ),
                "Tết {lunar_year}"
            );
        }
    }

    #[test]
    fn known_dates() {
        let data = [
            ((1, 1, 2000), (25, 11, 1999, false)),
            ((1, 1, 2017), (4, 12, 2016, false)),
            ((14, 4, 2024), (6, 3, 2024, false)),
        ];
        for ((d, m, y), (ld, lm, ly, leap)) in data {
            assert_eq!(
                LunarDate {
                    day: ld,
                    month: lm,
                    year: ly,
                    leap
                },
                solar_to_lunar(d, m, y, TZ),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn leap_month_starts() {
        // leap month 4 of 2020 began May 23; leap month 2 of 2023 began
        // March 22; leap month 6 of 2025 began July 25
        for ((d, m, y), (lm, ly)) in [
            ((23, 5, 2020), (4, 2020)),
            ((22, 3, 2023), (2, 2023)),
            ((25, 7, 2025), (6, 2025)),
        ] {
            assert_eq!(
                LunarDate {
                    day: 1,
                    month: lm,
                    year: ly,
                    leap: true
                },
                solar_to_lunar(d, m, y, TZ),
                "leap month {lm} of {ly}"
            );
        }
        // the common months of the same number precede their leap twins
        assert_eq!(
            LunarDate {
                day: 1,
                month: 2,
                year: 2023,
                leap: false
            },
            solar_to_lunar(20, 2, 2023, TZ),
        );
    }

    #[test]
    fn day_continuity() {
        let first = Date::from_ymd(2019, 1, 1).jdn();
        let last = Date::from_ymd(2026, 12, 31).jdn();
        let mut prev = {
            let (y, m, d) = Date::from_jdn(first - 1).ymd();
            solar_to_lunar(d, m, y, TZ)
        };
        for jdn in first..=last {
            let (y, m, d) = Date::from_jdn(jdn).ymd();
            let cur = solar_to_lunar(d, m, y, TZ);
            if cur.day == 1 {
                assert!(prev.day == 29 || prev.day == 30, "at {y:04}-{m:02}-{d:02}");
            } else {
                assert_eq!(prev.day + 1, cur.day, "at {y:04}-{m:02}-{d:02}");
                assert_eq!(
                    (prev.month, prev.year, prev.leap),
                    (cur.month, cur.year, cur.leap),
                    "at {y:04}-{m:02}-{d:02}"
                );
            }
            prev = cur;
        }
    }

    #[test]
    fn leap_month_unique() {
        // walk lunar year 2023 (Tết to the eve of Tết 2024) and collect the
        // months flagged leap
        let first = Date::from_ymd(2023, 1, 22).jdn();
        let last = Date::from_ymd(2024, 2, 9).jdn();
        let mut leap_months = std::collections::HashSet::new();
        let mut month_starts = 0;
        for jdn in first..=last {
            let (y, m, d) = Date::from_jdn(jdn).ymd();
            let lunar = solar_to_lunar(d, m, y, TZ);
            assert_eq!(2023, lunar.year, "at {y:04}-{m:02}-{d:02}");
            if lunar.leap {
                leap_months.insert(lunar.month);
            }
            if lunar.day == 1 {
                month_starts += 1;
            }
        }
        assert_eq!(1, leap_months.len());
        assert!(leap_months.contains(&2));
        assert_eq!(13, month_starts);
    }

    #[test]
    fn solar_round_trip() {
        let first = Date::from_ymd(2020, 1, 1).jdn();
        let last = Date::from_ymd(2025, 12, 31).jdn();
        for jdn in first..=last {
            let date = Date::from_jdn(jdn);
            let (y, m, d) = date.ymd();
            let lunar = solar_to_lunar(d, m, y, TZ);
            assert_eq!(Ok(date), lunar.to_solar(TZ), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn invalid_leap_months() {
        // 2023's leap month is 2, and 2022 has no leap month at all
        let lunar = LunarDate {
            day: 1,
            month: 3,
            year: 2023,
            leap: true,
        };
        assert_eq!(
            Err(LunarDateError::NotALeapMonth {
                month: 3,
                year: 2023
            }),
            lunar_to_solar(lunar, TZ)
        );
        let lunar = LunarDate {
            day: 1,
            month: 1,
            year: 2022,
            leap: true,
        };
        assert_eq!(
            Err(LunarDateError::NotALeapMonth {
                month: 1,
                year: 2022
            }),
            lunar_to_solar(lunar, TZ)
        );
        let lunar = LunarDate {
            day: 1,
            month: 13,
            year: 2023,
            leap: false,
        };
        assert_eq!(
            Err(LunarDateError::MonthOutOfRange(13)),
            lunar_to_solar(lunar, TZ)
        );
    }

    #[test]
    fn month_lengths() {
        // month 1 of 2024 ran February 10 through March 9
        assert_eq!(Ok(29), month_length(1, 2024, false, TZ));
        // month 11 of 1999 ran December 8 through January 6
        assert_eq!(Ok(30), month_length(11, 1999, false, TZ));
        for month in 1..=12 {
            let len = month_length(month, 2024, false, TZ).unwrap();
            assert!(len == 29 || len == 30, "month {month}");
        }
    }
}
