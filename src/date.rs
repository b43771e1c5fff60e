//! Calendar-independant date.

use std::ops::{Add, Sub};

/// A calendar-independant date, stored as a Julian day number (JDN).
///
/// Civil-calendar conversions switch at the Gregorian reform: dates before
/// October 15, 1582 (JDN 2299161) use the Julian calendar rule, dates at or
/// after use the Gregorian rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i32,
}

/// First day of the Gregorian calendar, October 15, 1582.
const GREGORIAN_REFORM_JDN: i32 = 2299161;

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: i32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` with a civil calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_ymd(2000, 1, 1);
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Self {
        let a = (14 - month).div_euclid(12);
        let y = year + 4800 - a;
        let m = month + 12 * a - 3;
        let md = (153 * m + 2).div_euclid(5);
        let jdn =
            day + md + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) - 32045;
        if jdn < GREGORIAN_REFORM_JDN {
            Self::from_jdn(day + md + 365 * y + y.div_euclid(4) - 32083)
        } else {
            Self::from_jdn(jdn)
        }
    }
    /// Represents the date in the civil calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.ymd());
    /// ```
    pub fn ymd(&self) -> (i32, i32, i32) {
        let (b, c) = if self.jdn >= GREGORIAN_REFORM_JDN {
            let a = self.jdn + 32044;
            let b = (4 * a + 3).div_euclid(146097);
            (b, a - (b * 146097).div_euclid(4))
        } else {
            (0, self.jdn + 32082)
        };
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);
        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = b * 100 + d - 4800 + m.div_euclid(10);
        (year, month, day)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_ymd(2000, 1, 1);
    /// assert_eq!("2000-01-01", date.iso());
    /// ```
    pub fn iso(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_ymd(2000, 1, 1);
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        self.jdn.rem_euclid(7) + 1
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}
