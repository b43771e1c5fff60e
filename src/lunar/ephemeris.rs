//! Truncated-series approximations of new-moon times and of the sun's
//! apparent ecliptic longitude.
//!
//! The series are the low-precision ones from Jean Meeus, *Astronomical
//! Algorithms* (the formulation popularized by Hồ Ngọc Đức's lunar calendar
//! programs). Accuracy is good to a few minutes for a few centuries around
//! J2000; results are commonly trusted for roughly 1800–2200.

use std::f64::consts::PI;

/// Mean length of a synodic month, in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Julian day of the reference new moon (`k = 0`), January 1, 1900,
/// 13:52 UT.
pub const LUNATION_EPOCH: f64 = 2415021.076998695;

const DEG: f64 = PI / 180.0;

/// Computes the time of the `k`-th new moon after the reference new moon of
/// [`LUNATION_EPOCH`], as a fractional Julian day in universal time.
///
/// `k` may be negative for new moons before the reference lunation.
///
/// The mean time is corrected by a periodic series in the sun's mean
/// anomaly `m`, the moon's mean anomaly `mp` and the moon's argument of
/// latitude `f`, then by ΔT (dynamical minus universal time), which uses a
/// different polynomial for epochs more than 11 centuries before 1900.
pub fn new_moon(k: i32) -> f64 {
    let k = f64::from(k);
    // time in Julian centuries from the 1900 epoch
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let mut jd = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DEG).sin();
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    let mp = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;
    let mut c = (0.1734 - 0.000393 * t) * (m * DEG).sin() + 0.0021 * (2.0 * m * DEG).sin();
    c += -0.4068 * (mp * DEG).sin() + 0.0161 * (2.0 * mp * DEG).sin();
    c -= 0.0004 * (3.0 * mp * DEG).sin();
    c += 0.0104 * (2.0 * f * DEG).sin() - 0.0051 * ((m + mp) * DEG).sin();
    c += -0.0004 * ((m - mp) * DEG).sin() + 0.0004 * ((2.0 * f + m) * DEG).sin();
    c -= 0.0004 * ((2.0 * f - m) * DEG).sin() + 0.0006 * ((2.0 * f + mp) * DEG).sin();
    c += 0.0010 * ((2.0 * f - mp) * DEG).sin() + 0.0005 * ((2.0 * mp + m) * DEG).sin();
    let delta_t = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };
    jd + c - delta_t
}

/// Returns the local calendar day (as a JDN) on which the `k`-th new moon
/// falls, in a timezone `time_zone` hours ahead of UTC.
pub fn new_moon_day(k: i32, time_zone: f64) -> i32 {
    (new_moon(k) + 0.5 + time_zone / 24.0).floor() as i32
}

/// Computes the sun's apparent ecliptic longitude at Julian day `jd`, in
/// radians normalized to `[0, 2π)`.
pub fn sun_longitude(jd: f64) -> f64 {
    // time in Julian centuries from J2000
    let t = (jd - 2451545.0) / 36525.0;
    let t2 = t * t;
    // mean anomaly and mean longitude, in degrees
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (m * DEG).sin();
    dl += (0.019993 - 0.000101 * t) * (2.0 * m * DEG).sin() + 0.000290 * (3.0 * m * DEG).sin();
    ((l0 + dl) * DEG).rem_euclid(2.0 * PI)
}

/// Returns which of the twelve 30° ecliptic-longitude sectors the sun is in
/// at local midnight starting the day `jdn`, as an index in `0..=11`.
///
/// Sector 0 begins at the March equinox; sector 9 begins at the winter
/// (December) solstice.
pub fn sun_longitude_sector(jdn: i32, time_zone: f64) -> i32 {
    (sun_longitude(f64::from(jdn) - 0.5 - time_zone / 24.0) / (PI / 6.0)).floor() as i32
}
