//! Can-Chi (sexagenary) names and the lucky-hour table.
//!
//! Years, months and days each carry a name made of one of ten heavenly
//! stems (Can) and one of twelve earthly branches (Chi); the combined cycle
//! repeats every 60 steps.

/// The ten heavenly stems (Can).
pub const CAN: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];
/// The twelve earthly branches (Chi).
pub const CHI: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// Returns the Can-Chi name of a lunar year.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Giáp Thìn", fmt::can_chi_year(2024));
/// ```
pub fn can_chi_year(year: i32) -> String {
    let can = CAN[(year + 6).rem_euclid(10) as usize];
    let chi = CHI[(year + 8).rem_euclid(12) as usize];
    format!("{can} {chi}")
}

/// Returns the Can-Chi name of a lunar month; the stem depends on the lunar
/// year, the branch is fixed per month (month 1 is always Dần).
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Bính Dần", fmt::can_chi_month(1, 2024));
/// ```
pub fn can_chi_month(month: u32, year: i32) -> String {
    let can = CAN[(i64::from(year) * 12 + i64::from(month) + 3).rem_euclid(10) as usize];
    let chi = CHI[((month + 1) % 12) as usize];
    format!("{can} {chi}")
}

/// Returns the Can-Chi name of the day with Julian day number `jdn`.
///
/// # Example
///
/// ```
/// use amlich::{lunar::fmt, Date};
///
/// let jdn = Date::from_ymd(2000, 1, 1).jdn();
/// assert_eq!("Mậu Ngọ", fmt::can_chi_day(jdn));
/// ```
pub fn can_chi_day(jdn: i32) -> String {
    let can = CAN[(jdn + 9).rem_euclid(10) as usize];
    let chi = CHI[(jdn + 1).rem_euclid(12) as usize];
    format!("{can} {chi}")
}

/// Returns the favorable double-hours (giờ hoàng đạo) of the day with
/// Julian day number `jdn`, keyed by the day's branch.
pub fn lucky_hours(jdn: i32) -> &'static str {
    const HOURS: [&str; 12] = [
        // Tý
        "Tý (23-1), Sửu (1-3), Mão (5-7), Ngọ (11-13), Thân (15-17), Dậu (17-19)",
        // Sửu
        "Dần (3-5), Mão (5-7), Tỵ (9-11), Thân (15-17), Tuất (19-21), Hợi (21-23)",
        // Dần
        "Tý (23-1), Sửu (1-3), Thìn (7-9), Tỵ (9-11), Mùi (13-15), Tuất (19-21)",
        // Mão
        "Tý (23-1), Dần (3-5), Mão (5-7), Ngọ (11-13), Mùi (13-15), Dậu (17-19)",
        // Thìn
        "Dần (3-5), Thìn (7-9), Tỵ (9-11), Thân (15-17), Dậu (17-19), Hợi (21-23)",
        // Tỵ
        "Sửu (1-3), Thìn (7-9), Ngọ (11-13), Mùi (13-15), Tuất (19-21), Hợi (21-23)",
        // Ngọ
        "Tý (23-1), Sửu (1-3), Mão (5-7), Ngọ (11-13), Thân (15-17), Dậu (17-19)",
        // Mùi
        "Dần (3-5), Mão (5-7), Tỵ (9-11), Thân (15-17), Tuất (19-21), Hợi (21-23)",
        // Thân
        "Tý (23-1), Sửu (1-3), Thìn (7-9), Tỵ (9-11), Mùi (13-15), Tuất (19-21)",
        // Dậu
        "Tý (23-1), Dần (3-5), Mão (5-7), Ngọ (11-13), Mùi (13-15), Dậu (17-19)",
        // Tuất
        "Dần (3-5), Thìn (7-9), Tỵ (9-11), Thân (15-17), Dậu (17-19), Hợi (21-23)",
        // Hợi
        "Sửu (1-3), Thìn (7-9), Ngọ (11-13), Mùi (13-15), Tuất (19-21), Hợi (21-23)",
    ];
    HOURS[(jdn + 1).rem_euclid(12) as usize]
}
