//! Month-grid arithmetic for the back-office event calendar.
//!
//! Weekday math is Zeller's congruence, shifted so the caller picks the
//! day the week starts on (`0` = Monday-first through `6` = Sunday-first).
//! Display names are the shop's German locale tables, 1-based.

/// German weekday names, indexed 1 (Montag) through 7 (Sonntag).
const WEEKDAY_NAMES: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];

/// German month names, indexed 1 (Januar) through 12 (Dezember).
const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

pub fn weekday_name(weekday: u32) -> Option<&'static str> {
    WEEKDAY_NAMES.get(weekday.checked_sub(1)? as usize).copied()
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Column index (0..=6) of a date in a grid starting on `week_start`.
///
/// With `week_start` 0 the grid is Monday-first, so a Tuesday lands in
/// column 1; `week_start` 6 produces a Sunday-first grid.
pub fn day_of_week(year: i32, month: u32, day: u32, week_start: u32) -> u32 {
    // Rotates Zeller's Saturday-based index onto the chosen first column.
    const WEEK_SHIFT: [u32; 7] = [5, 4, 3, 2, 1, 0, 6];

    let (year, month) = if month < 3 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let k = year.rem_euclid(100);
    let j = year.div_euclid(100);
    let zeller = (day as i32 + (13 * (month as i32 + 1)) / 5 + k + k / 4 + j / 4 - 2 * j)
        .rem_euclid(7) as u32;
    (zeller + WEEK_SHIFT[(week_start % 7) as usize]) % 7
}

/// Lays a month out as weeks of seven cells, `None` padding the slots
/// before the first and after the last day.
pub fn month_grid(year: i32, month: u32, week_start: u32) -> Vec<[Option<u32>; 7]> {
    let days = days_in_month(year, month);
    let first_column = day_of_week(year, month, 1, week_start) as usize;

    let mut grid = Vec::new();
    let mut week = [None; 7];
    let mut column = first_column;
    for day in 1..=days {
        week[column] = Some(day);
        column += 1;
        if column == 7 {
            grid.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        grid.push(week);
    }
    grid
}
