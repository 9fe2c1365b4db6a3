use chrono::{Datelike, Days, Local, NaiveDate};
use serde::Serialize;

/// One cell of a month grid. Cells outside the month (`in_month == false`)
/// pad the grid out to whole weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
}

/// Months are zero-based everywhere in this module (0 = January), matching
/// the cursor arithmetic. Values of 12 or more roll into later years.
fn normalize(year: i32, month0: u32) -> (i32, u32) {
    (year + (month0 / 12) as i32, month0 % 12)
}

/// Builds the Sunday-first grid of cells for a month: leading cells from the
/// previous month back to the nearest Sunday, every day of the month, then
/// trailing cells until the length is a multiple of seven. A month that spans
/// exactly whole weeks gets no padding at all.
pub fn month_grid(year: i32, month0: u32) -> Vec<DayCell> {
    let (year, month0) = normalize(year, month0);
    let Some(first) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) else {
        return Vec::new();
    };
    let mut cells = Vec::with_capacity(42);

    let lead = first.weekday().num_days_from_sunday() as u64;
    for back in (1..=lead).rev() {
        if let Some(date) = first.checked_sub_days(Days::new(back)) {
            cells.push(DayCell { date, in_month: false });
        }
    }
    for offset in 0..days_in_month(year, month0) as u64 {
        if let Some(date) = first.checked_add_days(Days::new(offset)) {
            cells.push(DayCell { date, in_month: true });
        }
    }
    let rem = cells.len() % 7;
    if rem != 0 {
        if let Some(last) = cells.last().map(|c| c.date) {
            for ahead in 1..=(7 - rem) as u64 {
                if let Some(date) = last.checked_add_days(Days::new(ahead)) {
                    cells.push(DayCell { date, in_month: false });
                }
            }
        }
    }
    cells
}

/// Number of days in the given month, or 0 if the month is out of range.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (year, month0) = normalize(year, month0);
    let (next_year, next_month0) = normalize(year, month0 + 1);
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Canonical `YYYY-MM-DD` key for a date. Every store lookup goes through
/// this format.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Canonical `YYYY-MM` key for a month.
pub fn month_key(year: i32, month0: u32) -> String {
    let (year, month0) = normalize(year, month0);
    format!("{:04}-{:02}", year, month0 + 1)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

/// "Tuesday, February 10, 2026"
pub fn format_full_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "February 10, 2026", or the key unchanged when it does not parse.
pub fn format_scheduled_date(key: &str) -> String {
    match parse_date_key(key) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => key.to_string(),
    }
}

/// Renders an `HH:mm` field as 12-hour clock time ("14:30" becomes
/// "2:30 PM"). Empty input stays empty; an unparseable hour reads as 0.
pub fn format_time_12h(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }
    let (h, m) = match time.split_once(':') {
        Some((h, m)) => (h, m),
        None => (time, ""),
    };
    let hour: u32 = h.parse().unwrap_or(0);
    let ampm = if hour >= 12 { "PM" } else { "AM" };
    let h12 = match hour % 12 {
        0 => 12,
        other => other,
    };
    let minutes = if m.is_empty() { "00" } else { m };
    format!("{}:{} {}", h12, minutes, ampm)
}

/// Which month a calendar view is looking at. Navigation clamps nothing:
/// stepping past December rolls into the next year and stepping before
/// January rolls into the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        let (year, month0) = normalize(year, month0);
        Self { year, month0 }
    }

    /// Cursor on the local current month.
    pub fn current() -> Self {
        let now = today();
        Self { year: now.year(), month0: now.month0() }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            Self { year: self.year - 1, month0: 11 }
        } else {
            Self { year: self.year, month0: self.month0 - 1 }
        }
    }

    pub fn next(self) -> Self {
        Self::new(self.year, self.month0 + 1)
    }

    pub fn key(&self) -> String {
        month_key(self.year, self.month0)
    }

    pub fn grid(&self) -> Vec<DayCell> {
        month_grid(self.year, self.month0)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// "February 2026" header text.
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => self.key(),
        }
    }
}
