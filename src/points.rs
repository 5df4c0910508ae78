//! Loyalty points scoring.
//!
//! A receipt's score is the sum of five rules evaluated in a fixed order. The
//! first rule that cannot parse its input aborts the whole computation.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

use crate::db::models::{Item, Receipt};

#[derive(Error, Debug)]
pub enum PointsError {
    #[error("total {total:?} has no cents component")]
    MissingCents { total: String },
    #[error("total {total:?} has invalid cents: {source}")]
    InvalidCents {
        total: String,
        #[source]
        source: ParseIntError,
    },
    #[error("item price {price:?} is not a number: {source}")]
    InvalidPrice {
        price: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("purchase date {date:?} has no day component")]
    MissingDay { date: String },
    #[error("purchase date {date:?} has invalid day: {source}")]
    InvalidDay {
        date: String,
        #[source]
        source: ParseIntError,
    },
    #[error("purchase time {time:?} is not HH:MM")]
    InvalidTime {
        time: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Retailer,
    Total,
    Items,
    PurchaseDate,
    PurchaseTime,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Retailer => "retailer",
            Rule::Total => "total",
            Rule::Items => "items",
            Rule::PurchaseDate => "purchase_date",
            Rule::PurchaseTime => "purchase_time",
        };
        f.write_str(name)
    }
}

impl Rule {
    /// Evaluation order. The sum does not depend on it, the reported error does.
    pub const ORDER: [Rule; 5] = [
        Rule::Retailer,
        Rule::Total,
        Rule::Items,
        Rule::PurchaseDate,
        Rule::PurchaseTime,
    ];

    pub fn apply(self, receipt: &Receipt) -> Result<i64, PointsError> {
        match self {
            Rule::Retailer => Ok(retailer_points(&receipt.retailer)),
            Rule::Total => total_points(&receipt.total),
            Rule::Items => items_points(&receipt.items),
            Rule::PurchaseDate => purchase_date_points(&receipt.purchase_date),
            Rule::PurchaseTime => purchase_time_points(&receipt.purchase_time),
        }
    }
}

/// Scores a receipt. Returns the error of the first rule that fails.
pub fn compute_points(receipt: &Receipt) -> Result<i64, PointsError> {
    Rule::ORDER.iter().try_fold(0i64, |acc, rule| {
        let points = rule.apply(receipt)?;
        tracing::debug!(%rule, points, "rule applied");
        Ok(acc.saturating_add(points))
    })
}

/// One point per ASCII letter or digit.
pub fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as i64
}

/// 50 for a whole-dollar total, plus 25 when the cents are a multiple of 25.
pub fn total_points(total: &str) -> Result<i64, PointsError> {
    let cents = total
        .split('.')
        .nth(1)
        .ok_or_else(|| PointsError::MissingCents { total: total.to_string() })?;
    let cents: i64 = cents.parse().map_err(|source| PointsError::InvalidCents {
        total: total.to_string(),
        source,
    })?;

    let mut points = 0;
    if cents == 0 {
        points += 50;
    }
    if cents % 25 == 0 {
        points += 25;
    }
    Ok(points)
}

/// 5 per pair of items, plus a price bonus for every item whose trimmed
/// description length is a multiple of 3.
pub fn items_points(items: &[Item]) -> Result<i64, PointsError> {
    let mut points = (items.len() / 2) as i64 * 5;
    for item in items {
        if item.short_description.trim().len() % 3 != 0 {
            continue;
        }
        let price: f64 = item.price.parse().map_err(|source| PointsError::InvalidPrice {
            price: item.price.clone(),
            source,
        })?;
        // f64::round rounds halves away from zero. The cast saturates: inf and
        // out-of-range prices clamp to i64 bounds, NaN becomes 0.
        points = points.saturating_add((price * 0.2).round() as i64);
    }
    Ok(points)
}

/// 6 when the day of the month is odd.
pub fn purchase_date_points(date: &str) -> Result<i64, PointsError> {
    let day = date
        .split('-')
        .nth(2)
        .ok_or_else(|| PointsError::MissingDay { date: date.to_string() })?;
    let day: i64 = day.parse().map_err(|source| PointsError::InvalidDay {
        date: date.to_string(),
        source,
    })?;

    Ok(if day % 2 == 1 { 6 } else { 0 })
}

/// 10 when purchased after 14:00 and before 16:00. 14:00 itself does not count.
pub fn purchase_time_points(time: &str) -> Result<i64, PointsError> {
    // chrono alone accepts leading spaces and one-digit fields
    let bytes = time.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !well_formed {
        return Err(PointsError::InvalidTime {
            time: time.to_string(),
            source: None,
        });
    }

    let tm = NaiveTime::parse_from_str(time, "%H:%M").map_err(|source| PointsError::InvalidTime {
        time: time.to_string(),
        source: Some(source),
    })?;

    let (hour, minute) = (tm.hour(), tm.minute());
    if (hour == 14 && minute != 0) || (hour > 14 && hour < 16) {
        return Ok(10);
    }
    Ok(0)
}
