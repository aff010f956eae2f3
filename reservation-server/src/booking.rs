//! Booking rules for new and edited reservations
//!
//! A reservation must be in the future, not on the closed weekday and
//! within opening hours (last seating inclusive).

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use shared::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    pub opening_time: NaiveTime,
    pub last_seating_time: NaiveTime,
    /// `None` when the restaurant opens every day
    pub closed_weekday: Option<Weekday>,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            opening_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap_or_default(),
            last_seating_time: NaiveTime::from_hms_opt(21, 30, 0).unwrap_or_default(),
            closed_weekday: Some(Weekday::Tue),
        }
    }
}

impl BookingPolicy {
    /// Every rule is checked in turn; the first broken one is reported
    pub fn check(&self, date: NaiveDate, time: NaiveTime, now: NaiveDateTime) -> AppResult<()> {
        if date.and_time(time) <= now {
            return Err(AppError::with_message(
                ErrorCode::ReservationInPast,
                "reservation must be in the future",
            ));
        }

        if let Some(closed) = self.closed_weekday
            && date.weekday() == closed
        {
            return Err(AppError::with_message(
                ErrorCode::RestaurantClosed,
                format!("the restaurant is closed on {}", weekday_name(closed)),
            ));
        }

        if time < self.opening_time || time > self.last_seating_time {
            return Err(AppError::with_message(
                ErrorCode::OutsideBusinessHours,
                format!(
                    "reservation_time must be between {} and {}",
                    self.opening_time.format("%H:%M"),
                    self.last_seating_time.format("%H:%M")
                ),
            ));
        }

        Ok(())
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mondays",
        Weekday::Tue => "Tuesdays",
        Weekday::Wed => "Wednesdays",
        Weekday::Thu => "Thursdays",
        Weekday::Fri => "Fridays",
        Weekday::Sat => "Saturdays",
        Weekday::Sun => "Sundays",
    }
}
