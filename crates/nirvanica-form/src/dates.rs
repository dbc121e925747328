//! Stay date range rules.

use chrono::{Days, NaiveDate};

/// Check-in/check-out date pair with the booking page's rules:
///
/// - the earliest selectable date for either field is tomorrow, relative
///   to when the form was opened;
/// - check-out is always strictly after check-in — setting a date that
///   violates this auto-advances check-out to check-in + 1 and pins the
///   check-out minimum there.
#[derive(Debug, Clone, Copy)]
pub struct StayDates {
    today: NaiveDate,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
}

impl StayDates {
    /// Create an empty date pair anchored at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            check_in: None,
            check_out: None,
        }
    }

    /// The anchor date the form was opened on.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Earliest selectable check-in date (tomorrow).
    pub fn min_check_in(&self) -> NaiveDate {
        self.today + Days::new(1)
    }

    /// Earliest selectable check-out date: the day after check-in once
    /// check-in is set, otherwise tomorrow.
    pub fn min_check_out(&self) -> NaiveDate {
        match self.check_in {
            Some(check_in) => check_in + Days::new(1),
            None => self.min_check_in(),
        }
    }

    /// Selected check-in date.
    pub fn check_in(&self) -> Option<NaiveDate> {
        self.check_in
    }

    /// Selected check-out date.
    pub fn check_out(&self) -> Option<NaiveDate> {
        self.check_out
    }

    /// Set the check-in date and reconcile the pair.
    pub fn set_check_in(&mut self, date: NaiveDate) {
        self.check_in = Some(date);
        self.reconcile();
    }

    /// Set the check-out date and reconcile the pair.
    pub fn set_check_out(&mut self, date: NaiveDate) {
        self.check_out = Some(date);
        self.reconcile();
    }

    /// Number of nights, once both dates are set. At least one after
    /// reconciliation.
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some((check_out - check_in).num_days()),
            _ => None,
        }
    }

    /// Auto-advance check-out past check-in.
    fn reconcile(&mut self) {
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                self.check_out = Some(check_in + Days::new(1));
            }
        }
    }
}
