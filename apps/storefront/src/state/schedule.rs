//! # Delivery Scheduling
//!
//! The fixed delivery time slots and the rolling four-day date window
//! offered in the cart drawer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A delivery time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TimeSlot {
    EarlyBird,
    Morning,
    Afternoon,
}

impl TimeSlot {
    /// All slots in display order.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::EarlyBird, TimeSlot::Morning, TimeSlot::Afternoon];

    /// Display label for the slot picker.
    pub const fn label(&self) -> &'static str {
        match self {
            TimeSlot::EarlyBird => "Early Bird",
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
        }
    }

    /// The clock time stamped onto the order's delivery estimate.
    pub const fn time(&self) -> &'static str {
        match self {
            TimeSlot::EarlyBird => "4:00 AM",
            TimeSlot::Morning => "11:00 AM",
            TimeSlot::Afternoon => "3:00 PM",
        }
    }
}

impl Default for TimeSlot {
    /// Earliest slot is preselected.
    fn default() -> Self {
        TimeSlot::EarlyBird
    }
}

/// A selectable delivery date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeliveryDate {
    /// Full date string stamped onto orders, e.g. "26 Aug 2026".
    pub full: String,

    /// Short weekday label for the picker chip, e.g. "Tue".
    pub day: String,

    /// Day of month for the picker chip.
    pub date: u32,
}

/// The four-day delivery window starting today.
///
/// The first entry is today and doubles as the preselected date.
pub fn delivery_window(now: DateTime<Utc>) -> Vec<DeliveryDate> {
    (0..4)
        .map(|offset| {
            let d = now + Duration::days(offset);
            DeliveryDate {
                full: d.format("%-d %b %Y").to_string(),
                day: d.format("%a").to_string(),
                date: chrono::Datelike::day(&d),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_slot_labels_and_times() {
        assert_eq!(TimeSlot::EarlyBird.time(), "4:00 AM");
        assert_eq!(TimeSlot::Morning.time(), "11:00 AM");
        assert_eq!(TimeSlot::Afternoon.time(), "3:00 PM");
        assert_eq!(TimeSlot::default(), TimeSlot::EarlyBird);
        assert_eq!(TimeSlot::ALL.len(), 3);
    }

    #[test]
    fn test_delivery_window_spans_four_days() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 10, 0, 0).unwrap();
        let window = delivery_window(now);

        assert_eq!(window.len(), 4);
        assert_eq!(window[0].full, "25 Aug 2026");
        assert_eq!(window[0].day, "Tue");
        assert_eq!(window[3].full, "28 Aug 2026");
        assert_eq!(window[3].date, 28);
    }

    #[test]
    fn test_delivery_window_crosses_month_boundary() {
        let now = Utc.with_ymd_and_hms(2026, 8, 30, 10, 0, 0).unwrap();
        let window = delivery_window(now);

        assert_eq!(window[2].full, "1 Sep 2026");
        assert_eq!(window[2].date, 1);
    }
}
