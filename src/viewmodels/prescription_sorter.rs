// ============================================================================
// PRESCRIPTION SORTER - Newest appointment first
// ============================================================================
// Key = appointment date as MM/DD/YYYY + " " + appointment time, parsed as a
// naive local date-time. Records whose key does not parse sort as the
// earliest possible instant (after every valid record). Stable: equal keys
// keep the order the backend sent them in.
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{Appointment, Prescription};

const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

const COMPOSITE_FORMATS: [&str; 5] = [
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M%p",
    "%m/%d/%Y %I:%M:%S %p",
];

/// Calendar date of an appointment, whatever shape the backend used
fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, DISPLAY_DATE_FORMAT))
        .ok()
}

/// Composite date + time of an appointment, `None` when it does not parse
pub fn appointment_timestamp(appointment: &Appointment) -> Option<NaiveDateTime> {
    let date = normalize_date(&appointment.appointment_date)?;
    let composite = format!(
        "{} {}",
        date.format(DISPLAY_DATE_FORMAT),
        appointment.appointment_time.trim()
    );

    COMPOSITE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&composite, fmt).ok())
}

/// Sort prescriptions by descending appointment timestamp
pub fn sort_newest_first(prescriptions: Vec<Prescription>) -> Vec<Prescription> {
    let mut keyed: Vec<(Option<NaiveDateTime>, Prescription)> = prescriptions
        .into_iter()
        .map(|rx| {
            let key = appointment_timestamp(&rx.appointment);
            if key.is_none() {
                log::warn!(
                    "⚠️ [SORT] Prescription {} has an unparseable appointment ('{}' '{}'), placing it last",
                    rx.id,
                    rx.appointment.appointment_date,
                    rx.appointment.appointment_time
                );
            }
            (key, rx)
        })
        .collect();

    // None < Some(_), so reversing the comparison sends None to the end
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    keyed.into_iter().map(|(_, rx)| rx).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn rx(id: &str, date: &str, time: &str) -> Prescription {
        Prescription {
            id: id.to_string(),
            appointment: Appointment {
                id: None,
                appointment_date: date.to_string(),
                appointment_time: time.to_string(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    fn ids(list: &[Prescription]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn later_time_on_same_day_comes_first() {
        let sorted = sort_newest_first(vec![
            rx("nine", "01/02/2024", "09:00"),
            rx("ten", "01/02/2024", "10:00"),
        ]);
        assert_eq!(ids(&sorted), vec!["ten", "nine"]);
    }

    #[test]
    fn mixed_date_shapes_share_one_timeline() {
        let sorted = sort_newest_first(vec![
            rx("jan", "2024-01-15", "08:00"),
            rx("mar", "2024-03-01T00:00:00.000Z", "07:30"),
            rx("feb", "02/10/2024", "6:15 PM"),
            rx("dec", "2023-12-31T00:00:00", "23:59:59"),
        ]);
        assert_eq!(ids(&sorted), vec!["mar", "feb", "jan", "dec"]);
    }

    #[test]
    fn output_is_non_increasing() {
        let sorted = sort_newest_first(vec![
            rx("a", "2024-05-01", "10:00"),
            rx("b", "2023-05-01", "11:00"),
            rx("c", "2024-05-01", "10:01"),
            rx("d", "2025-01-01", "00:00"),
            rx("e", "2024-05-01", "09:59 AM"),
        ]);
        let keys: Vec<NaiveDateTime> = sorted
            .iter()
            .map(|p| appointment_timestamp(&p.appointment).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn unparseable_records_go_last_in_response_order() {
        let sorted = sort_newest_first(vec![
            rx("bad-date", "not a date", "10:00"),
            rx("ok", "2024-01-02", "10:00"),
            rx("bad-time", "2024-01-02", "lunch"),
        ]);
        assert_eq!(ids(&sorted), vec!["ok", "bad-date", "bad-time"]);
    }

    #[test]
    fn ties_keep_response_order_and_sorting_is_idempotent() {
        let once = sort_newest_first(vec![
            rx("first", "2024-01-02", "10:00"),
            rx("older", "2024-01-01", "10:00"),
            rx("second", "01/02/2024", "10:00 AM"),
        ]);
        assert_eq!(ids(&once), vec!["first", "second", "older"]);

        let twice = sort_newest_first(once.clone());
        assert_eq!(twice, once);
    }

    #[test]
    fn timestamp_combines_date_and_time() {
        let ts = appointment_timestamp(&rx("x", "2024-01-02T00:00:00.000Z", "2:30 pm").appointment)
            .unwrap();
        assert_eq!(ts.to_string(), "2024-01-02 14:30:00");
    }

    #[test]
    fn empty_list_stays_empty() {
        assert!(sort_newest_first(Vec::new()).is_empty());
    }
}
