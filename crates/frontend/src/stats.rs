//! Dashboard stat derivation and the client-side action policy.
//!
//! Everything here is a pure projection of the latest fetch; nothing is
//! stored, so nothing needs invalidating. The dashboards recompute these
//! counts on every render.

use chrono::{DateTime, Local};
use smilecare_http::types::{Appointment, AppointmentStatus, Role};

/// The four counts the dashboards show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppointmentStats {
    pub today: usize,
    pub pending: usize,
    pub completed: usize,
    pub upcoming: usize,
}

impl AppointmentStats {
    pub fn derive(appointments: &[Appointment], now: DateTime<Local>) -> Self {
        let mut stats = Self::default();
        for appointment in appointments {
            let status = appointment.status();
            if is_today(appointment, now) {
                stats.today += 1;
            }
            if status == AppointmentStatus::Pending {
                stats.pending += 1;
            }
            if status == AppointmentStatus::Completed {
                stats.completed += 1;
            }
            if is_upcoming(appointment, now, status) {
                stats.upcoming += 1;
            }
        }
        stats
    }
}

/// Calendar-day match against the client's local date.
pub fn is_today(appointment: &Appointment, now: DateTime<Local>) -> bool {
    appointment
        .date_local()
        .is_some_and(|date| date.date_naive() == now.date_naive())
}

fn is_upcoming(appointment: &Appointment, now: DateTime<Local>, status: AppointmentStatus) -> bool {
    !matches!(
        status,
        AppointmentStatus::Completed | AppointmentStatus::Cancelled
    ) && appointment.date_local().is_some_and(|date| date > now)
}

/// Today's subset, for the dashboard schedule section.
pub fn todays_appointments(appointments: &[Appointment], now: DateTime<Local>) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|a| is_today(a, now))
        .cloned()
        .collect()
}

/// The two actions a card can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction {
    Confirm,
    Cancel,
}

impl AppointmentAction {
    /// The status code the action writes.
    pub fn status_code(self) -> &'static str {
        match self {
            Self::Confirm => "C",
            Self::Cancel => "X",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Confirm => "confirmed",
            Self::Cancel => "cancelled",
        }
    }
}

/// Client-side action gate, checked before any request is sent.
///
/// Only a dentist may confirm a pending appointment; both roles may cancel
/// a pending appointment; nothing else is permitted.
pub fn check_action(
    role: Role,
    status: AppointmentStatus,
    action: AppointmentAction,
) -> Result<(), &'static str> {
    if status != AppointmentStatus::Pending {
        return Err("Only pending appointments can be updated");
    }
    match action {
        AppointmentAction::Confirm if role != Role::Dentist => {
            Err("Patients can only cancel appointments")
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use smilecare_http::types::{PersonRef, ServiceInfo};

    fn appointment(date: &str, status: &str) -> Appointment {
        Appointment {
            appointment_id: 1,
            appointment_date: date.to_string(),
            status: status.to_string(),
            notes: None,
            patient: PersonRef {
                user_id: 7,
                first_name: "Ana".into(),
                last_name: "Reyes".into(),
            },
            dentist: PersonRef {
                user_id: 2,
                first_name: "Luis".into(),
                last_name: "Cruz".into(),
            },
            service: ServiceInfo {
                service_id: 1,
                description: "Cleaning".into(),
            },
        }
    }

    fn local(date: &str) -> DateTime<Local> {
        let naive = chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f").unwrap();
        Local.from_local_datetime(&naive).single().unwrap()
    }

    fn fmt(dt: DateTime<Local>) -> String {
        dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
    }

    #[test]
    fn today_spans_local_midnight_to_end_of_day() {
        let now = local("2026-06-15T12:00:00");
        let midnight = local("2026-06-15T00:00:00.000");
        let end_of_day = local("2026-06-15T23:59:59.999");

        assert!(is_today(&appointment(&fmt(midnight), "P"), now));
        assert!(is_today(&appointment(&fmt(end_of_day), "P"), now));
    }

    #[test]
    fn today_excludes_one_millisecond_either_side() {
        let now = local("2026-06-15T12:00:00");
        let before = local("2026-06-15T00:00:00.000") - Duration::milliseconds(1);
        let after = local("2026-06-15T23:59:59.999") + Duration::milliseconds(1);

        assert!(!is_today(&appointment(&fmt(before), "P"), now));
        assert!(!is_today(&appointment(&fmt(after), "P"), now));
    }

    #[test]
    fn upcoming_excludes_completed_and_cancelled_regardless_of_date() {
        let now = local("2026-06-15T12:00:00");
        let future = fmt(now + Duration::days(3));

        let stats = AppointmentStats::derive(
            &[
                appointment(&future, "D"),
                appointment(&future, "X"),
                appointment(&future, "P"),
                appointment(&future, "C"),
            ],
            now,
        );
        assert_eq!(stats.upcoming, 2);
    }

    #[test]
    fn upcoming_is_strictly_future() {
        let now = local("2026-06-15T12:00:00");
        let past = fmt(now - Duration::hours(1));
        let exact = fmt(now);

        let stats = AppointmentStats::derive(
            &[appointment(&past, "P"), appointment(&exact, "P")],
            now,
        );
        assert_eq!(stats.upcoming, 0);
        // Both were today and pending, though.
        assert_eq!(stats.today, 2);
        assert_eq!(stats.pending, 2);
    }

    #[test]
    fn counts_cover_all_four_tiles() {
        let now = local("2026-06-15T12:00:00");
        let stats = AppointmentStats::derive(
            &[
                appointment(&fmt(now + Duration::hours(2)), "P"),
                appointment(&fmt(now - Duration::days(1)), "D"),
                appointment(&fmt(now + Duration::days(1)), "C"),
                appointment(&fmt(now - Duration::days(2)), "X"),
            ],
            now,
        );
        assert_eq!(
            stats,
            AppointmentStats {
                today: 1,
                pending: 1,
                completed: 1,
                upcoming: 2,
            }
        );
    }

    #[test]
    fn unparseable_dates_never_count_as_today_or_upcoming() {
        let now = local("2026-06-15T12:00:00");
        let stats = AppointmentStats::derive(&[appointment("garbage", "P")], now);
        assert_eq!(stats.today, 0);
        assert_eq!(stats.upcoming, 0);
        assert_eq!(stats.pending, 1);
    }

    #[test]
    fn patient_cannot_confirm_dentist_can() {
        let pending = AppointmentStatus::Pending;
        assert!(check_action(Role::Patient, pending, AppointmentAction::Confirm).is_err());
        assert!(check_action(Role::Dentist, pending, AppointmentAction::Confirm).is_ok());
    }

    #[test]
    fn both_roles_cancel_pending_only() {
        assert!(check_action(
            Role::Patient,
            AppointmentStatus::Pending,
            AppointmentAction::Cancel
        )
        .is_ok());
        assert!(check_action(
            Role::Dentist,
            AppointmentStatus::Pending,
            AppointmentAction::Cancel
        )
        .is_ok());

        for status in [
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Unknown,
        ] {
            assert!(check_action(Role::Patient, status, AppointmentAction::Cancel).is_err());
            assert!(check_action(Role::Dentist, status, AppointmentAction::Confirm).is_err());
        }
    }
}
