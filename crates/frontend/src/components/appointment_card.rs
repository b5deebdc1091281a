//! Appointment card: pure rendering of one fetched appointment.

use crate::stats::AppointmentAction;
use smilecare_http::types::{Appointment, AppointmentStatus};
use yew::prelude::*;

/// Badge color for a status. Unknown codes get the neutral badge, never a
/// render failure.
fn status_badge_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "bg-amber-100 text-amber-800",
        AppointmentStatus::Confirmed => "bg-green-100 text-green-800",
        AppointmentStatus::Completed => "bg-blue-100 text-blue-800",
        AppointmentStatus::Cancelled => "bg-red-100 text-red-800",
        AppointmentStatus::Unknown => "bg-gray-100 text-gray-800",
    }
}

#[derive(Properties, PartialEq)]
pub struct AppointmentCardProps {
    pub appointment: Appointment,
    pub is_dentist: bool,
    /// True while this card's own action is in flight; disables only this
    /// card's controls.
    #[prop_or_default]
    pub busy: bool,
    /// Present only on screens that allow confirm/cancel.
    #[prop_or_default]
    pub on_action: Option<Callback<(Appointment, AppointmentAction)>>,
}

#[function_component(AppointmentCard)]
pub fn appointment_card(props: &AppointmentCardProps) -> Html {
    let appointment = &props.appointment;
    let status = appointment.status();

    let counterpart = if props.is_dentist {
        format!(
            "{} {}",
            appointment.patient.first_name, appointment.patient.last_name
        )
    } else {
        format!(
            "Dr. {} {}",
            appointment.dentist.first_name, appointment.dentist.last_name
        )
    };

    let (date_text, time_text) = match appointment.date_local() {
        Some(date) => (
            date.format("%B %-d, %Y").to_string(),
            date.format("%-I:%M %p").to_string(),
        ),
        None => (appointment.appointment_date.clone(), String::new()),
    };

    let action_button = |action: AppointmentAction, label: &'static str, class: &'static str| {
        let on_action = props.on_action.clone();
        let appointment = appointment.clone();
        let onclick = Callback::from(move |_| {
            if let Some(cb) = &on_action {
                cb.emit((appointment.clone(), action));
            }
        });
        html! {
            <button {onclick} disabled={props.busy} class={class}>
                if props.busy {
                    <span class="inline-block w-3 h-3 border-2 border-white/40 border-t-white rounded-full animate-spin mr-2"></span>
                }
                {label}
            </button>
        }
    };

    html! {
        <div class="bg-white rounded-2xl shadow-sm p-6 mb-3">
            <div class="flex justify-between items-start mb-3">
                <div>
                    <h5 class="font-bold text-gray-900 mb-1">{counterpart}</h5>
                    <p class="text-gray-500 text-sm m-0">{&appointment.service.description}</p>
                </div>
                <span class={format!(
                    "inline-flex items-center px-3 py-1 rounded-full text-xs font-medium {}",
                    status_badge_class(status)
                )}>
                    {status.label()}
                </span>
            </div>

            <div class="flex items-center gap-4 text-sm text-gray-600 mb-3">
                <span>{date_text}</span>
                if !time_text.is_empty() {
                    <span>{time_text}</span>
                }
            </div>

            if let Some(notes) = &appointment.notes {
                if !notes.is_empty() {
                    <p class="text-gray-500 text-sm mb-3">{notes}</p>
                }
            }

            // Action buttons only exist for pending appointments.
            if props.on_action.is_some() && status == AppointmentStatus::Pending {
                <div class="flex gap-2">
                    if props.is_dentist {
                        {action_button(
                            AppointmentAction::Confirm,
                            "Confirm",
                            "px-4 py-1.5 rounded-full text-sm font-medium bg-green-600 text-white hover:bg-green-700 disabled:opacity-50",
                        )}
                    }
                    {action_button(
                        AppointmentAction::Cancel,
                        "Cancel",
                        "px-4 py-1.5 rounded-full text-sm font-medium bg-red-600 text-white hover:bg-red-700 disabled:opacity-50",
                    )}
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_gets_the_neutral_badge() {
        let class = status_badge_class(AppointmentStatus::from_code("Z"));
        assert_eq!(class, "bg-gray-100 text-gray-800");
    }

    #[test]
    fn known_statuses_have_distinct_badges() {
        let mut classes: Vec<_> = ["P", "C", "D", "X"]
            .iter()
            .map(|code| status_badge_class(AppointmentStatus::from_code(code)))
            .collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), 4);
    }
}
