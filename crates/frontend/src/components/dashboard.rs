//! Role dashboards shown on the home screen for signed-in users.
//!
//! Both dashboards derive their numbers from an already-fetched
//! appointment slice, so they render synchronously.

use chrono::Local;
use smilecare_http::types::{Appointment, UserInfo};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::AppointmentCard;
use crate::routes::Route;
use crate::stats::{todays_appointments, AppointmentStats};

#[derive(Properties, PartialEq)]
struct StatTileProps {
    label: String,
    value: usize,
    accent: String,
}

#[function_component(StatTile)]
fn stat_tile(props: &StatTileProps) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow-sm p-5 border border-gray-100">
            <p class={classes!("text-3xl", "font-bold", props.accent.clone())}>{props.value}</p>
            <p class="text-sm text-gray-500 mt-1">{&props.label}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub user: UserInfo,
    pub appointments: Vec<Appointment>,
}

fn today_section(appointments: &[Appointment], is_dentist: bool) -> Html {
    let today = todays_appointments(appointments, Local::now());
    html! {
        <section class="mt-8">
            <h2 class="text-lg font-semibold text-gray-800 mb-4">{"Today's schedule"}</h2>
            if today.is_empty() {
                <p class="text-sm text-gray-500">{"No appointments scheduled for today."}</p>
            } else {
                <div class="grid gap-4 md:grid-cols-2">
                    { for today.iter().map(|appt| html! {
                        <AppointmentCard
                            key={appt.appointment_id}
                            appointment={(*appt).clone()}
                            is_dentist={is_dentist}
                        />
                    }) }
                </div>
            }
        </section>
    }
}

#[function_component(DentistDashboard)]
pub fn dentist_dashboard(props: &DashboardProps) -> Html {
    let stats = AppointmentStats::derive(&props.appointments, Local::now());

    html! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900">
                {format!("Welcome, Dr. {}", props.user.first_name)}
            </h1>
            <p class="text-gray-500 mt-1">{"Here is an overview of your practice."}</p>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-6">
                <StatTile label="Today" value={stats.today} accent="text-teal-600" />
                <StatTile label="Pending" value={stats.pending} accent="text-amber-600" />
                <StatTile label="Completed" value={stats.completed} accent="text-blue-600" />
                <StatTile label="Upcoming" value={stats.upcoming} accent="text-green-600" />
            </div>

            <div class="mt-6">
                <Link<Route> to={Route::Appointments}
                    classes="inline-block px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700">
                    {"Manage appointments"}
                </Link<Route>>
            </div>

            { today_section(&props.appointments, true) }
        </div>
    }
}

#[function_component(PatientDashboard)]
pub fn patient_dashboard(props: &DashboardProps) -> Html {
    let stats = AppointmentStats::derive(&props.appointments, Local::now());

    html! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900">
                {format!("Welcome, {}", props.user.first_name)}
            </h1>
            <p class="text-gray-500 mt-1">{"Keep track of your dental visits."}</p>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-6">
                <StatTile label="Today" value={stats.today} accent="text-teal-600" />
                <StatTile label="Pending" value={stats.pending} accent="text-amber-600" />
                <StatTile label="Completed" value={stats.completed} accent="text-blue-600" />
                <StatTile label="Upcoming" value={stats.upcoming} accent="text-green-600" />
            </div>

            <div class="mt-6 flex gap-3">
                <Link<Route> to={Route::Schedule}
                    classes="inline-block px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700">
                    {"Book an appointment"}
                </Link<Route>>
                <Link<Route> to={Route::Appointments}
                    classes="inline-block px-4 py-2 bg-white border border-teal-600 text-teal-700 rounded-lg hover:bg-teal-50">
                    {"My appointments"}
                </Link<Route>>
            </div>

            { today_section(&props.appointments, false) }
        </div>
    }
}
