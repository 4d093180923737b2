// Askama template definitions and fragment renderers.
//
// Fragment renderers are pure: entity slice in, HTML string out. Pages
// embed the pre-rendered fragment so HTMX can later swap the same markup
// into the same target.

use askama::Template;

use crate::upstream::{Appointment, Doctor};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub error: Option<String>,
    pub version: String,
}

impl HomeTemplate {
    pub fn new(error: Option<String>) -> Self {
        Self {
            error,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
pub struct AdminDashboardTemplate {
    pub doctor_list: String,
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "doctor_dashboard.html")]
pub struct DoctorDashboardTemplate {
    pub date: String,
    pub rows: String,
}

#[derive(Template)]
#[template(path = "prescription.html")]
pub struct PrescriptionTemplate {
    pub appointment_id: i64,
    pub patient_name: String,
    pub medication: String,
    pub dosage: String,
    pub doctor_notes: String,
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "patient_browse.html")]
pub struct PatientBrowseTemplate {
    pub doctor_list: String,
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "patient_home.html")]
pub struct PatientHomeTemplate {
    pub doctor_list: String,
}

#[derive(Template)]
#[template(path = "patient_appointments.html")]
pub struct PatientAppointmentsTemplate {
    pub rows: String,
    pub notice: Option<String>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    pub doctor_id: i64,
    pub doctor_name: String,
    pub date: String,
    pub slot_options: String,
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

/// Doctor presented as a card. Availability is pre-joined because the
/// card shows it as one line.
pub struct DoctorCard {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub email: String,
    pub phone: String,
    pub availability: String,
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.unwrap_or_default(),
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            email: doctor.email.clone(),
            phone: doctor.phone.clone(),
            availability: doctor.available_times.join(", "),
        }
    }
}

#[derive(Template)]
#[template(path = "partials/doctor_cards.html")]
struct DoctorCardsTemplate {
    doctors: Vec<DoctorCard>,
    empty_message: String,
    can_delete: bool,
    can_book: bool,
}

/// Which controls a doctor card carries, by page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    /// Admin dashboard: delete control
    Admin,
    /// Public patient page: read-only
    Public,
    /// Logged-in patient: book control
    Book,
}

/// Render a list of doctors as cards, or the page's placeholder copy
/// when the list is empty.
pub fn doctor_cards(doctors: &[Doctor], empty_message: &str, mode: CardMode) -> String {
    let template = DoctorCardsTemplate {
        doctors: doctors.iter().map(DoctorCard::from).collect(),
        empty_message: empty_message.to_string(),
        can_delete: mode == CardMode::Admin,
        can_book: mode == CardMode::Book,
    };
    render_fragment(template)
}

/// One row of the doctor dashboard's schedule table.
struct ScheduleRow {
    appointment_id: i64,
    patient_name: String,
    patient_phone: String,
    patient_email: String,
    time: String,
    status: String,
}

#[derive(Template)]
#[template(path = "partials/appointment_rows.html")]
struct AppointmentRowsTemplate {
    rows: Vec<ScheduleRow>,
    empty_message: String,
}

/// Render a doctor's day schedule as table rows.
pub fn appointment_rows(appointments: &[Appointment], empty_message: &str) -> String {
    let template = AppointmentRowsTemplate {
        rows: appointments
            .iter()
            .map(|appointment| ScheduleRow {
                appointment_id: appointment.id,
                patient_name: appointment.patient_name.clone(),
                patient_phone: appointment.patient_phone.clone(),
                patient_email: appointment.patient_email.clone(),
                time: appointment.time().to_string(),
                status: appointment.status.clone(),
            })
            .collect(),
        empty_message: empty_message.to_string(),
    };
    render_fragment(template)
}

/// One row of a patient's own appointment list.
struct PatientAppointmentRow {
    id: i64,
    doctor_name: String,
    date: String,
    time: String,
    status: String,
}

#[derive(Template)]
#[template(path = "partials/patient_appointment_rows.html")]
struct PatientAppointmentRowsTemplate {
    rows: Vec<PatientAppointmentRow>,
    empty_message: String,
}

/// Render a patient's appointments as table rows.
pub fn patient_appointment_rows(appointments: &[Appointment], empty_message: &str) -> String {
    let template = PatientAppointmentRowsTemplate {
        rows: appointments
            .iter()
            .map(|appointment| PatientAppointmentRow {
                id: appointment.id,
                doctor_name: appointment.doctor_name.clone(),
                date: appointment.date().to_string(),
                time: appointment.time().to_string(),
                status: appointment.status.clone(),
            })
            .collect(),
        empty_message: empty_message.to_string(),
    };
    render_fragment(template)
}

#[derive(Template)]
#[template(path = "partials/slot_options.html")]
struct SlotOptionsTemplate {
    slots: Vec<String>,
}

/// Render free booking slots as `<option>` elements.
pub fn slot_options(slots: &[String]) -> String {
    render_fragment(SlotOptionsTemplate {
        slots: slots.to_vec(),
    })
}

/// Inline error paragraph used as an HTMX swap target on failed fragment
/// loads. The messages are fixed strings, never user input.
pub fn error_fragment(message: &str) -> String {
    format!("<p class=\"error\">{}</p>", message)
}

fn render_fragment<T: Template>(template: T) -> String {
    match template.render() {
        Ok(html) => html,
        Err(err) => {
            tracing::error!(error = %err, "Fragment render failed");
            error_fragment("Something went wrong rendering this section.")
        }
    }
}
