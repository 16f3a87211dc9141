use crate::models::{Appointment, AppointmentPayload, Department};
use crate::services::{ApiError, Http};

pub async fn list_departments(http: &Http) -> Result<Vec<Department>, ApiError> {
    http.get("/api/patient/departments").await
}

pub async fn create_appointment(
    http: &Http,
    payload: &AppointmentPayload,
) -> Result<Appointment, ApiError> {
    http.post("/api/patient/appointments", payload).await
}

pub async fn query_appointments(
    http: &Http,
    status: Option<&str>,
) -> Result<Vec<Appointment>, ApiError> {
    let mut query = Vec::new();
    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }
    http.get_query("/api/patient/appointments/query", &query).await
}

pub async fn cancel_appointment(http: &Http, appt_id: i64) -> Result<Appointment, ApiError> {
    http.delete(&format!("/api/patient/appointments/{}", appt_id)).await
}
