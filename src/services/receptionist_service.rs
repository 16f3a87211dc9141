// Reception desk workflows: appointment intake, check-in, visit lifecycle
// and payments. Listing endpoints take prebuilt query pairs so each view
// decides which filters to send.

use serde_json::json;

use crate::models::{
    Appointment, BillRow, CheckinPayload, IncomeRecord, OnsiteRegisterPayload, Paged, Patient,
    PaymentPayload, PaymentResult, Visit,
};
use crate::services::{ApiError, Http};

pub async fn list_appointments(
    http: &Http,
    status: Option<&str>,
) -> Result<Vec<Appointment>, ApiError> {
    let mut query = Vec::new();
    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }
    http.get_query("/api/receptionist/appointments", &query).await
}

pub async fn update_appointment_status(
    http: &Http,
    appt_id: i64,
    status: &str,
) -> Result<Appointment, ApiError> {
    http.put(
        &format!("/api/receptionist/appointments/{}/status", appt_id),
        &json!({ "status": status }),
    )
    .await
}

/// Turn a confirmed appointment into a waiting visit.
pub async fn checkin(
    http: &Http,
    appt_id: i64,
    payload: &CheckinPayload,
) -> Result<Visit, ApiError> {
    http.post(&format!("/api/receptionist/checkin/{}", appt_id), payload).await
}

pub async fn onsite_register(
    http: &Http,
    payload: &OnsiteRegisterPayload,
) -> Result<Visit, ApiError> {
    http.post("/api/receptionist/register", payload).await
}

pub async fn list_visits(http: &Http, status: Option<&str>) -> Result<Vec<Visit>, ApiError> {
    let mut query = Vec::new();
    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }
    http.get_query("/api/receptionist/visits", &query).await
}

pub async fn update_visit_status(
    http: &Http,
    visit_id: i64,
    status: &str,
) -> Result<Visit, ApiError> {
    http.put(
        &format!("/api/receptionist/visits/{}/status", visit_id),
        &json!({ "status": status }),
    )
    .await
}

pub async fn pay_visit(
    http: &Http,
    visit_id: i64,
    payload: &PaymentPayload,
) -> Result<PaymentResult, ApiError> {
    http.post(&format!("/api/receptionist/payment/{}", visit_id), payload).await
}

pub async fn list_patients(
    http: &Http,
    query: &[(&str, String)],
) -> Result<Vec<Patient>, ApiError> {
    http.get_query("/api/receptionist/patients", query).await
}

pub async fn list_bills(
    http: &Http,
    query: &[(&str, String)],
) -> Result<Paged<BillRow>, ApiError> {
    http.get_query("/api/receptionist/bills", query).await
}

pub async fn list_income_records(
    http: &Http,
    query: &[(&str, String)],
) -> Result<Paged<IncomeRecord>, ApiError> {
    http.get_query("/api/receptionist/income-records", query).await
}
