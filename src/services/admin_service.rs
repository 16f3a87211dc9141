// Administration surface: rooms, schedules, employees, record search,
// statistics and billing reports.

use crate::models::{
    BillRow, Employee, EmployeePayload, IncomeRecord, IncomeReport, MedicalRecord,
    MedicalRecordPayload, Paged, Patient, Room, RoomPayload, Schedule, SchedulePayload, Visit,
    VisitReport,
};
use crate::services::{ApiError, Http};

// --- Rooms ---

pub async fn list_rooms(http: &Http) -> Result<Vec<Room>, ApiError> {
    http.get("/api/admin/rooms").await
}

pub async fn create_room(http: &Http, payload: &RoomPayload) -> Result<Room, ApiError> {
    http.post("/api/admin/rooms", payload).await
}

pub async fn update_room(http: &Http, room_id: i64, payload: &RoomPayload) -> Result<Room, ApiError> {
    http.put(&format!("/api/admin/rooms/{}", room_id), payload).await
}

// --- Schedules ---

pub async fn list_schedules(http: &Http, work_date: Option<&str>) -> Result<Vec<Schedule>, ApiError> {
    let mut query = Vec::new();
    if let Some(date) = work_date {
        query.push(("work_date", date.to_string()));
    }
    http.get_query("/api/admin/schedules", &query).await
}

pub async fn create_schedule(http: &Http, payload: &SchedulePayload) -> Result<Schedule, ApiError> {
    http.post("/api/admin/schedules", payload).await
}

pub async fn update_schedule(
    http: &Http,
    schedule_id: i64,
    payload: &SchedulePayload,
) -> Result<Schedule, ApiError> {
    http.put(&format!("/api/admin/schedules/{}", schedule_id), payload).await
}

pub async fn delete_schedule(http: &Http, schedule_id: i64) -> Result<serde_json::Value, ApiError> {
    http.delete(&format!("/api/admin/schedules/{}", schedule_id)).await
}

// --- Employees ---

pub async fn list_employees(http: &Http) -> Result<Vec<Employee>, ApiError> {
    http.get("/api/admin/employees").await
}

pub async fn create_employee(http: &Http, payload: &EmployeePayload) -> Result<Employee, ApiError> {
    http.post("/api/admin/employees", payload).await
}

pub async fn update_employee(
    http: &Http,
    emp_id: &str,
    payload: &EmployeePayload,
) -> Result<Employee, ApiError> {
    http.put(&format!("/api/admin/employees/{}", emp_id), payload).await
}

// --- Patient / visit search ---

pub async fn search_patients(http: &Http, query: &[(&str, String)]) -> Result<Vec<Patient>, ApiError> {
    http.get_query("/api/admin/patients/search", query).await
}

pub async fn search_visits(http: &Http, query: &[(&str, String)]) -> Result<Paged<Visit>, ApiError> {
    http.get_query("/api/admin/visits/search", query).await
}

// --- Per-visit medical record ---

pub async fn get_visit_medical_record(
    http: &Http,
    visit_id: i64,
) -> Result<Option<MedicalRecord>, ApiError> {
    http.get(&format!("/api/admin/visits/{}/medical-record", visit_id)).await
}

pub async fn upsert_visit_medical_record(
    http: &Http,
    visit_id: i64,
    payload: &MedicalRecordPayload,
) -> Result<MedicalRecord, ApiError> {
    http.put(&format!("/api/admin/visits/{}/medical-record", visit_id), payload).await
}

// --- Statistics ---

pub async fn stats_income(http: &Http, query: &[(&str, String)]) -> Result<IncomeReport, ApiError> {
    http.get_query("/api/admin/statistics/income", query).await
}

pub async fn stats_visits(http: &Http, query: &[(&str, String)]) -> Result<VisitReport, ApiError> {
    http.get_query("/api/admin/statistics/visits", query).await
}

// --- Bills & income records ---

pub async fn list_bills(http: &Http, query: &[(&str, String)]) -> Result<Paged<BillRow>, ApiError> {
    http.get_query("/api/admin/bills", query).await
}

pub async fn list_income_records(
    http: &Http,
    query: &[(&str, String)],
) -> Result<Paged<IncomeRecord>, ApiError> {
    http.get_query("/api/admin/income-records", query).await
}
