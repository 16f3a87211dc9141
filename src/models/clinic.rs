// ============================================================================
// CLINIC MODELS - Wire structures for departments, rooms, staff and visits
// ============================================================================
// Field names and status strings match the backend JSON exactly; status
// enums travel as the server emits them (启用/停用, 候诊中, 待确认, ...).
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Department {
    pub dept_id: i64,
    pub dept_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Room {
    pub room_id: i64,
    pub room_number: String,
    pub dept_id: i64,
    #[serde(default)]
    pub dept_name: Option<String>,
    pub status: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RoomPayload {
    pub room_number: String,
    pub dept_id: i64,
    pub status: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Schedule {
    pub schedule_id: i64,
    pub room_id: i64,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub dept_id: Option<i64>,
    #[serde(default)]
    pub dept_name: Option<String>,
    pub doctor_id: String,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub work_date: String,
    pub time_slot: String,
    pub max_patients: i64,
    pub current_patients: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SchedulePayload {
    pub room_id: i64,
    pub doctor_id: String,
    pub work_date: String,
    pub time_slot: String,
    pub max_patients: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Employee {
    pub emp_id: String,
    pub name: String,
    pub gender: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub position: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub dept_id: Option<i64>,
    #[serde(default)]
    pub dept_name: Option<String>,
    pub status: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EmployeePayload {
    pub emp_id: String,
    pub name: String,
    pub gender: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub status: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Patient {
    pub patient_id: i64,
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub id_card: Option<String>,
    pub phone: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Appointment {
    pub appt_id: i64,
    pub patient_name: String,
    pub phone: String,
    pub dept_id: i64,
    #[serde(default)]
    pub dept_name: Option<String>,
    pub expected_time: String,
    pub status: String,
    #[serde(default)]
    pub patient_id: Option<i64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AppointmentPayload {
    pub dept_id: i64,
    pub expected_time: String,
}

/// Walk-in registration at the reception desk.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OnsiteRegisterPayload {
    pub name: String,
    pub phone: String,
    pub dept_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_time: Option<String>,
}

/// Identity confirmation when checking in a confirmed appointment.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CheckinPayload {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Visit {
    pub visit_id: i64,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default)]
    pub doctor: Option<Employee>,
    #[serde(default)]
    pub appt_id: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub checkout_time: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MedicalRecord {
    pub record_id: i64,
    pub visit_id: i64,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub prescription: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MedicalRecordPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
