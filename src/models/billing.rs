use serde::{Deserialize, Serialize};

use super::clinic::Visit;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Bill {
    pub bill_id: i64,
    pub visit_id: i64,
    pub total_amount: f64,
    pub insurance_amount: f64,
    pub self_pay_amount: f64,
    pub pay_status: String,
    #[serde(default)]
    pub pay_time: Option<String>,
}

/// Bill listing row (bill plus the visit it settles).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BillRow {
    pub bill: Bill,
    #[serde(default)]
    pub visit: Option<Visit>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaymentPayload {
    pub total_amount: String,
    pub insurance_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_pay_amount: Option<String>,
}

/// Result of registering a payment: the closed visit and its bill.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaymentResult {
    pub visit: Visit,
    pub bill: Bill,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct IncomeRecord {
    pub record_id: i64,
    pub bill_id: i64,
    pub dept_id: i64,
    #[serde(default)]
    pub dept_name: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub amount: f64,
    pub record_date: String,
}

/// Offset/limit page as returned by the search endpoints.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Paged<T> {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<T>,
}

/// One row of an income report; which keys are present depends on the
/// grouping axis (day / dept / doctor).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct IncomeBucket {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub dept_id: Option<i64>,
    #[serde(default)]
    pub dept_name: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub amount: f64,
    pub records: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct IncomeReport {
    pub group_by: String,
    pub start_date: String,
    pub end_date: String,
    pub data: Vec<IncomeBucket>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VisitBucket {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub dept_id: Option<i64>,
    #[serde(default)]
    pub dept_name: Option<String>,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub visits: i64,
    pub patients: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VisitReport {
    pub group_by: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub status: Option<String>,
    pub data: Vec<VisitBucket>,
}
