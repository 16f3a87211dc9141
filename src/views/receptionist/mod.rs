pub mod appointments_view;
pub mod bills_view;
pub mod income_records_view;
pub mod patients_view;
pub mod register_view;
pub mod visits_view;

pub use appointments_view::ReceptionistAppointmentsView;
pub use bills_view::ReceptionistBillsView;
pub use income_records_view::ReceptionistIncomeRecordsView;
pub use patients_view::ReceptionistPatientsView;
pub use register_view::ReceptionistRegisterView;
pub use visits_view::ReceptionistVisitsView;
