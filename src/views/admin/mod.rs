pub mod bills_view;
pub mod employees_view;
pub mod income_records_view;
pub mod patients_view;
pub mod rooms_view;
pub mod schedules_view;
pub mod statistics_view;
pub mod visits_view;

pub use bills_view::AdminBillsView;
pub use employees_view::AdminEmployeesView;
pub use income_records_view::AdminIncomeRecordsView;
pub use patients_view::AdminPatientsView;
pub use rooms_view::AdminRoomsView;
pub use schedules_view::AdminSchedulesView;
pub use statistics_view::AdminStatisticsView;
pub use visits_view::AdminVisitsView;
