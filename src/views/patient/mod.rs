pub mod appointment_view;

pub use appointment_view::PatientAppointmentView;
