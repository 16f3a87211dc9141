// ============================================================================
// ROUTER - Route table, role guard and landing pages
// ============================================================================
// The guard is a pure function over (target path, session snapshot); the
// navigation glue in views/app.rs applies its decision. Redirects to the
// login page keep the blocked target in a `redirect` query parameter so
// the login view can send the user back after authenticating.
// ============================================================================

use crate::models::{Role, User};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    Login,
    Register,
    PatientAppointment,
    ReceptionistRegister,
    ReceptionistAppointments,
    ReceptionistVisits,
    ReceptionistPatients,
    ReceptionistBills,
    ReceptionistIncomeRecords,
    AdminRooms,
    AdminSchedules,
    AdminEmployees,
    AdminStatistics,
    AdminPatients,
    AdminVisits,
    AdminBills,
    AdminIncomeRecords,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        // Ignore any query string when matching.
        let path = path.split('?').next().unwrap_or(path);
        match path {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/patient/appointment" => Route::PatientAppointment,
            "/receptionist/register" => Route::ReceptionistRegister,
            "/receptionist/appointments" => Route::ReceptionistAppointments,
            "/receptionist/visits" => Route::ReceptionistVisits,
            "/receptionist/patients" => Route::ReceptionistPatients,
            "/receptionist/bills" => Route::ReceptionistBills,
            "/receptionist/income-records" => Route::ReceptionistIncomeRecords,
            "/admin/rooms" => Route::AdminRooms,
            "/admin/schedules" => Route::AdminSchedules,
            "/admin/employees" => Route::AdminEmployees,
            "/admin/statistics" => Route::AdminStatistics,
            "/admin/patients" => Route::AdminPatients,
            "/admin/visits" => Route::AdminVisits,
            "/admin/bills" => Route::AdminBills,
            "/admin/income-records" => Route::AdminIncomeRecords,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::PatientAppointment => "/patient/appointment",
            Route::ReceptionistRegister => "/receptionist/register",
            Route::ReceptionistAppointments => "/receptionist/appointments",
            Route::ReceptionistVisits => "/receptionist/visits",
            Route::ReceptionistPatients => "/receptionist/patients",
            Route::ReceptionistBills => "/receptionist/bills",
            Route::ReceptionistIncomeRecords => "/receptionist/income-records",
            Route::AdminRooms => "/admin/rooms",
            Route::AdminSchedules => "/admin/schedules",
            Route::AdminEmployees => "/admin/employees",
            Route::AdminStatistics => "/admin/statistics",
            Route::AdminPatients => "/admin/patients",
            Route::AdminVisits => "/admin/visits",
            Route::AdminBills => "/admin/bills",
            Route::AdminIncomeRecords => "/admin/income-records",
            Route::NotFound => "/",
        }
    }

    /// Roles allowed on this route; `None` means public.
    pub fn required_roles(self) -> Option<&'static [Role]> {
        match self {
            Route::Home | Route::Login | Route::Register | Route::NotFound => None,
            Route::PatientAppointment => Some(&[Role::Patient]),
            Route::ReceptionistRegister
            | Route::ReceptionistAppointments
            | Route::ReceptionistVisits
            | Route::ReceptionistPatients
            | Route::ReceptionistBills
            | Route::ReceptionistIncomeRecords => Some(&[Role::Receptionist]),
            Route::AdminRooms
            | Route::AdminSchedules
            | Route::AdminEmployees
            | Route::AdminStatistics
            | Route::AdminPatients
            | Route::AdminVisits
            | Route::AdminBills
            | Route::AdminIncomeRecords => Some(&[Role::Admin]),
        }
    }
}

/// Default page for a role after authentication. Total and pure: every
/// unrecognized or absent role lands on the login page.
pub fn landing_route(user: Option<&User>) -> Route {
    match user.map(|u| u.role) {
        Some(Role::Patient) => Route::PatientAppointment,
        Some(Role::Receptionist) => Route::ReceptionistRegister,
        Some(Role::Admin) => Route::AdminStatistics,
        Some(Role::Unknown) | None => Route::Login,
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Guard {
    Allow,
    Redirect { to: String, clear_session: bool },
}

impl Guard {
    fn redirect(to: &str) -> Self {
        Guard::Redirect {
            to: to.to_string(),
            clear_session: false,
        }
    }

    fn to_login_and_clear(original_target: &str) -> Self {
        Guard::Redirect {
            to: format!("/login?redirect={}", original_target),
            clear_session: true,
        }
    }
}

/// Evaluate one navigation attempt against the current session.
pub fn check(path: &str, token: &str, user: Option<&User>) -> Guard {
    let route = Route::from_path(path);
    let has_session = !token.is_empty() && user.is_some();

    match route {
        Route::NotFound => Guard::redirect("/"),
        Route::Home => {
            if has_session {
                Guard::redirect(landing_route(user).path())
            } else {
                Guard::redirect("/login")
            }
        }
        Route::Login | Route::Register => {
            if has_session {
                Guard::redirect(landing_route(user).path())
            } else {
                Guard::Allow
            }
        }
        protected => {
            // required_roles is Some for every remaining route.
            let Some(roles) = protected.required_roles() else {
                return Guard::Allow;
            };
            if token.is_empty() {
                return Guard::to_login_and_clear(path);
            }
            match user {
                Some(u) if roles.contains(&u.role) => Guard::Allow,
                _ => Guard::to_login_and_clear(path),
            }
        }
    }
}

/// Extract a query parameter from an in-app path like `/login?redirect=/x`.
pub fn query_param(path: &str, key: &str) -> Option<String> {
    let (_, query) = path.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key && !v.is_empty()).then(|| v.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            user_id: 1,
            username: "u".to_string(),
            role,
            status: None,
            emp_id: None,
            employee: None,
            patient_id: None,
            patient: None,
        }
    }

    #[test]
    fn landing_mapping_is_total() {
        assert_eq!(landing_route(Some(&user(Role::Patient))), Route::PatientAppointment);
        assert_eq!(landing_route(Some(&user(Role::Receptionist))), Route::ReceptionistRegister);
        assert_eq!(landing_route(Some(&user(Role::Admin))), Route::AdminStatistics);
        assert_eq!(landing_route(Some(&user(Role::Unknown))), Route::Login);
        assert_eq!(landing_route(None), Route::Login);
    }

    #[test]
    fn protected_route_without_session_redirects_with_return_path() {
        let guard = check("/admin/rooms", "", None);
        assert_eq!(
            guard,
            Guard::Redirect {
                to: "/login?redirect=/admin/rooms".to_string(),
                clear_session: true,
            }
        );
    }

    #[test]
    fn root_with_session_goes_to_role_landing() {
        let u = user(Role::Receptionist);
        let guard = check("/", "t", Some(&u));
        assert_eq!(
            guard,
            Guard::Redirect {
                to: "/receptionist/register".to_string(),
                clear_session: false,
            }
        );
    }

    #[test]
    fn root_without_session_goes_to_login() {
        assert_eq!(
            check("/", "", None),
            Guard::Redirect {
                to: "/login".to_string(),
                clear_session: false,
            }
        );
    }

    #[test]
    fn login_with_session_goes_to_role_landing() {
        let u = user(Role::Admin);
        let guard = check("/login", "t", Some(&u));
        assert_eq!(
            guard,
            Guard::Redirect {
                to: "/admin/statistics".to_string(),
                clear_session: false,
            }
        );
    }

    #[test]
    fn role_mismatch_clears_session_and_redirects() {
        let u = user(Role::Admin);
        let guard = check("/patient/appointment", "t", Some(&u));
        assert_eq!(
            guard,
            Guard::Redirect {
                to: "/login?redirect=/patient/appointment".to_string(),
                clear_session: true,
            }
        );
    }

    #[test]
    fn token_without_user_is_insufficient_for_role_routes() {
        let guard = check("/receptionist/visits", "t", None);
        assert_eq!(
            guard,
            Guard::Redirect {
                to: "/login?redirect=/receptionist/visits".to_string(),
                clear_session: true,
            }
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        let u = user(Role::Receptionist);
        assert_eq!(check("/receptionist/bills", "t", Some(&u)), Guard::Allow);
        assert_eq!(check("/login", "", None), Guard::Allow);
        assert_eq!(check("/register", "", None), Guard::Allow);
    }

    #[test]
    fn income_records_page_is_receptionist_only() {
        assert_eq!(
            Route::from_path("/receptionist/income-records"),
            Route::ReceptionistIncomeRecords
        );
        let desk = user(Role::Receptionist);
        assert_eq!(
            check("/receptionist/income-records", "t", Some(&desk)),
            Guard::Allow
        );
        let admin = user(Role::Admin);
        assert_eq!(
            check("/receptionist/income-records", "t", Some(&admin)),
            Guard::Redirect {
                to: "/login?redirect=/receptionist/income-records".to_string(),
                clear_session: true,
            }
        );
    }

    #[test]
    fn unmatched_paths_redirect_to_root() {
        assert_eq!(
            check("/does/not/exist", "", None),
            Guard::Redirect {
                to: "/".to_string(),
                clear_session: false,
            }
        );
    }

    #[test]
    fn query_strings_do_not_affect_matching() {
        assert_eq!(Route::from_path("/login?redirect=/admin/rooms"), Route::Login);
        assert_eq!(Route::from_path("/admin/rooms?x=1"), Route::AdminRooms);
    }

    #[test]
    fn query_param_extraction() {
        assert_eq!(
            query_param("/login?redirect=/admin/rooms", "redirect"),
            Some("/admin/rooms".to_string())
        );
        assert_eq!(query_param("/login?redirect=", "redirect"), None);
        assert_eq!(query_param("/login", "redirect"), None);
        assert_eq!(
            query_param("/login?a=1&redirect=/x", "redirect"),
            Some("/x".to_string())
        );
    }
}
