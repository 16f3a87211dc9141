// ============================================================================
// APP SHELL - Navigation, guard application and context wiring
// ============================================================================
// Hand-rolled history routing: the current path lives in yew state, the
// popstate listener keeps it in sync with the back/forward buttons, and
// the route guard decides on every path or session change whether the
// page renders or the browser is sent somewhere else.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::router::{self, Guard, Route};
use crate::services::{auth_service, Http};
use crate::stores::SessionStore;

use super::admin::{
    AdminBillsView, AdminEmployeesView, AdminIncomeRecordsView, AdminPatientsView,
    AdminRoomsView, AdminSchedulesView, AdminStatisticsView, AdminVisitsView,
};
use super::auth::{LoginView, RegisterView};
use super::patient::PatientAppointmentView;
use super::receptionist::{
    ReceptionistAppointmentsView, ReceptionistBillsView, ReceptionistIncomeRecordsView,
    ReceptionistPatientsView, ReceptionistRegisterView, ReceptionistVisitsView,
};
use super::shared::Header;

/// Shared handles every view reaches through context: the gateway and
/// the session store it clears on 401.
#[derive(Clone)]
pub struct Services {
    pub http: Rc<Http>,
    pub session: SessionStore,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.http, &other.http)
    }
}

/// History-API navigation handle. Path state includes the query string.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    path: UseStateHandle<String>,
}

impl Navigator {
    pub fn path(&self) -> String {
        (*self.path).clone()
    }

    pub fn push(&self, to: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(to));
        }
        self.path.set(to.to_string());
    }

    /// Like `push` but without polluting history; used for guard redirects.
    pub fn replace(&self, to: &str) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(to));
        }
        self.path.set(to.to_string());
    }
}

#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services context not set")
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator context not set")
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| {
            let location = w.location();
            let path = location.pathname().ok()?;
            let query = location.search().ok()?;
            Some(format!("{}{}", path, query))
        })
        .unwrap_or_else(|| "/".to_string())
}

#[function_component(App)]
pub fn app() -> Html {
    let path = use_state(current_path);
    let session_epoch = use_state(|| 0u32);

    let services = use_memo((), |_| {
        let session = SessionStore::browser();
        Services {
            http: Rc::new(Http::new(session.clone())),
            session,
        }
    });

    // Refresh the cached user once on boot. A stale token comes back as
    // a 401 and the gateway drops the session on its own.
    {
        let services = services.clone();
        use_effect_with((), move |_| {
            let (token, _) = services.session.read();
            if !token.is_empty() {
                let http = services.http.clone();
                let session = services.session.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Ok(profile) = auth_service::profile(&http).await {
                        session.write(&token, &profile.user);
                    }
                });
            }
            || ()
        });
    }

    // Re-render on session changes (login, logout, gateway 401).
    {
        let session = services.session.clone();
        let epoch = session_epoch.clone();
        use_effect_with((), move |_| {
            let counter = Rc::new(Cell::new(0u32));
            session.subscribe(move |_| {
                counter.set(counter.get() + 1);
                epoch.set(counter.get());
            });
            || ()
        });
    }

    // Back/forward buttons. Registered once for the app's lifetime, so
    // forgetting the closure is safe.
    {
        let path = path.clone();
        use_effect_with((), move |_| {
            if let Some(window) = web_sys::window() {
                let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                    path.set(current_path());
                });
                let _ = window
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            || ()
        });
    }

    let navigator = Navigator { path: path.clone() };

    let (token, user) = services.session.read();
    let guard = router::check(&path, &token, user.as_ref());

    // Apply redirects as a side effect, never during render.
    {
        let services = services.clone();
        let navigator = navigator.clone();
        let guard = guard.clone();
        use_effect_with(((*path).clone(), *session_epoch), move |_| {
            if let Guard::Redirect { to, clear_session } = guard {
                if clear_session {
                    services.session.clear();
                }
                log::debug!("🧭 Guard redirect -> {}", to);
                navigator.replace(&to);
            }
            || ()
        });
    }

    let page = match &guard {
        Guard::Allow => render_route(Route::from_path(&path)),
        Guard::Redirect { .. } => html! {},
    };

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <ContextProvider<Navigator> context={navigator}>
                { page }
            </ContextProvider<Navigator>>
        </ContextProvider<Services>>
    }
}

fn with_header(inner: Html) -> Html {
    html! {
        <>
            <Header />
            { inner }
        </>
    }
}

fn render_route(route: Route) -> Html {
    match route {
        // Home and unmatched paths always resolve to a redirect.
        Route::Home | Route::NotFound => html! {},
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::PatientAppointment => with_header(html! { <PatientAppointmentView /> }),
        Route::ReceptionistRegister => with_header(html! { <ReceptionistRegisterView /> }),
        Route::ReceptionistAppointments => with_header(html! { <ReceptionistAppointmentsView /> }),
        Route::ReceptionistVisits => with_header(html! { <ReceptionistVisitsView /> }),
        Route::ReceptionistPatients => with_header(html! { <ReceptionistPatientsView /> }),
        Route::ReceptionistBills => with_header(html! { <ReceptionistBillsView /> }),
        Route::ReceptionistIncomeRecords => {
            with_header(html! { <ReceptionistIncomeRecordsView /> })
        }
        Route::AdminRooms => with_header(html! { <AdminRoomsView /> }),
        Route::AdminSchedules => with_header(html! { <AdminSchedulesView /> }),
        Route::AdminEmployees => with_header(html! { <AdminEmployeesView /> }),
        Route::AdminStatistics => with_header(html! { <AdminStatisticsView /> }),
        Route::AdminPatients => with_header(html! { <AdminPatientsView /> }),
        Route::AdminVisits => with_header(html! { <AdminVisitsView /> }),
        Route::AdminBills => with_header(html! { <AdminBillsView /> }),
        Route::AdminIncomeRecords => with_header(html! { <AdminIncomeRecordsView /> }),
    }
}
