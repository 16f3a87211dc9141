// Patient landing page: book an appointment, see existing ones, cancel
// the ones that have not happened yet.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Appointment, AppointmentPayload, Department};
use crate::services::{patient_service, Http};
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

const CANCELLABLE: [&str; 2] = ["待确认", "已确认"];

async fn load_appointments(
    http: &Http,
    status: &str,
) -> Result<Vec<Appointment>, crate::services::ApiError> {
    let filter = (!status.is_empty()).then_some(status);
    patient_service::query_appointments(http, filter).await
}

#[function_component(PatientAppointmentView)]
pub fn patient_appointment_view() -> Html {
    let services = use_services();
    let departments = use_state(Vec::<Department>::new);
    let appointments = use_state(Vec::<Appointment>::new);
    let status_filter = use_state(String::new);
    let error = use_state(|| None::<String>);
    let dept_ref = use_node_ref();
    let time_ref = use_node_ref();

    // Departments once, on mount.
    {
        let services = services.clone();
        let departments = departments.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match patient_service::list_departments(&services.http).await {
                    Ok(list) => departments.set(list),
                    Err(e) => error.set(Some(e.message)),
                }
            });
            || ()
        });
    }

    // Appointments, refreshed whenever the status filter changes.
    {
        let services = services.clone();
        let appointments = appointments.clone();
        let error = error.clone();
        use_effect_with((*status_filter).clone(), move |status: &String| {
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load_appointments(&services.http, &status).await {
                    Ok(list) => appointments.set(list),
                    Err(e) => error.set(Some(e.message)),
                }
            });
            || ()
        });
    }

    let on_filter_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                status_filter.set(select.value());
            }
        })
    };

    let on_book = {
        let services = services.clone();
        let appointments = appointments.clone();
        let status_filter = status_filter.clone();
        let error = error.clone();
        let dept_ref = dept_ref.clone();
        let time_ref = time_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let dept_id = dept_ref
                .cast::<HtmlSelectElement>()
                .and_then(|s| s.value().parse::<i64>().ok());
            let expected_time = time_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            let Some(dept_id) = dept_id else {
                error.set(Some("请选择科室".to_string()));
                return;
            };
            if expected_time.is_empty() {
                error.set(Some("请选择就诊时间".to_string()));
                return;
            }

            let payload = AppointmentPayload {
                dept_id,
                expected_time: expected_time.replace('T', " "),
            };
            let services = services.clone();
            let appointments = appointments.clone();
            let status = (*status_filter).clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match patient_service::create_appointment(&services.http, &payload).await {
                    Ok(appt) => {
                        log::info!("📅 Appointment {} created", appt.appt_id);
                        error.set(None);
                        match load_appointments(&services.http, &status).await {
                            Ok(list) => appointments.set(list),
                            Err(e) => error.set(Some(e.message)),
                        }
                    }
                    Err(e) => error.set(Some(e.message)),
                }
            });
        })
    };

    let cancel = |appt_id: i64| {
        let services = services.clone();
        let appointments = appointments.clone();
        let status_filter = status_filter.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let services = services.clone();
            let appointments = appointments.clone();
            let status = (*status_filter).clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match patient_service::cancel_appointment(&services.http, appt_id).await {
                    Ok(_) => match load_appointments(&services.http, &status).await {
                        Ok(list) => appointments.set(list),
                        Err(e) => error.set(Some(e.message)),
                    },
                    Err(e) => error.set(Some(e.message)),
                }
            });
        })
    };

    html! {
        <main class="page">
            <h2>{ "预约挂号" }</h2>
            <form class="inline-form" onsubmit={on_book}>
                <select ref={dept_ref}>
                    <option value="">{ "选择科室" }</option>
                    { for departments.iter().map(|d| html! {
                        <option value={d.dept_id.to_string()}>{ &d.dept_name }</option>
                    }) }
                </select>
                <input ref={time_ref} type="datetime-local" />
                <button type="submit">{ "预约" }</button>
            </form>
            <ErrorBanner error={(*error).clone()} />

            <h3>{ "我的预约" }</h3>
            <select onchange={on_filter_change}>
                <option value="" selected={status_filter.is_empty()}>{ "全部状态" }</option>
                { for ["待确认", "已确认", "已完成", "已取消"].iter().map(|s| html! {
                    <option value={*s} selected={*status_filter == *s}>{ *s }</option>
                }) }
            </select>
            <table>
                <thead>
                    <tr>
                        <th>{ "科室" }</th>
                        <th>{ "就诊时间" }</th>
                        <th>{ "状态" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for appointments.iter().map(|a| {
                        let can_cancel = CANCELLABLE.contains(&a.status.as_str());
                        html! {
                            <tr key={a.appt_id}>
                                <td>{ a.dept_name.clone().unwrap_or_default() }</td>
                                <td>{ &a.expected_time }</td>
                                <td>{ &a.status }</td>
                                <td>
                                    if can_cancel {
                                        <button onclick={cancel(a.appt_id)}>{ "取消" }</button>
                                    }
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </main>
    }
}
