// Appointment management: confirm, cancel and check patients in.

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::{Appointment, CheckinPayload};
use crate::services::{receptionist_service, ApiError, Http};
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

async fn load(http: &Http, status: &str) -> Result<Vec<Appointment>, ApiError> {
    let filter = (!status.is_empty()).then_some(status);
    receptionist_service::list_appointments(http, filter).await
}

#[function_component(ReceptionistAppointmentsView)]
pub fn receptionist_appointments_view() -> Html {
    let services = use_services();
    let appointments = use_state(Vec::<Appointment>::new);
    let status_filter = use_state(String::new);
    let error = use_state(|| None::<String>);

    {
        let services = services.clone();
        let appointments = appointments.clone();
        let error = error.clone();
        use_effect_with((*status_filter).clone(), move |status: &String| {
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load(&services.http, &status).await {
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

    // One reload-after-action helper shared by the three row actions.
    let run_action = {
        let services = services.clone();
        let appointments = appointments.clone();
        let status_filter = status_filter.clone();
        let error = error.clone();
        move |action: Action| {
            let services = services.clone();
            let appointments = appointments.clone();
            let status = (*status_filter).clone();
            let error = error.clone();
            Callback::from(move |_: MouseEvent| {
                let services = services.clone();
                let appointments = appointments.clone();
                let status = status.clone();
                let error = error.clone();
                let action = action.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = match &action {
                        Action::SetStatus { appt_id, status } => {
                            receptionist_service::update_appointment_status(
                                &services.http,
                                *appt_id,
                                status,
                            )
                            .await
                            .map(|_| ())
                        }
                        Action::Checkin { appt_id, phone } => receptionist_service::checkin(
                            &services.http,
                            *appt_id,
                            &CheckinPayload {
                                phone: phone.clone(),
                                id_card: None,
                            },
                        )
                        .await
                        .map(|visit| {
                            log::info!("🏥 Appointment {} checked in as visit {}", appt_id, visit.visit_id);
                        }),
                    };
                    match result {
                        Ok(()) => {
                            error.set(None);
                            match load(&services.http, &status).await {
                                Ok(list) => appointments.set(list),
                                Err(e) => error.set(Some(e.message)),
                            }
                        }
                        Err(e) => error.set(Some(e.message)),
                    }
                });
            })
        }
    };

    html! {
        <main class="page">
            <h2>{ "预约管理" }</h2>
            <select onchange={on_filter_change}>
                <option value="" selected={status_filter.is_empty()}>{ "全部状态" }</option>
                { for ["待确认", "已确认", "已完成", "已取消"].iter().map(|s| html! {
                    <option value={*s} selected={*status_filter == *s}>{ *s }</option>
                }) }
            </select>
            <ErrorBanner error={(*error).clone()} />
            <table>
                <thead>
                    <tr>
                        <th>{ "患者" }</th>
                        <th>{ "电话" }</th>
                        <th>{ "科室" }</th>
                        <th>{ "就诊时间" }</th>
                        <th>{ "状态" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for appointments.iter().map(|a| {
                        let confirm = run_action(Action::SetStatus {
                            appt_id: a.appt_id,
                            status: "已确认".to_string(),
                        });
                        let cancel = run_action(Action::SetStatus {
                            appt_id: a.appt_id,
                            status: "已取消".to_string(),
                        });
                        let checkin = run_action(Action::Checkin {
                            appt_id: a.appt_id,
                            phone: a.phone.clone(),
                        });
                        html! {
                            <tr key={a.appt_id}>
                                <td>{ &a.patient_name }</td>
                                <td>{ &a.phone }</td>
                                <td>{ a.dept_name.clone().unwrap_or_default() }</td>
                                <td>{ &a.expected_time }</td>
                                <td>{ &a.status }</td>
                                <td>
                                    if a.status == "待确认" {
                                        <button onclick={confirm}>{ "确认" }</button>
                                    }
                                    if a.status == "已确认" {
                                        <button onclick={checkin}>{ "到诊" }</button>
                                    }
                                    if a.status == "待确认" || a.status == "已确认" {
                                        <button onclick={cancel}>{ "取消" }</button>
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

#[derive(Clone)]
enum Action {
    SetStatus { appt_id: i64, status: String },
    Checkin { appt_id: i64, phone: String },
}
