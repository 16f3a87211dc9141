// Visit lifecycle board: waiting room -> in consultation -> to pay ->
// discharged. Payment happens inline on the row being settled.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{PaymentPayload, Visit};
use crate::services::{receptionist_service, ApiError, Http};
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

async fn load(http: &Http, status: &str) -> Result<Vec<Visit>, ApiError> {
    let filter = (!status.is_empty()).then_some(status);
    receptionist_service::list_visits(http, filter).await
}

#[function_component(ReceptionistVisitsView)]
pub fn receptionist_visits_view() -> Html {
    let services = use_services();
    let visits = use_state(Vec::<Visit>::new);
    let status_filter = use_state(String::new);
    let paying = use_state(|| None::<i64>);
    let error = use_state(|| None::<String>);
    let total_ref = use_node_ref();
    let insurance_ref = use_node_ref();

    {
        let services = services.clone();
        let visits = visits.clone();
        let error = error.clone();
        use_effect_with((*status_filter).clone(), move |status: &String| {
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load(&services.http, &status).await {
                    Ok(list) => visits.set(list),
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

    let set_status = {
        let services = services.clone();
        let visits = visits.clone();
        let status_filter = status_filter.clone();
        let error = error.clone();
        move |visit_id: i64, new_status: &'static str| {
            let services = services.clone();
            let visits = visits.clone();
            let status = (*status_filter).clone();
            let error = error.clone();
            Callback::from(move |_: MouseEvent| {
                let services = services.clone();
                let visits = visits.clone();
                let status = status.clone();
                let error = error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match receptionist_service::update_visit_status(
                        &services.http,
                        visit_id,
                        new_status,
                    )
                    .await
                    {
                        Ok(_) => {
                            error.set(None);
                            match load(&services.http, &status).await {
                                Ok(list) => visits.set(list),
                                Err(e) => error.set(Some(e.message)),
                            }
                        }
                        Err(e) => error.set(Some(e.message)),
                    }
                });
            })
        }
    };

    let on_pay = {
        let services = services.clone();
        let visits = visits.clone();
        let status_filter = status_filter.clone();
        let paying = paying.clone();
        let error = error.clone();
        let total_ref = total_ref.clone();
        let insurance_ref = insurance_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(visit_id) = *paying else { return };

            let value = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value().trim().to_string())
                    .unwrap_or_default()
            };
            let total = value(&total_ref);
            let insurance = value(&insurance_ref);
            if total.parse::<f64>().is_err() {
                error.set(Some("请输入正确的总金额".to_string()));
                return;
            }

            let payload = PaymentPayload {
                total_amount: total,
                insurance_amount: if insurance.is_empty() { "0".to_string() } else { insurance },
                self_pay_amount: None,
            };
            let services = services.clone();
            let visits = visits.clone();
            let status = (*status_filter).clone();
            let paying = paying.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match receptionist_service::pay_visit(&services.http, visit_id, &payload).await {
                    Ok(result) => {
                        log::info!(
                            "💰 Visit {} settled, bill {} ({})",
                            visit_id,
                            result.bill.bill_id,
                            result.bill.total_amount
                        );
                        paying.set(None);
                        error.set(None);
                        match load(&services.http, &status).await {
                            Ok(list) => visits.set(list),
                            Err(e) => error.set(Some(e.message)),
                        }
                    }
                    Err(e) => error.set(Some(e.message)),
                }
            });
        })
    };

    html! {
        <main class="page">
            <h2>{ "就诊管理" }</h2>
            <select onchange={on_filter_change}>
                <option value="" selected={status_filter.is_empty()}>{ "全部状态" }</option>
                { for ["候诊中", "就诊中", "待缴费", "已离院"].iter().map(|s| html! {
                    <option value={*s} selected={*status_filter == *s}>{ *s }</option>
                }) }
            </select>
            <ErrorBanner error={(*error).clone()} />
            <table>
                <thead>
                    <tr>
                        <th>{ "就诊号" }</th>
                        <th>{ "患者" }</th>
                        <th>{ "诊室" }</th>
                        <th>{ "医生" }</th>
                        <th>{ "到诊时间" }</th>
                        <th>{ "状态" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for visits.iter().map(|v| {
                        let start = set_status(v.visit_id, "就诊中");
                        let finish = set_status(v.visit_id, "待缴费");
                        let open_payment = {
                            let paying = paying.clone();
                            let visit_id = v.visit_id;
                            Callback::from(move |_: MouseEvent| paying.set(Some(visit_id)))
                        };
                        html! {
                            <tr key={v.visit_id}>
                                <td>{ v.visit_id }</td>
                                <td>{ v.patient.as_ref().map(|p| p.name.clone()).unwrap_or_default() }</td>
                                <td>{ v.room.as_ref().map(|r| r.room_number.clone()).unwrap_or_default() }</td>
                                <td>{ v.doctor.as_ref().map(|d| d.name.clone()).unwrap_or_default() }</td>
                                <td>{ v.check_in_time.clone().unwrap_or_default() }</td>
                                <td>{ &v.status }</td>
                                <td>
                                    if v.status == "候诊中" {
                                        <button onclick={start}>{ "开始就诊" }</button>
                                    }
                                    if v.status == "就诊中" {
                                        <button onclick={finish}>{ "诊毕" }</button>
                                    }
                                    if v.status == "待缴费" {
                                        <button onclick={open_payment}>{ "收费" }</button>
                                    }
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
            {
                match *paying {
                    Some(visit_id) => html! {
                        <form class="inline-form" onsubmit={on_pay.clone()}>
                            <span>{ format!("就诊号 {} 收费：", visit_id) }</span>
                            <input ref={total_ref.clone()} type="text" placeholder="总金额" />
                            <input ref={insurance_ref.clone()} type="text" placeholder="医保金额（默认0）" />
                            <button type="submit">{ "确认收费" }</button>
                        </form>
                    },
                    None => html! {},
                }
            }
        </main>
    }
}
