use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{BillRow, Paged};
use crate::services::receptionist_service;
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

#[function_component(ReceptionistBillsView)]
pub fn receptionist_bills_view() -> Html {
    let services = use_services();
    let page = use_state(|| None::<Paged<BillRow>>);
    let error = use_state(|| None::<String>);
    let pay_status_ref = use_node_ref();
    let phone_ref = use_node_ref();

    let search = {
        let services = services.clone();
        let page = page.clone();
        let error = error.clone();
        let pay_status_ref = pay_status_ref.clone();
        let phone_ref = phone_ref.clone();
        Callback::from(move |_: ()| {
            let mut query = Vec::new();
            let pay_status = pay_status_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();
            if !pay_status.is_empty() {
                query.push(("pay_status", pay_status));
            }
            let phone = phone_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value().trim().to_string())
                .unwrap_or_default();
            if !phone.is_empty() {
                query.push(("phone", phone));
            }

            let services = services.clone();
            let page = page.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match receptionist_service::list_bills(&services.http, &query).await {
                    Ok(result) => {
                        error.set(None);
                        page.set(Some(result));
                    }
                    Err(e) => error.set(Some(e.message)),
                }
            });
        })
    };

    {
        let search = search.clone();
        use_effect_with((), move |_| {
            search.emit(());
            || ()
        });
    }

    let on_submit = {
        let search = search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            search.emit(());
        })
    };

    html! {
        <main class="page">
            <h2>{ "账单查询" }</h2>
            <form class="inline-form" onsubmit={on_submit}>
                <select ref={pay_status_ref}>
                    <option value="" selected=true>{ "全部支付状态" }</option>
                    <option value="未支付">{ "未支付" }</option>
                    <option value="已支付">{ "已支付" }</option>
                </select>
                <input ref={phone_ref} type="tel" placeholder="患者手机号" />
                <button type="submit">{ "查询" }</button>
            </form>
            <ErrorBanner error={(*error).clone()} />
            {
                match &*page {
                    Some(p) => html! {
                        <>
                            <p>{ format!("共 {} 条", p.total) }</p>
                            <table>
                                <thead>
                                    <tr>
                                        <th>{ "账单号" }</th>
                                        <th>{ "就诊号" }</th>
                                        <th>{ "患者" }</th>
                                        <th>{ "总金额" }</th>
                                        <th>{ "医保" }</th>
                                        <th>{ "自付" }</th>
                                        <th>{ "状态" }</th>
                                        <th>{ "支付时间" }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for p.items.iter().map(|row| html! {
                                        <tr key={row.bill.bill_id}>
                                            <td>{ row.bill.bill_id }</td>
                                            <td>{ row.bill.visit_id }</td>
                                            <td>{
                                                row.visit
                                                    .as_ref()
                                                    .and_then(|v| v.patient.as_ref())
                                                    .map(|p| p.name.clone())
                                                    .unwrap_or_default()
                                            }</td>
                                            <td>{ format!("{:.2}", row.bill.total_amount) }</td>
                                            <td>{ format!("{:.2}", row.bill.insurance_amount) }</td>
                                            <td>{ format!("{:.2}", row.bill.self_pay_amount) }</td>
                                            <td>{ &row.bill.pay_status }</td>
                                            <td>{ row.bill.pay_time.clone().unwrap_or_default() }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </>
                    },
                    None => html! { <p>{ "加载中..." }</p> },
                }
            }
        </main>
    }
}
