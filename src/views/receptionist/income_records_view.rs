use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{IncomeRecord, Paged};
use crate::services::receptionist_service;
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

#[function_component(ReceptionistIncomeRecordsView)]
pub fn receptionist_income_records_view() -> Html {
    let services = use_services();
    let page = use_state(|| None::<Paged<IncomeRecord>>);
    let error = use_state(|| None::<String>);
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();

    let search = {
        let services = services.clone();
        let page = page.clone();
        let error = error.clone();
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();
        Callback::from(move |_: ()| {
            let input = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value().trim().to_string())
                    .unwrap_or_default()
            };
            let mut query = Vec::new();
            for (key, v) in [("start_date", input(&start_ref)), ("end_date", input(&end_ref))] {
                if !v.is_empty() {
                    query.push((key, v));
                }
            }

            let services = services.clone();
            let page = page.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match receptionist_service::list_income_records(&services.http, &query).await {
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
            <h2>{ "收入流水" }</h2>
            <form class="inline-form" onsubmit={on_submit}>
                <input ref={start_ref} type="date" />
                <input ref={end_ref} type="date" />
                <button type="submit">{ "查询" }</button>
            </form>
            <ErrorBanner error={(*error).clone()} />
            {
                match &*page {
                    Some(p) => {
                        let total: f64 = p.items.iter().map(|r| r.amount).sum();
                        html! {
                            <>
                                <p>{ format!("共 {} 条，本页合计 {:.2} 元", p.total, total) }</p>
                                <table>
                                    <thead>
                                        <tr>
                                            <th>{ "流水号" }</th>
                                            <th>{ "账单号" }</th>
                                            <th>{ "科室" }</th>
                                            <th>{ "医生" }</th>
                                            <th>{ "金额" }</th>
                                            <th>{ "日期" }</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        { for p.items.iter().map(|r| html! {
                                            <tr key={r.record_id}>
                                                <td>{ r.record_id }</td>
                                                <td>{ r.bill_id }</td>
                                                <td>{ r.dept_name.clone().unwrap_or_else(|| r.dept_id.to_string()) }</td>
                                                <td>{ r.doctor_name.clone().or_else(|| r.doctor_id.clone()).unwrap_or_default() }</td>
                                                <td>{ format!("{:.2}", r.amount) }</td>
                                                <td>{ &r.record_date }</td>
                                            </tr>
                                        }) }
                                    </tbody>
                                </table>
                            </>
                        }
                    }
                    None => html! { <p>{ "加载中..." }</p> },
                }
            }
        </main>
    }
}
