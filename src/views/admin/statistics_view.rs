// Income and visit statistics over a date range, grouped by day,
// department or doctor. Both reports share the same filter form.

use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{IncomeReport, VisitReport};
use crate::services::admin_service;
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

const GROUPINGS: [(&str, &str); 3] = [("day", "按日"), ("dept", "按科室"), ("doctor", "按医生")];

#[function_component(AdminStatisticsView)]
pub fn admin_statistics_view() -> Html {
    let services = use_services();
    let income = use_state(|| None::<IncomeReport>);
    let visits = use_state(|| None::<VisitReport>);
    let error = use_state(|| None::<String>);
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let filters = use_state(|| (today.clone(), today.clone(), "day".to_string()));
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();
    let group_ref = use_node_ref();

    {
        let services = services.clone();
        let income = income.clone();
        let visits = visits.clone();
        let error = error.clone();
        use_effect_with((*filters).clone(), move |(start, end, group_by)| {
            let query = vec![
                ("start_date", start.clone()),
                ("end_date", end.clone()),
                ("group_by", group_by.clone()),
            ];
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::stats_income(&services.http, &query).await {
                    Ok(report) => income.set(Some(report)),
                    Err(e) => error.set(Some(e.message)),
                }
                match admin_service::stats_visits(&services.http, &query).await {
                    Ok(report) => visits.set(Some(report)),
                    Err(e) => error.set(Some(e.message)),
                }
            });
            || ()
        });
    }

    let on_submit = {
        let filters = filters.clone();
        let error = error.clone();
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();
        let group_ref = group_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let start = start_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let end = end_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let group_by = group_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_else(|| "day".to_string());
            if start.is_empty() || end.is_empty() {
                error.set(Some("请选择起止日期".to_string()));
                return;
            }
            error.set(None);
            filters.set((start, end, group_by));
        })
    };

    let bucket_label = |date: &Option<String>,
                       dept: &Option<String>,
                       doctor_name: &Option<String>,
                       doctor_id: &Option<String>| {
        date.clone()
            .or_else(|| dept.clone())
            .or_else(|| doctor_name.clone())
            .or_else(|| doctor_id.clone())
            .unwrap_or_default()
    };

    let (start, end, _) = (*filters).clone();
    html! {
        <main class="page">
            <h2>{ "统计报表" }</h2>
            <form class="inline-form" onsubmit={on_submit}>
                <input ref={start_ref} type="date" value={start} />
                <input ref={end_ref} type="date" value={end} />
                <select ref={group_ref}>
                    { for GROUPINGS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={*value == filters.2}>{ *label }</option>
                    }) }
                </select>
                <button type="submit">{ "查询" }</button>
            </form>
            <ErrorBanner error={(*error).clone()} />
            <section>
                <h3>{ "收入统计" }</h3>
                {
                    match &*income {
                        Some(report) => {
                            let total: f64 = report.data.iter().map(|b| b.amount).sum();
                            html! {
                                <>
                                    <p>{ format!("{} ~ {}，合计 {:.2} 元", report.start_date, report.end_date, total) }</p>
                                    <table>
                                        <thead>
                                            <tr>
                                                <th>{ "分组" }</th>
                                                <th>{ "金额" }</th>
                                                <th>{ "笔数" }</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            { for report.data.iter().enumerate().map(|(i, b)| html! {
                                                <tr key={i.to_string()}>
                                                    <td>{ bucket_label(&b.date, &b.dept_name, &b.doctor_name, &b.doctor_id) }</td>
                                                    <td>{ format!("{:.2}", b.amount) }</td>
                                                    <td>{ b.records }</td>
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
            </section>
            <section>
                <h3>{ "就诊统计" }</h3>
                {
                    match &*visits {
                        Some(report) => {
                            let total: i64 = report.data.iter().map(|b| b.visits).sum();
                            html! {
                                <>
                                    <p>{ format!("{} ~ {}，共 {} 人次", report.start_date, report.end_date, total) }</p>
                                    <table>
                                        <thead>
                                            <tr>
                                                <th>{ "分组" }</th>
                                                <th>{ "就诊数" }</th>
                                                <th>{ "患者数" }</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            { for report.data.iter().enumerate().map(|(i, b)| html! {
                                                <tr key={i.to_string()}>
                                                    <td>{ bucket_label(&b.date, &b.dept_name, &b.doctor_name, &b.doctor_id) }</td>
                                                    <td>{ b.visits }</td>
                                                    <td>{ b.patients }</td>
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
            </section>
        </main>
    }
}
