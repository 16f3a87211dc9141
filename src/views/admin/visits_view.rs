// Visit search plus a per-visit medical record editor. Opening a row
// fetches the existing record (if any) to prefill the editor.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{MedicalRecord, MedicalRecordPayload, Paged, Visit};
use crate::services::admin_service;
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

#[function_component(AdminVisitsView)]
pub fn admin_visits_view() -> Html {
    let services = use_services();
    let page = use_state(|| None::<Paged<Visit>>);
    let editing = use_state(|| None::<(i64, Option<MedicalRecord>)>);
    let error = use_state(|| None::<String>);
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let status_ref = use_node_ref();
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();
    let diagnosis_ref = use_node_ref();
    let treatment_ref = use_node_ref();
    let prescription_ref = use_node_ref();
    let note_ref = use_node_ref();

    let search = {
        let services = services.clone();
        let page = page.clone();
        let error = error.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let status_ref = status_ref.clone();
        let start_ref = start_ref.clone();
        let end_ref = end_ref.clone();
        Callback::from(move |_: ()| {
            let input = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value().trim().to_string())
                    .unwrap_or_default()
            };
            let status = status_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();
            let mut query = Vec::new();
            for (key, v) in [
                ("name", input(&name_ref)),
                ("phone", input(&phone_ref)),
                ("status", status),
                ("start_date", input(&start_ref)),
                ("end_date", input(&end_ref)),
            ] {
                if !v.is_empty() {
                    query.push((key, v));
                }
            }

            let services = services.clone();
            let page = page.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::search_visits(&services.http, &query).await {
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

    let open_record = {
        let services = services.clone();
        let editing = editing.clone();
        let error = error.clone();
        move |visit_id: i64| {
            let services = services.clone();
            let editing = editing.clone();
            let error = error.clone();
            Callback::from(move |_: MouseEvent| {
                let services = services.clone();
                let editing = editing.clone();
                let error = error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match admin_service::get_visit_medical_record(&services.http, visit_id).await {
                        Ok(record) => {
                            error.set(None);
                            editing.set(Some((visit_id, record)));
                        }
                        Err(e) => error.set(Some(e.message)),
                    }
                });
            })
        }
    };

    let on_save = {
        let services = services.clone();
        let editing = editing.clone();
        let error = error.clone();
        let diagnosis_ref = diagnosis_ref.clone();
        let treatment_ref = treatment_ref.clone();
        let prescription_ref = prescription_ref.clone();
        let note_ref = note_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(visit_id) = editing.as_ref().map(|(id, _)| *id) else {
                return;
            };

            let field = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value().trim().to_string())
                    .filter(|v| !v.is_empty())
            };
            let payload = MedicalRecordPayload {
                diagnosis: field(&diagnosis_ref),
                treatment: field(&treatment_ref),
                prescription: field(&prescription_ref),
                note: field(&note_ref),
            };
            if payload.diagnosis.is_none() {
                error.set(Some("请填写诊断".to_string()));
                return;
            }

            let services = services.clone();
            let editing = editing.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::upsert_visit_medical_record(&services.http, visit_id, &payload)
                    .await
                {
                    Ok(saved) => {
                        log::info!("✅ Medical record {} saved for visit {}", saved.record_id, visit_id);
                        error.set(None);
                        editing.set(None);
                    }
                    Err(e) => error.set(Some(e.message)),
                }
            });
        })
    };

    let close_editor = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    html! {
        <main class="page">
            <h2>{ "就诊记录" }</h2>
            <form class="inline-form" onsubmit={on_submit}>
                <input ref={name_ref} type="text" placeholder="患者姓名" />
                <input ref={phone_ref} type="tel" placeholder="手机号" />
                <select ref={status_ref}>
                    <option value="" selected=true>{ "全部状态" }</option>
                    { for ["候诊中", "就诊中", "待缴费", "已离院"].iter().map(|s| html! {
                        <option value={*s}>{ *s }</option>
                    }) }
                </select>
                <input ref={start_ref} type="date" />
                <input ref={end_ref} type="date" />
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
                                    { for p.items.iter().map(|v| {
                                        let open = open_record(v.visit_id);
                                        html! {
                                            <tr key={v.visit_id}>
                                                <td>{ v.visit_id }</td>
                                                <td>{ v.patient.as_ref().map(|p| p.name.clone()).unwrap_or_default() }</td>
                                                <td>{ v.room.as_ref().map(|r| r.room_number.clone()).unwrap_or_default() }</td>
                                                <td>{ v.doctor.as_ref().map(|d| d.name.clone()).unwrap_or_default() }</td>
                                                <td>{ v.check_in_time.clone().unwrap_or_default() }</td>
                                                <td>{ &v.status }</td>
                                                <td><button onclick={open}>{ "病历" }</button></td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        </>
                    },
                    None => html! { <p>{ "加载中..." }</p> },
                }
            }
            {
                match &*editing {
                    Some((visit_id, record)) => {
                        let existing = |f: fn(&MedicalRecord) -> &Option<String>| {
                            record.as_ref().and_then(|r| f(r).clone()).unwrap_or_default()
                        };
                        html! {
                            <form class="inline-form" onsubmit={on_save.clone()}>
                                <span>{ format!("就诊号 {} 病历：", visit_id) }</span>
                                <input ref={diagnosis_ref.clone()} type="text" placeholder="诊断"
                                    value={existing(|r| &r.diagnosis)} />
                                <input ref={treatment_ref.clone()} type="text" placeholder="处置"
                                    value={existing(|r| &r.treatment)} />
                                <input ref={prescription_ref.clone()} type="text" placeholder="处方"
                                    value={existing(|r| &r.prescription)} />
                                <input ref={note_ref.clone()} type="text" placeholder="备注"
                                    value={existing(|r| &r.note)} />
                                <button type="submit">{ "保存" }</button>
                                <button type="button" onclick={close_editor.clone()}>{ "取消" }</button>
                            </form>
                        }
                    }
                    None => html! {},
                }
            }
        </main>
    }
}
