use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Patient;
use crate::services::admin_service;
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

#[function_component(AdminPatientsView)]
pub fn admin_patients_view() -> Html {
    let services = use_services();
    let patients = use_state(Vec::<Patient>::new);
    let error = use_state(|| None::<String>);
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let id_card_ref = use_node_ref();

    let search = {
        let services = services.clone();
        let patients = patients.clone();
        let error = error.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let id_card_ref = id_card_ref.clone();
        Callback::from(move |_: ()| {
            let value = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value().trim().to_string())
                    .unwrap_or_default()
            };
            let mut query = Vec::new();
            for (key, v) in [
                ("name", value(&name_ref)),
                ("phone", value(&phone_ref)),
                ("id_card", value(&id_card_ref)),
            ] {
                if !v.is_empty() {
                    query.push((key, v));
                }
            }

            let services = services.clone();
            let patients = patients.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::search_patients(&services.http, &query).await {
                    Ok(list) => {
                        error.set(None);
                        patients.set(list);
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
            <h2>{ "患者档案" }</h2>
            <form class="inline-form" onsubmit={on_submit}>
                <input ref={name_ref} type="text" placeholder="姓名" />
                <input ref={phone_ref} type="tel" placeholder="手机号" />
                <input ref={id_card_ref} type="text" placeholder="身份证号" />
                <button type="submit">{ "查询" }</button>
            </form>
            <ErrorBanner error={(*error).clone()} />
            <table>
                <thead>
                    <tr>
                        <th>{ "编号" }</th>
                        <th>{ "姓名" }</th>
                        <th>{ "性别" }</th>
                        <th>{ "手机号" }</th>
                        <th>{ "身份证号" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for patients.iter().map(|p| html! {
                        <tr key={p.patient_id}>
                            <td>{ p.patient_id }</td>
                            <td>{ &p.name }</td>
                            <td>{ p.gender.clone().unwrap_or_default() }</td>
                            <td>{ &p.phone }</td>
                            <td>{ p.id_card.clone().unwrap_or_default() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </main>
    }
}
