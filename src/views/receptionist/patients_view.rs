// Patient lookup with a debounced name search (the desk types while the
// patient is talking; no need to hit the server on every keystroke).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Patient;
use crate::services::receptionist_service;
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[function_component(ReceptionistPatientsView)]
pub fn receptionist_patients_view() -> Html {
    let services = use_services();
    let patients = use_state(Vec::<Patient>::new);
    let error = use_state(|| None::<String>);
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let id_card_ref = use_node_ref();
    // Pending debounce; dropping the previous Timeout cancels it.
    let pending: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let search = {
        let services = services.clone();
        let patients = patients.clone();
        let error = error.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let id_card_ref = id_card_ref.clone();
        Rc::new(move || {
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
                match receptionist_service::list_patients(&services.http, &query).await {
                    Ok(list) => {
                        error.set(None);
                        patients.set(list);
                    }
                    Err(e) => error.set(Some(e.message)),
                }
            });
        })
    };

    // Initial, unfiltered load.
    {
        let search = search.clone();
        use_effect_with((), move |_| {
            (*search)();
            || ()
        });
    }

    let on_name_input = {
        let search = search.clone();
        let pending = pending.clone();
        Callback::from(move |_: InputEvent| {
            let search = search.clone();
            *pending.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || (*search)()));
        })
    };

    let on_submit = {
        let search = search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            (*search)();
        })
    };

    html! {
        <main class="page">
            <h2>{ "患者查询" }</h2>
            <form class="inline-form" onsubmit={on_submit}>
                <input ref={name_ref} type="text" placeholder="姓名" oninput={on_name_input} />
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
