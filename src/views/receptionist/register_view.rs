// Walk-in registration desk: capture patient identity, pick a department
// and open a visit directly.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Department, OnsiteRegisterPayload, Visit};
use crate::services::{patient_service, receptionist_service};
use crate::utils::is_cn_mobile;
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

#[function_component(ReceptionistRegisterView)]
pub fn receptionist_register_view() -> Html {
    let services = use_services();
    let departments = use_state(Vec::<Department>::new);
    let created = use_state(|| None::<Visit>);
    let error = use_state(|| None::<String>);
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let gender_ref = use_node_ref();
    let id_card_ref = use_node_ref();
    let dept_ref = use_node_ref();

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

    let on_submit = {
        let services = services.clone();
        let created = created.clone();
        let error = error.clone();
        let name_ref = name_ref.clone();
        let phone_ref = phone_ref.clone();
        let gender_ref = gender_ref.clone();
        let id_card_ref = id_card_ref.clone();
        let dept_ref = dept_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value().trim().to_string())
                    .unwrap_or_default()
            };
            let name = value(&name_ref);
            let phone = value(&phone_ref);
            let id_card = value(&id_card_ref);
            let gender = gender_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();
            let dept_id = dept_ref
                .cast::<HtmlSelectElement>()
                .and_then(|s| s.value().parse::<i64>().ok());

            if name.is_empty() {
                error.set(Some("请输入患者姓名".to_string()));
                return;
            }
            if !is_cn_mobile(&phone) {
                error.set(Some("请输入合法的11位手机号".to_string()));
                return;
            }
            let Some(dept_id) = dept_id else {
                error.set(Some("请选择科室".to_string()));
                return;
            };

            let payload = OnsiteRegisterPayload {
                name,
                phone,
                dept_id,
                gender: (!gender.is_empty()).then_some(gender),
                id_card: (!id_card.is_empty()).then_some(id_card),
                // The desk registers for right now; the server fills in
                // the current time when this is absent.
                expected_time: None,
            };

            let services = services.clone();
            let created = created.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match receptionist_service::onsite_register(&services.http, &payload).await {
                    Ok(visit) => {
                        log::info!("🏥 Visit {} opened", visit.visit_id);
                        error.set(None);
                        created.set(Some(visit));
                    }
                    Err(e) => error.set(Some(e.message)),
                }
            });
        })
    };

    html! {
        <main class="page">
            <h2>{ "现场挂号" }</h2>
            <form class="stack-form" onsubmit={on_submit}>
                <input ref={name_ref} type="text" placeholder="患者姓名" />
                <input ref={phone_ref} type="tel" placeholder="手机号" />
                <select ref={gender_ref}>
                    <option value="" selected=true>{ "性别（可选）" }</option>
                    <option value="男">{ "男" }</option>
                    <option value="女">{ "女" }</option>
                </select>
                <input ref={id_card_ref} type="text" placeholder="身份证号（可选）" />
                <select ref={dept_ref}>
                    <option value="">{ "选择科室" }</option>
                    { for departments.iter().map(|d| html! {
                        <option value={d.dept_id.to_string()}>{ &d.dept_name }</option>
                    }) }
                </select>
                <button type="submit">{ "挂号" }</button>
            </form>
            <ErrorBanner error={(*error).clone()} />
            {
                match &*created {
                    Some(visit) => html! {
                        <p class="success">
                            { format!(
                                "挂号成功：就诊号 {}，诊室 {}",
                                visit.visit_id,
                                visit.room.as_ref().map(|r| r.room_number.as_str()).unwrap_or("-")
                            ) }
                        </p>
                    },
                    None => html! {},
                }
            }
        </main>
    }
}
