use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Department, Room, RoomPayload};
use crate::services::{admin_service, patient_service};
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

#[function_component(AdminRoomsView)]
pub fn admin_rooms_view() -> Html {
    let services = use_services();
    let rooms = use_state(Vec::<Room>::new);
    let departments = use_state(Vec::<Department>::new);
    let error = use_state(|| None::<String>);
    let number_ref = use_node_ref();
    let dept_ref = use_node_ref();

    {
        let services = services.clone();
        let rooms = rooms.clone();
        let departments = departments.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::list_rooms(&services.http).await {
                    Ok(list) => rooms.set(list),
                    Err(e) => error.set(Some(e.message)),
                }
                match patient_service::list_departments(&services.http).await {
                    Ok(list) => departments.set(list),
                    Err(e) => error.set(Some(e.message)),
                }
            });
            || ()
        });
    }

    let on_create = {
        let services = services.clone();
        let rooms = rooms.clone();
        let error = error.clone();
        let number_ref = number_ref.clone();
        let dept_ref = dept_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let room_number = number_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value().trim().to_string())
                .unwrap_or_default();
            let dept_id = dept_ref
                .cast::<HtmlSelectElement>()
                .and_then(|s| s.value().parse::<i64>().ok());

            if room_number.is_empty() {
                error.set(Some("请输入诊室编号".to_string()));
                return;
            }
            let Some(dept_id) = dept_id else {
                error.set(Some("请选择科室".to_string()));
                return;
            };

            let payload = RoomPayload {
                room_number,
                dept_id,
                status: "启用".to_string(),
            };
            let services = services.clone();
            let rooms = rooms.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::create_room(&services.http, &payload).await {
                    Ok(_) => {
                        error.set(None);
                        match admin_service::list_rooms(&services.http).await {
                            Ok(list) => rooms.set(list),
                            Err(e) => error.set(Some(e.message)),
                        }
                    }
                    Err(e) => error.set(Some(e.message)),
                }
            });
        })
    };

    let toggle_status = {
        let services = services.clone();
        let rooms = rooms.clone();
        let error = error.clone();
        move |room: &Room| {
            let payload = RoomPayload {
                room_number: room.room_number.clone(),
                dept_id: room.dept_id,
                status: if room.status == "启用" { "停用" } else { "启用" }.to_string(),
            };
            let room_id = room.room_id;
            let services = services.clone();
            let rooms = rooms.clone();
            let error = error.clone();
            Callback::from(move |_: MouseEvent| {
                let payload = payload.clone();
                let services = services.clone();
                let rooms = rooms.clone();
                let error = error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match admin_service::update_room(&services.http, room_id, &payload).await {
                        Ok(_) => match admin_service::list_rooms(&services.http).await {
                            Ok(list) => rooms.set(list),
                            Err(e) => error.set(Some(e.message)),
                        },
                        Err(e) => error.set(Some(e.message)),
                    }
                });
            })
        }
    };

    html! {
        <main class="page">
            <h2>{ "诊室管理" }</h2>
            <form class="inline-form" onsubmit={on_create}>
                <input ref={number_ref} type="text" placeholder="诊室编号" />
                <select ref={dept_ref}>
                    <option value="">{ "选择科室" }</option>
                    { for departments.iter().map(|d| html! {
                        <option value={d.dept_id.to_string()}>{ &d.dept_name }</option>
                    }) }
                </select>
                <button type="submit">{ "新增诊室" }</button>
            </form>
            <ErrorBanner error={(*error).clone()} />
            <table>
                <thead>
                    <tr>
                        <th>{ "编号" }</th>
                        <th>{ "诊室" }</th>
                        <th>{ "科室" }</th>
                        <th>{ "状态" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for rooms.iter().map(|r| {
                        let toggle = toggle_status(r);
                        let action = if r.status == "启用" { "停用" } else { "启用" };
                        html! {
                            <tr key={r.room_id}>
                                <td>{ r.room_id }</td>
                                <td>{ &r.room_number }</td>
                                <td>{ r.dept_name.clone().unwrap_or_default() }</td>
                                <td>{ &r.status }</td>
                                <td><button onclick={toggle}>{ action }</button></td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </main>
    }
}
