use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Room, Schedule, SchedulePayload};
use crate::services::admin_service;
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

const TIME_SLOTS: [&str; 2] = ["上午", "下午"];

#[function_component(AdminSchedulesView)]
pub fn admin_schedules_view() -> Html {
    let services = use_services();
    let schedules = use_state(Vec::<Schedule>::new);
    let rooms = use_state(Vec::<Room>::new);
    let date_filter = use_state(String::new);
    let error = use_state(|| None::<String>);
    let filter_ref = use_node_ref();
    let room_ref = use_node_ref();
    let doctor_ref = use_node_ref();
    let date_ref = use_node_ref();
    let slot_ref = use_node_ref();
    let max_ref = use_node_ref();

    {
        let services = services.clone();
        let rooms = rooms.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::list_rooms(&services.http).await {
                    Ok(list) => rooms.set(list),
                    Err(e) => error.set(Some(e.message)),
                }
            });
            || ()
        });
    }

    // Reloads whenever the date filter is (re)applied.
    {
        let services = services.clone();
        let schedules = schedules.clone();
        let error = error.clone();
        use_effect_with((*date_filter).clone(), move |date: &String| {
            let filter = (!date.is_empty()).then(|| date.clone());
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::list_schedules(&services.http, filter.as_deref()).await {
                    Ok(list) => schedules.set(list),
                    Err(e) => error.set(Some(e.message)),
                }
            });
            || ()
        });
    }

    let on_filter = {
        let date_filter = date_filter.clone();
        let filter_ref = filter_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let date = filter_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            date_filter.set(date);
        })
    };

    let on_create = {
        let services = services.clone();
        let schedules = schedules.clone();
        let date_filter = date_filter.clone();
        let error = error.clone();
        let room_ref = room_ref.clone();
        let doctor_ref = doctor_ref.clone();
        let date_ref = date_ref.clone();
        let slot_ref = slot_ref.clone();
        let max_ref = max_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let room_id = room_ref
                .cast::<HtmlSelectElement>()
                .and_then(|s| s.value().parse::<i64>().ok());
            let doctor_id = doctor_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value().trim().to_string())
                .unwrap_or_default();
            let work_date = date_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let time_slot = slot_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();
            let max_patients = max_ref
                .cast::<HtmlInputElement>()
                .and_then(|i| i.value().parse::<i64>().ok());

            let Some(room_id) = room_id else {
                error.set(Some("请选择诊室".to_string()));
                return;
            };
            if doctor_id.is_empty() || work_date.is_empty() || time_slot.is_empty() {
                error.set(Some("请填写医生工号、日期和时段".to_string()));
                return;
            }
            let Some(max_patients) = max_patients.filter(|n| *n > 0) else {
                error.set(Some("请输入正确的最大接诊数".to_string()));
                return;
            };

            let payload = SchedulePayload {
                room_id,
                doctor_id,
                work_date,
                time_slot,
                max_patients,
            };
            let services = services.clone();
            let schedules = schedules.clone();
            let date = (*date_filter).clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::create_schedule(&services.http, &payload).await {
                    Ok(_) => {
                        error.set(None);
                        let filter = (!date.is_empty()).then_some(date.as_str());
                        match admin_service::list_schedules(&services.http, filter).await {
                            Ok(list) => schedules.set(list),
                            Err(e) => error.set(Some(e.message)),
                        }
                    }
                    Err(e) => error.set(Some(e.message)),
                }
            });
        })
    };

    let on_delete = {
        let services = services.clone();
        let schedules = schedules.clone();
        let date_filter = date_filter.clone();
        let error = error.clone();
        move |schedule_id: i64| {
            let services = services.clone();
            let schedules = schedules.clone();
            let date = (*date_filter).clone();
            let error = error.clone();
            Callback::from(move |_: MouseEvent| {
                let services = services.clone();
                let schedules = schedules.clone();
                let date = date.clone();
                let error = error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match admin_service::delete_schedule(&services.http, schedule_id).await {
                        Ok(_) => {
                            error.set(None);
                            let filter = (!date.is_empty()).then_some(date.as_str());
                            match admin_service::list_schedules(&services.http, filter).await {
                                Ok(list) => schedules.set(list),
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
            <h2>{ "排班管理" }</h2>
            <form class="inline-form" onsubmit={on_filter}>
                <input ref={filter_ref} type="date" />
                <button type="submit">{ "查询" }</button>
            </form>
            <form class="inline-form" onsubmit={on_create}>
                <select ref={room_ref}>
                    <option value="">{ "选择诊室" }</option>
                    { for rooms.iter().filter(|r| r.status == "启用").map(|r| html! {
                        <option value={r.room_id.to_string()}>
                            { format!("{} ({})", r.room_number, r.dept_name.clone().unwrap_or_default()) }
                        </option>
                    }) }
                </select>
                <input ref={doctor_ref} type="text" placeholder="医生工号" />
                <input ref={date_ref} type="date" />
                <select ref={slot_ref}>
                    <option value="">{ "选择时段" }</option>
                    { for TIME_SLOTS.iter().map(|s| html! {
                        <option value={*s}>{ *s }</option>
                    }) }
                </select>
                <input ref={max_ref} type="number" min="1" placeholder="最大接诊数" />
                <button type="submit">{ "新增排班" }</button>
            </form>
            <ErrorBanner error={(*error).clone()} />
            <table>
                <thead>
                    <tr>
                        <th>{ "编号" }</th>
                        <th>{ "诊室" }</th>
                        <th>{ "科室" }</th>
                        <th>{ "医生" }</th>
                        <th>{ "日期" }</th>
                        <th>{ "时段" }</th>
                        <th>{ "接诊" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for schedules.iter().map(|s| {
                        let delete = on_delete(s.schedule_id);
                        html! {
                            <tr key={s.schedule_id}>
                                <td>{ s.schedule_id }</td>
                                <td>{ s.room_number.clone().unwrap_or_default() }</td>
                                <td>{ s.dept_name.clone().unwrap_or_default() }</td>
                                <td>{ s.doctor_name.clone().unwrap_or_else(|| s.doctor_id.clone()) }</td>
                                <td>{ &s.work_date }</td>
                                <td>{ &s.time_slot }</td>
                                <td>{ format!("{}/{}", s.current_patients, s.max_patients) }</td>
                                <td><button onclick={delete}>{ "删除" }</button></td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </main>
    }
}
