use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{Department, Employee, EmployeePayload};
use crate::services::{admin_service, patient_service};
use crate::views::shared::ErrorBanner;
use crate::views::use_services;

const POSITIONS: [&str; 4] = ["医生", "护士", "前台", "管理员"];

#[function_component(AdminEmployeesView)]
pub fn admin_employees_view() -> Html {
    let services = use_services();
    let employees = use_state(Vec::<Employee>::new);
    let departments = use_state(Vec::<Department>::new);
    let error = use_state(|| None::<String>);
    let emp_id_ref = use_node_ref();
    let name_ref = use_node_ref();
    let gender_ref = use_node_ref();
    let position_ref = use_node_ref();
    let dept_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let title_ref = use_node_ref();

    {
        let services = services.clone();
        let employees = employees.clone();
        let departments = departments.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::list_employees(&services.http).await {
                    Ok(list) => employees.set(list),
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
        let employees = employees.clone();
        let error = error.clone();
        let emp_id_ref = emp_id_ref.clone();
        let name_ref = name_ref.clone();
        let gender_ref = gender_ref.clone();
        let position_ref = position_ref.clone();
        let dept_ref = dept_ref.clone();
        let phone_ref = phone_ref.clone();
        let title_ref = title_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value().trim().to_string())
                    .unwrap_or_default()
            };
            let emp_id = input(&emp_id_ref);
            let name = input(&name_ref);
            let phone = input(&phone_ref);
            let title = input(&title_ref);
            let gender = gender_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();
            let position = position_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();
            let dept_id = dept_ref
                .cast::<HtmlSelectElement>()
                .and_then(|s| s.value().parse::<i64>().ok());

            if emp_id.is_empty() || name.is_empty() {
                error.set(Some("请填写工号和姓名".to_string()));
                return;
            }
            if gender.is_empty() || position.is_empty() {
                error.set(Some("请选择性别和岗位".to_string()));
                return;
            }

            let payload = EmployeePayload {
                emp_id,
                name,
                gender,
                position,
                dept_id,
                phone: (!phone.is_empty()).then_some(phone),
                title: (!title.is_empty()).then_some(title),
                status: "启用".to_string(),
            };
            let services = services.clone();
            let employees = employees.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match admin_service::create_employee(&services.http, &payload).await {
                    Ok(created) => {
                        log::info!("✅ Employee {} created", created.emp_id);
                        error.set(None);
                        match admin_service::list_employees(&services.http).await {
                            Ok(list) => employees.set(list),
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
        let employees = employees.clone();
        let error = error.clone();
        move |emp: &Employee| {
            let payload = EmployeePayload {
                emp_id: emp.emp_id.clone(),
                name: emp.name.clone(),
                gender: emp.gender.clone(),
                position: emp.position.clone(),
                dept_id: emp.dept_id,
                phone: emp.phone.clone(),
                title: emp.title.clone(),
                status: if emp.status == "启用" { "停用" } else { "启用" }.to_string(),
            };
            let emp_id = emp.emp_id.clone();
            let services = services.clone();
            let employees = employees.clone();
            let error = error.clone();
            Callback::from(move |_: MouseEvent| {
                let payload = payload.clone();
                let emp_id = emp_id.clone();
                let services = services.clone();
                let employees = employees.clone();
                let error = error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match admin_service::update_employee(&services.http, &emp_id, &payload).await {
                        Ok(_) => match admin_service::list_employees(&services.http).await {
                            Ok(list) => employees.set(list),
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
            <h2>{ "员工管理" }</h2>
            <form class="inline-form" onsubmit={on_create}>
                <input ref={emp_id_ref} type="text" placeholder="工号" />
                <input ref={name_ref} type="text" placeholder="姓名" />
                <select ref={gender_ref}>
                    <option value="">{ "性别" }</option>
                    <option value="男">{ "男" }</option>
                    <option value="女">{ "女" }</option>
                </select>
                <select ref={position_ref}>
                    <option value="">{ "岗位" }</option>
                    { for POSITIONS.iter().map(|p| html! {
                        <option value={*p}>{ *p }</option>
                    }) }
                </select>
                <select ref={dept_ref}>
                    <option value="">{ "科室（可选）" }</option>
                    { for departments.iter().map(|d| html! {
                        <option value={d.dept_id.to_string()}>{ &d.dept_name }</option>
                    }) }
                </select>
                <input ref={phone_ref} type="tel" placeholder="手机号（可选）" />
                <input ref={title_ref} type="text" placeholder="职称（可选）" />
                <button type="submit">{ "新增员工" }</button>
            </form>
            <ErrorBanner error={(*error).clone()} />
            <table>
                <thead>
                    <tr>
                        <th>{ "工号" }</th>
                        <th>{ "姓名" }</th>
                        <th>{ "性别" }</th>
                        <th>{ "岗位" }</th>
                        <th>{ "科室" }</th>
                        <th>{ "职称" }</th>
                        <th>{ "状态" }</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for employees.iter().map(|emp| {
                        let toggle = toggle_status(emp);
                        let action = if emp.status == "启用" { "停用" } else { "启用" };
                        html! {
                            <tr key={emp.emp_id.clone()}>
                                <td>{ &emp.emp_id }</td>
                                <td>{ &emp.name }</td>
                                <td>{ &emp.gender }</td>
                                <td>{ &emp.position }</td>
                                <td>{ emp.dept_name.clone().unwrap_or_default() }</td>
                                <td>{ emp.title.clone().unwrap_or_default() }</td>
                                <td>{ &emp.status }</td>
                                <td><button onclick={toggle}>{ action }</button></td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </main>
    }
}
