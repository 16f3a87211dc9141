use yew::prelude::*;

use crate::models::Role;
use crate::services::auth_service;
use crate::views::{use_navigator, use_services};

fn nav_links(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Patient => &[("/patient/appointment", "预约挂号")],
        Role::Receptionist => &[
            ("/receptionist/register", "现场挂号"),
            ("/receptionist/appointments", "预约管理"),
            ("/receptionist/visits", "就诊管理"),
            ("/receptionist/patients", "患者查询"),
            ("/receptionist/bills", "账单查询"),
            ("/receptionist/income-records", "收入流水"),
        ],
        Role::Admin => &[
            ("/admin/statistics", "统计报表"),
            ("/admin/rooms", "诊室管理"),
            ("/admin/schedules", "排班管理"),
            ("/admin/employees", "员工管理"),
            ("/admin/patients", "患者查询"),
            ("/admin/visits", "就诊记录"),
            ("/admin/bills", "账单"),
            ("/admin/income-records", "收入明细"),
        ],
        Role::Unknown => &[],
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let (_, user) = services.session.read();

    let links = user.as_ref().map(|u| nav_links(u.role)).unwrap_or(&[]);
    let current = navigator.path();

    let on_logout = {
        let services = services.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let services = services.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Best effort: the server keeps no token state, dropping
                // the local session is what logs us out.
                if let Err(e) = auth_service::logout(&services.http).await {
                    log::warn!("Logout request failed: {}", e);
                }
                services.session.clear();
                navigator.push("/login");
            });
        })
    };

    html! {
        <header class="app-header">
            <span class="brand">{ "门诊管理系统" }</span>
            <nav>
                { for links.iter().map(|(path, label)| {
                    let navigator = navigator.clone();
                    let to = *path;
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        navigator.push(to);
                    });
                    let class = if current.starts_with(path) { "active" } else { "" };
                    html! { <a href={to} {class} {onclick}>{ *label }</a> }
                }) }
            </nav>
            {
                match &user {
                    Some(u) => html! {
                        <span class="user-box">
                            { &u.username }
                            <button onclick={on_logout}>{ "退出" }</button>
                        </span>
                    },
                    None => html! {},
                }
            }
        </header>
    }
}
