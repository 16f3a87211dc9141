use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::router;
use crate::services::auth_service;
use crate::views::shared::ErrorBanner;
use crate::views::{use_navigator, use_services};

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_submit = {
        let services = services.clone();
        let navigator = navigator.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let busy = busy.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let username = username_input.value();
            let password = password_input.value();

            if username.trim().is_empty() || password.is_empty() {
                error.set(Some("请输入用户名和密码".to_string()));
                return;
            }

            busy.set(true);
            let services = services.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&services.http, username.trim(), &password).await {
                    Ok(auth) => {
                        services.session.write(&auth.access_token, &auth.user);
                        log::info!("✅ Logged in as {} ({:?})", auth.user.username, auth.user.role);
                        let target = router::query_param(&navigator.path(), "redirect")
                            .unwrap_or_else(|| {
                                router::landing_route(Some(&auth.user)).path().to_string()
                            });
                        navigator.push(&target);
                    }
                    Err(e) => error.set(Some(e.message)),
                }
                busy.set(false);
            });
        })
    };

    let to_register = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.push("/register");
        })
    };

    html! {
        <div class="auth-page">
            <h1>{ "门诊管理系统" }</h1>
            <form onsubmit={on_submit}>
                <input ref={username_ref} type="text" placeholder="用户名" />
                <input ref={password_ref} type="password" placeholder="密码" />
                <ErrorBanner error={(*error).clone()} />
                <button type="submit" disabled={*busy}>
                    { if *busy { "登录中..." } else { "登录" } }
                </button>
            </form>
            <a href="/register" onclick={to_register}>{ "注册患者账号" }</a>
        </div>
    }
}
