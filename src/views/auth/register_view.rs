use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::RegisterPayload;
use crate::router;
use crate::services::auth_service;
use crate::utils::is_cn_mobile;
use crate::views::shared::ErrorBanner;
use crate::views::{use_navigator, use_services};

/// Patient self-registration. Receptionist and admin accounts are
/// provisioned by the administrator, not here.
#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let gender_ref = use_node_ref();
    let id_card_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_submit = {
        let services = services.clone();
        let navigator = navigator.clone();
        let refs = (
            username_ref.clone(),
            password_ref.clone(),
            name_ref.clone(),
            phone_ref.clone(),
            gender_ref.clone(),
            id_card_ref.clone(),
        );
        let error = error.clone();
        let busy = busy.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (username_ref, password_ref, name_ref, phone_ref, gender_ref, id_card_ref) = &refs;

            let value = |r: &NodeRef| r.cast::<HtmlInputElement>().map(|i| i.value());
            let (Some(username), Some(password), Some(name), Some(phone), Some(id_card)) = (
                value(username_ref),
                value(password_ref),
                value(name_ref),
                value(phone_ref),
                value(id_card_ref),
            ) else {
                return;
            };
            let gender = gender_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();

            let username = username.trim().to_string();
            let phone = phone.trim().to_string();

            if username.len() < 3 {
                error.set(Some("用户名至少3个字符".to_string()));
                return;
            }
            if password.len() < 6 {
                error.set(Some("密码至少6个字符".to_string()));
                return;
            }
            if name.trim().is_empty() {
                error.set(Some("请输入姓名".to_string()));
                return;
            }
            if !is_cn_mobile(&phone) {
                error.set(Some("请输入合法的11位手机号".to_string()));
                return;
            }

            let payload = RegisterPayload {
                username,
                password,
                name: name.trim().to_string(),
                phone,
                gender: (!gender.is_empty()).then_some(gender),
                id_card: {
                    let id_card = id_card.trim().to_string();
                    (!id_card.is_empty()).then_some(id_card)
                },
            };

            busy.set(true);
            let services = services.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::register(&services.http, &payload).await {
                    Ok(auth) => {
                        services.session.write(&auth.access_token, &auth.user);
                        let target = router::landing_route(Some(&auth.user)).path();
                        navigator.push(target);
                    }
                    Err(e) => error.set(Some(e.message)),
                }
                busy.set(false);
            });
        })
    };

    let to_login = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.push("/login");
        })
    };

    html! {
        <div class="auth-page">
            <h1>{ "注册患者账号" }</h1>
            <form onsubmit={on_submit}>
                <input ref={username_ref} type="text" placeholder="用户名（至少3个字符）" />
                <input ref={password_ref} type="password" placeholder="密码（至少6个字符）" />
                <input ref={name_ref} type="text" placeholder="姓名" />
                <input ref={phone_ref} type="tel" placeholder="手机号" />
                <select ref={gender_ref}>
                    <option value="" selected=true>{ "性别（可选）" }</option>
                    <option value="男">{ "男" }</option>
                    <option value="女">{ "女" }</option>
                </select>
                <input ref={id_card_ref} type="text" placeholder="身份证号（可选）" />
                <ErrorBanner error={(*error).clone()} />
                <button type="submit" disabled={*busy}>
                    { if *busy { "提交中..." } else { "注册" } }
                </button>
            </form>
            <a href="/login" onclick={to_login}>{ "已有账号？登录" }</a>
        </div>
    }
}
