use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub error: Option<String>,
}

/// Inline error line under a form or above a table; renders nothing when
/// there is no error.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.error {
        Some(message) => html! { <p class="error-banner">{ message }</p> },
        None => html! {},
    }
}
