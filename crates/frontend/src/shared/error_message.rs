use crate::shared::api_error::ApiError;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Inline error box; quota errors get a hint on what to do next
#[component]
pub fn ErrorMessage(
    #[prop(optional, into)] title: Option<String>,
    error: ApiError,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Error".to_string());
    let hint = error.is_quota().then(|| {
        view! {
            <div style="margin-top: 8px; font-size: 12px;">
                <strong>"Hint: "</strong>
                "try again in a few minutes or ask the administrator to raise the API quota."
            </div>
        }
    });

    view! {
        <div
            role="alert"
            style="padding: 12px 16px; margin-top: 16px; background: var(--color-error-50, #fef2f2); border: 1px solid var(--color-error-100, #fecaca); border-radius: 8px; color: var(--color-error, #b91c1c);"
        >
            <div style="display: flex; align-items: flex-start; gap: 10px;">
                {icon("alert")}
                <div style="flex: 1;">
                    <div style="font-weight: 600; margin-bottom: 4px;">{title}</div>
                    <div>{error.to_string()}</div>
                    {hint}
                </div>
            </div>
        </div>
    }
}
