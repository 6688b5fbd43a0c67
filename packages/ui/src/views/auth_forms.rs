use dioxus::prelude::*;

use crate::auth::{use_client_state, use_controller};
use crate::state::AuthTab;

/// Login and registration forms with tab switching.
#[component]
pub fn AuthForms() -> Element {
    let state = use_client_state();
    let controller = use_controller();
    let tab = state.read().auth_tab;

    let to_login = controller.clone();
    let to_register = controller.clone();

    rsx! {
        div {
            id: "auth-container",
            class: "max-w-md mx-auto mt-16 bg-gray-800 rounded-lg border border-gray-700 p-6",
            div {
                class: "flex mb-6 border-b border-gray-700",
                button {
                    id: "login-tab",
                    class: if tab == AuthTab::Login { "auth-tab active" } else { "auth-tab" },
                    onclick: move |_| to_login.switch_tab(AuthTab::Login),
                    "Login"
                }
                button {
                    id: "register-tab",
                    class: if tab == AuthTab::Register { "auth-tab active" } else { "auth-tab" },
                    onclick: move |_| to_register.switch_tab(AuthTab::Register),
                    "Register"
                }
            }
            {match tab {
                AuthTab::Login => rsx! { LoginForm {} },
                AuthTab::Register => rsx! { RegisterForm {} },
            }}
        }
    }
}

#[component]
pub fn LoginForm() -> Element {
    let state = use_client_state();
    let controller = use_controller();
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let email = state.read().login_email.clone();
    let typing = controller.clone();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = controller.clone();
        async move {
            if busy() {
                return;
            }
            busy.set(true);
            let email = controller.state().login_email;
            controller.login(&email, &password()).await;
            password.set(String::new());
            busy.set(false);
        }
    };

    rsx! {
        form {
            id: "login-form",
            class: "flex flex-col gap-4",
            onsubmit: onsubmit,
            label { class: "form-label", r#for: "login-email", "Email" }
            input {
                id: "login-email",
                class: "form-input",
                r#type: "email",
                required: true,
                value: "{email}",
                oninput: move |evt: FormEvent| typing.set_login_email(evt.value()),
            }
            label { class: "form-label", r#for: "login-password", "Password" }
            input {
                id: "login-password",
                class: "form-input",
                r#type: "password",
                required: true,
                value: "{password}",
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button {
                r#type: "submit",
                class: "btn-primary",
                disabled: busy(),
                if busy() { "Logging in..." } else { "Login" }
            }
        }
    }
}

#[component]
pub fn RegisterForm() -> Element {
    let controller = use_controller();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = controller.clone();
        async move {
            if busy() {
                return;
            }
            busy.set(true);
            controller.register(&email(), &password(), &confirm()).await;
            busy.set(false);
        }
    };

    rsx! {
        form {
            id: "register-form",
            class: "flex flex-col gap-4",
            onsubmit: onsubmit,
            label { class: "form-label", r#for: "register-email", "Email" }
            input {
                id: "register-email",
                class: "form-input",
                r#type: "email",
                required: true,
                value: "{email}",
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            label { class: "form-label", r#for: "register-password", "Password" }
            input {
                id: "register-password",
                class: "form-input",
                r#type: "password",
                required: true,
                value: "{password}",
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            label { class: "form-label", r#for: "register-confirm-password", "Confirm Password" }
            input {
                id: "register-confirm-password",
                class: "form-input",
                r#type: "password",
                required: true,
                value: "{confirm}",
                oninput: move |evt: FormEvent| confirm.set(evt.value()),
            }
            button {
                r#type: "submit",
                class: "btn-primary",
                disabled: busy(),
                if busy() { "Registering..." } else { "Register" }
            }
        }
    }
}
