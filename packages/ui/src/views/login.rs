use api::{AuthError, AuthState, Credentials};
use dioxus::prelude::*;

use crate::actions::error_message;
use crate::auth::use_auth;
use crate::dialog::use_dialogs;
use crate::i18n::{tr, validation_message, Text};
use crate::icons::{FaEye, FaEyeSlash};
use crate::preferences::use_language;
use crate::services::use_services;
use crate::Icon;

/// Email/password sign-in.
///
/// The session is published as soon as login succeeds. The form stays up,
/// disabled, while the signed-out gate waits out the welcome notification.
#[component]
pub fn LoginView(on_register: EventHandler<()>) -> Element {
    let services = use_services();
    let dialogs = use_dialogs();
    let language = use_language();
    let mut auth_state = use_auth();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let auth = services.auth.clone();
        let credentials = Credentials::new(&email(), &password());
        auth_state.with_mut(AuthState::clear_error);
        spawn(async move {
            let lang = language();
            submitting.set(true);
            let result = auth.login(&credentials).await;
            match result {
                Ok(user) => {
                    let welcome = tr(lang, Text::WelcomeBackUser, &[("name", user.first_name())]);
                    dialogs.success(&welcome, Text::LoginSuccessful.get(lang));
                    auth_state.set(AuthState::authenticated(user));
                }
                Err(AuthError::Invalid(e)) => {
                    submitting.set(false);
                    dialogs.error(&validation_message(lang, &e), Text::ValidationError.get(lang));
                }
                Err(AuthError::Api(e)) => {
                    submitting.set(false);
                    let message = error_message(&e, Text::LoginFailedMessage.get(lang));
                    auth_state.with_mut(|s| s.error = Some(message.clone()));
                    dialogs.error(&message, Text::LoginFailed.get(lang));
                }
            }
        });
    };

    let lang = language();
    let error = auth_state().error;

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", {Text::SignInToAccount.get(lang)} }
                p { class: "auth-subtitle", {Text::WelcomeBack.get(lang)} }
                if let Some(error) = error {
                    p { class: "auth-error", "{error}" }
                }
                form {
                    class: "auth-form",
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        label { r#for: "login-email", {Text::EmailAddress.get(lang)} }
                        input {
                            id: "login-email",
                            r#type: "email",
                            autocomplete: "email",
                            placeholder: Text::EnterEmailAddress.get(lang),
                            value: "{email}",
                            disabled: submitting(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "login-password", {Text::Password.get(lang)} }
                        div {
                            class: "password-field",
                            input {
                                id: "login-password",
                                r#type: if show_password() { "text" } else { "password" },
                                autocomplete: "current-password",
                                placeholder: Text::EnterPassword.get(lang),
                                value: "{password}",
                                disabled: submitting(),
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button {
                                class: "password-toggle",
                                r#type: "button",
                                title: if show_password() { Text::HidePassword.get(lang) } else { Text::ShowPassword.get(lang) },
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon { icon: FaEyeSlash, width: 14, height: 14 }
                                } else {
                                    Icon { icon: FaEye, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            {Text::SigningIn.get(lang)}
                        } else {
                            {Text::SignIn.get(lang)}
                        }
                    }
                }
                div {
                    class: "auth-switch",
                    p { {Text::DontHaveAccount.get(lang)} }
                    button {
                        class: "btn btn-secondary btn-block",
                        disabled: submitting(),
                        onclick: move |_| on_register.call(()),
                        {Text::CreateNewAccount.get(lang)}
                    }
                }
            }
        }
    }
}
