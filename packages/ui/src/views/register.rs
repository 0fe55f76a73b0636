use api::{AuthError, Registration};
use dioxus::prelude::*;

use crate::actions::error_message;
use crate::dialog::use_dialogs;
use crate::i18n::{tr, validation_message, Text};
use crate::preferences::use_language;
use crate::services::use_services;
use crate::timer::sleep_ms;

/// Account creation. Signing up does not sign in; on success the user is
/// sent to the login page after a short pause.
#[component]
pub fn RegisterView(on_login: EventHandler<()>) -> Element {
    let services = use_services();
    let dialogs = use_dialogs();
    let language = use_language();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let redirect_delay = services.config.ui.register_redirect_delay_ms;
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let auth = services.auth.clone();
        let registration = Registration::new(&name(), &email(), &password());
        let confirm_password = confirm();
        spawn(async move {
            let lang = language();
            submitting.set(true);
            match auth.register(&registration, &confirm_password).await {
                Ok(()) => {
                    dialogs.success(
                        Text::RegisterSuccessMessage.get(lang),
                        Text::RegisterSuccessful.get(lang),
                    );
                    sleep_ms(redirect_delay).await;
                    on_login.call(());
                }
                Err(AuthError::Invalid(e)) => {
                    submitting.set(false);
                    dialogs.error(&validation_message(lang, &e), Text::ValidationError.get(lang));
                }
                Err(AuthError::Api(e)) => {
                    submitting.set(false);
                    let message = error_message(&e, Text::RegisterFailedMessage.get(lang));
                    dialogs.error(&message, Text::RegisterFailed.get(lang));
                }
            }
        });
    };

    let lang = language();
    let name_hint = tr(
        lang,
        Text::MinimumCharsRequired,
        &[("count", &Registration::MIN_NAME_LEN.to_string())],
    );
    let password_hint = tr(
        lang,
        Text::MinimumCharsRequired,
        &[("count", &Registration::MIN_PASSWORD_LEN.to_string())],
    );

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", {Text::CreateYourAccount.get(lang)} }
                p { class: "auth-subtitle", {Text::JoinToday.get(lang)} }
                form {
                    class: "auth-form",
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        label { r#for: "register-name", {Text::FullName.get(lang)} }
                        input {
                            id: "register-name",
                            r#type: "text",
                            autocomplete: "name",
                            placeholder: Text::EnterFullName.get(lang),
                            value: "{name}",
                            disabled: submitting(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                        small { class: "field-hint", "{name_hint}" }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "register-email", {Text::EmailAddress.get(lang)} }
                        input {
                            id: "register-email",
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
                        label { r#for: "register-password", {Text::Password.get(lang)} }
                        input {
                            id: "register-password",
                            r#type: "password",
                            autocomplete: "new-password",
                            placeholder: Text::CreateStrongPassword.get(lang),
                            value: "{password}",
                            disabled: submitting(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        small { class: "field-hint", "{password_hint}" }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "register-confirm", {Text::ConfirmPasswordLabel.get(lang)} }
                        input {
                            id: "register-confirm",
                            r#type: "password",
                            autocomplete: "new-password",
                            placeholder: Text::ConfirmPassword.get(lang),
                            value: "{confirm}",
                            disabled: submitting(),
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            {Text::CreatingAccount.get(lang)}
                        } else {
                            {Text::CreateAccount.get(lang)}
                        }
                    }
                }
                div {
                    class: "auth-switch",
                    p { {Text::AlreadyHaveAccount.get(lang)} }
                    button {
                        class: "btn btn-secondary btn-block",
                        onclick: move |_| on_login.call(()),
                        {Text::SignInToYourAccount.get(lang)}
                    }
                }
            }
        }
    }
}
