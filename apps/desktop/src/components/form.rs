use super::Form;
use dioxus::prelude::*;
use nwatch::features::registration::{BannerKind, FieldId, FieldView};

/// CSS class of a text input. Edited inputs that pass validation are marked valid.
pub(crate) const fn input_class(field: &FieldView) -> &'static str {
    match (field.invalid, field.dirty) {
        (true, _) => "form-control is-invalid",
        (false, true) => "form-control is-valid",
        (false, false) => "form-control",
    }
}

pub(crate) const fn banner_class(kind: BannerKind) -> &'static str {
    match kind {
        BannerKind::Success => "alert alert-success",
        BannerKind::Failure => "alert alert-danger",
    }
}

pub(crate) const fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting { "Registering..." } else { "Register" }
}

#[component]
pub fn RegistrationPage() -> Element {
    let form = use_context::<Form>();
    let mut view = use_signal(|| form.view());

    // Re-render on every state change published by the controller.
    use_future({
        let form = form.clone();
        move || {
            let form = form.clone();
            async move {
                let mut changes = form.subscribe();
                while changes.changed().await.is_ok() {
                    view.set(form.view());
                }
            }
        }
    });

    let on_submit = {
        let form = form.clone();
        move |event: FormEvent| {
            event.prevent_default();
            let form = form.clone();
            spawn(async move {
                let outcome = form.submit().await;
                tracing::debug!(?outcome, "Submit finished");
            });
        }
    };

    let on_notifications = {
        let form = form.clone();
        move |event: FormEvent| form.set_notification_enabled(event.checked())
    };

    let snapshot = view();

    rsx! {
        form { class: "registration", novalidate: true, onsubmit: on_submit,
            h2 { "Register for asteroid alerts" }

            for field in snapshot.fields.iter().cloned() {
                TextInput {
                    key: "{field.id}",
                    field: field.clone(),
                    on_input: {
                        let form = form.clone();
                        move |value: String| form.set_value(field.id, value)
                    },
                    on_blur: {
                        let form = form.clone();
                        move |()| form.touch(field.id)
                    },
                }
            }

            div { class: "form-check",
                input {
                    id: "notificationEnabled",
                    class: "form-check-input",
                    r#type: "checkbox",
                    checked: snapshot.notification_enabled,
                    onchange: on_notifications,
                }
                label { class: "form-check-label", r#for: "notificationEnabled",
                    "Email me when a hazardous asteroid approaches"
                }
            }

            if let Some(banner) = &snapshot.banner {
                div { class: banner_class(banner.kind), role: "alert", "{banner.message}" }
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: !snapshot.can_submit,
                {submit_label(snapshot.is_submitting)}
            }
        }
    }
}

#[component]
pub fn TextInput(field: FieldView, on_input: EventHandler<String>, on_blur: EventHandler<()>) -> Element {
    let name: &'static str = field.id.into();
    let kind = if field.id == FieldId::Email { "email" } else { "text" };

    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: name, "{field.label}" }
            input {
                id: name,
                name: name,
                class: input_class(&field),
                r#type: kind,
                value: "{field.value}",
                oninput: move |event: FormEvent| on_input.call(event.value()),
                onblur: move |_| on_blur.call(()),
            }
            if field.invalid {
                div { class: "invalid-feedback", "{field.message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(invalid: bool, dirty: bool) -> FieldView {
        FieldView {
            id: FieldId::FirstName,
            label: "First name",
            value: "J".to_owned(),
            dirty,
            invalid,
            message: if invalid { "First name must be at least 2 characters.".to_owned() } else { String::new() },
        }
    }

    #[test]
    fn test_invalid_inputs_are_flagged() {
        assert_eq!(input_class(&field(true, true)), "form-control is-invalid");
        assert_eq!(input_class(&field(false, false)), "form-control");
    }

    #[test]
    fn test_edited_valid_inputs_are_marked() {
        assert_eq!(input_class(&field(false, true)), "form-control is-valid");
    }

    #[test]
    fn test_banner_classes() {
        assert_eq!(banner_class(BannerKind::Success), "alert alert-success");
        assert_eq!(banner_class(BannerKind::Failure), "alert alert-danger");
    }

    #[test]
    fn test_submit_label_tracks_flight() {
        assert_eq!(submit_label(true), "Registering...");
        assert_eq!(submit_label(false), "Register");
    }
}
