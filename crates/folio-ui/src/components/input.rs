//! Input Field Components
//!
//! Labelled contact form fields. The element id, label and input type all
//! come from the [`ContactField`] being edited; the message is a textarea.

use dioxus::prelude::*;
use folio_core::ContactField;

/// Rows shown by the message textarea
pub const MESSAGE_ROWS: u32 = 5;

/// Properties for the FormField component
#[derive(Clone, PartialEq, Props)]
pub struct FormFieldProps {
    /// Field being edited
    pub field: ContactField,
    /// Current value
    pub value: String,
    /// Whether the field is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Handler called with the new value when the input changes
    #[props(!optional)]
    pub oninput: Option<EventHandler<(ContactField, String)>>,
}

/// Labelled, required form field
///
/// # Example
///
/// ```rust,ignore
/// // on_input: Option<EventHandler<(ContactField, String)>>
/// rsx! {
///     FormField {
///         field: ContactField::Email,
///         value: form.value(ContactField::Email).to_string(),
///         oninput: on_input,
///     }
/// }
/// ```
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    let field = props.field;
    let id = field.id();
    let oninput = props.oninput;
    let on_change = move |e: FormEvent| {
        if let Some(handler) = oninput {
            handler.call((field, e.value()));
        }
    };

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{field.label()}" }
            if field == ContactField::Message {
                textarea {
                    id: "{id}",
                    name: "{id}",
                    rows: "{MESSAGE_ROWS}",
                    required: true,
                    disabled: props.disabled,
                    value: "{props.value}",
                    oninput: on_change,
                }
            } else {
                input {
                    id: "{id}",
                    name: "{id}",
                    r#type: "{field.input_type()}",
                    required: true,
                    disabled: props.disabled,
                    value: "{props.value}",
                    oninput: on_change,
                }
            }
        }
    }
}
