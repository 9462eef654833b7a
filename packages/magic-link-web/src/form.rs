//! Binding the handler to the email factor form.

use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use magic_link::{
    FormFields, MagicLinkConfig, MagicLinkFormHandler, MagicLinkTransport, Navigator, Submission,
    Variant, DEFAULT_FORM_ID,
};
use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, FormData, HtmlFormElement, SubmitEvent};

use crate::browser::{current_url, GlooTransport, LocationNavigator};

/// Attach a submit listener for `variant` to the form with `form_id`
/// (default `email-factor`).
///
/// Returns `Ok(false)` when the page has no such form.
pub fn attach(variant: Variant, form_id: Option<&str>) -> Result<bool, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    attach_to(
        &document,
        form_id.unwrap_or(DEFAULT_FORM_ID),
        variant,
        GlooTransport,
        LocationNavigator,
    )
}

pub(crate) fn attach_to<T, N>(
    document: &Document,
    form_id: &str,
    variant: Variant,
    transport: T,
    navigator: N,
) -> Result<bool, JsValue>
where
    T: MagicLinkTransport + 'static,
    N: Navigator + 'static,
{
    // The page URL is only needed once there is a form to bind.
    let Some(element) = document.get_element_by_id(form_id) else {
        debug!(form_id, "No email factor form on this page");
        return Ok(false);
    };

    let form: HtmlFormElement = element
        .dyn_into()
        .map_err(|_| JsValue::from_str("email factor element is not a form"))?;

    let page_url = current_url()?;
    let config = MagicLinkConfig::from_page_url(&page_url)
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .with_form_id(form_id);

    let handler = Rc::new(MagicLinkFormHandler::new(config, variant, transport, navigator));

    let listener_form = form.clone();
    let listener = EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let submitter_id = event
                .dyn_ref::<SubmitEvent>()
                .and_then(|e| e.submitter())
                .map(|submitter| submitter.id());

            if !handler.intercepts(submitter_id.as_deref()) {
                return;
            }
            event.prevent_default();

            match read_submission(&listener_form, submitter_id) {
                Ok(submission) => {
                    let handler = Rc::clone(&handler);
                    spawn_local(async move {
                        handler.handle_submit(&submission).await;
                    });
                }
                Err(e) => error!(error = ?e, "Failed to read email factor form"),
            }
        },
    );
    listener.forget();

    debug!(variant = %variant, form_id, "Magic link form handler attached");
    Ok(true)
}

fn read_submission(
    form: &HtmlFormElement,
    submitter_id: Option<String>,
) -> Result<Submission, JsValue> {
    let form_data = FormData::new_with_form(form)?;
    let fields = FormFields::from_lookup(|name| form_data.get(name).as_string());

    Ok(Submission {
        submitter_id,
        fields,
        current_url: current_url()?,
    })
}
