use std::rc::Rc;

use payloads::requests::{CreateCompanyTax, UpdateCompanyTax};
use payloads::responses::CompanyLocationTax;
use payloads::{LocationId, TaxId};
use payloads::tax_input::TaxFormState;
use yew::prelude::*;

use super::{Modal, PricingFields};
use crate::contexts::session::Session;
use crate::contexts::toast::use_toast;
use crate::hooks::use_invalidate;

enum TaxRequest {
    Create(CreateCompanyTax),
    Update(TaxId, UpdateCompanyTax),
}

#[derive(Properties, PartialEq)]
pub struct TaxDialogProps {
    pub session: Rc<Session>,
    pub location_id: LocationId,
    /// The tax being edited, `None` to create one
    #[prop_or_default]
    pub editing: Option<CompanyLocationTax>,
    pub on_close: Callback<()>,
}

/// Create or edit a tax. Save stays disabled while the form is invalid or
/// a save is running; server rejections are shown as sent.
#[function_component]
pub fn TaxDialog(props: &TaxDialogProps) -> Html {
    let toast = use_toast();
    let invalidate = use_invalidate();
    let form = {
        let editing = props.editing.clone();
        use_state(move || {
            editing
                .as_ref()
                .map(TaxFormState::from_tax)
                .unwrap_or_default()
        })
    };
    let is_saving = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    // An untouched form is not reported as invalid, only blocked
    let validation_error = (*form != TaxFormState::default())
        .then(|| form.validate())
        .flatten();

    let on_title = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.title = input.value();
            form.set(next);
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement =
                e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = input.value();
            form.set(next);
        })
    };

    let on_pricing = {
        let form = form.clone();
        Callback::from(move |pricing| {
            let mut next = (*form).clone();
            next.pricing = pricing;
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_saving = is_saving.clone();
        let error_message = error_message.clone();
        let session = props.session.clone();
        let location_id = props.location_id;
        let editing = props.editing.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_saving {
                return;
            }

            let request = match &editing {
                Some(tax) => form
                    .to_update_request()
                    .map(|request| TaxRequest::Update(tax.id, request)),
                None => form
                    .to_create_request(location_id)
                    .map(TaxRequest::Create),
            };
            let request = match request {
                Ok(request) => request,
                Err(message) => {
                    error_message.set(Some(message));
                    return;
                }
            };

            is_saving.set(true);
            error_message.set(None);

            let is_saving = is_saving.clone();
            let error_message = error_message.clone();
            let toast = toast.clone();
            let invalidate = invalidate.clone();
            let on_close = on_close.clone();
            let api_client = session.api_client();
            let company_id = session.company_id();

            yew::platform::spawn_local(async move {
                let response = match &request {
                    TaxRequest::Create(details) => {
                        api_client
                            .create_company_tax(&company_id, details)
                            .await
                    }
                    TaxRequest::Update(tax_id, details) => {
                        api_client
                            .update_company_tax(&company_id, tax_id, details)
                            .await
                    }
                };

                is_saving.set(false);
                match response {
                    Ok(mutated) => {
                        tracing::info!(tax = %mutated.value.id, "Saved tax");
                        invalidate.emit(mutated.affected);
                        toast.success(match request {
                            TaxRequest::Create(_) => "Tax created",
                            TaxRequest::Update(..) => "Tax updated",
                        });
                        on_close.emit(());
                    }
                    Err(e) => {
                        error_message
                            .set(Some(e.user_message("Failed to save tax")));
                    }
                }
            });
        })
    };

    let on_cancel = props.on_close.reform(|_: MouseEvent| ());
    let title = if props.editing.is_some() { "Edit tax" } else { "New tax" };
    let can_save = form.validate().is_none() && !*is_saving;

    html! {
        <Modal {title} on_close={props.on_close.clone()} locked={*is_saving}>
            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label for="tax-title" class="block text-sm font-medium text-neutral-700 mb-1">
                        {"Title"}
                    </label>
                    <input
                        id="tax-title"
                        type="text"
                        value={form.title.clone()}
                        oninput={on_title}
                        disabled={*is_saving}
                        class="w-full px-3 py-2 border border-neutral-300 rounded-md bg-white"
                    />
                </div>
                <div>
                    <label for="tax-description" class="block text-sm font-medium text-neutral-700 mb-1">
                        {"Description"}
                    </label>
                    <textarea
                        id="tax-description"
                        rows="2"
                        value={form.description.clone()}
                        oninput={on_description}
                        disabled={*is_saving}
                        class="w-full px-3 py-2 border border-neutral-300 rounded-md bg-white"
                    />
                </div>
                <PricingFields
                    id="tax"
                    value={form.pricing.clone()}
                    on_change={on_pricing}
                    disabled={*is_saving}
                />

                if let Some(message) = (*error_message).as_ref().or(validation_error.as_ref()) {
                    <p class="text-sm text-red-600">{message}</p>
                }

                <div class="flex justify-end gap-3 pt-2">
                    <button
                        type="button"
                        onclick={on_cancel}
                        disabled={*is_saving}
                        class="px-4 py-2 text-sm font-medium text-neutral-700 bg-white
                               border border-neutral-300 rounded-md hover:bg-neutral-50
                               disabled:opacity-50"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={!can_save}
                        class="px-4 py-2 text-sm font-medium text-white bg-neutral-900
                               hover:bg-neutral-700 rounded-md disabled:opacity-50"
                    >
                        {if *is_saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
