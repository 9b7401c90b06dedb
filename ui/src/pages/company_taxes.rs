use std::rc::Rc;

use payloads::cache::PendingWrites;
use payloads::responses::CompanyLocationTax;
use payloads::tax_filter::filter_taxes;
use payloads::tax_input::format_two_decimals;
use payloads::{LocationId, TaxId, TaxType};
use yew::prelude::*;

use crate::components::{ConfirmDialog, LocationSelect, TaxDialog};
use crate::contexts::session::Session;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_company_taxes, use_invalidate, use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: Rc<Session>,
}

/// Taxes of the company, one location at a time.
#[function_component]
pub fn CompanyTaxesPage(props: &Props) -> Html {
    use_title("Taxes");
    let location = {
        let session = props.session.clone();
        use_state(move || session.default_location())
    };

    let on_location = {
        let location = location.clone();
        Callback::from(move |id: LocationId| location.set(Some(id)))
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900">{"Taxes"}</h1>
                <LocationSelect
                    session={props.session.clone()}
                    selected={*location}
                    on_change={on_location}
                />
            </div>
            if let Some(location_id) = *location {
                <LocationTaxes
                    key={location_id.to_string()}
                    session={props.session.clone()}
                    {location_id}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LocationTaxesProps {
    session: Rc<Session>,
    location_id: LocationId,
}

#[derive(Clone, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(CompanyLocationTax),
    Delete(CompanyLocationTax),
}

#[function_component]
fn LocationTaxes(props: &LocationTaxesProps) -> Html {
    let taxes = use_company_taxes(props.session.clone(), props.location_id);
    let toast = use_toast();
    let invalidate = use_invalidate();
    let search = use_state(String::new);
    let dialog = use_state(|| Dialog::Closed);
    let is_deleting = use_state(|| false);
    let toggling = use_mut_ref(PendingWrites::<TaxId>::default);
    let rerender = use_force_update();

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let open = |next: Dialog| {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(next.clone()))
    };
    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(Dialog::Closed))
    };

    let on_toggle = {
        let session = props.session.clone();
        let toast = toast.clone();
        let invalidate = invalidate.clone();
        let toggling = toggling.clone();
        let rerender = rerender.clone();
        Callback::from(move |tax: CompanyLocationTax| {
            if !toggling.borrow_mut().begin(tax.id) {
                return;
            }
            rerender.force_update();

            let api_client = session.api_client();
            let company_id = session.company_id();
            let toast = toast.clone();
            let invalidate = invalidate.clone();
            let toggling = toggling.clone();
            let rerender = rerender.clone();
            yew::platform::spawn_local(async move {
                match api_client.toggle_company_tax(&company_id, &tax.id).await
                {
                    Ok(mutated) => {
                        let state = if mutated.value.is_active {
                            "enabled"
                        } else {
                            "disabled"
                        };
                        toast.success(format!("{} {state}", tax.title));
                        invalidate.emit(mutated.affected);
                    }
                    Err(e) => {
                        toast.error(e.user_message("Failed to update tax"))
                    }
                }
                toggling.borrow_mut().finish(&tax.id);
                rerender.force_update();
            });
        })
    };

    let on_delete = {
        let session = props.session.clone();
        let dialog = dialog.clone();
        let is_deleting = is_deleting.clone();
        Callback::from(move |_: ()| {
            let Dialog::Delete(tax) = (*dialog).clone() else {
                return;
            };
            let api_client = session.api_client();
            let company_id = session.company_id();
            let dialog = dialog.clone();
            let is_deleting = is_deleting.clone();
            let toast = toast.clone();
            let invalidate = invalidate.clone();

            is_deleting.set(true);
            yew::platform::spawn_local(async move {
                match api_client.delete_company_tax(&company_id, &tax.id).await
                {
                    Ok(mutated) => {
                        toast.success(format!("Deleted {}", tax.title));
                        invalidate.emit(mutated.affected);
                        dialog.set(Dialog::Closed);
                    }
                    Err(e) => {
                        toast.error(e.user_message("Failed to delete tax"))
                    }
                }
                is_deleting.set(false);
            });
        })
    };

    let modal = match &*dialog {
        Dialog::Closed => html! {},
        Dialog::Create => html! {
            <TaxDialog
                session={props.session.clone()}
                location_id={props.location_id}
                on_close={close.clone()}
            />
        },
        Dialog::Edit(tax) => html! {
            <TaxDialog
                session={props.session.clone()}
                location_id={props.location_id}
                editing={tax.clone()}
                on_close={close.clone()}
            />
        },
        Dialog::Delete(tax) => html! {
            <ConfirmDialog
                title="Delete tax"
                message={format!("Delete \"{}\"? This cannot be undone.", tax.title)}
                confirm_text="Delete"
                on_confirm={on_delete}
                on_close={close.clone()}
                is_loading={*is_deleting}
            />
        },
    };

    html! {
        <>
            <div class="flex items-center justify-between gap-4">
                <input
                    type="search"
                    placeholder="Search by title or description"
                    value={(*search).clone()}
                    oninput={on_search}
                    class="w-full max-w-sm px-3 py-2 border border-neutral-300 rounded-md bg-white"
                />
                <button
                    onclick={open(Dialog::Create)}
                    class="px-4 py-2 text-sm font-medium text-white bg-neutral-900
                           hover:bg-neutral-700 rounded-md"
                >
                    {"New tax"}
                </button>
            </div>

            {taxes.render("taxes", |all, _, error| {
                let visible = filter_taxes(all, &search);
                html! {
                    <>
                        if let Some(error) = error {
                            <div class="p-3 rounded-md bg-red-50 border border-red-200 text-sm text-red-700">
                                {error}
                            </div>
                        }
                        if visible.is_empty() {
                            <p class="py-8 text-center text-neutral-500">{"No taxes found"}</p>
                        } else {
                            <ul class="divide-y divide-neutral-100 bg-white rounded-lg border border-neutral-200">
                                {for visible.into_iter().map(|tax| {
                                    let toggle = {
                                        let on_toggle = on_toggle.clone();
                                        let tax = tax.clone();
                                        Callback::from(move |_: MouseEvent| on_toggle.emit(tax.clone()))
                                    };
                                    let is_toggling = toggling.borrow().contains(&tax.id);
                                    html! {
                                        <li key={tax.id.to_string()} class="flex items-center justify-between px-4 py-3 gap-4">
                                            <div class="min-w-0">
                                                <p class="font-medium text-neutral-900">
                                                    {&tax.title}
                                                    if !tax.is_active {
                                                        <span class="ml-2 text-xs text-neutral-500">{"(inactive)"}</span>
                                                    }
                                                </p>
                                                if let Some(description) = &tax.description {
                                                    <p class="text-sm text-neutral-600 truncate">{description}</p>
                                                }
                                            </div>
                                            <div class="flex items-center gap-4 text-sm">
                                                <span class="font-mono">{tax_value(tax)}</span>
                                                <button
                                                    onclick={toggle}
                                                    disabled={is_toggling}
                                                    class="underline text-neutral-700 disabled:opacity-50"
                                                >
                                                    {if tax.is_active { "Disable" } else { "Enable" }}
                                                </button>
                                                <button onclick={open(Dialog::Edit(tax.clone()))} class="underline text-neutral-700">
                                                    {"Edit"}
                                                </button>
                                                <button onclick={open(Dialog::Delete(tax.clone()))} class="underline text-red-600">
                                                    {"Delete"}
                                                </button>
                                            </div>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    </>
                }
            })}

            {modal}
        </>
    }
}

fn tax_value(tax: &CompanyLocationTax) -> String {
    match tax.tax_type {
        TaxType::Percentage => tax
            .percentage
            .map(|p| format!("{}%", format_two_decimals(p)))
            .unwrap_or_default(),
        TaxType::Fixed => {
            tax.amount.map(format_two_decimals).unwrap_or_default()
        }
    }
}
