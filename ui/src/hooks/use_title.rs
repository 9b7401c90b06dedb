use yew::prelude::*;

const PORTAL_NAME: &str = "Operator Portal";

/// Titles the browser tab after the current page, e.g.
/// "Taxes | Operator Portal". The title reverts when the page unmounts.
#[hook]
pub fn use_title(page: &str) {
    use_effect_with(page.to_string(), |page| {
        let document = web_sys::window().and_then(|window| window.document());
        if let Some(document) = &document {
            document.set_title(&format!("{page} | {PORTAL_NAME}"));
        }
        move || {
            if let Some(document) = document {
                document.set_title(PORTAL_NAME);
            }
        }
    });
}
