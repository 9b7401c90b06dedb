use payloads::pagination::{PageInfo, PagerButtons};
use payloads::query::PageLimit;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Paging metadata of the last response
    pub info: PageInfo,
    pub limit: PageLimit,
    pub on_page_change: Callback<u32>,
    pub on_limit_change: Callback<PageLimit>,
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let info = props.info;
    let buttons = PagerButtons::new(&info, props.is_loading);

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(info.page.saturating_sub(1).max(1));
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(info.page + 1))
    };

    let on_limit = {
        let on_limit_change = props.on_limit_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<u32>().map(PageLimit::try_from) {
                Ok(Ok(limit)) => on_limit_change.emit(limit),
                _ => tracing::warn!("Ignoring page size {}", select.value()),
            }
        })
    };

    let button_class = |enabled: bool| {
        if enabled {
            "px-4 py-2 border border-neutral-300 rounded-md text-sm \
             font-medium text-neutral-700 bg-white hover:bg-neutral-50 \
             transition-colors duration-200"
        } else {
            "px-4 py-2 border border-neutral-300 rounded-md text-sm \
             font-medium text-neutral-400 bg-neutral-100 cursor-not-allowed"
        }
    };

    let summary = match info.row_range() {
        Some((first, last)) => format!(
            "{first}-{last} of {} · Page {} of {}",
            info.total,
            info.page,
            info.total_pages()
        ),
        None => "No results".to_string(),
    };

    html! {
        <div class="flex items-center justify-between mt-4 pt-4 border-t \
                    border-neutral-200 gap-4">
            <button
                onclick={on_previous}
                disabled={!buttons.previous_enabled}
                class={button_class(buttons.previous_enabled)}
            >
                {"Previous"}
            </button>

            <div class="flex items-center gap-4 text-sm text-neutral-600">
                <span>{summary}</span>
                <label class="flex items-center gap-2">
                    {"Rows"}
                    <select
                        onchange={on_limit}
                        disabled={props.is_loading}
                        class="border border-neutral-300 rounded-md px-2 py-1"
                    >
                        {for PageLimit::ALL.iter().map(|limit| html! {
                            <option
                                value={limit.get().to_string()}
                                selected={*limit == props.limit}
                            >
                                {limit.get().to_string()}
                            </option>
                        })}
                    </select>
                </label>
            </div>

            <button
                onclick={on_next}
                disabled={!buttons.next_enabled}
                class={button_class(buttons.next_enabled)}
            >
                {"Next"}
            </button>
        </div>
    }
}
