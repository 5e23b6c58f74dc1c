use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::remote_view::{SectionCard, render_remote};
use crate::config::Config;
use crate::hooks::use_churn::use_churn_customers;
use crate::models::churn::ChurnCustomer;
use crate::models::series::PaginationState;
use crate::normalize::{CustomerQuery, CustomerSort, customer_page};
use crate::services::sample::{SplitMix, placeholder_customers};

/// Searchable, sortable, paginated table of the customers most likely to
/// churn. All reshaping happens in `normalize`; this component only owns
/// the query state.
#[function_component(ChurnTable)]
pub fn churn_table() -> Html {
    let search = use_state(String::new);
    let sort = use_state(CustomerSort::default);
    let count = use_state(|| Config::CUSTOMER_COUNT_CHOICES[0]);
    let page = use_state(|| 1usize);

    let handle = use_churn_customers(*count);

    let on_search = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            search.set(target.value());
            page.set(1); // A new needle starts from the first page
        })
    };

    let on_count = {
        let count = count.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(chosen) = target.value().parse::<usize>() {
                count.set(chosen);
                page.set(1);
            }
        })
    };

    let sort_button = |key: CustomerSort, label: &'static str| {
        let sort = sort.clone();
        let class = if *sort == key {
            "toggle-button active"
        } else {
            "toggle-button"
        };
        let onclick = Callback::from(move |_| sort.set(key));
        html! { <button {class} {onclick}>{label}</button> }
    };

    let query = CustomerQuery {
        search: (*search).clone(),
        sort: *sort,
        pagination: PaginationState::new(*page, Config::DEFAULT_PAGE_SIZE),
    };

    html! {
        <SectionCard
            title={"Top Customers Likely to Churn"}
            subtitle={"Risk scores from the churn model"}
        >
            <div class="table-controls">
                <input
                    type="search"
                    placeholder="Search customer..."
                    value={(*search).clone()}
                    oninput={on_search}
                    aria-label="Search customers"
                />
                <label class="count-select">
                    {"Show:"}
                    <select onchange={on_count} aria-label="Number of customers">
                        {
                            Config::CUSTOMER_COUNT_CHOICES.iter().map(|&n| {
                                let selected = *count == n;
                                html! { <option value={n.to_string()} {selected}>{n}</option> }
                            }).collect::<Html>()
                        }
                    </select>
                </label>
                {sort_button(CustomerSort::Score, "Sort by Score")}
                {sort_button(CustomerSort::Name, "Sort by Name")}
            </div>
            {
                render_remote(&handle, |_: &Vec<ChurnCustomer>| false, move |customers| {
                    let (rows, preview): (Vec<ChurnCustomer>, bool) = if customers.is_empty() {
                        // Backend has nothing scored yet: show the
                        // deterministic preview rows instead of a blank table.
                        let mut source = SplitMix::new(Config::PLACEHOLDER_SEED);
                        (placeholder_customers(*count, &mut source), true)
                    } else {
                        ((**customers).clone(), false)
                    };

                    let resolved = customer_page(&rows, &query);
                    render_table(&resolved, preview, &page)
                })
            }
        </SectionCard>
    }
}

fn render_table(
    resolved: &crate::normalize::CustomerPage,
    preview: bool,
    page: &UseStateHandle<usize>,
) -> Html {
    let prev = {
        let page = page.clone();
        let current = resolved.page;
        Callback::from(move |_| page.set(current.saturating_sub(1).max(1)))
    };
    let next = {
        let page = page.clone();
        let current = resolved.page;
        let last = resolved.total_pages;
        Callback::from(move |_| page.set((current + 1).min(last)))
    };

    let highest_risk = resolved
        .rows
        .iter()
        .max_by(|a, b| {
            a.churn_probability
                .partial_cmp(&b.churn_probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|c| c.customer_id.clone());

    html! {
        <>
            if preview {
                <p class="preview-note">{"Sample data — no scored customers in the backend yet"}</p>
            }
            if resolved.rows.is_empty() {
                <div class="status no-data"><p>{"No customers match this search"}</p></div>
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Customer"}</th>
                            <th class="numeric">{"Score"}</th>
                            <th class="numeric">{"Cancellations"}</th>
                            <th>{"Last Purchase"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            resolved.rows.iter().map(|customer| {
                                html! {
                                    <tr key={customer.customer_id.clone()}>
                                        <td class="emphasis">{&customer.customer_id}</td>
                                        <td class="numeric">
                                            <span class="risk-badge">{format!("{}%", customer.score())}</span>
                                        </td>
                                        <td class="numeric">{customer.total_cancellations}</td>
                                        <td>{customer.last_purchase_label()}</td>
                                        <td>{&customer.subscription_status}</td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
                if let Some(name) = highest_risk {
                    <p class="alert-line">{format!("Alert: {name} is at highest risk on this page")}</p>
                }
                <div class="pagination">
                    <button onclick={prev} disabled={resolved.page <= 1}>{"Previous"}</button>
                    <span>{format!("Page {} of {}", resolved.page, resolved.total_pages)}</span>
                    <button onclick={next} disabled={resolved.page >= resolved.total_pages}>{"Next"}</button>
                </div>
            }
        </>
    }
}
