use yew::prelude::*;

use crate::components::remote_view::{SectionCard, render_remote};
use crate::hooks::use_sales::use_top_products;
use crate::models::filters::FilterState;
use crate::models::sales::TopProduct;
use crate::normalize::{SortOrder, filter_rows, sort_by_value};

const TABLE_LIMIT: usize = 10;

#[derive(Properties, PartialEq)]
pub struct TopProductsProps {
    pub filters: FilterState,
}

fn rank_class(rank: usize) -> &'static str {
    match rank {
        1 => "rank gold",
        2 => "rank silver",
        3 => "rank bronze",
        _ => "rank",
    }
}

/// Highest-grossing products. The category facet is also applied locally so
/// the ranking narrows even when the backend ignores the query parameter.
#[function_component(TopProducts)]
pub fn top_products(props: &TopProductsProps) -> Html {
    let handle = use_top_products(props.filters);
    let category = props.filters.category;

    html! {
        <SectionCard
            title={format!("Top {TABLE_LIMIT} Products")}
            subtitle={"Highest historical sales revenue"}
        >
            {
                render_remote(&handle, Vec::is_empty, move |products: &std::rc::Rc<Vec<TopProduct>>| {
                    let mut rows = match category.code() {
                        Some(code) => filter_rows(products, code, |p| p.category.as_str()),
                        None => (**products).clone(),
                    };
                    sort_by_value(&mut rows, |p| p.total_sales, SortOrder::Descending);
                    rows.truncate(TABLE_LIMIT);

                    if rows.is_empty() {
                        return html! {
                            <div class="status no-data"><p>{"No products in this category"}</p></div>
                        };
                    }

                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Rank"}</th>
                                    <th>{"Product"}</th>
                                    <th>{"Category"}</th>
                                    <th class="numeric">{"Total Sales"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    rows.iter().enumerate().map(|(i, product)| {
                                        let rank = i + 1;
                                        html! {
                                            <tr key={product.product_name.clone()}>
                                                <td><span class={rank_class(rank)}>{format!("#{rank}")}</span></td>
                                                <td class="emphasis">{&product.product_name}</td>
                                                <td>{&product.category}</td>
                                                <td class="numeric">{format!("${:.2}", product.total_sales)}</td>
                                            </tr>
                                        }
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    }
                })
            }
        </SectionCard>
    }
}
