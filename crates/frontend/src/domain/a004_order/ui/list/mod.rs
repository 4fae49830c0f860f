use std::sync::Arc;

use contracts::domain::a004_order::{self, Order, OrderDraft, OrderStatus};
use contracts::domain::a005_invoice::{self, Invoice, InvoiceStatus};
use contracts::domain::common::Record;
use leptos::prelude::*;

use crate::domain::a004_order::ui::details::OrderDetails;
use crate::domain::a005_invoice::ui::list::InvoiceList;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::tab_bar::TabBar;
use crate::shared::components::ui::select::options_of;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::list_state::{create_state, search_binding, submit_draft, submit_edit};
use crate::shared::list_utils::{highlight_matches, SearchInput, SortHeader};
use crate::shared::toast::use_toast;

const TABS: [&str; 2] = ["Orders", "Invoices"];

/// Which order dialog is open
#[derive(Clone, Debug, PartialEq)]
enum OrderDialog {
    Closed,
    Add,
    Edit(Arc<Order>),
}

fn status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Confirmed => "success",
        OrderStatus::Pending => "warning",
        OrderStatus::Cancelled => "error",
    }
}

fn status_options() -> Vec<(String, String)> {
    let mut options = vec![(String::new(), "All Statuses".to_string())];
    options.extend(options_of(OrderStatus::ALL.iter().map(OrderStatus::as_str)));
    options
}

/// Both tabs share one page
fn page_title() -> String {
    format!("{} & {}", Order::list_name(), Invoice::list_name())
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let state = create_state(a004_order::seed());
    let invoices = create_state(a005_invoice::seed());
    let toasts = use_toast();
    let (search, on_search) = search_binding(state);
    let status_filter = RwSignal::new(String::new());
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);
    let active_tab = RwSignal::new(TABS[0]);
    let dialog = RwSignal::new(OrderDialog::Closed);

    let total_orders = Memo::new(move |_| state.with(|s| s.store.len()));
    let pending_orders = Memo::new(move |_| {
        state.with(|s| s.store.count_where(|o| o.status == OrderStatus::Pending))
    });
    let total_invoices = Memo::new(move |_| invoices.with(|s| s.store.len()));
    let unpaid_invoices = Memo::new(move |_| {
        invoices.with(|s| s.store.count_where(|i| i.status == InvoiceStatus::Unpaid))
    });

    let rows = move || {
        let status = OrderStatus::parse(&status_filter.get());
        let field = sort_field.get();
        let ascending = sort_ascending.get();
        state.with(|s| {
            s.visible(
                |o: &Order| status.map_or(true, |st| o.status == st),
                &field,
                ascending,
            )
        })
    };

    let on_saved = Callback::new(move |draft: OrderDraft| {
        let saved = match dialog.get_untracked() {
            OrderDialog::Edit(order) => submit_edit(state, draft.apply_to(order.id), toasts),
            _ => submit_draft(state, draft, toasts),
        };
        if saved {
            dialog.set(OrderDialog::Closed);
        }
    });
    let on_cancel = Callback::new(move |_| dialog.set(OrderDialog::Closed));

    view! {
        <div class="page">
            <PageHeader title={page_title()} subtitle="Manage customer orders and invoices">
                <Button icon_name="plus" on_click=Callback::new(move |_| dialog.set(OrderDialog::Add))>
                    "New Order"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Orders"
                    icon_name="file-check"
                    value=Signal::derive(move || total_orders.get().to_string())
                />
                <StatCard
                    label="Pending Orders"
                    icon_name="clipboard"
                    value=Signal::derive(move || pending_orders.get().to_string())
                />
                <StatCard
                    label="Total Invoices"
                    icon_name="file-check"
                    value=Signal::derive(move || total_invoices.get().to_string())
                />
                <StatCard
                    label="Unpaid Invoices"
                    icon_name="bell"
                    value=Signal::derive(move || unpaid_invoices.get().to_string())
                />
            </div>

            <TabBar labels=TABS.to_vec() active=active_tab />

            <Show when=move || active_tab.get() == "Orders">
                <div class="card">
                    <div class="filter-bar">
                        <SearchInput value=search on_change=on_search placeholder="Search orders..." />
                        <Select
                            value=status_filter
                            on_change=Callback::new(move |v| status_filter.set(v))
                            options=status_options()
                        />
                    </div>

                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <SortHeader label="Customer" field="customer" sort_field=sort_field sort_ascending=sort_ascending />
                                    <SortHeader label="Event Date" field="event_date" sort_field=sort_field sort_ascending=sort_ascending />
                                    <SortHeader label="Service" field="service" sort_field=sort_field sort_ascending=sort_ascending />
                                    <SortHeader label="Status" field="status" sort_field=sort_field sort_ascending=sort_ascending />
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let term = search.get();
                                    rows().into_iter().map(|order| {
                                        let for_edit = Arc::clone(&order);
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">
                                                    <div class="table__title">{highlight_matches(&order.customer, &term)}</div>
                                                    <div class="table__subtitle">{highlight_matches(&order.email, &term)}</div>
                                                    <div class="table__subtitle">{order.contact.clone()}</div>
                                                </td>
                                                <td class="table__cell">{order.event_date.clone()}</td>
                                                <td class="table__cell">{highlight_matches(&order.service, &term)}</td>
                                                <td class="table__cell">
                                                    <Badge variant=status_variant(order.status)>{order.status.as_str()}</Badge>
                                                </td>
                                                <td class="table__cell table__cell--actions">
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        icon_name="edit"
                                                        title="Edit order"
                                                        on_click=Callback::new(move |_| {
                                                            dialog.set(OrderDialog::Edit(Arc::clone(&for_edit)))
                                                        })
                                                    >
                                                        "Edit"
                                                    </Button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()
                                }}
                            </tbody>
                        </table>
                        <Show when=move || rows().is_empty()>
                            <p class="table__empty">"No orders match the current filters."</p>
                        </Show>
                    </div>
                </div>
            </Show>

            <Show when=move || active_tab.get() == "Invoices">
                <InvoiceList state=invoices />
            </Show>

            {move || match dialog.get() {
                OrderDialog::Closed => None,
                OrderDialog::Add => Some(view! {
                    <OrderDetails on_saved=on_saved on_cancel=on_cancel />
                }.into_any()),
                OrderDialog::Edit(order) => Some(view! {
                    <OrderDetails order=order on_saved=on_saved on_cancel=on_cancel />
                }.into_any()),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_options_parse_back() {
        let parsed: Vec<Option<OrderStatus>> = status_options()
            .iter()
            .map(|(v, _)| OrderStatus::parse(v))
            .collect();
        assert_eq!(
            parsed,
            vec![
                None,
                Some(OrderStatus::Confirmed),
                Some(OrderStatus::Pending),
                Some(OrderStatus::Cancelled)
            ]
        );
    }

    #[test]
    fn test_page_title_names_both_tabs() {
        assert_eq!(page_title(), "Orders & Invoices");
    }

    #[test]
    fn test_status_variants_differ() {
        assert_ne!(
            status_variant(OrderStatus::Pending),
            status_variant(OrderStatus::Confirmed)
        );
    }
}
