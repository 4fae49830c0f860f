use std::sync::Arc;

use contracts::domain::a005_invoice::{format_money, Invoice, InvoiceStatus};
use leptos::prelude::*;

use crate::shared::components::ui::{Badge, Button};
use crate::shared::modal::Modal;

fn status_variant(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Paid => "success",
        InvoiceStatus::Unpaid => "warning",
    }
}

/// Read-only invoice with its line items
#[component]
pub fn InvoiceDetails(invoice: Arc<Invoice>, on_close: Callback<()>) -> impl IntoView {
    let total = format_money(invoice.total());
    let status = invoice.status;

    view! {
        <Modal
            title=format!("Invoice {}", invoice.id)
            description=format!("Issued {}", invoice.date)
            on_close=on_close
            footer=Arc::new(move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                    "Close"
                </Button>
            }.into_any())
        >
            <div class="invoice__header">
                <div>
                    <div class="invoice__label">"Bill To"</div>
                    <div class="invoice__customer">{invoice.customer.clone()}</div>
                    <div class="invoice__email">{invoice.email.clone()}</div>
                </div>
                <Badge variant=status_variant(status)>{status.as_str()}</Badge>
            </div>

            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Description"</th>
                        <th class="table__header-cell table__header-cell--number">"Qty"</th>
                        <th class="table__header-cell table__header-cell--number">"Rate"</th>
                        <th class="table__header-cell table__header-cell--number">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {invoice.items.iter().map(|line| view! {
                        <tr class="table__row">
                            <td class="table__cell">{line.description.clone()}</td>
                            <td class="table__cell table__cell--number">{line.quantity}</td>
                            <td class="table__cell table__cell--number">{format_money(line.rate)}</td>
                            <td class="table__cell table__cell--number">{format_money(line.amount())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
                <tfoot>
                    <tr class="table__totals-row">
                        <td class="table__cell" colspan="3">"Total"</td>
                        <td class="table__cell table__cell--number">{total}</td>
                    </tr>
                </tfoot>
            </table>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(InvoiceStatus::Paid), "success");
        assert_eq!(status_variant(InvoiceStatus::Unpaid), "warning");
    }
}
