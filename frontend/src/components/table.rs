use leptos::*;
use std::rc::Rc;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// One column: a header plus how to pull the cell text out of a row.
#[derive(Clone)]
pub struct TableColumn<T> {
    pub header: &'static str,
    pub cell: Rc<dyn Fn(&T) -> String>,
    pub muted: bool,
}

impl<T> TableColumn<T> {
    pub fn new(header: &'static str, cell: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            header,
            cell: Rc::new(cell),
            muted: false,
        }
    }

    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }
}

#[component]
pub fn Table<T: 'static>(
    columns: Vec<TableColumn<T>>,
    rows: Vec<T>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    let span = columns.len().max(1);
    let header = columns
        .iter()
        .map(|col| {
            view! {
                <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                    {col.header}
                </th>
            }
        })
        .collect_view();
    let body = if rows.is_empty() {
        let message = empty_message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string());
        view! {
            <tr>
                <td colspan=span.to_string() class="px-4 py-6 text-center text-sm text-fg-muted">
                    {message}
                </td>
            </tr>
        }
        .into_view()
    } else {
        rows.iter()
            .map(|row| {
                let cells = columns
                    .iter()
                    .map(|col| {
                        let class = if col.muted {
                            "px-4 py-3 text-sm text-fg-muted"
                        } else {
                            "px-4 py-3 text-sm text-fg"
                        };
                        view! { <td class=class>{(col.cell)(row)}</td> }
                    })
                    .collect_view();
                view! { <tr class="border-t border-border">{cells}</tr> }
            })
            .collect_view()
    };
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full">
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
