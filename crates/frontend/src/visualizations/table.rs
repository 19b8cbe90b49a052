use contracts::shared::visualization::QueryResult;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::table::format_cell;

/// Header titles and formatted cell text, row-major.
pub fn table_cells(result: &QueryResult) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = result.columns.iter().map(|c| c.title().to_string()).collect();
    let rows = result
        .rows
        .iter()
        .map(|row| {
            result
                .columns
                .iter()
                .map(|column| {
                    row.get(&column.name)
                        .map(|value| format_cell(value, column.column_type))
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();
    (headers, rows)
}

#[component]
pub fn TableView(result: QueryResult) -> impl IntoView {
    if result.is_empty() {
        return view! { <div class="visualization-renderer__empty">"Query returned no rows"</div> }
            .into_any();
    }

    let numeric: Vec<bool> = result.columns.iter().map(|c| c.is_numeric()).collect();
    let (headers, rows) = table_cells(&result);

    view! {
        <div class="table-visualization">
            <Table>
                <TableHeader>
                    <TableRow>
                        {headers
                            .into_iter()
                            .map(|title| view! { <TableHeaderCell>{title}</TableHeaderCell> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|cells| {
                            let numeric = numeric.clone();
                            view! {
                                <TableRow>
                                    {cells
                                        .into_iter()
                                        .zip(numeric)
                                        .map(|(text, is_numeric)| {
                                            let align = if is_numeric { "text-align: right;" } else { "" };
                                            view! {
                                                <TableCell>
                                                    <span style=align>{text}</span>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view()}
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
    .into_any()
}
