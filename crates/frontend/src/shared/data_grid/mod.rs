//! Leptos view over the `contracts::shared::grid` engine.
//!
//! Owns one `GridViewState` per instance. Typing in the search box or
//! clicking a header is a single state update; the visible rows, the empty
//! state and the footer are all re-derived from it.

use contracts::shared::grid::{
    export_filename, Align, EmptyState, GridOptions, GridRow, GridTable, GridViewState,
};
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Table, TableBody, TableCell, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::shared::date_utils::export_date;
use crate::shared::export::download_csv;
use crate::shared::list_utils::{sort_class, sort_indicator, SearchInput};

struct RenderedCell {
    text: String,
    class: String,
}

enum GridBody {
    Rows(Vec<Vec<RenderedCell>>),
    Empty(EmptyState),
}

fn align_class(align: Align) -> &'static str {
    match align {
        Align::Left => "",
        Align::Right => "text-right",
    }
}

fn render_body<R: GridRow>(table: &GridTable<R>, state: &GridViewState) -> GridBody {
    let view = table.view(state);
    if let Some(empty) = view.empty_state() {
        return GridBody::Empty(empty);
    }

    let rows = view
        .rows
        .iter()
        .map(|row| {
            table
                .columns
                .iter()
                .map(|column| {
                    let value = row.field(column.field);
                    let class = format!(
                        "{} {}",
                        align_class(column.align),
                        column.tone(&value).css_class()
                    );
                    RenderedCell {
                        text: column.display(&value),
                        class: class.trim().to_string(),
                    }
                })
                .collect()
        })
        .collect();
    GridBody::Rows(rows)
}

#[component]
pub fn DataGrid<R>(
    #[prop(into)] table: Signal<GridTable<R>>,
    #[prop(optional)] options: GridOptions,
) -> impl IntoView
where
    R: GridRow + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(GridViewState::new());

    let title = move || table.with(|t| t.title.clone());
    let headers = move || {
        table.with(|t| {
            t.columns
                .iter()
                .map(|c| (c.header.clone(), c.field, c.align))
                .collect::<Vec<_>>()
        })
    };
    let column_count = move || table.with(|t| t.columns.len());
    let body = move || table.with(|t| state.with(|s| render_body(t, s)));
    let footer = move || table.with(|t| state.with(|s| t.view(s).footer()));

    let search_term = Signal::derive(move || state.with(|s| s.search_term.clone()));
    let on_search = Callback::new(move |term: String| state.update(|s| s.set_search(term)));

    // export reads the view state but never writes it
    let export = move |_: leptos::ev::MouseEvent| {
        let (csv, filename) = table.with_untracked(|t| {
            state.with_untracked(|s| (t.export_csv(s), export_filename(&t.title, export_date())))
        });
        if let Err(e) = download_csv(&csv, &filename) {
            log::error!("CSV export failed: {}", e);
        }
    };

    let scroll_style = format!("max-height: {}px; overflow-y: auto;", options.max_height);

    view! {
        <div class="data-grid">
            <div class="data-grid__toolbar">
                <h3 class="data-grid__title">{title}</h3>
                <div class="data-grid__actions">
                    {options.searchable.then(|| view! {
                        <SearchInput value=search_term on_change=on_search />
                    })}
                    {options.exportable.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            on_click=export
                        >
                            "Export CSV"
                        </Button>
                    })}
                </div>
            </div>

            <div class="data-grid__scroll" style=scroll_style>
                <Table>
                    <TableHeader>
                        <TableRow>
                            {move || headers()
                                .into_iter()
                                .map(|(header, field, align)| {
                                    let direction = move || state.with(|s| s.sort_direction_for(field));
                                    view! {
                                        <TableHeaderCell class=align_class(align)>
                                            <div
                                                class="data-grid__sortable-header"
                                                on:click=move |_| state.update(|s| s.toggle_sort(field))
                                            >
                                                {header}
                                                <span class=move || sort_class(direction())>
                                                    {move || sort_indicator(direction())}
                                                </span>
                                            </div>
                                        </TableHeaderCell>
                                    }
                                })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || match body() {
                            GridBody::Empty(empty) => view! {
                                <TableRow>
                                    <TableCell class="data-grid__empty" attr:colspan=column_count().to_string()>
                                        {empty.message()}
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any(),
                            GridBody::Rows(rows) => rows
                                .into_iter()
                                .map(|cells| view! {
                                    <TableRow>
                                        {cells
                                            .into_iter()
                                            .map(|cell| view! {
                                                <TableCell class=cell.class>{cell.text}</TableCell>
                                            })
                                            .collect_view()}
                                    </TableRow>
                                })
                                .collect_view()
                                .into_any(),
                        }}
                    </TableBody>
                </Table>
            </div>

            <div class="data-grid__footer">{footer}</div>
        </div>
    }
}
