//! HTTP request handlers for the web adapter.

use axum::{
    Form,
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::adapters::chart_svg::render_series_chart;
use crate::domain::catalog::{MIN_YEAR, REFERENCE_YEAR};
use crate::domain::format::{format_unit, group_digits};
use crate::domain::selection::Selection;
use crate::domain::valuation::{self, Trend};

use super::templates::{
    IndexTemplate, ItemOptionsTemplate, OptionPair, ResultTemplate, trend_block,
};
use super::{AppState, WebError, is_htmx_request};

pub async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    let catalog = state
        .catalog_port
        .catalog()
        .map_err(|e| WebError::from_domain(&headers, e))?;

    let categories: Vec<OptionPair> = catalog
        .investments
        .iter()
        .map(|c| OptionPair {
            value: c.id.clone(),
            label: c.label.clone(),
        })
        .collect();

    let template = IndexTemplate {
        categories: &categories,
        min_year: MIN_YEAR,
        max_year: REFERENCE_YEAR,
    };

    if is_htmx_request(&headers) {
        Ok(Html(template.fragment()).into_response())
    } else {
        Ok(template.into_response())
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ItemsQuery {
    pub category: Option<String>,
}

/// Option-list fragment for the item select, repopulated when the category
/// changes. An unknown or empty category renders a disabled placeholder,
/// never an error page.
pub async fn item_options(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ItemsQuery>,
) -> Result<Response, WebError> {
    let catalog = state
        .catalog_port
        .catalog()
        .map_err(|e| WebError::from_domain(&headers, e))?;

    let selected = query.category.as_deref().filter(|c| !c.is_empty());
    let (placeholder, items) = match selected {
        None => ("Select a category first", Vec::new()),
        Some(id) => match catalog.find_category(id) {
            Ok(category) if category.items.is_empty() => ("No items in this category", Vec::new()),
            Ok(category) => (
                "Select an item",
                category
                    .items
                    .iter()
                    .map(|i| OptionPair {
                        value: i.id.clone(),
                        label: i.label.clone(),
                    })
                    .collect(),
            ),
            Err(_) => ("No items in this category", Vec::new()),
        },
    };

    let template = ItemOptionsTemplate {
        placeholder,
        items: &items,
    };
    Ok(template.into_response())
}

#[derive(Debug, serde::Deserialize)]
pub struct ValuateFormData {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub year: String,
}

pub async fn valuate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<ValuateFormData>,
) -> Result<Response, WebError> {
    let amount: f64 = form
        .amount
        .trim()
        .parse()
        .map_err(|_| WebError::bad_request(&headers, "Invalid investment amount"))?;
    let start_year: u16 = form
        .year
        .trim()
        .parse()
        .map_err(|_| WebError::bad_request(&headers, "Invalid investment year"))?;

    let selection = Selection {
        category: form.category,
        item: form.item,
        amount,
        start_year,
    };

    let catalog = state
        .catalog_port
        .catalog()
        .map_err(|e| WebError::from_domain(&headers, e))?;

    let (item, result) = valuation::valuate(&catalog, &selection)
        .map_err(|e| WebError::from_domain(&headers, e))?;

    let amount_grouped = group_digits(selection.amount);
    let projected_unit = format_unit(result.projected_value);
    let projected_grouped = group_digits(result.projected_value);
    let growth_text = format!("{:.2}", result.growth_percent);
    let trend_html = trend_block(Trend::from_growth(result.growth_percent));
    let chart_svg = render_series_chart(&item.label, &result.series);

    let template = ResultTemplate {
        item_label: &item.label,
        start_year: selection.start_year,
        reference_year: REFERENCE_YEAR,
        amount_grouped: &amount_grouped,
        projected_unit: &projected_unit,
        projected_grouped: &projected_grouped,
        growth_text: &growth_text,
        trend_html: &trend_html,
        chart_svg: &chart_svg,
    };

    if is_htmx_request(&headers) {
        Ok(Html(template.fragment()).into_response())
    } else {
        Ok(template.into_response())
    }
}

pub async fn not_found(headers: HeaderMap) -> Response {
    WebError::not_found(&headers, "Page not found").into_response()
}
