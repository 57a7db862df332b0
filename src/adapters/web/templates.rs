//! HTML templates using Askama.

use askama::Template;

use crate::domain::valuation::Trend;

/// A (value, label) pair for a `<select>` option list.
pub struct OptionPair {
    pub value: String,
    pub label: String,
}

#[derive(Template)]
#[template(path = "base.html")]
pub struct BasePage<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub categories: &'a [OptionPair],
    pub min_year: u16,
    pub max_year: u16,
}

impl<'a> IndexTemplate<'a> {
    pub fn fragment(&self) -> String {
        let mut html = String::from("<div id=\"content\"><h1>Investment Hindsight</h1>");
        html.push_str("<form hx-post=\"/valuate\" hx-target=\"#result\">");
        html.push_str(
            "<label>Category: <select name=\"category\" hx-get=\"/items\" \
             hx-target=\"#item-select\" hx-trigger=\"change\">",
        );
        html.push_str("<option value=\"\" disabled selected>Select a category</option>");
        for category in self.categories {
            html.push_str(&format!(
                "<option value=\"{}\">{}</option>",
                category.value, category.label
            ));
        }
        html.push_str("</select></label><br>");
        html.push_str(
            "<label>Item: <select name=\"item\" id=\"item-select\">\
             <option value=\"\" disabled selected>Select a category first</option>\
             </select></label><br>",
        );
        html.push_str(
            "<label>Amount (won): <input type=\"number\" name=\"amount\" min=\"1\"></label><br>",
        );
        html.push_str(&format!(
            "<label>Year: <input type=\"number\" name=\"year\" min=\"{}\" max=\"{}\"></label><br>",
            self.min_year, self.max_year
        ));
        html.push_str("<button type=\"submit\">Calculate</button>");
        html.push_str("</form>");
        html.push_str("<div id=\"result\"></div>");
        html.push_str("</div>");
        html
    }
}

#[derive(Template)]
#[template(path = "item_options.html")]
pub struct ItemOptionsTemplate<'a> {
    pub placeholder: &'a str,
    pub items: &'a [OptionPair],
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate<'a> {
    pub item_label: &'a str,
    pub start_year: u16,
    pub reference_year: u16,
    pub amount_grouped: &'a str,
    pub projected_unit: &'a str,
    pub projected_grouped: &'a str,
    pub growth_text: &'a str,
    pub trend_html: &'a str,
    pub chart_svg: &'a str,
}

impl<'a> ResultTemplate<'a> {
    pub fn fragment(&self) -> String {
        let mut html = String::from("<div id=\"result\">");
        html.push_str("<h2>Result</h2>");
        html.push_str(&format!(
            "<p>If you had invested {} won in {} in {}, it would be worth about \
             <strong>{}</strong> ({} won) in {}.</p>",
            self.amount_grouped,
            self.item_label,
            self.start_year,
            self.projected_unit,
            self.projected_grouped,
            self.reference_year
        ));
        html.push_str(&format!(
            "<p>Growth: <strong>{}%</strong></p>",
            self.growth_text
        ));
        html.push_str(&format!("<div class=\"trend\">{}</div>", self.trend_html));
        html.push_str(&format!("<div class=\"chart\">{}</div>", self.chart_svg));
        html.push_str("</div>");
        html
    }
}

/// Animation block for the result: repeated arrows for a move, a plain
/// message when the value did not change.
pub fn trend_block(trend: Trend) -> String {
    match trend {
        Trend::Up => "<img src=\"/static/up.svg\" alt=\"up\" class=\"bounce\" width=\"64\">"
            .repeat(5),
        Trend::Down => "<img src=\"/static/down.svg\" alt=\"down\" class=\"shake\" width=\"64\">"
            .repeat(5),
        Trend::Flat => "<p>No change in value.</p>".to_string(),
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
    pub status: u16,
}

impl<'a> ErrorTemplate<'a> {
    pub fn fragment(&self) -> String {
        format!(
            "<div id=\"error\" class=\"error\"><h1>Error {}</h1><p>{}</p></div>",
            self.status, self.message
        )
    }
}
