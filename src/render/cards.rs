//! Results list rendering: skeleton placeholders, product cards, empty state.

use crate::catalog::Product;
use crate::config::RenderConfig;
use crate::render::escape::escape_html;

const SKELETON_ITEM: &str = r#"<li class="card"><div class="skeleton"></div></li>"#;

/// Produces the inner HTML of the results list.
#[derive(Debug, Clone)]
pub struct Renderer {
    currency_prefix: String,
    default_category: String,
    empty_message: String,
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            currency_prefix: config.currency_prefix.clone(),
            default_category: config.default_category.clone(),
            empty_message: config.empty_message.clone(),
        }
    }

    /// `count` content-less placeholder items.
    pub fn loading(&self, count: usize) -> String {
        SKELETON_ITEM.repeat(count)
    }

    /// One card per product, or a single empty-state entry when `items` is
    /// absent or empty.
    pub fn products(&self, items: Option<&[Product]>) -> String {
        match items {
            Some(items) if !items.is_empty() => {
                items.iter().map(|p| self.card(p)).collect()
            }
            _ => format!(
                r#"<li class="card"><div class="meta">{}</div></li>"#,
                escape_html(&self.empty_message)
            ),
        }
    }

    fn card(&self, product: &Product) -> String {
        let category = product
            .category
            .as_deref()
            .unwrap_or(&self.default_category);

        format!(
            concat!(
                r#"<li class="card">"#,
                "<h3>{name}</h3>",
                r#"<div class="meta">#{id} · {category}</div>"#,
                r#"<div class="meta">{currency} {price}</div>"#,
                "</li>"
            ),
            name = escape_html(&product.name),
            id = escape_html(&product.id.to_string()),
            category = escape_html(category),
            currency = escape_html(&self.currency_prefix),
            price = format_price(product.price),
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

/// Two fixed decimals; non-finite values keep their JavaScript spelling.
///
/// Exact halfway values round away from zero. `{:.2}` alone would round them
/// to even.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        "NaN".to_string()
    } else if price.is_infinite() {
        let sign = if price < 0.0 { "-" } else { "" };
        format!("{}Infinity", sign)
    } else if price == 0.0 {
        "0.00".to_string()
    } else if let Some(cents) = halfway_cents(price) {
        let sign = if price < 0.0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    } else {
        format!("{:.2}", price)
    }
}

/// Magnitude in cents, rounded up, when `price` lies exactly between two
/// cents.
///
/// A binary float can only sit on such a tie when it is an odd multiple of
/// 1/8, and scaling by 8 is exact.
fn halfway_cents(price: f64) -> Option<u64> {
    let eighths = price.abs() * 8.0;
    if eighths.fract() != 0.0 || eighths >= 2f64.powi(56) || eighths % 2.0 != 1.0 {
        return None;
    }
    let eighths = eighths as u64;
    Some((eighths * 25 + 1) / 2)
}

/// Number of card entries in rendered list HTML.
pub fn count_cards(html: &str) -> usize {
    html.matches(r#"<li class="card">"#).count()
}
