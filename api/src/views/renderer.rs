//! Page renderer
//!
//! Renders product pages to plain HTML. All user-supplied text is escaped.

use crate::controllers::ModelState;
use crate::domain::entities::Product;

/// Render the product list
pub fn render_index(products: &[Product]) -> String {
    let mut buf = String::new();

    buf.push_str("<h1>Products</h1>\n");
    buf.push_str("<p><a href=\"/Products/Create\">Create New</a></p>\n");

    if products.is_empty() {
        buf.push_str("<p><em>No products yet.</em></p>\n");
        return layout("Products", &buf);
    }

    buf.push_str("<table>\n<thead><tr>");
    for heading in ["Name", "Price", "Stock", "Color", ""] {
        buf.push_str(&format!("<th>{}</th>", heading));
    }
    buf.push_str("</tr></thead>\n<tbody>\n");

    for product in products {
        buf.push_str(&render_row(product));
    }

    buf.push_str("</tbody>\n</table>\n");
    layout("Products", &buf)
}

fn render_row(product: &Product) -> String {
    format!(
        "<tr><td>{name}</td><td>{price:.2}</td><td>{stock}</td><td>{color}</td>\
         <td><a href=\"/Products/Details/{id}\">Details</a> | \
         <a href=\"/Products/Edit/{id}\">Edit</a></td></tr>\n",
        id = product.id,
        name = escape(&product.name),
        price = product.price,
        stock = product.stock,
        color = escape(product.color.as_deref().unwrap_or("")),
    )
}

/// Render a single product
pub fn render_details(product: &Product) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("<h1>{}</h1>\n<dl>\n", escape(&product.name)));
    buf.push_str(&format!("<dt>Price</dt><dd>{:.2}</dd>\n", product.price));
    buf.push_str(&format!("<dt>Stock</dt><dd>{}</dd>\n", product.stock));
    if let Some(color) = &product.color {
        buf.push_str(&format!("<dt>Color</dt><dd>{}</dd>\n", escape(color)));
    }
    if let Some(category_id) = product.category_id {
        buf.push_str(&format!("<dt>Category</dt><dd>{}</dd>\n", category_id));
    }
    buf.push_str("</dl>\n");
    buf.push_str(&format!(
        "<p><a href=\"/Products/Edit/{}\">Edit</a> | <a href=\"/Products\">Back to List</a></p>\n",
        product.id
    ));

    layout(&product.name, &buf)
}

/// Render the create form, refilled with a rejected submission if there is one
pub fn render_create(product: Option<&Product>, model_state: &ModelState) -> String {
    let empty = Product::default();
    let body = render_form(
        "Create Product",
        "/Products/Create",
        product.unwrap_or(&empty),
        model_state,
    );
    layout("Create Product", &body)
}

/// Render the edit form for a product
pub fn render_edit(product: &Product, model_state: &ModelState) -> String {
    let action = format!("/Products/Edit/{}", product.id);
    let body = render_form("Edit Product", &action, product, model_state);
    layout("Edit Product", &body)
}

pub fn render_not_found() -> String {
    layout(
        "Not Found",
        "<h1>Not Found</h1>\n<p><a href=\"/Products\">Back to List</a></p>\n",
    )
}

fn render_form(title: &str, action: &str, product: &Product, model_state: &ModelState) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("<h1>{}</h1>\n", title));
    if !model_state.is_valid() {
        buf.push_str(&format!(
            "<p class=\"validation-summary\">Please correct {} error(s).</p>\n",
            model_state.error_count()
        ));
    }

    buf.push_str(&format!("<form method=\"post\" action=\"{}\">\n", action));
    buf.push_str(&format!(
        "<input type=\"hidden\" name=\"id\" value=\"{}\">\n",
        product.id
    ));
    buf.push_str(&render_field("Name", "name", &product.name, model_state));
    buf.push_str(&render_field(
        "Price",
        "price",
        &product.price.to_string(),
        model_state,
    ));
    buf.push_str(&render_field(
        "Stock",
        "stock",
        &product.stock.to_string(),
        model_state,
    ));
    buf.push_str(&render_field(
        "Color",
        "color",
        product.color.as_deref().unwrap_or(""),
        model_state,
    ));
    buf.push_str(&render_field(
        "Category",
        "category_id",
        &product
            .category_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
        model_state,
    ));
    buf.push_str("<button type=\"submit\">Save</button>\n</form>\n");
    buf.push_str("<p><a href=\"/Products\">Back to List</a></p>\n");

    buf
}

fn render_field(label: &str, name: &str, value: &str, model_state: &ModelState) -> String {
    let mut buf = format!(
        "<label>{label} <input name=\"{name}\" value=\"{value}\"></label>\n",
        label = label,
        name = name,
        value = escape(value),
    );

    for message in model_state.field_errors(name) {
        buf.push_str(&format!(
            "<span class=\"field-validation-error\">{}</span>\n",
            escape(message)
        ));
    }

    buf
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
