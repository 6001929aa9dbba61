//! 商品面板的 HTML 渲染

use crate::app::shell::render_header;
use crate::catalog::model::Record;
use crate::catalog::panel::{CatalogPanel, DELETE_PROMPT};
use crate::core::response::escape_html;

const STYLE: &str = r#"
body { margin: 0; font-family: Arial, sans-serif; background: #111827; color: #f3f4f6; }
a { color: inherit; text-decoration: none; }
.shell { background: #1f2937; box-shadow: 0 2px 10px rgba(0,0,0,0.4); }
.shell-inner { max-width: 960px; margin: 0 auto; padding: 24px 16px; display: flex; justify-content: space-between; align-items: center; }
.brand { font-size: 1.5rem; font-weight: bold; color: #60a5fa; }
.shell ul { display: flex; gap: 24px; list-style: none; margin: 0; padding: 0; }
.sign-in { background: #2563eb; color: white; font-weight: bold; border: 0; border-radius: 9999px; padding: 8px 16px; }
.panel { max-width: 960px; margin: 0 auto; padding: 32px 16px; }
.draft { background: #1f2937; padding: 24px; border-radius: 8px; display: grid; gap: 12px; margin-bottom: 32px; }
.draft input[type=text], .draft input[type=number] { background: #374151; color: #f3f4f6; border: 1px solid #4b5563; border-radius: 6px; padding: 8px 12px; }
.draft button { background: #2563eb; color: white; font-weight: bold; border: 0; border-radius: 6px; padding: 8px 16px; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 24px; }
.card { background: #1f2937; padding: 24px; border-radius: 8px; }
.card h2 { color: #60a5fa; margin-top: 0; }
.card img { width: 100%; height: 128px; object-fit: cover; border-radius: 6px; }
.in-stock { color: #4ade80; }
.out-of-stock { color: #f87171; }
.card form { display: inline; }
.edit { background: #eab308; color: #f3f4f6; border: 0; border-radius: 6px; padding: 8px 12px; margin-right: 8px; }
.delete { background: #ef4444; color: #f3f4f6; border: 0; border-radius: 6px; padding: 8px 12px; display: inline-block; }
"#;

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>DarkFoods</title>
  <style>{}</style>
</head>
<body>
{}
{}
</body>
</html>"#,
        STYLE,
        render_header(),
        body
    )
}

fn render_draft_form(panel: &CatalogPanel) -> String {
    let draft = panel.draft();
    let checked = if draft.in_stock { " checked" } else { "" };

    format!(
        r#"<form method="post" action="/products/draft" class="draft">
  <input type="text" name="name" placeholder="Name" value="{name}">
  <input type="number" step="any" name="price" placeholder="Price" value="{price}">
  <input type="text" name="desc" placeholder="Description" value="{desc}">
  <input type="text" name="image" placeholder="Image URL" value="{image}">
  <label><input type="checkbox" name="inStock"{checked}> In Stock</label>
  <button type="submit">{label}</button>
</form>"#,
        name = escape_html(&draft.name),
        price = escape_html(&draft.price.to_string()),
        desc = escape_html(&draft.description),
        image = escape_html(&draft.image),
        checked = checked,
        label = panel.submit_label(),
    )
}

/// id 进入 URL 时先按路径段编码，再做 HTML 转义
fn id_segment(id: &str) -> String {
    escape_html(&urlencoding::encode(id))
}

fn render_card(record: &Record) -> String {
    let id = escape_html(&record.id);
    let name = escape_html(&record.name);
    let (stock_class, stock_label) = if record.in_stock {
        ("in-stock", "In Stock")
    } else {
        ("out-of-stock", "Out of Stock")
    };

    format!(
        r#"<div class="card" id="product-{id}">
  <h2>{name}</h2>
  <p>Price: ${price}</p>
  <p>{desc}</p>
  <img src="{image}" alt="{name}">
  <p class="{stock_class}">{stock_label}</p>
  <form method="post" action="/products/{segment}/edit"><button type="submit" class="edit">Edit</button></form>
  <a href="/products/{segment}/delete" class="delete">Delete</a>
</div>"#,
        id = id,
        segment = id_segment(&record.id),
        name = name,
        price = escape_html(&record.price.to_string()),
        desc = escape_html(&record.description),
        image = escape_html(&record.image),
        stock_class = stock_class,
        stock_label = stock_label,
    )
}

/// 首页：导航栏 + 草稿表单 + 商品卡片
pub fn render_home(panel: &CatalogPanel) -> String {
    let cards: String = panel.records().iter().map(render_card).collect();

    layout(&format!(
        r#"<main class="panel">
{}
<div class="cards">
{}
</div>
</main>"#,
        render_draft_form(panel),
        cards
    ))
}

/// 删除确认页
pub fn render_delete_confirmation(record: &Record) -> String {
    let id = id_segment(&record.id);

    layout(&format!(
        r#"<main class="panel">
<div class="card">
  <h2>{name}</h2>
  <p>{prompt}</p>
  <form method="post" action="/products/{id}/delete">
    <input type="hidden" name="confirm" value="yes">
    <button type="submit" class="delete">OK</button>
  </form>
  <form method="post" action="/products/{id}/delete">
    <input type="hidden" name="confirm" value="no">
    <button type="submit" class="edit">Cancel</button>
  </form>
</div>
</main>"#,
        name = escape_html(&record.name),
        prompt = DELETE_PROMPT,
        id = id,
    ))
}
