//! 页面顶部的固定导航栏，没有状态也没有行为

pub const BRAND: &str = "DarkFoods";

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Products", "/products"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

pub fn render_header() -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(label, href)| format!(r#"<li><a href="{}">{}</a></li>"#, href, label))
        .collect();

    format!(
        r#"<header class="shell">
  <div class="shell-inner">
    <a href="/" class="brand">{}</a>
    <nav><ul>{}</ul></nav>
    <button type="button" class="sign-in">Sign In</button>
  </div>
</header>"#,
        BRAND, links
    )
}
