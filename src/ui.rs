use crate::page::{Page, VIEW_COUNT_ID};

pub fn render_page(page: &Page) -> String {
    let counter = match page.element(VIEW_COUNT_ID) {
        Some(element) => COUNTER_HTML.replace("{{VIEW_COUNT}}", &escape(element.text())),
        None => String::new(),
    };
    PAGE_HTML.replace("{{COUNTER}}", &counter)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const COUNTER_HTML: &str =
    r#"<p class="views">Views: <span id="view-count">{{VIEW_COUNT}}</span></p>"#;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Resume</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #2f4858;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
    }

    footer {
      font-size: 0.9rem;
      color: #5f5c57;
    }

    .views span {
      font-weight: 600;
      color: var(--accent);
    }
  </style>
</head>
<body>
  <main>
    <footer>
      {{COUNTER}}
    </footer>
  </main>
</body>
</html>
"#;
