use crate::models::Portfolio;

const STYLE: &str = r#"      :root{ --brand:#667eea; --ink:#0f172a; --muted:#475569; --border:#e2e8f0; }
      *{ box-sizing:border-box }
      body{ font-family:Inter,Arial,Helvetica,sans-serif; color:var(--ink); margin:0; }
      .container{ max-width:900px; margin:0 auto; padding:32px 20px; }
      .header{ display:flex; align-items:flex-end; justify-content:space-between; gap:16px; border-bottom:1px solid var(--border); padding-bottom:16px; }
      .title{ font-size:32px; font-weight:800; margin:0; }
      .subtitle{ color:var(--muted); margin:4px 0 0 0; font-weight:600; }
      .meta{ color:var(--muted); margin-top:8px; }
      .section{ margin-top:28px; }
      .section h2{ font-size:18px; text-transform:uppercase; letter-spacing:.08em; color:var(--muted); margin:0 0 12px 0; }
      .pill{ display:inline-block; background:#eef2ff; color:#3730a3; padding:6px 10px; border-radius:999px; margin:4px 6px 0 0; font-size:12px; }
      .pill-group{ margin:8px 0 6px 0; }
      .grid{ display:grid; grid-template-columns:repeat(auto-fit,minmax(260px,1fr)); gap:12px; }
      .card{ border:1px solid var(--border); border-radius:12px; padding:14px; background:white; box-shadow:0 2px 8px rgba(0,0,0,.04) }
      .card-title{ font-weight:700; margin-bottom:6px; }
      ul{ margin:8px 0; padding-left:18px; }
      .footer{ margin-top:32px; color:var(--muted); font-size:12px; text-align:center; }
      @media print{
        .no-print{ display:none }
        body{ -webkit-print-color-adjust:exact; print-color-adjust:exact; }
      }"#;

/// Standalone styled page with a print button.
pub fn render_html(portfolio: &Portfolio) -> String {
    render_page(portfolio, "<body>")
}

/// Same page, opening the browser print dialog as soon as it loads.
pub fn render_print_html(portfolio: &Portfolio) -> String {
    render_page(portfolio, r#"<body onload="window.print()">"#)
}

fn render_page(portfolio: &Portfolio, body_open: &str) -> String {
    let name = escape(&portfolio.name);
    let title = escape(&portfolio.title);
    let experience = escape(&portfolio.experience);
    let skills = pills(&portfolio.skills);
    let interests: String = portfolio
        .interests
        .iter()
        .map(|i| format!("<li>{}</li>", escape(i)))
        .collect();
    let cards: String = portfolio
        .projects
        .iter()
        .map(|project| {
            format!(
                r#"
      <div class="card">
        <div class="card-title">{}</div>
        <div class="pill-group">{}</div>
        <p>{}</p>
      </div>
    "#,
                escape(&project.title),
                pills(&project.technologies),
                escape(&project.description)
            )
        })
        .collect();

    format!(
        r#"<!doctype html><html><head><meta charset="utf-8"/><title>{name} - Portfolio</title>
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <style>
{STYLE}
    </style>
    </head>
    {body_open}
      <div class="container">
        <div class="header">
          <div>
            <h1 class="title">{name}</h1>
            <div class="subtitle">{title}</div>
            <div class="meta">{experience}</div>
          </div>
          <div class="no-print">
            <button onclick="window.print()" style="background:var(--brand);color:white;border:none;padding:10px 14px;border-radius:8px;cursor:pointer">Print</button>
          </div>
        </div>

        <div class="section">
          <h2>Skills</h2>
          <div>
            {skills}
          </div>
        </div>

        <div class="section">
          <h2>Projects</h2>
          <div class="grid">
            {cards}
          </div>
        </div>

        <div class="section">
          <h2>Interests</h2>
          <ul>
            {interests}
          </ul>
        </div>

        <div class="footer">Generated from Portfolio</div>
      </div>
    </body>
    </html>"#
    )
}

fn pills(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!(r#"<span class="pill">{}</span>"#, escape(v)))
        .collect()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_portfolio_sections() {
        let html = render_html(&Portfolio::default());

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Raghav Bharadwaj - Portfolio</title>"));
        assert!(html.contains(r#"<h1 class="title">Raghav Bharadwaj</h1>"#));
        assert!(html.contains(r#"<span class="pill">Node.js</span>"#));
        assert!(html.contains(r#"<div class="card-title">AI-Powered Portfolio</div>"#));
        assert!(html.contains("<li>Cloud Computing</li>"));
        assert!(html.contains(r#"<button onclick="window.print()""#));
        assert!(html.contains("\n    <body>\n"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn print_variant_prints_on_load() {
        let html = render_print_html(&Portfolio::default());
        assert!(html.contains(r#"<body onload="window.print()">"#));
        assert_eq!(
            html.replace(r#"<body onload="window.print()">"#, "<body>"),
            render_html(&Portfolio::default())
        );
    }

    #[test]
    fn values_are_escaped() {
        let portfolio = Portfolio {
            name: "A <b>\"Bold\"</b> & Co".to_string(),
            ..Portfolio::default()
        };
        let html = render_html(&portfolio);
        assert!(html.contains("A &lt;b&gt;&quot;Bold&quot;&lt;/b&gt; &amp; Co"));
        assert!(!html.contains("<b>"));
    }
}
