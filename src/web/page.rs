//! HTML for the review form page

use crate::models::SentimentLabel;

const STYLE: &str = r#"
        body {
            font-family: Arial, sans-serif;
            background-color: #f5f5f5;
            color: #febd69;
            text-align: center;
            padding: 20px;
        }
        h1, h2 {
            color: #132f8c;
        }
        textarea {
            width: 80%;
            height: 100px;
            margin: 10px 0;
            padding: 10px;
            font-size: 16px;
            border: 1px solid #ddd;
            border-radius: 5px;
        }
        input[type="submit"] {
            padding: 10px 20px;
            font-size: 16px;
            background-color: #febd69;
            color: white;
            border: none;
            border-radius: 5px;
            cursor: pointer;
        }
        h2 {
            margin-top: 20px;
        }
        h3 {
            color: #febd69;
        }
        .error {
            color: #b00020;
        }
"#;

/// Render the form page, optionally with a label or an error note
pub fn render_page(label: Option<SentimentLabel>, error: Option<&str>) -> String {
    let label = label.map(|l| l.as_str()).unwrap_or("");
    let error = error
        .map(|message| format!("<p class=\"error\">{}</p>", escape_html(message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Sentiment Analyzer</title>
        <style>{style}</style>
    </head>
    <body>
        <h1>Sentiment Analyzer for Reviews</h1>
        {error}
        <form method="POST">
            <textarea name="review" placeholder="What do you think about the product?"></textarea><br>
            <input type="submit" value="Analyze">
        </form>
        <h2>Your review is: <h3>{label}</h3></h2>
    </body>
</html>
"#,
        style = STYLE,
        error = error,
        label = label,
    )
}

fn escape_html(text: &str) -> String {
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
