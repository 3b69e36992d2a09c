use chrono::NaiveDate;
use pulldown_cmark::{html, Options, Parser};

/// Formats a date as DD-MM-YYYY, the form stored in each document record.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Renders markdown content to an HTML fragment for previewing.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(content, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_date_pads_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "07-03-2024");
    }

    #[test]
    fn render_markdown_produces_html() {
        let output = render_markdown("# Heading\n\nSome *emphasis*.");
        assert!(output.contains("<h1>Heading</h1>"));
        assert!(output.contains("<em>emphasis</em>"));
    }

    #[test]
    fn render_markdown_of_empty_content_is_empty() {
        assert!(render_markdown("").is_empty());
    }
}
