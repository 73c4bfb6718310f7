//! Filmstrip HTML renderer.
//!
//! Produces a self-contained page: the frames as viewable `<img>`
//! elements plus the raw filmstrip embedded as compact inline JSON so
//! tooling can recover the exact frame data from the page itself.

use crate::artifacts::schema::Filmstrip;
use crate::utils::error::OutputError;

/// Render a filmstrip as a standalone HTML document
///
/// **Public** - used by the asset preparer
///
/// The document always begins with the standard doctype declaration.
///
/// # Errors
/// * `OutputError::SerializationFailed` - filmstrip not representable as JSON
pub fn render_filmstrip_html(filmstrip: &Filmstrip) -> Result<String, OutputError> {
    // `</` must not appear verbatim inside a <script> block
    let inline_json = serde_json::to_string(filmstrip)?.replace("</", "<\\/");

    let mut page = String::from(
        "<!doctype html>\n<meta charset=\"utf-8\">\n<title>screenshots</title>\n\
         <style>img { margin: 4px; max-height: 240px; border: 1px solid #ccc; }</style>\n\
         <div id=\"filmstrip\">\n",
    );

    for frame in filmstrip {
        page.push_str(&format!(
            "  <img src=\"{}\" alt=\"frame at {}\">\n",
            escape_attribute(&frame.datauri),
            frame.timestamp
        ));
    }

    page.push_str("</div>\n<script>const filmstrip = ");
    page.push_str(&inline_json);
    page.push_str(";</script>\n");

    Ok(page)
}

/// Escape a string for use inside a double-quoted HTML attribute
///
/// **Private** - internal helper
fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::schema::Frame;

    #[test]
    fn test_page_starts_with_doctype() {
        let html = render_filmstrip_html(&Vec::new()).unwrap();
        assert!(html.starts_with("<!doctype html>"));
    }

    #[test]
    fn test_embeds_compact_frame_json() {
        let filmstrip = vec![Frame {
            timestamp: 674089419.919,
            datauri: "data:image/jpeg;base64,AAAA".to_string(),
        }];

        let html = render_filmstrip_html(&filmstrip).unwrap();

        assert!(html.contains(r#"{"timestamp":674089419.919"#));
        assert!(html.contains("data:image/jpeg;base64,AAAA"));
    }

    #[test]
    fn test_one_image_per_frame() {
        let filmstrip = vec![
            Frame {
                timestamp: 1.0,
                datauri: "data:image/jpeg;base64,AAAA".to_string(),
            },
            Frame {
                timestamp: 2.0,
                datauri: "data:image/jpeg;base64,BBBB".to_string(),
            },
        ];

        let html = render_filmstrip_html(&filmstrip).unwrap();

        assert_eq!(html.matches("<img ").count(), 2);
    }

    #[test]
    fn test_attribute_escaping() {
        let filmstrip = vec![Frame {
            timestamp: 0.0,
            datauri: "data:\"evil\"<tag>&amp".to_string(),
        }];

        let html = render_filmstrip_html(&filmstrip).unwrap();

        assert!(html.contains("src=\"data:&quot;evil&quot;&lt;tag>&amp;amp\""));
    }
}
