//! Style templates: wrap a rendered HTML body in a complete document.
//!
//! Three fixed stylesheets cover the three output situations:
//!
//! * [`StyleVariant::Standard`] — the full report style. Serif body, coloured
//!   headings, `page-break-*` rules so the PDF renderer splits chapters
//!   cleanly. This is the variant the PDF is rendered through.
//! * [`StyleVariant::PrintOptimized`] — `@media print` page setup for users
//!   printing from a browser, with a separate `@media screen` preview style.
//! * [`StyleVariant::Simplified`] — a lean sans-serif sheet used by the HTML
//!   fallback when the PDF renderer is unavailable.
//!
//! [`wrap_document`] is a pure function: variant and title in, full document
//! out. The body fragment is embedded verbatim, which is what makes the
//! "variants differ only in style rules" property hold.

use crate::config::StyleVariant;
use crate::pipeline::markdown::escape_html;

/// Stylesheet for [`StyleVariant::Standard`].
const CSS_STANDARD: &str = r#"
body {
    font-family: 'Times New Roman', serif;
    line-height: 1.6;
    margin: 40px;
    color: #333;
}

h1 {
    color: #2c3e50;
    border-bottom: 3px solid #3498db;
    padding-bottom: 10px;
    page-break-before: always;
}

h1:first-child {
    page-break-before: auto;
}

h2 {
    color: #34495e;
    border-bottom: 2px solid #ecf0f1;
    padding-bottom: 5px;
    margin-top: 30px;
}

h3 {
    color: #7f8c8d;
    margin-top: 25px;
}

h4 {
    color: #95a5a6;
    margin-top: 20px;
}

code {
    background-color: #f8f9fa;
    border: 1px solid #e9ecef;
    border-radius: 3px;
    padding: 2px 4px;
    font-family: 'Courier New', monospace;
    font-size: 0.9em;
}

pre {
    background-color: #f8f9fa;
    border: 1px solid #e9ecef;
    border-radius: 5px;
    padding: 15px;
    overflow-x: auto;
    margin: 15px 0;
    page-break-inside: avoid;
}

pre code {
    background: none;
    border: none;
    padding: 0;
}

table {
    border-collapse: collapse;
    width: 100%;
    margin: 20px 0;
    page-break-inside: avoid;
}

th, td {
    border: 1px solid #ddd;
    padding: 12px;
    text-align: left;
}

th {
    background-color: #f2f2f2;
    font-weight: bold;
}

tr:nth-child(even) {
    background-color: #f9f9f9;
}

ul, ol {
    margin: 15px 0;
    padding-left: 30px;
}

li {
    margin: 5px 0;
}

blockquote {
    border-left: 4px solid #3498db;
    margin: 20px 0;
    padding: 10px 20px;
    background-color: #f8f9fa;
    page-break-inside: avoid;
}

.toc {
    background-color: #f8f9fa;
    border: 1px solid #e9ecef;
    border-radius: 5px;
    padding: 20px;
    margin: 20px 0;
    page-break-inside: avoid;
}

.toc ul {
    list-style-type: none;
    padding-left: 20px;
}

.toc li {
    margin: 5px 0;
}

.toc a {
    text-decoration: none;
    color: #3498db;
}

.toc a:hover {
    text-decoration: underline;
}

@media print {
    body {
        margin: 20px;
    }

    h1, h2, h3, h4 {
        page-break-after: avoid;
    }

    pre, blockquote {
        page-break-inside: avoid;
    }

    table {
        page-break-inside: avoid;
    }
}
"#;

/// Stylesheet for [`StyleVariant::PrintOptimized`].
const CSS_PRINT: &str = r#"
@media print {
    @page {
        size: A4;
        margin: 2cm;
    }

    body {
        font-family: 'Times New Roman', serif;
        font-size: 12pt;
        line-height: 1.5;
        color: #000;
    }

    h1 {
        font-size: 18pt;
        color: #000;
        border-bottom: 2px solid #000;
        page-break-before: always;
        margin-top: 0;
    }

    h1:first-child {
        page-break-before: auto;
    }

    h2 {
        font-size: 16pt;
        color: #000;
        border-bottom: 1px solid #000;
        margin-top: 20pt;
    }

    h3 {
        font-size: 14pt;
        color: #000;
        margin-top: 15pt;
    }

    h4 {
        font-size: 13pt;
        color: #000;
        margin-top: 10pt;
    }

    code {
        font-family: 'Courier New', monospace;
        font-size: 10pt;
        background-color: #f5f5f5;
        padding: 1px 3px;
    }

    pre {
        font-family: 'Courier New', monospace;
        font-size: 9pt;
        background-color: #f5f5f5;
        padding: 10pt;
        border: 1px solid #ccc;
        page-break-inside: avoid;
        overflow-x: auto;
    }

    table {
        border-collapse: collapse;
        width: 100%;
        font-size: 10pt;
        page-break-inside: avoid;
    }

    th, td {
        border: 1px solid #000;
        padding: 5pt;
        text-align: left;
    }

    th {
        background-color: #f0f0f0;
        font-weight: bold;
    }

    ul, ol {
        margin: 10pt 0;
        padding-left: 20pt;
    }

    li {
        margin: 3pt 0;
    }

    blockquote {
        border-left: 3px solid #000;
        margin: 10pt 0;
        padding: 5pt 10pt;
        background-color: #f9f9f9;
    }
}

@media screen {
    body {
        font-family: Arial, sans-serif;
        max-width: 800px;
        margin: 0 auto;
        padding: 20px;
        line-height: 1.6;
    }

    h1 {
        color: #2c3e50;
        border-bottom: 3px solid #3498db;
    }

    h2 {
        color: #34495e;
        border-bottom: 2px solid #ecf0f1;
    }

    code {
        background-color: #f8f9fa;
        padding: 2px 4px;
        border-radius: 3px;
    }

    pre {
        background-color: #f8f9fa;
        padding: 15px;
        border-radius: 5px;
        overflow-x: auto;
    }

    table {
        border-collapse: collapse;
        width: 100%;
    }

    th, td {
        border: 1px solid #ddd;
        padding: 8px;
        text-align: left;
    }

    th {
        background-color: #f2f2f2;
    }

    .toc a {
        text-decoration: none;
        color: #3498db;
    }
}
"#;

/// Stylesheet for [`StyleVariant::Simplified`].
const CSS_SIMPLIFIED: &str = r#"
body { font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }
h1 { color: #2c3e50; border-bottom: 2px solid #3498db; }
h2 { color: #34495e; border-bottom: 1px solid #ecf0f1; }
code { background-color: #f8f9fa; padding: 2px 4px; border-radius: 3px; }
pre { background-color: #f8f9fa; padding: 15px; border-radius: 5px; overflow-x: auto; }
table { border-collapse: collapse; width: 100%; margin: 20px 0; }
th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
th { background-color: #f2f2f2; }
.toc ul { list-style-type: none; padding-left: 20px; }
.toc a { text-decoration: none; color: #3498db; }
"#;

/// Stylesheet text for the given variant.
pub fn stylesheet(variant: StyleVariant) -> &'static str {
    match variant {
        StyleVariant::Standard => CSS_STANDARD,
        StyleVariant::PrintOptimized => CSS_PRINT,
        StyleVariant::Simplified => CSS_SIMPLIFIED,
    }
}

/// Embed an HTML body fragment in a complete styled document.
pub fn wrap_document(body: &str, variant: StyleVariant, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>{title}</title>\n\
<style>{css}</style>\n\
</head>\n\
<body>\n\
{body}\n\
</body>\n\
</html>\n",
        title = escape_html(title),
        css = stylesheet(variant),
        body = body,
    )
}
