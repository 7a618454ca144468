use std::path::Path;

use super::{escape_html, Label};

/// Document served for unmatched routes when the frontend build has no `index.html`.
pub fn render(static_dir: &Path) -> String {
    let dir = escape_html(&static_dir.display().to_string());
    let status = Label::new("Frontend build").html_for("frontend-status");
    let api = Label::new("User API").html_for("api-status");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>User Management</title>
</head>
<body>
<main>
<h1>User Management</h1>
{status}
<output id="frontend-status">No index.html found in {dir}</output>
{api}
<output id="api-status"><a href="/api/users">/api/users</a> · <a href="/swagger-ui/">API docs</a></output>
</main>
</body>
</html>
"#
    )
}
