//! Index page template module
//!
//! Renders the Swagger UI bootstrap page from a [`SwaggerConfig`].

use crate::config::SwaggerConfig;

/// OAuth2 redirect target: `oauth2-redirect.html` next to the current page
const OAUTH2_REDIRECT_URL_JS: &str = "window.location.protocol + '//' + window.location.host + \
     window.location.pathname.split('/').slice(0, -1).join('/') + '/oauth2-redirect.html'";

const INDEX_TEMPLATE: &str = r#"<!-- HTML for static distribution bundle build -->
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{{title}}</title>
  <link href="https://fonts.googleapis.com/css?family=Open+Sans:400,700|Source+Code+Pro:300,600|Titillium+Web:400,600,700" rel="stylesheet">
  <link rel="stylesheet" type="text/css" href="./swagger-ui.css" >
  <link rel="icon" type="image/png" href="./favicon-32x32.png" sizes="32x32" />
  <link rel="icon" type="image/png" href="./favicon-16x16.png" sizes="16x16" />
  <style>
    html
    {
        box-sizing: border-box;
        overflow: -moz-scrollbars-vertical;
        overflow-y: scroll;
    }
    *,
    *:before,
    *:after
    {
        box-sizing: inherit;
    }

    body {
      margin:0;
      background: #fafafa;
    }
  </style>
</head>

<body>

<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" style="position:absolute;width:0;height:0">
  <defs>
    <symbol viewBox="0 0 20 20" id="unlocked">
          <path d="M15.8 8H14V5.6C14 2.703 12.665 1 10 1 7.334 1 6 2.703 6 5.6V6h2v-.801C8 3.754 8.797 3 10 3c1.203 0 2 .754 2 2.199V8H4c-.553 0-1 .646-1 1.199V17c0 .549.428 1.139.951 1.307l1.197.387C5.672 18.861 6.55 19 7.1 19h5.8c.549 0 1.428-.139 1.951-.307l1.196-.387c.524-.167.953-.757.953-1.306V9.199C17 8.646 16.352 8 15.8 8z"></path>
    </symbol>

    <symbol viewBox="0 0 20 20" id="locked">
      <path d="M15.8 8H14V5.6C14 2.703 12.665 1 10 1 7.334 1 6 2.703 6 5.6V8H4c-.553 0-1 .646-1 1.199V17c0 .549.428 1.139.951 1.307l1.197.387C5.672 18.861 6.55 19 7.1 19h5.8c.549 0 1.428-.139 1.951-.307l1.196-.387c.524-.167.953-.757.953-1.306V9.199C17 8.646 16.352 8 15.8 8zM12 8H8V5.199C8 3.754 8.797 3 10 3c1.203 0 2 .754 2 2.199V8z"/>
    </symbol>

    <symbol viewBox="0 0 20 20" id="close">
      <path d="M14.348 14.849c-.469.469-1.229.469-1.697 0L10 11.819l-2.651 3.029c-.469.469-1.229.469-1.697 0-.469-.469-.469-1.229 0-1.697l2.758-3.15-2.759-3.152c-.469-.469-.469-1.228 0-1.697.469-.469 1.228-.469 1.697 0L10 8.183l2.651-3.031c.469-.469 1.228-.469 1.697 0 .469.469.469 1.229 0 1.697l-2.758 3.152 2.758 3.15c.469.469.469 1.229 0 1.698z"/>
    </symbol>

    <symbol viewBox="0 0 20 20" id="large-arrow">
      <path d="M13.25 10L6.109 2.58c-.268-.27-.268-.707 0-.979.268-.27.701-.27.969 0l7.83 7.908c.268.271.268.709 0 .979l-7.83 7.908c-.268.271-.701.27-.969 0-.268-.269-.268-.707 0-.979L13.25 10z"/>
    </symbol>

    <symbol viewBox="0 0 20 20" id="large-arrow-down">
      <path d="M17.418 6.109c.272-.268.709-.268.979 0s.271.701 0 .969l-7.908 7.83c-.27.268-.707.268-.979 0l-7.908-7.83c-.27-.268-.27-.701 0-.969.271-.268.709-.268.979 0L10 13.25l7.418-7.141z"/>
    </symbol>


    <symbol viewBox="0 0 24 24" id="jump-to">
      <path d="M19 7v4H5.83l3.58-3.59L8 6l-6 6 6 6 1.41-1.41L5.83 13H21V7z"/>
    </symbol>

    <symbol viewBox="0 0 24 24" id="expand">
      <path d="M10 18h4v-2h-4v2zM3 6v2h18V6H3zm3 7h12v-2H6v2z"/>
    </symbol>

  </defs>
</svg>

<div id="swagger-ui"></div>

<script src="./swagger-ui-bundle.js"> </script>
<script src="./swagger-ui-standalone-preset.js"> </script>
<script>
window.onload = function() {
  const ui = SwaggerUIBundle({
    url: {{url}},
    syntaxHighlight: {{syntax_highlight}},
    dom_id: '#swagger-ui',
    validatorUrl: null,
    oauth2RedirectUrl: {{oauth2_redirect_url}},
    persistAuthorization: {{persist_authorization}},
    presets: [
      SwaggerUIBundle.presets.apis,
      SwaggerUIStandalonePreset
    ],
    plugins: [
      SwaggerUIBundle.plugins.DownloadUrl
    ],
    layout: "StandaloneLayout",
    docExpansion: {{doc_expansion}},
    deepLinking: {{deep_linking}},
    defaultModelsExpandDepth: {{default_models_expand_depth}}
  })
{{init_oauth}}
  window.ui = ui
}
</script>
</body>

</html>
"#;

/// Render the index page for `config`
pub fn render_index(config: &SwaggerConfig) -> String {
    render(INDEX_TEMPLATE, |key| match key {
        "title" => Some(escape_html(&config.title)),
        "url" => Some(js_string(&config.url)),
        "syntax_highlight" => Some(config.syntax_highlight.to_string()),
        "oauth2_redirect_url" => Some(OAUTH2_REDIRECT_URL_JS.to_string()),
        "persist_authorization" => Some(config.persist_authorization.to_string()),
        "doc_expansion" => Some(js_string(config.doc_expansion.as_str())),
        "deep_linking" => Some(config.deep_linking.to_string()),
        "default_models_expand_depth" => Some(config.default_models_expand_depth.to_string()),
        "init_oauth" => Some(init_oauth(&config.oauth2_default_client_id)),
        _ => None,
    })
}

/// Single-pass `{{key}}` substitution
///
/// Substituted values are never rescanned. Unknown keys are left verbatim.
fn render(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match lookup(key) {
            Some(value) => out.push_str(&value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn init_oauth(client_id: &str) -> String {
    if client_id.is_empty() {
        return String::new();
    }
    format!(
        "  ui.initOAuth({{\n    clientId: {}\n  }})\n",
        js_string(client_id)
    )
}

/// Quote `s` as a JavaScript string literal that is safe inside `<script>`
fn js_string(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{options, DocExpansion};

    #[test]
    fn test_render_defaults() {
        let html = render_index(&SwaggerConfig::default());
        assert!(html.contains("<title>Swagger UI</title>"));
        assert!(html.contains(r#"url: "doc.json","#));
        assert!(html.contains(r#"docExpansion: "list","#));
        assert!(html.contains("deepLinking: true,"));
        assert!(html.contains("defaultModelsExpandDepth: 1\n"));
        assert!(html.contains("persistAuthorization: false,"));
        assert!(html.contains("syntaxHighlight: false,"));
        assert!(html.contains("family=Open+Sans"));
        for icon in ["unlocked", "locked", "close", "large-arrow", "jump-to", "expand"] {
            assert!(html.contains(&format!(r#"id="{icon}""#)), "missing icon {icon}");
        }
        assert!(html.contains("oauth2RedirectUrl: window.location.protocol"));
        assert!(!html.contains("initOAuth"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_render_options() {
        let config = SwaggerConfig::with_options([
            options::doc_expansion(DocExpansion::None),
            options::default_models_expand_depth(-1),
            options::oauth2_default_client_id("my-client"),
            options::syntax_highlight(true),
        ]);
        let html = render_index(&config);
        assert!(html.contains(r#"docExpansion: "none","#));
        assert!(html.contains("defaultModelsExpandDepth: -1\n"));
        assert!(html.contains(r#"clientId: "my-client""#));
        assert!(html.contains("syntaxHighlight: true,"));
    }

    #[test]
    fn test_title_is_html_escaped() {
        let config = SwaggerConfig::with_options([options::title("<b>Pets & Co</b>")]);
        let html = render_index(&config);
        assert!(html.contains("<title>&lt;b&gt;Pets &amp; Co&lt;/b&gt;</title>"));
    }

    #[test]
    fn test_url_cannot_break_out_of_script() {
        let config = SwaggerConfig::with_options([options::url("x\"</script><script>alert(1)")]);
        let html = render_index(&config);
        assert!(!html.contains("</script><script>alert"));
        assert!(html.contains(r#"url: "x\"\u003c/script\u003e\u003cscript\u003ealert(1)","#));
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let config = SwaggerConfig::with_options([options::title("{{url}}")]);
        let html = render_index(&config);
        assert!(html.contains("<title>{{url}}</title>"));
    }

    #[test]
    fn test_render_unknown_and_unterminated() {
        assert_eq!(render("a {{x}} b", |_| None), "a {{x}} b");
        assert_eq!(render("a {{x", |_| Some("y".into())), "a {{x");
    }
}
