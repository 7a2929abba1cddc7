use super::{escape, Slider};
use crate::slidegate::auth::Identity;

pub const MSG_FAILED: &str = "Username or password is incorrect";
pub const MSG_PENDING: &str = "Please enter your username and password";

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex;min-height:100vh}\
aside{background:#f0f2f6;padding:1.5rem;min-width:12rem}\
main{padding:2rem 3rem;flex:1}\
form.login{max-width:22rem;display:flex;flex-direction:column;gap:.5rem}\
.notice{padding:.75rem 1rem;border-radius:.5rem;max-width:22rem;margin-top:1rem}\
.error{background:#ffe0e0;color:#7d0000}\
.warning{background:#fff6d6;color:#6b5200}";

/// A message shown under the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Warning(String),
}

impl Notice {
    #[must_use]
    pub fn failed() -> Self {
        Self::Error(MSG_FAILED.to_string())
    }

    #[must_use]
    pub fn pending() -> Self {
        Self::Warning(MSG_PENDING.to_string())
    }

    fn render(&self) -> String {
        let (class, text) = match self {
            Self::Error(text) => ("error", text),
            Self::Warning(text) => ("warning", text),
        };
        format!(
            r#"<div class="notice {class}" role="alert">{}</div>"#,
            escape(text)
        )
    }
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

/// The login form, optionally followed by an error or warning.
#[must_use]
pub fn login_page(notice: Option<&Notice>) -> String {
    let notice = notice.map(Notice::render).unwrap_or_default();
    let body = format!(
        r#"<main>
<h2>Login</h2>
<form class="login" method="post" action="/login">
<label for="username">Username</label>
<input id="username" name="username" type="text" autocomplete="username">
<label for="password">Password</label>
<input id="password" name="password" type="password" autocomplete="current-password">
<button type="submit">Login</button>
</form>
{notice}
</main>"#
    );
    document("Login", &body)
}

/// The page behind the login: title, welcome, slider with its echo, and a
/// logout button in the sidebar.
#[must_use]
pub fn authenticated_page(title: &str, identity: &Identity, slider: &Slider, value: i64) -> String {
    let heading = escape(title);
    let name = escape(&identity.name);
    let label = escape(slider.label());
    let (min, max) = (slider.min(), slider.max());
    let body = format!(
        r#"<aside>
<form method="post" action="/logout">
<button type="submit">Logout</button>
</form>
</aside>
<main>
<h1>{heading}</h1>
<p class="welcome">Welcome, {name}!</p>
<form method="get" action="/">
<label for="number">{label}</label>
<input id="number" name="number" type="range" min="{min}" max="{max}" step="1" value="{value}" onchange="this.form.submit()">
<output for="number">{value}</output>
<noscript><button type="submit">Apply</button></noscript>
</form>
<p class="selected">You selected: {value}</p>
</main>"#
    );
    document(title, &body)
}
