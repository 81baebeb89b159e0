use serde::{Deserialize, Serialize};
use std::fmt;

/// An explanatory message attached to an evaluation.
///
/// Combinators never look inside a message; they only compare and collect them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Message {
    /// Fixed text.
    Static { text: String },
    /// Text with positional `{}` placeholders, filled from `args` on display.
    Parameterized { template: String, args: Vec<String> },
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Message::Static { text: text.into() }
    }

    pub fn parameterized<I, S>(template: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Message::Parameterized {
            template: template.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the message. Surplus placeholders are left as `{}`, surplus args are dropped.
    pub fn render(&self) -> String {
        match self {
            Message::Static { text } => text.clone(),
            Message::Parameterized { template, args } => {
                let mut rendered = String::with_capacity(template.len());
                let mut args = args.iter();
                let mut rest = template.as_str();
                while let Some(pos) = rest.find("{}") {
                    rendered.push_str(&rest[..pos]);
                    match args.next() {
                        Some(arg) => rendered.push_str(arg),
                        None => rendered.push_str("{}"),
                    }
                    rest = &rest[pos + 2..];
                }
                rendered.push_str(rest);
                rendered
            }
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Static { text }
    }
}
