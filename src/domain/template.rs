use std::collections::HashMap;

/// Placeholder name → replacement text for one send.
pub type TemplateParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text with `{name}` placeholders.
///
/// No syntax validation is performed: unbalanced braces are plain text.
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace every literal `{key}` whose key is present in `params`.
    ///
    /// Unknown placeholders are kept verbatim. Matches are taken from the template only,
    /// left to right, and the longest one wins where two overlap, so replacement text is
    /// never rescanned and the result does not depend on the iteration order of `params`.
    pub fn render(&self, params: &TemplateParams) -> String {
        let template = self.0.as_str();
        let mut matches = params
            .iter()
            .flat_map(|(key, value)| {
                let token = format!("{{{key}}}");
                template
                    .match_indices(token.as_str())
                    .map(|(start, _)| (start, start + token.len(), value.as_str()))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        matches.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut out = String::with_capacity(template.len());
        let mut cursor = 0;
        for (start, end, value) in matches {
            if start < cursor {
                continue;
            }
            out.push_str(&template[cursor..start]);
            out.push_str(value);
            cursor = end;
        }
        out.push_str(&template[cursor..]);
        out
    }
}

impl From<&str> for MessageTemplate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageTemplate {
    fn from(value: String) -> Self {
        Self(value)
    }
}
