use serde::{Deserialize, Serialize};

/// System/user prompt pair for a text-generation call.
///
/// `{name}` placeholders in `user` are substituted by [`PromptTemplate::render`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub system: String,
    pub user: String,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }

    /// Fill the user prompt. Unknown placeholders are left as they are.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        vars.iter().fold(self.user.clone(), |prompt, (name, value)| {
            prompt.replace(&format!("{{{}}}", name), value)
        })
    }
}
