use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target language of a snippet.
///
/// Serialized kebab-case; read back through [`FromStr`], so template files accept
/// the same spellings as `meta-generate-language:` directives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Language {
    CSharp,
    VisualBasic,
    Cpp,
    Xml,
    Xaml,
    Html,
    Css,
    JavaScript,
    TypeScript,
    Json,
    Markdown,
    Rust,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::CSharp,
        Language::VisualBasic,
        Language::Cpp,
        Language::Xml,
        Language::Xaml,
        Language::Html,
        Language::Css,
        Language::JavaScript,
        Language::TypeScript,
        Language::Json,
        Language::Markdown,
        Language::Rust,
    ];

    /// Markup templates are exempt from the generate-directive requirement.
    pub fn is_markup(self) -> bool {
        matches!(self, Language::Html)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::CSharp => "c-sharp",
            Language::VisualBasic => "visual-basic",
            Language::Cpp => "cpp",
            Language::Xml => "xml",
            Language::Xaml => "xaml",
            Language::Html => "html",
            Language::Css => "css",
            Language::JavaScript => "java-script",
            Language::TypeScript => "type-script",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Accepts the serialized name or the name without dashes (`csharp`, `typescript`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().chars().filter(|c| *c != '-').collect();
        Language::ALL
            .into_iter()
            .find(|language| {
                let name: String = language.as_str().chars().filter(|c| *c != '-').collect();
                name.eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| format!("Unknown language: {}", s))
    }
}

impl TryFrom<String> for Language {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
