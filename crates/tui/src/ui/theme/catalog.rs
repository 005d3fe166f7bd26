use super::{DraculaTheme, NordTheme, Theme};

/// A theme that can be chosen through `DATASCRUB_THEME` or the preferences file.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Identifier written to the preferences file.
    pub id: &'static str,
    /// Extra names accepted when resolving.
    pub aliases: &'static [&'static str],
    build: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    pub fn build(&self) -> Box<dyn Theme> {
        (self.build)()
    }

    /// Case-insensitive match against the id or any alias.
    pub fn matches(&self, name: &str) -> bool {
        std::iter::once(self.id).chain(self.aliases.iter().copied()).any(|known| known.eq_ignore_ascii_case(name))
    }
}

/// Available themes; the first one is the default.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "nord",
        aliases: &["default"],
        build: || Box::new(NordTheme),
    },
    ThemeDefinition {
        id: "dracula",
        aliases: &[],
        build: || Box::new(DraculaTheme),
    },
];

pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    THEME_DEFINITIONS.iter().find(|definition| definition.matches(name))
}

pub fn default_definition() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}
