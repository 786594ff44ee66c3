use std::fmt;
use std::str::FromStr;

use super::AppError;

/// Which embedded Makefile layout to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TemplateVariant {
    /// Multi-file Go project with per-platform build targets.
    #[default]
    Multi,
    /// Single `main.go` project.
    Single,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 2] = [TemplateVariant::Multi, TemplateVariant::Single];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            TemplateVariant::Multi => "multi",
            TemplateVariant::Single => "single",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateVariant::Multi => "multi-file Go project layout",
            TemplateVariant::Single => "single-file Go project layout (main.go)",
        }
    }

    /// File name of the embedded template asset.
    pub fn asset_name(self) -> &'static str {
        match self {
            TemplateVariant::Multi => "multi.mk",
            TemplateVariant::Single => "single.mk",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.name() == name)
    }

    fn expected_names() -> String {
        Self::ALL.iter().map(|variant| variant.name()).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for TemplateVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AppError::InvalidVariant {
            name: s.to_string(),
            expected: Self::expected_names(),
        })
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
