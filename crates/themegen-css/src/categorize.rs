//! Group discovered variables by what they style.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::variables::VariableMap;

/// Variable groups, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    BaseColors,
    ColorScales,
    SurfaceColors,
    SoftColors,
    Spacing,
    Components,
    Typography,
    Borders,
    Shadows,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::BaseColors,
        Category::ColorScales,
        Category::SurfaceColors,
        Category::SoftColors,
        Category::Spacing,
        Category::Components,
        Category::Typography,
        Category::Borders,
        Category::Shadows,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::BaseColors => "base colors",
            Category::ColorScales => "color scales",
            Category::SurfaceColors => "surface colors",
            Category::SoftColors => "soft colors",
            Category::Spacing => "spacing",
            Category::Components => "components",
            Category::Typography => "typography",
            Category::Borders => "borders",
            Category::Shadows => "shadows",
            Category::Other => "other",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rules matched against the name without its leading `--`. First match
/// wins; anything unmatched is [`Category::Other`].
static RULES: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    const PALETTE: &str = "primary|secondary|success|info|warning|danger|light|dark|gray";
    [
        (Category::BaseColors, format!("^bs-({PALETTE})(-rgb)?$")),
        (
            Category::ColorScales,
            format!("^bs-({PALETTE})-(25|50|[1-9]00)(-rgb)?$"),
        ),
        (Category::SurfaceColors, "surface-".to_string()),
        (Category::SoftColors, "-soft".to_string()),
        (Category::Spacing, "ref-spacer-".to_string()),
        (
            Category::Components,
            "^bs-(btn|accordion|modal|card|nav|dropdown|form|input|table|list|badge|alert|toast|offcanvas|pagination|breadcrumb|progress|spinner|tooltip|popover)-"
                .to_string(),
        ),
        (
            Category::Typography,
            "^bs-(fs|fw|lh|font|text|heading|display|body)-".to_string(),
        ),
        (Category::Borders, "border|radius".to_string()),
        (Category::Shadows, "shadow".to_string()),
    ]
    .into_iter()
    .map(|(category, pattern)| (category, Regex::new(&pattern).unwrap()))
    .collect()
});

/// Category for one variable name.
pub fn category_of(name: &str) -> Category {
    let bare = name.strip_prefix("--").unwrap_or(name);
    RULES
        .iter()
        .find(|(_, re)| re.is_match(bare))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

/// A variable map split into [`Category`] buckets. Each bucket keeps the
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedVariables {
    buckets: [VariableMap; 10],
}

impl CategorizedVariables {
    pub fn get(&self, category: Category) -> &VariableMap {
        &self.buckets[category.index()]
    }

    /// Non-empty buckets in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &VariableMap)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, vars)| !vars.is_empty())
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(VariableMap::len).sum()
    }
}

/// Split `variables` into categories.
pub fn categorize(variables: &VariableMap) -> CategorizedVariables {
    let mut categorized = CategorizedVariables::default();
    for (name, value) in variables.iter() {
        categorized.buckets[category_of(name).index()].insert(name, value);
    }
    categorized
}
