//! Built-in professional presets.

use super::types::{slugify, Preset, PresetBorders, PresetColors, PresetTypography};

struct Row {
    name: &'static str,
    description: &'static str,
    /// primary, secondary, success, danger, warning, info, light, dark
    palette: [&'static str; 8],
    font_size: f64,
    line_height: f64,
    /// default, sm, lg
    radii: [u32; 3],
}

const ROWS: &[Row] = &[
    Row {
        name: "Fintech Trust",
        description: "Trust blue with modern accents",
        palette: ["#1e3a8a", "#64748b", "#10b981", "#ef4444", "#f59e0b", "#3b82f6", "#f8fafc", "#0f172a"],
        font_size: 16.0,
        line_height: 1.5,
        radii: [8, 6, 12],
    },
    Row {
        name: "Digital Banking",
        description: "Modern professional green",
        palette: ["#059669", "#6b7280", "#34d399", "#dc2626", "#fbbf24", "#06b6d4", "#f9fafb", "#111827"],
        font_size: 16.0,
        line_height: 1.6,
        radii: [12, 8, 16],
    },
    Row {
        name: "AI Startup",
        description: "Futuristic tech purple",
        palette: ["#7c3aed", "#475569", "#10b981", "#f43f5e", "#f59e0b", "#8b5cf6", "#faf5ff", "#1e1b4b"],
        font_size: 16.0,
        line_height: 1.5,
        radii: [6, 4, 8],
    },
    Row {
        name: "Corporate Tech",
        description: "Dark corporate blue",
        palette: ["#1e40af", "#475569", "#16a34a", "#dc2626", "#facc15", "#0ea5e9", "#f1f5f9", "#0f172a"],
        font_size: 15.2,
        line_height: 1.6,
        radii: [4, 2, 6],
    },
    Row {
        name: "Modern Crypto",
        description: "Premium black and gold",
        palette: ["#f59e0b", "#404040", "#22c55e", "#ef4444", "#fbbf24", "#3b82f6", "#fafafa", "#18181b"],
        font_size: 16.0,
        line_height: 1.5,
        radii: [0, 0, 0],
    },
    Row {
        name: "Health Tech",
        description: "Clean medical teal",
        palette: ["#0891b2", "#64748b", "#10b981", "#f43f5e", "#f97316", "#06b6d4", "#f0fdfa", "#164e63"],
        font_size: 16.0,
        line_height: 1.6,
        radii: [8, 6, 12],
    },
    Row {
        name: "Neobank",
        description: "Minimal modern pink",
        palette: ["#ec4899", "#6b7280", "#14b8a6", "#f43f5e", "#f97316", "#a855f7", "#fdf4ff", "#701a75"],
        font_size: 16.8,
        line_height: 1.5,
        radii: [16, 12, 24],
    },
    Row {
        name: "Enterprise SaaS",
        description: "Reliable enterprise blue",
        palette: ["#2563eb", "#52525b", "#16a34a", "#e11d48", "#eab308", "#0ea5e9", "#f4f4f5", "#18181b"],
        font_size: 15.2,
        line_height: 1.5,
        radii: [6, 4, 8],
    },
    Row {
        name: "Gradient Tech",
        description: "Vibrant modern gradient",
        palette: ["#6366f1", "#64748b", "#10b981", "#f43f5e", "#f59e0b", "#06b6d4", "#f8fafc", "#1e293b"],
        font_size: 16.0,
        line_height: 1.5,
        radii: [12, 8, 16],
    },
    Row {
        name: "Dark Mode Pro",
        description: "Professional dark with accents",
        palette: ["#3b82f6", "#374151", "#10b981", "#ef4444", "#f59e0b", "#06b6d4", "#1f2937", "#030712"],
        font_size: 16.0,
        line_height: 1.6,
        radii: [8, 6, 10],
    },
];

/// Names of the built-in presets, in display order.
pub fn built_in_names() -> impl Iterator<Item = &'static str> {
    ROWS.iter().map(|row| row.name)
}

/// All built-in presets, in display order.
pub fn built_in_presets() -> Vec<Preset> {
    ROWS.iter().map(Row::to_preset).collect()
}

/// Find a built-in preset by display name or slug, ignoring case.
pub fn find_built_in(name: &str) -> Option<Preset> {
    let wanted = slugify(name);
    ROWS.iter()
        .find(|row| slugify(row.name) == wanted)
        .map(Row::to_preset)
}

impl Row {
    fn to_preset(&self) -> Preset {
        let [primary, secondary, success, danger, warning, info, light, dark] =
            self.palette.map(|c| Some(c.to_string()));
        let [radius, radius_sm, radius_lg] = self.radii.map(Some);
        Preset {
            name: self.name.into(),
            description: Some(self.description.into()),
            colors: Some(PresetColors {
                primary,
                secondary,
                success,
                danger,
                warning,
                info,
                light,
                dark,
            }),
            typography: Some(PresetTypography {
                font_size: Some(self.font_size),
                line_height: Some(self.line_height),
                ..Default::default()
            }),
            borders: Some(PresetBorders {
                radius,
                radius_sm,
                radius_lg,
                width: None,
            }),
        }
    }
}
