//! # Segment Catalog
//!
//! The static table of every segment a prompt can be built from, plus the
//! preset color swatches offered by the style editor.
//!
//! ## Categories
//!
//! | Category | Contents |
//! |----------|----------|
//! | Classics | bash prompt escapes (`\u`, `\h`, `\w`, ...) |
//! | Symbols | separators, glyphs and emoji |
//! | Integrations | `$(...)` command substitutions (git, node, python, kubectl) |

use crate::prompt::segment::{Category, SegmentColor, SegmentDefinition};

const fn def(
    id: &'static str,
    label: &'static str,
    code: &'static str,
    example: &'static str,
    category: Category,
) -> SegmentDefinition {
    SegmentDefinition {
        id,
        label,
        code,
        example,
        category,
        is_command: false,
    }
}

const fn command(
    id: &'static str,
    label: &'static str,
    code: &'static str,
    example: &'static str,
) -> SegmentDefinition {
    SegmentDefinition {
        id,
        label,
        code,
        example,
        category: Category::Integrations,
        is_command: true,
    }
}

static CATALOG: [SegmentDefinition; 31] = [
    // Classics
    def("user", "Username", "\\u", "dgv", Category::Classics),
    def("host-short", "Host (Short)", "\\h", "macbook", Category::Classics),
    def("host-full", "Host (Full)", "\\H", "macbook.local", Category::Classics),
    def("path-full", "Full Path", "\\w", "~/dev/shellprompt", Category::Classics),
    def("path-base", "Current Dir", "\\W", "shellprompt", Category::Classics),
    def("time-24", "Time (24h)", "\\t", "21:45:00", Category::Classics),
    def("time-12", "Time (12h)", "\\@", "09:45 PM", Category::Classics),
    def("date", "Date", "\\d", "Wed Jan 21", Category::Classics),
    def("bash-version", "Bash Version", "\\v", "5.2", Category::Classics),
    def("history-num", "History #", "\\!", "1024", Category::Classics),
    def("command-num", "Command #", "\\#", "42", Category::Classics),
    def("jobs", "Active Jobs", "\\j", "2", Category::Classics),
    def("tty", "TTY", "\\l", "ttys001", Category::Classics),
    def("shell-name", "Shell Name", "\\s", "bash", Category::Classics),
    def("exit-code", "Exit Code", "$?", "0", Category::Classics),
    // Symbols
    def("space", "Space", " ", " ", Category::Symbols),
    def("at-symbol", "@", "@", "@", Category::Symbols),
    def("colon", ":", ":", ":", Category::Symbols),
    def("bracket-open", "[", "[", "[", Category::Symbols),
    def("bracket-close", "]", "]", "]", Category::Symbols),
    def("parenthesis-open", "(", "(", "(", Category::Symbols),
    def("parenthesis-close", ")", ")", ")", Category::Symbols),
    def("char-dollar", "Symbol ($)", "\\$", "$", Category::Symbols),
    def("char-arrow", "Arrow (❯)", "❯", "❯", Category::Symbols),
    def("newline", "Newline", "\\n", "\n", Category::Symbols),
    def("emoji-rocket", "Rocket (🚀)", "🚀", "🚀", Category::Symbols),
    def("emoji-lock", "Lock (🔒)", "🔒", "🔒", Category::Symbols),
    // Integrations
    command(
        "git",
        "Git Branch",
        "$(git branch 2>/dev/null | grep \"^*\" | colrm 1 2)",
        "main",
    ),
    command("node-v", "Node Version", "$(node -v 2>/dev/null)", "v20.10.0"),
    command(
        "python-v",
        "Python Version",
        "$(python3 --version 2>/dev/null | cut -d\" \" -f2)",
        "3.11.5",
    ),
    command(
        "k8s",
        "K8s Context",
        "$(kubectl config current-context 2>/dev/null)",
        "minikube",
    ),
];

/// Every definition, in catalog order.
pub fn all() -> &'static [SegmentDefinition] {
    &CATALOG
}

/// Look up a definition by id.
pub fn find(id: &str) -> Option<&'static SegmentDefinition> {
    CATALOG.iter().find(|d| d.id == id)
}

/// One palette section: a category and its definitions in catalog order.
#[derive(Debug, Clone)]
pub struct PaletteGroup {
    pub category: Category,
    pub entries: Vec<&'static SegmentDefinition>,
}

/// Group the catalog by category, in [`Category::ORDER`].
pub fn palette_groups() -> Vec<PaletteGroup> {
    Category::ORDER
        .iter()
        .map(|category| PaletteGroup {
            category: *category,
            entries: CATALOG.iter().filter(|d| d.category == *category).collect(),
        })
        .collect()
}

/// A swatch in the color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    /// Empty for the "Default" swatch.
    pub hex: &'static str,
    /// `None` for the "Default" swatch, which clears the color.
    pub code: Option<&'static str>,
}

impl ColorPreset {
    pub fn to_color(self) -> SegmentColor {
        match self.code {
            Some(code) => SegmentColor::Preset {
                code,
                hex: self.hex,
            },
            None => SegmentColor::Default,
        }
    }
}

static COLOR_PRESETS: [ColorPreset; 8] = [
    ColorPreset {
        name: "Default",
        hex: "",
        code: None,
    },
    ColorPreset {
        name: "Red",
        hex: "#ef4444",
        code: Some("31"),
    },
    ColorPreset {
        name: "Green",
        hex: "#22c55e",
        code: Some("32"),
    },
    ColorPreset {
        name: "Yellow",
        hex: "#eab308",
        code: Some("33"),
    },
    ColorPreset {
        name: "Blue",
        hex: "#3b82f6",
        code: Some("34"),
    },
    ColorPreset {
        name: "Magenta",
        hex: "#d946ef",
        code: Some("35"),
    },
    ColorPreset {
        name: "Cyan",
        hex: "#06b6d4",
        code: Some("36"),
    },
    ColorPreset {
        name: "White",
        hex: "#ffffff",
        code: Some("37"),
    },
];

/// Color swatches; index 0 is "Default".
pub fn color_presets() -> &'static [ColorPreset] {
    &COLOR_PRESETS
}
