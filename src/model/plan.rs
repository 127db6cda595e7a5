use std::fmt;

/// Board labels. Each key maps to a fixed (name, colour) pair on Trello.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    Architecture,
    Client,
    Server,
    Combat,
    Enemy,
    Ui,
    Polish,
    Critical,
}

impl LabelKey {
    pub const ALL: [LabelKey; 8] = [
        LabelKey::Architecture,
        LabelKey::Client,
        LabelKey::Server,
        LabelKey::Combat,
        LabelKey::Enemy,
        LabelKey::Ui,
        LabelKey::Polish,
        LabelKey::Critical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LabelKey::Architecture => "Architecture",
            LabelKey::Client => "Client",
            LabelKey::Server => "Server",
            LabelKey::Combat => "Combat",
            LabelKey::Enemy => "Enemy",
            LabelKey::Ui => "UI",
            LabelKey::Polish => "Polish",
            LabelKey::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            LabelKey::Architecture => "purple",
            LabelKey::Client => "blue",
            LabelKey::Server => "red",
            LabelKey::Combat => "orange",
            LabelKey::Enemy => "green",
            LabelKey::Ui => "yellow",
            LabelKey::Polish => "pink",
            LabelKey::Critical => "black",
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChecklistSpec {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct CardSpec {
    /// Dependency id such as `S0-03`, used as the title prefix.
    pub id: &'static str,
    pub title: &'static str,
    /// Prerequisite card ids, in the order they should be finished.
    pub depends_on: &'static [&'static str],
    pub labels: &'static [LabelKey],
    /// Markdown description, one entry per line.
    pub description: &'static [&'static str],
    pub checklists: &'static [ChecklistSpec],
    pub dev_notes: Option<&'static [&'static str]>,
}

impl CardSpec {
    /// `[S0-03] Title`, the natural key of the card on its list.
    pub fn full_title(&self) -> String {
        format!("[{}] {}", self.id, self.title)
    }

    /// The card description followed by a generated dependency section.
    pub fn full_description(&self) -> String {
        let deps = if self.depends_on.is_empty() {
            "- None (starting point)".to_string()
        } else {
            self.depends_on
                .iter()
                .map(|d| format!("- Finish: {d} before this"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        [
            self.description.join("\n"),
            String::new(),
            "----".to_string(),
            "## Dependency Notes".to_string(),
            deps,
        ]
        .join("\n")
    }

    pub fn dev_notes_text(&self) -> Option<String> {
        self.dev_notes.map(|lines| lines.join("\n"))
    }
}

/// Everything needed to provision one board.
#[derive(Debug, Clone, Copy)]
pub struct BoardPlan {
    pub workspace_name: &'static str,
    pub workspace_desc: &'static str,
    pub board_name: &'static str,
    pub board_desc: &'static str,
    /// Lists to ensure on the board, left to right.
    pub lists: &'static [&'static str],
    /// Name of the list (one of `lists`) that receives the cards.
    pub card_list: &'static str,
    pub labels: &'static [LabelKey],
    pub cards: &'static [CardSpec],
    /// Items of the checklist applied to every card.
    pub definition_of_done: &'static [&'static str],
}

pub const DEFINITION_OF_DONE_TITLE: &str = "Definition of Done (Global)";
