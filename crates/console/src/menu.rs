/// Numeric menu selections.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    CreateRandom,
    List,
    Analyze,
    Cool,
    Exit,
}

pub const MENU: &str = "\
QUANTUM VAULT CONTROL PANEL
1. Add new object (random)
2. List entire inventory
3. Analyze object (by ID)
4. Emergency cooling (by ID)
5. Exit";

impl MenuChoice {
    /// `None` for anything other than exactly `1`..`5`. A trailing line
    /// terminator is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim_end_matches(['\r', '\n']) {
            "1" => Some(MenuChoice::CreateRandom),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Analyze),
            "4" => Some(MenuChoice::Cool),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
