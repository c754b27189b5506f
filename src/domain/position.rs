use serde::Serialize;

/// Job position offered in the modal's dropdown. The API stores the short
/// lowercase code; the label is what people see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Sales,
    Admin,
    Digital,
    Manager,
    Freelancer,
    Intern,
    Finance,
    Others,
}

impl Position {
    /// Dropdown order
    pub const ALL: [Position; 8] = [
        Position::Sales,
        Position::Admin,
        Position::Digital,
        Position::Manager,
        Position::Freelancer,
        Position::Intern,
        Position::Finance,
        Position::Others,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Position::Sales => "sales",
            Position::Admin => "admin",
            Position::Digital => "digital",
            Position::Manager => "manager",
            Position::Freelancer => "freelancer",
            Position::Intern => "intern",
            Position::Finance => "finance",
            Position::Others => "others",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Sales => "Sales",
            Position::Admin => "Admin",
            Position::Digital => "Digital Marketing",
            Position::Manager => "Manager",
            Position::Freelancer => "Freelancer",
            Position::Intern => "Intern",
            Position::Finance => "Finance",
            Position::Others => "Others",
        }
    }

    /// Accepts either the code (`digital`) or the label (`Digital Marketing`),
    /// ignoring case.
    pub fn parse(value: &str) -> Result<Self, String> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(value) || p.label().eq_ignore_ascii_case(value))
            .ok_or_else(|| match value.is_empty() {
                true => "Position is required.".to_owned(),
                false => format!("{value:?} is not a valid position."),
            })
    }
}
