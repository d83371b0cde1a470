use crate::validation::Credentials;

/// One line of console input
#[derive(Debug, PartialEq)]
pub enum ConsoleInput {
    /// `username<TAB>password<TAB>confirmation`, trailing fields optional
    Update(Credentials),
    Submit,
    EditUsername,
    Quit,
    Blank,
}

// Fields are taken verbatim; whitespace inside a password is significant.
pub fn parse_line(raw: &str) -> ConsoleInput {
    let line = raw.trim_end_matches(['\r', '\n']);

    match line {
        "" => ConsoleInput::Blank,
        ":submit" => ConsoleInput::Submit,
        ":edit-username" => ConsoleInput::EditUsername,
        ":quit" | ":q" => ConsoleInput::Quit,
        _ => {
            let mut fields = line.splitn(3, '\t');
            let username = fields.next().unwrap_or("");
            let password = fields.next().unwrap_or("");
            let confirmation = fields.next().unwrap_or("");
            ConsoleInput::Update(Credentials::new(username, password, confirmation))
        }
    }
}
