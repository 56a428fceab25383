use uuid::Uuid;

/// Local session indicator established after a successful sign-in.
///
/// Nothing is authenticated or persisted; the session exists so screens can
/// greet the user and so logout has something to clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub display_name: String,
}

impl Session {
    /// Build a session for a signed-in email, deriving a readable display
    /// name from the local part ("jane.doe@x.com" greets "Jane Doe").
    pub fn for_email(email: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name_from_email(email),
        }
    }
}

fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let words: Vec<String> = local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        local.to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_local_part_becomes_two_words() {
        let session = Session::for_email("jane.doe@example.com");
        assert_eq!(session.display_name, "Jane Doe");
    }

    #[test]
    fn plain_local_part_is_capitalized() {
        let session = Session::for_email("ada@example.com");
        assert_eq!(session.display_name, "Ada");
    }

    #[test]
    fn underscores_and_dashes_split_words() {
        assert_eq!(
            Session::for_email("john_q-public@x.org").display_name,
            "John Q Public"
        );
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = Session::for_email("a@b.com");
        let b = Session::for_email("a@b.com");
        assert_ne!(a.id, b.id);
    }
}
