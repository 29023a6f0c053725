//! Add-Todo Form State
//!
//! Draft fields, validation and the append step behind the form component.
//! Kept free of reactive types so it can be driven directly from tests.

use crate::models::{Todo, User};

/// Selected user id meaning "nothing chosen yet"
pub const NO_USER_SELECTED: u32 = 0;

/// Validation failures shown next to the form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingTitle,
    NoUserSelected,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::MissingTitle => write!(f, "Please enter a title"),
            FormError::NoUserSelected => write!(f, "Please choose a user"),
        }
    }
}

impl std::error::Error for FormError {}

/// Characters a title may contain: Latin and Cyrillic letters, digits, space
pub fn is_title_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | 'а'..='я' | 'А'..='Я' | '0'..='9' | ' ')
}

/// Drop every character not allowed in a title
pub fn sanitize_title(raw: &str) -> String {
    raw.chars().filter(|c| is_title_char(*c)).collect()
}

/// Next free todo id: one past the largest, or 1 for an empty list
pub fn next_todo_id(todos: &[Todo]) -> u32 {
    todos.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

/// Parse a `<select>` value; anything unparsable counts as no selection
pub fn parse_user_id(value: &str) -> u32 {
    value.trim().parse().unwrap_or(NO_USER_SELECTED)
}

/// Uncommitted input of the add-todo form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub title: String,
    pub user_id: u32,
    pub title_error: bool,
    pub user_error: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_title_change(&mut self, raw: &str) {
        self.title = sanitize_title(raw);
        self.title_error = false;
    }

    pub fn on_user_change(&mut self, user_id: u32) {
        self.user_id = user_id;
        self.user_error = false;
    }

    /// Check the draft, raising the error flag of every field that fails.
    ///
    /// The draft itself is left untouched.
    pub fn validate(&mut self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            self.title_error = true;
            errors.push(FormError::MissingTitle);
        }
        if self.user_id == NO_USER_SELECTED {
            self.user_error = true;
            errors.push(FormError::NoUserSelected);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validate the draft and, if it passes, append a new todo.
    ///
    /// On failure the error flags are raised and the draft is left untouched.
    /// On success the todo keeps the title as typed, the draft is reset and
    /// the new todo's id is returned.
    ///
    /// # Panics
    /// If the selected user id is not in `users`. The select only offers
    /// known users, so this is a wiring bug rather than bad input.
    pub fn submit(&mut self, users: &[User], todos: &mut Vec<Todo>) -> Result<u32, Vec<FormError>> {
        self.validate()?;

        let user = users
            .iter()
            .find(|u| u.id == self.user_id)
            .cloned()
            .unwrap_or_else(|| panic!("selected user #{} is not a known user", self.user_id));

        let id = next_todo_id(todos);
        todos.push(Todo::new(id, std::mem::take(&mut self.title), user));

        *self = Self::new();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: u32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn make_todo(id: u32, user: &User) -> Todo {
        Todo::new(id, format!("Todo {}", id), user.clone())
    }

    fn seed() -> (Vec<User>, Vec<Todo>) {
        let users = vec![make_user(1, "Leanne"), make_user(2, "Ervin")];
        let todos = vec![
            make_todo(1, &users[0]),
            make_todo(2, &users[1]),
            make_todo(3, &users[0]),
        ];
        (users, todos)
    }

    #[test]
    fn test_sanitize_strips_punctuation() {
        assert_eq!(sanitize_title("Buy <milk>!!"), "Buy milk");
        assert_eq!(sanitize_title("Купить молоко 2"), "Купить молоко 2");
        assert_eq!(sanitize_title("tab\there"), "tabhere");
    }

    #[test]
    fn test_sanitize_cyrillic_range() {
        // ё and Ё sit outside а-я / А-Я
        assert_eq!(sanitize_title("ёжик Ёлка"), "жик лка");
        assert_eq!(sanitize_title("Straße café"), "Strae caf");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for raw in ["Buy milk", "Привет мир 42", "a1 b2 c3", "", "   "] {
            let once = sanitize_title(raw);
            assert_eq!(once, raw);
            assert_eq!(sanitize_title(&once), once);
        }
    }

    #[test]
    fn test_title_change_keeps_only_allowed_chars() {
        let mut form = FormState::new();
        form.title_error = true;
        form.on_title_change("#1 todo: écrire, ok?");
        assert!(form.title.chars().all(is_title_char));
        assert_eq!(form.title, "1 todo crire ok");
        assert!(!form.title_error);
    }

    #[test]
    fn test_field_edit_clears_only_its_error() {
        let mut form = FormState::new();
        let (users, mut todos) = seed();
        assert!(form.submit(&users, &mut todos).is_err());
        assert!(form.title_error && form.user_error);

        form.on_user_change(2);
        assert!(form.title_error);
        assert!(!form.user_error);

        form.on_title_change("x");
        assert!(!form.title_error);
    }

    #[test]
    fn test_next_id() {
        let (_, todos) = seed();
        assert_eq!(next_todo_id(&todos), 4);
        assert_eq!(next_todo_id(&[]), 1);

        let user = make_user(1, "Leanne");
        let gaps = vec![make_todo(9, &user), make_todo(2, &user)];
        assert_eq!(next_todo_id(&gaps), 10);
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("3"), 3);
        assert_eq!(parse_user_id("0"), NO_USER_SELECTED);
        assert_eq!(parse_user_id(""), NO_USER_SELECTED);
        assert_eq!(parse_user_id("abc"), NO_USER_SELECTED);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let (users, mut todos) = seed();
        let mut form = FormState::new();
        form.on_title_change("   ");
        form.on_user_change(1);

        let result = form.submit(&users, &mut todos);
        assert_eq!(result, Err(vec![FormError::MissingTitle]));
        assert!(form.title_error);
        assert!(!form.user_error);
        assert_eq!(todos.len(), 3);
        // Draft is kept for the user to fix
        assert_eq!(form.title, "   ");
        assert_eq!(form.user_id, 1);
    }

    #[test]
    fn test_missing_user_is_rejected() {
        let (users, mut todos) = seed();
        let mut form = FormState::new();
        form.on_title_change("Buy milk");

        let result = form.submit(&users, &mut todos);
        assert_eq!(result, Err(vec![FormError::NoUserSelected]));
        assert!(form.user_error);
        assert!(!form.title_error);
        assert_eq!(todos.len(), 3);
        assert_eq!(form.title, "Buy milk");
    }

    #[test]
    fn test_both_errors_reported() {
        let (users, mut todos) = seed();
        let mut form = FormState::new();
        let result = form.submit(&users, &mut todos);
        assert_eq!(result, Err(vec![FormError::MissingTitle, FormError::NoUserSelected]));
        assert!(form.title_error && form.user_error);
    }

    #[test]
    fn test_valid_submit_appends_and_resets() {
        let (users, mut todos) = seed();
        let mut form = FormState::new();
        form.on_title_change("Buy milk");
        form.on_user_change(2);

        let id = form.submit(&users, &mut todos).unwrap();
        assert_eq!(id, 4);
        assert_eq!(todos.len(), 4);

        let added = todos.last().unwrap();
        assert_eq!(added.id, 4);
        assert_eq!(added.title, "Buy milk");
        assert_eq!(added.user_id, 2);
        assert_eq!(added.user.name, "Ervin");
        assert!(!added.completed);

        assert_eq!(form, FormState::new());
        assert_eq!(form.user_id, NO_USER_SELECTED);
    }

    #[test]
    fn test_submit_keeps_title_as_typed() {
        let (users, mut todos) = seed();
        let mut form = FormState::new();
        form.on_title_change(" Buy milk ");
        form.on_user_change(1);
        form.submit(&users, &mut todos).unwrap();
        assert_eq!(todos[3].title, " Buy milk ");
        assert_eq!(form.title, "");
    }

    #[test]
    fn test_validate_leaves_draft_alone() {
        let mut form = FormState::new();
        form.on_title_change("  ");
        assert_eq!(form.validate(), Err(vec![FormError::MissingTitle, FormError::NoUserSelected]));
        assert_eq!(form.title, "  ");
        assert!(form.title_error && form.user_error);

        form.on_title_change("Buy milk");
        form.on_user_change(2);
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(form.title, "Buy milk");
        assert_eq!(form.user_id, 2);
    }

    #[test]
    fn test_submit_into_empty_list() {
        let (users, _) = seed();
        let mut todos = Vec::new();
        let mut form = FormState::new();
        form.on_title_change("First");
        form.on_user_change(1);
        assert_eq!(form.submit(&users, &mut todos), Ok(1));
        assert_eq!(todos[0].id, 1);
    }

    #[test]
    fn test_existing_order_is_kept() {
        let (users, mut todos) = seed();
        let before: Vec<u32> = todos.iter().map(|t| t.id).collect();
        let mut form = FormState::new();
        form.on_title_change("Next");
        form.on_user_change(1);
        form.submit(&users, &mut todos).unwrap();
        let after: Vec<u32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(&after[..3], &before[..]);
    }

    #[test]
    #[should_panic(expected = "not a known user")]
    fn test_unknown_user_panics() {
        let (users, mut todos) = seed();
        let mut form = FormState::new();
        form.on_title_change("Lost");
        form.on_user_change(99);
        let _ = form.submit(&users, &mut todos);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::MissingTitle.to_string(), "Please enter a title");
        assert_eq!(FormError::NoUserSelected.to_string(), "Please choose a user");
    }
}
