use serde::Serialize;

use crate::mvi::ModelState;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Address {
    pub street: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormState {
    pub user_name: Option<String>,
    pub email: String,
    pub bio: String,
    /// Raw text of the age input.
    pub age: String,
    pub is_married: bool,
    pub address: Address,
    pub plugins: Vec<String>,
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self {
            user_name: None,
            email: String::new(),
            bio: String::new(),
            age: "0".to_string(),
            is_married: false,
            address: Address::default(),
            plugins: Vec::new(),
        }
    }
}

impl ModelState for ProfileFormState {}

impl ProfileFormState {
    /// Label shown above the age input.
    pub fn greeting(&self) -> String {
        format!(
            "{}, please enter your age:",
            self.user_name.as_deref().unwrap_or("User")
        )
    }
}
