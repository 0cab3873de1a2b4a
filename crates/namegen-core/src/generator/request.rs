//! Name request and response records

use serde::{Deserialize, Serialize};

use crate::context::Category;

/// A caller's request for one name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRequest {
    pub id: String,
    /// Category label; anything other than `female` or `male` means other
    #[serde(default)]
    pub gender: String,
}

impl NameRequest {
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            gender: category.as_str().to_string(),
        }
    }

    pub fn category(&self) -> Category {
        Category::from_label(&self.gender)
    }
}

/// A generated name, keyed by the request id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResponse {
    pub id: String,
    pub name: String,
}
