use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Fixed set of recipe categories. The serialized form is the display name,
/// which is also what is stored in `recipes.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Dessert,
    #[serde(rename = "Main Course")]
    MainCourse,
    Appetizer,
    Breakfast,
    Beverage,
    Vegetarian,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Dessert,
        Category::MainCourse,
        Category::Appetizer,
        Category::Breakfast,
        Category::Beverage,
        Category::Vegetarian,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Dessert => "Dessert",
            Category::MainCourse => "Main Course",
            Category::Appetizer => "Appetizer",
            Category::Breakfast => "Breakfast",
            Category::Beverage => "Beverage",
            Category::Vegetarian => "Vegetarian",
        }
    }

    /// Exact, case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
