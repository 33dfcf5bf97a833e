//! Pizza domain entity

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    /// Free-form ingredient list, e.g. "Dough, Tomato Sauce, Cheese"
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

impl NewPizza {
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
        }
    }
}
