use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Spending categories a mapping file may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Business,
    Charity,
    Haircut,
    Clothing,
    Entertainment,
    Groceries,
    Hobby,
    Homewares,
    Hosting,
    Internet,
    Medical,
    Outing,
    Phone,
    Political,
    Savings,
    Takeaway,
    Transport,
    Utilities,
}

impl Category {
    pub const ALL: [Category; 18] = [
        Category::Business,
        Category::Charity,
        Category::Haircut,
        Category::Clothing,
        Category::Entertainment,
        Category::Groceries,
        Category::Hobby,
        Category::Homewares,
        Category::Hosting,
        Category::Internet,
        Category::Medical,
        Category::Outing,
        Category::Phone,
        Category::Political,
        Category::Savings,
        Category::Takeaway,
        Category::Transport,
        Category::Utilities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Charity => "charity",
            Category::Haircut => "haircut",
            Category::Clothing => "clothing",
            Category::Entertainment => "entertainment",
            Category::Groceries => "groceries",
            Category::Hobby => "hobby",
            Category::Homewares => "homewares",
            Category::Hosting => "hosting",
            Category::Internet => "internet",
            Category::Medical => "medical",
            Category::Outing => "outing",
            Category::Phone => "phone",
            Category::Political => "political",
            Category::Savings => "savings",
            Category::Takeaway => "takeaway",
            Category::Transport => "transport",
            Category::Utilities => "utilities",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown category {0:?}")]
pub struct UnknownCategory(pub String);

// Labels are matched exactly; "Groceries" is not a category.
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
