//! Expense domain model
//!
//! Owns the in-memory expense collection and the command surface the GUI
//! drives: add, update, delete. The collection is session-scoped; it resets
//! on restart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies offered by the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Aed,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Aed, Currency::Eur];

    /// ISO-style code shown next to amounts
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Aed => "AED",
            Currency::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Spending categories, each with a display icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Travel,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Travel,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Travel => "Travel",
            Category::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Transport => "🚗",
            Category::Shopping => "🛒",
            Category::Entertainment => "🎬",
            Category::Bills => "📄",
            Category::Health => "🏥",
            Category::Travel => "✈",
            Category::Other => "📦",
        }
    }

    /// Resolve a category by display name, falling back to `Other` for
    /// anything unrecognized
    pub fn from_name(name: &str) -> Category {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a form submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("amount must be a positive number")]
    InvalidAmount,
}

/// The editable fields of an expense, already validated
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFields {
    pub description: String,
    pub amount: f64,
    pub currency: Currency,
    pub category: Category,
}

impl ExpenseFields {
    /// Validate raw form input. Description is checked before amount so the
    /// caller can refocus the first offending field.
    pub fn parse(
        description: &str,
        amount: &str,
        currency: Currency,
        category: Category,
    ) -> Result<ExpenseFields, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }

        Ok(ExpenseFields {
            description: description.to_string(),
            amount,
            currency,
            category,
        })
    }
}

/// A single expense record
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub description: String,
    pub amount: f64,
    pub currency: Currency,
    pub category: Category,
}

/// Ordered collection of expenses.
///
/// Ids are unique for the book's lifetime and never reused after deletion.
/// New records are prepended (most recent first); edits keep the record in
/// place.
#[derive(Debug, Clone)]
pub struct ExpenseBook {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl Default for ExpenseBook {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }
}

impl ExpenseBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo data the list starts with
    pub fn with_sample_data() -> Self {
        let expenses = vec![
            Expense {
                id: 1,
                description: "Coffee & Breakfast".to_string(),
                amount: 12.50,
                currency: Currency::Usd,
                category: Category::Food,
            },
            Expense {
                id: 2,
                description: "Uber to Office".to_string(),
                amount: 25.00,
                currency: Currency::Aed,
                category: Category::Transport,
            },
            Expense {
                id: 3,
                description: "Netflix Subscription".to_string(),
                amount: 15.99,
                currency: Currency::Usd,
                category: Category::Entertainment,
            },
            Expense {
                id: 4,
                description: "Grocery Shopping".to_string(),
                amount: 85.75,
                currency: Currency::Eur,
                category: Category::Shopping,
            },
        ];
        Self {
            expenses,
            next_id: 5,
        }
    }

    /// Insert a new expense at the front and return it
    pub fn add(&mut self, fields: ExpenseFields) -> &Expense {
        let id = self.next_id;
        self.next_id += 1;
        self.expenses.insert(
            0,
            Expense {
                id,
                description: fields.description,
                amount: fields.amount,
                currency: fields.currency,
                category: fields.category,
            },
        );
        &self.expenses[0]
    }

    /// Overwrite the editable fields of an existing expense in place.
    /// Returns false when the id is no longer present.
    pub fn update(&mut self, id: u64, fields: ExpenseFields) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == id) {
            Some(expense) => {
                expense.description = fields.description;
                expense.amount = fields.amount;
                expense.currency = fields.currency;
                expense.category = fields.category;
                true
            }
            None => false,
        }
    }

    /// Remove the expense with the given id. Removing an absent id leaves the
    /// collection unchanged and returns false.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() < before
    }

    pub fn get(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of amounts per currency, in `Currency::ALL` order, skipping
    /// currencies with no entries
    pub fn totals_by_currency(&self) -> Vec<(Currency, f64)> {
        Currency::ALL
            .iter()
            .filter_map(|&currency| {
                let total: f64 = self
                    .expenses
                    .iter()
                    .filter(|e| e.currency == currency)
                    .map(|e| e.amount)
                    .sum();
                (total > 0.0).then_some((currency, total))
            })
            .collect()
    }
}
