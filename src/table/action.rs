// src/table/action.rs - Per-row action buttons

use std::fmt;
use std::rc::Rc;

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Primary,
    #[default]
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "border-transparent text-white bg-blue-600 hover:bg-blue-700 focus:ring-blue-500",
            Self::Secondary => "border-gray-300 text-gray-700 bg-white hover:bg-gray-50 focus:ring-blue-500 dark:bg-gray-800 dark:text-gray-200 dark:border-gray-600",
            Self::Danger => "border-transparent text-white bg-red-600 hover:bg-red-700 focus:ring-red-500",
            Self::Ghost => "border-transparent text-gray-700 hover:bg-gray-100 focus:ring-blue-500 dark:text-gray-200 dark:hover:bg-gray-700",
        }
    }
}

/// A button rendered in every row's action cell
pub struct RowAction<T> {
    pub label: String,
    pub icon: Option<String>,
    pub variant: ButtonVariant,
    handler: Rc<dyn Fn(&T)>,
    disabled: Option<Rc<dyn Fn(&T) -> bool>>,
}

impl<T> RowAction<T> {
    pub fn new(label: impl Into<String>, handler: impl Fn(&T) + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            variant: ButtonVariant::default(),
            handler: Rc::new(handler),
            disabled: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled_when(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.disabled = Some(Rc::new(predicate));
        self
    }

    pub fn is_disabled(&self, row: &T) -> bool {
        self.disabled.as_ref().is_some_and(|p| p(row))
    }

    /// Runs the handler unless the action is disabled for `row`
    pub fn invoke(&self, row: &T) {
        if !self.is_disabled(row) {
            (self.handler)(row);
        }
    }
}

impl<T> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            variant: self.variant,
            handler: self.handler.clone(),
            disabled: self.disabled.clone(),
        }
    }
}

impl<T> PartialEq for RowAction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.icon == other.icon
            && self.variant == other.variant
            && Rc::ptr_eq(&self.handler, &other.handler)
            && match (&self.disabled, &other.disabled) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<T> fmt::Debug for RowAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::tests::{row, Row};
    use std::cell::RefCell;

    #[test]
    fn handler_receives_the_row_unless_disabled() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let action = RowAction::new("Cancel", move |r: &Row| sink.borrow_mut().push(r.id.clone()))
            .variant(ButtonVariant::Danger)
            .disabled_when(|r: &Row| r.amount > 100.0);

        let cheap = row("1", "a", 10.0);
        let pricey = row("2", "b", 500.0);

        assert!(!action.is_disabled(&cheap));
        assert!(action.is_disabled(&pricey));

        action.invoke(&cheap);
        action.invoke(&pricey);
        assert_eq!(*seen.borrow(), vec!["1".to_string()]);
    }

    #[test]
    fn clones_compare_equal() {
        let action = RowAction::new("View", |_: &Row| {}).icon("👁");
        assert_eq!(action.clone(), action);
        assert_ne!(RowAction::new("View", |_: &Row| {}), action);
    }
}
