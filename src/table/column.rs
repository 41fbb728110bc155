// src/table/column.rs - Column definitions, cell values and row accessors

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use dioxus::prelude::Element;

/// A single cell's value as the table sees it
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    DateTime(DateTime<Utc>),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Total order used for sorting. Empty cells sort first, numbers compare
    /// numerically across the integer/float split, text compares
    /// case-insensitively, anything else falls back to its display form.
    pub fn compare(&self, other: &Self) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,
            (Text(a), Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => a.to_string().cmp(&b.to_string()),
            },
        }
    }

    /// Identity form of the value: full precision, no display formatting
    pub fn key_string(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(v) => v.clone(),
            Self::Integer(v) => v.to_string(),
            Self::Number(v) => v.to_string(),
            Self::Bool(v) => v.to_string(),
            Self::DateTime(v) => v.to_rfc3339(),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(v) => f.write_str(v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Number(v) => write!(f, "{:.2}", v),
            Self::Bool(v) => f.write_str(if *v { "Yes" } else { "No" }),
            Self::DateTime(v) => f.write_str(&crate::utils::format::format_datetime(v)),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}

/// Records the data table can display. Field names are the wire names
/// (`orderId`, `totalAmount`); unknown names yield [`CellValue::Empty`].
pub trait TableRecord: Clone + PartialEq + 'static {
    fn field(&self, name: &str) -> CellValue;
}

/// How a column (or a row key) reads its value from a record
pub enum Accessor<T> {
    Field(&'static str),
    Derived(Rc<dyn Fn(&T) -> CellValue>),
}

impl<T: TableRecord> Accessor<T> {
    pub fn derived(f: impl Fn(&T) -> CellValue + 'static) -> Self {
        Self::Derived(Rc::new(f))
    }

    pub fn value(&self, row: &T) -> CellValue {
        match self {
            Self::Field(name) => row.field(name),
            Self::Derived(f) => f(row),
        }
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(name) => Self::Field(name),
            Self::Derived(f) => Self::Derived(f.clone()),
        }
    }
}

impl<T> PartialEq for Accessor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Field(a), Self::Field(b)) => a == b,
            (Self::Derived(a), Self::Derived(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "Field({})", name),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Row identity used for selection; defaults to the `id` field
pub type RowKey<T> = Accessor<T>;

impl<T: TableRecord> Default for Accessor<T> {
    fn default() -> Self {
        Self::Field("id")
    }
}

/// Key string for a row. Records are expected to expose a non-empty
/// identifier; rows with an empty key all share one selection slot.
pub fn row_key_of<T: TableRecord>(key: &RowKey<T>, row: &T) -> String {
    key.value(row).key_string()
}

pub type CellRenderer<T> = Rc<dyn Fn(&T) -> Element>;

/// A table column
pub struct Column<T> {
    pub key: String,
    pub title: String,
    pub accessor: Accessor<T>,
    pub sortable: bool,
    pub width: Option<String>,
    pub class: Option<String>,
    pub render: Option<CellRenderer<T>>,
}

impl<T: TableRecord> Column<T> {
    /// Column reading the record field of the same name
    pub fn field(key: &'static str, title: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            title: title.into(),
            accessor: Accessor::Field(key),
            sortable: false,
            width: None,
            class: None,
            render: None,
        }
    }

    /// Column computed from the whole record
    pub fn derived(
        key: impl Into<String>,
        title: impl Into<String>,
        f: impl Fn(&T) -> CellValue + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            accessor: Accessor::derived(f),
            sortable: false,
            width: None,
            class: None,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Custom cell rendering; sorting still uses the accessor value
    pub fn render(mut self, f: impl Fn(&T) -> Element + 'static) -> Self {
        self.render = Some(Rc::new(f));
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        self.accessor.value(row)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            accessor: self.accessor.clone(),
            sortable: self.sortable,
            width: self.width.clone(),
            class: self.class.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.title == other.title
            && self.accessor == other.accessor
            && self.sortable == other.sortable
            && self.width == other.width
            && self.class == other.class
            && match (&self.render, &other.render) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub id: String,
        pub name: String,
        pub amount: f64,
    }

    impl TableRecord for Row {
        fn field(&self, name: &str) -> CellValue {
            match name {
                "id" => CellValue::text(&self.id),
                "name" => CellValue::text(&self.name),
                "amount" => self.amount.into(),
                _ => CellValue::Empty,
            }
        }
    }

    pub fn row(id: &str, name: &str, amount: f64) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            amount,
        }
    }

    #[test]
    fn field_and_derived_accessors() {
        let r = row("1", "Widget", 12.5);
        let by_field: Accessor<Row> = Accessor::Field("name");
        let derived: Accessor<Row> = Accessor::derived(|r: &Row| (r.amount * 2.0).into());

        assert_eq!(by_field.value(&r), CellValue::text("Widget"));
        assert_eq!(derived.value(&r), CellValue::Number(25.0));
        assert_eq!(Accessor::<Row>::Field("missing").value(&r), CellValue::Empty);
        assert_eq!(row_key_of(&RowKey::default(), &r), "1");
    }

    #[test]
    fn numeric_keys_keep_full_precision() {
        let by_amount: RowKey<Row> = Accessor::Field("amount");
        let a = row_key_of(&by_amount, &row("a", "x", 1.001));
        let b = row_key_of(&by_amount, &row("b", "y", 1.002));

        assert_ne!(a, b);
        assert_eq!(a, "1.001");
        assert_eq!(CellValue::Number(1.001).to_string(), "1.00");
    }

    #[test]
    fn cell_ordering() {
        assert_eq!(
            CellValue::text("apple").compare(&CellValue::text("Banana")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Integer(3).compare(&CellValue::Number(2.5)),
            Ordering::Greater
        );
        assert_eq!(CellValue::Empty.compare(&CellValue::Integer(0)), Ordering::Less);
    }

    #[test]
    fn column_builder() {
        let col = Column::<Row>::field("amount", "Amount").sortable().width("120px");
        assert!(col.sortable);
        assert_eq!(col.width.as_deref(), Some("120px"));
        assert_eq!(col.value(&row("1", "x", 3.0)), CellValue::Number(3.0));
        assert_eq!(col.clone(), col);
    }
}
