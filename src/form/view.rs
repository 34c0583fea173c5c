//! Rendered form view tree.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Name of the view variable carrying a [`NormalizationStrategy`].
pub const NORMALIZATION_STRATEGY: &str = "NormalizationStrategy";

/// How the children of a view node are laid out when normalized.
///
/// The strategy only affects the node's immediate children; descendants use
/// their own strategy (or the default object layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizationStrategy {
    /// Normalize the children as an array of values, not an object.
    ChildrenAsArray,
    /// Normalize the children as an array of the names of the children whose
    /// value is `true`.
    ChildrenAsTrueNames,
}

impl NormalizationStrategy {
    /// Parses the strategy from its view variable value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use liform::NormalizationStrategy;
    ///
    /// assert_eq!(
    ///     NormalizationStrategy::parse("ChildrenAsTrueNames"),
    ///     Some(NormalizationStrategy::ChildrenAsTrueNames)
    /// );
    /// assert_eq!(NormalizationStrategy::parse("Other"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ChildrenAsArray" => Some(Self::ChildrenAsArray),
            "ChildrenAsTrueNames" => Some(Self::ChildrenAsTrueNames),
            _ => None,
        }
    }

    /// Returns the view variable value of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChildrenAsArray => "ChildrenAsArray",
            Self::ChildrenAsTrueNames => "ChildrenAsTrueNames",
        }
    }
}

impl Display for NormalizationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `value` variable of a view node.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewValue {
    /// Plain data: a scalar, or nested arrays and objects.
    Data(Value),
    /// An iterable collection object holding the given elements.
    Collection(Vec<Value>),
}

impl ViewValue {
    /// Returns true for a null value or the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            ViewValue::Data(Value::Null) => true,
            ViewValue::Data(Value::String(s)) => s.is_empty(),
            _ => false,
        }
    }
}

impl Default for ViewValue {
    fn default() -> Self {
        ViewValue::Data(Value::Null)
    }
}

impl From<Value> for ViewValue {
    fn from(value: Value) -> Self {
        ViewValue::Data(value)
    }
}

/// Variables recognised on a view node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewVars {
    /// The node's current value.
    pub value: ViewValue,
    /// Checked state, present on checkbox-like nodes.
    pub checked: Option<bool>,
    /// Layout of the node's children.
    pub normalization_strategy: Option<NormalizationStrategy>,
}

impl ViewVars {
    /// Reads the recognised variables out of a framework's variable bag.
    ///
    /// `value` is taken as plain data (null when absent), `checked` only when
    /// it is a boolean, and [`NORMALIZATION_STRATEGY`] only when it names a
    /// known strategy. Other variables are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use liform::{NormalizationStrategy, ViewValue, ViewVars};
    /// use serde_json::json;
    ///
    /// let bag = json!({
    ///     "value": "",
    ///     "label": "Roles",
    ///     "NormalizationStrategy": "ChildrenAsTrueNames"
    /// });
    /// let vars = ViewVars::from_map(bag.as_object().unwrap());
    ///
    /// assert_eq!(vars.value, ViewValue::Data(json!("")));
    /// assert_eq!(vars.checked, None);
    /// assert_eq!(
    ///     vars.normalization_strategy,
    ///     Some(NormalizationStrategy::ChildrenAsTrueNames)
    /// );
    /// ```
    pub fn from_map(vars: &Map<String, Value>) -> Self {
        Self {
            value: vars.get("value").cloned().map(ViewValue::Data).unwrap_or_default(),
            checked: vars.get("checked").and_then(Value::as_bool),
            normalization_strategy: vars
                .get(NORMALIZATION_STRATEGY)
                .and_then(Value::as_str)
                .and_then(NormalizationStrategy::parse),
        }
    }
}

impl From<&Map<String, Value>> for ViewVars {
    fn from(vars: &Map<String, Value>) -> Self {
        Self::from_map(vars)
    }
}

/// A node of the rendered form view tree.
///
/// # Example
///
/// ```rust
/// use liform::{FormView, NormalizationStrategy};
/// use serde_json::json;
///
/// let view = FormView::new()
///     .child("name", FormView::leaf(json!("Alice")))
///     .child(
///         "tags",
///         FormView::new()
///             .strategy(NormalizationStrategy::ChildrenAsArray)
///             .child("0", FormView::leaf(json!("rust"))),
///     );
///
/// assert_eq!(view.children().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormView {
    children: IndexMap<String, FormView>,
    vars: ViewVars,
}

impl FormView {
    /// Creates a node with no children and a null value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node holding the given value.
    pub fn leaf(value: impl Into<ViewValue>) -> Self {
        Self::new().value(value)
    }

    /// Creates a checkbox-like leaf node.
    pub fn checkbox(checked: bool) -> Self {
        Self::new().checked(checked)
    }

    /// Creates a leaf node holding an iterable collection.
    pub fn collection(items: Vec<Value>) -> Self {
        Self::new().value(ViewValue::Collection(items))
    }

    /// Sets the node's value.
    pub fn value(mut self, value: impl Into<ViewValue>) -> Self {
        self.vars.value = value.into();
        self
    }

    /// Sets the node's checked state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.vars.checked = Some(checked);
        self
    }

    /// Sets the layout of the node's children.
    pub fn strategy(mut self, strategy: NormalizationStrategy) -> Self {
        self.vars.normalization_strategy = Some(strategy);
        self
    }

    /// Replaces all of the node's variables.
    pub fn vars_from(mut self, vars: impl Into<ViewVars>) -> Self {
        self.vars = vars.into();
        self
    }

    /// Adds a child node, replacing any child with the same name.
    pub fn child(mut self, name: impl Into<String>, child: FormView) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// Returns the node's variables.
    pub fn vars(&self) -> &ViewVars {
        &self.vars
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &FormView)> {
        self.children.iter().map(|(name, child)| (name.as_str(), child))
    }

    /// Returns true if the node has children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
