//! Literal values carried by constant nodes
//!
//!     A [Value] is what a constant expression holds: null, a scalar, text, an opaque object
//!     known only by its default textual form, or an array.
//!
//! Arrays
//!
//!     [ArrayValue] stores any rank. Elements are kept in row-major order (last index varies
//!     fastest) together with the length and lower bound of every dimension. A plain vector is
//!     rank 1 with lower bound 0; multi-dimensional arrays and arrays with non-zero lower bounds
//!     are built with [ArrayValue::new] and [ArrayValue::with_lower_bounds], which validate the
//!     shape. Jagged arrays are simply arrays whose elements are array values (or null).

use super::error::ShapeError;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Array(ArrayValue),
    /// An object known only by its default textual form
    Object(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn object(text: impl Into<String>) -> Self {
        Value::Object(text.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<ArrayValue> for Value {
    fn from(value: ArrayValue) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// An array of any rank, elements stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue {
    lengths: Vec<usize>,
    lower_bounds: Vec<i64>,
    elements: Vec<Value>,
}

impl ArrayValue {
    /// A zero-based rank-1 array
    pub fn vector<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let elements: Vec<Value> = elements.into_iter().map(Into::into).collect();
        Self {
            lengths: vec![elements.len()],
            lower_bounds: vec![0],
            elements,
        }
    }

    /// A zero-based array of the given dimension lengths, elements in row-major order
    pub fn new<I, V>(lengths: Vec<usize>, elements: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if lengths.is_empty() {
            return Err(ShapeError::ZeroRank);
        }
        let elements: Vec<Value> = elements.into_iter().map(Into::into).collect();
        let expected: usize = lengths.iter().product();
        if expected != elements.len() {
            return Err(ShapeError::ElementCount {
                expected,
                actual: elements.len(),
            });
        }
        Ok(Self {
            lower_bounds: vec![0; lengths.len()],
            lengths,
            elements,
        })
    }

    /// Replace the lower bound of every dimension
    ///
    /// Each bound plus its dimension's length must stay within `i64`.
    pub fn with_lower_bounds(mut self, lower_bounds: Vec<i64>) -> Result<Self, ShapeError> {
        if lower_bounds.len() != self.rank() {
            return Err(ShapeError::BoundsRank {
                rank: self.rank(),
                bounds: lower_bounds.len(),
            });
        }
        for (dimension, (bound, length)) in lower_bounds.iter().zip(&self.lengths).enumerate() {
            let end = i64::try_from(*length)
                .ok()
                .and_then(|length| bound.checked_add(length));
            if end.is_none() {
                return Err(ShapeError::BoundsOverflow { dimension });
            }
        }
        self.lower_bounds = lower_bounds;
        Ok(self)
    }

    pub fn rank(&self) -> usize {
        self.lengths.len()
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn lower_bounds(&self) -> &[i64] {
        &self.lower_bounds
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True when every dimension starts at index 0
    pub fn is_zero_based(&self) -> bool {
        self.lower_bounds.iter().all(|bound| *bound == 0)
    }

    /// Full index space in row-major order
    pub fn indices(&self) -> RowMajorIndices<'_> {
        RowMajorIndices {
            lengths: &self.lengths,
            lower_bounds: &self.lower_bounds,
            current: self.lower_bounds.clone(),
            remaining: self.elements.len(),
        }
    }

    /// Elements paired with their index vector
    pub fn indexed(&self) -> impl Iterator<Item = (Vec<i64>, &Value)> {
        self.indices().zip(self.elements.iter())
    }
}

/// Row-major enumeration of an array's index space (last index fastest)
#[derive(Debug, Clone)]
pub struct RowMajorIndices<'a> {
    lengths: &'a [usize],
    lower_bounds: &'a [i64],
    current: Vec<i64>,
    remaining: usize,
}

impl Iterator for RowMajorIndices<'_> {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.current.clone();
        self.remaining -= 1;

        for dim in (0..self.current.len()).rev() {
            self.current[dim] += 1;
            if self.current[dim] < self.lower_bounds[dim] + self.lengths[dim] as i64 {
                break;
            }
            self.current[dim] = self.lower_bounds[dim];
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
