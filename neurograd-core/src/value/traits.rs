use crate::ops::arithmetic::add_op;
use crate::value::Value;
use num_traits::Pow;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

// Equality and hashing follow node identity. Two nodes holding the same number
// are still distinct graph vertices.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

/// Folds with `+`. The empty sum is a constant zero leaf.
impl Sum for Value {
    fn sum<I: Iterator<Item = Value>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, v| add_op(&acc, &v)),
            None => Value::new(0.0),
        }
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl Pow<f64> for Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        self.powf(exponent)
    }
}

impl Pow<f64> for &Value {
    type Output = Value;

    fn pow(self, exponent: f64) -> Value {
        self.powf(exponent)
    }
}

impl Pow<i32> for Value {
    type Output = Value;

    fn pow(self, exponent: i32) -> Value {
        self.powf(f64::from(exponent))
    }
}

impl Pow<i32> for &Value {
    type Output = Value;

    fn pow(self, exponent: i32) -> Value {
        self.powf(f64::from(exponent))
    }
}
