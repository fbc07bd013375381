//! Display implementations for Value and Output

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Variable { name, value } => write!(f, "{} = {}", name, value),
        }
    }
}

/// Renders with the precision given by the formatter, e.g. `{:.5}`.
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_assignment {
            write!(f, "{} = ", self.name)?;
        }
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_precision() {
        assert_eq!(format!("{:.5}", Output::anonymous(14.0)), "14.00000");
        assert_eq!(
            format!("{:.2}", Output::assignment("x", 0.5)),
            "x = 0.50"
        );
    }

    #[test]
    fn test_output_default_precision() {
        assert_eq!(Output::anonymous(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_value_display() {
        let v = Value::Variable {
            name: "a".to_string(),
            value: 5.0,
        };
        assert_eq!(v.to_string(), "a = 5");
    }
}
