//! Shared rendering for model debug strings
//!
//! Every model renders as `{Name: value, Other: value}`: fields appear in
//! declared order, absent fields are omitted entirely (never rendered as
//! empty), and the whole thing is enclosed in braces. Lists render as
//! `[a, b]` and maps as `{k=v}` in key order.

use std::collections::BTreeMap;
use std::fmt;

/// Writes `Name: value` pairs for the fields of one model, comma-joined
/// inside braces. Created per `Display::fmt` call.
pub(crate) struct FieldWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, first: true })
    }

    fn separate(&mut self) -> fmt::Result {
        if self.first {
            self.first = false;
        } else {
            self.f.write_str(", ")?;
        }
        Ok(())
    }

    /// Renders a scalar, timestamp or nested-model field when present.
    pub(crate) fn field<T: fmt::Display>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        if let Some(value) = value {
            self.separate()?;
            write!(self.f, "{}: {}", name, value)?;
        }
        Ok(())
    }

    /// Renders a list field as `Name: [a, b]` when present.
    pub(crate) fn list<T: fmt::Display>(&mut self, name: &str, value: &Option<Vec<T>>) -> fmt::Result {
        if let Some(items) = value {
            self.separate()?;
            write!(self.f, "{}: [", name)?;
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    self.f.write_str(", ")?;
                }
                write!(self.f, "{}", item)?;
            }
            self.f.write_str("]")?;
        }
        Ok(())
    }

    /// Renders a string map field as `Name: {k=v, k2=v2}` when present,
    /// entries in key order.
    pub(crate) fn map(
        &mut self,
        name: &str,
        value: &Option<BTreeMap<String, String>>,
    ) -> fmt::Result {
        if let Some(entries) = value {
            self.separate()?;
            write!(self.f, "{}: {{", name)?;
            for (index, (key, value)) in entries.iter().enumerate() {
                if index > 0 {
                    self.f.write_str(", ")?;
                }
                write!(self.f, "{}={}", key, value)?;
            }
            self.f.write_str("}")?;
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        size: Option<i32>,
        labels: Option<Vec<String>>,
        attributes: Option<BTreeMap<String, String>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut w = FieldWriter::new(f)?;
            w.field("Name", &self.name)?;
            w.field("Size", &self.size)?;
            w.list("Labels", &self.labels)?;
            w.map("Attributes", &self.attributes)?;
            w.finish()
        }
    }

    #[test]
    fn absent_fields_are_omitted() {
        let sample = Sample {
            name: Some("job".to_string()),
            size: None,
            labels: None,
            attributes: None,
        };
        assert_eq!(sample.to_string(), "{Name: job}");
    }

    #[test]
    fn fields_render_in_declared_order() {
        let mut attributes = BTreeMap::new();
        attributes.insert("b".to_string(), "2".to_string());
        attributes.insert("a".to_string(), "1".to_string());
        let sample = Sample {
            name: Some("job".to_string()),
            size: Some(5),
            labels: Some(vec!["x".to_string(), "y".to_string()]),
            attributes: Some(attributes),
        };
        assert_eq!(
            sample.to_string(),
            "{Name: job, Size: 5, Labels: [x, y], Attributes: {a=1, b=2}}"
        );
    }

    #[test]
    fn all_absent_renders_empty_braces() {
        let sample = Sample {
            name: None,
            size: None,
            labels: None,
            attributes: None,
        };
        assert_eq!(sample.to_string(), "{}");
    }
}
