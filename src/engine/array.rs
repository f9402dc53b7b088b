//! Linear array scan

/// One step of a left-to-right scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStep {
    pub index: usize,
    pub value: String,
    pub reasoning: String,
}

impl ArrayStep {
    /// Step `index` of scanning `values`, or `None` past the end
    pub fn at<S: AsRef<str>>(values: &[S], index: usize) -> Option<Self> {
        let value = values.get(index)?.as_ref().to_string();
        let reasoning = format!(
            "Traversing array: Highlighting element at index {} (value: {})",
            index, value
        );
        Some(ArrayStep {
            index,
            value,
            reasoning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_step_reasoning() {
        let step = ArrayStep::at(&["1", "2", "3"], 1).unwrap();
        assert_eq!(step.value, "2");
        assert_eq!(
            step.reasoning,
            "Traversing array: Highlighting element at index 1 (value: 2)"
        );
    }

    #[test]
    fn test_array_step_out_of_range() {
        assert!(ArrayStep::at(&["1"], 1).is_none());
        assert!(ArrayStep::at::<&str>(&[], 0).is_none());
    }
}
