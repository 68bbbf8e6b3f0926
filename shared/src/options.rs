use serde::{Deserialize, Serialize};

use crate::limits::{
    RegistryLimits, CAPACITY_ERROR, DUPLICATE_LABEL_ERROR, EMPTY_LABEL_ERROR, INDEX_ERROR,
};

/// Validation failures for registry mutations. None of these are fatal; they
/// map straight to a message shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    EmptyLabel,
    DuplicateLabel,
    CapacityExceeded,
    IndexOutOfRange,
}

impl RegistryError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyLabel => EMPTY_LABEL_ERROR,
            Self::DuplicateLabel => DUPLICATE_LABEL_ERROR,
            Self::CapacityExceeded => CAPACITY_ERROR,
            Self::IndexOutOfRange => INDEX_ERROR,
        }
    }
}

/// Tally of one batch add. `added == requested` means full success; anything
/// rejected or dropped makes it a partial outcome that the UI reports
/// distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    pub requested: usize,
    pub added: usize,
    pub rejected: usize,
    pub dropped_for_capacity: usize,
}

impl BatchOutcome {
    pub fn is_full_success(&self) -> bool {
        self.added > 0 && self.added == self.requested
    }

    pub fn is_partial(&self) -> bool {
        self.added > 0 && self.added < self.requested
    }

    pub fn message(&self) -> String {
        if self.requested == 0 {
            return EMPTY_LABEL_ERROR.to_string();
        }
        if self.is_full_success() {
            return format!("Added {} of {} names", self.added, self.requested);
        }
        if self.added == 0 {
            if self.dropped_for_capacity > 0 {
                return CAPACITY_ERROR.to_string();
            }
            return format!("None of the {} names could be added", self.requested);
        }
        format!(
            "Added {} of {} names ({} skipped)",
            self.added,
            self.requested,
            self.requested - self.added
        )
    }
}

/// Trims whitespace, strips commas (the batch delimiter) and caps the label
/// length. Idempotent: sanitizing an already sanitized label is a no-op.
pub fn sanitize_label(raw: &str, max_length: usize) -> String {
    let no_commas: String = raw.chars().filter(|c| *c != ',').collect();
    let capped: String = no_commas.trim().chars().take(max_length).collect();
    capped.trim_end().to_string()
}

/// Ordered, bounded, de-duplicated list of wheel sector labels. Index order
/// determines sector position and color on the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRegistry {
    labels: Vec<String>,
    limits: RegistryLimits,
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new(RegistryLimits::default())
    }
}

impl OptionRegistry {
    pub fn new(limits: RegistryLimits) -> Self {
        Self {
            labels: Vec::new(),
            limits,
        }
    }

    /// Hydrates a registry from an externally stored comma-joined value,
    /// sanitizing each piece and dropping anything that fails validation.
    pub fn from_query_value(value: &str, limits: RegistryLimits) -> Self {
        let mut registry = Self::new(limits);
        for piece in value.split(',') {
            // Silently skip invalid pieces; stale or hand-edited URLs are
            // not a user action worth reporting on.
            let _ = registry.add_single(piece);
        }
        registry
    }

    /// Comma-joined label list for the URL persistence collaborator. Labels
    /// never contain commas, so the join is unambiguous.
    pub fn to_query_value(&self) -> String {
        self.labels.join(",")
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn limits(&self) -> RegistryLimits {
        self.limits
    }

    pub fn can_add(&self) -> bool {
        self.labels.len() < self.limits.max_options
    }

    fn validate(&self, label: &str) -> Result<(), RegistryError> {
        if label.is_empty() {
            return Err(RegistryError::EmptyLabel);
        }
        if self.labels.iter().any(|existing| existing == label) {
            return Err(RegistryError::DuplicateLabel);
        }
        Ok(())
    }

    /// Sanitizes, validates and appends one label. Returns the stored label
    /// on success; the registry is untouched on failure.
    pub fn add_single(&mut self, raw: &str) -> Result<String, RegistryError> {
        let label = sanitize_label(raw, self.limits.max_option_length);
        self.validate(&label)?;
        if !self.can_add() {
            return Err(RegistryError::CapacityExceeded);
        }
        log::debug!("registry: added '{}' ({} total)", label, self.labels.len() + 1);
        self.labels.push(label.clone());
        Ok(label)
    }

    /// Splits on commas and adds each piece in order. A piece is rejected if
    /// it sanitizes to empty or duplicates either an existing label or a
    /// piece accepted earlier in the same batch, so `"Bob, Bob"` adds one
    /// "Bob". Once capacity runs out the remaining valid pieces are dropped
    /// and counted separately.
    pub fn add_batch(&mut self, raw: &str) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for piece in raw.split(',') {
            let label = sanitize_label(piece, self.limits.max_option_length);
            if label.is_empty() {
                // Empty fragments ("a,,b", trailing commas) are not counted
                // as requests at all.
                continue;
            }
            outcome.requested += 1;
            if self.labels.iter().any(|existing| *existing == label) {
                outcome.rejected += 1;
                continue;
            }
            if !self.can_add() {
                outcome.dropped_for_capacity += 1;
                continue;
            }
            self.labels.push(label);
            outcome.added += 1;
        }
        log::debug!(
            "registry: batch add {}/{} ({} rejected, {} over capacity)",
            outcome.added,
            outcome.requested,
            outcome.rejected,
            outcome.dropped_for_capacity
        );
        outcome
    }

    /// Removes the label at `index`, preserving the relative order of the
    /// rest. The UI never passes a stale index, so the error path is
    /// defensive only.
    pub fn delete_at(&mut self, index: usize) -> Result<String, RegistryError> {
        if index >= self.labels.len() {
            log::warn!("registry: delete_at({}) with {} labels", index, self.labels.len());
            return Err(RegistryError::IndexOutOfRange);
        }
        Ok(self.labels.remove(index))
    }

    pub fn reset(&mut self) {
        log::debug!("registry: reset ({} labels cleared)", self.labels.len());
        self.labels.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(max_options: usize) -> OptionRegistry {
        OptionRegistry::new(RegistryLimits {
            max_options,
            max_option_length: 50,
        })
    }

    #[test]
    fn test_sanitize_strips_commas_and_whitespace() {
        assert_eq!(sanitize_label("  Alice  ", 50), "Alice");
        assert_eq!(sanitize_label(",A,l,ice,", 50), "Alice");
        assert_eq!(sanitize_label(" , ", 50), "");
    }

    #[test]
    fn test_sanitize_caps_length() {
        let raw = "a".repeat(80);
        assert_eq!(sanitize_label(&raw, 50).len(), 50);
    }

    #[test]
    fn test_sanitize_idempotent() {
        // Includes a case where the cap lands on a space.
        for raw in ["  Alice  ", "a,b", "ab cd", "", "ab ", "ab c"] {
            let once = sanitize_label(raw, 3);
            assert_eq!(sanitize_label(&once, 3), once);
        }
    }

    #[test]
    fn test_add_single_appends() {
        let mut registry = OptionRegistry::default();
        assert_eq!(registry.add_single("Alice"), Ok("Alice".to_string()));
        assert_eq!(registry.labels(), ["Alice".to_string()]);
    }

    #[test]
    fn test_add_single_rejects_duplicate() {
        let mut registry = OptionRegistry::default();
        registry.add_single("Alice").unwrap();
        assert_eq!(registry.add_single("Alice"), Err(RegistryError::DuplicateLabel));
        assert_eq!(registry.labels(), ["Alice".to_string()]);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut registry = OptionRegistry::default();
        registry.add_single("Alice").unwrap();
        assert!(registry.add_single("alice").is_ok());
    }

    #[test]
    fn test_add_single_rejects_empty() {
        let mut registry = OptionRegistry::default();
        assert_eq!(registry.add_single("   "), Err(RegistryError::EmptyLabel));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_single_at_capacity() {
        let mut registry = small(2);
        registry.add_single("a").unwrap();
        registry.add_single("b").unwrap();
        assert_eq!(registry.add_single("c"), Err(RegistryError::CapacityExceeded));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_batch_skips_within_batch_duplicate() {
        let mut registry = OptionRegistry::default();
        registry.add_single("Alice").unwrap();
        let outcome = registry.add_batch("Bob, Carol, Bob");
        assert_eq!(outcome.requested, 3);
        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.rejected, 1);
        assert_eq!(
            registry.labels(),
            ["Alice".to_string(), "Bob".to_string(), "Carol".to_string()]
        );
    }

    #[test]
    fn test_add_batch_truncates_at_capacity() {
        let mut registry = small(3);
        registry.add_single("a").unwrap();
        let outcome = registry.add_batch("b, c, d, e");
        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.dropped_for_capacity, 2);
        assert!(outcome.is_partial());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_add_batch_ignores_empty_fragments() {
        let mut registry = OptionRegistry::default();
        let outcome = registry.add_batch("a,, ,b,");
        assert_eq!(outcome.requested, 2);
        assert_eq!(outcome.added, 2);
        assert!(outcome.is_full_success());
    }

    #[test]
    fn test_delete_at_preserves_order() {
        let mut registry = OptionRegistry::default();
        registry.add_batch("a,b,c");
        assert_eq!(registry.delete_at(1), Ok("b".to_string()));
        assert_eq!(registry.labels(), ["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_delete_at_out_of_range() {
        let mut registry = OptionRegistry::default();
        registry.add_single("a").unwrap();
        assert_eq!(registry.delete_at(5), Err(RegistryError::IndexOutOfRange));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_reset_clears() {
        let mut registry = OptionRegistry::default();
        registry.add_batch("a,b,c");
        registry.reset();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_query_value_round_trip() {
        let mut registry = OptionRegistry::default();
        registry.add_batch("Alice, Bob, Carol");
        let value = registry.to_query_value();
        assert_eq!(value, "Alice,Bob,Carol");
        let hydrated = OptionRegistry::from_query_value(&value, registry.limits());
        assert_eq!(hydrated.labels(), registry.labels());
    }

    #[test]
    fn test_hydration_drops_invalid_pieces() {
        let hydrated =
            OptionRegistry::from_query_value("Alice,,Alice, Bob ", RegistryLimits::default());
        assert_eq!(hydrated.labels(), ["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn test_hydration_respects_capacity() {
        let value = (0..30).map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        let hydrated = OptionRegistry::from_query_value(&value, RegistryLimits::default());
        assert_eq!(hydrated.len(), crate::limits::MAX_OPTIONS);
    }
}
