//! Diagnostic rendering of record field mappings
//!
//! Any record can expose its fields as an ordered name/value mapping and get
//! a uniform "TypeName: {field: value, ...}" rendering for free. This is a
//! debug aid for humans, not a wire format, and carries no parsing
//! guarantees beyond being lossless over the field set.

/// Ordered field-mapping view of a record, with a default textual rendering
pub trait FieldMap {
    /// Name of the record type, as shown in the rendering
    fn type_name(&self) -> &'static str;

    /// Field names and rendered values, in declaration order
    fn fields(&self) -> Vec<(&'static str, String)>;

    /// Render the type name and full field mapping as one line
    fn render(&self) -> String {
        let body: Vec<String> = self
            .fields()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect();

        format!("{}: {{{}}}", self.type_name(), body.join(", "))
    }
}
