//! Macros for code generation in record types.
//!
//! Detail records own several addendum collections with identical add/get
//! method pairs; this macro keeps that boilerplate in one place.

/// Generate an add/get accessor pair for an addendum collection.
///
/// Expands to two methods inside an impl block:
/// - `$add(&mut self, item)` pushes onto the collection
/// - `$get(&self) -> &[$ty]` borrows the collection
///
/// # Example
///
/// ```ignore
/// impl CheckDetail {
///     define_addendum_accessors!(
///         check_detail_addendum_a,
///         add_check_detail_addendum_a,
///         check_detail_addenda_a,
///         CheckDetailAddendumA
///     );
/// }
/// ```
#[macro_export]
macro_rules! define_addendum_accessors {
    ($field:ident, $add:ident, $get:ident, $ty:ty) => {
        /// Attach an addendum to this item.
        pub fn $add(&mut self, addendum: $ty) {
            self.$field.push(addendum);
        }

        /// All addenda of this kind attached to this item.
        #[must_use]
        pub fn $get(&self) -> &[$ty] {
            &self.$field
        }
    };
}
