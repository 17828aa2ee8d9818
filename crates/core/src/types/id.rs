//! Integer IDs for catalog entries.
//!
//! Each entity gets its own newtype so a portfolio item ID can never be
//! submitted where a product ID is expected. IDs are `serde(transparent)`,
//! so they read straight from form fields and sit in the session as plain
//! numbers.

/// Define an `i32`-backed ID newtype.
///
/// Doc comments and attributes written before the name are applied to the
/// generated struct.
///
/// ```rust
/// # use border3d_core::define_id;
/// define_id!(
///     /// A filament spool.
///     SpoolId
/// );
///
/// let id = SpoolId::new(12);
/// assert_eq!(id.as_i32(), 12);
/// assert_eq!(id.to_string(), "12");
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

define_id!(
    /// A purchasable product in the featured collection.
    ProductId
);
define_id!(
    /// A showcase piece in the portfolio gallery.
    PortfolioItemId
);
define_id!(
    /// A customer testimonial.
    ReviewId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_form_value() {
        assert_eq!(ProductId::new(3).to_string(), "3");
        assert_eq!(ProductId::new(-1).to_string(), "-1");
    }

    #[test]
    fn test_id_is_a_bare_number_in_json() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, ProductId::new(7));
        assert!(serde_json::from_str::<ProductId>("\"seven\"").is_err());
    }

    #[test]
    fn test_ids_order_numerically() {
        assert!(ProductId::new(2) < ProductId::new(10));
    }
}
