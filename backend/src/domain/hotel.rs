//! Hotel aggregate and its write-side draft.
//!
//! A [`Hotel`] is what the store hands back: it always carries the id the
//! store assigned. A [`HotelDraft`] is the caller-supplied field set used for
//! both creation and full overwrite on update.

use std::fmt;

use super::Error;

/// Opaque store-assigned hotel identifier.
///
/// No format is imposed; the id is whatever the store generated and is only
/// ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotelId(String);

impl HotelId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for HotelId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HotelId> for String {
    fn from(value: HotelId) -> Self {
        value.0
    }
}

/// Validated hotel fields without an identifier.
///
/// ## Invariants
/// - `name` is non-empty once trimmed. It is stored as supplied.
///
/// Rating, price and stars are unconstrained here; the only
/// range check on stars lives in the minimum-stars filter.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelDraft {
    name: String,
    rating: f64,
    location: String,
    price_per_night: i32,
    stars: i32,
}

impl HotelDraft {
    /// Validate and build a draft.
    ///
    /// # Errors
    /// Returns a `MissingRequiredParameter` error naming `nombre` when the
    /// name is blank.
    ///
    /// # Examples
    /// ```
    /// use hotel_backend::domain::HotelDraft;
    ///
    /// let draft = HotelDraft::new("Plaza", 4.5, "Madrid", 120, 4).unwrap();
    /// assert_eq!(draft.name(), "Plaza");
    /// assert!(HotelDraft::new("  ", 4.5, "Madrid", 120, 4).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        rating: f64,
        location: impl Into<String>,
        price_per_night: i32,
        stars: i32,
    ) -> Result<Self, Error> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::missing_parameter("nombre"));
        }
        Ok(Self {
            name,
            rating,
            location: location.into(),
            price_per_night,
            stars,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    pub fn price_per_night(&self) -> i32 {
        self.price_per_night
    }

    pub fn stars(&self) -> i32 {
        self.stars
    }

    /// Attach a store-assigned identifier.
    pub fn with_id(self, id: HotelId) -> Hotel {
        Hotel { id, draft: self }
    }
}

/// Persisted hotel record.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    id: HotelId,
    draft: HotelDraft,
}

impl Hotel {
    pub fn id(&self) -> &HotelId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.draft.name()
    }

    pub fn rating(&self) -> f64 {
        self.draft.rating()
    }

    pub fn location(&self) -> &str {
        self.draft.location()
    }

    pub fn price_per_night(&self) -> i32 {
        self.draft.price_per_night()
    }

    pub fn stars(&self) -> i32 {
        self.draft.stars()
    }

    /// Split into identifier and fields.
    pub fn into_parts(self) -> (HotelId, HotelDraft) {
        (self.id, self.draft)
    }
}
