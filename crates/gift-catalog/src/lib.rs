//! Gift domain types and the find-gifts wire contract.
//!
//! - **Gifts**: [`GiftResult`] records as the matching service returns them
//! - **Criteria**: the service's structured reading of the query
//! - **Money**: price conversion and fixed-currency display
//! - **Wire**: [`FindGiftsRequest`] and the validated [`FindGiftsResponse`]
//!
//! # Example
//!
//! ```
//! use gift_catalog::prelude::*;
//!
//! let body = br#"{"success": true, "gifts": [{"id": 1, "name": "Mug", "price": 9.5}]}"#;
//! match FindGiftsResponse::from_slice(body).unwrap() {
//!     FindGiftsResponse::Success { gifts, .. } => {
//!         let price = gifts[0].price_in(Currency::GBP).unwrap();
//!         assert_eq!(price.display(), "\u{00a3}9.50");
//!     }
//!     FindGiftsResponse::Failure { error } => panic!("{}", error),
//! }
//! ```

pub mod criteria;
pub mod error;
pub mod gift;
pub mod ids;
pub mod money;
pub mod wire;

pub use criteria::GiftCriteria;
pub use error::CatalogError;
pub use gift::GiftResult;
pub use ids::GiftId;
pub use money::{Currency, Money};
pub use wire::{FindGiftsRequest, FindGiftsResponse, FIND_GIFTS_PATH};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::criteria::GiftCriteria;
    pub use crate::error::CatalogError;
    pub use crate::gift::GiftResult;
    pub use crate::ids::GiftId;
    pub use crate::money::{Currency, Money};
    pub use crate::wire::{FindGiftsRequest, FindGiftsResponse};
}
