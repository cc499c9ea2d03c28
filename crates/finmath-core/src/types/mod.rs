//! Domain types for the finmath library.

mod payment_type;
mod percent;

pub use payment_type::PaymentType;
pub use percent::from_percent;
