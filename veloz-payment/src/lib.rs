pub mod gateway;
pub mod messages;
pub mod reconcile;

pub use gateway::{parse_pay_date, CallbackError, GatewayCallback, GatewayConfig};
pub use messages::failure_message;
pub use reconcile::{reconcile, ExpectedTransaction, PaymentError, PaymentOutcome};
