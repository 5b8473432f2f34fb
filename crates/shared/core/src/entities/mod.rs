mod connectivity;
mod currency;
mod order;
mod order_report;
mod order_status;
mod position;
mod side;

pub use connectivity::ConnectivityStatus;
pub use currency::{Currency, CurrencyPair, ParseCurrencyError};
pub use order::{Order, OrderId};
pub use order_report::OrderStatusReport;
pub use order_status::OrderStatus;
pub use position::CurrencyPosition;
pub use side::Side;
