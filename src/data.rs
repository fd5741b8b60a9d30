pub mod secret;
pub mod simple_message;
pub mod tariff_query;
