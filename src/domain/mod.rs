pub mod equipment;
pub mod pay_period;
pub mod record;
