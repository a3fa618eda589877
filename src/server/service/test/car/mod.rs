use crate::server::{error::AppError, service::car::CarService};
use test_utils::{builder::TestBuilder, factory};

mod set_availability;
