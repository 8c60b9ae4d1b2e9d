pub(crate) mod clock;
mod modal;
mod planner;
