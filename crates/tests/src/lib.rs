#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod concurrency_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod validation_tests;

#[cfg(test)]
mod config_tests;
