// Building blocks
pub mod badge;
pub mod button;
pub mod card;
pub mod form_field;
pub mod page_header;
pub mod switch;
pub mod toast;

// Shell
pub mod nav;

// Domain widgets: depend on badge, button, card
pub mod alert_card;
pub mod google_button;
pub mod patient_table;
pub mod role_selector;
pub mod trend_chart;
pub mod vitals;

pub use alert_card::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_field::*;
pub use google_button::*;
pub use nav::*;
pub use page_header::*;
pub use patient_table::*;
pub use role_selector::*;
pub use switch::*;
pub use toast::*;
pub use trend_chart::*;
pub use vitals::*;

#[cfg(test)]
mod tests;
