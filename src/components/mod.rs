//! Scene components for the Hall of Zero Limits.

mod employee_card;
mod employee_modal;
mod extra_section;
mod hall_section;
mod hero;

pub use employee_card::EmployeeCard;
pub use employee_modal::EmployeeModal;
pub use extra_section::ExtraSection;
pub use hall_section::HallSection;
pub use hero::Hero;
