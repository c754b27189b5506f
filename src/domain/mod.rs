mod country;
mod full_name;
mod position;
mod waitlist_email;
mod waitlist_entry;
mod waitlist_user;
// allow external `use` statements to skip `waitlist_entry` etc
pub use country::Country;
pub use full_name::FullName;
pub use position::Position;
pub use waitlist_email::WaitlistEmail;
pub use waitlist_entry::WaitlistEntry;
pub use waitlist_entry::WaitlistForm;
pub use waitlist_user::WaitlistAck;
pub use waitlist_user::WaitlistUser;
pub(crate) use waitlist_user::WaitlistUsers;
