pub mod criteria;
pub mod entry;
pub mod meta;
pub mod new_entry;
pub mod view;
