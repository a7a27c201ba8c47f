//! UI Components

mod enroll_dialog;
mod fields;
mod footer;
mod header;

pub use enroll_dialog::EnrollDialog;
pub use fields::{
    file_of, text_of, CheckboxField, FileInputField, InputField, SelectField, TextareaField,
};
pub use footer::Footer;
pub use header::Header;
