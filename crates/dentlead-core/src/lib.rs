//! Domain model for the clinic's lead-capture form: the country directory,
//! per-dial-code phone rules and validator, locale slugs, and the lead payload
//! handed to the CRM. No I/O lives here.

pub mod country;
pub mod error;
pub mod ids;
pub mod lead;
pub mod locale;
pub mod phone;
