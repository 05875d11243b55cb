//! View-State Layer
//!
//! The editable side of the synchronization engine: field identifiers,
//! option lists, the view-state aggregate and the session that drives
//! the load/apply/cancel protocol over a config store.

pub mod fields;
pub mod options;
pub mod session;
pub mod view_state;

pub use fields::FieldId;
pub use options::{OptionEntry, OptionList};
pub use session::{SessionEvent, SessionPhase, SettingsSession};
pub use view_state::{FieldObserver, SettingsViewState};
