mod form_view;
mod hints;
mod record_list;
mod text_input;

pub use form_view::FormView;
pub use hints::{InstructionBar, StatusKind, StatusLine, StatusMessage};
pub use record_list::{RecordList, RecordListState};
pub use text_input::{InputFilter, TextInputState};
