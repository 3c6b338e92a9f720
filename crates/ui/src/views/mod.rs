mod picker;
mod runner;
mod state;

pub use picker::PickerView;
pub use runner::RunnerView;
pub use state::{ViewState, view_state_from_resource};
